use super::adapter::FieldAdapter;
use super::field_container::{FieldContainer, FieldInstance};
use crate::core::{ConfigManagerOperations, FieldConfig};
use crate::platform_layer::{
    AppEvent, FieldId, FieldValue, ModalId, PlatformCommand, PlatformError, PlatformEventHandler,
    PlatformResult,
};
use crate::ui_description_layer::theme::FieldTheme;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

// Each registration owns the request ids in `[n << 32, (n + 1) << 32)`.
const REQUEST_RANGE_BITS: u32 = 32;

/*
 * Manages every mounted field in a platform-agnostic manner. It processes UI
 * events received from the platform layer, routes each one to the field it
 * names, and queues the resulting commands for the platform to execute.
 *
 * Fields are independent: each owns its overlay state, so several overlays may
 * be open at once (a date and a time field side by side, a select inside a
 * modal). Fields can be grouped by the modal hosting them; closing the modal
 * closes every overlay inside it. Events for a field that is no longer
 * registered, including measurement replies that arrive after an unmount, are
 * dropped.
 */
pub struct FieldsLogic {
    pub(crate) fields: HashMap<FieldId, Box<dyn FieldInstance>>,
    pub(crate) modal_members: HashMap<ModalId, Vec<FieldId>>,
    pub(crate) config: FieldConfig,
    pub(crate) theme: FieldTheme,
    registrations: u64,
    command_queue: VecDeque<PlatformCommand>,
}

impl FieldsLogic {
    /*
     * Loads the field configuration through `config_manager`. A configuration
     * that cannot be read is logged and replaced by the defaults so the fields
     * still render.
     */
    pub fn new(config_manager: Arc<dyn ConfigManagerOperations>, app_name: &str) -> Self {
        let config = match config_manager.load_field_config(app_name) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "FieldsLogic: Failed to load field config for '{app_name}': {e}. Using defaults."
                );
                FieldConfig::default()
            }
        };
        Self::with_config(config)
    }

    pub fn with_config(config: FieldConfig) -> Self {
        let theme = FieldTheme::from_config(&config.theme);
        FieldsLogic {
            fields: HashMap::new(),
            modal_members: HashMap::new(),
            config,
            theme,
            registrations: 0,
            command_queue: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /*
     * Registers a field, applying the configured geometry and theme, and queues
     * its initial styles. `modal` names the modal sheet hosting the field, if
     * any. Every registration gets its own range of measurement request ids, so
     * a reply still in flight for an unmounted field is never taken by a field
     * registered later under the same id.
     */
    pub fn register_field<A: FieldAdapter>(
        &mut self,
        field: FieldContainer<A>,
        modal: Option<ModalId>,
    ) -> PlatformResult<()> {
        let field_id = field.field_id();
        if self.fields.contains_key(&field_id) {
            log::error!("FieldsLogic: {field_id} is already registered.");
            return Err(PlatformError::DuplicateField(field_id));
        }
        self.registrations += 1;
        let request_floor = self.registrations << REQUEST_RANGE_BITS;
        let mut field: Box<dyn FieldInstance> = Box::new(
            field
                .with_geometry(self.config.geometry())
                .with_theme(self.theme)
                .with_request_floor(request_floor),
        );
        field.mount(&mut self.command_queue);
        self.fields.insert(field_id, field);
        if let Some(modal_id) = modal {
            self.modal_members.entry(modal_id).or_default().push(field_id);
        }
        Ok(())
    }

    // Removes a field, hiding its overlay first if one is showing.
    pub fn unregister_field(&mut self, field_id: FieldId) -> PlatformResult<()> {
        let mut field = self
            .fields
            .remove(&field_id)
            .ok_or(PlatformError::UnknownField(field_id))?;
        field.dismiss(&mut self.command_queue);
        for members in self.modal_members.values_mut() {
            members.retain(|id| *id != field_id);
        }
        self.modal_members.retain(|_, members| !members.is_empty());
        log::debug!("FieldsLogic: Unmounted {field_id} ({}).", field.kind());
        Ok(())
    }

    // Closes every overlay hosted in `modal_id`. The fields stay registered.
    pub fn close_modal(&mut self, modal_id: ModalId) -> PlatformResult<()> {
        let members = self
            .modal_members
            .get(&modal_id)
            .ok_or(PlatformError::UnknownModal(modal_id))?;
        for field_id in members {
            if let Some(field) = self.fields.get_mut(field_id) {
                field.dismiss(&mut self.command_queue);
            }
        }
        Ok(())
    }

    pub fn field_value(&self, field_id: FieldId) -> Option<FieldValue> {
        self.fields.get(&field_id).map(|field| field.value())
    }

    pub fn field_radius(&self, field_id: FieldId) -> Option<f64> {
        self.fields.get(&field_id).map(|field| field.radius())
    }

    pub fn is_overlay_open(&self, field_id: FieldId) -> bool {
        self.fields
            .get(&field_id)
            .is_some_and(|field| field.is_overlay_open())
    }

    pub fn open_overlay_count(&self) -> usize {
        self.fields
            .values()
            .filter(|field| field.is_overlay_open())
            .count()
    }

    fn field_mut(&mut self, field_id: FieldId) -> Option<&mut dyn FieldInstance> {
        match self.fields.get_mut(&field_id) {
            Some(field) => Some(field.as_mut()),
            None => {
                log::debug!(
                    "FieldsLogic: Dropping event: {}.",
                    PlatformError::UnknownField(field_id)
                );
                None
            }
        }
    }
}

impl PlatformEventHandler for FieldsLogic {
    fn handle_event(&mut self, event: AppEvent) {
        log::trace!("FieldsLogic: Handling {event:?}");
        // `field_mut` borrows all of `self`, so commands collect in a detached queue.
        let mut queue = std::mem::take(&mut self.command_queue);
        match event {
            AppEvent::FieldActivated { field_id } => {
                if let Some(field) = self.field_mut(field_id) {
                    field.activate(&mut queue);
                }
            }
            AppEvent::FieldDismissed { field_id } => {
                if let Some(field) = self.field_mut(field_id) {
                    field.dismiss(&mut queue);
                }
            }
            AppEvent::FieldFocusChanged { field_id, focused } => {
                if let Some(field) = self.field_mut(field_id) {
                    field.focus_changed(focused, &mut queue);
                }
            }
            AppEvent::FieldLaidOut { field_id, height } => {
                if let Some(field) = self.field_mut(field_id) {
                    field.laid_out(height, &mut queue);
                }
            }
            AppEvent::NodeMeasured {
                field_id,
                node,
                request_id,
                rect,
            } => {
                if let Some(field) = self.field_mut(field_id) {
                    field.node_measured(node, request_id, rect, &mut queue);
                }
            }
            AppEvent::AdapterInput { field_id, input } => {
                if let Some(field) = self.field_mut(field_id) {
                    field.adapter_input(input, &mut queue);
                }
            }
            AppEvent::FieldValueAssigned { field_id, value } => {
                if let Some(field) = self.field_mut(field_id) {
                    if !field.assign_value(&value, &mut queue) {
                        log::warn!(
                            "FieldsLogic: {field_id} ({}) cannot hold {value:?}; ignored.",
                            field.kind()
                        );
                    }
                }
            }
            AppEvent::FieldDisabledChanged { field_id, disabled } => {
                if let Some(field) = self.field_mut(field_id) {
                    field.set_disabled(disabled, &mut queue);
                }
            }
            AppEvent::FieldUnmounted { field_id } => {
                self.command_queue = queue;
                if let Err(e) = self.unregister_field(field_id) {
                    log::warn!("FieldsLogic: Unmount failed: {e}");
                }
                return;
            }
            AppEvent::ModalClosed { modal_id } => {
                self.command_queue = queue;
                if let Err(e) = self.close_modal(modal_id) {
                    log::warn!("FieldsLogic: Closing modal failed: {e}");
                }
                return;
            }
        }
        self.command_queue = queue;
    }

    fn on_quit(&mut self) {
        log::debug!(
            "FieldsLogic: on_quit with {} field(s), {} overlay(s) open.",
            self.fields.len(),
            self.open_overlay_count()
        );
    }

    fn try_dequeue_command(&mut self) -> Option<PlatformCommand> {
        self.command_queue.pop_front()
    }
}
