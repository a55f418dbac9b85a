/*
 * The generic field container: it renders a label box and an input box around
 * one adapter and is the single owner of the field's value. It computes the
 * shared radius, hands the adapter its props (value, radius, wrapper node),
 * and translates the adapter's outbox into platform commands. Every value the
 * adapter reports is stored and forwarded to the caller as `ValueCommitted`.
 *
 * `FieldInstance` erases the adapter type so the presenter can keep fields of
 * every kind in one registry.
 */
use super::adapter::{AdapterMessage, AdapterProps, FieldAdapter, Outbox};
use super::field_value::FieldValueCodec;
use crate::core::{
    FieldSpec, FieldVisualState, GeometryConfig, MeasuredRect, RequestId, compute_radius,
};
use crate::platform_layer::{AdapterInput, FieldId, FieldValue, NodeHandle, PlatformCommand};
use crate::ui_description_layer::theme::FieldTheme;
use crate::ui_description_layer::{build_field_box_styles, build_overlay_box_style};
use std::collections::VecDeque;

pub trait FieldInstance: Send {
    fn field_id(&self) -> FieldId;
    fn kind(&self) -> &'static str;
    fn value(&self) -> FieldValue;
    fn radius(&self) -> f64;
    fn is_overlay_open(&self) -> bool;
    fn is_disabled(&self) -> bool;

    // Emits the initial box styles once the field is registered.
    fn mount(&mut self, commands: &mut VecDeque<PlatformCommand>);
    fn activate(&mut self, commands: &mut VecDeque<PlatformCommand>);
    fn dismiss(&mut self, commands: &mut VecDeque<PlatformCommand>);
    fn focus_changed(&mut self, focused: bool, commands: &mut VecDeque<PlatformCommand>);
    fn laid_out(&mut self, height: f64, commands: &mut VecDeque<PlatformCommand>);
    fn node_measured(
        &mut self,
        node: NodeHandle,
        request_id: RequestId,
        rect: Option<MeasuredRect>,
        commands: &mut VecDeque<PlatformCommand>,
    );
    fn adapter_input(&mut self, input: AdapterInput, commands: &mut VecDeque<PlatformCommand>);
    // Returns false if `value` is the wrong kind for this field.
    fn assign_value(&mut self, value: &FieldValue, commands: &mut VecDeque<PlatformCommand>)
    -> bool;
    fn set_disabled(&mut self, disabled: bool, commands: &mut VecDeque<PlatformCommand>);
}

pub struct FieldContainer<A: FieldAdapter> {
    field_id: FieldId,
    spec: FieldSpec,
    adapter: A,
    value: A::Value,
    input_node: NodeHandle,
    container_node: Option<NodeHandle>,
    wrapper_height: Option<f64>,
    radius: f64,
    visual: FieldVisualState,
    touched: bool,
    geometry: GeometryConfig,
    theme: FieldTheme,
}

fn adapter_props<'a, V>(
    value: &'a V,
    spec: &FieldSpec,
    radius: f64,
    input_node: NodeHandle,
    container_node: Option<NodeHandle>,
    geometry: GeometryConfig,
) -> AdapterProps<'a, V> {
    AdapterProps {
        value,
        disabled: spec.disabled,
        required: spec.required,
        calculated_radius: radius,
        container_ref: container_node,
        input_ref: input_node,
        geometry,
    }
}

impl<A: FieldAdapter> FieldContainer<A> {
    pub fn new(
        field_id: FieldId,
        spec: FieldSpec,
        adapter: A,
        value: A::Value,
        input_node: NodeHandle,
    ) -> Self {
        let geometry = GeometryConfig::default();
        FieldContainer {
            field_id,
            radius: compute_radius(spec.border_style, None, &geometry),
            spec,
            adapter,
            value,
            input_node,
            container_node: None,
            wrapper_height: None,
            visual: FieldVisualState::default(),
            touched: false,
            geometry,
            theme: FieldTheme::default(),
        }
    }

    // The bordered wrapper the adapter should measure instead of its inner node.
    pub fn with_container_node(mut self, node: NodeHandle) -> Self {
        self.container_node = Some(node);
        self
    }

    pub fn with_geometry(mut self, geometry: GeometryConfig) -> Self {
        self.geometry = geometry;
        self.radius = compute_radius(self.spec.border_style, self.wrapper_height, &geometry);
        self
    }

    pub fn with_theme(mut self, theme: FieldTheme) -> Self {
        self.theme = theme;
        self
    }

    /*
     * Moves the adapter's measurement request ids above `floor`. A field
     * registered again under the same id must not accept replies addressed to
     * its previous registration.
     */
    pub fn with_request_floor(mut self, floor: u64) -> Self {
        self.adapter.start_requests_after(floor);
        self
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn typed_value(&self) -> &A::Value {
        &self.value
    }

    // Recomputes the radius from the latest wrapper height. Returns true if it changed.
    fn update_height(&mut self, height: f64) -> bool {
        self.wrapper_height = Some(height);
        let radius = compute_radius(self.spec.border_style, self.wrapper_height, &self.geometry);
        let changed = radius != self.radius;
        if changed {
            log::trace!(
                "FieldContainer: {} radius {} -> {radius} (height {height}).",
                self.field_id,
                self.radius
            );
        }
        self.radius = radius;
        changed
    }

    fn push_styles(&self, commands: &mut VecDeque<PlatformCommand>) {
        let mut state = self.visual;
        state.show_error =
            self.spec.required && self.touched && self.value.to_field_value().is_empty();
        commands.push_back(PlatformCommand::ApplyFieldStyles {
            field_id: self.field_id,
            styles: build_field_box_styles(&self.spec, self.radius, state, &self.theme),
        });
    }

    fn apply_messages(
        &mut self,
        outbox: Outbox<A::Value>,
        commands: &mut VecDeque<PlatformCommand>,
    ) {
        let field_id = self.field_id;
        let mut restyle = false;
        for message in outbox {
            match message {
                AdapterMessage::Changed(next) => {
                    log::debug!("FieldContainer: {field_id} changed to {next:?}.");
                    self.value = next;
                    self.touched = true;
                    restyle = true;
                    commands.push_back(PlatformCommand::ValueCommitted {
                        field_id,
                        value: self.value.to_field_value(),
                    });
                }
                AdapterMessage::DropdownStateChanged(open) => {
                    self.visual.overlay_open = open;
                    restyle = true;
                }
                AdapterMessage::Measure { node, request_id } => {
                    commands.push_back(PlatformCommand::MeasureNode {
                        field_id,
                        node,
                        request_id,
                    });
                }
                AdapterMessage::ShowOverlay {
                    layout,
                    corner_radii,
                } => {
                    commands.push_back(PlatformCommand::ShowOverlay {
                        field_id,
                        layout,
                        corner_radii,
                        style: build_overlay_box_style(self.radius, &self.theme),
                    });
                }
                AdapterMessage::OverlayContent(content) => {
                    commands.push_back(PlatformCommand::UpdateOverlayContent { field_id, content });
                }
                AdapterMessage::HideOverlay => {
                    commands.push_back(PlatformCommand::HideOverlay { field_id });
                }
                AdapterMessage::Focus => restyle |= self.set_focus(true, commands),
                AdapterMessage::Blur => restyle |= self.set_focus(false, commands),
                AdapterMessage::OpenFilePicker { multiple, accept } => {
                    commands.push_back(PlatformCommand::ShowFilePicker {
                        field_id,
                        multiple,
                        accept,
                    });
                }
            }
        }
        if restyle {
            self.push_styles(commands);
        }
    }

    // Returns true if the focus state changed.
    fn set_focus(&mut self, focused: bool, commands: &mut VecDeque<PlatformCommand>) -> bool {
        if self.visual.focused == focused {
            return false;
        }
        self.visual.focused = focused;
        if !focused {
            self.touched = true;
        }
        commands.push_back(PlatformCommand::FocusReported {
            field_id: self.field_id,
            focused,
        });
        true
    }
}

impl<A: FieldAdapter> FieldInstance for FieldContainer<A> {
    fn field_id(&self) -> FieldId {
        self.field_id
    }

    fn kind(&self) -> &'static str {
        self.adapter.kind()
    }

    fn value(&self) -> FieldValue {
        self.value.to_field_value()
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn is_overlay_open(&self) -> bool {
        self.adapter.is_open()
    }

    fn is_disabled(&self) -> bool {
        self.spec.disabled
    }

    fn mount(&mut self, commands: &mut VecDeque<PlatformCommand>) {
        log::debug!(
            "FieldContainer: Mounted {} '{}' ({}).",
            self.field_id,
            self.spec.label,
            self.adapter.kind()
        );
        self.push_styles(commands);
    }

    fn activate(&mut self, commands: &mut VecDeque<PlatformCommand>) {
        let mut outbox = Vec::new();
        let props = adapter_props(
            &self.value,
            &self.spec,
            self.radius,
            self.input_node,
            self.container_node,
            self.geometry,
        );
        self.adapter.activate(&props, &mut outbox);
        self.apply_messages(outbox, commands);
    }

    fn dismiss(&mut self, commands: &mut VecDeque<PlatformCommand>) {
        let mut outbox = Vec::new();
        self.adapter.dismiss(&mut outbox);
        self.apply_messages(outbox, commands);
    }

    fn focus_changed(&mut self, focused: bool, commands: &mut VecDeque<PlatformCommand>) {
        if self.set_focus(focused, commands) {
            self.push_styles(commands);
        }
    }

    fn laid_out(&mut self, height: f64, commands: &mut VecDeque<PlatformCommand>) {
        if self.update_height(height) {
            self.push_styles(commands);
        }
    }

    /*
     * A measurement of the bordered wrapper also refreshes the wrapper height,
     * so a `Full` field opens with the radius of its current height and the
     * overlay's bottom corners match it.
     */
    fn node_measured(
        &mut self,
        node: NodeHandle,
        request_id: RequestId,
        rect: Option<MeasuredRect>,
        commands: &mut VecDeque<PlatformCommand>,
    ) {
        if let Some(rect) = rect {
            if Some(node) == self.container_node && self.update_height(rect.height) {
                self.push_styles(commands);
            }
        }
        let mut outbox = Vec::new();
        let props = adapter_props(
            &self.value,
            &self.spec,
            self.radius,
            self.input_node,
            self.container_node,
            self.geometry,
        );
        self.adapter.measured(request_id, rect, &props, &mut outbox);
        self.apply_messages(outbox, commands);
    }

    fn adapter_input(&mut self, input: AdapterInput, commands: &mut VecDeque<PlatformCommand>) {
        if self.spec.disabled {
            log::debug!("FieldContainer: {} is disabled; input dropped.", self.field_id);
            return;
        }
        let mut outbox = Vec::new();
        let props = adapter_props(
            &self.value,
            &self.spec,
            self.radius,
            self.input_node,
            self.container_node,
            self.geometry,
        );
        self.adapter.handle_input(input, &props, &mut outbox);
        self.apply_messages(outbox, commands);
    }

    // The caller already knows this value, so nothing is committed back.
    fn assign_value(
        &mut self,
        value: &FieldValue,
        commands: &mut VecDeque<PlatformCommand>,
    ) -> bool {
        let Some(next) = A::Value::from_field_value(value) else {
            return false;
        };
        self.value = next;
        self.adapter.value_assigned(&self.value);
        let mut outbox = Vec::new();
        self.adapter.refresh_content(&self.value, &mut outbox);
        self.apply_messages(outbox, commands);
        self.push_styles(commands);
        true
    }

    fn set_disabled(&mut self, disabled: bool, commands: &mut VecDeque<PlatformCommand>) {
        if self.spec.disabled == disabled {
            return;
        }
        self.spec.disabled = disabled;
        if disabled {
            self.dismiss(commands);
        }
        self.push_styles(commands);
    }
}
