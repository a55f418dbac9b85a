use super::adapters::{
    CheckboxAdapter, ColorAdapter, DateAdapter, SelectAdapter, SelectOption, TimeAdapter,
};
use super::field_container::FieldContainer;
use super::handler::*;
use crate::app_logic::ui_constants::*;

use crate::core::{
    BorderStyle, ColorValue, ConfigError, ConfigManagerOperations, CornerRadii, FieldConfig,
    FieldSpec, MeasuredRect, OverlayLayout, WeekStart, hex_to_rgb, rgb_to_hex, rgb_to_hsv,
};
use crate::platform_layer::{
    AdapterInput, AppEvent, ColorEdit, FieldBoxStyles, FieldId, FieldValue, MeasurementMode,
    ModalId, PlatformCommand, PlatformError, PlatformEventHandler, PlatformInterface,
    SyntheticMeasurer,
};
use crate::ui_description_layer::build_overlay_box_style;
use crate::ui_description_layer::theme::define_default_theme;

use std::sync::{Arc, Mutex};
use time::{Date, Month, Time};

/*
 * This module contains unit tests for `FieldsLogic` from the `super::handler`
 * module. Events are driven through the headless `PlatformInterface` with a
 * `SyntheticMeasurer` standing in for native view measurement, so each test
 * sees exactly the commands a real platform would render. Tests focus on the
 * open/measure/close protocol, radius agreement between field and overlay,
 * independence of nested fields, and the unmount and double-dismiss races.
 */

// --- Mock ConfigManager ---
struct MockConfigManager {
    config: Mutex<Option<FieldConfig>>,
    requested_app_names: Mutex<Vec<String>>,
}

impl MockConfigManager {
    fn new(config: Option<FieldConfig>) -> Self {
        MockConfigManager {
            config: Mutex::new(config),
            requested_app_names: Mutex::new(Vec::new()),
        }
    }
}

impl ConfigManagerOperations for MockConfigManager {
    // `None` simulates a platform without a config directory.
    fn load_field_config(&self, app_name: &str) -> Result<FieldConfig, ConfigError> {
        self.requested_app_names
            .lock()
            .unwrap()
            .push(app_name.to_string());
        self.config
            .lock()
            .unwrap()
            .clone()
            .ok_or(ConfigError::NoConfigDirectory)
    }
}
// --- End MockConfigManager ---

struct Harness {
    logic: Arc<Mutex<FieldsLogic>>,
    handler: Arc<Mutex<dyn PlatformEventHandler>>,
    platform: PlatformInterface,
    measurer: Arc<SyntheticMeasurer>,
}

impl Harness {
    fn new(mode: MeasurementMode) -> Self {
        crate::initialize_logging(); // Ensure logging is initialized for tests
        let config_manager = Arc::new(MockConfigManager::new(Some(FieldConfig::default())));
        let logic = Arc::new(Mutex::new(FieldsLogic::new(
            config_manager as Arc<dyn ConfigManagerOperations>,
            "FieldOverlayTest",
        )));
        let measurer = Arc::new(SyntheticMeasurer::new());
        let platform = PlatformInterface::new("FieldOverlayTest".to_string(), measurer.clone())
            .with_measurement_mode(mode);
        Harness {
            handler: logic.clone(),
            logic,
            platform,
            measurer,
        }
    }

    fn register<A: super::FieldAdapter>(&self, field: FieldContainer<A>, modal: Option<ModalId>) {
        self.logic
            .lock()
            .unwrap()
            .register_field(field, modal)
            .unwrap();
    }

    fn dispatch(&mut self, event: AppEvent) -> Vec<PlatformCommand> {
        self.platform.dispatch_event(&self.handler, event).unwrap();
        self.platform.take_rendered_commands()
    }

    fn flush(&mut self) -> Vec<PlatformCommand> {
        self.platform.flush_measurements(&self.handler).unwrap();
        self.platform.take_rendered_commands()
    }

    fn is_open(&self, field_id: FieldId) -> bool {
        self.logic.lock().unwrap().is_overlay_open(field_id)
    }
}

// Helper to check for specific commands, optionally checking properties.
fn find_command<'a, F>(cmds: &'a [PlatformCommand], mut predicate: F) -> Option<&'a PlatformCommand>
where
    F: FnMut(&PlatformCommand) -> bool,
{
    cmds.iter().find(|&cmd| predicate(cmd))
}

fn count_hide_overlay(cmds: &[PlatformCommand], field_id: FieldId) -> usize {
    cmds.iter()
        .filter(|cmd| **cmd == PlatformCommand::HideOverlay { field_id })
        .count()
}

fn last_styles(cmds: &[PlatformCommand], field_id: FieldId) -> Option<FieldBoxStyles> {
    cmds.iter().rev().find_map(|cmd| match cmd {
        PlatformCommand::ApplyFieldStyles { field_id: id, styles } if *id == field_id => {
            Some(*styles)
        }
        _ => None,
    })
}

fn show_overlay(cmds: &[PlatformCommand]) -> Option<(OverlayLayout, CornerRadii)> {
    cmds.iter().find_map(|cmd| match cmd {
        PlatformCommand::ShowOverlay {
            layout,
            corner_radii,
            ..
        } => Some((*layout, *corner_radii)),
        _ => None,
    })
}

fn role_field() -> FieldContainer<SelectAdapter<String>> {
    let adapter = SelectAdapter::new(vec![
        SelectOption::new("Administrator", "admin".to_string()),
        SelectOption::new("Editor", "editor".to_string()),
        SelectOption::new("Viewer", "viewer".to_string()),
    ]);
    FieldContainer::new(
        ROLE_FIELD_ID,
        FieldSpec::new("Role").required(true),
        adapter,
        None,
        ROLE_INPUT_NODE,
    )
    .with_container_node(ROLE_WRAPPER_NODE)
}

fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

#[test]
fn test_select_overlay_attaches_below_field_and_closes_on_choice() {
    // Arrange
    let mut harness = Harness::new(MeasurementMode::Immediate);
    harness
        .measurer
        .set_rect(ROLE_WRAPPER_NODE, MeasuredRect::new(10.0, 50.0, 200.0, 44.0));
    harness.register(role_field(), None);

    // Act
    let cmds = harness.dispatch(AppEvent::FieldActivated { field_id: ROLE_FIELD_ID });

    // Assert
    let (layout, corner_radii) = show_overlay(&cmds).expect("overlay should be shown");
    assert_eq!(layout, OverlayLayout { x: 10.0, y: 92.0, width: 200.0 });
    assert_eq!(corner_radii, CornerRadii::for_overlay(8.0));
    assert!(find_command(&cmds, |cmd| matches!(
        cmd,
        PlatformCommand::ShowOverlay { style, .. }
            if *style == build_overlay_box_style(8.0, &define_default_theme())
    ))
    .is_some());
    assert!(find_command(&cmds, |cmd| matches!(
        cmd,
        PlatformCommand::UpdateOverlayContent { .. }
    ))
    .is_some());
    let open_styles = last_styles(&cmds, ROLE_FIELD_ID).unwrap();
    assert!(!open_styles.input.bottom_border_visible);
    assert_eq!(open_styles.input.corner_radii.bottom_right, 0.0);
    assert!(harness.is_open(ROLE_FIELD_ID));

    // Act: choose "Editor".
    let cmds = harness.dispatch(AppEvent::AdapterInput {
        field_id: ROLE_FIELD_ID,
        input: AdapterInput::OptionChosen(1),
    });

    // Assert
    assert!(find_command(&cmds, |cmd| *cmd
        == PlatformCommand::ValueCommitted {
            field_id: ROLE_FIELD_ID,
            value: FieldValue::Text("editor".to_string()),
        })
    .is_some());
    assert_eq!(count_hide_overlay(&cmds, ROLE_FIELD_ID), 1);
    let closed_styles = last_styles(&cmds, ROLE_FIELD_ID).unwrap();
    assert!(closed_styles.input.bottom_border_visible);
    assert_eq!(closed_styles.input.corner_radii.bottom_right, 8.0);
    assert_eq!(closed_styles.label.corner_radii.bottom_left, 8.0);
    assert!(!harness.is_open(ROLE_FIELD_ID));
}

#[test]
fn test_full_border_overlay_radius_follows_measured_height() {
    // Arrange
    let mut harness = Harness::new(MeasurementMode::Immediate);
    harness
        .measurer
        .set_rect(ACCENT_WRAPPER_NODE, MeasuredRect::new(0.0, 100.0, 320.0, 50.0));
    let accent = ColorValue::opaque(0x3e, 0x72, 0xfb);
    harness.register(
        FieldContainer::new(
            ACCENT_FIELD_ID,
            FieldSpec::new("Accent").border_style(BorderStyle::Full),
            ColorAdapter::new(accent),
            accent,
            ACCENT_INPUT_NODE,
        )
        .with_container_node(ACCENT_WRAPPER_NODE),
        None,
    );
    // No layout pass yet: the safe default applies.
    assert_eq!(
        harness.logic.lock().unwrap().field_radius(ACCENT_FIELD_ID),
        Some(40.0)
    );

    // Act
    let cmds = harness.dispatch(AppEvent::FieldActivated { field_id: ACCENT_FIELD_ID });

    // Assert: the wrapper measurement updates the radius before the overlay opens.
    let (layout, corner_radii) = show_overlay(&cmds).unwrap();
    assert_eq!(layout, OverlayLayout { x: 0.0, y: 148.0, width: 320.0 });
    assert_eq!(corner_radii, CornerRadii::for_overlay(25.0));
    let styles = last_styles(&cmds, ACCENT_FIELD_ID).unwrap();
    assert_eq!(styles.radius, 25.0);
    assert_eq!(styles.label.corner_radii.top_left, 25.0);

    // A later layout pass with a taller wrapper recomputes the radius.
    let cmds = harness.dispatch(AppEvent::FieldLaidOut {
        field_id: ACCENT_FIELD_ID,
        height: 64.0,
    });
    assert_eq!(last_styles(&cmds, ACCENT_FIELD_ID).unwrap().radius, 32.0);
}

#[test]
fn test_inner_node_fallback_compensates_for_border() {
    let mut harness = Harness::new(MeasurementMode::Immediate);
    harness
        .measurer
        .set_rect(ROLE_INPUT_NODE, MeasuredRect::new(11.0, 51.0, 198.0, 42.0));
    let adapter = SelectAdapter::new(vec![SelectOption::new("Only", 1i64)]);
    harness.register(
        FieldContainer::new(ROLE_FIELD_ID, FieldSpec::new("Role"), adapter, None, ROLE_INPUT_NODE),
        None,
    );

    let cmds = harness.dispatch(AppEvent::FieldActivated { field_id: ROLE_FIELD_ID });

    let (layout, _) = show_overlay(&cmds).unwrap();
    assert_eq!(layout, OverlayLayout { x: 10.0, y: 91.0, width: 200.0 });
    assert_eq!(harness.measurer.measure_calls(), vec![ROLE_INPUT_NODE]);
}

#[test]
fn test_nested_fields_keep_independent_overlays() {
    // Arrange: date and time side by side in one modal.
    let mut harness = Harness::new(MeasurementMode::Immediate);
    harness
        .measurer
        .set_rect(START_DATE_WRAPPER_NODE, MeasuredRect::new(0.0, 0.0, 150.0, 40.0));
    harness
        .measurer
        .set_rect(START_TIME_WRAPPER_NODE, MeasuredRect::new(160.0, 0.0, 100.0, 40.0));
    harness.register(
        FieldContainer::new(
            START_DATE_FIELD_ID,
            FieldSpec::new("Start date"),
            DateAdapter::new(WeekStart::Monday).with_today(date(2024, Month::March, 15)),
            None,
            START_DATE_INPUT_NODE,
        )
        .with_container_node(START_DATE_WRAPPER_NODE),
        Some(USER_MODAL_ID),
    );
    harness.register(
        FieldContainer::new(
            START_TIME_FIELD_ID,
            FieldSpec::new("Start time"),
            TimeAdapter::new(15),
            None,
            START_TIME_INPUT_NODE,
        )
        .with_container_node(START_TIME_WRAPPER_NODE),
        Some(USER_MODAL_ID),
    );

    // Act
    harness.dispatch(AppEvent::FieldActivated { field_id: START_DATE_FIELD_ID });
    harness.dispatch(AppEvent::FieldActivated { field_id: START_TIME_FIELD_ID });
    assert!(harness.is_open(START_DATE_FIELD_ID));
    assert!(harness.is_open(START_TIME_FIELD_ID));

    let cmds = harness.dispatch(AppEvent::AdapterInput {
        field_id: START_DATE_FIELD_ID,
        input: AdapterInput::DateChosen(date(2024, Month::March, 20)),
    });

    // Assert: only the date overlay closed, and only the date field was restyled.
    assert!(!harness.is_open(START_DATE_FIELD_ID));
    assert!(harness.is_open(START_TIME_FIELD_ID));
    assert!(cmds.iter().all(|cmd| cmd.field_id() == START_DATE_FIELD_ID));

    // Closing the modal closes what is still open inside it.
    let cmds = harness.dispatch(AppEvent::ModalClosed { modal_id: USER_MODAL_ID });
    assert_eq!(count_hide_overlay(&cmds, START_TIME_FIELD_ID), 1);
    assert_eq!(count_hide_overlay(&cmds, START_DATE_FIELD_ID), 0);
    assert_eq!(harness.logic.lock().unwrap().open_overlay_count(), 0);
}

#[test]
fn test_unmount_during_measurement_drops_late_reply() {
    // Arrange
    let mut harness = Harness::new(MeasurementMode::Deferred);
    harness
        .measurer
        .set_rect(ROLE_WRAPPER_NODE, MeasuredRect::new(10.0, 50.0, 200.0, 44.0));
    harness.register(role_field(), None);
    harness.dispatch(AppEvent::FieldActivated { field_id: ROLE_FIELD_ID });
    assert_eq!(harness.platform.pending_measurement_count(), 1);

    // Act
    harness.dispatch(AppEvent::FieldUnmounted { field_id: ROLE_FIELD_ID });
    let cmds = harness.flush();

    // Assert
    assert!(show_overlay(&cmds).is_none());
    assert!(cmds.is_empty());
    assert!(harness.logic.lock().unwrap().fields.is_empty());
}

#[test]
fn test_reregistered_field_ignores_reply_meant_for_previous_mount() {
    // Arrange
    let mut harness = Harness::new(MeasurementMode::Deferred);
    harness
        .measurer
        .set_rect(ROLE_WRAPPER_NODE, MeasuredRect::new(10.0, 50.0, 200.0, 44.0));
    harness.register(role_field(), None);
    harness.dispatch(AppEvent::FieldActivated { field_id: ROLE_FIELD_ID });
    harness.dispatch(AppEvent::FieldUnmounted { field_id: ROLE_FIELD_ID });

    harness
        .measurer
        .set_rect(ROLE_WRAPPER_NODE, MeasuredRect::new(10.0, 300.0, 200.0, 44.0));
    harness.register(role_field(), None);
    harness.dispatch(AppEvent::FieldActivated { field_id: ROLE_FIELD_ID });
    assert_eq!(harness.platform.pending_measurement_count(), 2);

    // Act
    let cmds = harness.flush();

    // Assert
    let shown: Vec<OverlayLayout> = cmds
        .iter()
        .filter_map(|cmd| match cmd {
            PlatformCommand::ShowOverlay { layout, .. } => Some(*layout),
            _ => None,
        })
        .collect();
    assert_eq!(shown, vec![OverlayLayout { x: 10.0, y: 342.0, width: 200.0 }]);
    assert!(harness.is_open(ROLE_FIELD_ID));
}

#[test]
fn test_measurement_of_vanished_node_drops_open_silently() {
    let mut harness = Harness::new(MeasurementMode::Immediate);
    harness.register(role_field(), None);

    // The wrapper has no rectangle: the node is gone.
    let cmds = harness.dispatch(AppEvent::FieldActivated { field_id: ROLE_FIELD_ID });
    assert!(show_overlay(&cmds).is_none());
    assert!(!harness.is_open(ROLE_FIELD_ID));

    // A later activation measures again and opens.
    harness
        .measurer
        .set_rect(ROLE_WRAPPER_NODE, MeasuredRect::new(10.0, 50.0, 200.0, 44.0));
    let cmds = harness.dispatch(AppEvent::FieldActivated { field_id: ROLE_FIELD_ID });
    assert!(show_overlay(&cmds).is_some());
    assert_eq!(
        harness.measurer.measure_calls(),
        vec![ROLE_WRAPPER_NODE, ROLE_WRAPPER_NODE]
    );
}

#[test]
fn test_dismiss_during_measurement_cancels_open() {
    let mut harness = Harness::new(MeasurementMode::Deferred);
    harness
        .measurer
        .set_rect(ROLE_WRAPPER_NODE, MeasuredRect::new(10.0, 50.0, 200.0, 44.0));
    harness.register(role_field(), None);

    harness.dispatch(AppEvent::FieldActivated { field_id: ROLE_FIELD_ID });
    let cmds = harness.dispatch(AppEvent::FieldDismissed { field_id: ROLE_FIELD_ID });
    assert_eq!(count_hide_overlay(&cmds, ROLE_FIELD_ID), 0);

    let cmds = harness.flush();
    assert!(show_overlay(&cmds).is_none());
    assert!(!harness.is_open(ROLE_FIELD_ID));
}

#[test]
fn test_double_dismiss_hides_once() {
    // Arrange
    let mut harness = Harness::new(MeasurementMode::Immediate);
    harness
        .measurer
        .set_rect(ROLE_WRAPPER_NODE, MeasuredRect::new(10.0, 50.0, 200.0, 44.0));
    harness.register(role_field(), None);
    harness.dispatch(AppEvent::FieldActivated { field_id: ROLE_FIELD_ID });

    // Act: an item is chosen and the outside tap arrives right after.
    let mut cmds = harness.dispatch(AppEvent::AdapterInput {
        field_id: ROLE_FIELD_ID,
        input: AdapterInput::OptionChosen(0),
    });
    cmds.extend(harness.dispatch(AppEvent::FieldDismissed { field_id: ROLE_FIELD_ID }));
    cmds.extend(harness.dispatch(AppEvent::FieldDismissed { field_id: ROLE_FIELD_ID }));

    // Assert
    assert_eq!(count_hide_overlay(&cmds, ROLE_FIELD_ID), 1);
    assert_eq!(
        harness.logic.lock().unwrap().field_value(ROLE_FIELD_ID),
        Some(FieldValue::Text("admin".to_string()))
    );
}

#[test]
fn test_second_activation_toggles_overlay_closed() {
    let mut harness = Harness::new(MeasurementMode::Immediate);
    harness
        .measurer
        .set_rect(ROLE_WRAPPER_NODE, MeasuredRect::new(10.0, 50.0, 200.0, 44.0));
    harness.register(role_field(), None);

    harness.dispatch(AppEvent::FieldActivated { field_id: ROLE_FIELD_ID });
    let cmds = harness.dispatch(AppEvent::FieldActivated { field_id: ROLE_FIELD_ID });

    assert_eq!(count_hide_overlay(&cmds, ROLE_FIELD_ID), 1);
    assert!(!harness.is_open(ROLE_FIELD_ID));
}

#[test]
fn test_color_value_bump_keeps_alpha() {
    // Arrange
    let mut harness = Harness::new(MeasurementMode::Immediate);
    let start = hex_to_rgb("#3E72FBFF").unwrap();
    harness
        .measurer
        .set_rect(ACCENT_WRAPPER_NODE, MeasuredRect::new(0.0, 0.0, 300.0, 44.0));
    harness.register(
        FieldContainer::new(
            ACCENT_FIELD_ID,
            FieldSpec::new("Accent"),
            ColorAdapter::new(start),
            start,
            ACCENT_INPUT_NODE,
        )
        .with_container_node(ACCENT_WRAPPER_NODE),
        None,
    );
    harness.dispatch(AppEvent::FieldActivated { field_id: ACCENT_FIELD_ID });
    let hsv = rgb_to_hsv(start);

    // Act
    let cmds = harness.dispatch(AppEvent::AdapterInput {
        field_id: ACCENT_FIELD_ID,
        input: AdapterInput::ColorEdited(ColorEdit::SaturationValue {
            saturation: hsv.s,
            value: (hsv.v + 0.1).min(1.0),
        }),
    });

    // Assert
    let Some(PlatformCommand::ValueCommitted {
        value: FieldValue::Color(next),
        ..
    }) = find_command(&cmds, |cmd| matches!(cmd, PlatformCommand::ValueCommitted { .. }))
    else {
        panic!("expected a committed color, got {cmds:?}");
    };
    let hex = rgb_to_hex(*next);
    assert!(hex.ends_with("ff"));
    assert_ne!(hex, "#3e72fbff");
    assert!(next.b >= start.b && next.r >= start.r);
    // The picker stays open while editing.
    assert!(harness.is_open(ACCENT_FIELD_ID));
}

#[test]
fn test_duplicate_field_is_rejected() {
    let harness = Harness::new(MeasurementMode::Immediate);
    harness.register(role_field(), None);

    let result = harness.logic.lock().unwrap().register_field(role_field(), None);

    assert_eq!(result, Err(PlatformError::DuplicateField(ROLE_FIELD_ID)));
}

#[test]
fn test_disabling_closes_overlay_and_blocks_activation() {
    let mut harness = Harness::new(MeasurementMode::Immediate);
    harness
        .measurer
        .set_rect(ROLE_WRAPPER_NODE, MeasuredRect::new(10.0, 50.0, 200.0, 44.0));
    harness.register(role_field(), None);
    harness.dispatch(AppEvent::FieldActivated { field_id: ROLE_FIELD_ID });

    let cmds = harness.dispatch(AppEvent::FieldDisabledChanged {
        field_id: ROLE_FIELD_ID,
        disabled: true,
    });
    assert_eq!(count_hide_overlay(&cmds, ROLE_FIELD_ID), 1);
    assert_eq!(
        last_styles(&cmds, ROLE_FIELD_ID).unwrap().input.border_color,
        define_default_theme().border_disabled
    );

    let cmds = harness.dispatch(AppEvent::FieldActivated { field_id: ROLE_FIELD_ID });
    assert!(cmds.is_empty());
    assert_eq!(harness.measurer.measure_calls().len(), 1);
}

#[test]
fn test_assigned_value_is_not_committed_back() {
    let mut harness = Harness::new(MeasurementMode::Immediate);
    harness.register(
        FieldContainer::new(
            ACTIVE_FIELD_ID,
            FieldSpec::new("Active"),
            CheckboxAdapter::new(),
            false,
            ACTIVE_INPUT_NODE,
        ),
        None,
    );

    let cmds = harness.dispatch(AppEvent::FieldValueAssigned {
        field_id: ACTIVE_FIELD_ID,
        value: FieldValue::Bool(true),
    });
    let committed = find_command(&cmds, |cmd| {
        matches!(cmd, PlatformCommand::ValueCommitted { .. })
    });
    assert!(committed.is_none());

    // A value of the wrong kind is ignored.
    harness.dispatch(AppEvent::FieldValueAssigned {
        field_id: ACTIVE_FIELD_ID,
        value: FieldValue::Time(Time::MIDNIGHT),
    });
    assert_eq!(
        harness.logic.lock().unwrap().field_value(ACTIVE_FIELD_ID),
        Some(FieldValue::Bool(true))
    );

    // Activation toggles and reports the change.
    let cmds = harness.dispatch(AppEvent::FieldActivated { field_id: ACTIVE_FIELD_ID });
    assert!(find_command(&cmds, |cmd| *cmd
        == PlatformCommand::ValueCommitted {
            field_id: ACTIVE_FIELD_ID,
            value: FieldValue::Bool(false),
        })
    .is_some());
}

#[test]
fn test_events_for_unknown_fields_and_modals_are_dropped() {
    let mut harness = Harness::new(MeasurementMode::Immediate);

    let cmds = harness.dispatch(AppEvent::FieldActivated { field_id: FieldId(99) });
    assert!(cmds.is_empty());
    let cmds = harness.dispatch(AppEvent::ModalClosed { modal_id: ModalId(42) });
    assert!(cmds.is_empty());
    assert_eq!(
        harness.logic.lock().unwrap().close_modal(ModalId(42)),
        Err(PlatformError::UnknownModal(ModalId(42)))
    );
    assert_eq!(
        harness.logic.lock().unwrap().unregister_field(FieldId(99)),
        Err(PlatformError::UnknownField(FieldId(99)))
    );
}

#[test]
fn test_config_failure_falls_back_to_defaults() {
    crate::initialize_logging();
    let config_manager = Arc::new(MockConfigManager::new(None));

    let logic = FieldsLogic::new(config_manager.clone(), "FieldOverlayTest");

    assert_eq!(logic.config(), &FieldConfig::default());
    assert_eq!(
        *config_manager.requested_app_names.lock().unwrap(),
        vec!["FieldOverlayTest".to_string()]
    );
}

#[test]
fn test_configured_light_radius_reaches_overlay() {
    // Arrange
    crate::initialize_logging();
    let config = FieldConfig {
        light_radius: 6.0,
        ..FieldConfig::default()
    };
    let mut logic = FieldsLogic::with_config(config);
    logic.register_field(role_field(), None).unwrap();
    while logic.try_dequeue_command().is_some() {}

    // Act: drive the measurement round-trip by hand.
    logic.handle_event(AppEvent::FieldActivated { field_id: ROLE_FIELD_ID });
    let Some(PlatformCommand::MeasureNode { node, request_id, .. }) = logic.try_dequeue_command()
    else {
        panic!("expected a measurement request");
    };
    logic.handle_event(AppEvent::NodeMeasured {
        field_id: ROLE_FIELD_ID,
        node,
        request_id,
        rect: Some(MeasuredRect::new(10.0, 50.0, 200.0, 44.0)),
    });
    let mut cmds = Vec::new();
    while let Some(cmd) = logic.try_dequeue_command() {
        cmds.push(cmd);
    }

    // Assert
    assert_eq!(node, ROLE_WRAPPER_NODE);
    let (_, corner_radii) = show_overlay(&cmds).unwrap();
    assert_eq!(corner_radii, CornerRadii::for_overlay(6.0));
    assert_eq!(logic.field_radius(ROLE_FIELD_ID), Some(6.0));
}
