use field_overlay::app_logic::adapters::{
    CheckboxAdapter, ColorAdapter, CountryDialCode, DateAdapter, FileAdapter, PhoneAdapter,
    SelectAdapter, SelectOption, TimeAdapter,
};
use field_overlay::app_logic::ui_constants::*;
use field_overlay::app_logic::{FieldContainer, FieldsLogic};
use field_overlay::core::{
    BorderStyle, ColorValue, CoreConfigManager, FieldSpec, MeasuredRect, WeekStart,
};
use field_overlay::platform_layer::{
    AdapterInput, AppEvent, ColorEdit, FieldValue, PhoneNumber, PickedFile, PlatformCommand,
    PlatformEventHandler, PlatformInterface, PlatformResult, SyntheticMeasurer,
};
use std::sync::{Arc, Mutex};

const APP_NAME: &str = "FieldOverlay";

/*
 * Demo: builds a "create user" form inside a modal, then replays a scripted
 * session against the headless platform. Node rectangles come from a
 * synthetic measurer; every rendered command is logged.
 */
fn main() -> PlatformResult<()> {
    field_overlay::initialize_logging();
    log::info!("Application starting...");

    let config_manager = Arc::new(CoreConfigManager::new());
    let mut logic = FieldsLogic::new(config_manager, APP_NAME);
    let minute_step = logic.config().effective_minute_step();
    let week_start = logic.config().week_start;
    register_demo_fields(&mut logic, minute_step, week_start)?;

    let measurer = Arc::new(
        SyntheticMeasurer::new()
            .with_rect(ROLE_WRAPPER_NODE, MeasuredRect::new(24.0, 120.0, 320.0, 44.0))
            .with_rect(START_DATE_WRAPPER_NODE, MeasuredRect::new(24.0, 180.0, 156.0, 44.0))
            .with_rect(START_TIME_WRAPPER_NODE, MeasuredRect::new(188.0, 180.0, 156.0, 44.0))
            .with_rect(ACCENT_WRAPPER_NODE, MeasuredRect::new(24.0, 240.0, 320.0, 52.0))
            .with_rect(PHONE_INPUT_NODE, MeasuredRect::new(25.0, 309.0, 318.0, 42.0)),
    );
    let mut platform = PlatformInterface::new(APP_NAME.to_string(), measurer);
    let handler: Arc<Mutex<dyn PlatformEventHandler>> = Arc::new(Mutex::new(logic));

    let accent = ColorValue::opaque(0x3e, 0x72, 0xfb);
    let script = vec![
        AppEvent::FieldLaidOut { field_id: ACCENT_FIELD_ID, height: 52.0 },
        AppEvent::FieldActivated { field_id: ROLE_FIELD_ID },
        AppEvent::AdapterInput {
            field_id: ROLE_FIELD_ID,
            input: AdapterInput::SearchTextChanged("ed".to_string()),
        },
        AppEvent::AdapterInput { field_id: ROLE_FIELD_ID, input: AdapterInput::OptionChosen(1) },
        AppEvent::FieldActivated { field_id: START_DATE_FIELD_ID },
        AppEvent::FieldActivated { field_id: START_TIME_FIELD_ID },
        AppEvent::AdapterInput {
            field_id: START_DATE_FIELD_ID,
            input: AdapterInput::CalendarStepped(1),
        },
        AppEvent::AdapterInput { field_id: START_TIME_FIELD_ID, input: AdapterInput::HourChosen(9) },
        AppEvent::AdapterInput {
            field_id: START_TIME_FIELD_ID,
            input: AdapterInput::MinuteChosen(30),
        },
        AppEvent::FieldValueAssigned {
            field_id: ACCENT_FIELD_ID,
            value: FieldValue::Color(accent),
        },
        AppEvent::FieldActivated { field_id: ACCENT_FIELD_ID },
        AppEvent::AdapterInput {
            field_id: ACCENT_FIELD_ID,
            input: AdapterInput::ColorEdited(ColorEdit::Hex("#d92d20cc".to_string())),
        },
        AppEvent::AdapterInput {
            field_id: PHONE_FIELD_ID,
            input: AdapterInput::TextEdited("070-123 45 67".to_string()),
        },
        AppEvent::FieldActivated { field_id: ACTIVE_FIELD_ID },
        AppEvent::FieldActivated { field_id: AVATAR_FIELD_ID },
        AppEvent::AdapterInput {
            field_id: AVATAR_FIELD_ID,
            input: AdapterInput::FilesPicked(vec![PickedFile {
                name: "avatar.png".to_string(),
                size_bytes: 48_213,
                mime_type: Some("image/png".to_string()),
            }]),
        },
        AppEvent::ModalClosed { modal_id: USER_MODAL_ID },
    ];

    let run_result = platform.run(handler, script);
    for command in platform.rendered_commands() {
        match command {
            PlatformCommand::ValueCommitted { field_id, value } => {
                log::info!("{field_id} committed {value:?}");
            }
            other => log::debug!("Rendered {other:?}"),
        }
    }
    match &run_result {
        Ok(()) => log::info!("Application exited cleanly."),
        Err(e) => log::error!("Application exited with error: {e}"),
    }
    run_result
}

fn register_demo_fields(
    logic: &mut FieldsLogic,
    minute_step: u8,
    week_start: WeekStart,
) -> PlatformResult<()> {
    let modal = Some(USER_MODAL_ID);

    logic.register_field(
        FieldContainer::new(
            ROLE_FIELD_ID,
            FieldSpec::new("Role").required(true),
            SelectAdapter::new(vec![
                SelectOption::new("Administrator", "admin".to_string()),
                SelectOption::new("Editor", "editor".to_string()),
                SelectOption::new("Viewer", "viewer".to_string()),
            ]),
            None,
            ROLE_INPUT_NODE,
        )
        .with_container_node(ROLE_WRAPPER_NODE),
        modal,
    )?;
    logic.register_field(
        FieldContainer::new(
            START_DATE_FIELD_ID,
            FieldSpec::new("Start date"),
            DateAdapter::new(week_start),
            None,
            START_DATE_INPUT_NODE,
        )
        .with_container_node(START_DATE_WRAPPER_NODE),
        modal,
    )?;
    logic.register_field(
        FieldContainer::new(
            START_TIME_FIELD_ID,
            FieldSpec::new("Start time"),
            TimeAdapter::new(minute_step),
            None,
            START_TIME_INPUT_NODE,
        )
        .with_container_node(START_TIME_WRAPPER_NODE),
        modal,
    )?;
    logic.register_field(
        FieldContainer::new(
            ACCENT_FIELD_ID,
            FieldSpec::new("Accent color").border_style(BorderStyle::Full),
            ColorAdapter::new(ColorValue::default()),
            ColorValue::default(),
            ACCENT_INPUT_NODE,
        )
        .with_container_node(ACCENT_WRAPPER_NODE),
        modal,
    )?;
    // No wrapper handed over: the phone dropdown measures its inner node.
    logic.register_field(
        FieldContainer::new(
            PHONE_FIELD_ID,
            FieldSpec::new("Phone"),
            PhoneAdapter::new(vec![
                CountryDialCode::new("Sweden", "+46"),
                CountryDialCode::new("Norway", "+47"),
                CountryDialCode::new("Denmark", "+45"),
            ]),
            PhoneNumber {
                dial_code: "+46".to_string(),
                national_number: String::new(),
            },
            PHONE_INPUT_NODE,
        ),
        modal,
    )?;
    logic.register_field(
        FieldContainer::new(
            ACTIVE_FIELD_ID,
            FieldSpec::new("Active"),
            CheckboxAdapter::new(),
            true,
            ACTIVE_INPUT_NODE,
        ),
        modal,
    )?;
    logic.register_field(
        FieldContainer::new(
            AVATAR_FIELD_ID,
            FieldSpec::new("Avatar"),
            FileAdapter::new(false).with_accept(vec!["image/*".to_string()]),
            Vec::new(),
            AVATAR_INPUT_NODE,
        ),
        modal,
    )
}
