/*
 * Form-field overlay framework: labeled fields whose dropdown overlays (select
 * lists, calendars, time columns, color pickers) attach seamlessly below the
 * input, sharing its measured geometry and border radius, plus the color
 * model engine behind the color picker.
 *
 * Layers:
 * - `core`: platform-agnostic logic (color engine, geometry, overlay state,
 *   date grid, search filtering, configuration).
 * - `app_logic`: the presenter (`FieldsLogic`), field containers and adapters.
 * - `platform_layer`: events, commands and the headless platform driver.
 * - `ui_description_layer`: box styles and theme.
 */
pub mod app_logic;
pub mod core;
pub mod platform_layer;
pub mod ui_description_layer;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::sync::Once;

static LOGGING_INIT: Once = Once::new();

/*
 * Installs the terminal logger. Safe to call any number of times, from tests
 * included; only the first call has an effect. A failure to install (another
 * logger already set) is ignored.
 */
pub fn initialize_logging() {
    LOGGING_INIT.call_once(|| {
        let level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        if TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
            .is_err()
        {
            eprintln!("Logging was already initialized.");
        }
    });
}
