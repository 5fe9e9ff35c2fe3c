// --- File: crates/services/bookify_widget/src/lib.rs ---
pub mod app_state;
pub mod commands;

pub use app_state::{error_text, AppState, Flow};
pub use commands::{parse_command, Command, CommandError, HELP};
