//! Command implementation modules
//!
//! Each command writes to the supplied writer so it can be tested without a terminal.

pub mod browse;
pub mod functions;
pub mod list;
pub mod run;
pub mod show;

// Re-export command execution functions
pub use browse::run_browse_command;
pub use functions::run_functions_command;
pub use list::{run_list_command, run_overview_command};
pub use run::{parse_json_args, run_function_command};
pub use show::run_show_command;
