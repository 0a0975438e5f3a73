//! Command handler modules for the hilo CLI.
//!
//! This module contains individual handler functions for each CLI subcommand.
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod cfg;
mod count;
mod drill;
mod legend;
mod tally;

pub use cfg::handle_cfg_command;
pub use count::handle_count_command;
pub use drill::handle_drill_command;
pub use legend::handle_legend_command;
pub use tally::handle_tally_command;
