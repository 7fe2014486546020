// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs stays focused on parsing and
// dispatch.

pub mod compute;
pub mod rate;
pub mod stations;
