//! Command parsing and dispatch
//!
//! A command line is split on whitespace; the first token picks a row of
//! the dispatch table, which validates arity before calling the player.

mod dispatch;
mod table;

pub use dispatch::{execute, execute_line, INVALID_COMMAND};
pub use table::{find, help_text, Arity, CommandSpec, Handler, COMMANDS};
