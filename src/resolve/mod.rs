//! Resolution layer: SUB template + per-job variables => arguments and commands.

pub mod args;
pub mod command;
pub mod inputs;

pub use args::{resolve_all_arguments, resolve_arguments};
pub use command::{build_command, build_commands};
pub use inputs::JobInputs;

use indexmap::IndexMap;
use serde::Serialize;

/// One job of the DAG with its template fully resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobInstance {
    pub name: String,
    pub variables: IndexMap<String, String>,
    pub arguments: String,
    pub command: String,
}
