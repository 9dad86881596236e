//! Reconstruct the command lines an HTCondor DAG would run.
//!
//! A DAG file declares jobs (`JOB name file.sub`) and their variable bindings
//! (`VARS name KEY="value"`); a SUB file holds the `executable` and an
//! `arguments` template with `$(KEY)` placeholders. Joining the two by job
//! name gives one command per job instance.

pub mod dag;
pub mod error;
pub mod resolve;
pub mod sub;

pub use dag::{
    DagDocument, JobVariables, find_all_job_variables, find_job_names, find_job_variables,
};
pub use error::{Error, Result};
pub use resolve::{
    JobInputs, JobInstance, build_command, build_commands, resolve_all_arguments,
    resolve_arguments,
};
pub use sub::{SubContent, SubDocument, parse_sub_file};
