//! DAG file layer: job declarations and their variable bindings.
//!
//! Only two line shapes are recognised:
//! - `JOB <name> ... <subfile>` ties a job name to a SUB file by basename
//! - `VARS <name> key="value" ...` binds template variables for that job
//!
//! Everything else in the file (PARENT/CHILD edges, RETRY, comments) is ignored.

pub mod jobs;
pub mod vars;

pub use jobs::find_job_names;
pub use vars::{JobVariables, find_all_job_variables, find_job_variables};

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Raw text of a DAG file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DagDocument(String);

impl DagDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        log::debug!("loaded DAG file {} ({} bytes)", path.display(), text.len());
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Names of the jobs instantiating `sub_file`, in declaration order.
    pub fn job_names(&self, sub_file: &str) -> Result<Vec<String>> {
        find_job_names(&self.0, sub_file)
    }

    /// Variables of every job instantiating `sub_file`; fails if there are none.
    pub fn job_variables(&self, sub_file: &str) -> Result<Vec<JobVariables>> {
        find_all_job_variables(&self.0, sub_file)
    }
}
