//! Resolution from either in-memory content or a DAG/SUB file pair.

use crate::dag::{DagDocument, JobVariables};
use crate::error::{Error, Result};
use crate::resolve::JobInstance;
use crate::resolve::args::{resolve_all_arguments, resolve_arguments};
use crate::resolve::command::{build_command, build_commands};
use crate::sub::{SubContent, SubDocument};
use std::borrow::Cow;
use std::path::Path;

/// What the resolver works from.
///
/// Direct `content` + `variables` take precedence. When either of them is
/// missing, both `dag_file` and `sub_file` are needed and the SUB content and
/// every job's variables are loaded from them.
#[derive(Debug, Clone, Copy, Default)]
pub struct JobInputs<'a> {
    pub content: Option<&'a SubContent>,
    pub variables: Option<&'a [JobVariables]>,
    pub dag_file: Option<&'a Path>,
    pub sub_file: Option<&'a Path>,
}

impl<'a> JobInputs<'a> {
    pub fn direct(content: &'a SubContent, variables: &'a [JobVariables]) -> Self {
        Self {
            content: Some(content),
            variables: Some(variables),
            ..Self::default()
        }
    }

    pub fn files(dag_file: &'a Path, sub_file: &'a Path) -> Self {
        Self {
            dag_file: Some(dag_file),
            sub_file: Some(sub_file),
            ..Self::default()
        }
    }

    /// Resolved argument strings, one per job.
    pub fn arguments(&self) -> Result<Vec<String>> {
        let (content, variables) = self.load()?;
        resolve_all_arguments(&content, &variables)
    }

    /// Full command lines, one per job.
    pub fn commands(&self) -> Result<Vec<String>> {
        let (content, variables) = self.load()?;
        build_commands(&content, &variables)
    }

    /// Everything known about each job, in job order.
    pub fn instances(&self) -> Result<Vec<JobInstance>> {
        let (content, variables) = self.load()?;
        variables
            .iter()
            .map(|vars| {
                Ok(JobInstance {
                    name: vars.job.clone(),
                    arguments: resolve_arguments(&content, vars)?,
                    command: build_command(&content, vars)?,
                    variables: vars.values.clone(),
                })
            })
            .collect()
    }

    /// Borrow direct inputs, or read both files. Nothing is read unless both
    /// paths are present.
    pub fn load(&self) -> Result<(Cow<'a, SubContent>, Cow<'a, [JobVariables]>)> {
        if let (Some(content), Some(variables)) = (self.content, self.variables) {
            return Ok((Cow::Borrowed(content), Cow::Borrowed(variables)));
        }

        let (Some(dag_file), Some(sub_file)) = (self.dag_file, self.sub_file) else {
            return Err(Error::InsufficientInputs);
        };

        let content = SubDocument::from_path(sub_file)?.parse()?;
        let variables =
            DagDocument::from_path(dag_file)?.job_variables(&sub_file.to_string_lossy())?;
        log::debug!(
            "{} job(s) in {} use {}",
            variables.len(),
            dag_file.display(),
            sub_file.display()
        );
        Ok((Cow::Owned(content), Cow::Owned(variables)))
    }
}
