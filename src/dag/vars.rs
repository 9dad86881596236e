use crate::dag::jobs::{find_job_names, sub_basename};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

/// Variable bindings declared for one job by its `VARS` line, in line order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobVariables {
    pub job: String,
    pub values: IndexMap<String, String>,
}

impl JobVariables {
    pub fn new(job: impl Into<String>) -> Self {
        Self {
            job: job.into(),
            values: IndexMap::new(),
        }
    }

    /// Builder-style insert, mostly for callers assembling bindings by hand.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parse the first `VARS <job_name> ...` line of the DAG.
///
/// Expected shape:
/// VARS <job> key1="value1" key2="value2" ...
///
/// Values are double-quoted and may not contain an unescaped quote. A repeated
/// key on the same line overwrites the earlier binding but keeps its position.
pub fn find_job_variables(dag_text: &str, job_name: &str) -> Result<JobVariables> {
    // The name must be followed by a blank, so `VARS AB` is not read for job `A`.
    let line_re = Regex::new(&format!(
        r"(?mR)^VARS {job}[ \t].*$",
        job = regex::escape(job_name)
    ))?;
    let line = line_re
        .find(dag_text)
        .ok_or_else(|| Error::MissingVarsDeclaration {
            job: job_name.to_string(),
        })?
        .as_str();

    let pair_re = Regex::new(r#"(\w+)="(.*?)""#)?;
    let mut vars = JobVariables::new(job_name);
    for caps in pair_re.captures_iter(line) {
        vars.values.insert(caps[1].to_string(), caps[2].to_string());
    }

    log::debug!("job {}: {} variable(s)", job_name, vars.len());
    Ok(vars)
}

/// Variables for every job that instantiates `sub_file`, in job order.
pub fn find_all_job_variables(dag_text: &str, sub_file: &str) -> Result<Vec<JobVariables>> {
    let jobs = find_job_names(dag_text, sub_file)?;
    if jobs.is_empty() {
        return Err(Error::NotFound {
            sub_file: sub_basename(sub_file).to_string(),
        });
    }

    jobs.iter()
        .map(|job| find_job_variables(dag_text, job))
        .collect()
}
