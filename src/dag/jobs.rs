use crate::error::Result;
use regex::Regex;
use std::path::Path;

/// Strip any directory part from a SUB file reference.
pub(crate) fn sub_basename(sub_file: &str) -> &str {
    Path::new(sub_file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(sub_file)
}

/// Collect the names of all `JOB` lines that reference `sub_file`.
///
/// Matching is on the basename only, so a query of `jobs/foo.sub` finds
/// `JOB A /abs/path/foo.sub` as well as `JOB B foo.sub`. The basename must end
/// the line; whatever precedes it is not inspected, so Windows paths
/// (`jobs\foo.sub`) match too. CRLF line endings are accepted.
///
/// Example:
/// JOB analyse_0 jobs/analyse.sub  =>  "analyse_0"
pub fn find_job_names(dag_text: &str, sub_file: &str) -> Result<Vec<String>> {
    let basename = regex::escape(sub_basename(sub_file));

    // 1) job name: word characters
    // 2) anything up to the literal basename at end of line
    let re = Regex::new(&format!(r"(?mR)^JOB (\w+) .*{basename}$"))?;

    let names: Vec<String> = re
        .captures_iter(dag_text)
        .map(|caps| caps[1].trim().to_string())
        .collect();

    log::trace!("JOB lines for {}: {:?}", sub_file, names);
    Ok(names)
}
