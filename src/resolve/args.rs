use crate::dag::JobVariables;
use crate::error::{Error, Result};
use crate::sub::SubContent;
use regex::{Captures, Regex};

/// Characters stripped from both ends of the `arguments` entry.
const ARGUMENT_QUOTES: &[char] = &['\'', '"', ' '];

/// Substitute `$(NAME)` placeholders in `arguments` with the job's bindings.
///
/// Example:
/// arguments = '--in $(IN) --out $(OUT)'  with IN=a.txt OUT=b.txt
///   =>  --in a.txt --out b.txt
///
/// An unbound placeholder is an error; it is never left in place or dropped.
pub fn resolve_arguments(content: &SubContent, variables: &JobVariables) -> Result<String> {
    let template = content.arguments()?.trim().trim_matches(ARGUMENT_QUOTES);
    let re = Regex::new(r"\$\((\w+)\)")?;

    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for caps in re.captures_iter(template) {
        let whole = caps.get(0).expect("group 0 is always present");
        out.push_str(&template[last..whole.start()]);
        out.push_str(lookup(&caps, variables)?);
        last = whole.end();
    }
    out.push_str(&template[last..]);

    log::debug!("job {}: arguments {:?}", variables.job, out);
    Ok(out)
}

fn lookup<'v>(caps: &Captures<'_>, variables: &'v JobVariables) -> Result<&'v str> {
    let name = &caps[1];
    variables.get(name).ok_or_else(|| Error::MissingVariable {
        job: variables.job.clone(),
        name: name.to_string(),
    })
}

/// `resolve_arguments` for each job, in the order given.
pub fn resolve_all_arguments(
    content: &SubContent,
    variables: &[JobVariables],
) -> Result<Vec<String>> {
    variables
        .iter()
        .map(|vars| resolve_arguments(content, vars))
        .collect()
}
