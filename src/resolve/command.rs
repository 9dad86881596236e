use crate::dag::JobVariables;
use crate::error::Result;
use crate::resolve::args::resolve_arguments;
use crate::sub::SubContent;

/// Full command line for one job: `{executable} {arguments}`.
pub fn build_command(content: &SubContent, variables: &JobVariables) -> Result<String> {
    let executable = content.executable()?;
    let arguments = resolve_arguments(content, variables)?;
    Ok(format!("{} {}", executable, arguments))
}

/// `build_command` for each job, in the order given.
pub fn build_commands(content: &SubContent, variables: &[JobVariables]) -> Result<Vec<String>> {
    variables
        .iter()
        .map(|vars| build_command(content, vars))
        .collect()
}
