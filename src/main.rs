use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use condor_jobs::{DagDocument, JobInputs};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "condor-jobs")]
#[command(about = "Resolve HTCondor DAG/SUB job templates", long_about = None)]
struct Cli {
    /// Print results as a JSON array.
    #[arg(long, global = true)]
    json: bool,

    /// Log per-job resolution details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Args)]
struct Files {
    #[arg(long)]
    dag: PathBuf,

    #[arg(long)]
    sub: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// List the jobs that instantiate the SUB file.
    Jobs(Files),
    /// Show each job's VARS bindings.
    Vars(Files),
    /// Show each job's resolved arguments.
    Args(Files),
    /// Show each job's full command line.
    Commands(Files),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match &cli.cmd {
        Commands::Jobs(files) => {
            let names = load_dag(&files.dag)?.job_names(&files.sub.to_string_lossy())?;
            if names.is_empty() {
                log::warn!("no JOB in {} uses {}", files.dag.display(), files.sub.display());
            }
            emit(cli.json, &names, |name| name.clone())?;
        }
        Commands::Vars(files) => {
            let vars = load_dag(&files.dag)?
                .job_variables(&files.sub.to_string_lossy())
                .with_context(|| format!("collect VARS from {}", files.dag.display()))?;
            emit(cli.json, &vars, |v| {
                let pairs: Vec<String> = v.iter().map(|(k, val)| format!("{k}={val}")).collect();
                format!("{} {}", v.job, pairs.join(" ")).trim_end().to_string()
            })?;
        }
        Commands::Args(files) => {
            let args = inputs(files)
                .arguments()
                .with_context(|| resolve_context(files))?;
            emit(cli.json, &args, |a| a.clone())?;
        }
        Commands::Commands(files) => {
            let job_inputs = inputs(files);
            if cli.json {
                let instances = job_inputs.instances().with_context(|| resolve_context(files))?;
                println!("{}", serde_json::to_string_pretty(&instances)?);
            } else {
                for command in job_inputs.commands().with_context(|| resolve_context(files))? {
                    println!("{}", command);
                }
            }
        }
    }

    Ok(())
}

fn inputs(files: &Files) -> JobInputs<'_> {
    JobInputs::files(&files.dag, &files.sub)
}

fn load_dag(path: &Path) -> Result<DagDocument> {
    DagDocument::from_path(path).with_context(|| format!("load DAG file {}", path.display()))
}

fn resolve_context(files: &Files) -> String {
    format!(
        "resolve {} against {}",
        files.sub.display(),
        files.dag.display()
    )
}

/// Print `items` as pretty JSON, or one line each via `line`.
fn emit<T: Serialize>(json: bool, items: &[T], line: impl Fn(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        for item in items {
            println!("{}", line(item));
        }
    }
    Ok(())
}
