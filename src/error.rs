//! Error type shared by the DAG/SUB parsers and the resolver.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No `JOB` line in the DAG references the SUB file.
    #[error("no JOB declaration references {sub_file}")]
    NotFound { sub_file: String },

    #[error("no VARS declaration for job {job}")]
    MissingVarsDeclaration { job: String },

    /// A key the resolver needs (`executable`, `arguments`) is absent from the SUB file.
    #[error("SUB file has no `{key}` entry")]
    MissingKey { key: String },

    #[error("job {job} does not define variable $({name})")]
    MissingVariable { job: String, name: String },

    /// Neither direct content + variables nor a DAG + SUB file pair was given.
    #[error("insufficient information: need SUB content and variables, or DAG and SUB files")]
    InsufficientInputs,

    #[error("read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
