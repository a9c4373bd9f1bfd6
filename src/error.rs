use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("no package.json found in {0}")]
    MissingManifest(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AuditResult<T> = Result<T, AuditError>;
