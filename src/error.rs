use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure taxonomy for a converter run. Every variant is terminal; the tool
/// is a single-shot batch converter and never retries.
#[derive(Debug, Error)]
pub enum Error {
    /// The ontology source was missing or could not be opened.
    #[error("cannot open ontology source `{path}`: {source}")]
    InputUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The ontology source was readable but malformed; nothing was written.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Writing the rendered graph description failed.
    #[error("failed to write graph description to `{path}`: {source}")]
    DestinationWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
