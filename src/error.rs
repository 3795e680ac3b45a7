use {std::path::PathBuf, thiserror::Error};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The provider range file could not be opened or read.
    #[error("Error loading address ranges from {}: {source}", path.display())]
    RangesFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file could not be opened or read.
    #[error("Could not read input file {}: {source}", path.display())]
    InputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error opening resolvers file {}: {source}", path.display())]
    ResolversFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No usable nameserver found in {}", path.display())]
    NoNameservers { path: PathBuf },

    /// The work queue was closed while input was still being submitted.
    #[error("Worker pool is no longer accepting input")]
    PoolClosed,

    #[error("Pool task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
