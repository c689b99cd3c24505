use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures at the payload data-source boundary.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("'{}' is not valid payload YAML: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("'{}' is empty", .0.display())]
    Empty(PathBuf),
    #[error("'{}' has no payloads", .0.display())]
    MissingPayloads(PathBuf),
}
