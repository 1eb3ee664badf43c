use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or driving a simulation
#[derive(Debug, Error)]
pub enum SimError {
    #[error("unknown body `{0}` (expected one of: sun, jupiter, saturn, uranus, neptune)")]
    UnknownBody(String),

    #[error("time step must be finite and nonzero, got {0}")]
    InvalidTimeStep(f64),

    #[error("reference body index {0} is out of range")]
    ReferenceOutOfRange(usize),

    #[error("failed to write report")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config")]
    Parse(#[from] serde_yaml::Error),

    #[error("failed to read config {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
