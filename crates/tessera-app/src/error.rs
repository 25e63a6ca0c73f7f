//! Application error type.

use tessera_config::ConfigError;

/// Errors that stop a generator run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The OS did not provide a configuration directory and none was given.
    #[error("could not determine a configuration directory; pass --config")]
    NoConfigDir,

    /// Loading or validating the configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Creating the export directory or a preview file failed.
    #[error("preview export failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a preview image failed.
    #[error("preview encoding failed: {0}")]
    Png(#[from] png::EncodingError),
}
