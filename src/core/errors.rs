use std::path::PathBuf;

/// All domain errors for gpgseal.
///
/// Each variant carries enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum SealError {
    #[error(
        "decoding public key #{index}: {detail}\n\n  \
         The key must be a complete ASCII-armored OpenPGP public key block\n  \
         (-----BEGIN PGP PUBLIC KEY BLOCK-----) with at least one\n  \
         encryption-capable key or subkey."
    )]
    KeyParse { index: usize, detail: String },

    #[error(
        "no recipients provided\n\n  \
         At least one public key is required to seal a message.\n  \
         Pass keys with '--key <FILE>' or list them in gpgseal.toml."
    )]
    NoRecipients,

    #[error("encrypting message: {reason}")]
    Encryption { reason: String },

    #[error("writing '{field}' to resource state: {detail}")]
    State { field: String, detail: String },

    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists."
    )]
    FileNotFound { path: PathBuf },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SealError>;
