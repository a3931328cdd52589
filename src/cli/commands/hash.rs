use std::io::Read;
use std::path::Path;

use crate::core::errors::{Result, SealError};
use crate::core::services::fingerprint;

/// Execute the `gpgseal hash` command.
///
/// Prints the SHA-256 hex digest of a file or stdin — the same rule
/// used to mask sensitive content in state and to derive artifact ids.
pub fn execute(file: Option<&str>) -> Result<()> {
    let data = match file {
        Some(path) => {
            let path = Path::new(path);
            if !path.exists() {
                return Err(SealError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            std::fs::read(path)?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    println!("{}", fingerprint::sha256_hex(&data));
    Ok(())
}
