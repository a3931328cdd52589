use std::path::Path;

use crate::adapters::cipher::pgp_backend::PgpBackend;
use crate::cli::output;
use crate::core::errors::{Result, SealError};
use crate::core::traits::cipher::MessageCipher;

/// Execute the `gpgseal inspect` command.
///
/// Parses an armored public key and prints the identity the state
/// layer would store for it: key id, user id, encryption subkeys.
pub fn execute(key: &str) -> Result<()> {
    let path = Path::new(key);
    if !path.exists() {
        return Err(SealError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let armored = std::fs::read_to_string(path)?;

    let backend = PgpBackend::new();
    let identity = backend.parse_recipient(&armored)?;

    println!("Key ID:  {}", identity.key_id);
    if let Some(user_id) = &identity.user_id {
        println!("User ID: {user_id}");
    }
    for subkey in &identity.encryption_subkeys {
        println!("Encryption subkey: {subkey}");
    }

    output::success("Key is usable as a recipient");
    Ok(())
}
