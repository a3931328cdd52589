use crate::core::errors::Result;
use crate::core::models::recipient::RecipientIdentity;

/// Port for OpenPGP message encryption backends.
///
/// Implementations live in `adapters::cipher`. The core layer only
/// depends on this trait, never on a concrete OpenPGP library.
///
/// Parsing and encryption sit behind the same port because recipient
/// material is backend-specific; in particular the canonical key-id
/// rule exists in exactly one place, `parse_recipient`.
pub trait MessageCipher: Send + Sync {
    /// Parse one ASCII-armored public key into a recipient identity.
    ///
    /// Fails on malformed armor, a corrupt packet stream, or a key with
    /// no encryption-capable material.
    fn parse_recipient(&self, armored: &str) -> Result<RecipientIdentity>;

    /// Encrypt plaintext to all recipients and return the ASCII-armored
    /// `PGP MESSAGE` block.
    ///
    /// The recipient list must be non-empty; no partial output is
    /// returned on failure.
    fn encrypt(&self, plaintext: &[u8], recipients: &[RecipientIdentity]) -> Result<String>;

    /// Human-readable name of this backend (e.g. "rpgp").
    fn name(&self) -> &str;
}
