/// Identity of one recipient, parsed from an ASCII-armored public key.
///
/// Only the derived identifiers and the original armored block are kept;
/// the backend re-parses the block when it actually encrypts. Instances
/// are built fresh for every request and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientIdentity {
    /// Primary key id: 16 uppercase hex characters, the low 64 bits
    /// of the key fingerprint.
    pub key_id: String,
    /// Primary user id, if the key carries one (display only).
    pub user_id: Option<String>,
    /// Key ids of encryption-capable subkeys.
    pub encryption_subkeys: Vec<String>,
    /// The armored public key block this identity was parsed from.
    pub armored: String,
}

impl std::fmt::Display for RecipientIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.user_id {
            Some(uid) => write!(f, "{} ({})", self.key_id, uid),
            None => write!(f, "{}", self.key_id),
        }
    }
}
