use serde::Serialize;

/// A created message artifact together with the state values a hosting
/// resource model persists instead of the raw inputs.
///
/// `content_digest` and `public_keys` are the masked forms of the two
/// sensitive inputs: the plaintext is reduced to its SHA-256 digest and
/// each armored key to its key id. `result` is the artifact itself and
/// `id` its SHA-256 digest, which doubles as the resource identifier.
#[derive(Debug, Clone, Serialize)]
pub struct SealedMessage {
    /// Resource identifier: lowercase-hex SHA-256 of `result`.
    pub id: String,
    /// Lowercase-hex SHA-256 of the plaintext content.
    pub content_digest: String,
    /// Key id of each recipient, in input order.
    pub public_keys: Vec<String>,
    /// The ASCII-armored PGP MESSAGE block.
    pub result: String,
}
