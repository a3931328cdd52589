use crate::core::errors::{Result, SealError};
use crate::core::models::recipient::RecipientIdentity;
use crate::core::models::sealed_message::SealedMessage;
use crate::core::services::fingerprint;
use crate::core::traits::cipher::MessageCipher;

/// Orchestrates the create operation: parse recipients, encrypt the
/// content, derive the identifier and the masked state values.
///
/// Stateless; every call parses its own recipients and owns nothing
/// beyond the returned `SealedMessage`.
pub struct SealService<C: MessageCipher> {
    pub cipher: C,
}

impl<C: MessageCipher> SealService<C> {
    pub fn new(cipher: C) -> Self {
        Self { cipher }
    }

    /// Seal `content` for every key in `public_keys`.
    ///
    /// Fails fast on the first malformed key, carrying its position in
    /// the input list. The empty list is rejected before the encryption
    /// step is ever reached.
    pub fn create(&self, content: &str, public_keys: &[String]) -> Result<SealedMessage> {
        let recipients = self.parse_recipients(public_keys)?;
        if recipients.is_empty() {
            return Err(SealError::NoRecipients);
        }

        let key_ids: Vec<String> = recipients.iter().map(|r| r.key_id.clone()).collect();

        let armored = self.cipher.encrypt(content.as_bytes(), &recipients)?;
        let id = fingerprint::sha256_hex(armored.as_bytes());

        log::debug!(
            "sealed message {} for {} recipient(s) with {}",
            id,
            key_ids.len(),
            self.cipher.name()
        );

        Ok(SealedMessage {
            id,
            content_digest: Self::mask_content(content),
            public_keys: key_ids,
            result: armored,
        })
    }

    /// Parse every armored key, attaching the input index on failure.
    pub fn parse_recipients(&self, public_keys: &[String]) -> Result<Vec<RecipientIdentity>> {
        public_keys
            .iter()
            .enumerate()
            .map(|(index, armored)| {
                self.cipher
                    .parse_recipient(armored)
                    .map_err(|e| match e {
                        SealError::KeyParse { detail, .. } => SealError::KeyParse { index, detail },
                        other => SealError::KeyParse {
                            index,
                            detail: other.to_string(),
                        },
                    })
            })
            .collect()
    }

    /// The state-masking rule for the sensitive content field: the host
    /// stores this digest, never the plaintext.
    pub fn mask_content(content: &str) -> String {
        fingerprint::sha256_hex(content.as_bytes())
    }
}
