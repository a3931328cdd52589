use crate::core::errors::{Result, SealError};
use crate::core::models::sealed_message::SealedMessage;
use crate::core::services::seal_service::SealService;
use crate::core::traits::cipher::MessageCipher;

/// Adapter mapping a hosting resource model's lifecycle onto the seal
/// service: `create` computes everything, `read` is a no-op, `delete`
/// clears the state.
///
/// The lifecycle is create-or-replace only. Content and recipients are
/// immutable after create; changing either means deleting the resource
/// and creating a new one. There is no update path.
pub struct EncryptedMessageResource<C: MessageCipher> {
    service: SealService<C>,
    state: Option<SealedMessage>,
}

impl<C: MessageCipher> EncryptedMessageResource<C> {
    pub fn new(cipher: C) -> Self {
        Self {
            service: SealService::new(cipher),
            state: None,
        }
    }

    /// Create the resource: parse keys, encrypt, store the snapshot.
    ///
    /// Fails without touching existing state if the resource is already
    /// live; the caller must `delete` first. Either every state field is
    /// set or none are.
    pub fn create(&mut self, content: &str, public_keys: &[String]) -> Result<&SealedMessage> {
        if self.state.is_some() {
            return Err(SealError::State {
                field: "id".into(),
                detail: "resource already exists; delete it before creating a replacement".into(),
            });
        }

        let sealed = self.service.create(content, public_keys)?;
        log::info!(
            "created encrypted message {} for {} recipient(s)",
            sealed.id,
            sealed.public_keys.len()
        );

        Ok(self.state.insert(sealed))
    }

    /// The artifact is immutable; reading just mirrors the snapshot.
    pub fn read(&self) -> Option<&SealedMessage> {
        self.state.as_ref()
    }

    /// The resource identifier, while the resource is live.
    pub fn id(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.id.as_str())
    }

    /// Drop the snapshot and clear the identifier.
    pub fn delete(&mut self) {
        if let Some(state) = self.state.take() {
            log::info!("deleted encrypted message {}", state.id);
        }
    }
}
