use pgp::composed::{Deserializable, MessageBuilder, SignedPublicKey, SignedPublicSubKey};
use pgp::crypto::public_key::PublicKeyAlgorithm;
use pgp::crypto::sym::SymmetricKeyAlgorithm;
use pgp::packet::SubpacketData;
use pgp::types::KeyDetails;
use rand::thread_rng;

use crate::core::errors::{Result, SealError};
use crate::core::models::recipient::RecipientIdentity;
use crate::core::traits::cipher::MessageCipher;

/// OpenPGP backend built on rPGP.
///
/// Parses armored public-key blocks and produces ASCII-armored
/// `PGP MESSAGE` output: one session key encrypted to every recipient,
/// the payload encrypted once under the session key. No compression,
/// no signing.
pub struct PgpBackend {
    /// Symmetric algorithm for the per-message session key.
    sym_alg: SymmetricKeyAlgorithm,
}

impl PgpBackend {
    /// Create a backend with the default session-key algorithm (AES-256).
    pub fn new() -> Self {
        Self {
            sym_alg: SymmetricKeyAlgorithm::AES256,
        }
    }

    /// Create a backend for a named algorithm from configuration:
    /// `aes128`, `aes192` or `aes256`.
    pub fn with_algorithm(name: &str) -> Result<Self> {
        let sym_alg = match name {
            "aes128" => SymmetricKeyAlgorithm::AES128,
            "aes192" => SymmetricKeyAlgorithm::AES192,
            "aes256" => SymmetricKeyAlgorithm::AES256,
            other => {
                return Err(SealError::InvalidConfig {
                    detail: format!(
                        "Unknown session-key algorithm: '{other}'. Use 'aes128', 'aes192' or 'aes256'."
                    ),
                });
            }
        };
        Ok(Self { sym_alg })
    }

    /// 16 uppercase hex characters, the low 64 bits of the fingerprint.
    ///
    /// The single place the canonical key-id text form is produced.
    fn key_id_hex(key: &impl KeyDetails) -> String {
        hex::encode_upper(key.key_id().as_ref())
    }

    /// Whether the algorithm itself is usable for encryption.
    ///
    /// Fallback for keys whose binding signatures carry no key flags.
    fn algorithm_can_encrypt(alg: PublicKeyAlgorithm) -> bool {
        matches!(
            alg,
            PublicKeyAlgorithm::RSA
                | PublicKeyAlgorithm::RSAEncrypt
                | PublicKeyAlgorithm::ECDH
                | PublicKeyAlgorithm::X25519
                | PublicKeyAlgorithm::X448
        )
    }

    /// Whether any signature in `sigs` sets an encryption key flag.
    fn flags_allow_encryption<'a>(
        sigs: impl Iterator<Item = &'a pgp::packet::Signature>,
    ) -> Option<bool> {
        let mut saw_flags = false;
        for sig in sigs {
            let Some(config) = sig.config() else { continue };
            for subpkt in &config.hashed_subpackets {
                if let SubpacketData::KeyFlags(flags) = &subpkt.data {
                    saw_flags = true;
                    if flags.encrypt_comms() || flags.encrypt_storage() {
                        return Some(true);
                    }
                }
            }
        }
        if saw_flags { Some(false) } else { None }
    }

    /// Whether this subkey may be used as an encryption target, per its
    /// binding-signature key flags, falling back to the algorithm when
    /// no flags are present.
    fn subkey_can_encrypt(subkey: &SignedPublicSubKey) -> bool {
        Self::flags_allow_encryption(subkey.signatures.iter())
            .unwrap_or_else(|| Self::algorithm_can_encrypt(subkey.algorithm()))
    }

    /// Parse the armored block and index the encryption-capable material.
    fn read_key(armored: &str) -> Result<(SignedPublicKey, RecipientIdentity)> {
        let (key, _headers) =
            SignedPublicKey::from_string(armored).map_err(|e| SealError::KeyParse {
                index: 0,
                detail: e.to_string(),
            })?;

        let encryption_subkeys: Vec<String> = key
            .public_subkeys
            .iter()
            .filter(|subkey| Self::subkey_can_encrypt(subkey))
            .map(|subkey| Self::key_id_hex(subkey))
            .collect();

        let primary_encrypts = Self::flags_allow_encryption(
            key.details
                .users
                .iter()
                .flat_map(|u| u.signatures.iter())
                .chain(key.details.direct_signatures.iter()),
        )
        .unwrap_or_else(|| Self::algorithm_can_encrypt(key.primary_key.algorithm()));

        if encryption_subkeys.is_empty() && !primary_encrypts {
            return Err(SealError::KeyParse {
                index: 0,
                detail: "key has no encryption-capable key or subkey".into(),
            });
        }

        let user_id = key
            .details
            .users
            .first()
            .map(|u| String::from_utf8_lossy(u.id.id()).to_string());

        let identity = RecipientIdentity {
            key_id: Self::key_id_hex(&key),
            user_id,
            encryption_subkeys,
            armored: armored.to_string(),
        };

        Ok((key, identity))
    }
}

impl Default for PgpBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageCipher for PgpBackend {
    fn parse_recipient(&self, armored: &str) -> Result<RecipientIdentity> {
        Self::read_key(armored).map(|(_, identity)| identity)
    }

    fn encrypt(&self, plaintext: &[u8], recipients: &[RecipientIdentity]) -> Result<String> {
        if recipients.is_empty() {
            return Err(SealError::NoRecipients);
        }

        // Recipients were validated at parse time; a failure here means
        // the armored material changed underneath us.
        let keys = recipients
            .iter()
            .map(|r| Self::read_key(&r.armored).map(|(key, _)| key))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| SealError::Encryption {
                reason: e.to_string(),
            })?;

        let mut rng = thread_rng();

        // from_bytes tags the literal packet as binary content, so
        // newlines survive transport untouched.
        let mut builder =
            MessageBuilder::from_bytes("", plaintext.to_vec()).seipd_v1(&mut rng, self.sym_alg);

        for key in &keys {
            // Encrypt the session key to the encryption subkey; only
            // keys without one fall back to the primary key.
            let added = match key
                .public_subkeys
                .iter()
                .find(|subkey| Self::subkey_can_encrypt(subkey))
            {
                Some(subkey) => builder.encrypt_to_key(&mut rng, subkey),
                None => builder.encrypt_to_key(&mut rng, &key.primary_key),
            };

            added.map_err(|e| SealError::Encryption {
                reason: format!("adding recipient {}: {e}", Self::key_id_hex(key)),
            })?;
        }

        log::debug!("encrypting message for {} recipient(s)", keys.len());

        builder
            .to_armored_string(&mut rng, Default::default())
            .map_err(|e| SealError::Encryption {
                reason: format!("encoding armored message: {e}"),
            })
    }

    fn name(&self) -> &str {
        "rpgp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pgp::composed::{
        KeyType, Message, SecretKeyParamsBuilder, SignedSecretKey, SubkeyParamsBuilder,
    };
    use pgp::crypto::ecc_curve::ECCCurve;
    use pgp::types::Password;

    /// Generate an Ed25519 certification key with a Curve25519
    /// encryption subkey, unprotected for test use.
    fn test_keypair(user_id: &str) -> (SignedSecretKey, SignedPublicKey) {
        let mut encryptkey = SubkeyParamsBuilder::default();
        encryptkey
            .key_type(KeyType::ECDH(ECCCurve::Curve25519))
            .can_sign(false)
            .can_encrypt(true)
            .can_authenticate(false);

        let mut key_params = SecretKeyParamsBuilder::default();
        key_params
            .key_type(KeyType::Ed25519Legacy)
            .can_certify(true)
            .can_sign(true)
            .can_encrypt(false)
            .primary_user_id(user_id.into())
            .subkeys(vec![encryptkey.build().unwrap()]);

        let secret_key = key_params
            .build()
            .unwrap()
            .generate(thread_rng())
            .unwrap();
        let signed_secret = secret_key.sign(&mut thread_rng(), &Password::from("")).unwrap();
        let signed_public = SignedPublicKey::from(signed_secret.clone());

        (signed_secret, signed_public)
    }

    fn armored_public(key: &SignedPublicKey) -> String {
        key.to_armored_string(Default::default()).unwrap()
    }

    fn decrypt(armored: &str, secret: &SignedSecretKey) -> Vec<u8> {
        let (msg, _) = Message::from_armor(armored.as_bytes()).unwrap();
        let mut decrypted = msg.decrypt(&Password::from(""), secret).unwrap();
        decrypted.as_data_vec().unwrap()
    }

    #[test]
    fn parse_exposes_key_id_convention() {
        let (_, public) = test_keypair("Alice <alice@example.com>");
        let backend = PgpBackend::new();

        let identity = backend.parse_recipient(&armored_public(&public)).unwrap();

        assert_eq!(identity.key_id.len(), 16);
        assert!(identity.key_id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(identity.key_id, identity.key_id.to_uppercase());
        assert_eq!(identity.user_id.as_deref(), Some("Alice <alice@example.com>"));
        assert_eq!(identity.encryption_subkeys.len(), 1);
    }

    #[test]
    fn parse_rejects_garbage() {
        let backend = PgpBackend::new();
        let result = backend.parse_recipient("definitely not a key");
        assert!(matches!(result, Err(SealError::KeyParse { .. })));
    }

    #[test]
    fn parse_rejects_truncated_armor() {
        let (_, public) = test_keypair("Bob <bob@example.com>");
        let armored = armored_public(&public);
        let truncated = &armored[..armored.len() / 2];

        let backend = PgpBackend::new();
        assert!(matches!(
            backend.parse_recipient(truncated),
            Err(SealError::KeyParse { .. })
        ));
    }

    #[test]
    fn parse_rejects_key_without_encryption_material() {
        let mut key_params = SecretKeyParamsBuilder::default();
        key_params
            .key_type(KeyType::Ed25519Legacy)
            .can_certify(true)
            .can_sign(true)
            .can_encrypt(false)
            .primary_user_id("Sign Only <sign@example.com>".into());

        let secret_key = key_params
            .build()
            .unwrap()
            .generate(thread_rng())
            .unwrap();
        let signed_secret = secret_key.sign(&mut thread_rng(), &Password::from("")).unwrap();
        let signed_public = SignedPublicKey::from(signed_secret);

        let backend = PgpBackend::new();
        let result = backend.parse_recipient(&armored_public(&signed_public));
        match result {
            Err(SealError::KeyParse { detail, .. }) => {
                assert!(detail.contains("no encryption-capable"))
            }
            other => panic!("expected KeyParse, got {other:?}"),
        }
    }

    #[test]
    fn encrypt_round_trip() {
        let (secret, public) = test_keypair("Carol <carol@example.com>");
        let backend = PgpBackend::new();
        let recipient = backend.parse_recipient(&armored_public(&public)).unwrap();

        let armored = backend.encrypt(b"attack at dawn", &[recipient]).unwrap();

        assert!(armored.starts_with("-----BEGIN PGP MESSAGE-----"));
        assert!(armored.contains("-----END PGP MESSAGE-----"));
        assert_eq!(decrypt(&armored, &secret), b"attack at dawn");
    }

    #[test]
    fn encrypt_preserves_binary_newlines() {
        let (secret, public) = test_keypair("Dave <dave@example.com>");
        let backend = PgpBackend::new();
        let recipient = backend.parse_recipient(&armored_public(&public)).unwrap();

        let plaintext = b"line one\r\nline two\nline three";
        let armored = backend.encrypt(plaintext, &[recipient]).unwrap();

        assert_eq!(decrypt(&armored, &secret), plaintext);
    }

    #[test]
    fn encrypt_to_multiple_recipients() {
        let (secret1, public1) = test_keypair("One <one@example.com>");
        let (secret2, public2) = test_keypair("Two <two@example.com>");
        let backend = PgpBackend::new();

        let recipients = vec![
            backend.parse_recipient(&armored_public(&public1)).unwrap(),
            backend.parse_recipient(&armored_public(&public2)).unwrap(),
        ];

        let armored = backend.encrypt(b"shared secret", &recipients).unwrap();

        // Each private key opens the same artifact independently.
        assert_eq!(decrypt(&armored, &secret1), b"shared secret");
        assert_eq!(decrypt(&armored, &secret2), b"shared secret");
    }

    #[test]
    fn encrypt_no_recipients_fails() {
        let backend = PgpBackend::new();
        assert!(matches!(
            backend.encrypt(b"data", &[]),
            Err(SealError::NoRecipients)
        ));
    }

    #[test]
    fn encrypt_is_probabilistic() {
        let (secret, public) = test_keypair("Eve <eve@example.com>");
        let backend = PgpBackend::new();
        let recipient = backend.parse_recipient(&armored_public(&public)).unwrap();

        let first = backend.encrypt(b"same input", &[recipient.clone()]).unwrap();
        let second = backend.encrypt(b"same input", &[recipient]).unwrap();

        // Fresh session keys per message: outputs differ, both decrypt.
        assert_ne!(first, second);
        assert_eq!(decrypt(&first, &secret), b"same input");
        assert_eq!(decrypt(&second, &secret), b"same input");
    }

    #[test]
    fn with_algorithm_accepts_known_names() {
        assert!(PgpBackend::with_algorithm("aes128").is_ok());
        assert!(PgpBackend::with_algorithm("aes256").is_ok());
        assert!(matches!(
            PgpBackend::with_algorithm("des"),
            Err(SealError::InvalidConfig { .. })
        ));
    }
}
