//! Multi-recipient OpenPGP message sealing for infrastructure state.
//!
//! Given plaintext content and a list of ASCII-armored public keys,
//! gpgseal produces an armored `PGP MESSAGE` artifact plus the derived
//! values a hosting resource model stores instead of the raw inputs:
//! the artifact's SHA-256 identifier, the SHA-256 mask of the content,
//! and each recipient's 16-character key id.
//!
//! ```no_run
//! use gpgseal::adapters::cipher::pgp_backend::PgpBackend;
//! use gpgseal::core::services::seal_service::SealService;
//!
//! # fn demo(armored_key: String) -> gpgseal::core::errors::Result<()> {
//! let service = SealService::new(PgpBackend::new());
//! let sealed = service.create("hello world", &[armored_key])?;
//! assert!(sealed.result.starts_with("-----BEGIN PGP MESSAGE-----"));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
