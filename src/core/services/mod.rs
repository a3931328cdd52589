pub mod fingerprint;
pub mod seal_service;
