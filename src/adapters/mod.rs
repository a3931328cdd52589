pub mod cipher;
pub mod resource;
