pub mod recipient;
pub mod sealed_message;
