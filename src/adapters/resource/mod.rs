pub mod encrypted_message;
