pub mod hash;
pub mod inspect;
pub mod seal;
