pub mod password;
pub mod random_code;
pub mod validate;

pub use password::{Argon2Hasher, CredentialHasher};
