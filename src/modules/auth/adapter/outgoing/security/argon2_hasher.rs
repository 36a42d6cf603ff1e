use argon2::password_hash::PasswordHash;
use argon2::{Argon2, PasswordVerifier as _};

use crate::auth::application::ports::outgoing::password_hasher::PasswordVerifier;

/// Argon2id verification against PHC-format hashes. Parameters live inside
/// the stored hash string, so verification needs no tuning knobs here.
#[derive(Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordVerifier for Argon2Hasher {
    fn verify(&self, password: &str, stored_hash: &str) -> bool {
        let parsed = match PasswordHash::new(stored_hash) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}
