pub mod get_session_service;
pub mod login_service;
pub mod logout_service;

/// Hex digest used as the revocation-list key. Raw tokens never reach redis.
pub fn token_digest(token: &str) -> String {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let digest = hasher.finalize();

    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
