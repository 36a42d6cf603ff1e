/// Verify-only port: account provisioning is out of scope, so no hashing
/// side is exposed here.
pub trait PasswordVerifier: Send + Sync {
    /// Returns false on mismatch AND on malformed stored hashes; the caller
    /// treats both as invalid credentials.
    fn verify(&self, password: &str, stored_hash: &str) -> bool;
}
