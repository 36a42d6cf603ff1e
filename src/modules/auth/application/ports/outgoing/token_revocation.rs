use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenRevocationError {
    #[error("Revocation store error: {0}")]
    StoreError(String),
}

/// Revocation list for issued access tokens.
///
/// Entries are keyed by token digest and expire together with the token, so
/// the store never grows past the set of live sessions.
#[async_trait]
pub trait TokenRevocationList: Send + Sync {
    async fn revoke(&self, token_digest: &str, ttl_secs: u64) -> Result<(), TokenRevocationError>;

    async fn is_revoked(&self, token_digest: &str) -> Result<bool, TokenRevocationError>;
}
