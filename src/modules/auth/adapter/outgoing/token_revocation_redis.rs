use async_trait::async_trait;
use deadpool_redis::Pool;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::token_revocation::{
    TokenRevocationError, TokenRevocationList,
};

fn revocation_key(token_digest: &str) -> String {
    format!("revoked_token:{}", token_digest)
}

/// Redis-backed revocation list. Entries carry a TTL equal to the token's
/// remaining lifetime, so expiry cleans up after itself.
#[derive(Clone)]
pub struct RedisTokenRevocationList {
    pool: Arc<Pool>,
}

impl RedisTokenRevocationList {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRevocationList for RedisTokenRevocationList {
    async fn revoke(&self, token_digest: &str, ttl_secs: u64) -> Result<(), TokenRevocationError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| TokenRevocationError::StoreError(e.to_string()))?;

        redis::cmd("SETEX")
            .arg(revocation_key(token_digest))
            .arg(ttl_secs)
            .arg("1")
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| TokenRevocationError::StoreError(e.to_string()))?;

        Ok(())
    }

    async fn is_revoked(&self, token_digest: &str) -> Result<bool, TokenRevocationError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| TokenRevocationError::StoreError(e.to_string()))?;

        let exists: i64 = redis::cmd("EXISTS")
            .arg(revocation_key(token_digest))
            .query_async(&mut conn)
            .await
            .map_err(|e| TokenRevocationError::StoreError(e.to_string()))?;

        Ok(exists == 1)
    }
}
