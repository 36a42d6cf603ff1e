pub mod app_state_builder;
pub mod stubs;

use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

/// Admin bearer token plus the provider that validates it, for handler
/// tests that exercise the extractors against real JWTs.
pub fn admin_bearer() -> (String, Arc<dyn TokenProvider + Send + Sync>) {
    let jwt = JwtTokenService::new(JwtConfig {
        issuer: "portfolio-cms".to_string(),
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        access_token_expiry: 3600,
    });

    let token = jwt
        .generate_access_token(Uuid::new_v4(), Role::Admin)
        .unwrap();

    (token, Arc::new(jwt))
}
