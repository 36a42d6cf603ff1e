pub mod password_hasher;
pub mod token_provider;
pub mod token_revocation;
pub mod user_query;
