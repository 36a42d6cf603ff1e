#[derive(Clone)]
pub struct JwtConfig {
    pub issuer: String,
    pub secret_key: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let issuer = std::env::var("JWT_ISSUER").unwrap_or_else(|_| "portfolio-cms".to_string());
        let secret_key = std::env::var("JWT_SECRET_KEY").expect("JWT_SECRET_KEY is not set");
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .expect("JWT_ACCESS_TOKEN_EXPIRY must be an integer number of seconds");

        Self {
            issuer,
            secret_key,
            access_token_expiry,
        }
    }
}
