use actix_web::{post, web, HttpRequest, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::{bearer_token, AuthenticatedUser};
use crate::auth::application::ports::incoming::use_cases::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Revokes the presented access token. Idempotent: logging out twice is
/// fine, an expired token is fine.
#[post("/api/auth/logout")]
pub async fn logout_handler(
    _user: AuthenticatedUser,
    req: HttpRequest,
    data: web::Data<AppState>,
) -> impl Responder {
    // The extractor already proved the header is present and well-formed.
    let token = match bearer_token(&req) {
        Some(t) => t,
        None => {
            return ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            );
        }
    };

    match data.auth.logout.execute(&token).await {
        Ok(()) => ApiResponse::no_content(),

        Err(LogoutError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }

        Err(LogoutError::Infrastructure(msg)) => {
            error!("Logout infrastructure error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
