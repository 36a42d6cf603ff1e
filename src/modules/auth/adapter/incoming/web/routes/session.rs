use actix_web::{get, web, HttpRequest, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::{bearer_token, AuthenticatedUser};
use crate::auth::adapter::incoming::web::routes::SessionUserDto;
use crate::auth::application::ports::incoming::use_cases::GetSessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/auth/session")]
pub async fn get_session_handler(
    _user: AuthenticatedUser,
    req: HttpRequest,
    data: web::Data<AppState>,
) -> impl Responder {
    let token = match bearer_token(&req) {
        Some(t) => t,
        None => {
            return ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            );
        }
    };

    match data.auth.session.execute(&token).await {
        Ok(user) => ApiResponse::success(SessionUserDto::from(user)),

        Err(GetSessionError::TokenRevoked) => {
            ApiResponse::unauthorized("TOKEN_REVOKED", "Token has been revoked")
        }

        Err(GetSessionError::UserGone) => {
            ApiResponse::unauthorized("USER_GONE", "User no longer exists")
        }

        Err(GetSessionError::Infrastructure(msg)) => {
            error!("Session lookup failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
