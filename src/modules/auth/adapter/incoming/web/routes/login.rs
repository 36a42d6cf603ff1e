use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{LoginError, LoginRequest, SessionUser};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "owner@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct SessionUserDto {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[schema(example = "admin")]
    pub role: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT access token used as a bearer token on admin routes
    pub access_token: String,
    pub user: SessionUserDto,
}

impl From<SessionUser> for SessionUserDto {
    fn from(user: SessionUser) -> Self {
        SessionUserDto {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            role: user.role.as_str().to_string(),
        }
    }
}

/// Admin login
///
/// Authenticates with email and password, returns a JWT access token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = LoginRequest {
        email: dto.email,
        password: dto.password,
    };

    match data.auth.login.execute(request).await {
        Ok(outcome) => ApiResponse::success(LoginResponse {
            access_token: outcome.access_token,
            user: outcome.user.into(),
        }),

        Err(LoginError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::Infrastructure(msg)) => {
            error!("Login infrastructure error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
