use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope as it appears on the wire.
#[derive(Serialize, ToSchema)]
pub struct SuccessResponse<T> {
    /// Always true on success
    #[schema(example = true)]
    pub success: bool,

    pub data: T,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine-readable code
    #[schema(example = "INVALID_CREDENTIALS")]
    pub code: String,

    /// Human-readable message
    #[schema(example = "Invalid email or password")]
    pub message: String,
}

/// Error envelope as it appears on the wire.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false on failure
    #[schema(example = false)]
    pub success: bool,

    pub error: ErrorDetail,
}
