use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::contact::application::ports::incoming::use_cases::{
    ContactMessage, SendContactMessageError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ContactRequestDto {
    #[schema(example = "Jamie Doe")]
    pub name: String,

    #[schema(example = "jamie@example.org")]
    pub email: String,

    #[serde(default)]
    pub subject: String,

    pub message: String,
}

#[derive(Serialize)]
struct ContactAccepted {
    delivered: bool,
}

/// Contact form
///
/// Validates the submission and relays it to the site owner by email.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequestDto,
    responses(
        (status = 200, description = "Message relayed"),
        (status = 400, description = "Invalid submission", body = ErrorResponse),
        (status = 502, description = "Mail relay rejected the message", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn send_contact_message_handler(
    req: web::Json<ContactRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let message = ContactMessage {
        name: req.name,
        email: req.email,
        subject: req.subject,
        message: req.message,
    };

    match data.contact.send.execute(message).await {
        Ok(()) => ApiResponse::success(ContactAccepted { delivered: true }),

        Err(SendContactMessageError::InvalidEmail) => {
            ApiResponse::bad_request("INVALID_EMAIL", "Sender email address is invalid")
        }

        Err(SendContactMessageError::EmptyMessage) => {
            ApiResponse::bad_request("EMPTY_MESSAGE", "Message must not be empty")
        }

        Err(SendContactMessageError::DeliveryFailed(msg)) => {
            error!("Contact message delivery failed: {}", msg);
            ApiResponse::bad_gateway("DELIVERY_FAILED", "Could not deliver the message")
        }
    }
}
