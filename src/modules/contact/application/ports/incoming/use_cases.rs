use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SendContactMessageError {
    #[error("Sender email address is invalid")]
    InvalidEmail,

    #[error("Message must not be empty")]
    EmptyMessage,

    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

#[async_trait]
pub trait SendContactMessageUseCase: Send + Sync {
    async fn execute(&self, message: ContactMessage) -> Result<(), SendContactMessageError>;
}
