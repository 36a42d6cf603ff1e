use async_trait::async_trait;

/// Outgoing mail port. The relay's own error text is carried as a string;
/// the service decides what surfaces to the client.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
}
