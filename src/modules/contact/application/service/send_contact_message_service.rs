use async_trait::async_trait;
use std::str::FromStr;
use std::sync::Arc;

use email_address::EmailAddress;

use crate::contact::application::ports::incoming::use_cases::{
    ContactMessage, SendContactMessageError, SendContactMessageUseCase,
};
use crate::contact::application::ports::outgoing::email_sender::EmailSender;

/// Relays a contact-form submission to the site owner's inbox.
pub struct SendContactMessageService {
    sender: Arc<dyn EmailSender>,
    /// Where submissions land (the site owner's address).
    recipient: String,
}

impl SendContactMessageService {
    pub fn new(sender: Arc<dyn EmailSender>, recipient: String) -> Self {
        Self { sender, recipient }
    }
}

fn render_body(message: &ContactMessage) -> String {
    format!(
        "<p><strong>From:</strong> {} &lt;{}&gt;</p>\
         <p><strong>Subject:</strong> {}</p>\
         <hr/>\
         <p>{}</p>",
        message.name, message.email, message.subject, message.message
    )
}

#[async_trait]
impl SendContactMessageUseCase for SendContactMessageService {
    async fn execute(&self, message: ContactMessage) -> Result<(), SendContactMessageError> {
        if EmailAddress::from_str(message.email.trim()).is_err() {
            return Err(SendContactMessageError::InvalidEmail);
        }

        if message.message.trim().is_empty() {
            return Err(SendContactMessageError::EmptyMessage);
        }

        let subject = if message.subject.trim().is_empty() {
            format!("Portfolio contact from {}", message.name.trim())
        } else {
            format!("[Portfolio] {}", message.subject.trim())
        };

        self.sender
            .send_email(&self.recipient, &subject, &render_body(&message))
            .await
            .map_err(SendContactMessageError::DeliveryFailed)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingSender {
        sent: Mutex<Vec<(String, String, String)>>,
        fail: bool,
    }

    #[async_trait]
    impl EmailSender for RecordingSender {
        async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
            if self.fail {
                return Err("relay rejected".to_string());
            }
            self.sent.lock().unwrap().push((
                to.to_string(),
                subject.to_string(),
                body.to_string(),
            ));
            Ok(())
        }
    }

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Jamie".to_string(),
            email: "jamie@example.org".to_string(),
            subject: "Freelance work".to_string(),
            message: "Are you available in September?".to_string(),
        }
    }

    fn service(fail: bool) -> (SendContactMessageService, Arc<RecordingSender>) {
        let sender = Arc::new(RecordingSender {
            sent: Mutex::new(Vec::new()),
            fail,
        });
        (
            SendContactMessageService::new(sender.clone(), "owner@example.com".to_string()),
            sender,
        )
    }

    #[tokio::test]
    async fn relays_to_owner_with_tagged_subject() {
        let (service, sender) = service(false);

        service.execute(message()).await.unwrap();

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "owner@example.com");
        assert_eq!(sent[0].1, "[Portfolio] Freelance work");
        assert!(sent[0].2.contains("jamie@example.org"));
    }

    #[tokio::test]
    async fn empty_subject_gets_a_default() {
        let (service, sender) = service(false);

        let mut msg = message();
        msg.subject = "  ".to_string();
        service.execute(msg).await.unwrap();

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent[0].1, "Portfolio contact from Jamie");
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let (service, sender) = service(false);

        let mut msg = message();
        msg.email = "not-an-address".to_string();

        let err = service.execute(msg).await.unwrap_err();
        assert!(matches!(err, SendContactMessageError::InvalidEmail));
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_message_is_rejected() {
        let (service, _sender) = service(false);

        let mut msg = message();
        msg.message = "\n\t ".to_string();

        let err = service.execute(msg).await.unwrap_err();
        assert!(matches!(err, SendContactMessageError::EmptyMessage));
    }

    #[tokio::test]
    async fn relay_failure_maps_to_delivery_failed() {
        let (service, _sender) = service(true);

        let err = service.execute(message()).await.unwrap_err();
        assert!(matches!(err, SendContactMessageError::DeliveryFailed(_)));
    }
}
