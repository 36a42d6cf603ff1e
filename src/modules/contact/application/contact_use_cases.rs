use std::sync::Arc;

use crate::contact::application::ports::incoming::use_cases::SendContactMessageUseCase;

#[derive(Clone)]
pub struct ContactUseCases {
    pub send: Arc<dyn SendContactMessageUseCase + Send + Sync>,
}
