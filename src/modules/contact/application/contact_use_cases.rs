use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ListContactMessagesUseCase, SubmitContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub list_messages: Arc<dyn ListContactMessagesUseCase + Send + Sync>,
}
