use async_trait::async_trait;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ListContactMessagesError, ListContactMessagesUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactRepository;
use crate::modules::contact::domain::ContactMessage;

pub struct ListContactMessagesService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> ListContactMessagesService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListContactMessagesUseCase for ListContactMessagesService<R>
where
    R: ContactRepository,
{
    async fn execute(&self) -> Result<Vec<ContactMessage>, ListContactMessagesError> {
        Ok(self.repository.list_newest_first().await?)
    }
}
