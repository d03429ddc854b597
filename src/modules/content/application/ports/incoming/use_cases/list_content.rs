use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListContentError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// List every record of one content type, stored or built-in.
#[async_trait]
pub trait ListContentUseCase<R>: Send + Sync
where
    R: Send + 'static,
{
    async fn execute(&self) -> Result<Vec<R>, ListContentError>;
}
