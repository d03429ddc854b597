use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the content store, one implementation per record type.
///
/// Rows come back in the type's listing order and with list fields already
/// decoded.
#[async_trait]
pub trait ContentQuery<R>: Send + Sync
where
    R: Send + 'static,
{
    async fn fetch_all(&self) -> Result<Vec<R>, ContentQueryError>;
}
