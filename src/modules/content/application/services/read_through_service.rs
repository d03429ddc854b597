use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::modules::content::application::ports::incoming::use_cases::{
    GetPersonalInfoError, GetPersonalInfoUseCase, ListContentError, ListContentUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentQuery;
use crate::modules::content::domain::{Experience, PersonalInfo, Project, Skill};

/// A content type that can be served from the store or from fallback data.
pub trait ContentRecord: Clone + Send + Sync + 'static {
    /// Used in log lines.
    const KIND: &'static str;
}

impl ContentRecord for PersonalInfo {
    const KIND: &'static str = "personal_info";
}

impl ContentRecord for Experience {
    const KIND: &'static str = "experience";
}

impl ContentRecord for Project {
    const KIND: &'static str = "projects";
}

impl ContentRecord for Skill {
    const KIND: &'static str = "skills";
}

type FallbackFn<R> = Box<dyn Fn() -> Vec<R> + Send + Sync>;

// ============================================================================
// Service Implementation
// ============================================================================

/// Serves stored rows when there are any, otherwise the built-in list.
///
/// A non-empty store always wins, even with fewer rows than the fallback.
/// A failing store is treated like an empty one; only when the fallback is
/// empty as well does the error reach the caller.
pub struct ReadThroughService<Q, R>
where
    Q: ContentQuery<R>,
    R: ContentRecord,
{
    query: Q,
    fallback: FallbackFn<R>,
}

impl<Q, R> ReadThroughService<Q, R>
where
    Q: ContentQuery<R>,
    R: ContentRecord,
{
    pub fn new(query: Q, fallback: impl Fn() -> Vec<R> + Send + Sync + 'static) -> Self {
        Self {
            query,
            fallback: Box::new(fallback),
        }
    }

    async fn resolve(&self) -> Result<Vec<R>, ListContentError> {
        match self.query.fetch_all().await {
            Ok(rows) if !rows.is_empty() => Ok(rows),

            Ok(_) => {
                debug!(kind = R::KIND, "Store is empty, serving fallback content");
                Ok((self.fallback)())
            }

            Err(err) => {
                let fallback = (self.fallback)();
                if fallback.is_empty() {
                    error!(kind = R::KIND, error = %err, "Content query failed");
                    return Err(ListContentError::QueryFailed(err.to_string()));
                }

                warn!(
                    kind = R::KIND,
                    error = %err,
                    "Content query failed, serving fallback content"
                );
                Ok(fallback)
            }
        }
    }
}

#[async_trait]
impl<Q, R> ListContentUseCase<R> for ReadThroughService<Q, R>
where
    Q: ContentQuery<R>,
    R: ContentRecord,
{
    async fn execute(&self) -> Result<Vec<R>, ListContentError> {
        self.resolve().await
    }
}

#[async_trait]
impl<Q> GetPersonalInfoUseCase for ReadThroughService<Q, PersonalInfo>
where
    Q: ContentQuery<PersonalInfo>,
{
    async fn execute(&self) -> Result<PersonalInfo, GetPersonalInfoError> {
        self.resolve()
            .await?
            .into_iter()
            .next()
            .ok_or(GetPersonalInfoError::NotFound)
    }
}
