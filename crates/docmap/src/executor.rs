use crate::{async_trait, Document, EntityId, Result};

use std::fmt::Debug;

/// The external mapper boundary.
///
/// Resolver operations take an explicit executor handle; there is no ambient
/// connection state. Implementations return raw documents and leave
/// hydration to [`Entity::load`](crate::Entity::load). Errors from the
/// underlying client should be surfaced with
/// [`Error::executor`](crate::Error::executor); they are forwarded to the
/// caller unchanged.
#[async_trait]
pub trait QueryExecutor: Debug + Send + Sync {
    /// Look up a single document by identifier.
    async fn find_by_id(&self, collection: &str, id: &EntityId) -> Result<Option<Document>>;

    /// Look up a batch of documents by identifier.
    ///
    /// Identifiers that match nothing are silently omitted from the result,
    /// not reported individually.
    async fn find_by_ids(&self, collection: &str, ids: &[EntityId]) -> Result<Vec<Document>>;
}
