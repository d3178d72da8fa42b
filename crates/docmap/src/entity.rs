use crate::{keyed::Keyed, EntityId, Result};

/// The plain, loosely-typed record shape produced by non-hydrating queries
/// and by the executor boundary.
///
/// A document carries its identifier in the canonical `_id` field, or in the
/// `id` alias field; when both are present they stringify to the same value.
pub type Document = serde_json::Map<String, serde_json::Value>;

pub trait Entity: Keyed + Sized {
    /// The collection this entity kind is persisted in.
    ///
    /// Used by resolver operations to dispatch lookups to the executor.
    const COLLECTION: &'static str;

    /// Hydrate an instance of the entity from a raw document.
    fn load(document: Document) -> Result<Self>;
}

/// Read the identifier off a raw document, trying the `id` alias field
/// before the canonical `_id` field.
pub(crate) fn document_id(document: &Document) -> Option<EntityId> {
    ["id", "_id"]
        .into_iter()
        .find_map(|field| document.get(field)?.as_str()?.parse().ok())
}

