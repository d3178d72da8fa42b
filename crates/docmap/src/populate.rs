use crate::{entity, Entity, EntityId, Error, QueryExecutor, Reference, Result};

/// Extracts the identifier from a reference without touching the executor.
///
/// A raw identifier is returned directly; a materialized entity yields its
/// own key; an embedded document yields its `id` or `_id` field.
///
/// # Errors
///
/// Returns [`Error::InvalidReference`] when the reference is absent or
/// exposes no identifier-bearing field.
pub fn extract_reference_id<T: Entity>(reference: Option<&Reference<T>>) -> Result<EntityId> {
    match reference {
        Some(Reference::Id(id)) => Ok(*id),
        Some(Reference::Entity(entity)) => Ok(entity.key()),
        Some(Reference::Embedded(document)) => {
            entity::document_id(document).ok_or(Error::InvalidReference)
        }
        None => Err(Error::InvalidReference),
    }
}

/// Resolves a reference into a materialized entity.
///
/// An already-materialized reference is returned unchanged with zero
/// executor calls. Anything else is treated as an identifier and looked up
/// with exactly one `find_by_id` call; an empty result is
/// [`Error::NotFound`].
pub async fn resolve_reference<T, X>(executor: &X, reference: Reference<T>) -> Result<T>
where
    T: Entity,
    X: QueryExecutor + ?Sized,
{
    resolve_reference_or_else(executor, reference, || Error::not_found(T::COLLECTION)).await
}

/// Same as [`resolve_reference`], substituting the caller's failure
/// semantics when the lookup finds nothing.
pub async fn resolve_reference_or_else<T, X, F>(
    executor: &X,
    reference: Reference<T>,
    not_found: F,
) -> Result<T>
where
    T: Entity,
    X: QueryExecutor + ?Sized,
    F: FnOnce() -> Error,
{
    match reference {
        Reference::Entity(entity) => Ok(*entity),
        reference => {
            let id = extract_reference_id(Some(&reference))?;
            tracing::debug!(collection = T::COLLECTION, %id, "resolving reference");

            match executor.find_by_id(T::COLLECTION, &id).await? {
                Some(document) => T::load(document),
                None => Err(not_found()),
            }
        }
    }
}

/// Resolves a batch of references into materialized entities.
///
/// References are partitioned into already-materialized entities and
/// identifiers needing lookup, each group keeping its input-relative order.
/// At most one batched `find_by_ids` call is made, covering the pending
/// identifiers; the output is the materialized group followed by the freshly
/// loaded group, so the original interleaving between the groups is not
/// preserved.
///
/// Identifiers that match nothing are absent from the output rather than an
/// error, as are embedded values carrying no usable identifier. Only
/// total-operation failures (an executor error, a document that fails to
/// load) fail the call.
pub async fn resolve_references<T, X>(executor: &X, references: Vec<Reference<T>>) -> Result<Vec<T>>
where
    T: Entity,
    X: QueryExecutor + ?Sized,
{
    let mut resolved = Vec::with_capacity(references.len());
    let mut pending = vec![];

    for reference in references {
        match reference {
            Reference::Entity(entity) => resolved.push(*entity),
            Reference::Id(id) => pending.push(id),
            Reference::Embedded(document) => {
                if let Some(id) = entity::document_id(&document) {
                    pending.push(id);
                }
            }
        }
    }

    if !pending.is_empty() {
        tracing::debug!(
            collection = T::COLLECTION,
            pending = pending.len(),
            "resolving reference batch"
        );

        for document in executor.find_by_ids(T::COLLECTION, &pending).await? {
            resolved.push(T::load(document)?);
        }
    }

    Ok(resolved)
}
