use crate::{entity, Document, EntityId, Error, Result};

use indexmap::IndexMap;

use std::collections::HashMap;

/// An entity-like value that can key itself in a reshaped query result.
///
/// Implemented by every [`Entity`](crate::Entity) and by [`LeanDocument`],
/// so hydrated and plain results reshape the same way.
pub trait Keyed {
    /// The identifier this value is keyed under.
    fn key(&self) -> EntityId;
}

/// A finished query result: absent, a single value, or an ordered sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult<T> {
    Empty,
    One(T),
    Many(Vec<T>),
}

impl<T> From<Option<T>> for QueryResult<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::One(value),
            None => Self::Empty,
        }
    }
}

impl<T> From<Vec<T>> for QueryResult<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

impl<T: Keyed> QueryResult<T> {
    /// Reshape into an insertion-ordered map keyed by identifier string.
    ///
    /// Values move through untouched. When two elements share an identifier,
    /// the later one in iteration order wins.
    pub fn into_keyed_map(self) -> IndexMap<String, T> {
        self.into_entries().collect()
    }

    /// Reshape into an unordered record keyed by identifier string.
    ///
    /// Same entries as [`into_keyed_map`](Self::into_keyed_map), differing
    /// only in container shape.
    pub fn into_keyed_record(self) -> HashMap<String, T> {
        self.into_entries().collect()
    }

    fn into_entries(self) -> impl Iterator<Item = (String, T)> {
        let values = match self {
            Self::Empty => vec![],
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        };

        values
            .into_iter()
            .map(|value| (value.key().to_string(), value))
    }
}

/// A raw document wrapped for reshaping, with its identifier resolved up
/// front.
///
/// Wrapping fails when the document carries no usable identifier, so the
/// reshaping transforms themselves stay infallible.
#[derive(Debug, Clone, PartialEq)]
pub struct LeanDocument {
    key: EntityId,
    document: Document,
}

impl LeanDocument {
    pub fn new(document: Document) -> Result<Self> {
        let key = entity::document_id(&document).ok_or(Error::InvalidReference)?;
        Ok(Self { key, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

impl Keyed for LeanDocument {
    fn key(&self) -> EntityId {
        self.key
    }
}
