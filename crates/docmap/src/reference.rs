use crate::{Document, EntityId};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;

/// A relation to another entity, in one of three representations.
///
/// A reference field denotes "points at an entity of kind `T`" without
/// necessarily containing the entity: a raw identifier, a loosely-typed
/// value that happens to carry an identifier field (as produced by a
/// non-hydrating query), or the materialized entity itself.
#[derive(Clone, PartialEq)]
pub enum Reference<T> {
    /// The identifier alone, no entity fields.
    Id(EntityId),

    /// A plain document carrying an `id` or `_id` field.
    Embedded(Document),

    /// A fully materialized entity of the expected kind.
    Entity(Box<T>),
}

impl<T> Reference<T> {
    pub fn entity(entity: T) -> Self {
        Self::Entity(Box::new(entity))
    }

    /// Returns `true` if the reference holds a materialized entity.
    pub fn is_materialized(&self) -> bool {
        matches!(self, Self::Entity(_))
    }
}

impl<T: fmt::Debug> fmt::Debug for Reference<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(fmt, "<{id}>"),
            Self::Embedded(document) => document.fmt(fmt),
            Self::Entity(entity) => entity.fmt(fmt),
        }
    }
}

impl<T: Serialize> Serialize for Reference<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Id(id) => id.serialize(serializer),
            Self::Embedded(document) => document.serialize(serializer),
            Self::Entity(entity) => entity.serialize(serializer),
        }
    }
}

impl<'de, T> Deserialize<'de> for Reference<T> {
    /// An identifier string deserializes to [`Reference::Id`], an object to
    /// [`Reference::Embedded`]. A plain read can never produce a
    /// materialized entity, so [`Reference::Entity`] is left to the
    /// hydrating layer.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => s
                .parse()
                .map(Self::Id)
                .map_err(|_| de::Error::custom(format!("invalid reference id: {s:?}"))),
            serde_json::Value::Object(document) => Ok(Self::Embedded(document)),
            other => Err(de::Error::custom(format!(
                "expected an id string or a document, got {other}"
            ))),
        }
    }
}
