mod entity;
pub use entity::{Document, Entity};

mod error;
pub use error::Error;

pub mod executor;
pub use executor::QueryExecutor;

mod id;
pub use id::EntityId;

pub mod keyed;
pub use keyed::{Keyed, LeanDocument, QueryResult};

pub mod populate;
pub use populate::{
    extract_reference_id, resolve_reference, resolve_reference_or_else, resolve_references,
};

mod reference;
pub use reference::Reference;

/// A Result type alias that uses docmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
