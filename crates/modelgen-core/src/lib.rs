mod error;
pub use error::Error;

pub mod schema;
pub use schema::Schema;

pub mod ty;
pub use ty::{ScalarType, TemporalKind};

/// A Result type alias that uses modelgen's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
