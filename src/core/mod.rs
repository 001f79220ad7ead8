pub mod collection;
pub mod entity;
pub mod error;

pub use collection::Collection;
pub use entity::Entity;
pub use error::{ApiError, Error, Result};
