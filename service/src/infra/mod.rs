//! Infrastructure layer.

pub mod cache;
pub mod source;

pub use self::{cache::Cache, source::Source};
