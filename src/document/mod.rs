//! Parsed Scout2 document and path lookup over it.

pub mod loader;
pub mod path;

pub use loader::{load_document, parse_document, AWS_INFO_PREFIX};
pub use path::Document;
