pub mod types;
pub mod classification;

pub use types::S2pError;
pub use classification::ErrorClassification;
