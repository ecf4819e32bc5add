pub mod identifier;
pub mod record;

pub use identifier::{decode_record_key, IDENTIFIER_DELIMITER, MIN_IDENTIFIER_FIELDS};
pub use record::{OutputRecord, RecordKey, PRESENT_MARKER};
