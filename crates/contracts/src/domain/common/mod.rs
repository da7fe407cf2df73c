//! Types shared by all record collections

pub mod page_key;
pub mod record_id;
pub mod seed;

pub use page_key::PageKey;
pub use record_id::RecordId;
pub use seed::parse_seed;
