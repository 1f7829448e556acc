//! Data models for storage.

mod user_record;

pub use user_record::{SampleSize, UserRecord};
