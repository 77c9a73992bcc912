// Service exports
pub mod contact;
pub mod store;

pub use contact::{mailto_link, ContactError};
pub use store::{JsonFileStore, MemoryStore, ProfileStore, StoreError};
