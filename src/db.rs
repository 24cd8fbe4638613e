pub mod store;
pub use store::{Database, JsonStore, StoreError, next_id};
