//! Tag and category aggregation across the post collection, and the bulk
//! operations that edit every post in a group.

pub mod ops;
pub mod store;
pub mod types;

pub use ops::{ClassifyOpError, add_value, delete_value, rename_value};
pub use store::MetadataStore;
pub use types::{Classification, ClassifyGroup, PostRecord};
