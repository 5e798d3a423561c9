//! Registry of the attribute names a workload scheduler uses on the wire
//! for jobs, nodes, storage and virtual machines.
//!
//! Each category is a closed enum whose variants carry their canonical
//! lowercase wiki key. [`registry::resolve`] maps a token back to its
//! [`FieldId`] ignoring ASCII case; [`registry::encode`] goes the other way.

pub mod category;
pub mod config;
pub mod constants;
pub mod errors;
pub mod field;
pub mod logging;
pub mod metric;
pub mod registry;
pub mod resolver;
pub mod types;

pub use category::Category;
pub use field::{
    FieldId, JobField, NativeField, NodeAttributeField, NodeField, StorageField, VmField,
};
pub use registry::{display_encode, encode, resolve};
pub use resolver::{AttributeResolver, UnknownAttributePolicy};
