//! # Object metadata
//!
//! Snapshots of the schema metadata a workspace exposes: its objects (Person,
//! Company, ...) and their typed fields. Clients derive their GraphQL queries from
//! these snapshots, so everything here is plain read-only data, deserialized from
//! the JSON the metadata API serves.

#![deny(missing_docs)]
#![cfg_attr(test, allow(unused_crate_dependencies))]

mod error;
mod field;
mod load;
mod object;
mod relation;

pub use error::MetadataError;
pub use field::{FieldMetadataItem, FieldMetadataType};
pub use load::{from_json_slice, from_json_str, from_path};
pub use object::{find_object_by_id, find_object_by_name, ObjectMetadataItem};
pub use relation::{FieldMetadataRef, ObjectMetadataRef, RelationDefinition, RelationDefinitionType};
