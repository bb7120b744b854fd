//! # Record GraphQL queries
//!
//! Builds the GraphQL text a client sends to read records, from nothing but the
//! object metadata of the workspace:
//!
//! - [`map_field_metadata_to_graphql_query`] projects one field: a bare name for
//!   scalars, a fixed sub-selection for composite values, a nested object
//!   selection for relations.
//! - [`ObjectQueryProjector`] projects a whole object into a `{ ... }` selection
//!   set. [`DefaultObjectProjector`] is the implementation used by the
//!   operations.
//! - [`generate_find_many_records_query`] and [`generate_find_one_record_query`]
//!   wrap an object selection into a complete operation.
//!
//! None of these fail. Fields that cannot be projected (a relation whose target
//! is missing from the metadata, an unknown field type) contribute an empty
//! string and are left out of the object selection.

#![deny(missing_docs)]
#![cfg_attr(test, allow(unused_crate_dependencies))]

mod field;
mod object;
mod operation;
mod record_gql_fields;


pub use field::map_field_metadata_to_graphql_query;
pub use object::{DefaultObjectProjector, ObjectQueryProjector};
pub use operation::{generate_find_many_records_query, generate_find_one_record_query};
pub use record_gql_fields::{generate_depth_one_record_gql_fields, RecordGqlField, RecordGqlFields};
