use object_metadata::{FieldMetadataType, ObjectMetadataItem};

use crate::{map_field_metadata_to_graphql_query, RecordGqlField, RecordGqlFields};

/// Builds the `{ ... }` selection set requesting an object's fields.
///
/// Relation fields call back into their projector for the target object, with
/// `is_root_level` set to false.
pub trait ObjectQueryProjector {
    /// Projects `object_metadata_item`. With `record_gql_fields` absent the
    /// implementation picks a default set of fields.
    fn project_object(
        &self,
        object_metadata_items: &[ObjectMetadataItem],
        object_metadata_item: &ObjectMetadataItem,
        record_gql_fields: Option<&RecordGqlFields>,
        compute_references: bool,
        is_root_level: bool,
    ) -> String;
}

/// Projects `__typename` followed by every selected active field.
///
/// Without an explicit selection all active fields are requested, except that
/// relations are only followed from the root object. This keeps cyclic
/// relations (a company's people, each with their company) finite.
///
/// Below the root, `compute_references` replaces the selection with `__ref`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultObjectProjector;

impl ObjectQueryProjector for DefaultObjectProjector {
    fn project_object(
        &self,
        object_metadata_items: &[ObjectMetadataItem],
        object_metadata_item: &ObjectMetadataItem,
        record_gql_fields: Option<&RecordGqlFields>,
        compute_references: bool,
        is_root_level: bool,
    ) -> String {
        if compute_references && !is_root_level {
            return String::from("{\n  __ref\n}");
        }

        let mut selection = String::with_capacity(64);
        selection.push_str("{\n__typename");

        for field in object_metadata_item.active_fields() {
            let relation_record_gql_fields = match record_gql_fields {
                Some(record_gql_fields) => match record_gql_fields.get(&field.name) {
                    Some(RecordGqlField::Selected(true)) => None,
                    Some(RecordGqlField::Nested(nested)) => Some(nested),
                    Some(RecordGqlField::Selected(false)) | None => continue,
                },
                None if !is_root_level && field.r#type == FieldMetadataType::Relation => continue,
                None => None,
            };

            let projection = map_field_metadata_to_graphql_query(
                self,
                object_metadata_items,
                field,
                relation_record_gql_fields,
                compute_references,
            );

            if projection.is_empty() {
                tracing::trace!(
                    object = %object_metadata_item.name_singular,
                    field = %field.name,
                    field_type = %field.r#type,
                    "field has no projection, leaving it out of the selection"
                );
                continue;
            }

            selection.push('\n');
            selection.push_str(&projection);
        }

        selection.push_str("\n}");
        selection
    }
}
