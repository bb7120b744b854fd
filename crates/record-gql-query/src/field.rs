use object_metadata::{
    find_object_by_id, FieldMetadataItem, FieldMetadataType, ObjectMetadataItem, RelationDefinitionType,
};

use crate::{ObjectQueryProjector, RecordGqlFields};

const INDENT: &str = "  ";

/// Projects one field into the text of a GraphQL selection.
///
/// Scalars yield their bare name, composite values their fixed sub-field
/// selection. Relations delegate to `object_projector` for the target object,
/// found by id in `object_metadata_items`; MANY_TO_ONE nests the target
/// selection directly, ONE_TO_MANY wraps it in a connection (`edges { node }`).
///
/// Returns an empty string when the field cannot be projected: a relation whose
/// target is not in `object_metadata_items`, a relation without a definition or
/// with an unsupported direction, or an unknown type. Callers drop empty
/// projections when joining a selection set.
pub fn map_field_metadata_to_graphql_query<P>(
    object_projector: &P,
    object_metadata_items: &[ObjectMetadataItem],
    field: &FieldMetadataItem,
    relation_record_gql_fields: Option<&RecordGqlFields>,
    compute_references: bool,
) -> String
where
    P: ObjectQueryProjector + ?Sized,
{
    let field_type = field.r#type;

    if field_type.is_non_composite() {
        return field.name.clone();
    }

    if let Some(sub_fields) = field_type.composite_sub_fields() {
        return composite_selection(&field.name, sub_fields);
    }

    let (FieldMetadataType::Relation, Some(relation_definition)) = (field_type, &field.relation_definition) else {
        return String::new();
    };

    let direction = relation_definition.direction;

    if !matches!(
        direction,
        RelationDefinitionType::ManyToOne | RelationDefinitionType::OneToMany
    ) {
        return String::new();
    }

    let Some(target) = find_object_by_id(object_metadata_items, &relation_definition.target_object_metadata.id) else {
        return String::new();
    };

    let selection = object_projector.project_object(
        object_metadata_items,
        target,
        relation_record_gql_fields,
        compute_references,
        false,
    );

    match direction {
        RelationDefinitionType::OneToMany => {
            format!("{name}\n{{\n{INDENT}edges {{\n{INDENT}{INDENT}node {selection}\n{INDENT}}}\n}}", name = field.name)
        }
        _ => format!("{name}\n{selection}", name = field.name),
    }
}

fn composite_selection(name: &str, sub_fields: &[&str]) -> String {
    let capacity = name.len() + 4 + sub_fields.iter().map(|sub_field| sub_field.len() + 3).sum::<usize>();
    let mut selection = String::with_capacity(capacity);

    selection.push_str(name);
    selection.push_str("\n{\n");

    for sub_field in sub_fields {
        selection.push_str(INDENT);
        selection.push_str(sub_field);
        selection.push('\n');
    }

    selection.push('}');
    selection
}
