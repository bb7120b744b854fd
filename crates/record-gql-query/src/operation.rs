use indoc::formatdoc;
use object_metadata::ObjectMetadataItem;

use crate::{ObjectQueryProjector, RecordGqlFields};

/// A paginated `FindMany<Plural>` query over an object's collection field.
///
/// Variables: `$filter`, `$orderBy`, `$lastCursor` (the `after` cursor) and
/// `$limit` (page size).
pub fn generate_find_many_records_query<P>(
    object_projector: &P,
    object_metadata_items: &[ObjectMetadataItem],
    object_metadata_item: &ObjectMetadataItem,
    record_gql_fields: Option<&RecordGqlFields>,
    compute_references: bool,
) -> String
where
    P: ObjectQueryProjector + ?Sized,
{
    let selection = object_projector.project_object(
        object_metadata_items,
        object_metadata_item,
        record_gql_fields,
        compute_references,
        true,
    );

    let singular_type = capitalize(&object_metadata_item.name_singular);
    let plural_type = capitalize(&object_metadata_item.name_plural);
    let plural = &object_metadata_item.name_plural;

    tracing::debug!(object = %object_metadata_item.name_singular, "generating FindMany{plural_type} query");

    formatdoc! {"
        query FindMany{plural_type}($filter: {singular_type}FilterInput, $orderBy: [{singular_type}OrderByInput], $lastCursor: String, $limit: Int) {{
          {plural}(filter: $filter, orderBy: $orderBy, first: $limit, after: $lastCursor) {{
            edges {{
              node {selection}
              cursor
            }}
            pageInfo {{
              hasNextPage
              startCursor
              endCursor
            }}
            totalCount
          }}
        }}
        ",
        plural_type = plural_type,
        singular_type = singular_type,
        plural = plural,
        selection = selection,
    }
}

/// A `FindOne<Singular>` query fetching a record by `$objectRecordId`.
pub fn generate_find_one_record_query<P>(
    object_projector: &P,
    object_metadata_items: &[ObjectMetadataItem],
    object_metadata_item: &ObjectMetadataItem,
    record_gql_fields: Option<&RecordGqlFields>,
    compute_references: bool,
) -> String
where
    P: ObjectQueryProjector + ?Sized,
{
    let selection = object_projector.project_object(
        object_metadata_items,
        object_metadata_item,
        record_gql_fields,
        compute_references,
        true,
    );

    let singular_type = capitalize(&object_metadata_item.name_singular);
    let singular = &object_metadata_item.name_singular;

    tracing::debug!(object = %singular, "generating FindOne{singular_type} query");

    formatdoc! {"
        query FindOne{singular_type}($objectRecordId: ID!) {{
          {singular}(filter: {{ id: {{ eq: $objectRecordId }} }}) {selection}
        }}
        ",
        singular_type = singular_type,
        singular = singular,
        selection = selection,
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
