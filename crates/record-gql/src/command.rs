use anyhow::{anyhow, bail};
use object_metadata::{find_object_by_name, ObjectMetadataItem};
use record_gql_query::{
    generate_find_many_records_query, generate_find_one_record_query, map_field_metadata_to_graphql_query,
    DefaultObjectProjector,
};

use crate::args::{Command, SelectionArgs};

/// Renders the GraphQL text requested by `command`.
pub(crate) fn render(
    command: &Command,
    object_metadata_items: &[ObjectMetadataItem],
    compute_references_by_default: bool,
) -> anyhow::Result<String> {
    let compute_references =
        |selection: &SelectionArgs| selection.compute_references || compute_references_by_default;

    match command {
        Command::FindMany { object, selection } => {
            let object = find_object(object_metadata_items, object)?;
            let fields = selection.record_gql_fields()?;

            Ok(generate_find_many_records_query(
                &DefaultObjectProjector,
                object_metadata_items,
                object,
                fields.as_ref(),
                compute_references(selection),
            ))
        }
        Command::FindOne { object, selection } => {
            let object = find_object(object_metadata_items, object)?;
            let fields = selection.record_gql_fields()?;

            Ok(generate_find_one_record_query(
                &DefaultObjectProjector,
                object_metadata_items,
                object,
                fields.as_ref(),
                compute_references(selection),
            ))
        }
        Command::Field {
            object,
            field,
            selection,
        } => {
            let object = find_object(object_metadata_items, object)?;
            let fields = selection.record_gql_fields()?;

            let field = object
                .field(field)
                .ok_or_else(|| anyhow!("object `{}` has no field `{field}`", object.name_singular))?;

            let projection = map_field_metadata_to_graphql_query(
                &DefaultObjectProjector,
                object_metadata_items,
                field,
                fields.as_ref(),
                compute_references(selection),
            );

            if projection.is_empty() {
                bail!(
                    "field `{}` of type {} cannot be projected, its relation target may be missing from the metadata",
                    field.name,
                    field.r#type
                );
            }

            Ok(projection)
        }
    }
}

fn find_object<'a>(object_metadata_items: &'a [ObjectMetadataItem], name: &str) -> anyhow::Result<&'a ObjectMetadataItem> {
    let object = find_object_by_name(object_metadata_items, name).ok_or_else(|| anyhow!("unknown object `{name}`"))?;

    if !object.is_active {
        tracing::warn!("object `{name}` is inactive");
    }

    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const METADATA: &str = indoc! {r#"
        {
          "objects": [
            {
              "id": "obj-person",
              "nameSingular": "person",
              "namePlural": "people",
              "fields": [
                { "id": "f-1", "name": "name", "type": "FULL_NAME" },
                { "id": "f-2", "name": "city", "type": "TEXT" },
                {
                  "id": "f-3",
                  "name": "company",
                  "type": "RELATION",
                  "relationDefinition": {
                    "direction": "MANY_TO_ONE",
                    "targetObjectMetadata": { "id": "obj-company" }
                  }
                },
                {
                  "id": "f-4",
                  "name": "assignee",
                  "type": "RELATION",
                  "relationDefinition": {
                    "direction": "MANY_TO_ONE",
                    "targetObjectMetadata": { "id": "obj-workspace-member" }
                  }
                }
              ]
            },
            {
              "id": "obj-company",
              "nameSingular": "company",
              "namePlural": "companies",
              "fields": [
                { "id": "f-5", "name": "name", "type": "TEXT" }
              ]
            }
          ]
        }
    "#};

    fn items() -> Vec<ObjectMetadataItem> {
        object_metadata::from_json_str(METADATA).unwrap()
    }

    fn selection(fields: Option<&str>, compute_references: bool) -> SelectionArgs {
        SelectionArgs {
            fields: fields.map(str::to_owned),
            compute_references,
        }
    }

    #[test]
    fn find_one_by_plural_name() {
        let command = Command::FindOne {
            object: "people".to_string(),
            selection: selection(Some(r#"{"city": true}"#), false),
        };

        let query = render(&command, &items(), false).unwrap();

        insta::assert_snapshot!(query, @r###"
        query FindOnePerson($objectRecordId: ID!) {
          person(filter: { id: { eq: $objectRecordId } }) {
        __typename
        city
        }
        }
        "###);
    }

    #[test]
    fn find_many_uses_configured_references() {
        let command = Command::FindMany {
            object: "person".to_string(),
            selection: selection(Some(r#"{"company": true}"#), false),
        };

        let query = render(&command, &items(), true).unwrap();

        assert!(query.contains("company\n{\n  __ref\n}"));
    }

    #[test]
    fn field_projection() {
        let command = Command::Field {
            object: "person".to_string(),
            field: "company".to_string(),
            selection: selection(None, false),
        };

        let projection = render(&command, &items(), false).unwrap();

        assert_eq!("company\n{\n__typename\nname\n}", projection);
    }

    #[test]
    fn unknown_object() {
        let command = Command::FindMany {
            object: "opportunities".to_string(),
            selection: selection(None, false),
        };

        let error = render(&command, &items(), false).unwrap_err();

        insta::assert_snapshot!(error.to_string(), @"unknown object `opportunities`");
    }

    #[test]
    fn unknown_field() {
        let command = Command::Field {
            object: "person".to_string(),
            field: "phone".to_string(),
            selection: selection(None, false),
        };

        let error = render(&command, &items(), false).unwrap_err();

        insta::assert_snapshot!(error.to_string(), @"object `person` has no field `phone`");
    }

    #[test]
    fn unprojectable_field() {
        let command = Command::Field {
            object: "person".to_string(),
            field: "assignee".to_string(),
            selection: selection(None, false),
        };

        let error = render(&command, &items(), false).unwrap_err();

        insta::assert_snapshot!(
            error.to_string(),
            @"field `assignee` of type RELATION cannot be projected, its relation target may be missing from the metadata"
        );
    }
}
