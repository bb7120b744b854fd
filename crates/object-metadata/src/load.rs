use std::path::Path;

use serde::Deserialize;

use crate::{MetadataError, ObjectMetadataItem};

#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Wrapped { objects: Vec<ObjectMetadataItem> },
    Bare(Vec<ObjectMetadataItem>),
}

impl Snapshot {
    fn into_objects(self) -> Vec<ObjectMetadataItem> {
        match self {
            Snapshot::Wrapped { objects } | Snapshot::Bare(objects) => objects,
        }
    }
}

/// Parses a snapshot, either `{"objects": [...]}` or a bare array of objects.
pub fn from_json_str(json: &str) -> Result<Vec<ObjectMetadataItem>, MetadataError> {
    let snapshot: Snapshot = serde_json::from_str(json)?;
    Ok(snapshot.into_objects())
}

/// Same as [`from_json_str`], from raw bytes.
pub fn from_json_slice(json: &[u8]) -> Result<Vec<ObjectMetadataItem>, MetadataError> {
    let snapshot: Snapshot = serde_json::from_slice(json)?;
    Ok(snapshot.into_objects())
}

/// Reads and parses a snapshot file.
pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<ObjectMetadataItem>, MetadataError> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|source| MetadataError::Io {
        path: path.to_owned(),
        source,
    })?;

    from_json_slice(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldMetadataType, RelationDefinitionType};
    use indoc::indoc;

    const PERSON: &str = indoc! {r#"
        {
          "id": "obj-person",
          "nameSingular": "person",
          "namePlural": "people",
          "labelSingular": "Person",
          "labelPlural": "People",
          "fields": [
            { "id": "f-1", "name": "id", "type": "UUID" },
            { "id": "f-2", "name": "emails", "type": "EMAILS", "isNullable": false },
            {
              "id": "f-3",
              "name": "company",
              "type": "RELATION",
              "relationDefinition": {
                "direction": "MANY_TO_ONE",
                "sourceObjectMetadata": { "id": "obj-person", "nameSingular": "person", "namePlural": "people" },
                "targetObjectMetadata": { "id": "obj-company", "nameSingular": "company", "namePlural": "companies" },
                "targetFieldMetadata": { "id": "f-9", "name": "people" }
              }
            }
          ]
        }
    "#};

    #[test]
    fn wrapped_snapshot() {
        let json = format!(r#"{{ "objects": [{PERSON}] }}"#);
        let items = from_json_str(&json).unwrap();

        assert_eq!(1, items.len());

        let person = &items[0];
        assert_eq!("People", person.label_plural);
        assert!(person.is_active);
        assert!(!person.fields[1].is_nullable);
        assert_eq!(FieldMetadataType::Emails, person.fields[1].r#type);

        let relation = person.fields[2].relation_definition.as_ref().unwrap();
        assert_eq!(RelationDefinitionType::ManyToOne, relation.direction);
        assert_eq!("obj-company", relation.target_object_metadata.id);
        assert_eq!(Some("people"), relation.target_field_metadata.as_ref().map(|f| f.name.as_str()));
    }

    #[test]
    fn bare_snapshot() {
        let json = format!("[{PERSON}]");
        let items = from_json_slice(json.as_bytes()).unwrap();

        assert_eq!("person", items[0].name_singular);
    }

    #[test]
    fn invalid_snapshot() {
        let error = from_json_str(r#"{ "objects": 3 }"#).unwrap_err();

        assert!(matches!(error, MetadataError::Json(_)));
        assert!(error
            .to_string()
            .starts_with("parsing metadata: data did not match any variant of untagged enum Snapshot"));
    }

    #[test]
    fn missing_file() {
        let error = from_path("/definitely/not/here.json").unwrap_err();

        assert!(matches!(error, MetadataError::Io { .. }));
        assert!(error.to_string().starts_with("reading metadata from /definitely/not/here.json: "));
    }
}
