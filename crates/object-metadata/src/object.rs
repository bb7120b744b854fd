use serde::Deserialize;

use crate::FieldMetadataItem;

/// One modeled business object, e.g. Person or Company
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMetadataItem {
    /// Opaque metadata identifier, the target of relation definitions
    pub id: String,
    /// GraphQL name of a single record, e.g. `person`
    pub name_singular: String,
    /// GraphQL name of a record collection, e.g. `people`
    pub name_plural: String,
    /// Human readable singular label
    #[serde(default)]
    pub label_singular: String,
    /// Human readable plural label
    #[serde(default)]
    pub label_plural: String,
    /// Inactive objects are hidden from the API
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldMetadataItem>,
}

impl ObjectMetadataItem {
    /// An active object without fields.
    pub fn new(id: impl Into<String>, name_singular: impl Into<String>, name_plural: impl Into<String>) -> Self {
        let name_singular = name_singular.into();
        let name_plural = name_plural.into();

        Self {
            id: id.into(),
            label_singular: name_singular.clone(),
            label_plural: name_plural.clone(),
            name_singular,
            name_plural,
            is_active: true,
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    pub fn with_field(mut self, field: FieldMetadataItem) -> Self {
        self.fields.push(field);
        self
    }

    /// Looks up a field by its GraphQL name.
    pub fn field(&self, name: &str) -> Option<&FieldMetadataItem> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Active fields, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &FieldMetadataItem> + '_ {
        self.fields.iter().filter(|field| field.is_active)
    }
}

/// Finds the object with the given id. A linear scan: workspaces hold tens of
/// objects, not thousands.
pub fn find_object_by_id<'a>(object_metadata_items: &'a [ObjectMetadataItem], id: &str) -> Option<&'a ObjectMetadataItem> {
    object_metadata_items.iter().find(|item| item.id == id)
}

/// Finds an object by its singular or plural GraphQL name.
pub fn find_object_by_name<'a>(
    object_metadata_items: &'a [ObjectMetadataItem],
    name: &str,
) -> Option<&'a ObjectMetadataItem> {
    object_metadata_items
        .iter()
        .find(|item| item.name_singular == name || item.name_plural == name)
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldMetadataType;

    fn items() -> Vec<ObjectMetadataItem> {
        vec![
            ObjectMetadataItem::new("obj-person", "person", "people")
                .with_field(FieldMetadataItem::new("f-1", "name", FieldMetadataType::FullName))
                .with_field(FieldMetadataItem::new("f-2", "legacyId", FieldMetadataType::Text).inactive())
                .with_field(FieldMetadataItem::new("f-3", "city", FieldMetadataType::Text)),
            ObjectMetadataItem::new("obj-company", "company", "companies"),
        ]
    }

    #[test]
    fn lookup_by_id() {
        let items = items();

        assert_eq!(
            Some("company"),
            find_object_by_id(&items, "obj-company").map(|item| item.name_singular.as_str())
        );
        assert!(find_object_by_id(&items, "obj-missing").is_none());
        assert!(find_object_by_id(&[], "obj-company").is_none());
    }

    #[test]
    fn lookup_by_either_name() {
        let items = items();

        assert_eq!(Some("obj-person"), find_object_by_name(&items, "person").map(|i| i.id.as_str()));
        assert_eq!(Some("obj-person"), find_object_by_name(&items, "people").map(|i| i.id.as_str()));
        assert!(find_object_by_name(&items, "Person").is_none());
    }

    #[test]
    fn active_fields_skip_inactive() {
        let items = items();
        let names: Vec<_> = items[0].active_fields().map(|field| field.name.as_str()).collect();

        assert_eq!(vec!["name", "city"], names);
        assert!(items[0].field("legacyId").is_some());
    }
}
