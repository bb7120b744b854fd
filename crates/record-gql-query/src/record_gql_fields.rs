use std::collections::BTreeMap;

use object_metadata::ObjectMetadataItem;
use serde::{Deserialize, Serialize};

/// Which fields of a record to request, by field name.
///
/// In JSON: `{"name": true, "company": {"name": true, "domainName": true}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordGqlFields(BTreeMap<String, RecordGqlField>);

/// Selection of a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordGqlField {
    /// `true` requests the field with its default projection, `false` omits it.
    Selected(bool),
    /// Requests a relation field with an explicit sub-selection of its target.
    Nested(RecordGqlFields),
}

impl RecordGqlFields {
    /// An empty selection. Selects nothing, unlike an absent selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` with its default projection.
    pub fn select(mut self, name: impl Into<String>) -> Self {
        self.0.insert(name.into(), RecordGqlField::Selected(true));
        self
    }

    /// Adds `name` with an explicit sub-selection.
    pub fn nested(mut self, name: impl Into<String>, fields: RecordGqlFields) -> Self {
        self.0.insert(name.into(), RecordGqlField::Nested(fields));
        self
    }

    /// The raw entry for `name`.
    pub fn get(&self, name: &str) -> Option<&RecordGqlField> {
        self.0.get(name)
    }

    /// Whether `name` should be part of the query.
    pub fn is_selected(&self, name: &str) -> bool {
        matches!(
            self.get(name),
            Some(RecordGqlField::Selected(true) | RecordGqlField::Nested(_))
        )
    }

    /// Number of entries, including deselected ones.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, RecordGqlField)> for RecordGqlFields {
    fn from_iter<T: IntoIterator<Item = (String, RecordGqlField)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Selects every active field of the object. Relations are selected with the
/// default projection of their target, which does not descend into further
/// relations.
pub fn generate_depth_one_record_gql_fields(object_metadata_item: &ObjectMetadataItem) -> RecordGqlFields {
    object_metadata_item
        .active_fields()
        .map(|field| (field.name.clone(), RecordGqlField::Selected(true)))
        .collect()
}
