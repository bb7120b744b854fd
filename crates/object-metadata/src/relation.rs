use serde::Deserialize;

/// Cardinality of a relation, seen from the field that declares it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum RelationDefinitionType {
    ManyToOne,
    OneToMany,
    OneToOne,
    ManyToMany,
}

/// Pointer to an object on either side of a relation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMetadataRef {
    /// Identifier of the referenced object
    pub id: String,
    /// Singular GraphQL name, when the server sends it
    #[serde(default)]
    pub name_singular: Option<String>,
    /// Plural GraphQL name, when the server sends it
    #[serde(default)]
    pub name_plural: Option<String>,
}

impl ObjectMetadataRef {
    /// A reference carrying only the identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name_singular: None,
            name_plural: None,
        }
    }
}

/// Pointer to the inverse field of a relation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[allow(missing_docs)]
pub struct FieldMetadataRef {
    pub id: String,
    pub name: String,
}

/// How a RELATION field links its object to another one
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationDefinition {
    /// Cardinality of the relation
    pub direction: RelationDefinitionType,
    /// The object declaring the field
    #[serde(default)]
    pub source_object_metadata: Option<ObjectMetadataRef>,
    /// The object the field points to
    pub target_object_metadata: ObjectMetadataRef,
    /// The inverse field on the target object
    #[serde(default)]
    pub target_field_metadata: Option<FieldMetadataRef>,
}

impl RelationDefinition {
    /// A relation to the object with the given id.
    pub fn new(direction: RelationDefinitionType, target_object_id: impl Into<String>) -> Self {
        Self {
            direction,
            source_object_metadata: None,
            target_object_metadata: ObjectMetadataRef::new(target_object_id),
            target_field_metadata: None,
        }
    }
}
