use serde::Deserialize;

use crate::RelationDefinition;

/// The kind of value a field holds.
///
/// Unrecognized type names from newer servers deserialize into
/// [`FieldMetadataType::Unknown`] instead of failing the whole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, strum::Display, strum::EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum FieldMetadataType {
    Uuid,
    Text,
    Phone,
    Email,
    DateTime,
    Date,
    Boolean,
    Number,
    Numeric,
    Link,
    Links,
    Currency,
    FullName,
    Rating,
    Select,
    MultiSelect,
    Position,
    Address,
    RawJson,
    RichText,
    #[serde(rename = "RICH_TEXT_V2")]
    #[strum(serialize = "RICH_TEXT_V2")]
    RichTextV2,
    Actor,
    Array,
    Emails,
    Phones,
    Relation,
    TsVector,
    #[serde(other)]
    Unknown,
}

const LINKS_SUB_FIELDS: &[&str] = &["primaryLinkUrl", "primaryLinkLabel", "secondaryLinks"];
const CURRENCY_SUB_FIELDS: &[&str] = &["amountMicros", "currencyCode"];
const FULL_NAME_SUB_FIELDS: &[&str] = &["firstName", "lastName"];
const ADDRESS_SUB_FIELDS: &[&str] = &[
    "addressStreet1",
    "addressStreet2",
    "addressCity",
    "addressState",
    "addressCountry",
    "addressPostcode",
    "addressLat",
    "addressLng",
];
const ACTOR_SUB_FIELDS: &[&str] = &["source", "workspaceMemberId", "name", "context"];
const EMAILS_SUB_FIELDS: &[&str] = &["primaryEmail", "additionalEmails"];
const PHONES_SUB_FIELDS: &[&str] = &[
    "primaryPhoneNumber",
    "primaryPhoneCountryCode",
    "primaryPhoneCallingCode",
    "additionalPhones",
];
const RICH_TEXT_V2_SUB_FIELDS: &[&str] = &["blocknote", "markdown"];

impl FieldMetadataType {
    /// The ordered sub-fields the API exposes for a composite type. `None` for
    /// scalars, relations and unknown types.
    pub fn composite_sub_fields(self) -> Option<&'static [&'static str]> {
        let sub_fields = match self {
            Self::Links => LINKS_SUB_FIELDS,
            Self::Currency => CURRENCY_SUB_FIELDS,
            Self::FullName => FULL_NAME_SUB_FIELDS,
            Self::Address => ADDRESS_SUB_FIELDS,
            Self::Actor => ACTOR_SUB_FIELDS,
            Self::Emails => EMAILS_SUB_FIELDS,
            Self::Phones => PHONES_SUB_FIELDS,
            Self::RichTextV2 => RICH_TEXT_V2_SUB_FIELDS,
            _ => return None,
        };

        Some(sub_fields)
    }

    /// Whether the value is a structured group of sub-fields.
    pub fn is_composite(self) -> bool {
        self.composite_sub_fields().is_some()
    }

    /// Whether the field is requested by its bare name. Relations, composites
    /// and unknown types are not.
    pub fn is_non_composite(self) -> bool {
        !matches!(self, Self::Relation | Self::Unknown) && !self.is_composite()
    }
}

/// A field of an object, as described by the metadata API
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetadataItem {
    /// Opaque metadata identifier
    pub id: String,
    /// GraphQL name of the field
    pub name: String,
    /// Human readable label
    #[serde(default)]
    pub label: String,
    /// Kind of value stored in the field
    #[serde(rename = "type")]
    pub r#type: FieldMetadataType,
    /// Inactive fields exist in the schema but are never queried
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Whether the value may be null
    #[serde(default = "default_true")]
    pub is_nullable: bool,
    /// Present only on RELATION fields
    #[serde(default)]
    pub relation_definition: Option<RelationDefinition>,
}

impl FieldMetadataItem {
    /// An active, nullable field without a relation.
    pub fn new(id: impl Into<String>, name: impl Into<String>, r#type: FieldMetadataType) -> Self {
        let name = name.into();

        Self {
            id: id.into(),
            label: name.clone(),
            name,
            r#type,
            is_active: true,
            is_nullable: true,
            relation_definition: None,
        }
    }

    /// Attaches a relation definition, turning the field into a RELATION.
    pub fn with_relation(mut self, relation_definition: RelationDefinition) -> Self {
        self.r#type = FieldMetadataType::Relation;
        self.relation_definition = Some(relation_definition);
        self
    }

    /// Marks the field as inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

fn default_true() -> bool {
    true
}
