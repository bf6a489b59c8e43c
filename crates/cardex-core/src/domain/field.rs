use serde::{Deserialize, Serialize};

/// Declaration order is the canonical serialization order; the derived `Ord`
/// relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Name,
    Organisation,
    Phone,
    Email,
    Title,
    Address,
    Birthday,
}

pub const REQUIRED_FIELDS: [FieldKind; 2] = [FieldKind::Name, FieldKind::Phone];

impl FieldKind {
    pub const ALL: [FieldKind; 7] = [
        FieldKind::Name,
        FieldKind::Organisation,
        FieldKind::Phone,
        FieldKind::Email,
        FieldKind::Title,
        FieldKind::Address,
        FieldKind::Birthday,
    ];

    /// Column name the field is recognized under. Headers are lower-cased
    /// before lookup, so these are all lowercase.
    pub fn column_name(self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Organisation => "organisation",
            FieldKind::Phone => "phone",
            FieldKind::Email => "email",
            FieldKind::Title => "title",
            FieldKind::Address => "address",
            FieldKind::Birthday => "birthday",
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            FieldKind::Name => "FN",
            FieldKind::Organisation => "ORG",
            FieldKind::Phone => "TEL;CELL",
            FieldKind::Email => "EMAIL",
            FieldKind::Title => "TITLE",
            FieldKind::Address => "ADR;HOME",
            FieldKind::Birthday => "BDAY",
        }
    }

    pub fn from_column(name: &str) -> Option<FieldKind> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.column_name() == name)
    }
}
