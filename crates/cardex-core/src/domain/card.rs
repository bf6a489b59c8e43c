use crate::domain::field::{FieldKind, REQUIRED_FIELDS};
use crate::error::CoreError;
use serde::Serialize;
use std::collections::BTreeMap;

/// One contact, built from a column-name/value mapping and immutable after
/// construction. Only recognized columns are retained; everything else is
/// dropped without complaint, since callers routinely pass extra columns
/// through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactCard {
    fields: BTreeMap<FieldKind, String>,
}

impl ContactCard {
    /// Duplicate keys keep the last value. Presence of `name` and `phone` as
    /// keys is what is required; an empty value still counts as present.
    pub fn from_fields<I, K, V>(entries: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut fields = BTreeMap::new();
        for (key, value) in entries {
            if let Some(kind) = FieldKind::from_column(key.as_ref()) {
                fields.insert(kind, value.into());
            }
        }

        if REQUIRED_FIELDS
            .iter()
            .any(|kind| !fields.contains_key(kind))
        {
            return Err(CoreError::MissingRequiredFields);
        }

        Ok(Self { fields })
    }

    pub fn get(&self, kind: FieldKind) -> Option<&str> {
        self.fields.get(&kind).map(String::as_str)
    }

    /// Present fields in canonical order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldKind, &str)> {
        self.fields
            .iter()
            .map(|(kind, value)| (*kind, value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::ContactCard;
    use crate::domain::field::FieldKind;
    use crate::error::CoreError;

    #[test]
    fn from_fields_retains_recognized_fields() {
        let card = ContactCard::from_fields([
            ("name", "Ada Lovelace"),
            ("phone", "555-0101"),
            ("email", "ada@example.com"),
        ])
        .expect("card");
        assert_eq!(card.get(FieldKind::Name), Some("Ada Lovelace"));
        assert_eq!(card.get(FieldKind::Phone), Some("555-0101"));
        assert_eq!(card.get(FieldKind::Email), Some("ada@example.com"));
    }

    #[test]
    fn from_fields_drops_unrecognized_keys() {
        let card = ContactCard::from_fields([
            ("name", "Ada"),
            ("phone", "555"),
            ("favourite_color", "mauve"),
        ])
        .expect("card");
        assert_eq!(card.fields().count(), 2);
    }

    #[test]
    fn from_fields_requires_name_and_phone() {
        let err = ContactCard::from_fields([("name", "Ada")]).unwrap_err();
        assert_eq!(err, CoreError::MissingRequiredFields);
        let message = err.to_string();
        assert!(message.contains("name"));
        assert!(message.contains("phone"));

        let err = ContactCard::from_fields([("phone", "555")]).unwrap_err();
        assert_eq!(err, CoreError::MissingRequiredFields);
    }

    #[test]
    fn from_fields_accepts_empty_required_values() {
        let card = ContactCard::from_fields([("name", ""), ("phone", "")]).expect("card");
        assert_eq!(card.get(FieldKind::Name), Some(""));
    }

    #[test]
    fn from_fields_last_duplicate_wins() {
        let card = ContactCard::from_fields([
            ("name", "Ada"),
            ("phone", "555"),
            ("name", "Grace"),
        ])
        .expect("card");
        assert_eq!(card.get(FieldKind::Name), Some("Grace"));
    }
}
