pub mod card;
pub mod field;

pub use card::ContactCard;
pub use field::{FieldKind, REQUIRED_FIELDS};
