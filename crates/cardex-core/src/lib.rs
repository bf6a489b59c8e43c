pub mod domain;
pub mod error;
pub mod vcard;

pub use domain::*;
pub use error::CoreError;
