use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("not enough information (necessary fields: name, phone)")]
    MissingRequiredFields,
}
