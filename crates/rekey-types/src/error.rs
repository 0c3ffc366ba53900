/// Errors from type construction and parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TypeError {
    /// The string does not name a supported key format.
    #[error("unknown key format: {0:?} (expected \"content-hash\" or \"random-id\")")]
    UnknownKeyFormat(String),

    /// An object key must not be empty.
    #[error("object key is empty")]
    EmptyKey,
}
