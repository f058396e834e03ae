use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown sort key: {0:?} (expected title, code or mark)")]
    UnknownSortKey(String),
    #[error("unknown filter selector: {0:?} (expected A or 1-4)")]
    UnknownFilter(char),
    #[error("no filter selector given (expected A or 1-4)")]
    MissingFilter,
}

pub type Result<T> = std::result::Result<T, ModelError>;
