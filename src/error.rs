use crate::Dimension;
use std::path::PathBuf;
use thiserror::Error;

/// Inconsistent option table. Raised while building a [`SpecRegistry`](crate::SpecRegistry).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate {kind} token '{token}' in dimension '{dimension}' ('{first}' and '{second}')")]
    DuplicateToken { dimension: Dimension, kind: &'static str, token: String, first: String, second: String },

    #[error("option '{option}' of dimension '{dimension}' declared twice")]
    DuplicateOption { dimension: Dimension, option: String },

    #[error("abbreviation '{token}' for '{option}' must be a single non-empty word")]
    InvalidAbbreviation { option: String, token: String },

    #[error("dimension '{0}' declared twice")]
    DuplicateDimension(Dimension),

    #[error("option '{option}' belongs to undeclared dimension '{dimension}'")]
    UndeclaredDimension { dimension: Dimension, option: String },
}

/// Canonical order text that cannot be turned back into a valid order.
///
/// Canonical text is only ever produced by this crate, so any of these means
/// the stored data is corrupt.
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("malformed canonical order: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unknown dimension '{0}'")]
    UnknownDimension(String),

    #[error("'{value}' is not an option of dimension '{dimension}'")]
    UnknownOption { dimension: Dimension, value: String },

    #[error("invalid order: missing {}", join_names(.0))]
    MissingRequired(Vec<Dimension>),

    #[error("canonical text is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Failure while rewriting stored canonical text.
#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("malformed canonical order: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("stored order has no type")]
    MissingType,

    #[error("unknown iced coffee type: {0}")]
    UnknownIcedType(String),

    #[error("canonical text is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Failure while loading a price table.
#[derive(Error, Debug)]
pub enum PriceTableError {
    #[error("failed to read price table {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("invalid price table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("price for '{key}' at '{cafe}' must be a non-negative number, got {price}")]
    InvalidPrice { cafe: String, key: String, price: f64 },
}

fn join_names(dims: &[Dimension]) -> String {
    dims.iter().map(|d| d.name()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_lists_dimensions() {
        let err = OrderError::MissingRequired(vec![Dimension::Type, Dimension::Size]);
        assert_eq!(err.to_string(), "invalid order: missing type, size");
    }

    #[test]
    fn duplicate_token_names_both_options() {
        let err = RegistryError::DuplicateToken {
            dimension: Dimension::Size,
            kind: "word",
            token: "big".into(),
            first: "Large".into(),
            second: "Regular".into(),
        };
        assert_eq!(err.to_string(), "duplicate word token 'big' in dimension 'size' ('Large' and 'Regular')");
    }
}
