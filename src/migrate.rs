//! Rewrites of stored canonical text.
//!
//! Iced drinks used to be a type plus `"iced": "Iced"`. They are now types of
//! their own, and older rows need rewriting:
//!
//! ```text
//! split_iced:  {"iced": "Iced", "type": "Hot Chocolate"}  ->  {"type": "Iced Chocolate"}
//!              {"iced": "Iced", "type": "Latte"}          ->  {"type": "Iced Coffee"}
//! merge_iced:  {"type": "Iced Coffee"}                    ->  {"iced": "Iced", "type": "Latte"}
//! ```
//!
//! Both functions return `Ok(None)` for rows that need no change. Merging is
//! lossy: an iced cappuccino comes back as an iced latte.

use crate::codec::to_canonical_bytes;
use crate::error::MigrationError;
use crate::{CoffeeType, Dimension, Iced};
use std::collections::BTreeMap;
use tracing::debug;

type Row = BTreeMap<String, String>;

fn load(text: &str) -> Result<Row, MigrationError> {
    Ok(serde_json::from_str(text)?)
}

fn store(row: &Row) -> Result<String, MigrationError> {
    Ok(String::from_utf8(to_canonical_bytes(row)?)?)
}

/// Fold the iced marker into the drink type.
pub fn split_iced(text: &str) -> Result<Option<String>, MigrationError> {
    let mut row = load(text)?;
    if row.get(Dimension::Iced.name()).map(String::as_str) != Some(Iced::Iced.name()) {
        return Ok(None);
    }

    let kind = row.get(Dimension::Type.name()).ok_or(MigrationError::MissingType)?;
    let iced = match CoffeeType::from_name(kind) {
        Some(CoffeeType::HotChocolate) => CoffeeType::IcedChocolate,
        Some(CoffeeType::Latte | CoffeeType::Cappuccino) => CoffeeType::IcedCoffee,
        _ => return Err(MigrationError::UnknownIcedType(kind.clone())),
    };

    debug!(from = %kind, to = %iced, "splitting iced order");
    row.remove(Dimension::Iced.name());
    row.insert(Dimension::Type.name().to_string(), iced.name().to_string());
    store(&row).map(Some)
}

/// Undo [`split_iced`].
pub fn merge_iced(text: &str) -> Result<Option<String>, MigrationError> {
    let mut row = load(text)?;
    let kind = row.get(Dimension::Type.name()).ok_or(MigrationError::MissingType)?;
    if !kind.starts_with("Iced") {
        return Ok(None);
    }

    let base = match CoffeeType::from_name(kind) {
        Some(CoffeeType::IcedChocolate) => CoffeeType::HotChocolate,
        Some(CoffeeType::IcedCoffee) => CoffeeType::Latte,
        _ => return Err(MigrationError::UnknownIcedType(kind.clone())),
    };

    debug!(from = %kind, to = %base, "merging iced order");
    row.insert(Dimension::Iced.name().to_string(), Iced::Iced.name().to_string());
    row.insert(Dimension::Type.name().to_string(), base.name().to_string());
    store(&row).map(Some)
}
