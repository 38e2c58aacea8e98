//! Price-key resolution.
//!
//! A cafe's price list is keyed by short human strings such as
//! `"Large Soy Cappuccino"`. An order rarely matches a key exactly, so the
//! resolver produces keys from most to least specific and the store answers
//! with the first one it knows:
//!
//! ```text
//! "small weak soy latte"
//!   {}                       Small Soy Weak Latte
//!   {type}                   Small Soy Weak Cappuccino
//!   {type, size}             Regular Soy Weak Cappuccino
//!   {type, size, strength}   Regular Soy Cappuccino
//! ```
//!
//! Key layout is size, iced, milk, strength, decaf, type. Sugar never affects
//! the price. A *fuzzy* dimension is collapsed to its price class: small is
//! priced as regular, weak as normal strength, and milk-based espresso drinks
//! as a cappuccino.

use crate::error::PriceTableError;
use crate::{CoffeeType, DimensionSet, Order, Size, Strength};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Price used when no key matches.
pub const DEFAULT_PRICE: f64 = 4.0;

/// Source of per-cafe prices.
///
/// Implemented by [`PriceTable`] and by any `Fn(&str, &str) -> Option<f64>`
/// taking `(cafe, key)`, so callers backed by a database can pass a closure.
pub trait PriceStore {
    fn price(&self, cafe: &str, key: &str) -> Option<f64>;
}

impl<F> PriceStore for F
where
    F: Fn(&str, &str) -> Option<f64>,
{
    fn price(&self, cafe: &str, key: &str) -> Option<f64> {
        self(cafe, key)
    }
}

impl CoffeeType {
    /// Drinks priced like a cappuccino when the type is fuzzy.
    fn price_class(self) -> CoffeeType {
        match self {
            CoffeeType::Cappuccino
            | CoffeeType::ChaiLatte
            | CoffeeType::FlatWhite
            | CoffeeType::HotChocolate
            | CoffeeType::Latte
            | CoffeeType::LongBlack
            | CoffeeType::Macchiato
            | CoffeeType::Mocha
            | CoffeeType::PiccoloLatte
            | CoffeeType::ShortBlack => CoffeeType::Cappuccino,
            other => other,
        }
    }
}

impl Order {
    /// Price-list key for this order with the `fuzzy` dimensions collapsed.
    ///
    /// Only type, size and strength have a fuzzy form; other members of
    /// `fuzzy` are ignored.
    pub fn price_key(&self, fuzzy: DimensionSet) -> String {
        let mut parts: Vec<&'static str> = Vec::with_capacity(6);

        let size = match self.size().unwrap_or(Size::DEFAULT) {
            Size::Small if fuzzy.contains(DimensionSet::SIZE) => Size::Regular,
            size => size,
        };
        parts.push(size.name());

        if let Some(iced) = self.iced() {
            parts.push(iced.name());
        }
        if self.milk().is_some_and(|m| m.is_priced()) {
            parts.push("Soy");
        }

        let strength = match self.strength().unwrap_or(Strength::DEFAULT) {
            Strength::Weak if fuzzy.contains(DimensionSet::STRENGTH) => Strength::Normal,
            strength => strength,
        };
        if strength != Strength::Normal {
            parts.push(strength.name());
        }

        if let Some(decaf) = self.decaf() {
            parts.push(decaf.name());
        }
        if let Some(kind) = self.coffee_type() {
            let kind = if fuzzy.contains(DimensionSet::TYPE) { kind.price_class() } else { kind };
            parts.push(kind.name());
        }

        parts.join(" ")
    }

    /// The four lookup keys, most specific first.
    pub fn ordered_price_keys(&self) -> [String; 4] {
        [
            self.price_key(DimensionSet::empty()),
            self.price_key(DimensionSet::TYPE),
            self.price_key(DimensionSet::TYPE | DimensionSet::SIZE),
            self.price_key(DimensionSet::TYPE | DimensionSet::SIZE | DimensionSet::STRENGTH),
        ]
    }
}

/// First configured price among the order's keys, if any key matches.
pub fn find_price(store: &impl PriceStore, cafe: &str, order: &Order) -> Option<f64> {
    let found = order.ordered_price_keys().into_iter().find_map(|key| {
        let price = store.price(cafe, &key)?;
        debug!(cafe, %key, price, "price found");
        Some(price)
    });
    if found.is_none() {
        debug!(cafe, order = %order, "no price configured");
    }
    found
}

/// First configured price among the order's keys, or `default`.
pub fn lookup_price(store: &impl PriceStore, cafe: &str, order: &Order, default: f64) -> f64 {
    find_price(store, cafe, order).unwrap_or(default)
}

/// Price for a new order. A non-zero `explicit` price, typed in by the person
/// ordering, wins over the price list.
pub fn resolve_price(store: &impl PriceStore, cafe: &str, order: &Order, default: f64, explicit: Option<f64>) -> f64 {
    match explicit {
        Some(price) if price != 0.0 => price,
        _ => lookup_price(store, cafe, order, default),
    }
}

/// True for stored prices that were the fallback and may resolve to a real
/// price once the cafe's list is filled in.
pub fn needs_reprice(price: f64) -> bool {
    price == DEFAULT_PRICE
}

/// In-memory price lists, cafe name → price key → price.
///
/// JSON form:
///
/// ```json
/// {"Campus Cafe": {"Regular Cappuccino": 4.0, "Large Cappuccino": 4.5}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    cafes: HashMap<String, HashMap<String, f64>>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, cafe: impl Into<String>, key: impl Into<String>, price: f64) {
        self.cafes.entry(cafe.into()).or_default().insert(key.into(), price);
    }

    /// Parse and check a JSON price table.
    pub fn from_json(text: &str) -> Result<Self, PriceTableError> {
        let table: PriceTable = serde_json::from_str(text)?;
        for (cafe, prices) in &table.cafes {
            for (key, &price) in prices {
                if !price.is_finite() || price < 0.0 {
                    return Err(PriceTableError::InvalidPrice { cafe: cafe.clone(), key: key.clone(), price });
                }
            }
        }
        debug!(cafes = table.cafes.len(), "loaded price table");
        Ok(table)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PriceTableError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|source| PriceTableError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&text)
    }

    /// Cafe names, sorted.
    pub fn cafes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.cafes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl PriceStore for PriceTable {
    fn price(&self, cafe: &str, key: &str) -> Option<f64> {
        self.cafes.get(cafe)?.get(key).copied()
    }
}
