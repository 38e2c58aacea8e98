//! Free-text coffee order parsing and price-key resolution.
//!
//! ```
//! use coffeespecs::parse;
//!
//! let order = parse("yo give me a smol iced latte pls");
//! assert!(order.validate());
//! assert_eq!(order.to_string(), "Small Iced Latte");
//! ```

#[macro_use]
mod macros;
mod api;
mod choice;
mod codec;
mod engine;
mod error;
mod menu;
pub mod migrate;
mod order;
mod pricing;
mod registry;

pub use api::{
    MatchSummary, Options, ParseDetails, ParseResultVerbose, PassSummary, default_registry, parse, parse_verbose_with,
    parse_with,
};
pub use choice::{Choice, CoffeeType, Decaf, Iced, Milk, Size, Strength, Sugar};
pub use engine::clean_chat_text;
pub use error::{MigrationError, OrderError, PriceTableError, RegistryError};
pub use order::Order;
pub use pricing::{DEFAULT_PRICE, PriceStore, PriceTable, find_price, lookup_price, needs_reprice, resolve_price};
pub use registry::{DimensionSpec, OptionId, OptionSpec, RegistryBuilder, SpecRegistry};

// --- Dimensions -------------------------------------------------------------

/// One independent axis of a coffee order.
///
/// Declaration order is the precedence order: when a word token belongs to
/// several dimensions it is given to the first unassigned one in this order,
/// and abbreviation decomposition tries dimensions in this order too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Type,
    Size,
    Milk,
    Strength,
    Iced,
    Decaf,
    Sugar,
}

pub(crate) const DIMENSION_COUNT: usize = 7;

impl Dimension {
    /// All dimensions in precedence order.
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Dimension::Type,
        Dimension::Size,
        Dimension::Milk,
        Dimension::Strength,
        Dimension::Iced,
        Dimension::Decaf,
        Dimension::Sugar,
    ];

    /// Name used as the key in canonical text.
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Type => "type",
            Dimension::Size => "size",
            Dimension::Milk => "milk",
            Dimension::Strength => "strength",
            Dimension::Iced => "iced",
            Dimension::Decaf => "decaf",
            Dimension::Sugar => "sugar",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Dimension::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Position in the precedence order (0 = highest).
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Single-bit set for this dimension.
    pub fn flag(self) -> DimensionSet {
        match self {
            Dimension::Type => DimensionSet::TYPE,
            Dimension::Size => DimensionSet::SIZE,
            Dimension::Milk => DimensionSet::MILK,
            Dimension::Strength => DimensionSet::STRENGTH,
            Dimension::Iced => DimensionSet::ICED,
            Dimension::Decaf => DimensionSet::DECAF,
            Dimension::Sugar => DimensionSet::SUGAR,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// A set of dimensions.
    ///
    /// Used for the dimensions still available to abbreviation decomposition,
    /// the dimensions an order has assigned, and the fuzzy fields of a price key.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DimensionSet: u8 {
        const TYPE     = 1 << 0;
        const SIZE     = 1 << 1;
        const MILK     = 1 << 2;
        const STRENGTH = 1 << 3;
        const ICED     = 1 << 4;
        const DECAF    = 1 << 5;
        const SUGAR    = 1 << 6;
    }
}

impl DimensionSet {
    /// Members in precedence order.
    pub fn dimensions(self) -> impl Iterator<Item = Dimension> {
        Dimension::ALL.into_iter().filter(move |d| self.contains(d.flag()))
    }
}

impl From<Dimension> for DimensionSet {
    fn from(dim: Dimension) -> Self {
        dim.flag()
    }
}

impl FromIterator<Dimension> for DimensionSet {
    fn from_iter<I: IntoIterator<Item = Dimension>>(iter: I) -> Self {
        iter.into_iter().fold(DimensionSet::empty(), |set, d| set | d.flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_names_round_trip() {
        for dim in Dimension::ALL {
            assert_eq!(Dimension::from_name(dim.name()), Some(dim));
        }
        assert_eq!(Dimension::from_name("flavour"), None);
    }

    #[test]
    fn precedence_starts_with_type_and_ends_with_sugar() {
        assert_eq!(Dimension::Type.rank(), 0);
        assert_eq!(Dimension::Sugar.rank(), DIMENSION_COUNT - 1);
    }

    #[test]
    fn dimension_set_iterates_in_precedence_order() {
        let set: DimensionSet = [Dimension::Sugar, Dimension::Type, Dimension::Milk].into_iter().collect();
        let dims: Vec<Dimension> = set.dimensions().collect();
        assert_eq!(dims, vec![Dimension::Type, Dimension::Milk, Dimension::Sugar]);
        assert_eq!(DimensionSet::all().dimensions().count(), DIMENSION_COUNT);
    }
}
