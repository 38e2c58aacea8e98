//! Abbreviation decomposition.
//!
//! Regulars type orders as run-together abbreviations: `"lffw"` is lactose
//! free + flat white, `"cl"` is cappuccino + large, `"regl"` is regular +
//! latte. A token is accepted only if it splits *completely* into
//! abbreviations drawn from pairwise different dimensions.
//!
//! The search is a depth-first prefix search:
//!
//! ```text
//! decompose("lffw", {type,size,milk,...})
//!   type "l"   -> decompose("ffw", {size,milk,...})   fails
//!   size "l"   -> decompose("ffw", {type,milk,...})   fails
//!   milk "lf"  -> decompose("fw",  {type,size,...})
//!                   type "fw" -> decompose("", ..)    done
//! ```
//!
//! Dimensions are tried in precedence order (type, size, milk, strength, iced,
//! decaf, sugar) and, within a dimension, abbreviations longest first. The
//! first complete decomposition wins, so this order decides ambiguous input.
//! Every step removes one dimension from the available set, which bounds the
//! recursion depth by the number of dimensions.

use crate::registry::OptionId;
use crate::{DimensionSet, SpecRegistry};

/// Split `text` into abbreviations of distinct dimensions from `available`.
///
/// Returns the matched options in text order, or `None` when no complete
/// decomposition exists.
pub(crate) fn decompose(registry: &SpecRegistry, text: &str, available: DimensionSet) -> Option<Vec<OptionId>> {
    if text.is_empty() {
        return Some(Vec::new());
    }

    for dimension in available.dimensions() {
        for (abbr, id) in registry.abbreviations(dimension) {
            let Some(rest) = text.strip_prefix(abbr.as_str()) else {
                continue;
            };
            if let Some(mut tail) = decompose(registry, rest, available - dimension.flag()) {
                tail.insert(0, *id);
                return Some(tail);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Choice, CoffeeType, Dimension, Milk, Size, Strength, Sugar, default_registry};

    fn choices(text: &str, available: DimensionSet) -> Option<Vec<Choice>> {
        let registry = default_registry();
        decompose(registry, text, available).map(|ids| ids.into_iter().map(|id| registry.option(id).choice).collect())
    }

    #[test]
    fn splits_across_dimensions() {
        assert_eq!(
            choices("lffw", DimensionSet::all()),
            Some(vec![Choice::Milk(Milk::LactoseFree), Choice::Type(CoffeeType::FlatWhite)])
        );
        assert_eq!(
            choices("cl", DimensionSet::all()),
            Some(vec![Choice::Type(CoffeeType::Cappuccino), Choice::Size(Size::Large)])
        );
        assert_eq!(
            choices("sc", DimensionSet::all()),
            Some(vec![Choice::Size(Size::Small), Choice::Type(CoffeeType::Cappuccino)])
        );
    }

    #[test]
    fn type_is_tried_before_size() {
        // "l" is both latte and large; "ll" needs both readings.
        assert_eq!(
            choices("ll", DimensionSet::all()),
            Some(vec![Choice::Type(CoffeeType::Latte), Choice::Size(Size::Large)])
        );
        assert_eq!(choices("l", DimensionSet::all()), Some(vec![Choice::Type(CoffeeType::Latte)]));
    }

    #[test]
    fn longest_abbreviation_is_tried_first() {
        assert_eq!(
            choices("regl", DimensionSet::all()),
            Some(vec![Choice::Size(Size::Regular), Choice::Type(CoffeeType::Latte)])
        );
        assert_eq!(choices("xx", DimensionSet::all()), Some(vec![Choice::Strength(Strength::TwoExtraShots)]));
    }

    #[test]
    fn a_dimension_is_used_at_most_once() {
        // Two sizes in one token cannot decompose.
        assert_eq!(choices("sl", DimensionSet::SIZE), None);
        assert_eq!(choices("2s", DimensionSet::all()), Some(vec![Choice::Sugar(Sugar::new(2).unwrap())]));
    }

    #[test]
    fn unavailable_dimensions_are_skipped() {
        let without_type = DimensionSet::all() - Dimension::Type.flag();
        assert_eq!(choices("l", without_type), Some(vec![Choice::Size(Size::Large)]));
        assert_eq!(choices("my", without_type), None);
    }

    #[test]
    fn noise_does_not_decompose() {
        for word in ["plox", "hello", "barista", "thanks", "would", "with", "me"] {
            assert_eq!(choices(word, DimensionSet::all()), None, "{word}");
        }
    }
}
