//! The built-in option table.
//!
//! Every dimension lists its canonical options with the words and
//! abbreviations customers actually type. Words are matched whole (or as a
//! two-word phrase); abbreviations are only used to split run-together tokens
//! like `"lffw"`, so keep them short and do not reuse an abbreviation across
//! options of one dimension.
//!
//! Phrases beat single words. That is how `"iced chocolate"` and
//! `"hot chocolate"` become drink types instead of setting the iced dimension.
//! When "iced" still lands beside Hot Chocolate ("iced hc"), the parser folds
//! the two into Iced Chocolate after the passes.

use crate::registry::{DimensionSpec, OptionSpec, SpecRegistry};
use crate::{Choice, Dimension, RegistryError, Size, Strength};

#[path = "menu/drinks.rs"]
mod drinks;
#[path = "menu/modifiers.rs"]
mod modifiers;
#[path = "menu/sugar.rs"]
mod sugar;

#[cfg(test)]
#[path = "menu/tests.rs"]
mod tests;

/// Dimension metadata: prompts, required flags and defaults.
pub(crate) fn dimensions() -> Vec<DimensionSpec> {
    vec![
        DimensionSpec::new(Dimension::Type, "What type of coffee?").required(),
        DimensionSpec::new(Dimension::Size, "What size (S/L)?").with_default(Choice::Size(Size::DEFAULT)),
        DimensionSpec::new(Dimension::Milk, "What type of milk?"),
        DimensionSpec::new(Dimension::Strength, "What strength?").with_default(Choice::Strength(Strength::DEFAULT)),
        DimensionSpec::new(Dimension::Iced, "Iced or normal?"),
        DimensionSpec::new(Dimension::Decaf, "Decaf?"),
        DimensionSpec::new(Dimension::Sugar, "How many sugars?"),
    ]
}

/// Every option of every dimension.
pub(crate) fn options() -> Vec<OptionSpec> {
    let mut all = drinks::get();
    all.extend(modifiers::get());
    all.extend(sugar::get());
    all
}

pub(crate) fn registry() -> Result<SpecRegistry, RegistryError> {
    dimensions().into_iter().fold(SpecRegistry::builder(), |b, d| b.dimension(d)).options(options()).build()
}
