//! Canonical option values, one closed type per dimension.

use crate::Dimension;
use std::borrow::Cow;
use std::fmt;

named_options! {
    /// The drink itself. The only required dimension.
    pub enum CoffeeType {
        Cappuccino => "Cappuccino",
        Latte => "Latte",
        Mocha => "Mocha",
        Espresso => "Espresso",
        ShortBlack => "Short Black",
        LongBlack => "Long Black",
        ChaiLatte => "Chai Latte",
        Macchiato => "Macchiato",
        FlatWhite => "Flat White",
        Affogato => "Affogato",
        HotChocolate => "Hot Chocolate",
        IcedChocolate => "Iced Chocolate",
        IcedCoffee => "Iced Coffee",
        Babyccino => "Babyccino",
        PiccoloLatte => "Piccolo Latte",
        ColdDrip => "Cold Drip",
        Filtered => "Filtered",
        Tea => "Tea",
    }
}

named_options! {
    pub enum Size {
        Small => "Small",
        Regular => "Regular",
        Large => "Large",
    }
}

named_options! {
    pub enum Milk {
        Fullcream => "Fullcream",
        Skim => "Skim",
        Soy => "Soy",
        LactoseFree => "Lactose Free",
    }
}

named_options! {
    pub enum Strength {
        Weak => "Weak",
        ExtraShot => "Extra-shot",
        TwoExtraShots => "2 Extra-shots",
        Normal => "Normal",
    }
}

named_options! {
    pub enum Iced {
        Iced => "Iced",
        /// Explicitly hot. Canonical spelling is lowercase.
        Normal => "normal",
    }
}

named_options! {
    pub enum Decaf {
        Decaf => "Decaf",
    }
}

impl Size {
    /// Size assumed when an order does not name one.
    pub const DEFAULT: Size = Size::Regular;
}

impl Strength {
    /// Strength assumed when an order does not name one.
    pub const DEFAULT: Strength = Strength::Normal;
}

impl Milk {
    /// Milks that change the price. Both are priced as soy.
    pub fn is_priced(self) -> bool {
        matches!(self, Milk::Soy | Milk::LactoseFree)
    }
}

/// Number of sugars, `0..=Sugar::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sugar(u8);

impl Sugar {
    pub const MAX: u8 = 11;
    pub const NONE: Sugar = Sugar(0);
    pub const ONE: Sugar = Sugar(1);

    pub fn new(count: u8) -> Option<Self> {
        (count <= Self::MAX).then_some(Sugar(count))
    }

    pub fn count(self) -> u8 {
        self.0
    }

    /// All values, from "No sugar" to "11 Sugars".
    pub fn all() -> impl Iterator<Item = Sugar> {
        (0..=Self::MAX).map(Sugar)
    }

    pub fn name(self) -> Cow<'static, str> {
        match self.0 {
            0 => Cow::Borrowed("No sugar"),
            1 => Cow::Borrowed("1 Sugar"),
            n => Cow::Owned(format!("{n} Sugars")),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let count: u8 = match name {
            "No sugar" => 0,
            "1 Sugar" => 1,
            _ => name.strip_suffix(" Sugars")?.parse().ok()?,
        };
        // Rejects "1 Sugars", "02 Sugars" and "+2 Sugars".
        Sugar::new(count).filter(|sugar| sugar.name() == name)
    }
}

impl fmt::Display for Sugar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A canonical option of any dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Type(CoffeeType),
    Size(Size),
    Milk(Milk),
    Strength(Strength),
    Iced(Iced),
    Decaf(Decaf),
    Sugar(Sugar),
}

impl Choice {
    pub fn dimension(self) -> Dimension {
        match self {
            Choice::Type(_) => Dimension::Type,
            Choice::Size(_) => Dimension::Size,
            Choice::Milk(_) => Dimension::Milk,
            Choice::Strength(_) => Dimension::Strength,
            Choice::Iced(_) => Dimension::Iced,
            Choice::Decaf(_) => Dimension::Decaf,
            Choice::Sugar(_) => Dimension::Sugar,
        }
    }

    pub fn name(self) -> Cow<'static, str> {
        match self {
            Choice::Type(v) => Cow::Borrowed(v.name()),
            Choice::Size(v) => Cow::Borrowed(v.name()),
            Choice::Milk(v) => Cow::Borrowed(v.name()),
            Choice::Strength(v) => Cow::Borrowed(v.name()),
            Choice::Iced(v) => Cow::Borrowed(v.name()),
            Choice::Decaf(v) => Cow::Borrowed(v.name()),
            Choice::Sugar(v) => v.name(),
        }
    }

    /// Parse a canonical name for `dimension`.
    pub fn from_name(dimension: Dimension, name: &str) -> Option<Self> {
        match dimension {
            Dimension::Type => CoffeeType::from_name(name).map(Choice::Type),
            Dimension::Size => Size::from_name(name).map(Choice::Size),
            Dimension::Milk => Milk::from_name(name).map(Choice::Milk),
            Dimension::Strength => Strength::from_name(name).map(Choice::Strength),
            Dimension::Iced => Iced::from_name(name).map(Choice::Iced),
            Dimension::Decaf => Decaf::from_name(name).map(Choice::Decaf),
            Dimension::Sugar => Sugar::from_name(name).map(Choice::Sugar),
        }
    }

    /// Every canonical option of `dimension`.
    pub fn all(dimension: Dimension) -> Vec<Choice> {
        match dimension {
            Dimension::Type => CoffeeType::ALL.iter().copied().map(Choice::Type).collect(),
            Dimension::Size => Size::ALL.iter().copied().map(Choice::Size).collect(),
            Dimension::Milk => Milk::ALL.iter().copied().map(Choice::Milk).collect(),
            Dimension::Strength => Strength::ALL.iter().copied().map(Choice::Strength).collect(),
            Dimension::Iced => Iced::ALL.iter().copied().map(Choice::Iced).collect(),
            Dimension::Decaf => Decaf::ALL.iter().copied().map(Choice::Decaf).collect(),
            Dimension::Sugar => Sugar::all().map(Choice::Sugar).collect(),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_round_trip_for_every_dimension() {
        for dim in Dimension::ALL {
            for choice in Choice::all(dim) {
                assert_eq!(choice.dimension(), dim);
                assert_eq!(Choice::from_name(dim, &choice.name()), Some(choice), "{choice}");
            }
        }
    }

    #[test]
    fn sugar_names_are_generated() {
        assert_eq!(Sugar::NONE.name(), "No sugar");
        assert_eq!(Sugar::new(1).unwrap().name(), "1 Sugar");
        assert_eq!(Sugar::new(2).unwrap().name(), "2 Sugars");
        assert_eq!(Sugar::new(11).unwrap().name(), "11 Sugars");
        assert_eq!(Sugar::new(12), None);
        assert_eq!(Sugar::all().count(), 12);
    }

    #[test]
    fn non_canonical_sugar_names_are_rejected() {
        assert_eq!(Sugar::from_name("1 Sugars"), None);
        assert_eq!(Sugar::from_name("12 Sugars"), None);
        assert_eq!(Sugar::from_name("2 sugars"), None);
        assert_eq!(Sugar::from_name("02 Sugars"), None);
        assert_eq!(Sugar::from_name("+2 Sugars"), None);
        assert_eq!(Sugar::from_name("0 Sugars"), None);
        assert_eq!(Sugar::from_name("lots"), None);
        assert_eq!(Sugar::from_name("2 Sugars"), Sugar::new(2));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(Choice::from_name(Dimension::Type, "latte"), None);
        assert_eq!(Choice::from_name(Dimension::Iced, "normal"), Some(Choice::Iced(Iced::Normal)));
        assert_eq!(Choice::from_name(Dimension::Iced, "Normal"), None);
    }
}
