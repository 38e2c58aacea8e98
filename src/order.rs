//! The parsed order.

use crate::codec::to_canonical_bytes;
use crate::{
    Choice, CoffeeType, Decaf, Dimension, DimensionSet, DimensionSpec, Iced, Milk, OrderError, Size, SpecRegistry,
    Strength, Sugar, default_registry,
};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// A structured coffee order.
///
/// Each dimension is either absent or holds one canonical option. Only the
/// type is required; see [`Order::validate`].
///
/// Orders come from [`parse`](crate::parse) or
/// [`Order::from_canonical_text`]. [`Order::add_spec`] fills in a dimension
/// after the fact, for example when answering a prompt for a missing type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Order {
    kind: Option<CoffeeType>,
    size: Option<Size>,
    milk: Option<Milk>,
    strength: Option<Strength>,
    iced: Option<Iced>,
    decaf: Option<Decaf>,
    sugar: Option<Sugar>,
}

impl Order {
    /// Parse raw order text with the built-in registry.
    pub fn parse(text: &str) -> Order {
        crate::parse(text)
    }

    pub fn coffee_type(&self) -> Option<CoffeeType> {
        self.kind
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn milk(&self) -> Option<Milk> {
        self.milk
    }

    pub fn strength(&self) -> Option<Strength> {
        self.strength
    }

    pub fn iced(&self) -> Option<Iced> {
        self.iced
    }

    pub fn decaf(&self) -> Option<Decaf> {
        self.decaf
    }

    pub fn sugar(&self) -> Option<Sugar> {
        self.sugar
    }

    /// Value of `dimension`, if set.
    pub fn get(&self, dimension: Dimension) -> Option<Choice> {
        match dimension {
            Dimension::Type => self.kind.map(Choice::Type),
            Dimension::Size => self.size.map(Choice::Size),
            Dimension::Milk => self.milk.map(Choice::Milk),
            Dimension::Strength => self.strength.map(Choice::Strength),
            Dimension::Iced => self.iced.map(Choice::Iced),
            Dimension::Decaf => self.decaf.map(Choice::Decaf),
            Dimension::Sugar => self.sugar.map(Choice::Sugar),
        }
    }

    pub fn has(&self, dimension: Dimension) -> bool {
        self.get(dimension).is_some()
    }

    /// Dimensions that hold a value.
    pub fn dimensions(&self) -> DimensionSet {
        Dimension::ALL.into_iter().filter(|&d| self.has(d)).collect()
    }

    /// Set values, in precedence order.
    pub fn specs(&self) -> Vec<(Dimension, Choice)> {
        Dimension::ALL.into_iter().filter_map(|d| self.get(d).map(|c| (d, c))).collect()
    }

    pub(crate) fn set(&mut self, choice: Choice) {
        match choice {
            Choice::Type(v) => self.kind = Some(v),
            Choice::Size(v) => self.size = Some(v),
            Choice::Milk(v) => self.milk = Some(v),
            Choice::Strength(v) => self.strength = Some(v),
            Choice::Iced(v) => self.iced = Some(v),
            Choice::Decaf(v) => self.decaf = Some(v),
            Choice::Sugar(v) => self.sugar = Some(v),
        }
    }

    /// Set `choice` unless its dimension already has a value.
    pub(crate) fn fill(&mut self, choice: Choice) -> bool {
        if self.has(choice.dimension()) {
            return false;
        }
        self.set(choice);
        true
    }

    /// Fold a separate "iced" into Hot Chocolate, which has its own iced
    /// type. Returns true when the order changed.
    pub(crate) fn fold_iced_chocolate(&mut self) -> bool {
        if self.kind != Some(CoffeeType::HotChocolate) || self.iced != Some(Iced::Iced) {
            return false;
        }
        self.kind = Some(CoffeeType::IcedChocolate);
        self.iced = None;
        true
    }

    /// Set `dimension` from any of its tokens ("l", "Large", "lge"),
    /// replacing a previous value.
    ///
    /// Returns false, leaving the order unchanged, when `token` does not
    /// denote an option of `dimension`.
    pub fn add_spec(&mut self, dimension: Dimension, token: &str) -> bool {
        self.add_spec_with(default_registry(), dimension, token)
    }

    pub fn add_spec_with(&mut self, registry: &SpecRegistry, dimension: Dimension, token: &str) -> bool {
        match registry.lookup_option(dimension, token) {
            Some(choice) => {
                self.set(choice);
                true
            }
            None => false,
        }
    }

    /// True when every required dimension has a value.
    pub fn validate(&self) -> bool {
        self.validate_with(default_registry())
    }

    pub fn validate_with(&self, registry: &SpecRegistry) -> bool {
        self.validation_errors_with(registry).is_empty()
    }

    /// Required dimensions this order is missing. Each carries the question
    /// to ask the user.
    pub fn validation_errors(&self) -> Vec<&'static DimensionSpec> {
        self.validation_errors_with(default_registry())
    }

    pub fn validation_errors_with<'r>(&self, registry: &'r SpecRegistry) -> Vec<&'r DimensionSpec> {
        registry.required().filter(|spec| !self.has(spec.dimension)).collect()
    }

    /// Sorted-key text form used for storage.
    ///
    /// Equal orders always produce identical bytes.
    pub fn to_canonical_text(&self) -> Result<String, OrderError> {
        let map: BTreeMap<&'static str, Cow<'static, str>> =
            self.specs().into_iter().map(|(d, c)| (d.name(), c.name())).collect();
        Ok(String::from_utf8(to_canonical_bytes(&map)?)?)
    }

    /// Rebuild an order from [`Order::to_canonical_text`] output.
    ///
    /// Canonical text is trusted storage, so anything unexpected, including a
    /// missing type, is an error rather than a partial order.
    pub fn from_canonical_text(text: &str) -> Result<Order, OrderError> {
        let raw: BTreeMap<String, String> = serde_json::from_str(text)?;

        let mut order = Order::default();
        for (key, value) in raw {
            let dimension = Dimension::from_name(&key).ok_or(OrderError::UnknownDimension(key))?;
            let choice = Choice::from_name(dimension, &value).ok_or(OrderError::UnknownOption { dimension, value })?;
            order.set(choice);
        }

        let missing: Vec<Dimension> = order.validation_errors().iter().map(|spec| spec.dimension).collect();
        if !missing.is_empty() {
            return Err(OrderError::MissingRequired(missing));
        }
        Ok(order)
    }
}

impl fmt::Display for Order {
    /// Human-readable form: size, iced, milk, strength, decaf, type, sugar.
    ///
    /// Size falls back to "Regular". Iced is shown whenever it is set, so "hot"
    /// shows as "normal". Milk is shown only when it changes the price,
    /// strength only when it is not "Normal", and sugar as "with ...".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<Cow<'static, str>> = Vec::new();

        parts.push(self.size.unwrap_or(Size::DEFAULT).name().into());
        if let Some(iced) = self.iced {
            parts.push(iced.name().into());
        }
        if let Some(milk) = self.milk.filter(|m| m.is_priced()) {
            parts.push(milk.name().into());
        }
        if let Some(strength) = self.strength.filter(|&s| s != Strength::DEFAULT) {
            parts.push(strength.name().into());
        }
        if let Some(decaf) = self.decaf {
            parts.push(decaf.name().into());
        }
        if let Some(kind) = self.kind {
            parts.push(kind.name().into());
        }
        if let Some(sugar) = self.sugar {
            parts.push("with".into());
            parts.push(sugar.name());
        }

        f.write_str(&parts.join(" "))
    }
}
