//! Spec registry: the static option table and its lookup indexes.
//!
//! This module holds the *static* side of parsing. The option table (see
//! `src/menu/`) lists, for every dimension, its canonical options and the
//! words and abbreviations that denote each of them. Building a
//! [`SpecRegistry`] validates that table once and derives the indexes the
//! parser needs:
//!
//! - **Word index**: normalized word or two-word phrase → candidate options,
//!   ordered by dimension precedence. A word shared by several dimensions is
//!   resolved by the parser (first unassigned dimension wins).
//! - **Abbreviation index**: per dimension, compact tokens such as `"lb"` or
//!   `"xx"`, longest first, for recursive decomposition of run-together input
//!   like `"lffw"`.
//! - **Sorted word list**: every word token sorted by length descending, then
//!   lexicographically, so callers can do greedy longest-match scanning.
//!
//! ## Invariants
//!
//! - `OptionId` is an index into `SpecRegistry::options`.
//! - Within one dimension a word token, or an abbreviation token, maps to at
//!   most one option. Listing the same token twice for the *same* option is
//!   tolerated; listing it for two different options is a [`RegistryError`].
//! - The canonical name of every option is implicitly one of its word tokens.
//! - A registry is immutable once built.

use crate::engine::tokenize;
use crate::{Choice, DIMENSION_COUNT, Dimension, RegistryError};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Static description of one dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionSpec {
    pub dimension: Dimension,
    /// Prompt shown to a user whose order is missing this dimension.
    pub question: &'static str,
    pub required: bool,
    /// Value assumed for pricing and display when absent.
    pub default: Option<Choice>,
}

impl DimensionSpec {
    pub fn new(dimension: Dimension, question: &'static str) -> Self {
        DimensionSpec { dimension, question, required: false, default: None }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, default: Choice) -> Self {
        self.default = Some(default);
        self
    }
}

/// One canonical option and the tokens that denote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub choice: Choice,
    /// Full words or short phrases ("flat white").
    pub words: Vec<String>,
    /// Compact single tokens ("fw").
    pub abbreviations: Vec<String>,
}

impl OptionSpec {
    pub fn new(choice: Choice, words: &[&str], abbreviations: &[&str]) -> Self {
        OptionSpec {
            choice,
            words: words.iter().map(|w| w.to_string()).collect(),
            abbreviations: abbreviations.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.choice.dimension()
    }
}

/// Option identifier (index into the registry's option vector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId(usize);

/// Collects dimensions and options, then validates them into a [`SpecRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    dimensions: Vec<DimensionSpec>,
    options: Vec<OptionSpec>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dimension(mut self, spec: DimensionSpec) -> Self {
        self.dimensions.push(spec);
        self
    }

    pub fn option(mut self, spec: OptionSpec) -> Self {
        self.options.push(spec);
        self
    }

    pub fn options(mut self, specs: impl IntoIterator<Item = OptionSpec>) -> Self {
        self.options.extend(specs);
        self
    }

    /// Validate the table and build its indexes.
    pub fn build(self) -> Result<SpecRegistry, RegistryError> {
        let mut dimensions = self.dimensions;
        dimensions.sort_by_key(|d| d.dimension.rank());
        for pair in dimensions.windows(2) {
            if pair[0].dimension == pair[1].dimension {
                return Err(RegistryError::DuplicateDimension(pair[0].dimension));
            }
        }

        let mut options: Vec<OptionSpec> = Vec::with_capacity(self.options.len());
        let mut word_owner: HashMap<(Dimension, String), OptionId> = HashMap::new();
        let mut abbr_owner: HashMap<(Dimension, String), OptionId> = HashMap::new();
        let mut words: HashMap<String, Vec<OptionId>> = HashMap::new();
        let mut abbreviations: [Vec<(String, OptionId)>; DIMENSION_COUNT] = Default::default();

        for spec in self.options {
            let dimension = spec.dimension();
            let name = spec.choice.name().into_owned();
            if !dimensions.iter().any(|d| d.dimension == dimension) {
                return Err(RegistryError::UndeclaredDimension { dimension, option: name });
            }
            if options.iter().any(|o| o.choice == spec.choice) {
                return Err(RegistryError::DuplicateOption { dimension, option: name });
            }

            let id = OptionId(options.len());
            let mut option = OptionSpec { choice: spec.choice, words: Vec::new(), abbreviations: Vec::new() };

            for raw in std::iter::once(name.as_str()).chain(spec.words.iter().map(String::as_str)) {
                let word = tokenize(raw).join(" ");
                if word.is_empty() {
                    continue;
                }
                match claim(&mut word_owner, dimension, &word, id) {
                    Claim::New => {
                        words.entry(word.clone()).or_default().push(id);
                        option.words.push(word);
                    }
                    Claim::Repeat => {}
                    Claim::Taken(other) => {
                        return Err(RegistryError::DuplicateToken {
                            dimension,
                            kind: "word",
                            token: word,
                            first: options[other.0].choice.name().into_owned(),
                            second: name.clone(),
                        });
                    }
                }
            }

            for raw in &spec.abbreviations {
                let abbr = raw.trim().to_lowercase();
                if abbr.is_empty() || !abbr.chars().all(char::is_alphanumeric) {
                    return Err(RegistryError::InvalidAbbreviation { option: name, token: raw.clone() });
                }
                match claim(&mut abbr_owner, dimension, &abbr, id) {
                    Claim::New => {
                        abbreviations[dimension.rank()].push((abbr.clone(), id));
                        option.abbreviations.push(abbr);
                    }
                    Claim::Repeat => {}
                    Claim::Taken(other) => {
                        return Err(RegistryError::DuplicateToken {
                            dimension,
                            kind: "abbreviation",
                            token: abbr,
                            first: options[other.0].choice.name().into_owned(),
                            second: name,
                        });
                    }
                }
            }

            options.push(option);
        }

        // Candidates of a shared word are tried in precedence order.
        for ids in words.values_mut() {
            ids.sort_by_key(|id| options[id.0].dimension().rank());
        }

        for list in &mut abbreviations {
            list.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        }

        let mut word_tokens: Vec<String> = words.keys().cloned().collect();
        word_tokens.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        debug!(
            dimensions = dimensions.len(),
            options = options.len(),
            words = word_tokens.len(),
            abbreviations = abbreviations.iter().map(Vec::len).sum::<usize>(),
            "built spec registry"
        );

        Ok(SpecRegistry { dimensions, options, words, abbreviations, word_tokens })
    }
}

enum Claim {
    New,
    Repeat,
    Taken(OptionId),
}

fn claim(owners: &mut HashMap<(Dimension, String), OptionId>, dimension: Dimension, token: &str, id: OptionId) -> Claim {
    match owners.get(&(dimension, token.to_string())) {
        Some(&owner) if owner == id => Claim::Repeat,
        Some(&owner) => Claim::Taken(owner),
        None => {
            owners.insert((dimension, token.to_string()), id);
            Claim::New
        }
    }
}

/// Immutable, validated option table with parser indexes.
///
/// Build one with [`RegistryBuilder`], or use the built-in table via
/// [`default_registry`](crate::default_registry). A registry has no interior
/// mutability and can be shared freely across threads.
#[derive(Debug)]
pub struct SpecRegistry {
    dimensions: Vec<DimensionSpec>,
    options: Vec<OptionSpec>,
    words: HashMap<String, Vec<OptionId>>,
    abbreviations: [Vec<(String, OptionId)>; DIMENSION_COUNT],
    word_tokens: Vec<String>,
}

impl SpecRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Declared dimensions, in precedence order.
    pub fn dimensions(&self) -> &[DimensionSpec] {
        &self.dimensions
    }

    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionSpec> {
        self.dimensions.iter().find(|d| d.dimension == dimension)
    }

    /// Dimensions every valid order must carry.
    pub fn required(&self) -> impl Iterator<Item = &DimensionSpec> {
        self.dimensions.iter().filter(|d| d.required)
    }

    pub fn option(&self, id: OptionId) -> &OptionSpec {
        &self.options[id.0]
    }

    pub fn options(&self, dimension: Dimension) -> impl Iterator<Item = &OptionSpec> {
        self.options.iter().filter(move |o| o.dimension() == dimension)
    }

    /// Every word and phrase token, longest first, ties broken lexicographically.
    pub fn all_word_tokens(&self) -> &[String] {
        &self.word_tokens
    }

    /// Abbreviation tokens of each dimension, longest first.
    pub fn abbreviation_tokens_by_dimension(&self) -> BTreeMap<Dimension, Vec<&str>> {
        self.dimensions
            .iter()
            .map(|d| {
                let tokens = self.abbreviations[d.dimension.rank()].iter().map(|(a, _)| a.as_str()).collect();
                (d.dimension, tokens)
            })
            .collect()
    }

    /// Options denoted by the normalized word or phrase `token`, in precedence order.
    pub(crate) fn word_candidates(&self, token: &str) -> &[OptionId] {
        self.words.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Abbreviations of `dimension`, longest first.
    pub(crate) fn abbreviations(&self, dimension: Dimension) -> &[(String, OptionId)] {
        &self.abbreviations[dimension.rank()]
    }

    /// Resolve any token of `dimension` (canonical name, word or abbreviation,
    /// in any case) to its option.
    pub fn lookup_option(&self, dimension: Dimension, token: &str) -> Option<Choice> {
        let normalized = tokenize(token).join(" ");
        let by_word =
            self.word_candidates(&normalized).iter().map(|&id| self.option(id)).find(|o| o.dimension() == dimension);
        if let Some(option) = by_word {
            return Some(option.choice);
        }
        self.abbreviations(dimension).iter().find(|(abbr, _)| *abbr == normalized).map(|&(_, id)| self.option(id).choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoffeeType, Milk, Size};

    fn small_registry() -> RegistryBuilder {
        SpecRegistry::builder()
            .dimension(DimensionSpec::new(Dimension::Type, "What type of coffee?").required())
            .dimension(DimensionSpec::new(Dimension::Size, "What size?").with_default(Choice::Size(Size::Regular)))
            .option(option!(Choice::Type(CoffeeType::Latte), words: ["lat"], abbrevs: ["l"]))
            .option(option!(Choice::Size(Size::Large), words: ["big"], abbrevs: ["l", "lg"]))
            .option(option!(Choice::Size(Size::Small), words: ["smol"], abbrevs: ["s"]))
    }

    #[test]
    fn builds_word_and_abbreviation_indexes() {
        let registry = small_registry().build().unwrap();

        assert_eq!(registry.all_word_tokens(), ["large", "latte", "small", "smol", "big", "lat"]);

        let abbrs = registry.abbreviation_tokens_by_dimension();
        assert_eq!(abbrs[&Dimension::Type], ["l"]);
        assert_eq!(abbrs[&Dimension::Size], ["lg", "l", "s"]);
    }

    #[test]
    fn same_token_in_two_dimensions_is_allowed() {
        let registry = small_registry().build().unwrap();
        assert_eq!(registry.lookup_option(Dimension::Type, "L"), Some(Choice::Type(CoffeeType::Latte)));
        assert_eq!(registry.lookup_option(Dimension::Size, "L"), Some(Choice::Size(Size::Large)));
    }

    #[test]
    fn duplicate_word_within_dimension_is_rejected() {
        let err = small_registry()
            .option(option!(Choice::Size(Size::Regular), words: ["big"]))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateToken {
                dimension: Dimension::Size,
                kind: "word",
                token: "big".into(),
                first: "Large".into(),
                second: "Regular".into(),
            }
        );
    }

    #[test]
    fn duplicate_abbreviation_within_dimension_is_rejected() {
        let err = small_registry()
            .option(option!(Choice::Size(Size::Regular), abbrevs: ["LG"]))
            .build()
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateToken { kind: "abbreviation", .. }), "{err}");
    }

    #[test]
    fn repeated_token_for_same_option_is_tolerated() {
        let registry = small_registry()
            .option(option!(
                Choice::Type(CoffeeType::FlatWhite),
                words: ["flat-white", "Flat White"],
                abbrevs: ["fw", "FW"]
            ))
            .build()
            .unwrap();
        let flat_white = registry.options(Dimension::Type).find(|o| o.choice == Choice::Type(CoffeeType::FlatWhite));
        let flat_white = flat_white.unwrap();
        assert_eq!(flat_white.words, ["flat white"]);
        assert_eq!(flat_white.abbreviations, ["fw"]);
    }

    #[test]
    fn invalid_tables_are_rejected() {
        let err = small_registry().option(option!(Choice::Milk(Milk::Soy))).build().unwrap_err();
        assert!(matches!(err, RegistryError::UndeclaredDimension { dimension: Dimension::Milk, .. }));

        let err = small_registry().option(option!(Choice::Type(CoffeeType::Latte))).build().unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateOption { .. }));

        let mocha = option!(Choice::Type(CoffeeType::Mocha), abbrevs: ["m o"]);
        let err = small_registry().option(mocha).build().unwrap_err();
        assert!(matches!(err, RegistryError::InvalidAbbreviation { .. }));

        let err = small_registry().dimension(DimensionSpec::new(Dimension::Size, "Again?")).build().unwrap_err();
        assert_eq!(err, RegistryError::DuplicateDimension(Dimension::Size));
    }

    #[test]
    fn dimension_metadata_is_exposed() {
        let registry = small_registry().build().unwrap();
        let required: Vec<Dimension> = registry.required().map(|d| d.dimension).collect();
        assert_eq!(required, [Dimension::Type]);
        assert_eq!(registry.dimension(Dimension::Size).unwrap().default, Some(Choice::Size(Size::Regular)));
        assert_eq!(registry.dimension(Dimension::Milk), None);
    }
}
