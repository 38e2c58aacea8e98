//! The three-pass order parser.
//!
//! ## Key concepts
//!
//! - **Token**: one normalized input word (see `normalize.rs`).
//! - **Consumed**: a token used by an earlier pass. Later passes skip it, even
//!   when its match was ignored because the dimension was already set.
//! - **First wins**: once a dimension has a value, later matches for that
//!   dimension are recorded but not applied. Pass order is therefore the
//!   priority order: bigram > unigram > abbreviation.
//! - **Shared words**: a word listed under several dimensions goes to the
//!   first dimension in precedence order that is still unassigned.
//!
//! ```text
//! "soy decaf latte with 2 sugars"
//!  tokens:  soy decaf latte with 2 sugars
//!  bigram:                   [with 2]        sugar = 2 Sugars
//!  unigram: [soy][decaf][latte]   [sugars]  milk, decaf, type; sugars ignored
//!  abbrev:  (nothing left)
//! ```

use super::abbrev::decompose;
use super::metrics::{Match, Pass, PassMetrics, RunMetrics, RunResult};
use super::normalize::tokenize;
use crate::registry::OptionId;
use crate::{DimensionSet, Order, SpecRegistry};
use std::time::Instant;
use tracing::{debug, trace};

/// Parses one order against a registry.
///
/// Usage: `Parser::new(input, registry).run()`.
#[derive(Debug)]
pub struct Parser<'a> {
    registry: &'a SpecRegistry,
    tokens: Vec<String>,
    consumed: Vec<bool>,
    order: Order,
}

impl<'a> Parser<'a> {
    pub fn new(input: &str, registry: &'a SpecRegistry) -> Self {
        let tokens = tokenize(input);
        let consumed = vec![false; tokens.len()];
        Parser { registry, tokens, consumed, order: Order::default() }
    }

    /// Record a word or phrase match and mark its tokens consumed.
    ///
    /// `candidates` is never empty.
    fn take_word(&mut self, text: String, candidates: &[OptionId], positions: &[usize]) -> Match {
        for &pos in positions {
            self.consumed[pos] = true;
        }

        let registry = self.registry;
        let fallback = registry.option(candidates[0]).choice;
        let choice = candidates
            .iter()
            .map(|&id| registry.option(id).choice)
            .find(|c| !self.order.has(c.dimension()))
            .unwrap_or(fallback);

        let applied = self.order.fill(choice);
        trace!(%text, %choice, applied, "word match");
        Match { text, choice, applied }
    }

    /// Adjacent pairs of unconsumed tokens that form a known phrase.
    fn bigram_pass(&mut self) -> PassMetrics {
        let start = Instant::now();
        let mut metrics = PassMetrics::new(Pass::Bigram);
        let registry = self.registry;

        for i in 1..self.tokens.len() {
            if self.consumed[i - 1] || self.consumed[i] {
                continue;
            }
            let phrase = format!("{} {}", self.tokens[i - 1], self.tokens[i]);
            let candidates = registry.word_candidates(&phrase);
            if candidates.is_empty() {
                continue;
            }
            let m = self.take_word(phrase, candidates, &[i - 1, i]);
            metrics.consumed += 2;
            metrics.matches.push(m);
        }

        metrics.duration = start.elapsed();
        metrics
    }

    /// Single unconsumed tokens that are known words.
    fn unigram_pass(&mut self) -> PassMetrics {
        let start = Instant::now();
        let mut metrics = PassMetrics::new(Pass::Unigram);
        let registry = self.registry;

        for i in 0..self.tokens.len() {
            if self.consumed[i] {
                continue;
            }
            let candidates = registry.word_candidates(&self.tokens[i]);
            if candidates.is_empty() {
                continue;
            }
            let m = self.take_word(self.tokens[i].clone(), candidates, &[i]);
            metrics.consumed += 1;
            metrics.matches.push(m);
        }

        metrics.duration = start.elapsed();
        metrics
    }

    /// Remaining tokens that split into abbreviations of unassigned dimensions.
    fn abbreviation_pass(&mut self) -> PassMetrics {
        let start = Instant::now();
        let mut metrics = PassMetrics::new(Pass::Abbreviation);

        for i in 0..self.tokens.len() {
            if self.consumed[i] {
                continue;
            }
            let available = DimensionSet::all() - self.order.dimensions();
            let Some(ids) = decompose(self.registry, &self.tokens[i], available) else {
                trace!(token = %self.tokens[i], "no decomposition");
                continue;
            };

            self.consumed[i] = true;
            metrics.consumed += 1;
            for id in ids {
                let choice = self.registry.option(id).choice;
                let applied = self.order.fill(choice);
                trace!(token = %self.tokens[i], %choice, applied, "abbreviation match");
                metrics.matches.push(Match { text: self.tokens[i].clone(), choice, applied });
            }
        }

        metrics.duration = start.elapsed();
        metrics
    }

    /// Run all passes and return the order with per-pass diagnostics.
    pub fn run_with_metrics(mut self) -> RunResult {
        let total_start = Instant::now();

        let passes = vec![self.bigram_pass(), self.unigram_pass(), self.abbreviation_pass()];
        if self.order.fold_iced_chocolate() {
            trace!("iced hot chocolate folded into iced chocolate");
        }

        let dropped: Vec<String> = self
            .tokens
            .iter()
            .zip(&self.consumed)
            .filter(|&(_, &consumed)| !consumed)
            .map(|(token, _)| token.clone())
            .collect();

        debug!(
            tokens = self.tokens.len(),
            dropped = dropped.len(),
            order = %self.order,
            valid = self.order.validate_with(self.registry),
            "parsed order"
        );

        let total = total_start.elapsed();
        RunResult { order: self.order, tokens: self.tokens, dropped, metrics: RunMetrics { total, passes } }
    }

    /// Run all passes and return only the order.
    pub fn run(self) -> Order {
        self.run_with_metrics().order
    }
}
