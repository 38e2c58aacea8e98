use crate::engine::{self, Match, PassMetrics};
use crate::{Dimension, Order, SpecRegistry};
use once_cell::sync::Lazy;
use std::time::Duration;

static DEFAULT_REGISTRY: Lazy<SpecRegistry> = Lazy::new(|| match crate::menu::registry() {
    Ok(registry) => registry,
    Err(err) => panic!("built-in coffee option table is inconsistent: {err}"),
});

/// The built-in option table, built on first use.
///
/// # Panics
///
/// If the built-in table has a duplicate token. This is a bug in the crate,
/// caught by its tests, never a runtime condition.
pub fn default_registry() -> &'static SpecRegistry {
    &DEFAULT_REGISTRY
}

/// Options that affect parsing.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Strip chat `<@U123|name>` mentions and `:emoji:` codes before parsing.
    pub strip_chat_markup: bool,
}

/// One match in a verbose trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    /// Normalized text that matched.
    pub text: String,
    pub dimension: Dimension,
    /// Canonical option name.
    pub value: String,
    /// False when the dimension was already set by an earlier match.
    pub applied: bool,
}

/// A compact per-pass trace.
#[derive(Debug, Clone)]
pub struct PassSummary {
    /// `"bigram"`, `"unigram"` or `"abbreviation"`.
    pub pass: &'static str,
    pub duration: Duration,
    /// Input tokens this pass consumed.
    pub consumed: usize,
    pub matches: Vec<MatchSummary>,
}

/// Additional details returned by [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseDetails {
    pub total: Duration,
    /// Normalized input tokens.
    pub tokens: Vec<String>,
    pub passes: Vec<PassSummary>,
    /// Tokens no pass used.
    pub dropped: Vec<String>,
}

/// Result from [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseResultVerbose {
    /// The text that was parsed, after optional chat cleanup.
    pub text: String,
    pub order: Order,
    pub elapsed: Duration,
    pub details: ParseDetails,
}

/// Parse `text` with the built-in option table.
///
/// Never fails. Anything unrecognized is dropped; check
/// [`Order::validate`] before accepting the result.
///
/// # Example
/// ```
/// use coffeespecs::parse;
///
/// let order = parse("Soy decaf latte with 2 sugars");
/// assert_eq!(order.to_string(), "Regular Soy Decaf Latte with 2 Sugars");
///
/// assert!(!parse("just a large please").validate());
/// ```
pub fn parse(text: &str) -> Order {
    parse_with(text, default_registry(), &Options::default())
}

/// Parse `text` against `registry`.
pub fn parse_with(text: &str, registry: &SpecRegistry, options: &Options) -> Order {
    let text = prepare(text, options);
    engine::Parser::new(&text, registry).run()
}

/// Parse `text` and return per-pass traces alongside the order.
///
/// Meant for debugging the option table; [`parse_with`] does not build
/// these traces.
pub fn parse_verbose_with(text: &str, registry: &SpecRegistry, options: &Options) -> ParseResultVerbose {
    let text = prepare(text, options);
    let run = engine::Parser::new(&text, registry).run_with_metrics();

    let details = ParseDetails {
        total: run.metrics.total,
        tokens: run.tokens,
        passes: run.metrics.passes.iter().map(pass_to_summary).collect(),
        dropped: run.dropped,
    };

    ParseResultVerbose { text, order: run.order, elapsed: run.metrics.total, details }
}

fn prepare(text: &str, options: &Options) -> String {
    if options.strip_chat_markup { engine::clean_chat_text(text) } else { text.to_string() }
}

fn pass_to_summary(pass: &PassMetrics) -> PassSummary {
    PassSummary {
        pass: pass.pass.name(),
        duration: pass.duration,
        consumed: pass.consumed,
        matches: pass.matches.iter().map(match_to_summary).collect(),
    }
}

fn match_to_summary(m: &Match) -> MatchSummary {
    MatchSummary {
        text: m.text.clone(),
        dimension: m.choice.dimension(),
        value: m.choice.name().into_owned(),
        applied: m.applied,
    }
}
