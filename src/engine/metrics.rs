use crate::{Choice, Order};
use std::time::Duration;

/// The parser passes, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Bigram,
    Unigram,
    Abbreviation,
}

impl Pass {
    pub fn name(self) -> &'static str {
        match self {
            Pass::Bigram => "bigram",
            Pass::Unigram => "unigram",
            Pass::Abbreviation => "abbreviation",
        }
    }
}

/// One recognized token (or token pair) and what it resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Normalized text that matched.
    pub text: String,
    pub choice: Choice,
    /// False when the dimension already had a value (first assignment wins).
    pub applied: bool,
}

/// Timing and matches for a single pass.
#[derive(Debug, Clone)]
pub struct PassMetrics {
    pub pass: Pass,
    pub duration: Duration,
    /// Number of input tokens consumed by this pass.
    pub consumed: usize,
    pub matches: Vec<Match>,
}

impl PassMetrics {
    pub(crate) fn new(pass: Pass) -> Self {
        PassMetrics { pass, duration: Duration::ZERO, consumed: 0, matches: Vec::new() }
    }
}

/// Timings for a whole run.
#[derive(Debug, Clone)]
pub struct RunMetrics {
    pub total: Duration,
    pub passes: Vec<PassMetrics>,
}

/// Parser output bundled with diagnostics.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub order: Order,
    /// Normalized input tokens.
    pub tokens: Vec<String>,
    /// Tokens no pass could use.
    pub dropped: Vec<String>,
    pub metrics: RunMetrics,
}
