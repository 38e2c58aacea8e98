//! Order parsing engine.
//!
//! Parsing a raw order is a fixed, three-pass pipeline over normalized tokens.
//! Each pass only looks at tokens no earlier pass consumed, and a dimension
//! keeps the first value assigned to it:
//!
//! ```text
//! raw text ── tokenize (normalize.rs)
//!               │  lowercase, drop apostrophes, punctuation -> space
//!               v
//!          Parser::run (parser.rs)
//!            (1) bigram pass        "flat white", "with 2", "iced chocolate"
//!            (2) unigram pass       "large", "soy", "cap"
//!            (3) abbreviation pass  "lffw" -> "lf" + "fw"   (abbrev.rs)
//!               │
//!               v
//!             Order  (+ per-pass metrics, metrics.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `normalize.rs`: input normalization and chat markup stripping.
//! - `parser.rs`: runs the passes, applies precedence and first-wins.
//! - `abbrev.rs`: recursive decomposition of run-together abbreviations.
//! - `metrics.rs`: per-pass timings and match records for debugging.
//!
//! Tokens that never match are dropped. The parser has no failure mode:
//! validation (is there a type?) is the caller's job.
//!
//! ## Debugging
//!
//! Pass activity is reported through `tracing` at `debug`/`trace` level.

#[path = "engine/abbrev.rs"]
mod abbrev;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/normalize.rs"]
mod normalize;
#[path = "engine/parser.rs"]
mod parser;

pub use metrics::{Match, PassMetrics};
pub use normalize::{clean_chat_text, tokenize};
pub use parser::Parser;
