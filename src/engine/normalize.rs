//! Input normalization.
//!
//! Orders arrive from web forms, chat messages and mobile sync, so the text is
//! reduced to a plain list of lowercase words before any matching:
//!
//! - lowercase and trim,
//! - remove apostrophes entirely ("i'd" -> "id"),
//! - replace every other punctuation character with a space
//!   ("extra-shot" -> "extra shot", "+2" -> "2"),
//! - split on whitespace.
//!
//! The same function normalizes the word tokens of the option table, so table
//! entries and user input always compare in the same form.

/// Normalize `input` into lowercase word tokens.
pub fn tokenize(input: &str) -> Vec<String> {
    let lower = input.trim().to_lowercase();
    let without_apostrophes = regex!(r"['‘’`]").replace_all(&lower, "");
    let spaced = regex!(r"[^\p{L}\p{N}\s]").replace_all(&without_apostrophes, " ");
    spaced.split_whitespace().map(str::to_string).collect()
}

/// Strip chat markup from a message: user mentions (`<@U0GJ5KLF8|bot>`) and
/// emoji codes (`:coffee:`).
///
/// Mention ids and emoji names would otherwise reach the abbreviation pass
/// and could decompose into spurious options.
pub fn clean_chat_text(text: &str) -> String {
    let without_mentions = regex!(r"<@[A-Z0-9]+(?:\|[^>]*)?>").replace_all(text, "");
    regex!(r":[a-z0-9_+\-]+:").replace_all(&without_mentions, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_splits() {
        assert_eq!(tokenize("  Large   Cap "), ["large", "cap"]);
    }

    #[test]
    fn tokenize_drops_apostrophes_and_spaces_punctuation() {
        assert_eq!(
            tokenize("I'd like an extra-shot latte, thanks!"),
            ["id", "like", "an", "extra", "shot", "latte", "thanks"]
        );
        assert_eq!(tokenize("Large FW +2"), ["large", "fw", "2"]);
        assert_eq!(tokenize("soy_latte"), ["soy", "latte"]);
    }

    #[test]
    fn tokenize_handles_empty_and_punctuation_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("?!... ---").is_empty());
    }

    #[test]
    fn clean_chat_text_strips_mentions_and_emoji() {
        assert_eq!(clean_chat_text("<@U0GJ5KLF8|coffeebot> large cap :coffee: please"), " large cap  please");
        assert_eq!(clean_chat_text("<@U123> lffw"), " lffw");
        assert_eq!(clean_chat_text("no markup"), "no markup");
    }
}
