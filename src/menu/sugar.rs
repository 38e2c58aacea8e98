use crate::registry::OptionSpec;
use crate::{Choice, Sugar};

const NUMBER_WORDS: [&str; 12] =
    ["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven"];

/// Sugar options: "No sugar", "1 Sugar", then generated "2 Sugars" .. "11 Sugars".
pub(crate) fn get() -> Vec<OptionSpec> {
    let mut options = vec![
        option!(
            Choice::Sugar(Sugar::NONE),
            words: ["no sugars", "nosugar", "without sugar", "0 sugars", "0 sugar"],
            abbrevs: ["0s"]
        ),
        option!(
            Choice::Sugar(Sugar::ONE),
            words: ["sugar", "sugars", "one sugar", "with 1", "with one", "with sugar"],
            abbrevs: ["1s", "1sugar"]
        ),
    ];
    options.extend(Sugar::all().filter(|s| s.count() >= 2).map(counted));
    options
}

fn counted(sugar: Sugar) -> OptionSpec {
    let n = sugar.count();
    let word = NUMBER_WORDS[usize::from(n)];
    let words = [
        format!("{n} sugar"),
        format!("with {n}"),
        format!("{word} sugars"),
        format!("{word} sugar"),
        format!("with {word}"),
    ];
    let abbrevs = [format!("{n}s"), format!("{n}sugar"), format!("{n}sugars")];

    OptionSpec {
        choice: Choice::Sugar(sugar),
        words: words.into_iter().collect(),
        abbreviations: abbrevs.into_iter().collect(),
    }
}
