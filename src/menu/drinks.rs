use crate::registry::OptionSpec;
use crate::{Choice, CoffeeType};

/// Drink types.
pub(crate) fn get() -> Vec<OptionSpec> {
    use CoffeeType::*;

    vec![
        option!(Choice::Type(Cappuccino), words: ["cap", "capp", "cappucino", "capuccino"], abbrevs: ["c", "cap"]),
        option!(Choice::Type(Latte), words: ["lat"], abbrevs: ["l", "lat"]),
        option!(Choice::Type(Mocha), words: ["mochaccino"], abbrevs: ["m", "mo"]),
        option!(Choice::Type(Espresso), words: ["expresso"], abbrevs: ["e", "es"]),
        option!(Choice::Type(ShortBlack), abbrevs: ["sb"]),
        option!(Choice::Type(LongBlack), words: ["americano"], abbrevs: ["lb"]),
        // No "cl": that is cappuccino + large.
        option!(Choice::Type(ChaiLatte), words: ["chai"], abbrevs: ["chai"]),
        option!(Choice::Type(Macchiato), words: ["mac", "macc", "machiato"], abbrevs: ["mac", "macc"]),
        option!(Choice::Type(FlatWhite), words: ["flatwhite"], abbrevs: ["fw"]),
        option!(Choice::Type(Affogato), abbrevs: ["af"]),
        option!(Choice::Type(HotChocolate), words: ["chocolate", "choc", "hot choc", "hotchoc"], abbrevs: ["hc"]),
        option!(
            Choice::Type(IcedChocolate),
            words: ["iced choc", "icy chocolate", "icy choc", "icey chocolate", "icey choc"],
            abbrevs: ["ic"]
        ),
        option!(Choice::Type(IcedCoffee), words: ["icy coffee", "icey coffee"], abbrevs: ["icf"]),
        option!(Choice::Type(Babyccino), words: ["babycino", "babychino", "frothaccino"], abbrevs: ["bc"]),
        option!(Choice::Type(PiccoloLatte), words: ["piccolo"], abbrevs: ["pl", "pic", "picc"]),
        option!(Choice::Type(ColdDrip), words: ["colddrip", "cold brew"], abbrevs: ["cd"]),
        option!(Choice::Type(Filtered), words: ["filter", "filter coffee", "batch brew"], abbrevs: ["filt"]),
        option!(Choice::Type(Tea)),
    ]
}
