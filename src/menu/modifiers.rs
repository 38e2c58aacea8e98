use crate::registry::OptionSpec;
use crate::{Choice, Decaf, Iced, Milk, Size, Strength};

/// Size, milk, strength, iced and decaf options.
pub(crate) fn get() -> Vec<OptionSpec> {
    vec![
        // Size
        option!(Choice::Size(Size::Small), words: ["smol", "sm", "sml"], abbrevs: ["s", "sm"]),
        option!(Choice::Size(Size::Regular), words: ["reg", "medium", "med"], abbrevs: ["r", "rg", "reg"]),
        option!(Choice::Size(Size::Large), words: ["lrg", "lge", "lg", "big"], abbrevs: ["l", "lg", "lge"]),
        // Milk
        option!(Choice::Milk(Milk::Fullcream), words: ["full cream", "fullcream"], abbrevs: ["fc"]),
        option!(
            Choice::Milk(Milk::Skim),
            words: ["skinny", "skimmed", "lite", "light", "skim milk"],
            abbrevs: ["sk"]
        ),
        option!(Choice::Milk(Milk::Soy), words: ["soya", "soy milk"], abbrevs: ["y", "soy"]),
        option!(Choice::Milk(Milk::LactoseFree), words: ["lactosefree", "lactose-free"], abbrevs: ["lf"]),
        // Strength
        option!(Choice::Strength(Strength::Weak), words: ["half", "half strength"], abbrevs: ["w"]),
        option!(
            Choice::Strength(Strength::ExtraShot),
            words: ["strong", "double", "doubleshot", "double shot", "extra shot", "extrashot"],
            abbrevs: ["x"]
        ),
        option!(
            Choice::Strength(Strength::TwoExtraShots),
            words: ["triple", "tripleshot", "triple shot", "extra shots"],
            abbrevs: ["xx"]
        ),
        option!(Choice::Strength(Strength::Normal), words: ["standard"]),
        // Iced. No abbreviation: a lone "i" is far too common.
        option!(Choice::Iced(Iced::Iced), words: ["ice", "icy", "icey"]),
        option!(Choice::Iced(Iced::Normal), words: ["hot"]),
        // Decaf
        option!(Choice::Decaf(Decaf::Decaf), words: ["decaffeinated", "dec", "unleaded"], abbrevs: ["d", "dc"]),
    ]
}
