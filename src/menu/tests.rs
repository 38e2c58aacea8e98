use crate::{Choice, CoffeeType, Dimension, Milk, Order, Size, Strength, Sugar, default_registry, parse};

fn sugar(n: u8) -> Choice {
    Choice::Sugar(Sugar::new(n).unwrap())
}

#[test]
fn built_in_table_is_consistent() {
    let registry = super::registry().unwrap();
    assert_eq!(registry.dimensions().len(), 7);
    for dim in Dimension::ALL {
        assert_eq!(registry.options(dim).count(), Choice::all(dim).len(), "{dim}");
    }
}

#[test]
fn longest_word_token_comes_first() {
    let tokens = default_registry().all_word_tokens();
    assert_eq!(tokens[0], "iced chocolate");
    assert!(tokens.windows(2).all(|w| w[0].len() >= w[1].len()));
}

#[test]
fn abbreviations_are_listed_per_dimension() {
    let abbrs = default_registry().abbreviation_tokens_by_dimension();
    assert!(abbrs[&Dimension::Type].contains(&"fw"));
    assert!(abbrs[&Dimension::Milk].contains(&"lf"));
    assert!(abbrs[&Dimension::Iced].is_empty());
    assert_eq!(abbrs[&Dimension::Strength], ["xx", "w", "x"]);
}

#[test]
fn order_examples_matching() {
    // (input, expected values; dimensions not listed must be absent)
    let cases: Vec<(&str, Vec<Choice>)> = vec![
        ("Large Cap", vec![Choice::Type(CoffeeType::Cappuccino), Choice::Size(Size::Large)]),
        ("LC", vec![Choice::Type(CoffeeType::Cappuccino), Choice::Size(Size::Large)]),
        ("SC", vec![Choice::Type(CoffeeType::Cappuccino), Choice::Size(Size::Small)]),
        ("Large Cap 2 Sugars", vec![Choice::Type(CoffeeType::Cappuccino), Choice::Size(Size::Large), sugar(2)]),
        (
            "Small strong cap",
            vec![
                Choice::Type(CoffeeType::Cappuccino),
                Choice::Size(Size::Small),
                Choice::Strength(Strength::ExtraShot),
            ],
        ),
        (
            "Small doubleshot cap",
            vec![
                Choice::Type(CoffeeType::Cappuccino),
                Choice::Size(Size::Small),
                Choice::Strength(Strength::ExtraShot),
            ],
        ),
        ("Small Latte", vec![Choice::Type(CoffeeType::Latte), Choice::Size(Size::Small)]),
        ("SL", vec![Choice::Type(CoffeeType::Latte), Choice::Size(Size::Small)]),
        ("RegL", vec![Choice::Type(CoffeeType::Latte), Choice::Size(Size::Regular)]),
        ("LL", vec![Choice::Type(CoffeeType::Latte), Choice::Size(Size::Large)]),
        ("CL", vec![Choice::Type(CoffeeType::Cappuccino), Choice::Size(Size::Large)]),
        ("CL 2S", vec![Choice::Type(CoffeeType::Cappuccino), Choice::Size(Size::Large), sugar(2)]),
        (
            "Large Iced Latte",
            vec![Choice::Type(CoffeeType::Latte), Choice::Size(Size::Large), Choice::Iced(crate::Iced::Iced)],
        ),
        ("Large Flat white", vec![Choice::Type(CoffeeType::FlatWhite), Choice::Size(Size::Large)]),
        ("Large FW 3 Sugars", vec![Choice::Type(CoffeeType::FlatWhite), Choice::Size(Size::Large), sugar(3)]),
        ("Regular Flat White", vec![Choice::Type(CoffeeType::FlatWhite), Choice::Size(Size::Regular)]),
        (
            "Soy decaf latte with 2 sugars",
            vec![
                Choice::Type(CoffeeType::Latte),
                Choice::Milk(Milk::Soy),
                Choice::Decaf(crate::Decaf::Decaf),
                sugar(2),
            ],
        ),
        ("yfw", vec![Choice::Type(CoffeeType::FlatWhite), Choice::Milk(Milk::Soy)]),
        ("lffw", vec![Choice::Type(CoffeeType::FlatWhite), Choice::Milk(Milk::LactoseFree)]),
        ("Soy Iced Coffee", vec![Choice::Type(CoffeeType::IcedCoffee), Choice::Milk(Milk::Soy)]),
        ("Skim Iced Chocolate", vec![Choice::Type(CoffeeType::IcedChocolate), Choice::Milk(Milk::Skim)]),
        ("Lactose Free Cap", vec![Choice::Type(CoffeeType::Cappuccino), Choice::Milk(Milk::LactoseFree)]),
        ("lf Cap", vec![Choice::Type(CoffeeType::Cappuccino), Choice::Milk(Milk::LactoseFree)]),
        ("icy choc", vec![Choice::Type(CoffeeType::IcedChocolate)]),
        ("iced hot chocolate", vec![Choice::Type(CoffeeType::IcedChocolate)]),
        ("iced hc", vec![Choice::Type(CoffeeType::IcedChocolate)]),
        ("iced hotchoc", vec![Choice::Type(CoffeeType::IcedChocolate)]),
        ("icy hot choc", vec![Choice::Type(CoffeeType::IcedChocolate)]),
        ("large iced hot chocolate", vec![Choice::Type(CoffeeType::IcedChocolate), Choice::Size(Size::Large)]),
        ("hot choc no sugar", vec![Choice::Type(CoffeeType::HotChocolate), sugar(0)]),
        (
            "a triple shot americano",
            vec![Choice::Type(CoffeeType::LongBlack), Choice::Strength(Strength::TwoExtraShots)],
        ),
        ("two sugars in my piccolo", vec![Choice::Type(CoffeeType::PiccoloLatte), sugar(2)]),
        (
            "Hey there barista, would very much enjoy if you could provide me with an extra-shot piccolo latte plox, \
             thank you for listening to my TED talk",
            vec![Choice::Type(CoffeeType::PiccoloLatte), Choice::Strength(Strength::ExtraShot)],
        ),
        (
            "yo beanie boy give me a smol iced latte pls",
            vec![Choice::Type(CoffeeType::Latte), Choice::Size(Size::Small), Choice::Iced(crate::Iced::Iced)],
        ),
    ];

    for (input, expected) in cases {
        let order = parse(input);
        assert!(order.validate(), "'{input}' did not validate: {order:?}");

        let mut expected_order = Order::default();
        for choice in &expected {
            expected_order.set(*choice);
        }
        assert_eq!(order, expected_order, "unexpected order for '{input}'");
    }
}

#[test]
fn order_display_examples() {
    let cases = [
        ("Large Cappuccino", "Large Cap"),
        ("Small Cappuccino", "SC"),
        ("Large Cappuccino with 2 Sugars", "Large Cap 2 Sugars"),
        ("Small Extra-shot Cappuccino", "Small strong cap"),
        ("Small Latte", "Small Latte"),
        ("Regular Latte", "RegL"),
        ("Large Latte", "LL"),
        ("Large Iced Latte", "Large Iced Latte"),
        ("Large Flat White", "Large Flat white"),
        ("Large Flat White with 3 Sugars", "Large FW 3 Sugars"),
        ("Regular Flat White", "Regular Flat White"),
        ("Regular Soy Decaf Latte with 2 Sugars", "Soy decaf latte with 2 sugars"),
        ("Regular Lactose Free Flat White", "lffw"),
        ("Small Iced Latte", "yo beanie boy give me a smol iced latte pls"),
        ("Regular Iced Chocolate", "iced hot chocolate"),
        ("Regular normal Latte", "hot latte"),
    ];

    for (expected, input) in cases {
        assert_eq!(parse(input).to_string(), expected, "display of '{input}'");
    }
}

#[test]
fn text_without_a_type_does_not_validate() {
    for input in ["large soy", "two sugars please", "extra shot", "hello"] {
        let order = parse(input);
        assert!(!order.validate(), "'{input}' should be missing a type: {order:?}");
        assert_eq!(order.validation_errors()[0].dimension, Dimension::Type);
    }
}

#[test]
fn junk_input_never_panics() {
    let inputs =
        ["", "   ", "?!.,;:'\"", "🙂☕", "ü", "llllllllllllllllllllllll", "xxxxxxxx 2s2s2s", "with with with"];
    for input in inputs {
        let order = parse(input);
        let _ = order.to_string();
        let _ = order.ordered_price_keys();
    }
    assert_eq!(parse(""), Order::default());
    assert_eq!(parse("?!.,;:'\""), Order::default());
}
