use coffeespecs::{ParseResultVerbose, PassSummary};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Result of a `--prices` lookup.
pub struct Price {
    pub cafe: String,
    pub price: f64,
    /// True when no key matched and the default was used.
    pub fallback: bool,
}

pub fn print_run(res: &ParseResultVerbose, price: Option<&Price>, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("☕ Parsing: \"{}\"", res.text.trim()), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Tokens ━━━", ansi::GRAY));
    println!("  {}", res.details.tokens.join(" "));

    println!("\n{}", palette.paint("━━━ Passes ━━━", ansi::GRAY));
    for pass in &res.details.passes {
        print_pass(pass, &palette);
    }
    if !res.details.dropped.is_empty() {
        println!("  {} {}", palette.paint("dropped:", ansi::BLUE), palette.dim(res.details.dropped.join(" ")));
    }

    println!("\n{}", palette.paint("━━━ Order ━━━", ansi::GRAY));
    print_order(res, &palette);

    println!("\n{}", palette.paint("━━━ Price keys ━━━", ansi::GRAY));
    for (idx, key) in res.order.ordered_price_keys().iter().enumerate() {
        println!("  {} {}", palette.paint(format!("[{}]", idx), ansi::GRAY), key);
    }
    if let Some(price) = price {
        let amount = format!("{:.2}", price.price);
        let amount = if price.fallback { palette.paint(amount, ansi::YELLOW) } else { palette.paint(amount, ansi::GREEN) };
        let note = if price.fallback { palette.dim(" (default, no key matched)") } else { String::new() };
        println!("  {} {} {}{}", palette.dim("price at"), palette.paint(&price.cafe, ansi::CYAN), amount, note);
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    let per_pass: Vec<String> =
        res.details.passes.iter().map(|p| format!("{}: {}", p.pass, palette.dim(format!("{:?}", p.duration)))).collect();
    println!(
        "  Total: {}  │  {}",
        palette.paint(format!("{:?}", res.details.total), ansi::GREEN),
        per_pass.join("  │  ")
    );
    println!();
}

fn print_pass(pass: &PassSummary, palette: &ansi::Palette) {
    println!(
        "  {} {}",
        palette.paint(format!("{}:", pass.pass), ansi::BLUE),
        if pass.consumed > 0 {
            palette.paint(format!("✓ {} tokens", pass.consumed), ansi::GREEN)
        } else {
            palette.dim("✗ 0 tokens")
        }
    );

    for m in &pass.matches {
        let value = if m.applied { palette.bold(palette.paint(&m.value, ansi::GREEN)) } else { palette.dim(&m.value) };
        let note = if m.applied { String::new() } else { palette.dim(" (already set)") };
        println!(
            "    {} {} {}={}{}",
            palette.paint(format!("{:?}", m.text), ansi::YELLOW),
            palette.dim("→"),
            palette.paint(m.dimension.name(), ansi::CYAN),
            value,
            note
        );
    }
}

fn print_order(res: &ParseResultVerbose, palette: &ansi::Palette) {
    let order = &res.order;
    println!("  {}", palette.bold(order.to_string()));

    match order.to_canonical_text() {
        Ok(text) => println!("  {} {}", palette.dim("canonical:"), text),
        Err(err) => println!("  {} {}", palette.dim("canonical:"), palette.paint(err.to_string(), ansi::RED)),
    }

    let missing = order.validation_errors();
    if missing.is_empty() {
        println!("  {}", palette.paint("✓ valid", ansi::GREEN));
        return;
    }
    println!("  {}", palette.paint("✗ incomplete", ansi::RED));
    for spec in missing {
        println!("    {} {}", palette.paint(format!("{}:", spec.dimension), ansi::YELLOW), spec.question);
    }
}
