mod debug_report;

use coffeespecs::{DEFAULT_PRICE, Options, PriceTable, default_registry, find_price, parse_verbose_with};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "COFFEESPECS_LOG";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let pricing = match config.pricing() {
        Ok(pricing) => pricing,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let opts = Options { strip_chat_markup: config.chat };
    let res = parse_verbose_with(&config.input, default_registry(), &opts);
    let price = pricing.map(|(table, cafe)| match find_price(&table, &cafe, &res.order) {
        Some(price) => debug_report::Price { cafe, price, fallback: false },
        None => debug_report::Price { cafe, price: config.default_price, fallback: true },
    });

    debug_report::print_run(&res, price.as_ref(), config.color);
}

struct CliConfig {
    input: String,
    chat: bool,
    prices: Option<PathBuf>,
    cafe: Option<String>,
    default_price: f64,
    color: bool,
}

impl CliConfig {
    /// The loaded price table and cafe, when `--prices` was given.
    fn pricing(&self) -> Result<Option<(PriceTable, String)>, coffeespecs::PriceTableError> {
        let Some(path) = &self.prices else {
            return Ok(None);
        };
        let table = PriceTable::from_path(path)?;
        // A single-cafe table needs no --cafe.
        let cafe = match &self.cafe {
            Some(cafe) => cafe.clone(),
            None => table.cafes().first().map(|c| c.to_string()).unwrap_or_default(),
        };
        Ok(Some((table, cafe)))
    }
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut chat = false;
    let mut prices: Option<PathBuf> = None;
    let mut cafe: Option<String> = None;
    let mut default_price = DEFAULT_PRICE;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("coffeespecs {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--chat" => chat = true,
            "--prices" => {
                let value = args.next().ok_or_else(|| "error: --prices expects a file".to_string())?;
                prices = Some(PathBuf::from(value));
            }
            "--cafe" => {
                cafe = Some(args.next().ok_or_else(|| "error: --cafe expects a name".to_string())?);
            }
            "--default-price" => {
                let value = args.next().ok_or_else(|| "error: --default-price expects a value".to_string())?;
                default_price = parse_price(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--prices=") => {
                prices = Some(PathBuf::from(arg.trim_start_matches("--prices=")));
            }
            _ if arg.starts_with("--cafe=") => {
                cafe = Some(arg.trim_start_matches("--cafe=").to_string());
            }
            _ if arg.starts_with("--default-price=") => {
                default_price = parse_price(arg.trim_start_matches("--default-price="))?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    if cafe.is_some() && prices.is_none() {
        return Err("error: --cafe requires --prices".to_string());
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, chat, prices, cafe, default_price, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_price(value: &str) -> Result<f64, String> {
    match value.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(format!("error: invalid price '{value}' (expected a non-negative number)")),
    }
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "coffeespecs {version}

Parse a free-text coffee order and show how it was understood.

Usage:
  coffeespecs [OPTIONS] [--] <input...>
  coffeespecs [OPTIONS] --input <text>

Options:
  -i, --input <text>         Order text to parse. If omitted, reads remaining args
                             or stdin when no args are provided.
  --chat                     Strip chat mentions and :emoji: codes first.
  --prices <file.json>       Price table, {{\"cafe\": {{\"Regular Cappuccino\": 4.0}}}}.
  --cafe <name>              Cafe to price against. Default: first cafe in the table.
  --default-price <price>    Price when no key matches. Default: {default_price}
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}            Log filter, e.g. coffeespecs=debug or coffeespecs=trace.

Exit codes:
  0  Success.
  1  Price table could not be loaded.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        default_price = DEFAULT_PRICE,
        log_env = LOG_ENV,
    )
}
