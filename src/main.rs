use clap::Parser;
use lexicon::formatters::Registry;
use lexicon::{Context, Dump, Lexicon, Value};
use tracing::Level;

/// Load a lexicon dump and print it, or look up keys in it.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// JSON dump document, e.g. '{"entries": ["a", 1, "b", 2]}'
    dump: String,
    /// Compare text keys exactly instead of ignoring case
    #[arg(long)]
    case_sensitive: bool,
    /// Print the value stored at KEY (repeatable). Parsed as JSON, else text.
    #[arg(long = "get", value_name = "KEY")]
    get: Vec<String>,
    /// Output formatter
    #[arg(long, default_value = "terminal")]
    format: String,
    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_key(raw: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|j| lexicon::from_primitive(&j).ok())
        .unwrap_or_else(|| Value::from(raw))
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn main() {
    // Parse CLI arguments.
    let args = Args::parse();

    // Logging goes to stderr so stdout stays clean.
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Pick the output formatter.
    let registry = Registry::with_builtins();
    let formatter = match registry.get(&args.format) {
        Some(f) => f,
        None => fail(format!(
            "Unknown format `{}` (available: {})",
            args.format,
            registry.names().join(", ")
        )),
    };
    let ctx = Context::default().with_formatter(formatter);

    // Parse the dump document.
    let dump = match Dump::from_json_str(&args.dump) {
        Ok(d) => d,
        Err(e) => fail(format!("Invalid dump: {e}")),
    };

    // Load it into a lexicon.
    let mut lex = Lexicon::with_case_sensitivity(args.case_sensitive);
    if let Err(e) = ctx.load(&mut lex, &dump) {
        fail(e);
    }

    // No lookups requested: print the whole lexicon.
    if args.get.is_empty() {
        match lex.render(&ctx) {
            Ok(text) => println!("{text}"),
            Err(e) => fail(e),
        }
        return;
    }

    // Look up each requested key.
    for raw in &args.get {
        match lex.get_index(&parse_key(raw)) {
            Ok(v) => println!("{v}"),
            Err(e) => fail(e),
        }
    }
}
