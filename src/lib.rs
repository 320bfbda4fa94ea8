pub mod errors;
pub mod context;
pub mod comparison;
pub mod dump;
pub mod formatters;  // plugin model
pub mod lexicon;
pub mod value;
mod store;

use errors::Result;

pub use context::Context;
pub use dump::Dump;
pub use errors::LexiconError;
pub use lexicon::Lexicon;
pub use value::{from_primitive, FromPrimitive, Kind, ListValue, Value};

/// Convenience: parse a JSON dump document into a new lexicon.
pub fn from_json(json: &str, case_sensitive: bool) -> Result<Lexicon> {
    let dump = Dump::from_json_str(json)?;
    let mut lex = Lexicon::with_case_sensitivity(case_sensitive);
    Context::default().load(&mut lex, &dump)?;
    Ok(lex)
}

/// Convenience: the JSON dump document for `lex`, pretty-printed.
pub fn to_json(lex: &Lexicon) -> Result<String> {
    lex.dump().to_json_string_pretty()
}
