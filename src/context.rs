use std::sync::Arc;

use serde_json::Value as Json;

use crate::dump::Dump;
use crate::errors::Result;
use crate::formatters::{builtins, Formatter};
use crate::lexicon::Lexicon;
use crate::value::{from_primitive, Value};

/// Coercion from a raw JSON dump entry into a lexicon value.
pub type Coercion = fn(&Json) -> Result<Value>;

/// Host-side collaborators a lexicon needs for loading and printing.
#[derive(Clone)]
pub struct Context {
    formatter: Arc<dyn Formatter>,
    coerce: Coercion,
}

impl Default for Context {
    fn default() -> Self {
        Self { formatter: Arc::new(builtins::Terminal), coerce: from_primitive::<Json> }
    }
}

impl Context {
    pub fn with_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_coercion(mut self, coerce: Coercion) -> Self {
        self.coerce = coerce;
        self
    }

    pub fn render(&self, dump: &Dump) -> Result<String> {
        self.formatter.render(dump)
    }

    /// Loads a parsed JSON dump into `lex` using this context's coercion.
    pub fn load(&self, lex: &mut Lexicon, dump: &Dump<Json>) -> Result<()> {
        lex.load_dump(dump, self.coerce)
    }
}
