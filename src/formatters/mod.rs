use std::collections::HashMap;
use std::sync::Arc;

use crate::dump::Dump;
use crate::errors::Result;

/// Turns a dump into text. Pluggable so hosts can register their own.
pub trait Formatter: Send + Sync {
    fn name(&self) -> &'static str;
    fn render(&self, dump: &Dump) -> Result<String>;
}

/// Formatters by name.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<HashMap<&'static str, Arc<dyn Formatter>>>,
}

impl Registry {
    pub fn new() -> Self { Self::default() }

    pub fn with_builtins() -> Self {
        let mut map: HashMap<&'static str, Arc<dyn Formatter>> = HashMap::new();
        map.insert("terminal", Arc::new(builtins::Terminal));
        map.insert("json", Arc::new(builtins::Json));
        Self { inner: Arc::new(map) }
    }

    pub fn register<F: Formatter + 'static>(&mut self, f: F) {
        let mut_map = Arc::make_mut(&mut self.inner);
        mut_map.insert(f.name(), Arc::new(f));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Formatter>> {
        self.inner.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.inner.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

pub mod builtins {
    use super::*;
    use crate::value::Value;
    use itertools::Itertools;

    /// Human-readable listing: header, then `  [key] = value` per entry.
    pub struct Terminal;

    fn quoted(v: &Value) -> String {
        match v {
            Value::Text(s) => format!("{s:?}"),
            other => other.to_string(),
        }
    }

    impl Formatter for Terminal {
        fn name(&self) -> &'static str { "terminal" }
        fn render(&self, dump: &Dump) -> Result<String> {
            let lines = dump
                .entries
                .iter()
                .map(|(k, v)| format!("  [{}] = {}", quoted(k), quoted(v)));
            Ok(std::iter::once(dump.header.clone()).chain(lines).join("\n"))
        }
    }

    /// Pretty-printed JSON dump document.
    pub struct Json;

    impl Formatter for Json {
        fn name(&self) -> &'static str { "json" }
        fn render(&self, dump: &Dump) -> Result<String> {
            dump.to_json_string_pretty()
        }
    }
}
