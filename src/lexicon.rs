//! The lexicon: an insertion-ordered map over [`Value`] keys whose text keys
//! may compare case-insensitively.
//!
//! Switching case sensitivity rebuilds the backing store and drops every
//! entry. `copy()` always produces a case-insensitive lexicon.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::context::Context;
use crate::dump::Dump;
use crate::errors::{LexiconError, Result};
use crate::store::Store;
use crate::value::{ListValue, Value};

pub struct Lexicon {
    store: Store,
    case_sensitive: bool,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// An empty, case-insensitive lexicon.
    pub fn new() -> Self {
        Self { store: Store::new(false), case_sensitive: false }
    }

    pub fn with_case_sensitivity(case_sensitive: bool) -> Self {
        let mut lex = Self::new();
        lex.set_case_sensitive(case_sensitive);
        lex
    }

    /// Case-insensitive copy of the current entries.
    ///
    /// Fails with `DuplicateKey` when the source is case-sensitive and holds
    /// keys that differ only by case.
    pub fn copy(&self) -> Result<Lexicon> {
        let mut out = Lexicon::new();
        for (k, v) in self.iter() {
            out.add(k.clone(), v.clone())?;
        }
        Ok(out)
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Switches the key comparison mode. Any change discards all entries.
    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        if case_sensitive == self.case_sensitive {
            return;
        }
        debug!(
            case_sensitive,
            dropped = self.store.len(),
            "rebuilding lexicon store"
        );
        self.case_sensitive = case_sensitive;
        self.store = Store::new(case_sensitive);
        debug_assert_eq!(self.store.case_sensitive(), self.case_sensitive);
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    fn duplicate(&self, key: &Value) -> LexiconError {
        LexiconError::DuplicateKey { key: key.to_string(), case_sensitive: self.case_sensitive }
    }

    /// Inserts a new entry; an existing key is an error, never overwritten.
    pub fn add(&mut self, key: Value, value: Value) -> Result<()> {
        if self.store.position(&key).is_some() {
            return Err(self.duplicate(&key));
        }
        trace!(%key, "add");
        self.store.push(key, value);
        Ok(())
    }

    /// Index assignment: inserts or overwrites, returning the previous value.
    /// The stored key keeps its original spelling.
    pub fn set_index(&mut self, key: Value, value: Value) -> Option<Value> {
        match self.store.position(&key) {
            Some(i) => Some(self.store.replace(i, value)),
            None => {
                self.store.push(key, value);
                None
            }
        }
    }

    /// Index read; a missing key is an error.
    pub fn get_index(&self, key: &Value) -> Result<&Value> {
        self.store.get(key).ok_or_else(|| LexiconError::KeyNotFound {
            key: key.to_string(),
            case_sensitive: self.case_sensitive,
        })
    }

    /// Non-erroring lookup.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.store.get(key)
    }

    pub fn remove(&mut self, key: &Value) -> bool {
        match self.store.position(key) {
            Some(i) => {
                let (k, _) = self.store.remove_at(i);
                trace!(key = %k, "remove");
                true
            }
            None => false,
        }
    }

    /// Removes `key` only if it currently maps to `value`.
    pub fn remove_entry(&mut self, key: &Value, value: &Value) -> bool {
        if !self.contains_entry(key, value) {
            return false;
        }
        self.remove(key)
    }

    pub fn clear(&mut self) {
        debug!(dropped = self.store.len(), "clearing lexicon");
        self.store.clear();
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.store.position(key).is_some()
    }

    /// Value membership by plain value equality; the case rule does not apply.
    pub fn contains_value(&self, value: &Value) -> bool {
        self.store.entries().iter().any(|(_, v)| v == value)
    }

    pub fn contains_entry(&self, key: &Value, value: &Value) -> bool {
        self.get(key) == Some(value)
    }

    pub fn keys(&self) -> ListValue {
        self.store.entries().iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn values(&self) -> ListValue {
        self.store.entries().iter().map(|(_, v)| v.clone()).collect()
    }

    /// Borrowing iteration over `(key, value)` pairs in store order. The
    /// lexicon cannot be mutated while an iterator is alive.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.store.entries().iter() }
    }

    pub fn dump(&self) -> Dump {
        Dump::new(
            format!("LEXICON of {} items:", self.len()),
            self.store.entries().to_vec(),
        )
    }

    /// Replaces the contents with the entries of `dump`, each key and value
    /// passed through `coerce`. Keys that collide under the current mode fail
    /// with `DuplicateKey`; on any error the lexicon is left unchanged.
    pub fn load_dump<R, F>(&mut self, dump: &Dump<R>, coerce: F) -> Result<()>
    where
        F: Fn(&R) -> Result<Value>,
    {
        let mut staged = Store::new(self.case_sensitive);
        for (raw_key, raw_value) in &dump.entries {
            let key = coerce(raw_key)?;
            let value = coerce(raw_value)?;
            if staged.position(&key).is_some() {
                return Err(self.duplicate(&key));
            }
            staged.push(key, value);
        }
        debug!(
            loaded = staged.len(),
            dropped = self.store.len(),
            "loaded lexicon dump"
        );
        self.store = staged;
        Ok(())
    }

    /// Renders through the formatter held by `ctx`.
    pub fn render(&self, ctx: &Context) -> Result<String> {
        ctx.render(&self.dump())
    }
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render(&Context::default()).map_err(|e| {
            warn!(error = %e, "cannot render lexicon");
            fmt::Error
        })?;
        f.write_str(&text)
    }
}

impl fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexicon")
            .field("case_sensitive", &self.case_sensitive)
            .field("entries", &self.store.entries())
            .finish()
    }
}

/// Iterator returned by [`Lexicon::iter`].
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (Value, Value)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Value, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = (&'a Value, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Lexicon {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.into_entries().into_iter()
    }
}
