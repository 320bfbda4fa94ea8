use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::value::Value;

/// Key equality and hashing policy used by the backing store.
///
/// Implementations must keep `hash_key` consistent with `keys_equal`: equal
/// keys hash alike. Keys of different kinds are never equal.
pub trait KeyComparer {
    fn case_sensitive(&self) -> bool;
    fn keys_equal(&self, a: &Value, b: &Value) -> bool;
    fn hash_key(&self, key: &Value) -> u64;
}

/// Text keys compare ordinally, ignoring case.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitive;

/// Text keys compare ordinally, exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseSensitive;

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

impl KeyComparer for CaseInsensitive {
    fn case_sensitive(&self) -> bool {
        false
    }

    fn keys_equal(&self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Text(sa), Value::Text(sb)) => folded(sa).eq(folded(sb)),
            _ => a == b,
        }
    }

    fn hash_key(&self, key: &Value) -> u64 {
        let mut h = DefaultHasher::new();
        match key {
            Value::Text(s) => {
                key.kind().hash(&mut h);
                for c in folded(s) {
                    c.hash(&mut h);
                }
            }
            other => other.hash(&mut h),
        }
        h.finish()
    }
}

impl KeyComparer for CaseSensitive {
    fn case_sensitive(&self) -> bool {
        true
    }

    fn keys_equal(&self, a: &Value, b: &Value) -> bool {
        a == b
    }

    fn hash_key(&self, key: &Value) -> u64 {
        let mut h = DefaultHasher::new();
        key.hash(&mut h);
        h.finish()
    }
}

/// Fresh policy matching a case-sensitivity flag.
pub fn comparer_for(case_sensitive: bool) -> Box<dyn KeyComparer> {
    if case_sensitive {
        Box::new(CaseSensitive)
    } else {
        Box::new(CaseInsensitive)
    }
}
