use lexicon::{Lexicon, LexiconError, Value};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn sample() -> Lexicon {
    let mut lex = Lexicon::new();
    lex.add(Value::from("name"), Value::from("Jebediah")).unwrap();
    lex.add(Value::from(42), Value::Scalar(0.5)).unwrap();
    lex.add(Value::Boolean(true), Value::from("yes")).unwrap();
    lex
}

#[test]
fn test_get_index_missing_vs_get() {
    let lex = sample();
    let err = lex.get_index(&Value::from("missing")).unwrap_err();
    assert!(matches!(err, LexiconError::KeyNotFound { ref key, case_sensitive: false } if key == "missing"));
    assert_eq!(lex.get(&Value::from("missing")), None);
}

#[test]
fn test_remove_counts() {
    let mut lex = sample();
    assert!(!lex.remove(&Value::from("absent")));
    assert_eq!(lex.len(), 3);
    assert!(lex.remove(&Value::from("NAME")));
    assert_eq!(lex.len(), 2);
    assert!(!lex.contains_key(&Value::from("name")));
}

#[test]
fn test_keys_values_pair_up() {
    let lex = sample();
    let keys = lex.keys();
    let values = lex.values();
    assert_eq!(keys.len(), lex.len());
    assert_eq!(values.len(), lex.len());
    for (i, (k, v)) in lex.iter().enumerate() {
        assert_eq!(keys.get(i), Some(k));
        assert_eq!(values.get(i), Some(v));
    }
    assert_eq!(
        keys.into_vec(),
        vec![Value::from("name"), Value::from(42), Value::Boolean(true)]
    );
}

#[test]
fn test_snapshots_are_not_live() {
    let mut lex = sample();
    let keys = lex.keys();
    lex.clear();
    assert_eq!(keys.len(), 3);
    assert!(lex.is_empty());
}

#[test]
fn test_iteration_is_restartable() {
    let lex = sample();
    let first: Vec<_> = lex.iter().collect();
    let second: Vec<_> = (&lex).into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(lex.iter().len(), 3);
}

#[test]
fn test_integer_and_scalar_keys_are_distinct() {
    let mut lex = Lexicon::new();
    lex.add(Value::Integer(1), Value::from("int")).unwrap();
    lex.add(Value::Scalar(1.0), Value::from("scalar")).unwrap();
    lex.add(Value::from("1"), Value::from("text")).unwrap();
    assert_eq!(lex.len(), 3);
    assert_eq!(lex.get_index(&Value::Scalar(1.0)).unwrap(), &Value::from("scalar"));
}

#[test]
fn test_copy_is_independent() {
    let mut src = sample();
    let mut copy = src.copy().unwrap();
    assert_eq!(copy.iter().collect::<Vec<_>>(), src.iter().collect::<Vec<_>>());

    copy.add(Value::from("extra"), Value::from(1)).unwrap();
    src.remove(&Value::from("name"));
    assert_eq!(src.len(), 2);
    assert_eq!(copy.len(), 4);
    assert!(copy.contains_key(&Value::from("name")));
}

#[test]
fn test_list_keys() {
    let mut lex = Lexicon::new();
    let key = Value::List(vec![Value::from(1), Value::from("a")].into_iter().collect());
    lex.add(key.clone(), Value::from("list")).unwrap();
    assert!(lex.contains_key(&key));
    assert!(matches!(lex.add(key, Value::from(0)), Err(LexiconError::DuplicateKey { .. })));
}

proptest! {
    #[test]
    fn prop_add_then_get(k in any::<i64>(), v in "[a-z]{0,8}") {
        let mut lex = Lexicon::new();
        lex.add(Value::Integer(k), Value::from(v.as_str())).unwrap();
        prop_assert_eq!(lex.get_index(&Value::Integer(k)).unwrap(), &Value::from(v.as_str()));
    }

    #[test]
    fn prop_duplicate_add_leaves_state(keys in proptest::collection::vec(0i64..20, 1..30)) {
        let mut lex = Lexicon::new();
        for (i, k) in keys.iter().enumerate() {
            lex.set_index(Value::Integer(*k), Value::from(i as i64));
        }
        let before: Vec<_> = lex.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        let err = lex.add(Value::Integer(keys[0]), Value::from(-1));
        prop_assert!(matches!(err, Err(LexiconError::DuplicateKey { .. })), "expected duplicate");
        let after: Vec<_> = lex.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_remove_adjusts_count(keys in proptest::collection::hash_set(0i64..50, 0..20), probe in 0i64..50) {
        let mut lex = Lexicon::new();
        for k in &keys {
            lex.add(Value::Integer(*k), Value::Boolean(true)).unwrap();
        }
        let before = lex.len();
        let removed = lex.remove(&Value::Integer(probe));
        prop_assert_eq!(removed, keys.contains(&probe));
        prop_assert_eq!(lex.len(), if removed { before - 1 } else { before });
    }
}
