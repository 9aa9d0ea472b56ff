use super::*;
use pretty_assertions::assert_eq;

fn names(list: &[&str]) -> FxHashSet<Name> {
    list.iter().copied().map(Name::new).collect()
}

#[test]
fn first_commit_wins_and_later_commits_compare() {
    let mut bindings = Bindings::new();
    let x = Name::new("x");
    assert!(bindings.commit_owned(&x, &Value::int(3)));
    assert!(bindings.commit_owned(&x, &Value::int(3)));
    assert!(!bindings.commit_owned(&x, &Value::int(4)));
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings.lookup("x"), Some(&Value::int(3)));
}

#[test]
fn borrowed_and_owned_commitments_share_a_namespace() {
    let source = Value::int(7);
    let mut bindings = Bindings::new();
    let x = Name::new("x");
    assert!(bindings.commit_borrowed(&x, &source));
    assert!(bindings.commit_owned(&x, &Value::int(7)));
    assert!(!bindings.commit_owned(&x, &Value::int(8)));
}

#[test]
fn rollback_undoes_commitments_after_mark() {
    let mut bindings = Bindings::new();
    assert!(bindings.commit_owned(&Name::new("a"), &Value::int(1)));
    let mark = bindings.mark();
    assert!(bindings.commit_owned(&Name::new("b"), &Value::int(2)));
    assert!(bindings.commit_owned(&Name::new("c"), &Value::int(3)));
    bindings.rollback(mark);
    assert!(bindings.is_bound("a"));
    assert!(!bindings.is_bound("b"));
    assert!(!bindings.is_bound("c"));
}

#[test]
fn forget_drops_only_named_cells() {
    let mut bindings = Bindings::new();
    for (name, n) in [("a", 1), ("b", 2), ("c", 3)] {
        assert!(bindings.commit_owned(&Name::new(name), &Value::int(n)));
    }
    bindings.forget(&names(&["a", "c"]));
    let left: Vec<_> = bindings.iter().map(|(n, v)| (n.to_string(), v.clone())).collect();
    assert_eq!(left, vec![("b".to_string(), Value::int(2))]);
}

#[test]
fn owning_accessors() {
    let x = Id::new("x");
    let mut bindings = Bindings::new();
    assert_eq!(
        bindings.value(&x),
        Err(CaptureError::Unbound {
            name: Name::new("x")
        })
    );
    assert!(bindings.commit_owned(x.name(), &Value::string("hi")));
    assert_eq!(bindings.value(&x), Ok(&Value::string("hi")));
    assert_eq!(bindings.take(&x), Some(Value::string("hi")));
    assert!(bindings.is_empty());
    assert_eq!(bindings.take(&x), None);
}

#[test]
fn referencing_accessors() {
    let source = Value::list(vec![Value::int(1), Value::int(2)]);
    let xs = RefId::new("xs");
    let ys = RefId::new("ys");
    let mut bindings = Bindings::new();
    assert!(bindings.commit_borrowed(xs.name(), &source));
    assert!(bindings.commit_owned(ys.name(), &Value::int(0)));

    let borrowed = bindings.get_ref(&xs).unwrap();
    assert!(std::ptr::eq(borrowed, &source));
    assert_eq!(bindings.value_ref(&xs), Ok(&source));

    assert_eq!(bindings.get_ref(&ys), None);
    assert_eq!(
        bindings.value_ref(&ys),
        Err(CaptureError::NotReferenced {
            name: Name::new("ys")
        })
    );
    assert_eq!(
        bindings.value_ref(&RefId::new("zs")),
        Err(CaptureError::Unbound {
            name: Name::new("zs")
        })
    );
}

#[test]
fn take_leaves_borrowed_commitments_alone() {
    let source = Value::int(5);
    let mut bindings = Bindings::new();
    assert!(bindings.commit_borrowed(&Name::new("x"), &source));
    assert_eq!(bindings.take(&Id::new("x")), None);
    assert!(bindings.is_bound("x"));
}

#[test]
fn debug_lists_commitments_in_order() {
    let mut bindings = Bindings::new();
    assert!(bindings.commit_owned(&Name::new("b"), &Value::int(2)));
    assert!(bindings.commit_owned(&Name::new("a"), &Value::int(1)));
    assert_eq!(format!("{bindings:?}"), r#"{"b": Int(2), "a": Int(1)}"#);
}

#[test]
fn capture_modes() {
    let owning = Capture::Owning(Id::new("x"));
    let referencing = Capture::Referencing(RefId::new("y"));
    assert_eq!(owning.name().as_str(), "x");
    assert!(!owning.is_referencing());
    assert!(referencing.is_referencing());
    assert_eq!(format!("{owning:?}"), "Owning(Id(x))");
}
