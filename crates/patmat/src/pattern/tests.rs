use super::*;
use pretty_assertions::assert_eq;

fn even() -> Pattern {
    Pattern::meet(|v| v.as_int().is_some_and(|n| n % 2 == 0))
}

#[test]
fn ds_splits_around_the_rest_element() {
    let Pattern::Sequence(seq) = Pattern::ds([
        Pattern::lit(1).into(),
        Pattern::wildcard().into(),
        rest(even()),
        Pattern::lit(9).into(),
    ])
    .unwrap() else {
        panic!("expected a sequence pattern");
    };
    assert_eq!(seq.head().len(), 2);
    assert!(seq.has_rest());
    assert_eq!(seq.tail().len(), 1);
    assert_eq!(seq.min_len(), 3);
    assert_eq!(seq.patterns().count(), 4);
}

#[test]
fn ds_without_rest_is_fixed() {
    let Pattern::Sequence(seq) = Pattern::ds([Pattern::lit(1).into(), Pattern::lit(2).into()]).unwrap() else {
        panic!("expected a sequence pattern");
    };
    assert!(!seq.has_rest());
    assert!(seq.rest().is_none());
    assert!(seq.tail().is_empty());
    assert_eq!(seq.min_len(), 2);
}

#[test]
fn second_rest_element_is_rejected() {
    let err = Pattern::ds([
        rest(Pattern::wildcard()),
        Pattern::lit(0).into(),
        rest(Pattern::wildcard()),
    ])
    .unwrap_err();
    assert_eq!(err, PatternError::MultipleRest { first: 0, second: 2 });

    let err = Pattern::variant("Pair", [rest(Pattern::wildcard()), rest(Pattern::wildcard())])
        .unwrap_err();
    assert_eq!(err, PatternError::MultipleRest { first: 0, second: 1 });
}

#[test]
fn referencing_capture_under_transform_is_rejected() {
    let xs = RefId::new("xs");
    let err = Pattern::app(
        |v| Value::int(v.as_int().unwrap_or(0) + 1),
        Pattern::or([Pattern::lit(0), Pattern::from(&xs)]),
    )
    .unwrap_err();
    assert_eq!(
        err,
        PatternError::ReferenceUnderTransform {
            name: Name::new("xs")
        }
    );
}

#[test]
fn owning_capture_under_transform_is_accepted() {
    let x = Id::new("x");
    assert!(Pattern::app(|v| v.clone(), &x).is_ok());
}

#[test]
fn referencing_capture_under_projection_is_accepted() {
    let xs = RefId::new("xs");
    let Pattern::Project(project) = Pattern::some(&xs) else {
        panic!("expected a projection");
    };
    assert!(matches!(project.inner(), Pattern::Capture(Capture::Referencing(_))));
}

#[test]
fn captures_reach_every_nested_position() {
    let pattern = Pattern::ds([
        Pattern::not(&Id::new("a")).into(),
        rest(Pattern::some(&RefId::new("b"))),
        Pattern::and([Pattern::wildcard(), Pattern::from(&Id::new("c"))])
            .when(|_| true)
            .into(),
        Pattern::variant("V", [(&Id::new("d")).into()]).unwrap().into(),
    ])
    .unwrap();

    let mut names: Vec<_> = pattern
        .capture_names()
        .into_iter()
        .map(|n| n.to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["a", "b", "c", "d"]);
}

#[test]
fn walk_visits_parents_first() {
    let pattern = Pattern::not(Pattern::or([Pattern::wildcard(), Pattern::lit(1)]));
    let mut kinds = Vec::new();
    pattern.walk(&mut |p| {
        kinds.push(match p {
            Pattern::Not(_) => "not",
            Pattern::Or(_) => "or",
            Pattern::Wildcard => "wildcard",
            Pattern::Literal(_) => "literal",
            _ => "other",
        });
    });
    assert_eq!(kinds, vec!["not", "or", "wildcard", "literal"]);
}

#[test]
fn not_operator_and_constructor_agree() {
    assert!(matches!(!Pattern::wildcard(), Pattern::Not(_)));
    assert!(matches!(Pattern::not(Pattern::wildcard()), Pattern::Not(_)));
}

#[test]
fn conversions_into_patterns() {
    assert!(matches!(Pattern::from(Value::int(3)), Pattern::Literal(Value::Int(3))));
    assert!(matches!(
        Pattern::from(&Id::new("x")),
        Pattern::Capture(Capture::Owning(_))
    ));
    assert!(matches!(
        Pattern::from(RefId::new("x")),
        Pattern::Capture(Capture::Referencing(_))
    ));
    assert!(matches!(Pattern::none(), Pattern::Literal(Value::None)));
}

#[test]
fn debug_output() {
    assert_eq!(format!("{:?}", Pattern::some(Pattern::wildcard())), "Project(Some(Wildcard))");
    assert_eq!(
        format!("{:?}", Pattern::meet_on(Ty::Int, |_| true)),
        "Predicate(Predicate { domain: Int, .. })"
    );
}
