use super::*;
use pretty_assertions::assert_eq;

#[test]
fn any_overlaps_everything() {
    for ty in [
        Ty::Int,
        Ty::Str,
        Ty::list(Ty::Bool),
        Ty::tuple([Ty::Int, Ty::Char]),
        Ty::variant("Shape"),
    ] {
        assert!(Ty::Any.overlaps(&ty), "{ty}");
        assert!(ty.overlaps(&Ty::Any), "{ty}");
    }
}

#[test]
fn scalars_overlap_only_themselves() {
    assert!(Ty::Int.overlaps(&Ty::Int));
    assert!(!Ty::Int.overlaps(&Ty::Float));
    assert!(!Ty::Char.overlaps(&Ty::Str));
}

#[test]
fn lists_always_overlap() {
    // The empty list inhabits both.
    assert!(Ty::list(Ty::Int).overlaps(&Ty::list(Ty::Str)));
}

#[test]
fn tuples_overlap_pairwise() {
    let a = Ty::tuple([Ty::Int, Ty::Any]);
    let b = Ty::tuple([Ty::Int, Ty::Str]);
    let c = Ty::tuple([Ty::Str, Ty::Str]);
    assert!(a.overlaps(&b));
    assert!(!b.overlaps(&c));
    assert!(!a.overlaps(&Ty::tuple([Ty::Int])));
}

#[test]
fn join_widens_disagreements_to_any() {
    assert_eq!(Ty::Int.join(&Ty::Int), Ty::Int);
    assert_eq!(Ty::Int.join(&Ty::Str), Ty::Any);
    assert_eq!(
        Ty::list(Ty::Int).join(&Ty::list(Ty::Str)),
        Ty::list(Ty::Any)
    );
    assert_eq!(
        Ty::tuple([Ty::Int, Ty::Str]).join(&Ty::tuple([Ty::Int, Ty::Bool])),
        Ty::tuple([Ty::Int, Ty::Any])
    );
}

#[test]
fn display() {
    assert_eq!(
        Ty::tuple([Ty::Int, Ty::list(Ty::Str), Ty::option(Ty::Any)]).to_string(),
        "(int, [str], Option<_>)"
    );
}
