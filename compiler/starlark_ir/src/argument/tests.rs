use std::collections::HashSet;

use pretty_assertions::assert_eq;

use super::*;
use crate::expr::BinaryOperation;
use crate::kind::ValueKind;

#[test]
fn arguments_compare_by_name_only() {
    let first = Argument::named("deps", Expression::list([Expression::from("x")]));
    let second = Argument::named("deps", Expression::from("unrelated"));
    let other = Argument::named("srcs", Expression::list([Expression::from("x")]));

    assert_eq!(first, second);
    assert_ne!(first, other);

    let set: HashSet<Argument> = [first, second, other].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn positional_id_is_empty() {
    let arg = Argument::positional(Expression::from(1_i64));
    assert_eq!(arg.id(), "");
    assert_eq!(Argument::named("name", "app").id(), "name");
}

#[test]
fn append_new_names_in_order() {
    let mut args = ArgumentSet::new();
    args.append("name", "app");
    args.append("srcs", Expression::list([]));
    args.append("visibility", Expression::list([]));

    let names: Vec<&str> = args.iter().map(Argument::id).collect();
    assert_eq!(names, vec!["name", "srcs", "visibility"]);
}

#[test]
fn append_existing_name_concatenates() {
    let mut args = ArgumentSet::new();
    args.append("deps", Expression::list([Expression::from("x")]));
    args.append("deps", Expression::list([Expression::from("y")]));

    assert_eq!(args.len(), 1);
    let deps = args.get("deps").map(|arg| arg.value.clone());
    assert_eq!(
        deps,
        Some(Expression::BinaryOperation(BinaryOperation::new(
            ValueKind::List,
            Expression::list([Expression::from("x")]),
            BinaryOperator::Plus,
            Expression::list([Expression::from("y")]),
        )))
    );
}

#[test]
fn repeated_append_nests_on_the_left() {
    let mut args = ArgumentSet::new();
    args.append("srcs", "a.kt");
    args.append("srcs", "b.kt");
    args.append("srcs", "c.kt");

    let expected = Expression::binary(
        Expression::binary(
            Expression::from("a.kt"),
            BinaryOperator::Plus,
            Expression::from("b.kt"),
        ),
        BinaryOperator::Plus,
        Expression::from("c.kt"),
    );
    assert_eq!(args.get("srcs").map(|arg| &arg.value), Some(&expected));
}

#[test]
fn accumulation_keeps_original_position() {
    let mut args = ArgumentSet::new();
    args.append("deps", Expression::list([]));
    args.append("name", "lib");
    args.append("deps", Expression::reference("EXTRA", ValueKind::List));

    let names: Vec<&str> = args.iter().map(Argument::id).collect();
    assert_eq!(names, vec!["deps", "name"]);
}

#[test]
fn positional_arguments_never_merge() {
    let mut args = ArgumentSet::new();
    args.push_positional("a");
    args.push_positional("b");
    args.append("name", "c");

    assert_eq!(args.len(), 3);
    assert!(args.contains("name"));
    assert!(!args.contains(""));
}

#[test]
fn blank_name_appends_positionally() {
    let mut args = ArgumentSet::new();
    args.append("", 1_i64);
    args.append(" ", 2_i64);
    args.append("name", "app");

    assert_eq!(args.len(), 3);
    assert!(!args.contains(""));
    let values: Vec<&Expression> = args.iter().map(|arg| &arg.value).collect();
    assert_eq!(
        values,
        vec![
            &Expression::from(1_i64),
            &Expression::from(2_i64),
            &Expression::from("app"),
        ]
    );
    assert!(args.iter().take(2).all(|arg| arg.name.is_none()));
}

#[test]
fn collect_from_pairs() {
    let args: ArgumentSet = [("deps", "x"), ("deps", "y")].into_iter().collect();
    assert_eq!(args.into_args().len(), 1);
}
