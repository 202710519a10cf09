use super::*;

#[test]
fn workspace_names() {
    assert_eq!(StarlarkFile::workspace(false, vec![]).name(), "WORKSPACE");
    assert_eq!(StarlarkFile::workspace(true, vec![]).name(), "WORKSPACE.bazel");
}

#[test]
fn build_names() {
    assert_eq!(StarlarkFile::build(false, vec![]).name(), "BUILD");
    assert_eq!(StarlarkFile::build(true, vec![]).name(), "BUILD.bazel");
}

#[test]
fn bzl_suffix_appended_once() {
    assert_eq!(StarlarkFile::bzl("defs", vec![]).name(), "defs.bzl");
    assert_eq!(StarlarkFile::bzl("defs.bzl", vec![]).name(), "defs.bzl");
    assert_eq!(StarlarkFile::bzl("DEFS.BZL", vec![]).name(), "DEFS.BZL");
}

#[test]
fn star_suffix_appended_once() {
    assert_eq!(StarlarkFile::star("config", vec![]).name(), "config.star");
    assert_eq!(StarlarkFile::star("config.Star", vec![]).name(), "config.Star");
    assert_eq!(StarlarkFile::star("config.bzl", vec![]).name(), "config.bzl.star");
}

#[test]
fn short_and_multibyte_names() {
    assert_eq!(StarlarkFile::bzl("", vec![]).name(), ".bzl");
    assert_eq!(StarlarkFile::star("ä", vec![]).name(), "ä.star");
    assert_eq!(StarlarkFile::bzl("régles", vec![]).name(), "régles.bzl");
}

#[test]
fn kind_is_recorded() {
    assert_eq!(StarlarkFile::build(false, vec![]).kind(), FileKind::Build);
    assert_eq!(StarlarkFile::star("x", vec![]).kind(), FileKind::Star);
}

// Serde roundtrip (serde feature)

#[cfg(feature = "serde")]
#[test]
fn file_roundtrips_through_serde() {
    use crate::argument::Argument;
    use crate::expr::{Clause, Comprehension, Expression, FunctionCall, SliceExpression};
    use crate::kind::ValueKind;
    use crate::stmt::{LoadStatement, LoadSymbol, Statement};

    let names = Expression::reference("NAMES", ValueKind::List);
    let file = StarlarkFile::bzl(
        "defs",
        vec![
            Statement::Load(LoadStatement::new(
                ":common.bzl",
                vec![LoadSymbol::aliased("DEPS", "COMMON_DEPS")],
            )),
            Statement::comment("Generated."),
            Statement::EmptyLine,
            Statement::assignment("RATIO", 0.5_f64),
            Statement::assignment(
                "LABELS",
                Comprehension::list(
                    Expression::reference("n", ValueKind::String),
                    vec![Clause::for_in(
                        vec![Expression::reference("n", ValueKind::String)],
                        SliceExpression::new(names, Some(1), None, None).into(),
                    )],
                ),
            ),
            Statement::Expression(
                FunctionCall::new(
                    "kt_library",
                    vec![
                        Argument::named("name", "lib"),
                        Argument::positional(Expression::dictionary(vec![(
                            Expression::from("k"),
                            Expression::Boolean(true),
                        )])),
                    ],
                )
                .into(),
            ),
            Statement::raw("def f():\n    pass"),
        ],
    );

    let bytes = bincode::serialize(&file).unwrap_or_else(|e| panic!("serialize failed: {e}"));
    let back: StarlarkFile =
        bincode::deserialize(&bytes).unwrap_or_else(|e| panic!("deserialize failed: {e}"));

    assert_eq!(back.name(), "defs.bzl");
    assert_eq!(back.kind(), file.kind());
    // Argument equality ignores values, so compare the full structure.
    assert_eq!(format!("{back:?}"), format!("{file:?}"));
}
