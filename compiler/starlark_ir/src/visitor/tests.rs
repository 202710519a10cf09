use std::convert::Infallible;

use pretty_assertions::assert_eq;

use super::*;
use crate::kind::{NodeKind, ValueKind};

type Trace = Vec<(NodeKind, usize, PositionMode)>;

/// Records every node it is handed.
struct Recorder;

impl Recorder {
    fn record(
        kind: NodeKind,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        acc.push((kind, position, mode));
        Ok(())
    }
}

impl Visitor<Trace> for Recorder {
    type Error = Infallible;

    fn visit_file(
        &mut self,
        file: &StarlarkFile,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::File, position, mode, acc)?;
        for statement in &file.statements {
            statement.accept(self, position, mode, acc)?;
        }
        Ok(())
    }

    fn visit_expression_statement(
        &mut self,
        expression: &Expression,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::ExpressionStatement, position, mode, acc)?;
        expression.accept(self, position, mode, acc)
    }

    fn visit_assignment(
        &mut self,
        assignment: &Assignment,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::Assignment, position, mode, acc)?;
        assignment
            .value
            .accept(self, position, PositionMode::ContinueLine, acc)
    }

    fn visit_load(
        &mut self,
        load: &LoadStatement,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::Load, position, mode, acc)?;
        for symbol in &load.symbols {
            symbol.accept(self, position + 1, PositionMode::NewLine, acc)?;
        }
        Ok(())
    }

    fn visit_load_symbol(
        &mut self,
        _symbol: &LoadSymbol,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::LoadSymbol, position, mode, acc)
    }

    fn visit_raw_statement(
        &mut self,
        _text: &str,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::RawStatement, position, mode, acc)
    }

    fn visit_empty_line(
        &mut self,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::EmptyLine, position, mode, acc)
    }

    fn visit_comment(
        &mut self,
        _text: &str,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::Comment, position, mode, acc)
    }

    fn visit_string(
        &mut self,
        _value: &str,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::StringLiteral, position, mode, acc)
    }

    fn visit_integer(
        &mut self,
        _value: i64,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::IntegerLiteral, position, mode, acc)
    }

    fn visit_float(
        &mut self,
        _value: f64,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::FloatLiteral, position, mode, acc)
    }

    fn visit_boolean(
        &mut self,
        _value: bool,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::BooleanLiteral, position, mode, acc)
    }

    fn visit_none(
        &mut self,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::NoneLiteral, position, mode, acc)
    }

    fn visit_reference(
        &mut self,
        _reference: &Reference,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::Reference, position, mode, acc)
    }

    fn visit_function_call(
        &mut self,
        call: &FunctionCall,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::FunctionCall, position, mode, acc)?;
        for arg in &call.args {
            arg.accept(self, position + 1, PositionMode::NewLine, acc)?;
        }
        Ok(())
    }

    fn visit_argument(
        &mut self,
        argument: &Argument,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::Argument, position, mode, acc)?;
        argument
            .value
            .accept(self, position, PositionMode::ContinueLine, acc)
    }

    fn visit_binary_operation(
        &mut self,
        operation: &BinaryOperation,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::BinaryOperation, position, mode, acc)?;
        operation.left.accept(self, position, mode, acc)?;
        operation
            .right
            .accept(self, position, PositionMode::ContinueLine, acc)
    }

    fn visit_comprehension(
        &mut self,
        comprehension: &Comprehension,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::ListComprehension, position, mode, acc)?;
        for clause in &comprehension.clauses {
            clause.accept(self, position, mode, acc)?;
        }
        Ok(())
    }

    fn visit_for_clause(
        &mut self,
        _variables: &[Expression],
        _iterable: &Expression,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::ComprehensionFor, position, mode, acc)
    }

    fn visit_if_clause(
        &mut self,
        _condition: &Expression,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::ComprehensionIf, position, mode, acc)
    }

    fn visit_slice(
        &mut self,
        _slice: &SliceExpression,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::Slice, position, mode, acc)
    }

    fn visit_list(
        &mut self,
        items: &[Expression],
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::List, position, mode, acc)?;
        for item in items {
            item.accept(self, position + 1, PositionMode::NewLine, acc)?;
        }
        Ok(())
    }

    fn visit_tuple(
        &mut self,
        _items: &[Expression],
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::Tuple, position, mode, acc)
    }

    fn visit_dictionary(
        &mut self,
        _entries: &[(Expression, Expression)],
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::Dictionary, position, mode, acc)
    }

    fn visit_raw_text(
        &mut self,
        _text: &str,
        position: usize,
        mode: PositionMode,
        acc: &mut Trace,
    ) -> Result<(), Infallible> {
        Self::record(NodeKind::RawText, position, mode, acc)
    }
}

fn trace(element: &impl Element) -> Trace {
    let mut acc = Trace::new();
    match element.accept(&mut Recorder, 0, PositionMode::NewLine, &mut acc) {
        Ok(()) => acc,
        Err(never) => match never {},
    }
}

#[test]
fn expressions_dispatch_to_their_own_method() {
    let cases = [
        (Expression::string("a"), NodeKind::StringLiteral),
        (Expression::Integer(1), NodeKind::IntegerLiteral),
        (Expression::Float(1.5), NodeKind::FloatLiteral),
        (Expression::Boolean(true), NodeKind::BooleanLiteral),
        (Expression::None, NodeKind::NoneLiteral),
        (Expression::reference("x", ValueKind::Any), NodeKind::Reference),
        (Expression::tuple(vec![]), NodeKind::Tuple),
        (Expression::dictionary(vec![]), NodeKind::Dictionary),
        (Expression::raw("x"), NodeKind::RawText),
    ];
    for (expr, kind) in cases {
        assert_eq!(trace(&expr), vec![(kind, 0, PositionMode::NewLine)]);
        assert_eq!(expr.node_kind(), kind);
    }
}

#[test]
fn statements_dispatch_to_their_own_method() {
    let cases = [
        (Statement::comment("c"), NodeKind::Comment),
        (Statement::raw("r"), NodeKind::RawStatement),
        (Statement::EmptyLine, NodeKind::EmptyLine),
    ];
    for (statement, kind) in cases {
        assert_eq!(trace(&statement), vec![(kind, 0, PositionMode::NewLine)]);
        assert_eq!(statement.node_kind(), kind);
    }
}

#[test]
fn position_and_mode_flow_to_children() {
    let call = FunctionCall::new(
        "f",
        vec![Argument::named("deps", Expression::list(vec![Expression::Integer(1)]))],
    );
    assert_eq!(
        trace(&call),
        vec![
            (NodeKind::FunctionCall, 0, PositionMode::NewLine),
            (NodeKind::Argument, 1, PositionMode::NewLine),
            (NodeKind::List, 1, PositionMode::ContinueLine),
            (NodeKind::IntegerLiteral, 2, PositionMode::NewLine),
        ]
    );
}

#[test]
fn file_visits_statements_in_order() {
    let file = StarlarkFile::build(
        false,
        vec![
            Statement::Load(LoadStatement::new("//:a.bzl", vec![LoadSymbol::new("a")])),
            Statement::assignment("x", 1_i64),
        ],
    );
    let kinds: Vec<NodeKind> = trace(&file).into_iter().map(|(kind, _, _)| kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::File,
            NodeKind::Load,
            NodeKind::LoadSymbol,
            NodeKind::Assignment,
            NodeKind::IntegerLiteral,
        ]
    );
}

#[test]
fn clauses_dispatch_by_variant() {
    let comprehension = Comprehension::list(
        Expression::reference("x", ValueKind::Any),
        vec![
            Clause::for_in(
                vec![Expression::reference("x", ValueKind::Any)],
                Expression::reference("xs", ValueKind::List),
            ),
            Clause::if_(Expression::reference("x", ValueKind::Any)),
        ],
    );
    let kinds: Vec<NodeKind> = trace(&comprehension)
        .into_iter()
        .map(|(kind, _, _)| kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::ListComprehension,
            NodeKind::ComprehensionFor,
            NodeKind::ComprehensionIf,
        ]
    );
}
