use super::{Depth, PrettyPrinter};
use crate::ast::{Assignment, Block, Conditional, ExpressionStatement, ForLoop, Node, Return, WhileLoop};
use crate::utils::config::render::{ELSE_BODY_MARKER, LOOP_BODY_MARKER};
use crate::utils::config::slots::{BODY, CONDITION, EXPRESSION, INITIALIZER, UPDATE};
use crate::utils::errors::{required, StatpyResult};
use std::io::Write;

pub fn handle_expression_statement<W: Write>(
    printer: &mut PrettyPrinter<W>,
    node: &ExpressionStatement,
    depth: Depth,
) -> StatpyResult<()> {
    printer.create(depth, node)?;
    required(&node.expression, node, EXPRESSION)?.accept(printer, depth.deeper())
}

pub fn handle_assignment<W: Write>(printer: &mut PrettyPrinter<W>, node: &Assignment, depth: Depth) -> StatpyResult<()> {
    printer.create(depth, node)?;
    required(&node.expression, node, EXPRESSION)?.accept(printer, depth.deeper())
}

pub fn handle_return<W: Write>(printer: &mut PrettyPrinter<W>, node: &Return, depth: Depth) -> StatpyResult<()> {
    printer.create(depth, node)?;
    if let Some(expression) = &node.expression {
        expression.accept(printer, depth.deeper())?;
    }
    Ok(())
}

/// Blocks are the only nodes with a closing line.
pub fn handle_block<W: Write>(printer: &mut PrettyPrinter<W>, node: &Block, depth: Depth) -> StatpyResult<()> {
    printer.create(depth, node)?;
    for statement in &node.statements {
        statement.accept(printer, depth.deeper())?;
    }
    printer.end(depth, node)
}

pub fn handle_conditional<W: Write>(printer: &mut PrettyPrinter<W>, node: &Conditional, depth: Depth) -> StatpyResult<()> {
    printer.create(depth, node)?;
    let inner = depth.deeper();
    required(&node.condition, node, CONDITION)?.accept(printer, inner)?;
    if let Some(then_block) = &node.then_block {
        then_block.accept(printer, inner)?;
    }
    if let Some(else_block) = &node.else_block {
        else_block.accept(printer, inner)?;
    }
    Ok(())
}

pub fn handle_while_loop<W: Write>(printer: &mut PrettyPrinter<W>, node: &WhileLoop, depth: Depth) -> StatpyResult<()> {
    printer.create(depth, node)?;
    let inner = depth.deeper();
    required(&node.condition, node, CONDITION)?.accept(printer, inner)?;
    printer.marker(inner, LOOP_BODY_MARKER)?;
    required(&node.body, node, BODY)?.accept(printer, inner)?;
    if let Some(else_block) = &node.else_block {
        printer.marker(inner, ELSE_BODY_MARKER)?;
        else_block.accept(printer, inner)?;
    }
    Ok(())
}

pub fn handle_for_loop<W: Write>(printer: &mut PrettyPrinter<W>, node: &ForLoop, depth: Depth) -> StatpyResult<()> {
    printer.create(depth, node)?;
    let inner = depth.deeper();
    required(&node.init, node, INITIALIZER)?.accept(printer, inner)?;
    required(&node.condition, node, CONDITION)?.accept(printer, inner)?;
    printer.marker(inner, LOOP_BODY_MARKER)?;
    required(&node.body, node, BODY)?.accept(printer, inner)?;
    required(&node.update, node, UPDATE)?.accept(printer, inner)
}
