use super::{Depth, PrettyPrinter};
use crate::ast::{BinaryOperator, CompOperator, MethodCall, Node, UnaryOperator};
use crate::utils::config::render::ARGUMENTS_HEADER;
use crate::utils::config::slots::{LEFT, OPERAND, RIGHT};
use crate::utils::errors::{required, StatpyResult};
use std::fmt::Display;
use std::io::Write;

/// Literals and identifiers have no children.
pub fn handle_leaf<W: Write>(printer: &mut PrettyPrinter<W>, node: &dyn Display, depth: Depth) -> StatpyResult<()> {
    printer.create(depth, node)
}

pub fn handle_unary_operator<W: Write>(
    printer: &mut PrettyPrinter<W>,
    node: &UnaryOperator,
    depth: Depth,
) -> StatpyResult<()> {
    printer.create(depth, node)?;
    required(&node.operand, node, OPERAND)?.accept(printer, depth.deeper())
}

pub fn handle_binary_operator<W: Write>(
    printer: &mut PrettyPrinter<W>,
    node: &BinaryOperator,
    depth: Depth,
) -> StatpyResult<()> {
    printer.create(depth, node)?;
    required(&node.left, node, LEFT)?.accept(printer, depth.deeper())?;
    required(&node.right, node, RIGHT)?.accept(printer, depth.deeper())
}

/// Operands render at the comparison's own depth, not nested beneath it.
pub fn handle_comp_operator<W: Write>(
    printer: &mut PrettyPrinter<W>,
    node: &CompOperator,
    depth: Depth,
) -> StatpyResult<()> {
    printer.create(depth, node)?;
    required(&node.left, node, LEFT)?.accept(printer, depth)?;
    required(&node.right, node, RIGHT)?.accept(printer, depth)
}

/// Arguments share the depth of the `Arguments are:` header.
pub fn handle_method_call<W: Write>(printer: &mut PrettyPrinter<W>, node: &MethodCall, depth: Depth) -> StatpyResult<()> {
    printer.create(depth, node)?;
    if node.arguments.is_empty() {
        return Ok(());
    }
    let inner = depth.deeper();
    printer.marker(inner, ARGUMENTS_HEADER)?;
    for argument in &node.arguments {
        argument.accept(printer, inner)?;
    }
    Ok(())
}
