use super::{Depth, PrettyPrinter};
use crate::ast::{ClassDeclaration, FunctionDeclaration, Node, VariableDeclaration};
use crate::utils::config::render::PARAMETERS_HEADER;
use crate::utils::config::slots::BODY;
use crate::utils::errors::{required, StatpyResult};
use std::io::Write;

pub fn handle_variable_declaration<W: Write>(
    printer: &mut PrettyPrinter<W>,
    node: &VariableDeclaration,
    depth: Depth,
) -> StatpyResult<()> {
    printer.create(depth, node)?;
    if let Some(assignment) = &node.assignment {
        assignment.accept(printer, depth.deeper())?;
    }
    Ok(())
}

/// Parameters are listed as plain `type name` lines under a header; body
/// statements are rendered directly, without the block's Create/End pair.
pub fn handle_function_declaration<W: Write>(
    printer: &mut PrettyPrinter<W>,
    node: &FunctionDeclaration,
    depth: Depth,
) -> StatpyResult<()> {
    printer.create(depth, node)?;
    let inner = depth.deeper();
    if !node.parameters.is_empty() {
        printer.marker(inner, PARAMETERS_HEADER)?;
        for parameter in &node.parameters {
            printer.line(
                inner.deeper(),
                format_args!("{} {}", parameter.type_name, parameter.name),
            )?;
        }
    }
    let body = required(&node.body, node, BODY)?;
    for statement in &body.statements {
        statement.accept(printer, inner)?;
    }
    Ok(())
}

pub fn handle_class_declaration<W: Write>(
    printer: &mut PrettyPrinter<W>,
    node: &ClassDeclaration,
    depth: Depth,
) -> StatpyResult<()> {
    printer.create(depth, node)?;
    if let Some(body) = &node.body {
        body.accept(printer, depth.deeper())?;
    }
    Ok(())
}
