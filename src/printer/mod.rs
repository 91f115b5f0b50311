//! Rendering pass: an indented, line-per-node trace of a tree.
//!
//! Every node emits `Create <label>` at its depth and visits its children one
//! level deeper. Exceptions are handled in the per-category handler modules:
//! blocks close with `End <label>`, comparison operands stay at the
//! comparison's own depth, and call arguments share the depth of their
//! `Arguments are:` header.

mod declaration_handlers;
mod expression_handlers;
mod statement_handlers;
mod visitor;

use crate::ast::{Node, Statement};
use crate::utils::config::render::{CREATE_PREFIX, END_PREFIX};
use crate::utils::errors::StatpyResult;
use crate::utils::write_indented;
use std::fmt::{self, Display};
use std::io::Write;

/// Nesting level threaded through the traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Depth(usize);

impl Depth {
    pub const ROOT: Depth = Depth(0);

    pub fn level(self) -> usize {
        self.0
    }

    pub fn deeper(self) -> Self {
        Depth(self.0 + 1)
    }
}

pub struct PrettyPrinter<W: Write> {
    out: W,
}

impl<W: Write> PrettyPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Render `node` and everything beneath it, starting at depth zero.
    ///
    /// On error, whatever was already written stays in the sink.
    pub fn print<N: Node>(&mut self, node: &N) -> StatpyResult<()> {
        node.accept(self, Depth::ROOT)
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, depth: Depth, args: fmt::Arguments) -> StatpyResult<()> {
        write_indented(&mut self.out, depth.level(), args)
    }

    fn create(&mut self, depth: Depth, node: &dyn Display) -> StatpyResult<()> {
        self.line(depth, format_args!("{}{}", CREATE_PREFIX, node))
    }

    fn end(&mut self, depth: Depth, node: &dyn Display) -> StatpyResult<()> {
        self.line(depth, format_args!("{}{}", END_PREFIX, node))
    }

    fn marker(&mut self, depth: Depth, text: &str) -> StatpyResult<()> {
        self.line(depth, format_args!("{}", text))
    }
}

/// Render `root` into `out` and hand the sink back.
pub fn render<W: Write>(root: &Statement, out: W) -> StatpyResult<W> {
    let mut printer = PrettyPrinter::new(out);
    printer.print(root)?;
    Ok(printer.into_inner())
}

pub fn render_to_string(root: &Statement) -> StatpyResult<String> {
    let bytes = render(root, Vec::new())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
