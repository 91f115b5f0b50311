use crate::ast::{Node, Statement};
use crate::utils::errors::StatpyResult;
use crate::visitor::AstVisitor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered statement list; program order is preserved by every pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

impl Node for Block {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_block(self, scope)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block")
    }
}
