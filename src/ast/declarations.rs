use crate::ast::{Assignment, Block, Node};
use crate::utils::errors::StatpyResult;
use crate::visitor::AstVisitor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `int x` or `int x = 1`; also used for function parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub type_name: String,
    pub name: String,
    pub assignment: Option<Box<Assignment>>,
}

impl VariableDeclaration {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>, assignment: Option<Box<Assignment>>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            assignment,
        }
    }
}

impl Node for VariableDeclaration {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_variable_declaration(self, scope)
    }
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VariableDeclaration: {} {}", self.type_name, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub return_type: String,
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<VariableDeclaration>,
    pub body: Option<Box<Block>>,
}

impl FunctionDeclaration {
    pub fn new(
        return_type: impl Into<String>,
        name: impl Into<String>,
        parameters: Vec<VariableDeclaration>,
        body: Option<Box<Block>>,
    ) -> Self {
        Self {
            return_type: return_type.into(),
            name: name.into(),
            parameters,
            body,
        }
    }
}

impl Node for FunctionDeclaration {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_function_declaration(self, scope)
    }
}

impl fmt::Display for FunctionDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionDeclaration: {} {}", self.return_type, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub name: String,
    pub body: Option<Box<Block>>,
}

impl ClassDeclaration {
    pub fn new(name: impl Into<String>, body: Option<Box<Block>>) -> Self {
        Self { name: name.into(), body }
    }
}

impl Node for ClassDeclaration {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_class_declaration(self, scope)
    }
}

impl fmt::Display for ClassDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassDeclaration: {}", self.name)
    }
}
