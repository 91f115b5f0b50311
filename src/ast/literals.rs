use crate::ast::Node;
use crate::utils::errors::StatpyResult;
use crate::visitor::AstVisitor;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integer {
    pub value: i64,
}

impl Integer {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

impl Node for Integer {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_integer(self, scope)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer: {}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Double {
    pub value: f64,
}

impl Double {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Node for Double {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_double(self, scope)
    }
}

impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Double: {}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

impl Node for StringLiteral {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_string(self, scope)
    }
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "String: {}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boolean {
    pub value: bool,
}

impl Boolean {
    pub fn new(value: bool) -> Self {
        Self { value }
    }
}

impl Node for Boolean {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_boolean(self, scope)
    }
}

impl fmt::Display for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Boolean: {}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Node for Identifier {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_identifier(self, scope)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier: {}", self.name)
    }
}
