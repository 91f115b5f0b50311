use crate::ast::{Block, ClassDeclaration, CompOperator, Expression, FunctionDeclaration, Node, VariableDeclaration};
use crate::utils::errors::StatpyResult;
use crate::visitor::AstVisitor;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Option<Box<Expression>>,
}

impl ExpressionStatement {
    pub fn new(expression: Option<Box<Expression>>) -> Self {
        Self { expression }
    }
}

impl Node for ExpressionStatement {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_expression_statement(self, scope)
    }
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExpressionStatement")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub target: String,
    pub expression: Option<Box<Expression>>,
}

impl Assignment {
    pub fn new(target: impl Into<String>, expression: Option<Box<Expression>>) -> Self {
        Self {
            target: target.into(),
            expression,
        }
    }
}

impl Node for Assignment {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_assignment(self, scope)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Assignment: {}", self.target)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Return {
    // None for a value-less return
    pub expression: Option<Box<Expression>>,
}

impl Return {
    pub fn new(expression: Option<Box<Expression>>) -> Self {
        Self { expression }
    }
}

impl Node for Return {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_return(self, scope)
    }
}

impl fmt::Display for Return {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Return")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditional {
    pub condition: Option<Box<CompOperator>>,
    pub then_block: Option<Box<Block>>,
    pub else_block: Option<Box<Block>>,
}

impl Conditional {
    pub fn new(
        condition: Option<Box<CompOperator>>,
        then_block: Option<Box<Block>>,
        else_block: Option<Box<Block>>,
    ) -> Self {
        Self {
            condition,
            then_block,
            else_block,
        }
    }
}

impl Node for Conditional {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_conditional(self, scope)
    }
}

impl fmt::Display for Conditional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Conditional")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileLoop {
    pub condition: Option<Box<Expression>>,
    pub body: Option<Box<Block>>,
    // Runs when the loop finishes without an early exit
    pub else_block: Option<Box<Block>>,
}

impl WhileLoop {
    pub fn new(condition: Option<Box<Expression>>, body: Option<Box<Block>>, else_block: Option<Box<Block>>) -> Self {
        Self {
            condition,
            body,
            else_block,
        }
    }
}

impl Node for WhileLoop {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_while_loop(self, scope)
    }
}

impl fmt::Display for WhileLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WhileLoop")
    }
}

/// `for (init; condition; update) body`. All four slots are mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForLoop {
    pub init: Option<Box<Assignment>>,
    pub condition: Option<Box<Expression>>,
    pub body: Option<Box<Block>>,
    pub update: Option<Box<Assignment>>,
}

impl ForLoop {
    pub fn new(
        init: Option<Box<Assignment>>,
        condition: Option<Box<Expression>>,
        body: Option<Box<Block>>,
        update: Option<Box<Assignment>>,
    ) -> Self {
        Self {
            init,
            condition,
            body,
            update,
        }
    }
}

impl Node for ForLoop {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_for_loop(self, scope)
    }
}

impl fmt::Display for ForLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ForLoop")
    }
}

/// Closed set of statement variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Statement {
    Expression(ExpressionStatement),
    Assignment(Assignment),
    VariableDeclaration(VariableDeclaration),
    Return(Return),
    Block(Block),
    Conditional(Conditional),
    WhileLoop(WhileLoop),
    ForLoop(ForLoop),
    FunctionDeclaration(FunctionDeclaration),
    ClassDeclaration(ClassDeclaration),
}

impl Node for Statement {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        match self {
            Statement::Expression(node) => node.accept(visitor, scope),
            Statement::Assignment(node) => node.accept(visitor, scope),
            Statement::VariableDeclaration(node) => node.accept(visitor, scope),
            Statement::Return(node) => node.accept(visitor, scope),
            Statement::Block(node) => node.accept(visitor, scope),
            Statement::Conditional(node) => node.accept(visitor, scope),
            Statement::WhileLoop(node) => node.accept(visitor, scope),
            Statement::ForLoop(node) => node.accept(visitor, scope),
            Statement::FunctionDeclaration(node) => node.accept(visitor, scope),
            Statement::ClassDeclaration(node) => node.accept(visitor, scope),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Expression(node) => fmt::Display::fmt(node, f),
            Statement::Assignment(node) => fmt::Display::fmt(node, f),
            Statement::VariableDeclaration(node) => fmt::Display::fmt(node, f),
            Statement::Return(node) => fmt::Display::fmt(node, f),
            Statement::Block(node) => fmt::Display::fmt(node, f),
            Statement::Conditional(node) => fmt::Display::fmt(node, f),
            Statement::WhileLoop(node) => fmt::Display::fmt(node, f),
            Statement::ForLoop(node) => fmt::Display::fmt(node, f),
            Statement::FunctionDeclaration(node) => fmt::Display::fmt(node, f),
            Statement::ClassDeclaration(node) => fmt::Display::fmt(node, f),
        }
    }
}

impl From<Block> for Statement {
    fn from(block: Block) -> Self {
        Statement::Block(block)
    }
}

impl From<Expression> for Statement {
    fn from(expression: Expression) -> Self {
        Statement::Expression(ExpressionStatement::new(Some(Box::new(expression))))
    }
}

impl From<Assignment> for Statement {
    fn from(assignment: Assignment) -> Self {
        Statement::Assignment(assignment)
    }
}
