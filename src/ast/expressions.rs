use crate::ast::{Boolean, Double, Identifier, Integer, Node, StringLiteral};
use crate::utils::errors::StatpyResult;
use crate::visitor::AstVisitor;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    #[serde(rename = "-")]
    Negate,
    #[serde(rename = "!")]
    Not,
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Negate => "-",
            UnaryOp::Not => "!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "%")]
    Modulo,
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompOp {
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessThanEqual,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = ">=")]
    GreaterThanEqual,
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
}

impl CompOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            CompOp::LessThan => "<",
            CompOp::LessThanEqual => "<=",
            CompOp::GreaterThan => ">",
            CompOp::GreaterThanEqual => ">=",
            CompOp::Equal => "==",
            CompOp::NotEqual => "!=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryOperator {
    pub operator: UnaryOp,
    pub operand: Option<Box<Expression>>,
}

impl UnaryOperator {
    pub fn new(operator: UnaryOp, operand: Option<Box<Expression>>) -> Self {
        Self { operator, operand }
    }
}

impl Node for UnaryOperator {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_unary_operator(self, scope)
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnaryOperator: {}", self.operator.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOperator {
    pub operator: BinaryOp,
    pub left: Option<Box<Expression>>,
    pub right: Option<Box<Expression>>,
}

impl BinaryOperator {
    pub fn new(left: Option<Box<Expression>>, right: Option<Box<Expression>>, operator: BinaryOp) -> Self {
        Self {
            operator,
            left,
            right,
        }
    }
}

impl Node for BinaryOperator {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_binary_operator(self, scope)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryOperator: {}", self.operator.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompOperator {
    pub operator: CompOp,
    pub left: Option<Box<Expression>>,
    pub right: Option<Box<Expression>>,
}

impl CompOperator {
    pub fn new(left: Option<Box<Expression>>, right: Option<Box<Expression>>, operator: CompOp) -> Self {
        Self {
            operator,
            left,
            right,
        }
    }
}

impl Node for CompOperator {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_comp_operator(self, scope)
    }
}

impl fmt::Display for CompOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompOperator: {}", self.operator.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub callee: String,
    #[serde(default)]
    pub arguments: Vec<Expression>,
}

impl MethodCall {
    pub fn new(callee: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Self {
            callee: callee.into(),
            arguments,
        }
    }
}

impl Node for MethodCall {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        visitor.visit_method_call(self, scope)
    }
}

impl fmt::Display for MethodCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MethodCall: {}", self.callee)
    }
}

/// Closed set of expression variants.
///
/// Dispatch is an exhaustive match, so a new variant fails to build until
/// every pass has an operation for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Expression {
    Integer(Integer),
    Double(Double),
    String(StringLiteral),
    Boolean(Boolean),
    Identifier(Identifier),
    Unary(UnaryOperator),
    Binary(BinaryOperator),
    Comparison(CompOperator),
    MethodCall(MethodCall),
}

impl Node for Expression {
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output> {
        match self {
            Expression::Integer(node) => node.accept(visitor, scope),
            Expression::Double(node) => node.accept(visitor, scope),
            Expression::String(node) => node.accept(visitor, scope),
            Expression::Boolean(node) => node.accept(visitor, scope),
            Expression::Identifier(node) => node.accept(visitor, scope),
            Expression::Unary(node) => node.accept(visitor, scope),
            Expression::Binary(node) => node.accept(visitor, scope),
            Expression::Comparison(node) => node.accept(visitor, scope),
            Expression::MethodCall(node) => node.accept(visitor, scope),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Integer(node) => fmt::Display::fmt(node, f),
            Expression::Double(node) => fmt::Display::fmt(node, f),
            Expression::String(node) => fmt::Display::fmt(node, f),
            Expression::Boolean(node) => fmt::Display::fmt(node, f),
            Expression::Identifier(node) => fmt::Display::fmt(node, f),
            Expression::Unary(node) => fmt::Display::fmt(node, f),
            Expression::Binary(node) => fmt::Display::fmt(node, f),
            Expression::Comparison(node) => fmt::Display::fmt(node, f),
            Expression::MethodCall(node) => fmt::Display::fmt(node, f),
        }
    }
}

// Shorthands for building trees by hand
impl Expression {
    pub fn int(value: i64) -> Self {
        Expression::Integer(Integer::new(value))
    }

    pub fn double(value: f64) -> Self {
        Expression::Double(Double::new(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::String(StringLiteral::new(value))
    }

    pub fn boolean(value: bool) -> Self {
        Expression::Boolean(Boolean::new(value))
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    pub fn unary(operator: UnaryOp, operand: Expression) -> Self {
        Expression::Unary(UnaryOperator::new(operator, Some(Box::new(operand))))
    }

    pub fn binary(left: Expression, operator: BinaryOp, right: Expression) -> Self {
        Expression::Binary(BinaryOperator::new(Some(Box::new(left)), Some(Box::new(right)), operator))
    }

    pub fn compare(left: Expression, operator: CompOp, right: Expression) -> Self {
        Expression::Comparison(CompOperator::new(Some(Box::new(left)), Some(Box::new(right)), operator))
    }

    pub fn call(callee: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Expression::MethodCall(MethodCall::new(callee, arguments))
    }
}
