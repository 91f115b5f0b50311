use crate::ast::{
    Assignment, BinaryOperator, Block, Boolean, ClassDeclaration, CompOperator, Conditional, Double,
    ExpressionStatement, ForLoop, FunctionDeclaration, Identifier, Integer, MethodCall, Return, StringLiteral,
    UnaryOperator, VariableDeclaration, WhileLoop,
};
use crate::utils::errors::StatpyResult;

/// A pass over the tree: exactly one operation per node variant.
///
/// There are no default methods. Adding a variant to the taxonomy breaks
/// every pass until it handles the new node.
///
/// `Scope` is whatever per-call context the pass threads down the tree
/// (nesting depth for the printer). It is passed by value, so a pass never
/// has to restore it after visiting children.
pub trait AstVisitor {
    type Output;
    type Scope: Copy;

    // Expressions
    fn visit_integer(&mut self, node: &Integer, scope: Self::Scope) -> StatpyResult<Self::Output>;
    fn visit_double(&mut self, node: &Double, scope: Self::Scope) -> StatpyResult<Self::Output>;
    fn visit_string(&mut self, node: &StringLiteral, scope: Self::Scope) -> StatpyResult<Self::Output>;
    fn visit_boolean(&mut self, node: &Boolean, scope: Self::Scope) -> StatpyResult<Self::Output>;
    fn visit_identifier(&mut self, node: &Identifier, scope: Self::Scope) -> StatpyResult<Self::Output>;
    fn visit_unary_operator(&mut self, node: &UnaryOperator, scope: Self::Scope) -> StatpyResult<Self::Output>;
    fn visit_binary_operator(&mut self, node: &BinaryOperator, scope: Self::Scope) -> StatpyResult<Self::Output>;
    fn visit_comp_operator(&mut self, node: &CompOperator, scope: Self::Scope) -> StatpyResult<Self::Output>;
    fn visit_method_call(&mut self, node: &MethodCall, scope: Self::Scope) -> StatpyResult<Self::Output>;

    // Statements
    fn visit_expression_statement(&mut self, node: &ExpressionStatement, scope: Self::Scope) -> StatpyResult<Self::Output>;
    fn visit_assignment(&mut self, node: &Assignment, scope: Self::Scope) -> StatpyResult<Self::Output>;
    fn visit_variable_declaration(&mut self, node: &VariableDeclaration, scope: Self::Scope) -> StatpyResult<Self::Output>;
    fn visit_return(&mut self, node: &Return, scope: Self::Scope) -> StatpyResult<Self::Output>;
    fn visit_block(&mut self, node: &Block, scope: Self::Scope) -> StatpyResult<Self::Output>;
    fn visit_conditional(&mut self, node: &Conditional, scope: Self::Scope) -> StatpyResult<Self::Output>;
    fn visit_while_loop(&mut self, node: &WhileLoop, scope: Self::Scope) -> StatpyResult<Self::Output>;
    fn visit_for_loop(&mut self, node: &ForLoop, scope: Self::Scope) -> StatpyResult<Self::Output>;

    // Declarations
    fn visit_function_declaration(&mut self, node: &FunctionDeclaration, scope: Self::Scope) -> StatpyResult<Self::Output>;
    fn visit_class_declaration(&mut self, node: &ClassDeclaration, scope: Self::Scope) -> StatpyResult<Self::Output>;
}
