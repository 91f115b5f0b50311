use super::{declaration_handlers, expression_handlers, statement_handlers, Depth, PrettyPrinter};
use crate::ast::{
    Assignment, BinaryOperator, Block, Boolean, ClassDeclaration, CompOperator, Conditional, Double,
    ExpressionStatement, ForLoop, FunctionDeclaration, Identifier, Integer, MethodCall, Return, StringLiteral,
    UnaryOperator, VariableDeclaration, WhileLoop,
};
use crate::utils::errors::StatpyResult;
use crate::visitor::AstVisitor;
use std::io::Write;

impl<W: Write> AstVisitor for PrettyPrinter<W> {
    type Output = ();
    type Scope = Depth;

    // Expression handlers
    fn visit_integer(&mut self, node: &Integer, depth: Depth) -> StatpyResult<()> {
        expression_handlers::handle_leaf(self, node, depth)
    }

    fn visit_double(&mut self, node: &Double, depth: Depth) -> StatpyResult<()> {
        expression_handlers::handle_leaf(self, node, depth)
    }

    fn visit_string(&mut self, node: &StringLiteral, depth: Depth) -> StatpyResult<()> {
        expression_handlers::handle_leaf(self, node, depth)
    }

    fn visit_boolean(&mut self, node: &Boolean, depth: Depth) -> StatpyResult<()> {
        expression_handlers::handle_leaf(self, node, depth)
    }

    fn visit_identifier(&mut self, node: &Identifier, depth: Depth) -> StatpyResult<()> {
        expression_handlers::handle_leaf(self, node, depth)
    }

    fn visit_unary_operator(&mut self, node: &UnaryOperator, depth: Depth) -> StatpyResult<()> {
        expression_handlers::handle_unary_operator(self, node, depth)
    }

    fn visit_binary_operator(&mut self, node: &BinaryOperator, depth: Depth) -> StatpyResult<()> {
        expression_handlers::handle_binary_operator(self, node, depth)
    }

    fn visit_comp_operator(&mut self, node: &CompOperator, depth: Depth) -> StatpyResult<()> {
        expression_handlers::handle_comp_operator(self, node, depth)
    }

    fn visit_method_call(&mut self, node: &MethodCall, depth: Depth) -> StatpyResult<()> {
        expression_handlers::handle_method_call(self, node, depth)
    }

    // Statement handlers
    fn visit_expression_statement(&mut self, node: &ExpressionStatement, depth: Depth) -> StatpyResult<()> {
        statement_handlers::handle_expression_statement(self, node, depth)
    }

    fn visit_assignment(&mut self, node: &Assignment, depth: Depth) -> StatpyResult<()> {
        statement_handlers::handle_assignment(self, node, depth)
    }

    fn visit_variable_declaration(&mut self, node: &VariableDeclaration, depth: Depth) -> StatpyResult<()> {
        declaration_handlers::handle_variable_declaration(self, node, depth)
    }

    fn visit_return(&mut self, node: &Return, depth: Depth) -> StatpyResult<()> {
        statement_handlers::handle_return(self, node, depth)
    }

    fn visit_block(&mut self, node: &Block, depth: Depth) -> StatpyResult<()> {
        statement_handlers::handle_block(self, node, depth)
    }

    fn visit_conditional(&mut self, node: &Conditional, depth: Depth) -> StatpyResult<()> {
        statement_handlers::handle_conditional(self, node, depth)
    }

    fn visit_while_loop(&mut self, node: &WhileLoop, depth: Depth) -> StatpyResult<()> {
        statement_handlers::handle_while_loop(self, node, depth)
    }

    fn visit_for_loop(&mut self, node: &ForLoop, depth: Depth) -> StatpyResult<()> {
        statement_handlers::handle_for_loop(self, node, depth)
    }

    // Declaration handlers
    fn visit_function_declaration(&mut self, node: &FunctionDeclaration, depth: Depth) -> StatpyResult<()> {
        declaration_handlers::handle_function_declaration(self, node, depth)
    }

    fn visit_class_declaration(&mut self, node: &ClassDeclaration, depth: Depth) -> StatpyResult<()> {
        declaration_handlers::handle_class_declaration(self, node, depth)
    }
}
