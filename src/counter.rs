use crate::ast::{
    Assignment, BinaryOperator, Block, Boolean, ClassDeclaration, CompOperator, Conditional, Double,
    ExpressionStatement, ForLoop, FunctionDeclaration, Identifier, Integer, MethodCall, Node, Return, StringLiteral,
    UnaryOperator, VariableDeclaration, WhileLoop,
};
use crate::utils::config::slots::{BODY, CONDITION, EXPRESSION, INITIALIZER, LEFT, OPERAND, RIGHT, UPDATE};
use crate::utils::errors::{required, StatpyResult};
use crate::visitor::AstVisitor;

/// Node totals gathered by [`NodeCounter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeCount {
    pub expressions: usize,
    pub statements: usize,
    pub declarations: usize,
    // Deepest nesting reached, root is 0
    pub max_depth: usize,
}

impl NodeCount {
    pub fn total(&self) -> usize {
        self.expressions + self.statements + self.declarations
    }
}

/// Counts nodes per category. Structural errors surface the same way as in
/// the printer.
#[derive(Debug, Default)]
pub struct NodeCounter {
    count: NodeCount,
}

impl NodeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count<N: Node>(root: &N) -> StatpyResult<NodeCount> {
        let mut counter = NodeCounter::new();
        root.accept(&mut counter, 0)?;
        Ok(counter.count)
    }

    fn expression(&mut self, depth: usize) {
        self.count.expressions += 1;
        self.reach(depth);
    }

    fn statement(&mut self, depth: usize) {
        self.count.statements += 1;
        self.reach(depth);
    }

    fn declaration(&mut self, depth: usize) {
        self.count.declarations += 1;
        self.reach(depth);
    }

    fn reach(&mut self, depth: usize) {
        self.count.max_depth = self.count.max_depth.max(depth);
    }
}

impl AstVisitor for NodeCounter {
    type Output = ();
    type Scope = usize;

    fn visit_integer(&mut self, _node: &Integer, depth: usize) -> StatpyResult<()> {
        self.expression(depth);
        Ok(())
    }

    fn visit_double(&mut self, _node: &Double, depth: usize) -> StatpyResult<()> {
        self.expression(depth);
        Ok(())
    }

    fn visit_string(&mut self, _node: &StringLiteral, depth: usize) -> StatpyResult<()> {
        self.expression(depth);
        Ok(())
    }

    fn visit_boolean(&mut self, _node: &Boolean, depth: usize) -> StatpyResult<()> {
        self.expression(depth);
        Ok(())
    }

    fn visit_identifier(&mut self, _node: &Identifier, depth: usize) -> StatpyResult<()> {
        self.expression(depth);
        Ok(())
    }

    fn visit_unary_operator(&mut self, node: &UnaryOperator, depth: usize) -> StatpyResult<()> {
        self.expression(depth);
        required(&node.operand, node, OPERAND)?.accept(self, depth + 1)
    }

    fn visit_binary_operator(&mut self, node: &BinaryOperator, depth: usize) -> StatpyResult<()> {
        self.expression(depth);
        required(&node.left, node, LEFT)?.accept(self, depth + 1)?;
        required(&node.right, node, RIGHT)?.accept(self, depth + 1)
    }

    fn visit_comp_operator(&mut self, node: &CompOperator, depth: usize) -> StatpyResult<()> {
        self.expression(depth);
        required(&node.left, node, LEFT)?.accept(self, depth + 1)?;
        required(&node.right, node, RIGHT)?.accept(self, depth + 1)
    }

    fn visit_method_call(&mut self, node: &MethodCall, depth: usize) -> StatpyResult<()> {
        self.expression(depth);
        for argument in &node.arguments {
            argument.accept(self, depth + 1)?;
        }
        Ok(())
    }

    fn visit_expression_statement(&mut self, node: &ExpressionStatement, depth: usize) -> StatpyResult<()> {
        self.statement(depth);
        required(&node.expression, node, EXPRESSION)?.accept(self, depth + 1)
    }

    fn visit_assignment(&mut self, node: &Assignment, depth: usize) -> StatpyResult<()> {
        self.statement(depth);
        required(&node.expression, node, EXPRESSION)?.accept(self, depth + 1)
    }

    fn visit_variable_declaration(&mut self, node: &VariableDeclaration, depth: usize) -> StatpyResult<()> {
        self.declaration(depth);
        match &node.assignment {
            Some(assignment) => assignment.accept(self, depth + 1),
            None => Ok(()),
        }
    }

    fn visit_return(&mut self, node: &Return, depth: usize) -> StatpyResult<()> {
        self.statement(depth);
        match &node.expression {
            Some(expression) => expression.accept(self, depth + 1),
            None => Ok(()),
        }
    }

    fn visit_block(&mut self, node: &Block, depth: usize) -> StatpyResult<()> {
        self.statement(depth);
        for statement in &node.statements {
            statement.accept(self, depth + 1)?;
        }
        Ok(())
    }

    fn visit_conditional(&mut self, node: &Conditional, depth: usize) -> StatpyResult<()> {
        self.statement(depth);
        required(&node.condition, node, CONDITION)?.accept(self, depth + 1)?;
        for branch in [&node.then_block, &node.else_block].into_iter().flatten() {
            branch.accept(self, depth + 1)?;
        }
        Ok(())
    }

    fn visit_while_loop(&mut self, node: &WhileLoop, depth: usize) -> StatpyResult<()> {
        self.statement(depth);
        required(&node.condition, node, CONDITION)?.accept(self, depth + 1)?;
        required(&node.body, node, BODY)?.accept(self, depth + 1)?;
        match &node.else_block {
            Some(else_block) => else_block.accept(self, depth + 1),
            None => Ok(()),
        }
    }

    fn visit_for_loop(&mut self, node: &ForLoop, depth: usize) -> StatpyResult<()> {
        self.statement(depth);
        required(&node.init, node, INITIALIZER)?.accept(self, depth + 1)?;
        required(&node.condition, node, CONDITION)?.accept(self, depth + 1)?;
        required(&node.body, node, BODY)?.accept(self, depth + 1)?;
        required(&node.update, node, UPDATE)?.accept(self, depth + 1)
    }

    fn visit_function_declaration(&mut self, node: &FunctionDeclaration, depth: usize) -> StatpyResult<()> {
        self.declaration(depth);
        for parameter in &node.parameters {
            parameter.accept(self, depth + 1)?;
        }
        required(&node.body, node, BODY)?.accept(self, depth + 1)
    }

    fn visit_class_declaration(&mut self, node: &ClassDeclaration, depth: usize) -> StatpyResult<()> {
        self.declaration(depth);
        match &node.body {
            Some(body) => body.accept(self, depth + 1),
            None => Ok(()),
        }
    }
}
