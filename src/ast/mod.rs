// Abstract Syntax Tree definitions for the statpy front end.
// Nodes are built once by the parser, owned by exactly one parent and
// never mutated afterwards; passes only read them.

mod traits;
pub use traits::Node;

// AST node modules
mod block;
mod declarations;
mod expressions;
mod literals;
mod statements;

pub use block::Block;
pub use declarations::{ClassDeclaration, FunctionDeclaration, VariableDeclaration};
pub use expressions::{BinaryOp, BinaryOperator, CompOp, CompOperator, Expression, MethodCall, UnaryOp, UnaryOperator};
pub use literals::{Boolean, Double, Identifier, Integer, StringLiteral};
pub use statements::{Assignment, Conditional, ExpressionStatement, ForLoop, Return, Statement, WhileLoop};
