/*
*                    statpy -- AST node contract.
*
* expression = integer | double | string | boolean | identifier
*            | unary-op expression
*            | expression binary-op expression
*            | expression comp-op expression
*            | identifier "(" [ expression { "," expression } ] ")" ;
* statement  = expression ";" | assignment | declaration | return
*            | block | conditional | while | for | function | class ;
*/

use crate::utils::errors::StatpyResult;
use crate::visitor::AstVisitor;
use std::fmt::Display;

/// Every node can be dispatched to a pass and describes itself.
///
/// `Display` is the descriptive label: stable, never empty, names the node
/// kind and, where one exists, its literal value or operator symbol.
pub trait Node: Display {
    /// Forward to the `visitor` operation matching this node's exact variant.
    fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V, scope: V::Scope) -> StatpyResult<V::Output>;

    fn label(&self) -> String {
        self.to_string()
    }
}
