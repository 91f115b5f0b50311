use statpy::ast::{
    Assignment, BinaryOp, Block, ClassDeclaration, CompOp, CompOperator, Conditional, Expression, ForLoop,
    FunctionDeclaration, Return, Statement, UnaryOp, VariableDeclaration, WhileLoop,
};
use statpy::errors::StatpyResult;
use statpy::{render_to_string, PrettyPrinter};

fn assign(target: &str, expr: Expression) -> Assignment {
    Assignment::new(target, Some(Box::new(expr)))
}

fn block(statements: Vec<Statement>) -> Block {
    Block::new(statements)
}

fn compare(left: Expression, op: CompOp, right: Expression) -> CompOperator {
    CompOperator::new(Some(Box::new(left)), Some(Box::new(right)), op)
}

fn ret(expr: Option<Expression>) -> Statement {
    Statement::Return(Return::new(expr.map(Box::new)))
}

fn counting_loop() -> Statement {
    // for (i = 0; i < 10; i = i + 1) { print(i); }
    Statement::ForLoop(ForLoop::new(
        Some(Box::new(assign("i", Expression::int(0)))),
        Some(Box::new(Expression::compare(Expression::ident("i"), CompOp::LessThan, Expression::int(10)))),
        Some(Box::new(block(vec![Expression::call("print", vec![Expression::ident("i")]).into()]))),
        Some(Box::new(assign(
            "i",
            Expression::binary(Expression::ident("i"), BinaryOp::Add, Expression::int(1)),
        ))),
    ))
}

#[test]
fn test_for_loop_order() -> StatpyResult<()> {
    let expected = "\
Create ForLoop
  Create Assignment: i
    Create Integer: 0
  Create CompOperator: <
  Create Identifier: i
  Create Integer: 10
  Create Loop Body
  Create Block
    Create ExpressionStatement
      Create MethodCall: print
        Arguments are:
        Create Identifier: i
  End Block
  Create Assignment: i
    Create BinaryOperator: +
      Create Identifier: i
      Create Integer: 1
";
    assert_eq!(render_to_string(&counting_loop())?, expected);
    Ok(())
}

#[test]
fn test_method_call_arguments_share_header_depth() -> StatpyResult<()> {
    let call: Statement = Expression::call("foo", vec![Expression::int(1), Expression::int(2)]).into();
    let expected = "\
Create ExpressionStatement
  Create MethodCall: foo
    Arguments are:
    Create Integer: 1
    Create Integer: 2
";
    assert_eq!(render_to_string(&call)?, expected);
    Ok(())
}

#[test]
fn test_method_call_without_arguments() -> StatpyResult<()> {
    let call: Statement = Expression::call("tick", vec![]).into();
    assert_eq!(
        render_to_string(&call)?,
        "Create ExpressionStatement\n  Create MethodCall: tick\n"
    );
    Ok(())
}

#[test]
fn test_empty_block() -> StatpyResult<()> {
    let empty: Statement = block(vec![]).into();
    assert_eq!(render_to_string(&empty)?, "Create Block\nEnd Block\n");
    Ok(())
}

#[test]
fn test_return_with_and_without_expression() -> StatpyResult<()> {
    assert_eq!(render_to_string(&ret(None))?, "Create Return\n");
    assert_eq!(
        render_to_string(&ret(Some(Expression::int(0))))?,
        "Create Return\n  Create Integer: 0\n"
    );
    Ok(())
}

#[test]
fn test_function_without_parameters() -> StatpyResult<()> {
    let main = Statement::FunctionDeclaration(FunctionDeclaration::new(
        "int",
        "main",
        vec![],
        Some(Box::new(block(vec![ret(Some(Expression::int(0)))]))),
    ));
    let output = render_to_string(&main)?;
    assert!(!output.contains("Parameters:"));
    assert_eq!(output, "Create FunctionDeclaration: int main\n  Create Return\n    Create Integer: 0\n");
    Ok(())
}

#[test]
fn test_function_with_parameters() -> StatpyResult<()> {
    let add = Statement::FunctionDeclaration(FunctionDeclaration::new(
        "int",
        "add",
        vec![
            VariableDeclaration::new("int", "a", None),
            VariableDeclaration::new("int", "b", None),
        ],
        Some(Box::new(block(vec![ret(Some(Expression::binary(
            Expression::ident("a"),
            BinaryOp::Add,
            Expression::ident("b"),
        )))]))),
    ));
    let expected = "\
Create FunctionDeclaration: int add
  Parameters:
    int a
    int b
  Create Return
    Create BinaryOperator: +
      Create Identifier: a
      Create Identifier: b
";
    assert_eq!(render_to_string(&add)?, expected);
    Ok(())
}

#[test]
fn test_conditional_without_else() -> StatpyResult<()> {
    let cond = Statement::Conditional(Conditional::new(
        Some(Box::new(compare(Expression::ident("x"), CompOp::GreaterThan, Expression::int(1)))),
        Some(Box::new(block(vec![assign("y", Expression::int(2)).into()]))),
        None,
    ));
    let expected = "\
Create Conditional
  Create CompOperator: >
  Create Identifier: x
  Create Integer: 1
  Create Block
    Create Assignment: y
      Create Integer: 2
  End Block
";
    let output = render_to_string(&cond)?;
    assert_eq!(output, expected);
    assert!(!output.contains("Else"));
    Ok(())
}

#[test]
fn test_conditional_with_else() -> StatpyResult<()> {
    let cond = Statement::Conditional(Conditional::new(
        Some(Box::new(compare(Expression::ident("x"), CompOp::Equal, Expression::int(0)))),
        Some(Box::new(block(vec![]))),
        Some(Box::new(block(vec![ret(None)]))),
    ));
    let expected = "\
Create Conditional
  Create CompOperator: ==
  Create Identifier: x
  Create Integer: 0
  Create Block
  End Block
  Create Block
    Create Return
  End Block
";
    assert_eq!(render_to_string(&cond)?, expected);
    Ok(())
}

#[test]
fn test_conditional_without_branches() -> StatpyResult<()> {
    let cond = Statement::Conditional(Conditional::new(
        Some(Box::new(compare(Expression::ident("x"), CompOp::NotEqual, Expression::int(0)))),
        None,
        None,
    ));
    assert_eq!(
        render_to_string(&cond)?,
        "Create Conditional\n  Create CompOperator: !=\n  Create Identifier: x\n  Create Integer: 0\n"
    );
    Ok(())
}

#[test]
fn test_while_loop_markers() -> StatpyResult<()> {
    let plain = Statement::WhileLoop(WhileLoop::new(
        Some(Box::new(Expression::boolean(true))),
        Some(Box::new(block(vec![]))),
        None,
    ));
    assert_eq!(
        render_to_string(&plain)?,
        "Create WhileLoop\n  Create Boolean: true\n  Create Loop Body\n  Create Block\n  End Block\n"
    );

    let with_else = Statement::WhileLoop(WhileLoop::new(
        Some(Box::new(Expression::boolean(true))),
        Some(Box::new(block(vec![]))),
        Some(Box::new(block(vec![]))),
    ));
    let expected = "\
Create WhileLoop
  Create Boolean: true
  Create Loop Body
  Create Block
  End Block
  Create Else Body
  Create Block
  End Block
";
    assert_eq!(render_to_string(&with_else)?, expected);
    Ok(())
}

#[test]
fn test_class_declaration() -> StatpyResult<()> {
    let point = Statement::ClassDeclaration(ClassDeclaration::new(
        "Point",
        Some(Box::new(block(vec![Statement::VariableDeclaration(VariableDeclaration::new(
            "int",
            "x",
            Some(Box::new(assign("x", Expression::int(0)))),
        ))]))),
    ));
    let expected = "\
Create ClassDeclaration: Point
  Create Block
    Create VariableDeclaration: int x
      Create Assignment: x
        Create Integer: 0
  End Block
";
    assert_eq!(render_to_string(&point)?, expected);

    let empty = Statement::ClassDeclaration(ClassDeclaration::new("Empty", None));
    assert_eq!(render_to_string(&empty)?, "Create ClassDeclaration: Empty\n");
    Ok(())
}

#[test]
fn test_literal_labels() -> StatpyResult<()> {
    let literals: Statement = block(vec![
        Expression::double(2.5).into(),
        Expression::string("hi").into(),
        Expression::boolean(false).into(),
        Expression::unary(UnaryOp::Negate, Expression::ident("x")).into(),
    ])
    .into();
    let expected = "\
Create Block
  Create ExpressionStatement
    Create Double: 2.5
  Create ExpressionStatement
    Create String: hi
  Create ExpressionStatement
    Create Boolean: false
  Create ExpressionStatement
    Create UnaryOperator: -
      Create Identifier: x
End Block
";
    assert_eq!(render_to_string(&literals)?, expected);
    Ok(())
}

#[test]
fn test_left_operand_precedes_right() -> StatpyResult<()> {
    let expr: Statement = Expression::binary(
        Expression::compare(Expression::ident("left"), CompOp::LessThanEqual, Expression::ident("right")),
        BinaryOp::And,
        Expression::ident("tail"),
    )
    .into();
    let output = render_to_string(&expr)?;
    let left = output.find("Identifier: left").unwrap();
    let right = output.find("Identifier: right").unwrap();
    let tail = output.find("Identifier: tail").unwrap();
    assert!(left < right && right < tail);
    Ok(())
}

#[test]
fn test_depth_restored_after_every_kind() -> StatpyResult<()> {
    let samples: Vec<Statement> = vec![
        Expression::int(1).into(),
        Expression::unary(UnaryOp::Not, Expression::boolean(true)).into(),
        Expression::binary(Expression::int(1), BinaryOp::Multiply, Expression::int(2)).into(),
        Expression::compare(Expression::int(1), CompOp::GreaterThanEqual, Expression::int(2)).into(),
        Expression::call("f", vec![Expression::int(1)]).into(),
        assign("a", Expression::int(1)).into(),
        Statement::VariableDeclaration(VariableDeclaration::new("int", "a", Some(Box::new(assign("a", Expression::int(1)))))),
        ret(Some(Expression::int(1))),
        block(vec![ret(None)]).into(),
        Statement::Conditional(Conditional::new(
            Some(Box::new(compare(Expression::int(1), CompOp::LessThan, Expression::int(2)))),
            Some(Box::new(block(vec![]))),
            Some(Box::new(block(vec![]))),
        )),
        Statement::WhileLoop(WhileLoop::new(
            Some(Box::new(Expression::boolean(true))),
            Some(Box::new(block(vec![]))),
            Some(Box::new(block(vec![]))),
        )),
        counting_loop(),
        Statement::FunctionDeclaration(FunctionDeclaration::new(
            "void",
            "f",
            vec![VariableDeclaration::new("int", "a", None)],
            Some(Box::new(block(vec![ret(None)]))),
        )),
        Statement::ClassDeclaration(ClassDeclaration::new("C", Some(Box::new(block(vec![]))))),
    ];

    for sample in samples {
        let label = sample.to_string();
        let wrapped: Statement = block(vec![sample, ret(None)]).into();
        let output = render_to_string(&wrapped)?;
        assert!(output.starts_with(&format!("Create Block\n  Create {}\n", label)), "{}", output);
        assert!(output.ends_with("\n  Create Return\nEnd Block\n"), "{}", output);
    }
    Ok(())
}

#[test]
fn test_rendering_is_deterministic() -> StatpyResult<()> {
    let tree: Statement = block(vec![counting_loop(), counting_loop()]).into();
    let first = render_to_string(&tree)?;
    let second = render_to_string(&tree)?;
    assert_eq!(first, second);

    let mut printer = PrettyPrinter::new(Vec::new());
    printer.print(&tree)?;
    assert_eq!(printer.into_inner(), first.into_bytes());
    Ok(())
}

#[test]
fn test_nested_blocks_indentation() -> StatpyResult<()> {
    let tree: Statement = block(vec![block(vec![block(vec![]).into()]).into()]).into();
    let expected = "\
Create Block
  Create Block
    Create Block
    End Block
  End Block
End Block
";
    assert_eq!(render_to_string(&tree)?, expected);
    Ok(())
}
