use statpy::ast::{BinaryOp, Block, CompOp, Conditional, Expression, Return, Statement};
use statpy::errors::{StatpyError, StatpyResult};
use statpy::{parse_tree, read_tree, render_to_string};
use std::io::Write;

const TREE: &str = r#"{
    "kind": "Block",
    "statements": [
        {
            "kind": "Conditional",
            "condition": {
                "operator": "<",
                "left": { "kind": "Identifier", "name": "n" },
                "right": { "kind": "Integer", "value": 2 }
            },
            "then_block": {
                "statements": [
                    { "kind": "Return", "expression": { "kind": "Identifier", "name": "n" } }
                ]
            }
        },
        {
            "kind": "Return",
            "expression": {
                "kind": "Binary",
                "operator": "*",
                "left": { "kind": "Identifier", "name": "n" },
                "right": {
                    "kind": "MethodCall",
                    "callee": "fact",
                    "arguments": [
                        {
                            "kind": "Binary",
                            "operator": "-",
                            "left": { "kind": "Identifier", "name": "n" },
                            "right": { "kind": "Integer", "value": 1 }
                        }
                    ]
                }
            }
        },
        { "kind": "Return" }
    ]
}"#;

fn expected_tree() -> Statement {
    Block::new(vec![
        Statement::Conditional(Conditional::new(
            Some(Box::new(statpy::ast::CompOperator::new(
                Some(Box::new(Expression::ident("n"))),
                Some(Box::new(Expression::int(2))),
                CompOp::LessThan,
            ))),
            Some(Box::new(Block::new(vec![Statement::Return(Return::new(Some(Box::new(
                Expression::ident("n"),
            ))))]))),
            None,
        )),
        Statement::Return(Return::new(Some(Box::new(Expression::binary(
            Expression::ident("n"),
            BinaryOp::Multiply,
            Expression::call(
                "fact",
                vec![Expression::binary(Expression::ident("n"), BinaryOp::Subtract, Expression::int(1))],
            ),
        ))))),
        Statement::Return(Return::new(None)),
    ])
    .into()
}

#[test]
fn test_parse_tree() -> StatpyResult<()> {
    assert_eq!(parse_tree(TREE)?, expected_tree());
    Ok(())
}

#[test]
fn test_parsed_tree_renders() -> StatpyResult<()> {
    let expected = "\
Create Block
  Create Conditional
    Create CompOperator: <
    Create Identifier: n
    Create Integer: 2
    Create Block
      Create Return
        Create Identifier: n
    End Block
  Create Return
    Create BinaryOperator: *
      Create Identifier: n
      Create MethodCall: fact
        Arguments are:
        Create BinaryOperator: -
          Create Identifier: n
          Create Integer: 1
  Create Return
End Block
";
    assert_eq!(render_to_string(&parse_tree(TREE)?)?, expected);
    Ok(())
}

#[test]
fn test_serialized_tree_reads_back() -> StatpyResult<()> {
    let tree = expected_tree();
    let json = serde_json::to_string(&tree)?;
    assert!(json.contains(r#""operator":"*""#));
    assert_eq!(parse_tree(&json)?, tree);
    Ok(())
}

#[test]
fn test_missing_slot_survives_decoding() -> StatpyResult<()> {
    // The decoder accepts the document; the pass reports the hole.
    let tree = parse_tree(r#"{ "kind": "Assignment", "target": "x" }"#)?;
    let err = render_to_string(&tree).unwrap_err();
    assert!(err.is_structural());
    Ok(())
}

#[test]
fn test_unknown_kind_is_decode_error() {
    let err = parse_tree(r#"{ "kind": "Lambda" }"#).unwrap_err();
    assert!(matches!(err, StatpyError::DecodeError(_)));
}

#[test]
fn test_read_tree_from_file() -> StatpyResult<()> {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
    file.write_all(TREE.as_bytes())?;
    file.flush()?;
    assert_eq!(read_tree(file.path())?, expected_tree());
    Ok(())
}

#[test]
fn test_read_tree_rejects_other_extensions() -> StatpyResult<()> {
    let file = tempfile::Builder::new().suffix(".txt").tempfile()?;
    let err = read_tree(file.path()).unwrap_err();
    assert!(matches!(err, StatpyError::FileReadError(_)));
    assert_eq!(err.to_string(), "File read error: File must have a .json extension");
    Ok(())
}

#[test]
fn test_read_tree_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_tree(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StatpyError::IoError(_)));
}
