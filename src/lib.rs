use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod counter;
pub mod printer;
pub mod utils;
pub mod visitor;

pub use ast::{Expression, Node, Statement};
pub use counter::{NodeCount, NodeCounter};
pub use printer::{render, render_to_string, Depth, PrettyPrinter};
pub use utils::errors;
pub use visitor::AstVisitor;

pub const VERSION: &str = "0.1.0";

use crate::errors::{StatpyError, StatpyResult};
use crate::utils::config::input::TREE_EXTENSION;

/// Load a tree handed over by the parser as a `.json` document.
pub fn read_tree(filename: &Path) -> StatpyResult<Statement> {
    match filename.extension() {
        Some(ext) if ext == TREE_EXTENSION => {}
        _ => {
            return Err(StatpyError::FileReadError(format!(
                "File must have a .{} extension",
                TREE_EXTENSION
            )));
        }
    }
    let mut file = File::open(filename)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    parse_tree(&contents)
}

pub fn parse_tree(source: &str) -> StatpyResult<Statement> {
    Ok(serde_json::from_str(source)?)
}
