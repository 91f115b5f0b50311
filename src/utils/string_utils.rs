//! Shared text helpers for passes that emit line-oriented output
use crate::utils::config::render::INDENT_WIDTH;
use crate::utils::errors::StatpyResult;
use std::io::Write;

/// Write one line prefixed by `level` indentation steps.
pub fn write_indented(out: &mut dyn Write, level: usize, args: std::fmt::Arguments) -> StatpyResult<()> {
    write!(out, "{:width$}", "", width = level * INDENT_WIDTH)?;
    out.write_fmt(args)?;
    out.write_all(b"\n")?;
    Ok(())
}
