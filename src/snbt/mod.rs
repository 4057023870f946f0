//! SNBT, the text form of NBT used in commands and data packs.
//!
//! ```
//! use nbtkit::{snbt, StringifyOptions, Value};
//!
//! let value = snbt::from_str("[I; 1, 2, 3]").unwrap();
//! assert!(matches!(value, Value::IntArray(_)));
//!
//! let text = snbt::to_string_with_opts(&value, StringifyOptions::new().indent("  ")).unwrap();
//! assert_eq!(text, "[I;1, 2, 3]");
//! ```
//!
//! Numbers carry a suffix for their kind (`1b`, `2s`, `3l`, `4.5f`), except
//! Int and Double. Unquoted tokens that are neither a number nor `true` or
//! `false` are strings.

mod de;
mod parser;
mod ser;

use crate::{error::Result, StringifyOptions, Value};

/// Parse SNBT text into a value. Any kind of value is accepted at the top,
/// surrounded by optional whitespace.
pub fn from_str(input: &str) -> Result<Value> {
    de::Parser::new(input).parse_all()
}

/// Write `value` as compact SNBT with no whitespace.
pub fn to_string<V>(value: &V) -> Result<String>
where
    V: AsRef<Value> + ?Sized,
{
    to_string_with_opts(value, StringifyOptions::default())
}

/// Write `value` as SNBT. A non-empty indent spreads compounds, and lists of
/// containers, over several lines.
pub fn to_string_with_opts<V>(value: &V, opts: StringifyOptions) -> Result<String>
where
    V: AsRef<Value> + ?Sized,
{
    let mut stringifier = ser::Stringifier::new(opts.indent.as_str());
    stringifier.write_value(value.as_ref(), 1)?;
    Ok(stringifier.finish())
}
