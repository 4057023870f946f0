use crate::{
    error::{Error, Result},
    Compound, Tag, Value,
};

use super::parser::is_unquoted_char;

/// Quote and escape `v`, picking whichever quote character needs fewer
/// escapes. Ties go to double quotes.
pub(crate) fn write_escaped_str(out: &mut String, v: &str) {
    let singles = v.chars().filter(|c| *c == '\'').count();
    let doubles = v.chars().filter(|c| *c == '"').count();
    let quote = if singles < doubles { '\'' } else { '"' };

    out.push(quote);
    for c in v.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

fn write_key(out: &mut String, key: &str) {
    if !key.is_empty() && key.chars().all(is_unquoted_char) {
        out.push_str(key);
    } else {
        write_escaped_str(out, key);
    }
}

pub(crate) struct Stringifier<'i> {
    out: String,
    indent: &'i str,
}

impl<'i> Stringifier<'i> {
    pub fn new(indent: &'i str) -> Self {
        Self {
            out: String::new(),
            indent,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn fancy(&self) -> bool {
        !self.indent.is_empty()
    }

    fn newline(&mut self, level: usize) {
        self.out.push('\n');
        for _ in 0..level {
            self.out.push_str(self.indent);
        }
    }

    fn write_int(&mut self, v: impl itoa::Integer, suffix: &str) {
        let mut buffer = itoa::Buffer::new();
        self.out.push_str(buffer.format(v));
        self.out.push_str(suffix);
    }

    // ryu keeps a `.0` on whole numbers it does not put in exponent form, so
    // the output never reads back as an integer.
    fn write_float(&mut self, v: impl ryu::Float, suffix: &str) {
        let mut buffer = ryu::Buffer::new();
        self.out.push_str(buffer.format(v));
        self.out.push_str(suffix);
    }

    /// Write `value` nested `level` deep; the root is level 1.
    pub fn write_value(&mut self, value: &Value, level: usize) -> Result<()> {
        match value {
            Value::Byte(v) => self.write_int(*v, "b"),
            Value::Boolean(v) => self.out.push_str(if *v { "true" } else { "false" }),
            Value::Short(v) => self.write_int(*v, "s"),
            Value::Int(v) => self.write_int(*v, ""),
            Value::Long(v) => self.write_int(*v, "l"),
            Value::Float(v) => self.write_float(*v, "f"),
            // A bare `NaN` or `inf` would read back as a string.
            Value::Double(v) if !v.is_finite() => self.write_float(*v, "d"),
            Value::Double(v) => self.write_float(*v, ""),
            Value::String(v) => write_escaped_str(&mut self.out, v),
            Value::ByteArray(v) => self.write_array("B", v.iter().copied(), "b"),
            Value::IntArray(v) => self.write_array("I", v.iter().copied(), ""),
            Value::LongArray(v) => self.write_array("L", v.iter().copied(), "l"),
            Value::List(v) => self.write_list(v, level)?,
            Value::Compound(v) => self.write_compound(v, level)?,
        }
        Ok(())
    }

    fn write_array<T: itoa::Integer>(
        &mut self,
        prefix: &str,
        elements: impl Iterator<Item = T>,
        suffix: &str,
    ) {
        let separator = if self.fancy() { ", " } else { "," };
        self.out.push('[');
        self.out.push_str(prefix);
        self.out.push(';');
        for (i, element) in elements.enumerate() {
            if i > 0 {
                self.out.push_str(separator);
            }
            self.write_int(element, suffix);
        }
        self.out.push(']');
    }

    fn write_list(&mut self, list: &[Value], level: usize) -> Result<()> {
        let element_tag = list.first().map(Value::tag).unwrap_or(Tag::End);

        // Lists of containers put each element on its own line; lists of
        // scalars stay on one.
        let one_per_line = self.fancy()
            && matches!(
                element_tag,
                Tag::ByteArray | Tag::IntArray | Tag::LongArray | Tag::List | Tag::Compound
            );
        let separator = if self.fancy() && !one_per_line { ", " } else { "," };

        self.out.push('[');
        for (i, element) in list.iter().enumerate() {
            if element.tag() != element_tag {
                return Err(Error::element_mismatch(i, element_tag, element.tag()));
            }
            if i > 0 {
                self.out.push_str(separator);
            }
            if one_per_line {
                self.newline(level);
            }
            self.write_value(element, level + 1)?;
        }
        if one_per_line && !list.is_empty() {
            self.newline(level - 1);
        }
        self.out.push(']');
        Ok(())
    }

    fn write_compound(&mut self, compound: &Compound, level: usize) -> Result<()> {
        self.out.push('{');
        for (i, (key, value)) in compound.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            if self.fancy() {
                self.newline(level);
            }
            write_key(&mut self.out, key);
            self.out.push(':');
            if self.fancy() {
                self.out.push(' ');
            }
            self.write_value(value, level + 1)?;
        }
        if self.fancy() && !compound.is_empty() {
            self.newline(level - 1);
        }
        self.out.push('}');
        Ok(())
    }
}
