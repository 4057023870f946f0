use crate::{
    error::{Error, Result},
    ByteArray, Compound, IntArray, LongArray, Tag, Value, MAX_DEPTH,
};

use super::parser::{parse_number, parse_unquoted, Number};

/// Recursive descent parser over an SNBT string. The only state is the
/// position of the next unread byte, which always sits on a char boundary.
pub(crate) struct Parser<'a> {
    input: &'a str,
    index: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            index: 0,
            depth: 0,
        }
    }

    /// Parse one value and require that only whitespace follows it.
    pub fn parse_all(mut self) -> Result<Value> {
        let value = self.parse_value()?;
        self.skip_whitespace();
        if self.index < self.input.len() {
            return Err(self.unexpected("end of input"));
        }
        Ok(value)
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.index).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.index += 1;
        }
    }

    fn expect(&mut self, c: u8) -> Result<()> {
        if self.peek() == Some(c) {
            self.index += 1;
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{}'", c as char)))
        }
    }

    fn unexpected(&self, expected: &str) -> Error {
        match self.input[self.index..].chars().next() {
            Some(c) => Error::malformed(format!(
                "unexpected character '{}' at position {}, expected {}",
                c, self.index, expected
            )),
            None => Error::malformed(format!("unexpected end of input, expected {}", expected)),
        }
    }

    #[inline(never)]
    fn unexpected_separator(&self, close: u8) -> Error {
        self.unexpected(&format!("',' or '{}'", close as char))
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(Error::malformed(format!(
                "nesting deeper than {} at position {}",
                MAX_DEPTH, self.index
            )));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'{') => {
                self.index += 1;
                self.enter()?;
                let compound = self.parse_compound()?;
                self.leave();
                Ok(Value::Compound(compound))
            }
            Some(b'[') => {
                self.index += 1;
                self.enter()?;
                let value = self.parse_list_or_array()?;
                self.leave();
                Ok(value)
            }
            _ => self.parse_leaf(),
        }
    }

    /// Strings, numbers and booleans. Kept out of line so the recursion
    /// through `parse_value` stays small.
    #[inline(never)]
    fn parse_leaf(&mut self) -> Result<Value> {
        match self.peek() {
            Some(quote @ (b'"' | b'\'')) => Ok(Value::String(self.parse_quoted(quote)?)),
            _ => self.parse_bare(),
        }
    }

    fn consume_unquoted(&mut self, expected: &str) -> Result<&'a str> {
        let input = self.input;
        match parse_unquoted(&input[self.index..]) {
            Ok((_, token)) => {
                self.index += token.len();
                Ok(token)
            }
            Err(_) => Err(self.unexpected(expected)),
        }
    }

    fn parse_bare(&mut self) -> Result<Value> {
        let token = self.consume_unquoted("a value")?;
        Ok(match token {
            "true" => Value::Boolean(true),
            "false" => Value::Boolean(false),
            _ => match parse_number(token) {
                Some(n) => n.into(),
                None => Value::String(token.to_owned()),
            },
        })
    }

    fn parse_quoted(&mut self, quote: u8) -> Result<String> {
        let start = self.index;
        let quote = quote as char;
        let input = self.input;
        let body = start + 1;
        let mut chars = input[body..].char_indices();
        let mut out = String::new();

        let unterminated =
            || Error::malformed(format!("unterminated string starting at position {}", start));

        loop {
            let (i, c) = chars.next().ok_or_else(unterminated)?;
            match c {
                '\\' => {
                    let (j, escaped) = chars.next().ok_or_else(unterminated)?;
                    out.push(match escaped {
                        '\\' => '\\',
                        'b' => '\u{8}',
                        'f' => '\u{c}',
                        'n' => '\n',
                        'r' => '\r',
                        't' => '\t',
                        c if c == quote => c,
                        other => {
                            return Err(Error::malformed(format!(
                                "invalid escape '\\{}' at position {}",
                                other,
                                body + j - 1
                            )))
                        }
                    });
                }
                c if c == quote => {
                    self.index = body + i + 1;
                    return Ok(out);
                }
                c => out.push(c),
            }
        }
    }

    /// Parse the elements of a comma separated sequence up to and including
    /// `close`, whose opening bracket has been consumed. Leading, doubled and
    /// trailing commas are errors.
    fn parse_separated<F>(&mut self, close: u8, mut element: F) -> Result<()>
    where
        F: FnMut(&mut Self, usize) -> Result<()>,
    {
        self.skip_whitespace();
        if self.peek() == Some(close) {
            self.index += 1;
            return Ok(());
        }

        let mut i = 0;
        loop {
            self.skip_whitespace();
            if matches!(self.peek(), Some(b',')) || self.peek() == Some(close) {
                return Err(self.unexpected("a value"));
            }

            element(self, i)?;
            i += 1;

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.index += 1,
                Some(c) if c == close => {
                    self.index += 1;
                    return Ok(());
                }
                _ => return Err(self.unexpected_separator(close)),
            }
        }
    }

    fn parse_compound(&mut self) -> Result<Compound> {
        let mut compound = Compound::new();
        self.parse_separated(b'}', |p, _| {
            let key = match p.peek() {
                Some(quote @ (b'"' | b'\'')) => p.parse_quoted(quote)?,
                _ => p.consume_unquoted("a key")?.to_owned(),
            };
            p.skip_whitespace();
            p.expect(b':')?;
            let value = p.parse_value()?;
            compound.insert(key, value);
            Ok(())
        })?;
        Ok(compound)
    }

    fn parse_list_or_array(&mut self) -> Result<Value> {
        let input = self.input;
        let bytes = input.as_bytes();
        if let (Some(prefix), Some(b';')) = (bytes.get(self.index), bytes.get(self.index + 1)) {
            let array_tag = match prefix.to_ascii_uppercase() {
                b'B' => Some(Tag::ByteArray),
                b'I' => Some(Tag::IntArray),
                b'L' => Some(Tag::LongArray),
                _ => None,
            };
            if let Some(array_tag) = array_tag {
                self.index += 2;
                return self.parse_array(array_tag);
            }
        }

        let mut list: Vec<Value> = Vec::new();
        self.parse_separated(b']', |p, i| {
            let value = p.parse_value()?;
            if let Some(first) = list.first() {
                if first.tag() != value.tag() {
                    return Err(Error::element_mismatch(i, first.tag(), value.tag()));
                }
            }
            list.push(value);
            Ok(())
        })?;
        Ok(Value::List(list))
    }

    /// The elements of a `[B;`, `[I;` or `[L;` array. Elements may leave off
    /// the suffix of the array's element type but may not use another one.
    fn parse_array(&mut self, array_tag: Tag) -> Result<Value> {
        let element_tag = match array_tag {
            Tag::ByteArray => Tag::Byte,
            Tag::LongArray => Tag::Long,
            _ => Tag::Int,
        };

        let mut ints: Vec<i128> = Vec::new();
        self.parse_separated(b']', |p, i| {
            let start = p.index;
            let token = p.consume_unquoted("a number")?;
            let n = parse_number(token).ok_or_else(|| {
                Error::malformed(format!(
                    "expected a number in {} at position {}, found '{}'",
                    array_tag, start, token
                ))
            })?;

            match n {
                Number::Int(v) => ints.push(v),
                Number::Byte(v) if element_tag == Tag::Byte => ints.push(v),
                Number::Long(v) if element_tag == Tag::Long => ints.push(v),
                other => return Err(Error::element_mismatch(i, element_tag, other.tag())),
            }
            Ok(())
        })?;

        Ok(match array_tag {
            Tag::ByteArray => Value::ByteArray(ints.into_iter().map(|v| v as i8).collect::<ByteArray>()),
            Tag::LongArray => Value::LongArray(ints.into_iter().map(|v| v as i64).collect::<LongArray>()),
            _ => Value::IntArray(ints.into_iter().map(|v| v as i32).collect::<IntArray>()),
        })
    }
}
