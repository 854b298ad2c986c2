//! Format-driven object construction: `pack("{s:i, s:s}", &["id".into(), 1.into(), ...])`
//!
//! Grammar: `{` (`s` (`i` | `s`))* `}`. Whitespace, `,` and `:` between tokens are
//! ignored. `s` in key position takes a string argument as the key; in value
//! position `s` takes a string and `i` an integer. Only a single flat object is
//! supported.

use crate::error::{Error, Result};
use crate::value::{Object, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    Str(&'a str),
    Int(i64),
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(s)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(s: &'a String) -> Self {
        Arg::Str(s)
    }
}

impl From<i64> for Arg<'_> {
    fn from(i: i64) -> Self {
        Arg::Int(i)
    }
}

impl From<i32> for Arg<'_> {
    fn from(i: i32) -> Self {
        Arg::Int(i64::from(i))
    }
}

impl From<u32> for Arg<'_> {
    fn from(u: u32) -> Self {
        Arg::Int(i64::from(u))
    }
}

/// Build an object from a pack format and its arguments.
///
/// ```
/// let obj = jsonpack::pack!("{s:i, s:s}", "id", 1, "name", "Alice")?;
/// assert_eq!(obj.to_string(), r#"{"id":1,"name":"Alice"}"#);
/// # Ok::<(), jsonpack::Error>(())
/// ```
#[macro_export]
macro_rules! pack {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::pack($fmt, &[$($crate::Arg::from($arg)),*])
    };
}

pub fn pack(format: &str, args: &[Arg<'_>]) -> Result<Object> {
    let mut p = Packer {
        format,
        pos: 0,
        args,
        next_arg: 0,
    };
    let obj = p.object()?;
    tracing::trace!(format, members = obj.len(), "object packed");
    Ok(obj)
}

struct Packer<'f, 'a> {
    format: &'f str,
    pos: usize,
    args: &'a [Arg<'a>],
    next_arg: usize,
}

impl<'f, 'a> Packer<'f, 'a> {
    /// Next significant format character and its byte offset.
    fn token(&mut self) -> Option<(usize, char)> {
        let format = self.format;
        let rest = &format[self.pos..];
        for (rel, ch) in rest.char_indices() {
            if matches!(ch, ' ' | '\t' | '\n' | '\r' | ',' | ':') {
                continue;
            }
            let at = self.pos + rel;
            self.pos = at + ch.len_utf8();
            return Some((at, ch));
        }
        self.pos = self.format.len();
        None
    }

    fn take(&mut self, at: usize, spec: char) -> Result<Arg<'a>> {
        match self.args.get(self.next_arg) {
            Some(arg) => {
                self.next_arg += 1;
                Ok(*arg)
            }
            None => Err(Error::construction(
                at,
                format!("missing argument for '{}'", spec),
            )),
        }
    }

    fn take_str(&mut self, at: usize) -> Result<&'a str> {
        let idx = self.next_arg;
        match self.take(at, 's')? {
            Arg::Str(s) => Ok(s),
            Arg::Int(_) => Err(Error::construction(
                at,
                format!("argument {} is an integer, expected a string", idx),
            )),
        }
    }

    fn take_int(&mut self, at: usize) -> Result<i64> {
        let idx = self.next_arg;
        match self.take(at, 'i')? {
            Arg::Int(i) => Ok(i),
            Arg::Str(_) => Err(Error::construction(
                at,
                format!("argument {} is a string, expected an integer", idx),
            )),
        }
    }

    fn object(&mut self) -> Result<Object> {
        match self.token() {
            Some((_, '{')) => {}
            Some((at, ch)) => {
                return Err(Error::construction(at, format!("expected '{{', found '{}'", ch)));
            }
            None => return Err(Error::construction(0, "empty format")),
        }

        let mut obj = Object::new();
        loop {
            match self.token() {
                Some((_, '}')) => break,
                Some((at, 's')) => {
                    let key = self.take_str(at)?;
                    if key.is_empty() {
                        return Err(Error::construction(at, "empty key"));
                    }
                    let value = self.value()?;
                    obj.put(key.to_string(), value);
                }
                Some((at, ch)) => {
                    return Err(Error::construction(
                        at,
                        format!("expected 's' or '}}', found '{}'", ch),
                    ));
                }
                None => return Err(Error::construction(self.format.len(), "unterminated object")),
            }
        }

        if let Some((at, ch)) = self.token() {
            return Err(Error::construction(
                at,
                format!("unexpected '{}' after object", ch),
            ));
        }
        let unused = self.args.len() - self.next_arg;
        if unused > 0 {
            return Err(Error::construction(
                self.format.len(),
                format!("{} unused argument(s)", unused),
            ));
        }
        Ok(obj)
    }

    fn value(&mut self) -> Result<Value> {
        match self.token() {
            Some((at, 's')) => Ok(Value::String(self.take_str(at)?.to_string())),
            Some((at, 'i')) => Ok(Value::Integer(self.take_int(at)?)),
            Some((at, '{' | '[')) => Err(Error::construction(at, "nested values are not supported")),
            Some((at, ch)) => Err(Error::construction(
                at,
                format!("expected 's' or 'i', found '{}'", ch),
            )),
            None => Err(Error::construction(self.format.len(), "unterminated object")),
        }
    }
}
