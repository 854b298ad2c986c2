use core::fmt::{self, Write};

/// Short escape for characters JSON names explicitly; `None` for everything else.
fn short_escape(c: char, escape_slash: bool) -> Option<&'static str> {
    Some(match c {
        '"' => "\\\"",
        '\\' => "\\\\",
        '/' if escape_slash => "\\/",
        '\u{0008}' => "\\b",
        '\u{000C}' => "\\f",
        '\n' => "\\n",
        '\r' => "\\r",
        '\t' => "\\t",
        _ => return None,
    })
}

fn is_control(c: char) -> bool {
    (c as u32) < 0x20
}

/// Write `s` as a quoted JSON string. Unescaped runs are copied as slices.
pub fn escape_and_quote_into<W: Write + ?Sized>(
    out: &mut W,
    s: &str,
    escape_slash: bool,
) -> fmt::Result {
    out.write_char('"')?;
    let mut start = 0;
    for (idx, ch) in s.char_indices() {
        let short = short_escape(ch, escape_slash);
        if short.is_none() && !is_control(ch) {
            continue;
        }
        if start < idx {
            out.write_str(&s[start..idx])?;
        }
        match short {
            Some(esc) => out.write_str(esc)?,
            None => write!(out, "\\u{:04X}", ch as u32)?,
        }
        start = idx + ch.len_utf8();
    }
    if start < s.len() {
        out.write_str(&s[start..])?;
    }
    out.write_char('"')
}

pub fn escape_and_quote(s: &str, escape_slash: bool) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    // Writing into a String cannot fail.
    let _ = escape_and_quote_into(&mut out, s, escape_slash);
    out
}

pub fn format_integer_into<W: Write + ?Sized>(out: &mut W, i: i64) -> fmt::Result {
    write!(out, "{}", i)
}
