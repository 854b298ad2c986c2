#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod value;
pub mod pack;
pub mod encode;

#[cfg(feature = "serde")]
pub mod ser;
#[cfg(feature = "json")]
pub mod json;

pub use crate::error::{Error, Result};
pub use crate::options::{Options, Separators};
pub use crate::pack::{Arg, pack};
pub use crate::value::{Object, Value};

use std::io::Write;

/// Compact JSON text for `obj`.
pub fn to_string(obj: &Object) -> Result<String> {
    to_string_with(obj, &Options::default())
}

pub fn to_string_with(obj: &Object, options: &Options) -> Result<String> {
    crate::encode::encode_object_to_string(obj, options)
}

/// Serialize fully, then write in one call, so a failed serialization writes nothing.
pub fn to_writer<W: Write>(mut writer: W, obj: &Object, options: &Options) -> Result<()> {
    let s = to_string_with(obj, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

pub fn to_fmt<W: core::fmt::Write>(out: &mut W, obj: &Object, options: &Options) -> Result<()> {
    crate::encode::encode_object_to_fmt(out, obj, options)
}
