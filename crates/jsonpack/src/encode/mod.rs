//! Encoding pipeline: object → JSON text

pub mod encoders;
pub mod primitives;
pub mod writer;

use crate::{Result, options::Options, value::Object};

pub fn encode_object_to_string(obj: &Object, options: &Options) -> Result<String> {
    // Rough guess: braces plus ~16 bytes per member.
    let mut out = String::with_capacity(2 + obj.len() * 16);
    encode_object_to_fmt(&mut out, obj, options)?;
    tracing::debug!(bytes = out.len(), members = obj.len(), "object serialized");
    Ok(out)
}

pub fn encode_object_to_fmt<W: core::fmt::Write>(
    out: &mut W,
    obj: &Object,
    options: &Options,
) -> Result<()> {
    let mut w = writer::JsonWriter::new(out, options);
    encoders::encode_object(obj, &mut w)
}
