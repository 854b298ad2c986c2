use core::fmt::Write;

use crate::{
    Result,
    encode::writer::JsonWriter,
    value::{Object, Value},
};

pub fn encode_value<W: Write>(value: &Value, w: &mut JsonWriter<'_, W>) -> Result<()> {
    match value {
        Value::Integer(i) => w.integer(*i),
        Value::String(s) => w.string(s),
    }
}

pub fn encode_object<W: Write>(obj: &Object, w: &mut JsonWriter<'_, W>) -> Result<()> {
    w.begin_object()?;
    for (k, v) in obj {
        w.key(k)?;
        encode_value(v, w)?;
    }
    w.end_object()
}
