use core::fmt::Write;

use crate::{
    Result,
    encode::primitives,
    error::Error,
    options::Options,
};

/// Token-level JSON emitter over any `fmt::Write` sink.
pub struct JsonWriter<'a, W: Write> {
    out: W,
    opts: &'a Options,
    members: usize,
}

fn sink_failed(_: core::fmt::Error) -> Error {
    Error::Serialization("output sink rejected write".to_string())
}

impl<'a, W: Write> JsonWriter<'a, W> {
    pub fn new(out: W, opts: &'a Options) -> Self {
        Self {
            out,
            opts,
            members: 0,
        }
    }

    pub fn begin_object(&mut self) -> Result<()> {
        self.members = 0;
        self.out.write_char('{').map_err(sink_failed)
    }

    pub fn end_object(&mut self) -> Result<()> {
        self.out.write_char('}').map_err(sink_failed)
    }

    /// Emit a member key, preceded by the member separator when it is not the first.
    pub fn key(&mut self, key: &str) -> Result<()> {
        if self.members > 0 {
            self.out
                .write_str(self.opts.separators.member())
                .map_err(sink_failed)?;
        }
        self.members += 1;
        primitives::escape_and_quote_into(&mut self.out, key, self.opts.escape_slash)
            .map_err(sink_failed)?;
        self.out
            .write_str(self.opts.separators.key_value())
            .map_err(sink_failed)
    }

    pub fn integer(&mut self, i: i64) -> Result<()> {
        primitives::format_integer_into(&mut self.out, i).map_err(sink_failed)
    }

    pub fn string(&mut self, s: &str) -> Result<()> {
        primitives::escape_and_quote_into(&mut self.out, s, self.opts.escape_slash)
            .map_err(sink_failed)
    }
}
