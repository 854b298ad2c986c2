/// Token separators between object members and between a key and its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separators {
    /// `,` and `:` with no whitespace
    #[default]
    Compact,
    /// `, ` and `: ` on a single line
    Spaced,
}

impl Separators {
    pub fn member(self) -> &'static str {
        match self {
            Separators::Compact => ",",
            Separators::Spaced => ", ",
        }
    }

    pub fn key_value(self) -> &'static str {
        match self {
            Separators::Compact => ":",
            Separators::Spaced => ": ",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub separators: Separators,
    /// Escape `/` as `\/` in keys and strings
    pub escape_slash: bool,
}

impl Options {
    pub fn compact() -> Self {
        Self::default()
    }

    pub fn spaced() -> Self {
        Self {
            separators: Separators::Spaced,
            ..Self::default()
        }
    }
}
