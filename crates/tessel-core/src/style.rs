//! Terminal styling for tree dumps, keyed by what a span of text denotes
//! rather than by color.

use std::fmt;

/// What a piece of dump text stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Node kinds (`Add`, `Main`, ...).
    Kind,
    /// Result types.
    Type,
    /// Symbol ids and lane owners.
    Symbol,
    /// Literal values and built-in names.
    Literal,
    /// Declared input and output names.
    Name,
}

impl Role {
    /// SGR parameter for this role.
    fn sgr(self) -> &'static str {
        match self {
            Role::Kind => "34",
            Role::Type | Role::Symbol => "2",
            Role::Literal => "32",
            Role::Name => "33",
        }
    }
}

/// Whether dump text is decorated with ANSI escapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    ansi: bool,
}

impl Style {
    pub const PLAIN: Self = Self { ansi: false };
    pub const ANSI: Self = Self { ansi: true };

    pub fn new(ansi: bool) -> Self {
        Self { ansi }
    }

    pub fn is_ansi(self) -> bool {
        self.ansi
    }

    /// Wrap `value` so that it displays in the color of `role`.
    pub fn paint<T: fmt::Display>(self, role: Role, value: T) -> Painted<T> {
        Painted {
            role,
            value,
            ansi: self.ansi,
        }
    }
}

/// A value displayed under a [`Role`].
#[derive(Clone, Copy, Debug)]
pub struct Painted<T> {
    role: Role,
    value: T,
    ansi: bool,
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ansi {
            write!(f, "\x1b[{}m{}\x1b[0m", self.role.sgr(), self.value)
        } else {
            fmt::Display::fmt(&self.value, f)
        }
    }
}
