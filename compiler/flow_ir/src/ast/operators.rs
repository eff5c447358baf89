//! Binary and relational operators.

/// Arithmetic operators (`+ - * / %`). `+` doubles as string concatenation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    /// Source-level symbol, used in error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }

    /// Binding strength; higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div | Self::Mod => 2,
            Self::Add | Self::Sub => 1,
        }
    }
}

/// Relational operators (`== != < > <= >=`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RelOp {
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

impl RelOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
        }
    }

    /// `true` for the operators that need an ordering, not just equality.
    pub const fn is_ordering(self) -> bool {
        matches!(self, Self::Lt | Self::Gt | Self::LtEq | Self::GtEq)
    }
}
