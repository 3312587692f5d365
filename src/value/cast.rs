//! Targets for explicit casts.

/// Target type of `CAST(expr AS <type>)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastType {
    Signed,
    Double,
    Char,
}

impl CastType {
    pub const ALL: [CastType; 3] = [CastType::Signed, CastType::Double, CastType::Char];

    /// Get the SQL spelling of this cast target
    pub fn as_str(&self) -> &'static str {
        match self {
            CastType::Signed => "SIGNED",
            CastType::Double => "DOUBLE",
            CastType::Char => "CHAR",
        }
    }
}
