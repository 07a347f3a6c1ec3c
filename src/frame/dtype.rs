//! Column dtype kinds
//!
//! Each dtype is summarised by a single-character kind code:
//!
//! | code | kind |
//! |------|------|
//! | `b` | boolean |
//! | `i` | signed integer |
//! | `u` | unsigned integer |
//! | `f` | floating point |
//! | `c` | complex floating point |
//! | `m` | timedelta |
//! | `M` | datetime |
//! | `O` | object |
//! | `S` | byte string |
//! | `U` | unicode string |
//! | `V` | raw data (void) |

use std::fmt;

use super::errors::{FrameError, FrameResult};

/// Storage kind of a column dtype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DTypeKind {
    Bool,
    SignedInt,
    UnsignedInt,
    Float,
    Complex,
    Timedelta,
    Datetime,
    Object,
    Bytes,
    Unicode,
    Void,
}

impl DTypeKind {
    /// Returns the kind code
    pub fn code(&self) -> char {
        match self {
            DTypeKind::Bool => 'b',
            DTypeKind::SignedInt => 'i',
            DTypeKind::UnsignedInt => 'u',
            DTypeKind::Float => 'f',
            DTypeKind::Complex => 'c',
            DTypeKind::Timedelta => 'm',
            DTypeKind::Datetime => 'M',
            DTypeKind::Object => 'O',
            DTypeKind::Bytes => 'S',
            DTypeKind::Unicode => 'U',
            DTypeKind::Void => 'V',
        }
    }

    /// Looks up a kind by its code (case-sensitive: `m` and `M` differ)
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'b' => Some(DTypeKind::Bool),
            'i' => Some(DTypeKind::SignedInt),
            'u' => Some(DTypeKind::UnsignedInt),
            'f' => Some(DTypeKind::Float),
            'c' => Some(DTypeKind::Complex),
            'm' => Some(DTypeKind::Timedelta),
            'M' => Some(DTypeKind::Datetime),
            'O' => Some(DTypeKind::Object),
            'S' => Some(DTypeKind::Bytes),
            'U' => Some(DTypeKind::Unicode),
            'V' => Some(DTypeKind::Void),
            _ => None,
        }
    }

    /// Parses a dtype name such as `int64`, `float32`, `datetime64[ns]`
    /// or `object`.
    ///
    /// A single character is treated as a kind code.
    pub fn from_dtype_name(name: &str) -> FrameResult<Self> {
        let trimmed = name.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_code(c).ok_or_else(|| FrameError::UnknownDType(name.to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        // Timezone-aware and unit-qualified datetimes: datetime64[ns, UTC]
        let base = lower.split('[').next().unwrap_or_default();

        let kind = match base {
            "bool" | "boolean" => DTypeKind::Bool,
            "int" | "int8" | "int16" | "int32" | "int64" => DTypeKind::SignedInt,
            "uint" | "uint8" | "uint16" | "uint32" | "uint64" => DTypeKind::UnsignedInt,
            "float" | "float16" | "float32" | "float64" | "double" => DTypeKind::Float,
            "complex" | "complex64" | "complex128" => DTypeKind::Complex,
            "timedelta64" | "timedelta" => DTypeKind::Timedelta,
            "datetime64" | "datetime" => DTypeKind::Datetime,
            "object" | "category" | "string" => DTypeKind::Object,
            "bytes" | "bytes_" => DTypeKind::Bytes,
            "str" | "str_" | "unicode" => DTypeKind::Unicode,
            "void" => DTypeKind::Void,
            _ => return Err(FrameError::UnknownDType(name.to_string())),
        };

        Ok(kind)
    }
}

impl fmt::Display for DTypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
