//! Wire-transmissible value kinds.
//!
//! A [`Parameter`] is a name plus a [`ParamType`]. The type is either a
//! [`Scalar`] or a sequence of another type. How a type is spelled in a given
//! output language is not decided here: each codegen target owns a dialect that
//! spells scalars and sequences, so adding a scalar only touches this enum and
//! those dialects.

use std::fmt;
use std::str::FromStr;

use crate::error::SchemaError;

/// A scalar kind that travels on the wire without further structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    /// UTF-8 text, prefixed by its byte length.
    Text,
    U8,
    U16,
    U32,
}

impl Scalar {
    pub const ALL: [Scalar; 4] = [Scalar::Text, Scalar::U8, Scalar::U16, Scalar::U32];

    /// Spelling used in definition files.
    pub fn keyword(self) -> &'static str {
        match self {
            Scalar::Text => "string",
            Scalar::U8 => "u8",
            Scalar::U16 => "u16",
            Scalar::U32 => "u32",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Scalar::ALL.into_iter().find(|s| s.keyword() == keyword)
    }
}

/// The kind of a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamType {
    Scalar(Scalar),
    /// A variable-length ordered sequence of the inner kind.
    Repeated(Box<ParamType>),
}

impl ParamType {
    pub fn repeated(inner: ParamType) -> Self {
        ParamType::Repeated(Box::new(inner))
    }

    /// The innermost scalar, looking through any number of `Repeated` layers.
    pub fn scalar(&self) -> Scalar {
        match self {
            ParamType::Scalar(scalar) => *scalar,
            ParamType::Repeated(inner) => inner.scalar(),
        }
    }
}

impl From<Scalar> for ParamType {
    fn from(scalar: Scalar) -> Self {
        ParamType::Scalar(scalar)
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Scalar(scalar) => f.write_str(scalar.keyword()),
            ParamType::Repeated(inner) => write!(f, "repeated<{inner}>"),
        }
    }
}

impl FromStr for ParamType {
    type Err = SchemaError;

    fn from_str(spelling: &str) -> Result<Self, Self::Err> {
        let trimmed = spelling.trim();
        if let Some(inner) = trimmed
            .strip_prefix("repeated<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return inner
                .parse::<ParamType>()
                .map(ParamType::repeated)
                .map_err(|_| SchemaError::UnknownType {
                    spelling: spelling.to_string(),
                });
        }
        Scalar::from_keyword(trimmed)
            .map(ParamType::Scalar)
            .ok_or_else(|| SchemaError::UnknownType {
                spelling: spelling.to_string(),
            })
    }
}

/// A named, typed value carried by one leg of an rpc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: ParamType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<ParamType>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, Scalar::Text)
    }

    pub fn u8(name: impl Into<String>) -> Self {
        Self::new(name, Scalar::U8)
    }

    pub fn u16(name: impl Into<String>) -> Self {
        Self::new(name, Scalar::U16)
    }

    pub fn u32(name: impl Into<String>) -> Self {
        Self::new(name, Scalar::U32)
    }

    /// Turns `inner` into a sequence of its kind. The name is kept.
    pub fn repeated(inner: Parameter) -> Self {
        Self {
            name: inner.name,
            ty: ParamType::repeated(inner.ty),
        }
    }
}
