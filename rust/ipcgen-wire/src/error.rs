use std::fmt;

/// A value that cannot be represented on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Strings and sequences carry a 16-bit length prefix.
    TooLong { len: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::TooLong { len } => write!(
                f,
                "length {len} does not fit the 16-bit length prefix (max {})",
                u16::MAX
            ),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Failure to decode a value from an incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The message ended before the value did.
    Truncated { needed: usize, remaining: usize },
    /// A string payload is not UTF-8.
    InvalidUtf8,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Truncated { needed, remaining } => write!(
                f,
                "truncated message: needed {needed} bytes, {remaining} left"
            ),
            DecodeError::InvalidUtf8 => f.write_str("string payload is not valid UTF-8"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Outcome of a failed dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The opcode or one of the parameters could not be decoded. The handler
    /// was not called.
    Decode(DecodeError),
    /// No rpc of this interface uses the opcode. The message was ignored and
    /// the connection may keep going.
    UnknownOpcode(i16),
}

impl DispatchError {
    pub fn is_unknown_opcode(&self) -> bool {
        matches!(self, DispatchError::UnknownOpcode(_))
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Decode(e) => write!(f, "decode error: {e}"),
            DispatchError::UnknownOpcode(opcode) => write!(f, "unknown opcode {opcode}"),
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::Decode(e) => Some(e),
            DispatchError::UnknownOpcode(_) => None,
        }
    }
}

impl From<DecodeError> for DispatchError {
    fn from(e: DecodeError) -> Self {
        DispatchError::Decode(e)
    }
}
