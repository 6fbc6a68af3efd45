use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::interface::RpcList;

/// A definition graph that violates one of the model invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Send opcodes would run into the receive space at 0x4000.
    TooManySends { interface: String, count: usize },
    /// Receive opcodes would run past `i16::MAX`.
    TooManyReceives { interface: String, count: usize },
    DuplicateInterface { name: String },
    DuplicateRpc {
        interface: String,
        list: RpcList,
        name: String,
    },
    DuplicateParameter { rpc: String, name: String },
    InvalidIdentifier { name: String },
    /// A parameter name that generated routines use for their own locals.
    ReservedName { rpc: String, name: String },
    UnknownType { spelling: String },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::TooManySends { interface, count } => write!(
                f,
                "interface {interface}: {count} sends declared, at most {} fit below the receive space",
                RpcList::Sends.capacity()
            ),
            SchemaError::TooManyReceives { interface, count } => write!(
                f,
                "interface {interface}: {count} receives declared, at most {} fit in a 16-bit opcode",
                RpcList::Receives.capacity()
            ),
            SchemaError::DuplicateInterface { name } => {
                write!(f, "interface {name} is declared more than once")
            }
            SchemaError::DuplicateRpc {
                interface,
                list,
                name,
            } => write!(
                f,
                "interface {interface}: rpc {name} appears more than once in {list}"
            ),
            SchemaError::DuplicateParameter { rpc, name } => {
                write!(f, "rpc {rpc}: parameter {name} appears more than once")
            }
            SchemaError::InvalidIdentifier { name } => {
                write!(f, "{name:?} is not a valid identifier")
            }
            SchemaError::ReservedName { rpc, name } => write!(
                f,
                "rpc {rpc}: parameter name {name} is reserved for generated code"
            ),
            SchemaError::UnknownType { spelling } => {
                write!(f, "unknown parameter type {spelling:?}")
            }
        }
    }
}

impl std::error::Error for SchemaError {}

/// Failure to turn a definition file into a validated [`Definitions`](crate::Definitions).
#[derive(Debug)]
pub enum LoadError {
    Read { path: PathBuf, source: io::Error },
    /// The document is not JSON, or a field has the wrong shape.
    Parse { message: String },
    /// The document has no top-level `interfaces` list.
    MissingInterfaces,
    Schema(SchemaError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Read { path, source } => {
                write!(f, "could not read file {}: {source}", path.display())
            }
            LoadError::Parse { message } => write!(f, "malformed definition: {message}"),
            LoadError::MissingInterfaces => f.write_str("must define an 'interfaces' list"),
            LoadError::Schema(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Read { source, .. } => Some(source),
            LoadError::Schema(e) => Some(e),
            LoadError::Parse { .. } | LoadError::MissingInterfaces => None,
        }
    }
}

impl From<SchemaError> for LoadError {
    fn from(e: SchemaError) -> Self {
        LoadError::Schema(e)
    }
}
