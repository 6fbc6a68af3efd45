use std::fmt;

use ipcgen_types::{Opcode, SchemaError};

#[derive(Debug)]
pub enum CodegenError {
    /// The interface failed validation before planning started.
    Schema(SchemaError),
    /// Two incoming messages of one role would share a dispatch entry.
    OpcodeCollision { interface: String, opcode: Opcode },
    /// Two names render to the same identifier in the target language.
    NameCollision {
        interface: String,
        first: String,
        second: String,
        rendered: String,
    },
    /// A name renders to an identifier the generated code cannot declare.
    UnusableName {
        interface: String,
        name: String,
        rendered: String,
    },
    Format(fmt::Error),
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::Schema(e) => write!(f, "{e}"),
            CodegenError::OpcodeCollision { interface, opcode } => write!(
                f,
                "interface {interface}: opcode {opcode} is dispatched more than once"
            ),
            CodegenError::NameCollision {
                interface,
                first,
                second,
                rendered,
            } => write!(
                f,
                "interface {interface}: {first} and {second} both become `{rendered}`"
            ),
            CodegenError::UnusableName {
                interface,
                name,
                rendered,
            } => write!(
                f,
                "interface {interface}: {name} becomes `{rendered}`, which cannot be used as a name there"
            ),
            CodegenError::Format(e) => write!(f, "failed to render output: {e}"),
        }
    }
}

impl std::error::Error for CodegenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodegenError::Schema(e) => Some(e),
            CodegenError::Format(e) => Some(e),
            CodegenError::OpcodeCollision { .. }
            | CodegenError::NameCollision { .. }
            | CodegenError::UnusableName { .. } => None,
        }
    }
}

impl From<SchemaError> for CodegenError {
    fn from(e: SchemaError) -> Self {
        CodegenError::Schema(e)
    }
}

impl From<fmt::Error> for CodegenError {
    fn from(e: fmt::Error) -> Self {
        CodegenError::Format(e)
    }
}
