//! How a target language writes each parameter type.

use ipcgen_types::{ParamType, Scalar};

/// The three spellings of one parameter type in a target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spelling {
    /// Used for locals and sequence elements.
    pub simple: String,
    /// Used for parameters of send helpers.
    pub send: String,
    /// Used for parameters of handlers.
    pub receive: String,
    /// `send` and `receive` borrow a value of type `simple` instead of copying it.
    pub by_reference: bool,
}

impl Spelling {
    /// A type passed by value: all three spellings agree.
    pub fn by_value(name: &str) -> Self {
        Self {
            simple: name.to_owned(),
            send: name.to_owned(),
            receive: name.to_owned(),
            by_reference: false,
        }
    }

    /// A type passed as `borrowed` and held as `simple`.
    pub fn by_reference(simple: String, borrowed: String) -> Self {
        Self {
            simple,
            send: borrowed.clone(),
            receive: borrowed,
            by_reference: true,
        }
    }
}

/// Calling convention of a generated parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// Send helpers, called by user code with values to write.
    Send,
    /// Handlers, called by generated code with decoded values.
    Receive,
}

impl Spelling {
    pub fn for_convention(&self, convention: Convention) -> &str {
        match convention {
            Convention::Send => &self.send,
            Convention::Receive => &self.receive,
        }
    }
}

pub trait Dialect {
    fn scalar(&self, scalar: Scalar) -> Spelling;

    /// Spelling of a sequence whose elements are spelled `element`.
    fn sequence(&self, element: &str) -> Spelling;
}

pub fn spell<D: Dialect + ?Sized>(dialect: &D, ty: &ParamType) -> Spelling {
    match ty {
        ParamType::Scalar(scalar) => dialect.scalar(*scalar),
        ParamType::Repeated(inner) => dialect.sequence(&spell(dialect, inner).simple),
    }
}
