#![deny(unsafe_code)]

//! The ipcgen definition model.
//!
//! An [`Interface`] is a bidirectional contract between a client and a server.
//! It holds two ordered lists of [`Rpc`]s: `sends`, which the client initiates,
//! and `receives`, which the server initiates. Each rpc carries an ordered list
//! of request [`Parameter`]s and an ordered list of reply parameters.
//!
//! Position in those lists is the whole wire identity of an rpc: sends are
//! numbered from 1, receives from 0x4000, and replies reuse the request opcode
//! negated (see [`Opcode`]). Nothing about the numbering is stored; it is
//! derived again by [`Interface::numbered`] whenever codegen needs it.
//!
//! Graphs come either from the builder methods:
//!
//! ```
//! use ipcgen_types::{Definitions, Interface, Parameter, Rpc};
//!
//! let daemon = Interface::new("DaemonController")
//!     .send(Rpc::new("ClientConnect").send(Parameter::text("server")))
//!     .receive(
//!         Rpc::new("GetParameterFromUser")
//!             .send(Parameter::repeated(Parameter::text("name")))
//!             .receive(Parameter::repeated(Parameter::text("value"))),
//!     );
//! let definitions = Definitions::new(vec![daemon]).unwrap();
//! assert_eq!(definitions.interfaces().len(), 1);
//! ```
//!
//! or from a JSON definition file via [`Definitions::load`].

mod definitions;
mod error;
mod interface;
mod names;
mod opcode;
mod param;
mod rpc;

pub use definitions::Definitions;
pub use error::{LoadError, SchemaError};
pub use interface::{Interface, RpcList};
pub use names::RESERVED_PARAMETER_NAMES;
pub use opcode::Opcode;
pub use param::{ParamType, Parameter, Scalar};
pub use rpc::Rpc;
