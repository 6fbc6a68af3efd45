#![deny(unsafe_code)]

//! Code generation for ipcgen interfaces.
//!
//! An interface lists the rpcs its client initiates (`sends`) and the rpcs its
//! server initiates (`receives`). Generation happens per role: [`plan`] works
//! out which legs a role writes and which it decodes, and a target in
//! [`targets`] renders that plan as C++ or Rust source.
//!
//! ```
//! use ipcgen_codegen::Role;
//! use ipcgen_codegen::targets::Language;
//! use ipcgen_types::{Definitions, Interface, Parameter, Rpc};
//!
//! let definitions = Definitions::new(vec![
//!     Interface::new("Echo").send(
//!         Rpc::new("Say")
//!             .send(Parameter::text("text"))
//!             .receive(Parameter::text("text")),
//!     ),
//! ])
//! .unwrap();
//!
//! let header = Language::Cpp.generate(&definitions, Role::Server).unwrap();
//! assert!(header.contains("virtual void ProcessSayRequest(const string& text) = 0;"));
//! assert!(header.contains("void SendReplyForSay(const string& text) {"));
//! ```

pub mod code_writer;
mod error;
mod naming;
pub mod plan;
pub mod spelling;
pub mod targets;

pub use error::CodegenError;
pub use plan::{Direction, Leg, Role, RolePlan};
pub use targets::Language;
