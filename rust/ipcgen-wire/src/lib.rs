#![deny(unsafe_code)]

//! Runtime support for Rust code generated by `ipcgen`.
//!
//! Generated modules only rely on what is exported here: [`MessageBuilder`]
//! and [`Encode`] on the sending side, [`Cursor`] and [`Decode`] on the
//! receiving side, [`Endpoint`] as the hook into whatever connection carries
//! the bytes, and the error types that make up the dispatch contract.
//!
//! A message is a big-endian `i16` opcode followed by the parameters of one rpc
//! leg, each encoded positionally:
//!
//! ```
//! use ipcgen_wire::{Cursor, Decode, MessageBuilder};
//!
//! let mut message = MessageBuilder::new(16384);
//! message.put(&["alpha".to_string(), "beta".to_string()][..]).unwrap();
//! let bytes = message.finish();
//!
//! let mut cursor = Cursor::new(&bytes);
//! assert_eq!(i16::decode(&mut cursor).unwrap(), 16384);
//! let names: Vec<String> = Decode::decode(&mut cursor).unwrap();
//! assert_eq!(names, ["alpha", "beta"]);
//! ```

mod codec;
mod cursor;
mod error;
mod message;

pub use codec::{Decode, Encode};
pub use cursor::Cursor;
pub use error::{DecodeError, DispatchError, EncodeError};
pub use message::{Endpoint, MessageBuilder};
