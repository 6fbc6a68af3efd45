//! Rust send helpers, emitted as default methods of the role trait.

use std::fmt;

use super::types::{RustDialect, param_name, parameter_list, sender_name};
use crate::code_writer::CodeWriter;
use crate::cw_writeln;
use crate::plan::Message;
use crate::spelling::{Convention, spell};

pub fn generate_sender(w: &mut CodeWriter<&mut String>, message: &Message<'_>) -> fmt::Result {
    let header = format!(
        "fn {}(&mut self{}) -> Result<(), EncodeError>",
        sender_name(message),
        parameter_list(message.params(), Convention::Send)
    );
    w.block(&header, |w| {
        cw_writeln!(w, "let mut message = MessageBuilder::new({});", message.opcode())?;
        for param in message.params() {
            let name = param_name(&param.name);
            if spell(&RustDialect, &param.ty).by_reference {
                cw_writeln!(w, "message.put({name})?;")?;
            } else {
                cw_writeln!(w, "message.put(&{name})?;")?;
            }
        }
        w.writeln("self.send(message.finish());")?;
        w.writeln("Ok(())")
    })
}
