//! C++ send helpers.

use std::fmt;

use super::types::{param_name, parameter_list, sender_name};
use crate::code_writer::CodeWriter;
use crate::cw_writeln;
use crate::plan::Message;
use crate::spelling::Convention;

/// A public method that writes the opcode, then every parameter, then sends.
pub fn generate_sender(w: &mut CodeWriter<&mut String>, message: &Message<'_>) -> fmt::Result {
    let header = format!(
        "void {}({})",
        sender_name(message),
        parameter_list(message.params(), Convention::Send)
    );
    w.block(&header, |w| {
        cw_writeln!(
            w,
            "EncodeToBuffer(static_cast<int16_t>({}), SendCursor());",
            message.opcode()
        )?;
        for param in message.params() {
            cw_writeln!(w, "EncodeToBuffer({}, SendCursor());", param_name(&param.name))?;
        }
        w.writeln("Send();")
    })
}
