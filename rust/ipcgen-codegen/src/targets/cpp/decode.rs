//! C++ decode routines and the dispatch entry point.
//!
//! A decode routine returns `false` as soon as one parameter fails to decode,
//! before the handler runs. `Dispatch` turns that into `-1`, and an opcode
//! with no entry into `-2`.

use std::fmt;

use super::types::{CppDialect, handler_name, param_name, parser_name};
use crate::code_writer::CodeWriter;
use crate::plan::{DispatchTable, Message};
use crate::spelling::spell;
use crate::{cw_write, cw_writeln};

pub const DECODE_FAILED: i32 = -1;
pub const UNKNOWN_OPCODE: i32 = -2;

pub fn generate_parser(w: &mut CodeWriter<&mut String>, message: &Message<'_>) -> fmt::Result {
    let header = format!("bool {}(OutputCursor* cursor)", parser_name(message));
    w.block(&header, |w| {
        for param in message.params() {
            let name = param_name(&param.name);
            cw_writeln!(w, "{} {name};", spell(&CppDialect, &param.ty).simple)?;
            cw_writeln!(w, "if (!DecodeFromBuffer(cursor, &{name}))")?;
            {
                let _indent = w.indent();
                w.writeln("return false;")?;
            }
        }
        cw_write!(w, "{}(", handler_name(message))?;
        w.write_separated(message.params(), ", ", |w, param| {
            w.write(&param_name(&param.name))
        })?;
        w.writeln(");")?;
        w.writeln("return true;")
    })
}

pub fn generate_dispatch(w: &mut CodeWriter<&mut String>, table: &DispatchTable<'_>) -> fmt::Result {
    w.block("int Dispatch(OutputCursor* cursor)", |w| {
        w.writeln("int16_t num;")?;
        w.writeln("if (!DecodeFromBuffer(cursor, &num))")?;
        {
            let _indent = w.indent();
            cw_writeln!(w, "return {DECODE_FAILED};")?;
        }
        w.blank_line()?;

        w.block("switch (num)", |w| {
            for message in table.iter() {
                cw_writeln!(w, "case {}:", message.opcode())?;
                let _indent = w.indent();
                cw_writeln!(w, "if (!{}(cursor))", parser_name(message))?;
                {
                    let _indent = w.indent();
                    cw_writeln!(w, "return {DECODE_FAILED};")?;
                }
                w.writeln("break;")?;
                w.blank_line()?;
            }
            w.writeln("default:")?;
            let _indent = w.indent();
            cw_writeln!(w, "return {UNKNOWN_OPCODE};")
        })?;
        w.blank_line()?;
        w.writeln("return 0;")
    })
}
