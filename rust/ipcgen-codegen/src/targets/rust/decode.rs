//! Rust decode routines and the dispatch function.
//!
//! Routines are generic over the role trait so one module serves every
//! implementor. Each parameter is decoded with `?`, so a failure returns
//! before the handler is reached.

use std::fmt;

use super::types::{RustDialect, handler_name, param_name, parser_name};
use crate::code_writer::CodeWriter;
use crate::plan::{DispatchTable, Message};
use crate::spelling::spell;
use crate::{cw_write, cw_writeln};

pub fn generate_parser(
    w: &mut CodeWriter<&mut String>,
    message: &Message<'_>,
    trait_name: &str,
) -> fmt::Result {
    cw_writeln!(
        w,
        "pub(super) fn {}<H: {trait_name}>(handler: &mut H, cursor: &mut Cursor<'_>) -> Result<(), DecodeError> {{",
        parser_name(message)
    )?;
    {
        let _indent = w.indent();
        for param in message.params() {
            cw_writeln!(
                w,
                "let {}: {} = Decode::decode(cursor)?;",
                param_name(&param.name),
                spell(&RustDialect, &param.ty).simple
            )?;
        }
        cw_write!(w, "handler.{}(", handler_name(message))?;
        w.write_separated(message.params(), ", ", |w, param| {
            let name = param_name(&param.name);
            if spell(&RustDialect, &param.ty).by_reference {
                cw_write!(w, "&{name}")
            } else {
                w.write(&name)
            }
        })?;
        w.writeln(");")?;
        w.writeln("Ok(())")?;
    }
    w.writeln("}")
}

pub fn generate_dispatch(
    w: &mut CodeWriter<&mut String>,
    table: &DispatchTable<'_>,
    trait_name: &str,
) -> fmt::Result {
    cw_writeln!(
        w,
        "pub(super) fn dispatch<H: {trait_name}>(handler: &mut H, input: &[u8]) -> Result<(), DispatchError> {{"
    )?;
    {
        let _indent = w.indent();
        w.writeln("let mut cursor = Cursor::new(input);")?;
        w.writeln("let opcode: i16 = Decode::decode(&mut cursor)?;")?;
        w.block("match opcode", |w| {
            for message in table.iter() {
                cw_writeln!(
                    w,
                    "{} => {}(handler, &mut cursor)?,",
                    message.opcode(),
                    parser_name(message)
                )?;
            }
            w.writeln("_ => return Err(DispatchError::UnknownOpcode(opcode)),")
        })?;
        w.writeln("Ok(())")?;
    }
    w.writeln("}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipcgen_types::{Opcode, Parameter, Rpc};

    #[test]
    fn parser_decodes_every_parameter_before_the_handler() {
        let rpc = Rpc::new("Resize")
            .send(Parameter::text("title"))
            .send(Parameter::u16("width"));
        let message = Message::request(&rpc, Opcode::new(3));

        let mut out = String::new();
        let mut w = CodeWriter::with_indent_spaces(&mut out, 4);
        generate_parser(&mut w, &message, "WindowServerIpc").unwrap();

        assert_eq!(
            out,
            "pub(super) fn parse_resize_request<H: WindowServerIpc>(handler: &mut H, cursor: &mut Cursor<'_>) -> Result<(), DecodeError> {\n\
             \x20   let title: ::std::string::String = Decode::decode(cursor)?;\n\
             \x20   let width: u16 = Decode::decode(cursor)?;\n\
             \x20   handler.process_resize_request(&title, width);\n\
             \x20   Ok(())\n\
             }\n"
        );
    }

    #[test]
    fn dispatch_arms_in_table_order() {
        let show = Rpc::new("ServerShowClients").receive(Parameter::text("client"));
        let ask = Rpc::new("GetParameterFromUser");
        let interface = ipcgen_types::Interface::new("DaemonController")
            .send(Rpc::new("ClientConnect"))
            .send(show)
            .receive(ask);
        let plan = crate::plan::RolePlan::new(&interface, crate::plan::Role::Client).unwrap();

        let mut out = String::new();
        let mut w = CodeWriter::with_indent_spaces(&mut out, 4);
        generate_dispatch(&mut w, &plan.dispatch, "DaemonControllerClientIpc").unwrap();

        let reply_arm = out
            .find("-2 => parse_server_show_clients_reply(handler, &mut cursor)?,")
            .unwrap();
        let request_arm = out
            .find("16384 => parse_get_parameter_from_user_request(handler, &mut cursor)?,")
            .unwrap();
        assert!(reply_arm < request_arm);
        assert!(out.contains("        _ => return Err(DispatchError::UnknownOpcode(opcode)),\n"));
    }
}
