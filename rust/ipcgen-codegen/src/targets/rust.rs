//! Rust module generation.
//!
//! Every interface becomes one module per role holding a trait named after the
//! role. Handlers are required methods, send helpers and `dispatch` are
//! provided ones, and the decode routines live in a private submodule. The
//! generated code depends only on `ipcgen-wire`.
//!
//! Intended for use in build.rs scripts:
//!
//! ```ignore
//! let definitions = Definitions::load("proto/daemon-controller.json")?;
//! let code = ipcgen_codegen::targets::rust::generate(&definitions, Role::Client)?;
//! std::fs::write(out_dir.join("client.rs"), code)?;
//! ```

mod decode;
mod encode;
mod types;

use std::fmt;

use ipcgen_types::{Definitions, Interface};

use self::decode::{generate_dispatch, generate_parser};
use self::encode::generate_sender;
use self::types::{check_names, handler_name, module_name, parameter_list, trait_name};
use crate::code_writer::CodeWriter;
use crate::cw_writeln;
use crate::error::CodegenError;
use crate::naming::Scope;
use crate::plan::{Role, RolePlan};
use crate::spelling::Convention;

pub use self::types::RustDialect;

/// One module per interface, separated by blank lines.
pub fn generate(definitions: &Definitions, role: Role) -> Result<String, CodegenError> {
    let mut modules = Scope::new(&[]);
    for interface in definitions.interfaces() {
        let name = interface.name.as_str();
        modules.claim(name, name, module_name(name, role))?;
    }

    let mut out = String::new();
    for (i, interface) in definitions.interfaces().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&generate_interface(interface, role)?);
    }
    Ok(out)
}

pub fn generate_interface(interface: &Interface, role: Role) -> Result<String, CodegenError> {
    let plan = RolePlan::new(interface, role)?;
    check_names(&plan)?;
    let mut out = String::new();
    let mut w = CodeWriter::with_indent_spaces(&mut out, 4);
    generate_module(&mut w, &plan)?;
    Ok(out)
}

fn generate_module(w: &mut CodeWriter<&mut String>, plan: &RolePlan<'_>) -> fmt::Result {
    let name = &plan.interface.name;
    let trait_name = trait_name(name, plan.role);

    w.writeln("#[allow(clippy::all, unused)]")?;
    w.block(&format!("pub mod {}", module_name(name, plan.role)), |w| {
        w.writeln("use ::ipcgen_wire::{DispatchError, EncodeError, Endpoint, MessageBuilder};")?;
        w.blank_line()?;
        generate_trait(w, plan, &trait_name)?;
        w.blank_line()?;
        generate_private(w, plan, &trait_name)
    })
}

fn generate_trait(
    w: &mut CodeWriter<&mut String>,
    plan: &RolePlan<'_>,
    trait_name: &str,
) -> fmt::Result {
    cw_writeln!(
        w,
        "/// {} side of the `{}` interface.",
        plan.role.label(),
        plan.interface.name
    )?;
    w.block(&format!("pub trait {trait_name}: Endpoint"), |w| {
        w.comment("//", "Implement these to handle incoming messages.")?;
        for message in plan.handlers() {
            cw_writeln!(
                w,
                "fn {}(&mut self{});",
                handler_name(message),
                parameter_list(message.params(), Convention::Receive)
            )?;
        }
        w.blank_line()?;

        w.comment("//", "Use these to send messages to the peer.")?;
        for message in &plan.outgoing {
            generate_sender(w, message)?;
            w.blank_line()?;
        }

        w.writeln("/// Decodes one incoming message and calls the matching handler.")?;
        w.writeln("fn dispatch(&mut self, input: &[u8]) -> Result<(), DispatchError>")?;
        w.writeln("where")?;
        {
            let _indent = w.indent();
            w.writeln("Self: Sized,")?;
        }
        w.writeln("{")?;
        {
            let _indent = w.indent();
            w.writeln("private::dispatch(self, input)")?;
        }
        w.writeln("}")
    })
}

fn generate_private(
    w: &mut CodeWriter<&mut String>,
    plan: &RolePlan<'_>,
    trait_name: &str,
) -> fmt::Result {
    w.comment("//", "Generated plumbing, not meant to be called directly.")?;
    w.block("mod private", |w| {
        cw_writeln!(w, "use super::{trait_name};")?;
        w.writeln("use ::ipcgen_wire::{Cursor, Decode, DecodeError, DispatchError};")?;
        w.blank_line()?;
        for message in plan.dispatch.iter() {
            generate_parser(w, message, trait_name)?;
            w.blank_line()?;
        }
        generate_dispatch(w, &plan.dispatch, trait_name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipcgen_types::{Parameter, Rpc};

    fn daemon_controller() -> Interface {
        Interface::new("DaemonController")
            .send(Rpc::new("ClientConnect").send(Parameter::text("server")))
            .send(
                Rpc::new("ServerShowClients")
                    .receive(Parameter::repeated(Parameter::text("client"))),
            )
            .receive(
                Rpc::new("GetParameterFromUser")
                    .send(Parameter::repeated(Parameter::text("name"))),
            )
    }

    mod client {
        use super::*;

        #[test]
        fn module_and_trait() {
            let out = generate_interface(&daemon_controller(), Role::Client).unwrap();
            assert!(out.starts_with(
                "#[allow(clippy::all, unused)]\npub mod daemon_controller_client {\n"
            ));
            assert!(out.contains(
                "    pub trait DaemonControllerClientIpc: Endpoint {\n"
            ));
            assert!(out.ends_with("    }\n}\n"));
        }

        #[test]
        fn handlers_for_incoming_legs_only() {
            let out = generate_interface(&daemon_controller(), Role::Client).unwrap();
            assert!(out.contains(
                "        fn process_server_show_clients_reply(&mut self, client: &[::std::string::String]);\n"
            ));
            assert!(out.contains(
                "        fn process_get_parameter_from_user_request(&mut self, name: &[::std::string::String]);\n"
            ));
            assert!(!out.contains("process_client_connect"));
            assert!(!out.contains("send_reply_for"));
        }

        #[test]
        fn senders_for_outgoing_legs() {
            let out = generate_interface(&daemon_controller(), Role::Client).unwrap();
            assert!(out.contains(
                "        fn send_request_client_connect(&mut self, server: &str) -> Result<(), EncodeError> {\n"
            ));
            assert!(out.contains(
                "        fn send_request_server_show_clients(&mut self) -> Result<(), EncodeError> {\n"
            ));
        }

        #[test]
        fn dispatch_wiring() {
            let out = generate_interface(&daemon_controller(), Role::Client).unwrap();
            assert!(out.contains(
                "        fn dispatch(&mut self, input: &[u8]) -> Result<(), DispatchError>\n\
                 \x20       where\n\
                 \x20           Self: Sized,\n\
                 \x20       {\n\
                 \x20           private::dispatch(self, input)\n\
                 \x20       }\n"
            ));
            assert!(out.contains("        use super::DaemonControllerClientIpc;\n"));
            assert!(out.contains("                -2 => parse_server_show_clients_reply(handler, &mut cursor)?,\n"));
        }
    }

    mod server {
        use super::*;

        #[test]
        fn mirrors_the_client() {
            let out = generate_interface(&daemon_controller(), Role::Server).unwrap();
            assert!(out.contains("pub mod daemon_controller_server {\n"));
            assert!(out.contains(
                "        fn process_client_connect_request(&mut self, server: &str);\n"
            ));
            assert!(out.contains("        fn process_server_show_clients_request(&mut self);\n"));
            assert!(out.contains(
                "        fn send_reply_for_server_show_clients(&mut self, client: &[::std::string::String]) -> Result<(), EncodeError> {\n"
            ));
            assert!(out.contains("MessageBuilder::new(-2);"));
            assert!(out.contains(
                "        fn send_request_get_parameter_from_user(&mut self, name: &[::std::string::String]) -> Result<(), EncodeError> {\n"
            ));
            assert!(out.contains("                1 => parse_client_connect_request(handler, &mut cursor)?,\n"));
            assert!(out.contains("                2 => parse_server_show_clients_request(handler, &mut cursor)?,\n"));
        }
    }

    #[test]
    fn every_interface_gets_its_module() {
        let definitions =
            Definitions::new(vec![daemon_controller(), Interface::new("Idle")]).unwrap();
        let out = generate(&definitions, Role::Server).unwrap();
        assert!(out.contains("pub mod daemon_controller_server {"));
        assert!(out.contains("}\n\n#[allow(clippy::all, unused)]\npub mod idle_server {"));
    }

    #[test]
    fn interfaces_sharing_a_module_are_refused() {
        let definitions = Definitions::new(vec![
            Interface::new("daemon_controller"),
            Interface::new("DaemonController"),
        ])
        .unwrap();
        match generate(&definitions, Role::Client) {
            Err(CodegenError::NameCollision {
                first,
                second,
                rendered,
                ..
            }) => {
                assert_eq!(first, "daemon_controller");
                assert_eq!(second, "DaemonController");
                assert_eq!(rendered, "daemon_controller_client");
            }
            other => panic!("expected a collision, got {other:?}"),
        }
    }

    #[test]
    fn renamed_clash_is_refused_before_output() {
        let interface = Interface::new("Files").send(
            Rpc::new("Seek")
                .send(Parameter::u32("Cursor"))
                .send(Parameter::u32("offset")),
        );
        assert!(matches!(
            generate_interface(&interface, Role::Server),
            Err(CodegenError::UnusableName { .. })
        ));
    }
}
