//! C++ header generation.
//!
//! Every interface becomes one class per role, derived from the role's
//! transport base class (`IpcClientInterface` or `IpcServerInterface`). The
//! base provides `SendCursor()`, `Send()` and the `EncodeToBuffer` /
//! `DecodeFromBuffer` overloads the generated bodies call.

mod decode;
mod encode;
mod types;

use std::fmt;

use ipcgen_types::{Definitions, Interface};

use self::decode::{generate_dispatch, generate_parser};
use self::encode::generate_sender;
use self::types::{base_class, check_names, class_name, handler_name, parameter_list};
use crate::code_writer::CodeWriter;
use crate::cw_writeln;
use crate::error::CodegenError;
use crate::plan::{Role, RolePlan};
use crate::spelling::Convention;

pub use self::decode::{DECODE_FAILED, UNKNOWN_OPCODE};
pub use self::types::CppDialect;

/// One class per interface, separated by blank lines.
pub fn generate(definitions: &Definitions, role: Role) -> Result<String, CodegenError> {
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
    let mut w = CodeWriter::with_indent_spaces(&mut out, 2);
    generate_class(&mut w, &plan)?;
    Ok(out)
}

fn generate_class(w: &mut CodeWriter<&mut String>, plan: &RolePlan<'_>) -> fmt::Result {
    cw_writeln!(
        w,
        "class {} : public {} {{",
        class_name(&plan.interface.name, plan.role),
        base_class(plan.role)
    )?;

    // Access specifiers sit one space in, members two.
    w.writeln(" public:")?;
    {
        let _indent = w.indent();
        w.comment("//", "Implement these to handle incoming messages.")?;
        for message in plan.handlers() {
            cw_writeln!(
                w,
                "virtual void {}({}) = 0;",
                handler_name(message),
                parameter_list(message.params(), Convention::Receive)
            )?;
        }
        w.blank_line()?;

        w.comment("//", "Use these to send messages to the peer.")?;
        for message in &plan.outgoing {
            generate_sender(w, message)?;
        }
    }
    w.blank_line()?;

    w.writeln(" private:")?;
    {
        let _indent = w.indent();
        w.comment("//", "Generated plumbing, not meant to be called directly.")?;
        for message in plan.dispatch.iter() {
            generate_parser(w, message)?;
        }
        w.blank_line()?;

        w.comment(
            "//",
            &format!(
                "Decodes one incoming message and calls the matching handler.\n\
                 Returns 0 on success, {DECODE_FAILED} if the message could not be decoded and\n\
                 {UNKNOWN_OPCODE} if its opcode is unknown."
            ),
        )?;
        generate_dispatch(w, &plan.dispatch)?;
    }
    w.writeln("};")
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

    #[test]
    fn client_class() {
        let out = generate_interface(&daemon_controller(), Role::Client).unwrap();

        assert!(out.starts_with("class DaemonControllerClientIpc : public IpcClientInterface {\n public:\n"));
        assert!(out.contains(
            "  virtual void ProcessServerShowClientsReply(const vector<string>& client) = 0;\n"
        ));
        assert!(out.contains(
            "  virtual void ProcessGetParameterFromUserRequest(const vector<string>& name) = 0;\n"
        ));
        assert!(out.contains("  void SendRequestClientConnect(const string& server) {\n"));
        assert!(out.contains("  void SendRequestServerShowClients(void) {\n"));
        assert!(!out.contains("ProcessClientConnectReply"));
        assert!(!out.contains("SendReplyFor"));
        assert!(out.contains("      case -2:\n        if (!ParseServerShowClientsReply(cursor))\n"));
        assert!(out.contains("      case 16384:\n"));
        assert!(out.ends_with("    return 0;\n  }\n};\n"));
    }

    #[test]
    fn server_class_mirrors_client() {
        let out = generate_interface(&daemon_controller(), Role::Server).unwrap();

        assert!(out.starts_with("class DaemonControllerServerIpc : public IpcServerInterface {\n"));
        assert!(out.contains(
            "  virtual void ProcessClientConnectRequest(const string& server) = 0;\n"
        ));
        assert!(out.contains("  virtual void ProcessServerShowClientsRequest(void) = 0;\n"));
        assert!(out.contains(
            "  void SendReplyForServerShowClients(const vector<string>& client) {\n"
        ));
        assert!(out.contains("static_cast<int16_t>(-2)"));
        assert!(out.contains("  void SendRequestGetParameterFromUser(const vector<string>& name) {\n"));
        assert!(out.contains("static_cast<int16_t>(16384)"));
        assert!(out.contains("      case 1:\n"));
        assert!(out.contains("      case 2:\n"));
        assert!(!out.contains("case -"));
    }

    #[test]
    fn sections_appear_in_order() {
        let out = generate_interface(&daemon_controller(), Role::Client).unwrap();
        let handlers = out.find("virtual void").unwrap();
        let senders = out.find("void SendRequest").unwrap();
        let private = out.find(" private:").unwrap();
        let parsers = out.find("bool Parse").unwrap();
        let dispatch = out.find("int Dispatch").unwrap();
        assert!(handlers < senders && senders < private);
        assert!(private < parsers && parsers < dispatch);
    }

    #[test]
    fn empty_interface_still_dispatches() {
        let out = generate_interface(&Interface::new("Idle"), Role::Server).unwrap();
        assert!(out.contains("class IdleServerIpc : public IpcServerInterface {\n"));
        assert!(out.contains("      default:\n        return -2;\n"));
    }

    #[test]
    fn interfaces_are_separated() {
        let definitions =
            Definitions::new(vec![daemon_controller(), Interface::new("Idle")]).unwrap();
        let out = generate(&definitions, Role::Client).unwrap();
        assert!(out.contains("};\n\nclass IdleClientIpc"));
    }

    #[test]
    fn names_differing_only_in_case_get_their_own_members() {
        let definitions = Definitions::new(vec![
            Interface::new("daemon_controller")
                .send(Rpc::new("foo_bar"))
                .send(Rpc::new("FooBar")),
            Interface::new("DaemonController"),
        ])
        .unwrap();
        let out = generate(&definitions, Role::Server).unwrap();
        assert!(out.starts_with("class daemon_controllerServerIpc : public IpcServerInterface {\n"));
        assert!(out.contains("class DaemonControllerServerIpc : public IpcServerInterface {\n"));
        assert!(out.contains("  virtual void Processfoo_barRequest(void) = 0;\n"));
        assert!(out.contains("  virtual void ProcessFooBarRequest(void) = 0;\n"));
        assert!(out.contains("      case 1:\n        if (!Parsefoo_barRequest(cursor))\n"));
        assert!(out.contains("      case 2:\n        if (!ParseFooBarRequest(cursor))\n"));
    }

    #[test]
    fn clashing_parameters_are_refused_before_output() {
        let interface = Interface::new("Shapes").send(
            Rpc::new("Draw")
                .send(Parameter::u8("class"))
                .send(Parameter::u8("class_")),
        );
        assert!(matches!(
            generate_interface(&interface, Role::Client),
            Err(CodegenError::NameCollision { .. })
        ));
    }
}
