//! C++ spellings and names.
//!
//! Interface and rpc names are used exactly as written; only parameters that
//! are C++ keywords get a trailing underscore.

use ipcgen_types::{Parameter, Scalar};

use crate::error::CodegenError;
use crate::naming::Scope;
use crate::plan::{Leg, Message, Role, RolePlan};
use crate::spelling::{Convention, Dialect, Spelling, spell};

const KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "asm", "auto", "bool", "break", "case", "catch", "char",
    "class", "const", "continue", "default", "delete", "do", "double", "else", "enum",
    "explicit", "export", "extern", "false", "float", "for", "friend", "goto", "if", "inline",
    "int", "long", "mutable", "namespace", "new", "not", "operator", "or", "private",
    "protected", "public", "register", "return", "short", "signed", "sizeof", "static",
    "struct", "switch", "template", "this", "throw", "true", "try", "typedef", "typename",
    "union", "unsigned", "using", "virtual", "void", "volatile", "while", "xor",
];

/// The parse routine's cursor, plus base class members the generated bodies call.
const RESERVED_LOCALS: &[&str] = &[
    "cursor",
    "DecodeFromBuffer",
    "EncodeToBuffer",
    "Send",
    "SendCursor",
];

pub struct CppDialect;

impl Dialect for CppDialect {
    fn scalar(&self, scalar: Scalar) -> Spelling {
        match scalar {
            Scalar::Text => Spelling::by_reference("string".into(), "const string&".into()),
            Scalar::U8 => Spelling::by_value("uint8_t"),
            Scalar::U16 => Spelling::by_value("uint16_t"),
            Scalar::U32 => Spelling::by_value("uint32_t"),
        }
    }

    fn sequence(&self, element: &str) -> Spelling {
        Spelling::by_reference(
            format!("vector<{element}>"),
            format!("const vector<{element}>&"),
        )
    }
}

pub fn class_name(interface: &str, role: Role) -> String {
    format!("{interface}{}Ipc", role.label())
}

pub fn base_class(role: Role) -> String {
    format!("Ipc{}Interface", role.label())
}

pub fn handler_name(message: &Message<'_>) -> String {
    format!("Process{}{}", message.rpc.name, message.leg.label())
}

pub fn parser_name(message: &Message<'_>) -> String {
    format!("Parse{}{}", message.rpc.name, message.leg.label())
}

pub fn sender_name(message: &Message<'_>) -> String {
    let rpc = &message.rpc.name;
    match message.leg {
        Leg::Request => format!("SendRequest{rpc}"),
        Leg::Reply => format!("SendReplyFor{rpc}"),
    }
}

pub fn param_name(name: &str) -> String {
    if KEYWORDS.contains(&name) {
        format!("{name}_")
    } else {
        name.to_owned()
    }
}

/// `const string& server, uint8_t flags`, or `void` for an empty list.
pub fn parameter_list(params: &[Parameter], convention: Convention) -> String {
    if params.is_empty() {
        return "void".to_owned();
    }
    params
        .iter()
        .map(|p| {
            format!(
                "{} {}",
                spell(&CppDialect, &p.ty).for_convention(convention),
                param_name(&p.name)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Claims every member and parameter name of the class for `plan`.
pub fn check_names(plan: &RolePlan<'_>) -> Result<(), CodegenError> {
    let interface = plan.interface.name.as_str();
    let mut members = Scope::new(&["Dispatch"]);
    for message in plan.handlers() {
        members.claim(interface, &message.rpc.name, handler_name(message))?;
        members.claim(interface, &message.rpc.name, parser_name(message))?;

        // The parse routine calls the handler by its bare name.
        let mut params = Scope::new(RESERVED_LOCALS);
        params.claim(interface, &message.rpc.name, handler_name(message))?;
        for param in message.params() {
            params.claim(interface, &param.name, param_name(&param.name))?;
        }
    }
    for message in &plan.outgoing {
        members.claim(interface, &message.rpc.name, sender_name(message))?;
        let mut params = Scope::new(RESERVED_LOCALS);
        for param in message.params() {
            params.claim(interface, &param.name, param_name(&param.name))?;
        }
    }
    Ok(())
}
