//! Rust spellings and names.

use heck::{ToSnakeCase, ToUpperCamelCase};
use ipcgen_types::{Parameter, Scalar};

use crate::error::CodegenError;
use crate::naming::Scope;
use crate::plan::{Leg, Message, Role, RolePlan};
use crate::spelling::{Convention, Dialect, Spelling, spell};

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
    "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const PATH_KEYWORDS: &[&str] = &["crate", "self", "super"];

/// Locals of the generated parse and send routines, plus `_`, which cannot be
/// read back once bound.
const RESERVED_LOCALS: &[&str] = &["_", "cursor", "handler", "message"];

pub struct RustDialect;

impl Dialect for RustDialect {
    fn scalar(&self, scalar: Scalar) -> Spelling {
        match scalar {
            Scalar::Text => Spelling::by_reference("::std::string::String".into(), "&str".into()),
            Scalar::U8 => Spelling::by_value("u8"),
            Scalar::U16 => Spelling::by_value("u16"),
            Scalar::U32 => Spelling::by_value("u32"),
        }
    }

    fn sequence(&self, element: &str) -> Spelling {
        Spelling::by_reference(
            format!("::std::vec::Vec<{element}>"),
            format!("&[{element}]"),
        )
    }
}

pub fn module_name(interface: &str, role: Role) -> String {
    format!("{}_{role}", interface.to_snake_case())
}

pub fn trait_name(interface: &str, role: Role) -> String {
    format!("{}{}Ipc", interface.to_upper_camel_case(), role.label())
}

fn leg_suffix(leg: Leg) -> &'static str {
    match leg {
        Leg::Request => "request",
        Leg::Reply => "reply",
    }
}

pub fn handler_name(message: &Message<'_>) -> String {
    format!(
        "process_{}_{}",
        message.rpc.name.to_snake_case(),
        leg_suffix(message.leg)
    )
}

pub fn parser_name(message: &Message<'_>) -> String {
    format!(
        "parse_{}_{}",
        message.rpc.name.to_snake_case(),
        leg_suffix(message.leg)
    )
}

pub fn sender_name(message: &Message<'_>) -> String {
    let rpc = message.rpc.name.to_snake_case();
    match message.leg {
        Leg::Request => format!("send_request_{rpc}"),
        Leg::Reply => format!("send_reply_for_{rpc}"),
    }
}

pub fn param_name(name: &str) -> String {
    let name = name.to_snake_case();
    if PATH_KEYWORDS.contains(&name.as_str()) {
        format!("{name}_")
    } else if KEYWORDS.contains(&name.as_str()) {
        format!("r#{name}")
    } else {
        name
    }
}

/// `, server: &str, flags: u8`, ready to follow `&mut self`.
pub fn parameter_list(params: &[Parameter], convention: Convention) -> String {
    params
        .iter()
        .map(|p| {
            format!(
                ", {}: {}",
                param_name(&p.name),
                spell(&RustDialect, &p.ty).for_convention(convention)
            )
        })
        .collect()
}

/// Claims every identifier the module for `plan` declares, so renamed
/// definitions that would clash are refused before any code is written.
pub fn check_names(plan: &RolePlan<'_>) -> Result<(), CodegenError> {
    let interface = plan.interface.name.as_str();

    let mut items = Scope::new(&[]);
    items.claim(interface, interface, module_name(interface, plan.role))?;
    items.claim(interface, interface, trait_name(interface, plan.role))?;

    let mut methods = Scope::new(&["dispatch", "send"]);
    let mut parsers = Scope::new(&["dispatch"]);
    for message in plan.handlers() {
        methods.claim(interface, &message.rpc.name, handler_name(message))?;
        parsers.claim(interface, &message.rpc.name, parser_name(message))?;
        check_params(interface, message)?;
    }
    for message in &plan.outgoing {
        methods.claim(interface, &message.rpc.name, sender_name(message))?;
        check_params(interface, message)?;
    }
    Ok(())
}

fn check_params(interface: &str, message: &Message<'_>) -> Result<(), CodegenError> {
    let mut params = Scope::new(RESERVED_LOCALS);
    for param in message.params() {
        params.claim(interface, &param.name, param_name(&param.name))?;
    }
    Ok(())
}
