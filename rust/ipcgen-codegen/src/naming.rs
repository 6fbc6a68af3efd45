//! Checks on identifiers after a target has rendered them.
//!
//! Definitions are validated on the names as written. A target may still
//! change a name on the way out (case conversion, keyword escaping), so two
//! distinct names can end up the same, or a name can become empty or shadow a
//! local of the generated code. Targets claim every rendered name in a
//! [`Scope`] before writing anything.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::CodegenError;

/// Rendered identifiers that share one namespace of the generated code.
pub struct Scope<'r> {
    reserved: &'r [&'r str],
    taken: HashMap<String, String>,
}

impl<'r> Scope<'r> {
    /// A namespace in which `reserved` are already in use.
    pub fn new(reserved: &'r [&'r str]) -> Self {
        Self {
            reserved,
            taken: HashMap::new(),
        }
    }

    /// Record that `name` from `interface` renders as `rendered`.
    pub fn claim(
        &mut self,
        interface: &str,
        name: &str,
        rendered: String,
    ) -> Result<(), CodegenError> {
        if !is_identifier(&rendered) || self.reserved.contains(&rendered.as_str()) {
            return Err(CodegenError::UnusableName {
                interface: interface.to_owned(),
                name: name.to_owned(),
                rendered,
            });
        }
        match self.taken.entry(rendered) {
            Entry::Occupied(entry) => Err(CodegenError::NameCollision {
                interface: interface.to_owned(),
                first: entry.get().clone(),
                second: name.to_owned(),
                rendered: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(name.to_owned());
                Ok(())
            }
        }
    }
}

/// ASCII identifier, optionally written as a Rust raw identifier.
fn is_identifier(rendered: &str) -> bool {
    let bare = rendered.strip_prefix("r#").unwrap_or(rendered);
    let mut chars = bare.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
