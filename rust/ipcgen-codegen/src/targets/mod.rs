//! Output languages.
//!
//! Each target turns a [`RolePlan`](crate::plan::RolePlan) into source text for
//! one role of one interface. Both targets share the same layout: handlers the
//! user implements, public send helpers, then private decode routines and the
//! dispatch entry point.

pub mod cpp;
pub mod rust;

use std::fmt;
use std::str::FromStr;

use ipcgen_types::Definitions;

use crate::error::CodegenError;
use crate::plan::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Cpp,
    Rust,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Cpp, Language::Rust];

    /// File extension substituted for `{ext}` in output templates.
    pub fn extension(self) -> &'static str {
        match self {
            Language::Cpp => "h",
            Language::Rust => "rs",
        }
    }

    pub fn comment_prefix(self) -> &'static str {
        match self {
            Language::Cpp | Language::Rust => "//",
        }
    }

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Rust => "rust",
        }
    }

    /// Source for `role` of every interface in `definitions`, in file order.
    pub fn generate(self, definitions: &Definitions, role: Role) -> Result<String, CodegenError> {
        match self {
            Language::Cpp => cpp::generate(definitions, role),
            Language::Rust => rust::generate(definitions, role),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown output language {:?} (expected cpp or rust)", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpp" | "c++" => Ok(Language::Cpp),
            "rust" | "rs" => Ok(Language::Rust),
            other => Err(UnknownLanguage(other.to_owned())),
        }
    }
}
