//! Definition units and the JSON loader.
//!
//! A definition file declares a top-level `interfaces` list:
//!
//! ```json
//! {
//!   "interfaces": [
//!     {
//!       "name": "DaemonController",
//!       "sends": [
//!         { "name": "ClientConnect", "sends": [{ "name": "server", "type": "string" }] }
//!       ],
//!       "receives": [
//!         {
//!           "name": "GetParameterFromUser",
//!           "sends": [{ "name": "name", "type": "repeated<string>" }],
//!           "receives": [{ "name": "value", "type": "repeated<string>" }]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! The document is deserialized into plain declaration structs first and only
//! then turned into the model, so every unit that reaches codegen has passed
//! [`Interface::validate`].

use std::collections::HashSet;
use std::path::Path;

use facet::Facet;

use crate::error::{LoadError, SchemaError};
use crate::interface::Interface;
use crate::param::{ParamType, Parameter};
use crate::rpc::Rpc;

/// A validated set of interfaces, as loaded from one definition file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definitions {
    interfaces: Vec<Interface>,
}

impl Definitions {
    pub fn new(interfaces: Vec<Interface>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for interface in &interfaces {
            interface.validate()?;
            if !seen.insert(interface.name.as_str()) {
                return Err(SchemaError::DuplicateInterface {
                    name: interface.name.clone(),
                });
            }
        }
        Ok(Self { interfaces })
    }

    pub fn interfaces(&self) -> &[Interface] {
        &self.interfaces
    }

    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let file: DefinitionFile =
            facet_json::from_str(text).map_err(|e| LoadError::Parse {
                message: e.to_string(),
            })?;
        let declared = file.interfaces.ok_or(LoadError::MissingInterfaces)?;
        let interfaces = declared
            .into_iter()
            .map(InterfaceDecl::into_model)
            .collect::<Result<Vec<_>, _>>()?;
        let definitions = Self::new(interfaces)?;
        tracing::debug!(
            interfaces = definitions.interfaces.len(),
            "loaded definitions"
        );
        Ok(definitions)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

#[derive(Debug, Facet)]
#[facet(deny_unknown_fields)]
struct DefinitionFile {
    #[facet(default)]
    interfaces: Option<Vec<InterfaceDecl>>,
}

#[derive(Debug, Facet)]
#[facet(deny_unknown_fields)]
struct InterfaceDecl {
    name: String,
    #[facet(default)]
    sends: Vec<RpcDecl>,
    #[facet(default)]
    receives: Vec<RpcDecl>,
}

#[derive(Debug, Facet)]
#[facet(deny_unknown_fields)]
struct RpcDecl {
    name: String,
    #[facet(default)]
    sends: Vec<ParamDecl>,
    #[facet(default)]
    receives: Vec<ParamDecl>,
}

#[derive(Debug, Facet)]
#[facet(deny_unknown_fields)]
struct ParamDecl {
    name: String,
    #[facet(rename = "type")]
    ty: String,
}

impl InterfaceDecl {
    fn into_model(self) -> Result<Interface, SchemaError> {
        Ok(Interface {
            name: self.name,
            sends: collect(self.sends, RpcDecl::into_model)?,
            receives: collect(self.receives, RpcDecl::into_model)?,
        })
    }
}

impl RpcDecl {
    fn into_model(self) -> Result<Rpc, SchemaError> {
        Ok(Rpc {
            name: self.name,
            sends: collect(self.sends, ParamDecl::into_model)?,
            receives: collect(self.receives, ParamDecl::into_model)?,
        })
    }
}

impl ParamDecl {
    fn into_model(self) -> Result<Parameter, SchemaError> {
        let ty: ParamType = self.ty.parse()?;
        Ok(Parameter::new(self.name, ty))
    }
}

fn collect<D, M>(
    decls: Vec<D>,
    convert: fn(D) -> Result<M, SchemaError>,
) -> Result<Vec<M>, SchemaError> {
    decls.into_iter().map(convert).collect()
}
