use std::collections::HashSet;

use crate::error::SchemaError;
use crate::names::{RESERVED_PARAMETER_NAMES, check_identifier};
use crate::param::Parameter;

/// One named exchange: a request leg and an optional reply leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rpc {
    pub name: String,
    /// Request parameters, in wire order.
    pub sends: Vec<Parameter>,
    /// Reply parameters, in wire order. Empty for a one-way rpc.
    pub receives: Vec<Parameter>,
}

impl Rpc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sends: Vec::new(),
            receives: Vec::new(),
        }
    }

    /// Append a request parameter.
    pub fn send(mut self, param: Parameter) -> Self {
        self.sends.push(param);
        self
    }

    /// Append a reply parameter.
    pub fn receive(mut self, param: Parameter) -> Self {
        self.receives.push(param);
        self
    }

    /// Whether the peer answers this rpc at all.
    pub fn has_reply(&self) -> bool {
        !self.receives.is_empty()
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        check_identifier(&self.name)?;
        for list in [&self.sends, &self.receives] {
            let mut seen = HashSet::new();
            for param in list {
                check_identifier(&param.name)?;
                if RESERVED_PARAMETER_NAMES.contains(&param.name.as_str()) {
                    return Err(SchemaError::ReservedName {
                        rpc: self.name.clone(),
                        name: param.name.clone(),
                    });
                }
                if !seen.insert(param.name.as_str()) {
                    return Err(SchemaError::DuplicateParameter {
                        rpc: self.name.clone(),
                        name: param.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
