use std::collections::HashSet;
use std::fmt;

use crate::error::SchemaError;
use crate::names::check_identifier;
use crate::opcode::Opcode;
use crate::rpc::Rpc;

/// Which of an interface's two rpc lists something belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcList {
    /// Rpcs the client initiates.
    Sends,
    /// Rpcs the server initiates.
    Receives,
}

impl RpcList {
    pub const BOTH: [RpcList; 2] = [RpcList::Sends, RpcList::Receives];

    /// Request opcode of the rpc at `index` in this list.
    pub fn opcode(self, index: usize) -> Option<Opcode> {
        match self {
            RpcList::Sends => Opcode::for_send(index),
            RpcList::Receives => Opcode::for_receive(index),
        }
    }

    /// How many rpcs fit in this list's opcode space.
    pub fn capacity(self) -> usize {
        match self {
            RpcList::Sends => Opcode::MAX_SENDS,
            RpcList::Receives => Opcode::MAX_RECEIVES,
        }
    }
}

impl fmt::Display for RpcList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RpcList::Sends => "sends",
            RpcList::Receives => "receives",
        })
    }
}

/// A named bidirectional contract between a client and a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub sends: Vec<Rpc>,
    pub receives: Vec<Rpc>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sends: Vec::new(),
            receives: Vec::new(),
        }
    }

    /// Append an rpc the client initiates.
    pub fn send(mut self, rpc: Rpc) -> Self {
        self.sends.push(rpc);
        self
    }

    /// Append an rpc the server initiates.
    pub fn receive(mut self, rpc: Rpc) -> Self {
        self.receives.push(rpc);
        self
    }

    pub fn list(&self, which: RpcList) -> &[Rpc] {
        match which {
            RpcList::Sends => &self.sends,
            RpcList::Receives => &self.receives,
        }
    }

    /// Pair every rpc of `which` with its request opcode, in declaration order.
    pub fn numbered(&self, which: RpcList) -> Result<Vec<(Opcode, &Rpc)>, SchemaError> {
        self.list(which)
            .iter()
            .enumerate()
            .map(|(index, rpc)| {
                which
                    .opcode(index)
                    .map(|opcode| (opcode, rpc))
                    .ok_or_else(|| self.capacity_error(which))
            })
            .collect()
    }

    fn capacity_error(&self, which: RpcList) -> SchemaError {
        let interface = self.name.clone();
        let count = self.list(which).len();
        match which {
            RpcList::Sends => SchemaError::TooManySends { interface, count },
            RpcList::Receives => SchemaError::TooManyReceives { interface, count },
        }
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        check_identifier(&self.name)?;
        for which in RpcList::BOTH {
            if self.list(which).len() > which.capacity() {
                return Err(self.capacity_error(which));
            }
            let mut seen = HashSet::new();
            for rpc in self.list(which) {
                rpc.validate()?;
                if !seen.insert(rpc.name.as_str()) {
                    return Err(SchemaError::DuplicateRpc {
                        interface: self.name.clone(),
                        list: which,
                        name: rpc.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
