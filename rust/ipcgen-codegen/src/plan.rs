//! What each role of an interface emits and accepts.
//!
//! Both roles are derived by the same rules. A role sees every rpc either as
//! outbound (it sends the request) or inbound (the peer does). From that and
//! whether the rpc has a reply, one function decides which leg the role writes
//! and which leg it has to decode. The client's view of `sends` is the server's
//! view of `receives` and vice versa, so whatever one role emits, the other
//! dispatches.

use std::fmt;

use ipcgen_types::{Interface, Opcode, Parameter, Rpc, RpcList};

use crate::error::CodegenError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Client,
    Server,
}

impl Role {
    pub const BOTH: [Role; 2] = [Role::Client, Role::Server];

    pub fn peer(self) -> Role {
        match self {
            Role::Client => Role::Server,
            Role::Server => Role::Client,
        }
    }

    /// Whether this role initiates the rpcs of `list`.
    pub fn direction(self, list: RpcList) -> Direction {
        match (self, list) {
            (Role::Client, RpcList::Sends) | (Role::Server, RpcList::Receives) => {
                Direction::Outbound
            }
            (Role::Client, RpcList::Receives) | (Role::Server, RpcList::Sends) => {
                Direction::Inbound
            }
        }
    }

    /// `Client` or `Server`, as it appears in generated type names.
    pub fn label(self) -> &'static str {
        match self {
            Role::Client => "Client",
            Role::Server => "Server",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Client => "client",
            Role::Server => "server",
        })
    }
}

/// How a role sees one rpc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The role sends the request and may get a reply.
    Outbound,
    /// The peer sends the request and the role may answer.
    Inbound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    Request,
    Reply,
}

impl Leg {
    pub fn label(self) -> &'static str {
        match self {
            Leg::Request => "Request",
            Leg::Reply => "Reply",
        }
    }
}

/// One leg of one rpc.
#[derive(Debug, Clone, Copy)]
pub struct Message<'a> {
    pub rpc: &'a Rpc,
    pub leg: Leg,
    request_opcode: Opcode,
}

impl<'a> Message<'a> {
    pub fn request(rpc: &'a Rpc, opcode: Opcode) -> Self {
        Self {
            rpc,
            leg: Leg::Request,
            request_opcode: opcode,
        }
    }

    pub fn reply(rpc: &'a Rpc, request_opcode: Opcode) -> Self {
        Self {
            rpc,
            leg: Leg::Reply,
            request_opcode,
        }
    }

    /// The opcode this leg carries on the wire.
    pub fn opcode(&self) -> Opcode {
        match self.leg {
            Leg::Request => self.request_opcode,
            Leg::Reply => self.request_opcode.reply(),
        }
    }

    pub fn params(&self) -> &'a [Parameter] {
        match self.leg {
            Leg::Request => &self.rpc.sends,
            Leg::Reply => &self.rpc.receives,
        }
    }
}

/// The legs of one rpc a role deals with.
#[derive(Debug, Clone, Copy)]
pub struct Legs<'a> {
    /// Written by the role through a public send helper.
    pub outgoing: Option<Message<'a>>,
    /// Decoded by the role and handed to a handler.
    pub incoming: Option<Message<'a>>,
}

/// The single derivation rule shared by both roles.
pub fn legs(rpc: &Rpc, opcode: Opcode, direction: Direction) -> Legs<'_> {
    let request = Message::request(rpc, opcode);
    let reply = rpc.has_reply().then(|| Message::reply(rpc, opcode));
    match direction {
        Direction::Outbound => Legs {
            outgoing: Some(request),
            incoming: reply,
        },
        Direction::Inbound => Legs {
            outgoing: reply,
            incoming: Some(request),
        },
    }
}

/// Opcode to decode routine mapping, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct DispatchTable<'a> {
    entries: Vec<Message<'a>>,
}

impl<'a> DispatchTable<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &Message<'a>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, opcode: Opcode) -> Option<&Message<'a>> {
        self.entries.iter().find(|entry| entry.opcode() == opcode)
    }

    pub fn opcodes(&self) -> Vec<Opcode> {
        self.entries.iter().map(Message::opcode).collect()
    }

    fn insert(&mut self, interface: &str, message: Message<'a>) -> Result<(), CodegenError> {
        let opcode = message.opcode();
        if self.get(opcode).is_some() {
            return Err(CodegenError::OpcodeCollision {
                interface: interface.to_owned(),
                opcode,
            });
        }
        self.entries.push(message);
        Ok(())
    }
}

/// Everything one role of one interface needs generated.
#[derive(Debug, Clone)]
pub struct RolePlan<'a> {
    pub interface: &'a Interface,
    pub role: Role,
    /// One public send helper each.
    pub outgoing: Vec<Message<'a>>,
    /// One handler and one private decode routine each.
    pub dispatch: DispatchTable<'a>,
}

impl<'a> RolePlan<'a> {
    pub fn new(interface: &'a Interface, role: Role) -> Result<Self, CodegenError> {
        interface.validate()?;

        let mut outgoing = Vec::new();
        let mut dispatch = DispatchTable::default();
        for list in RpcList::BOTH {
            let direction = role.direction(list);
            for (opcode, rpc) in interface.numbered(list)? {
                let legs = legs(rpc, opcode, direction);
                outgoing.extend(legs.outgoing);
                if let Some(incoming) = legs.incoming {
                    dispatch.insert(&interface.name, incoming)?;
                }
            }
        }

        tracing::debug!(
            interface = %interface.name,
            %role,
            outgoing = outgoing.len(),
            incoming = dispatch.len(),
            "planned role"
        );

        Ok(Self {
            interface,
            role,
            outgoing,
            dispatch,
        })
    }

    /// The incoming legs, in the order their handlers are declared.
    pub fn handlers(&self) -> impl Iterator<Item = &Message<'a>> {
        self.dispatch.iter()
    }

    pub fn emitted_opcodes(&self) -> Vec<Opcode> {
        self.outgoing.iter().map(Message::opcode).collect()
    }

    pub fn dispatched_opcodes(&self) -> Vec<Opcode> {
        self.dispatch.opcodes()
    }
}
