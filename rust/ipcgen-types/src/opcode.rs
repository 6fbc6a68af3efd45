//! Wire opcodes.
//!
//! Every message starts with a signed 16-bit opcode. An interface's sends are
//! numbered from 1 and its receives from 0x4000, so the two request spaces never
//! meet as long as fewer than 0x4000 sends exist. A reply reuses the request's
//! opcode with the sign flipped, which is why 0 is never handed out.

use std::fmt;

/// Signed 16-bit message opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Opcode(i16);

impl Opcode {
    /// Opcode of the first send of an interface.
    pub const FIRST_SEND: i16 = 1;

    /// Opcode of the first receive of an interface.
    pub const FIRST_RECEIVE: i16 = 0x4000;

    /// Most sends an interface may declare without reaching [`Self::FIRST_RECEIVE`].
    pub const MAX_SENDS: usize = (Self::FIRST_RECEIVE - Self::FIRST_SEND) as usize;

    /// Most receives an interface may declare without passing `i16::MAX`.
    pub const MAX_RECEIVES: usize = (i16::MAX - Self::FIRST_RECEIVE) as usize + 1;

    pub const fn new(raw: i16) -> Self {
        Opcode(raw)
    }

    pub const fn get(self) -> i16 {
        self.0
    }

    /// Request opcode of the send at `index` (0-based), if it fits.
    pub fn for_send(index: usize) -> Option<Self> {
        if index >= Self::MAX_SENDS {
            return None;
        }
        Some(Opcode(Self::FIRST_SEND + index as i16))
    }

    /// Request opcode of the receive at `index` (0-based), if it fits.
    pub fn for_receive(index: usize) -> Option<Self> {
        if index >= Self::MAX_RECEIVES {
            return None;
        }
        Some(Opcode(Self::FIRST_RECEIVE + index as i16))
    }

    /// The opcode that frames a reply to this request.
    pub fn reply(self) -> Self {
        Opcode(-self.0)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Opcode> for i16 {
    fn from(opcode: Opcode) -> i16 {
        opcode.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacities_match_the_numbering() {
        assert_eq!(Opcode::MAX_SENDS, 16383);
        assert_eq!(Opcode::MAX_RECEIVES, 16384);
    }

    #[test]
    fn send_space_stays_below_receive_space() {
        assert_eq!(Opcode::for_send(0), Some(Opcode::new(1)));
        let last = Opcode::for_send(Opcode::MAX_SENDS - 1).unwrap();
        assert_eq!(last.get(), 0x3fff);
        assert_eq!(Opcode::for_send(Opcode::MAX_SENDS), None);
    }

    #[test]
    fn receive_space_ends_at_i16_max() {
        assert_eq!(Opcode::for_receive(0), Some(Opcode::new(16384)));
        let last = Opcode::for_receive(Opcode::MAX_RECEIVES - 1).unwrap();
        assert_eq!(last.get(), i16::MAX);
        assert_eq!(Opcode::for_receive(Opcode::MAX_RECEIVES), None);
    }

    #[test]
    fn replies_flip_the_sign() {
        let request = Opcode::new(16384);
        let reply = request.reply();
        assert_eq!(reply.get(), -16384);
        assert_eq!(reply.reply(), request);
    }
}
