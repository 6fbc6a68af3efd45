use crate::codec::Encode;
use crate::error::EncodeError;

/// The connection side of a generated interface.
///
/// Generated send helpers build a complete message and hand it over here;
/// framing and delivery are up to the implementation.
pub trait Endpoint {
    fn send(&mut self, message: Vec<u8>);
}

/// Accumulates one outgoing message: the opcode, then parameters in order.
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    bytes: Vec<u8>,
}

impl MessageBuilder {
    pub fn new(opcode: i16) -> Self {
        Self {
            bytes: opcode.to_be_bytes().to_vec(),
        }
    }

    pub fn put<T: Encode + ?Sized>(&mut self, value: &T) -> Result<(), EncodeError> {
        value.encode(&mut self.bytes)
    }

    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcode_comes_first() {
        let mut message = MessageBuilder::new(-2);
        message.put("hi").unwrap();
        message.put(&7u8).unwrap();
        assert_eq!(message.finish(), [0xff, 0xfe, 0, 2, b'h', b'i', 7]);
    }
}
