//! Positional encoding of parameter values.
//!
//! Integers are big-endian. Strings are a `u16` byte length followed by UTF-8
//! bytes, sequences a `u16` element count followed by the elements. Nothing
//! else is written: the receiver knows the parameter list and decodes in the
//! same order.

use crate::cursor::Cursor;
use crate::error::{DecodeError, EncodeError};

pub trait Encode {
    fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError>;
}

pub trait Decode: Sized {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError>;
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Encode for $ty {
                fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
                    out.extend_from_slice(&self.to_be_bytes());
                    Ok(())
                }
            }

            impl Decode for $ty {
                fn decode(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError> {
                    Ok(<$ty>::from_be_bytes(cursor.take_array()?))
                }
            }
        )*
    };
}

impl_integer!(u8, u16, u32, i16);

fn encode_len(len: usize, out: &mut Vec<u8>) -> Result<(), EncodeError> {
    let len = u16::try_from(len).map_err(|_| EncodeError::TooLong { len })?;
    len.encode(out)
}

fn decode_len(cursor: &mut Cursor<'_>) -> Result<usize, DecodeError> {
    Ok(usize::from(u16::decode(cursor)?))
}

impl Encode for str {
    fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        encode_len(self.len(), out)?;
        out.extend_from_slice(self.as_bytes());
        Ok(())
    }
}

impl Encode for String {
    fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        self.as_str().encode(out)
    }
}

impl Decode for String {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        let len = decode_len(cursor)?;
        let bytes = cursor.take(len)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| DecodeError::InvalidUtf8)
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        encode_len(self.len(), out)?;
        for item in self {
            item.encode(out)?;
        }
        Ok(())
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        self.as_slice().encode(out)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        let count = decode_len(cursor)?;
        // Every element takes at least one byte, so a lying count cannot
        // reserve more than the message holds.
        let mut items = Vec::with_capacity(count.min(cursor.remaining()));
        for _ in 0..count {
            items.push(T::decode(cursor)?);
        }
        Ok(items)
    }
}
