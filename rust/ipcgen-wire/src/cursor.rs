use crate::error::DecodeError;

/// Sequential read position over one incoming message.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Consume the next `len` bytes. On failure the position is unchanged.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(DecodeError::Truncated {
                needed: len,
                remaining,
            });
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_advances() {
        let mut cursor = Cursor::new(&[1, 2, 3]);
        assert_eq!(cursor.take(2).unwrap(), &[1, 2]);
        assert_eq!(cursor.remaining(), 1);
        assert_eq!(cursor.take_array::<1>().unwrap(), [3]);
        assert!(cursor.is_empty());
    }

    #[test]
    fn short_take_consumes_nothing() {
        let mut cursor = Cursor::new(&[1, 2, 3]);
        cursor.take(1).unwrap();
        assert_eq!(
            cursor.take(4),
            Err(DecodeError::Truncated {
                needed: 4,
                remaining: 2
            })
        );
        assert_eq!(cursor.remaining(), 2);
    }
}
