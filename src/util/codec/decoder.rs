/// A state machine that offers basic operations for consumption from an underlying
/// byte input.
pub trait Decoder<'a>: Clone {
    #[must_use]
    fn expect_eoi(&self) -> Option<()>;
    #[must_use]
    fn take_u8(&mut self) -> Option<u8>;
    #[must_use]
    fn take_u32be(&mut self) -> Option<u32>;
    #[must_use]
    fn take_bytes(&mut self, len: usize) -> Option<&'a [u8]>;
}

/// A decoder over a borrowed byte slice.
///
/// Everything taken from it borrows from the input and can outlive the decoder itself.
#[derive(Clone, Debug)]
pub struct RefDecoder<'a> {
    pos: usize,
    buf: &'a [u8],
}

impl<'a> RefDecoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { pos: 0, buf }
    }
}

impl<'a> Decoder<'a> for RefDecoder<'a> {
    #[inline]
    fn expect_eoi(&self) -> Option<()> {
        if self.pos == self.buf.len() {
            Some(())
        } else {
            None
        }
    }

    #[inline]
    fn take_u8(&mut self) -> Option<u8> {
        let x = *self.buf.get(self.pos)?;
        self.pos += 1;
        Some(x)
    }

    #[inline]
    fn take_u32be(&mut self) -> Option<u32> {
        let bytes = self.take_bytes(std::mem::size_of::<u32>())?;
        let mut x = [0; 4];
        x.copy_from_slice(bytes);
        Some(u32::from_be_bytes(x))
    }

    #[inline]
    fn take_bytes(&mut self, len: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(len)?;
        let bytes = self.buf.get(self.pos..end)?;
        self.pos = end;
        Some(bytes)
    }
}
