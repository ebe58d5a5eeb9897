/// An `Encoder` is anything that is able to process a sequence of basic encoding operations
/// and assembles them into a result. It is most likely a bytestream assembler, but might also
/// be a hash function or a signer consuming the data to be signed.
///
/// All operations shall return `Option` instead of panicking.
pub trait Encoder: Sized {
    /// Push a `u8` to the encoder state.
    ///
    /// Returns `None` if the encoder had insufficient capacity.
    #[must_use]
    fn push_u8(&mut self, x: u8) -> Option<()>;
    /// Push a `u32` in big-endian representation to the encoder state.
    ///
    /// Returns `None` if the encoder had insufficient capacity.
    #[must_use]
    fn push_u32be(&mut self, x: u32) -> Option<()>;
    /// Push raw bytes to the encoder state.
    ///
    /// Returns `None` if the encoder had insufficient capacity.
    #[must_use]
    fn push_bytes(&mut self, x: &[u8]) -> Option<()>;
}

impl Encoder for Vec<u8> {
    fn push_u8(&mut self, x: u8) -> Option<()> {
        self.push(x);
        Some(())
    }
    fn push_u32be(&mut self, x: u32) -> Option<()> {
        self.extend_from_slice(&x.to_be_bytes());
        Some(())
    }
    fn push_bytes(&mut self, x: &[u8]) -> Option<()> {
        self.extend_from_slice(x);
        Some(())
    }
}
