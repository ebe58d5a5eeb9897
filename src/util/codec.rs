mod decoder;
mod encoder;
mod error;
mod ssh_decode;
mod ssh_decoder;
mod ssh_encode;
mod ssh_encoder;

pub use self::decoder::*;
pub use self::encoder::*;
pub use self::error::*;
pub use self::ssh_decode::*;
pub use self::ssh_decoder::*;
pub use self::ssh_encode::*;
pub use self::ssh_encoder::*;

/// Entry points for encoding to and decoding from the SSH binary representation.
pub enum SshCodec {}

impl SshCodec {
    /// Encode a value into a freshly allocated `Vec<u8>`.
    pub fn encode<T: SshEncode>(x: &T) -> Result<Vec<u8>, SshCodecError> {
        let mut vec = Vec::new();
        SshEncoder::push(&mut vec, x).ok_or(SshCodecError::EncodingFailed)?;
        Ok(vec)
    }

    /// Decode a value that shall consume the whole input.
    pub fn decode<'a, T: SshDecodeRef<'a>>(x: &'a [u8]) -> Result<T, SshCodecError> {
        let mut d = RefDecoder::new(x);
        let t = d.take().ok_or(SshCodecError::DecodingFailed)?;
        d.expect_eoi().ok_or(SshCodecError::DecodingFailed)?;
        Ok(t)
    }
}
