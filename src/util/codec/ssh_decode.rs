use super::*;

/// SSH specific decoding (inverse of `SshEncode`).
pub trait SshDecode: Sized {
    #[must_use]
    fn decode<'a, D: SshDecoder<'a>>(d: &mut D) -> Option<Self>;
}

/// SSH specific decode that allows the result to contain references into the input.
///
/// This is useful to avoid unnecessary intermediate allocations in cases where
/// the result is short-lived and can be processed while the input is still in scope.
pub trait SshDecodeRef<'a>: Sized {
    #[must_use]
    fn decode<D: SshDecoder<'a>>(d: &mut D) -> Option<Self>;
}

/// `SshDecode` is a stronger property than `SshDecodeRef` so everything that is `SshDecode` can
/// automatically inherit `SshDecodeRef`.
impl<'a, T: SshDecode> SshDecodeRef<'a> for T {
    fn decode<D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        SshDecode::decode(d)
    }
}

impl SshDecode for String {
    #[inline]
    fn decode<'a, D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        d.take_str_framed().map(String::from)
    }
}

impl<'a> SshDecodeRef<'a> for &'a str {
    #[inline]
    fn decode<D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        d.take_str_framed()
    }
}

impl<A: SshDecode, B: SshDecode> SshDecode for (A, B) {
    #[inline]
    fn decode<'a, D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        let a = d.take()?;
        let b = d.take()?;
        Some((a, b))
    }
}
