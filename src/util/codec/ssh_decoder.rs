use super::*;

/// SSH specific decoder operations.
pub trait SshDecoder<'a>: Decoder<'a> {
    #[must_use]
    fn take<T: SshDecodeRef<'a>>(&mut self) -> Option<T> {
        T::decode(self)
    }
    #[must_use]
    fn take_usize(&mut self) -> Option<usize> {
        // This is safe on all platforms where usize is at least 32 bits.
        Some(self.take_u32be()? as usize)
    }
    #[must_use]
    fn take_bytes_framed(&mut self) -> Option<&'a [u8]> {
        let len = self.take_usize()?;
        self.take_bytes(len)
    }
    #[must_use]
    fn take_str_framed(&mut self) -> Option<&'a str> {
        std::str::from_utf8(self.take_bytes_framed()?).ok()
    }
}

impl<'a> SshDecoder<'a> for RefDecoder<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_str_framed_01() {
        let a = [0, 0, 0, 3, b'a', b'b', b'c', 0, 0, 0, 9];
        let mut d = RefDecoder::new(&a);
        assert_eq!(d.take_str_framed(), Some("abc"));
        assert_eq!(d.take_str_framed(), None);
    }

    #[test]
    fn test_take_str_framed_02() {
        let a = [0, 0, 0, 2, 0xc3, 0x28];
        let mut d = RefDecoder::new(&a);
        assert_eq!(d.take_str_framed(), None);
    }

    #[test]
    fn test_take_pair_01() {
        let a = [0, 0, 0, 1, b'a', 0, 0, 0, 1, b'b'];
        let mut d = RefDecoder::new(&a);
        let x: (String, String) = d.take().unwrap();
        assert_eq!(x, ("a".into(), "b".into()));
        assert_eq!(d.expect_eoi(), Some(()));
    }
}
