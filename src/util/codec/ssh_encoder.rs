use super::*;

/// SSH specific encoder operations.
pub trait SshEncoder: Encoder {
    #[must_use]
    #[inline]
    fn push<T: SshEncode>(&mut self, x: &T) -> Option<()> {
        x.encode(self)
    }
    #[must_use]
    #[inline]
    fn push_usize(&mut self, x: usize) -> Option<()> {
        crate::util::check(x <= u32::MAX as usize)?;
        self.push_u32be(x as u32)
    }
    #[must_use]
    #[inline]
    fn push_str_framed(&mut self, x: &str) -> Option<()> {
        self.push_bytes_framed(x.as_bytes())
    }
    #[must_use]
    #[inline]
    fn push_bytes_framed(&mut self, x: &[u8]) -> Option<()> {
        self.push_usize(x.len())?;
        self.push_bytes(x)
    }
}

impl<E: Encoder> SshEncoder for E {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_str_framed_01() {
        let mut e: Vec<u8> = Vec::new();
        assert_eq!(e.push_str_framed("ssh-dss"), Some(()));
        assert_eq!(e, [0, 0, 0, 7, b's', b's', b'h', b'-', b'd', b's', b's']);
    }

    #[test]
    fn test_push_bytes_framed_01() {
        let mut e: Vec<u8> = Vec::new();
        assert_eq!(e.push_bytes_framed(&[1, 2]), Some(()));
        assert_eq!(e, [0, 0, 0, 2, 1, 2]);
    }

    #[test]
    fn test_push_pair_01() {
        let mut e: Vec<u8> = Vec::new();
        assert_eq!(SshEncoder::push(&mut e, &("a", String::from("bc"))), Some(()));
        assert_eq!(e, [0, 0, 0, 1, b'a', 0, 0, 0, 2, b'b', b'c']);
    }
}
