use super::HashAlgorithm;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

/// Accumulates the message of a single sign or verify operation.
///
/// Schemes with an external hash function feed the data into the digest right away. Ed25519
/// hashes internally and needs to see the whole message, so it is buffered as is.
pub(crate) enum MessageDigest {
    Sha1(Sha1),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
    Buffer(Vec<u8>),
}

impl MessageDigest {
    pub fn new(hash: Option<HashAlgorithm>) -> Self {
        match hash {
            Some(HashAlgorithm::Sha1) => Self::Sha1(Sha1::new()),
            Some(HashAlgorithm::Sha256) => Self::Sha256(Sha256::new()),
            Some(HashAlgorithm::Sha384) => Self::Sha384(Sha384::new()),
            Some(HashAlgorithm::Sha512) => Self::Sha512(Sha512::new()),
            None => Self::Buffer(Vec::new()),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        match self {
            Self::Sha1(x) => x.update(data),
            Self::Sha256(x) => x.update(data),
            Self::Sha384(x) => x.update(data),
            Self::Sha512(x) => x.update(data),
            Self::Buffer(x) => x.extend_from_slice(data),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Self::Sha1(x) => Digest::reset(x),
            Self::Sha256(x) => Digest::reset(x),
            Self::Sha384(x) => Digest::reset(x),
            Self::Sha512(x) => Digest::reset(x),
            Self::Buffer(x) => x.clear(),
        }
    }

    /// Returns the hash of everything fed so far (or the message itself when buffering) and
    /// starts over.
    pub fn finalize_reset(&mut self) -> Vec<u8> {
        match self {
            Self::Sha1(x) => x.finalize_reset().to_vec(),
            Self::Sha256(x) => x.finalize_reset().to_vec(),
            Self::Sha384(x) => x.finalize_reset().to_vec(),
            Self::Sha512(x) => x.finalize_reset().to_vec(),
            Self::Buffer(x) => std::mem::take(x),
        }
    }
}

impl std::fmt::Debug for MessageDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sha1(_) => write!(f, "MessageDigest(sha1)"),
            Self::Sha256(_) => write!(f, "MessageDigest(sha256)"),
            Self::Sha384(_) => write!(f, "MessageDigest(sha384)"),
            Self::Sha512(_) => write!(f, "MessageDigest(sha512)"),
            Self::Buffer(x) => write!(f, "MessageDigest(buffer, {} bytes)", x.len()),
        }
    }
}
