use crate::algorithm::PublicKeyAlgorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignerError {
    /// No key material has been supplied yet.
    NotInitialized,
    /// The signer has been initialized with a public key and can only verify.
    NotInitializedForSigning,
    /// The key belongs to another algorithm than the signature scheme.
    KeyMismatch {
        expected: PublicKeyAlgorithm,
        found: PublicKeyAlgorithm,
    },
    /// The key parameters cannot be expressed in the algorithm's signature encoding.
    UnsupportedKey,
    SigningFailed,
    InvalidSignature,
}

impl std::error::Error for SignerError {}

impl std::fmt::Display for SignerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "Signer has not been initialized with a key"),
            Self::NotInitializedForSigning => write!(f, "Signer has no private key"),
            Self::KeyMismatch { expected, found } => {
                write!(f, "Key mismatch: expected {}, found {}", expected, found)
            }
            Self::UnsupportedKey => write!(f, "Unsupported key parameters"),
            Self::SigningFailed => write!(f, "Signing failed"),
            Self::InvalidSignature => write!(f, "Invalid signature"),
        }
    }
}
