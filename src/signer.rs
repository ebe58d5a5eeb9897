mod digest;
mod error;
mod key;

pub use self::error::*;
pub use self::key::*;

use self::digest::MessageDigest;
use crate::algorithm::PublicKeyAlgorithm;
use crate::util::codec::Encoder;

/// Hash functions used by the signature schemes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Digest size in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }
}

/// A fixed combination of hash function and signature algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignatureScheme {
    /// RSASSA-PKCS1-v1_5 with SHA-1 (RFC 4253 `ssh-rsa`).
    RsaPkcs1Sha1,
    /// DSA with SHA-1 (RFC 4253 `ssh-dss`).
    DsaSha1,
    EcdsaP256Sha256,
    EcdsaP384Sha384,
    EcdsaP521Sha512,
    /// PureEdDSA on edwards25519; hashing is part of the scheme.
    Ed25519,
}

impl SignatureScheme {
    pub const fn name(self) -> &'static str {
        match self {
            Self::RsaPkcs1Sha1 => "SHA1withRSA",
            Self::DsaSha1 => "SHA1withDSA",
            Self::EcdsaP256Sha256 => "SHA256withECDSA",
            Self::EcdsaP384Sha384 => "SHA384withECDSA",
            Self::EcdsaP521Sha512 => "SHA512withECDSA",
            Self::Ed25519 => "Ed25519",
        }
    }

    /// ASN.1 object identifier of the scheme (RFC 3279, RFC 5758, RFC 8410).
    pub const fn oid(self) -> &'static str {
        match self {
            Self::RsaPkcs1Sha1 => "1.2.840.113549.1.1.5",
            Self::DsaSha1 => "1.2.840.10040.4.3",
            Self::EcdsaP256Sha256 => "1.2.840.10045.4.3.2",
            Self::EcdsaP384Sha384 => "1.2.840.10045.4.3.3",
            Self::EcdsaP521Sha512 => "1.2.840.10045.4.3.4",
            Self::Ed25519 => "1.3.101.112",
        }
    }

    /// The separately applied hash function, `None` for Ed25519.
    pub const fn hash(self) -> Option<HashAlgorithm> {
        match self {
            Self::RsaPkcs1Sha1 | Self::DsaSha1 => Some(HashAlgorithm::Sha1),
            Self::EcdsaP256Sha256 => Some(HashAlgorithm::Sha256),
            Self::EcdsaP384Sha384 => Some(HashAlgorithm::Sha384),
            Self::EcdsaP521Sha512 => Some(HashAlgorithm::Sha512),
            Self::Ed25519 => None,
        }
    }

    /// The algorithm whose keys this scheme operates on.
    pub const fn key_algorithm(self) -> PublicKeyAlgorithm {
        match self {
            Self::RsaPkcs1Sha1 => PublicKeyAlgorithm::SshRsa,
            Self::DsaSha1 => PublicKeyAlgorithm::SshDss,
            Self::EcdsaP256Sha256 => PublicKeyAlgorithm::EcdsaSha2Nistp256,
            Self::EcdsaP384Sha384 => PublicKeyAlgorithm::EcdsaSha2Nistp384,
            Self::EcdsaP521Sha512 => PublicKeyAlgorithm::EcdsaSha2Nistp521,
            Self::Ed25519 => PublicKeyAlgorithm::SshEd25519,
        }
    }
}

impl std::fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug)]
enum Key {
    Signing(SigningKey),
    Verifying(VerifyingKey),
}

/// A stateful hash-then-sign / hash-then-verify object for one signature scheme.
///
/// A signer is obtained from [PublicKeyAlgorithm::signer], initialized with either a private key
/// ([Signer::init_sign]) or a public key ([Signer::init_verify]) and then fed the message with
/// [Signer::update] (or any `Encoder` operation). [Signer::sign] and [Signer::verify] consume
/// the accumulated message; the signer can be reused afterwards with the same key.
///
/// Signers are never shared: each one carries the digest state of exactly one operation.
#[derive(Debug)]
pub struct Signer {
    scheme: SignatureScheme,
    digest: MessageDigest,
    key: Option<Key>,
}

impl Signer {
    pub fn new(scheme: SignatureScheme) -> Self {
        Self {
            scheme,
            digest: MessageDigest::new(scheme.hash()),
            key: None,
        }
    }

    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    pub fn algorithm(&self) -> PublicKeyAlgorithm {
        self.scheme.key_algorithm()
    }

    pub fn is_initialized(&self) -> bool {
        self.key.is_some()
    }

    /// Use the signer for signing (and verifying) with the given private key.
    ///
    /// Any message data fed before is discarded. DSA keys must have a 160-bit subgroup order.
    pub fn init_sign<K: Into<SigningKey>>(&mut self, key: K) -> Result<(), SignerError> {
        let key = key.into();
        self.check_key(key.algorithm(), key.is_supported())?;
        self.digest.reset();
        self.key = Some(Key::Signing(key));
        Ok(())
    }

    /// Use the signer for verifying with the given public key.
    ///
    /// Any message data fed before is discarded. DSA keys must have a 160-bit subgroup order.
    pub fn init_verify<K: Into<VerifyingKey>>(&mut self, key: K) -> Result<(), SignerError> {
        let key = key.into();
        self.check_key(key.algorithm(), key.is_supported())?;
        self.digest.reset();
        self.key = Some(Key::Verifying(key));
        Ok(())
    }

    pub fn update(&mut self, data: &[u8]) {
        self.digest.update(data)
    }

    /// Discard the message data fed so far. The key is kept.
    pub fn reset(&mut self) {
        self.digest.reset()
    }

    /// Sign the message fed so far.
    pub fn sign(&mut self) -> Result<Vec<u8>, SignerError> {
        let key = match &self.key {
            Some(Key::Signing(key)) => key,
            Some(Key::Verifying(_)) => return Err(SignerError::NotInitializedForSigning),
            None => return Err(SignerError::NotInitialized),
        };
        let data = self.digest.finalize_reset();
        key.sign(&data)
    }

    /// Verify a signature over the message fed so far.
    pub fn verify(&mut self, signature: &[u8]) -> Result<(), SignerError> {
        let key = self.key.as_ref().ok_or(SignerError::NotInitialized)?;
        let data = self.digest.finalize_reset();
        let result = match key {
            Key::Signing(key) => key.verifying_key().verify(&data, signature),
            Key::Verifying(key) => key.verify(&data, signature),
        };
        if result.is_err() {
            log::debug!("{}: Signature verification failed", self.scheme);
        }
        result
    }

    fn check_key(&self, found: PublicKeyAlgorithm, supported: bool) -> Result<(), SignerError> {
        let expected = self.algorithm();
        if expected != found {
            log::debug!("{}: Rejecting {} key", self.scheme, found);
            Err(SignerError::KeyMismatch { expected, found })
        } else if !supported {
            log::debug!("{}: Rejecting key with unsupported parameters", self.scheme);
            Err(SignerError::UnsupportedKey)
        } else {
            Ok(())
        }
    }
}

/// Feeding SSH encoded data directly into the message.
impl Encoder for Signer {
    fn push_u8(&mut self, x: u8) -> Option<()> {
        self.update(&[x]);
        Some(())
    }
    fn push_u32be(&mut self, x: u32) -> Option<()> {
        self.update(&x.to_be_bytes());
        Some(())
    }
    fn push_bytes(&mut self, x: &[u8]) -> Option<()> {
        self.update(x);
        Some(())
    }
}
