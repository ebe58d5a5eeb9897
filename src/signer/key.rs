use super::SignerError;
use crate::algorithm::PublicKeyAlgorithm;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use signature::hazmat::{PrehashSigner, PrehashVerifier};
use std::convert::TryFrom;

/// Width of `r` and `s` in an `ssh-dss` signature blob (RFC 4253, section 6.6).
const DSS_COMPONENT_LEN: usize = 20;

/// Private key material for one of the supported algorithms.
pub enum SigningKey {
    Rsa(RsaPrivateKey),
    Dsa(dsa::SigningKey),
    EcdsaP256(p256::ecdsa::SigningKey),
    EcdsaP384(p384::ecdsa::SigningKey),
    EcdsaP521(p521::ecdsa::SigningKey),
    Ed25519(ed25519_dalek::SigningKey),
}

/// Public key material for one of the supported algorithms.
pub enum VerifyingKey {
    Rsa(RsaPublicKey),
    Dsa(dsa::VerifyingKey),
    EcdsaP256(p256::ecdsa::VerifyingKey),
    EcdsaP384(p384::ecdsa::VerifyingKey),
    EcdsaP521(p521::ecdsa::VerifyingKey),
    Ed25519(ed25519_dalek::VerifyingKey),
}

impl SigningKey {
    pub fn algorithm(&self) -> PublicKeyAlgorithm {
        match self {
            Self::Rsa(_) => PublicKeyAlgorithm::SshRsa,
            Self::Dsa(_) => PublicKeyAlgorithm::SshDss,
            Self::EcdsaP256(_) => PublicKeyAlgorithm::EcdsaSha2Nistp256,
            Self::EcdsaP384(_) => PublicKeyAlgorithm::EcdsaSha2Nistp384,
            Self::EcdsaP521(_) => PublicKeyAlgorithm::EcdsaSha2Nistp521,
            Self::Ed25519(_) => PublicKeyAlgorithm::SshEd25519,
        }
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        match self {
            Self::Rsa(k) => VerifyingKey::Rsa(k.to_public_key()),
            Self::Dsa(k) => VerifyingKey::Dsa(k.verifying_key().clone()),
            Self::EcdsaP256(k) => VerifyingKey::EcdsaP256(k.verifying_key().clone()),
            Self::EcdsaP384(k) => VerifyingKey::EcdsaP384(k.verifying_key().clone()),
            Self::EcdsaP521(k) => VerifyingKey::EcdsaP521(p521::ecdsa::VerifyingKey::from(k)),
            Self::Ed25519(k) => VerifyingKey::Ed25519(k.verifying_key()),
        }
    }

    /// See [VerifyingKey::is_supported].
    pub fn is_supported(&self) -> bool {
        match self {
            Self::Dsa(k) => is_dss_subgroup(k.verifying_key().components().q()),
            _ => true,
        }
    }

    /// Sign `data` which is the message digest, or the message itself for Ed25519.
    pub(crate) fn sign(&self, data: &[u8]) -> Result<Vec<u8>, SignerError> {
        let e = SignerError::SigningFailed;
        match self {
            Self::Rsa(k) => k.sign(Pkcs1v15Sign::new::<Sha1>(), data).map_err(|_| e),
            Self::Dsa(k) => {
                let sig: dsa::Signature = k.sign_prehash(data).map_err(|_| e)?;
                encode_dss(&sig).ok_or(e)
            }
            Self::EcdsaP256(k) => {
                let sig: p256::ecdsa::Signature = k.sign_prehash(data).map_err(|_| e)?;
                Ok(sig.to_bytes().to_vec())
            }
            Self::EcdsaP384(k) => {
                let sig: p384::ecdsa::Signature = k.sign_prehash(data).map_err(|_| e)?;
                Ok(sig.to_bytes().to_vec())
            }
            Self::EcdsaP521(k) => {
                let sig: p521::ecdsa::Signature = k.sign_prehash(data).map_err(|_| e)?;
                Ok(sig.to_bytes().to_vec())
            }
            Self::Ed25519(k) => {
                let sig: ed25519_dalek::Signature =
                    signature::Signer::try_sign(k, data).map_err(|_| e)?;
                Ok(sig.to_bytes().to_vec())
            }
        }
    }
}

impl VerifyingKey {
    pub fn algorithm(&self) -> PublicKeyAlgorithm {
        match self {
            Self::Rsa(_) => PublicKeyAlgorithm::SshRsa,
            Self::Dsa(_) => PublicKeyAlgorithm::SshDss,
            Self::EcdsaP256(_) => PublicKeyAlgorithm::EcdsaSha2Nistp256,
            Self::EcdsaP384(_) => PublicKeyAlgorithm::EcdsaSha2Nistp384,
            Self::EcdsaP521(_) => PublicKeyAlgorithm::EcdsaSha2Nistp521,
            Self::Ed25519(_) => PublicKeyAlgorithm::SshEd25519,
        }
    }

    /// Whether the key parameters fit the SSH signature encoding of the algorithm.
    ///
    /// `ssh-dss` signatures carry 160-bit `r` and `s`, so only DSA keys with a 160-bit `q` are
    /// usable.
    pub fn is_supported(&self) -> bool {
        match self {
            Self::Dsa(k) => is_dss_subgroup(k.components().q()),
            _ => true,
        }
    }

    /// Verify `sig` over `data` which is the message digest, or the message itself for Ed25519.
    pub(crate) fn verify(&self, data: &[u8], sig: &[u8]) -> Result<(), SignerError> {
        let e = SignerError::InvalidSignature;
        match self {
            Self::Rsa(k) => k.verify(Pkcs1v15Sign::new::<Sha1>(), data, sig).map_err(|_| e),
            Self::Dsa(k) => {
                let sig = decode_dss(sig).ok_or(e)?;
                k.verify_prehash(data, &sig).map_err(|_| e)
            }
            Self::EcdsaP256(k) => {
                let sig = p256::ecdsa::Signature::from_slice(sig).map_err(|_| e)?;
                k.verify_prehash(data, &sig).map_err(|_| e)
            }
            Self::EcdsaP384(k) => {
                let sig = p384::ecdsa::Signature::from_slice(sig).map_err(|_| e)?;
                k.verify_prehash(data, &sig).map_err(|_| e)
            }
            Self::EcdsaP521(k) => {
                let sig = p521::ecdsa::Signature::from_slice(sig).map_err(|_| e)?;
                k.verify_prehash(data, &sig).map_err(|_| e)
            }
            Self::Ed25519(k) => {
                let sig = ed25519_dalek::Signature::try_from(sig).map_err(|_| e)?;
                k.verify_strict(data, &sig).map_err(|_| e)
            }
        }
    }
}

fn is_dss_subgroup(q: &dsa::BigUint) -> bool {
    q.bits() == 8 * DSS_COMPONENT_LEN
}

/// `r || s`, each as unsigned big-endian integer left-padded to 160 bits.
fn encode_dss(sig: &dsa::Signature) -> Option<Vec<u8>> {
    let mut blob = vec![0; 2 * DSS_COMPONENT_LEN];
    for (x, chunk) in [sig.r(), sig.s()]
        .iter()
        .zip(blob.chunks_mut(DSS_COMPONENT_LEN))
    {
        let x = x.to_bytes_be();
        let pad = DSS_COMPONENT_LEN.checked_sub(x.len())?;
        chunk[pad..].copy_from_slice(&x);
    }
    Some(blob)
}

fn decode_dss(blob: &[u8]) -> Option<dsa::Signature> {
    if blob.len() != 2 * DSS_COMPONENT_LEN {
        return None;
    }
    let (r, s) = blob.split_at(DSS_COMPONENT_LEN);
    let r = dsa::BigUint::from_bytes_be(r);
    let s = dsa::BigUint::from_bytes_be(s);
    dsa::Signature::from_components(r, s).ok()
}

impl From<RsaPrivateKey> for SigningKey {
    fn from(x: RsaPrivateKey) -> Self {
        Self::Rsa(x)
    }
}

impl From<dsa::SigningKey> for SigningKey {
    fn from(x: dsa::SigningKey) -> Self {
        Self::Dsa(x)
    }
}

impl From<p256::ecdsa::SigningKey> for SigningKey {
    fn from(x: p256::ecdsa::SigningKey) -> Self {
        Self::EcdsaP256(x)
    }
}

impl From<p384::ecdsa::SigningKey> for SigningKey {
    fn from(x: p384::ecdsa::SigningKey) -> Self {
        Self::EcdsaP384(x)
    }
}

impl From<p521::ecdsa::SigningKey> for SigningKey {
    fn from(x: p521::ecdsa::SigningKey) -> Self {
        Self::EcdsaP521(x)
    }
}

impl From<ed25519_dalek::SigningKey> for SigningKey {
    fn from(x: ed25519_dalek::SigningKey) -> Self {
        Self::Ed25519(x)
    }
}

impl From<RsaPublicKey> for VerifyingKey {
    fn from(x: RsaPublicKey) -> Self {
        Self::Rsa(x)
    }
}

impl From<dsa::VerifyingKey> for VerifyingKey {
    fn from(x: dsa::VerifyingKey) -> Self {
        Self::Dsa(x)
    }
}

impl From<p256::ecdsa::VerifyingKey> for VerifyingKey {
    fn from(x: p256::ecdsa::VerifyingKey) -> Self {
        Self::EcdsaP256(x)
    }
}

impl From<p384::ecdsa::VerifyingKey> for VerifyingKey {
    fn from(x: p384::ecdsa::VerifyingKey) -> Self {
        Self::EcdsaP384(x)
    }
}

impl From<p521::ecdsa::VerifyingKey> for VerifyingKey {
    fn from(x: p521::ecdsa::VerifyingKey) -> Self {
        Self::EcdsaP521(x)
    }
}

impl From<ed25519_dalek::VerifyingKey> for VerifyingKey {
    fn from(x: ed25519_dalek::VerifyingKey) -> Self {
        Self::Ed25519(x)
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SigningKey({})", self.algorithm())
    }
}

impl std::fmt::Debug for VerifyingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VerifyingKey({})", self.algorithm())
    }
}
