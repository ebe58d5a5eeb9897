mod error;
pub mod name;

pub use self::error::*;

use crate::signer::{SignatureScheme, Signer};
use crate::util::codec::*;
use std::convert::TryFrom;
use std::str::FromStr;

/// The public key algorithms understood by this crate.
///
/// The set is closed: every lookup below is an exhaustive `match`. Values only enter from the
/// outside through the parsing functions which reject everything unknown with
/// [AlgorithmError::UnrecognizedAlgorithm].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PublicKeyAlgorithm {
    SshRsa = 0,
    SshDss = 1,
    EcdsaSha2Nistp256 = 2,
    EcdsaSha2Nistp384 = 3,
    EcdsaSha2Nistp521 = 4,
    SshEd25519 = 5,
}

impl PublicKeyAlgorithm {
    /// All algorithms in tag order.
    pub const ALL: [Self; 6] = [
        Self::SshRsa,
        Self::SshDss,
        Self::EcdsaSha2Nistp256,
        Self::EcdsaSha2Nistp384,
        Self::EcdsaSha2Nistp521,
        Self::SshEd25519,
    ];

    /// The key identifier (name of the algorithm for a plain key).
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::SshRsa => name::SSH_RSA,
            Self::SshDss => name::SSH_DSS,
            Self::EcdsaSha2Nistp256 => name::ECDSA_SHA2_NISTP256,
            Self::EcdsaSha2Nistp384 => name::ECDSA_SHA2_NISTP384,
            Self::EcdsaSha2Nistp521 => name::ECDSA_SHA2_NISTP521,
            Self::SshEd25519 => name::SSH_ED25519,
        }
    }

    /// The name of the algorithm when the key is wrapped in an OpenSSH certificate.
    ///
    /// RSA and DSA use the `v00` certificate format, all others `v01`.
    pub const fn certificate_identifier(self) -> &'static str {
        match self {
            Self::SshRsa => name::SSH_RSA_CERT,
            Self::SshDss => name::SSH_DSS_CERT,
            Self::EcdsaSha2Nistp256 => name::ECDSA_SHA2_NISTP256_CERT,
            Self::EcdsaSha2Nistp384 => name::ECDSA_SHA2_NISTP384_CERT,
            Self::EcdsaSha2Nistp521 => name::ECDSA_SHA2_NISTP521_CERT,
            Self::SshEd25519 => name::SSH_ED25519_CERT,
        }
    }

    /// The curve identifier as used inside ECDSA key blobs (RFC 5656).
    pub const fn curve_name(self) -> Option<&'static str> {
        match self {
            Self::EcdsaSha2Nistp256 => Some(name::NISTP256),
            Self::EcdsaSha2Nistp384 => Some(name::NISTP384),
            Self::EcdsaSha2Nistp521 => Some(name::NISTP521),
            Self::SshRsa | Self::SshDss | Self::SshEd25519 => None,
        }
    }

    /// The hash and signature scheme mandated for this algorithm.
    pub const fn signature_scheme(self) -> SignatureScheme {
        match self {
            Self::SshRsa => SignatureScheme::RsaPkcs1Sha1,
            Self::SshDss => SignatureScheme::DsaSha1,
            Self::EcdsaSha2Nistp256 => SignatureScheme::EcdsaP256Sha256,
            Self::EcdsaSha2Nistp384 => SignatureScheme::EcdsaP384Sha384,
            Self::EcdsaSha2Nistp521 => SignatureScheme::EcdsaP521Sha512,
            Self::SshEd25519 => SignatureScheme::Ed25519,
        }
    }

    /// Create a new signer for this algorithm.
    ///
    /// Every call returns an independent instance. It needs to be initialized with key material
    /// before it can sign or verify anything.
    pub fn signer(self) -> Signer {
        Signer::new(self.signature_scheme())
    }

    /// Compact one byte representation (see `TryFrom<u8>` for the inverse).
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Look up an algorithm by its key identifier.
    pub fn from_identifier(id: &str) -> Result<Self, AlgorithmError> {
        Self::ALL
            .iter()
            .copied()
            .find(|x| x.identifier() == id)
            .ok_or_else(|| AlgorithmError::UnrecognizedAlgorithm(id.into()))
    }

    /// Look up an algorithm by a certificate identifier.
    ///
    /// Besides the OpenSSH certificate names this also accepts the OpenPGP certificate
    /// formats of RFC 4253.
    pub fn from_certificate_identifier(id: &str) -> Result<Self, AlgorithmError> {
        match id {
            name::PGP_SIGN_RSA => Ok(Self::SshRsa),
            name::PGP_SIGN_DSS => Ok(Self::SshDss),
            _ => Self::ALL
                .iter()
                .copied()
                .find(|x| x.certificate_identifier() == id)
                .ok_or_else(|| AlgorithmError::UnrecognizedAlgorithm(id.into())),
        }
    }
}

impl TryFrom<u8> for PublicKeyAlgorithm {
    type Error = AlgorithmError;

    fn try_from(x: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(x as usize)
            .copied()
            .ok_or_else(|| AlgorithmError::UnrecognizedAlgorithm(format!("tag {}", x)))
    }
}

impl TryFrom<&[u8]> for PublicKeyAlgorithm {
    type Error = AlgorithmError;

    fn try_from(x: &[u8]) -> Result<Self, Self::Error> {
        match std::str::from_utf8(x) {
            Ok(id) => Self::from_identifier(id),
            Err(_) => Err(AlgorithmError::UnrecognizedAlgorithm(
                String::from_utf8_lossy(x).into(),
            )),
        }
    }
}

impl FromStr for PublicKeyAlgorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s)
    }
}

impl AsRef<str> for PublicKeyAlgorithm {
    fn as_ref(&self) -> &str {
        self.identifier()
    }
}

impl std::fmt::Display for PublicKeyAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

impl SshEncode for PublicKeyAlgorithm {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_str_framed(self.identifier())
    }
}

impl SshDecode for PublicKeyAlgorithm {
    fn decode<'a, D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        match Self::from_identifier(d.take_str_framed()?) {
            Ok(algo) => Some(algo),
            Err(e) => {
                log::debug!("Rejecting public key algorithm: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identifier_01() {
        assert_eq!(PublicKeyAlgorithm::SshRsa.identifier(), "ssh-rsa");
        assert_eq!(PublicKeyAlgorithm::SshDss.identifier(), "ssh-dss");
        assert_eq!(PublicKeyAlgorithm::SshEd25519.identifier(), "ssh-ed25519");
    }

    #[test]
    fn test_identifier_ecdsa_01() {
        use PublicKeyAlgorithm::*;
        assert_eq!(EcdsaSha2Nistp256.identifier(), "ecdsa-sha2-nistp256");
        assert_eq!(EcdsaSha2Nistp384.identifier(), "ecdsa-sha2-nistp384");
        assert_eq!(EcdsaSha2Nistp521.identifier(), "ecdsa-sha2-nistp521");
    }

    #[test]
    fn test_identifier_distinct_01() {
        let ids: HashSet<&str> = PublicKeyAlgorithm::ALL
            .iter()
            .map(|x| x.identifier())
            .collect();
        assert_eq!(ids.len(), 6);
        assert!(ids.iter().all(|x| !x.is_empty() && x.is_ascii()));
    }

    #[test]
    fn test_certificate_identifier_01() {
        use PublicKeyAlgorithm::*;
        for algo in [SshRsa, SshDss] {
            let expected = format!("{}-cert-v00@openssh.com", algo.identifier());
            assert_eq!(algo.certificate_identifier(), expected);
        }
        for algo in [EcdsaSha2Nistp256, EcdsaSha2Nistp384, EcdsaSha2Nistp521, SshEd25519] {
            let expected = format!("{}-cert-v01@openssh.com", algo.identifier());
            assert_eq!(algo.certificate_identifier(), expected);
        }
    }

    #[test]
    fn test_certificate_identifier_distinct_01() {
        let all = PublicKeyAlgorithm::ALL;
        let ids: HashSet<&str> = all
            .iter()
            .map(|x| x.identifier())
            .chain(all.iter().map(|x| x.certificate_identifier()))
            .collect();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn test_curve_name_01() {
        use PublicKeyAlgorithm::*;
        assert_eq!(EcdsaSha2Nistp256.curve_name(), Some("nistp256"));
        assert_eq!(EcdsaSha2Nistp384.curve_name(), Some("nistp384"));
        assert_eq!(EcdsaSha2Nistp521.curve_name(), Some("nistp521"));
        assert_eq!(SshRsa.curve_name(), None);
        assert_eq!(SshDss.curve_name(), None);
        assert_eq!(SshEd25519.curve_name(), None);
        for algo in [EcdsaSha2Nistp256, EcdsaSha2Nistp384, EcdsaSha2Nistp521] {
            let curve = algo.curve_name().unwrap();
            assert_eq!(algo.identifier(), format!("ecdsa-sha2-{}", curve));
        }
    }

    #[test]
    fn test_signature_scheme_01() {
        use PublicKeyAlgorithm::*;
        assert_eq!(SshRsa.signature_scheme(), SignatureScheme::RsaPkcs1Sha1);
        assert_eq!(SshDss.signature_scheme(), SignatureScheme::DsaSha1);
        assert_eq!(EcdsaSha2Nistp256.signature_scheme(), SignatureScheme::EcdsaP256Sha256);
        assert_eq!(EcdsaSha2Nistp384.signature_scheme(), SignatureScheme::EcdsaP384Sha384);
        assert_eq!(EcdsaSha2Nistp521.signature_scheme(), SignatureScheme::EcdsaP521Sha512);
        assert_eq!(SshEd25519.signature_scheme(), SignatureScheme::Ed25519);
    }

    #[test]
    fn test_from_identifier_01() {
        for algo in PublicKeyAlgorithm::ALL {
            assert_eq!(PublicKeyAlgorithm::from_identifier(algo.identifier()), Ok(algo));
            assert_eq!(algo.identifier().parse::<PublicKeyAlgorithm>(), Ok(algo));
            assert_eq!(format!("{}", algo), algo.identifier());
        }
    }

    #[test]
    fn test_from_identifier_02() {
        for id in ["", "ssh-rsa ", "SSH-RSA", "ssh-rsa-cert-v00@openssh.com", "rsa-sha2-256"] {
            assert_eq!(
                PublicKeyAlgorithm::from_identifier(id),
                Err(AlgorithmError::UnrecognizedAlgorithm(id.into()))
            );
        }
    }

    #[test]
    fn test_from_certificate_identifier_01() {
        for algo in PublicKeyAlgorithm::ALL {
            let id = algo.certificate_identifier();
            assert_eq!(PublicKeyAlgorithm::from_certificate_identifier(id), Ok(algo));
        }
        assert!(PublicKeyAlgorithm::from_certificate_identifier("ssh-rsa").is_err());
        assert!(
            PublicKeyAlgorithm::from_certificate_identifier("ssh-ed25519-cert-v00@openssh.com")
                .is_err()
        );
    }

    #[test]
    fn test_from_certificate_identifier_pgp_01() {
        use PublicKeyAlgorithm::*;
        assert_eq!(
            PublicKeyAlgorithm::from_certificate_identifier("pgp-sign-rsa"),
            Ok(SshRsa)
        );
        assert_eq!(
            PublicKeyAlgorithm::from_certificate_identifier("pgp-sign-dss"),
            Ok(SshDss)
        );
    }

    #[test]
    fn test_try_from_bytes_01() {
        let algo = PublicKeyAlgorithm::try_from(&b"ecdsa-sha2-nistp384"[..]);
        assert_eq!(algo, Ok(PublicKeyAlgorithm::EcdsaSha2Nistp384));
        let e = PublicKeyAlgorithm::try_from(&[0xff, 0x00][..]);
        assert!(matches!(e, Err(AlgorithmError::UnrecognizedAlgorithm(_))));
    }

    #[test]
    fn test_tag_01() {
        for (i, algo) in PublicKeyAlgorithm::ALL.iter().enumerate() {
            assert_eq!(algo.tag() as usize, i);
            assert_eq!(PublicKeyAlgorithm::try_from(algo.tag()), Ok(*algo));
        }
    }

    #[test]
    fn test_tag_02() {
        for tag in 6..=u8::MAX {
            assert_eq!(
                PublicKeyAlgorithm::try_from(tag),
                Err(AlgorithmError::UnrecognizedAlgorithm(format!("tag {}", tag)))
            );
        }
    }

    #[test]
    fn test_encode_01() {
        let x = SshCodec::encode(&PublicKeyAlgorithm::SshDss).unwrap();
        assert_eq!(x, [0, 0, 0, 7, b's', b's', b'h', b'-', b'd', b's', b's']);
    }

    #[test]
    fn test_decode_01() {
        for algo in PublicKeyAlgorithm::ALL {
            let x = SshCodec::encode(&algo).unwrap();
            assert_eq!(SshCodec::decode::<PublicKeyAlgorithm>(&x), Ok(algo));
        }
    }

    #[test]
    fn test_decode_02() {
        let x = SshCodec::encode(&"ssh-foo").unwrap();
        let r: Result<PublicKeyAlgorithm, _> = SshCodec::decode(&x);
        assert_eq!(r, Err(SshCodecError::DecodingFailed));
    }
}
