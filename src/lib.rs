//! Registry of the SSH public key algorithms.
//!
//! Maps each supported algorithm to its protocol identifiers and hands out the matching
//! signature primitive:
//!
//! ```
//! use shellfish_pkalg::PublicKeyAlgorithm;
//!
//! let algo: PublicKeyAlgorithm = "ecdsa-sha2-nistp384".parse().unwrap();
//! assert_eq!(algo.certificate_identifier(), "ecdsa-sha2-nistp384-cert-v01@openssh.com");
//! assert_eq!(algo.signer().scheme().name(), "SHA384withECDSA");
//! ```
pub mod algorithm;
pub mod signer;
pub mod util;

pub use self::algorithm::{AlgorithmError, PublicKeyAlgorithm};
pub use self::signer::{HashAlgorithm, SignatureScheme, Signer, SignerError};
pub use self::signer::{SigningKey, VerifyingKey};
