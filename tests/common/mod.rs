use rand_core::OsRng;
use shellfish_pkalg::{PublicKeyAlgorithm, SigningKey};

pub const RSA_BITS: usize = 1024;

/// Generate a fresh private key for the given algorithm.
pub fn new_signing_key(algo: PublicKeyAlgorithm) -> SigningKey {
    match algo {
        PublicKeyAlgorithm::SshRsa => rsa::RsaPrivateKey::new(&mut OsRng, RSA_BITS)
            .expect("RSA key generation")
            .into(),
        PublicKeyAlgorithm::SshDss => {
            #[allow(deprecated)]
            let size = dsa::KeySize::DSA_1024_160;
            let components = dsa::Components::generate(&mut OsRng, size);
            dsa::SigningKey::generate(&mut OsRng, components).into()
        }
        PublicKeyAlgorithm::EcdsaSha2Nistp256 => p256::ecdsa::SigningKey::random(&mut OsRng).into(),
        PublicKeyAlgorithm::EcdsaSha2Nistp384 => p384::ecdsa::SigningKey::random(&mut OsRng).into(),
        PublicKeyAlgorithm::EcdsaSha2Nistp521 => p521::ecdsa::SigningKey::random(&mut OsRng).into(),
        PublicKeyAlgorithm::SshEd25519 => ed25519_dalek::SigningKey::generate(&mut OsRng).into(),
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
