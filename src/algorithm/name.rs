//! Protocol names of the public key algorithms.
//!
//! Key identifiers are defined by RFC 4253 (`ssh-rsa`, `ssh-dss`), RFC 5656 (`ecdsa-sha2-*`)
//! and RFC 8709 (`ssh-ed25519`). The certificate suffixes are defined by OpenSSH, see
//! <https://cvsweb.openbsd.org/src/usr.bin/ssh/PROTOCOL.certkeys>.
//!
//! Composite names are assembled with `concat!` from the literal macros below so that the
//! certificate names cannot drift apart from the key names they extend.

macro_rules! ssh_rsa {
    () => {
        "ssh-rsa"
    };
}

macro_rules! ssh_dss {
    () => {
        "ssh-dss"
    };
}

macro_rules! ssh_ed25519 {
    () => {
        "ssh-ed25519"
    };
}

macro_rules! ecdsa_sha2 {
    () => {
        "ecdsa-sha2-"
    };
}

macro_rules! nistp256 {
    () => {
        "nistp256"
    };
}

macro_rules! nistp384 {
    () => {
        "nistp384"
    };
}

macro_rules! nistp521 {
    () => {
        "nistp521"
    };
}

macro_rules! cert_v00 {
    () => {
        "-cert-v00@openssh.com"
    };
}

macro_rules! cert_v01 {
    () => {
        "-cert-v01@openssh.com"
    };
}

pub const ECDSA_SHA2_PREFIX: &str = ecdsa_sha2!();

pub const NISTP256: &str = nistp256!();
pub const NISTP384: &str = nistp384!();
pub const NISTP521: &str = nistp521!();

pub const CERT_V00_SUFFIX: &str = cert_v00!();
pub const CERT_V01_SUFFIX: &str = cert_v01!();

pub const SSH_RSA: &str = ssh_rsa!();
pub const SSH_DSS: &str = ssh_dss!();
pub const ECDSA_SHA2_NISTP256: &str = concat!(ecdsa_sha2!(), nistp256!());
pub const ECDSA_SHA2_NISTP384: &str = concat!(ecdsa_sha2!(), nistp384!());
pub const ECDSA_SHA2_NISTP521: &str = concat!(ecdsa_sha2!(), nistp521!());
pub const SSH_ED25519: &str = ssh_ed25519!();

pub const SSH_RSA_CERT: &str = concat!(ssh_rsa!(), cert_v00!());
pub const SSH_DSS_CERT: &str = concat!(ssh_dss!(), cert_v00!());
pub const ECDSA_SHA2_NISTP256_CERT: &str = concat!(ecdsa_sha2!(), nistp256!(), cert_v01!());
pub const ECDSA_SHA2_NISTP384_CERT: &str = concat!(ecdsa_sha2!(), nistp384!(), cert_v01!());
pub const ECDSA_SHA2_NISTP521_CERT: &str = concat!(ecdsa_sha2!(), nistp521!(), cert_v01!());
pub const SSH_ED25519_CERT: &str = concat!(ssh_ed25519!(), cert_v01!());

/// OpenPGP certificate formats (RFC 4253, section 6.6).
pub const PGP_SIGN_RSA: &str = "pgp-sign-rsa";
pub const PGP_SIGN_DSS: &str = "pgp-sign-dss";
