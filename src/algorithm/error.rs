/// A name or tag that does not designate any supported public key algorithm.
///
/// This only ever originates from a parsing boundary. It must be propagated and never be
/// replaced by a guessed algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    UnrecognizedAlgorithm(String),
}

impl std::error::Error for AlgorithmError {}

impl std::fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedAlgorithm(x) => write!(f, "Unrecognized algorithm: {}", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_01() {
        let e = AlgorithmError::UnrecognizedAlgorithm("ssh-foo".into());
        assert_eq!(format!("{}", e), "Unrecognized algorithm: ssh-foo");
    }

    #[test]
    fn test_debug_01() {
        let e = AlgorithmError::UnrecognizedAlgorithm("x".into());
        assert_eq!(format!("{:?}", e), "UnrecognizedAlgorithm(\"x\")");
    }
}
