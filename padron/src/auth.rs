//! Admin capability check.
//!
//! This is a UI gate, not an authentication system: one shared secret
//! decides whether the dashboard renders. The trait keeps that weakness
//! out of the callers, so a real identity provider can slot in behind the
//! same seam.

/// Fixed dashboard password.
pub const ADMIN_SECRET: &str = "220422";

pub trait Authenticator {
    /// Exact, case-sensitive match against the expected secret.
    fn verify(&self, input: &str) -> bool;
}

/// One hardcoded secret.
#[derive(Debug, Clone)]
pub struct FixedSecret {
    secret: String,
}

impl FixedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl Default for FixedSecret {
    fn default() -> Self {
        Self::new(ADMIN_SECRET)
    }
}

impl Authenticator for FixedSecret {
    fn verify(&self, input: &str) -> bool {
        input == self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_secret_passes() {
        assert!(FixedSecret::default().verify("220422"));
    }

    #[test]
    fn test_anything_else_fails() {
        let auth = FixedSecret::default();
        assert!(!auth.verify("wrong"));
        assert!(!auth.verify(""));
        assert!(!auth.verify("220422 "));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let auth = FixedSecret::new("Secreto");
        assert!(auth.verify("Secreto"));
        assert!(!auth.verify("secreto"));
    }
}
