use crate::api::ListingBackend;
use tracing::{info, warn};

pub const NO_TOKEN_MESSAGE: &str = "No verification token found.";
pub const FALLBACK_MESSAGE: &str = "Invalid or expired verification link.";

/// Outcome of an email verification attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationState {
    Verifying,
    Verified,
    Failed(String),
}

impl VerificationState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, VerificationState::Verifying)
    }
}

/// Submit the verification token once and map the outcome.
///
/// A missing or empty token fails immediately without touching the network.
pub async fn verify_email(backend: &dyn ListingBackend, token: Option<&str>) -> VerificationState {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        warn!("Email verification opened without a token");
        return VerificationState::Failed(NO_TOKEN_MESSAGE.to_string());
    };

    match backend.verify_email(token).await {
        Ok(()) => {
            info!("Email verification succeeded");
            VerificationState::Verified
        }
        Err(e) => {
            warn!("Email verification failed: {}", e);
            let message = e.detail().unwrap_or(FALLBACK_MESSAGE);
            VerificationState::Failed(message.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_verifying_is_pending() {
        assert!(!VerificationState::Verifying.is_terminal());
        assert!(VerificationState::Verified.is_terminal());
        assert!(VerificationState::Failed(String::new()).is_terminal());
    }
}
