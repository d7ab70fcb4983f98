//! Persisted gate flags.
//!
//! Both flags live in the durable key-value store as plain strings. A flag is
//! set only when its stored value is exactly [`FLAG_TRUE`].

/// String value written for a set flag.
pub const FLAG_TRUE: &str = "true";

/// Keys of the flags the gate reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKey {
    /// Device has finished onboarding at least once. Never cleared.
    OnboardingCompleted,
    /// Bridge flag set right before the paywall hands off to login.
    JustSubscribed,
}

impl FlagKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagKey::OnboardingCompleted => "strikelab_onboarding_completed",
            FlagKey::JustSubscribed => "strikelab_just_subscribed",
        }
    }
}

impl std::fmt::Display for FlagKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interpret a raw stored value.
pub fn is_set(value: Option<&str>) -> bool {
    value == Some(FLAG_TRUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_literal_true_counts_as_set() {
        assert!(is_set(Some("true")));
        assert!(!is_set(Some("TRUE")));
        assert!(!is_set(Some("1")));
        assert!(!is_set(Some("")));
        assert!(!is_set(None));
    }

    #[test]
    fn keys_are_stable() {
        assert_eq!(
            FlagKey::OnboardingCompleted.as_str(),
            "strikelab_onboarding_completed"
        );
        assert_eq!(FlagKey::JustSubscribed.as_str(), "strikelab_just_subscribed");
    }
}
