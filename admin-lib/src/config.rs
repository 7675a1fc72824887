//! Feature flags for optional dashboard areas

/// Toggles for the dashboard areas that are rolled out per deployment.
///
/// All flags default to off and are switched on through
/// `TREETRACKER_ENABLE_*` environment variables set to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureFlags {
    /// Earnings table.
    pub earnings: bool,
    /// Payments view.
    pub payments: bool,
    /// Messaging inbox.
    pub messaging: bool,
    /// Capture matching tool.
    pub capture_matching: bool,
}

impl FeatureFlags {
    /// Reads the flags from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the flags through the given variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = |name: &str| lookup(name).is_some_and(|value| value == "true");
        Self {
            earnings: enabled("TREETRACKER_ENABLE_EARNINGS"),
            payments: enabled("TREETRACKER_ENABLE_PAYMENTS"),
            messaging: enabled("TREETRACKER_ENABLE_MESSAGING"),
            capture_matching: enabled("TREETRACKER_ENABLE_CAPTURE_MATCHING"),
        }
    }
}
