//! Admin policies and permission checks

use serde::Deserialize;

/// Named permissions an admin user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Grants everything.
    SuperPermission,
    /// May list admin users.
    ListUser,
    /// May manage admin users.
    ManageUser,
    /// May list captures.
    ListTree,
    /// May verify captures.
    ApproveTree,
    /// May list growers.
    ListGrower,
    /// May manage growers.
    ManageGrower,
    /// May list payments and earnings.
    ListPayments,
    /// May manage payments.
    ManagePayments,
    /// May use the messaging inbox.
    SendMessages,
}

/// A policy granted to a user, as delivered by the auth endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PolicyGrant {
    /// The granted policy.
    pub name: Policy,
}

/// The policy block of an admin user.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct UserPolicy {
    /// Policies granted to the user.
    #[serde(default)]
    pub policies: Vec<PolicyGrant>,
    /// Organization the user is scoped to, if any.
    #[serde(default)]
    pub organization: Option<Organization>,
}

/// An organization captures and growers can belong to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Organization {
    /// Unique organization id.
    pub id: u64,
    /// Organization display name.
    pub name: String,
}

impl UserPolicy {
    /// Returns `true` if any of the listed policies has been granted.
    pub fn has_any(&self, required: &[Policy]) -> bool {
        self.policies
            .iter()
            .any(|grant| required.contains(&grant.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy_with(policies: &[Policy]) -> UserPolicy {
        UserPolicy {
            policies: policies.iter().map(|&name| PolicyGrant { name }).collect(),
            organization: None,
        }
    }

    #[test]
    fn has_any_matches_any_listed_policy() {
        let policy = policy_with(&[Policy::ListTree]);
        assert!(policy.has_any(&[Policy::SuperPermission, Policy::ListTree]));
        assert!(!policy.has_any(&[Policy::SuperPermission, Policy::ListGrower]));
        assert!(!policy_with(&[]).has_any(&[Policy::ListTree]));
    }

    #[test]
    fn policy_deserializes_from_snake_case() {
        let policy: UserPolicy = serde_json::from_str(
            r#"{
                "policies": [{"name": "super_permission"}, {"name": "approve_tree"}],
                "organization": {"id": 5, "name": "Grower Org"}
            }"#,
        )
        .unwrap();
        assert!(policy.has_any(&[Policy::SuperPermission]));
        assert_eq!(policy.organization.as_ref().unwrap().id, 5);
    }
}
