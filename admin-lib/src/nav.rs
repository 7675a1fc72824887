//! Permission-gated navigation table
//!
//! The route table is computed from the logged-in user and the deployment's
//! feature flags; disabled entries stay in the list so menus can render
//! them greyed out.

use crate::auth::AdminUser;
use crate::auth::Policy;
use crate::config::FeatureFlags;

/// One entry of the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Menu label.
    pub name: &'static str,
    /// Path the entry links to.
    pub link_to: &'static str,
    /// Whether the entry is greyed out for this user.
    pub disabled: bool,
}

fn lacks(user: Option<&AdminUser>, required: &[Policy]) -> bool {
    !user.is_some_and(|user| user.has_permission(required))
}

/// Builds the route table for the given user and feature flags.
///
/// `user` is `None` before login; everything permission-gated is disabled
/// then. The table is recomputed on login and logout.
pub fn routes(user: Option<&AdminUser>, flags: &FeatureFlags) -> Vec<Route> {
    vec![
        Route {
            name: "Home",
            link_to: "/",
            disabled: false,
        },
        Route {
            name: "Verify",
            link_to: "/verify",
            disabled: lacks(
                user,
                &[Policy::SuperPermission, Policy::ListTree, Policy::ApproveTree],
            ),
        },
        Route {
            name: "Captures",
            link_to: "/captures",
            disabled: lacks(user, &[Policy::SuperPermission, Policy::ListTree]),
        },
        Route {
            name: "Capture Matching",
            link_to: "/capture-matching",
            disabled: !flags.capture_matching
                || lacks(user, &[Policy::SuperPermission, Policy::ApproveTree]),
        },
        Route {
            name: "Earnings",
            link_to: "/earnings",
            disabled: !flags.earnings,
        },
        Route {
            name: "Payments",
            link_to: "/payments",
            disabled: !flags.payments,
        },
        Route {
            name: "Growers",
            link_to: "/growers",
            disabled: lacks(user, &[Policy::SuperPermission, Policy::ListGrower]),
        },
        Route {
            name: "Species",
            link_to: "/species",
            // Organization-scoped users do not manage the global species list.
            disabled: lacks(user, &[Policy::SuperPermission, Policy::ListTree])
                || user.is_none_or(|user| user.has_organization()),
        },
        Route {
            name: "User Manager",
            link_to: "/user-manager",
            disabled: lacks(user, &[Policy::SuperPermission]),
        },
        Route {
            name: "Account",
            link_to: "/account",
            disabled: false,
        },
        Route {
            name: "Inbox",
            link_to: "/messaging",
            disabled: !flags.messaging
                || lacks(user, &[Policy::SuperPermission, Policy::SendMessages]),
        },
    ]
}
