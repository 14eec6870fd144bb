//! Pre-navigation authorization.
//!
//! Every navigation attempt is evaluated here before the destination
//! mounts. The only gated destination is the upload page, which requires
//! a recognized role; everything else is always allowed.

use std::fmt;

/// Path of the login destination, the target of every denied navigation.
pub const LOGIN_PATH: &str = "/login";

/// Path of the only gated destination.
pub const UPLOAD_PATH: &str = "/upload";

/// Permission classes recognized by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A friend of the community ("ami").
    Ami,
    /// A streamer.
    Streamer,
}

impl Role {
    /// Parses a stored role string. Comparison is exact and
    /// case-sensitive; anything else is an unknown role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ami" => Some(Self::Ami),
            "streamer" => Some(Self::Streamer),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ami => "ami",
            Self::Streamer => "streamer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only access to the persisted role.
///
/// Implementations must return the currently stored value on every call;
/// the gate never caches it, so a role change between navigations takes
/// effect on the very next attempt.
pub trait RoleProvider {
    fn role(&self) -> Option<String>;
}

/// Outcome of evaluating a single navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Continue to the requested destination.
    Allow,
    /// Abandon the attempt and navigate to the given path instead.
    Redirect(&'static str),
}

/// Role-based navigation gate.
///
/// The role source is injected at construction so the gate itself has no
/// ambient reads. Evaluation is synchronous, has no side effects, and
/// resolves each attempt to exactly one decision.
#[derive(Clone)]
pub struct NavigationGate<P> {
    roles: P,
}

impl<P: RoleProvider> NavigationGate<P> {
    pub fn new(roles: P) -> Self {
        Self { roles }
    }

    /// Decides a navigation attempt. The upload page requires a stored
    /// role that parses to a known [`Role`]; a missing, empty, or
    /// unrecognized value redirects to the login page. Every other
    /// destination is allowed regardless of role.
    pub fn evaluate(&self, target_path: &str) -> Decision {
        if target_path != UPLOAD_PATH {
            return Decision::Allow;
        }

        match self.roles.role() {
            Some(value) if Role::parse(&value).is_some() => Decision::Allow,
            _ => Decision::Redirect(LOGIN_PATH),
        }
    }
}
