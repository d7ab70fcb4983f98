//! Routing table for the access gate.
//!
//! The gate only ever lands the user on one of four destinations. Everything
//! else inside the authenticated screen group is an opaque [`Segment::Other`].

use serde::{Deserialize, Serialize};

/// Navigation parameter name consumed by the paywall screen.
pub const FROM_ONBOARDING_PARAM: &str = "fromOnboarding";

/// The only value the paywall accepts for [`FROM_ONBOARDING_PARAM`].
pub const FROM_ONBOARDING_VALUE: &str = "true";

/// Fixed destinations the gate can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Onboarding,
    Login,
    Paywall,
    /// Main app home (tab group).
    Home,
}

impl Route {
    /// Router path for this destination.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Onboarding => "/(auth)/onboarding",
            Route::Login => "/(auth)/login",
            Route::Paywall => "/(auth)/paywall",
            Route::Home => "/(tabs)",
        }
    }

    /// Segment the router reports once this route is active.
    pub fn segment(&self) -> Segment {
        match self {
            Route::Onboarding => Segment::Onboarding,
            Route::Login => Segment::Login,
            Route::Paywall => Segment::Paywall,
            Route::Home => Segment::Other("(tabs)".to_string()),
        }
    }
}

/// Optional navigation parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams {
    /// Marks a paywall navigation as coming out of the onboarding / cold-start
    /// flow. The paywall auto-presents the purchase UI only when this is set.
    pub from_onboarding: bool,
}

impl RouteParams {
    pub fn from_onboarding() -> Self {
        Self {
            from_onboarding: true,
        }
    }

    /// Parse parameters from raw router query pairs.
    pub fn from_query<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let from_onboarding = pairs
            .into_iter()
            .any(|(key, value)| key == FROM_ONBOARDING_PARAM && value == FROM_ONBOARDING_VALUE);
        Self { from_onboarding }
    }

    /// Render parameters as router query pairs.
    pub fn to_query(&self) -> Vec<(&'static str, &'static str)> {
        if self.from_onboarding {
            vec![(FROM_ONBOARDING_PARAM, FROM_ONBOARDING_VALUE)]
        } else {
            Vec::new()
        }
    }
}

/// A single "replace current route" command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub route: Route,
    pub params: RouteParams,
}

impl Destination {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            params: RouteParams::default(),
        }
    }

    pub fn home() -> Self {
        Self::new(Route::Home)
    }

    pub fn onboarding() -> Self {
        Self::new(Route::Onboarding)
    }

    pub fn login() -> Self {
        Self::new(Route::Login)
    }

    /// Paywall entered from the onboarding / cold-start flow.
    pub fn paywall_from_onboarding() -> Self {
        Self {
            route: Route::Paywall,
            params: RouteParams::from_onboarding(),
        }
    }

    /// Full href including query string, e.g. `/(auth)/paywall?fromOnboarding=true`.
    pub fn href(&self) -> String {
        let query = self.params.to_query();
        if query.is_empty() {
            return self.route.path().to_string();
        }
        let query = query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.route.path(), query)
    }
}

/// Current position inside the authenticated screen group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    Onboarding,
    Login,
    Paywall,
    Other(String),
}

impl Segment {
    /// Derive the segment from a router path. The last non-empty path
    /// component decides; query strings are ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path.split('?').next().unwrap_or_default();
        let last = path
            .split('/')
            .filter(|part| !part.is_empty())
            .last()
            .unwrap_or_default();
        match last {
            "onboarding" => Segment::Onboarding,
            "login" => Segment::Login,
            "paywall" => Segment::Paywall,
            other => Segment::Other(other.to_string()),
        }
    }

    pub fn is_login(&self) -> bool {
        matches!(self, Segment::Login)
    }

    pub fn is_paywall(&self) -> bool {
        matches!(self, Segment::Paywall)
    }

    pub fn is_onboarding(&self) -> bool {
        matches!(self, Segment::Onboarding)
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Onboarding => write!(f, "onboarding"),
            Segment::Login => write!(f, "login"),
            Segment::Paywall => write!(f, "paywall"),
            Segment::Other(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_from_path_uses_last_component() {
        assert_eq!(Segment::from_path("/(auth)/onboarding"), Segment::Onboarding);
        assert_eq!(Segment::from_path("/(auth)/login"), Segment::Login);
        assert_eq!(
            Segment::from_path("/(auth)/paywall?fromOnboarding=true"),
            Segment::Paywall
        );
        assert_eq!(
            Segment::from_path("/(auth)/history"),
            Segment::Other("history".to_string())
        );
    }

    #[test]
    fn every_route_path_parses_back_to_its_segment() {
        for route in [Route::Onboarding, Route::Login, Route::Paywall, Route::Home] {
            assert_eq!(Segment::from_path(route.path()), route.segment());
        }
    }

    #[test]
    fn paywall_href_carries_from_onboarding_param() {
        assert_eq!(
            Destination::paywall_from_onboarding().href(),
            "/(auth)/paywall?fromOnboarding=true"
        );
        assert_eq!(Destination::login().href(), "/(auth)/login");
    }

    #[test]
    fn from_query_only_accepts_literal_true() {
        assert!(RouteParams::from_query([("fromOnboarding", "true")]).from_onboarding);
        assert!(!RouteParams::from_query([("fromOnboarding", "1")]).from_onboarding);
        assert!(!RouteParams::from_query(std::iter::empty()).from_onboarding);
    }
}
