//! Navigation destinations and active-route matching.
//!
//! Everything here is a pure function of the current path handed over by
//! the router, so it stays independent of whichever UI framework renders
//! the header.

use serde::{Deserialize, Serialize};

// ─── Destinations ────────────────────────────────────────────────────────────

/// One of the fixed navigation targets shown in the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavRoute {
    Home,
    Upload,
    Explore,
    Profile,
}

impl NavRoute {
    /// All destinations in display order.
    pub const ALL: [NavRoute; 4] = [
        NavRoute::Home,
        NavRoute::Upload,
        NavRoute::Explore,
        NavRoute::Profile,
    ];

    pub fn path(self) -> &'static str {
        match self {
            NavRoute::Home => "/",
            NavRoute::Upload => "/upload",
            NavRoute::Explore => "/explore",
            NavRoute::Profile => "/profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavRoute::Home => "Home",
            NavRoute::Upload => "Upload",
            NavRoute::Explore => "Explore",
            NavRoute::Profile => "Profile",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NavRoute::Home => "🏠",
            NavRoute::Upload => "➕",
            NavRoute::Explore => "🧭",
            NavRoute::Profile => "👤",
        }
    }

    /// Whether this destination corresponds to `current_path`.
    ///
    /// Home's path is a prefix of every other path, so it only matches
    /// exactly. The rest match on equality or prefix.
    pub fn matches(self, current_path: &str) -> bool {
        match self {
            NavRoute::Home => current_path == self.path(),
            _ => current_path.starts_with(self.path()),
        }
    }

    pub fn visual_state(self, current_path: &str) -> VisualState {
        if self.matches(current_path) {
            VisualState::Active
        } else {
            VisualState::Inactive
        }
    }
}

// ─── Render output ───────────────────────────────────────────────────────────

/// Style variant of a navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualState {
    Active,
    Inactive,
}

impl VisualState {
    pub fn is_active(self) -> bool {
        self == VisualState::Active
    }
}

/// Everything a renderer needs to draw one navigation control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub route: NavRoute,
    pub icon: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub is_active: bool,
}

/// Compute the header controls for `current_path`, in display order.
pub fn nav_items(current_path: &str) -> [NavItem; 4] {
    NavRoute::ALL.map(|route| NavItem {
        route,
        icon: route.icon(),
        label: route.label(),
        path: route.path(),
        is_active: route.matches(current_path),
    })
}

/// The destination highlighted for `current_path`, if any.
pub fn active_route(current_path: &str) -> Option<NavRoute> {
    NavRoute::ALL
        .into_iter()
        .find(|route| route.matches(current_path))
}

// ─── Motion hints ────────────────────────────────────────────────────────────

/// Optional hover/press scaling for renderers that animate controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub hover_scale: f32,
    pub tap_scale: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            hover_scale: 1.05,
            tap_scale: 0.95,
        }
    }
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn active(path: &str) -> Vec<NavRoute> {
        nav_items(path)
            .into_iter()
            .filter(|item| item.is_active)
            .map(|item| item.route)
            .collect()
    }

    #[test]
    fn test_exactly_one_active_on_known_paths() {
        for route in NavRoute::ALL {
            assert_eq!(active(route.path()), vec![route], "path {}", route.path());
        }
    }

    #[test]
    fn test_root_activates_home_only() {
        assert_eq!(active("/"), vec![NavRoute::Home]);
        assert_eq!(NavRoute::Upload.visual_state("/"), VisualState::Inactive);
    }

    #[test]
    fn test_upload_does_not_highlight_home() {
        assert_eq!(active("/upload"), vec![NavRoute::Upload]);
        assert!(!NavRoute::Home.matches("/upload"));
    }

    #[test]
    fn test_prefix_match_for_nested_paths() {
        assert_eq!(active("/explore/trending"), vec![NavRoute::Explore]);
        assert_eq!(active_route("/explore/trending"), Some(NavRoute::Explore));
        assert_eq!(active_route("/profile/liked"), Some(NavRoute::Profile));
    }

    #[test]
    fn test_unknown_or_empty_path_activates_nothing() {
        assert!(active("/unknown").is_empty());
        assert!(active("").is_empty());
        assert_eq!(active_route("/unknown"), None);
    }

    #[test]
    fn test_items_keep_display_order() {
        let items = nav_items("/");
        let labels: Vec<_> = items.iter().map(|i| i.label).collect();
        assert_eq!(labels, ["Home", "Upload", "Explore", "Profile"]);
        assert_eq!(items[2].path, "/explore");
        assert!(VisualState::Active.is_active());
    }
}
