//! Top navigation bar component.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use snaploop_common::nav::{Motion, NavRoute, VisualState};

/// CSS classes for a navigation control in `state`.
pub fn link_class(state: VisualState) -> &'static str {
    match state {
        VisualState::Active => "nav-link active",
        VisualState::Inactive => "nav-link",
    }
}

/// Inline custom properties read by the hover/press transitions in the stylesheet.
pub fn motion_style(motion: Motion) -> String {
    format!(
        "--nav-hover-scale: {}; --nav-tap-scale: {}",
        motion.hover_scale, motion.tap_scale
    )
}

/// Site-wide navigation bar. Highlights the destination matching the
/// router's current path; clicks are handled by the router.
#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;

    let links = NavRoute::ALL
        .into_iter()
        .map(|route| {
            let state = Memo::new(move |_| pathname.with(|path| route.visual_state(path)));
            // Plain anchors, which the router still intercepts: `<A>` applies its own
            // prefix matching and `aria-current`, which would light up Home everywhere.
            view! {
                <a
                    href=route.path()
                    class=move || link_class(state.get())
                    aria-current=move || state.get().is_active().then_some("page")
                >
                    <span class="nav-icon" aria-hidden="true">{route.icon()}</span>
                    <span class="nav-label">{route.label()}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="nav-bar" style=motion_style(Motion::default())>
            <div class="nav-brand">
                <a href="/" class="nav-logo">"SnapLoop"</a>
            </div>
            <nav class="nav-links">{links}</nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_class() {
        assert_eq!(link_class(VisualState::Active), "nav-link active");
        assert_eq!(link_class(VisualState::Inactive), "nav-link");
    }

    #[test]
    fn test_motion_style() {
        assert_eq!(
            motion_style(Motion::default()),
            "--nav-hover-scale: 1.05; --nav-tap-scale: 0.95"
        );
    }
}
