//! Explore page – suggested creators, optionally narrowed to one category
//! via `/explore/:category`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use snaploop_common::content::{category_slug, fixtures};

use crate::components::user_card::UserCard;

#[component]
pub fn ExplorePage() -> impl IntoView {
    let content = fixtures();
    let params = use_params_map();
    let selected = move || params.with(|p| p.get("category"));

    let all_class = move || if selected().is_none() { "chip active" } else { "chip" };
    let chips = content
        .categories()
        .into_iter()
        .map(|label| {
            let slug = category_slug(label);
            let href = format!("/explore/{slug}");
            let class = move || {
                if selected().as_deref() == Some(slug.as_str()) {
                    "chip active"
                } else {
                    "chip"
                }
            };
            view! { <a href=href class=class>{label}</a> }
        })
        .collect_view();

    let users = move || {
        let list: Vec<_> = match selected() {
            Some(slug) => content.users_in_category(&slug).cloned().collect(),
            None => content.suggested_users.clone(),
        };
        if list.is_empty() {
            view! { <p class="empty">"No creators in this category yet."</p> }.into_any()
        } else {
            list.into_iter()
                .map(|user| view! { <UserCard user=user /> })
                .collect_view()
                .into_any()
        }
    };

    view! {
        <div class="explore-page">
            <h1>"Explore creators"</h1>
            <nav class="category-chips">
                <a href="/explore" class=all_class>"All"</a>
                {chips}
            </nav>
            <div class="user-grid">{users}</div>
        </div>
    }
}
