//! Suggested-user card for the explore page and home sidebar.

use leptos::prelude::*;
use snaploop_common::content::{category_slug, SuggestedUser};

/// Avatar, names, follower count and a link to the user's category.
#[component]
pub fn UserCard(user: SuggestedUser) -> impl IntoView {
    let category_href = format!("/explore/{}", category_slug(&user.category));

    view! {
        <div class="user-card">
            <div class="avatar" data-initial=user.avatar_initial.to_string()>
                <img src=user.avatar_url alt=user.avatar_initial.to_string() class="avatar-img" loading="lazy"/>
            </div>
            <div class="user-card-body">
                <span class="display-name">{user.display_name}</span>
                <span class="handle">{user.handle}</span>
                <div class="user-stats">
                    <a href=category_href class="category-badge">{user.category}</a>
                    <span class="follower-count">{user.followers} " followers"</span>
                </div>
            </div>
        </div>
    }
}
