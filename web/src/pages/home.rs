//! Home page – feed of loops plus a "suggested for you" sidebar.

use leptos::prelude::*;
use snaploop_common::content::{fixtures, LikedVideoEntry, SuggestedUser};

use crate::components::user_card::UserCard;
use crate::components::video_card::LikedVideoCard;

/// How many suggested users the sidebar shows.
const SIDEBAR_USERS: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let content = fixtures();

    view! {
        <div class="home-page">
            <section class="feed">
                <h1>"For You"</h1>
                <div class="video-grid">
                    <For
                        each=move || content.liked_videos.clone()
                        key=|v| v.id
                        children=move |video: LikedVideoEntry| {
                            view! { <LikedVideoCard video=video /> }
                        }
                    />
                </div>
            </section>

            <aside class="suggested">
                <h2>"Suggested for you"</h2>
                <For
                    each={move || content.suggested_users.iter().take(SIDEBAR_USERS).cloned().collect::<Vec<_>>()}
                    key=|u| u.id
                    children=move |user: SuggestedUser| {
                        view! { <UserCard user=user /> }
                    }
                />
                <a href="/explore" class="see-all">"See all"</a>
            </aside>
        </div>
    }
}
