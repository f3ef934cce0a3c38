//! Profile page – the signed-in user's header with posted and liked videos.

use leptos::prelude::*;
use snaploop_common::content::fixtures;

use crate::components::profile_header::ProfileHeader;
use crate::components::video_card::{LikedVideoCard, VideoCard};

/// Which list the profile page shows below the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileTab {
    Videos,
    Liked,
}

impl ProfileTab {
    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::Videos => "Videos",
            ProfileTab::Liked => "Liked",
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let content = fixtures();
    let (tab, set_tab) = signal(ProfileTab::Videos);

    let tab_button = move |which: ProfileTab| {
        view! {
            <button
                class=move || if tab.get() == which { "tab active" } else { "tab" }
                on:click=move |_| set_tab.set(which)
            >
                {which.label()}
            </button>
        }
    };

    let videos = move || match tab.get() {
        ProfileTab::Videos => content
            .profile_videos
            .iter()
            .cloned()
            .map(|video| view! { <VideoCard video=video /> })
            .collect_view()
            .into_any(),
        ProfileTab::Liked => content
            .liked_videos
            .iter()
            .cloned()
            .map(|video| view! { <LikedVideoCard video=video /> })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="profile-page">
            <ProfileHeader profile=content.profile.clone()/>
            <div class="profile-tabs" role="tablist">
                {tab_button(ProfileTab::Videos)}
                {tab_button(ProfileTab::Liked)}
            </div>
            <div class="video-grid">{videos}</div>
        </div>
    }
}
