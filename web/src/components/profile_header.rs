//! Profile banner: avatar, bio and follow counts.

use leptos::prelude::*;
use snaploop_common::content::UserProfile;

/// `(href, label)` for the profile website, or `None` when it is unset.
pub fn website_link(website: &str) -> Option<(String, String)> {
    let website = website.trim();
    if website.is_empty() {
        return None;
    }
    let label = website
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .to_string();
    Some((website.to_string(), label))
}

#[component]
pub fn ProfileHeader(profile: UserProfile) -> impl IntoView {
    let website = website_link(&profile.website);

    view! {
        <section class="profile-header">
            <img src=profile.avatar_url alt=profile.display_name.clone() class="profile-avatar"/>
            <div class="profile-info">
                <h1 class="display-name">{profile.display_name}</h1>
                <span class="handle">{profile.handle}</span>
                <p class="bio">{profile.bio}</p>
                <div class="profile-meta">
                    <span class="location">{profile.location}</span>
                    {website.map(|(href, label)| view! {
                        <a href=href class="website" rel="noopener" target="_blank">{label}</a>
                    })}
                    <span class="joined">{profile.joined}</span>
                </div>
                <div class="profile-stats">
                    <span><strong>{profile.followers}</strong> " followers"</span>
                    <span><strong>{profile.following}</strong> " following"</span>
                </div>
            </div>
        </section>
    }
}
