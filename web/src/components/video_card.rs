//! Thumbnail cards for posted and liked videos.

use leptos::prelude::*;
use snaploop_common::content::{LikedVideoEntry, VideoEntry};

/// A posted video: thumbnail, title, views and age.
#[component]
pub fn VideoCard(video: VideoEntry) -> impl IntoView {
    view! {
        <article class="video-card">
            <div class="video-thumb-wrap">
                <img src=video.thumbnail_url alt=video.title.clone() class="video-thumb" loading="lazy"/>
                <span class="video-views">{video.views} " views"</span>
            </div>
            <div class="video-card-body">
                <h3 class="video-title">{video.title}</h3>
                <span class="video-time">{video.timestamp}</span>
            </div>
        </article>
    }
}

/// A liked video; also shows who made it.
#[component]
pub fn LikedVideoCard(video: LikedVideoEntry) -> impl IntoView {
    view! {
        <article class="video-card liked">
            <div class="video-thumb-wrap">
                <img src=video.thumbnail_url alt=video.title.clone() class="video-thumb" loading="lazy"/>
                <span class="video-views">{video.views} " views"</span>
            </div>
            <div class="video-card-body">
                <h3 class="video-title">{video.title}</h3>
                <div class="video-meta">
                    <span class="video-creator">{video.creator}</span>
                    <span class="video-time">{video.timestamp}</span>
                </div>
            </div>
        </article>
    }
}
