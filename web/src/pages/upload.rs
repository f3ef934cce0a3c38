//! Upload page – static form; this build has no upload pipeline.

use leptos::prelude::*;

#[component]
pub fn UploadPage() -> impl IntoView {
    view! {
        <div class="upload-page">
            <h1>"Upload a loop"</h1>
            <form class="upload-form" on:submit=|ev| ev.prevent_default()>
                <label class="drop-zone">
                    <span class="drop-icon" aria-hidden="true">"⬆"</span>
                    <span>"Drag a video here or choose a file"</span>
                    <input type="file" accept="video/*" disabled/>
                </label>
                <label>
                    "Caption"
                    <input type="text" name="caption" placeholder="Say something about your loop" disabled/>
                </label>
                <button type="submit" class="btn-primary" disabled>"Post"</button>
                <p class="notice">"Uploads are not available in this preview."</p>
            </form>
        </div>
    }
}
