//! Root Leptos application component with routing.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::nav::NavBar;
use crate::pages::{
    explore::ExplorePage, home::HomePage, not_found::NotFound, profile::ProfilePage,
    upload::UploadPage,
};

/// HTML document wrapping `<App/>` for server-side rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// The root `<App/>` component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/snaploop-web.css"/>
        <Title text="SnapLoop"/>
        <Meta name="description" content="Short loops from people you follow"/>

        <Router>
            <NavBar/>
            <main class="main-content">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/upload") view=UploadPage/>
                    <Route path=path!("/explore") view=ExplorePage/>
                    <Route path=path!("/explore/:category") view=ExplorePage/>
                    <Route path=path!("/profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
