//! pdfsmith - Client-side PDF toolbox
//!
//! A WebAssembly site offering the classic PDF utilities (merge, split,
//! compress, convert) with every byte kept in the visitor's browser.
//! Validation, progress math and the run state machine live in the
//! `pdfsmith` core crate; this crate wraps them in Leptos signals and
//! browser glue.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (theme toggle, mobile menu)                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                     │
//! │  ├── "/"            HomePage (hero, grid, FAQ, newsletter)  │
//! │  ├── "/tools/:slug" ToolPage (upload → process → result)    │
//! │  └── "/*any"        NotFoundPage                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToastHost (one toast at a time)                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Timing constants for runs, toasts and transitions
//! - [`types`] - The copyable [`Toasts`] handle
//! - [`components`] - UI components (Header, UploadZone, ToastHost, etc.)
//! - [`pages`] - Routed views (home, tool, not found)
//! - [`services`] - Browser APIs (storage, downloads, viewport glue)

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod pages;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use types::Toasts;
pub use components::*;
pub use pages::*;
pub use services::*;

// =============================================================================
// Application root
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (theme, set_theme) = create_signal(services::storage::load_theme());
    let toasts = Toasts::new();

    // Apply the theme to <html data-theme> and persist changes. The first
    // run only applies; later runs also play the colour transition.
    create_effect(move |prev: Option<()>| {
        let theme = theme.get();
        let _ = gloo_utils::document_element().set_attribute("data-theme", theme.as_str());
        if prev.is_none() {
            return;
        }
        log::info!("🎨 Theme switched to {}", theme.as_str());
        services::storage::save_theme(theme);
        if let Some(body) = gloo_utils::document().body() {
            let _ = body.class_list().add_1("theme-transition");
            spawn_local(async move {
                TimeoutFuture::new(config::THEME_TRANSITION_MS).await;
                let _ = body.class_list().remove_1("theme-transition");
            });
        }
    });

    // The static preloader from index.html fades once the app is up
    services::observer::fade_preloader();

    view! {
        <Router>
            <Header theme=theme set_theme=set_theme/>
            <main class="main">
                <Routes>
                    <Route path="/" view=move || view! { <HomePage toasts=toasts/> }/>
                    <Route path="/tools/:slug" view=move || view! { <ToolPage toasts=toasts/> }/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </main>
            <Footer/>
            <ToastHost toasts=toasts/>
        </Router>
    }
}
