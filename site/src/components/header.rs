use leptos::*;
use leptos_router::use_location;
use pdfsmith::Theme;
use wasm_bindgen::JsCast;

use crate::services::observer;

#[component]
pub fn Header(theme: ReadSignal<Theme>, set_theme: WriteSignal<Theme>) -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let pathname = use_location().pathname;

    // Close the mobile menu on any click outside the header
    window_event_listener(ev::click, move |ev| {
        if !menu_open.get_untracked() {
            return;
        }
        let inside = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|element| element.closest(".header").ok().flatten())
            .is_some();
        if !inside {
            set_menu_open.set(false);
        }
    });
    window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            set_menu_open.set(false);
        }
    });

    // Section links scroll in place on the landing page and navigate home
    // from everywhere else
    let section_click = move |ev: web_sys::MouseEvent, fragment: &'static str| {
        set_menu_open.set(false);
        if pathname.get_untracked() == "/" {
            ev.prevent_default();
            observer::scroll_to_anchor(fragment);
        }
    };

    let on_theme_click = move |_| {
        set_theme.update(|theme| *theme = theme.toggled());
    };

    view! {
        <header class="header">
            <div class="navbar">
                <a href="/" class="logo">
                    <i class="fas fa-file-pdf"></i>
                    " pdfsmith"
                </a>

                <nav class="nav-menu" class:active=menu_open>
                    <a
                        href="/#tools"
                        class="nav-link"
                        on:click=move |ev| section_click(ev, "#tools")
                    >
                        "Tools"
                    </a>
                    <a
                        href="/#features"
                        class="nav-link"
                        on:click=move |ev| section_click(ev, "#features")
                    >
                        "Features"
                    </a>
                    <a href="/#faq" class="nav-link" on:click=move |ev| section_click(ev, "#faq")>
                        "FAQ"
                    </a>
                </nav>

                <div class="nav-actions">
                    <button class="theme-toggle" title="Toggle theme" on:click=on_theme_click>
                        <i class=move || {
                            if theme.get() == Theme::Dark { "fas fa-sun" } else { "fas fa-moon" }
                        }></i>
                    </button>
                    <button
                        class="nav-toggle"
                        class:active=menu_open
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <i class=move || {
                            if menu_open.get() { "fas fa-times" } else { "fas fa-bars" }
                        }></i>
                    </button>
                </div>
            </div>
        </header>
    }
}
