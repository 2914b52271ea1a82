use leptos::*;

use crate::services::observer;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-content">
                <h1 class="hero-title">"Every PDF tool you need, in one place"</h1>
                <p class="hero-subtitle">
                    "Merge, split, compress and convert PDF files directly in your browser. "
                    "No uploads, no accounts, no watermarks."
                </p>
                <div class="hero-actions">
                    <button
                        class="btn btn-primary btn-lg"
                        on:click=move |_| observer::scroll_to_anchor("#tools")
                    >
                        <i class="fas fa-toolbox"></i>
                        " Explore Tools"
                    </button>
                    <button
                        class="btn btn-secondary btn-lg"
                        on:click=move |_| observer::scroll_to_anchor("#features")
                    >
                        "Learn More"
                    </button>
                </div>
            </div>
        </section>
    }
}
