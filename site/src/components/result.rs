use leptos::html;
use leptos::*;
use pdfsmith::{download_filename, PLACEHOLDER_PAYLOAD};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::services::download;
use crate::types::Toasts;

/// Panel shown once a run has finished: download the (placeholder)
/// result or reset the tool for another run.
#[component]
pub fn ResultPanel(toasts: Toasts, on_reset: Callback<()>) -> impl IntoView {
    let container = create_node_ref::<html::Div>();

    // Bring the panel into view as soon as it mounts
    create_effect(move |_| {
        if let Some(element) = container.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Nearest);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let on_download = move |_| {
        toasts.success("Download started");
        let filename = download_filename(js_sys::Date::now() as u64);
        if let Err(err) =
            download::save_text_file(PLACEHOLDER_PAYLOAD, &filename, "text/plain;charset=utf-8")
        {
            log::warn!("Download failed: {}", err);
        }
    };

    view! {
        <div class="result-container active" node_ref=container>
            <div class="result-icon">
                <i class="fas fa-check-circle"></i>
            </div>
            <h3>"Processing Complete!"</h3>
            <p>"Your file is ready for download"</p>
            <div class="result-actions">
                <button class="btn btn-primary btn-download" on:click=on_download>
                    <i class="fas fa-download"></i>
                    " Download File"
                </button>
                <button class="btn btn-secondary btn-reset" on:click=move |_| on_reset.call(())>
                    <i class="fas fa-redo"></i>
                    " Process Another File"
                </button>
            </div>
        </div>
    }
}
