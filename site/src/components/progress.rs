use leptos::*;
use pdfsmith::ToolSession;

/// Progress panel for the running tool: file name and size, the bar
/// itself, the percentage and the time estimate. Slides in through the
/// `active` class while a run is live and for a short hold after it
/// finishes.
#[component]
pub fn ProgressPanel(session: RwSignal<ToolSession>) -> impl IntoView {
    let active = move || session.with(|s| s.progress().is_active());
    let file_label = move || session.with(|s| s.progress().file_label().to_string());
    let size_label = move || session.with(|s| s.progress().size_label());
    let percent = move || session.with(|s| s.progress().percent());
    let percent_label = move || session.with(|s| s.progress().percent_label());
    let estimate = move || session.with(|s| s.progress().estimate().to_string());

    view! {
        <div class="progress-container" class:active=active>
            <div class="progress-header">
                <span class="current-file">{file_label}</span>
                <span class="file-size">{size_label}</span>
            </div>
            <div class="progress-bar-modern">
                <div
                    class="progress-fill-modern"
                    style:width=move || format!("{}%", percent())
                ></div>
            </div>
            <div class="progress-meta">
                <span class="progress-percentage">{percent_label}</span>
                <span class="time-remaining">{estimate}</span>
            </div>
        </div>
    }
}
