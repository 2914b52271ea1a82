use leptos::*;
use pdfsmith::upload::icon_class;
use pdfsmith::UploadedFile;

/// Modal with the metadata of one selected file.
///
/// No renderer is wired up, so the body is a placeholder; closing works
/// from the button, a backdrop click or Escape.
#[component]
pub fn FilePreview(file: UploadedFile, on_close: Callback<()>) -> impl IntoView {
    window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.call(());
        }
    });

    let modified = format_modified(file.last_modified_ms);
    let icon = icon_class(&file.mime_type);

    view! {
        <div class="file-preview-modal" on:click=move |_| on_close.call(())>
            <div class="preview-content" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                <button class="close-preview" on:click=move |_| on_close.call(())>
                    <i class="fas fa-times"></i>
                </button>
                <h3>{file.name.clone()}</h3>
                <div class="preview-info">
                    <div class="preview-row">
                        <strong>"Type: "</strong>
                        {file.mime_type.clone()}
                    </div>
                    <div class="preview-row">
                        <strong>"Size: "</strong>
                        {file.size_label()}
                    </div>
                    <div class="preview-row">
                        <strong>"Last Modified: "</strong>
                        {modified}
                    </div>
                </div>
                <div class="preview-message">
                    <i class=format!("{} preview-icon", icon)></i>
                    <p>"File preview would be displayed here"</p>
                    <p class="preview-note">
                        "In a full implementation, PDF.js or another renderer would display the file here"
                    </p>
                </div>
            </div>
        </div>
    }
}

/// Date of the file's last modification, or a dash when the timestamp
/// is unusable.
fn format_modified(last_modified_ms: f64) -> String {
    chrono::DateTime::from_timestamp_millis(last_modified_ms as i64)
        .map(|date| date.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::format_modified;

    #[test]
    fn test_modified_date_formatting() {
        // 2024-01-15T10:30:00Z
        assert_eq!(format_modified(1_705_314_600_000.0), "1/15/2024");
        // Out-of-range timestamps degrade to a dash
        assert_eq!(format_modified(f64::MAX), "—");
    }
}
