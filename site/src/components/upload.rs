use leptos::html;
use leptos::*;
use pdfsmith::upload::{icon_class, type_label};
use pdfsmith::{ToolSession, UploadedFile, ALLOWED_MIME_TYPES};

use crate::components::FilePreview;
use crate::types::Toasts;

#[component]
pub fn UploadZone(session: RwSignal<ToolSession>, toasts: Toasts) -> impl IntoView {
    let (dragging, set_dragging) = create_signal(false);
    let preview = create_rw_signal(None::<UploadedFile>);
    let input_ref = create_node_ref::<html::Input>();

    let has_files = move || session.with(|s| !s.files().is_empty());
    let files = move || session.with(|s| s.files().to_vec());
    let stats = move || session.with(|s| s.stats());

    // Shared by the picker and the drop handler
    let accept_files = move |list: web_sys::FileList| {
        let candidates = snapshot_files(&list);
        if candidates.is_empty() {
            return;
        }
        log::info!("📄 {} file(s) offered to the batch", candidates.len());
        let outcome = session
            .try_update(|s| s.add_files(candidates))
            .unwrap_or_default();
        for reason in &outcome.rejected {
            toasts.error(reason.to_string());
        }
        if outcome.accepted > 0 {
            toasts.success(format!("Added {} file(s)", outcome.accepted));
        }
    };

    let open_picker = move || {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(list) = input.files() {
            accept_files(list);
        }
        // Re-selecting the same file must fire change again
        input.set_value("");
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        if let Some(transfer) = ev.data_transfer() {
            if let Some(list) = transfer.files() {
                accept_files(list);
            }
        }
    };

    let on_clear = move |_| {
        let _ = session.try_update(|s| s.clear_files());
        toasts.info("All files cleared");
    };

    view! {
        <div class="upload-section">
            <div
                class="upload-area"
                class:dragover=dragging
                on:click=move |_| open_picker()
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_dragging.set(true);
                }
                on:dragleave=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_dragging.set(false);
                }
                on:drop=on_drop
            >
                // The programmatic click must not bubble back into the zone
                <input
                    type="file"
                    multiple=true
                    accept=ALLOWED_MIME_TYPES.join(",")
                    style="display: none;"
                    node_ref=input_ref
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                    on:change=on_change
                />
                <div class="upload-content">
                    <i class="fas fa-cloud-upload-alt upload-icon"></i>
                    <h3>"Drop your files here"</h3>
                    <p>"or click to browse files"</p>
                    <div class="upload-features">
                        <span>
                            <i class="fas fa-lock"></i>
                            " 100% Secure"
                        </span>
                        <span>
                            <i class="fas fa-bolt"></i>
                            " Instant Processing"
                        </span>
                        <span>
                            <i class="fas fa-infinity"></i>
                            " No Limits"
                        </span>
                    </div>
                    <button
                        type="button"
                        class="btn btn-primary btn-select-files"
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.stop_propagation();
                            open_picker();
                        }
                    >
                        <i class="fas fa-folder-open"></i>
                        " Select Files"
                    </button>
                </div>
                <Show when=move || dragging.get() fallback=|| view! {}>
                    <div class="drop-hint">
                        <i class="fas fa-hand-pointer"></i>
                        <p>"Drop files to upload"</p>
                    </div>
                </Show>
            </div>

            <Show when=has_files fallback=|| view! {}>
                <div class="upload-stats">
                    <div class="stat-item">
                        <span class="stat-number">{move || stats().files}</span>
                        <span class="stat-label">"Files"</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-number">{move || stats().total_label()}</span>
                        <span class="stat-label">"Total Size"</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-number">{move || stats().pdf_count}</span>
                        <span class="stat-label">"PDF Files"</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-number">{move || stats().other_count}</span>
                        <span class="stat-label">"Other Files"</span>
                    </div>
                </div>
            </Show>

            <div class="file-list">
                <Show
                    when=has_files
                    fallback=|| {
                        view! {
                            <div class="empty-state">
                                <i class="fas fa-file-import"></i>
                                <h3>"No files selected"</h3>
                                <p>"Drag and drop files here or click the upload area"</p>
                            </div>
                        }
                    }
                >
                    <div class="file-list-header">
                        <h4>"Selected Files"</h4>
                        <button class="btn-link btn-clear-all" on:click=on_clear>
                            "Clear All"
                        </button>
                    </div>
                    // Rebuilt wholesale on every change so row indices stay in
                    // step with the batch
                    {move || {
                        files()
                            .into_iter()
                            .enumerate()
                            .map(|(index, file)| {
                                let pages_label = match file.estimated_pages() {
                                    Some(pages) => format!("{} pages", pages),
                                    None => "N/A".to_string(),
                                };
                                let icon = icon_class(&file.mime_type);
                                let kind = type_label(&file.mime_type);
                                let size = file.size_label();
                                let name = file.name.clone();
                                view! {
                                    <div class="file-item">
                                        <div class="file-info">
                                            <div class="file-icon">
                                                <i class=icon></i>
                                            </div>
                                            <div class="file-details">
                                                <h4>{name}</h4>
                                                <div class="file-meta">
                                                    <span class="file-size">
                                                        <i class="fas fa-weight-hanging"></i>
                                                        {format!(" {}", size)}
                                                    </span>
                                                    <span class="file-pages">
                                                        <i class="fas fa-copy"></i>
                                                        {format!(" {}", pages_label)}
                                                    </span>
                                                    <span class="file-type">
                                                        <i class="fas fa-file"></i>
                                                        {format!(" {}", kind)}
                                                    </span>
                                                </div>
                                            </div>
                                        </div>
                                        <div class="file-actions">
                                            <button
                                                class="btn-icon btn-preview"
                                                title="Preview"
                                                on:click=move |_| preview.set(Some(file.clone()))
                                            >
                                                <i class="fas fa-eye"></i>
                                            </button>
                                            <button
                                                class="btn-icon btn-remove"
                                                title="Remove"
                                                on:click=move |_| {
                                                    let removed = session
                                                        .try_update(|s| s.remove_file(index))
                                                        .flatten();
                                                    if removed.is_some() {
                                                        toasts.info("File removed");
                                                    }
                                                }
                                            >
                                                <i class="fas fa-times"></i>
                                            </button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </Show>
            </div>

            {move || {
                preview
                    .get()
                    .map(|file| {
                        view! {
                            <FilePreview
                                file=file
                                on_close=Callback::new(move |_| preview.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

/// Snapshot browser `File` metadata into plain upload candidates.
fn snapshot_files(list: &web_sys::FileList) -> Vec<UploadedFile> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|file| {
            UploadedFile::new(
                file.name(),
                file.type_(),
                file.size() as u64,
                file.last_modified(),
            )
        })
        .collect()
}
