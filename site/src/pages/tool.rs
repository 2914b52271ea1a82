use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_meta::Title;
use leptos_router::use_params_map;
use pdfsmith::tools::ToolId;
use pdfsmith::{Phase, ToolSession, PERCENT_STEPS};

use crate::components::{ProgressPanel, ResultPanel, UploadZone};
use crate::config::{PROGRESS_HOLD_MS, STEP_INTERVAL_MS};
use crate::pages::NotFoundPage;
use crate::types::Toasts;

/// Resolves the `:slug` route parameter against the registry. Unknown
/// slugs fall through to the not-found view.
#[component]
pub fn ToolPage(toasts: Toasts) -> impl IntoView {
    let params = use_params_map();
    let tool = move || {
        params.with(|params| params.get("slug").and_then(|slug| ToolId::from_slug(slug)))
    };

    view! {
        {move || match tool() {
            Some(tool) => view! { <ToolScaffold tool=tool toasts=toasts/> }.into_view(),
            None => view! { <NotFoundPage/> }.into_view(),
        }}
    }
}

/// One tool page: headline from the registry, the uploader, controls,
/// the progress panel and the result panel.
///
/// Rebuilt from scratch when the slug changes, so every tool starts with
/// a fresh session. A run in flight at that moment loses its session and
/// its ticks fall through as no-ops.
#[component]
fn ToolScaffold(tool: ToolId, toasts: Toasts) -> impl IntoView {
    let spec = tool.spec();
    let session = create_rw_signal(ToolSession::new());

    let on_process = move |_| {
        match session.try_update(|s| s.begin()) {
            Some(Ok(run)) => {
                log::info!("⚙️ {} run {} started", spec.title, run);
                spawn_local(async move {
                    for step in PERCENT_STEPS {
                        TimeoutFuture::new(STEP_INTERVAL_MS).await;
                        let live = session
                            .try_update(|s| s.advance(run, step))
                            .unwrap_or(false);
                        if !live {
                            return;
                        }
                    }
                    let finished = session.try_update(|s| s.finish(run)).unwrap_or(false);
                    if !finished {
                        return;
                    }
                    log::info!("✅ {} run {} finished", spec.title, run);
                    toasts.success("Processing complete!");

                    // Keep the full bar on screen briefly before hiding it
                    TimeoutFuture::new(PROGRESS_HOLD_MS).await;
                    let _ = session.try_update(|s| s.settle(run));
                });
            }
            Some(Err(err)) => toasts.error(err.to_string()),
            None => {}
        }
    };

    let on_cancel = move |_| {
        let _ = session.try_update(|s| s.cancel());
        toasts.info("Processing cancelled");
    };

    let on_reset = Callback::new(move |_| {
        let _ = session.try_update(|s| s.reset());
        toasts.info("Tool has been reset");
    });

    let processing = move || session.with(|s| s.phase() == Phase::Processing);
    let done = move || session.with(|s| s.phase() == Phase::Done);

    view! {
        <Title text=format!("{} - pdfsmith", spec.title)/>
        <div class="tool-page">
            <section class="tool-header">
                <div class="tool-header-icon">
                    <i class=spec.icon></i>
                </div>
                <h1>{spec.title}</h1>
                <p class="tool-tagline">{spec.tagline}</p>
            </section>

            <UploadZone session=session toasts=toasts/>

            <div class="tool-controls">
                <button class="btn btn-primary btn-process" on:click=on_process>
                    <i class="fas fa-cog"></i>
                    {format!(" {}", spec.action_label)}
                </button>
                <Show when=processing fallback=|| view! {}>
                    <button class="btn btn-secondary btn-cancel" on:click=on_cancel>
                        <i class="fas fa-ban"></i>
                        " Cancel"
                    </button>
                </Show>
            </div>

            <ProgressPanel session=session/>

            <Show when=done fallback=|| view! {}>
                <ResultPanel toasts=toasts on_reset=on_reset/>
            </Show>
        </div>
    }
}
