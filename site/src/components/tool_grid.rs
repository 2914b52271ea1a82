use leptos::*;
use pdfsmith::tools;

/// Card grid linking to every tool page, driven by the static registry.
#[component]
pub fn ToolGrid() -> impl IntoView {
    view! {
        <section class="tools-section" id="tools">
            <div class="section-heading">
                <h2>"All the tools you need"</h2>
                <p>"Pick a tool, drop your files, done."</p>
            </div>
            <div class="tools-grid">
                {tools::all()
                    .iter()
                    .map(|spec| {
                        view! {
                            <a class="tool-card" href=format!("/tools/{}", spec.slug)>
                                <div class="tool-icon">
                                    <i class=spec.icon></i>
                                </div>
                                <h3>{spec.title}</h3>
                                <p>{spec.tagline}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
