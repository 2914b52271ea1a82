use leptos::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page not found - pdfsmith"/>
        <div class="not-found">
            <h1>"404"</h1>
            <p>"That page does not exist."</p>
            <a href="/" class="btn btn-primary">
                "Back to the tools"
            </a>
        </div>
    }
}
