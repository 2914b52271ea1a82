use chrono::Datelike;
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <a href="/" class="logo">
                        <i class="fas fa-file-pdf"></i>
                        " pdfsmith"
                    </a>
                    <p>"Every PDF tool you need, right in your browser."</p>
                </div>
                <div class="footer-links">
                    <a href="/#tools" class="footer-link">
                        "Tools"
                    </a>
                    <a href="/#features" class="footer-link">
                        "Features"
                    </a>
                    <a href="/#faq" class="footer-link">
                        "FAQ"
                    </a>
                </div>
            </div>
            <div class="footer-bottom">
                <p>
                    "Copyright © " <span class="current-year">{year}</span>
                    " pdfsmith. All files are processed locally in your browser."
                </p>
            </div>
        </footer>
    }
}
