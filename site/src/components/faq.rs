use leptos::*;

const FAQ_ITEMS: [(&str, &str); 5] = [
    (
        "Is pdfsmith really free?",
        "Yes. Every tool on this site is free to use, with no accounts, no watermarks and no daily limits.",
    ),
    (
        "Are my files uploaded to a server?",
        "No. Everything runs locally in your browser, so your files never leave your device.",
    ),
    (
        "What file types can I upload?",
        "PDF files, JPEG, PNG, GIF and WebP images, plus Word, Excel and PowerPoint documents, up to 50MB each.",
    ),
    (
        "Why is there a 50MB limit?",
        "Processing happens in your browser's memory. The limit keeps every tool fast on typical hardware.",
    ),
    (
        "Do the tools work on mobile?",
        "Yes. The site is fully responsive and works in any modern mobile browser.",
    ),
];

/// FAQ accordion. Opening a question closes the previous one, and
/// clicking the open question closes it again.
#[component]
pub fn Faq() -> impl IntoView {
    let (open, set_open) = create_signal(None::<usize>);

    view! {
        <section class="faq-section" id="faq">
            <div class="section-heading">
                <h2>"Frequently asked questions"</h2>
            </div>
            <div class="faq-list">
                {FAQ_ITEMS
                    .iter()
                    .enumerate()
                    .map(|(index, (question, answer))| {
                        view! {
                            <div class="faq-item" class:active=move || open.get() == Some(index)>
                                <button
                                    class="faq-question"
                                    on:click=move |_| {
                                        set_open
                                            .update(|open| {
                                                *open = if *open == Some(index) {
                                                    None
                                                } else {
                                                    Some(index)
                                                };
                                            })
                                    }
                                >
                                    <span>{*question}</span>
                                    <i class="fas fa-chevron-down"></i>
                                </button>
                                <div class="faq-answer">
                                    <p>{*answer}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
