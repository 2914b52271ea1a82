use leptos::html;
use leptos::*;

use crate::services::storage;
use crate::types::Toasts;

/// Email capture form. Valid addresses are appended to the stored
/// subscriber list; validation errors only toast and keep the input.
#[component]
pub fn NewsletterSignup(toasts: Toasts) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = input_ref.get() else {
            return;
        };
        let raw = input.value();
        match pdfsmith::newsletter::normalize(&raw) {
            Ok(email) => {
                toasts.success("Thank you for subscribing!");
                if let Err(err) = storage::append_subscriber(email) {
                    log::warn!("Subscriber not persisted: {}", err);
                }
                input.set_value("");
            }
            Err(err) => toasts.error(err.to_string()),
        }
    };

    view! {
        <section class="newsletter-section" id="newsletter">
            <div class="newsletter-inner">
                <h2>"Stay in the loop"</h2>
                <p>"Get an email when we ship new tools. No spam, ever."</p>
                <form class="newsletter-form" on:submit=on_submit>
                    <input
                        type="email"
                        class="newsletter-input"
                        placeholder="Enter your email"
                        node_ref=input_ref
                    />
                    <button type="submit" class="btn btn-primary">
                        "Subscribe"
                    </button>
                </form>
            </div>
        </section>
    }
}
