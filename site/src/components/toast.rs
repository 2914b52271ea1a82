use leptos::*;

use crate::types::Toasts;

/// Renders the single active toast in the corner of the viewport.
///
/// The `leaving` class triggers the slide-out animation; the handle drops
/// the toast itself once the animation has played.
#[component]
pub fn ToastHost(toasts: Toasts) -> impl IntoView {
    view! {
        <div class="notification-host">
            {move || {
                toasts.current().map(|toast| {
                    let id = toast.id;
                    let mut class = format!("notification notification-{}", toast.kind.as_str());
                    if toasts.is_leaving(id) {
                        class.push_str(" leaving");
                    }
                    view! {
                        <div class=class>
                            <span class="notification-message">{toast.message}</span>
                            <button class="notification-close" on:click=move |_| toasts.dismiss(id)>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })
            }}
        </div>
    }
}
