use leptos::*;
use leptos_meta::Title;

use crate::components::{Faq, FeatureList, Hero, NewsletterSignup, ToolGrid};
use crate::services::observer;
use crate::types::Toasts;

#[component]
pub fn HomePage(toasts: Toasts) -> impl IntoView {
    // Cards animate in as they scroll into view; start observing once
    // the grid is attached
    observer::after_render(|| observer::reveal_on_scroll(".tool-card, .feature-card"));

    view! {
        <Title text="pdfsmith - Every PDF tool in one place"/>
        <Hero/>
        <ToolGrid/>
        <FeatureList/>
        <Faq/>
        <NewsletterSignup toasts=toasts/>
    }
}
