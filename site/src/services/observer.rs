//! Viewport glue.
//!
//! Scroll-reveal for the landing cards, smooth scrolling to page anchors
//! under the sticky header, and the preloader fade-out.

use gloo_timers::future::TimeoutFuture;
use leptos::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollToOptions,
};

use crate::config::PRELOADER_FADE_MS;

/// Gap kept between the sticky header and a scrolled-to section (px)
const SCROLL_GAP_PX: i32 = 20;

/// Class added to cards once they enter the viewport
const REVEAL_CLASS: &str = "animate-in";

/// Run `f` on the next animation frame, once the DOM has settled.
pub fn after_render(f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    let _ = gloo_utils::window().request_animation_frame(callback.unchecked_ref());
}

/// Observe every element matching `selectors` and add the reveal class
/// the first time it intersects the viewport.
pub fn reveal_on_scroll(selectors: &str) {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(REVEAL_CLASS);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("IntersectionObserver unavailable: {:?}", err);
                return;
            }
        };

    if let Ok(nodes) = gloo_utils::document().query_selector_all(selectors) {
        for index in 0..nodes.length() {
            let Some(node) = nodes.get(index) else { continue };
            if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                observer.observe(&element);
            }
        }
    }

    // Leaked intentionally, the observer watches the page for its lifetime
    callback.forget();
    std::mem::forget(observer);
}

/// Smooth-scroll to the section named by `fragment` (e.g. `"#tools"`),
/// stopping just under the sticky header.
pub fn scroll_to_anchor(fragment: &str) {
    let document = gloo_utils::document();
    let Some(target) = document.query_selector(fragment).ok().flatten() else {
        return;
    };
    let Ok(target) = target.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };

    let header_height = document
        .query_selector(".header")
        .ok()
        .flatten()
        .and_then(|header| header.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|header| header.offset_height())
        .unwrap_or(0);

    let top = target.offset_top() - header_height - SCROLL_GAP_PX;
    let options = ScrollToOptions::new();
    options.set_top(f64::from(top));
    options.set_behavior(ScrollBehavior::Smooth);
    gloo_utils::window().scroll_to_with_scroll_to_options(&options);
}

/// Fade the static preloader out, then remove it from the layout.
pub fn fade_preloader() {
    let Some(preloader) = gloo_utils::document()
        .query_selector(".preloader")
        .ok()
        .flatten()
    else {
        return;
    };
    let Ok(preloader) = preloader.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };

    let _ = preloader.style().set_property("opacity", "0");
    spawn_local(async move {
        TimeoutFuture::new(PRELOADER_FADE_MS).await;
        let _ = preloader.style().set_property("display", "none");
    });
}
