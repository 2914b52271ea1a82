use leptos::*;

/// One feature highlight card.
struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "fas fa-user-shield",
        title: "100% Private",
        text: "Your files never leave your device. Everything runs locally in the browser.",
    },
    Feature {
        icon: "fas fa-bolt",
        title: "Instant Processing",
        text: "No queues and no round trips to a server. Results land in seconds.",
    },
    Feature {
        icon: "fas fa-heart",
        title: "Free Forever",
        text: "Every tool is free, with no accounts, no watermarks and no daily limits.",
    },
    Feature {
        icon: "fas fa-mobile-screen",
        title: "Works Everywhere",
        text: "Desktop, tablet or phone. All you need is a modern browser.",
    },
];

#[component]
pub fn FeatureList() -> impl IntoView {
    view! {
        <section class="features-section" id="features">
            <div class="section-heading">
                <h2>"Why pdfsmith"</h2>
            </div>
            <div class="features-grid">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="feature-card">
                                <div class="feature-icon">
                                    <i class=feature.icon></i>
                                </div>
                                <h3>{feature.title}</h3>
                                <p>{feature.text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
