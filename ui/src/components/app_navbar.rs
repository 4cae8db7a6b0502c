use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet, linked as an asset and inlined for release native
// builds so packaged apps carry no external file dependency.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so this crate never needs to know each platform's `Route`
/// enum. Each closure receives the label and returns a link that already
/// contains it.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub report: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|builder| {
        let home = (builder.home)("Home");
        let report = (builder.report)("Report");

        rsx! {
            nav { class: "navbar__links",
                {home}
                {report}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "mzview" }
                    }
                    span { class: "navbar__brand-subtitle",
                        "Mass spectrometry QC, visualized"
                    }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                }
            }
        }
    }
}
