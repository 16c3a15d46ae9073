use dioxus::prelude::*;

use crate::i18n::localized_href;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        div {
            id: "hero",
            div { id: "links",
                h1 { {crate::t(lang, "site.name")} }
                p { class: "tagline", {crate::t(lang, "site.tagline")} }
                p { {crate::t(lang, "site.description")} }

                div { class: "cta_row",
                    a { class: "btn primary", href: localized_href("/contact", lang), {crate::t(lang, "hero.cta_contact")} }
                    a { class: "btn", href: "#services", {crate::t(lang, "hero.cta_services")} }
                }
            }
        }
    }
}
