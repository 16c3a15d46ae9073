use dioxus::prelude::*;
use ui::{ContactForm, Hero, Services};

#[component]
pub fn Home(lang: String) -> Element {
    // The layout has already resolved the query into the locale context.
    let _ = lang;
    let lang = ui::use_lang()();
    rsx! {
        Hero {}
        Services {}
        section { id: "contact", class: "panel",
            h2 { {ui::t(lang, "contact.title")} }
            p { class: "hint", {ui::t(lang, "contact.subtitle")} }
            ContactForm {}
        }
    }
}
