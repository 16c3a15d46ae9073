use dioxus::prelude::*;
use ui::{ClinicInfo, ContactForm};

#[component]
pub fn Contact(lang: String) -> Element {
    // The layout has already resolved the query into the locale context.
    let _ = lang;
    let lang = ui::use_lang()();
    rsx! {
        div { class: "page_header",
            h1 { {ui::t(lang, "contact.title")} }
            p { class: "hint", {ui::t(lang, "contact.subtitle")} }
        }
        div { class: "contact_layout",
            ClinicInfo {}
            ContactForm {}
        }
    }
}
