use dioxus::prelude::*;

const SERVICES: [&str; 4] = ["consultation", "surgery", "imaging", "emergency"];

#[component]
pub fn Services() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        section { id: "services", class: "panel",
            h2 { {crate::t(lang, "services.title")} }
            div { class: "service_grid",
                for key in SERVICES {
                    div { key: "{key}", class: "service_card",
                        h3 { {crate::t(lang, &format!("services.{key}.title"))} }
                        p { {crate::t(lang, &format!("services.{key}.body"))} }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ClinicInfo() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        section { class: "panel clinic_info",
            h2 { {crate::t(lang, "clinic.title")} }
            dl {
                dt { {crate::t(lang, "clinic.address_title")} }
                dd { {crate::t(lang, "clinic.address")} }
                dt { {crate::t(lang, "clinic.hours_title")} }
                dd { {crate::t(lang, "clinic.hours")} }
                dt { {crate::t(lang, "clinic.phone_title")} }
                dd { dir: "ltr", {crate::t(lang, "clinic.phone")} }
            }
        }
    }
}
