use dioxus::prelude::*;
use std::env;

use views::{Contact, Home};

mod views;

#[cfg(feature = "server")]
mod middleware;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/?:lang")]
    Home { lang: String },
    #[route("/contact?:lang")]
    Contact { lang: String },
}

impl Route {
    fn lang(&self) -> ui::Lang {
        match self {
            Route::Home { lang } | Route::Contact { lang } => {
                ui::Lang::from_query_value(Some(lang))
            }
        }
    }

    fn path(&self) -> &'static str {
        match self {
            Route::Home { .. } => "/",
            Route::Contact { .. } => "/contact",
        }
    }
}

/// Locale for the page being rendered.
///
/// During SSR the request middleware has already resolved it; the route's
/// query value only decides after client-side navigation.
fn page_lang(request: Option<ui::Lang>, route: &Route) -> ui::Lang {
    request.unwrap_or_else(|| route.lang())
}

#[cfg(feature = "server")]
fn request_lang() -> Option<ui::Lang> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();
    middleware::lang_from_extensions(&parts.extensions)
}

#[cfg(not(feature = "server"))]
fn request_lang() -> Option<ui::Lang> {
    None
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    init_tracing();

    #[cfg(feature = "server")]
    init_server_state();

    log_runtime_config();

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let layers = tower::ServiceBuilder::new()
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(axum::middleware::from_fn(middleware::resolve_locale));
        Ok(dioxus::server::router(App).layer(layers))
    });
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(feature = "server")]
fn init_server_state() {
    use std::sync::Arc;

    api::config::load_dotenv();

    let config = match api::config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    api::state::AppState::set_global(Arc::new(api::state::AppState::from_config(config)));
    tracing::info!("✓ Server initialization complete");
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let mode = api::config::AppMode::from_env();

    eprintln!("startup: IP={ip} PORT={port} mode={mode:?}");
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::ClinicTheme {}
        Router::<Route> {}
    }
}

/// Site chrome around every page: locale root, navbar, footer and the chat widget.
#[component]
fn WebNavbar() -> Element {
    let route = use_route::<Route>();
    let request = use_hook(request_lang);
    let lang = page_lang(request, &route);
    let code = lang.code().to_string();
    let services_href = format!("{}#services", ui::localized_href("/", lang));

    rsx! {
        ui::I18nProvider { lang,
            div { class: "site_nav",
                div { class: "site_nav_inner",
                    Link { class: "brand", to: Route::Home { lang: code.clone() },
                        {ui::t(lang, "site.name")}
                    }
                    div { class: "nav_links",
                        Link { class: "nav_link", to: Route::Home { lang: code.clone() },
                            {ui::t(lang, "nav.home")}
                        }
                        a { class: "nav_link", href: "{services_href}",
                            {ui::t(lang, "nav.services")}
                        }
                        Link { class: "nav_link", to: Route::Contact { lang: code.clone() },
                            {ui::t(lang, "nav.contact")}
                        }
                        ui::LangSwitcher { path: route.path().to_string() }
                    }
                }
            }
            div { class: "site_container route_view", Outlet::<Route> {} }
            footer { class: "site_footer",
                {format!("© {} · {}", ui::t(lang, "site.name"), ui::t(lang, "site.rights"))}
            }
            ui::FloatingWhatsApp {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_language_follows_query_segment() {
        let home = Route::Home { lang: "ar".to_string() };
        assert_eq!(home.lang(), ui::Lang::Ar);
        assert_eq!(home.path(), "/");

        let contact = Route::Contact { lang: "arabic".to_string() };
        assert_eq!(contact.lang(), ui::Lang::Fr);
        assert_eq!(contact.path(), "/contact");
    }

    #[test]
    fn request_locale_wins_over_route() {
        let home = Route::Home { lang: String::new() };
        assert_eq!(page_lang(Some(ui::Lang::Ar), &home), ui::Lang::Ar);
        assert_eq!(page_lang(None, &home), ui::Lang::Fr);

        let contact = Route::Contact { lang: "ar".to_string() };
        assert_eq!(page_lang(None, &contact), ui::Lang::Ar);
    }

    #[test]
    fn no_request_locale_outside_a_request() {
        assert_eq!(request_lang(), None);
    }
}
