use axum::{
    extract::Request,
    http::{header::CONTENT_LANGUAGE, Extensions, HeaderValue, Uri},
    middleware::Next,
    response::Response,
};
use ui::Lang;

/// Per-request values resolved before any handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    pub lang: Lang,
}

impl RequestContext {
    pub fn from_uri(uri: &Uri) -> Self {
        Self {
            lang: ui::resolve_lang(uri.query()),
        }
    }
}

/// Locale that [`resolve_locale`] attached to a request, if it ran.
pub fn lang_from_extensions(extensions: &Extensions) -> Option<Lang> {
    extensions.get::<RequestContext>().map(|ctx| ctx.lang)
}

/// Resolve `?lang=` once and attach it to the request as a [`RequestContext`].
pub async fn resolve_locale(mut req: Request, next: Next) -> Response {
    let ctx = RequestContext::from_uri(req.uri());
    tracing::debug!(path = %req.uri().path(), lang = ctx.lang.code(), "locale resolved");
    req.extensions_mut().insert(ctx);

    let mut response = next.run(req).await;
    response
        .headers_mut()
        .insert(CONTENT_LANGUAGE, HeaderValue::from_static(ctx.lang.code()));
    response
}
