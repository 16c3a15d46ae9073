use std::borrow::Cow;

use super::Lang;

/// Query parameter that selects the page language.
pub const LANG_PARAM: &str = "lang";

/// Text direction for the `dir` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

pub fn is_rtl(lang: Lang) -> bool {
    lang == Lang::Ar
}

pub fn direction(lang: Lang) -> Direction {
    if is_rtl(lang) {
        Direction::Rtl
    } else {
        Direction::Ltr
    }
}

fn decode_component(raw: &str) -> Cow<'_, str> {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    // Invalid UTF-8 after decoding keeps the raw text.
    let decoded = match urlencoding::decode(&spaced) {
        Ok(Cow::Owned(decoded)) => Some(decoded),
        _ => None,
    };
    decoded.map_or(spaced, Cow::Owned)
}

/// First value of `name` in a form-urlencoded query string (leading `?` allowed).
pub fn query_param<'a>(query: &'a str, name: &str) -> Option<Cow<'a, str>> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| decode_component(key) == name)
        .map(|(_, value)| decode_component(value))
}

/// Language selected by a query string. Total: anything unrecognized is the default.
pub fn resolve_lang(query: Option<&str>) -> Lang {
    let value = query.and_then(|q| query_param(q, LANG_PARAM));
    Lang::from_query_value(value.as_deref())
}

/// Language selected by a full URL or a path with a query string.
pub fn resolve_lang_from_url(url: &str) -> Lang {
    let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
    resolve_lang(without_fragment.split_once('?').map(|(_, query)| query))
}

/// `path` with the language selector appended.
pub fn localized_href(path: &str, lang: Lang) -> String {
    format!("{path}?{LANG_PARAM}={}", lang.code())
}
