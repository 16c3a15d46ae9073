use std::collections::BTreeMap;
use std::sync::OnceLock;

use dioxus::logger::tracing;
use serde::Deserialize;

use super::Lang;

const FR_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/i18n/fr.json"));
const AR_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/i18n/ar.json"));

/// One node of a translation tree: a leaf string or a nested mapping.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Leaf(String),
    Branch(BTreeMap<String, Node>),
}

impl Default for Node {
    fn default() -> Self {
        Node::Branch(BTreeMap::new())
    }
}

impl Node {
    /// Parse a tree, degrading to an empty one when the JSON is unusable.
    pub fn from_json(lang: Lang, raw: &str) -> Self {
        match serde_json::from_str::<Node>(raw) {
            Ok(node @ Node::Branch(_)) => node,
            Ok(Node::Leaf(_)) => {
                tracing::error!("i18n: {} translations are not a mapping", lang.code());
                Node::default()
            }
            Err(e) => {
                tracing::error!("i18n: failed to parse {} translations: {e}", lang.code());
                Node::default()
            }
        }
    }
}

/// Follow `segments` from `node`; `None` when a step is missing or not a mapping.
fn walk<'a>(node: &'a Node, segments: &[&str]) -> Option<&'a Node> {
    match (node, segments.split_first()) {
        (_, None) => Some(node),
        (Node::Branch(children), Some((head, rest))) => walk(children.get(*head)?, rest),
        (Node::Leaf(_), Some(_)) => None,
    }
}

/// The translation trees for every supported language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationSet {
    fr: Node,
    ar: Node,
}

impl TranslationSet {
    pub fn new(fr: Node, ar: Node) -> Self {
        Self { fr, ar }
    }

    pub fn tree(&self, lang: Lang) -> &Node {
        match lang {
            Lang::Fr => &self.fr,
            Lang::Ar => &self.ar,
        }
    }

    /// Resolve a dotted `path` for `lang`.
    ///
    /// A miss anywhere in the requested tree restarts the walk from the root of
    /// the default language's tree. A miss there too, or a walk that ends on a
    /// mapping instead of a string, yields `path` itself.
    pub fn lookup(&self, lang: Lang, path: &str) -> String {
        let segments: Vec<&str> = path.split('.').collect();
        let found = walk(self.tree(lang), &segments)
            .or_else(|| walk(self.tree(Lang::DEFAULT), &segments));
        match found {
            Some(Node::Leaf(s)) => s.clone(),
            _ => path.to_string(),
        }
    }
}

/// Translations shipped with the site, parsed on first use.
pub fn embedded() -> &'static TranslationSet {
    static SET: OnceLock<TranslationSet> = OnceLock::new();
    SET.get_or_init(|| {
        TranslationSet::new(
            Node::from_json(Lang::Fr, FR_JSON),
            Node::from_json(Lang::Ar, AR_JSON),
        )
    })
}
