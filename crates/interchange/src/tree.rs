//! The serialized tree: an ordered, namespace-aware intermediate form
//! between entities and wire bytes.
//!
//! Repeated XML elements are represented as a single [`Node::List`] under
//! one key; an XML encoder emits one element per item, a JSON encoder an
//! array.

use rust_decimal::Decimal;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// A possibly namespace-qualified element or member name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    pub namespace: Option<Cow<'static, str>>,
    pub local: Cow<'static, str>,
}

impl QName {
    pub fn new(namespace: Option<&'static str>, local: &'static str) -> Self {
        QName {
            namespace: namespace.map(Cow::Borrowed),
            local: Cow::Borrowed(local),
        }
    }

    /// An unqualified name, as found in JSON bodies.
    pub fn local(local: impl Into<Cow<'static, str>>) -> Self {
        QName {
            namespace: None,
            local: local.into(),
        }
    }

    pub fn local_name(&self) -> &str {
        &self.local
    }
}

/// Clark notation: `{namespace}local`.
impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local),
            None => f.write_str(&self.local),
        }
    }
}

/// A leaf value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Decimal(Decimal),
    Boolean(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Decimal(d) => write!(f, "{}", d),
            Scalar::Boolean(b) => write!(f, "{}", b),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Scalar(Scalar),
    Tree(Tree),
    List(Vec<Node>),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Node {
        Node::Scalar(Scalar::Text(s.into()))
    }

    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Node::Tree(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Short description of the node shape for error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Node::Scalar(_) => "scalar",
            Node::Tree(_) => "record",
            Node::List(_) => "list",
        }
    }
}

/// An ordered mapping from names to nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<(QName, Node)>,
}

impl Tree {
    pub fn new() -> Self {
        Tree::default()
    }

    pub fn push(&mut self, name: QName, node: Node) {
        self.entries.push((name, node));
    }

    /// Builder-style [`Tree::push`] with an unqualified name.
    pub fn with(mut self, local: &'static str, node: Node) -> Self {
        self.push(QName::local(local), node);
        self
    }

    /// First node whose local name is `local`, ignoring namespaces.
    pub fn get(&self, local: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(name, _)| name.local_name() == local)
            .map(|(_, node)| node)
    }

    /// First entry whose local name is `local`, with its full name.
    pub fn entry(&self, local: &str) -> Option<(&QName, &Node)> {
        self.entries
            .iter()
            .find(|(name, _)| name.local_name() == local)
            .map(|(name, node)| (name, node))
    }

    pub fn contains(&self, local: &str) -> bool {
        self.get(local).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QName, &Node)> {
        self.entries.iter().map(|(name, node)| (name, node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct namespace URIs in first-use order (depth first), each with
    /// a prefix: the configured one when present, else `ns1`, `ns2`, ...
    pub fn namespaces(&self, prefixes: &BTreeMap<String, String>) -> Vec<(String, String)> {
        let mut uris: Vec<&str> = Vec::new();
        collect_namespaces(self, &mut uris);

        let mut generated = 0;
        uris.into_iter()
            .map(|uri| {
                let prefix = match prefixes.get(uri) {
                    Some(prefix) => prefix.clone(),
                    None => {
                        generated += 1;
                        format!("ns{}", generated)
                    }
                };
                (uri.to_owned(), prefix)
            })
            .collect()
    }
}

fn collect_namespaces<'t>(tree: &'t Tree, uris: &mut Vec<&'t str>) {
    for (name, node) in &tree.entries {
        if let Some(ns) = &name.namespace {
            let ns: &'t str = ns;
            if !uris.contains(&ns) {
                uris.push(ns);
            }
        }
        collect_node_namespaces(node, uris);
    }
}

fn collect_node_namespaces<'t>(node: &'t Node, uris: &mut Vec<&'t str>) {
    match node {
        Node::Scalar(_) => {}
        Node::Tree(tree) => collect_namespaces(tree, uris),
        Node::List(items) => {
            for item in items {
                collect_node_namespaces(item, uris);
            }
        }
    }
}

impl FromIterator<(QName, Node)> for Tree {
    fn from_iter<I: IntoIterator<Item = (QName, Node)>>(iter: I) -> Self {
        Tree {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Tree {
    type Item = (QName, Node);
    type IntoIter = std::vec::IntoIter<(QName, Node)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
