use super::XS_NS;
use crate::{Error, Result};

use roxmltree::Node;

/// Namespace bindings declared on the `schema` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespaces {
    target_namespace: String,

    /// Prefix bound to the target namespace. `None` when the target
    /// namespace is only the default namespace, or not bound at all.
    target_prefix: Option<String>,

    /// Prefix bound to the XML Schema namespace. `None` when it is the
    /// default namespace.
    schema_prefix: Option<String>,
}

impl Namespaces {
    pub(super) fn from_root(root: &Node) -> Result<Namespaces> {
        let target_namespace = match root.attribute("targetNamespace") {
            Some(ns) if !ns.trim().is_empty() => ns.trim().to_string(),
            _ => return Err(Error::missing_namespace("targetNamespace")),
        };

        // Named prefixes win over the default namespace when both are bound
        // to the same URI.
        let prefix_for = |uri: &str| -> Option<Option<String>> {
            let mut bound = root.namespaces().filter(|ns| ns.uri() == uri);
            let first = bound.next()?;
            let named = core::iter::once(first)
                .chain(bound)
                .find_map(|ns| ns.name().map(str::to_string));
            Some(named)
        };

        let target_prefix = prefix_for(target_namespace.as_str()).flatten();
        let schema_prefix = match prefix_for(XS_NS) {
            Some(prefix) => prefix,
            None => return Err(Error::missing_namespace("XML Schema namespace prefix")),
        };

        Ok(Namespaces {
            target_namespace,
            target_prefix,
            schema_prefix,
        })
    }

    pub fn target_namespace(&self) -> &str {
        &self.target_namespace
    }

    pub fn target_prefix(&self) -> Option<&str> {
        self.target_prefix.as_deref()
    }

    pub fn schema_prefix(&self) -> Option<&str> {
        self.schema_prefix.as_deref()
    }

    /// Returns `true` if `prefix` is the prefix bound to the target
    /// namespace.
    pub fn is_target(&self, prefix: &str) -> bool {
        self.target_prefix() == Some(prefix)
    }

    /// Returns `true` if `prefix` is the prefix bound to the XML Schema
    /// namespace.
    pub fn is_schema(&self, prefix: &str) -> bool {
        self.schema_prefix() == Some(prefix)
    }
}

/// Splits `prefix:local` into its parts. Unprefixed names yield `None`.
pub fn split_qname(qname: &str) -> (Option<&str>, &str) {
    match qname.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, qname),
    }
}
