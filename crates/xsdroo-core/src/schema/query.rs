use super::is_xs;

use roxmltree::Node;

/// Element declarations that make up the content model of `decl`.
///
/// Walks `decl`'s descendants, collecting every `element` declaration but
/// never descending into one, so the fields of an anonymous nested type stay
/// with the element that owns them. Annotations and identity constraints are
/// skipped.
pub fn field_declarations<'a, 'input>(decl: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    let mut fields = vec![];
    collect_fields(decl, &mut fields);
    fields
}

fn collect_fields<'a, 'input>(node: Node<'a, 'input>, fields: &mut Vec<Node<'a, 'input>>) {
    for child in node.children().filter(Node::is_element) {
        if is_xs(&child, "element") {
            fields.push(child);
        } else if is_xs(&child, "annotation")
            || is_xs(&child, "unique")
            || is_xs(&child, "key")
            || is_xs(&child, "keyref")
        {
            continue;
        } else {
            collect_fields(child, fields);
        }
    }
}

/// Descendants of `node`, excluding `node` itself, that are not inside a
/// nested `element` declaration.
pub fn descendants_until_element<'a, 'input>(node: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    let mut out = vec![];
    let mut stack: Vec<_> = node.children().filter(Node::is_element).collect();
    stack.reverse();

    while let Some(next) = stack.pop() {
        out.push(next);
        if is_xs(&next, "element") {
            continue;
        }
        let len = stack.len();
        stack.extend(next.children().filter(Node::is_element));
        stack[len..].reverse();
    }

    out
}

/// The `value` of the first `facet` beneath `node`, if any.
pub fn facet_value<'a>(node: Node<'a, '_>, facet: &str) -> Option<&'a str> {
    descendants_until_element(node)
        .into_iter()
        .filter(|n| !is_xs(n, "element"))
        .find(|n| is_xs(n, facet))
        .and_then(|n| n.attribute("value"))
}

/// The `base` of the first `restriction` or `extension` beneath `node`.
pub fn first_base<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    descendants_until_element(node)
        .into_iter()
        .filter(|n| is_xs(n, "restriction") || is_xs(n, "extension"))
        .find_map(|n| n.attribute("base"))
}
