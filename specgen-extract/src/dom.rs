//! Markup-tree queries
//!
//! Parses raw HTML into an `RcDom` tree and provides the small read-only
//! query vocabulary the extractors need: descendant selection by tag and
//! class, collapsed text content, and next/previous matching elements in
//! document order. Nothing here mutates the tree.

use std::rc::Rc;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use regex::Regex;

use specgen_core::normalize::collapse_whitespace;

use crate::error::ExtractError;

/// Parse raw markup text into a queryable tree, returning the document node.
pub fn parse_html(html: &str) -> Result<Handle, ExtractError> {
    let mut input = html.as_bytes();
    let dom: RcDom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut input)?;
    Ok(dom.document)
}

/// The element's local tag name, if this node is an element.
pub fn tag_name(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

pub fn is_element(node: &Handle, tag: &str) -> bool {
    tag_name(node) == Some(tag)
}

/// An attribute's value, if this node is an element carrying it.
pub fn attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attribute| attribute.name.local.as_ref() == attr_name)
            .map(|attribute| attribute.value.to_string()),
        _ => None,
    }
}

pub fn has_class(node: &Handle, class: &str) -> bool {
    attr(node, "class")
        .map(|value| value.split_whitespace().any(|candidate| candidate == class))
        .unwrap_or(false)
}

fn collect_descendants(node: &Handle, out: &mut Vec<Handle>) {
    for child in node.children.borrow().iter() {
        out.push(child.clone());
        collect_descendants(child, out);
    }
}

/// All descendants of `node` in document order (the node itself excluded).
pub fn descendants(node: &Handle) -> Vec<Handle> {
    let mut out = Vec::new();
    collect_descendants(node, &mut out);
    out
}

/// All descendant elements with the given tag, in document order.
pub fn select(root: &Handle, tag: &str) -> Vec<Handle> {
    descendants(root)
        .into_iter()
        .filter(|node| is_element(node, tag))
        .collect()
}

/// First descendant element with the given tag and class.
pub fn select_with_class(root: &Handle, tag: &str, class: &str) -> Option<Handle> {
    descendants(root)
        .into_iter()
        .find(|node| is_element(node, tag) && has_class(node, class))
}

/// Direct element children of `node` with the given tag.
pub fn direct_children(node: &Handle, tag: &str) -> Vec<Handle> {
    node.children
        .borrow()
        .iter()
        .filter(|child| is_element(child, tag))
        .cloned()
        .collect()
}

/// Concatenated text of the subtree: each text node trimmed, pieces joined
/// with single spaces, the result whitespace-collapsed.
pub fn text_content(node: &Handle) -> String {
    fn gather(node: &Handle, pieces: &mut Vec<String>) {
        if let NodeData::Text { contents } = &node.data {
            let text = contents.borrow();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                pieces.push(trimmed.to_string());
            }
        }
        for child in node.children.borrow().iter() {
            gather(child, pieces);
        }
    }

    let mut pieces = Vec::new();
    gather(node, &mut pieces);
    collapse_whitespace(&pieces.join(" "))
}

/// First descendant element with the given tag whose id attribute matches.
pub fn find_by_id(root: &Handle, tag: &str, id: &str) -> Option<Handle> {
    select(root, tag)
        .into_iter()
        .find(|node| attr(node, "id").as_deref() == Some(id))
}

/// First descendant element with the given tag whose text matches `pattern`.
pub fn find_with_text(root: &Handle, tag: &str, pattern: &Regex) -> Option<Handle> {
    select(root, tag)
        .into_iter()
        .find(|node| pattern.is_match(&text_content(node)))
}

/// The next element with the given tag after `node` in document order.
pub fn next_matching(root: &Handle, node: &Handle, tag: &str) -> Option<Handle> {
    let all = descendants(root);
    let position = all.iter().position(|candidate| Rc::ptr_eq(candidate, node))?;
    all[position + 1..]
        .iter()
        .find(|candidate| is_element(candidate, tag))
        .cloned()
}

/// The closest preceding element with the given tag before `node` in
/// document order.
pub fn previous_matching(root: &Handle, node: &Handle, tag: &str) -> Option<Handle> {
    let all = descendants(root);
    let position = all.iter().position(|candidate| Rc::ptr_eq(candidate, node))?;
    all[..position]
        .iter()
        .rev()
        .find(|candidate| is_element(candidate, tag))
        .cloned()
}
