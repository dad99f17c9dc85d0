mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.children()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// Visit every element depth-first, parents before children.
pub fn walk<'a>(root: &'a Element, visit: &mut impl FnMut(&'a Element)) {
    visit(root);
    for child in root.children() {
        walk(child, visit);
    }
}
