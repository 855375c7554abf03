//! Arena-backed tree for building list tokens.
//!
//! List parsing needs to append to "the latest item at depth N" while the
//! tree is still growing. Nodes live in a flat arena and are addressed by
//! [`NodeId`]; an explicit stack records the open item at each depth. The
//! owned [`Token`] tree is assembled once, in [`ListTree::into_token`].

use crate::parsing::token::Token;

/// Deepest item nesting the tree models: top-level items plus one level of
/// sub-items. Deeper indentation attaches to the deepest open item.
pub const MAX_ITEM_DEPTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    token: Token,
    children: Vec<NodeId>,
}

#[derive(Debug)]
pub struct ListTree {
    root: Token,
    top_level: Vec<NodeId>,
    nodes: Vec<Node>,
    /// `open_items[d]` is the most recent item at depth `d`.
    open_items: Vec<NodeId>,
}

impl ListTree {
    pub fn new(root: Token) -> Self {
        Self {
            root,
            top_level: vec![],
            nodes: vec![],
            open_items: vec![],
        }
    }

    /// Appends an item at indentation `depth`.
    ///
    /// The item nests under the open item one level up. When that level does
    /// not exist the item settles at the deepest level available.
    pub fn push_item(&mut self, depth: usize, token: Token) -> NodeId {
        let level = depth.min(self.open_items.len()).min(MAX_ITEM_DEPTH - 1);
        let parent = level.checked_sub(1).map(|d| self.open_items[d]);
        let id = self.append(parent, token);
        self.open_items.truncate(level);
        self.open_items.push(id);
        id
    }

    /// Appends non-item content (a paragraph or code block) at indentation
    /// `depth`. Content always belongs to an item when one is open, even at
    /// depth 0.
    pub fn push_content(&mut self, depth: usize, token: Token) -> NodeId {
        let level = depth.max(1).min(self.open_items.len());
        let parent = level.checked_sub(1).map(|d| self.open_items[d]);
        self.append(parent, token)
    }

    fn append(&mut self, parent: Option<NodeId>, token: Token) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            token,
            children: vec![],
        });
        match parent.and_then(|p| self.nodes.get_mut(p.0)) {
            Some(node) => node.children.push(id),
            None => self.top_level.push(id),
        }
        id
    }

    /// Assembles the owned token tree.
    pub fn into_token(self) -> Token {
        let mut slots: Vec<Option<Node>> = self.nodes.into_iter().map(Some).collect();
        let children = self
            .top_level
            .iter()
            .filter_map(|&id| build(&mut slots, id))
            .collect();
        self.root.with_children(children)
    }
}

fn build(slots: &mut [Option<Node>], id: NodeId) -> Option<Token> {
    let node = slots.get_mut(id.0)?.take()?;
    let children = node
        .children
        .iter()
        .filter_map(|&child| build(slots, child))
        .collect();
    Some(node.token.with_children(children))
}
