use std::fmt;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TreeError {
    #[error("node name cannot be empty")]
    EmptyName,

    #[error("`{name}` has no children and no bound action")]
    LeafWithoutAction { name: String },

    #[error("content item `{name}` cannot hold children")]
    ContentItemWithChildren { name: String },

    #[error("`{name}` must be a category to sit at the root")]
    RootChildNotCategory { name: String },
}

//
// ─── NODE ──────────────────────────────────────────────────────────────────────
//

/// Kind tag for a node in the content hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Root-level grouping. Always rendered as a menu, even when empty.
    Category,
    /// Nested grouping. Either a menu of children or, when childless, a bound action.
    SubCategory,
    /// Childless leaf carrying a display action.
    ContentItem,
}

/// One node of the content hierarchy.
///
/// `A` is the opaque action bound to leaves. The tree never invokes it; the
/// navigation layer hands it back to the caller when a leaf is selected.
pub struct TreeNode<A> {
    kind: NodeKind,
    name: String,
    description: String,
    children: Vec<TreeNode<A>>,
    action: Option<A>,
}

impl<A> TreeNode<A> {
    fn new(kind: NodeKind, name: String, description: String, action: Option<A>) -> Self {
        Self {
            kind,
            name,
            description,
            children: Vec::new(),
            action,
        }
    }

    #[must_use]
    pub fn category(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NodeKind::Category, name.into(), description.into(), None)
    }

    /// A sub-category that lists its children.
    #[must_use]
    pub fn sub_category(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NodeKind::SubCategory, name.into(), description.into(), None)
    }

    /// A childless sub-category whose selection runs `action` (e.g. starts a session).
    #[must_use]
    pub fn action_node(
        name: impl Into<String>,
        description: impl Into<String>,
        action: A,
    ) -> Self {
        Self::new(
            NodeKind::SubCategory,
            name.into(),
            description.into(),
            Some(action),
        )
    }

    #[must_use]
    pub fn content_item(title: impl Into<String>, action: A) -> Self {
        Self::new(NodeKind::ContentItem, title.into(), String::new(), Some(action))
    }

    #[must_use]
    pub fn with_child(mut self, child: TreeNode<A>) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeNode<A>>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push_child(&mut self, child: TreeNode<A>) {
        self.children.push(child);
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn children(&self) -> &[TreeNode<A>] {
        &self.children
    }

    /// True for childless action nodes. An empty category is still a menu.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty() && self.kind != NodeKind::Category
    }

    #[must_use]
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Menu label: `name - description` for groupings, bare title for content items.
    #[must_use]
    pub fn label(&self) -> String {
        if self.kind == NodeKind::ContentItem || self.description.is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, self.description)
        }
    }

    /// Number of edges on the longest path from this node down to a leaf.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn count_leaves(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.children.iter().map(TreeNode::count_leaves).sum()
    }

    /// Check the structural invariants of this subtree.
    ///
    /// # Errors
    ///
    /// Returns the first `TreeError` found in depth-first order.
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.name.trim().is_empty() {
            return Err(TreeError::EmptyName);
        }
        match self.kind {
            NodeKind::ContentItem if !self.children.is_empty() => {
                return Err(TreeError::ContentItemWithChildren {
                    name: self.name.clone(),
                });
            }
            NodeKind::ContentItem | NodeKind::SubCategory
                if self.children.is_empty() && self.action.is_none() =>
            {
                return Err(TreeError::LeafWithoutAction {
                    name: self.name.clone(),
                });
            }
            _ => {}
        }
        self.children.iter().try_for_each(TreeNode::validate)
    }
}

impl<A> fmt::Debug for TreeNode<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("children", &self.children)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

//
// ─── TREE ──────────────────────────────────────────────────────────────────────
//

/// Validated, immutable content hierarchy rooted at a synthetic main menu.
pub struct ContentTree<A> {
    root: TreeNode<A>,
}

impl<A> ContentTree<A> {
    /// Assemble the tree from its root-level categories.
    ///
    /// # Errors
    ///
    /// Returns `TreeError` if a root child is not a category or any subtree
    /// breaks the leaf/action invariants.
    pub fn new(
        title: impl Into<String>,
        categories: impl IntoIterator<Item = TreeNode<A>>,
    ) -> Result<Self, TreeError> {
        let root = TreeNode::category(title, "").with_children(categories);
        if let Some(stray) = root
            .children
            .iter()
            .find(|node| node.kind != NodeKind::Category)
        {
            return Err(TreeError::RootChildNotCategory {
                name: stray.name.clone(),
            });
        }
        root.validate()?;
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &TreeNode<A> {
        &self.root
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.root.name()
    }

    #[must_use]
    pub fn categories(&self) -> &[TreeNode<A>] {
        self.root.children()
    }
}

impl<A> fmt::Debug for ContentTree<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentTree")
            .field("root", &self.root)
            .finish()
    }
}
