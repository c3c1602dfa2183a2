//! Stack-based walk over a [`ContentTree`].
//!
//! The controller owns no content. It keeps a stack of borrowed nodes from
//! the root to the current menu and turns numbered choices into transitions.
//! Leaf actions are handed back to the caller through the `run` closure given
//! to [`NavigationController::select`]; the controller never stays in a leaf.

use std::fmt;

use learn_core::tree::{ContentTree, TreeNode};
use tracing::debug;

use crate::error::NavigationError;

pub const PATH_SEPARATOR: &str = " > ";

/// Where the walk currently stands.
pub enum NavState<'t, A> {
    AtRoot,
    AtNode(&'t TreeNode<A>),
    Exited,
}

impl<A> Clone for NavState<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for NavState<'_, A> {}

impl<A> fmt::Debug for NavState<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtRoot => f.write_str("AtRoot"),
            Self::AtNode(node) => f.debug_tuple("AtNode").field(&node.name()).finish(),
            Self::Exited => f.write_str("Exited"),
        }
    }
}

/// What a call to `select` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Entered a child menu.
    Descended,
    /// Ran a leaf's action and came back to the same menu.
    ActionCompleted,
    /// Went back to the parent menu.
    Ascended,
    /// Chose `Exit` at the root.
    Exited,
}

/// Everything needed to draw the current menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub title: String,
    /// `A > B > C`, empty at the root.
    pub path: String,
    /// Labels for choices `1..=options.len()`.
    pub options: Vec<String>,
    /// Label for choice `0`.
    pub sentinel: &'static str,
}

impl MenuView {
    #[must_use]
    pub fn max_choice(&self) -> usize {
        self.options.len()
    }
}

pub struct NavigationController<'t, A> {
    root: &'t TreeNode<A>,
    stack: Vec<&'t TreeNode<A>>,
    exited: bool,
}

impl<'t, A> NavigationController<'t, A> {
    #[must_use]
    pub fn new(tree: &'t ContentTree<A>) -> Self {
        Self {
            root: tree.root(),
            stack: Vec::new(),
            exited: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> NavState<'t, A> {
        if self.exited {
            return NavState::Exited;
        }
        match self.stack.last().copied() {
            Some(node) => NavState::AtNode(node),
            None => NavState::AtRoot,
        }
    }

    #[must_use]
    pub fn is_exited(&self) -> bool {
        self.exited
    }

    /// The menu node currently shown.
    #[must_use]
    pub fn current(&self) -> &'t TreeNode<A> {
        self.stack.last().copied().unwrap_or(self.root)
    }

    /// Names from the root's first child down to the current node.
    #[must_use]
    pub fn path(&self) -> Vec<&'t str> {
        self.stack.iter().map(|node| node.name()).collect()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn current_path(&self) -> String {
        self.path().join(PATH_SEPARATOR)
    }

    #[must_use]
    pub fn menu(&self) -> MenuView {
        let node = self.current();
        MenuView {
            title: node.name().to_owned(),
            path: self.current_path(),
            options: node.children().iter().map(TreeNode::label).collect(),
            sentinel: if self.stack.is_empty() { "Exit" } else { "Back" },
        }
    }

    /// Apply a numbered choice to the current menu.
    ///
    /// `0` goes back (or exits at the root). A child with children, or any
    /// category, is entered. A leaf is entered, its action is passed to `run`,
    /// and the leaf is left again before `run`'s result is returned.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::InvalidChoice` for a choice past the last
    /// option and `NavigationError::Exited` once the walk has ended; neither
    /// changes state. Errors from `run` are passed through after the pop.
    pub fn select<E, F>(&mut self, choice: usize, mut run: F) -> Result<Transition, E>
    where
        E: From<NavigationError>,
        F: FnMut(&A) -> Result<(), E>,
    {
        if self.exited {
            return Err(NavigationError::Exited.into());
        }

        if choice == 0 {
            return Ok(match self.stack.pop() {
                Some(left) => {
                    debug!(from = left.name(), depth = self.stack.len(), "navigated back");
                    Transition::Ascended
                }
                None => {
                    debug!("navigation exited");
                    self.exited = true;
                    Transition::Exited
                }
            });
        }

        let children = self.current().children();
        let child = children
            .get(choice - 1)
            .ok_or(NavigationError::InvalidChoice {
                choice,
                max: children.len(),
            })?;

        self.stack.push(child);
        if !child.is_leaf() {
            debug!(path = %self.current_path(), "entered menu");
            return Ok(Transition::Descended);
        }

        debug!(path = %self.current_path(), "running action");
        let result = child.action().map_or(Ok(()), &mut run);
        self.stack.pop();
        result.map(|()| Transition::ActionCompleted)
    }
}

impl<A> fmt::Debug for NavigationController<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationController")
            .field("path", &self.path())
            .field("exited", &self.exited)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Action = &'static str;

    fn tree() -> ContentTree<Action> {
        ContentTree::new(
            "Main Menu",
            vec![
                TreeNode::category("Lexicon", "Reference pages").with_child(
                    TreeNode::sub_category("Git", "Version control")
                        .with_child(TreeNode::content_item("Commit", "show-commit"))
                        .with_child(TreeNode::content_item("Branch", "show-branch")),
                ),
                TreeNode::category("Quizzes", "Test yourself")
                    .with_child(TreeNode::action_node("Git Quiz", "10 questions", "quiz-git")),
                TreeNode::category("Empty", "Nothing yet"),
            ],
        )
        .unwrap()
    }

    fn ok(_: &Action) -> Result<(), NavigationError> {
        Ok(())
    }

    #[test]
    fn root_menu_offers_exit() {
        let tree = tree();
        let nav = NavigationController::new(&tree);
        let menu = nav.menu();

        assert!(matches!(nav.state(), NavState::AtRoot));
        assert_eq!(menu.title, "Main Menu");
        assert_eq!(menu.sentinel, "Exit");
        assert_eq!(menu.path, "");
        assert_eq!(
            menu.options,
            vec![
                "Lexicon - Reference pages",
                "Quizzes - Test yourself",
                "Empty - Nothing yet"
            ]
        );
    }

    #[test]
    fn descend_and_back_track_path() {
        let tree = tree();
        let mut nav = NavigationController::new(&tree);

        assert_eq!(nav.select(1, ok), Ok(Transition::Descended));
        assert_eq!(nav.select(1, ok), Ok(Transition::Descended));
        assert_eq!(nav.current_path(), "Lexicon > Git");
        assert_eq!(nav.menu().sentinel, "Back");
        assert_eq!(nav.menu().options, vec!["Commit", "Branch"]);

        assert_eq!(nav.select(0, ok), Ok(Transition::Ascended));
        assert_eq!(nav.path(), vec!["Lexicon"]);
        assert_eq!(nav.select(0, ok), Ok(Transition::Ascended));
        assert_eq!(nav.select(0, ok), Ok(Transition::Exited));
        assert!(matches!(nav.state(), NavState::Exited));
    }

    #[test]
    fn leaf_runs_action_and_returns_to_parent() {
        let tree = tree();
        let mut nav = NavigationController::new(&tree);
        nav.select(1, ok).unwrap();
        nav.select(1, ok).unwrap();

        let mut ran = Vec::new();
        let outcome = nav.select(2, |action: &Action| -> Result<(), NavigationError> {
            ran.push(*action);
            Ok(())
        });

        assert_eq!(outcome, Ok(Transition::ActionCompleted));
        assert_eq!(ran, vec!["show-branch"]);
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.current_path(), "Lexicon > Git");
    }

    #[test]
    fn same_leaf_can_be_entered_again() {
        let tree = tree();
        let mut nav = NavigationController::new(&tree);
        nav.select(2, ok).unwrap();

        let mut runs = 0;
        for _ in 0..3 {
            nav.select(1, |_: &Action| -> Result<(), NavigationError> {
                runs += 1;
                Ok(())
            })
            .unwrap();
        }
        assert_eq!(runs, 3);
        assert_eq!(nav.path(), vec!["Quizzes"]);
    }

    #[test]
    fn action_error_propagates_after_pop() {
        #[derive(Debug, PartialEq)]
        enum Failure {
            Nav(NavigationError),
            Action,
        }
        impl From<NavigationError> for Failure {
            fn from(err: NavigationError) -> Self {
                Self::Nav(err)
            }
        }

        let tree = tree();
        let mut nav = NavigationController::new(&tree);
        nav.select::<Failure, _>(2, |_| Ok(())).unwrap();

        let err = nav.select(1, |_: &Action| Err(Failure::Action)).unwrap_err();
        assert_eq!(err, Failure::Action);
        assert_eq!(nav.path(), vec!["Quizzes"]);
    }

    #[test]
    fn invalid_choice_leaves_state_untouched() {
        let tree = tree();
        let mut nav = NavigationController::new(&tree);
        nav.select(1, ok).unwrap();

        assert_eq!(
            nav.select(2, ok),
            Err(NavigationError::InvalidChoice { choice: 2, max: 1 })
        );
        assert_eq!(nav.path(), vec!["Lexicon"]);
    }

    #[test]
    fn empty_category_is_an_empty_menu() {
        let tree = tree();
        let mut nav = NavigationController::new(&tree);

        assert_eq!(nav.select(3, ok), Ok(Transition::Descended));
        let menu = nav.menu();
        assert!(menu.options.is_empty());
        assert_eq!(menu.sentinel, "Back");
        assert_eq!(
            nav.select(1, ok),
            Err(NavigationError::InvalidChoice { choice: 1, max: 0 })
        );
        assert_eq!(nav.select(0, ok), Ok(Transition::Ascended));
    }

    #[test]
    fn nothing_is_accepted_after_exit() {
        let tree = tree();
        let mut nav = NavigationController::new(&tree);
        nav.select(0, ok).unwrap();

        assert_eq!(nav.select(0, ok), Err(NavigationError::Exited));
        assert_eq!(nav.select(1, ok), Err(NavigationError::Exited));
    }
}
