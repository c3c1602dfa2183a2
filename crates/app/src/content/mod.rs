//! Built-in content assembled into the main-menu tree.

mod languages;
mod lexicon;
mod quizzes;

use learn_core::model::QuizQuestionError;
use learn_core::tree::{ContentTree, TreeError, TreeNode};
use thiserror::Error;
use ui::views::{
    run_code_training, run_quiz, show_current_session, show_history, show_leaderboard, show_page,
};
use ui::{LeafAction, leaf};

pub const MAIN_MENU_TITLE: &str = "Main Menu";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Quiz(#[from] QuizQuestionError),

    #[error("invalid validator pattern: {0}")]
    Pattern(#[from] regex::Error),
}

type Node = TreeNode<LeafAction>;

fn lexicon() -> Node {
    let sections = lexicon::SECTIONS.iter().map(|section| {
        let pages = section.pages.iter().map(|page| {
            let (title, body) = (page.title, page.body);
            TreeNode::content_item(title, leaf(move |ctx| show_page(ctx, title, body)))
        });
        TreeNode::sub_category(section.name, section.description).with_children(pages)
    });
    TreeNode::category("Lexicon", "Reference guides and command documentation")
        .with_children(sections)
}

fn quizlet() -> Result<Node, ContentError> {
    let entries = quizzes::quizzes()?.into_iter().map(|entry| {
        let engine = entry.engine;
        TreeNode::action_node(
            entry.label,
            entry.description,
            leaf(move |ctx| run_quiz(ctx, &engine).map(drop)),
        )
    });
    Ok(TreeNode::category("Quizlet", "Test your knowledge with quizzes").with_children(entries))
}

fn code_training() -> Result<Node, ContentError> {
    let entries = languages::languages()?.into_iter().map(|language| {
        let description = format!("Practice {} syntax and patterns", language.name());
        TreeNode::action_node(
            language.name().to_owned(),
            description,
            leaf(move |ctx| run_code_training(ctx, &language).map(drop)),
        )
    });
    Ok(
        TreeNode::category("Live Code Training", "Practice writing code in real time")
            .with_children(entries),
    )
}

fn scoreboard() -> Node {
    TreeNode::category("Scoreboard", "View scores and the leaderboard").with_children([
        TreeNode::action_node("Leaderboard", "The best runs so far", leaf(show_leaderboard)),
        TreeNode::action_node(
            "Current Session",
            "Points earned this run",
            leaf(show_current_session),
        ),
        TreeNode::action_node("My History", "Your saved runs", leaf(show_history)),
    ])
}

/// The full main-menu tree.
///
/// # Errors
///
/// Returns `ContentError` if any built-in content is malformed.
pub fn build_tree() -> Result<ContentTree<LeafAction>, ContentError> {
    let categories = vec![lexicon(), quizlet()?, code_training()?, scoreboard()];
    Ok(ContentTree::new(MAIN_MENU_TITLE, categories)?)
}
