use std::sync::Arc;

use learn_core::model::{
    CODE_TRAINING_FEATURE, CodeExercise, ProgrammingLanguage, QUIZLET_FEATURE, QuizQuestion,
    ValidationResult,
};
use learn_core::time::{fixed_clock, fixed_now};
use learn_core::tree::{ContentTree, TreeNode};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{
    CodeTrainerSession, NavigationController, NavigationError, QuizEngine, ScoreService,
    SessionEnd, SessionEngine, Transition,
};
use storage::{InMemoryScoreRepository, ScoreRepository};

fn quiz() -> QuizEngine {
    let questions = (1..=4).map(|n| {
        QuizQuestion::new(
            format!("Q{n}"),
            format!("Which is option {n}?"),
            ["a", "b", "c", "d"],
            n % 4,
            "",
        )
        .unwrap()
    });
    QuizEngine::new("Smoke", questions.collect())
}

fn starts_with(name: &str, prefix: &'static str) -> CodeExercise {
    CodeExercise::new(name, "write it", prefix, move |code: &str| {
        if code.trim_start().starts_with(prefix) {
            ValidationResult::correct()
        } else {
            ValidationResult::incorrect(format!("Start with `{prefix}`"))
        }
    })
}

#[test]
fn quiz_and_trainer_share_one_score_record() {
    let repo = InMemoryScoreRepository::new();
    let mut scores = ScoreService::new(Arc::new(repo.clone()), fixed_clock());
    scores.set_player_name("Ada");
    let mut rng = StdRng::seed_from_u64(11);

    let mut session = quiz().start(&mut rng).unwrap();
    while let Some(question) = session.current() {
        let pick = question.correct_index();
        session.answer(pick, &mut scores).unwrap();
    }
    let quiz_summary = session.summary();
    assert_eq!(quiz_summary.correct, 4);
    assert_eq!(quiz_summary.percentage, 100);

    let language = ProgrammingLanguage::new(
        "Python",
        vec![starts_with("Print", "print("), starts_with("Def", "def ")],
    );
    let mut trainer = CodeTrainerSession::new(&language, false).unwrap();
    trainer.answer("print('hi')".into(), &mut scores).unwrap();
    trainer.answer("lambda: 0".into(), &mut scores).unwrap();
    assert_eq!(trainer.summary().end, SessionEnd::Completed);

    assert_eq!(scores.feature_score(QUIZLET_FEATURE), 400);
    assert_eq!(scores.feature_score(CODE_TRAINING_FEATURE), 100);

    scores.save_score().unwrap();
    let board = repo.top_n(10);
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].total_score(), 500);
    assert_eq!(board[0].date_of_playing(), fixed_now());
}

#[test]
fn hardmode_processes_only_the_failing_exercise() {
    let language = ProgrammingLanguage::new(
        "C++",
        vec![starts_with("Include", "#include"), starts_with("Main", "int main")],
    );
    let mut scores = ScoreService::new(Arc::new(InMemoryScoreRepository::new()), fixed_clock());

    let mut hard = CodeTrainerSession::new(&language, true).unwrap();
    let mut processed = 0;
    for answer in ["oops", "int main() {}"] {
        if hard.is_complete() {
            break;
        }
        hard.answer(answer.into(), &mut scores).unwrap();
        processed += 1;
    }
    assert_eq!(processed, 1);
    assert_eq!(hard.summary().end, SessionEnd::HardmodeFailure);

    let mut easy = CodeTrainerSession::new(&language, false).unwrap();
    for answer in ["oops", "int main() {}"] {
        easy.answer(answer.into(), &mut scores).unwrap();
    }
    assert_eq!(easy.summary().attempted, 2);
    assert_eq!(easy.summary().end, SessionEnd::Completed);
}

fn chain(depth: usize) -> ContentTree<()> {
    let mut node = TreeNode::action_node(format!("L{depth}"), "leaf", ());
    for level in (1..depth).rev() {
        node = TreeNode::sub_category(format!("L{level}"), "menu").with_child(node);
    }
    ContentTree::new("Main", vec![TreeNode::category("L0", "top").with_child(node)]).unwrap()
}

fn ok(_: &()) -> Result<(), NavigationError> {
    Ok(())
}

proptest! {
    #[test]
    fn back_after_descents_returns_to_expected_frame(k in 1usize..8, j in 0usize..8) {
        let j = j.min(k);
        let tree = chain(k + 1);
        let mut nav = NavigationController::new(&tree);

        for _ in 0..k {
            prop_assert_eq!(nav.select(1, ok), Ok(Transition::Descended));
        }
        for _ in 0..j {
            prop_assert_eq!(nav.select(0, ok), Ok(Transition::Ascended));
        }

        let expected: Vec<String> = (0..k - j).map(|level| format!("L{level}")).collect();
        prop_assert_eq!(nav.depth(), k - j);
        prop_assert_eq!(nav.path(), expected.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
