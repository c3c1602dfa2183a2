use learn_core::model::{QuizQuestion, QuizQuestionError};
use services::QuizEngine;

/// A quiz together with the menu entry that opens it.
#[derive(Debug)]
pub struct QuizEntry {
    pub label: &'static str,
    pub description: &'static str,
    pub engine: QuizEngine,
}

fn git() -> Result<QuizEntry, QuizQuestionError> {
    let questions = vec![
        QuizQuestion::new(
            "Git Basics",
            "Which command creates a new Git repository?",
            ["git new", "git init", "git create", "git start"],
            1,
            "git init sets up a new repository in the current directory.",
        )?,
        QuizQuestion::new(
            "Git Staging",
            "Which command stages every change for the next commit?",
            ["git commit -a", "git add .", "git stage all", "git push"],
            1,
            "git add . stages all changes in the current directory and below.",
        )?,
        QuizQuestion::new(
            "Git Branches",
            "How do you create a new branch and switch to it in one command?",
            [
                "git branch new-branch",
                "git switch new-branch",
                "git checkout -b new-branch",
                "git new-branch",
            ],
            2,
            "git checkout -b creates the branch and checks it out. The modern form is git switch -c.",
        )?,
    ];
    Ok(QuizEntry {
        label: "Git Quiz",
        description: "Test your Git knowledge",
        engine: QuizEngine::new("Git Fundamentals", questions),
    })
}

fn programming_basics() -> Result<QuizEntry, QuizQuestionError> {
    let questions = vec![
        QuizQuestion::new(
            "OOP Basics",
            "What does OOP stand for?",
            [
                "Object-Oriented Programming",
                "Open-Oriented Protocol",
                "Objective Operation Process",
                "Optional Object Pattern",
            ],
            0,
            "OOP is Object-Oriented Programming, a paradigm built around objects.",
        )?,
        QuizQuestion::new(
            "Data Structures",
            "What is the time complexity of reading an array element by index?",
            ["O(n)", "O(log n)", "O(1)", "O(n²)"],
            2,
            "Indexing is O(1): the address is a direct offset from the start of the array.",
        )?,
    ];
    Ok(QuizEntry {
        label: "Programming Basics Quiz",
        description: "Test your programming fundamentals",
        engine: QuizEngine::new("Programming Fundamentals", questions),
    })
}

/// # Errors
///
/// Returns `QuizQuestionError` if a built-in question is malformed.
pub fn quizzes() -> Result<Vec<QuizEntry>, QuizQuestionError> {
    Ok(vec![git()?, programming_basics()?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use services::SessionEngine;

    #[test]
    fn built_in_quizzes_are_well_formed() {
        let quizzes = quizzes().unwrap();
        assert_eq!(quizzes.len(), 2);
        for quiz in &quizzes {
            let session = quiz.engine.start(&mut StdRng::seed_from_u64(1)).unwrap();
            assert!(session.progress().total > 0, "{} is empty", quiz.label);
        }
    }
}
