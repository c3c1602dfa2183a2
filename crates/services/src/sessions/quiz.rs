use learn_core::model::{QUIZLET_FEATURE, QuizQuestion};
use learn_core::shuffle::{IndexPicker, non_identity_permutation, shuffle_in_place};
use tracing::debug;

use super::{SessionEngine, SessionProgress};
use crate::error::SessionError;
use crate::score_service::ScoreService;

pub const QUIZ_POINTS_PER_CORRECT: u32 = 100;

//
// ─── SHUFFLED QUESTION ─────────────────────────────────────────────────────────
//

/// A question with its options re-ordered for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffledQuestion {
    original: QuizQuestion,
    options: Vec<String>,
    correct_index: usize,
}

impl ShuffledQuestion {
    /// Permute the options so that, when there are at least two, they never
    /// appear in their authored order.
    pub fn shuffle<P>(original: QuizQuestion, picker: &mut P) -> Self
    where
        P: IndexPicker + ?Sized,
    {
        let order = non_identity_permutation(original.options().len(), picker);
        let options = order
            .iter()
            .map(|&from| original.options()[from].clone())
            .collect();
        let correct_index = order
            .iter()
            .position(|&from| from == original.correct_index())
            .unwrap_or(original.correct_index());

        Self {
            original,
            options,
            correct_index,
        }
    }

    #[must_use]
    pub fn original(&self) -> &QuizQuestion {
        &self.original
    }

    #[must_use]
    pub fn question(&self) -> &str {
        self.original.question()
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// A named, fixed question set that hands out freshly shuffled sessions.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    name: String,
    questions: Vec<QuizQuestion>,
}

impl QuizEngine {
    #[must_use]
    pub fn new(name: impl Into<String>, questions: Vec<QuizQuestion>) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Build a new session: question order is shuffled once, then each
    /// question's options are shuffled with the identity rejected.
    ///
    /// The question order itself may come out unchanged.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the quiz has no questions.
    pub fn start<P>(&self, picker: &mut P) -> Result<QuizSession, SessionError>
    where
        P: IndexPicker + ?Sized,
    {
        if self.questions.is_empty() {
            return Err(SessionError::Empty);
        }

        let mut ordered = self.questions.clone();
        shuffle_in_place(&mut ordered, picker);
        let questions: Vec<ShuffledQuestion> = ordered
            .into_iter()
            .map(|q| ShuffledQuestion::shuffle(q, &mut *picker))
            .collect();

        debug!(quiz = %self.name, questions = questions.len(), "quiz started");
        Ok(QuizSession {
            name: self.name.clone(),
            questions,
            current: 0,
            correct: 0,
        })
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Result of answering one quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswer {
    pub chosen: usize,
    pub is_correct: bool,
    pub correct_option: String,
    pub explanation: String,
    pub points: u32,
}

/// Verdict band for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizGrade {
    /// 90% and up.
    Excellent,
    /// 70–89%.
    Decent,
    /// 50–69%.
    Mediocre,
    /// Below 50%.
    Poor,
}

impl QuizGrade {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Self::Excellent,
            70..=89 => Self::Decent,
            50..=69 => Self::Mediocre,
            _ => Self::Poor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub name: String,
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
    pub points: u32,
    pub grade: QuizGrade,
}

/// One run through a shuffled quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    name: String,
    questions: Vec<ShuffledQuestion>,
    current: usize,
    correct: usize,
}

impl QuizSession {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[ShuffledQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct
    }
}

impl SessionEngine for QuizSession {
    type Unit = ShuffledQuestion;
    /// 0-based index into the shuffled options.
    type Answer = usize;
    type Outcome = QuizAnswer;
    type Summary = QuizSummary;

    fn current(&self) -> Option<&ShuffledQuestion> {
        self.questions.get(self.current)
    }

    fn answer(
        &mut self,
        chosen: usize,
        scores: &mut ScoreService,
    ) -> Result<QuizAnswer, SessionError> {
        let question = self.current().ok_or(SessionError::Completed)?;
        if chosen >= question.options().len() {
            return Err(SessionError::InvalidAnswer {
                index: chosen,
                options: question.options().len(),
            });
        }

        let is_correct = question.is_correct(chosen);
        let outcome = QuizAnswer {
            chosen,
            is_correct,
            correct_option: question.correct_option().to_owned(),
            explanation: question.original().explanation().to_owned(),
            points: if is_correct { QUIZ_POINTS_PER_CORRECT } else { 0 },
        };

        if is_correct {
            self.correct += 1;
            scores.add_score(QUIZLET_FEATURE, QUIZ_POINTS_PER_CORRECT);
        }
        self.current += 1;
        Ok(outcome)
    }

    fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.questions.len(),
            answered: self.current,
            is_complete: self.is_complete(),
        }
    }

    fn summary(&self) -> QuizSummary {
        let total = self.questions.len();
        let percentage = if total == 0 {
            0
        } else {
            u32::try_from(self.correct * 100 / total).unwrap_or(100)
        };
        let points = u32::try_from(self.correct)
            .unwrap_or(u32::MAX)
            .saturating_mul(QUIZ_POINTS_PER_CORRECT);

        QuizSummary {
            name: self.name.clone(),
            correct: self.correct,
            total,
            percentage,
            points,
            grade: QuizGrade::from_percentage(percentage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learn_core::time::fixed_clock;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;
    use storage::InMemoryScoreRepository;

    fn question(n: usize, options: &[&str], correct: usize) -> QuizQuestion {
        QuizQuestion::new(
            format!("Q{n}"),
            format!("Question {n}?"),
            options.iter().copied(),
            correct,
            format!("Because {n}."),
        )
        .unwrap()
    }

    fn scores() -> ScoreService {
        ScoreService::new(Arc::new(InMemoryScoreRepository::new()), fixed_clock())
    }

    fn engine() -> QuizEngine {
        QuizEngine::new(
            "Git",
            vec![
                question(1, &["a", "b", "c", "d"], 1),
                question(2, &["w", "x", "y", "z"], 2),
                question(3, &["only"], 0),
            ],
        )
    }

    #[test]
    fn empty_quiz_cannot_start() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = QuizEngine::new("Empty", Vec::new()).start(&mut rng).unwrap_err();
        assert_eq!(err, SessionError::Empty);
    }

    #[test]
    fn tracked_index_points_at_original_correct_option() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let session = engine().start(&mut rng).unwrap();
            for q in session.questions() {
                assert_eq!(q.correct_option(), q.original().correct_option());
                if q.options().len() > 1 {
                    assert_ne!(q.options(), q.original().options());
                }
            }
        }
    }

    #[test]
    fn single_option_question_keeps_its_option() {
        let mut rng = StdRng::seed_from_u64(3);
        let shuffled = ShuffledQuestion::shuffle(question(1, &["only"], 0), &mut rng);
        assert_eq!(shuffled.options(), ["only".to_owned()]);
        assert_eq!(shuffled.correct_index(), 0);
    }

    #[test]
    fn scoring_and_summary() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = engine().start(&mut rng).unwrap();
        let mut scores = scores();

        let mut answered = 0;
        while let Some(q) = session.current() {
            let right = q.correct_index();
            let pick = if answered < 2 {
                right
            } else {
                (right + 1) % q.options().len()
            };
            answered += 1;
            let outcome = session.answer(pick, &mut scores).unwrap();
            assert_eq!(outcome.is_correct, pick == right);
        }

        // The third question may be the single-option one, which can't be missed.
        let summary = session.summary();
        assert!(session.is_complete());
        assert_eq!(summary.total, 3);
        assert!(summary.correct >= 2);
        assert_eq!(summary.correct, session.correct_count());
        assert_eq!(scores.feature_score(QUIZLET_FEATURE), summary.points);
        assert_eq!(
            summary.percentage,
            u32::try_from(summary.correct * 100 / 3).unwrap()
        );
    }

    #[test]
    fn wrong_answer_reveals_correct_option() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = QuizEngine::new("One", vec![question(1, &["a", "b"], 0)])
            .start(&mut rng)
            .unwrap();
        let mut scores = scores();
        let wrong = (session.current().unwrap().correct_index() + 1) % 2;

        let outcome = session.answer(wrong, &mut scores).unwrap();
        assert!(!outcome.is_correct);
        assert_eq!(outcome.correct_option, "a");
        assert_eq!(outcome.explanation, "Because 1.");
        assert_eq!(scores.total_score(), 0);
        assert_eq!(session.summary().grade, QuizGrade::Poor);
    }

    #[test]
    fn out_of_range_answer_does_not_advance() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = engine().start(&mut rng).unwrap();
        let mut scores = scores();
        let options = session.current().unwrap().options().len();

        let err = session.answer(options, &mut scores).unwrap_err();
        assert_eq!(err, SessionError::InvalidAnswer { index: options, options });
        assert_eq!(session.progress().answered, 0);
    }

    #[test]
    fn answering_after_completion_fails() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = QuizEngine::new("One", vec![question(1, &["only"], 0)])
            .start(&mut rng)
            .unwrap();
        let mut scores = scores();
        session.answer(0, &mut scores).unwrap();

        assert_eq!(session.answer(0, &mut scores), Err(SessionError::Completed));
        assert_eq!(session.summary().percentage, 100);
        assert_eq!(session.summary().grade, QuizGrade::Excellent);
    }

    #[test]
    fn each_start_is_independent() {
        let mut rng = StdRng::seed_from_u64(8);
        let quiz = engine();
        let mut scores = scores();
        let mut first = quiz.start(&mut rng).unwrap();
        while let Some(q) = first.current() {
            let right = q.correct_index();
            first.answer(right, &mut scores).unwrap();
        }

        let second = quiz.start(&mut rng).unwrap();
        assert_eq!(second.correct_count(), 0);
        assert_eq!(second.progress().answered, 0);
        assert_eq!(second.progress().position(), Some(1));
    }

    #[test]
    fn grade_bands() {
        assert_eq!(QuizGrade::from_percentage(100), QuizGrade::Excellent);
        assert_eq!(QuizGrade::from_percentage(90), QuizGrade::Excellent);
        assert_eq!(QuizGrade::from_percentage(89), QuizGrade::Decent);
        assert_eq!(QuizGrade::from_percentage(50), QuizGrade::Mediocre);
        assert_eq!(QuizGrade::from_percentage(49), QuizGrade::Poor);
    }
}
