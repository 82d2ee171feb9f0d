// src/quiz/session.rs

use super::bank::{Question, QuestionBank};
use crate::core::TourError;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Where the learner is in the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Showing the question at this 0-based index.
    Answering(usize),
    /// Results screen.
    Finished,
}

/// Feedback revealed right after an option is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub selected: usize,
    pub correct_option: usize,
    pub is_correct: bool,
    pub explanation: String,
}

impl AnswerFeedback {
    pub fn headline(&self) -> &'static str {
        if self.is_correct { "Correct!" } else { "Incorrect!" }
    }

    pub fn icon(&self) -> &'static str {
        if self.is_correct { "✅" } else { "❌" }
    }
}

/// State of the previous/next buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizControls {
    pub previous_enabled: bool,
    /// "Next", or "Finish" on the last question.
    pub next_label: &'static str,
}

/// Final score shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
}

/// One pass through the question bank.
///
/// A question contributes at most one point: the score is the number of
/// questions whose current selection is correct, so changing an answer can
/// add or remove that question's point but never count it twice.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    bank: QuestionBank,
    state: QuizState,
    selections: BTreeMap<usize, usize>,
    score: usize,
    /// Feedback for the current question is on screen.
    feedback_shown: bool,
}

impl QuizSession {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            state: QuizState::Answering(0),
            selections: BTreeMap::new(),
            score: 0,
            feedback_shown: false,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == QuizState::Finished
    }

    /// Number of questions (N).
    pub fn total(&self) -> usize {
        self.bank.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Index of the question on screen; `None` once finished.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            QuizState::Answering(index) => Some(index),
            QuizState::Finished => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|index| self.bank.get(index))
    }

    /// Option previously picked for question `index`, if any.
    pub fn selection(&self, index: usize) -> Option<usize> {
        self.selections.get(&index).copied()
    }

    /// Picks `option` for the current question and reveals feedback.
    ///
    /// # Errors
    /// `TourError::InvalidOperation` when the quiz is finished or `option` is
    /// out of range. Nothing changes in either case.
    pub fn select_option(&mut self, option: usize) -> Result<AnswerFeedback, TourError> {
        let index = self.current_index().ok_or_else(|| TourError::InvalidOperation {
            message: "quiz is finished, restart to answer again".to_string(),
        })?;
        let question = self.bank.get(index).ok_or_else(|| TourError::InvalidOperation {
            message: format!("no question at index {}", index),
        })?;
        if option >= question.options.len() {
            return Err(TourError::InvalidOperation {
                message: format!("option {} out of range for question {}", option, index),
            });
        }

        let was_correct = self.selections.insert(index, option).is_some_and(|prev| question.is_correct(prev));
        let is_correct = question.is_correct(option);
        match (was_correct, is_correct) {
            (false, true) => self.score += 1,
            (true, false) => self.score -= 1,
            _ => {}
        }
        self.feedback_shown = true;
        debug!(question = index, option, is_correct, score = self.score, "Answer selected");

        Ok(AnswerFeedback {
            selected: option,
            correct_option: question.correct,
            is_correct,
            explanation: question.explanation.clone(),
        })
    }

    /// Feedback for the current question, if it is on screen.
    pub fn feedback(&self) -> Option<AnswerFeedback> {
        if !self.feedback_shown {
            return None;
        }
        let index = self.current_index()?;
        let question = self.bank.get(index)?;
        let selected = self.selection(index)?;
        Some(AnswerFeedback {
            selected,
            correct_option: question.correct,
            is_correct: question.is_correct(selected),
            explanation: question.explanation.clone(),
        })
    }

    /// Moves to the next question, or finishes from the last one.
    pub fn next(&mut self) -> QuizState {
        if let QuizState::Answering(index) = self.state {
            if index + 1 < self.total() {
                self.state = QuizState::Answering(index + 1);
                self.feedback_shown = false;
            } else {
                self.finish();
            }
        }
        self.state
    }

    /// Moves back one question. No-op at the first question and once finished.
    pub fn previous(&mut self) -> QuizState {
        if let QuizState::Answering(index) = self.state {
            if index > 0 {
                self.state = QuizState::Answering(index - 1);
                self.feedback_shown = false;
            }
        }
        self.state
    }

    /// Shows the results screen. Idempotent.
    pub fn finish(&mut self) -> QuizResult {
        if !self.is_finished() {
            self.state = QuizState::Finished;
            self.feedback_shown = false;
            info!(score = self.score, total = self.total(), "Quiz finished");
        }
        self.result()
    }

    pub fn result(&self) -> QuizResult {
        QuizResult {
            score: self.score,
            total: self.total(),
        }
    }

    /// Clears answers and score and returns to the first question.
    pub fn restart(&mut self) {
        self.state = QuizState::Answering(0);
        self.selections.clear();
        self.score = 0;
        self.feedback_shown = false;
    }

    pub fn controls(&self) -> QuizControls {
        let index = self.current_index();
        QuizControls {
            previous_enabled: index.is_some_and(|i| i > 0),
            next_label: match index {
                Some(i) if i + 1 == self.total() => "Finish",
                _ => "Next",
            },
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(QuestionBank::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reselecting_never_double_counts() -> Result<(), TourError> {
        let mut quiz = QuizSession::default();
        let correct = quiz.current_question().map(|q| q.correct).unwrap();
        let wrong = (correct + 1) % 4;

        quiz.select_option(correct)?;
        quiz.select_option(correct)?;
        assert_eq!(quiz.score(), 1);

        quiz.select_option(wrong)?;
        assert_eq!(quiz.score(), 0);

        quiz.select_option(correct)?;
        assert_eq!(quiz.score(), 1);
        Ok(())
    }

    #[test]
    fn test_invalid_option_changes_nothing() {
        let mut quiz = QuizSession::default();
        assert!(quiz.select_option(4).is_err());
        assert_eq!(quiz.selection(0), None);
        assert!(quiz.feedback().is_none());
    }

    #[test]
    fn test_feedback_hidden_after_navigation() -> Result<(), TourError> {
        let mut quiz = QuizSession::default();
        let feedback = quiz.select_option(0)?;
        assert_eq!(quiz.feedback(), Some(feedback));

        quiz.next();
        assert!(quiz.feedback().is_none());
        quiz.previous();
        assert!(quiz.feedback().is_none());
        assert_eq!(quiz.selection(0), Some(0));
        Ok(())
    }

    #[test]
    fn test_controls_follow_position() {
        let mut quiz = QuizSession::default();
        assert_eq!(quiz.controls(), QuizControls { previous_enabled: false, next_label: "Next" });
        for _ in 0..4 {
            quiz.next();
        }
        assert_eq!(quiz.controls(), QuizControls { previous_enabled: true, next_label: "Finish" });
    }
}
