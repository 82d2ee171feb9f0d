// src/quiz/mod.rs

//! The closing multiple-choice quiz: a static question bank and the session
//! state machine walking through it.

pub mod bank;
pub mod session;

pub use bank::{Question, QuestionBank, OPTIONS_PER_QUESTION};
pub use session::{AnswerFeedback, QuizControls, QuizResult, QuizSession, QuizState};
