// src/quiz/bank.rs

use crate::core::TourError;
use serde::{Deserialize, Serialize};

/// Number of answer options every question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct: usize,
    pub explanation: String,
}

impl Question {
    pub fn new(prompt: &str, options: [&str; OPTIONS_PER_QUESTION], correct: usize, explanation: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct,
            explanation: explanation.to_string(),
        }
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }

    fn validate(&self, index: usize) -> Result<(), TourError> {
        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(TourError::InvalidConfig {
                message: format!(
                    "question {} has {} options, expected {}",
                    index,
                    self.options.len(),
                    OPTIONS_PER_QUESTION
                ),
            });
        }
        if self.correct >= self.options.len() {
            return Err(TourError::InvalidConfig {
                message: format!("question {} marks option {} correct, out of range", index, self.correct),
            });
        }
        Ok(())
    }
}

/// Ordered, read-only list of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Builds a bank, rejecting empty banks and malformed questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, TourError> {
        if questions.is_empty() {
            return Err(TourError::InvalidConfig { message: "question bank is empty".to_string() });
        }
        for (index, question) in questions.iter().enumerate() {
            question.validate(index)?;
        }
        Ok(Self { questions })
    }

    /// Parses a JSON array of questions (`question`, `options`, `correct`,
    /// `explanation`) and validates it.
    pub fn from_json(json: &str) -> Result<Self, TourError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// The five questions shipped with the tour.
    pub fn builtin() -> Self {
        Self { questions: builtin_questions() }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_questions() -> Vec<Question> {
    vec![
        Question::new(
            "What makes quantum computing different from classical computing?",
            [
                "Quantum computers are just faster versions of classical computers",
                "Quantum computers use qubits that can exist in superposition",
                "Quantum computers only work at room temperature",
                "Quantum computers use different programming languages",
            ],
            1,
            "The key difference is that quantum computers use qubits that can exist in superposition (multiple states simultaneously), unlike classical bits that are either 0 or 1.",
        ),
        Question::new(
            "What happens when you measure a qubit in superposition?",
            [
                "Nothing changes",
                "The qubit becomes entangled",
                "The superposition collapses to either 0 or 1",
                "The qubit multiplies",
            ],
            2,
            "Measurement causes the quantum superposition to collapse, forcing the qubit to 'choose' either 0 or 1 based on probability amplitudes.",
        ),
        Question::new(
            "What did Einstein call quantum entanglement?",
            [
                "Quantum magic",
                "Spooky action at a distance",
                "Impossible physics",
                "Parallel processing",
            ],
            1,
            "Einstein famously referred to quantum entanglement as 'spooky action at a distance' because he was uncomfortable with the instantaneous correlation between entangled particles.",
        ),
        Question::new(
            "Which quantum gate creates superposition?",
            ["X Gate", "Z Gate", "Hadamard Gate", "CNOT Gate"],
            2,
            "The Hadamard gate creates superposition by putting a qubit into an equal probability of being 0 or 1.",
        ),
        Question::new(
            "What is Shor's algorithm famous for?",
            [
                "Creating quantum superposition",
                "Factoring large numbers efficiently",
                "Generating random numbers",
                "Measuring quantum states",
            ],
            1,
            "Shor's algorithm can efficiently factor large integers, which has major implications for breaking current cryptographic systems.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_bank_is_valid() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), 5);
        assert_eq!(QuestionBank::new(bank.questions().to_vec()), Ok(bank));
    }

    #[test]
    fn test_from_json_validates() {
        let json = r#"[{"question": "Pick b", "options": ["a", "b", "c", "d"], "correct": 1, "explanation": "b"}]"#;
        let bank = QuestionBank::from_json(json).unwrap();
        assert_eq!(bank.get(0).map(|q| q.prompt.as_str()), Some("Pick b"));

        let out_of_range = r#"[{"question": "?", "options": ["a", "b", "c", "d"], "correct": 4, "explanation": ""}]"#;
        assert!(matches!(QuestionBank::from_json(out_of_range), Err(TourError::InvalidConfig { .. })));

        let three_options = r#"[{"question": "?", "options": ["a", "b", "c"], "correct": 0, "explanation": ""}]"#;
        assert!(QuestionBank::from_json(three_options).is_err());

        assert!(QuestionBank::from_json("[]").is_err());
        assert!(QuestionBank::from_json("not json").is_err());
    }
}
