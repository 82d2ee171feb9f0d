// src/presentation/render.rs

use super::{Tour, TourEvent, TourObserver};
use crate::core::Measurement;
use crate::quiz::QuizState;
use std::cell::RefCell;
use std::rc::Rc;

/// Message shown once all four applications are matched.
pub const MATCHING_COMPLETE_MESSAGE: &str = "Congratulations! You matched all applications correctly!";

/// Renders the part of the page affected by `event` as plain text lines.
pub fn render_event(event: &TourEvent, tour: &Tour) -> Vec<String> {
    match event {
        TourEvent::Navigated { section, progress } => {
            let strip: Vec<String> = tour
                .navigation()
                .progress_items()
                .iter()
                .map(|item| {
                    let mark = if item.active {
                        '>'
                    } else if item.completed {
                        'x'
                    } else {
                        ' '
                    };
                    format!("[{}] {}", mark, item.section)
                })
                .collect();
            vec![format!("section: {} ({:.0}%)", section, progress), strip.join(" ")]
        }
        TourEvent::SectionCompleted(section) => vec![format!("completed: {}", section)],
        TourEvent::BitFlipped(_) | TourEvent::QubitMeasured(_) | TourEvent::QubitReset => {
            let snapshot = tour.bit_qubit().snapshot();
            vec![format!("bit: {}", snapshot.bit), format!("qubit: {}", snapshot.qubit_label)]
        }
        TourEvent::CoinMeasured(_) | TourEvent::CoinReset => {
            let snapshot = tour.coin().snapshot();
            let status = match snapshot.state {
                Measurement::Superposed => "spinning".to_string(),
                Measurement::Collapsed(_) => snapshot.result_text,
            };
            let (heads, tails) = snapshot.probabilities;
            vec![format!("coin: {}", status), format!("probabilities: {} | {}", heads, tails)]
        }
        TourEvent::ParticlesChanged(first, second) => {
            vec![format!("particles: {} {}", first, second)]
        }
        TourEvent::CircuitEdited { .. } | TourEvent::CircuitEvaluated(_) | TourEvent::CircuitCleared => {
            let circuit = tour.circuit();
            let mut lines: Vec<String> = circuit.to_string().lines().map(str::to_string).collect();
            let output = circuit.output();
            lines.push(format!("output: {} {}", output.qubit0, output.qubit1));
            lines
        }
        TourEvent::Matched { .. } | TourEvent::MatchingReset => {
            let snapshot = tour.matching().snapshot();
            let mut lines = vec![format!("matches: {}", snapshot.score_text)];
            lines.extend(snapshot.targets.iter().map(|t| format!("  {}", t.label)));
            lines
        }
        TourEvent::MatchingCompleted => vec![MATCHING_COMPLETE_MESSAGE.to_string()],
        TourEvent::QuizAnswered(_) | TourEvent::QuizMoved(_) | TourEvent::QuizRestarted => render_question(tour),
        TourEvent::QuizFinished(result) => vec![format!("Quiz complete! Score: {}/{}", result.score, result.total)],
    }
}

fn render_question(tour: &Tour) -> Vec<String> {
    let quiz = tour.quiz();
    let QuizState::Answering(index) = quiz.state() else {
        return Vec::new();
    };
    let Some(question) = quiz.current_question() else {
        return Vec::new();
    };
    let feedback = quiz.feedback();

    let mut lines = vec![format!("Question {}/{}: {}", index + 1, quiz.total(), question.prompt)];
    for (i, option) in question.options.iter().enumerate() {
        let mark = match &feedback {
            Some(f) if i == f.correct_option => "+",
            Some(f) if i == f.selected => "-",
            _ if quiz.selection(index) == Some(i) => "*",
            _ => " ",
        };
        lines.push(format!(" {} {}. {}", mark, i + 1, option));
    }
    if let Some(f) = feedback {
        lines.push(format!("{} {}", f.icon(), f.headline()));
        lines.push(f.explanation);
    }
    let controls = quiz.controls();
    lines.push(format!(
        "[{}] [{}]",
        if controls.previous_enabled { "Previous" } else { "--------" },
        controls.next_label
    ));
    lines
}

/// Observer that appends rendered lines to a shared text surface.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    surface: Rc<RefCell<Vec<String>>>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle onto the surface; stays readable after the renderer is subscribed.
    pub fn surface(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.surface)
    }
}

impl TourObserver for TextRenderer {
    fn on_event(&mut self, event: &TourEvent, tour: &Tour) {
        self.surface.borrow_mut().extend(render_event(event, tour));
    }
}
