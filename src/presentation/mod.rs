// src/presentation/mod.rs

//! The binder between user gestures and component state.
//!
//! [`Tour`] owns every component together with the random source. Each
//! public action performs one state transition and then publishes a
//! [`TourEvent`] to the subscribed [`TourObserver`]s, which re-render
//! whatever the event touched. Rejected requests are logged and returned as
//! errors. A request rejected before any state changed publishes nothing;
//! one rejected part-way (a continue to an unknown section) publishes the
//! part that did happen.

mod drag;
mod render;

pub use drag::{DragItem, DragSession};
pub use render::{MATCHING_COMPLETE_MESSAGE, TextRenderer, render_event};

use crate::circuits::{CircuitBuilder, CircuitOutput, Gate, Lane};
use crate::config::TourConfig;
use crate::core::{Bit, CoinFace, Section, Spin, TourError};
use crate::navigation::NavigationController;
use crate::quiz::{AnswerFeedback, QuizResult, QuizSession, QuizState};
use crate::widgets::{AppDomain, BitQubitDemo, CoinSimulator, EntangledPair, MatchOutcome, MatchingGame};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::mem;
use tracing::{debug, info, warn};

/// A state change that renderers may need to reflect.
#[derive(Debug, Clone, PartialEq)]
pub enum TourEvent {
    Navigated { section: Section, progress: f64 },
    SectionCompleted(Section),
    BitFlipped(Bit),
    QubitMeasured(Bit),
    QubitReset,
    CoinMeasured(CoinFace),
    CoinReset,
    ParticlesChanged(Spin, Spin),
    CircuitEdited { lane: Lane, position: usize, gate: Option<Gate> },
    CircuitEvaluated(CircuitOutput),
    CircuitCleared,
    Matched { domain: AppDomain, score: usize },
    MatchingCompleted,
    MatchingReset,
    QuizAnswered(AnswerFeedback),
    QuizMoved(QuizState),
    QuizFinished(QuizResult),
    QuizRestarted,
}

/// Receives every published event together with the post-transition state.
pub trait TourObserver {
    fn on_event(&mut self, event: &TourEvent, tour: &Tour);
}

impl<F> TourObserver for F
where
    F: FnMut(&TourEvent, &Tour),
{
    fn on_event(&mut self, event: &TourEvent, tour: &Tour) {
        self(event, tour)
    }
}

/// The whole tour: navigation, widgets and quiz for one page session.
pub struct Tour {
    navigation: NavigationController,
    bit_qubit: BitQubitDemo,
    coin: CoinSimulator,
    particles: EntangledPair,
    circuit: CircuitBuilder,
    matching: MatchingGame,
    quiz: QuizSession,
    drag: DragSession,
    rng: StdRng,
    observers: Vec<Box<dyn TourObserver>>,
}

impl Tour {
    /// Builds a tour from a validated config.
    pub fn new(config: &TourConfig) -> Result<Self, TourError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        info!(seed = ?config.seed, slots = config.slots_per_lane, "Initializing tour");
        Ok(Self {
            navigation: NavigationController::new(),
            bit_qubit: BitQubitDemo::new(),
            coin: CoinSimulator::new(),
            particles: EntangledPair::new(),
            circuit: CircuitBuilder::new(config.slots_per_lane),
            matching: MatchingGame::new(),
            quiz: QuizSession::new(config.question_bank()?),
            drag: DragSession::new(),
            rng,
            observers: Vec::new(),
        })
    }

    /// A tour with the built-in questions and a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            navigation: NavigationController::new(),
            bit_qubit: BitQubitDemo::new(),
            coin: CoinSimulator::new(),
            particles: EntangledPair::new(),
            circuit: CircuitBuilder::default(),
            matching: MatchingGame::new(),
            quiz: QuizSession::default(),
            drag: DragSession::new(),
            rng,
            observers: Vec::new(),
        }
    }

    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: TourObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    fn publish(&mut self, event: TourEvent) {
        let mut observers = mem::take(&mut self.observers);
        for observer in observers.iter_mut() {
            observer.on_event(&event, self);
        }
        self.observers = observers;
    }

    // --- Read-only state ---

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn bit_qubit(&self) -> &BitQubitDemo {
        &self.bit_qubit
    }

    pub fn coin(&self) -> &CoinSimulator {
        &self.coin
    }

    pub fn particles(&self) -> &EntangledPair {
        &self.particles
    }

    pub fn circuit(&self) -> &CircuitBuilder {
        &self.circuit
    }

    pub fn matching(&self) -> &MatchingGame {
        &self.matching
    }

    pub fn quiz(&self) -> &QuizSession {
        &self.quiz
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    // --- Navigation ---

    /// Link or progress-item click.
    pub fn navigate(&mut self, id: &str) -> Result<Section, TourError> {
        let section = self.navigation.navigate(id)?;
        self.publish_navigated();
        Ok(section)
    }

    /// Leaves `from` via a continue button.
    pub fn advance(&mut self, from: &str, to: &str) -> Result<Section, TourError> {
        let from = from.parse::<Section>().inspect_err(|_| {
            warn!(section = from, "Cannot advance from unknown section");
        })?;
        let newly_completed = !self.navigation.is_completed(from);
        let result = self.navigation.advance_from(from, to);
        if newly_completed {
            self.publish(TourEvent::SectionCompleted(from));
        }
        let section = result?;
        self.publish_navigated();
        Ok(section)
    }

    /// Continue button on the current section.
    pub fn continue_to(&mut self, to: &str) -> Result<Section, TourError> {
        let from = self.navigation.current_section();
        self.advance(from.id(), to)
    }

    /// "Start the journey" on the home page.
    pub fn start_journey(&mut self) {
        self.navigation.navigate_to(Section::Introduction);
        self.publish_navigated();
    }

    /// Brand/logo click.
    pub fn go_home(&mut self) {
        self.navigation.navigate_to(Section::Home);
        self.publish_navigated();
    }

    fn publish_navigated(&mut self) {
        self.publish(TourEvent::Navigated {
            section: self.navigation.current_section(),
            progress: self.navigation.progress_percent(),
        });
    }

    // --- Bit vs qubit ---

    pub fn flip_bit(&mut self) -> Bit {
        let bit = self.bit_qubit.flip_bit();
        self.publish(TourEvent::BitFlipped(bit));
        bit
    }

    pub fn measure_qubit(&mut self) -> Bit {
        let value = self.bit_qubit.measure_qubit(&mut self.rng);
        self.publish(TourEvent::QubitMeasured(value));
        value
    }

    pub fn reset_qubit(&mut self) {
        self.bit_qubit.reset_qubit();
        self.publish(TourEvent::QubitReset);
    }

    // --- Superposition coin ---

    pub fn measure_coin(&mut self) -> CoinFace {
        let face = self.coin.measure(&mut self.rng);
        self.publish(TourEvent::CoinMeasured(face));
        face
    }

    pub fn reset_coin(&mut self) {
        self.coin.reset();
        self.publish(TourEvent::CoinReset);
    }

    // --- Entanglement ---

    /// Click on either particle.
    pub fn interact_particle(&mut self) -> (Spin, Spin) {
        let (first, second) = self.particles.interact();
        self.publish(TourEvent::ParticlesChanged(first, second));
        (first, second)
    }

    pub fn reset_entanglement(&mut self) {
        self.particles.reset();
        let (first, second) = self.particles.spins();
        self.publish(TourEvent::ParticlesChanged(first, second));
    }

    // --- Drag and drop ---

    pub fn drag_start(&mut self, item: DragItem) {
        debug!(?item, "Drag started");
        self.drag.start(item);
    }

    /// Ends the gesture, whether or not anything was dropped.
    pub fn drag_end(&mut self) {
        self.drag.end();
    }

    /// Drop on a circuit slot. Returns `Ok(false)` when no gate is being dragged.
    pub fn drop_on_slot(&mut self, lane: Lane, position: usize) -> Result<bool, TourError> {
        let Some(gate) = self.drag.gate() else {
            debug!(lane = %lane, position, "Drop on slot ignored, no gate dragged");
            return Ok(false);
        };
        self.place_gate(lane, position, gate)?;
        Ok(true)
    }

    /// Drop on a matching target. Anything but an application card is ignored.
    pub fn drop_on_target(&mut self, target: AppDomain) -> MatchOutcome {
        match self.drag.application() {
            Some(source) => self.attempt_match(source, target),
            None => {
                debug!(target = %target, "Drop on target ignored, no application dragged");
                MatchOutcome::Rejected
            }
        }
    }

    // --- Gate circuit ---

    pub fn place_gate(&mut self, lane: Lane, position: usize, gate: Gate) -> Result<Option<Gate>, TourError> {
        let replaced = self.circuit.place(lane, position, gate)?;
        self.publish(TourEvent::CircuitEdited { lane, position, gate: Some(gate) });
        Ok(replaced)
    }

    /// Click on a placed gate removes it.
    pub fn click_gate(&mut self, lane: Lane, position: usize) -> Result<Option<Gate>, TourError> {
        let removed = self.circuit.remove(lane, position)?;
        if removed.is_some() {
            self.publish(TourEvent::CircuitEdited { lane, position, gate: None });
        }
        Ok(removed)
    }

    pub fn run_circuit(&mut self) -> CircuitOutput {
        let output = self.circuit.evaluate();
        self.publish(TourEvent::CircuitEvaluated(output));
        output
    }

    pub fn clear_circuit(&mut self) {
        self.circuit.clear();
        self.publish(TourEvent::CircuitCleared);
    }

    // --- Matching game ---

    pub fn attempt_match(&mut self, source: AppDomain, target: AppDomain) -> MatchOutcome {
        let outcome = self.matching.attempt_match(source, target);
        if let MatchOutcome::Matched { score, completed } = outcome {
            self.publish(TourEvent::Matched { domain: target, score });
            if completed {
                self.publish(TourEvent::MatchingCompleted);
            }
        }
        outcome
    }

    pub fn reset_matching(&mut self) {
        self.matching.reset();
        self.publish(TourEvent::MatchingReset);
    }

    // --- Quiz ---

    pub fn select_option(&mut self, option: usize) -> Result<AnswerFeedback, TourError> {
        let feedback = self.quiz.select_option(option)?;
        self.publish(TourEvent::QuizAnswered(feedback.clone()));
        Ok(feedback)
    }

    /// Next button; finishes the quiz from the last question.
    pub fn next_question(&mut self) -> QuizState {
        let was_finished = self.quiz.is_finished();
        let state = self.quiz.next();
        if state == QuizState::Finished {
            if !was_finished {
                self.complete_quiz();
            }
        } else {
            self.publish(TourEvent::QuizMoved(state));
        }
        state
    }

    pub fn previous_question(&mut self) -> QuizState {
        let before = self.quiz.state();
        let state = self.quiz.previous();
        if state != before {
            self.publish(TourEvent::QuizMoved(state));
        }
        state
    }

    pub fn finish_quiz(&mut self) -> QuizResult {
        if self.quiz.is_finished() {
            return self.quiz.result();
        }
        self.quiz.finish();
        self.complete_quiz()
    }

    fn complete_quiz(&mut self) -> QuizResult {
        let result = self.quiz.result();
        self.publish(TourEvent::QuizFinished(result));
        if self.navigation.mark_completed(Section::Quiz) {
            self.publish(TourEvent::SectionCompleted(Section::Quiz));
        }
        result
    }

    pub fn restart_quiz(&mut self) {
        self.quiz.restart();
        self.publish(TourEvent::QuizRestarted);
    }
}

impl Default for Tour {
    /// Built-in questions, OS-seeded randomness.
    fn default() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}
