// src/circuits/mod.rs

//! The drag-and-drop gate circuit of the gates section.
//!
//! A [`GateGrid`] holds two lanes of optional gates. Evaluation is a toy
//! left-to-right fold over basis-state *labels*, not a state-vector
//! simulation: `X` swaps |0⟩ and |1⟩ (anything else becomes |0⟩) and `H`
//! overwrites the label with |+⟩.

use crate::core::{BasisLabel, TourError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Default number of slots on each lane.
pub const DEFAULT_SLOTS_PER_LANE: usize = 4;

/// A gate from the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// Bit flip.
    X,
    /// Hadamard.
    H,
}

impl Gate {
    pub fn symbol(self) -> &'static str {
        match self {
            Gate::X => "X",
            Gate::H => "H",
        }
    }

    /// Applies this gate to a lane label.
    pub fn apply(self, label: BasisLabel) -> BasisLabel {
        match self {
            Gate::X => match label {
                BasisLabel::Zero => BasisLabel::One,
                BasisLabel::One | BasisLabel::Plus => BasisLabel::Zero,
            },
            Gate::H => BasisLabel::Plus,
        }
    }
}

impl FromStr for Gate {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Gate::X),
            "H" => Ok(Gate::H),
            other => Err(TourError::Unrecognized { kind: "gate", value: other.to_string() }),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One of the two qubit tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Lane {
    Qubit0,
    Qubit1,
}

impl Lane {
    pub const ALL: [Lane; 2] = [Lane::Qubit0, Lane::Qubit1];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Lane {
    type Error = TourError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Lane::ALL.get(value).copied().ok_or_else(|| TourError::Unrecognized {
            kind: "lane",
            value: value.to_string(),
        })
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.index())
    }
}

/// Output label per lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CircuitOutput {
    pub qubit0: BasisLabel,
    pub qubit1: BasisLabel,
}

impl CircuitOutput {
    pub fn lane(&self, lane: Lane) -> BasisLabel {
        match lane {
            Lane::Qubit0 => self.qubit0,
            Lane::Qubit1 => self.qubit1,
        }
    }
}

/// Folds a lane's gates, in slot order, starting from |0⟩.
pub fn evaluate_lane<I>(gates: I) -> BasisLabel
where
    I: IntoIterator<Item = Gate>,
{
    gates.into_iter().fold(BasisLabel::Zero, |label, gate| gate.apply(label))
}

/// Two sparse lanes of gate slots. Empty slots act as identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateGrid {
    slots_per_lane: usize,
    lanes: [BTreeMap<usize, Gate>; 2],
}

impl GateGrid {
    /// Creates an empty grid with `slots_per_lane` positions on each lane.
    pub fn new(slots_per_lane: usize) -> Self {
        Self {
            slots_per_lane,
            lanes: [BTreeMap::new(), BTreeMap::new()],
        }
    }

    pub fn slots_per_lane(&self) -> usize {
        self.slots_per_lane
    }

    fn check_slot(&self, lane: Lane, position: usize) -> Result<(), TourError> {
        if position >= self.slots_per_lane {
            return Err(TourError::InvalidSlot {
                lane: lane.index(),
                position,
                message: format!("lanes have {} slots", self.slots_per_lane),
            });
        }
        Ok(())
    }

    /// Puts `gate` in a slot, returning the gate it replaced.
    pub fn place(&mut self, lane: Lane, position: usize, gate: Gate) -> Result<Option<Gate>, TourError> {
        self.check_slot(lane, position)?;
        Ok(self.lanes[lane.index()].insert(position, gate))
    }

    /// Empties a slot, returning the gate that was there.
    pub fn remove(&mut self, lane: Lane, position: usize) -> Result<Option<Gate>, TourError> {
        self.check_slot(lane, position)?;
        Ok(self.lanes[lane.index()].remove(&position))
    }

    pub fn gate_at(&self, lane: Lane, position: usize) -> Option<Gate> {
        self.lanes[lane.index()].get(&position).copied()
    }

    /// Occupied slots of a lane in position order.
    pub fn lane_gates(&self, lane: Lane) -> impl Iterator<Item = (usize, Gate)> + '_ {
        self.lanes[lane.index()].iter().map(|(&pos, &gate)| (pos, gate))
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.iter().all(BTreeMap::is_empty)
    }

    pub fn clear(&mut self) {
        for lane in &mut self.lanes {
            lane.clear();
        }
    }

    /// Evaluates both lanes independently.
    pub fn evaluate(&self) -> CircuitOutput {
        let run = |lane: Lane| evaluate_lane(self.lane_gates(lane).map(|(_, gate)| gate));
        CircuitOutput {
            qubit0: run(Lane::Qubit0),
            qubit1: run(Lane::Qubit1),
        }
    }
}

impl Default for GateGrid {
    fn default() -> Self {
        Self::new(DEFAULT_SLOTS_PER_LANE)
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// The interactive builder: a grid plus the outputs shown next to it.
///
/// Outputs only change when the circuit is run or cleared, so editing the
/// grid leaves the previous result on display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircuitBuilder {
    grid: GateGrid,
    output: CircuitOutput,
}

impl CircuitBuilder {
    pub fn new(slots_per_lane: usize) -> Self {
        Self {
            grid: GateGrid::new(slots_per_lane),
            output: CircuitOutput::default(),
        }
    }

    /// Drops `gate` onto a slot, overwriting its occupant.
    pub fn place(&mut self, lane: Lane, position: usize, gate: Gate) -> Result<Option<Gate>, TourError> {
        let replaced = self.grid.place(lane, position, gate)?;
        debug!(lane = %lane, position, gate = %gate, ?replaced, "Gate placed");
        Ok(replaced)
    }

    /// Click on a placed gate: the slot becomes empty.
    pub fn remove(&mut self, lane: Lane, position: usize) -> Result<Option<Gate>, TourError> {
        let removed = self.grid.remove(lane, position)?;
        debug!(lane = %lane, position, ?removed, "Gate removed");
        Ok(removed)
    }

    /// Runs the circuit and keeps the result for display.
    pub fn evaluate(&mut self) -> CircuitOutput {
        self.output = self.grid.evaluate();
        debug!(q0 = %self.output.qubit0, q1 = %self.output.qubit1, "Circuit evaluated");
        self.output
    }

    /// Empties both lanes and resets both outputs to |0⟩.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.output = CircuitOutput::default();
    }

    pub fn grid(&self) -> &GateGrid {
        &self.grid
    }

    /// Output of the last run.
    pub fn output(&self) -> CircuitOutput {
        self.output
    }
}

/// Draws each lane as a wire of gate slots, optionally followed by a
/// per-lane result column.
fn draw_lanes(grid: &GateGrid, output: Option<CircuitOutput>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    const GATE_WIDTH: usize = 7; // e.g., "───H───"
    const H_WIRE: char = '─';

    fn format_slot(symbol: Option<&str>) -> String {
        match symbol {
            None => H_WIRE.to_string().repeat(GATE_WIDTH),
            Some(symbol) => {
                let total_dashes = GATE_WIDTH - symbol.chars().count();
                let pre_dashes = total_dashes / 2;
                let post_dashes = total_dashes - pre_dashes;
                format!(
                    "{}{}{}",
                    H_WIRE.to_string().repeat(pre_dashes),
                    symbol,
                    H_WIRE.to_string().repeat(post_dashes)
                )
            }
        }
    }

    for lane in Lane::ALL {
        write!(f, "{}: |0⟩", lane)?;
        for position in 0..grid.slots_per_lane {
            let gate = grid.gate_at(lane, position);
            write!(f, "{}", format_slot(gate.map(Gate::symbol)))?;
        }
        match output {
            Some(output) => writeln!(f, " {}", output.lane(lane))?,
            None => writeln!(f)?,
        }
    }
    Ok(())
}

/// The bare wiring, without results.
impl fmt::Display for GateGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        draw_lanes(self, None, f)
    }
}

/// The wiring followed by the output of the last run, which may predate
/// the current gates.
impl fmt::Display for CircuitBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        draw_lanes(&self.grid, Some(self.output), f)
    }
}
