// tests/circuit_tests.rs

use qtour::{BasisLabel, CircuitBuilder, CircuitOutput, Gate, Lane, TourError};

fn outputs(builder: &mut CircuitBuilder) -> (BasisLabel, BasisLabel) {
    let output = builder.evaluate();
    (output.qubit0, output.qubit1)
}

#[test]
fn test_empty_grid() {
    let mut builder = CircuitBuilder::default();
    assert_eq!(outputs(&mut builder), (BasisLabel::Zero, BasisLabel::Zero));
}

#[test]
fn test_x_on_first_lane() -> Result<(), TourError> {
    let mut builder = CircuitBuilder::default();
    builder.place(Lane::Qubit0, 0, Gate::X)?;
    assert_eq!(outputs(&mut builder), (BasisLabel::One, BasisLabel::Zero));
    Ok(())
}

#[test]
fn test_h_then_x_follows_fold_rule() -> Result<(), TourError> {
    let mut builder = CircuitBuilder::default();
    builder.place(Lane::Qubit0, 0, Gate::H)?;
    builder.place(Lane::Qubit0, 1, Gate::X)?;
    // X sees |+⟩, which is not |0⟩, so the label becomes |0⟩
    assert_eq!(outputs(&mut builder), (BasisLabel::Zero, BasisLabel::Zero));
    Ok(())
}

#[test]
fn test_lanes_are_independent() -> Result<(), TourError> {
    let mut builder = CircuitBuilder::default();
    builder.place(Lane::Qubit1, 2, Gate::H)?;
    builder.place(Lane::Qubit0, 1, Gate::X)?;
    builder.place(Lane::Qubit0, 3, Gate::X)?;
    assert_eq!(outputs(&mut builder), (BasisLabel::Zero, BasisLabel::Plus));
    Ok(())
}

#[test]
fn test_drop_overwrites_and_click_removes() -> Result<(), TourError> {
    let mut builder = CircuitBuilder::default();
    assert_eq!(builder.place(Lane::Qubit0, 0, Gate::X)?, None);
    assert_eq!(builder.place(Lane::Qubit0, 0, Gate::H)?, Some(Gate::X));
    assert_eq!(builder.grid().gate_at(Lane::Qubit0, 0), Some(Gate::H));

    assert_eq!(builder.remove(Lane::Qubit0, 0)?, Some(Gate::H));
    assert_eq!(builder.remove(Lane::Qubit0, 0)?, None);
    assert!(builder.grid().is_empty());
    Ok(())
}

#[test]
fn test_output_only_changes_on_run_or_clear() -> Result<(), TourError> {
    let mut builder = CircuitBuilder::default();
    builder.place(Lane::Qubit0, 0, Gate::X)?;
    assert_eq!(builder.output(), CircuitOutput::default(), "Placing does not run the circuit");

    builder.evaluate();
    builder.remove(Lane::Qubit0, 0)?;
    assert_eq!(builder.output().qubit0, BasisLabel::One, "Stale output stays until the next run");

    builder.place(Lane::Qubit1, 0, Gate::H)?;
    builder.evaluate();
    builder.clear();
    assert!(builder.grid().is_empty());
    assert_eq!(builder.output(), CircuitOutput::default());
    Ok(())
}

#[test]
fn test_slot_bounds() {
    let mut builder = CircuitBuilder::new(3);
    assert!(builder.place(Lane::Qubit0, 2, Gate::X).is_ok());
    let err = builder.place(Lane::Qubit0, 3, Gate::X);
    assert!(matches!(err, Err(TourError::InvalidSlot { position: 3, .. })));
    assert!(builder.remove(Lane::Qubit1, 7).is_err());
}

#[test]
fn test_gate_symbols_parse() {
    assert_eq!("X".parse::<Gate>(), Ok(Gate::X));
    assert_eq!("H".parse::<Gate>(), Ok(Gate::H));
    assert!(matches!("Z".parse::<Gate>(), Err(TourError::Unrecognized { kind: "gate", .. })));
}
