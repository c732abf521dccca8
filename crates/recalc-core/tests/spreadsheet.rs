//! Behavior tests for the cell store: set/get contracts, cycle rejection,
//! and undo/redo history.

use recalc_core::{CellContent, CellValue, Spreadsheet, SpreadsheetError};

fn number(sheet: &Spreadsheet, id: &str) -> f64 {
    match sheet.get_cell_value(id).unwrap() {
        CellValue::Number(n) => n,
        CellValue::Text(s) => panic!("expected number in {}, got text {:?}", id, s),
    }
}

#[test]
fn test_literal_round_trip() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", 13).unwrap();
    sheet.set_cell_value("A2", 1.5).unwrap();
    sheet.set_cell_value("B1", "Hello").unwrap();

    assert_eq!(number(&sheet, "A1"), 13.0);
    assert_eq!(number(&sheet, "A2"), 1.5);
    assert_eq!(
        sheet.get_cell_value("B1").unwrap(),
        CellValue::Text("Hello".to_string())
    );
}

#[test]
fn test_text_is_never_coerced() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", "10").unwrap();
    assert_eq!(
        sheet.get_cell_value("A1").unwrap(),
        CellValue::Text("10".to_string())
    );
}

#[test]
fn test_formula_addition() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", 13).unwrap();
    sheet.set_cell_value("A2", 14).unwrap();
    sheet.set_cell_value("A3", "=A1+A2").unwrap();

    assert_eq!(number(&sheet, "A3"), 27.0);
}

#[test]
fn test_formula_chain() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", 13).unwrap();
    sheet.set_cell_value("A2", 14).unwrap();
    sheet.set_cell_value("A3", "=A1+A2").unwrap();
    sheet.set_cell_value("A4", "=A1+A2+A3").unwrap();

    assert_eq!(number(&sheet, "A4"), 54.0);
}

#[test]
fn test_formula_mixed_literals_and_references() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", 13).unwrap();
    sheet.set_cell_value("C1", "=A1 + 10").unwrap();
    assert_eq!(number(&sheet, "C1"), 23.0);
}

#[test]
fn test_formula_division_uses_float_semantics() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", 10).unwrap();
    sheet.set_cell_value("A2", 4).unwrap();
    sheet.set_cell_value("B1", "=A1/A2").unwrap();
    assert_eq!(number(&sheet, "B1"), 2.5);

    // Integer literals in formula text are floats too.
    sheet.set_cell_value("B2", "=10/4").unwrap();
    assert_eq!(number(&sheet, "B2"), 2.5);
}

#[test]
fn test_division_by_zero_is_nan_not_error() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", 10).unwrap();
    sheet.set_cell_value("A2", 0).unwrap();
    sheet.set_cell_value("B1", "=A1/A2").unwrap();

    assert!(sheet.get_cell_value("B1").unwrap().is_nan());
}

#[test]
fn test_nan_propagates_through_arithmetic() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", 10).unwrap();
    sheet.set_cell_value("A2", 0).unwrap();
    sheet.set_cell_value("B1", "=A1/A2").unwrap();
    sheet.set_cell_value("C1", "=B1+1").unwrap();

    assert!(sheet.get_cell_value("C1").unwrap().is_nan());
}

#[test]
fn test_formula_reflects_updated_literal() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", 10).unwrap();
    sheet.set_cell_value("A2", "=A1").unwrap();
    sheet.set_cell_value("A1", 20).unwrap();

    assert_eq!(number(&sheet, "A2"), 20.0);
}

#[test]
fn test_get_missing_cell() {
    let sheet = Spreadsheet::new();
    assert!(matches!(
        sheet.get_cell_value("A1"),
        Err(SpreadsheetError::CellNotFound(_))
    ));
}

#[test]
fn test_invalid_identifiers_rejected_and_create_nothing() {
    let mut sheet = Spreadsheet::new();
    for bad in ["", "121", "a1", "A0", "1A", "A 1"] {
        assert!(
            matches!(
                sheet.set_cell_value(bad, 1),
                Err(SpreadsheetError::InvalidIdentifier(_))
            ),
            "expected rejection for {:?}",
            bad
        );
    }
    assert!(sheet.is_empty());
    assert!(sheet.get_cell_value("121").is_err());
}

#[test]
fn test_direct_cycle_rejected() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", "=A1").unwrap_err();
    assert!(sheet.is_empty());
}

#[test]
fn test_indirect_cycle_rejected_without_mutation() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", "=B1").unwrap();
    sheet.set_cell_value("B1", "=C1").unwrap();

    let err = sheet.set_cell_value("C1", "=A1").unwrap_err();
    assert!(matches!(err, SpreadsheetError::CircularReference(_)));

    // The rejected write left no trace: C1 never exists, and breaking the
    // chain with a literal still works.
    assert!(sheet.get_cell_value("C1").is_err());
    sheet.set_cell_value("C1", 42).unwrap();
    assert_eq!(number(&sheet, "A1"), 42.0);
    assert_eq!(number(&sheet, "B1"), 42.0);
}

#[test]
fn test_cycle_rejection_preserves_existing_formula() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("B1", 5).unwrap();
    sheet.set_cell_value("A1", "=B1").unwrap();
    sheet.set_cell_value("B1", "=A1").unwrap_err();

    // B1 keeps its literal; A1 still evaluates.
    assert_eq!(number(&sheet, "B1"), 5.0);
    assert_eq!(number(&sheet, "A1"), 5.0);

    // Overwriting A1's own formula with a self-cycle keeps the old formula.
    sheet.set_cell_value("A1", "=A1+1").unwrap_err();
    assert_eq!(number(&sheet, "A1"), 5.0);
}

#[test]
fn test_replacing_formula_with_literal_drops_dependencies() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", 5).unwrap();
    sheet.set_cell_value("B1", "=A1").unwrap();
    sheet.set_cell_value("B1", 7).unwrap();

    // B1 no longer depends on A1, so the reverse edge is legal.
    sheet.set_cell_value("A1", "=B1").unwrap();
    assert_eq!(number(&sheet, "A1"), 7.0);
}

#[test]
fn test_undo_restores_prior_content() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", 10).unwrap();
    sheet.set_cell_value("A1", 20).unwrap();
    sheet.undo();
    assert_eq!(number(&sheet, "A1"), 10.0);
}

#[test]
fn test_undo_of_first_set_removes_cell() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("C1", "=1+1").unwrap();
    sheet.undo();
    assert!(matches!(
        sheet.get_cell_value("C1"),
        Err(SpreadsheetError::CellNotFound(_))
    ));
    assert!(sheet.is_empty());
}

#[test]
fn test_undo_then_redo_is_a_no_op() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", 13).unwrap();
    sheet.set_cell_value("C1", "=A1 + 10").unwrap();
    sheet.undo();
    sheet.redo();
    assert_eq!(number(&sheet, "C1"), 23.0);

    // A redone formula keeps reacting to its references.
    sheet.set_cell_value("A1", 3).unwrap();
    assert_eq!(number(&sheet, "C1"), 13.0);
}

#[test]
fn test_undo_restores_overwritten_formula() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", 13).unwrap();
    sheet.set_cell_value("A2", 14).unwrap();
    sheet.set_cell_value("A12", "=A2+A1").unwrap();
    sheet.set_cell_value("A12", "=A2-A1").unwrap();

    sheet.undo();
    assert_eq!(number(&sheet, "A12"), 27.0);
    sheet.redo();
    assert_eq!(number(&sheet, "A12"), 1.0);
}

#[test]
fn test_undo_reregisters_dependencies() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", 5).unwrap();
    sheet.set_cell_value("B1", "=A1").unwrap();
    sheet.set_cell_value("B1", 7).unwrap();
    sheet.undo();

    // B1 is a formula on A1 again, so the reverse edge is a cycle.
    assert!(matches!(
        sheet.set_cell_value("A1", "=B1"),
        Err(SpreadsheetError::CircularReference(_))
    ));
}

#[test]
fn test_write_after_undo_clears_redo() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", 1).unwrap();
    sheet.set_cell_value("A1", 2).unwrap();
    sheet.undo();
    sheet.set_cell_value("A1", 3).unwrap();
    sheet.redo();

    assert_eq!(number(&sheet, "A1"), 3.0);
}

#[test]
fn test_undo_redo_on_empty_stacks_do_nothing() {
    let mut sheet = Spreadsheet::new();
    sheet.undo();
    sheet.redo();
    assert!(sheet.is_empty());

    sheet.set_cell_value("A1", 1).unwrap();
    sheet.redo();
    assert_eq!(number(&sheet, "A1"), 1.0);
}

#[test]
fn test_repeated_undo_walks_history_linearly() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", 1).unwrap();
    sheet.set_cell_value("A1", 2).unwrap();
    sheet.set_cell_value("A1", 3).unwrap();

    sheet.undo();
    assert_eq!(number(&sheet, "A1"), 2.0);
    sheet.undo();
    assert_eq!(number(&sheet, "A1"), 1.0);
    sheet.undo();
    assert!(sheet.get_cell_value("A1").is_err());

    sheet.redo();
    assert_eq!(number(&sheet, "A1"), 1.0);
    sheet.redo();
    assert_eq!(number(&sheet, "A1"), 2.0);
    sheet.redo();
    assert_eq!(number(&sheet, "A1"), 3.0);
}

#[test]
fn test_get_raw_returns_unevaluated_content() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", 13).unwrap();
    sheet.set_cell_value("A3", "=A1+1").unwrap();

    assert_eq!(sheet.get_raw("A1").unwrap(), &CellContent::Number(13.0));
    assert_eq!(
        sheet.get_raw("A3").unwrap(),
        &CellContent::Formula("=A1+1".to_string())
    );
    assert!(matches!(
        sheet.get_raw("B1"),
        Err(SpreadsheetError::CellNotFound(_))
    ));
}

#[test]
fn test_formula_error_names_owning_cell() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A3", "=B7+1").unwrap();

    let err = sheet.get_cell_value("A3").unwrap_err();
    assert!(matches!(err, SpreadsheetError::Formula { .. }));
    assert!(err.to_string().contains("A3"));
}

#[test]
fn test_formula_over_text_reference_fails() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("B1", "Hello").unwrap();
    sheet.set_cell_value("C1", "=B1+1").unwrap();

    let err = sheet.get_cell_value("C1").unwrap_err();
    assert!(err.to_string().contains("C1"));
}

#[test]
fn test_nested_formula_error_is_wrapped_per_cell() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", "=Z9+1").unwrap();
    sheet.set_cell_value("A2", "=A1").unwrap();

    let message = sheet.get_cell_value("A2").unwrap_err().to_string();
    assert!(message.contains("A2"));
    assert!(message.contains("A1"));
}

#[test]
fn test_set_records_history_even_for_identical_value() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_value("A1", 5).unwrap();
    sheet.set_cell_value("A1", 5).unwrap();
    sheet.undo();
    assert_eq!(number(&sheet, "A1"), 5.0);
    sheet.undo();
    assert!(sheet.get_cell_value("A1").is_err());
}
