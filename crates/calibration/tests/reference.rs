use approx::assert_relative_eq;
use rbc_calibration::{
    Calibration, CalibrationError, ProductivityProcess, REFERENCE_PRODUCTIVITY,
    REFERENCE_TRANSITION, TransitionMatrix, reference_transition, steady_state,
};

fn reference_rows() -> Vec<Vec<f64>> {
    REFERENCE_TRANSITION.iter().map(|r| r.to_vec()).collect()
}

#[test]
fn reference_calibration_builds() {
    let cal = Calibration::reference().expect("reference calibration must validate");
    assert_eq!(cal.process().levels(), &REFERENCE_PRODUCTIVITY);
    assert_eq!(cal.process().n_states(), 5);
}

/// The published middle row sums to 1.0001 and fails the strict check.
#[test]
fn published_rows_need_normalizing() {
    let err = TransitionMatrix::new(&reference_rows()).unwrap_err();
    assert!(matches!(err, CalibrationError::RowSumMismatch { row: 2, .. }));
    assert!(TransitionMatrix::normalized(&reference_rows()).is_ok());
}

#[test]
fn reference_calibration_uses_normalized_rows() {
    let cal = Calibration::reference().unwrap();
    let rows = reference_transition().unwrap();
    for (z, (row, published)) in rows.iter().zip(REFERENCE_TRANSITION.iter()).enumerate() {
        assert_eq!(cal.process().transition().row(z), row.as_slice());
        let sum: f64 = published.iter().sum();
        for (p, q) in row.iter().zip(published) {
            assert_relative_eq!(*p, q / sum, max_relative = 1e-15);
        }
    }
}

#[test]
fn reference_steady_state_agrees_with_free_function() {
    let cal = Calibration::reference().unwrap();
    let a = cal.steady_state();
    let b = steady_state(cal.elasticity(), cal.discount()).unwrap();
    assert_eq!(a, b);
    assert_relative_eq!(a.output(), a.capital() + a.consumption(), max_relative = 1e-12);
}

#[test]
fn perturbed_reference_row_is_rejected() {
    let mut rows = reference_transition().unwrap();
    rows[2][2] += 1e-6;
    let err = ProductivityProcess::new(REFERENCE_PRODUCTIVITY.to_vec(), &rows).unwrap_err();
    assert!(matches!(err, CalibrationError::RowSumMismatch { row: 2, .. }));
}

#[test]
fn single_state_process_round_trips_through_calibration() {
    let process = ProductivityProcess::new(vec![1.0], &[vec![1.0]]).unwrap();
    assert_eq!(process, ProductivityProcess::degenerate(1.0).unwrap());
    let cal = Calibration::new(0.3, 0.9, process).unwrap();
    assert_eq!(cal.process().n_states(), 1);
}
