use approx::assert_relative_eq;
use rbc_calibration::Calibration;
use rbc_grid::{CapitalGrid, GridError, GridSpec, ProductionTable};

#[test]
fn reference_offset_grid_brackets_steady_state() {
    let cal = Calibration::reference().unwrap();
    let k_star = cal.steady_state().capital();
    let grid = CapitalGrid::build(k_star, &GridSpec::reference()).unwrap();

    assert_eq!(grid.len(), GridSpec::REFERENCE_POINTS);
    assert_relative_eq!(grid.lower(), 0.5 * k_star, max_relative = 1e-14);
    assert_relative_eq!(
        grid.upper(),
        0.5 * k_star + 0.00001 * 17_819.0,
        max_relative = 1e-12
    );
    assert!(grid.lower() < k_star && k_star < grid.upper());
    assert!(grid.values().windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn reference_span_grid_stays_below_upper_factor() {
    let cal = Calibration::reference().unwrap();
    let k_star = cal.steady_state().capital();
    let grid = CapitalGrid::build(k_star, &GridSpec::reference_span()).unwrap();

    let expected = (k_star / 0.00001).ceil() as usize;
    assert_eq!(grid.len(), expected);
    assert!(grid.upper() < 1.5 * k_star);
    assert!(grid.upper() + grid.step() >= 1.5 * k_star - 1e-12);
    assert!(grid.values().windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn grid_lengths_are_exact() {
    for n_points in [1, 2, 7, 100] {
        let spec = GridSpec::Offset {
            n_points,
            step: 0.01,
            lower_factor: 0.5,
        };
        let grid = CapitalGrid::build(1.0, &spec).unwrap();
        assert_eq!(grid.len(), n_points);
    }
}

#[test]
fn production_table_for_reference_calibration() {
    let cal = Calibration::reference().unwrap();
    let k_star = cal.steady_state().capital();
    let grid = CapitalGrid::build(k_star, &GridSpec::reference()).unwrap();
    let table =
        ProductionTable::precompute(&grid, cal.process().levels(), cal.elasticity()).unwrap();

    assert_eq!(table.n_capital(), grid.len());
    assert_eq!(table.n_productivity(), 5);
    // Higher productivity yields more output at every capital level.
    for z in 1..5 {
        let (lo, hi) = (table.column(z - 1), table.column(z));
        assert!(lo.iter().zip(hi).all(|(a, b)| b > a));
    }
    // At unit productivity and k*, output equals steady-state output up to grid rounding.
    let k = grid.values().iter().position(|&v| v >= k_star).unwrap();
    assert_relative_eq!(
        table.output(k, 2),
        cal.steady_state().output(),
        max_relative = 1e-4
    );
}

/// A step below the floating-point spacing at `0.5 k*` collapses adjacent points.
#[test]
fn step_below_resolution_is_rejected() {
    let k_star = Calibration::reference().unwrap().steady_state().capital();
    let spec = GridSpec::Offset {
        n_points: 50,
        step: 1e-18,
        lower_factor: 0.5,
    };
    let err = CapitalGrid::build(k_star, &spec).unwrap_err();
    assert!(matches!(err, GridError::StepBelowResolution { index: 1, .. }));
}

/// A span step so small that the point count would exhaust memory.
#[test]
fn tiny_span_step_is_rejected() {
    let k_star = Calibration::reference().unwrap().steady_state().capital();
    let spec = GridSpec::Span {
        step: 1e-18,
        lower_factor: 0.5,
        upper_factor: 1.5,
    };
    assert!(matches!(
        CapitalGrid::build(k_star, &spec),
        Err(GridError::TooManyPoints { .. })
    ));
}
