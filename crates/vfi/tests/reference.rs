//! End-to-end solve of the reference calibration on the full grid.

use approx::assert_abs_diff_eq;
use rbc_calibration::Calibration;
use rbc_grid::GridSpec;
use rbc_vfi::{Model, VfiConfig, solve};

/// Capital index and productivity index of the published check value.
const CHECK_CAPITAL: usize = 999;
const CHECK_PRODUCTIVITY: usize = 2;

/// Policy at the check state, to four significant digits.
const CHECK_POLICY: f64 = 0.14655;

#[test]
fn reference_solution() {
    let model = Model::new(Calibration::reference().unwrap(), &GridSpec::reference()).unwrap();
    let config = VfiConfig::new().with_parallel(true);
    let sol = solve(&model, &config).unwrap();

    assert!(sol.sup_diff() <= 1e-7);
    assert!(
        (200..400).contains(&sol.iterations()),
        "unexpected iteration count {}",
        sol.iterations()
    );
    assert!(!sol.hits_upper_bound());

    // Grid point at the check index.
    assert_abs_diff_eq!(
        model.grid().value(CHECK_CAPITAL),
        0.099_089_143_696_263_5,
        epsilon = 1e-12
    );

    let policy = sol.policy_at(CHECK_CAPITAL, CHECK_PRODUCTIVITY);
    assert_abs_diff_eq!(policy, CHECK_POLICY, epsilon = 5e-5);

    // Closed form alpha * beta * z * k^alpha.
    let cal = model.calibration();
    let k = model.grid().value(CHECK_CAPITAL);
    let z = cal.process().levels()[CHECK_PRODUCTIVITY];
    let closed_form = cal.elasticity() * cal.discount() * z * k.powf(cal.elasticity());
    assert_abs_diff_eq!(policy, closed_form, epsilon = 5e-5);
}

#[test]
fn reference_policy_structure() {
    let model = Model::new(Calibration::reference().unwrap(), &GridSpec::reference()).unwrap();
    let sol = solve(&model, &VfiConfig::new().with_parallel(true)).unwrap();
    let (n_capital, n_productivity) = model.shape();

    for z in 0..n_productivity {
        let idx = sol.policy_index_column(z);
        assert!(
            idx.windows(2).all(|w| w[0] <= w[1]),
            "policy not monotone in capital for z = {z}"
        );
        let values = sol.value().column(z);
        assert!(
            values.windows(2).all(|w| w[0] < w[1]),
            "value not increasing in capital for z = {z}"
        );
        for k in (0..n_capital).step_by(997) {
            assert_eq!(sol.policy_at(k, z), model.grid().value(idx[k]));
            let consumption = model.production().output(k, z) - sol.policy_at(k, z);
            assert!(consumption > 0.0);
        }
    }

    // Higher productivity never lowers savings.
    for k in (0..n_capital).step_by(1_001) {
        for z in 1..n_productivity {
            assert!(sol.policy_index_at(k, z) >= sol.policy_index_at(k, z - 1));
        }
    }
}
