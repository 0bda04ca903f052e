//! Integration tests for module exports.
//!
//! Verify that all public modules and types are accessible via absolute paths.

/// Test that dispersion types are accessible via absolute path.
#[test]
fn test_dispersion_module_exports() {
    use optics_core::dispersion::index_extraordinary;
    use optics_core::dispersion::index_ordinary;
    use optics_core::dispersion::Crystal;
    use optics_core::dispersion::RefractiveIndexPair;
    use optics_core::dispersion::SellmeierCoefficients;
    use optics_core::dispersion::UniaxialCrystal;
    use optics_core::dispersion::BBO;

    let _ = index_ordinary(1.0_f64);
    let _ = index_extraordinary(1.0_f64);

    let record: &UniaxialCrystal = Crystal::Bbo.record();
    assert_eq!(*record, BBO);

    let custom = SellmeierCoefficients::new(2.0, 0.01, 0.01, 0.01);
    assert!(custom.index(1.0_f64).is_ok());

    let pair: RefractiveIndexPair<f64> = BBO.indices(1.0).unwrap();
    assert!(pair.n_o > 1.0);
}

/// Test that solver types are accessible via absolute path.
#[test]
fn test_solvers_module_exports() {
    use optics_core::math::solvers::MinimiserResult;
    use optics_core::math::solvers::NelderMeadSolver;
    use optics_core::math::solvers::SolverConfig;

    let solver = NelderMeadSolver::new(SolverConfig::<f64>::fast());
    let result: MinimiserResult<f64> = solver.minimise(|x| (x - 1.0).abs(), 0.5).unwrap();
    assert!(result.f < 1e-5);
}

/// Test that error types are accessible via absolute path.
#[test]
fn test_error_module_exports() {
    use optics_core::types::error::DomainError as ErrorPathDomain;
    use optics_core::types::DomainError;
    use optics_core::types::SolverError;

    let err: DomainError = ErrorPathDomain::division_by_zero("test");
    assert!(format!("{}", err).contains("Division by zero"));

    let err = SolverError::NonFiniteObjective { x: 0.0 };
    let _: &dyn std::error::Error = &err;
}
