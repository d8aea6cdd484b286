//! End-to-end checks of the public solving API and the solver factory.

use approx::assert_relative_eq;
use mathmind::{
    evaluate_expression, solve_linear, solve_quadratic, solve_sqrt, MathProblem, ProblemKind,
    Root, Solution, SolverError, SolverFactory,
};

// =============================================================================
// Library functions
// =============================================================================

#[test]
fn linear_examples() {
    assert_relative_eq!(solve_linear("3x + 5 = 14").unwrap().solution, 3.0);
    assert_relative_eq!(solve_linear("x = 5").unwrap().solution, 5.0);
    assert!(solve_linear("not an equation").is_none());
}

#[test]
fn quadratic_examples() {
    let s = solve_quadratic(1.0, -3.0, 2.0).unwrap();
    assert_eq!((s.roots.x1, s.roots.x2), (Root::Real(2.0), Root::Real(1.0)));
    assert_eq!(s.discriminant, 1.0);

    let s = solve_quadratic(1.0, 2.0, 1.0).unwrap();
    assert_eq!((s.roots.x1, s.roots.x2), (Root::Real(-1.0), Root::Real(-1.0)));
    assert_eq!(s.discriminant, 0.0);

    let s = solve_quadratic(1.0, 0.0, 1.0).unwrap();
    assert_eq!(s.roots.x1.to_string(), "0.0000 + 1.0000i");
    assert_eq!(s.roots.x2.to_string(), "0.0000 - 1.0000i");
    assert_eq!(s.discriminant, -4.0);
}

#[test]
fn discriminant_sign_matches_root_kind() {
    for (a, b, c) in [(1.0, 5.0, 6.0), (4.0, 4.0, 1.0), (3.0, 1.0, 2.0), (-1.0, 0.0, 9.0)] {
        let s = solve_quadratic(a, b, c).unwrap();
        let both_real = s.roots.x1.is_real() && s.roots.x2.is_real();
        assert_eq!(both_real, s.discriminant >= 0.0, "({a}, {b}, {c})");
        if s.discriminant == 0.0 {
            assert_eq!(s.roots.x1, s.roots.x2);
        }
    }
}

#[test]
fn sqrt_examples() {
    let s = solve_sqrt(144.0).unwrap();
    assert_eq!(s.exact, "12");
    assert_eq!(s.decimal, 12.0);

    let s = solve_sqrt(2.0).unwrap();
    assert_eq!(s.exact, "√2");
    assert_relative_eq!(s.decimal, 2f64.sqrt());
}

#[test]
fn expression_examples() {
    assert_eq!(evaluate_expression("2 + 2 * 5").unwrap(), 12.0);
    assert!(matches!(
        evaluate_expression("not math"),
        Err(SolverError::InvalidExpression(_))
    ));
}

#[test]
fn calls_are_referentially_transparent() {
    assert_eq!(solve_linear("2x - 3 = 7"), solve_linear("2x - 3 = 7"));
    assert_eq!(solve_quadratic(2.0, 3.0, 5.0), solve_quadratic(2.0, 3.0, 5.0));
    assert_eq!(solve_sqrt(48.0), solve_sqrt(48.0));
    assert_eq!(evaluate_expression("7 % 4"), evaluate_expression("7 % 4"));
}

// =============================================================================
// Factory dispatch
// =============================================================================

#[test]
fn factory_picks_solver_by_kind() {
    for kind in ProblemKind::ALL {
        assert_eq!(SolverFactory::create_for_kind(kind).kind(), kind);
    }
    assert_eq!(SolverFactory::available().len(), ProblemKind::ALL.len());
}

#[test]
fn factory_solves_each_kind() {
    let cases = [
        (MathProblem::linear("4x + 2 = 10"), "x = 2"),
        (MathProblem::quadratic(1.0, -5.0, 6.0), "x₁ = 3, x₂ = 2"),
        (MathProblem::square_root(81.0), "√81 = 9"),
        (MathProblem::expression("(1 + 2) ^ 2"), "9"),
    ];

    for (problem, expected) in cases {
        let solver = SolverFactory::create_solver(&problem);
        let solution = solver.solve(&problem).unwrap();
        assert_eq!(solution.kind(), problem.kind());
        assert_eq!(solution.summary(), expected);
    }
}

#[test]
fn free_text_goes_to_the_right_solver() {
    let problem = MathProblem::from_text("√50");
    let solution = SolverFactory::create_solver(&problem)
        .solve(&problem)
        .unwrap();
    let Solution::SquareRoot(s) = solution else {
        panic!("expected a square root solution");
    };
    assert_eq!(s.simplified.unwrap().to_string(), "5√2");
}

#[test]
fn domain_violations_are_reported() {
    let cases = [
        MathProblem::quadratic(0.0, 1.0, 1.0),
        MathProblem::square_root(-9.0),
        MathProblem::linear("0x + 3 = 3"),
    ];

    for problem in cases {
        let err = SolverFactory::create_solver(&problem)
            .solve(&problem)
            .unwrap_err();
        assert!(matches!(err, SolverError::InvalidDomain(_)), "{problem:?}");
    }
}

#[test]
fn solver_refuses_foreign_problems() {
    let solver = SolverFactory::create_for_kind(ProblemKind::Linear);
    let err = solver.validate(&MathProblem::square_root(4.0)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid problem: Linear solver cannot solve a Square Root problem"
    );
}
