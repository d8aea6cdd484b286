// Quadratic equation solver
// Closed-form roots, vertex and axis of symmetry for ax² + bx + c = 0

use crate::domain::{
    models::{MathProblem, QuadraticRoots, QuadraticSolution, Solution},
    solver_service::{Result, SolverError, SolverService},
    value_objects::{fixed4, quadratic_equation, ProblemKind, Root, Vertex},
};

/// Solve `ax² + bx + c = 0`.
///
/// Fails with [`SolverError::InvalidDomain`] when `a` is zero, any
/// coefficient is not finite, or the result overflows `f64`. Real roots are
/// ordered so that `x1 ≥ x2`.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<QuadraticSolution> {
    QuadraticSolver::new().validate(&MathProblem::quadratic(a, b, c))?;

    let mut steps = Vec::with_capacity(7);
    steps.push(format!("Given equation: {}", quadratic_equation(a, b, c)));

    let discriminant = b * b - 4.0 * a * c;
    ensure_finite(&[discriminant])?;
    steps.push(format!(
        "Calculate discriminant: Δ = b² - 4ac = ({})² - 4({})({}) = {}",
        b, a, c, discriminant
    ));

    let vertex_x = -b / (2.0 * a);

    let roots = if discriminant > 0.0 {
        let sqrt_d = discriminant.sqrt();
        let plus = (-b + sqrt_d) / (2.0 * a);
        let minus = (-b - sqrt_d) / (2.0 * a);
        let (x1, x2) = if plus >= minus { (plus, minus) } else { (minus, plus) };
        steps.push("Δ > 0: Two real roots exist".to_string());
        steps.push(format!("x₁ = (-b ± √Δ) / 2a = {}", fixed4(x1)));
        steps.push(format!("x₂ = (-b ∓ √Δ) / 2a = {}", fixed4(x2)));
        QuadraticRoots {
            x1: Root::Real(x1),
            x2: Root::Real(x2),
        }
    } else if discriminant == 0.0 {
        steps.push("Δ = 0: One real root (repeated)".to_string());
        steps.push(format!("x = -b / 2a = {}", fixed4(vertex_x)));
        QuadraticRoots {
            x1: Root::Real(vertex_x),
            x2: Root::Real(vertex_x),
        }
    } else {
        let x1 = Root::Complex {
            re: vertex_x,
            im: ((-discriminant).sqrt() / (2.0 * a)).abs(),
        };
        let x2 = x1.conjugate();
        steps.push("Δ < 0: Two complex roots".to_string());
        steps.push(format!("x₁ = {}", x1));
        steps.push(format!("x₂ = {}", x2));
        QuadraticRoots { x1, x2 }
    };

    let vertex = Vertex {
        x: vertex_x,
        y: a * vertex_x * vertex_x + b * vertex_x + c,
    };
    ensure_finite(&[vertex.x, vertex.y])?;
    for root in [roots.x1, roots.x2] {
        match root {
            Root::Real(x) => ensure_finite(&[x])?,
            Root::Complex { re, im } => ensure_finite(&[re, im])?,
        }
    }
    steps.push(format!("Vertex: {}", vertex));

    let axis_of_symmetry = vertex.x;
    steps.push(format!("Axis of symmetry: x = {}", fixed4(axis_of_symmetry)));

    Ok(QuadraticSolution {
        a,
        b,
        c,
        discriminant,
        roots,
        vertex,
        axis_of_symmetry,
        steps,
    })
}

fn ensure_finite(values: &[f64]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(SolverError::InvalidDomain(
            "Coefficients are too large: the result overflows".to_string(),
        ))
    }
}

/// Solver adapter for quadratic equations
pub struct QuadraticSolver;

impl QuadraticSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for QuadraticSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for QuadraticSolver {
    fn solve(&self, problem: &MathProblem) -> Result<Solution> {
        match problem {
            MathProblem::Quadratic { a, b, c } => {
                solve_quadratic(*a, *b, *c).map(Solution::Quadratic)
            }
            other => Err(SolverError::InvalidProblem(format!(
                "{} solver cannot solve a {} problem",
                self.kind(),
                other.kind()
            ))),
        }
    }

    fn name(&self) -> &str {
        "Quadratic Equation Solver"
    }

    fn kind(&self) -> ProblemKind {
        ProblemKind::Quadratic
    }

    fn capabilities(&self) -> Vec<String> {
        vec![
            "Discriminant analysis".to_string(),
            "Real, repeated and complex roots".to_string(),
            "Vertex and axis of symmetry".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn two_real_roots() {
        let s = solve_quadratic(1.0, -3.0, 2.0).unwrap();
        assert_eq!(s.discriminant, 1.0);
        assert_eq!(s.roots.x1, Root::Real(2.0));
        assert_eq!(s.roots.x2, Root::Real(1.0));
        assert_relative_eq!(s.vertex.x, 1.5);
        assert_relative_eq!(s.vertex.y, -0.25);
        assert_eq!(s.axis_of_symmetry, s.vertex.x);
    }

    #[test]
    fn repeated_root() {
        let s = solve_quadratic(1.0, 2.0, 1.0).unwrap();
        assert_eq!(s.discriminant, 0.0);
        assert_eq!(s.roots.x1, Root::Real(-1.0));
        assert_eq!(s.roots.x1, s.roots.x2);
    }

    #[test]
    fn complex_roots() {
        let s = solve_quadratic(1.0, 0.0, 1.0).unwrap();
        assert_eq!(s.discriminant, -4.0);
        assert_eq!(s.roots.x1.to_string(), "0.0000 + 1.0000i");
        assert_eq!(s.roots.x2.to_string(), "0.0000 - 1.0000i");
        assert!(!s.has_real_roots());
    }

    #[test]
    fn complex_roots_are_conjugates_for_negative_leading_coefficient() {
        let s = solve_quadratic(-2.0, 4.0, -10.0).unwrap();
        match (s.roots.x1, s.roots.x2) {
            (Root::Complex { re: r1, im: i1 }, Root::Complex { re: r2, im: i2 }) => {
                assert_eq!(r1, r2);
                assert_eq!(i1, -i2);
                assert_relative_eq!(r1, 1.0);
                assert_relative_eq!(i1, 2.0);
            }
            other => panic!("expected complex roots, got {:?}", other),
        }
    }

    #[test]
    fn real_roots_satisfy_equation_and_are_ordered() {
        for (a, b, c) in [(1.0, -3.0, 2.0), (-1.0, 1.0, 6.0), (2.5, 7.0, -3.0)] {
            let s = solve_quadratic(a, b, c).unwrap();
            assert!(s.discriminant > 0.0);
            let x1 = s.roots.x1.as_real().unwrap();
            let x2 = s.roots.x2.as_real().unwrap();
            assert!(x1 >= x2);
            for x in [x1, x2] {
                assert_relative_eq!(a * x * x + b * x + c, 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn zero_leading_coefficient_is_rejected() {
        let err = solve_quadratic(0.0, 2.0, 1.0).unwrap_err();
        assert!(matches!(err, SolverError::InvalidDomain(_)));
    }

    #[test]
    fn non_finite_coefficients_are_rejected() {
        assert!(solve_quadratic(1.0, f64::NAN, 1.0).is_err());
        assert!(solve_quadratic(1.0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn overflowing_results_are_rejected() {
        // b² overflows
        let err = solve_quadratic(1.0, 1e200, 1.0).unwrap_err();
        assert!(matches!(err, SolverError::InvalidDomain(_)));

        // Δ is finite but -b / 2a is not
        let err = solve_quadratic(1e-300, 1e10, 0.0).unwrap_err();
        assert!(matches!(err, SolverError::InvalidDomain(_)));
    }

    #[test]
    fn repeated_zero_root_prints_without_sign() {
        let s = solve_quadratic(1.0, 0.0, 0.0).unwrap();
        assert_eq!(Solution::Quadratic(s).summary(), "x₁ = 0, x₂ = 0");
    }

    #[test]
    fn steps_use_four_decimals() {
        let s = solve_quadratic(1.0, -3.0, 2.0).unwrap();
        assert_eq!(s.steps[0], "Given equation: 1x² - 3x + 2 = 0");
        assert_eq!(
            s.steps[1],
            "Calculate discriminant: Δ = b² - 4ac = (-3)² - 4(1)(2) = 1"
        );
        assert!(s.steps.contains(&"x₁ = (-b ± √Δ) / 2a = 2.0000".to_string()));
        assert!(s.steps.contains(&"Vertex: (1.5000, -0.2500)".to_string()));
        assert_eq!(s.steps.last().unwrap(), "Axis of symmetry: x = 1.5000");
    }

    #[test]
    fn adapter_rejects_other_kinds() {
        let err = QuadraticSolver::new()
            .solve(&MathProblem::square_root(4.0))
            .unwrap_err();
        assert!(matches!(err, SolverError::InvalidProblem(_)));
    }
}
