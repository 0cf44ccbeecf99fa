use nalgebra::DVector;
use strum_macros::EnumIter;

//EXAMPLES OF IVP WITH EXACT SOLUTIONS FOR TESTING PURPOSES
/*
the coursework linear equation:
y' = 4*t - 3*y, y(0) = 1
exact solution (integrating factor exp(3t)):
y(t) = (4/3)*t - 4/9 + (13/9)*exp(-3*t)
the solution first decreases, reaches its minimum where
y' = 0  =>  exp(-3*t) = 4/13  =>  tmin = ln(13/4)/3 = 0.39288...
and there ymin = (4/3)*tmin = 0.52385...

cubic polynomial:
y' = 3*t^2, y(0) = 0
exact solution y = t^3. The RHS does not depend on y and is a quadratic
polynomial in t, so the AB3 formula integrates it without local error and
the only endpoint error of AB3 comes from the two bootstrap steps.

exponential decay:
y' = -y, y(0) = 1
exact solution y = exp(-t)
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum TestODE {
    CourseworkLinear,
    PolynomialCubic,
    ExponentialDecay,
}

impl TestODE {
    pub fn name(&self) -> &'static str {
        match self {
            TestODE::CourseworkLinear => "y' = 4t - 3y",
            TestODE::PolynomialCubic => "y' = 3t^2",
            TestODE::ExponentialDecay => "y' = -y",
        }
    }

    pub fn rhs(&self) -> Box<dyn Fn(f64, &DVector<f64>) -> DVector<f64>> {
        match self {
            TestODE::CourseworkLinear => {
                Box::new(|t, y| DVector::from_vec(vec![4.0 * t - 3.0 * y[0]]))
            }
            TestODE::PolynomialCubic => Box::new(|t, _y| DVector::from_vec(vec![3.0 * t * t])),
            TestODE::ExponentialDecay => Box::new(|_t, y| DVector::from_vec(vec![-y[0]])),
        }
    }

    pub fn initial_condition(&self) -> DVector<f64> {
        match self {
            TestODE::CourseworkLinear => DVector::from_vec(vec![1.0]),
            TestODE::PolynomialCubic => DVector::from_vec(vec![0.0]),
            TestODE::ExponentialDecay => DVector::from_vec(vec![1.0]),
        }
    }

    pub fn exact_solution(&self, t: f64) -> f64 {
        match self {
            TestODE::CourseworkLinear => {
                (4.0 / 3.0) * t - 4.0 / 9.0 + (13.0 / 9.0) * (-3.0 * t).exp()
            }
            TestODE::PolynomialCubic => t * t * t,
            TestODE::ExponentialDecay => (-t).exp(),
        }
    }

    /// (tmin, ymin) of the exact solution, for the problems which have one
    pub fn minimum(&self) -> (f64, f64) {
        match self {
            TestODE::CourseworkLinear => {
                let tmin = (13.0f64 / 4.0).ln() / 3.0;
                (tmin, (4.0 / 3.0) * tmin)
            }
            _ => panic!("{} has no interior minimum", self.name()),
        }
    }
}
