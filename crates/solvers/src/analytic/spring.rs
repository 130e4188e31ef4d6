use shm_core::{OscillatorParams, TimeGrid};

/// Kinematics and energies of the ideal mass–spring oscillator.
///
/// Every field is aligned index-for-index with the grid it was evaluated on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShmTrajectory {
    /// Position in m.
    pub x: Vec<f64>,
    /// Velocity in m/s.
    pub v: Vec<f64>,
    /// Acceleration in m/s².
    pub a: Vec<f64>,
    /// Kinetic energy in J.
    pub kinetic: Vec<f64>,
    /// Potential energy in J.
    pub potential: Vec<f64>,
    /// Total mechanical energy in J.
    pub total: Vec<f64>,
}

impl ShmTrajectory {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            v: Vec::with_capacity(capacity),
            a: Vec::with_capacity(capacity),
            kinetic: Vec::with_capacity(capacity),
            potential: Vec::with_capacity(capacity),
            total: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Evaluates `x(t) = A·cos(ωt + φ)` and its derived quantities on a grid.
///
/// The total energy is constant up to rounding, equal to `½kA²`.
#[must_use]
pub fn shm(params: &OscillatorParams, grid: &TimeGrid) -> ShmTrajectory {
    let omega = params.omega();
    let (k, m) = (params.stiffness(), params.mass());
    let amplitude = params.amplitude();

    let mut out = ShmTrajectory::with_capacity(grid.len());
    for &t in grid {
        let (sin, cos) = (omega * t + params.phase()).sin_cos();
        let x = amplitude * cos;
        let v = -amplitude * omega * sin;
        let kinetic = 0.5 * m * v * v;
        let potential = 0.5 * k * x * x;

        out.x.push(x);
        out.v.push(v);
        out.a.push(-omega * omega * x);
        out.kinetic.push(kinetic);
        out.potential.push(potential);
        out.total.push(kinetic + potential);
    }
    out
}
