use serde::{Deserialize, Serialize};

/// Raw outcome of iterating one point, before normalization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EscapeData {
    /// Steps taken before the loop stopped (max_iterations if it never escaped)
    pub iterations: u32,
    /// Iteration budget used for this computation (for normalization)
    pub max_iterations: u32,
    /// |z|² when the loop stopped
    pub final_z_norm_sq: f64,
}

impl EscapeData {
    /// A point is in the set when it used the whole iteration budget.
    pub fn escaped(&self) -> bool {
        self.iterations < self.max_iterations
    }
}
