//! Solver parameter set

use crate::error::CfdError;
use serde::{Deserialize, Serialize};

/// Numerical parameters accepted by the native solvers
///
/// Field meanings follow the engine's `SolverParams` struct: `dt` is the
/// time step, `cfl` the Courant number, `gamma` the heat capacity ratio,
/// `mu` dynamic viscosity, `k` thermal conductivity. `max_iter` and
/// `tolerance` bound the iterative pressure solvers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverParams {
    /// Time step size
    pub dt: f64,
    /// CFL number
    pub cfl: f64,
    /// Heat capacity ratio
    pub gamma: f64,
    /// Dynamic viscosity
    pub mu: f64,
    /// Thermal conductivity
    pub k: f64,
    /// Iteration budget for iterative solvers
    pub max_iter: u32,
    /// Convergence tolerance for iterative solvers
    pub tolerance: f64,
}

impl Default for SolverParams {
    fn default() -> Self {
        // Engine defaults from solver_params_default()
        Self {
            dt: 1e-3,
            cfl: 0.2,
            gamma: 1.4,
            mu: 0.01,
            k: 0.025,
            max_iter: 1000,
            tolerance: 1e-6,
        }
    }
}

impl SolverParams {
    /// Parse parameters from a TOML document; unset keys keep defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, CfdError> {
        let params: SolverParams = toml::from_str(text)
            .map_err(|e| CfdError::invalid_argument(format!("invalid solver parameters: {e}")))?;
        params.validate()?;
        Ok(params)
    }

    /// Render parameters as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, CfdError> {
        toml::to_string(self)
            .map_err(|e| CfdError::invalid_argument(format!("unserializable solver parameters: {e}")))
    }

    /// Reject parameter combinations the engine would refuse.
    pub fn validate(&self) -> Result<(), CfdError> {
        if !(self.dt > 0.0) {
            return Err(CfdError::invalid_argument(format!(
                "dt must be positive, got {}",
                self.dt
            )));
        }
        if !(self.cfl > 0.0 && self.cfl <= 1.0) {
            return Err(CfdError::invalid_argument(format!(
                "cfl must be in (0, 1], got {}",
                self.cfl
            )));
        }
        if self.max_iter == 0 {
            return Err(CfdError::invalid_argument("max_iter must be positive"));
        }
        if !(self.tolerance > 0.0) {
            return Err(CfdError::invalid_argument(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::ErrorKind;

    #[test]
    fn test_defaults_are_valid() {
        let params = SolverParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.dt, 1e-3);
        assert_eq!(params.cfl, 0.2);
        assert_eq!(params.max_iter, 1000);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let params = SolverParams::from_toml_str("dt = 0.0005\ncfl = 0.5\n").unwrap();
        assert_eq!(params.dt, 0.0005);
        assert_eq!(params.cfl, 0.5);
        assert_eq!(params.gamma, 1.4);
        assert_eq!(params.tolerance, 1e-6);
    }

    #[test]
    fn test_malformed_toml_is_invalid_argument() {
        let err = SolverParams::from_toml_str("dt = 'not a number'").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_nonpositive_dt_rejected() {
        let params = SolverParams {
            dt: 0.0,
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.message().contains("dt"));
    }

    #[test]
    fn test_cfl_above_one_rejected() {
        let params = SolverParams {
            cfl: 1.5,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_zero_max_iter_rejected() {
        let params = SolverParams {
            max_iter: 0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let params = SolverParams {
            dt: 0.002,
            max_iter: 250,
            ..Default::default()
        };
        let text = params.to_toml_string().unwrap();
        let parsed = SolverParams::from_toml_str(&text).unwrap();
        assert_eq!(parsed, params);
    }
}
