//! Scriptable in-process stand-in for the native engine
//!
//! Used by this workspace's tests in place of the compiled engine. Runs no
//! numerics: simulations produce zeroed fields, and failures happen only
//! when scripted via [`ScriptedNative::fail_next`].

use crate::api::{NativeApi, RunOutput};
use crate::constants::REGISTERED_SOLVERS;
use crate::loader::EXPECTED_ABI_VERSION;
use cfd_core::solver::capability;
use cfd_core::{ErrorKind, GridSpec, SolverInfo, SolverParams, SolverStats};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Slot {
    last_status: i32,
    last_error: Option<String>,
    // Scripted (code, detail) consumed by the next fallible operation.
    fail_next: Option<(i32, Option<String>)>,
    output_dir: Option<String>,
}

/// Scriptable [`NativeApi`] implementation
///
/// The error slot is a single mutex-guarded cell shared by all operations,
/// matching the global-slot semantics of the real engine.
pub struct ScriptedNative {
    solvers: Vec<SolverInfo>,
    slot: Mutex<Slot>,
}

impl ScriptedNative {
    /// A double with the engine's standard solver registry.
    pub fn new() -> Self {
        let solvers = REGISTERED_SOLVERS
            .iter()
            .map(|name| {
                let mut caps = capability::INCOMPRESSIBLE | capability::TRANSIENT;
                if name.contains("optimized") {
                    caps |= capability::SIMD | capability::PARALLEL;
                }
                if name.ends_with("gpu") {
                    caps |= capability::GPU;
                }
                SolverInfo {
                    name: name.to_string(),
                    description: format!("scripted stand-in for '{name}'"),
                    version: "0.0-test".to_string(),
                    capabilities: caps,
                }
            })
            .collect();
        Self {
            solvers,
            slot: Mutex::new(Slot::default()),
        }
    }

    /// A double with no registered solvers.
    pub fn empty() -> Self {
        Self {
            solvers: Vec::new(),
            slot: Mutex::new(Slot::default()),
        }
    }

    /// Script the next fallible operation to fail with `code`, recording
    /// `detail` (if any) in the last-error slot.
    pub fn fail_next(&self, code: i32, detail: Option<&str>) {
        let mut slot = self.slot.lock().expect("slot lock");
        slot.fail_next = Some((code, detail.map(str::to_string)));
    }

    /// Overwrite the last-error slot directly, simulating an intervening
    /// native call racing the translator.
    pub fn overwrite_last_error(&self, detail: &str) {
        let mut slot = self.slot.lock().expect("slot lock");
        slot.last_error = Some(detail.to_string());
    }

    /// The output directory recorded by `set_output_dir`, if any.
    pub fn output_dir(&self) -> Option<String> {
        self.slot.lock().expect("slot lock").output_dir.clone()
    }

    fn settle(&self, slot: &mut Slot) -> i32 {
        match slot.fail_next.take() {
            Some((code, detail)) => {
                slot.last_status = code;
                slot.last_error = detail;
                code
            }
            None => {
                slot.last_status = 0;
                0
            }
        }
    }
}

impl Default for ScriptedNative {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeApi for ScriptedNative {
    fn abi_version(&self) -> u32 {
        EXPECTED_ABI_VERSION
    }

    fn version(&self) -> Option<String> {
        Some("0.3.0-scripted".to_string())
    }

    fn last_status(&self) -> i32 {
        self.slot.lock().expect("slot lock").last_status
    }

    fn last_error(&self) -> Option<String> {
        self.slot.lock().expect("slot lock").last_error.clone()
    }

    fn error_string(&self, code: i32) -> Option<String> {
        if code >= 0 {
            Some("success".to_string())
        } else {
            Some(ErrorKind::from_code(code).describe().to_string())
        }
    }

    fn clear_error(&self) {
        let mut slot = self.slot.lock().expect("slot lock");
        slot.last_status = 0;
        slot.last_error = None;
    }

    fn list_solvers(&self) -> Vec<String> {
        self.solvers.iter().map(|s| s.name.clone()).collect()
    }

    fn has_solver(&self, name: &str) -> bool {
        self.solvers.iter().any(|s| s.name == name)
    }

    fn solver_info(&self, name: &str) -> (i32, Option<SolverInfo>) {
        let mut slot = self.slot.lock().expect("slot lock");
        let status = self.settle(&mut slot);
        if status < 0 {
            return (status, None);
        }
        match self.solvers.iter().find(|s| s.name == name) {
            Some(info) => (0, Some(info.clone())),
            None => {
                slot.last_status = cfd_core::status::CFD_ERROR_UNSUPPORTED;
                slot.last_error = Some(format!("unknown solver type: {name}"));
                (slot.last_status, None)
            }
        }
    }

    fn default_params(&self) -> SolverParams {
        SolverParams::default()
    }

    fn run_simulation(
        &self,
        grid: &GridSpec,
        params: &SolverParams,
        steps: u32,
        solver: Option<&str>,
    ) -> (i32, Option<RunOutput>) {
        let mut slot = self.slot.lock().expect("slot lock");
        let status = self.settle(&mut slot);
        if status < 0 {
            return (status, None);
        }
        let solver = solver
            .and_then(|name| self.solvers.iter().find(|s| s.name == name))
            .or_else(|| self.solvers.first());
        let (name, description) = match solver {
            Some(info) => (info.name.clone(), info.description.clone()),
            None => {
                slot.last_status = cfd_core::status::CFD_ERROR_UNSUPPORTED;
                slot.last_error = Some("no solvers registered".to_string());
                return (slot.last_status, None);
            }
        };
        let output = RunOutput {
            velocity_magnitude: vec![0.0; grid.len()],
            stats: SolverStats {
                iterations: steps.min(params.max_iter),
                ..SolverStats::default()
            },
            solver_name: name,
            solver_description: description,
        };
        (0, Some(output))
    }

    fn set_output_dir(&self, path: &str) -> i32 {
        let mut slot = self.slot.lock().expect("slot lock");
        let status = self.settle(&mut slot);
        if status >= 0 {
            slot.output_dir = Some(path.to_string());
        }
        status
    }
}
