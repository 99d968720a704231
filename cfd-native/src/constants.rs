//! Declared constant tables mirroring the engine's registries
//!
//! The original bindings discovered these by reflecting over the loaded
//! module at runtime; here they are declared once, in the engine's own
//! ordering. Status codes live in [`cfd_core::status`].

/// Pressure / velocity-magnitude scalar field (VTK)
pub const OUTPUT_PRESSURE: i32 = 0;
/// Velocity vector field (VTK)
pub const OUTPUT_VELOCITY: i32 = 1;
/// Complete flow field (VTK)
pub const OUTPUT_FULL_FIELD: i32 = 2;
/// Time series data (CSV)
pub const OUTPUT_CSV_TIMESERIES: i32 = 3;
/// Centerline profile (CSV)
pub const OUTPUT_CSV_CENTERLINE: i32 = 4;
/// Global statistics (CSV)
pub const OUTPUT_CSV_STATISTICS: i32 = 5;

/// Periodic boundary condition
pub const BC_TYPE_PERIODIC: i32 = 0;
/// Neumann (zero-gradient) boundary condition
pub const BC_TYPE_NEUMANN: i32 = 1;
/// Dirichlet (fixed-value) boundary condition
pub const BC_TYPE_DIRICHLET: i32 = 2;
/// No-slip wall boundary condition
pub const BC_TYPE_NOSLIP: i32 = 3;
/// Inlet boundary condition
pub const BC_TYPE_INLET: i32 = 4;
/// Outlet boundary condition
pub const BC_TYPE_OUTLET: i32 = 5;

/// Left domain edge
pub const BC_EDGE_LEFT: i32 = 0;
/// Right domain edge
pub const BC_EDGE_RIGHT: i32 = 1;
/// Bottom domain edge
pub const BC_EDGE_BOTTOM: i32 = 2;
/// Top domain edge
pub const BC_EDGE_TOP: i32 = 3;

/// Pick the best available boundary-condition backend
pub const BC_BACKEND_AUTO: i32 = 0;
/// Portable scalar backend
pub const BC_BACKEND_SCALAR: i32 = 1;
/// OpenMP backend
pub const BC_BACKEND_OMP: i32 = 2;
/// SIMD backend
pub const BC_BACKEND_SIMD: i32 = 3;
/// CUDA backend
pub const BC_BACKEND_CUDA: i32 = 4;

/// Basic finite difference solver
pub const SOLVER_EXPLICIT_EULER: &str = "explicit_euler";
/// SIMD-optimized Euler solver
pub const SOLVER_EXPLICIT_EULER_OPTIMIZED: &str = "explicit_euler_optimized";
/// Pressure-velocity projection solver
pub const SOLVER_PROJECTION: &str = "projection";
/// Optimized projection solver
pub const SOLVER_PROJECTION_OPTIMIZED: &str = "projection_optimized";
/// GPU-accelerated Euler solver
pub const SOLVER_EXPLICIT_EULER_GPU: &str = "explicit_euler_gpu";
/// GPU-accelerated projection solver
pub const SOLVER_PROJECTION_JACOBI_GPU: &str = "projection_jacobi_gpu";

/// All solver names the engine registers, in registration order.
pub const REGISTERED_SOLVERS: [&str; 6] = [
    SOLVER_EXPLICIT_EULER,
    SOLVER_EXPLICIT_EULER_OPTIMIZED,
    SOLVER_PROJECTION,
    SOLVER_PROJECTION_OPTIMIZED,
    SOLVER_EXPLICIT_EULER_GPU,
    SOLVER_PROJECTION_JACOBI_GPU,
];

/// Constant name a registry solver is exported under, e.g.
/// `"explicit_euler"` becomes `"SOLVER_EXPLICIT_EULER"`.
pub fn solver_constant_name(solver: &str) -> String {
    let mut name = String::with_capacity("SOLVER_".len() + solver.len());
    name.push_str("SOLVER_");
    name.extend(solver.chars().map(|c| c.to_ascii_uppercase()));
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_constant_name_uppercases() {
        assert_eq!(
            solver_constant_name("explicit_euler"),
            "SOLVER_EXPLICIT_EULER"
        );
        assert_eq!(
            solver_constant_name("projection_jacobi_gpu"),
            "SOLVER_PROJECTION_JACOBI_GPU"
        );
    }

    #[test]
    fn test_registered_solvers_are_distinct() {
        let mut names: Vec<_> = REGISTERED_SOLVERS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), REGISTERED_SOLVERS.len());
    }
}
