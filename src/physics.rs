//! Steady-state speed solver for the cycling power balance.
//!
//! Finds the speed at which the available wheel power exactly covers
//! gravity, rolling resistance, and aerodynamic drag.

/// Physics constants
pub const AIR_DENSITY: f64 = 1.225; // kg/m³ at sea level
pub const GRAVITY: f64 = 9.80665; // m/s²
/// Floor speed; keeps segment times finite on stalled or downhill inputs.
pub const MIN_SPEED_MPS: f64 = 0.5;
/// Hard upper domain bound (~216 km/h).
pub const MAX_SPEED_MPS: f64 = 60.0;

const SOLVER_ITERATIONS: u32 = 40;

/// Solve the power balance `P = v·(F_g + F_r) + ½·ρ·CdA·v³` for `v`.
///
/// `gravity_force_n` is signed: negative on descents, where it assists.
/// Solved by bisection over [`MIN_SPEED_MPS`, `MAX_SPEED_MPS`] with a
/// fixed iteration count — required power is strictly increasing in `v`
/// over the valid input ranges (callers floor-clamp `drag_area_m2` to
/// 0.05 and crr to 0.0001), so the bracket narrows monotonically, and
/// bisection stays stable when the gravity force is negative.
///
/// Returns speed in m/s, always within [0.5, 60].
pub fn solve_speed(
    wheel_power_w: f64,
    gravity_force_n: f64,
    rolling_force_n: f64,
    drag_area_m2: f64,
) -> f64 {
    let aero_coeff = 0.5 * AIR_DENSITY * drag_area_m2;
    let mut low = MIN_SPEED_MPS;
    let mut high = MAX_SPEED_MPS;

    for _ in 0..SOLVER_ITERATIONS {
        let mid = (low + high) / 2.0;
        let required_power = mid * (gravity_force_n + rolling_force_n) + aero_coeff * mid.powi(3);

        if required_power > wheel_power_w {
            high = mid;
        } else {
            low = mid;
        }
    }

    low.max(MIN_SPEED_MPS)
}
