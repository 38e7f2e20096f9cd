pub const G: f64 = 9.8; // Acceleration due to gravity (m/s²)
pub const L1: f64 = 1.0; // Length of pendulum 1 (m)
pub const L2: f64 = 1.0; // Length of pendulum 2 (m)
pub const M1: f64 = 1.0; // Mass of pendulum 1 (kg)
pub const M2: f64 = 1.0; // Mass of pendulum 2 (kg)

// Math
pub const PI: f64 = std::f64::consts::PI;

/// Degrees to radians as `degrees · π/180`.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}
