//! Random number generation for ray tracing.
//!
//! Every thread owns an independent ChaCha20 PRNG so parallel workers never
//! contend on a shared source. A worker that needs a reproducible stream
//! reseeds its own generator with [`seed_thread_rng`].

use std::cell::RefCell;
use std::f64::consts::PI;

use log::debug;
use rand::{rng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::vec3::{dot, Vec3};

thread_local! {
    /// Thread-local ChaCha20 PRNG, seeded from the OS on first use.
    static RNG: RefCell<ChaCha20Rng> = RefCell::new(ChaCha20Rng::from_rng(&mut rng()));
}

/// Reseed the calling thread's generator.
pub fn seed_thread_rng(seed: u64) {
    debug!("Reseeding thread rng with {}", seed);
    RNG.with(|rng| *rng.borrow_mut() = ChaCha20Rng::seed_from_u64(seed));
}

/// Generate a random f64 in [0.0, 1.0)
pub fn random_f64() -> f64 {
    RNG.with(|rng| rng.borrow_mut().random())
}

/// Generate a random f64 in [min, max)
pub fn random_f64_range(min: f64, max: f64) -> f64 {
    min + (max - min) * random_f64()
}

/// Uniform point strictly inside the unit sphere.
///
/// Rejection samples the enclosing cube, about 52% of draws are accepted.
pub fn random_in_unit_sphere() -> Vec3 {
    loop {
        let p = Vec3::random_range(-1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Uniform point on the unit sphere surface.
pub fn random_unit_vector() -> Vec3 {
    let a = random_f64_range(0.0, 2.0 * PI);
    let z = random_f64_range(-1.0, 1.0);
    let r = (1.0 - z * z).sqrt();
    let (sin_a, cos_a) = a.sin_cos();
    Vec3::new(r * cos_a, r * sin_a, z)
}

/// Uniform unit vector in the hemisphere around `normal`.
///
/// A draw lying exactly on the boundary plane (zero dot product) is
/// returned as is.
pub fn random_on_hemisphere(normal: Vec3) -> Vec3 {
    let on_unit_sphere = random_unit_vector();
    if dot(on_unit_sphere, normal) >= 0.0 {
        on_unit_sphere
    } else {
        -on_unit_sphere
    }
}

/// Generate random point inside unit disk using rejection sampling.
pub fn random_in_unit_disk() -> Vec3 {
    loop {
        let p = Vec3::new(random_f64_range(-1.0, 1.0), random_f64_range(-1.0, 1.0), 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
