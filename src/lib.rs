//! Raycore ray tracing kernel
//!
//! Provides the 3-vector math kernel, random direction samplers and the
//! hittable aggregate that finds the closest ray-object intersection.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod vec3;
pub mod random;
pub mod ray;
pub mod interval;
pub mod hittable;
pub mod sphere;
pub mod color;
pub mod logger;

pub use hittable::{HitRecord, Hittable, HittableList, MaterialId, ObjectId, Primitive};
pub use interval::Interval;
pub use ray::Ray;
pub use sphere::Sphere;
pub use vec3::{Color, Point3, Vec3};
