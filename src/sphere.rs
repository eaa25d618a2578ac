//! Sphere primitive for ray tracing.

use crate::hittable::{HitRecord, Hittable, MaterialId};
use crate::interval::Interval;
use crate::ray::Ray;
use crate::vec3::{dot, Point3};

/// Sphere primitive defined by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Point3,
    /// Radius of the sphere, never negative.
    pub radius: f64,
    /// Material handed to hit records.
    pub material: Option<MaterialId>,
}

impl Sphere {
    /// Create a new sphere without a material.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material: None,
        }
    }

    /// Attach a material to the sphere.
    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = Some(material);
        self
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = self.center - r.origin;
        let a = r.direction.length_squared();
        let h = dot(r.direction, oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (r.at(root) - self.center) / self.radius;
        let mut rec = HitRecord::new(r, root, outward_normal);
        rec.material = self.material;
        Some(rec)
    }
}
