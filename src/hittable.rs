//! Ray-object intersection system.
//!
//! Defines the Hittable trait for anything a ray can strike, HitRecord for
//! storing intersection data, and HittableList, the aggregate that finds the
//! closest hit among its members.

use log::{debug, trace};

use crate::interval::Interval;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::vec3::{dot, Point3, Vec3};

/// Handle into a caller-owned material table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub usize);

/// Index of a member inside a [`HittableList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub usize);

/// Ray-object intersection information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: Point3,
    /// Surface normal at the intersection point, facing against the ray
    pub normal: Vec3,
    /// Ray parameter of the intersection
    pub t: f64,
    /// True if ray hits the front face, false if hits the back face
    pub front_face: bool,
    /// Material of the object at the hit point, if it has one
    pub material: Option<MaterialId>,
}

impl HitRecord {
    /// Build a record for a hit at `t`, orienting `outward_normal` against
    /// the ray.
    pub fn new(r: &Ray, t: f64, outward_normal: Vec3) -> Self {
        let mut rec = Self {
            p: r.at(t),
            normal: outward_normal,
            t,
            front_face: true,
            material: None,
        };
        rec.set_face_normal(r, outward_normal);
        rec
    }

    /// Set surface normal and determine front/back face.
    ///
    /// `outward_normal` is assumed to have unit length.
    pub fn set_face_normal(&mut self, r: &Ray, outward_normal: Vec3) {
        self.front_face = dot(r.direction, outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be intersected by rays.
///
/// Implementors must be thread-safe so a finished scene can be queried
/// from several render workers at once.
pub trait Hittable: Send + Sync {
    /// Test for ray intersection with a parameter strictly inside `ray_t`.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

impl<H: Hittable + ?Sized> Hittable for Box<H> {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        (**self).hit(r, ray_t)
    }
}

/// Closed set of scene objects stored by value in a [`HittableList`].
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A sphere.
    Sphere(Sphere),
    /// A nested aggregate.
    List(HittableList),
}

impl Hittable for Primitive {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(r, ray_t),
            Primitive::List(list) => list.hit(r, ray_t),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<HittableList> for Primitive {
    fn from(list: HittableList) -> Self {
        Primitive::List(list)
    }
}

/// Collection of objects forming a scene.
///
/// Owns its members and tests every one of them against each ray, there is
/// no acceleration structure. Build it with [`add`](Self::add) before
/// rendering; queries take `&self` and never modify it.
#[derive(Debug, Clone, PartialEq)]
pub struct HittableList<H = Primitive> {
    objects: Vec<H>,
}

impl<H> HittableList<H> {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object, returning its index in the list.
    pub fn add(&mut self, object: impl Into<H>) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(object.into());
        trace!("Added object {:?}", id);
        id
    }

    /// Remove every object.
    pub fn clear(&mut self) {
        debug!("Clearing {} objects", self.objects.len());
        self.objects.clear();
    }

    /// Object previously returned by [`add`](Self::add).
    pub fn get(&self, id: ObjectId) -> Option<&H> {
        self.objects.get(id.0)
    }

    /// Members in insertion order.
    pub fn objects(&self) -> &[H] {
        &self.objects
    }

    /// Number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if the list holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<H> Default for HittableList<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Sphere> for HittableList {
    fn from(sphere: Sphere) -> Self {
        let mut list = Self::new();
        list.add(sphere);
        list
    }
}

impl<H> FromIterator<H> for HittableList<H> {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl<H: Hittable> Hittable for HittableList<H> {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        // Later members may still be closer, so every one is tested
        for object in &self.objects {
            if let Some(rec) = object.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Reports a hit at a fixed `t` and counts how often it was asked.
    struct Fixed {
        t: f64,
        calls: AtomicUsize,
    }

    impl Fixed {
        fn new(t: f64) -> Self {
            Self {
                t,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl Hittable for Fixed {
        fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            if ray_t.surrounds(self.t) {
                Some(HitRecord::new(r, self.t, Vec3::new(0.0, 0.0, -1.0)))
            } else {
                None
            }
        }
    }

    fn ray() -> Ray {
        Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, 1.0))
    }

    #[test]
    fn face_normal_opposes_ray() {
        let r = ray();
        let front = HitRecord::new(&r, 1.0, Vec3::new(0.0, 0.0, -1.0));
        assert!(front.front_face);
        assert_eq!(front.normal, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(front.p, Point3::new(0.0, 0.0, 1.0));

        let back = HitRecord::new(&r, 1.0, Vec3::new(0.0, 0.0, 1.0));
        assert!(!back.front_face);
        assert_eq!(back.normal, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn empty_list_misses() {
        let list: HittableList<Fixed> = HittableList::new();
        assert!(list.is_empty());
        assert!(list.hit(&ray(), Interval::UNIVERSE).is_none());
        assert!(list.hit(&ray(), Interval::new(0.0, f64::INFINITY)).is_none());
    }

    #[test]
    fn closest_hit_wins_regardless_of_order() {
        let list: HittableList<Fixed> = [3.0, 1.0, 2.0].into_iter().map(Fixed::new).collect();
        let rec = list.hit(&ray(), Interval::new(0.0, f64::INFINITY)).unwrap();
        assert_eq!(rec.t, 1.0);
    }

    #[test]
    fn every_member_is_tested() {
        let list: HittableList<Fixed> = [1.0, 2.0, 3.0].into_iter().map(Fixed::new).collect();
        let _ = list.hit(&ray(), Interval::new(0.0, f64::INFINITY));
        for object in list.objects() {
            assert_eq!(object.calls.load(Ordering::Relaxed), 1);
        }
    }

    #[test]
    fn interval_bounds_are_respected() {
        let list: HittableList<Fixed> = [0.5, 2.0, 5.0].into_iter().map(Fixed::new).collect();
        let rec = list.hit(&ray(), Interval::new(1.0, 4.0)).unwrap();
        assert_eq!(rec.t, 2.0);
        assert!(list.hit(&ray(), Interval::new(2.5, 4.5)).is_none());
    }

    #[test]
    fn add_get_clear() {
        let mut list: HittableList<Fixed> = HittableList::default();
        let a = list.add(Fixed::new(1.0));
        let b = list.add(Fixed::new(2.0));
        assert_eq!((a, b), (ObjectId(0), ObjectId(1)));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(b).map(|o| o.t), Some(2.0));
        assert!(list.get(ObjectId(2)).is_none());

        list.clear();
        assert!(list.is_empty());
        assert!(list.get(a).is_none());
        assert!(list.hit(&ray(), Interval::UNIVERSE).is_none());
    }

    #[test]
    fn boxed_members() {
        let mut list: HittableList<Box<dyn Hittable>> = HittableList::new();
        list.add(Box::new(Fixed::new(4.0)) as Box<dyn Hittable>);
        list.add(Box::new(Fixed::new(3.0)) as Box<dyn Hittable>);
        assert_eq!(list.hit(&ray(), Interval::UNIVERSE).map(|rec| rec.t), Some(3.0));
    }
}
