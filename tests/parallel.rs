use rayon::prelude::*;

use raycore::random::{random_in_unit_disk, seed_thread_rng};
use raycore::{Hittable, HittableList, Interval, Point3, Ray, Sphere, Vec3};

fn world() -> HittableList {
    let mut world: HittableList = HittableList::new();
    world.add(Sphere::new(Point3::new(0.0, -1000.0, 0.0), 1000.0));
    for i in -5..5 {
        for j in -5..5 {
            world.add(Sphere::new(Point3::new(i as f64, 0.2, j as f64 - 10.0), 0.2));
        }
    }
    world
}

// Ray from a jittered origin, reproducible for a given sample index
fn sample(world: &HittableList, index: u64) -> Option<f64> {
    seed_thread_rng(index);
    let jitter = random_in_unit_disk() * 0.5;
    let origin = Point3::new(jitter.x, 1.0 + jitter.y, 0.0);
    let target = Point3::new((index % 10) as f64 - 5.0, 0.2, (index % 7) as f64 - 12.0);
    let r = Ray::new(origin, target - origin);
    world.hit(&r, Interval::new(0.001, f64::INFINITY)).map(|rec| rec.t)
}

#[test]
fn shared_world_matches_sequential_queries() {
    let world = world();

    let sequential: Vec<Option<f64>> = (0..512usize).map(|i| sample(&world, i as u64)).collect();
    let parallel: Vec<Option<f64>> = (0..512usize)
        .into_par_iter()
        .map(|i| sample(&world, i as u64))
        .collect();

    assert_eq!(sequential, parallel);
    assert!(sequential.iter().all(Option::is_some));
}

#[test]
fn deterministic_rays_agree_across_workers() {
    let world = world();
    let rays: Vec<Ray> = (0..256)
        .map(|i| {
            let x = (i % 16) as f64 / 4.0 - 2.0;
            let y = (i / 16) as f64 / 8.0 - 1.0;
            Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::new(x, y, -1.0))
        })
        .collect();

    let ray_t = Interval::new(0.001, f64::INFINITY);
    let sequential: Vec<_> = rays.iter().map(|r| world.hit(r, ray_t)).collect();
    let parallel: Vec<_> = rays.par_iter().map(|r| world.hit(r, ray_t)).collect();
    assert_eq!(sequential, parallel);
}
