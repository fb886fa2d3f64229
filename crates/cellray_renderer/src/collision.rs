//! Broad-phase overlap tests on bounding spheres.

use crate::{hittable::SceneObject, BoundingSphere, Scene};

/// Bounding sphere of any scene object.
pub fn get_bounding_sphere(object: &dyn SceneObject) -> BoundingSphere {
    object.bounding_sphere()
}

/// True if the bounding spheres of `a` and `b` touch or overlap.
pub fn check_collision(a: &dyn SceneObject, b: &dyn SceneObject) -> bool {
    get_bounding_sphere(a).overlaps(&get_bounding_sphere(b))
}

/// Index pairs `(i, j)` with `i < j` of every overlapping pair in the scene.
pub fn colliding_pairs(scene: &Scene) -> Vec<(usize, usize)> {
    let bounds: Vec<BoundingSphere> = scene
        .objects()
        .iter()
        .map(|o| get_bounding_sphere(o.as_ref()))
        .collect();

    let mut pairs = Vec::new();
    for i in 0..bounds.len() {
        for j in (i + 1)..bounds.len() {
            if bounds[i].overlaps(&bounds[j]) {
                pairs.push((i, j));
            }
        }
    }

    log::trace!("{} overlapping pairs", pairs.len());
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cube, Color, Sphere, Vec3};

    #[test]
    fn test_check_collision_symmetric() {
        let a = Sphere::new(Vec3::ZERO, 1.0, Color::ONE);
        let near = Sphere::new(Vec3::new(1.5, 0.0, 0.0), 1.0, Color::ONE);
        let far = Sphere::new(Vec3::new(5.0, 0.0, 0.0), 1.0, Color::ONE);
        let block = cube(Vec3::new(0.0, 2.0, 0.0), 2.0, Color::ONE, false).unwrap();

        let objects: [&dyn SceneObject; 4] = [&a, &near, &far, &block];
        for x in objects {
            for y in objects {
                assert_eq!(check_collision(x, y), check_collision(y, x));
            }
        }

        assert!(check_collision(&a, &near));
        assert!(!check_collision(&a, &far));
    }

    #[test]
    fn test_sphere_bound_is_itself() {
        let s = Sphere::new(Vec3::new(1.0, 2.0, 3.0), 4.0, Color::ONE);
        let bounds = get_bounding_sphere(&s);
        assert_eq!(bounds.center, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(bounds.radius, 4.0);
    }

    #[test]
    fn test_cube_bound_is_vertex_centroid() {
        let block = cube(Vec3::new(0.0, 2.0, 0.0), 2.0, Color::ONE, false).unwrap();
        let bounds = get_bounding_sphere(&block);
        assert!((bounds.center - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-5);
        assert!((bounds.radius - 3.0_f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_colliding_pairs() {
        let scene = Scene::new()
            .with(Sphere::new(Vec3::ZERO, 1.0, Color::ONE))
            .with(Sphere::new(Vec3::new(10.0, 0.0, 0.0), 1.0, Color::ONE))
            .with(Sphere::new(Vec3::new(1.0, 0.0, 0.0), 1.0, Color::ONE));

        assert_eq!(colliding_pairs(&scene), vec![(0, 2)]);
    }
}
