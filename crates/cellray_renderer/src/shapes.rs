//! Builders for the primitive meshes used by the demo world.

use cellray_core::SceneError;

use crate::{Color, Mesh, Scene, Triangle, Vec3};

/// Build a triangle whose normal points away from `interior`.
fn outward(a: Vec3, b: Vec3, c: Vec3, interior: Vec3, color: Color) -> Triangle {
    let tri = Triangle::new(a, b, c, color);
    let face_center = (a + b + c) / 3.0;
    if tri.normal().dot(face_center - interior) < 0.0 {
        Triangle::new(a, c, b, color)
    } else {
        tri
    }
}

/// Axis-aligned cube of edge `size` centred on `center`.
///
/// The mesh is anchored at the centre of its bottom face so that the ground
/// clamp rests the cube on the ground instead of sinking it halfway.
pub fn cube(center: Vec3, size: f32, color: Color, gravity: bool) -> Result<Mesh, SceneError> {
    let d = size / 2.0;
    let v = [
        center + Vec3::new(-d, -d, -d),
        center + Vec3::new(d, -d, -d),
        center + Vec3::new(d, d, -d),
        center + Vec3::new(-d, d, -d),
        center + Vec3::new(-d, -d, d),
        center + Vec3::new(d, -d, d),
        center + Vec3::new(d, d, d),
        center + Vec3::new(-d, d, d),
    ];

    // Two triangles per face: front, back, top, bottom, right, left
    const FACES: [[usize; 3]; 12] = [
        [0, 1, 2],
        [0, 2, 3],
        [5, 4, 7],
        [5, 7, 6],
        [3, 2, 6],
        [3, 6, 7],
        [0, 5, 1],
        [0, 4, 5],
        [1, 5, 6],
        [1, 6, 2],
        [4, 0, 3],
        [4, 3, 7],
    ];

    let triangles = FACES
        .iter()
        .map(|&[a, b, c]| outward(v[a], v[b], v[c], center, color))
        .collect();

    let anchor = center - Vec3::new(0.0, d, 0.0);
    Ok(Mesh::new(triangles, anchor)?.with_gravity(gravity))
}

/// Three-sided pyramid whose base lies in the plane `y = center.y`.
///
/// The base is an equilateral triangle of side `size` with one corner at
/// `center`; the apex sits `height` above it.
pub fn pyramid(
    center: Vec3,
    size: f32,
    height: f32,
    color: Color,
    gravity: bool,
) -> Result<Mesh, SceneError> {
    let d = size;
    let row = d * 3.0_f32.sqrt() / 2.0;
    let v0 = center;
    let v1 = center + Vec3::new(-d / 2.0, 0.0, row);
    let v2 = center + Vec3::new(d / 2.0, 0.0, row);
    let apex = center + Vec3::new(0.0, height, d / 3.0);

    let interior = (v0 + v1 + v2 + apex) / 4.0;
    let triangles = vec![
        outward(v0, v1, v2, interior, color),
        outward(v0, v1, apex, interior, color),
        outward(v1, v2, apex, interior, color),
        outward(v2, v0, apex, interior, color),
    ];

    Ok(Mesh::new(triangles, center)?.with_gravity(gravity))
}

/// Flat `width` x `depth` rectangle in the plane `y = center.y`, facing +y.
pub fn ground(center: Vec3, width: f32, depth: f32, color: Color) -> Result<Mesh, SceneError> {
    let hw = width / 2.0;
    let hd = depth / 2.0;
    let v0 = center + Vec3::new(-hw, 0.0, -hd);
    let v1 = center + Vec3::new(hw, 0.0, -hd);
    let v2 = center + Vec3::new(hw, 0.0, hd);
    let v3 = center + Vec3::new(-hw, 0.0, hd);

    let triangles = vec![
        Triangle::new(v0, v2, v1, color),
        Triangle::new(v0, v3, v2, color),
    ];

    Mesh::new(triangles, center)
}

/// The default world: a white floor with a falling green cube and blue pyramid.
pub fn demo_scene(ground_level: f32) -> Result<Scene, SceneError> {
    let white = Color::new(255.0, 255.0, 255.0);
    let green = Color::new(50.0, 220.0, 50.0);
    let blue = Color::new(50.0, 50.0, 220.0);

    let scene = Scene::new()
        .with(ground(Vec3::new(0.0, ground_level, 0.0), 100.0, 100.0, white)?)
        .with(cube(Vec3::new(-1.5, 5.0, 3.0), 2.0, green, true)?)
        .with(pyramid(Vec3::new(3.0, 5.0, 4.0), 2.0, 2.0, blue, true)?);

    log::debug!("built demo scene: {scene:?}");
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ray, SceneObject};

    fn assert_outward(mesh: &Mesh) {
        let bounds = mesh.bounding_sphere();
        for tri in mesh.triangles() {
            let [a, b, c] = tri.vertices();
            let face_center = (a + b + c) / 3.0;
            assert!(
                tri.normal().dot(face_center - bounds.center) > 0.0,
                "face {:?} points inward",
                tri.vertices()
            );
        }
    }

    #[test]
    fn test_cube_faces_point_outward() {
        let mesh = cube(Vec3::new(1.0, 2.0, 3.0), 2.0, Color::ONE, false).unwrap();
        assert_eq!(mesh.triangles().len(), 12);
        assert_outward(&mesh);
    }

    #[test]
    fn test_cube_anchor_is_bottom_face() {
        let mesh = cube(Vec3::new(-1.5, 5.0, 3.0), 2.0, Color::ONE, true).unwrap();
        assert_eq!(mesh.position(), Vec3::new(-1.5, 4.0, 3.0));
        assert!(mesh.has_gravity());
    }

    #[test]
    fn test_pyramid_faces_point_outward() {
        let mesh = pyramid(Vec3::new(3.0, 5.0, 4.0), 2.0, 2.0, Color::ONE, false).unwrap();
        assert_eq!(mesh.triangles().len(), 4);
        assert_outward(&mesh);
    }

    #[test]
    fn test_ground_faces_up() {
        let mesh = ground(Vec3::ZERO, 10.0, 10.0, Color::ONE).unwrap();
        for tri in mesh.triangles() {
            assert!((tri.normal() - Vec3::Y).length() < 1e-6);
        }

        let hit = mesh.intersect(&Ray::new(Vec3::new(0.5, 3.0, -0.5), Vec3::NEG_Y)).unwrap();
        assert!((hit.dist - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_cube_settles_on_ground() {
        let mut mesh = cube(Vec3::new(0.0, 5.0, 0.0), 2.0, Color::ONE, true).unwrap();
        for _ in 0..100 {
            mesh.update(0.05, -9.8, 0.0);
        }

        let lowest = mesh
            .triangles()
            .iter()
            .flat_map(|t| t.vertices())
            .map(|v| v.y)
            .fold(f32::INFINITY, f32::min);
        assert!(lowest.abs() < 1e-4);
    }

    #[test]
    fn test_demo_scene_layout() {
        let scene = demo_scene(0.0).unwrap();
        assert_eq!(scene.len(), 3);
        assert!(scene.objects().iter().all(|o| o.kind() == "mesh"));
    }
}
