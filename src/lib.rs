pub mod aliases;
pub mod bsdf;
pub mod camera;
pub mod material;
pub mod medium;
pub mod onb;
pub mod random;
pub mod ray;
pub mod sampling;
pub mod scene;
pub mod specular;

use crate::aliases::{RandGen, Vec3};
use crate::bsdf::{ScatterConfig, ScatterEvent};
use crate::medium::MediumProperties;
use crate::ray::Ray;
use crate::scene::Scene;
use rand::Rng;

const T_MIN: f32 = 0.0001;

/// Radiance arriving along `ray`, estimated by one random walk of at most
/// `max_depth` scattering events (surface or volumetric).
///
/// The walk carries a throughput color that each event multiplies down;
/// it ends at an emitter, at the sky, or when the bounce budget runs out
/// (contributing black). Crossing a refractive boundary swaps the tracked
/// medium between vacuum and the material's interior; nested dielectrics
/// are not tracked.
pub fn calc_color(
    ray: &Ray,
    scene: &Scene,
    config: &ScatterConfig,
    max_depth: u32,
    rng: &mut RandGen,
) -> Vec3 {
    let mut ray = *ray;
    let mut throughput = Vec3::new(1.0, 1.0, 1.0);
    let mut medium = MediumProperties::vacuum();
    for _ in 0..max_depth {
        let rec = match scene.hit(&ray, T_MIN, std::f32::MAX) {
            Some(rec) => rec,
            None => return throughput.component_mul(&scene.sky.color(&ray)),
        };
        if !medium.is_vacuum() {
            let mut distance = rec.t;
            let scattered = medium::scatter_and_absorb(
                &mut ray,
                &mut distance,
                &medium,
                &mut throughput,
                rng.gen(),
                rng.gen(),
                rng.gen(),
            );
            if scattered {
                continue;
            }
        }
        let material = rec.material;
        if material.emittance > 0.0 {
            return throughput.component_mul(&material.emitted());
        }
        let entering = ray.direction.dot(&rec.normal) < 0.0;
        let scatter = bsdf::scatter(&mut ray, &rec.point, &rec.normal, material, config, rng);
        throughput.component_mul_assign(&scatter.attenuation);
        if scatter.event == ScatterEvent::Transmitted {
            medium = if entering {
                material.interior
            } else {
                MediumProperties::vacuum()
            };
        }
    }
    Vec3::new(0.0, 0.0, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsdf::DielectricMode;
    use crate::material::Material;
    use crate::scene::{Sky, Sphere};
    use rand::SeedableRng;

    fn always_transmit() -> ScatterConfig {
        ScatterConfig {
            dielectric_mode: DielectricMode::AlwaysTransmit,
            ..ScatterConfig::default()
        }
    }

    #[test]
    fn escaping_ray_returns_the_sky_color() {
        let scene = Scene {
            spheres: vec![],
            sky: Sky {
                horizon: Vec3::new(1.0, 1.0, 1.0),
                zenith: Vec3::new(0.2, 0.4, 0.9),
            },
        };
        let ray = Ray::new(&Vec3::new(0.0, 0.0, 0.0), &Vec3::new(0.0, 1.0, 0.0));
        let mut rng = RandGen::seed_from_u64(97);
        let color = calc_color(&ray, &scene, &ScatterConfig::default(), 8, &mut rng);
        assert!((color - Vec3::new(0.2, 0.4, 0.9)).norm() < 1e-6);
    }

    #[test]
    fn exhausted_bounce_budget_contributes_black() {
        let scene = Scene {
            spheres: vec![Sphere::new(
                &Vec3::new(0.0, 0.0, -5.0),
                1.0,
                Material::diffuse(&Vec3::new(0.5, 0.5, 0.5)),
            )],
            sky: Sky::black(),
        };
        let ray = Ray::new(&Vec3::new(0.0, 0.0, 0.0), &Vec3::new(0.0, 0.0, -1.0));
        let mut rng = RandGen::seed_from_u64(101);
        let color = calc_color(&ray, &scene, &ScatterConfig::default(), 0, &mut rng);
        assert_eq!(color, Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn emitter_seen_directly_returns_its_radiance() {
        let scene = Scene {
            spheres: vec![Sphere::new(
                &Vec3::new(0.0, 0.0, -5.0),
                1.0,
                Material::light(&Vec3::new(1.0, 0.9, 0.8), 4.0),
            )],
            sky: Sky::black(),
        };
        let ray = Ray::new(&Vec3::new(0.0, 0.0, 0.0), &Vec3::new(0.0, 0.0, -1.0));
        let mut rng = RandGen::seed_from_u64(103);
        let color = calc_color(&ray, &scene, &ScatterConfig::default(), 8, &mut rng);
        assert!((color - Vec3::new(4.0, 3.6, 3.2)).norm() < 1e-5);
    }

    #[test]
    fn mirror_bounce_tints_the_reflected_light() {
        // Head-on mirror at z = -5 throws the ray back into a light at z = 5.
        let scene = Scene {
            spheres: vec![
                Sphere::new(
                    &Vec3::new(0.0, 0.0, -5.0),
                    1.0,
                    Material::mirror(&Vec3::new(0.8, 0.9, 1.0)),
                ),
                Sphere::new(
                    &Vec3::new(0.0, 0.0, 5.0),
                    1.0,
                    Material::light(&Vec3::new(1.0, 1.0, 1.0), 2.0),
                ),
            ],
            sky: Sky::black(),
        };
        let ray = Ray::new(&Vec3::new(0.0, 0.0, 0.0), &Vec3::new(0.0, 0.0, -1.0));
        let mut rng = RandGen::seed_from_u64(107);
        let color = calc_color(&ray, &scene, &ScatterConfig::default(), 8, &mut rng);
        assert!((color - Vec3::new(1.6, 1.8, 2.0)).norm() < 1e-5);
    }

    #[test]
    fn clear_glass_tints_twice_on_the_way_through() {
        let tint = Vec3::new(0.9, 0.8, 0.7);
        let scene = Scene {
            spheres: vec![
                Sphere::new(&Vec3::new(0.0, 0.0, -5.0), 1.0, Material::glass(&tint, 1.5)),
                Sphere::new(
                    &Vec3::new(0.0, 0.0, -10.0),
                    1.0,
                    Material::light(&Vec3::new(1.0, 1.0, 1.0), 1.0),
                ),
            ],
            sky: Sky::black(),
        };
        let ray = Ray::new(&Vec3::new(0.0, 0.0, 0.0), &Vec3::new(0.0, 0.0, -1.0));
        let mut rng = RandGen::seed_from_u64(109);
        let color = calc_color(&ray, &scene, &always_transmit(), 8, &mut rng);
        let expected = tint.component_mul(&tint);
        assert!((color - expected).norm() < 1e-4);
    }

    #[test]
    fn tinted_glass_interior_absorbs_along_the_chord() {
        let absorption = Vec3::new(0.5, 1.0, 2.0);
        let config = always_transmit();
        let scene = Scene {
            spheres: vec![
                Sphere::new(
                    &Vec3::new(0.0, 0.0, -5.0),
                    1.0,
                    Material::tinted_glass(
                        &Vec3::new(1.0, 1.0, 1.0),
                        1.5,
                        MediumProperties::new(&absorption, 0.0),
                    ),
                ),
                Sphere::new(
                    &Vec3::new(0.0, 0.0, -10.0),
                    1.0,
                    Material::light(&Vec3::new(1.0, 1.0, 1.0), 1.0),
                ),
            ],
            sky: Sky::black(),
        };
        let ray = Ray::new(&Vec3::new(0.0, 0.0, 0.0), &Vec3::new(0.0, 0.0, -1.0));
        let mut rng = RandGen::seed_from_u64(113);
        let color = calc_color(&ray, &scene, &config, 8, &mut rng);
        // The straight chord through the sphere is 2 units, shortened by the
        // epsilon offset at the entry face.
        let chord = 2.0 - config.epsilon;
        let expected = absorption.map(|a| (-a * chord).exp());
        assert!((color - expected).norm() < 1e-3);
    }
}
