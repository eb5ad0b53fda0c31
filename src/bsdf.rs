use crate::aliases::{RandGen, Vec3};
use crate::material::Material;
use crate::ray::Ray;
use crate::sampling;
use crate::specular;
use rand::Rng;

const AIR_IOR: f32 = 1.0;

/// Classification of a single surface interaction. No other outcomes exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScatterEvent {
    DiffuseScatter,
    Reflected,
    Transmitted,
}

/// Result of one scatter decision. The scattered ray itself is written back
/// through the `&mut Ray` handed to [`scatter`].
#[derive(Clone, Copy, Debug)]
pub struct ScatterRecord {
    pub event: ScatterEvent,
    pub attenuation: Vec3,
}

/// Selection rule for reflection versus transmission at a dielectric
/// boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DielectricMode {
    /// Reflect with probability equal to the Fresnel reflection coefficient,
    /// at the cost of one extra random draw. Unbiased over many samples.
    FresnelWeighted,
    /// Transmit whenever Snell's law permits. Deterministic, but glass seen
    /// at grazing angles comes out too dark.
    AlwaysTransmit,
}

#[derive(Clone, Copy, Debug)]
pub struct ScatterConfig {
    pub dielectric_mode: DielectricMode,
    /// Origin offset applied to scattered rays against immediate
    /// self-intersection. Tune relative to scene scale.
    pub epsilon: f32,
}

impl Default for ScatterConfig {
    fn default() -> ScatterConfig {
        ScatterConfig {
            dielectric_mode: DielectricMode::FresnelWeighted,
            epsilon: 0.01,
        }
    }
}

/// Decides how a ray scatters at a surface hit and rewrites it in place as
/// the next bounce's ray.
///
/// Capabilities resolve in fixed priority order: a reflective surface
/// mirrors the ray, a refractive one crosses the boundary (or reflects,
/// per the configured dielectric mode and Fresnel weight), anything else
/// scatters diffusely. The record carries the event tag and the color to
/// fold into the path throughput. Draws two uniforms for a diffuse event,
/// one for the Fresnel coin, none otherwise; touches no state beyond its
/// arguments.
/// * `normal` - unit length, oriented with the geometric surface; the
///   inside/outside ambiguity for dielectrics is resolved here.
pub fn scatter(
    ray: &mut Ray,
    hit_point: &Vec3,
    normal: &Vec3,
    material: &Material,
    config: &ScatterConfig,
    rng: &mut RandGen,
) -> ScatterRecord {
    debug_assert!((normal.norm() - 1.0).abs() < 1e-3);
    if material.reflective {
        let direction = specular::reflect(&ray.direction, normal);
        *ray = Ray::new(&(hit_point + config.epsilon * normal), &direction);
        ScatterRecord {
            event: ScatterEvent::Reflected,
            attenuation: material.color,
        }
    } else if material.refractive && material.index_of_refraction > 0.0 {
        scatter_dielectric(ray, hit_point, normal, material, config, rng)
    } else {
        let direction = sampling::cosine_hemisphere(normal, rng.gen(), rng.gen());
        *ray = Ray::new(&(hit_point + config.epsilon * direction), &direction);
        ScatterRecord {
            event: ScatterEvent::DiffuseScatter,
            attenuation: material.color,
        }
    }
}

fn scatter_dielectric(
    ray: &mut Ray,
    hit_point: &Vec3,
    normal: &Vec3,
    material: &Material,
    config: &ScatterConfig,
    rng: &mut RandGen,
) -> ScatterRecord {
    // The arrival side decides entering versus exiting.
    let exiting = ray.direction.dot(normal) > 0.0;
    let (oriented_normal, ior_incident, ior_transmitted) = if exiting {
        (-normal, material.index_of_refraction, AIR_IOR)
    } else {
        (*normal, AIR_IOR, material.index_of_refraction)
    };
    let eta = ior_incident / ior_transmitted;

    let transmitted = match specular::refract(&ray.direction, &oriented_normal, eta) {
        Some(direction) => direction,
        // Total internal reflection keeps the ray inside the medium.
        None => return reflect_off(ray, hit_point, &oriented_normal, material, config),
    };

    if config.dielectric_mode == DielectricMode::FresnelWeighted {
        let split =
            specular::fresnel(&ray.direction, &oriented_normal, ior_incident, ior_transmitted);
        if rng.gen::<f32>() < split.reflection {
            // The 1/R sampling weight cancels the Fresnel factor R, so this
            // branch keeps the same plain tint as the transmit branch.
            return reflect_off(ray, hit_point, &oriented_normal, material, config);
        }
    }

    *ray = Ray::new(&(hit_point + config.epsilon * transmitted), &transmitted);
    ScatterRecord {
        event: ScatterEvent::Transmitted,
        attenuation: material.specular_color,
    }
}

fn reflect_off(
    ray: &mut Ray,
    hit_point: &Vec3,
    oriented_normal: &Vec3,
    material: &Material,
    config: &ScatterConfig,
) -> ScatterRecord {
    let direction = specular::reflect(&ray.direction, oriented_normal);
    *ray = Ray::new(&(hit_point + config.epsilon * direction), &direction);
    ScatterRecord {
        event: ScatterEvent::Reflected,
        attenuation: material.specular_color,
    }
}
