use crate::aliases::Vec3;

/// Unpolarized power coefficients at a dielectric boundary.
/// `reflection + transmission == 1.0` always holds.
#[derive(Clone, Copy, Debug)]
pub struct Fresnel {
    pub reflection: f32,
    pub transmission: f32,
}

/// Mirror reflection of `incident` about `normal`. The result is unit length
/// even when `incident` is not.
pub fn reflect(incident: &Vec3, normal: &Vec3) -> Vec3 {
    (incident - 2.0 * normal.dot(incident) * normal).normalize()
}

/// Refracted direction by the vector form of Snell's law, or `None` under
/// total internal reflection.
/// * `normal` - unit normal on the incidence side (against `incident`).
/// * `eta` - ratio n_incident / n_transmitted.
pub fn refract(incident: &Vec3, normal: &Vec3, eta: f32) -> Option<Vec3> {
    let unit = incident.normalize();
    let dt = unit.dot(normal);
    let discriminant = 1.0 - eta * eta * (1.0 - dt * dt);
    if discriminant < 0.0 {
        None
    } else {
        Some(eta * (unit - dt * normal) - discriminant.sqrt() * normal)
    }
}

/// Exact unpolarized Fresnel coefficients, averaging the s and p
/// polarizations. Returns total reflection past the critical angle.
/// * `normal` - unit normal on the incidence side (against `incident`).
pub fn fresnel(incident: &Vec3, normal: &Vec3, ior_incident: f32, ior_transmitted: f32) -> Fresnel {
    let cos_i = -incident.normalize().dot(normal).min(1.0).max(-1.0);
    let sin2_t = (ior_incident / ior_transmitted).powi(2) * (1.0 - cos_i * cos_i);
    if sin2_t >= 1.0 {
        return Fresnel {
            reflection: 1.0,
            transmission: 0.0,
        };
    }
    let cos_t = (1.0 - sin2_t).sqrt();
    let r_s = (ior_incident * cos_i - ior_transmitted * cos_t)
        / (ior_incident * cos_i + ior_transmitted * cos_t);
    let r_p = (ior_incident * cos_t - ior_transmitted * cos_i)
        / (ior_incident * cos_t + ior_transmitted * cos_i);
    let reflection = 0.5 * (r_s * r_s + r_p * r_p);
    Fresnel {
        reflection,
        transmission: 1.0 - reflection,
    }
}

/// Schlick's polynomial approximation of the reflection coefficient.
/// Cheaper than [`fresnel`] and close to it away from the critical angle.
pub fn schlick(cosine: f32, ior_incident: f32, ior_transmitted: f32) -> f32 {
    let r0 = ((ior_incident - ior_transmitted) / (ior_incident + ior_transmitted)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
