use nalgebra as na;

pub type Vec3 = na::Vector3<f32>;
pub type Vec2 = na::Vector2<f32>;
/// Seedable small-state generator; every path owns one (see `random::path_rng`).
pub type RandGen = rand::rngs::SmallRng;
