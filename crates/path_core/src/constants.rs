/// Edge weight type
pub type Weight = f64;
/// Distance of a node that has not been reached (yet)
pub const INFINITY: Weight = f64::INFINITY;
