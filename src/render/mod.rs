pub mod plan;
pub mod surface;
