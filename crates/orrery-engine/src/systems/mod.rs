pub mod lighting;
pub mod picking;
pub mod points;
pub mod render;
