pub mod bounds;
pub mod chassis;
pub mod collision;
pub mod config;
pub mod constraint;
pub mod controller_message;
pub mod error;
pub mod particle;
pub mod simulation;

pub type Vn<const D: usize> = nalgebra::SVector<f32, D>;
pub type V2 = Vn<2>;
pub type V3 = Vn<3>;
