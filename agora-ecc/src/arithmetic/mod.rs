mod coordinate;
mod curve_field;
mod field;
mod modular;
mod point;
mod scalar;

pub use coordinate::Coordinate;
pub use curve_field::CurveField;
pub use field::FieldElement;
pub use modular::{mul_mod_u256, Modular};
pub use point::Point;
pub use scalar::Scalar;
