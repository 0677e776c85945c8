//! Math library modules for checked integer arithmetic

pub mod safe_math;
pub mod mul_div;
pub mod shares;

pub use safe_math::*;
pub use mul_div::*;
pub use shares::*;
