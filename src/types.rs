//! Types

mod cell;
mod element_ref;
pub use cell::CellType;
pub use element_ref::ElementRef;

use num::Float;
use std::fmt::Debug;

/// Scalar type used for node coordinates
pub trait RealScalar: Float + Debug + 'static {}

impl RealScalar for f32 {}
impl RealScalar for f64 {}
