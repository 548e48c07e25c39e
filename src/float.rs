use std::fmt::Debug;

use num_traits::{FromPrimitive, ToPrimitive};

/// Sample type the shifter runs on. Implemented for `f32` and `f64`.
pub trait Float: num_traits::Float + FromPrimitive + ToPrimitive + Debug + Send + 'static {}

impl<T: num_traits::Float + FromPrimitive + ToPrimitive + Debug + Send + 'static> Float for T {}
