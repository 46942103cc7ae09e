#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use crate::{
    colour::{Colour, ColourBytes},
    config::*,
    linalg,
    linalg::{Mat3x3, Vec2, Vec2i, Vec3, Vec3i},
    region::{Region, SlicePlane},
};
