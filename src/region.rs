use crate::linalg::Vec3i;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;

/// Selects the axis orthogonal to a 2D slice of volume data.
///
/// Consumed by volume code built on top of this crate when extracting a
/// single plane of voxels.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SlicePlane {
    X,
    Y,
    Z,
}

/// An axis-aligned box descriptor addressing a sub-area of image or volume
/// data.
///
/// A [`Region`] is the half-open box `[offset, offset + size)` per axis. It
/// is a pure descriptor: it holds no relation to any image, and the
/// constructors perform no validation. A negative or zero size is accepted
/// and left to the consuming image/volume code to interpret.
///
/// 2D constructors set every z component to zero.
///
/// # Examples
///
/// ```
/// use rastermath::prelude::*;
///
/// let region = Region::with_offset_2d(1, 1, 2, 3);
/// assert_eq!(region.offset, Vec3i { x: 1, y: 1, z: 0 });
/// assert_eq!(region.size, Vec3i { x: 2, y: 3, z: 0 });
/// ```
#[derive(Default, Debug, Eq, PartialEq, Copy, Clone, Hash, Serialize, Deserialize)]
pub struct Region {
    pub offset: Vec3i,
    pub size: Vec3i,
}

impl Region {
    /// Creates a 2D region of the given size at the origin.
    #[must_use]
    pub fn new_2d(x_size: i32, y_size: i32) -> Self {
        Self {
            offset: Vec3i::zero(),
            size: Vec3i {
                x: x_size,
                y: y_size,
                z: 0,
            },
        }
    }

    /// Creates a 2D region of the given size at the given offset.
    #[must_use]
    pub fn with_offset_2d(x_offset: i32, y_offset: i32, x_size: i32, y_size: i32) -> Self {
        Self {
            offset: Vec3i {
                x: x_offset,
                y: y_offset,
                z: 0,
            },
            size: Vec3i {
                x: x_size,
                y: y_size,
                z: 0,
            },
        }
    }

    /// Creates a 3D region of the given size at the origin.
    #[must_use]
    pub fn new_3d(x_size: i32, y_size: i32, z_size: i32) -> Self {
        Self {
            offset: Vec3i::zero(),
            size: Vec3i {
                x: x_size,
                y: y_size,
                z: z_size,
            },
        }
    }

    /// Creates a 3D region of the given size at the given offset.
    #[must_use]
    pub fn with_offset_3d(
        x_offset: i32,
        y_offset: i32,
        z_offset: i32,
        x_size: i32,
        y_size: i32,
        z_size: i32,
    ) -> Self {
        Self {
            offset: Vec3i {
                x: x_offset,
                y: y_offset,
                z: z_offset,
            },
            size: Vec3i {
                x: x_size,
                y: y_size,
                z: z_size,
            },
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "region[offset={}, size={}]", self.offset, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constructors ====================

    #[test]
    fn region_2d_size_only() {
        let region = Region::new_2d(2, 3);
        assert_eq!(region.offset, Vec3i { x: 0, y: 0, z: 0 });
        assert_eq!(region.size, Vec3i { x: 2, y: 3, z: 0 });
    }

    #[test]
    fn region_2d_with_offset() {
        let region = Region::with_offset_2d(1, 1, 2, 3);
        assert_eq!(region.offset, Vec3i { x: 1, y: 1, z: 0 });
        assert_eq!(region.size, Vec3i { x: 2, y: 3, z: 0 });
    }

    #[test]
    fn region_3d_size_only() {
        let region = Region::new_3d(4, 5, 6);
        assert_eq!(region.offset, Vec3i { x: 0, y: 0, z: 0 });
        assert_eq!(region.size, Vec3i { x: 4, y: 5, z: 6 });
    }

    #[test]
    fn region_3d_with_offset() {
        let region = Region::with_offset_3d(1, 2, 3, 4, 5, 6);
        assert_eq!(region.offset, Vec3i { x: 1, y: 2, z: 3 });
        assert_eq!(region.size, Vec3i { x: 4, y: 5, z: 6 });
    }

    // ==================== Permissiveness ====================

    #[test]
    fn negative_and_zero_sizes_are_accepted() {
        // The caller interprets empty or inverted regions; no validation
        // happens here.
        let region = Region::new_2d(-2, 0);
        assert_eq!(region.size, Vec3i { x: -2, y: 0, z: 0 });
        let region = Region::with_offset_3d(-1, -2, -3, 0, 0, 0);
        assert_eq!(region.offset, Vec3i { x: -1, y: -2, z: -3 });
        assert_eq!(region.size, Vec3i::zero());
    }

    // ==================== Display ====================

    #[test]
    fn region_display() {
        let region = Region::with_offset_2d(1, 2, 3, 4);
        assert_eq!(
            region.to_string(),
            "region[offset=vec(1, 2, 0), size=vec(3, 4, 0)]"
        );
    }
}
