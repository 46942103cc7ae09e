//! Geometric primitives for addressing and computing over pixels and voxels:
//! 2D/3D vectors in float ([`Vec2`](linalg::Vec2), [`Vec3`](linalg::Vec3))
//! and integer ([`Vec2i`](linalg::Vec2i), [`Vec3i`](linalg::Vec3i))
//! variants, a plain 3x3 matrix aggregate, an axis-aligned
//! [`Region`](region::Region) descriptor, and RGB colour values.
//!
//! The vector types support component-wise arithmetic across element kinds
//! with a receiver-wins result policy (the left operand's element kind
//! determines the result kind, truncating toward zero where needed) and
//! uniform scalar broadcast from either operand position. See
//! [`linalg`] for the dispatch rules.
//!
//! All types are `Copy` values: operations return new values, nothing is
//! mutated in place, and every operation is safe to call concurrently on
//! independent values.

pub mod colour;
pub mod config;
pub mod linalg;
pub mod prelude;
pub mod region;
