use num_traits::{FromPrimitive, PrimInt, ToPrimitive};
use serde::{Deserialize, Serialize};

/// An RGB colour value with floating point components, nominally in
/// `[0, 1]`.
///
/// Used by image code built on top of this crate as a pixel intensity value.
/// Components outside `[0, 1]` are representable; only the byte conversions
/// clamp.
#[derive(Default, Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a colour from 8-bit channel values, mapping `0..=255` to
    /// `0.0..=1.0`.
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
        }
    }

    /// Creates a colour from integer channel values of any primitive integer
    /// type, clamping each channel into the 8-bit range first.
    pub fn from_bytes_clamp<I: PrimInt + FromPrimitive + ToPrimitive>(r: I, g: I, b: I) -> Self {
        let min = I::from_u8(u8::MIN).expect("weird conversion failure from u8");
        let max = I::from_u8(u8::MAX).expect("weird conversion failure from u8");
        Self::from_bytes(
            r.clamp(min, max)
                .to_u8()
                .expect("weird conversion failure to u8"),
            g.clamp(min, max)
                .to_u8()
                .expect("weird conversion failure to u8"),
            b.clamp(min, max)
                .to_u8()
                .expect("weird conversion failure to u8"),
        )
    }

    pub fn black() -> Self {
        Self::default()
    }
    pub fn white() -> Self {
        Self {
            r: 1.0,
            g: 1.0,
            b: 1.0,
        }
    }
    pub fn red() -> Self {
        Self {
            r: 1.0,
            ..Default::default()
        }
    }
    pub fn green() -> Self {
        Self {
            g: 1.0,
            ..Default::default()
        }
    }
    pub fn blue() -> Self {
        Self {
            b: 1.0,
            ..Default::default()
        }
    }

    /// Converts to 8-bit channels, clamping each component into `[0, 1]`
    /// first.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn as_bytes(&self) -> ColourBytes {
        ColourBytes {
            r: (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            g: (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            b: (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }
}

/// An RGB colour value with 8-bit channels, the storage form used by byte
/// image buffers.
#[derive(Default, Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ColourBytes {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColourBytes {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_colour(&self) -> Colour {
        Colour::from_bytes(self.r, self.g, self.b)
    }
}

impl From<ColourBytes> for Colour {
    fn from(value: ColourBytes) -> Self {
        value.as_colour()
    }
}

impl From<Colour> for ColourBytes {
    fn from(value: Colour) -> Self {
        value.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_maps_full_range() {
        assert_eq!(Colour::from_bytes(0, 0, 0), Colour::black());
        assert_eq!(Colour::from_bytes(255, 255, 255), Colour::white());
        let c = Colour::from_bytes(51, 102, 204);
        assert_eq!(c, Colour::new(0.2, 0.4, 0.8));
    }

    #[test]
    fn byte_round_trip() {
        let bytes = ColourBytes::new(12, 34, 56);
        assert_eq!(bytes.as_colour().as_bytes(), bytes);
    }

    #[test]
    fn from_bytes_clamp_saturates() {
        assert_eq!(
            Colour::from_bytes_clamp(-5_i32, 300_i32, 128_i32),
            Colour::from_bytes(0, 255, 128)
        );
    }

    #[test]
    fn as_bytes_clamps_out_of_range_components() {
        let c = Colour::new(-0.5, 2.0, 0.5);
        let bytes = c.as_bytes();
        assert_eq!(bytes.r, 0);
        assert_eq!(bytes.g, 255);
        assert_eq!(bytes.b, 128);
    }
}
