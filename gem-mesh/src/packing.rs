//! Vertex packing helpers
//!
//! Conversions from f32 vertex attributes to the packed GPU layout used
//! by [`crate::mesh::PackedMesh`]: positions as f16x4, normals as an
//! octahedral-encoded u32 (2x snorm16).

use glam::Vec3;
use half::f16;

/// Convert f32 in [-1, 1] to snorm16.
#[inline]
pub fn f32_to_snorm16(value: f32) -> i16 {
    (value.clamp(-1.0, 1.0) * 32767.0) as i16
}

/// Pack a position to Float16x4 with w = 1.0 padding.
#[inline]
pub fn pack_position(position: Vec3) -> [f16; 4] {
    [
        f16::from_f32(position.x),
        f16::from_f32(position.y),
        f16::from_f32(position.z),
        f16::from_f32(1.0),
    ]
}

/// Octahedral-encode a direction into [-1, 1]^2.
///
/// The zero vector (a degenerate face normal) encodes to (0, 0).
#[inline]
pub fn encode_octahedral(dir: Vec3) -> (f32, f32) {
    let dir = dir.normalize_or_zero();
    let l1 = dir.x.abs() + dir.y.abs() + dir.z.abs();
    if l1 == 0.0 {
        return (0.0, 0.0);
    }

    let mut u = dir.x / l1;
    let mut v = dir.y / l1;
    if dir.z < 0.0 {
        // Fold the lower hemisphere over the diagonals.
        let (u_abs, v_abs) = (u.abs(), v.abs());
        u = (1.0 - v_abs) * u.signum();
        v = (1.0 - u_abs) * v.signum();
    }
    (u, v)
}

/// Decode octahedral coordinates back to a unit direction.
#[inline]
pub fn decode_octahedral(u: f32, v: f32) -> Vec3 {
    let mut dir = Vec3::new(u, v, 1.0 - u.abs() - v.abs());
    if dir.z < 0.0 {
        let x = dir.x;
        dir.x = (1.0 - dir.y.abs()) * x.signum();
        dir.y = (1.0 - x.abs()) * dir.y.signum();
    }
    dir.normalize_or_zero()
}

/// Pack a normal to a u32 (octahedral, 2x snorm16).
#[inline]
pub fn pack_normal(normal: Vec3) -> u32 {
    let (u, v) = encode_octahedral(normal);
    (f32_to_snorm16(u) as u16 as u32) | ((f32_to_snorm16(v) as u16 as u32) << 16)
}

/// Unpack a u32-packed normal back to a unit direction.
#[inline]
pub fn unpack_normal(packed: u32) -> Vec3 {
    let u = (packed & 0xFFFF) as u16 as i16 as f32 / 32767.0;
    let v = (packed >> 16) as u16 as i16 as f32 / 32767.0;
    decode_octahedral(u, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snorm16_range() {
        assert_eq!(f32_to_snorm16(-1.0), -32767);
        assert_eq!(f32_to_snorm16(0.0), 0);
        assert_eq!(f32_to_snorm16(1.0), 32767);
        assert_eq!(f32_to_snorm16(2.0), 32767);
    }

    #[test]
    fn test_pack_position_pads_w() {
        let packed = pack_position(Vec3::new(1.0, -2.0, 3.25));
        assert_eq!(packed[0], f16::from_f32(1.0));
        assert_eq!(packed[1], f16::from_f32(-2.0));
        assert_eq!(packed[2], f16::from_f32(3.25));
        assert_eq!(packed[3], f16::from_f32(1.0));
    }

    #[test]
    fn test_normal_roundtrip() {
        let dirs = [
            Vec3::X,
            Vec3::NEG_X,
            Vec3::Y,
            Vec3::NEG_Y,
            Vec3::Z,
            Vec3::NEG_Z,
            Vec3::new(0.577, 0.577, 0.577),
            Vec3::new(-0.3, 0.8, -0.52),
        ];
        for dir in dirs {
            let normalized = dir.normalize();
            let decoded = unpack_normal(pack_normal(normalized));
            assert!(
                (decoded - normalized).length() < 0.01,
                "roundtrip failed for {:?}",
                normalized
            );
        }
    }

    #[test]
    fn test_zero_normal_stays_representable() {
        // Degenerate faces carry a zero normal; it must encode without
        // panicking and decode to something finite.
        let decoded = unpack_normal(pack_normal(Vec3::ZERO));
        assert!(decoded.is_finite());
    }
}
