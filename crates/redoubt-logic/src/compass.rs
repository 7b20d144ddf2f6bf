//! 4-way orientation indices.
//!
//! Structures and stairways face one of four compass directions; the
//! index is the number of counter-clockwise quarter turns from +x.

use std::f32::consts::FRAC_PI_2;

pub const EAST: u8 = 0;
pub const NORTH: u8 = 1;
pub const WEST: u8 = 2;
pub const SOUTH: u8 = 3;

/// Continuous rotation angle for an orientation index.
pub fn to_radians(ori: u8) -> f32 {
    f32::from(ori % 4) * FRAC_PI_2
}

/// Quantize an angle (radians) to the nearest orientation index.
pub fn from_radians(rad: f32) -> u8 {
    ((rad / FRAC_PI_2).round() as i32).rem_euclid(4) as u8
}

/// The 180°-opposite index.
pub fn opposite(ori: u8) -> u8 {
    (ori + 2) % 4
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_roundtrip_all_indices() {
        for ori in 0..4u8 {
            assert_eq!(from_radians(to_radians(ori)), ori);
        }
    }

    #[test]
    fn test_quantizes_to_nearest() {
        assert_eq!(from_radians(0.1), EAST);
        assert_eq!(from_radians(FRAC_PI_2 - 0.1), NORTH);
        assert_eq!(from_radians(-FRAC_PI_2), SOUTH);
        assert_eq!(from_radians(PI), WEST);
        assert_eq!(from_radians(-PI), WEST);
    }

    #[test]
    fn test_opposite_is_involution() {
        for ori in 0..4u8 {
            assert_eq!(opposite(ori), (ori + 2) % 4);
            assert_eq!(opposite(opposite(ori)), ori);
        }
    }
}
