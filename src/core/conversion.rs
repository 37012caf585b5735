//! RGB <-> HSL conversion.
//!
//! Hue is expressed in degrees, saturation and lightness in `[0, 1]`.

use crate::domain::model::Hsl;

/// Convert 0-255 RGB channels to HSL.
///
/// Achromatic input (`r == g == b`) yields hue 0 and saturation 0 with the
/// lightness equal to the shared channel value.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let (r, g, b) = (
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    );

    if r == g && g == b {
        return Hsl {
            hue: 0.0,
            saturation: 0.0,
            lightness: r,
        };
    }

    let maximum = r.max(g).max(b);
    let minimum = r.min(g).min(b);
    let lightness = 0.5 * (maximum + minimum);

    Hsl {
        hue: hue_degrees(r, g, b),
        saturation: saturation(maximum, minimum, lightness),
        lightness,
    }
}

/// Six 60 degree sectors, picked by channel ordering. Ties resolve to the
/// first matching branch.
fn hue_degrees(r: f64, g: f64, b: f64) -> f64 {
    if r >= g && g >= b {
        60.0 * ((g - b) / (r - b))
    } else if g > r && r >= b {
        60.0 * (2.0 - (r - b) / (g - b))
    } else if g >= b && b > r {
        60.0 * (2.0 + (b - r) / (g - r))
    } else if b > g && g > r {
        60.0 * (4.0 - (g - r) / (b - r))
    } else if b > r && r >= g {
        60.0 * (4.0 + (r - g) / (b - g))
    } else if r >= b && b > g {
        60.0 * (6.0 - (b - g) / (r - g))
    } else {
        unreachable!("hue sector not found for rgb({}, {}, {})", r, g, b)
    }
}

fn saturation(maximum: f64, minimum: f64, lightness: f64) -> f64 {
    if maximum == 0.0 {
        return 0.0;
    }
    if maximum == 1.0 && minimum == 1.0 {
        return 0.0;
    }

    if lightness <= 0.5 {
        (maximum - minimum) / (maximum + minimum)
    } else {
        (maximum - minimum) / (2.0 - maximum - minimum)
    }
}

/// Inverse transform: hue in degrees, lightness and saturation in `[0, 1]`.
/// Channels are rounded half-to-even and clamped to 0-255.
pub fn hls_to_rgb(hue: f64, lightness: f64, saturation: f64) -> (u8, u8, u8) {
    let (r, g, b) = if saturation == 0.0 {
        (lightness, lightness, lightness)
    } else {
        let m2 = if lightness <= 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let m1 = 2.0 * lightness - m2;
        let h = hue / 360.0;

        (
            hue_component(m1, m2, h + 1.0 / 3.0),
            hue_component(m1, m2, h),
            hue_component(m1, m2, h - 1.0 / 3.0),
        )
    };

    (to_channel(r), to_channel(g), to_channel(b))
}

fn hue_component(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);

    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

/// Round half-to-even into a channel. Also used for averaged channels.
pub(crate) fn to_channel(value: f64) -> u8 {
    round_channel(value * 255.0)
}

pub(crate) fn round_channel(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_hsl(actual: Hsl, hue: f64, saturation: f64, lightness: f64) {
        assert!((actual.hue - hue).abs() < EPSILON, "hue {} != {}", actual.hue, hue);
        assert!(
            (actual.saturation - saturation).abs() < EPSILON,
            "saturation {} != {}",
            actual.saturation,
            saturation
        );
        assert!(
            (actual.lightness - lightness).abs() < EPSILON,
            "lightness {} != {}",
            actual.lightness,
            lightness
        );
    }

    #[test]
    fn test_extremes() {
        assert_eq!(
            rgb_to_hsl(0, 0, 0),
            Hsl {
                hue: 0.0,
                saturation: 0.0,
                lightness: 0.0
            }
        );
        assert_eq!(
            rgb_to_hsl(255, 255, 255),
            Hsl {
                hue: 0.0,
                saturation: 0.0,
                lightness: 1.0
            }
        );
    }

    #[test]
    fn test_grey_is_achromatic() {
        assert_hsl(rgb_to_hsl(128, 128, 128), 0.0, 0.0, 128.0 / 255.0);
    }

    #[test]
    fn test_primary_and_secondary_hues() {
        assert_hsl(rgb_to_hsl(255, 0, 0), 0.0, 1.0, 0.5);
        assert_hsl(rgb_to_hsl(255, 255, 0), 60.0, 1.0, 0.5);
        assert_hsl(rgb_to_hsl(0, 255, 0), 120.0, 1.0, 0.5);
        assert_hsl(rgb_to_hsl(0, 255, 255), 180.0, 1.0, 0.5);
        assert_hsl(rgb_to_hsl(0, 0, 255), 240.0, 1.0, 0.5);
        assert_hsl(rgb_to_hsl(255, 0, 255), 300.0, 1.0, 0.5);
    }

    #[test]
    fn test_each_sector() {
        // r >= g >= b
        assert_hsl(rgb_to_hsl(255, 128, 0), 60.0 * 128.0 / 255.0, 1.0, 0.5);
        // g > r >= b
        assert!((rgb_to_hsl(128, 255, 0).hue - (120.0 - 60.0 * 128.0 / 255.0)).abs() < EPSILON);
        // g >= b > r
        assert!((rgb_to_hsl(0, 255, 128).hue - (120.0 + 60.0 * 128.0 / 255.0)).abs() < EPSILON);
        // b > g > r
        assert!((rgb_to_hsl(0, 128, 255).hue - (240.0 - 60.0 * 128.0 / 255.0)).abs() < EPSILON);
        // b > r >= g
        assert!((rgb_to_hsl(128, 0, 255).hue - (240.0 + 60.0 * 128.0 / 255.0)).abs() < EPSILON);
        // r >= b > g
        assert!((rgb_to_hsl(255, 0, 128).hue - (360.0 - 60.0 * 128.0 / 255.0)).abs() < EPSILON);
    }

    #[test]
    fn test_saturation_branches() {
        // dark: lightness <= 0.5
        assert_hsl(rgb_to_hsl(102, 51, 51), 0.0, 51.0 / 153.0, 76.5 / 255.0);
        // light: lightness > 0.5
        let light = rgb_to_hsl(255, 204, 204);
        assert!((light.saturation - 1.0).abs() < EPSILON);
        assert!(light.lightness > 0.5);
    }

    #[test]
    fn test_hue_stays_below_360() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(15) {
                    let hsl = rgb_to_hsl(r as u8, g as u8, b as u8);
                    assert!((0.0..360.0).contains(&hsl.hue));
                    assert!((0.0..=1.0).contains(&hsl.saturation));
                    assert!((0.0..=1.0).contains(&hsl.lightness));
                }
            }
        }
    }

    #[test]
    fn test_round_trip_within_one() {
        for r in (0..=255u8).step_by(3) {
            for g in (0..=255u8).step_by(3) {
                for b in (0..=255u8).step_by(3) {
                    let hsl = rgb_to_hsl(r, g, b);
                    let (r2, g2, b2) = hls_to_rgb(hsl.hue, hsl.lightness, hsl.saturation);
                    assert!(
                        r.abs_diff(r2) <= 1 && g.abs_diff(g2) <= 1 && b.abs_diff(b2) <= 1,
                        "({}, {}, {}) came back as ({}, {}, {})",
                        r,
                        g,
                        b,
                        r2,
                        g2,
                        b2
                    );
                }
            }
        }
    }

    #[test]
    fn test_hls_to_rgb_known_values() {
        assert_eq!(hls_to_rgb(0.0, 0.5, 1.0), (255, 0, 0));
        assert_eq!(hls_to_rgb(120.0, 0.5, 1.0), (0, 255, 0));
        assert_eq!(hls_to_rgb(240.0, 0.5, 1.0), (0, 0, 255));
        assert_eq!(hls_to_rgb(77.0, 1.0, 0.3), (255, 255, 255));
        assert_eq!(hls_to_rgb(0.0, 0.0, 0.0), (0, 0, 0));
    }

    #[test]
    fn test_round_channel_ties_to_even() {
        assert_eq!(round_channel(127.5), 128);
        assert_eq!(round_channel(126.5), 126);
        assert_eq!(round_channel(-3.0), 0);
        assert_eq!(round_channel(300.0), 255);
    }
}
