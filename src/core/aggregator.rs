//! Folds a [`ColorCollection`] into one color.
//!
//! * `mix`: mean of every channel and of every HSL field (hue averaged linearly)
//! * `lowest` / `highest`: per-field minimum / maximum, fields chosen independently
//! * `mix-saturate`: last color's hue, lightness and alpha with the mean
//!   saturation of all earlier colors, RGB recomputed from that HSL

use crate::core::collection::{ColorCollection, ColorEntry};
use crate::core::conversion::{hls_to_rgb, round_channel};
use crate::domain::model::{AggregationResult, Color, Hsl, Mode};
use crate::utils::error::{MixerError, Result};

pub fn aggregate(collection: &ColorCollection, mode: Mode) -> Result<AggregationResult> {
    if collection.is_empty() {
        return Err(MixerError::EmptyInputError);
    }
    let entries = collection.entries();

    match mode {
        Mode::Mix => Ok(mix(entries)),
        Mode::Lowest => Ok(extreme(entries, f64::min)),
        Mode::Highest => Ok(extreme(entries, f64::max)),
        Mode::MixSaturate => mix_saturate(entries),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    sum / count as f64
}

fn channels(entry: &ColorEntry) -> [f64; 4] {
    let c = entry.color;
    [
        f64::from(c.red),
        f64::from(c.green),
        f64::from(c.blue),
        f64::from(c.alpha),
    ]
}

fn hsl_fields(entry: &ColorEntry) -> [f64; 3] {
    [entry.hsl.hue, entry.hsl.saturation, entry.hsl.lightness]
}

fn build(rgba: [f64; 4], hsl: [f64; 3]) -> AggregationResult {
    let [red, green, blue, alpha] = rgba.map(round_channel);
    let [hue, saturation, lightness] = hsl;
    AggregationResult::new(
        Color::new(red, green, blue, alpha),
        Hsl {
            hue,
            saturation,
            lightness,
        },
    )
}

fn mix(entries: &[ColorEntry]) -> AggregationResult {
    let rgba: [f64; 4] = std::array::from_fn(|i| mean(entries.iter().map(|e| channels(e)[i])));
    let hsl: [f64; 3] = std::array::from_fn(|i| mean(entries.iter().map(|e| hsl_fields(e)[i])));
    build(rgba, hsl)
}

/// `pick` is `f64::min` or `f64::max`; `entries` is non-empty.
fn extreme(entries: &[ColorEntry], pick: fn(f64, f64) -> f64) -> AggregationResult {
    let (first, rest) = (&entries[0], &entries[1..]);

    let mut channels_acc = channels(first);
    let mut hsl_acc = hsl_fields(first);
    for entry in rest {
        for (acc, value) in channels_acc.iter_mut().zip(channels(entry)) {
            *acc = pick(*acc, value);
        }
        for (acc, value) in hsl_acc.iter_mut().zip(hsl_fields(entry)) {
            *acc = pick(*acc, value);
        }
    }

    build(channels_acc, hsl_acc)
}

fn mix_saturate(entries: &[ColorEntry]) -> Result<AggregationResult> {
    let Some((last, earlier)) = entries.split_last().filter(|(_, earlier)| !earlier.is_empty())
    else {
        return Err(MixerError::InsufficientInputError {
            mode: Mode::MixSaturate.to_string(),
            required: 2,
            found: entries.len(),
        });
    };

    let saturation = mean(earlier.iter().map(|e| e.hsl.saturation));
    let Hsl { hue, lightness, .. } = last.hsl;
    let (red, green, blue) = hls_to_rgb(hue, lightness, saturation);

    Ok(AggregationResult::new(
        Color::new(red, green, blue, last.color.alpha),
        Hsl {
            hue,
            saturation,
            lightness,
        },
    ))
}
