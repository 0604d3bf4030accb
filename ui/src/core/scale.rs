//! Value ranges and the continuous color / size scales mapped over them.
//!
//! Degenerate domains (empty, single value, all equal) never reach a
//! division: they resolve to the scale's fixed fallback color or size.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 8-bit sRGB color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `hue` in degrees (wrapped), `saturation` and `lightness` in `[0, 1]`.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let h = hue.rem_euclid(360.0);
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::new(channel(r + m), channel(g + m), channel(b + m))
    }

    /// Per-channel linear blend; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f64) -> Self {
        let t = clamp_unit(t);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Perceived brightness in `[0, 1]`.
    pub fn luminance(self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }

    /// Black on light backgrounds, white on dark ones.
    pub fn contrasting_text(self) -> Rgb {
        if self.luminance() > 0.5 {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let hex = raw.trim().trim_start_matches('#');
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("'{raw}' is not a hex color"));
        }
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return Err(format!("expected #rgb or #rrggbb, got '{raw}'")),
        };
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16).map_err(|err| format!("'{raw}': {err}"))
        };
        Ok(Self::new(parse(0..2)?, parse(2..4)?, parse(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.hex()
    }
}

/// How a domain is derived from the observed values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainMode {
    /// Smallest to largest observed value.
    #[default]
    MinMax,
    /// Lower bound pinned to zero, so values read as a share of the maximum.
    ZeroToMax,
}

/// `[min, max]` over the finite values of one matrix or series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleDomain {
    pub min: f64,
    pub max: f64,
    /// Number of finite values the bounds were computed from.
    pub samples: usize,
}

impl Default for ScaleDomain {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl ScaleDomain {
    pub const EMPTY: ScaleDomain = ScaleDomain {
        min: 0.0,
        max: 0.0,
        samples: 0,
    };

    /// Min/max over the finite values; NaN and infinities are ignored.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut domain = Self::EMPTY;
        for value in values.into_iter().filter(|v| v.is_finite()) {
            if domain.samples == 0 {
                domain.min = value;
                domain.max = value;
            } else {
                domain.min = domain.min.min(value);
                domain.max = domain.max.max(value);
            }
            domain.samples += 1;
        }
        domain
    }

    pub fn with_mode<I>(values: I, mode: DomainMode) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let domain = Self::from_values(values);
        match mode {
            DomainMode::MinMax => domain,
            DomainMode::ZeroToMax if domain.samples > 0 => Self {
                min: domain.min.min(0.0),
                ..domain
            },
            DomainMode::ZeroToMax => domain,
        }
    }

    /// A fixed reference range, independent of any data.
    pub fn fixed(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            samples: 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }

    /// Zero (or negative, or undefined) width: nothing to normalize against.
    pub fn is_degenerate(&self) -> bool {
        !(self.max - self.min > 0.0)
    }

    /// Position of `value` inside the domain, clamped to `[0, 1]`.
    ///
    /// Values outside the domain pin to the nearest end. Non-finite values and
    /// degenerate domains map to `0.0`; callers that need to tell those apart
    /// use [`ScaleDomain::ratio`].
    pub fn normalize(&self, value: f64) -> f64 {
        self.ratio(value).unwrap_or(0.0)
    }

    /// Like [`normalize`](Self::normalize), but `None` when there is no meaningful position.
    pub fn ratio(&self, value: f64) -> Option<f64> {
        if !value.is_finite() || self.is_degenerate() {
            return None;
        }
        let width = self.max - self.min;
        let ratio = if width.is_finite() {
            (value - self.min) / width
        } else {
            // Width overflows f64; halving every operand keeps it representable.
            (value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        };
        if ratio.is_nan() {
            return None;
        }
        Some(ratio.clamp(0.0, 1.0))
    }

    /// Inverse of `normalize`, used for legend ticks.
    pub fn value_at(&self, ratio: f64) -> f64 {
        let ratio = clamp_unit(ratio);
        let width = self.max - self.min;
        if width.is_finite() {
            self.min + width * ratio
        } else {
            self.min * (1.0 - ratio) + self.max * ratio
        }
    }
}

/// Continuous color ramp over `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColorRamp {
    /// Hue sweep at fixed saturation and lightness (degrees, then `[0, 1]`).
    Hue {
        from: f64,
        to: f64,
        saturation: f64,
        lightness: f64,
    },
    /// Two-stop channel blend.
    Linear { from: Rgb, to: Rgb },
    /// Three-stop channel blend through `mid` at 0.5.
    Diverging { low: Rgb, mid: Rgb, high: Rgb },
}

impl ColorRamp {
    fn sample(&self, t: f64) -> Rgb {
        match *self {
            ColorRamp::Hue {
                from,
                to,
                saturation,
                lightness,
            } => Rgb::from_hsl(from + (to - from) * t, saturation, lightness),
            ColorRamp::Linear { from, to } => from.lerp(to, t),
            ColorRamp::Diverging { low, mid, high } => {
                if t <= 0.5 {
                    low.lerp(mid, t * 2.0)
                } else {
                    mid.lerp(high, (t - 0.5) * 2.0)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleDirection {
    /// Ratio 0 takes the ramp's first stop.
    #[default]
    Ascending,
    /// Ratio 0 takes the ramp's last stop.
    Descending,
}

/// Background and text color of one rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub background: Rgb,
    pub text: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendStop {
    pub value: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScale {
    pub ramp: ColorRamp,
    pub direction: ScaleDirection,
    /// Background of cells without data (and of non-finite values).
    pub absent: Rgb,
    pub absent_text: Rgb,
    /// Used for every value when the domain is degenerate.
    pub degenerate: Rgb,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::heat()
    }
}

impl ColorScale {
    /// Green for short, red for long.
    pub fn heat() -> Self {
        Self {
            ramp: ColorRamp::Hue {
                from: 120.0,
                to: 0.0,
                saturation: 0.8,
                lightness: 0.5,
            },
            direction: ScaleDirection::Ascending,
            absent: Rgb::new(0xf3, 0xf4, 0xf6),
            absent_text: Rgb::BLACK,
            degenerate: Rgb::from_hsl(60.0, 0.8, 0.5),
        }
    }

    /// Blue for low, red for high.
    pub fn cool_to_warm() -> Self {
        Self {
            ramp: ColorRamp::Linear {
                from: Rgb::new(0x3b, 0x82, 0xf6),
                to: Rgb::new(0xef, 0x44, 0x44),
            },
            direction: ScaleDirection::Ascending,
            absent: Rgb::new(0xf3, 0xf4, 0xf6),
            absent_text: Rgb::BLACK,
            degenerate: Rgb::new(0x95, 0x63, 0x9d),
        }
    }

    /// Color at `ratio`; clamped to `[0, 1]`, NaN treated as 0.
    pub fn color_for(&self, ratio: f64) -> Rgb {
        let t = clamp_unit(ratio);
        let t = match self.direction {
            ScaleDirection::Ascending => t,
            ScaleDirection::Descending => 1.0 - t,
        };
        self.ramp.sample(t)
    }

    /// `(color_for(0), color_for(1))`.
    pub fn endpoints(&self) -> (Rgb, Rgb) {
        (self.color_for(0.0), self.color_for(1.0))
    }

    /// Color of a present value. Non-finite values take the neutral absent
    /// color; a degenerate domain takes the fixed fallback.
    pub fn color_for_value(&self, value: f64, domain: &ScaleDomain) -> Rgb {
        if !value.is_finite() {
            return self.absent;
        }
        match domain.ratio(value) {
            Some(ratio) => self.color_for(ratio),
            None => self.degenerate,
        }
    }

    pub fn cell_style(&self, value: Option<f64>, domain: &ScaleDomain) -> CellStyle {
        match value {
            Some(v) if v.is_finite() => {
                let background = self.color_for_value(v, domain);
                CellStyle {
                    background,
                    text: background.contrasting_text(),
                }
            }
            _ => CellStyle {
                background: self.absent,
                text: self.absent_text,
            },
        }
    }

    /// `stops` evenly spaced legend entries from `domain.min` to `domain.max`.
    /// Collapses to a single fallback entry on a degenerate domain.
    pub fn legend(&self, domain: &ScaleDomain, stops: usize) -> Vec<LegendStop> {
        if domain.is_empty() || stops == 0 {
            return Vec::new();
        }
        if domain.is_degenerate() {
            return vec![LegendStop {
                value: domain.min,
                color: self.degenerate,
            }];
        }
        let stops = stops.max(2);
        (0..stops)
            .map(|i| {
                let ratio = i as f64 / (stops - 1) as f64;
                LegendStop {
                    value: domain.value_at(ratio),
                    color: self.color_for(ratio),
                }
            })
            .collect()
    }
}

/// Linear size encoding (radius, bar length, …) between two bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeScale {
    pub min_size: f64,
    pub max_size: f64,
}

impl Default for SizeScale {
    fn default() -> Self {
        Self {
            min_size: 6.0,
            max_size: 28.0,
        }
    }
}

impl SizeScale {
    pub fn new(min_size: f64, max_size: f64) -> Self {
        Self { min_size, max_size }
    }

    pub fn size_for(&self, ratio: f64) -> f64 {
        self.min_size + (self.max_size - self.min_size) * clamp_unit(ratio)
    }

    /// Midpoint between the bounds; what every value gets on a degenerate domain.
    pub fn fallback(&self) -> f64 {
        (self.min_size + self.max_size) / 2.0
    }

    pub fn size_for_value(&self, value: f64, domain: &ScaleDomain) -> f64 {
        if !value.is_finite() {
            return self.min_size;
        }
        match domain.ratio(value) {
            Some(ratio) => self.size_for(ratio),
            None => self.fallback(),
        }
    }
}

/// `count` well separated categorical colors (pie slices, bar series).
pub fn palette(count: usize) -> Vec<Rgb> {
    const START_HUE: f64 = 215.0;
    (0..count)
        .map(|i| {
            let hue = START_HUE + 360.0 * i as f64 / count.max(1) as f64;
            let lightness = if i % 2 == 0 { 0.52 } else { 0.44 };
            Rgb::from_hsl(hue, 0.65, lightness)
        })
        .collect()
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_ignores_non_finite() {
        let domain = ScaleDomain::from_values([f64::NAN, 10.0, f64::INFINITY, 30.0, 20.0]);
        assert_eq!(domain.min, 10.0);
        assert_eq!(domain.max, 30.0);
        assert_eq!(domain.samples, 3);
    }

    #[test]
    fn normalize_matches_scenario() {
        let domain = ScaleDomain::from_values([10.0, 30.0, 20.0]);
        assert_eq!(domain.normalize(20.0), 0.5);
        assert_eq!(domain.normalize(10.0), 0.0);
        assert_eq!(domain.normalize(30.0), 1.0);
    }

    #[test]
    fn normalize_clamps_out_of_range() {
        let domain = ScaleDomain::from_values([10.0, 30.0]);
        assert_eq!(domain.normalize(-100.0), 0.0);
        assert_eq!(domain.normalize(1e9), 1.0);
        assert_eq!(domain.normalize(f64::NAN), 0.0);
    }

    #[test]
    fn widest_finite_domain_still_normalizes() {
        let domain = ScaleDomain::from_values([-f64::MAX, f64::MAX]);
        assert!(!domain.is_degenerate());
        assert_eq!(domain.normalize(f64::MAX), 1.0);
        assert_eq!(domain.normalize(-f64::MAX), 0.0);
        assert_eq!(domain.normalize(0.0), 0.5);
        assert_eq!(domain.value_at(0.5), 0.0);
        assert_eq!(domain.value_at(1.0), f64::MAX);

        let wide = ScaleDomain::from_values([-1e308, 1e308]);
        let scale = ColorScale::heat();
        assert_eq!(scale.color_for_value(1e308, &wide), scale.color_for(1.0));
        assert_ne!(scale.color_for_value(1e308, &wide), scale.degenerate);
        assert!(scale.legend(&wide, 5).iter().all(|stop| stop.value.is_finite()));
    }

    #[test]
    fn single_value_is_degenerate() {
        let domain = ScaleDomain::from_values([5.0]);
        assert!(domain.is_degenerate());
        assert!(!domain.is_empty());
        assert_eq!(domain.ratio(5.0), None);

        let scale = ColorScale::heat();
        assert_eq!(scale.color_for_value(5.0, &domain), scale.degenerate);
    }

    #[test]
    fn empty_domain_is_degenerate() {
        let domain = ScaleDomain::from_values(std::iter::empty());
        assert!(domain.is_empty());
        assert!(domain.is_degenerate());
        assert_eq!(SizeScale::default().size_for_value(3.0, &domain), SizeScale::default().fallback());
    }

    #[test]
    fn zero_to_max_pins_lower_bound() {
        let domain = ScaleDomain::with_mode([10.0, 30.0], DomainMode::ZeroToMax);
        assert_eq!(domain.min, 0.0);
        assert_eq!(domain.normalize(15.0), 0.5);

        let single = ScaleDomain::with_mode([5.0], DomainMode::ZeroToMax);
        assert!(!single.is_degenerate());
        assert_eq!(single.normalize(5.0), 1.0);
    }

    #[test]
    fn heat_endpoints_are_green_and_red() {
        let (low, high) = ColorScale::heat().endpoints();
        assert_eq!(low, Rgb::from_hsl(120.0, 0.8, 0.5));
        assert_eq!(high, Rgb::from_hsl(0.0, 0.8, 0.5));
        assert!(low.g > low.r);
        assert!(high.r > high.g);
    }

    #[test]
    fn descending_swaps_endpoints() {
        let mut scale = ColorScale::heat();
        let (low, high) = scale.endpoints();
        scale.direction = ScaleDirection::Descending;
        assert_eq!(scale.endpoints(), (high, low));
    }

    #[test]
    fn diverging_passes_through_mid() {
        let ramp = ColorRamp::Diverging {
            low: Rgb::new(0, 0, 255),
            mid: Rgb::WHITE,
            high: Rgb::new(255, 0, 0),
        };
        let scale = ColorScale {
            ramp,
            ..ColorScale::heat()
        };
        assert_eq!(scale.color_for(0.5), Rgb::WHITE);
        assert_eq!(scale.color_for(1.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn absent_and_non_finite_cells_are_neutral() {
        let scale = ColorScale::heat();
        let domain = ScaleDomain::from_values([1.0, 2.0]);
        let absent = scale.cell_style(None, &domain);
        assert_eq!(absent.background, Rgb::new(0xf3, 0xf4, 0xf6));
        assert_eq!(absent.text, Rgb::BLACK);
        assert_eq!(scale.cell_style(Some(f64::NAN), &domain), absent);
    }

    #[test]
    fn size_interpolates_between_bounds() {
        let sizes = SizeScale::new(4.0, 20.0);
        let domain = ScaleDomain::from_values([0.0, 100.0]);
        assert_eq!(sizes.size_for_value(0.0, &domain), 4.0);
        assert_eq!(sizes.size_for_value(50.0, &domain), 12.0);
        assert_eq!(sizes.size_for_value(100.0, &domain), 20.0);
        assert_eq!(sizes.size_for_value(f64::NAN, &domain), 4.0);
    }

    #[test]
    fn legend_spans_domain() {
        let scale = ColorScale::heat();
        let domain = ScaleDomain::from_values([10.0, 30.0]);
        let legend = scale.legend(&domain, 3);
        assert_eq!(legend.len(), 3);
        assert_eq!(legend[1].value, 20.0);
        assert_eq!(legend[2].color, scale.color_for(1.0));
        assert_eq!(scale.legend(&ScaleDomain::from_values([4.0]), 5).len(), 1);
        assert!(scale.legend(&ScaleDomain::EMPTY, 5).is_empty());
    }

    #[test]
    fn hex_round_trips_through_config() {
        let color: Rgb = "#f3f4f6".parse().unwrap();
        assert_eq!(color, Rgb::new(0xf3, 0xf4, 0xf6));
        assert_eq!("#fff".parse::<Rgb>().unwrap(), Rgb::WHITE);
        assert!("#12".parse::<Rgb>().is_err());

        let scale: ColorScale =
            serde_json::from_str(r##"{"absent": "#ffffff", "direction": "descending"}"##).unwrap();
        assert_eq!(scale.absent, Rgb::WHITE);
        assert_eq!(scale.direction, ScaleDirection::Descending);
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!("aé123".parse::<Rgb>().is_err());
        assert!("#ééé".parse::<Rgb>().is_err());
        assert!("+a+b+c".parse::<Rgb>().is_err());
        assert!("#12345g".parse::<Rgb>().is_err());

        let bad = serde_json::from_str::<ColorScale>(r#"{"absent": "aé123"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn palette_colors_are_distinct() {
        let colors = palette(6);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn contrast_picks_readable_text() {
        assert_eq!(Rgb::WHITE.contrasting_text(), Rgb::BLACK);
        assert_eq!(Rgb::BLACK.contrasting_text(), Rgb::WHITE);
    }
}
