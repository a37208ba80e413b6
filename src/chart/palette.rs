//! Named colour palettes and colormaps used by the builders.

/// Seaborn's "muted" qualitative palette.
const MUTED: &[&str] = &[
    "#4878d0", "#ee854a", "#6acc64", "#d65f5f", "#956cb4", "#8c613c", "#dc7ec0", "#797979",
    "#d5bb67", "#82c6e2",
];

/// Anchor colours of the viridis colormap at 0, 0.25, 0.5, 0.75 and 1.
const VIRIDIS: &[(u8, u8, u8)] = &[
    (0x44, 0x01, 0x54),
    (0x3b, 0x52, 0x8b),
    (0x21, 0x91, 0x8c),
    (0x5e, 0xc9, 0x62),
    (0xfd, 0xe7, 0x25),
];

/// Anchor colours of the diverging coolwarm colormap at 0, 0.5 and 1.
const COOLWARM: &[(u8, u8, u8)] = &[(0x3b, 0x4c, 0xc0), (0xdd, 0xdd, 0xdd), (0xb4, 0x04, 0x26)];

/// Colormaps that can be sampled continuously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    Viridis,
    Coolwarm,
}

impl Colormap {
    pub fn name(self) -> &'static str {
        match self {
            Colormap::Viridis => "viridis",
            Colormap::Coolwarm => "coolwarm",
        }
    }

    /// Colour at `t` in `0.0..=1.0` (clamped) as `#rrggbb`.
    pub fn sample(self, t: f64) -> String {
        let stops = match self {
            Colormap::Viridis => VIRIDIS,
            Colormap::Coolwarm => COOLWARM,
        };
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let scaled = t * (stops.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(stops.len() - 2);
        let frac = scaled - lower as f64;
        let (a, b) = (stops[lower], stops[lower + 1]);
        let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
        hex(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
    }

    /// `n` evenly spaced colours, as seaborn draws a discrete palette from a
    /// colormap.
    pub fn discrete(self, n: usize) -> Vec<String> {
        (0..n)
            .map(|i| self.sample((i as f64 + 0.5) / n as f64))
            .collect()
    }
}

/// `n` colours from the muted palette, cycling when `n` exceeds its size.
pub fn muted(n: usize) -> Vec<String> {
    MUTED.iter().cycle().take(n).map(|c| c.to_string()).collect()
}

fn hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colormap_endpoints() {
        assert_eq!(Colormap::Viridis.sample(0.0), "#440154");
        assert_eq!(Colormap::Viridis.sample(1.0), "#fde725");
        assert_eq!(Colormap::Coolwarm.sample(0.5), "#dddddd");
        assert_eq!(Colormap::Coolwarm.sample(7.0), "#b40426");
    }

    #[test]
    fn test_discrete_and_muted_lengths() {
        assert_eq!(Colormap::Viridis.discrete(20).len(), 20);
        assert!(Colormap::Viridis.discrete(0).is_empty());
        let colors = muted(12);
        assert_eq!(colors.len(), 12);
        assert_eq!(colors[10], colors[0]);
    }
}
