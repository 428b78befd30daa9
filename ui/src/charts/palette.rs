//! Chart colors.

pub const GREEN: &str = "#008000";
pub const GRAY: &str = "#808080";
pub const ORANGE: &str = "#ffa500";
pub const PURPLE: &str = "#800080";

/// Soft categorical palette used by the box plot.
pub const PASTEL: [&str; 10] = [
    "#a1c9f4", "#ffb482", "#8de5a1", "#ff9f9b", "#d0bbff", "#debb9b", "#fab0e4", "#cfcfcf",
    "#fffea3", "#b9f2f0",
];

/// Default categorical palette used for hue encodings.
pub const DEEP: [&str; 10] = [
    "#4c72b0", "#dd8452", "#55a868", "#c44e52", "#8172b3", "#937860", "#da8bc3", "#8c8c8c",
    "#ccb974", "#64b5cd",
];

const COOLWARM: [(f64, [f64; 3]); 3] = [
    (0.0, [59.0, 76.0, 192.0]),
    (0.5, [221.0, 221.0, 221.0]),
    (1.0, [180.0, 4.0, 38.0]),
];

pub fn cycle(palette: &[&str], index: usize) -> String {
    if palette.is_empty() {
        return GRAY.to_string();
    }
    palette[index % palette.len()].to_string()
}

/// `count` colors sampled evenly from a blue-gray-red diverging map, excluding the extremes.
pub fn coolwarm(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let t = (i + 1) as f64 / (count + 1) as f64;
            to_hex(sample_coolwarm(t))
        })
        .collect()
}

fn sample_coolwarm(t: f64) -> [f64; 3] {
    let t = t.clamp(0.0, 1.0);
    for window in COOLWARM.windows(2) {
        let (t0, c0) = window[0];
        let (t1, c1) = window[1];
        if t <= t1 {
            let w = (t - t0) / (t1 - t0);
            return [
                c0[0] + (c1[0] - c0[0]) * w,
                c0[1] + (c1[1] - c0[1]) * w,
                c0[2] + (c1[2] - c0[2]) * w,
            ];
        }
    }
    COOLWARM[COOLWARM.len() - 1].1
}

fn to_hex(rgb: [f64; 3]) -> String {
    let [r, g, b] = rgb.map(|c| c.round().clamp(0.0, 255.0) as u8);
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coolwarm_runs_blue_to_red() {
        let colors = coolwarm(3);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[1], "#dddddd");
        assert!(colors[0].starts_with("#8"));
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn cycle_wraps() {
        assert_eq!(cycle(&DEEP, 10), DEEP[0]);
        assert_eq!(cycle(&[], 3), GRAY);
    }
}
