use crate::constants::{EMPTY_WHEEL_BACKGROUND, EXTRA_TURNS, LABEL_MAX_CHARS, MIN_OPTIONS_TO_SPIN, PALETTE};

/// Angular slice of the wheel assigned to one option.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
    pub label_angle: f64,
    pub label: String,
}

/// Width of each segment in degrees. An empty wheel is treated as a single segment.
pub fn segment_angle(option_count: usize) -> f64 {
    360.0 / option_count.max(1) as f64
}

/// Angle of the midpoint of segment `index`, measured from the wheel's zero reference.
pub fn winning_middle_angle(index: usize, option_count: usize) -> f64 {
    let segment = segment_angle(option_count);
    index as f64 * segment + segment / 2.0
}

/// Rotation that puts the midpoint of segment `index` under the top pointer.
pub fn base_rotation(index: usize, option_count: usize) -> f64 {
    360.0 - winning_middle_angle(index, option_count)
}

/// Next resting rotation. Drops the partial turn of `previous`, adds the extra
/// full turns, then the base rotation, so the result is always ahead of `previous`.
pub fn next_rotation(previous: f64, index: usize, option_count: usize) -> f64 {
    (previous - previous % 360.0) + f64::from(EXTRA_TURNS) * 360.0 + base_rotation(index, option_count)
}

pub fn segment_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Label shown on the wheel, cut to `LABEL_MAX_CHARS` characters plus an ellipsis.
pub fn display_label(text: &str) -> String {
    if text.chars().count() > LABEL_MAX_CHARS {
        let head: String = text.chars().take(LABEL_MAX_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

pub fn segments<'a, I>(options: I) -> Vec<Segment>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: ExactSizeIterator,
{
    let options = options.into_iter();
    let angle = segment_angle(options.len());

    options
        .enumerate()
        .map(|(index, text)| Segment {
            index,
            start_angle: index as f64 * angle,
            end_angle: (index + 1) as f64 * angle,
            color: segment_color(index),
            label_angle: index as f64 * angle + angle / 2.0,
            label: display_label(text),
        })
        .collect()
}

/// CSS background for the wheel disc.
pub fn wheel_background(segments: &[Segment]) -> String {
    if segments.len() < MIN_OPTIONS_TO_SPIN {
        return EMPTY_WHEEL_BACKGROUND.to_string();
    }

    let stops = segments
        .iter()
        .map(|s| format!("{} {}deg {}deg", s.color, s.start_angle, s.end_angle))
        .collect::<Vec<_>>()
        .join(", ");
    format!("conic-gradient(from 0deg, {})", stops)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_option_example() {
        assert_eq!(segment_angle(2), 180.0);
        assert_eq!(winning_middle_angle(1, 2), 270.0);
        assert_eq!(base_rotation(1, 2), 90.0);
        assert_eq!(next_rotation(0.0, 1, 2), 2970.0);
    }

    #[test]
    fn test_next_rotation_discards_partial_turn() {
        // 2970 rests 90 degrees past 2880; the next spin starts from 2880.
        let next = next_rotation(2970.0, 0, 2);
        assert_eq!(next, 2880.0 + 2880.0 + 270.0);
    }

    #[test]
    fn test_next_rotation_always_moves_forward_and_lands_on_target() {
        let mut previous = 0.0;
        for count in 2..=12 {
            for index in 0..count {
                let next = next_rotation(previous, index, count);
                assert!(next > previous);
                let landed = next % 360.0;
                let expected = base_rotation(index, count) % 360.0;
                assert!((landed - expected).abs() < 1e-9);
                previous = next;
            }
        }
    }

    #[test]
    fn test_segment_angle_with_no_options() {
        assert_eq!(segment_angle(0), 360.0);
    }

    #[test]
    fn test_segment_color_cycles_palette() {
        assert_eq!(segment_color(0), "#FF6B6B");
        assert_eq!(segment_color(9), "#E07A5F");
        assert_eq!(segment_color(10), "#FF6B6B");
        assert_eq!(segment_color(23), PALETTE[3]);
    }

    #[test]
    fn test_display_label_truncates_long_text() {
        assert_eq!(display_label("Short"), "Short");
        assert_eq!(display_label("Exactly12chr"), "Exactly12chr");
        assert_eq!(display_label("Thirteen char"), "Thirteen cha...");
        assert_eq!(display_label("ééééééééééééé"), "éééééééééééé...");
    }

    #[test]
    fn test_segments_layout() {
        let segs = segments(["A", "B", "C", "D"]);
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[2].start_angle, 180.0);
        assert_eq!(segs[2].end_angle, 270.0);
        assert_eq!(segs[2].label_angle, 225.0);
        assert_eq!(segs[3].color, PALETTE[3]);
    }

    #[test]
    fn test_wheel_background() {
        assert_eq!(wheel_background(&segments(["Only"])), EMPTY_WHEEL_BACKGROUND);
        assert_eq!(wheel_background(&[]), EMPTY_WHEEL_BACKGROUND);
        assert_eq!(
            wheel_background(&segments(["Pizza", "Tacos"])),
            "conic-gradient(from 0deg, #FF6B6B 0deg 180deg, #4ECDC4 180deg 360deg)"
        );
    }
}
