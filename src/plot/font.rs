//! Minimal stroke font for axis text.
//!
//! Glyphs live on a 4x6 grid with y pointing up from the baseline. Lowercase
//! letters are drawn with their uppercase glyph.

type Stroke = &'static [(u8, u8)];

const GLYPH_WIDTH: f32 = 4.0;
const GLYPH_HEIGHT: f32 = 6.0;
const ADVANCE: f32 = 6.0;

const BOX: &[(u8, u8)] = &[(0, 0), (4, 0), (4, 6), (0, 6), (0, 0)];

fn glyph(c: char) -> &'static [Stroke] {
    match c.to_ascii_uppercase() {
        ' ' => &[],
        '0' | 'O' => &[BOX],
        '1' => &[&[(1, 5), (2, 6), (2, 0)], &[(1, 0), (3, 0)]],
        '2' => &[&[(0, 6), (4, 6), (4, 3), (0, 3), (0, 0), (4, 0)]],
        '3' => &[&[(0, 6), (4, 6), (4, 0), (0, 0)], &[(0, 3), (4, 3)]],
        '4' => &[&[(0, 6), (0, 3), (4, 3)], &[(4, 6), (4, 0)]],
        '5' | 'S' => &[&[(4, 6), (0, 6), (0, 3), (4, 3), (4, 0), (0, 0)]],
        '6' => &[&[(4, 6), (0, 6), (0, 0), (4, 0), (4, 3), (0, 3)]],
        '7' => &[&[(0, 6), (4, 6), (4, 0)]],
        '8' => &[BOX, &[(0, 3), (4, 3)]],
        '9' => &[&[(4, 3), (0, 3), (0, 6), (4, 6), (4, 0), (0, 0)]],
        '-' => &[&[(1, 3), (3, 3)]],
        '+' => &[&[(1, 3), (3, 3)], &[(2, 2), (2, 4)]],
        '.' => &[&[(2, 0), (2, 1)]],
        'A' => &[&[(0, 0), (0, 4), (2, 6), (4, 4), (4, 0)], &[(0, 3), (4, 3)]],
        'B' => &[
            &[(0, 0), (0, 6), (3, 6), (4, 5), (4, 4), (3, 3), (0, 3)],
            &[(3, 3), (4, 2), (4, 1), (3, 0), (0, 0)],
        ],
        'C' => &[&[(4, 6), (0, 6), (0, 0), (4, 0)]],
        'D' => &[&[(0, 0), (0, 6), (3, 6), (4, 5), (4, 1), (3, 0), (0, 0)]],
        'E' => &[&[(4, 6), (0, 6), (0, 0), (4, 0)], &[(0, 3), (3, 3)]],
        'F' => &[&[(4, 6), (0, 6), (0, 0)], &[(0, 3), (3, 3)]],
        'G' => &[&[(4, 6), (0, 6), (0, 0), (4, 0), (4, 3), (2, 3)]],
        'H' => &[&[(0, 0), (0, 6)], &[(4, 0), (4, 6)], &[(0, 3), (4, 3)]],
        'I' => &[&[(1, 6), (3, 6)], &[(2, 6), (2, 0)], &[(1, 0), (3, 0)]],
        'J' => &[&[(4, 6), (4, 0), (0, 0), (0, 2)]],
        'K' => &[&[(0, 0), (0, 6)], &[(4, 6), (0, 3), (4, 0)]],
        'L' => &[&[(0, 6), (0, 0), (4, 0)]],
        'M' => &[&[(0, 0), (0, 6), (2, 3), (4, 6), (4, 0)]],
        'N' => &[&[(0, 0), (0, 6), (4, 0), (4, 6)]],
        'P' => &[&[(0, 0), (0, 6), (4, 6), (4, 3), (0, 3)]],
        'Q' => &[BOX, &[(2, 2), (4, 0)]],
        'R' => &[&[(0, 0), (0, 6), (4, 6), (4, 3), (0, 3)], &[(1, 3), (4, 0)]],
        'T' => &[&[(0, 6), (4, 6)], &[(2, 6), (2, 0)]],
        'U' => &[&[(0, 6), (0, 0), (4, 0), (4, 6)]],
        'V' => &[&[(0, 6), (2, 0), (4, 6)]],
        'W' => &[&[(0, 6), (1, 0), (2, 3), (3, 0), (4, 6)]],
        'X' => &[&[(0, 0), (4, 6)], &[(0, 6), (4, 0)]],
        'Y' => &[&[(0, 6), (2, 3), (4, 6)], &[(2, 3), (2, 0)]],
        'Z' => &[&[(0, 6), (4, 6), (0, 0), (4, 0)]],
        _ => &[&[(0, 5), (1, 6), (3, 6), (4, 5), (4, 4), (2, 3), (2, 2)], &[(2, 0), (2, 1)]],
    }
}

/// Width in pixels of `text` drawn `height` pixels tall.
pub fn text_width(text: &str, height: f32) -> f32 {
    let n = text.chars().count();
    if n == 0 {
        return 0.0;
    }
    let scale = height / GLYPH_HEIGHT;
    ((n - 1) as f32 * ADVANCE + GLYPH_WIDTH) * scale
}

/// Line segments in screen space (y down) for `text` centered on `center`.
pub fn text_segments(text: &str, center: (f32, f32), height: f32) -> Vec<((f32, f32), (f32, f32))> {
    let scale = height / GLYPH_HEIGHT;
    let left = center.0 - text_width(text, height) * 0.5;
    let baseline = center.1 + height * 0.5;

    let mut segments = Vec::new();
    for (i, c) in text.chars().enumerate() {
        let origin_x = left + i as f32 * ADVANCE * scale;
        let to_screen =
            |(gx, gy): (u8, u8)| (origin_x + gx as f32 * scale, baseline - gy as f32 * scale);

        for stroke in glyph(c) {
            for pair in stroke.windows(2) {
                segments.push((to_screen(pair[0]), to_screen(pair[1])));
            }
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 12.0), 0.0);
        assert_eq!(text_width("X", 12.0), 8.0);
        assert_eq!(text_width("XY", 12.0), 20.0);
    }

    #[test]
    fn test_segments_are_centered() {
        let segments = text_segments("X", (50.0, 50.0), 12.0);
        assert_eq!(segments.len(), 2);

        let xs: Vec<f32> = segments.iter().flat_map(|(a, b)| [a.0, b.0]).collect();
        let ys: Vec<f32> = segments.iter().flat_map(|(a, b)| [a.1, b.1]).collect();
        let min_x = xs.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_x = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let min_y = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_y = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);

        assert_eq!((min_x + max_x) * 0.5, 50.0);
        assert_eq!((min_y + max_y) * 0.5, 50.0);
        assert_eq!(max_y - min_y, 12.0);
    }

    #[test]
    fn test_space_and_lowercase() {
        assert!(text_segments(" ", (0.0, 0.0), 10.0).is_empty());
        assert_eq!(
            text_segments("z", (0.0, 0.0), 10.0),
            text_segments("Z", (0.0, 0.0), 10.0)
        );
    }
}
