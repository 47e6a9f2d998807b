//! Raster rendering of graph layouts.
//!
//! A terminal sink for solved states: edges as red line segments,
//! vertices as black labels from an embedded 5x7 glyph set. Nothing in
//! here feeds back into the search.

use crate::problems::GraphLayout;
use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const EDGE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const LABEL_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Draws the graph at the given state into an image file.
///
/// The format follows the file extension (`.png`, `.gif`, ...). Labels
/// are drawn at each vertex position; characters outside `A-Z0-9` are
/// skipped.
///
/// # Examples
///
/// ```no_run
/// use quench::problem::Problem;
/// use quench::problems::GraphLayout;
/// use quench::render::draw_layout;
///
/// let layout = GraphLayout::new(
///     vec!["A".into(), "B".into()],
///     vec![(0, 1)],
///     400,
/// )
/// .unwrap();
/// let mut rng = rand::rng();
/// let state = layout.random_state(&mut rng);
/// draw_layout(&layout, &state, "graph.png").unwrap();
/// ```
pub fn draw_layout(
    layout: &GraphLayout,
    state: &[i32],
    path: impl AsRef<Path>,
) -> image::ImageResult<()> {
    let dim = layout.dim() as u32;
    let mut canvas: RgbImage = ImageBuffer::from_pixel(dim, dim, BACKGROUND);

    for &(a, b) in layout.edges() {
        let pa = layout.position(state, a);
        let pb = layout.position(state, b);
        draw_line(&mut canvas, pa, pb, EDGE_COLOR);
    }
    for (v, label) in layout.labels().iter().enumerate() {
        let (x, y) = layout.position(state, v);
        draw_text(&mut canvas, x, y, label, LABEL_COLOR);
    }

    canvas.save(path)
}

/// Bresenham line between two points, clipped to the canvas.
fn draw_line(canvas: &mut RgbImage, from: (i32, i32), to: (i32, i32), color: Rgb<u8>) {
    let (mut x, mut y) = from;
    let (x1, y1) = to;
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put_pixel(canvas, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += sx;
        }
        if doubled <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn draw_text(canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
    let mut cursor = x;
    for c in text.chars() {
        if let Some(rows) = glyph(c.to_ascii_uppercase()) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..5 {
                    if bits & (0x10 >> col) != 0 {
                        put_pixel(canvas, cursor + col, y + row as i32, color);
                    }
                }
            }
        }
        cursor += 6;
    }
}

fn put_pixel(canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

/// 5x7 bitmap for `A-Z` and `0-9`; each row holds 5 bits, leftmost in
/// bit 4.
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_endpoints_are_painted() {
        let mut canvas: RgbImage = ImageBuffer::from_pixel(50, 50, BACKGROUND);
        draw_line(&mut canvas, (5, 5), (40, 30), EDGE_COLOR);
        assert_eq!(*canvas.get_pixel(5, 5), EDGE_COLOR);
        assert_eq!(*canvas.get_pixel(40, 30), EDGE_COLOR);
    }

    #[test]
    fn test_line_clips_outside_canvas() {
        // Must not panic when a segment leaves the canvas.
        let mut canvas: RgbImage = ImageBuffer::from_pixel(20, 20, BACKGROUND);
        draw_line(&mut canvas, (-10, -10), (40, 40), EDGE_COLOR);
        assert_eq!(*canvas.get_pixel(10, 10), EDGE_COLOR);
    }

    #[test]
    fn test_text_paints_known_glyphs_only() {
        let mut canvas: RgbImage = ImageBuffer::from_pixel(40, 20, BACKGROUND);
        draw_text(&mut canvas, 2, 2, "A?", LABEL_COLOR);

        // 'A' leaves some ink; '?' has no glyph and leaves none.
        let inked = canvas.pixels().filter(|&&p| p == LABEL_COLOR).count();
        assert!(inked > 0);
        let right_half_inked = (8..40)
            .flat_map(|x| (0..20).map(move |y| (x, y)))
            .filter(|&(x, y)| *canvas.get_pixel(x, y) == LABEL_COLOR)
            .count();
        assert_eq!(right_half_inked, 0);
    }

    #[test]
    fn test_glyph_coverage() {
        for c in ('A'..='Z').chain('0'..='9') {
            assert!(glyph(c).is_some(), "missing glyph for {c}");
        }
        assert!(glyph('?').is_none());
    }
}
