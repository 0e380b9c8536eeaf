//! Half-block icon rendering
//!
//! Each terminal cell shows two image rows: an upper half block (▀) whose
//! foreground is the averaged top pixel region and whose background is the
//! averaged bottom region.

use image::DynamicImage;
use ratatui::prelude::*;

/// Render an icon into styled lines filling a `target_w` x `target_h` cell area
pub fn icon_lines(image: &DynamicImage, target_w: u16, target_h: u16) -> Vec<Line<'static>> {
    if target_w == 0 || target_h == 0 {
        return Vec::new();
    }
    let rgb = image.to_rgb8();
    let (img_w, img_h) = (rgb.width(), rgb.height());
    if img_w == 0 || img_h == 0 {
        return Vec::new();
    }
    let pixels: Vec<(u8, u8, u8)> = rgb.pixels().map(|p| (p[0], p[1], p[2])).collect();

    let out_w = u32::from(target_w);
    // Two pixel rows per terminal row
    let out_h = u32::from(target_h) * 2;

    let mut lines = Vec::with_capacity(target_h as usize);
    for row in 0..u32::from(target_h) {
        let mut spans = Vec::with_capacity(out_w as usize);
        for col in 0..out_w {
            let x0 = col * img_w / out_w;
            let x1 = (col + 1) * img_w / out_w;
            let top_y0 = (row * 2) * img_h / out_h;
            let top_y1 = (row * 2 + 1) * img_h / out_h;
            let bot_y0 = top_y1;
            let bot_y1 = (row * 2 + 2) * img_h / out_h;
            let (r1, g1, b1) = area_average(&pixels, img_w, img_h, x0, x1, top_y0, top_y1);
            let (r2, g2, b2) = area_average(&pixels, img_w, img_h, x0, x1, bot_y0, bot_y1);
            spans.push(Span::styled(
                "\u{2580}",
                Style::default()
                    .fg(Color::Rgb(r1, g1, b1))
                    .bg(Color::Rgb(r2, g2, b2)),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Average color of a rectangular pixel region, clamped to the image bounds
fn area_average(
    pixels: &[(u8, u8, u8)],
    img_w: u32,
    img_h: u32,
    x_start: u32,
    x_end: u32,
    y_start: u32,
    y_end: u32,
) -> (u8, u8, u8) {
    if pixels.is_empty() {
        return (0, 0, 0);
    }
    let x_start = x_start.min(img_w - 1);
    let x_end = x_end.clamp(x_start + 1, img_w);
    let y_start = y_start.min(img_h - 1);
    let y_end = y_end.clamp(y_start + 1, img_h);

    let (mut r_sum, mut g_sum, mut b_sum, mut count) = (0u32, 0u32, 0u32, 0u32);
    for y in y_start..y_end {
        for x in x_start..x_end {
            if let Some(&(r, g, b)) = pixels.get((y * img_w + x) as usize) {
                r_sum += u32::from(r);
                g_sum += u32::from(g);
                b_sum += u32::from(b);
                count += 1;
            }
        }
    }
    if count == 0 {
        return (0, 0, 0);
    }
    (
        (r_sum / count) as u8,
        (g_sum / count) as u8,
        (b_sum / count) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn checker() -> DynamicImage {
        // 2x2: red/green over blue/white
        let raw = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        DynamicImage::ImageRgb8(RgbImage::from_raw(2, 2, raw).unwrap())
    }

    #[test]
    fn test_icon_lines_shape() {
        let lines = icon_lines(&checker(), 2, 1);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans.len(), 2);
        assert_eq!(lines[0].spans[0].content, "\u{2580}");
    }

    #[test]
    fn test_icon_lines_colors_map_top_and_bottom() {
        let lines = icon_lines(&checker(), 2, 1);
        let style = lines[0].spans[0].style;
        assert_eq!(style.fg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(style.bg, Some(Color::Rgb(0, 0, 255)));
    }

    #[test]
    fn test_zero_target_yields_no_lines() {
        assert!(icon_lines(&checker(), 0, 4).is_empty());
        assert!(icon_lines(&checker(), 4, 0).is_empty());
    }
}
