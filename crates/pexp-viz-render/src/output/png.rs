use resvg::{tiny_skia, usvg};

use crate::RenderError;

/// Convert SVG string to PNG bytes at the given DPI.
///
/// Text is resolved against the system font database.
pub fn svg_to_png(svg: &str, dpi: u32) -> crate::Result<Vec<u8>> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| RenderError::Png(e.to_string()))?;

    let scale = dpi as f32 / 72.0;
    let size = tree.size();
    let w = (size.width() * scale) as u32;
    let h = (size.height() * scale) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(w, h)
        .ok_or_else(|| RenderError::Png("failed to create pixmap".into()))?;

    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    pixmap.encode_png().map_err(|e| RenderError::Png(e.to_string()))
}
