//! BoardView: maps a `BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board is shown top-down: world X runs across columns, world Z down
//! rows, and height above the floor dims a piece's color so falling pieces
//! read as "not landed yet".

use clusterfall_core::snapshot::BoardSnapshot;
use clusterfall_core::BoardPhase;
use clusterfall_types::{PieceColor, Shape, Vec3, BOARD_HALF_EXTENT, PIECE_RADIUS};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Grid cells per side of the top-down board view.
///
/// One cell per board unit; must stay in sync with `BOARD_HALF_EXTENT`.
const GRID_CELLS: u16 = 8;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the board.
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers keep one framebuffer across frames and only pay a resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &BoardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let board_px_w = GRID_CELLS * self.cell_w;
        let board_px_h = GRID_CELLS * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        // Board on the left, panel to its right; the pair sits centered.
        let panel_w: u16 = 22;
        let total_w = frame_w + 2 + panel_w;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let floor = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(28, 28, 36),
            bold: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', floor);
        for cy in 0..GRID_CELLS {
            for cx in 0..GRID_CELLS {
                self.fill_cell(fb, start_x, start_y, cx, cy, '·', floor);
            }
        }
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for view in &snap.pieces {
            let Some((cx, cy)) = world_to_cell(view.position) else {
                continue;
            };
            let height = (view.position.y - PIECE_RADIUS).max(0.0);
            let brightness = 1.0 - (height / 12.0).clamp(0.0, 0.6);
            let style = CellStyle {
                fg: color_rgb(view.piece.color).scaled(brightness),
                bg: floor.bg,
                bold: height < 0.1,
            };
            self.fill_cell(fb, start_x, start_y, cx, cy, shape_glyph(view.piece.shape), style);
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.phase == BoardPhase::GameOver {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &BoardSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MISSION", label);
        y = y.saturating_add(1);
        let mission_style = CellStyle {
            fg: color_rgb(snap.mission.target_color),
            ..CellStyle::default()
        };
        fb.put_str(panel_x, y, &snap.mission.describe(), mission_style);
        y = y.saturating_add(1);
        self.draw_time_bar(fb, snap, panel_x, y, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let (shape, color) = snap.preview;
        let preview_style = CellStyle {
            fg: color_rgb(color),
            bold: true,
            ..CellStyle::default()
        };
        fb.put_char(panel_x, y, shape_glyph(shape), preview_style);
        fb.put_str(panel_x + 2, y, color.as_str(), value);
        fb.put_str(panel_x + 2 + color.as_str().len() as u16 + 1, y, shape.as_str(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PIECES", label);
        y = y.saturating_add(1);
        for shape in Shape::ALL {
            if y >= viewport.height {
                break;
            }
            fb.put_char(panel_x, y, shape_glyph(shape), value);
            fb.put_str(panel_x + 2, y, shape.as_str(), value);
            fb.put_u32(panel_x + 12, y, snap.counts[shape.index()], value);
            y = y.saturating_add(1);
        }
    }

    fn draw_time_bar(
        &self,
        fb: &mut FrameBuffer,
        snap: &BoardSnapshot,
        x: u16,
        y: u16,
        value: CellStyle,
    ) {
        const BAR_W: u16 = 12;
        let duration = snap.mission.duration_secs.max(1.0);
        let fraction = (snap.time_left / duration).clamp(0.0, 1.0);
        let filled = (fraction * BAR_W as f32).round() as u16;

        // Bar goes amber once time runs short.
        let bar_color = if fraction < 0.25 {
            Rgb::new(240, 160, 60)
        } else {
            Rgb::new(120, 200, 140)
        };
        let bar = CellStyle {
            fg: bar_color,
            ..CellStyle::default()
        };

        for i in 0..BAR_W {
            let ch = if i < filled { '█' } else { '░' };
            fb.put_char(x + i, y, ch, bar);
        }
        fb.put_u32(x + BAR_W + 1, y, snap.time_left.ceil() as u32, value);
        fb.put_char(x + BAR_W + 1 + digits(snap.time_left.ceil() as u32), y, 's', value);
    }
}

/// Map a world position onto the top-down grid; None outside the footprint.
fn world_to_cell(position: Vec3) -> Option<(u16, u16)> {
    let fx = position.x + BOARD_HALF_EXTENT;
    let fz = position.z + BOARD_HALF_EXTENT;
    if fx < 0.0 || fz < 0.0 {
        return None;
    }
    let cx = fx as u16;
    let cz = fz as u16;
    if cx >= GRID_CELLS || cz >= GRID_CELLS {
        return None;
    }
    Some((cx, cz))
}

fn shape_glyph(shape: Shape) -> char {
    match shape {
        Shape::Cube => '█',
        Shape::Cylinder => '▓',
        Shape::Capsule => '▒',
        Shape::Sphere => '●',
    }
}

fn color_rgb(color: PieceColor) -> Rgb {
    match color {
        PieceColor::Red => Rgb::new(220, 80, 80),
        PieceColor::Green => Rgb::new(100, 220, 120),
        PieceColor::Blue => Rgb::new(90, 130, 230),
    }
}

fn digits(value: u32) -> u16 {
    let mut n = value;
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let mid_y = y.saturating_add(h / 2);
    let text_w = text.chars().count() as u16;
    let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
    let style = CellStyle {
        fg: Rgb::new(255, 255, 255),
        bold: true,
        ..CellStyle::default()
    };
    fb.put_str(tx, mid_y, text, style);
}
