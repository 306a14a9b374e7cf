//! GameView: maps a game snapshot and its grid tree into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{format_fixed2, GameSnapshot, GridNode, StatsDisplay};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
use crate::types::{GridSize, Phase, TargetPosition, MENU_GRID_SIZES};

/// Width of the score panel to the right of the play area.
const PANEL_W: u16 = 18;
/// Narrowest play area that still gets a side panel.
const MIN_PLAY_W: u16 = 20;

const BACKDROP: Rgb = Rgb::new(0, 0, 0);
const GRID_BASE: Rgb = Rgb::new(24, 26, 36);
const TARGET_COLOR: Rgb = Rgb::new(235, 70, 70);

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

/// Where each part of the screen goes for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Framed play area, border included.
    pub frame: Rect,
    /// Area the grid and target are drawn in.
    pub play: Rect,
    pub panel: Option<Rect>,
    /// Single status line used when there is no room for the panel.
    pub status_row: Option<u16>,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Target width in terminal columns.
    target_w: u16,
    /// Target height in terminal rows.
    target_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 reads as roughly square with typical terminal glyphs.
        Self {
            target_w: 4,
            target_h: 2,
        }
    }
}

impl GameView {
    pub fn new(target_w: u16, target_h: u16) -> Self {
        Self {
            target_w: target_w.max(1),
            target_h: target_h.max(1),
        }
    }

    pub fn layout(&self, viewport: Viewport) -> ScreenLayout {
        let full = Rect::new(0, 0, viewport.width, viewport.height);
        if viewport.width >= PANEL_W + MIN_PLAY_W {
            let frame = Rect::new(0, 0, viewport.width - PANEL_W, viewport.height);
            let panel = Rect::new(frame.w + 1, 1, PANEL_W - 1, viewport.height.saturating_sub(1));
            ScreenLayout {
                frame,
                play: frame.inset(1),
                panel: Some(panel),
                status_row: None,
            }
        } else {
            let frame = Rect::new(0, 0, full.w, full.h.saturating_sub(1));
            ScreenLayout {
                frame,
                play: frame.inset(1),
                panel: None,
                status_row: viewport.height.checked_sub(1),
            }
        }
    }

    /// Screen rectangle covered by the target, if the play area is visible.
    pub fn target_rect(&self, target: TargetPosition, viewport: Viewport) -> Option<Rect> {
        let play = self.layout(viewport).play;
        if play.is_empty() {
            return None;
        }
        let w = self.target_w.min(play.w);
        let h = self.target_h.min(play.h);
        let place = |origin: u16, len: u16, size: u16, percent: f64| -> u16 {
            let offset = (percent.clamp(0.0, 100.0) / 100.0 * len as f64).floor() as u16;
            origin + offset.min(len - size)
        };
        Some(Rect::new(
            place(play.x, play.w, w, target.left),
            place(play.y, play.h, h, target.top),
            w,
            h,
        ))
    }

    /// Whether a pointer press at `(column, row)` lands on the target.
    pub fn hits_target(&self, snap: &GameSnapshot, viewport: Viewport, column: u16, row: u16) -> bool {
        snap.phase == Phase::Playing
            && self
                .target_rect(snap.target, viewport)
                .map(|r| r.contains(column, row))
                .unwrap_or(false)
    }

    pub fn render(&self, snap: &GameSnapshot, grid: Option<&GridNode>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, grid, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        grid: Option<&GridNode>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::new(Rgb::new(220, 220, 220), BACKDROP),
        });

        match snap.phase {
            Phase::Welcome => self.draw_welcome(fb, viewport),
            Phase::Playing => self.draw_game(fb, snap, grid, viewport),
        }
    }

    fn draw_game(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        grid: Option<&GridNode>,
        viewport: Viewport,
    ) {
        let layout = self.layout(viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), BACKDROP);
        fb.draw_border(layout.frame, border);

        if let Some(grid) = grid {
            draw_node(fb, grid, layout.play, 0);
        }

        if let Some(rect) = self.target_rect(snap.target, viewport) {
            let style = CellStyle::new(TARGET_COLOR, TARGET_COLOR.lighten(10)).bold();
            fb.fill_rect(rect, '█', style);
        }

        match (layout.panel, layout.status_row) {
            (Some(panel), _) => draw_panel(fb, panel, snap.grid_size, &snap.stats),
            (None, Some(row)) => draw_status_line(fb, row, &snap.stats),
            (None, None) => {}
        }
    }

    fn draw_welcome(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let title = CellStyle::new(TARGET_COLOR, BACKDROP).bold();
        let text = CellStyle::new(Rgb::new(210, 210, 210), BACKDROP);
        let hint = text.dim();

        let mut lines: Vec<(String, CellStyle)> = vec![
            ("GRID HOP".to_string(), title),
            (String::new(), text),
            ("Find the red target and click it.".to_string(), text),
            ("Left or right button, both count.".to_string(), text),
            (String::new(), text),
            ("Choose a grid size:".to_string(), text),
        ];
        for n in MENU_GRID_SIZES {
            if let Ok(size) = GridSize::new(n as u32) {
                lines.push((
                    format!("[{}]  depth {}  {} cells", n, size.recursion_depth(), size.leaf_count()),
                    text,
                ));
            }
        }
        lines.push((String::new(), text));
        lines.push(("r restart  m menu  q quit".to_string(), hint));

        let top = viewport.height.saturating_sub(lines.len() as u16) / 2;
        for (i, (line, style)) in lines.iter().enumerate() {
            let w = line.chars().count() as u16;
            let x = viewport.width.saturating_sub(w) / 2;
            fb.put_str(x, top.saturating_add(i as u16), line, *style);
        }
    }
}

/// Leaf shade: deeper levels get lighter, alternating cells get a lift.
fn leaf_style(level: u32, parity: bool) -> CellStyle {
    let lift = (level.min(8) * 9) as u8 + if parity { 14 } else { 0 };
    CellStyle::new(Rgb::new(90, 90, 100), GRID_BASE.lighten(lift))
}

fn frame_style(level: u32) -> CellStyle {
    let lift = (level.min(8) * 9) as u8;
    CellStyle::new(Rgb::new(70, 74, 92).lighten(lift), GRID_BASE.lighten(lift)).dim()
}

/// Draw `node` into `rect`, recursing into sub-grids while they still fit.
fn draw_node(fb: &mut FrameBuffer, node: &GridNode, rect: Rect, level: u32) {
    if rect.is_empty() {
        return;
    }
    let inner = if level > 0 && rect.w >= 3 && rect.h >= 3 {
        fb.draw_border(rect, frame_style(level));
        rect.inset(1)
    } else {
        rect
    };
    let n = node.size().get() as u16;

    for (r, row) in node.rows().iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let cell_rect = inner.split_cell(n, r as u16, c as u16);
            if cell_rect.is_empty() {
                continue;
            }
            match cell.child() {
                Some(child) if cell_rect.w >= n && cell_rect.h >= n => {
                    draw_node(fb, child, cell_rect, level + 1);
                }
                _ => {
                    let parity = (r + c) % 2 == 1;
                    fb.fill_rect(cell_rect, ' ', leaf_style(level, parity));
                }
            }
        }
    }
}

fn draw_panel(fb: &mut FrameBuffer, panel: Rect, grid_size: Option<GridSize>, stats: &StatsDisplay) {
    let label = CellStyle::new(Rgb::new(220, 220, 220), BACKDROP).bold();
    let value = CellStyle::new(Rgb::new(200, 200, 200), BACKDROP);

    let rows = [
        ("HITS", stats.hits.to_string()),
        ("HOPS", stats.hops.to_string()),
        ("TIME", format_fixed2(stats.elapsed_secs)),
        ("AVG HOPS", format_fixed2(stats.average_hops)),
        ("AVG TIME", format_fixed2(stats.average_time_secs)),
    ];

    let mut y = panel.y;
    for (name, v) in rows.iter() {
        if y.saturating_add(1) >= panel.y.saturating_add(panel.h) {
            return;
        }
        fb.put_str(panel.x, y, name, label);
        fb.put_str(panel.x, y + 1, v, value);
        y = y.saturating_add(3);
    }

    if let Some(size) = grid_size {
        if y < panel.y.saturating_add(panel.h) {
            fb.put_str(panel.x, y, &format!("GRID {}", size), value.dim());
        }
    }
}

fn draw_status_line(fb: &mut FrameBuffer, row: u16, stats: &StatsDisplay) {
    let line = format!(
        "H {} J {} T {} aJ {} aT {}",
        stats.hits,
        stats.hops,
        format_fixed2(stats.elapsed_secs),
        format_fixed2(stats.average_hops),
        format_fixed2(stats.average_time_secs),
    );
    fb.put_str(0, row, &line, CellStyle::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{build_grid_layer, GameState};

    fn playing(size: u32) -> GameState {
        let mut gs = GameState::new(5);
        gs.start(GridSize::new(size).unwrap());
        gs
    }

    #[test]
    fn target_rect_stays_inside_play_area() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let play = view.layout(vp).play;
        for &(l, t) in &[(0.0, 0.0), (94.99, 94.99), (50.0, 10.0)] {
            let r = view.target_rect(TargetPosition::new(l, t), vp).unwrap();
            assert!(r.x >= play.x && r.x + r.w <= play.x + play.w, "{:?}", r);
            assert!(r.y >= play.y && r.y + r.h <= play.y + play.h, "{:?}", r);
        }
    }

    #[test]
    fn target_is_drawn_where_hit_test_says() {
        let gs = playing(3);
        let snap = gs.snapshot();
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let fb = view.render(&snap, gs.grid(), vp);
        let r = view.target_rect(snap.target, vp).unwrap();

        assert_eq!(fb.get(r.x, r.y).unwrap().ch, '█');
        assert!(view.hits_target(&snap, vp, r.x, r.y));
        assert!(view.hits_target(&snap, vp, r.x + r.w - 1, r.y + r.h - 1));
        assert!(!view.hits_target(&snap, vp, r.x + r.w, r.y));
    }

    #[test]
    fn nested_grids_draw_inner_frames() {
        // Grid size 1 nests six single-cell grids: expect concentric frames.
        let grid = build_grid_layer(GridSize::new(1).unwrap());
        let mut fb = FrameBuffer::new(30, 20);
        draw_node(&mut fb, &grid, Rect::new(0, 0, 30, 20), 0);
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(1, 1).unwrap().ch, '┌');
    }

    #[test]
    fn narrow_viewport_uses_status_line() {
        let gs = playing(4);
        let view = GameView::default();
        let vp = Viewport::new(30, 12);
        let layout = view.layout(vp);
        assert!(layout.panel.is_none());
        assert_eq!(layout.status_row, Some(11));

        let fb = view.render(&gs.snapshot(), gs.grid(), vp);
        assert!(fb.row_text(11).starts_with("H 0 J 0 T 0.00"));
    }

    #[test]
    fn hit_test_is_off_on_welcome() {
        let gs = GameState::new(1);
        let snap = gs.snapshot();
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        for y in 0..24 {
            for x in 0..80 {
                assert!(!view.hits_target(&snap, vp, x, y));
            }
        }
    }
}
