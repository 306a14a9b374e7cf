//! Framebuffer, rectangle and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Brighten each channel by `amount`, saturating at 255.
    pub const fn lighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
        }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Axis-aligned rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.w as u32
            && (y as u32) < self.y as u32 + self.h as u32
    }

    /// Shrink by `n` on every side.
    pub fn inset(&self, n: u16) -> Rect {
        Rect {
            x: self.x.saturating_add(n),
            y: self.y.saturating_add(n),
            w: self.w.saturating_sub(n.saturating_mul(2)),
            h: self.h.saturating_sub(n.saturating_mul(2)),
        }
    }

    /// Cell `(row, col)` of an `n × n` split of this rectangle.
    ///
    /// Boundaries are distributed with integer division so the cells tile the
    /// rectangle exactly, even when it does not divide evenly.
    pub fn split_cell(&self, n: u16, row: u16, col: u16) -> Rect {
        let n = n.max(1) as u32;
        let edge = |origin: u16, len: u16, i: u32| origin as u32 + (i * len as u32) / n;
        let x0 = edge(self.x, self.w, col as u32);
        let x1 = edge(self.x, self.w, col as u32 + 1);
        let y0 = edge(self.y, self.h, row as u32);
        let y1 = edge(self.y, self.h, row as u32 + 1);
        Rect::new(x0 as u16, y0 as u16, (x1 - x0) as u16, (y1 - y0) as u16)
    }
}

/// Row-major grid of styled cells covering the terminal.
///
/// Writes outside the buffer are clipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

fn area(width: u16, height: u16) -> usize {
    width as usize * height as usize
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); area(width, height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Adopt a new terminal size. Contents are stale afterwards; callers repaint.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.resize(area(width, height), Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        Some(&self.cells[y as usize * w..][..w])
    }

    fn row_mut(&mut self, y: u16) -> Option<&mut [Cell]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        Some(&mut self.cells[y as usize * w..][..w])
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y)?.get(x as usize).copied()
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    fn put(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.row_mut(y).and_then(|row| row.get_mut(x as usize)) {
            *slot = cell;
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        if let Some(row) = self.row_mut(y) {
            for (slot, ch) in row.iter_mut().skip(x as usize).zip(s.chars()) {
                *slot = Cell { ch, style };
            }
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, ch: char, style: CellStyle) {
        let w = self.width as usize;
        let left = (rect.x as usize).min(w);
        let right = (rect.x as usize + rect.w as usize).min(w);
        let cell = Cell { ch, style };
        for y in rect.y..rect.y.saturating_add(rect.h) {
            match self.row_mut(y) {
                Some(row) => row[left..right].fill(cell),
                None => break,
            }
        }
    }

    /// Box-drawing border along the edge of `rect`.
    pub fn draw_border(&mut self, rect: Rect, style: CellStyle) {
        if rect.w < 2 || rect.h < 2 {
            return;
        }
        let right = rect.x.saturating_add(rect.w - 1);
        let bottom = rect.y.saturating_add(rect.h - 1);

        let across = Rect::new(rect.x.saturating_add(1), rect.y, rect.w - 2, 1);
        self.fill_rect(across, '─', style);
        self.fill_rect(Rect { y: bottom, ..across }, '─', style);
        let down = Rect::new(rect.x, rect.y.saturating_add(1), 1, rect.h - 2);
        self.fill_rect(down, '│', style);
        self.fill_rect(Rect { x: right, ..down }, '│', style);

        for (x, y, ch) in [
            (rect.x, rect.y, '┌'),
            (right, rect.y, '┐'),
            (rect.x, bottom, '└'),
            (right, bottom, '┘'),
        ] {
            self.put(x, y, Cell { ch, style });
        }
    }

    /// Characters of row `y` as a string (handy in tests and snapshots).
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .map(|row| row.iter().map(|c| c.ch).collect())
            .unwrap_or_default()
    }
}
