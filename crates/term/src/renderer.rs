//! Terminal session and frame output.
//!
//! [`TerminalSession::open`] puts the terminal into game mode: raw input, the
//! alternate screen (the terminal's take on fullscreen), mouse capture and a
//! hidden cursor. Dropping the session puts everything back, including when
//! opening fails part way through.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};
use log::warn;

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Live terminal session. Frames are presented with [`present`](Self::present).
pub struct TerminalSession {
    stdout: io::Stdout,
    raw_mode: bool,
    /// Frame currently on screen, if it can be diffed against.
    shown: Option<FrameBuffer>,
    bytes: Vec<u8>,
}

impl TerminalSession {
    pub fn open() -> Result<Self> {
        let mut session = Self {
            stdout: io::stdout(),
            raw_mode: false,
            shown: None,
            bytes: Vec::with_capacity(32 * 1024),
        };

        terminal::enable_raw_mode()?;
        session.raw_mode = true;
        session
            .bytes
            .queue(terminal::EnterAlternateScreen)?
            .queue(EnableMouseCapture)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        session.flush()?;
        Ok(session)
    }

    /// Restore the terminal now and report failures. Dropping does the same
    /// but can only log them.
    pub fn close(mut self) -> Result<()> {
        self.restore()
    }

    /// Forget what is on screen so the next frame is written in full.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Write `frame` to the terminal.
    ///
    /// Only cells that differ from the previous frame are sent. Afterwards
    /// `frame` holds the previous frame's buffer, ready to be painted again.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        self.bytes.clear();
        let shown = self
            .shown
            .take()
            .filter(|s| s.width() == frame.width() && s.height() == frame.height());
        encode_frame(shown.as_ref(), frame, &mut self.bytes)?;
        self.flush()?;

        let mut spare = shown.unwrap_or_else(|| FrameBuffer::new(frame.width(), frame.height()));
        std::mem::swap(&mut spare, frame);
        self.shown = Some(spare);
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        if !self.raw_mode {
            return Ok(());
        }
        self.bytes.clear();
        let screen = self.queue_restore().and_then(|_| self.flush());
        self.raw_mode = false;
        terminal::disable_raw_mode()?;
        screen
    }

    fn queue_restore(&mut self) -> Result<()> {
        self.bytes
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(DisableMouseCapture)?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.bytes)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!("could not restore terminal: {err:#}");
        }
    }
}

/// Encode `next` as terminal output.
///
/// With a same-sized `shown` frame only the changed spans are written;
/// otherwise the screen is cleared and every row is written.
pub fn encode_frame(shown: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen { out, style: None };

    match shown {
        Some(shown) if shown.width() == next.width() && shown.height() == next.height() => {
            for (y, (old, new)) in rows(shown).zip(rows(next)).enumerate() {
                let mut from = 0;
                while let Some((start, end)) = next_changed_span(old, new, from) {
                    pen.write_span(start as u16, y as u16, &new[start..end])?;
                    from = end;
                }
            }
        }
        _ => {
            pen.out.queue(terminal::Clear(terminal::ClearType::All))?;
            for (y, row) in rows(next).enumerate() {
                pen.write_span(0, y as u16, row)?;
            }
        }
    }

    pen.out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn rows(fb: &FrameBuffer) -> impl Iterator<Item = &[Cell]> {
    fb.cells().chunks(fb.width().max(1) as usize)
}

/// First run of differing cells at or after `from`, as `start..end`.
fn next_changed_span(old: &[Cell], new: &[Cell], from: usize) -> Option<(usize, usize)> {
    let start = from
        + old[from..]
            .iter()
            .zip(&new[from..])
            .position(|(a, b)| a != b)?;
    let len = old[start..]
        .iter()
        .zip(&new[start..])
        .take_while(|(a, b)| a != b)
        .count();
    Some((start, start + len))
}

/// Writes cells while remembering the active style, so runs of equally
/// styled cells only pay for one style change.
struct Pen<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl Pen<'_> {
    fn write_span(&mut self, x: u16, y: u16, cells: &[Cell]) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        for cell in cells {
            if self.style != Some(cell.style) {
                self.set_style(cell.style)?;
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn set_style(&mut self, style: CellStyle) -> Result<()> {
        self.out
            .queue(SetAttribute(Attribute::Reset))?
            .queue(SetForegroundColor(color(style.fg)))?
            .queue(SetBackgroundColor(color(style.bg)))?;
        if style.bold {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.style = Some(style);
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
