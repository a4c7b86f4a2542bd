//! Screen: flushes a framebuffer to the terminal.
//!
//! Frames are diffed against the previously presented frame and only changed
//! runs are rewritten, so a steady game screen costs almost no output.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableFocusChange, EnableFocusChange},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Frame, Rgb, Style};

pub struct Screen {
    stdout: io::Stdout,
    presented: Option<Frame>,
    buf: Vec<u8>,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            presented: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Enter raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(EnableFocusChange)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal to its normal state.
    pub fn leave(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(DisableFocusChange)?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next present to redraw everything (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.presented = None;
    }

    /// Present a frame, swapping it into internal state.
    ///
    /// Callers keep one `Frame` and pass it in every call; the previously
    /// presented frame is handed back through the same slot, so neither side
    /// clones.
    pub fn present(&mut self, frame: &mut Frame) -> Result<()> {
        self.buf.clear();

        match self.presented.take() {
            Some(mut prev)
                if prev.width() == frame.width() && prev.height() == frame.height() =>
            {
                encode_diff(&prev, frame, &mut self.buf)?;
                std::mem::swap(&mut prev, frame);
                self.presented = Some(prev);
            }
            _ => {
                encode_full(frame, &mut self.buf)?;
                let mut prev = Frame::new(frame.width(), frame.height());
                std::mem::swap(&mut prev, frame);
                self.presented = Some(prev);
            }
        }

        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw without writing to stdout.
fn encode_full(frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut style: Option<Style> = None;
    for y in 0..frame.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..frame.width() {
            let cell = frame.get(x, y).unwrap_or_default();
            if style != Some(cell.style) {
                apply_style(out, cell.style)?;
                style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the changed runs between two same-sized frames.
fn encode_diff(prev: &Frame, next: &Frame, out: &mut Vec<u8>) -> Result<()> {
    let mut style: Option<Style> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if style != Some(cell.style) {
                apply_style(out, cell.style)?;
                style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Walk maximal horizontal runs of cells that differ between two frames.
fn for_each_changed_run(
    prev: &Frame,
    next: &Frame,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    fn runs_between(prev: &Frame, next: &Frame) -> Vec<(u16, u16, u16)> {
        let mut runs = Vec::new();
        for_each_changed_run(prev, next, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        runs
    }

    #[test]
    fn test_identical_frames_produce_no_runs() {
        let a = Frame::new(6, 3);
        let b = Frame::new(6, 3);
        assert!(runs_between(&a, &b).is_empty());
    }

    #[test]
    fn test_adjacent_changes_coalesce_into_one_run() {
        let a = Frame::new(5, 1);
        let mut b = Frame::new(5, 1);
        for x in 1..=3 {
            b.set(x, 0, Cell::new('X', Style::default()));
        }
        assert_eq!(runs_between(&a, &b), vec![(1, 0, 3)]);
    }

    #[test]
    fn test_separated_changes_make_separate_runs() {
        let a = Frame::new(7, 2);
        let mut b = Frame::new(7, 2);
        b.set(0, 0, Cell::new('L', Style::default()));
        b.set(6, 0, Cell::new('R', Style::default()));
        b.set(3, 1, Cell::new('M', Style::default()));

        assert_eq!(runs_between(&a, &b), vec![(0, 0, 1), (6, 0, 1), (3, 1, 1)]);
    }

    #[test]
    fn test_style_only_change_is_detected() {
        let a = Frame::new(3, 1);
        let mut b = Frame::new(3, 1);
        let style = Style {
            fg: Rgb::new(255, 0, 0),
            ..Style::default()
        };
        b.set(1, 0, Cell::new(' ', style));

        assert_eq!(runs_between(&a, &b), vec![(1, 0, 1)]);
    }

    #[test]
    fn test_color_conversion() {
        let rgb = Rgb::new(12, 34, 56);
        assert_eq!(
            to_color(rgb),
            Color::Rgb {
                r: 12,
                g: 34,
                b: 56
            }
        );
    }
}
