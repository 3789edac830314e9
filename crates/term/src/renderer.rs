//! TerminalRenderer: flushes a [`Frame`] to a real terminal.
//!
//! Each changed frame is a full redraw. A frame identical to the previous one
//! produces no output at all.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::frame::{Frame, Glyph, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Frame>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to redraw even if the frame is unchanged (resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `frame` unless it matches the last one drawn. Returns whether
    /// anything was written.
    pub fn draw(&mut self, frame: &Frame) -> Result<bool> {
        if self.last.as_ref() == Some(frame) {
            return Ok(false);
        }
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()?;
        match &mut self.last {
            Some(last) => last.clone_from(frame),
            None => self.last = Some(frame.clone()),
        }
        Ok(true)
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full redraw of `frame` as crossterm commands into `out`.
pub fn encode_frame_into(frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut style: Option<(Rgb, Rgb, bool)> = None;
    for y in 0..frame.height() {
        for x in 0..frame.width() {
            let glyph = frame.get(x, y).unwrap_or_default();
            let next = (glyph.fg, glyph.bg, glyph.bold);
            if style != Some(next) {
                apply_style_into(out, glyph)?;
                style = Some(next);
            }
            out.queue(Print(glyph.ch))?;
        }
        if y + 1 < frame.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, glyph: Glyph) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(glyph.fg)))?;
    out.queue(SetBackgroundColor(to_color(glyph.bg)))?;
    if glyph.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
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
