//! Character frame that a view draws into before it reaches the terminal.

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

    /// Parse `#RRGGBB`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// One styled terminal character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Glyph {
    pub const fn new(ch: char, fg: Rgb, bg: Rgb) -> Self {
        Self {
            ch,
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::new(' ', Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// Fixed-size grid of glyphs, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize and blank the frame, keeping the allocation when possible.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs
            .resize(width as usize * height as usize, Glyph::default());
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.glyphs[y as usize * self.width as usize + x as usize])
    }

    /// Out-of-frame writes are dropped.
    pub fn put(&mut self, x: u16, y: u16, glyph: Glyph) {
        if x < self.width && y < self.height {
            self.glyphs[y as usize * self.width as usize + x as usize] = glyph;
        }
    }

    /// Write `text` left to right in one style, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: Glyph) {
        for (i, ch) in text.chars().enumerate() {
            let Some(cx) = x.checked_add(i as u16) else {
                break;
            };
            self.put(cx, y, Glyph { ch, ..style });
        }
    }

    /// Row `y` as text, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|g| g.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse() {
        assert_eq!(Rgb::from_hex("#FF4500"), Some(Rgb::new(255, 69, 0)));
        assert_eq!(Rgb::from_hex("FF4500"), None);
        assert_eq!(Rgb::from_hex("#FFF"), None);
    }

    #[test]
    fn put_str_clips_at_edge() {
        let mut frame = Frame::new(4, 1);
        frame.put_str(2, 0, "abc", Glyph::default());
        assert_eq!(frame.row_text(0), "  ab");
    }

    #[test]
    fn reset_blanks_and_resizes() {
        let mut frame = Frame::new(2, 2);
        frame.put(1, 1, Glyph::default().bold());
        frame.reset(3, 1);
        assert_eq!((frame.width(), frame.height()), (3, 1));
        assert_eq!(frame.get(1, 0), Some(Glyph::default()));
        assert_eq!(frame.get(0, 1), None);
    }
}
