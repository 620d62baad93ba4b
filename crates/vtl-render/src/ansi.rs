#![forbid(unsafe_code)]

//! ANSI escape generation and a single-frame presenter.
//!
//! Pure byte generation, no terminal state tracking: VisitLine renders one
//! frame at a time, so the presenter re-states the style whenever it changes
//! instead of diffing against a previous frame.

use std::io::{self, Write};

use unicode_width::UnicodeWidthChar;

use crate::buffer::Buffer;
use crate::cell::{Cell, PackedRgba, StyleFlags};

/// SGR reset: `CSI 0 m`.
pub const SGR_RESET: &[u8] = b"\x1b[0m";

/// Write the SGR reset sequence.
#[inline]
pub fn sgr_reset<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(SGR_RESET)
}

/// Write a truecolor foreground, or the default foreground for a
/// transparent color.
pub fn sgr_fg<W: Write>(w: &mut W, color: PackedRgba) -> io::Result<()> {
    if color.is_opaque() {
        write!(w, "\x1b[38;2;{};{};{}m", color.r(), color.g(), color.b())
    } else {
        w.write_all(b"\x1b[39m")
    }
}

/// Write a truecolor background, or the default background for a
/// transparent color.
pub fn sgr_bg<W: Write>(w: &mut W, color: PackedRgba) -> io::Result<()> {
    if color.is_opaque() {
        write!(w, "\x1b[48;2;{};{};{}m", color.r(), color.g(), color.b())
    } else {
        w.write_all(b"\x1b[49m")
    }
}

/// Write the "on" codes for every set style flag.
pub fn sgr_flags<W: Write>(w: &mut W, flags: StyleFlags) -> io::Result<()> {
    const CODES: [(StyleFlags, &[u8]); 5] = [
        (StyleFlags::BOLD, b"\x1b[1m"),
        (StyleFlags::DIM, b"\x1b[2m"),
        (StyleFlags::ITALIC, b"\x1b[3m"),
        (StyleFlags::UNDERLINE, b"\x1b[4m"),
        (StyleFlags::REVERSE, b"\x1b[7m"),
    ];
    for (flag, seq) in CODES {
        if flags.contains(flag) {
            w.write_all(seq)?;
        }
    }
    Ok(())
}

fn write_style<W: Write>(w: &mut W, cell: &Cell) -> io::Result<()> {
    sgr_reset(w)?;
    sgr_fg(w, cell.fg)?;
    sgr_bg(w, cell.bg)?;
    sgr_flags(w, cell.attrs)
}

/// Serialize a whole buffer as styled lines.
///
/// Emits one terminal line per buffer row, resetting attributes at the end of
/// each row. The spacer cell after a double-width character is skipped so
/// columns stay aligned.
pub fn encode_frame<W: Write>(buf: &Buffer, w: &mut W) -> io::Result<()> {
    for y in 0..buf.height() {
        let mut style: Option<(PackedRgba, PackedRgba, StyleFlags)> = None;
        let mut x = 0u16;
        while x < buf.width() {
            let Some(cell) = buf.get(x, y) else { break };
            let key = (cell.fg, cell.bg, cell.attrs);
            if style != Some(key) {
                write_style(w, cell)?;
                style = Some(key);
            }
            let mut b = [0u8; 4];
            w.write_all(cell.ch.encode_utf8(&mut b).as_bytes())?;
            x += cell.ch.width().unwrap_or(1).max(1) as u16;
        }
        sgr_reset(w)?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

/// Serialize a whole buffer into a `String`.
///
/// Convenience wrapper over [`encode_frame`]; infallible because the sink is
/// an in-memory vector.
#[must_use]
pub fn encode_frame_string(buf: &Buffer) -> String {
    let mut out = Vec::new();
    // Writing to a Vec cannot fail.
    let _ = encode_frame(buf, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}
