use tracing::{instrument, trace};

use crate::{display::Display, error::Result, transport::Transport};

/// A column-major bitmap font.
///
/// Each glyph is `width` bytes, one per column, with the least significant bit as the top row.
/// Glyphs are stored contiguously from `start` to `end`, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Font<'a> {
	pub start: u8,
	pub end: u8,
	pub width: u8,
	pub height: u8,
	pub data: &'a [u8],
}

impl<'a> Font<'a> {
	/// The column bytes of a character, if the font has it.
	pub fn glyph(&self, ch: u8) -> Option<&'a [u8]> {
		if !(self.start..=self.end).contains(&ch) {
			return None;
		}

		let width = usize::from(self.width);
		let offset = usize::from(ch - self.start) * width;
		self.data.get(offset..offset + width)
	}
}

impl<T: Transport> Display<T> {
	/// Draw one character with its top-left corner at `(x, y)`.
	///
	/// Each font pixel becomes a `size_x` × `size_y` block (a size of 0 counts as 1). Characters
	/// the font doesn't have are silently skipped.
	#[instrument(level = "trace", skip(self, font))]
	#[allow(clippy::too_many_arguments)]
	pub fn draw_char(
		&mut self,
		x: u16,
		y: u16,
		ch: u8,
		font: Option<&Font<'_>>,
		colour: u16,
		size_x: u16,
		size_y: u16,
	) -> Result<()> {
		let Some(font) = font else {
			return Ok(());
		};
		let Some(columns) = font.glyph(ch) else {
			trace!(ch, "no glyph");
			return Ok(());
		};

		let size_x = size_x.max(1);
		let size_y = size_y.max(1);
		let rows = font.height.min(8);

		for (i, column) in (0..).zip(columns) {
			for j in 0..u16::from(rows) {
				if column & (1 << j) == 0 {
					continue;
				}

				if size_x == 1 && size_y == 1 {
					self.pixel(x.saturating_add(i), y.saturating_add(j), colour)?;
				} else {
					self.rect(
						x.saturating_add(i.saturating_mul(size_x)),
						y.saturating_add(j.saturating_mul(size_y)),
						size_x,
						size_y,
						colour,
					)?;
				}
			}
		}

		Ok(())
	}

	/// Draw a string, wrapping back to `x` when a line runs off the right edge.
	///
	/// Text is taken byte by byte; bytes the font doesn't cover still take up a character cell.
	#[instrument(level = "trace", skip(self, font))]
	pub fn draw_text(
		&mut self,
		x: u16,
		y: u16,
		text: &str,
		font: Option<&Font<'_>>,
		colour: u16,
		size: u16,
	) -> Result<()> {
		let Some(font) = font else {
			return Ok(());
		};

		let size = size.max(1);
		let advance = size.saturating_mul(font.width.into()).saturating_add(1);
		let line_height = size.saturating_mul(font.height.into()).saturating_add(1);

		let (mut px, mut py) = (x, y);
		for ch in text.bytes() {
			self.draw_char(px, py, ch, Some(font), colour, size, size)?;

			px = px.saturating_add(advance);
			if px >= self.width {
				py = py.saturating_add(line_height);
				px = x;
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::recording::{Op, Recorder};

	// two 2x3 glyphs: 'A' is a vertical bar, 'B' a corner
	const TINY: Font<'static> = Font {
		start: b'A',
		end: b'B',
		width: 2,
		height: 3,
		data: &[0b111, 0b000, 0b001, 0b001],
	};

	fn lcd() -> Display<Recorder> {
		Display::new(Recorder::new(), 32, 32)
	}

	fn origins(ops: &[Op]) -> Vec<(u8, u8)> {
		// RASET data carries y, CASET data carries x
		ops.chunks(6)
			.map(|call| match (&call[1], &call[3]) {
				(Op::Data(rows), Op::Data(cols)) => (cols[1], rows[1]),
				other => panic!("unexpected ops: {other:?}"),
			})
			.collect()
	}

	#[test]
	fn glyph_lookup() {
		assert_eq!(TINY.glyph(b'A'), Some(&[0b111, 0][..]));
		assert_eq!(TINY.glyph(b'B'), Some(&[1, 1][..]));
		assert_eq!(TINY.glyph(b'C'), None);
		assert_eq!(TINY.glyph(b'@'), None);
	}

	#[test]
	fn truncated_font_data_is_skipped() {
		let font = Font {
			data: &[0xFF],
			..TINY
		};
		assert_eq!(font.glyph(b'A'), None);
	}

	#[test]
	fn unscaled_glyph_draws_pixels() {
		let mut lcd = lcd();
		lcd.draw_char(3, 4, b'A', Some(&TINY), 0xFFFF, 1, 1).unwrap();
		assert_eq!(origins(lcd.transport().ops()), [(3, 4), (3, 5), (3, 6)]);
		assert_eq!(lcd.transport().pixel_count(), 3);
	}

	#[test]
	fn scaled_glyph_draws_blocks() {
		let mut lcd = lcd();
		lcd.draw_char(0, 0, b'B', Some(&TINY), 0xFFFF, 2, 3).unwrap();
		assert_eq!(origins(lcd.transport().ops()), [(0, 0), (2, 0)]);
		assert_eq!(lcd.transport().pixel_count(), 2 * 6);
	}

	#[test]
	fn zero_size_counts_as_one() {
		let mut lcd = lcd();
		lcd.draw_char(0, 0, b'B', Some(&TINY), 0xFFFF, 0, 0).unwrap();
		assert_eq!(lcd.transport().pixel_count(), 2);
	}

	#[test]
	fn no_font_no_calls() {
		let mut lcd = lcd();
		lcd.draw_char(0, 0, b'A', None, 0xFFFF, 1, 1).unwrap();
		lcd.draw_text(0, 0, "AB", None, 0xFFFF, 1).unwrap();
		assert!(lcd.transport().ops().is_empty());
	}

	#[test]
	fn text_advances_and_wraps() {
		// advance is 3, so 'A's land at 0, 3, ... 30 and then wrap
		let mut lcd = lcd();
		lcd.draw_text(0, 0, &"A".repeat(12), Some(&TINY), 0xFFFF, 1)
			.unwrap();
		let firsts: Vec<_> = origins(lcd.transport().ops())
			.into_iter()
			.step_by(3)
			.collect();
		assert_eq!(firsts.len(), 12);
		assert_eq!(firsts[1], (3, 0));
		assert_eq!(firsts[10], (30, 0));
		assert_eq!(firsts[11], (0, 4));
	}

	#[test]
	fn scaled_text_advances_and_wraps_by_scaled_cells() {
		// advance is 2*2+1 = 5 and line height 3*2+1 = 7, so the eighth 'A' wraps
		let mut lcd = lcd();
		lcd.draw_text(0, 0, &"A".repeat(8), Some(&TINY), 0xFFFF, 2)
			.unwrap();
		let firsts: Vec<_> = origins(lcd.transport().ops())
			.into_iter()
			.step_by(3)
			.collect();
		assert_eq!(
			firsts,
			[(0, 0), (5, 0), (10, 0), (15, 0), (20, 0), (25, 0), (30, 0), (0, 7)]
		);
		assert_eq!(lcd.transport().pixel_count(), 8 * 3 * 4);
	}

	#[test]
	fn huge_scale_clips_instead_of_overflowing() {
		let mut wide = lcd();
		wide.draw_char(0, 0, b'A', Some(&TINY), 0xFFFF, 30000, 1)
			.unwrap();
		// three rows, each clipped to the display width
		assert_eq!(wide.transport().pixel_count(), 3 * 32);

		let mut both = lcd();
		both.draw_char(0, 0, b'B', Some(&TINY), 0xFFFF, 30000, 30000)
			.unwrap();
		// the second column lands off-screen
		assert_eq!(both.transport().pixel_count(), 32 * 32);
	}

	#[test]
	fn huge_text_scale_draws_one_clipped_cell() {
		let mut lcd = lcd();
		lcd.draw_text(0, 0, "AB", Some(&TINY), 0xFFFF, u16::MAX)
			.unwrap();
		assert_eq!(lcd.transport().pixel_count(), 32 * 32);
	}
}
