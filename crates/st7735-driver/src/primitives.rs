use tracing::instrument;

use crate::{
	colour::pixel_bytes,
	display::{Display, LineCount},
	error::Result,
	transport::Transport,
};

impl<T: Transport> Display<T> {
	/// Write a single pixel.
	///
	/// Out-of-bounds pixels are silently dropped.
	#[instrument(level = "trace", skip(self))]
	pub fn pixel(&mut self, x: u16, y: u16, colour: u16) -> Result<()> {
		if x >= self.width || y >= self.height {
			return Ok(());
		}

		self.set_window(x, y, x, y)?;
		self.transport.write_pixel_run(1, pixel_bytes(colour))
	}

	/// Fill a rectangle.
	///
	/// The rectangle is clipped on the right and bottom edges; if its origin is off-screen, nothing
	/// is drawn.
	#[instrument(level = "trace", skip(self))]
	pub fn rect(&mut self, x: u16, y: u16, w: u16, h: u16, colour: u16) -> Result<()> {
		if x >= self.width || y >= self.height || w == 0 || h == 0 {
			return Ok(());
		}

		let w = w.min(self.width - x);
		let h = h.min(self.height - y);

		self.set_window(x, y, x + w - 1, y + h - 1)?;
		self.transport
			.write_pixel_run(u32::from(w) * u32::from(h), pixel_bytes(colour))
	}

	/// Fill the whole display.
	#[instrument(level = "trace", skip(self))]
	pub fn clear(&mut self, colour: u16) -> Result<()> {
		self.rect(0, 0, self.width, self.height, colour)
	}

	/// Draw a horizontal line `w` pixels long, starting at `(x, y)` and going right.
	#[instrument(level = "trace", skip(self))]
	pub fn hline(&mut self, x: u16, y: u16, w: u16, colour: u16) -> Result<()> {
		if x >= self.width || y >= self.height || w == 0 {
			return Ok(());
		}

		let w = w.min(self.width - x);
		self.set_window(x, y, x + w - 1, y)?;
		let count = self.line_count.units(x, w);
		self.transport.write_pixel_run(count, pixel_bytes(colour))
	}

	/// Draw a vertical line `h` pixels long, starting at `(x, y)` and going down.
	#[instrument(level = "trace", skip(self))]
	pub fn vline(&mut self, x: u16, y: u16, h: u16, colour: u16) -> Result<()> {
		if x >= self.width || y >= self.height || h == 0 {
			return Ok(());
		}

		let h = h.min(self.height - y);
		self.set_window(x, y, x, y + h - 1)?;
		let count = self.line_count.units(y, h);
		self.transport.write_pixel_run(count, pixel_bytes(colour))
	}

	/// Draw a line between two points, both included.
	///
	/// Axis-aligned lines take the [`hline()`](Self::hline)/[`vline()`](Self::vline) fast paths;
	/// everything else is rasterised pixel by pixel.
	#[instrument(level = "trace", skip(self))]
	pub fn line(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, colour: u16) -> Result<()> {
		if x0 == x1 {
			return self.vline(x0, y0.min(y1), y0.abs_diff(y1).saturating_add(1), colour);
		}

		if y0 == y1 {
			return self.hline(x0.min(x1), y0, x0.abs_diff(x1).saturating_add(1), colour);
		}

		for (x, y) in Bresenham::new((x0, y0), (x1, y1)) {
			self.pixel(x, y, colour)?;
		}

		Ok(())
	}
}

impl LineCount {
	fn units(self, start: u16, len: u16) -> u32 {
		match self {
			Self::Exact => u32::from(len),
			Self::Legacy => (u32::from(start) + u32::from(len)).saturating_sub(1),
		}
	}
}

/// Integer line rasteriser, yielding every point from start to end inclusive.
#[derive(Debug, Clone)]
pub(crate) struct Bresenham {
	x: i32,
	y: i32,
	sx: i32,
	sy: i32,
	major: i32,
	minor: i32,
	steep: bool,
	err: i32,
	remaining: u32,
}

impl Bresenham {
	pub(crate) fn new((x0, y0): (u16, u16), (x1, y1): (u16, u16)) -> Self {
		let dx = i32::from(x0.abs_diff(x1));
		let dy = i32::from(y0.abs_diff(y1));
		let steep = dy > dx;
		let (major, minor) = if steep { (dy, dx) } else { (dx, dy) };

		Self {
			x: x0.into(),
			y: y0.into(),
			sx: if x1 >= x0 { 1 } else { -1 },
			sy: if y1 >= y0 { 1 } else { -1 },
			major,
			minor,
			steep,
			err: 2 * minor - major,
			remaining: major as u32 + 1,
		}
	}
}

impl Iterator for Bresenham {
	type Item = (u16, u16);

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}
		self.remaining -= 1;

		// both coordinates stay between the two u16 endpoints
		let point = (self.x as u16, self.y as u16);

		if self.err >= 0 {
			if self.steep {
				self.x += self.sx;
			} else {
				self.y += self.sy;
			}
			self.err -= 2 * self.major;
		}
		self.err += 2 * self.minor;

		if self.steep {
			self.y += self.sy;
		} else {
			self.x += self.sx;
		}

		Some(point)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let n = self.remaining as usize;
		(n, Some(n))
	}
}

impl ExactSizeIterator for Bresenham {}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::recording::{Op, Recorder};

	fn lcd() -> Display<Recorder> {
		Display::new(Recorder::new(), 128, 160)
	}

	#[test]
	fn bresenham_shallow() {
		let points: Vec<_> = Bresenham::new((0, 0), (4, 2)).collect();
		assert_eq!(points, [(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);
	}

	#[test]
	fn bresenham_steep_reversed() {
		let points: Vec<_> = Bresenham::new((2, 4), (0, 0)).collect();
		assert_eq!(points.len(), 5);
		assert_eq!(points.first(), Some(&(2, 4)));
		assert_eq!(points.last(), Some(&(0, 0)));
		for pair in points.windows(2) {
			assert_eq!(pair[0].1 - 1, pair[1].1);
		}
	}

	#[test]
	fn bresenham_diagonal() {
		let points: Vec<_> = Bresenham::new((3, 0), (0, 3)).collect();
		assert_eq!(points, [(3, 0), (2, 1), (1, 2), (0, 3)]);
	}

	#[test]
	fn pixel_out_of_bounds_is_silent() {
		let mut lcd = lcd();
		lcd.pixel(128, 0, 0xFFFF).unwrap();
		lcd.pixel(0, 160, 0xFFFF).unwrap();
		assert!(lcd.transport().ops().is_empty());
	}

	#[test]
	fn pixel_writes_one_unit() {
		let mut lcd = lcd();
		lcd.pixel(5, 6, 0xF800).unwrap();
		assert_eq!(
			lcd.transport().ops().last(),
			Some(&Op::Pixels {
				count: 1,
				pixel: [0xF8, 0x00]
			})
		);
		assert_eq!(lcd.transport().ops().len(), 6);
	}

	#[test]
	fn rect_clips_right_and_bottom() {
		let mut lcd = lcd();
		lcd.rect(120, 150, 20, 20, 0x001F).unwrap();
		let ops = lcd.transport().ops();
		assert_eq!(ops[1], Op::Data(vec![0, 150, 0, 159]));
		assert_eq!(ops[3], Op::Data(vec![0, 120, 0, 127]));
		assert_eq!(lcd.transport().pixel_count(), 8 * 10);
	}

	#[test]
	fn empty_rect_is_silent() {
		let mut lcd = lcd();
		lcd.rect(0, 0, 0, 10, 0).unwrap();
		lcd.rect(0, 0, 10, 0, 0).unwrap();
		assert!(lcd.transport().ops().is_empty());
	}

	#[test]
	fn line_counts() {
		let mut lcd = lcd();
		lcd.hline(10, 0, 5, 0).unwrap();
		assert_eq!(lcd.transport_mut().take().last().map(count_of), Some(5));

		lcd.set_line_count(LineCount::Legacy);
		lcd.hline(10, 0, 5, 0).unwrap();
		assert_eq!(lcd.transport_mut().take().last().map(count_of), Some(14));
		lcd.vline(0, 3, 200, 0).unwrap();
		assert_eq!(lcd.transport_mut().take().last().map(count_of), Some(3 + 157 - 1));
	}

	fn count_of(op: &Op) -> u32 {
		match op {
			Op::Pixels { count, .. } => *count,
			other => panic!("not a pixel run: {other}"),
		}
	}
}
