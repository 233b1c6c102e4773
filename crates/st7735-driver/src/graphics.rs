use embedded_graphics::{
	draw_target::DrawTarget,
	geometry::{Dimensions, OriginDimensions, Size},
	pixelcolor::Rgb565,
	primitives::Rectangle,
	Pixel,
};
use tracing::instrument;

use crate::{colour::from_rgb565, display::Display, error::Error, transport::Transport};

impl<T: Transport> OriginDimensions for Display<T> {
	fn size(&self) -> Size {
		Size::new(self.width.into(), self.height.into())
	}
}

impl<T: Transport> DrawTarget for Display<T> {
	type Color = Rgb565;
	type Error = Error;

	fn draw_iter<I>(&mut self, pixels: I) -> std::result::Result<(), Self::Error>
	where
		I: IntoIterator<Item = Pixel<Self::Color>>,
	{
		for Pixel(coord, color) in pixels.into_iter() {
			let Ok(x) = u16::try_from(coord.x) else {
				continue;
			};
			let Ok(y) = u16::try_from(coord.y) else {
				continue;
			};

			self.pixel(x, y, from_rgb565(color))?;
		}

		Ok(())
	}

	#[instrument(level = "trace", skip(self))]
	fn fill_solid(
		&mut self,
		area: &Rectangle,
		color: Self::Color,
	) -> std::result::Result<(), Self::Error> {
		let area = area.intersection(&self.bounding_box());
		let Some(bottom_right) = area.bottom_right() else {
			return Ok(());
		};

		// the intersection lies within the u16-sized screen
		let (Ok(x), Ok(y)) = (
			u16::try_from(area.top_left.x),
			u16::try_from(area.top_left.y),
		) else {
			return Ok(());
		};
		let (Ok(x1), Ok(y1)) = (u16::try_from(bottom_right.x), u16::try_from(bottom_right.y))
		else {
			return Ok(());
		};

		self.rect(x, y, x1 - x + 1, y1 - y + 1, from_rgb565(color))
	}

	#[instrument(level = "trace", skip(self))]
	fn clear(&mut self, color: Self::Color) -> std::result::Result<(), Self::Error> {
		Display::clear(self, from_rgb565(color))
	}
}

#[cfg(test)]
mod tests {
	use embedded_graphics::{
		mono_font::{ascii::FONT_6X10, MonoTextStyle},
		prelude::*,
		primitives::{Line, PrimitiveStyle},
		text::Text,
	};

	use super::*;
	use crate::recording::{Op, Recorder};

	fn lcd() -> Display<Recorder> {
		Display::new(Recorder::new(), 128, 160)
	}

	#[test]
	fn reports_its_size() {
		assert_eq!(lcd().bounding_box().size, Size::new(128, 160));
	}

	#[test]
	fn filled_rectangle_is_one_rect() {
		let mut lcd = lcd();
		Rectangle::new(Point::new(-4, 150), Size::new(10, 20))
			.into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
			.draw(&mut lcd)
			.unwrap();

		let ops = lcd.transport().ops();
		assert_eq!(ops.len(), 6);
		assert_eq!(ops[1], Op::Data(vec![0, 150, 0, 159]));
		assert_eq!(ops[3], Op::Data(vec![0, 0, 0, 5]));
		assert_eq!(
			ops[5],
			Op::Pixels {
				count: 60,
				pixel: [0xF8, 0x00]
			}
		);
	}

	#[test]
	fn offscreen_fill_is_silent() {
		let mut lcd = lcd();
		lcd.fill_solid(
			&Rectangle::new(Point::new(200, 0), Size::new(10, 10)),
			Rgb565::BLUE,
		)
		.unwrap();
		assert!(lcd.transport().ops().is_empty());
	}

	#[test]
	fn negative_pixels_are_dropped() {
		let mut lcd = lcd();
		Line::new(Point::new(-2, 0), Point::new(2, 0))
			.into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, 1))
			.draw(&mut lcd)
			.unwrap();
		assert_eq!(lcd.transport().pixel_count(), 3);
	}

	#[test]
	fn clear_covers_the_screen() {
		let mut lcd = lcd();
		DrawTarget::clear(&mut lcd, Rgb565::BLACK).unwrap();
		assert_eq!(lcd.transport().pixel_count(), 128 * 160);
	}

	#[test]
	fn text_renders() {
		let mut lcd = lcd();
		Text::new(
			"Hi",
			Point::new(0, 10),
			MonoTextStyle::new(&FONT_6X10, Rgb565::GREEN),
		)
		.draw(&mut lcd)
		.unwrap();
		assert!(lcd.transport().pixel_count() > 0);
	}
}
