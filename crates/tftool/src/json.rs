use embedded_graphics::{
	mono_font::{ascii::FONT_6X10, MonoTextStyle},
	pixelcolor::{Rgb565, Rgb888},
	prelude::*,
	primitives::{Line, PrimitiveStyle, Rectangle},
	text::Text,
};
use serde::{Deserialize, Serialize};

/// A screen description, as read by `tftool draw`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
	Clear([u8; 3]),
	Light(bool),
	Layout(Vec<Item>),
}

fn rgb([r, g, b]: [u8; 3]) -> Rgb565 {
	Rgb888::new(r, g, b).into()
}

impl Drawable for Screen {
	type Color = Rgb565;
	type Output = ();

	fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
	where
		D: DrawTarget<Color = Self::Color>,
	{
		use Screen::*;
		match self {
			Clear(colour) => target.clear(rgb(*colour)),
			Layout(items) => {
				for item in items {
					item.draw(target)?;
				}
				Ok(())
			}
			// power and backlight aren't drawing, the caller handles those
			Light(_) => Ok(()),
		}
	}
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Item {
	pub x: i32,
	pub y: i32,
	pub width: Option<u32>,
	pub height: Option<u32>,
	pub fill: Option<[u8; 3]>,
	pub stroke: Option<[u8; 3]>,
	pub text: Option<String>,

	/// Draw a line from (x, y) to here, in the stroke colour.
	pub to: Option<[i32; 2]>,
}

impl Drawable for Item {
	type Color = Rgb565;
	type Output = ();

	fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
	where
		D: DrawTarget<Color = Self::Color>,
	{
		let origin = Point::new(self.x, self.y);

		if let (Some(width), Some(height), Some(colour)) = (self.width, self.height, self.fill) {
			Rectangle::new(origin, Size::new(width, height))
				.into_styled(PrimitiveStyle::with_fill(rgb(colour)))
				.draw(target)?;
		}

		if let (Some([x, y]), Some(stroke)) = (self.to, self.stroke) {
			Line::new(origin, Point::new(x, y))
				.into_styled(PrimitiveStyle::with_stroke(rgb(stroke), 1))
				.draw(target)?;
		}

		if let (Some(text), Some(stroke)) = (self.text.as_deref(), self.stroke) {
			Text::new(text, origin, MonoTextStyle::new(&FONT_6X10, rgb(stroke))).draw(target)?;
		}

		Ok(())
	}
}
