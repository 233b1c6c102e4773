use std::str::FromStr;

use st7735_driver::colour::pack_colour;

/// A colour given on the command line, as `#rrggbb`, `rrggbb`, or `r,g,b` (decimal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colour {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Colour {
	pub fn packed(self) -> u16 {
		pack_colour(self.r, self.g, self.b)
	}
}

impl FromStr for Colour {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();

		if s.contains(',') {
			let channels = s
				.split(',')
				.map(|c| c.trim().parse::<u8>())
				.collect::<Result<Vec<_>, _>>()
				.map_err(|err| format!("colour {s:?}: {err}"))?;
			let [r, g, b] = channels[..] else {
				return Err(format!("colour {s:?} needs exactly three channels"));
			};
			return Ok(Self { r, g, b });
		}

		let hex = s.strip_prefix('#').unwrap_or(s);
		if hex.len() != 6 || !hex.is_ascii() {
			return Err(format!("colour {s:?} is not #rrggbb, rrggbb, or r,g,b"));
		}

		let channel = |at: usize| {
			u8::from_str_radix(&hex[at..at + 2], 16).map_err(|err| format!("colour {s:?}: {err}"))
		};
		Ok(Self {
			r: channel(0)?,
			g: channel(2)?,
			b: channel(4)?,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_with_and_without_hash() {
		let c: Colour = "#ff8000".parse().unwrap();
		assert_eq!(c, Colour { r: 255, g: 128, b: 0 });
		assert_eq!("FF8000".parse::<Colour>().unwrap(), c);
	}

	#[test]
	fn decimal_triplet() {
		let c: Colour = "0, 255,16".parse().unwrap();
		assert_eq!(c, Colour { r: 0, g: 255, b: 16 });
		assert_eq!(c.packed(), 0x07E2);
	}

	#[test]
	fn rejects_garbage() {
		assert!("".parse::<Colour>().is_err());
		assert!("#fff".parse::<Colour>().is_err());
		assert!("gg0000".parse::<Colour>().is_err());
		assert!("1,2".parse::<Colour>().is_err());
		assert!("1,2,300".parse::<Colour>().is_err());
		assert!("éé00".parse::<Colour>().is_err());
	}

	#[test]
	fn packs_primaries() {
		assert_eq!("#ff0000".parse::<Colour>().unwrap().packed(), 0xF800);
		assert_eq!("00ff00".parse::<Colour>().unwrap().packed(), 0x07E0);
		assert_eq!("0,0,255".parse::<Colour>().unwrap().packed(), 0x001F);
	}
}
