use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Outcome of one trial write while probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Probe {
	Sent,
	TooLong,
}

const PROBE_START: usize = 2048;
const PROBE_STEP: usize = 64;

/// Writes this long are assumed to always fit, so a bus that never refuses still ends the probe.
pub(crate) const PROBE_CAP: usize = 1024 * 1024;

/// Find the longest write `send` accepts.
///
/// Lengths double from 2 KiB until a write is refused, then come down in 64-byte steps until one
/// goes through again. `send` must write exactly `n` bytes in one go: if it splits the write
/// itself, nothing is ever refused and the result is just [`PROBE_CAP`].
pub(crate) fn probe_length(mut send: impl FnMut(usize) -> Result<Probe>) -> Result<usize> {
	let mut n = PROBE_START;

	// increase exponentially until we hit the limit
	loop {
		trace!(n, "trying write length");
		match send(n)? {
			Probe::Sent if n >= PROBE_CAP => {
				debug!(n, "never refused, stopping at the cap");
				return Ok(PROBE_CAP);
			}
			Probe::Sent => n *= 2,
			Probe::TooLong => break,
		}
	}

	// decrease linearly until we can send again
	loop {
		if n <= PROBE_STEP {
			return Err(Error::Io(std::io::Error::other(
				"no usable SPI write length found",
			)));
		}

		n -= PROBE_STEP;
		trace!(n, "trying write length");
		if send(n)? == Probe::Sent {
			return Ok(n);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn limited(limit: usize, tried: &mut Vec<usize>) -> impl FnMut(usize) -> Result<Probe> + '_ {
		move |n| {
			tried.push(n);
			Ok(if n <= limit { Probe::Sent } else { Probe::TooLong })
		}
	}

	#[test]
	fn finds_the_default_spidev_bufsiz() {
		let mut tried = Vec::new();
		assert_eq!(probe_length(limited(4096, &mut tried)).unwrap(), 4096);
		assert_eq!(tried[..3], [2048, 4096, 8192]);
		assert_eq!(tried.last(), Some(&4096));
	}

	#[test]
	fn steps_down_to_a_multiple_of_the_step() {
		let mut tried = Vec::new();
		assert_eq!(probe_length(limited(5000, &mut tried)).unwrap(), 4992);
	}

	#[test]
	fn limit_below_the_start() {
		let mut tried = Vec::new();
		assert_eq!(probe_length(limited(1000, &mut tried)).unwrap(), 960);
		assert_eq!(tried[0], 2048);
	}

	#[test]
	fn never_refused_stops_at_the_cap() {
		let mut tried = Vec::new();
		assert_eq!(probe_length(limited(usize::MAX, &mut tried)).unwrap(), PROBE_CAP);
		// 2 KiB doubled nine times
		assert_eq!(tried.len(), 10);
		assert_eq!(tried.last(), Some(&PROBE_CAP));
	}

	#[test]
	fn always_refused_is_an_error() {
		let mut tried = Vec::new();
		assert!(matches!(
			probe_length(limited(0, &mut tried)),
			Err(Error::Io(_))
		));
		assert_eq!(tried.last(), Some(&PROBE_STEP));
	}

	#[test]
	fn other_errors_propagate() {
		let mut calls = 0;
		let result = probe_length(|_| {
			calls += 1;
			Err(Error::Io(std::io::Error::other("bus gone")))
		});
		assert!(result.is_err());
		assert_eq!(calls, 1);
	}
}
