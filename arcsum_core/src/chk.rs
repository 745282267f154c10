/*!
# ARCSum: Checksums
*/

use crate::{
	EDGE_WORDS,
	SampleBuffer,
	TrackPosition,
};
use std::fmt;



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Checksum Version.
///
/// AccurateRip switched up checksum formats somewhere along the way. Both
/// are still in use, but v2 is the one to prefer.
pub enum ChecksumVersion {
	/// # Version One.
	V1,

	#[default]
	/// # Version Two.
	V2,
}

impl fmt::Display for ChecksumVersion {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::V1 => "v1",
			Self::V2 => "v2",
		})
	}
}



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Checksum Result.
///
/// This holds the v1 and v2 AccurateRip checksums for a track.
pub struct ChecksumResult {
	/// # Version One.
	v1: u32,

	/// # Version Two.
	v2: u32,
}

impl fmt::Display for ChecksumResult {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:08X} {:08X}", self.v1, self.v2)
	}
}

impl From<ChecksumResult> for (u32, u32) {
	#[inline]
	fn from(src: ChecksumResult) -> Self { (src.v1, src.v2) }
}

impl ChecksumResult {
	#[must_use]
	/// # Get (By Version).
	pub const fn get(self, version: ChecksumVersion) -> u32 {
		match version {
			ChecksumVersion::V1 => self.v1,
			ChecksumVersion::V2 => self.v2,
		}
	}

	#[must_use]
	/// # Version One.
	pub const fn v1(self) -> u32 { self.v1 }

	#[must_use]
	/// # Version Two.
	pub const fn v2(self) -> u32 { self.v2 }
}



#[must_use]
#[allow(clippy::cast_possible_truncation)]
/// # AccurateRip Checksums.
///
/// Crunch the v1 and v2 checksums for a track in a single pass.
///
/// The computations are non-standard, but are more or less the sum of the
/// product of each sample pair (in word form) and its one-indexed position.
/// Sixty-four bits are used for the products; v1 keeps only the low half,
/// while v2 adds the high half back in.
///
/// All positions are factored, except the first `2939` of the first track,
/// and the last `2940` of the last track. (Tracks can be both first and
/// last; if so, both are excluded.)
///
/// A last track shorter than `2940` words has nothing left to crunch and
/// sums to zero. (Some 32-bit implementations let that subtraction wrap
/// around and crunch everything instead; real CD tracks are never that
/// short.)
///
/// Overflow is expected; all sums wrap.
pub fn checksum(buf: &SampleBuffer, pos: TrackPosition) -> ChecksumResult {
	let data = buf.as_slice();

	// Figure out which positions we need to crunch. Note: these are the
	// one-indexed multipliers, not the zero-indexed offsets, and the range is
	// inclusive on both ends.
	let check_from =
		if pos.is_first() { EDGE_WORDS }
		else { 0 };
	let check_to =
		if pos.is_last() { data.len().saturating_sub(EDGE_WORDS) }
		else { data.len() };

	// Crunch!
	let mut lo = 0_u32;
	let mut hi = 0_u32;
	let mut multiplier = 0_u64;
	for &word in data {
		multiplier += 1;
		if (check_to as u64) < multiplier { break; }
		if (check_from as u64) <= multiplier {
			let kv = u64::from(word) * multiplier;
			lo = lo.wrapping_add(kv as u32);
			hi = hi.wrapping_add((kv >> 32) as u32);
		}
	}

	ChecksumResult {
		v1: lo,
		v2: lo.wrapping_add(hi),
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::SAMPLES_PER_SECTOR;

	/// # Xorshift.
	///
	/// A tiny deterministic noise source for test data.
	fn noise(seed: u32, len: usize) -> Vec<u32> {
		let mut x = seed | 1;
		(0..len).map(|_| {
			x ^= x << 13;
			x ^= x >> 17;
			x ^= x << 5;
			x
		}).collect()
	}

	/// # Buffer From Words.
	fn buffer(words: &[u32]) -> SampleBuffer {
		let raw: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
		SampleBuffer::try_from(raw.as_slice()).expect("Unable to build buffer.")
	}

	/// # Position.
	fn pos(number: u8, total: u8) -> TrackPosition {
		TrackPosition::try_from((number, total)).expect("Invalid position.")
	}

	/// # Slow Reference.
	///
	/// Work out the sums the long way, returning `(lo, hi)` with a wide
	/// accumulator truncated at the very end.
	fn reference(words: &[u32], from: usize, to: usize) -> (u32, u32) {
		let mut lo = 0_u128;
		let mut hi = 0_u128;
		for (k, w) in (1_usize..).zip(words) {
			if from <= k && k <= to {
				let kv = u128::from(*w) * k as u128;
				lo += kv & 0xFFFF_FFFF;
				hi += kv >> 32;
			}
		}
		((lo & 0xFFFF_FFFF) as u32, (hi & 0xFFFF_FFFF) as u32)
	}

	#[test]
	fn t_silence() {
		for len in [0, 1, 588, 2940, 2941, 5880, 44_100] {
			let buf = buffer(&vec![0; len]);
			for (n, t) in [(1, 1), (1, 10), (5, 10), (10, 10)] {
				let chk = checksum(&buf, pos(n, t));
				assert_eq!(
					(chk.v1(), chk.v2()),
					(0, 0),
					"Silence produced a checksum ({len}, {n}/{t}).",
				);
			}
		}
	}

	#[test]
	fn t_single_sector() {
		// The edge exclusions are bigger than one sector, so nothing counts.
		let words = noise(12_345, usize::from(SAMPLES_PER_SECTOR));
		let chk = checksum(&buffer(&words), pos(1, 1));
		assert_eq!(chk, ChecksumResult::default(), "Tiny lonely track should be all-zero.");
	}

	#[test]
	fn t_one_word() {
		for w in [1_u32, 0xDEAD_BEEF, u32::MAX] {
			let chk = checksum(&buffer(&[w]), pos(2, 3));
			assert_eq!(chk.v1(), w, "Lone word should be its own checksum.");
			assert_eq!(chk.v2(), chk.v1(), "Multiplier one has no high bits.");
		}
	}

	#[test]
	fn t_window_first() {
		let len = 10_000;

		// Multiplier 2939 is out, 2940 is in.
		let mut words = vec![0; len];
		words[EDGE_WORDS - 2] = 7;
		assert_eq!(checksum(&buffer(&words), pos(1, 3)).v1(), 0);
		assert_eq!(checksum(&buffer(&words), pos(2, 3)).v1(), 7 * 2939);

		let mut words = vec![0; len];
		words[EDGE_WORDS - 1] = 7;
		assert_eq!(checksum(&buffer(&words), pos(1, 3)).v1(), 7 * 2940);
	}

	#[test]
	fn t_window_last() {
		let len = 10_000;
		let last_in = len - EDGE_WORDS; // One-indexed.

		let mut words = vec![0; len];
		words[last_in - 1] = 3;
		assert_eq!(
			checksum(&buffer(&words), pos(3, 3)).v1(),
			3 * 7060,
			"Last included position was skipped.",
		);

		let mut words = vec![0; len];
		words[last_in] = 3;
		assert_eq!(checksum(&buffer(&words), pos(3, 3)).v1(), 0);
		assert_eq!(checksum(&buffer(&words), pos(2, 3)).v1(), 3 * 7061);

		// The very end only counts for middle tracks.
		let mut words = vec![0; len];
		words[len - 1] = 1;
		assert_eq!(checksum(&buffer(&words), pos(3, 3)).v1(), 0);
		assert_eq!(checksum(&buffer(&words), pos(1, 3)).v1(), 10_000);
	}

	#[test]
	fn t_window_short_last() {
		// The window closes entirely when the track is shorter than the
		// exclusion.
		let words = noise(99, 100);
		assert_eq!(checksum(&buffer(&words), pos(4, 4)), ChecksumResult::default());
	}

	#[test]
	fn t_wrap() {
		// Ten max words, middle track. Each product is k * 2^32 - k, so the
		// low halves sum to -55 and the high halves to 45.
		let chk = checksum(&buffer(&[u32::MAX; 10]), pos(2, 3));
		assert_eq!(chk.v1(), 0xFFFF_FFC9, "v1 did not wrap correctly.");
		assert_eq!(chk.v2(), 0xFFFF_FFF6, "v2 did not wrap correctly.");
	}

	#[test]
	fn t_reference() {
		for (seed, len) in [(1, 6000), (2, 11_760), (3, 44_100), (4, 2941), (5, 3)] {
			let words = noise(seed, len);
			let buf = buffer(&words);
			for (n, t) in [(1, 1), (1, 12), (6, 12), (12, 12)] {
				let p = pos(n, t);
				let from = if p.is_first() { EDGE_WORDS } else { 0 };
				let to = if p.is_last() { len.saturating_sub(EDGE_WORDS) } else { len };
				let (lo, hi) = reference(&words, from, to);

				let chk = checksum(&buf, p);
				assert_eq!(chk.v1(), lo, "v1 mismatch ({seed}, {n}/{t}).");
				assert_eq!(chk.v2(), chk.v1().wrapping_add(hi), "v2 mismatch ({seed}, {n}/{t}).");

				// And again, for consistency.
				assert_eq!(checksum(&buf, p), chk, "Checksums are not deterministic.");
			}
		}
	}

	#[test]
	fn t_result() {
		let chk = checksum(&buffer(&[u32::MAX; 10]), pos(2, 3));
		assert_eq!(chk.get(ChecksumVersion::V1), chk.v1());
		assert_eq!(chk.get(ChecksumVersion::V2), chk.v2());
		assert_eq!(chk.get(ChecksumVersion::default()), chk.v2());
		assert_eq!(chk.to_string(), "FFFFFFC9 FFFFFFF6");
		assert_eq!(<(u32, u32)>::from(chk), (0xFFFF_FFC9, 0xFFFF_FFF6));
	}
}
