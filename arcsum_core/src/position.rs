/*!
# ARCSum: Track Position
*/

use crate::{
	ArcError,
	MAX_TRACKS,
};
use std::fmt;



#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Track Position.
///
/// This holds a (one-indexed) track number along with the total number of
/// audio tracks on the disc. The first and last tracks are treated a little
/// differently by AccurateRip, so both values are needed.
///
/// Values are restricted to `1 <= number <= total <= 99`.
pub struct TrackPosition {
	/// # Track Number.
	number: u8,

	/// # Total Tracks.
	total: u8,
}

impl TryFrom<(u8, u8)> for TrackPosition {
	type Error = ArcError;
	fn try_from((number, total): (u8, u8)) -> Result<Self, Self::Error> {
		if total == 0 || MAX_TRACKS < total { Err(ArcError::TotalTracks(total)) }
		else if number == 0 || total < number { Err(ArcError::TrackNumber(number)) }
		else { Ok(Self { number, total }) }
	}
}

impl fmt::Display for TrackPosition {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:02}/{:02}", self.number, self.total)
	}
}

impl TrackPosition {
	#[must_use]
	/// # Track Number.
	pub const fn number(self) -> u8 { self.number }

	#[must_use]
	/// # Total Tracks.
	pub const fn total(self) -> u8 { self.total }

	#[must_use]
	/// # Is First?
	pub const fn is_first(self) -> bool { self.number == 1 }

	#[must_use]
	/// # Is Last?
	pub const fn is_last(self) -> bool { self.number == self.total }
}
