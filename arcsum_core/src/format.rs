/*!
# ARCSum: Audio Format
*/

use crate::{
	ArcError,
	CD_CHANNELS,
	CD_SAMPLE_RATE,
};
use std::fmt;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # PCM Subtype.
///
/// The sample encoding reported by the decoder. Only `Int16` is of any use
/// to AccurateRip, but the rest are named so rejections can say what they
/// actually got.
pub enum PcmSubtype {
	/// # 8-bit Integer.
	Int8,

	/// # 16-bit Integer.
	Int16,

	/// # 24-bit Integer.
	Int24,

	/// # 32-bit Integer.
	Int32,

	/// # 32-bit Float.
	Float32,

	/// # Something Else (Bits).
	Other(u16),
}

impl fmt::Display for PcmSubtype {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int8 => f.write_str("8-bit PCM"),
			Self::Int16 => f.write_str("16-bit PCM"),
			Self::Int24 => f.write_str("24-bit PCM"),
			Self::Int32 => f.write_str("32-bit PCM"),
			Self::Float32 => f.write_str("32-bit float"),
			Self::Other(n) => write!(f, "{n}-bit ???"),
		}
	}
}

impl From<(hound::SampleFormat, u16)> for PcmSubtype {
	fn from((kind, bits): (hound::SampleFormat, u16)) -> Self {
		match (kind, bits) {
			(hound::SampleFormat::Int, 8) => Self::Int8,
			(hound::SampleFormat::Int, 16) => Self::Int16,
			(hound::SampleFormat::Int, 24) => Self::Int24,
			(hound::SampleFormat::Int, 32) => Self::Int32,
			(hound::SampleFormat::Float, 32) => Self::Float32,
			(_, n) => Self::Other(n),
		}
	}
}



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Audio Format.
///
/// This is the decoded stream profile as reported by the decoder: channels,
/// sample rate, sample encoding, and length (in frames, i.e. samples per
/// channel).
///
/// The container it came from doesn't matter here.
pub struct AudioFormat {
	/// # Channels.
	channels: u16,

	/// # Sample Rate (Hz).
	sample_rate: u32,

	/// # Sample Encoding.
	subtype: PcmSubtype,

	/// # Frames.
	frames: u64,
}

impl fmt::Display for AudioFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} channel(s), {}Hz, {}",
			self.channels,
			self.sample_rate,
			self.subtype,
		)
	}
}

impl From<(hound::WavSpec, u32)> for AudioFormat {
	/// # From Hound.
	///
	/// Hound keeps the length separate from the spec, so it has to be passed
	/// alongside. (This is `WavReader::duration`, which is already in frames.)
	fn from((spec, frames): (hound::WavSpec, u32)) -> Self {
		Self {
			channels: spec.channels,
			sample_rate: spec.sample_rate,
			subtype: PcmSubtype::from((spec.sample_format, spec.bits_per_sample)),
			frames: u64::from(frames),
		}
	}
}

/// # Getters.
impl AudioFormat {
	#[must_use]
	/// # New.
	pub const fn new(channels: u16, sample_rate: u32, subtype: PcmSubtype, frames: u64)
	-> Self {
		Self { channels, sample_rate, subtype, frames }
	}

	#[must_use]
	/// # Channels.
	pub const fn channels(&self) -> u16 { self.channels }

	#[must_use]
	/// # Frames.
	pub const fn frames(&self) -> u64 { self.frames }

	#[must_use]
	/// # Sample Rate.
	pub const fn sample_rate(&self) -> u32 { self.sample_rate }

	#[must_use]
	/// # Sample Encoding.
	pub const fn subtype(&self) -> PcmSubtype { self.subtype }

	#[must_use]
	/// # Duration (Seconds).
	///
	/// Return the whole number of seconds represented, rounded down.
	pub const fn seconds(&self) -> u64 {
		if self.sample_rate == 0 { 0 }
		else { self.frames.wrapping_div(self.sample_rate as u64) }
	}
}

/// # Validation.
impl AudioFormat {
	#[must_use]
	/// # Is AccurateRip-Compatible?
	///
	/// Returns `true` if the stream is 16-bit stereo PCM at 44.1kHz, i.e.
	/// plain old CD audio.
	pub const fn is_accuraterip(&self) -> bool {
		self.channels == CD_CHANNELS &&
		self.sample_rate == CD_SAMPLE_RATE &&
		matches!(self.subtype, PcmSubtype::Int16)
	}

	/// # Validate.
	///
	/// Same as `AudioFormat::is_accuraterip`, but as a `Result`.
	///
	/// ## Errors
	///
	/// Returns `ArcError::FormatRejected` if the format is anything other than
	/// 16-bit stereo PCM at 44.1kHz.
	pub fn validate(&self) -> Result<(), ArcError> {
		if self.is_accuraterip() { Ok(()) }
		else { Err(ArcError::FormatRejected(*self)) }
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_accept() {
		for frames in [0, 1, 588, 44_100 * 240] {
			let fmt = AudioFormat::new(2, 44_100, PcmSubtype::Int16, frames);
			assert!(fmt.is_accuraterip(), "CD format rejected with {frames} frames.");
			assert_eq!(fmt.validate(), Ok(()));
		}
	}

	#[test]
	fn t_reject() {
		for fmt in [
			AudioFormat::new(1, 44_100, PcmSubtype::Int16, 100),
			AudioFormat::new(6, 44_100, PcmSubtype::Int16, 100),
			AudioFormat::new(2, 48_000, PcmSubtype::Int16, 100),
			AudioFormat::new(2, 22_050, PcmSubtype::Int16, 100),
			AudioFormat::new(2, 44_100, PcmSubtype::Int8, 100),
			AudioFormat::new(2, 44_100, PcmSubtype::Int24, 100),
			AudioFormat::new(2, 44_100, PcmSubtype::Int32, 100),
			AudioFormat::new(2, 44_100, PcmSubtype::Float32, 100),
			AudioFormat::new(2, 44_100, PcmSubtype::Other(12), 100),
			AudioFormat::new(1, 48_000, PcmSubtype::Int24, 100),
		] {
			assert!(! fmt.is_accuraterip(), "Bad format accepted: {fmt}.");
			assert_eq!(fmt.validate(), Err(ArcError::FormatRejected(fmt)));
		}
	}

	#[test]
	fn t_hound() {
		let spec = hound::WavSpec {
			channels: 2,
			sample_rate: 44_100,
			bits_per_sample: 16,
			sample_format: hound::SampleFormat::Int,
		};
		let fmt = AudioFormat::from((spec, 88_200));
		assert_eq!(fmt, AudioFormat::new(2, 44_100, PcmSubtype::Int16, 88_200));
		assert_eq!(fmt.seconds(), 2);
		assert!(fmt.is_accuraterip());

		let spec = hound::WavSpec {
			channels: 2,
			sample_rate: 44_100,
			bits_per_sample: 32,
			sample_format: hound::SampleFormat::Float,
		};
		let fmt = AudioFormat::from((spec, 88_200));
		assert_eq!(fmt.subtype(), PcmSubtype::Float32);
		assert!(! fmt.is_accuraterip(), "Float audio should be rejected.");
	}
}
