/*!
# ARCSum: Sample Buffer
*/

use crate::{
	ArcError,
	BYTES_PER_SAMPLE,
	LoadError,
};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Sample Buffer.
///
/// This holds an entire track's worth of audio as a sequence of 32-bit
/// words, one per stereo sample, which is how AccurateRip wants to see it.
///
/// Each word is the little-endian glue of the left and right channels, left
/// in the low half, right in the high half. (This is the same thing you'd get
/// reading raw CD audio four bytes at a time.)
///
/// Buffers are built once and never changed afterwards.
pub struct SampleBuffer(Box<[u32]>);

impl From<Vec<u32>> for SampleBuffer {
	#[inline]
	fn from(src: Vec<u32>) -> Self { Self(src.into_boxed_slice()) }
}

impl TryFrom<&[i16]> for SampleBuffer {
	type Error = ArcError;

	/// # From Interleaved Samples.
	///
	/// ## Errors
	///
	/// The slice must hold whole stereo pairs (an even number of samples);
	/// if not, or if memory can't be had, an error is returned.
	fn try_from(src: &[i16]) -> Result<Self, Self::Error> {
		if src.len() % 2 != 0 {
			return Err(ArcError::LoadFailed(LoadError::Misaligned(src.len() * 2)));
		}

		let mut out: Vec<u32> = Vec::new();
		out.try_reserve_exact(src.len().wrapping_div(2))
			.map_err(|_| ArcError::LoadFailed(LoadError::Alloc))?;
		out.extend(src.chunks_exact(2).map(|pair| word(pair[0], pair[1])));

		Ok(Self(out.into_boxed_slice()))
	}
}

impl TryFrom<&[u8]> for SampleBuffer {
	type Error = ArcError;

	/// # From Raw Bytes.
	///
	/// The bytes are expected to be raw little-endian CD audio: 16-bit
	/// samples, interleaved left/right.
	///
	/// ## Errors
	///
	/// The length must be a multiple of four; if not, or if memory can't be
	/// had, an error is returned.
	fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
		let chunk = usize::from(BYTES_PER_SAMPLE);
		if src.len() % chunk != 0 {
			return Err(ArcError::LoadFailed(LoadError::Misaligned(src.len())));
		}

		let mut out: Vec<u32> = Vec::new();
		out.try_reserve_exact(src.len().wrapping_div(chunk))
			.map_err(|_| ArcError::LoadFailed(LoadError::Alloc))?;
		out.extend(
			src.chunks_exact(chunk)
				.map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
		);

		Ok(Self(out.into_boxed_slice()))
	}
}

impl SampleBuffer {
	#[must_use]
	/// # As Slice.
	pub fn as_slice(&self) -> &[u32] { &self.0 }

	#[must_use]
	/// # Byte Length.
	pub fn byte_len(&self) -> usize {
		self.0.len() * usize::from(BYTES_PER_SAMPLE)
	}

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	#[must_use]
	/// # Length (Words).
	pub fn len(&self) -> usize { self.0.len() }
}



#[must_use]
/// # Stereo Pair to Word.
///
/// Left in the low half, right in the high half.
pub(crate) const fn word(left: i16, right: i16) -> u32 {
	let [a, b] = left.to_le_bytes();
	let [c, d] = right.to_le_bytes();
	u32::from_le_bytes([a, b, c, d])
}
