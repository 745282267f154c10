/*!
# ARCSum: Audio Sources
*/

use crate::{
	ArcError,
	AudioFormat,
	buffer::word,
	CD_CHANNELS,
	checksum,
	ChecksumResult,
	LoadError,
	SAMPLES_PER_SECTOR,
	SampleBuffer,
	TrackPosition,
};
use std::{
	fmt,
	fs::File,
	io::{
		BufReader,
		Read,
	},
	path::Path,
};



/// # Read Chunk (Frames).
///
/// Samples are pulled from the source this many frames at a time and packed
/// as they go, so only the words are ever held in full.
const CHUNK_FRAMES: usize = SAMPLES_PER_SECTOR as usize * 64;



/// # PCM Source.
///
/// This is the seam between ARCSum and whatever is actually decoding the
/// audio. Implementers need only report the stream format and hand over the
/// interleaved 16-bit samples when asked.
pub trait PcmSource {
	/// # Format.
	///
	/// The decoded stream profile, including its length in frames.
	fn format(&self) -> AudioFormat;

	/// # Read Frames.
	///
	/// Fill `dst` with the next interleaved stereo samples, returning the
	/// number of whole frames (sample pairs) actually written. This is called
	/// repeatedly until the track is exhausted; anything short of
	/// `dst.len() / 2` is treated as a load failure by the caller.
	///
	/// ## Errors
	///
	/// Decoding problems should be returned as errors.
	fn read_frames(&mut self, dst: &mut [i16]) -> Result<usize, ArcError>;
}



/// # WAV Source.
///
/// A `PcmSource` backed by `hound`. This works with any reader, so files and
/// STDIN alike.
pub struct WavSource<R: Read> {
	/// # Reader.
	reader: hound::WavReader<R>,

	/// # Format.
	format: AudioFormat,
}

impl<R: Read> fmt::Debug for WavSource<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WavSource")
			.field("format", &self.format)
			.finish_non_exhaustive()
	}
}

impl WavSource<BufReader<File>> {
	/// # Open File.
	///
	/// ## Errors
	///
	/// Returns an error if the file can't be opened or its header can't be
	/// parsed.
	pub fn open<P>(src: P) -> Result<Self, ArcError>
	where P: AsRef<Path> {
		let src = src.as_ref();
		let reader = hound::WavReader::open(src).map_err(|e| ArcError::LoadFailed(
			LoadError::Open(format!("{} ({e})", src.to_string_lossy()))
		))?;
		Ok(Self::from(reader))
	}
}

impl<R: Read> From<hound::WavReader<R>> for WavSource<R> {
	fn from(reader: hound::WavReader<R>) -> Self {
		let format = AudioFormat::from((reader.spec(), reader.duration()));
		Self { reader, format }
	}
}

impl<R: Read> WavSource<R> {
	/// # New (From Reader).
	///
	/// ## Errors
	///
	/// Returns an error if the stream's header can't be parsed.
	pub fn new(src: R) -> Result<Self, ArcError> {
		let reader = hound::WavReader::new(src).map_err(|e| ArcError::LoadFailed(
			LoadError::Open(format!("stream ({e})"))
		))?;
		Ok(Self::from(reader))
	}
}

impl<R: Read> PcmSource for WavSource<R> {
	#[inline]
	fn format(&self) -> AudioFormat { self.format }

	fn read_frames(&mut self, dst: &mut [i16]) -> Result<usize, ArcError> {
		let mut read = 0_usize;
		for (slot, sample) in dst.iter_mut().zip(self.reader.samples::<i16>()) {
			*slot = sample?;
			read += 1;
		}

		Ok(read.wrapping_div(usize::from(CD_CHANNELS)))
	}
}



/// # Load Track.
///
/// Validate the source format, then read the entire track into a new
/// `SampleBuffer`.
///
/// ## Errors
///
/// Returns `ArcError::FormatRejected` if the audio isn't 16-bit stereo PCM
/// at 44.1kHz, or `ArcError::LoadFailed` if the samples can't all be read.
pub fn load<S>(src: &mut S) -> Result<SampleBuffer, ArcError>
where S: PcmSource {
	// Make sure the format is right before doing anything else.
	let format = src.format();
	format.validate()?;

	// Make room for the whole thing.
	let expected = usize::try_from(format.frames())
		.map_err(|_| LoadError::Overflow)?;
	let mut words: Vec<u32> = Vec::new();
	words.try_reserve_exact(expected).map_err(|_| LoadError::Alloc)?;

	// Read and pack a chunk at a time. It's all or nothing.
	let channels = usize::from(CD_CHANNELS);
	let mut chunk = vec![0_i16; usize::min(expected, CHUNK_FRAMES) * channels];
	let mut actual = 0;
	while actual < expected {
		let want = usize::min(expected - actual, CHUNK_FRAMES);
		let dst = &mut chunk[..want * channels];
		let got = usize::min(src.read_frames(dst)?, want);
		words.extend(dst[..got * channels].chunks_exact(2).map(|p| word(p[0], p[1])));
		actual += got;

		if got < want {
			return Err(ArcError::LoadFailed(LoadError::ShortRead { expected, actual }));
		}
	}

	Ok(SampleBuffer::from(words))
}

/// # AccurateRip Checksums (Source).
///
/// Load the audio and crunch its v1 and v2 checksums.
///
/// ## Errors
///
/// See `load`.
pub fn accuraterip<S>(src: &mut S, pos: TrackPosition)
-> Result<ChecksumResult, ArcError>
where S: PcmSource {
	let buf = load(src)?;
	Ok(checksum(&buf, pos))
}

/// # AccurateRip Checksums (File).
///
/// Same as `accuraterip`, but for a WAV file path.
///
/// ## Errors
///
/// Returns an error if the file can't be opened, isn't 16-bit stereo PCM at
/// 44.1kHz, or can't be fully read.
pub fn accuraterip_file<P>(src: P, pos: TrackPosition)
-> Result<ChecksumResult, ArcError>
where P: AsRef<Path> {
	let mut src = WavSource::open(src)?;
	accuraterip(&mut src, pos)
}
