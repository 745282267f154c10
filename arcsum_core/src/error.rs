/*!
# ARCSum: Errors
*/

use crate::AudioFormat;
use fyi_msg::Msg;
use std::{
	error::Error,
	fmt,
};

#[cfg(feature = "bin")]
use fyi_ansi::{
	ansi,
	csi,
};



#[cfg(feature = "bin")]
/// # Help Text.
const HELP: &str = concat!(r"
     .--.
    |o_o |    ", csi!(199), "ARCSum", ansi!((cornflower_blue) " v", env!("CARGO_PKG_VERSION")), r"
    |:_/ |    AccurateRip checksums for
   //   \ \   individual CD tracks.
  (|     | )
 /'\_   _/`\
 \___)=(___/

USAGE:
    arcsum [FLAGS] <FILE> <TRACK> <TOTAL>

FLAGS:
        --accuraterip-v1
                      Print the AccurateRip v1 checksum.
        --accuraterip-v2
                      Print the AccurateRip v2 checksum. [default]
        --both        Print both checksums, v1 first, separated by a space.
    -h, --help        Print help information to STDOUT and exit.
    -v, --verbose     Print the decoded format details and both checksums
                      to STDERR.
    -V, --version     Print version information to STDOUT and exit.

ARGS:
    <FILE>            A WAV file holding exactly one track of 16-bit stereo
                      PCM at 44.1kHz. Use - to read from STDIN, e.g.:
                      flac -cds 03.flac | arcsum - 3 12
    <TRACK>           The track number. [range: 1..=TOTAL]
    <TOTAL>           The total number of audio tracks on the disc.
                      [range: 1..=99]
");



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Errors.
pub enum ArcError {
	/// # Unsupported Audio Format.
	FormatRejected(AudioFormat),

	/// # Unable to Load Samples.
	LoadFailed(LoadError),

	/// # Invalid Total Tracks.
	TotalTracks(u8),

	/// # Invalid Track Number.
	TrackNumber(u8),

	#[cfg(feature = "bin")]
	/// # Invalid CLI arg.
	CliArg(String),

	#[cfg(feature = "bin")]
	/// # CLI Parsing failure.
	CliParse(&'static str),

	#[cfg(feature = "bin")]
	/// # Print Help (Not an Error).
	PrintHelp,

	#[cfg(feature = "bin")]
	/// # Print Version (Not an Error).
	PrintVersion,
}

impl Error for ArcError {}

impl From<LoadError> for ArcError {
	#[inline]
	fn from(err: LoadError) -> Self { Self::LoadFailed(err) }
}

impl From<hound::Error> for ArcError {
	#[inline]
	fn from(err: hound::Error) -> Self { Self::LoadFailed(LoadError::from(err)) }
}

impl From<ArcError> for Msg {
	#[inline]
	fn from(src: ArcError) -> Self { Self::error(src.to_string()) }
}

impl fmt::Display for ArcError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::FormatRejected(s) => write!(
				f,
				"Unsupported audio format ({s}); AccurateRip requires 16-bit stereo PCM at 44.1kHz.",
			),
			Self::LoadFailed(s) => write!(f, "{s}"),
			Self::TotalTracks(n) => write!(f, "Invalid total tracks ({n}); discs have between 1 and 99."),
			Self::TrackNumber(n) => write!(f, "Invalid track number ({n})."),

			#[cfg(feature = "bin")]
			Self::CliArg(s) => write!(f, "Invalid CLI option: {s}"),

			#[cfg(feature = "bin")]
			Self::CliParse(s) => write!(f, "Unable to parse {s}."),

			#[cfg(feature = "bin")]
			Self::PrintHelp => f.write_str(HELP),

			#[cfg(feature = "bin")]
			Self::PrintVersion => f.write_str(concat!("ARCSum v", env!("CARGO_PKG_VERSION"))),
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Load Errors.
///
/// These are all the different ways the decoded audio can fail to make it
/// into a `SampleBuffer`. None of them are recoverable.
pub enum LoadError {
	/// # Allocation Failure.
	Alloc,

	/// # Decoder Error.
	Decode(String),

	/// # Byte Length Not Divisible Into Words.
	Misaligned(usize),

	/// # Unable to Open Source.
	Open(String),

	/// # Numbers Too Big for This Platform.
	Overflow,

	/// # Fewer Frames Than Advertised.
	ShortRead {
		/// # Expected Frames.
		expected: usize,

		/// # Frames Actually Read.
		actual: usize,
	},
}

impl Error for LoadError {}

impl From<hound::Error> for LoadError {
	#[inline]
	fn from(err: hound::Error) -> Self { Self::Decode(err.to_string()) }
}

impl fmt::Display for LoadError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Alloc => f.write_str("Unable to allocate enough memory for the track."),
			Self::Decode(s) => write!(f, "Unable to decode audio: {s}"),
			Self::Misaligned(n) => write!(f, "The audio data ({n} bytes) does not divide evenly into stereo samples."),
			Self::Open(s) => write!(f, "Unable to open {s}."),
			Self::Overflow => f.write_str("The numbers are too big for this system architecture."),
			Self::ShortRead { expected, actual } => write!(
				f,
				"Short read: expected {expected} frames, got {actual}.",
			),
		}
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_load_into_arc() {
		let err = ArcError::from(LoadError::ShortRead { expected: 10, actual: 9 });
		assert_eq!(
			err,
			ArcError::LoadFailed(LoadError::ShortRead { expected: 10, actual: 9 }),
			"LoadError did not convert into ArcError::LoadFailed.",
		);
		assert_eq!(
			err.to_string(),
			"Short read: expected 10 frames, got 9.",
			"LoadFailed should pass its message through unchanged.",
		);
	}

	#[test]
	fn t_hound_into_arc() {
		let err = ArcError::from(hound::Error::FormatError("no fmt chunk"));
		assert!(
			matches!(err, ArcError::LoadFailed(LoadError::Decode(_))),
			"Decoder errors should be LoadFailed/Decode: {err:?}",
		);

		// Hound brings its own punctuation.
		let err = LoadError::Decode("Failed to read enough bytes.".to_owned());
		assert_eq!(
			err.to_string(),
			"Unable to decode audio: Failed to read enough bytes.",
			"Decode message should pass through as-is.",
		);
	}

	#[cfg(feature = "bin")]
	#[test]
	fn t_help() {
		let help = ArcError::PrintHelp.to_string();
		assert!(help.contains("ARCSum"), "Help is missing the app name.");
		assert!(help.contains(env!("CARGO_PKG_VERSION")), "Help is missing the version.");
		assert!(help.contains("<FILE> <TRACK> <TOTAL>"), "Help is missing usage.");
	}
}
