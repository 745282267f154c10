/*!
# ARCSum: Library

This library computes the AccurateRip v1 and v2 checksums for a single track
of a multi-track audio CD rip.

The track must be decoded to 16-bit stereo PCM at 44.1kHz (i.e. plain old CD
audio); anything else is rejected before any work is done.

## Example

```no_run
use arcsum_core::{
	accuraterip_file,
	TrackPosition,
};

let pos = TrackPosition::try_from((3, 12)).unwrap();
let chk = accuraterip_file("track03.wav", pos).unwrap();
println!("{:08X}", chk.v2());
```
*/

#![deny(unsafe_code)]

#![warn(
	clippy::filetype_is_file,
	clippy::integer_division,
	clippy::needless_borrow,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::suboptimal_flops,
	clippy::unneeded_field_pattern,
	macro_use_extern_crate,
	missing_copy_implementations,
	missing_debug_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unreachable_pub,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![allow(
	clippy::doc_markdown,
	clippy::module_name_repetitions,
	clippy::redundant_pub_crate,
)]

mod buffer;
mod chk;
mod error;
mod format;
mod opts;
mod position;
mod source;

pub use buffer::SampleBuffer;
pub use chk::{
	checksum,
	ChecksumResult,
	ChecksumVersion,
};
pub use error::{
	ArcError,
	LoadError,
};
pub use format::{
	AudioFormat,
	PcmSubtype,
};
pub use opts::{
	ArcDisplay,
	ArcOptions,
};
pub use position::TrackPosition;
pub use source::{
	accuraterip,
	accuraterip_file,
	load,
	PcmSource,
	WavSource,
};



/// # Bytes Per Sample.
///
/// A "sample" here is a stereo pair: two 16-bit channels.
pub const BYTES_PER_SAMPLE: u16 = 4;

/// # Bytes Per Sector.
///
/// This is the number of bytes per sector of _audio_ data.
pub const BYTES_PER_SECTOR: u16 = SAMPLES_PER_SECTOR * BYTES_PER_SAMPLE;

/// # Samples per sector.
pub const SAMPLES_PER_SECTOR: u16 = 588;

/// # Edge Sectors.
///
/// The number of sectors ignored at the very start of the first track and
/// the very end of the last track.
pub const EDGE_SECTORS: u16 = 5;

/// # Edge Words.
///
/// The same thing as `EDGE_SECTORS`, in checksum words.
pub const EDGE_WORDS: usize = (BYTES_PER_SECTOR as usize * EDGE_SECTORS as usize)
	.wrapping_div(BYTES_PER_SAMPLE as usize);

/// # Max Tracks.
///
/// Red Book audio discs top out at ninety-nine tracks.
pub const MAX_TRACKS: u8 = 99;

/// # Channels.
pub const CD_CHANNELS: u16 = 2;

/// # Sample Rate.
pub const CD_SAMPLE_RATE: u32 = 44_100;

