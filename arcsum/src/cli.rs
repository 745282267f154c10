/*!
# ARCSum: CLI
*/

use argyle::Argument;
use arcsum_core::{
	ArcError,
	ArcOptions,
	ChecksumVersion,
	TrackPosition,
};
use dactyl::traits::BytesToUnsigned;
use std::{
	ffi::OsString,
	path::PathBuf,
};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Input Source.
pub(super) enum Input {
	/// # A File.
	File(PathBuf),

	/// # STDIN.
	Stdin,
}

impl From<OsString> for Input {
	fn from(src: OsString) -> Self {
		if src == "-" { Self::Stdin }
		else { Self::File(PathBuf::from(src)) }
	}
}



/// # Parse Options.
pub(super) fn parse() -> Result<(ArcOptions, Input, TrackPosition), ArcError> {
	let args = argyle::args()
		.with_keywords(include!(concat!(env!("OUT_DIR"), "/argyle.rs")));

	let mut opts = ArcOptions::default();
	let mut rest: Vec<OsString> = Vec::with_capacity(3);
	for arg in args {
		match arg {
			Argument::Key("--accuraterip-v1") => {
				opts = opts.with_version(ChecksumVersion::V1);
			},
			Argument::Key("--accuraterip-v2") => {
				opts = opts.with_version(ChecksumVersion::V2);
			},
			Argument::Key("--both") => { opts = opts.with_both(true); },
			Argument::Key("-h" | "--help") => return Err(ArcError::PrintHelp),
			Argument::Key("-v" | "--verbose") => { opts = opts.with_verbose(true); },
			Argument::Key("-V" | "--version") => return Err(ArcError::PrintVersion),

			Argument::Other(s) => { rest.push(positional(s)?); },
			Argument::InvalidUtf8(s) => { rest.push(s); },

			_ => {},
		}
	}

	let (src, pos) = parse_positional(rest)?;
	Ok((opts, src, pos))
}



/// # Positional Argument.
///
/// Anything dash-prefixed that made it this far is an unknown flag, except a
/// lone `-`, which means STDIN.
fn positional(src: String) -> Result<OsString, ArcError> {
	if src.starts_with('-') && src != "-" { Err(ArcError::CliArg(src)) }
	else { Ok(OsString::from(src)) }
}

/// # Parse Positional Arguments.
///
/// There should be exactly three: the file, the track number, and the total
/// number of tracks. The position is validated here, before anything gets
/// opened.
fn parse_positional(mut rest: Vec<OsString>) -> Result<(Input, TrackPosition), ArcError> {
	if rest.len() != 3 {
		return Err(ArcError::CliArg(format!(
			"expected <FILE> <TRACK> <TOTAL>, not {} argument(s).",
			rest.len(),
		)));
	}

	let total = parse_track_num(&rest[2], "<TOTAL>")?;
	let number = parse_track_num(&rest[1], "<TRACK>")?;
	let pos = TrackPosition::try_from((number, total))?;

	let src = Input::from(rest.swap_remove(0));
	Ok((src, pos))
}

/// # Parse Track Number.
fn parse_track_num(src: &OsString, label: &'static str) -> Result<u8, ArcError> {
	src.to_str()
		.and_then(|s| u8::btou(s.as_bytes().trim_ascii()))
		.ok_or(ArcError::CliParse(label))
}
