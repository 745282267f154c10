/*!
# ARCSum: Options
*/

use crate::{
	ChecksumResult,
	ChecksumVersion,
};
use std::fmt;



/// # FLAG: Print Both Versions.
const FLAG_BOTH: u8 =    0b0000_0001;

/// # FLAG: Verbose.
const FLAG_VERBOSE: u8 = 0b0000_0010;



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Options.
///
/// This struct holds the output-related settings: which checksum version to
/// report, and how chatty to be about it.
///
/// Options are set using builder-style methods, like:
///
/// ```
/// use arcsum_core::{
///     ArcOptions,
///     ChecksumVersion,
/// };
///
/// let opts = ArcOptions::default()
///     .with_version(ChecksumVersion::V1)
///     .with_verbose(true);
///
/// assert_eq!(opts.version(), ChecksumVersion::V1);
/// assert!(opts.verbose());
/// assert!(! opts.both());
/// ```
pub struct ArcOptions {
	version: ChecksumVersion,
	flags: u8,
}

macro_rules! with_flag {
	($fn:ident, $flag:ident, $($doc:literal),+ $(,)?) => (
		#[must_use]
		$(
			#[doc = $doc]
		)+
		pub const fn $fn(self, v: bool) -> Self {
			let flags =
				if v { self.flags | $flag }
				else { self.flags & ! $flag };

			Self {
				flags,
				..self
			}
		}
	)
}

/// ## Setters.
impl ArcOptions {
	with_flag!(
		with_both,
		FLAG_BOTH,
		"# Print Both Versions.",
		"",
		"When `true`, report v1 and v2 together, overriding the version",
		"selection.",
		"",
		"The default is `false`.",
	);

	with_flag!(
		with_verbose,
		FLAG_VERBOSE,
		"# Verbose.",
		"",
		"When `true`, print format details and labeled checksums to STDERR.",
		"",
		"The default is `false`.",
	);

	#[must_use]
	/// # Checksum Version.
	///
	/// The default is `ChecksumVersion::V2`.
	pub const fn with_version(self, version: ChecksumVersion) -> Self {
		Self {
			version,
			..self
		}
	}
}

macro_rules! get_flag {
	($fn:ident, $flag:ident, $title:literal) => (
		#[must_use]
		#[doc = concat!("# ", $title, "?")]
		pub const fn $fn(&self) -> bool { $flag == self.flags & $flag }
	);
}

/// # Getters.
impl ArcOptions {
	get_flag!(both, FLAG_BOTH, "Print Both Versions");
	get_flag!(verbose, FLAG_VERBOSE, "Verbose");

	#[must_use]
	/// # Checksum Version.
	pub const fn version(&self) -> ChecksumVersion { self.version }

	#[must_use]
	/// # Format Result.
	///
	/// Return a displayable wrapper for the checksum(s) these options call
	/// for: one 8-digit hex value, or two, space-separated, if `both`.
	pub const fn display(&self, chk: ChecksumResult) -> ArcDisplay {
		ArcDisplay {
			chk,
			version: if self.both() { None } else { Some(self.version) },
		}
	}
}



#[derive(Debug, Clone, Copy)]
/// # Checksum Display.
///
/// See `ArcOptions::display`.
pub struct ArcDisplay {
	chk: ChecksumResult,
	version: Option<ChecksumVersion>,
}

impl fmt::Display for ArcDisplay {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if let Some(version) = self.version {
			write!(f, "{:08X}", self.chk.get(version))
		}
		else { <ChecksumResult as fmt::Display>::fmt(&self.chk, f) }
	}
}
