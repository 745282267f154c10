/*!
# ARCSum
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod cli;

use arcsum_core::{
	accuraterip,
	ArcError,
	ArcOptions,
	ChecksumResult,
	PcmSource,
	TrackPosition,
	WavSource,
};
use cli::Input;
use dactyl::NiceU64;
use fyi_msg::Msg;
use std::process::ExitCode;



/// # Main.
///
/// This lets us bubble up startup errors so they can be pretty-printed.
fn main() -> ExitCode {
	match main__() {
		Ok(()) => ExitCode::SUCCESS,
		Err(e @ (ArcError::PrintHelp | ArcError::PrintVersion)) => {
			println!("{e}");
			ExitCode::SUCCESS
		},
		Err(e) => {
			Msg::from(e).eprint();
			ExitCode::FAILURE
		},
	}
}

#[inline]
/// # Actual Main.
///
/// This does all the stuff.
fn main__() -> Result<(), ArcError> {
	let (opts, src, pos) = cli::parse()?;

	let chk = match src {
		Input::File(path) => {
			let mut src = WavSource::open(path)?;
			crunch(&mut src, pos, opts)?
		},
		Input::Stdin => {
			let mut src = WavSource::new(std::io::stdin().lock())?;
			crunch(&mut src, pos, opts)?
		},
	};

	println!("{}", opts.display(chk));
	Ok(())
}

/// # Crunch.
///
/// Load the track and compute its checksums, printing a few extra details
/// to STDERR along the way if verbose.
fn crunch<S>(src: &mut S, pos: TrackPosition, opts: ArcOptions)
-> Result<ChecksumResult, ArcError>
where S: PcmSource {
	if opts.verbose() {
		let fmt = src.format();
		let secs = fmt.seconds();
		Msg::info(format!("Format: {fmt}")).eprint();
		Msg::info(format!(
			"Length: {} frames ({}:{:02})",
			NiceU64::from(fmt.frames()),
			secs.wrapping_div(60),
			secs % 60,
		)).eprint();
		Msg::info(format!("Track:  {pos}")).eprint();
	}

	let chk = accuraterip(src, pos)?;

	if opts.verbose() {
		Msg::info(format!("AccurateRip v1: {:08X}", chk.v1())).eprint();
		Msg::info(format!("AccurateRip v2: {:08X}", chk.v2())).eprint();
	}

	Ok(chk)
}
