//! Run-length codecs for the four RLE variants used across the supported
//! formats: [`packbits`], [`pcx_rle`], [`pictor_rle`] and [`aol_rle`].
//!
//! The four variants have nearly identical shapes — a control byte followed
//! by an optional value byte — but disagree on where the line between
//! "literal" and "run" sits and on how the run length is encoded. They are
//! kept as four separate functions rather than one parameterised RLE: the
//! branches that look like duplication are exactly the boundary cases the
//! tests below pin down (e.g. [`pcx_rle`]'s zero-length run still consuming
//! its value byte).
//!
//! Every decoder here is infallible: given malformed or truncated input it
//! produces best-effort output, zero-padded to the caller-supplied expected
//! length, rather than erroring. The caller never needs to distinguish "fully
//! decoded" from "padded" — both return a `Vec<u8>` of exactly
//! `expected_length` bytes.

pub mod aol_rle;
pub mod packbits;
pub mod pictor_rle;
pub mod pcx_rle;
