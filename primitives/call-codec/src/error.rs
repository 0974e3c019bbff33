// This file is part of Substrate Call Codec.

// Copyright (C) Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error taxonomy shared by the codec and the call builders.
//!
//! Errors are split by the layer that detects them: [`ValidationError`] for domain input
//! rejected by a builder, [`EncodingError`] for values that have no representation in the
//! wire shape and [`DecodingError`] for byte sequences that can not be read back.

/// Domain input rejected before a payload is constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	/// A nomination must name at least one target.
	#[error("nomination targets must not be empty")]
	EmptyTargets,
	/// More targets than the runtime accepts.
	#[error("{actual} nomination targets exceed the maximum of {max}")]
	TooManyTargets { max: u32, actual: usize },
	/// Account bytes of the wrong size.
	#[error("account id must be {expected} bytes, got {actual}")]
	InvalidAccountLength { expected: usize, actual: usize },
	/// The destination form can not be used with the selected transfer layout.
	#[error("destination of kind `{0}` is not supported by this transfer layout")]
	UnsupportedDestination(&'static str),
	/// The address resolver could not map a textual address.
	#[error("unable to resolve address `{address}`: {reason}")]
	UnresolvedAddress { address: String, reason: String },
	/// Pool metadata longer than the configured bound.
	#[error("pool metadata of {actual} bytes exceeds the maximum of {max}")]
	MetadataTooLong { max: u32, actual: usize },
	/// Locations carry at most eight junctions.
	#[error("location has {0} junctions, at most 8 are allowed")]
	TooManyJunctions(usize),
}

/// A value that can not be represented in its target wire shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
	/// The integer needs more bytes than the compact format allows.
	#[error("value needs {bytes} bytes, compact encoding allows at most {max}")]
	ValueTooLarge { bytes: usize, max: usize },
	/// Fixed size field received the wrong number of bytes.
	#[error("expected {expected} bytes, got {actual}")]
	LengthMismatch { expected: usize, actual: usize },
	/// The address form has no raw account bytes.
	#[error("address of kind `{0}` has no raw account representation")]
	UnsupportedAddress(&'static str),
}

/// Input that can not be decoded into the requested shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodingError {
	/// Fewer bytes are available than the input declares.
	#[error("input truncated: needed {needed} bytes, {available} available")]
	Truncated { needed: usize, available: usize },
	/// None of the candidate discriminants matched.
	#[error("no candidate variant matched `{found}`")]
	UnknownVariant { found: String },
	/// A variant declared with an empty marker was followed by something else.
	#[error("variant `{tag}` expects an empty marker, found {found:#04x}")]
	MissingEmptyMarker { tag: String, found: u8 },
	/// Compact integer encoded with more bytes than needed.
	#[error("compact integer is not canonically encoded")]
	NonCanonical,
	/// Decimal amount with non-digit characters or leading zeros.
	#[error("`{0}` is not a canonical decimal amount")]
	InvalidDecimal(String),
	/// String payload is not valid UTF-8.
	#[error("string payload is not valid UTF-8")]
	InvalidUtf8,
	/// Presence byte of an optional value other than `0` or `1`.
	#[error("invalid presence byte {0:#04x}")]
	InvalidPresence(u8),
	/// Decoded value violates a payload invariant.
	#[error("decoded value is invalid: {0}")]
	Invalid(#[from] ValidationError),
	/// Bytes left over after the whole value was decoded.
	#[error("{0} trailing bytes after decoding")]
	TrailingBytes(usize),
	/// Error reported by the underlying SCALE codec.
	#[error("codec error: {0}")]
	Codec(String),
}

impl From<codec::Error> for DecodingError {
	fn from(error: codec::Error) -> Self {
		DecodingError::Codec(error.to_string())
	}
}
