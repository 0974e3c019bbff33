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

//! Tagged unions on the wire.
//!
//! A variant is a discriminant followed by its payload. Two discriminant styles coexist and the
//! caller always states which one a type uses:
//!
//! - [`Discriminant::Name`]: the tag is written as a length-prefixed string, the binary form of
//!   the `["FreeBalance", "1000"]` argument arrays;
//! - [`Discriminant::Index`]: the tag is a single byte, as produced by `#[codec(index = ..)]`.
//!
//! The payload shape is declared too. A tag followed by an explicit empty marker
//! ([`VariantPayload::EmptyMarker`]) and a bare tag ([`VariantPayload::Absent`]) are different
//! byte sequences, and a decoder has to know which one to expect.

use crate::{
	error::DecodingError,
	field::{concat, DiscriminantStyle, EncodedField},
	scale::{self, NONE_MARKER},
};
use core::fmt;

/// Variant discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discriminant {
	Name(&'static str),
	Index(u8),
}

impl Discriminant {
	pub fn style(&self) -> DiscriminantStyle {
		match self {
			Discriminant::Name(_) => DiscriminantStyle::Name,
			Discriminant::Index(_) => DiscriminantStyle::Index,
		}
	}

	fn encode_to(&self, out: &mut Vec<u8>) {
		match self {
			Discriminant::Name(name) => out.extend(scale::encode_string(name)),
			Discriminant::Index(index) => out.push(*index),
		}
	}

	/// Return the input following this discriminant, if the input starts with it.
	fn strip<'a>(&self, input: &'a [u8]) -> Option<&'a [u8]> {
		match self {
			Discriminant::Name(name) => {
				let mut cursor = input;
				let found = scale::decode_string(&mut cursor).ok()?;
				(found == *name).then_some(cursor)
			},
			Discriminant::Index(index) => match input.split_first() {
				Some((found, rest)) if found == index => Some(rest),
				_ => None,
			},
		}
	}
}

impl fmt::Display for Discriminant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Discriminant::Name(name) => f.write_str(name),
			Discriminant::Index(index) => write!(f, "#{index}"),
		}
	}
}

/// Payload written after a discriminant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantPayload {
	/// Nothing follows the tag.
	Absent,
	/// A single [`NONE_MARKER`] byte follows the tag.
	EmptyMarker,
	/// The fields follow the tag in order.
	Fields(Vec<EncodedField>),
}

/// Payload shape a decoder expects for a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
	Absent,
	EmptyMarker,
	/// Fields follow. Their decoding is left to the caller.
	Fields,
}

/// One candidate of [`decode_variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSchema {
	pub tag: Discriminant,
	pub payload: PayloadShape,
}

impl VariantSchema {
	pub const fn named(name: &'static str, payload: PayloadShape) -> Self {
		Self { tag: Discriminant::Name(name), payload }
	}

	pub const fn indexed(index: u8, payload: PayloadShape) -> Self {
		Self { tag: Discriminant::Index(index), payload }
	}
}

/// Emit `tag` followed by `payload`.
pub fn encode_variant(tag: Discriminant, payload: VariantPayload) -> Vec<u8> {
	let mut out = Vec::new();
	tag.encode_to(&mut out);
	match payload {
		VariantPayload::Absent => {},
		VariantPayload::EmptyMarker => out.push(NONE_MARKER),
		VariantPayload::Fields(fields) => out.extend(concat(&fields)),
	}
	out
}

/// Match the head of `input` against `candidates`, first match wins.
///
/// Returns the matched discriminant and the bytes after it. An expected empty marker is
/// consumed and checked here; field payloads are left for the caller to decode.
pub fn decode_variant<'a>(
	input: &'a [u8],
	candidates: &[VariantSchema],
) -> Result<(Discriminant, &'a [u8]), DecodingError> {
	if input.is_empty() {
		return Err(DecodingError::Truncated { needed: 1, available: 0 })
	}

	for candidate in candidates {
		let Some(rest) = candidate.tag.strip(input) else { continue };
		return match candidate.payload {
			PayloadShape::EmptyMarker => match rest.split_first() {
				Some((&NONE_MARKER, rest)) => Ok((candidate.tag, rest)),
				Some((&found, _)) => Err(DecodingError::MissingEmptyMarker {
					tag: candidate.tag.to_string(),
					found,
				}),
				None => Err(DecodingError::Truncated { needed: 1, available: 0 }),
			},
			PayloadShape::Absent | PayloadShape::Fields => Ok((candidate.tag, rest)),
		}
	}

	Err(DecodingError::UnknownVariant { found: describe_head(input, candidates) })
}

/// Human readable form of an unmatched discriminant, read in the style of the candidates.
fn describe_head(input: &[u8], candidates: &[VariantSchema]) -> String {
	let named = candidates.iter().any(|candidate| candidate.tag.style() == DiscriminantStyle::Name);
	let mut cursor = input;
	match scale::decode_string(&mut cursor) {
		Ok(name) if named => name,
		_ => format!("{:#04x}", input[0]),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{amount::BigAmount, field::EncodedField, AmountEncoding};
	use hex_literal::hex;

	const STAKED: VariantSchema = VariantSchema::named("Staked", PayloadShape::EmptyMarker);
	const ACCOUNT: VariantSchema = VariantSchema::named("Account", PayloadShape::Fields);

	#[test]
	fn named_tag_with_string_payload() {
		let payload = EncodedField::amount(
			"amount",
			&BigAmount::from(1000u32),
			AmountEncoding::DecimalString,
		)
		.unwrap();
		let tag = Discriminant::Name("FreeBalance");
		let encoded = encode_variant(tag, VariantPayload::Fields(vec![payload]));

		let mut expected = vec![0x2c];
		expected.extend_from_slice(b"FreeBalance");
		expected.extend(hex!("1031303030"));
		assert_eq!(encoded, expected);
	}

	#[test]
	fn empty_marker_and_absent_payload_differ() {
		let marked = encode_variant(Discriminant::Index(2), VariantPayload::EmptyMarker);
		let bare = encode_variant(Discriminant::Index(2), VariantPayload::Absent);
		assert_eq!(marked, vec![0x02, 0x00]);
		assert_eq!(bare, vec![0x02]);
	}

	#[test]
	fn candidates_are_tried_in_order() {
		let encoded = encode_variant(Discriminant::Name("Staked"), VariantPayload::EmptyMarker);
		let (tag, rest) = decode_variant(&encoded, &[ACCOUNT, STAKED]).unwrap();
		assert_eq!(tag, Discriminant::Name("Staked"));
		assert!(rest.is_empty());
	}

	#[test]
	fn missing_marker_is_reported() {
		let encoded = encode_variant(Discriminant::Name("Staked"), VariantPayload::Absent);
		assert_eq!(
			decode_variant(&encoded, &[STAKED]),
			Err(DecodingError::Truncated { needed: 1, available: 0 })
		);

		let mut encoded = encoded;
		encoded.push(0x07);
		assert_eq!(
			decode_variant(&encoded, &[STAKED]),
			Err(DecodingError::MissingEmptyMarker { tag: "Staked".into(), found: 0x07 })
		);
	}

	#[test]
	fn unknown_tags_are_rejected() {
		let encoded = encode_variant(Discriminant::Name("Bonus"), VariantPayload::Absent);
		assert_eq!(
			decode_variant(&encoded, &[STAKED, ACCOUNT]),
			Err(DecodingError::UnknownVariant { found: "Bonus".into() })
		);
		assert_eq!(
			decode_variant(&[0x09], &[VariantSchema::indexed(1, PayloadShape::Absent)]),
			Err(DecodingError::UnknownVariant { found: "0x09".into() })
		);
	}

	#[test]
	fn unknown_zero_index_is_reported_as_a_byte() {
		let candidates = [VariantSchema::indexed(1, PayloadShape::Absent)];
		assert_eq!(
			decode_variant(&[0x00], &candidates),
			Err(DecodingError::UnknownVariant { found: "0x00".into() })
		);
	}
}
