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

//! Primitive wire codec.
//!
//! Thin helpers over `parity-scale-codec` that report failures through the typed errors of
//! this crate. Every decoder advances the `&mut &[u8]` cursor it receives, the same way
//! [`codec::Decode`] does, and never consumes bytes of a value it fails to read.

use crate::{
	amount::BigAmount,
	error::{DecodingError, EncodingError},
};
use codec::{Compact, Decode, Encode};
use num_bigint::BigUint;

/// Presence byte of an absent optional value. Also used as the explicit empty variant payload.
pub const NONE_MARKER: u8 = 0;

/// Presence byte of a present optional value.
pub const SOME_MARKER: u8 = 1;

/// Largest number of value bytes a compact integer may carry (`2^536 - 1`).
pub const MAX_COMPACT_BYTES: usize = 67;

/// Number of bytes a compact integer occupies, given its first byte.
pub fn compact_width(prefix: u8) -> usize {
	match prefix & 0b11 {
		0b00 => 1,
		0b01 => 2,
		0b10 => 4,
		_ => 1 + (prefix >> 2) as usize + 4,
	}
}

/// Check that the compact integer at the head of `input` is complete and return its width.
fn compact_available(input: &[u8]) -> Result<usize, DecodingError> {
	let prefix = *input.first().ok_or(DecodingError::Truncated { needed: 1, available: 0 })?;
	let width = compact_width(prefix);
	if input.len() < width {
		return Err(DecodingError::Truncated { needed: width, available: input.len() })
	}
	Ok(width)
}

/// Encode an unsigned integer in the SCALE compact format.
///
/// Values that fit into `u128` are delegated to [`Compact`]. Larger values use the
/// big-integer mode directly, up to [`MAX_COMPACT_BYTES`] little-endian bytes.
pub fn encode_compact_uint(value: &BigAmount) -> Result<Vec<u8>, EncodingError> {
	if let Some(value) = value.to_u128() {
		return Ok(Compact(value).encode())
	}

	let bytes = value.as_biguint().to_bytes_le();
	if bytes.len() > MAX_COMPACT_BYTES {
		return Err(EncodingError::ValueTooLarge { bytes: bytes.len(), max: MAX_COMPACT_BYTES })
	}

	let mut out = Vec::with_capacity(1 + bytes.len());
	out.push((((bytes.len() - 4) as u8) << 2) | 0b11);
	out.extend_from_slice(&bytes);
	Ok(out)
}

/// Decode a compact integer from the head of `input`, returning the value and the number of
/// bytes it occupied.
pub fn decode_compact_uint(input: &[u8]) -> Result<(BigAmount, usize), DecodingError> {
	let width = compact_available(input)?;

	// one prefix byte plus at most 16 value bytes still fits into `u128`
	if width <= 17 {
		// the input is complete, so the only remaining rejection is a non-minimal encoding
		let mut cursor = &input[..width];
		let Compact(value) =
			Compact::<u128>::decode(&mut cursor).map_err(|_| DecodingError::NonCanonical)?;
		return Ok((BigAmount::from(value), width))
	}

	let body = &input[1..width];
	if body.last() == Some(&0) {
		return Err(DecodingError::NonCanonical)
	}
	Ok((BigAmount::from(BigUint::from_bytes_le(body)), width))
}

/// Compact-encoded `u32`, used for eras, para ids and indices.
pub fn encode_compact_u32(value: u32) -> Vec<u8> {
	Compact(value).encode()
}

/// Inverse of [`encode_compact_u32`].
pub fn decode_compact_u32(input: &mut &[u8]) -> Result<u32, DecodingError> {
	compact_available(input)?;
	let Compact(value) = Compact::<u32>::decode(input)?;
	Ok(value)
}

/// Copy `data` into a fixed size field. Callers never get padding or truncation.
pub fn encode_fixed_bytes(data: &[u8], expected_len: usize) -> Result<Vec<u8>, EncodingError> {
	if data.len() != expected_len {
		return Err(EncodingError::LengthMismatch { expected: expected_len, actual: data.len() })
	}
	Ok(data.to_vec())
}

/// Read exactly `N` bytes.
pub fn decode_fixed_bytes<const N: usize>(input: &mut &[u8]) -> Result<[u8; N], DecodingError> {
	let (head, rest) = input
		.split_first_chunk::<N>()
		.ok_or(DecodingError::Truncated { needed: N, available: input.len() })?;
	let head = *head;
	*input = rest;
	Ok(head)
}

/// Split `len` bytes off the head of `input`.
pub fn take<'a>(input: &mut &'a [u8], len: usize) -> Result<&'a [u8], DecodingError> {
	if input.len() < len {
		return Err(DecodingError::Truncated { needed: len, available: input.len() })
	}
	let (head, rest) = input.split_at(len);
	*input = rest;
	Ok(head)
}

/// Presence byte followed by the inner encoding when `value` is present.
pub fn encode_optional<T: ?Sized, E>(
	value: Option<&T>,
	inner: impl FnOnce(&T) -> Result<Vec<u8>, E>,
) -> Result<Vec<u8>, E> {
	match value {
		None => Ok(vec![NONE_MARKER]),
		Some(value) => {
			let mut out = vec![SOME_MARKER];
			out.extend(inner(value)?);
			Ok(out)
		},
	}
}

/// Inverse of [`encode_optional`].
pub fn decode_optional<T>(
	input: &mut &[u8],
	inner: impl FnOnce(&mut &[u8]) -> Result<T, DecodingError>,
) -> Result<Option<T>, DecodingError> {
	match input.first().copied() {
		None => Err(DecodingError::Truncated { needed: 1, available: 0 }),
		Some(NONE_MARKER) => {
			*input = &input[1..];
			Ok(None)
		},
		Some(SOME_MARKER) => {
			*input = &input[1..];
			inner(input).map(Some)
		},
		Some(other) => Err(DecodingError::InvalidPresence(other)),
	}
}

/// Compact length prefix followed by the UTF-8 bytes of `value`.
pub fn encode_string(value: &str) -> Vec<u8> {
	value.encode()
}

/// Read a compact length prefix.
pub fn decode_length(input: &mut &[u8]) -> Result<usize, DecodingError> {
	decode_compact_u32(input).map(|len| len as usize)
}

/// Length-prefixed byte sequence.
pub fn decode_bytes(input: &mut &[u8]) -> Result<Vec<u8>, DecodingError> {
	let mut cursor = *input;
	let len = decode_length(&mut cursor)?;
	let bytes = take(&mut cursor, len)?.to_vec();
	*input = cursor;
	Ok(bytes)
}

/// Inverse of [`encode_string`].
pub fn decode_string(input: &mut &[u8]) -> Result<String, DecodingError> {
	let mut cursor = *input;
	let text = String::from_utf8(decode_bytes(&mut cursor)?)
		.map_err(|_| DecodingError::InvalidUtf8)?;
	*input = cursor;
	Ok(text)
}

/// Decode any `codec` type, mapping the codec error.
pub fn decode_value<T: Decode>(input: &mut &[u8]) -> Result<T, DecodingError> {
	T::decode(input).map_err(Into::into)
}

/// Run `decode` over the whole of `input`, rejecting leftovers.
pub fn decode_all<T>(
	mut input: &[u8],
	decode: impl FnOnce(&mut &[u8]) -> Result<T, DecodingError>,
) -> Result<T, DecodingError> {
	let value = decode(&mut input)?;
	if !input.is_empty() {
		return Err(DecodingError::TrailingBytes(input.len()))
	}
	Ok(value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use hex_literal::hex;

	fn compact(value: u128) -> Vec<u8> {
		encode_compact_uint(&BigAmount::from(value)).unwrap()
	}

	#[test]
	fn compact_classes_match_scale() {
		assert_eq!(compact(0), vec![0x00]);
		assert_eq!(compact(1), vec![0x04]);
		assert_eq!(compact(63), vec![0xfc]);
		// first value that needs the two byte class
		assert_eq!(compact(64), hex!("0101").to_vec());
		assert_eq!(compact(1000), hex!("a10f").to_vec());
		assert_eq!(compact(16384), hex!("02000100").to_vec());
		assert_eq!(compact(1 << 30), hex!("0300000040").to_vec());
	}

	#[test]
	fn compact_big_integer_mode_roundtrips() {
		let above_u128 = BigAmount::from(BigUint::from(u128::MAX) + 1u32);
		let encoded = encode_compact_uint(&above_u128).unwrap();
		assert_eq!(encoded.len(), 18);
		assert_eq!(encoded[0], 0x37);
		assert_eq!(decode_compact_uint(&encoded).unwrap(), (above_u128, 18));

		let max = BigAmount::max_compact();
		let encoded = encode_compact_uint(&max).unwrap();
		assert_eq!(encoded[0], 0xff);
		assert_eq!(encoded.len(), 1 + MAX_COMPACT_BYTES);
		assert_eq!(decode_compact_uint(&encoded).unwrap(), (max, 1 + MAX_COMPACT_BYTES));
	}

	#[test]
	fn compact_above_ceiling_is_rejected() {
		let too_large = BigAmount::from(BigAmount::max_compact().as_biguint().clone() + 1u32);
		assert_eq!(
			encode_compact_uint(&too_large),
			Err(EncodingError::ValueTooLarge { bytes: 68, max: MAX_COMPACT_BYTES }),
		);
	}

	#[test]
	fn compact_decode_reports_truncation() {
		assert_eq!(
			decode_compact_uint(&[]),
			Err(DecodingError::Truncated { needed: 1, available: 0 })
		);
		assert_eq!(
			decode_compact_uint(&hex!("0200")),
			Err(DecodingError::Truncated { needed: 4, available: 2 })
		);
		let mut big = vec![0x37];
		big.extend([0u8; 10]);
		assert_eq!(
			decode_compact_uint(&big),
			Err(DecodingError::Truncated { needed: 18, available: 11 })
		);
	}

	#[test]
	fn compact_decode_rejects_padded_big_integers() {
		let mut padded = vec![0x37];
		padded.extend([1u8; 16]);
		padded.push(0);
		assert_eq!(decode_compact_uint(&padded), Err(DecodingError::NonCanonical));
	}

	#[test]
	fn compact_decode_rejects_oversized_small_classes() {
		// zero in the two and four byte classes
		assert_eq!(decode_compact_uint(&[0x01, 0x00]), Err(DecodingError::NonCanonical));
		assert_eq!(decode_compact_uint(&[0x06, 0, 0, 0]), Err(DecodingError::NonCanonical));
		// 2^14 - 1 fits into the two byte class
		assert_eq!(decode_compact_uint(&hex!("feff0000")), Err(DecodingError::NonCanonical));
		// 1 in the big integer mode
		assert_eq!(decode_compact_uint(&hex!("0301000000")), Err(DecodingError::NonCanonical));
	}

	#[test]
	fn compact_decode_reports_consumed_bytes_only() {
		let (value, consumed) = decode_compact_uint(&hex!("a10fffff")).unwrap();
		assert_eq!(value, BigAmount::from(1000u32));
		assert_eq!(consumed, 2);
	}

	#[test]
	fn fixed_bytes_never_pad_or_truncate() {
		assert_eq!(encode_fixed_bytes(&[7; 32], 32), Ok(vec![7; 32]));
		assert_eq!(
			encode_fixed_bytes(&[7; 31], 32),
			Err(EncodingError::LengthMismatch { expected: 32, actual: 31 })
		);
		assert_eq!(
			encode_fixed_bytes(&[7; 33], 32),
			Err(EncodingError::LengthMismatch { expected: 32, actual: 33 })
		);

		let mut input = &[1u8, 2, 3][..];
		assert_eq!(
			decode_fixed_bytes::<4>(&mut input),
			Err(DecodingError::Truncated { needed: 4, available: 3 })
		);
		assert_eq!(input.len(), 3);
	}

	#[test]
	fn optional_uses_presence_byte() {
		let none = encode_optional::<u32, EncodingError>(None, |v| Ok(v.encode())).unwrap();
		assert_eq!(none, vec![0x00]);
		let some = encode_optional::<u32, EncodingError>(Some(&5), |v| Ok(v.encode())).unwrap();
		assert_eq!(some, hex!("0105000000").to_vec());

		let mut input = &some[..];
		assert_eq!(decode_optional(&mut input, decode_value::<u32>), Ok(Some(5)));
		assert!(input.is_empty());

		let mut input = &[0x02u8][..];
		assert_eq!(
			decode_optional(&mut input, decode_value::<u32>),
			Err(DecodingError::InvalidPresence(2))
		);
	}

	#[test]
	fn strings_are_length_prefixed() {
		assert_eq!(encode_string("1000"), hex!("1031303030").to_vec());

		let mut input = &hex!("1031303030ff")[..];
		assert_eq!(decode_string(&mut input).as_deref(), Ok("1000"));
		assert_eq!(input, &[0xff]);

		let mut input = &hex!("08c328")[..];
		assert_eq!(decode_string(&mut input), Err(DecodingError::InvalidUtf8));
		assert_eq!(input.len(), 3);

		let mut input = &hex!("1031")[..];
		assert_eq!(
			decode_string(&mut input),
			Err(DecodingError::Truncated { needed: 4, available: 1 })
		);
	}

	#[test]
	fn decode_all_rejects_leftovers() {
		assert_eq!(
			decode_all(&hex!("0500000000"), decode_value::<u32>),
			Err(DecodingError::TrailingBytes(1))
		);
		assert_eq!(decode_all(&hex!("05000000"), decode_value::<u32>), Ok(5));
	}
}
