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

//! Named, ordered call arguments.
//!
//! A call payload renders to a list of [`EncodedField`]s. The list order is the wire order and
//! each field carries the [`FieldEncoding`] wrapper it was written with, so layouts can be
//! inspected without re-parsing the bytes.

use crate::{
	amount::{AmountEncoding, BigAmount},
	error::EncodingError,
	scale,
};
use codec::Encode;

/// Discriminant flavour of a tagged union.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscriminantStyle {
	/// Length-prefixed string tag, e.g. `"FreeBalance"`.
	Name,
	/// Single index byte.
	Index,
}

/// Wire wrapper a field was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEncoding {
	/// SCALE compact integer.
	Compact,
	/// Canonical decimal digits as a length-prefixed string.
	DecimalString,
	/// Exactly `n` raw bytes, no prefix.
	FixedBytes(usize),
	/// Length-prefixed raw bytes.
	Bytes,
	/// Presence byte followed by the value when present.
	Nullable,
	/// Fixed width little-endian integer.
	Fixed,
	/// Discriminant followed by its payload.
	Variant(DiscriminantStyle),
	/// Compact length followed by the items.
	Sequence,
	/// Length-prefixed UTF-8.
	Text,
}

impl From<AmountEncoding> for FieldEncoding {
	fn from(encoding: AmountEncoding) -> Self {
		match encoding {
			AmountEncoding::Compact => FieldEncoding::Compact,
			AmountEncoding::DecimalString => FieldEncoding::DecimalString,
		}
	}
}

/// A single encoded call argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedField {
	pub name: &'static str,
	pub encoding: FieldEncoding,
	pub bytes: Vec<u8>,
}

impl EncodedField {
	pub fn new(name: &'static str, encoding: FieldEncoding, bytes: Vec<u8>) -> Self {
		Self { name, encoding, bytes }
	}

	/// A balance in the given mode.
	pub fn amount(
		name: &'static str,
		value: &BigAmount,
		encoding: AmountEncoding,
	) -> Result<Self, EncodingError> {
		Ok(Self::new(name, encoding.into(), value.encode_as(encoding)?))
	}

	/// A compact `u32`.
	pub fn compact_u32(name: &'static str, value: u32) -> Self {
		Self::new(name, FieldEncoding::Compact, scale::encode_compact_u32(value))
	}

	/// A fixed width integer.
	pub fn fixed<T: Encode>(name: &'static str, value: &T) -> Self {
		Self::new(name, FieldEncoding::Fixed, value.encode())
	}

	/// Any `codec` value under an explicit wrapper tag.
	pub fn scale<T: Encode + ?Sized>(
		name: &'static str,
		encoding: FieldEncoding,
		value: &T,
	) -> Self {
		Self::new(name, encoding, value.encode())
	}

	/// Raw bytes that must have exactly `len` bytes.
	pub fn fixed_bytes(name: &'static str, data: &[u8], len: usize) -> Result<Self, EncodingError> {
		Ok(Self::new(name, FieldEncoding::FixedBytes(len), scale::encode_fixed_bytes(data, len)?))
	}

	/// Length-prefixed UTF-8.
	pub fn text(name: &'static str, value: &str) -> Self {
		Self::new(name, FieldEncoding::Text, scale::encode_string(value))
	}
}

/// Field names in wire order.
pub fn names(fields: &[EncodedField]) -> Vec<&'static str> {
	fields.iter().map(|field| field.name).collect()
}

/// Concatenate field bytes in declaration order.
pub fn concat(fields: &[EncodedField]) -> Vec<u8> {
	let mut out = Vec::with_capacity(fields.iter().map(|field| field.bytes.len()).sum());
	for field in fields {
		out.extend_from_slice(&field.bytes);
	}
	out
}
