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

//! Arbitrary precision balances and the two ways they travel on the wire.

use crate::{
	error::{DecodingError, EncodingError},
	scale,
};
use core::{fmt, str::FromStr};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use serde::{Serialize, Serializer};

/// How a balance argument is laid out.
///
/// Each call kind picks one mode for all of its amounts; the two are never mixed inside a
/// single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountEncoding {
	/// SCALE compact integer.
	Compact,
	/// Canonical base-10 digits, length-prefixed like any other string.
	DecimalString,
}

/// An unsigned balance of unbounded size.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigAmount(BigUint);

impl BigAmount {
	/// The zero amount.
	pub fn zero() -> Self {
		Self(BigUint::zero())
	}

	/// Largest amount the compact format can carry, `2^536 - 1`.
	pub fn max_compact() -> Self {
		Self((BigUint::from(1u8) << (scale::MAX_COMPACT_BYTES * 8)) - 1u32)
	}

	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}

	pub fn to_u128(&self) -> Option<u128> {
		self.0.to_u128()
	}

	pub fn as_biguint(&self) -> &BigUint {
		&self.0
	}

	/// Encode the amount in the given mode.
	pub fn encode_as(&self, encoding: AmountEncoding) -> Result<Vec<u8>, EncodingError> {
		match encoding {
			AmountEncoding::Compact => scale::encode_compact_uint(self),
			AmountEncoding::DecimalString => Ok(scale::encode_string(&self.to_string())),
		}
	}

	/// Decode an amount written in the given mode, advancing `input`.
	pub fn decode_as(encoding: AmountEncoding, input: &mut &[u8]) -> Result<Self, DecodingError> {
		match encoding {
			AmountEncoding::Compact => {
				let (value, consumed) = scale::decode_compact_uint(input)?;
				*input = &input[consumed..];
				Ok(value)
			},
			AmountEncoding::DecimalString => {
				let mut cursor = *input;
				let value = scale::decode_string(&mut cursor)?.parse::<BigAmount>()?;
				*input = cursor;
				Ok(value)
			},
		}
	}
}

impl From<u32> for BigAmount {
	fn from(value: u32) -> Self {
		Self(value.into())
	}
}

impl From<u64> for BigAmount {
	fn from(value: u64) -> Self {
		Self(value.into())
	}
}

impl From<u128> for BigAmount {
	fn from(value: u128) -> Self {
		Self(value.into())
	}
}

impl From<BigUint> for BigAmount {
	fn from(value: BigUint) -> Self {
		Self(value)
	}
}

impl FromStr for BigAmount {
	type Err = DecodingError;

	/// Accepts canonical decimals only: digits, no sign, no leading zeros.
	fn from_str(text: &str) -> Result<Self, Self::Err> {
		let canonical = !text.is_empty() &&
			text.bytes().all(|b| b.is_ascii_digit()) &&
			!(text.len() > 1 && text.starts_with('0'));
		if !canonical {
			return Err(DecodingError::InvalidDecimal(text.into()))
		}
		BigUint::parse_bytes(text.as_bytes(), 10)
			.map(Self)
			.ok_or_else(|| DecodingError::InvalidDecimal(text.into()))
	}
}

impl fmt::Display for BigAmount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

impl fmt::Debug for BigAmount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "BigAmount({})", self.0)
	}
}

/// Amounts are always strings in the JSON argument form, whatever their wire mode.
impl Serialize for BigAmount {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hex_literal::hex;

	#[test]
	fn same_amount_differs_between_modes() {
		let amount = BigAmount::from(1000u32);
		assert_eq!(amount.encode_as(AmountEncoding::Compact).unwrap(), hex!("a10f").to_vec());
		assert_eq!(
			amount.encode_as(AmountEncoding::DecimalString).unwrap(),
			hex!("1031303030").to_vec()
		);
	}

	#[test]
	fn decode_as_advances_input() {
		let mut input = &hex!("a10f1031303030")[..];
		assert_eq!(
			BigAmount::decode_as(AmountEncoding::Compact, &mut input),
			Ok(BigAmount::from(1000u32))
		);
		assert_eq!(
			BigAmount::decode_as(AmountEncoding::DecimalString, &mut input),
			Ok(BigAmount::from(1000u32))
		);
		assert!(input.is_empty());
	}

	#[test]
	fn decimal_parsing_is_canonical() {
		assert_eq!("0".parse::<BigAmount>(), Ok(BigAmount::zero()));
		assert_eq!(
			"340282366920938463463374607431768211456".parse::<BigAmount>(),
			Ok(BigAmount::from(BigUint::from(u128::MAX) + 1u32))
		);
		for invalid in ["", "01", "-1", "1_000", "1.5", " 1"] {
			assert_eq!(
				invalid.parse::<BigAmount>(),
				Err(DecodingError::InvalidDecimal(invalid.into()))
			);
		}
	}

	#[test]
	fn non_canonical_decimal_leaves_input_untouched() {
		let encoded = scale::encode_string("007");
		let mut input = &encoded[..];
		assert_eq!(
			BigAmount::decode_as(AmountEncoding::DecimalString, &mut input),
			Err(DecodingError::InvalidDecimal("007".into()))
		);
		assert_eq!(input.len(), encoded.len());
	}

	#[test]
	fn serializes_as_decimal_string() {
		let json = serde_json::to_value(BigAmount::from(u128::MAX)).unwrap();
		assert_eq!(json, serde_json::json!(u128::MAX.to_string()));
	}
}
