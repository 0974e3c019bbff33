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

//! Account identifiers and the multi-form address used by call arguments.

use crate::error::{EncodingError, ValidationError};
use codec::{Decode, Encode, MaxEncodedLen};
use core::fmt;
use scale_info::TypeInfo;
use serde::{Serialize, Serializer};

/// Serialize raw bytes as a `0x`-prefixed hex string.
pub fn serialize_hex<S: Serializer, B: AsRef<[u8]>>(
	bytes: &B,
	serializer: S,
) -> Result<S::Ok, S::Error> {
	serializer.serialize_str(&array_bytes::bytes2hex("0x", bytes.as_ref()))
}

/// A 32 byte account identifier.
#[derive(
	Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, TypeInfo, MaxEncodedLen,
)]
pub struct AccountId([u8; 32]);

impl AccountId {
	pub const LEN: usize = 32;

	pub const fn new(bytes: [u8; 32]) -> Self {
		Self(bytes)
	}

	pub fn as_bytes(&self) -> &[u8; 32] {
		&self.0
	}
}

impl From<[u8; 32]> for AccountId {
	fn from(bytes: [u8; 32]) -> Self {
		Self(bytes)
	}
}

impl TryFrom<&[u8]> for AccountId {
	type Error = ValidationError;

	fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
		<[u8; 32]>::try_from(bytes).map(Self).map_err(|_| ValidationError::InvalidAccountLength {
			expected: Self::LEN,
			actual: bytes.len(),
		})
	}
}

impl AsRef<[u8]> for AccountId {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl fmt::Debug for AccountId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&array_bytes::bytes2hex("0x", self.0))
	}
}

impl Serialize for AccountId {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serialize_hex(&self.0, serializer)
	}
}

/// Who a call refers to, in any of the forms a runtime `MultiAddress` accepts.
///
/// Discriminants must stay in sync with the runtime type, they are part of the wire format.
#[derive(Clone, PartialEq, Eq, Debug, Encode, Decode, TypeInfo, Serialize)]
pub enum Address {
	/// It's an account ID (pubkey).
	#[codec(index = 0)]
	Id(AccountId),
	/// It's an account index.
	#[codec(index = 1)]
	Index(#[codec(compact)] u32),
	/// It's some arbitrary raw bytes.
	#[codec(index = 2)]
	#[serde(serialize_with = "serialize_hex")]
	Raw(Vec<u8>),
	/// It's a 32 byte representation.
	#[codec(index = 3)]
	#[serde(serialize_with = "serialize_hex")]
	Address32([u8; 32]),
	/// It's a 20 byte representation.
	#[codec(index = 4)]
	#[serde(serialize_with = "serialize_hex")]
	Address20([u8; 20]),
}

impl Address {
	/// Variant name, for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Address::Id(_) => "Id",
			Address::Index(_) => "Index",
			Address::Raw(_) => "Raw",
			Address::Address32(_) => "Address32",
			Address::Address20(_) => "Address20",
		}
	}

	/// Raw account bytes, for the forms that have them.
	pub fn account_bytes(&self) -> Result<&[u8], EncodingError> {
		match self {
			Address::Id(id) => Ok(id.as_ref()),
			Address::Address32(bytes) => Ok(&bytes[..]),
			Address::Address20(bytes) => Ok(&bytes[..]),
			Address::Index(_) | Address::Raw(_) =>
				Err(EncodingError::UnsupportedAddress(self.kind())),
		}
	}
}

impl From<AccountId> for Address {
	fn from(id: AccountId) -> Self {
		Address::Id(id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hex_literal::hex;

	#[test]
	fn account_id_rejects_wrong_lengths() {
		assert_eq!(
			AccountId::try_from(&[1u8; 31][..]),
			Err(ValidationError::InvalidAccountLength { expected: 32, actual: 31 })
		);
		assert_eq!(AccountId::try_from(&[1u8; 32][..]), Ok(AccountId::new([1; 32])));
	}

	#[test]
	fn address_discriminants_match_runtime() {
		let id = Address::Id(AccountId::new([1; 32])).encode();
		assert_eq!(id[0], 0);
		assert_eq!(id.len(), 33);
		assert_eq!(Address::Index(64).encode(), hex!("010101").to_vec());
		assert_eq!(Address::Raw(vec![9, 9]).encode(), hex!("02080909").to_vec());
		assert_eq!(Address::Address32([2; 32]).encode()[0], 3);
		assert_eq!(Address::Address20([3; 20]).encode()[..2], [4, 3]);
	}

	#[test]
	fn account_bytes_only_for_account_forms() {
		assert_eq!(Address::Address20([3; 20]).account_bytes().map(|b| b.len()), Ok(20));
		assert_eq!(
			Address::Index(1).account_bytes(),
			Err(EncodingError::UnsupportedAddress("Index"))
		);
	}

	#[test]
	fn serializes_externally_tagged_hex() {
		let json = serde_json::to_value(Address::Id(AccountId::new([0xab; 32]))).unwrap();
		assert_eq!(json, serde_json::json!({ "Id": format!("0x{}", "ab".repeat(32)) }));
		let json = serde_json::to_value(Address::Index(7)).unwrap();
		assert_eq!(json, serde_json::json!({ "Index": 7 }));
	}
}
