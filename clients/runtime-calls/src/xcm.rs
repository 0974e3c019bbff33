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

//! Arguments of the ORML `XTokens.transfer` call and the locations it sends to.

use crate::{
	scale, AccountId, AmountEncoding, BigAmount, CallArgs, CurrencyId, DecodeArgs, DecodingError,
	EncodedField, EncodingError, FieldEncoding, ValidationError,
};
use call_codec_primitives::{
	decode_variant, serialize_hex, DiscriminantStyle, PayloadShape, VariantSchema,
};
use codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Serialize, Serializer};

/// Most junctions an interior location can hold.
pub const MAX_JUNCTIONS: usize = 8;

/// Version byte of the locations this crate writes.
pub const LOCATION_VERSION: u8 = 4;

const XCM_AMOUNT: AmountEncoding = AmountEncoding::DecimalString;
const INDEXED: FieldEncoding = FieldEncoding::Variant(DiscriminantStyle::Index);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize)]
pub enum NetworkId {
	#[codec(index = 0)]
	ByGenesis(#[serde(serialize_with = "serialize_hex")] [u8; 32]),
	#[codec(index = 2)]
	Polkadot,
	#[codec(index = 3)]
	Kusama,
	#[codec(index = 7)]
	Ethereum {
		#[codec(compact)]
		chain_id: u64,
	},
}

/// A single item of an interior location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize)]
pub enum Junction {
	#[codec(index = 0)]
	Parachain(#[codec(compact)] u32),
	#[codec(index = 1)]
	AccountId32 { network: Option<NetworkId>, id: AccountId },
	#[codec(index = 3)]
	AccountKey20 {
		network: Option<NetworkId>,
		#[serde(serialize_with = "serialize_hex")]
		key: [u8; 20],
	},
}

/// A relative location: `parents` steps up, then down through `interior`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
	parents: u8,
	interior: Vec<Junction>,
}

impl Location {
	pub fn new(parents: u8, interior: Vec<Junction>) -> Result<Self, ValidationError> {
		if interior.len() > MAX_JUNCTIONS {
			return Err(ValidationError::TooManyJunctions(interior.len()))
		}
		Ok(Self { parents, interior })
	}

	/// `account` on parachain `para_id`, or directly under the `parents`-th ancestor.
	pub fn account(parents: u8, para_id: Option<u32>, account: AccountId) -> Self {
		let account = Junction::AccountId32 { network: None, id: account };
		let interior = match para_id {
			Some(para_id) => vec![Junction::Parachain(para_id), account],
			None => vec![account],
		};
		Self { parents, interior }
	}

	pub fn parents(&self) -> u8 {
		self.parents
	}

	pub fn interior(&self) -> &[Junction] {
		&self.interior
	}

	/// Version byte, parents, junction count, junctions.
	pub fn encode_versioned(&self) -> Vec<u8> {
		let mut out = vec![LOCATION_VERSION, self.parents, self.interior.len() as u8];
		for junction in &self.interior {
			junction.encode_to(&mut out);
		}
		out
	}

	pub fn decode_versioned(input: &mut &[u8]) -> Result<Self, DecodingError> {
		let version = VariantSchema::indexed(LOCATION_VERSION, PayloadShape::Fields);
		let (_, mut rest) = decode_variant(*input, &[version])?;
		let parents = scale::decode_value::<u8>(&mut rest)?;
		let count = scale::decode_value::<u8>(&mut rest)? as usize;
		if count > MAX_JUNCTIONS {
			return Err(ValidationError::TooManyJunctions(count).into())
		}
		let interior = (0..count)
			.map(|_| scale::decode_value::<Junction>(&mut rest))
			.collect::<Result<Vec<_>, _>>()?;
		*input = rest;
		Ok(Self { parents, interior })
	}
}

fn serialize_versioned<S: Serializer>(
	location: &Location,
	serializer: S,
) -> Result<S::Ok, S::Error> {
	serializer.serialize_newtype_variant(
		"VersionedLocation",
		LOCATION_VERSION as u32,
		"V4",
		location,
	)
}

/// Weight of a single component of [`WeightLimit::Limited`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize)]
pub struct Weight {
	#[codec(compact)]
	pub ref_time: u64,
	#[codec(compact)]
	pub proof_size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize)]
pub enum WeightLimit {
	#[codec(index = 0)]
	Unlimited,
	#[codec(index = 1)]
	Limited(Weight),
}

/// Send `amount` of `currency_id` to another chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XcmTransferCall {
	currency_id: CurrencyId,
	amount: BigAmount,
	#[serde(serialize_with = "serialize_versioned")]
	dest: Location,
	dest_weight_limit: WeightLimit,
}

impl XcmTransferCall {
	pub fn new(
		currency_id: CurrencyId,
		amount: BigAmount,
		dest: Location,
		dest_weight_limit: WeightLimit,
	) -> Self {
		Self { currency_id, amount, dest, dest_weight_limit }
	}

	pub fn dest(&self) -> &Location {
		&self.dest
	}
}

impl CallArgs for XcmTransferCall {
	fn amount_encoding(&self) -> AmountEncoding {
		XCM_AMOUNT
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		Ok(vec![
			EncodedField::scale("currency_id", INDEXED, &self.currency_id),
			EncodedField::amount("amount", &self.amount, self.amount_encoding())?,
			EncodedField::new("dest", INDEXED, self.dest.encode_versioned()),
			EncodedField::scale("dest_weight_limit", INDEXED, &self.dest_weight_limit),
		])
	}
}

impl DecodeArgs for XcmTransferCall {
	type Layout = ();

	fn decode_args(input: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
		let currency_id = scale::decode_value(input)?;
		let amount = BigAmount::decode_as(XCM_AMOUNT, input)?;
		let dest = Location::decode_versioned(input)?;
		let dest_weight_limit = scale::decode_value(input)?;
		Ok(Self { currency_id, amount, dest, dest_weight_limit })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::currency::TokenSymbol;
	use hex_literal::hex;

	#[test]
	fn location_is_bounded() {
		assert_eq!(
			Location::new(1, vec![Junction::Parachain(1); 9]),
			Err(ValidationError::TooManyJunctions(9)),
		);
		assert!(Location::new(1, vec![Junction::Parachain(1); 8]).is_ok());

		let oversized = hex!("04 01 09");
		assert_eq!(
			Location::decode_versioned(&mut &oversized[..]),
			Err(DecodingError::Invalid(ValidationError::TooManyJunctions(9))),
		);
	}

	#[test]
	fn sibling_account_bytes() {
		let location = Location::account(1, Some(2000), AccountId::new([5; 32]));
		let encoded = location.encode_versioned();

		let mut expected = hex!("04 01 02 00 411f 01 00").to_vec();
		expected.extend([5; 32]);
		assert_eq!(encoded, expected);
		assert_eq!(Location::decode_versioned(&mut &encoded[..]), Ok(location));
	}

	#[test]
	fn other_versions_are_rejected() {
		assert_eq!(
			Location::decode_versioned(&mut &hex!("03 01 00")[..]),
			Err(DecodingError::UnknownVariant { found: "0x03".into() }),
		);
	}

	#[test]
	fn transfer_amount_is_decimal() {
		let call = XcmTransferCall::new(
			CurrencyId::Token(TokenSymbol(1)),
			1000u32.into(),
			Location::account(1, None, AccountId::new([5; 32])),
			WeightLimit::Limited(Weight { ref_time: 1, proof_size: 0 }),
		);
		let fields = call.fields().unwrap();

		assert_eq!(fields[1].encoding, FieldEncoding::DecimalString);
		assert_eq!(fields[1].bytes, hex!("1031303030").to_vec());
		assert_eq!(fields[3].bytes, hex!("01 04 00").to_vec());
		let bytes = call.encode_args().unwrap();
		assert_eq!(XcmTransferCall::decode_all(&bytes, &()), Ok(call.clone()));

		let json = serde_json::to_value(&call).unwrap();
		assert_eq!(json["dest"]["V4"]["parents"], 1);
		assert_eq!(json["amount"], "1000");
	}
}
