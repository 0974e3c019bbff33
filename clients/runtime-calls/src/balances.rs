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

//! Transfer of native and non-native balances.

use crate::{
	currency::{AssetId32, CurrencyShape, TransferLayout},
	scale, AccountId, Address, AmountEncoding, BigAmount, CallArgs, CurrencyId,
	DecodeArgs, DecodingError, EncodedField, EncodingError, FieldEncoding, ValidationError,
	LOG_TARGET,
};
use call_codec_primitives::DiscriminantStyle;
use serde::{ser::SerializeStruct, Serialize, Serializer};

const INDEXED: FieldEncoding = FieldEncoding::Variant(DiscriminantStyle::Index);

/// Move `amount` of `currency`, or of the native token when `currency` is `None`, to `dest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCall {
	dest: Address,
	amount: BigAmount,
	currency: Option<CurrencyId>,
}

impl TransferCall {
	/// Sora asset transfers carry the receiver as raw account bytes and need an
	/// [`Address::Id`].
	pub fn new(
		dest: Address,
		amount: BigAmount,
		currency: Option<CurrencyId>,
	) -> Result<Self, ValidationError> {
		let layout = TransferLayout::select(currency.as_ref());
		if layout == TransferLayout::SoraAsset && !matches!(dest, Address::Id(_)) {
			return Err(ValidationError::UnsupportedDestination(dest.kind()))
		}

		log::trace!(
			target: LOG_TARGET,
			"Built transfer of {} using the {:?} layout",
			amount,
			layout,
		);
		Ok(Self { dest, amount, currency })
	}

	pub fn dest(&self) -> &Address {
		&self.dest
	}

	pub fn amount(&self) -> &BigAmount {
		&self.amount
	}

	pub fn currency(&self) -> Option<&CurrencyId> {
		self.currency.as_ref()
	}

	pub fn layout(&self) -> TransferLayout {
		TransferLayout::select(self.currency.as_ref())
	}
}

impl CallArgs for TransferCall {
	fn amount_encoding(&self) -> AmountEncoding {
		self.layout().amount_encoding()
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		let encoding = self.amount_encoding();
		let fields = match CurrencyShape::of(self.currency.as_ref()) {
			CurrencyShape::Native => vec![
				EncodedField::scale("dest", INDEXED, &self.dest),
				EncodedField::amount("value", &self.amount, encoding)?,
			],
			CurrencyShape::Equilibrium(asset) => vec![
				EncodedField::fixed("asset", &asset),
				EncodedField::scale("to", INDEXED, &self.dest),
				EncodedField::amount("value", &self.amount, encoding)?,
			],
			CurrencyShape::SoraAsset(asset) => vec![
				EncodedField::fixed_bytes("assetId", asset.as_ref(), 32)?,
				EncodedField::fixed_bytes("to", self.dest.account_bytes()?, AccountId::LEN)?,
				EncodedField::amount("amount", &self.amount, encoding)?,
			],
			CurrencyShape::AssetsPallet(id) => vec![
				EncodedField::compact_u32("id", id),
				EncodedField::scale("target", INDEXED, &self.dest),
				EncodedField::amount("amount", &self.amount, encoding)?,
			],
			CurrencyShape::GenericAssetId(currency) => vec![
				EncodedField::scale("dest", INDEXED, &self.dest),
				EncodedField::scale("currencyId", INDEXED, currency),
				EncodedField::amount("amount", &self.amount, encoding)?,
			],
		};
		Ok(fields)
	}
}

impl DecodeArgs for TransferCall {
	type Layout = TransferLayout;

	fn decode_args(input: &mut &[u8], layout: &TransferLayout) -> Result<Self, DecodingError> {
		let encoding = layout.amount_encoding();
		let (dest, currency) = match layout {
			TransferLayout::Native => (scale::decode_value::<Address>(input)?, None),
			TransferLayout::Equilibrium => {
				let asset = scale::decode_value::<u64>(input)?;
				(scale::decode_value::<Address>(input)?, Some(CurrencyId::Equilibrium(asset)))
			},
			TransferLayout::SoraAsset => {
				let asset = scale::decode_fixed_bytes::<32>(input)?;
				let to = scale::decode_fixed_bytes::<32>(input)?;
				(
					Address::Id(AccountId::new(to)),
					Some(CurrencyId::SoraAsset(AssetId32::new(asset))),
				)
			},
			TransferLayout::AssetsPallet => {
				let id = scale::decode_compact_u32(input)?;
				(scale::decode_value::<Address>(input)?, Some(CurrencyId::Assets(id)))
			},
			TransferLayout::GenericAssetId => {
				let dest = scale::decode_value::<Address>(input)?;
				let currency = scale::decode_value::<CurrencyId>(input)?;
				if TransferLayout::select(Some(&currency)) != TransferLayout::GenericAssetId {
					return Err(DecodingError::UnknownVariant { found: currency.kind().into() })
				}
				(dest, Some(currency))
			},
		};
		let amount = BigAmount::decode_as(encoding, input)?;

		Ok(Self::new(dest, amount, currency)?)
	}
}

impl Serialize for TransferCall {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut state = serializer.serialize_struct("TransferCall", 3)?;
		match CurrencyShape::of(self.currency.as_ref()) {
			CurrencyShape::Native => {
				state.serialize_field("dest", &self.dest)?;
				state.serialize_field("value", &self.amount)?;
			},
			CurrencyShape::Equilibrium(asset) => {
				state.serialize_field("asset", &asset)?;
				state.serialize_field("to", &self.dest)?;
				state.serialize_field("value", &self.amount)?;
			},
			CurrencyShape::SoraAsset(asset) => {
				let to =
					self.dest.account_bytes().map_err(<S::Error as serde::ser::Error>::custom)?;
				state.serialize_field("assetId", asset)?;
				state.serialize_field("to", &array_bytes::bytes2hex("0x", to))?;
				state.serialize_field("amount", &self.amount)?;
			},
			CurrencyShape::AssetsPallet(id) => {
				state.serialize_field("id", &id)?;
				state.serialize_field("target", &self.dest)?;
				state.serialize_field("amount", &self.amount)?;
			},
			CurrencyShape::GenericAssetId(currency) => {
				state.serialize_field("dest", &self.dest)?;
				state.serialize_field("currencyId", currency)?;
				state.serialize_field("amount", &self.amount)?;
			},
		}
		state.end()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{currency::TokenSymbol, field};
	use codec::Encode;
	use hex_literal::hex;

	const ALICE: [u8; 32] =
		hex!("d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d");

	fn alice() -> Address {
		Address::Id(AccountId::new(ALICE))
	}

	#[test]
	fn native_transfer_bytes() {
		let call = TransferCall::new(alice(), 12_345u32.into(), None).unwrap();

		let mut expected = vec![0x00];
		expected.extend(ALICE);
		expected.extend(hex!("e5c0"));
		assert_eq!(call.encode_args().unwrap(), expected);
	}

	#[test]
	fn sora_transfer_requires_account_id() {
		let currency = Some(CurrencyId::SoraAsset(AssetId32::new([1; 32])));
		assert_eq!(
			TransferCall::new(Address::Index(5), 1u32.into(), currency),
			Err(ValidationError::UnsupportedDestination("Index")),
		);
		assert_eq!(
			TransferCall::new(Address::Address20([7; 20]), 1u32.into(), currency),
			Err(ValidationError::UnsupportedDestination("Address20")),
		);
	}

	#[test]
	fn sora_transfer_writes_raw_receiver() {
		let asset = AssetId32::new([1; 32]);
		let call =
			TransferCall::new(alice(), 1000u32.into(), Some(CurrencyId::SoraAsset(asset))).unwrap();
		let fields = call.fields().unwrap();

		assert_eq!(field::names(&fields), ["assetId", "to", "amount"]);
		assert_eq!(fields[1].bytes, ALICE.to_vec());
		assert_eq!(fields[1].encoding, FieldEncoding::FixedBytes(32));
		assert_eq!(fields[2].bytes, hex!("1031303030").to_vec());
	}

	#[test]
	fn generic_layout_rejects_currency_of_another_layout() {
		let mut bytes = alice().encode();
		bytes.extend(CurrencyId::Assets(3).encode());
		bytes.extend(BigAmount::from(1u32).encode_as(AmountEncoding::DecimalString).unwrap());

		assert_eq!(
			TransferCall::decode_all(&bytes, &TransferLayout::GenericAssetId),
			Err(DecodingError::UnknownVariant { found: "Assets".into() }),
		);
	}

	#[test]
	fn json_keys_follow_layout() {
		let call = TransferCall::new(
			alice(),
			5u32.into(),
			Some(CurrencyId::Token(TokenSymbol(2))),
		)
		.unwrap();
		let json = serde_json::to_value(&call).unwrap();

		assert_eq!(json["amount"], "5");
		assert_eq!(json["currencyId"], serde_json::json!({ "Token": 2 }));
		assert!(json.get("value").is_none());
	}
}
