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

//! Arguments of the Sora `LiquidityProxy.swap` call. Every amount is a decimal string.

use crate::{
	currency::AssetId32, scale, AmountEncoding, BigAmount, CallArgs, DecodeArgs, DecodingError,
	EncodedField, EncodingError, FieldEncoding,
};
use call_codec_primitives::{
	decode_variant, encode_variant, Discriminant, DiscriminantStyle, PayloadShape,
	VariantPayload, VariantSchema,
};
use codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{ser::SerializeTuple, Serialize, Serializer};
use std::collections::BTreeMap;

const SWAP_AMOUNT: AmountEncoding = AmountEncoding::DecimalString;

/// Which side of a swap is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapAmount {
	WithDesiredInput { desired_amount_in: BigAmount, min_amount_out: BigAmount },
	WithDesiredOutput { desired_amount_out: BigAmount, max_amount_in: BigAmount },
}

impl SwapAmount {
	const WITH_DESIRED_INPUT: &'static str = "WithDesiredInput";
	const WITH_DESIRED_OUTPUT: &'static str = "WithDesiredOutput";

	const CANDIDATES: [VariantSchema; 2] = [
		VariantSchema::named(Self::WITH_DESIRED_INPUT, PayloadShape::Fields),
		VariantSchema::named(Self::WITH_DESIRED_OUTPUT, PayloadShape::Fields),
	];

	fn tag(&self) -> &'static str {
		match self {
			SwapAmount::WithDesiredInput { .. } => Self::WITH_DESIRED_INPUT,
			SwapAmount::WithDesiredOutput { .. } => Self::WITH_DESIRED_OUTPUT,
		}
	}

	fn amounts(&self) -> [(&'static str, &BigAmount); 2] {
		match self {
			SwapAmount::WithDesiredInput { desired_amount_in, min_amount_out } =>
				[("desired_amount_in", desired_amount_in), ("min_amount_out", min_amount_out)],
			SwapAmount::WithDesiredOutput { desired_amount_out, max_amount_in } =>
				[("desired_amount_out", desired_amount_out), ("max_amount_in", max_amount_in)],
		}
	}

	pub fn encode(&self) -> Result<Vec<u8>, EncodingError> {
		let fields = self
			.amounts()
			.into_iter()
			.map(|(name, amount)| EncodedField::amount(name, amount, SWAP_AMOUNT))
			.collect::<Result<Vec<_>, _>>()?;
		Ok(encode_variant(Discriminant::Name(self.tag()), VariantPayload::Fields(fields)))
	}

	/// Tries `WithDesiredInput` first, then `WithDesiredOutput`.
	pub fn decode(input: &mut &[u8]) -> Result<Self, DecodingError> {
		let (tag, mut rest) = decode_variant(*input, &Self::CANDIDATES)?;
		let first = BigAmount::decode_as(SWAP_AMOUNT, &mut rest)?;
		let second = BigAmount::decode_as(SWAP_AMOUNT, &mut rest)?;
		let amount = match tag {
			Discriminant::Name(Self::WITH_DESIRED_INPUT) =>
				SwapAmount::WithDesiredInput { desired_amount_in: first, min_amount_out: second },
			_ => SwapAmount::WithDesiredOutput { desired_amount_out: first, max_amount_in: second },
		};
		*input = rest;
		Ok(amount)
	}
}

impl Serialize for SwapAmount {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut tuple = serializer.serialize_tuple(2)?;
		tuple.serialize_element(self.tag())?;
		let amounts: BTreeMap<_, _> = self.amounts().into_iter().collect();
		tuple.serialize_element(&amounts)?;
		tuple.end()
	}
}

/// How `selected_source_types` restricts the liquidity sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize)]
pub enum FilterMode {
	#[codec(index = 0)]
	Disabled,
	#[codec(index = 1)]
	ForbidSelected,
	#[codec(index = 2)]
	AllowSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize)]
pub enum LiquiditySourceType {
	#[codec(index = 0)]
	XYKPool,
	#[codec(index = 1)]
	BondingCurvePool,
	#[codec(index = 2)]
	MulticollateralBondingCurvePool,
	#[codec(index = 7)]
	XSTPool,
	#[codec(index = 8)]
	OrderBook,
}

/// Swap between two assets of a DEX.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapCall {
	dex_id: u32,
	input_asset_id: AssetId32,
	output_asset_id: AssetId32,
	swap_amount: SwapAmount,
	selected_source_types: Vec<LiquiditySourceType>,
	filter_mode: FilterMode,
}

impl SwapCall {
	pub fn new(
		dex_id: u32,
		input_asset_id: AssetId32,
		output_asset_id: AssetId32,
		swap_amount: SwapAmount,
		selected_source_types: Vec<LiquiditySourceType>,
		filter_mode: FilterMode,
	) -> Self {
		Self {
			dex_id,
			input_asset_id,
			output_asset_id,
			swap_amount,
			selected_source_types,
			filter_mode,
		}
	}

	pub fn swap_amount(&self) -> &SwapAmount {
		&self.swap_amount
	}
}

impl CallArgs for SwapCall {
	fn amount_encoding(&self) -> AmountEncoding {
		SWAP_AMOUNT
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		Ok(vec![
			EncodedField::fixed("dex_id", &self.dex_id),
			EncodedField::fixed_bytes("input_asset_id", self.input_asset_id.as_ref(), 32)?,
			EncodedField::fixed_bytes("output_asset_id", self.output_asset_id.as_ref(), 32)?,
			EncodedField::new(
				"swap_amount",
				FieldEncoding::Variant(DiscriminantStyle::Name),
				self.swap_amount.encode()?,
			),
			EncodedField::scale(
				"selected_source_types",
				FieldEncoding::Sequence,
				&self.selected_source_types,
			),
			EncodedField::scale(
				"filter_mode",
				FieldEncoding::Variant(DiscriminantStyle::Index),
				&self.filter_mode,
			),
		])
	}
}

impl DecodeArgs for SwapCall {
	type Layout = ();

	fn decode_args(input: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
		let dex_id = scale::decode_value(input)?;
		let input_asset_id = AssetId32::new(scale::decode_fixed_bytes::<32>(input)?);
		let output_asset_id = AssetId32::new(scale::decode_fixed_bytes::<32>(input)?);
		let swap_amount = SwapAmount::decode(input)?;
		let selected_source_types = scale::decode_value(input)?;
		let filter_mode = scale::decode_value(input)?;
		Ok(Self {
			dex_id,
			input_asset_id,
			output_asset_id,
			swap_amount,
			selected_source_types,
			filter_mode,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hex_literal::hex;

	#[test]
	fn swap_amount_tags_and_decimal_payload() {
		let amount = SwapAmount::WithDesiredOutput {
			desired_amount_out: 5u32.into(),
			max_amount_in: 12u32.into(),
		};
		let encoded = amount.encode().unwrap();

		let mut expected = crate::scale::encode_string("WithDesiredOutput");
		expected.extend(hex!("0435 083132"));
		assert_eq!(encoded, expected);
		assert_eq!(SwapAmount::decode(&mut &encoded[..]), Ok(amount));
	}

	#[test]
	fn swap_amount_rejects_other_tags() {
		let bytes = crate::scale::encode_string("WithDesiredBoth");
		assert_eq!(
			SwapAmount::decode(&mut &bytes[..]),
			Err(DecodingError::UnknownVariant { found: "WithDesiredBoth".into() }),
		);
	}

	#[test]
	fn swap_json_form() {
		let call = SwapCall::new(
			0,
			AssetId32::new([1; 32]),
			AssetId32::new([2; 32]),
			SwapAmount::WithDesiredInput {
				desired_amount_in: 100u32.into(),
				min_amount_out: 90u32.into(),
			},
			vec![LiquiditySourceType::XYKPool],
			FilterMode::AllowSelected,
		);
		let json = serde_json::to_value(&call).unwrap();

		assert_eq!(
			json["swap_amount"],
			serde_json::json!([
				"WithDesiredInput",
				{ "desired_amount_in": "100", "min_amount_out": "90" }
			]),
		);
		assert_eq!(json["filter_mode"], "AllowSelected");
		assert_eq!(SwapCall::decode_all(&call.encode_args().unwrap(), &()), Ok(call));
	}
}
