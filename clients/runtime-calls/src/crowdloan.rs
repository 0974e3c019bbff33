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

//! Arguments of `Crowdloan.contribute`.

use crate::{
	scale, AmountEncoding, BigAmount, CallArgs, DecodeArgs, DecodingError, EncodedField,
	EncodingError, FieldEncoding,
};
use call_codec_primitives::serialize_hex;
use codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::Serialize;

const CONTRIBUTION: AmountEncoding = AmountEncoding::Compact;

/// Signature of any of the supported schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize)]
pub enum MultiSignature {
	#[codec(index = 0)]
	Ed25519(#[serde(serialize_with = "serialize_hex")] [u8; 64]),
	#[codec(index = 1)]
	Sr25519(#[serde(serialize_with = "serialize_hex")] [u8; 64]),
	#[codec(index = 2)]
	Ecdsa(#[serde(serialize_with = "serialize_hex")] [u8; 65]),
}

/// Contribute `value` to the crowdloan of para `index`.
///
/// Unlike a bond controller, a missing signature is still written: as a single `0x00`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributeCall {
	index: u32,
	value: BigAmount,
	signature: Option<MultiSignature>,
}

impl ContributeCall {
	pub fn new(index: u32, value: BigAmount, signature: Option<MultiSignature>) -> Self {
		Self { index, value, signature }
	}

	pub fn signature(&self) -> Option<&MultiSignature> {
		self.signature.as_ref()
	}
}

impl CallArgs for ContributeCall {
	fn amount_encoding(&self) -> AmountEncoding {
		CONTRIBUTION
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		let signature = scale::encode_optional(self.signature.as_ref(), |signature| {
			Ok::<_, EncodingError>(signature.encode())
		})?;
		Ok(vec![
			EncodedField::compact_u32("index", self.index),
			EncodedField::amount("value", &self.value, self.amount_encoding())?,
			EncodedField::new("signature", FieldEncoding::Nullable, signature),
		])
	}
}

impl DecodeArgs for ContributeCall {
	type Layout = ();

	fn decode_args(input: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
		let index = scale::decode_compact_u32(input)?;
		let value = BigAmount::decode_as(CONTRIBUTION, input)?;
		let signature = scale::decode_optional(input, scale::decode_value)?;
		Ok(Self { index, value, signature })
	}
}
