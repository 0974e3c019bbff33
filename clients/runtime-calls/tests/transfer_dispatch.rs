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

//! Every currency kind must produce exactly one transfer layout.

use call_codec_primitives::{field, DiscriminantStyle};
use hex_literal::hex;
use runtime_calls::{
	balances::TransferCall,
	currency::{AssetId32, TokenSymbol},
	AccountId, Address, BigAmount, CallArgs, CallFactory, CallPath, CurrencyId, DecodeArgs,
	FieldEncoding, TransferLayout, ValidationError,
};

const BOB: [u8; 32] = hex!("8eaf04151687736326c9fea17e25fc5287613693c912909cb226aa4794f26a48");
const INDEXED: FieldEncoding = FieldEncoding::Variant(DiscriminantStyle::Index);

fn bob() -> Address {
	Address::Id(AccountId::new(BOB))
}

fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

fn no_resolver(_: &str) -> Result<Address, String> {
	Err("no resolver".into())
}

struct Row {
	currency: Option<CurrencyId>,
	layout: TransferLayout,
	names: [&'static str; 3],
	encodings: [FieldEncoding; 3],
	path: CallPath,
}

fn rows() -> Vec<Row> {
	vec![
		Row {
			currency: Some(CurrencyId::Equilibrium(25_969)),
			layout: TransferLayout::Equilibrium,
			names: ["asset", "to", "value"],
			encodings: [FieldEncoding::Fixed, INDEXED, FieldEncoding::DecimalString],
			path: CallPath::EQ_BALANCES_TRANSFER,
		},
		Row {
			currency: Some(CurrencyId::SoraAsset(AssetId32::new([2; 32]))),
			layout: TransferLayout::SoraAsset,
			names: ["assetId", "to", "amount"],
			encodings: [
				FieldEncoding::FixedBytes(32),
				FieldEncoding::FixedBytes(32),
				FieldEncoding::DecimalString,
			],
			path: CallPath::ASSETS_TRANSFER,
		},
		Row {
			currency: Some(CurrencyId::Assets(1984)),
			layout: TransferLayout::AssetsPallet,
			names: ["id", "target", "amount"],
			encodings: [FieldEncoding::Compact, INDEXED, FieldEncoding::DecimalString],
			path: CallPath::ASSETS_TRANSFER,
		},
		Row {
			currency: Some(CurrencyId::AssetId(8)),
			layout: TransferLayout::GenericAssetId,
			names: ["dest", "currencyId", "amount"],
			encodings: [INDEXED, INDEXED, FieldEncoding::DecimalString],
			path: CallPath::TOKENS_TRANSFER,
		},
	]
}

#[test]
fn native_transfer_has_two_fields() {
	init_logger();
	let call = TransferCall::new(bob(), 64u32.into(), None).unwrap();
	let fields = call.fields().unwrap();

	assert_eq!(call.layout(), TransferLayout::Native);
	assert_eq!(field::names(&fields), ["dest", "value"]);
	assert_eq!(fields[0].encoding, INDEXED);
	assert_eq!(fields[1].encoding, FieldEncoding::Compact);

	let mut expected = vec![0x00];
	expected.extend(BOB);
	expected.extend(hex!("0101"));
	assert_eq!(call.encode_args().unwrap(), expected);
}

#[test]
fn every_row_of_the_dispatch_table() {
	init_logger();
	let factory = CallFactory::new(no_resolver);

	for row in rows() {
		let call = factory.transfer(bob(), 1000u32.into(), row.currency).unwrap();
		let fields = call.args().fields().unwrap();

		assert_eq!(call.args().layout(), row.layout, "{:?}", row.currency);
		assert_eq!(field::names(&fields), row.names, "{:?}", row.currency);
		assert_eq!(
			fields.iter().map(|field| field.encoding).collect::<Vec<_>>(),
			row.encodings,
			"{:?}",
			row.currency,
		);
		assert_eq!(fields[2].bytes, hex!("1031303030").to_vec(), "{:?}", row.currency);
		assert_eq!(call.path(), &row.path, "{:?}", row.currency);

		let decoded = TransferCall::decode_all(&call.encode_args().unwrap(), &row.layout);
		assert_eq!(decoded.as_ref(), Ok(call.args()), "{:?}", row.currency);
	}
}

#[test]
fn unrecognized_kinds_fall_back_to_generic_layout() {
	init_logger();
	let fallbacks = [
		CurrencyId::Token(TokenSymbol(0)),
		CurrencyId::VToken(TokenSymbol(4)),
		CurrencyId::ForeignAsset(12),
		CurrencyId::LiquidCrowdloan(13),
	];

	for currency in fallbacks {
		let call = TransferCall::new(bob(), 5u32.into(), Some(currency)).unwrap();
		let fields = call.fields().unwrap();

		assert_eq!(call.layout(), TransferLayout::GenericAssetId);
		assert_eq!(field::names(&fields), ["dest", "currencyId", "amount"]);
		assert_eq!(fields[1].bytes, codec::Encode::encode(&currency));
		assert_eq!(
			TransferCall::decode_all(&call.encode_args().unwrap(), &TransferLayout::GenericAssetId),
			Ok(call),
		);
	}
}

#[test]
fn sora_transfer_rejects_non_account_destinations() {
	let currency = Some(CurrencyId::SoraAsset(AssetId32::new([2; 32])));
	for dest in [Address::Index(1), Address::Raw(vec![1, 2]), Address::Address32(BOB)] {
		let kind = dest.kind();
		assert_eq!(
			TransferCall::new(dest, 1u32.into(), currency),
			Err(ValidationError::UnsupportedDestination(kind)),
		);
	}
}

#[test]
fn non_native_layouts_never_emit_compact_amounts() {
	let amount = BigAmount::max_compact();
	for row in rows() {
		let call = TransferCall::new(bob(), amount.clone(), row.currency).unwrap();
		let fields = call.fields().unwrap();
		let mut value = &fields[2].bytes[..];

		assert_eq!(
			BigAmount::decode_as(runtime_calls::AmountEncoding::DecimalString, &mut value),
			Ok(amount.clone()),
		);
		assert!(value.is_empty());
	}
}
