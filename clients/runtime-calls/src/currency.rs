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

//! Currency identifiers and the transfer layout they select.
//!
//! A transfer of the native token, an Equilibrium asset, a Sora asset, an `pallet-assets`
//! asset and an ORML-style token are all "a transfer", but every one of them is a different
//! call with different argument names, order and amount encoding. [`CurrencyShape`] is the
//! one place deciding which of them a [`CurrencyId`] maps to.

use crate::LOG_TARGET;
use call_codec_primitives::{serialize_hex, AmountEncoding};
use codec::{Decode, Encode, MaxEncodedLen};
use core::fmt;
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// ORML token symbol index.
#[derive(
	Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Encode, Decode, TypeInfo, MaxEncodedLen,
	Serialize, Deserialize,
)]
pub struct TokenSymbol(pub u8);

/// 32 byte asset id of the Sora asset registry.
#[derive(
	Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, TypeInfo, MaxEncodedLen,
	Serialize,
)]
pub struct AssetId32(#[serde(serialize_with = "serialize_hex")] [u8; 32]);

impl AssetId32 {
	pub const fn new(bytes: [u8; 32]) -> Self {
		Self(bytes)
	}

	pub fn as_bytes(&self) -> &[u8; 32] {
		&self.0
	}
}

impl AsRef<[u8]> for AssetId32 {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl fmt::Debug for AssetId32 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "AssetId32({})", array_bytes::bytes2hex("0x", self.0))
	}
}

/// Identifier of the asset a transfer moves.
///
/// `None` in place of a currency id means the chain's native token.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Encode, Decode, TypeInfo, MaxEncodedLen, Serialize)]
pub enum CurrencyId {
	#[codec(index = 0)]
	Token(TokenSymbol),
	#[codec(index = 1)]
	VToken(TokenSymbol),
	#[codec(index = 2)]
	ForeignAsset(u16),
	#[codec(index = 3)]
	LiquidCrowdloan(u32),
	#[codec(index = 4)]
	Equilibrium(u64),
	#[codec(index = 5)]
	SoraAsset(AssetId32),
	#[codec(index = 6)]
	Assets(u32),
	#[codec(index = 7)]
	AssetId(u32),
}

impl CurrencyId {
	pub fn kind(&self) -> &'static str {
		match self {
			CurrencyId::Token(_) => "Token",
			CurrencyId::VToken(_) => "VToken",
			CurrencyId::ForeignAsset(_) => "ForeignAsset",
			CurrencyId::LiquidCrowdloan(_) => "LiquidCrowdloan",
			CurrencyId::Equilibrium(_) => "Equilibrium",
			CurrencyId::SoraAsset(_) => "SoraAsset",
			CurrencyId::Assets(_) => "Assets",
			CurrencyId::AssetId(_) => "AssetId",
		}
	}
}

/// A currency id viewed through the transfer call it needs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CurrencyShape<'a> {
	Native,
	Equilibrium(u64),
	SoraAsset(&'a AssetId32),
	AssetsPallet(u32),
	/// Carried as a whole `currencyId` argument.
	GenericAssetId(&'a CurrencyId),
}

impl<'a> CurrencyShape<'a> {
	pub fn of(currency: Option<&'a CurrencyId>) -> Self {
		let Some(currency) = currency else { return CurrencyShape::Native };
		match currency {
			CurrencyId::Equilibrium(id) => CurrencyShape::Equilibrium(*id),
			CurrencyId::SoraAsset(id) => CurrencyShape::SoraAsset(id),
			CurrencyId::Assets(id) => CurrencyShape::AssetsPallet(*id),
			CurrencyId::AssetId(_) => CurrencyShape::GenericAssetId(currency),
			CurrencyId::Token(_) |
			CurrencyId::VToken(_) |
			CurrencyId::ForeignAsset(_) |
			CurrencyId::LiquidCrowdloan(_) => {
				log::trace!(
					target: LOG_TARGET,
					"Currency kind {} is transferred with the generic asset id layout",
					currency.kind(),
				);
				CurrencyShape::GenericAssetId(currency)
			},
		}
	}

	pub fn layout(&self) -> TransferLayout {
		match self {
			CurrencyShape::Native => TransferLayout::Native,
			CurrencyShape::Equilibrium(_) => TransferLayout::Equilibrium,
			CurrencyShape::SoraAsset(_) => TransferLayout::SoraAsset,
			CurrencyShape::AssetsPallet(_) => TransferLayout::AssetsPallet,
			CurrencyShape::GenericAssetId(_) => TransferLayout::GenericAssetId,
		}
	}
}

/// Argument layout of a transfer call.
///
/// | layout | arguments |
/// |---|---|
/// | `Native` | `dest`, `value` (compact) |
/// | `Equilibrium` | `asset`, `to`, `value` (decimal) |
/// | `SoraAsset` | `assetId`, `to` (raw account bytes), `amount` (decimal) |
/// | `AssetsPallet` | `id`, `target`, `amount` (decimal) |
/// | `GenericAssetId` | `dest`, `currencyId`, `amount` (decimal) |
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TransferLayout {
	Native,
	Equilibrium,
	SoraAsset,
	AssetsPallet,
	GenericAssetId,
}

impl TransferLayout {
	/// Layout used to transfer `currency`. Never fails: unknown kinds take `GenericAssetId`.
	pub fn select(currency: Option<&CurrencyId>) -> Self {
		CurrencyShape::of(currency).layout()
	}

	pub fn amount_encoding(&self) -> AmountEncoding {
		match self {
			TransferLayout::Native => AmountEncoding::Compact,
			TransferLayout::Equilibrium |
			TransferLayout::SoraAsset |
			TransferLayout::AssetsPallet |
			TransferLayout::GenericAssetId => AmountEncoding::DecimalString,
		}
	}
}
