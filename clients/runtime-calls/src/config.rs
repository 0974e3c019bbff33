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

//! Chain-specific configuration of the [`CallFactory`](crate::CallFactory).

use crate::{pools::MAX_POOL_METADATA_LEN, staking::MAX_NOMINATIONS, CallPath, TransferLayout};
use serde::{Deserialize, Serialize};

/// Call used for every transfer layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransferPaths {
	pub native: CallPath,
	pub equilibrium: CallPath,
	pub sora_asset: CallPath,
	pub assets_pallet: CallPath,
	pub generic_asset_id: CallPath,
}

impl TransferPaths {
	pub fn path(&self, layout: TransferLayout) -> &CallPath {
		match layout {
			TransferLayout::Native => &self.native,
			TransferLayout::Equilibrium => &self.equilibrium,
			TransferLayout::SoraAsset => &self.sora_asset,
			TransferLayout::AssetsPallet => &self.assets_pallet,
			TransferLayout::GenericAssetId => &self.generic_asset_id,
		}
	}
}

impl Default for TransferPaths {
	fn default() -> Self {
		Self {
			native: CallPath::BALANCES_TRANSFER,
			equilibrium: CallPath::EQ_BALANCES_TRANSFER,
			sora_asset: CallPath::ASSETS_TRANSFER,
			assets_pallet: CallPath::ASSETS_TRANSFER,
			generic_asset_id: CallPath::TOKENS_TRANSFER,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallFactoryConfig {
	pub transfer: TransferPaths,
	/// Most validators a single nomination may name.
	pub max_nominations: u32,
	/// Longest accepted pool metadata, in bytes.
	pub max_pool_metadata_len: u32,
}

impl Default for CallFactoryConfig {
	fn default() -> Self {
		Self {
			transfer: TransferPaths::default(),
			max_nominations: MAX_NOMINATIONS,
			max_pool_metadata_len: MAX_POOL_METADATA_LEN,
		}
	}
}
