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

//! Call schema registry: `(module, call)` names and the envelope that pairs them with a
//! payload.
//!
//! Names are not checked against chain metadata here. Resolving them into a [`CallIndex`] is
//! the job of the metadata service of the submission layer.

use crate::{CallArgs, EncodingError};
use codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Module and call name of a runtime call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallPath {
	pub module: Cow<'static, str>,
	pub call: Cow<'static, str>,
}

impl CallPath {
	pub const BOND: Self = Self::new("Staking", "bond");
	pub const BOND_EXTRA: Self = Self::new("Staking", "bond_extra");
	pub const UNBOND: Self = Self::new("Staking", "unbond");
	pub const REBOND: Self = Self::new("Staking", "rebond");
	pub const NOMINATE: Self = Self::new("Staking", "nominate");
	pub const PAYOUT_STAKERS: Self = Self::new("Staking", "payout_stakers");
	pub const SET_PAYEE: Self = Self::new("Staking", "set_payee");
	pub const WITHDRAW_UNBONDED: Self = Self::new("Staking", "withdraw_unbonded");
	pub const CHILL: Self = Self::new("Staking", "chill");

	pub const BALANCES_TRANSFER: Self = Self::new("Balances", "transfer");
	pub const TOKENS_TRANSFER: Self = Self::new("Tokens", "transfer");
	pub const EQ_BALANCES_TRANSFER: Self = Self::new("EqBalances", "transfer");
	pub const ASSETS_TRANSFER: Self = Self::new("Assets", "transfer");

	pub const POOL_JOIN: Self = Self::new("NominationPools", "join");
	pub const POOL_BOND_EXTRA: Self = Self::new("NominationPools", "bond_extra");
	pub const POOL_CLAIM_PAYOUT: Self = Self::new("NominationPools", "claim_payout");
	pub const POOL_UNBOND: Self = Self::new("NominationPools", "unbond");
	pub const POOL_WITHDRAW_UNBONDED: Self =
		Self::new("NominationPools", "pool_withdraw_unbonded");
	pub const POOL_MEMBER_WITHDRAW_UNBONDED: Self =
		Self::new("NominationPools", "withdraw_unbonded");
	pub const POOL_CREATE: Self = Self::new("NominationPools", "create");
	pub const POOL_NOMINATE: Self = Self::new("NominationPools", "nominate");
	pub const POOL_SET_METADATA: Self = Self::new("NominationPools", "set_metadata");
	pub const POOL_UPDATE_ROLES: Self = Self::new("NominationPools", "update_roles");

	pub const SWAP: Self = Self::new("LiquidityProxy", "swap");
	pub const XTOKENS_TRANSFER: Self = Self::new("XTokens", "transfer");
	pub const CROWDLOAN_CONTRIBUTE: Self = Self::new("Crowdloan", "contribute");

	pub const fn new(module: &'static str, call: &'static str) -> Self {
		Self { module: Cow::Borrowed(module), call: Cow::Borrowed(call) }
	}

	/// Find a path among [`KNOWN_CALLS`].
	pub fn lookup(module: &str, call: &str) -> Option<&'static CallPath> {
		KNOWN_CALLS.iter().find(|path| path.module == module && path.call == call)
	}
}

/// Every call the builders of this crate produce by default.
pub static KNOWN_CALLS: &[CallPath] = &[
	CallPath::BOND,
	CallPath::BOND_EXTRA,
	CallPath::UNBOND,
	CallPath::REBOND,
	CallPath::NOMINATE,
	CallPath::PAYOUT_STAKERS,
	CallPath::SET_PAYEE,
	CallPath::WITHDRAW_UNBONDED,
	CallPath::CHILL,
	CallPath::BALANCES_TRANSFER,
	CallPath::TOKENS_TRANSFER,
	CallPath::EQ_BALANCES_TRANSFER,
	CallPath::ASSETS_TRANSFER,
	CallPath::POOL_JOIN,
	CallPath::POOL_BOND_EXTRA,
	CallPath::POOL_CLAIM_PAYOUT,
	CallPath::POOL_UNBOND,
	CallPath::POOL_WITHDRAW_UNBONDED,
	CallPath::POOL_MEMBER_WITHDRAW_UNBONDED,
	CallPath::POOL_CREATE,
	CallPath::POOL_NOMINATE,
	CallPath::POOL_SET_METADATA,
	CallPath::POOL_UPDATE_ROLES,
	CallPath::SWAP,
	CallPath::XTOKENS_TRANSFER,
	CallPath::CROWDLOAN_CONTRIBUTE,
];

/// Pallet and call index, as resolved from chain metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub struct CallIndex {
	pub pallet: u8,
	pub call: u8,
}

/// A call payload together with the names of the call it is the argument of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeCall<A> {
	path: CallPath,
	args: A,
}

impl<A> RuntimeCall<A> {
	pub fn module(&self) -> &str {
		&self.path.module
	}

	pub fn call(&self) -> &str {
		&self.path.call
	}

	pub fn path(&self) -> &CallPath {
		&self.path
	}

	pub fn args(&self) -> &A {
		&self.args
	}

	pub fn into_args(self) -> A {
		self.args
	}
}

impl<A: CallArgs> RuntimeCall<A> {
	/// Argument bytes.
	pub fn encode_args(&self) -> Result<Vec<u8>, EncodingError> {
		self.args.encode_args()
	}

	/// Full call bytes: pallet index, call index, arguments.
	pub fn encode_indexed(&self, index: CallIndex) -> Result<Vec<u8>, EncodingError> {
		let mut out = index.encode();
		out.extend(self.args.encode_args()?);
		Ok(out)
	}
}

impl<A: Serialize> RuntimeCall<A> {
	/// JSON argument object, the form consumed by metadata-driven encoders.
	pub fn args_json(&self) -> Result<serde_json::Value, serde_json::Error> {
		serde_json::to_value(&self.args)
	}
}

/// Pair a payload with call names.
pub fn envelope<A>(
	module: impl Into<Cow<'static, str>>,
	call: impl Into<Cow<'static, str>>,
	args: A,
) -> RuntimeCall<A> {
	RuntimeCall { path: CallPath { module: module.into(), call: call.into() }, args }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::staking::{ChillCall, UnbondCall};

	#[test]
	fn lookup_finds_known_paths_only() {
		assert_eq!(CallPath::lookup("Staking", "bond"), Some(&CallPath::BOND));
		assert_eq!(CallPath::lookup("Balances", "transfer"), Some(&CallPath::BALANCES_TRANSFER));
		assert_eq!(CallPath::lookup("Staking", "Bond"), None);
		assert_eq!(CallPath::lookup("Democracy", "vote"), None);
	}

	#[test]
	fn known_calls_are_unique() {
		for (i, path) in KNOWN_CALLS.iter().enumerate() {
			assert!(!KNOWN_CALLS[i + 1..].contains(path), "{path:?} listed twice");
		}
	}

	#[test]
	fn envelope_does_not_validate_names() {
		let call = envelope(String::from("Custom"), "anything", ChillCall {});
		assert_eq!(call.module(), "Custom");
		assert_eq!(call.call(), "anything");
		assert_eq!(CallPath::lookup(call.module(), call.call()), None);
	}

	#[test]
	fn indexed_encoding_prefixes_pallet_and_call() {
		let call = envelope("Staking", "unbond", UnbondCall::new(1000u32.into()));
		assert_eq!(
			call.encode_indexed(CallIndex { pallet: 7, call: 2 }).unwrap(),
			vec![7, 2, 0xa1, 0x0f]
		);
		assert_eq!(call.encode_args().unwrap(), vec![0xa1, 0x0f]);
	}
}
