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

//! Arguments of `pallet-nomination-pools` calls.
//!
//! Pool balances are compact, with the exception of [`BondExtra`], which the pools runtime
//! of the supported chains declares with string-tagged cases and decimal amounts.

use crate::{
	scale, AccountId, Address, AmountEncoding, BigAmount, CallArgs, DecodeArgs, DecodingError,
	EncodedField, EncodingError, FieldEncoding, ValidationError, LOG_TARGET,
};
use call_codec_primitives::{
	decode_variant, encode_variant, serialize_hex, Discriminant, DiscriminantStyle, PayloadShape,
	VariantPayload, VariantSchema,
};
use serde::{ser::SerializeTuple, Serialize, Serializer};

/// Default bound on the pool metadata length, in bytes.
pub const MAX_POOL_METADATA_LEN: u32 = 256;

const ADDRESS: FieldEncoding = FieldEncoding::Variant(DiscriminantStyle::Index);
const POOL_AMOUNT: AmountEncoding = AmountEncoding::Compact;
const BOND_EXTRA_AMOUNT: AmountEncoding = AmountEncoding::DecimalString;

/// Source of an extra bond into a pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BondExtra {
	/// Take from the free balance of the member.
	FreeBalance(BigAmount),
	/// Take from the pending rewards of the member.
	Rewards(BigAmount),
}

impl BondExtra {
	const FREE_BALANCE: &'static str = "FreeBalance";
	const REWARDS: &'static str = "Rewards";

	const CANDIDATES: [VariantSchema; 2] = [
		VariantSchema::named(Self::FREE_BALANCE, PayloadShape::Fields),
		VariantSchema::named(Self::REWARDS, PayloadShape::Fields),
	];

	fn tag(&self) -> &'static str {
		match self {
			BondExtra::FreeBalance(_) => Self::FREE_BALANCE,
			BondExtra::Rewards(_) => Self::REWARDS,
		}
	}

	pub fn amount(&self) -> &BigAmount {
		match self {
			BondExtra::FreeBalance(amount) | BondExtra::Rewards(amount) => amount,
		}
	}

	pub fn encode(&self) -> Result<Vec<u8>, EncodingError> {
		let amount = EncodedField::amount("amount", self.amount(), BOND_EXTRA_AMOUNT)?;
		Ok(encode_variant(Discriminant::Name(self.tag()), VariantPayload::Fields(vec![amount])))
	}

	pub fn decode(input: &mut &[u8]) -> Result<Self, DecodingError> {
		let (tag, mut rest) = decode_variant(*input, &Self::CANDIDATES)?;
		let amount = BigAmount::decode_as(BOND_EXTRA_AMOUNT, &mut rest)?;
		let extra = match tag {
			Discriminant::Name(Self::FREE_BALANCE) => BondExtra::FreeBalance(amount),
			_ => BondExtra::Rewards(amount),
		};
		*input = rest;
		Ok(extra)
	}
}

/// `["FreeBalance", "1000"]`.
impl Serialize for BondExtra {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut tuple = serializer.serialize_tuple(2)?;
		tuple.serialize_element(self.tag())?;
		tuple.serialize_element(self.amount())?;
		tuple.end()
	}
}

/// Change to a pool role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UpdateRoleCase {
	/// Keep the current holder.
	Noop,
	/// Hand the role to an account.
	Set(AccountId),
	/// Remove the role.
	Remove,
}

impl UpdateRoleCase {
	const CANDIDATES: [VariantSchema; 3] = [
		VariantSchema::indexed(0, PayloadShape::Absent),
		VariantSchema::indexed(1, PayloadShape::Fields),
		VariantSchema::indexed(2, PayloadShape::Absent),
	];

	pub fn encode(&self) -> Vec<u8> {
		match self {
			UpdateRoleCase::Noop => encode_variant(Discriminant::Index(0), VariantPayload::Absent),
			UpdateRoleCase::Set(account) => encode_variant(
				Discriminant::Index(1),
				VariantPayload::Fields(vec![EncodedField::scale(
					"account",
					FieldEncoding::FixedBytes(AccountId::LEN),
					account,
				)]),
			),
			UpdateRoleCase::Remove =>
				encode_variant(Discriminant::Index(2), VariantPayload::Absent),
		}
	}

	pub fn decode(input: &mut &[u8]) -> Result<Self, DecodingError> {
		let (tag, mut rest) = decode_variant(*input, &Self::CANDIDATES)?;
		let case = match tag {
			Discriminant::Index(1) => UpdateRoleCase::Set(scale::decode_value(&mut rest)?),
			Discriminant::Index(2) => UpdateRoleCase::Remove,
			_ => UpdateRoleCase::Noop,
		};
		*input = rest;
		Ok(case)
	}

	fn field(&self, name: &'static str) -> EncodedField {
		EncodedField::new(name, FieldEncoding::Variant(DiscriminantStyle::Index), self.encode())
	}
}

/// Stake funds with a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinCall {
	amount: BigAmount,
	pool_id: u32,
}

impl JoinCall {
	pub fn new(amount: BigAmount, pool_id: u32) -> Self {
		Self { amount, pool_id }
	}
}

impl CallArgs for JoinCall {
	fn amount_encoding(&self) -> AmountEncoding {
		POOL_AMOUNT
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		Ok(vec![
			EncodedField::amount("amount", &self.amount, self.amount_encoding())?,
			EncodedField::fixed("pool_id", &self.pool_id),
		])
	}
}

impl DecodeArgs for JoinCall {
	type Layout = ();

	fn decode_args(input: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
		let amount = BigAmount::decode_as(POOL_AMOUNT, input)?;
		Ok(Self { amount, pool_id: scale::decode_value(input)? })
	}
}

/// Bond extra funds from the free balance or the pending rewards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BondExtraCall {
	extra: BondExtra,
}

impl BondExtraCall {
	pub fn new(extra: BondExtra) -> Self {
		Self { extra }
	}

	pub fn extra(&self) -> &BondExtra {
		&self.extra
	}
}

impl CallArgs for BondExtraCall {
	fn amount_encoding(&self) -> AmountEncoding {
		BOND_EXTRA_AMOUNT
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		Ok(vec![EncodedField::new(
			"extra",
			FieldEncoding::Variant(DiscriminantStyle::Name),
			self.extra.encode()?,
		)])
	}
}

impl DecodeArgs for BondExtraCall {
	type Layout = ();

	fn decode_args(input: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
		Ok(Self { extra: BondExtra::decode(input)? })
	}
}

/// Pay out the pending rewards of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ClaimPayoutCall {}

impl CallArgs for ClaimPayoutCall {
	fn amount_encoding(&self) -> AmountEncoding {
		POOL_AMOUNT
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		Ok(Vec::new())
	}
}

impl DecodeArgs for ClaimPayoutCall {
	type Layout = ();

	fn decode_args(_: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
		Ok(Self {})
	}
}

/// Unbond `unbonding_points` of `member_account`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnbondCall {
	member_account: Address,
	unbonding_points: BigAmount,
}

impl UnbondCall {
	pub fn new(member_account: Address, unbonding_points: BigAmount) -> Self {
		Self { member_account, unbonding_points }
	}
}

impl CallArgs for UnbondCall {
	fn amount_encoding(&self) -> AmountEncoding {
		POOL_AMOUNT
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		Ok(vec![
			EncodedField::scale("member_account", ADDRESS, &self.member_account),
			EncodedField::amount(
				"unbonding_points",
				&self.unbonding_points,
				self.amount_encoding(),
			)?,
		])
	}
}

impl DecodeArgs for UnbondCall {
	type Layout = ();

	fn decode_args(input: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
		let member_account = scale::decode_value(input)?;
		let unbonding_points = BigAmount::decode_as(POOL_AMOUNT, input)?;
		Ok(Self { member_account, unbonding_points })
	}
}

/// Withdraw unlocked chunks of the pool's bonded account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolWithdrawUnbondedCall {
	pool_id: u32,
	num_slashing_spans: u32,
}

impl PoolWithdrawUnbondedCall {
	pub fn new(pool_id: u32, num_slashing_spans: u32) -> Self {
		Self { pool_id, num_slashing_spans }
	}
}

impl CallArgs for PoolWithdrawUnbondedCall {
	fn amount_encoding(&self) -> AmountEncoding {
		POOL_AMOUNT
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		Ok(vec![
			EncodedField::fixed("pool_id", &self.pool_id),
			EncodedField::fixed("num_slashing_spans", &self.num_slashing_spans),
		])
	}
}

impl DecodeArgs for PoolWithdrawUnbondedCall {
	type Layout = ();

	fn decode_args(input: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
		let pool_id = scale::decode_value(input)?;
		Ok(Self { pool_id, num_slashing_spans: scale::decode_value(input)? })
	}
}

/// Withdraw the unbonded funds of a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WithdrawUnbondedCall {
	member_account: Address,
	num_slashing_spans: u32,
}

impl WithdrawUnbondedCall {
	pub fn new(member_account: Address, num_slashing_spans: u32) -> Self {
		Self { member_account, num_slashing_spans }
	}
}

impl CallArgs for WithdrawUnbondedCall {
	fn amount_encoding(&self) -> AmountEncoding {
		POOL_AMOUNT
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		Ok(vec![
			EncodedField::scale("member_account", ADDRESS, &self.member_account),
			EncodedField::fixed("num_slashing_spans", &self.num_slashing_spans),
		])
	}
}

impl DecodeArgs for WithdrawUnbondedCall {
	type Layout = ();

	fn decode_args(input: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
		let member_account = scale::decode_value(input)?;
		Ok(Self { member_account, num_slashing_spans: scale::decode_value(input)? })
	}
}

/// Create a pool, bonding `amount` from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCall {
	amount: BigAmount,
	root: Address,
	nominator: Address,
	bouncer: Address,
}

impl CreateCall {
	pub fn new(amount: BigAmount, root: Address, nominator: Address, bouncer: Address) -> Self {
		Self { amount, root, nominator, bouncer }
	}
}

impl CallArgs for CreateCall {
	fn amount_encoding(&self) -> AmountEncoding {
		POOL_AMOUNT
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		Ok(vec![
			EncodedField::amount("amount", &self.amount, self.amount_encoding())?,
			EncodedField::scale("root", ADDRESS, &self.root),
			EncodedField::scale("nominator", ADDRESS, &self.nominator),
			EncodedField::scale("bouncer", ADDRESS, &self.bouncer),
		])
	}
}

impl DecodeArgs for CreateCall {
	type Layout = ();

	fn decode_args(input: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
		let amount = BigAmount::decode_as(POOL_AMOUNT, input)?;
		let root = scale::decode_value(input)?;
		let nominator = scale::decode_value(input)?;
		let bouncer = scale::decode_value(input)?;
		Ok(Self { amount, root, nominator, bouncer })
	}
}

/// Nominate `validators` on behalf of a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NominateCall {
	pool_id: u32,
	validators: Vec<AccountId>,
}

impl NominateCall {
	pub fn with_limit(
		pool_id: u32,
		validators: Vec<AccountId>,
		max: u32,
	) -> Result<Self, ValidationError> {
		if validators.is_empty() {
			return Err(ValidationError::EmptyTargets)
		}
		if validators.len() > max as usize {
			return Err(ValidationError::TooManyTargets { max, actual: validators.len() })
		}

		log::debug!(
			target: LOG_TARGET,
			"Pool {} nominating {} validators",
			pool_id,
			validators.len(),
		);
		Ok(Self { pool_id, validators })
	}

	pub fn validators(&self) -> &[AccountId] {
		&self.validators
	}
}

impl CallArgs for NominateCall {
	fn amount_encoding(&self) -> AmountEncoding {
		POOL_AMOUNT
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		Ok(vec![
			EncodedField::fixed("pool_id", &self.pool_id),
			EncodedField::scale("validators", FieldEncoding::Sequence, &self.validators),
		])
	}
}

impl DecodeArgs for NominateCall {
	type Layout = ();

	fn decode_args(input: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
		let pool_id = scale::decode_value(input)?;
		let validators = scale::decode_value(input)?;
		Ok(Self::with_limit(pool_id, validators, u32::MAX)?)
	}
}

/// Set the metadata of a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetMetadataCall {
	pool_id: u32,
	#[serde(serialize_with = "serialize_hex")]
	metadata: Vec<u8>,
}

impl SetMetadataCall {
	pub fn with_limit(pool_id: u32, metadata: Vec<u8>, max: u32) -> Result<Self, ValidationError> {
		if metadata.len() > max as usize {
			return Err(ValidationError::MetadataTooLong { max, actual: metadata.len() })
		}
		Ok(Self { pool_id, metadata })
	}

	pub fn metadata(&self) -> &[u8] {
		&self.metadata
	}
}

impl CallArgs for SetMetadataCall {
	fn amount_encoding(&self) -> AmountEncoding {
		POOL_AMOUNT
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		Ok(vec![
			EncodedField::fixed("pool_id", &self.pool_id),
			EncodedField::scale("metadata", FieldEncoding::Bytes, &self.metadata),
		])
	}
}

impl DecodeArgs for SetMetadataCall {
	type Layout = ();

	fn decode_args(input: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
		let pool_id = scale::decode_value(input)?;
		Ok(Self { pool_id, metadata: scale::decode_bytes(input)? })
	}
}

/// Update the root, nominator and bouncer roles of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdateRolesCall {
	pool_id: u32,
	new_root: UpdateRoleCase,
	new_nominator: UpdateRoleCase,
	new_bouncer: UpdateRoleCase,
}

impl UpdateRolesCall {
	pub fn new(
		pool_id: u32,
		new_root: UpdateRoleCase,
		new_nominator: UpdateRoleCase,
		new_bouncer: UpdateRoleCase,
	) -> Self {
		Self { pool_id, new_root, new_nominator, new_bouncer }
	}
}

impl CallArgs for UpdateRolesCall {
	fn amount_encoding(&self) -> AmountEncoding {
		POOL_AMOUNT
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		Ok(vec![
			EncodedField::fixed("pool_id", &self.pool_id),
			self.new_root.field("new_root"),
			self.new_nominator.field("new_nominator"),
			self.new_bouncer.field("new_bouncer"),
		])
	}
}

impl DecodeArgs for UpdateRolesCall {
	type Layout = ();

	fn decode_args(input: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
		let pool_id = scale::decode_value(input)?;
		let new_root = UpdateRoleCase::decode(input)?;
		let new_nominator = UpdateRoleCase::decode(input)?;
		let new_bouncer = UpdateRoleCase::decode(input)?;
		Ok(Self { pool_id, new_root, new_nominator, new_bouncer })
	}
}
