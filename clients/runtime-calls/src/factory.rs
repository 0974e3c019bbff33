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

//! Builds [`RuntimeCall`] envelopes for a configured chain.

use crate::{
	balances::TransferCall,
	crowdloan::{ContributeCall, MultiSignature},
	currency::AssetId32,
	envelope, pools,
	staking::{
		BondCall, BondExtraCall, ChillCall, NominateCall, PayoutStakersCall, RebondCall,
		RewardDestination, SetPayeeCall, UnbondCall, WithdrawUnbondedCall,
	},
	swap::{FilterMode, LiquiditySourceType, SwapAmount, SwapCall},
	xcm::{Location, WeightLimit, XcmTransferCall},
	AccountId, Address, BigAmount, CallFactoryConfig, CallPath, CurrencyId, RuntimeCall,
	ValidationError, LOG_TARGET,
};
use core::fmt::Display;

/// Turns a textual chain address into an [`Address`].
pub trait AddressResolver {
	type Error: Display;

	fn resolve(&self, address: &str) -> Result<Address, Self::Error>;
}

impl<F, E> AddressResolver for F
where
	F: Fn(&str) -> Result<Address, E>,
	E: Display,
{
	type Error = E;

	fn resolve(&self, address: &str) -> Result<Address, E> {
		self(address)
	}
}

/// Call builder bound to one chain configuration and one address resolver.
pub struct CallFactory<R> {
	resolver: R,
	config: CallFactoryConfig,
}

impl<R: AddressResolver> CallFactory<R> {
	pub fn new(resolver: R) -> Self {
		Self::with_config(resolver, CallFactoryConfig::default())
	}

	pub fn with_config(resolver: R, config: CallFactoryConfig) -> Self {
		Self { resolver, config }
	}

	pub fn config(&self) -> &CallFactoryConfig {
		&self.config
	}

	/// Resolve a textual address.
	pub fn resolve(&self, address: &str) -> Result<Address, ValidationError> {
		self.resolver.resolve(address).map_err(|e| {
			log::debug!(target: LOG_TARGET, "Failed to resolve address {address}: {e}");
			ValidationError::UnresolvedAddress { address: address.into(), reason: e.to_string() }
		})
	}

	fn wrap<A>(&self, path: &CallPath, args: A) -> RuntimeCall<A> {
		log::debug!(target: LOG_TARGET, "Built {}.{} call", path.module, path.call);
		envelope(path.module.clone(), path.call.clone(), args)
	}

	pub fn bond(
		&self,
		controller: Option<Address>,
		value: BigAmount,
		payee: RewardDestination,
	) -> RuntimeCall<BondCall> {
		self.wrap(&CallPath::BOND, BondCall::new(controller, value, payee))
	}

	pub fn bond_extra(&self, max_additional: BigAmount) -> RuntimeCall<BondExtraCall> {
		self.wrap(&CallPath::BOND_EXTRA, BondExtraCall::new(max_additional))
	}

	pub fn unbond(&self, value: BigAmount) -> RuntimeCall<UnbondCall> {
		self.wrap(&CallPath::UNBOND, UnbondCall::new(value))
	}

	pub fn rebond(&self, value: BigAmount) -> RuntimeCall<RebondCall> {
		self.wrap(&CallPath::REBOND, RebondCall::new(value))
	}

	pub fn nominate(
		&self,
		targets: Vec<Address>,
	) -> Result<RuntimeCall<NominateCall>, ValidationError> {
		let args = NominateCall::with_limit(targets, self.config.max_nominations)?;
		Ok(self.wrap(&CallPath::NOMINATE, args))
	}

	/// Nominate validators known by their textual addresses, in the given order.
	pub fn nominate_addresses(
		&self,
		targets: &[&str],
	) -> Result<RuntimeCall<NominateCall>, ValidationError> {
		let targets =
			targets.iter().map(|target| self.resolve(target)).collect::<Result<Vec<_>, _>>()?;
		self.nominate(targets)
	}

	pub fn payout_stakers(
		&self,
		validator_stash: AccountId,
		era: u32,
	) -> RuntimeCall<PayoutStakersCall> {
		self.wrap(&CallPath::PAYOUT_STAKERS, PayoutStakersCall::new(validator_stash, era))
	}

	pub fn set_payee(&self, payee: RewardDestination) -> RuntimeCall<SetPayeeCall> {
		self.wrap(&CallPath::SET_PAYEE, SetPayeeCall::new(payee))
	}

	pub fn withdraw_unbonded(&self, num_slashing_spans: u32) -> RuntimeCall<WithdrawUnbondedCall> {
		self.wrap(&CallPath::WITHDRAW_UNBONDED, WithdrawUnbondedCall::new(num_slashing_spans))
	}

	pub fn chill(&self) -> RuntimeCall<ChillCall> {
		self.wrap(&CallPath::CHILL, ChillCall {})
	}

	/// Transfer call for `currency`, under the module configured for its layout.
	pub fn transfer(
		&self,
		dest: Address,
		amount: BigAmount,
		currency: Option<CurrencyId>,
	) -> Result<RuntimeCall<TransferCall>, ValidationError> {
		let args = TransferCall::new(dest, amount, currency)?;
		Ok(self.wrap(self.config.transfer.path(args.layout()), args))
	}

	pub fn transfer_to(
		&self,
		dest: &str,
		amount: BigAmount,
		currency: Option<CurrencyId>,
	) -> Result<RuntimeCall<TransferCall>, ValidationError> {
		self.transfer(self.resolve(dest)?, amount, currency)
	}

	pub fn pool_join(&self, amount: BigAmount, pool_id: u32) -> RuntimeCall<pools::JoinCall> {
		self.wrap(&CallPath::POOL_JOIN, pools::JoinCall::new(amount, pool_id))
	}

	pub fn pool_bond_extra(&self, extra: pools::BondExtra) -> RuntimeCall<pools::BondExtraCall> {
		self.wrap(&CallPath::POOL_BOND_EXTRA, pools::BondExtraCall::new(extra))
	}

	pub fn pool_claim_payout(&self) -> RuntimeCall<pools::ClaimPayoutCall> {
		self.wrap(&CallPath::POOL_CLAIM_PAYOUT, pools::ClaimPayoutCall {})
	}

	pub fn pool_unbond(
		&self,
		member_account: Address,
		unbonding_points: BigAmount,
	) -> RuntimeCall<pools::UnbondCall> {
		self.wrap(&CallPath::POOL_UNBOND, pools::UnbondCall::new(member_account, unbonding_points))
	}

	pub fn pool_withdraw_unbonded(
		&self,
		pool_id: u32,
		num_slashing_spans: u32,
	) -> RuntimeCall<pools::PoolWithdrawUnbondedCall> {
		self.wrap(
			&CallPath::POOL_WITHDRAW_UNBONDED,
			pools::PoolWithdrawUnbondedCall::new(pool_id, num_slashing_spans),
		)
	}

	pub fn pool_member_withdraw_unbonded(
		&self,
		member_account: Address,
		num_slashing_spans: u32,
	) -> RuntimeCall<pools::WithdrawUnbondedCall> {
		self.wrap(
			&CallPath::POOL_MEMBER_WITHDRAW_UNBONDED,
			pools::WithdrawUnbondedCall::new(member_account, num_slashing_spans),
		)
	}

	pub fn pool_create(
		&self,
		amount: BigAmount,
		root: Address,
		nominator: Address,
		bouncer: Address,
	) -> RuntimeCall<pools::CreateCall> {
		self.wrap(&CallPath::POOL_CREATE, pools::CreateCall::new(amount, root, nominator, bouncer))
	}

	pub fn pool_nominate(
		&self,
		pool_id: u32,
		validators: Vec<AccountId>,
	) -> Result<RuntimeCall<pools::NominateCall>, ValidationError> {
		let args =
			pools::NominateCall::with_limit(pool_id, validators, self.config.max_nominations)?;
		Ok(self.wrap(&CallPath::POOL_NOMINATE, args))
	}

	pub fn pool_set_metadata(
		&self,
		pool_id: u32,
		metadata: Vec<u8>,
	) -> Result<RuntimeCall<pools::SetMetadataCall>, ValidationError> {
		let max = self.config.max_pool_metadata_len;
		let args = pools::SetMetadataCall::with_limit(pool_id, metadata, max)?;
		Ok(self.wrap(&CallPath::POOL_SET_METADATA, args))
	}

	pub fn pool_update_roles(
		&self,
		pool_id: u32,
		new_root: pools::UpdateRoleCase,
		new_nominator: pools::UpdateRoleCase,
		new_bouncer: pools::UpdateRoleCase,
	) -> RuntimeCall<pools::UpdateRolesCall> {
		self.wrap(
			&CallPath::POOL_UPDATE_ROLES,
			pools::UpdateRolesCall::new(pool_id, new_root, new_nominator, new_bouncer),
		)
	}

	pub fn swap(
		&self,
		dex_id: u32,
		input_asset_id: AssetId32,
		output_asset_id: AssetId32,
		swap_amount: SwapAmount,
		selected_source_types: Vec<LiquiditySourceType>,
		filter_mode: FilterMode,
	) -> RuntimeCall<SwapCall> {
		let args = SwapCall::new(
			dex_id,
			input_asset_id,
			output_asset_id,
			swap_amount,
			selected_source_types,
			filter_mode,
		);
		self.wrap(&CallPath::SWAP, args)
	}

	pub fn xcm_transfer(
		&self,
		currency_id: CurrencyId,
		amount: BigAmount,
		dest: Location,
		dest_weight_limit: WeightLimit,
	) -> RuntimeCall<XcmTransferCall> {
		self.wrap(
			&CallPath::XTOKENS_TRANSFER,
			XcmTransferCall::new(currency_id, amount, dest, dest_weight_limit),
		)
	}

	pub fn contribute(
		&self,
		index: u32,
		value: BigAmount,
		signature: Option<MultiSignature>,
	) -> RuntimeCall<ContributeCall> {
		self.wrap(&CallPath::CROWDLOAN_CONTRIBUTE, ContributeCall::new(index, value, signature))
	}
}
