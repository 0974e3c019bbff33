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

//! Arguments of `pallet-staking` calls.

use crate::{
	scale, AccountId, Address, AmountEncoding, BigAmount, CallArgs, DecodeArgs, DecodingError,
	EncodedField, EncodingError, FieldEncoding, ValidationError, LOG_TARGET,
};
use call_codec_primitives::{
	decode_variant, encode_variant, Discriminant, DiscriminantStyle, PayloadShape,
	VariantPayload, VariantSchema,
};
use serde::{ser::SerializeTuple, Serialize, Serializer};

/// Default bound on the number of nominated validators.
pub const MAX_NOMINATIONS: u32 = 16;

const ADDRESS: FieldEncoding = FieldEncoding::Variant(DiscriminantStyle::Index);
const STAKING_AMOUNT: AmountEncoding = AmountEncoding::Compact;

/// Where staking rewards go.
///
/// Encoded with string tags. `Account` and `AddressString` share the `"Account"` tag and are told
/// apart by an index byte in the payload: `0` for a 32-byte account, `1` for a 20-byte key, `2`
/// for a textual address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewardDestination {
	/// Pay into the stash account, increasing the amount at stake accordingly.
	Staked,
	/// Pay into the stash account, not increasing the amount at stake.
	Stash,
	/// Pay into the controller account.
	Controller,
	/// Pay into a specified account.
	Account(Address),
	/// Pay into an account known by its textual address only.
	AddressString(String),
}

impl RewardDestination {
	const STAKED: &'static str = "Staked";
	const STASH: &'static str = "Stash";
	const CONTROLLER: &'static str = "Controller";
	const ACCOUNT: &'static str = "Account";

	const ACCOUNT_ID: u8 = 0;
	const ACCOUNT_KEY20: u8 = 1;
	const ADDRESS_STRING: u8 = 2;

	const CANDIDATES: [VariantSchema; 4] = [
		VariantSchema::named(Self::STAKED, PayloadShape::EmptyMarker),
		VariantSchema::named(Self::STASH, PayloadShape::EmptyMarker),
		VariantSchema::named(Self::CONTROLLER, PayloadShape::EmptyMarker),
		VariantSchema::named(Self::ACCOUNT, PayloadShape::Fields),
	];

	const ACCOUNT_FORMS: [VariantSchema; 3] = [
		VariantSchema::indexed(Self::ACCOUNT_ID, PayloadShape::Fields),
		VariantSchema::indexed(Self::ACCOUNT_KEY20, PayloadShape::Fields),
		VariantSchema::indexed(Self::ADDRESS_STRING, PayloadShape::Fields),
	];

	fn tag(&self) -> &'static str {
		match self {
			RewardDestination::Staked => Self::STAKED,
			RewardDestination::Stash => Self::STASH,
			RewardDestination::Controller => Self::CONTROLLER,
			RewardDestination::Account(_) | RewardDestination::AddressString(_) => Self::ACCOUNT,
		}
	}

	pub fn encode(&self) -> Result<Vec<u8>, EncodingError> {
		let payload = match self {
			RewardDestination::Staked |
			RewardDestination::Stash |
			RewardDestination::Controller => VariantPayload::EmptyMarker,
			RewardDestination::Account(address) => {
				let bytes = address.account_bytes()?;
				let form = match address {
					Address::Address20(_) => Self::ACCOUNT_KEY20,
					_ => Self::ACCOUNT_ID,
				};
				let account = EncodedField::fixed_bytes("account", bytes, bytes.len())?;
				Self::account_form(form, account)
			},
			RewardDestination::AddressString(address) =>
				Self::account_form(Self::ADDRESS_STRING, EncodedField::text("address", address)),
		};
		Ok(encode_variant(Discriminant::Name(self.tag()), payload))
	}

	fn account_form(form: u8, field: EncodedField) -> VariantPayload {
		let inner = encode_variant(Discriminant::Index(form), VariantPayload::Fields(vec![field]));
		VariantPayload::Fields(vec![EncodedField::new(
			"account",
			FieldEncoding::Variant(DiscriminantStyle::Index),
			inner,
		)])
	}

	/// Decode from the head of `input`. Raw account forms are tried before the textual one.
	/// `Address32` is read back as `Id`.
	pub fn decode(input: &mut &[u8]) -> Result<Self, DecodingError> {
		let (tag, mut rest) = decode_variant(*input, &Self::CANDIDATES)?;
		let destination = match tag {
			Discriminant::Name(Self::STAKED) => RewardDestination::Staked,
			Discriminant::Name(Self::STASH) => RewardDestination::Stash,
			Discriminant::Name(Self::CONTROLLER) => RewardDestination::Controller,
			_ => {
				let (form, mut payload) = decode_variant(rest, &Self::ACCOUNT_FORMS)?;
				let destination = match form {
					Discriminant::Index(Self::ACCOUNT_ID) => RewardDestination::Account(
						Address::Id(AccountId::new(scale::decode_fixed_bytes::<32>(&mut payload)?)),
					),
					Discriminant::Index(Self::ACCOUNT_KEY20) => RewardDestination::Account(
						Address::Address20(scale::decode_fixed_bytes::<20>(&mut payload)?),
					),
					_ => RewardDestination::AddressString(scale::decode_string(&mut payload)?),
				};
				rest = payload;
				destination
			},
		};
		*input = rest;
		Ok(destination)
	}

	fn field(&self, name: &'static str) -> Result<EncodedField, EncodingError> {
		Ok(EncodedField::new(name, FieldEncoding::Variant(DiscriminantStyle::Name), self.encode()?))
	}
}

/// `["Staked", null]`, `["Account", "0x.."]`, `["Account", "<address>"]`.
impl Serialize for RewardDestination {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut tuple = serializer.serialize_tuple(2)?;
		tuple.serialize_element(self.tag())?;
		match self {
			RewardDestination::Staked |
			RewardDestination::Stash |
			RewardDestination::Controller => tuple.serialize_element(&())?,
			RewardDestination::Account(address) => {
				let bytes =
					address.account_bytes().map_err(<S::Error as serde::ser::Error>::custom)?;
				tuple.serialize_element(&array_bytes::bytes2hex("0x", bytes))?
			},
			RewardDestination::AddressString(address) => tuple.serialize_element(address)?,
		}
		tuple.end()
	}
}

/// Whether a bond carries a controller argument. Bond arguments do not say it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerField {
	Present,
	Omitted,
}

/// Take the origin account as a stash and lock up `value` of its balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BondCall {
	#[serde(skip_serializing_if = "Option::is_none")]
	controller: Option<Address>,
	value: BigAmount,
	payee: RewardDestination,
}

impl BondCall {
	/// A `None` controller is left out of the arguments, it is not written as a null.
	pub fn new(controller: Option<Address>, value: BigAmount, payee: RewardDestination) -> Self {
		Self { controller, value, payee }
	}

	pub fn controller(&self) -> Option<&Address> {
		self.controller.as_ref()
	}

	pub fn value(&self) -> &BigAmount {
		&self.value
	}

	pub fn payee(&self) -> &RewardDestination {
		&self.payee
	}

	pub fn controller_field(&self) -> ControllerField {
		match self.controller {
			Some(_) => ControllerField::Present,
			None => ControllerField::Omitted,
		}
	}
}

impl CallArgs for BondCall {
	fn amount_encoding(&self) -> AmountEncoding {
		STAKING_AMOUNT
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		let mut fields = Vec::with_capacity(3);
		if let Some(controller) = &self.controller {
			fields.push(EncodedField::scale("controller", ADDRESS, controller));
		}
		fields.push(EncodedField::amount("value", &self.value, self.amount_encoding())?);
		fields.push(self.payee.field("payee")?);
		Ok(fields)
	}
}

impl DecodeArgs for BondCall {
	type Layout = ControllerField;

	fn decode_args(input: &mut &[u8], layout: &ControllerField) -> Result<Self, DecodingError> {
		let controller = match layout {
			ControllerField::Present => Some(scale::decode_value::<Address>(input)?),
			ControllerField::Omitted => None,
		};
		let value = BigAmount::decode_as(STAKING_AMOUNT, input)?;
		let payee = RewardDestination::decode(input)?;
		Ok(Self { controller, value, payee })
	}
}

/// Calls whose only argument is a compact balance.
macro_rules! single_amount_call {
	($(#[$attr:meta])* $name:ident, $field:ident) => {
		$(#[$attr])*
		#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
		pub struct $name {
			$field: BigAmount,
		}

		impl $name {
			pub fn new($field: BigAmount) -> Self {
				Self { $field }
			}

			pub fn $field(&self) -> &BigAmount {
				&self.$field
			}
		}

		impl CallArgs for $name {
			fn amount_encoding(&self) -> AmountEncoding {
				STAKING_AMOUNT
			}

			fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
				Ok(vec![EncodedField::amount(
					stringify!($field),
					&self.$field,
					self.amount_encoding(),
				)?])
			}
		}

		impl DecodeArgs for $name {
			type Layout = ();

			fn decode_args(input: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
				Ok(Self { $field: BigAmount::decode_as(STAKING_AMOUNT, input)? })
			}
		}
	};
}

single_amount_call!(
	/// Add some extra amount to the stash bond.
	BondExtraCall,
	max_additional
);
single_amount_call!(
	/// Schedule a portion of the stash to be unlocked.
	UnbondCall,
	value
);
single_amount_call!(
	/// Rebond a portion of the stash scheduled to be unlocked.
	RebondCall,
	value
);

/// Declare the desire to nominate `targets`, in order of preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NominateCall {
	targets: Vec<Address>,
}

impl NominateCall {
	pub fn new(targets: Vec<Address>) -> Result<Self, ValidationError> {
		Self::with_limit(targets, MAX_NOMINATIONS)
	}

	/// Targets keep the given order, it decides which validators back up the others.
	pub fn with_limit(targets: Vec<Address>, max: u32) -> Result<Self, ValidationError> {
		if targets.is_empty() {
			return Err(ValidationError::EmptyTargets)
		}
		if targets.len() > max as usize {
			return Err(ValidationError::TooManyTargets { max, actual: targets.len() })
		}

		log::debug!(target: LOG_TARGET, "Nominating {} targets", targets.len());
		Ok(Self { targets })
	}

	pub fn targets(&self) -> &[Address] {
		&self.targets
	}
}

impl CallArgs for NominateCall {
	fn amount_encoding(&self) -> AmountEncoding {
		STAKING_AMOUNT
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		Ok(vec![EncodedField::scale("targets", FieldEncoding::Sequence, &self.targets)])
	}
}

impl DecodeArgs for NominateCall {
	type Layout = ();

	fn decode_args(input: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
		let targets = scale::decode_value::<Vec<Address>>(input)?;
		Ok(Self::with_limit(targets, u32::MAX)?)
	}
}

/// Pay out the stakers behind `validator_stash` for a single era.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayoutStakersCall {
	validator_stash: AccountId,
	era: u32,
}

impl PayoutStakersCall {
	pub fn new(validator_stash: AccountId, era: u32) -> Self {
		Self { validator_stash, era }
	}

	pub fn validator_stash(&self) -> &AccountId {
		&self.validator_stash
	}

	pub fn era(&self) -> u32 {
		self.era
	}
}

impl CallArgs for PayoutStakersCall {
	fn amount_encoding(&self) -> AmountEncoding {
		STAKING_AMOUNT
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		Ok(vec![
			EncodedField::fixed_bytes(
				"validator_stash",
				self.validator_stash.as_ref(),
				AccountId::LEN,
			)?,
			EncodedField::compact_u32("era", self.era),
		])
	}
}

impl DecodeArgs for PayoutStakersCall {
	type Layout = ();

	fn decode_args(input: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
		let validator_stash = AccountId::new(scale::decode_fixed_bytes::<32>(input)?);
		let era = scale::decode_compact_u32(input)?;
		Ok(Self { validator_stash, era })
	}
}

/// Re-set the payment target for a controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetPayeeCall {
	payee: RewardDestination,
}

impl SetPayeeCall {
	pub fn new(payee: RewardDestination) -> Self {
		Self { payee }
	}

	pub fn payee(&self) -> &RewardDestination {
		&self.payee
	}
}

impl CallArgs for SetPayeeCall {
	fn amount_encoding(&self) -> AmountEncoding {
		STAKING_AMOUNT
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		Ok(vec![self.payee.field("payee")?])
	}
}

impl DecodeArgs for SetPayeeCall {
	type Layout = ();

	fn decode_args(input: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
		Ok(Self { payee: RewardDestination::decode(input)? })
	}
}

/// Remove any unlocked chunks from the unlocking queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WithdrawUnbondedCall {
	num_slashing_spans: u32,
}

impl WithdrawUnbondedCall {
	pub fn new(num_slashing_spans: u32) -> Self {
		Self { num_slashing_spans }
	}

	pub fn num_slashing_spans(&self) -> u32 {
		self.num_slashing_spans
	}
}

impl CallArgs for WithdrawUnbondedCall {
	fn amount_encoding(&self) -> AmountEncoding {
		STAKING_AMOUNT
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		Ok(vec![EncodedField::fixed("num_slashing_spans", &self.num_slashing_spans)])
	}
}

impl DecodeArgs for WithdrawUnbondedCall {
	type Layout = ();

	fn decode_args(input: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
		Ok(Self { num_slashing_spans: scale::decode_value::<u32>(input)? })
	}
}

/// Declare no desire to either validate or nominate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ChillCall {}

impl CallArgs for ChillCall {
	fn amount_encoding(&self) -> AmountEncoding {
		STAKING_AMOUNT
	}

	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError> {
		Ok(Vec::new())
	}
}

impl DecodeArgs for ChillCall {
	type Layout = ();

	fn decode_args(_: &mut &[u8], _: &()) -> Result<Self, DecodingError> {
		Ok(Self {})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field;
	use hex_literal::hex;

	const STASH: [u8; 32] = [0x11; 32];

	fn stash() -> Address {
		Address::Id(AccountId::new(STASH))
	}

	#[test]
	fn empty_destinations_carry_a_marker() {
		assert_eq!(RewardDestination::Staked.encode().unwrap(), hex!("185374616b656400").to_vec());
		assert_eq!(RewardDestination::Stash.encode().unwrap(), hex!("14537461736800").to_vec());

		let missing = hex!("185374616b656401");
		assert_eq!(
			RewardDestination::decode(&mut &missing[..]),
			Err(DecodingError::MissingEmptyMarker { tag: "Staked".into(), found: 0x01 }),
		);
	}

	#[test]
	fn account_destination_is_raw_bytes() {
		let encoded = RewardDestination::Account(stash()).encode().unwrap();

		let mut expected = hex!("1c4163636f756e74").to_vec();
		expected.push(0x00);
		expected.extend(STASH);
		assert_eq!(encoded, expected);

		let key = RewardDestination::Account(Address::Address20([0x22; 20])).encode().unwrap();
		assert_eq!(key[8], 0x01);
		assert_eq!(key[9..], [0x22; 20]);
	}

	#[test]
	fn account_payload_decodes_bytes_before_string() {
		let cases = [
			RewardDestination::Account(stash()),
			RewardDestination::Account(Address::Address20([0x22; 20])),
			RewardDestination::AddressString(
				"5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY".into(),
			),
		];
		for destination in cases {
			let encoded = destination.encode().unwrap();
			assert_eq!(RewardDestination::decode(&mut &encoded[..]), Ok(destination));
		}

		let mut unknown = hex!("1c4163636f756e74").to_vec();
		unknown.extend(hex!("030cfffefd"));
		assert_eq!(
			RewardDestination::decode(&mut &unknown[..]),
			Err(DecodingError::UnknownVariant { found: "0x03".into() }),
		);

		let mut not_text = hex!("1c4163636f756e74").to_vec();
		not_text.extend(hex!("020cfffefd"));
		assert_eq!(RewardDestination::decode(&mut &not_text[..]), Err(DecodingError::InvalidUtf8));
	}

	#[test]
	fn address_strings_of_account_lengths_stay_textual() {
		for address in ["abcdefghijklmnopqrstuvwxyz012345", "abcdefghijklmnopqrst"] {
			let call = SetPayeeCall::new(RewardDestination::AddressString(address.into()));
			let bytes = call.encode_args().unwrap();
			assert_eq!(bytes[8], 0x02);
			assert_eq!(SetPayeeCall::decode_all(&bytes, &()), Ok(call));
		}
	}

	#[test]
	fn address32_destination_reads_back_as_id() {
		let encoded = RewardDestination::Account(Address::Address32(STASH)).encode().unwrap();
		assert_eq!(encoded, RewardDestination::Account(stash()).encode().unwrap());
		assert_eq!(
			RewardDestination::decode(&mut &encoded[..]),
			Ok(RewardDestination::Account(stash())),
		);
	}

	#[test]
	fn index_destination_cannot_be_paid() {
		assert_eq!(
			RewardDestination::Account(Address::Index(3)).encode(),
			Err(EncodingError::UnsupportedAddress("Index")),
		);
	}

	#[test]
	fn bond_controller_is_left_out_when_absent() {
		let payee = RewardDestination::Staked;
		let without = BondCall::new(None, 1000u32.into(), payee.clone());
		let with = BondCall::new(Some(stash()), 1000u32.into(), payee);

		let short = without.encode_args().unwrap();
		let long = with.encode_args().unwrap();
		assert_eq!(field::names(&without.fields().unwrap()), ["value", "payee"]);
		assert_eq!(long.len(), short.len() + 33);
		assert_eq!(&long[33..], &short[..]);
		assert_eq!(short[..2], hex!("a10f"));

		assert_eq!(BondCall::decode_all(&short, &without.controller_field()), Ok(without));
		assert_eq!(BondCall::decode_all(&long, &ControllerField::Present), Ok(with));
	}

	#[test]
	fn bond_json_skips_missing_controller() {
		let call = BondCall::new(None, 10u32.into(), RewardDestination::Stash);
		assert_eq!(
			serde_json::to_value(&call).unwrap(),
			serde_json::json!({ "value": "10", "payee": ["Stash", null] }),
		);
	}

	#[test]
	fn nominate_validates_target_count() {
		assert_eq!(NominateCall::new(vec![]), Err(ValidationError::EmptyTargets));
		assert_eq!(
			NominateCall::with_limit(vec![stash(); 3], 2),
			Err(ValidationError::TooManyTargets { max: 2, actual: 3 }),
		);
		assert_eq!(
			NominateCall::decode_all(&[0x00], &()),
			Err(DecodingError::Invalid(ValidationError::EmptyTargets)),
		);
	}

	#[test]
	fn payout_stakers_bytes() {
		let call = PayoutStakersCall::new(AccountId::new(STASH), 64);

		let mut expected = STASH.to_vec();
		expected.extend(hex!("0101"));
		assert_eq!(call.encode_args().unwrap(), expected);
		assert_eq!(PayoutStakersCall::decode_all(&expected, &()), Ok(call));
	}

	#[test]
	fn single_amount_calls_name_their_argument() {
		let call = BondExtraCall::new(5u32.into());
		assert_eq!(field::names(&call.fields().unwrap()), ["max_additional"]);
		assert_eq!(call.encode_args().unwrap(), vec![0x14]);
		assert_eq!(ChillCall {}.encode_args().unwrap(), Vec::<u8>::new());
		assert_eq!(WithdrawUnbondedCall::new(2).encode_args().unwrap(), hex!("02000000").to_vec());
	}
}
