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

//! Typed runtime calls for a wallet client.
//!
//! Every supported call has a payload struct that validates its input on construction and
//! renders to an ordered list of [`EncodedField`]s. The [`CallFactory`] wraps payloads into
//! [`RuntimeCall`] envelopes carrying the `(module, call)` names the submission layer resolves
//! against chain metadata.
//!
//! Wire layouts are fixed per call kind, with one exception: a [`balances::TransferCall`]
//! changes the names, order and amount encoding of its fields depending on the
//! [`CurrencyId`] being moved. See [`currency::TransferLayout`].

use call_codec_primitives::{field, scale};

pub use call_codec_primitives::{
	AccountId, Address, AmountEncoding, BigAmount, DecodingError, EncodedField, EncodingError,
	FieldEncoding, ValidationError,
};

pub mod balances;
pub mod config;
pub mod crowdloan;
pub mod currency;
pub mod factory;
pub mod pools;
pub mod registry;
pub mod staking;
pub mod swap;
pub mod xcm;

pub use config::{CallFactoryConfig, TransferPaths};
pub use currency::{CurrencyId, TransferLayout};
pub use factory::{AddressResolver, CallFactory};
pub use registry::{envelope, CallIndex, CallPath, RuntimeCall};

/// Log target for this crate.
pub const LOG_TARGET: &str = "runtime-calls";

/// Arguments of a runtime call.
pub trait CallArgs {
	/// Encoding of every balance argument of this call.
	fn amount_encoding(&self) -> AmountEncoding;

	/// Arguments in wire order.
	fn fields(&self) -> Result<Vec<EncodedField>, EncodingError>;

	/// Argument bytes, without the call index.
	fn encode_args(&self) -> Result<Vec<u8>, EncodingError> {
		Ok(field::concat(&self.fields()?))
	}
}

/// Decoding counterpart of [`CallArgs`].
pub trait DecodeArgs: Sized {
	/// What a decoder must know up front to pick the wire layout. `()` when the argument bytes
	/// describe themselves.
	type Layout;

	/// Decode the arguments from the head of `input`, advancing it.
	fn decode_args(input: &mut &[u8], layout: &Self::Layout) -> Result<Self, DecodingError>;

	/// Decode arguments that must span the whole of `bytes`.
	fn decode_all(bytes: &[u8], layout: &Self::Layout) -> Result<Self, DecodingError> {
		scale::decode_all(bytes, |input| Self::decode_args(input, layout))
	}
}
