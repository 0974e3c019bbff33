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

//! Wire-level building blocks for encoding runtime call arguments.
//!
//! The crate sits between typed call payloads and `parity-scale-codec`:
//!
//! - [`scale`]: primitive codec. Compact integers of unbounded size, fixed size byte fields,
//!   optional values and strings.
//! - [`amount`]: [`BigAmount`] and the [`AmountEncoding`] modes a balance may travel in.
//! - [`variant`]: tagged unions with either string or index discriminants.
//! - [`field`]: named, ordered argument descriptors.
//! - [`address`]: [`AccountId`] and the multi-form [`Address`].
//!
//! Everything here is a pure function of its input.

pub mod address;
pub mod amount;
pub mod error;
pub mod field;
pub mod scale;
pub mod variant;

pub use address::{serialize_hex, AccountId, Address};
pub use amount::{AmountEncoding, BigAmount};
pub use error::{DecodingError, EncodingError, ValidationError};
pub use field::{DiscriminantStyle, EncodedField, FieldEncoding};
pub use variant::{
	decode_variant, encode_variant, Discriminant, PayloadShape, VariantPayload, VariantSchema,
};
