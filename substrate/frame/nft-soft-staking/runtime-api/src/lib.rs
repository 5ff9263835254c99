// This file is part of Substrate.

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

//! Runtime API definition for the NFT soft staking pallet.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use codec::Codec;

sp_api::decl_runtime_apis! {
	/// Read-only view over the soft staking ledger.
	pub trait NftSoftStakingApi<AccountId, CollectionId, TokenId, Balance>
	where
		AccountId: Codec,
		CollectionId: Codec,
		TokenId: Codec,
		Balance: Codec,
	{
		/// Reward accrued by `token_id` in `pool_id` since its last accrual reset.
		///
		/// `None` if the token is not registered in that pool.
		fn pending_rewards(pool_id: u32, token_id: TokenId) -> Option<Balance>;

		/// Whether `token_id` of `collection` is registered anywhere, and in which pool.
		///
		/// The pool id is `0` when the item is not registered.
		fn registration_of(collection: CollectionId, token_id: TokenId) -> (bool, u32);

		/// Tokens `who` has registered in `pool_id`.
		fn staked_tokens(who: AccountId, pool_id: u32) -> Vec<TokenId>;

		/// Pools managed by `who`.
		fn pools_of(who: AccountId) -> Vec<u32>;
	}
}
