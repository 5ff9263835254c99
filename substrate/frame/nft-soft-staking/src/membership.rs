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

//! Per-account index of registered items with O(1) insertion and removal.
//!
//! [`StakedTokens`] holds the items of an account in a pool; [`StakedTokenIndex`] maps each item
//! to its 1-based position there. Removal swaps the last item into the freed slot.

use super::*;
use frame_support::{defensive, ensure};
use sp_runtime::DispatchResult;

impl<T: Config> Pallet<T> {
	pub(crate) fn add_member(who: &T::AccountId, pool_id: PoolId, token_id: T::TokenId) -> DispatchResult {
		StakedTokens::<T>::try_mutate(who, pool_id, |tokens| -> DispatchResult {
			tokens.try_push(token_id).map_err(|_| Error::<T>::TooManyStakes)?;
			StakedTokenIndex::<T>::insert((who.clone(), pool_id, token_id), tokens.len() as u32);
			Ok(())
		})
	}

	pub(crate) fn remove_member(
		who: &T::AccountId,
		pool_id: PoolId,
		token_id: T::TokenId,
	) -> DispatchResult {
		let position = StakedTokenIndex::<T>::take((who.clone(), pool_id, token_id));
		if position == 0 {
			defensive!("registered item missing from the membership index");
			return Err(Error::<T>::StakeNotFound.into())
		}

		let mut tokens = StakedTokens::<T>::get(who, pool_id);
		let slot = position as usize - 1;
		ensure!(tokens.get(slot) == Some(&token_id), Error::<T>::StakeNotFound);

		tokens.swap_remove(slot);
		if let Some(moved) = tokens.get(slot) {
			StakedTokenIndex::<T>::insert((who.clone(), pool_id, *moved), position);
		}

		if tokens.is_empty() {
			StakedTokens::<T>::remove(who, pool_id);
		} else {
			StakedTokens::<T>::insert(who, pool_id, tokens);
		}
		Ok(())
	}
}
