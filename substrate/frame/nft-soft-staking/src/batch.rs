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

//! All-or-nothing batches over the single-item operations.

use super::*;
use alloc::collections::BTreeSet;
use frame_support::ensure;
use sp_runtime::{traits::CheckedAdd, DispatchResult};

impl<T: Config> Pallet<T> {
	/// Ensure a batch holds between one and `MaxBatchSize` distinct items.
	pub(crate) fn ensure_batch(token_ids: &[T::TokenId]) -> DispatchResult {
		ensure!(
			!token_ids.is_empty() && token_ids.len() <= T::MaxBatchSize::get() as usize,
			Error::<T>::BatchSizeViolation
		);
		let mut seen = BTreeSet::new();
		for token_id in token_ids {
			if !seen.insert(token_id) {
				log::debug!(target: LOG_TARGET, "token {token_id:?} repeated in batch");
				return Err(Error::<T>::DuplicateToken.into())
			}
		}
		Ok(())
	}

	pub(crate) fn do_batch_register(
		who: &T::AccountId,
		pool_id: PoolId,
		token_ids: &[T::TokenId],
	) -> DispatchResult {
		Self::ensure_batch(token_ids)?;
		token_ids.iter().try_for_each(|token_id| Self::do_register(who, pool_id, *token_id))
	}

	pub(crate) fn do_batch_deregister(
		who: &T::AccountId,
		pool_id: PoolId,
		token_ids: &[T::TokenId],
		kind: ExitKind,
	) -> DispatchResult {
		Self::ensure_batch(token_ids)?;
		token_ids.iter().try_for_each(|token_id| match kind {
			ExitKind::WithoutRewards => Self::do_deregister_without_rewards(who, pool_id, *token_id),
			_ => Self::do_deregister(who, pool_id, *token_id),
		})
	}

	/// Validate every item and sum its reward, check the pool once, then settle every item and
	/// pay the total in one transfer.
	pub(crate) fn do_batch_claim(
		who: &T::AccountId,
		pool_id: PoolId,
		token_ids: &[T::TokenId],
	) -> DispatchResult {
		Self::ensure_batch(token_ids)?;
		let mut pool = Pools::<T>::get(pool_id).ok_or(Error::<T>::PoolNotFound)?;
		let now = Self::now();

		let mut settlements = Vec::with_capacity(token_ids.len());
		let mut total: BalanceOf<T> = Zero::zero();
		for token_id in token_ids {
			let record = Self::settleable_stake(who, pool_id, &pool, *token_id)?;
			let reward = Self::accrued(&pool, pool_id, *token_id, &record, now);
			total = total.checked_add(&reward).ok_or(Error::<T>::Overflow)?;
			settlements.push((*token_id, record, reward));
		}

		ensure!(!total.is_zero(), Error::<T>::NoReward);
		let payable = Self::payable_balance(&pool);
		if payable < total {
			log::debug!(
				target: LOG_TARGET,
				"batch claim of {total:?} exceeds payable {payable:?} of pool {pool_id}",
			);
			return Err(Error::<T>::InsufficientPoolBalance.into())
		}

		for (token_id, record, reward) in settlements {
			Self::settle(pool_id, &mut pool, token_id, record, reward, now);
			if !reward.is_zero() {
				Self::deposit_event(Event::RewardClaimed {
					pool_id,
					who: who.clone(),
					token_id,
					amount: reward,
					at: now,
				});
			}
		}
		Self::pay_from_pool(pool_id, &pool, who, total)?;
		Pools::<T>::insert(pool_id, pool);

		Self::deposit_event(Event::BatchRewardsClaimed {
			pool_id,
			who: who.clone(),
			count: token_ids.len() as u32,
			amount: total,
			at: now,
		});
		Ok(())
	}
}
