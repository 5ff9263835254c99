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

//! Per-item registrations and every way in and out of them.

use super::*;
use frame_support::{ensure, traits::nonfungibles::Inspect as _};
use sp_runtime::{DispatchError, DispatchResult};

impl<T: Config> Pallet<T> {
	/// Current holder of `token_id` in the pool's collection, as reported by [`Config::Nfts`].
	pub(crate) fn holder_of(pool: &PoolInfoFor<T>, token_id: &T::TokenId) -> Option<T::AccountId> {
		T::Nfts::owner(&pool.collection, token_id)
	}

	/// Whether the recorded owner of `record` still holds the item and no change was flagged.
	pub(crate) fn owner_still_holds(
		pool: &PoolInfoFor<T>,
		token_id: &T::TokenId,
		record: &StakeRecordFor<T>,
	) -> bool {
		!record.ownership_changed && Self::holder_of(pool, token_id).as_ref() == Some(&record.owner)
	}

	/// Fetch a registration its recorded owner is about to settle.
	///
	/// Fails unless `who` is the recorded owner and still holds the item.
	pub(crate) fn settleable_stake(
		who: &T::AccountId,
		pool_id: PoolId,
		pool: &PoolInfoFor<T>,
		token_id: T::TokenId,
	) -> Result<StakeRecordFor<T>, DispatchError> {
		let record = Stakes::<T>::get(pool_id, token_id).ok_or(Error::<T>::StakeNotFound)?;
		ensure!(record.owner == *who, Error::<T>::Unauthorized);
		if !Self::owner_still_holds(pool, &token_id, &record) {
			log::debug!(
				target: LOG_TARGET,
				"token {token_id:?} in pool {pool_id} left its recorded owner {who:?}",
			);
			return Err(Error::<T>::OwnershipChanged.into())
		}
		Ok(record)
	}

	/// Restart the accrual clock of a registration and book `reward` against its pool.
	///
	/// Storage is written; the transfer is left to the caller.
	pub(crate) fn settle(
		pool_id: PoolId,
		pool: &mut PoolInfoFor<T>,
		token_id: T::TokenId,
		mut record: StakeRecordFor<T>,
		reward: BalanceOf<T>,
		now: u64,
	) {
		record.last_claimed_at = now;
		record.total_paid = record.total_paid.saturating_add(reward);
		Stakes::<T>::insert(pool_id, token_id, record);
		pool.record_payout(reward);
	}

	/// Remove every trace of a registration.
	fn remove_stake(
		pool_id: PoolId,
		pool: &PoolInfoFor<T>,
		token_id: T::TokenId,
		record: &StakeRecordFor<T>,
	) -> DispatchResult {
		Self::release_registration(pool.collection, token_id);
		Self::remove_member(&record.owner, pool_id, token_id)?;
		Stakes::<T>::remove(pool_id, token_id);
		Ok(())
	}

	pub(crate) fn do_register(
		who: &T::AccountId,
		pool_id: PoolId,
		token_id: T::TokenId,
	) -> DispatchResult {
		ensure!(!Paused::<T>::get(), Error::<T>::Paused);
		let pool = Pools::<T>::get(pool_id).ok_or(Error::<T>::PoolNotFound)?;
		ensure!(pool.state == PoolState::Active, Error::<T>::PoolInactive);
		ensure!(pool.accepts_registrations(), Error::<T>::StakingPaused);
		ensure!(
			Self::holder_of(&pool, &token_id).as_ref() == Some(who),
			Error::<T>::NotTokenHolder
		);
		Self::ensure_credential(who, StakingRequirement::<T>::get())?;
		ensure!(!pool.balance.is_zero(), Error::<T>::InsufficientPoolBalance);
		ensure!(!Stakes::<T>::contains_key(pool_id, token_id), Error::<T>::AlreadyExists);

		Self::claim_registration(pool.collection, token_id, pool_id)?;
		Self::add_member(who, pool_id, token_id)?;

		let now = Self::now();
		Stakes::<T>::insert(pool_id, token_id, StakeRecord::new(who.clone(), now));

		log::debug!(target: LOG_TARGET, "token {token_id:?} registered in pool {pool_id} by {who:?}");
		Self::deposit_event(Event::Registered { pool_id, who: who.clone(), token_id, at: now });
		Ok(())
	}

	pub(crate) fn do_claim(
		who: &T::AccountId,
		pool_id: PoolId,
		token_id: T::TokenId,
	) -> DispatchResult {
		let mut pool = Pools::<T>::get(pool_id).ok_or(Error::<T>::PoolNotFound)?;
		let record = Self::settleable_stake(who, pool_id, &pool, token_id)?;

		let now = Self::now();
		let reward = Self::accrued(&pool, pool_id, token_id, &record, now);
		ensure!(!reward.is_zero(), Error::<T>::NoReward);
		ensure!(Self::payable_balance(&pool) >= reward, Error::<T>::InsufficientPoolBalance);

		Self::settle(pool_id, &mut pool, token_id, record, reward, now);
		Self::pay_from_pool(pool_id, &pool, who, reward)?;
		Pools::<T>::insert(pool_id, pool);

		Self::deposit_event(Event::RewardClaimed {
			pool_id,
			who: who.clone(),
			token_id,
			amount: reward,
			at: now,
		});
		Ok(())
	}

	pub(crate) fn do_restake(
		who: &T::AccountId,
		pool_id: PoolId,
		token_id: T::TokenId,
	) -> DispatchResult {
		let mut pool = Pools::<T>::get(pool_id).ok_or(Error::<T>::PoolNotFound)?;
		let record = Self::settleable_stake(who, pool_id, &pool, token_id)?;

		let now = Self::now();
		let reward = Self::accrued(&pool, pool_id, token_id, &record, now);
		ensure!(Self::payable_balance(&pool) >= reward, Error::<T>::InsufficientPoolBalance);

		Self::settle(pool_id, &mut pool, token_id, record, reward, now);
		if !reward.is_zero() {
			Self::pay_from_pool(pool_id, &pool, who, reward)?;
			Pools::<T>::insert(pool_id, pool);
		}

		Self::deposit_event(Event::Restaked { pool_id, who: who.clone(), token_id, reward, at: now });
		Ok(())
	}

	/// Exit paying whatever accrued, if the caller is the recorded owner and still holds the
	/// item. A holder other than the recorded owner leaves with no payout.
	pub(crate) fn do_deregister(
		who: &T::AccountId,
		pool_id: PoolId,
		token_id: T::TokenId,
	) -> DispatchResult {
		let mut pool = Pools::<T>::get(pool_id).ok_or(Error::<T>::PoolNotFound)?;
		let record = Stakes::<T>::get(pool_id, token_id).ok_or(Error::<T>::StakeNotFound)?;
		let holder = Self::holder_of(&pool, &token_id);
		ensure!(
			record.owner == *who || holder.as_ref() == Some(who),
			Error::<T>::Unauthorized
		);

		let now = Self::now();
		let mut reward = Zero::zero();
		if record.owner == *who {
			if !record.ownership_changed && holder.as_ref() == Some(who) {
				reward = Self::accrued(&pool, pool_id, token_id, &record, now);
			} else if !record.ownership_changed {
				Self::deposit_event(Event::OwnershipChangeDetected {
					pool_id,
					token_id,
					owner: record.owner.clone(),
					holder,
					at: now,
				});
			}
		}

		if !reward.is_zero() {
			ensure!(Self::payable_balance(&pool) >= reward, Error::<T>::InsufficientPoolBalance);
			pool.record_payout(reward);
			Self::pay_from_pool(pool_id, &pool, who, reward)?;
			Pools::<T>::insert(pool_id, &pool);
		}
		Self::remove_stake(pool_id, &pool, token_id, &record)?;

		log::debug!(target: LOG_TARGET, "token {token_id:?} left pool {pool_id} paying {reward:?}");
		Self::deposit_event(Event::Deregistered {
			pool_id,
			who: who.clone(),
			owner: record.owner,
			token_id,
			reward,
			kind: ExitKind::WithRewards,
			at: now,
		});
		Ok(())
	}

	/// Exit without a payout, reporting what is given up.
	pub(crate) fn do_deregister_without_rewards(
		who: &T::AccountId,
		pool_id: PoolId,
		token_id: T::TokenId,
	) -> DispatchResult {
		let pool = Pools::<T>::get(pool_id).ok_or(Error::<T>::PoolNotFound)?;
		let record = Stakes::<T>::get(pool_id, token_id).ok_or(Error::<T>::StakeNotFound)?;
		ensure!(
			record.owner == *who || Self::holder_of(&pool, &token_id).as_ref() == Some(who),
			Error::<T>::Unauthorized
		);

		let now = Self::now();
		let forfeited = Self::accrued(&pool, pool_id, token_id, &record, now);
		Self::remove_stake(pool_id, &pool, token_id, &record)?;

		log::debug!(
			target: LOG_TARGET,
			"token {token_id:?} left pool {pool_id} forfeiting {forfeited:?}",
		);
		Self::deposit_event(Event::RewardsForfeited {
			pool_id,
			owner: record.owner.clone(),
			token_id,
			amount: forfeited,
			at: now,
		});
		Self::deposit_event(Event::Deregistered {
			pool_id,
			who: who.clone(),
			owner: record.owner,
			token_id,
			reward: Zero::zero(),
			kind: ExitKind::WithoutRewards,
			at: now,
		});
		Ok(())
	}

	pub(crate) fn do_force_deregister(
		who: &T::AccountId,
		pool_id: PoolId,
		token_id: T::TokenId,
	) -> DispatchResult {
		let pool = Pools::<T>::get(pool_id).ok_or(Error::<T>::PoolNotFound)?;
		let record = Stakes::<T>::get(pool_id, token_id).ok_or(Error::<T>::StakeNotFound)?;
		ensure!(
			Self::holder_of(&pool, &token_id).as_ref() == Some(who),
			Error::<T>::NotTokenHolder
		);
		ensure!(record.owner != *who, Error::<T>::Unauthorized);
		Self::ensure_credential(who, StakingRequirement::<T>::get())?;

		Self::remove_stake(pool_id, &pool, token_id, &record)?;

		let now = Self::now();
		log::debug!(
			target: LOG_TARGET,
			"token {token_id:?} released from pool {pool_id} by new holder {who:?}",
		);
		Self::deposit_event(Event::ForcedRelease {
			pool_id,
			token_id,
			previous_owner: record.owner.clone(),
			new_holder: who.clone(),
			at: now,
		});
		Self::deposit_event(Event::Deregistered {
			pool_id,
			who: who.clone(),
			owner: record.owner,
			token_id,
			reward: Zero::zero(),
			kind: ExitKind::Forced,
			at: now,
		});
		Ok(())
	}

	pub(crate) fn do_flag_ownership_change(pool_id: PoolId, token_id: T::TokenId) -> DispatchResult {
		let pool = Pools::<T>::get(pool_id).ok_or(Error::<T>::PoolNotFound)?;
		let mut record = Stakes::<T>::get(pool_id, token_id).ok_or(Error::<T>::StakeNotFound)?;
		let holder = Self::holder_of(&pool, &token_id);
		ensure!(holder.as_ref() != Some(&record.owner), Error::<T>::OwnershipUnchanged);

		if record.ownership_changed {
			return Ok(())
		}
		record.ownership_changed = true;
		let owner = record.owner.clone();
		Stakes::<T>::insert(pool_id, token_id, record);

		Self::deposit_event(Event::OwnershipChangeDetected {
			pool_id,
			token_id,
			owner,
			holder,
			at: Self::now(),
		});
		Ok(())
	}
}
