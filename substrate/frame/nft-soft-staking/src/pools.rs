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

//! Pool lifecycle and bookkeeping.

use super::*;
use frame_support::{
	ensure,
	traits::{
		fungible::Inspect as _,
		fungibles::{Inspect as _, Mutate as _},
		nonfungibles::Inspect as _,
		tokens::Preservation,
	},
};
use sp_runtime::{
	traits::{AccountIdConversion, CheckedAdd},
	DispatchError, DispatchResult,
};

impl<T: Config> Pallet<T> {
	/// The account holding the funds of `pool_id`.
	pub fn pool_account(pool_id: PoolId) -> T::AccountId {
		T::PalletId::get().into_sub_account_truncating(pool_id)
	}

	/// Ensure `who` holds at least `requirement` of the credential.
	pub(crate) fn ensure_credential(
		who: &T::AccountId,
		requirement: BalanceOf<T>,
	) -> DispatchResult {
		ensure!(T::Credential::balance(who) >= requirement, Error::<T>::InsufficientCredential);
		Ok(())
	}

	fn ensure_pool_parameters(daily_reward_rate: BalanceOf<T>, lock_duration: u64) -> DispatchResult {
		ensure!(!daily_reward_rate.is_zero(), Error::<T>::InvalidParameter);
		ensure!(lock_duration <= T::MaxLockDuration::get(), Error::<T>::InvalidParameter);
		Ok(())
	}

	/// Fetch a pool and ensure `who` manages it.
	pub(crate) fn owned_pool(
		who: &T::AccountId,
		pool_id: PoolId,
	) -> Result<PoolInfoFor<T>, DispatchError> {
		let pool = Pools::<T>::get(pool_id).ok_or(Error::<T>::PoolNotFound)?;
		ensure!(pool.owner == *who, Error::<T>::Unauthorized);
		Ok(pool)
	}

	/// Part of the pool balance that can be paid out.
	///
	/// The last `minimum_balance` of the reward asset stays in the pool account, which is therefore
	/// never reaped.
	pub fn payable_balance(pool: &PoolInfoFor<T>) -> BalanceOf<T> {
		pool.balance.saturating_sub(T::Assets::minimum_balance(pool.reward_asset.clone()))
	}

	/// Transfer `amount` of the pool's reward asset from the pool account to `dest`.
	///
	/// The pool account is never reaped.
	pub(crate) fn pay_from_pool(
		pool_id: PoolId,
		pool: &PoolInfoFor<T>,
		dest: &T::AccountId,
		amount: BalanceOf<T>,
	) -> DispatchResult {
		T::Assets::transfer(
			pool.reward_asset.clone(),
			&Self::pool_account(pool_id),
			dest,
			amount,
			Preservation::Preserve,
		)
		.map_err(|e| {
			log::debug!(
				target: LOG_TARGET,
				"payout of {amount:?} from pool {pool_id} to {dest:?} refused: {e:?}",
			);
			Error::<T>::TransferFailed
		})?;
		Ok(())
	}

	pub(crate) fn do_create_pool(
		who: T::AccountId,
		collection: T::CollectionId,
		reward_asset: T::AssetId,
		daily_reward_rate: BalanceOf<T>,
		lock_duration: u64,
	) -> Result<PoolId, DispatchError> {
		ensure!(!Paused::<T>::get(), Error::<T>::Paused);
		Self::ensure_credential(&who, PoolCreationRequirement::<T>::get())?;
		Self::ensure_pool_parameters(daily_reward_rate, lock_duration)?;
		ensure!(T::Nfts::collection_owner(&collection).is_some(), Error::<T>::InvalidCollection);
		ensure!(T::Assets::asset_exists(reward_asset.clone()), Error::<T>::InvalidRewardAsset);

		let pool_id = LastPoolId::<T>::get().checked_add(1).ok_or(Error::<T>::Overflow)?;
		OwnerPools::<T>::try_append(&who, pool_id).map_err(|_| Error::<T>::TooManyPools)?;
		CollectionPools::<T>::try_append(collection, pool_id)
			.map_err(|_| Error::<T>::TooManyPools)?;
		LastPoolId::<T>::put(pool_id);

		let now = Self::now();
		Pools::<T>::insert(
			pool_id,
			PoolInfo {
				collection,
				reward_asset: reward_asset.clone(),
				owner: who.clone(),
				daily_reward_rate,
				lock_duration,
				balance: Zero::zero(),
				total_claimed: Zero::zero(),
				total_funded: Zero::zero(),
				total_withdrawn: Zero::zero(),
				state: PoolState::Active,
				staking_paused: false,
				created_at: now,
				updated_at: now,
			},
		);

		log::debug!(target: LOG_TARGET, "pool {pool_id} created by {who:?} for {collection:?}");
		Self::deposit_event(Event::PoolCreated {
			pool_id,
			owner: who,
			collection,
			reward_asset,
			daily_reward_rate,
			lock_duration,
		});
		Ok(pool_id)
	}

	pub(crate) fn do_fund_pool(
		who: &T::AccountId,
		pool_id: PoolId,
		amount: BalanceOf<T>,
	) -> DispatchResult {
		let mut pool = Self::owned_pool(who, pool_id)?;
		ensure!(!amount.is_zero(), Error::<T>::InvalidAmount);

		pool.balance = pool.balance.checked_add(&amount).ok_or(Error::<T>::Overflow)?;
		pool.total_funded = pool.total_funded.checked_add(&amount).ok_or(Error::<T>::Overflow)?;

		T::Assets::transfer(
			pool.reward_asset.clone(),
			who,
			&Self::pool_account(pool_id),
			amount,
			Preservation::Preserve,
		)
		.map_err(|e| {
			log::debug!(target: LOG_TARGET, "funding pool {pool_id} by {who:?} refused: {e:?}");
			Error::<T>::TransferFailed
		})?;

		let balance = pool.balance;
		Pools::<T>::insert(pool_id, pool);
		Self::deposit_event(Event::PoolFunded { pool_id, who: who.clone(), amount, balance });
		Ok(())
	}

	pub(crate) fn do_update_pool_config(
		who: &T::AccountId,
		pool_id: PoolId,
		daily_reward_rate: BalanceOf<T>,
		lock_duration: u64,
		staking_paused: bool,
	) -> DispatchResult {
		let mut pool = Self::owned_pool(who, pool_id)?;
		ensure!(pool.state == PoolState::Active, Error::<T>::PoolInactive);
		Self::ensure_pool_parameters(daily_reward_rate, lock_duration)?;

		pool.daily_reward_rate = daily_reward_rate;
		pool.lock_duration = lock_duration;
		pool.staking_paused = staking_paused;
		pool.updated_at = Self::now();
		Pools::<T>::insert(pool_id, pool);

		Self::deposit_event(Event::PoolConfigUpdated {
			pool_id,
			daily_reward_rate,
			lock_duration,
			staking_paused,
		});
		Ok(())
	}

	pub(crate) fn do_transfer_pool_ownership(
		who: &T::AccountId,
		pool_id: PoolId,
		new_owner: T::AccountId,
	) -> DispatchResult {
		let mut pool = Self::owned_pool(who, pool_id)?;
		ensure!(new_owner != *who, Error::<T>::InvalidParameter);
		Self::ensure_credential(&new_owner, PoolCreationRequirement::<T>::get())?;

		OwnerPools::<T>::mutate_exists(who, |maybe_pools| {
			if let Some(pools) = maybe_pools {
				pools.retain(|id| *id != pool_id);
				if pools.is_empty() {
					*maybe_pools = None;
				}
			}
		});
		OwnerPools::<T>::try_append(&new_owner, pool_id).map_err(|_| Error::<T>::TooManyPools)?;

		pool.owner = new_owner.clone();
		pool.updated_at = Self::now();
		Pools::<T>::insert(pool_id, pool);

		log::debug!(target: LOG_TARGET, "pool {pool_id} handed from {who:?} to {new_owner:?}");
		Self::deposit_event(Event::PoolOwnershipTransferred {
			pool_id,
			previous_owner: who.clone(),
			new_owner,
		});
		Ok(())
	}

	pub(crate) fn do_deactivate_pool(who: &T::AccountId, pool_id: PoolId) -> DispatchResult {
		let mut pool = Self::owned_pool(who, pool_id)?;
		ensure!(pool.state == PoolState::Active, Error::<T>::PoolInactive);

		pool.state = PoolState::Deactivated;
		pool.updated_at = Self::now();
		Pools::<T>::insert(pool_id, pool);

		Self::deposit_event(Event::PoolDeactivated { pool_id });
		Ok(())
	}

	pub(crate) fn do_emergency_withdraw(
		pool_id: PoolId,
		amount: BalanceOf<T>,
		recipient: T::AccountId,
	) -> DispatchResult {
		ensure!(!amount.is_zero(), Error::<T>::InvalidAmount);
		let mut pool = Pools::<T>::get(pool_id).ok_or(Error::<T>::PoolNotFound)?;
		let amount = amount.min(Self::payable_balance(&pool));
		ensure!(!amount.is_zero(), Error::<T>::InsufficientPoolBalance);

		pool.balance = pool.balance.saturating_sub(amount);
		pool.total_withdrawn = pool.total_withdrawn.saturating_add(amount);
		Self::pay_from_pool(pool_id, &pool, &recipient, amount)?;
		Pools::<T>::insert(pool_id, pool);

		log::warn!(
			target: LOG_TARGET,
			"emergency withdrawal of {amount:?} from pool {pool_id} to {recipient:?}",
		);
		Self::deposit_event(Event::EmergencyWithdrawal { pool_id, recipient, amount });
		Ok(())
	}

	pub(crate) fn do_set_special_rate(
		who: &T::AccountId,
		pool_id: PoolId,
		token_id: T::TokenId,
		rate: Option<BalanceOf<T>>,
	) -> DispatchResult {
		Self::owned_pool(who, pool_id)?;
		SpecialRates::<T>::set(pool_id, token_id, rate);
		Self::deposit_event(Event::SpecialRateSet { pool_id, token_id, rate });
		Ok(())
	}
}
