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

//! Soft staking pallet benchmarking.

use super::*;
use crate::Pallet as NftSoftStaking;
use frame_benchmarking::{v2::*, whitelisted_caller, BenchmarkError};
use frame_support::{
	assert_ok,
	traits::{fungibles::Mutate, EnsureOrigin, Get},
};
use frame_system::RawOrigin;
use sp_runtime::traits::StaticLookup;

fn reward_rate<T: Config>() -> BalanceOf<T> {
	1_000u32.into()
}

/// Create and fund a pool managed by a fresh account.
fn funded_pool<T: Config>() -> (T::AccountId, PoolId) {
	let owner: T::AccountId = account("owner", LastPoolId::<T>::get(), 0);
	T::BenchmarkHelper::endow_credential(&owner, PoolCreationRequirement::<T>::get());

	let asset = T::BenchmarkHelper::reward_asset();
	let endowment: BalanceOf<T> = 1_000_000_000u32.into();
	assert_ok!(T::Assets::mint_into(asset.clone(), &owner, endowment));

	assert_ok!(NftSoftStaking::<T>::create_pool(
		RawOrigin::Signed(owner.clone()).into(),
		T::BenchmarkHelper::collection(),
		asset,
		reward_rate::<T>(),
		0,
	));
	let pool_id = LastPoolId::<T>::get();
	assert_ok!(NftSoftStaking::<T>::fund_pool(
		RawOrigin::Signed(owner.clone()).into(),
		pool_id,
		endowment / 2u32.into(),
	));
	(owner, pool_id)
}

/// A fresh account meeting the staking requirement.
fn staker<T: Config>(name: &'static str) -> T::AccountId {
	let who: T::AccountId = account(name, 0, 0);
	T::BenchmarkHelper::endow_credential(&who, StakingRequirement::<T>::get());
	who
}

/// Give `who` `n` items of the benchmark collection no other pool has seen.
fn hand_out<T: Config>(who: &T::AccountId, pool_id: PoolId, n: u32) -> Vec<T::TokenId> {
	let collection = T::BenchmarkHelper::collection();
	let first = pool_id.saturating_mul(T::MaxBatchSize::get());
	(first..first.saturating_add(n))
		.map(|i| {
			let token = T::BenchmarkHelper::token(i);
			T::BenchmarkHelper::set_holder(&collection, &token, who);
			token
		})
		.collect()
}

/// Register `n` items held by `who` in `pool_id`.
fn staked<T: Config>(who: &T::AccountId, pool_id: PoolId, n: u32) -> Vec<T::TokenId> {
	let tokens = hand_out::<T>(who, pool_id, n);
	for token in &tokens {
		assert_ok!(NftSoftStaking::<T>::register(
			RawOrigin::Signed(who.clone()).into(),
			pool_id,
			*token
		));
	}
	tokens
}

#[benchmarks]
mod benchmarks {
	use super::*;

	#[benchmark]
	fn create_pool() {
		let owner: T::AccountId = whitelisted_caller();
		T::BenchmarkHelper::endow_credential(&owner, PoolCreationRequirement::<T>::get());
		let collection = T::BenchmarkHelper::collection();
		let asset = T::BenchmarkHelper::reward_asset();

		#[extrinsic_call]
		_(RawOrigin::Signed(owner.clone()), collection, asset, reward_rate::<T>(), 0);

		assert_eq!(LastPoolId::<T>::get(), 1);
		assert_eq!(OwnerPools::<T>::get(&owner).len(), 1);
	}

	#[benchmark]
	fn fund_pool() {
		let (owner, pool_id) = funded_pool::<T>();
		let before = Pools::<T>::get(pool_id).map(|p| p.balance).unwrap_or_default();
		let amount: BalanceOf<T> = 1_000u32.into();

		#[extrinsic_call]
		_(RawOrigin::Signed(owner), pool_id, amount);

		assert_eq!(Pools::<T>::get(pool_id).map(|p| p.balance), Some(before + amount));
	}

	#[benchmark]
	fn update_pool_config() {
		let (owner, pool_id) = funded_pool::<T>();

		#[extrinsic_call]
		_(RawOrigin::Signed(owner), pool_id, reward_rate::<T>() + 1u32.into(), 1, true);

		assert_eq!(Pools::<T>::get(pool_id).map(|p| p.staking_paused), Some(true));
	}

	#[benchmark]
	fn transfer_pool_ownership() {
		let (owner, pool_id) = funded_pool::<T>();
		let new_owner: T::AccountId = account("new_owner", 0, 0);
		T::BenchmarkHelper::endow_credential(&new_owner, PoolCreationRequirement::<T>::get());
		let new_owner_lookup = T::Lookup::unlookup(new_owner.clone());

		#[extrinsic_call]
		_(RawOrigin::Signed(owner), pool_id, new_owner_lookup);

		assert_eq!(Pools::<T>::get(pool_id).map(|p| p.owner), Some(new_owner));
	}

	#[benchmark]
	fn deactivate_pool() {
		let (owner, pool_id) = funded_pool::<T>();

		#[extrinsic_call]
		_(RawOrigin::Signed(owner), pool_id);

		assert_eq!(Pools::<T>::get(pool_id).map(|p| p.state), Some(PoolState::Deactivated));
	}

	#[benchmark]
	fn emergency_withdraw() -> Result<(), BenchmarkError> {
		let origin =
			T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
		let (owner, pool_id) = funded_pool::<T>();
		let amount: BalanceOf<T> = 1_000u32.into();
		let recipient = T::Lookup::unlookup(owner);

		#[extrinsic_call]
		_(origin as T::RuntimeOrigin, pool_id, amount, recipient);

		assert_eq!(Pools::<T>::get(pool_id).map(|p| p.total_withdrawn), Some(amount));
		Ok(())
	}

	#[benchmark]
	fn set_special_rate() {
		let (owner, pool_id) = funded_pool::<T>();
		let token = T::BenchmarkHelper::token(0);
		let rate = reward_rate::<T>() * 2u32.into();

		#[extrinsic_call]
		_(RawOrigin::Signed(owner), pool_id, token, Some(rate));

		assert_eq!(SpecialRates::<T>::get(pool_id, token), Some(rate));
	}

	#[benchmark]
	fn register() {
		let (_, pool_id) = funded_pool::<T>();
		let who = staker::<T>("staker");
		let token = hand_out::<T>(&who, pool_id, 1)[0];

		#[extrinsic_call]
		_(RawOrigin::Signed(who), pool_id, token);

		assert!(Stakes::<T>::contains_key(pool_id, token));
	}

	#[benchmark]
	fn claim() {
		let (_, pool_id) = funded_pool::<T>();
		let who = staker::<T>("staker");
		let token = staked::<T>(&who, pool_id, 1)[0];
		T::BenchmarkHelper::advance_time(SECONDS_PER_DAY);

		#[extrinsic_call]
		_(RawOrigin::Signed(who), pool_id, token);

		assert_eq!(Pools::<T>::get(pool_id).map(|p| p.total_claimed), Some(reward_rate::<T>()));
	}

	#[benchmark]
	fn restake() {
		let (_, pool_id) = funded_pool::<T>();
		let who = staker::<T>("staker");
		let token = staked::<T>(&who, pool_id, 1)[0];
		T::BenchmarkHelper::advance_time(SECONDS_PER_DAY);

		#[extrinsic_call]
		_(RawOrigin::Signed(who), pool_id, token);

		assert_eq!(Stakes::<T>::get(pool_id, token).map(|r| r.total_paid), Some(reward_rate::<T>()));
	}

	#[benchmark]
	fn deregister() {
		let (_, pool_id) = funded_pool::<T>();
		let who = staker::<T>("staker");
		let token = staked::<T>(&who, pool_id, 1)[0];
		T::BenchmarkHelper::advance_time(SECONDS_PER_DAY);

		#[extrinsic_call]
		_(RawOrigin::Signed(who), pool_id, token);

		assert!(!Stakes::<T>::contains_key(pool_id, token));
	}

	#[benchmark]
	fn deregister_without_rewards() {
		let (_, pool_id) = funded_pool::<T>();
		let who = staker::<T>("staker");
		let token = staked::<T>(&who, pool_id, 1)[0];
		T::BenchmarkHelper::advance_time(SECONDS_PER_DAY);

		#[extrinsic_call]
		_(RawOrigin::Signed(who), pool_id, token);

		assert!(!Stakes::<T>::contains_key(pool_id, token));
	}

	#[benchmark]
	fn force_deregister() {
		let (_, pool_id) = funded_pool::<T>();
		let who = staker::<T>("staker");
		let token = staked::<T>(&who, pool_id, 1)[0];
		let holder = staker::<T>("holder");
		T::BenchmarkHelper::set_holder(&T::BenchmarkHelper::collection(), &token, &holder);

		#[extrinsic_call]
		_(RawOrigin::Signed(holder), pool_id, token);

		assert!(!Stakes::<T>::contains_key(pool_id, token));
	}

	#[benchmark]
	fn flag_ownership_change() {
		let (_, pool_id) = funded_pool::<T>();
		let who = staker::<T>("staker");
		let token = staked::<T>(&who, pool_id, 1)[0];
		let holder: T::AccountId = account("holder", 0, 0);
		T::BenchmarkHelper::set_holder(&T::BenchmarkHelper::collection(), &token, &holder);
		let caller: T::AccountId = whitelisted_caller();

		#[extrinsic_call]
		_(RawOrigin::Signed(caller), pool_id, token);

		assert_eq!(Stakes::<T>::get(pool_id, token).map(|r| r.ownership_changed), Some(true));
	}

	#[benchmark]
	fn batch_register(n: Linear<1, { T::MaxBatchSize::get() }>) {
		let (_, pool_id) = funded_pool::<T>();
		let who = staker::<T>("staker");
		let tokens = hand_out::<T>(&who, pool_id, n);

		#[extrinsic_call]
		_(RawOrigin::Signed(who.clone()), pool_id, tokens);

		assert_eq!(StakedTokens::<T>::get(&who, pool_id).len() as u32, n);
	}

	#[benchmark]
	fn batch_claim(n: Linear<1, { T::MaxBatchSize::get() }>) {
		let (_, pool_id) = funded_pool::<T>();
		let who = staker::<T>("staker");
		let tokens = staked::<T>(&who, pool_id, n);
		T::BenchmarkHelper::advance_time(SECONDS_PER_DAY);

		#[extrinsic_call]
		_(RawOrigin::Signed(who), pool_id, tokens);

		assert_eq!(
			Pools::<T>::get(pool_id).map(|p| p.total_claimed),
			Some(reward_rate::<T>() * n.into())
		);
	}

	#[benchmark]
	fn batch_deregister(n: Linear<1, { T::MaxBatchSize::get() }>) {
		let (_, pool_id) = funded_pool::<T>();
		let who = staker::<T>("staker");
		let tokens = staked::<T>(&who, pool_id, n);
		T::BenchmarkHelper::advance_time(SECONDS_PER_DAY);

		#[extrinsic_call]
		_(RawOrigin::Signed(who.clone()), pool_id, tokens);

		assert!(StakedTokens::<T>::get(&who, pool_id).is_empty());
	}

	#[benchmark]
	fn batch_deregister_without_rewards(n: Linear<1, { T::MaxBatchSize::get() }>) {
		let (_, pool_id) = funded_pool::<T>();
		let who = staker::<T>("staker");
		let tokens = staked::<T>(&who, pool_id, n);
		T::BenchmarkHelper::advance_time(SECONDS_PER_DAY);

		#[extrinsic_call]
		_(RawOrigin::Signed(who.clone()), pool_id, tokens);

		assert!(StakedTokens::<T>::get(&who, pool_id).is_empty());
	}

	#[benchmark]
	fn set_paused() -> Result<(), BenchmarkError> {
		let origin =
			T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;

		#[extrinsic_call]
		_(origin as T::RuntimeOrigin, true);

		assert!(Paused::<T>::get());
		Ok(())
	}

	#[benchmark]
	fn set_requirements() -> Result<(), BenchmarkError> {
		let origin =
			T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
		let staking: BalanceOf<T> = 2u32.into();
		let pool_creation: BalanceOf<T> = 3u32.into();

		#[extrinsic_call]
		_(origin as T::RuntimeOrigin, staking, pool_creation);

		assert_eq!(StakingRequirement::<T>::get(), staking);
		Ok(())
	}

	impl_benchmark_test_suite!(NftSoftStaking, crate::mock::new_test_ext(), crate::mock::Test);
}
