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

use crate::{mock::*, *};
use frame_support::{assert_noop, assert_ok};
use sp_runtime::traits::BadOrigin;

mod batch;

/// Stake records currently in `pool_id`, sorted by token.
fn stakes_in(pool_id: PoolId) -> Vec<(u32, StakeRecordFor<Test>)> {
	let mut stakes: Vec<_> = Stakes::<Test>::iter_prefix(pool_id).collect();
	stakes.sort_by_key(|(token, _)| *token);
	stakes
}

#[test]
fn genesis_seeds_requirements() {
	ExtBuilder::default().build_and_execute(|| {
		assert_eq!(StakingRequirement::<Test>::get(), STAKING_REQUIREMENT);
		assert_eq!(PoolCreationRequirement::<Test>::get(), POOL_CREATION_REQUIREMENT);
		assert!(!Paused::<Test>::get());
		assert_eq!(LastPoolId::<Test>::get(), 0);
	});
}

#[test]
fn integrity_test_passes() {
	use frame_support::traits::Hooks;
	new_test_ext().execute_with(|| {
		<NftSoftStaking as Hooks<u64>>::integrity_test();
	});
}

#[test]
fn balance_is_conserved_across_mixed_operations() {
	ExtBuilder::default().build_and_execute(|| {
		let (pool_id, _) = setup_pool_with_stake();
		stake(ALICE, pool_id, 2);
		stake(CHARLIE, pool_id, 3);

		advance_time(DAY);
		assert_ok!(NftSoftStaking::claim(RuntimeOrigin::signed(ALICE), pool_id, 1));
		assert_ok!(NftSoftStaking::restake(RuntimeOrigin::signed(CHARLIE), pool_id, 3));

		advance_time(DAY / 2);
		assert_ok!(NftSoftStaking::deregister(RuntimeOrigin::signed(ALICE), pool_id, 2));
		assert_ok!(NftSoftStaking::emergency_withdraw(
			RuntimeOrigin::root(),
			pool_id,
			1_000,
			CHARLIE
		));
		fund_pool(pool_id, 500);
		assert_ok!(NftSoftStaking::deregister_without_rewards(
			RuntimeOrigin::signed(CHARLIE),
			pool_id,
			3
		));

		let pool = pool(pool_id);
		// 100 + 100 on the first day, 150 for token 2 over a day and a half
		assert_eq!(pool.total_claimed, 350);
		assert_eq!(pool.total_funded, 10_500);
		assert_eq!(pool.total_withdrawn, 1_000);
		assert_eq!(pool.balance, 9_150);
		assert_eq!(pool.balance + pool.total_claimed, pool.total_funded - pool.total_withdrawn);
		assert_eq!(reward_balance(NftSoftStaking::pool_account(pool_id)), pool.balance);
	});
}

#[test]
fn membership_index_survives_interleaved_exits() {
	ExtBuilder::default().build_and_execute(|| {
		let pool_id = create_pool(BOB, 10);
		fund_pool(pool_id, 10_000);
		for token in 1..=6 {
			stake(ALICE, pool_id, token);
		}

		for token in [2, 6, 1] {
			assert_ok!(NftSoftStaking::deregister(RuntimeOrigin::signed(ALICE), pool_id, token));
		}
		stake(ALICE, pool_id, 7);

		let mut tokens = NftSoftStaking::staked_tokens(&ALICE, pool_id);
		for (i, token) in tokens.iter().enumerate() {
			assert_eq!(StakedTokenIndex::<Test>::get((ALICE, pool_id, *token)), i as u32 + 1);
		}
		for token in [1, 2, 6] {
			assert_eq!(StakedTokenIndex::<Test>::get((ALICE, pool_id, token)), 0);
		}
		tokens.sort();
		assert_eq!(tokens, vec![3, 4, 5, 7]);
		assert_eq!(
			stakes_in(pool_id).into_iter().map(|(token, _)| token).collect::<Vec<_>>(),
			vec![3, 4, 5, 7]
		);
	});
}

#[test]
fn payouts_keep_the_pool_account_alive() {
	use frame_support::traits::fungibles::Inspect;

	ExtBuilder::default().build_and_execute(|| {
		let held = |pool_id| {
			<Assets as Inspect<AccountId>>::balance(
				DUSTY_REWARD_ASSET,
				&NftSoftStaking::pool_account(pool_id),
			)
		};
		assert_ok!(NftSoftStaking::create_pool(
			RuntimeOrigin::signed(BOB),
			COLLECTION,
			DUSTY_REWARD_ASSET,
			100,
			0
		));
		let pool_id = LastPoolId::<Test>::get();
		fund_pool(pool_id, 105);
		stake(ALICE, pool_id, 1);
		advance_time(DAY);

		// paying 100 would leave 5, below the minimum balance
		assert_eq!(NftSoftStaking::payable_balance(&pool(pool_id)), 105 - DUST_LIMIT);
		assert_noop!(
			NftSoftStaking::claim(RuntimeOrigin::signed(ALICE), pool_id, 1),
			Error::<Test>::InsufficientPoolBalance
		);
		assert_noop!(
			NftSoftStaking::batch_claim(RuntimeOrigin::signed(ALICE), pool_id, vec![1]),
			Error::<Test>::InsufficientPoolBalance
		);

		fund_pool(pool_id, 5);
		assert_ok!(NftSoftStaking::claim(RuntimeOrigin::signed(ALICE), pool_id, 1));
		assert_eq!(pool(pool_id).balance, DUST_LIMIT);
		assert_eq!(held(pool_id), DUST_LIMIT);

		fund_pool(pool_id, 50);
		assert_ok!(NftSoftStaking::emergency_withdraw(
			RuntimeOrigin::root(),
			pool_id,
			u128::MAX,
			CHARLIE
		));
		assert_eq!(pool(pool_id).total_withdrawn, 50);
		assert_eq!(pool(pool_id).balance, DUST_LIMIT);
		assert_eq!(held(pool_id), DUST_LIMIT);
		assert_noop!(
			NftSoftStaking::emergency_withdraw(RuntimeOrigin::root(), pool_id, 1, CHARLIE),
			Error::<Test>::InsufficientPoolBalance
		);

		// later payouts still go through
		advance_time(DAY);
		fund_pool(pool_id, 100);
		assert_ok!(NftSoftStaking::claim(RuntimeOrigin::signed(ALICE), pool_id, 1));
		assert_eq!(held(pool_id), pool(pool_id).balance);
	});
}
