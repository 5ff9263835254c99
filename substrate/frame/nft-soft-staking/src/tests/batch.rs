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

use super::*;

/// BOB's pool paying 100 a day, funded with `funds`, with ALICE's tokens 1, 2 and 3 registered.
fn pool_with_three_stakes(funds: Balance) -> PoolId {
	let pool_id = create_pool(BOB, 100);
	fund_pool(pool_id, funds);
	for token in 1..=3 {
		mint_nft(token, ALICE);
	}
	assert_ok!(NftSoftStaking::batch_register(RuntimeOrigin::signed(ALICE), pool_id, vec![1, 2, 3]));
	pool_id
}

#[test]
fn batch_bounds_are_enforced() {
	ExtBuilder::default().build_and_execute(|| {
		let pool_id = pool_with_three_stakes(1_000);
		let too_many: Vec<u32> = (1..=<Test as Config>::MaxBatchSize::get() + 1).collect();

		assert_noop!(
			NftSoftStaking::batch_claim(RuntimeOrigin::signed(ALICE), pool_id, vec![]),
			Error::<Test>::BatchSizeViolation
		);
		assert_noop!(
			NftSoftStaking::batch_deregister(RuntimeOrigin::signed(ALICE), pool_id, too_many.clone()),
			Error::<Test>::BatchSizeViolation
		);
		assert_noop!(
			NftSoftStaking::batch_register(RuntimeOrigin::signed(ALICE), pool_id, too_many),
			Error::<Test>::BatchSizeViolation
		);
		assert_noop!(
			NftSoftStaking::batch_deregister_without_rewards(
				RuntimeOrigin::signed(ALICE),
				pool_id,
				vec![]
			),
			Error::<Test>::BatchSizeViolation
		);
		assert_noop!(
			NftSoftStaking::batch_claim(RuntimeOrigin::signed(ALICE), pool_id, vec![1, 2, 1]),
			Error::<Test>::DuplicateToken
		);
	});
}

mod batch_register {
	use super::*;

	#[test]
	fn success() {
		ExtBuilder::default().build_and_execute(|| {
			let pool_id = create_pool(BOB, 100);
			fund_pool(pool_id, 1_000);
			for token in 1..=3 {
				mint_nft(token, ALICE);
			}
			events();

			assert_ok!(NftSoftStaking::batch_register(
				RuntimeOrigin::signed(ALICE),
				pool_id,
				vec![3, 1, 2]
			));

			assert_eq!(
				events(),
				[3, 1, 2]
					.into_iter()
					.map(|token_id| Event::<Test>::Registered {
						pool_id,
						who: ALICE,
						token_id,
						at: START
					})
					.collect::<Vec<_>>()
			);
			assert_eq!(NftSoftStaking::staked_tokens(&ALICE, pool_id), vec![3, 1, 2]);
		});
	}

	#[test]
	fn is_all_or_nothing() {
		ExtBuilder::default().build_and_execute(|| {
			let pool_id = create_pool(BOB, 100);
			fund_pool(pool_id, 1_000);
			mint_nft(1, ALICE);
			mint_nft(2, ALICE);
			mint_nft(3, CHARLIE);

			assert_noop!(
				NftSoftStaking::batch_register(RuntimeOrigin::signed(ALICE), pool_id, vec![1, 2, 3]),
				Error::<Test>::NotTokenHolder
			);
			assert_eq!(NftSoftStaking::registration_of(COLLECTION, 1), (false, 0));
		});
	}
}

mod batch_claim {
	use super::*;

	#[test]
	fn pays_the_total_in_one_transfer() {
		ExtBuilder::default().build_and_execute(|| {
			let pool_id = pool_with_three_stakes(1_000);
			assert_ok!(NftSoftStaking::set_special_rate(
				RuntimeOrigin::signed(BOB),
				pool_id,
				3,
				Some(0)
			));
			advance_time(DAY);
			events();

			assert_ok!(NftSoftStaking::batch_claim(
				RuntimeOrigin::signed(ALICE),
				pool_id,
				vec![1, 2, 3]
			));

			let now = START + DAY;
			assert_eq!(
				events(),
				[
					Event::<Test>::RewardClaimed {
						pool_id,
						who: ALICE,
						token_id: 1,
						amount: 100,
						at: now
					},
					Event::<Test>::RewardClaimed {
						pool_id,
						who: ALICE,
						token_id: 2,
						amount: 100,
						at: now
					},
					Event::<Test>::BatchRewardsClaimed {
						pool_id,
						who: ALICE,
						count: 3,
						amount: 200,
						at: now
					},
				]
			);
			assert_eq!(reward_balance(ALICE), INITIAL_REWARD_BALANCE + 200);
			assert_eq!(pool(pool_id).balance, 800);
			assert_eq!(pool(pool_id).total_claimed, 200);
			for (_, record) in stakes_in(pool_id) {
				assert_eq!(record.last_claimed_at, now);
			}
		});
	}

	#[test]
	fn checks_the_pool_balance_once_for_the_sum() {
		ExtBuilder::default().build_and_execute(|| {
			// each item alone could be paid, two together cannot
			let pool_id = pool_with_three_stakes(150);
			advance_time(DAY);

			assert_noop!(
				NftSoftStaking::batch_claim(RuntimeOrigin::signed(ALICE), pool_id, vec![1, 2, 3]),
				Error::<Test>::InsufficientPoolBalance
			);
			for (_, record) in stakes_in(pool_id) {
				assert_eq!(record.last_claimed_at, START);
				assert_eq!(record.total_paid, 0);
			}

			assert_ok!(NftSoftStaking::claim(RuntimeOrigin::signed(ALICE), pool_id, 2));
		});
	}

	#[test]
	fn any_invalid_item_fails_the_batch() {
		ExtBuilder::default().build_and_execute(|| {
			let pool_id = pool_with_three_stakes(1_000);
			stake(CHARLIE, pool_id, 4);
			advance_time(DAY);

			assert_noop!(
				NftSoftStaking::batch_claim(RuntimeOrigin::signed(ALICE), pool_id, vec![1, 4]),
				Error::<Test>::Unauthorized
			);
			assert_noop!(
				NftSoftStaking::batch_claim(RuntimeOrigin::signed(ALICE), pool_id, vec![1, 5]),
				Error::<Test>::StakeNotFound
			);

			transfer_nft(2, CHARLIE);
			assert_noop!(
				NftSoftStaking::batch_claim(RuntimeOrigin::signed(ALICE), pool_id, vec![1, 2, 3]),
				Error::<Test>::OwnershipChanged
			);
		});
	}

	#[test]
	fn nothing_accrued() {
		ExtBuilder::default().build_and_execute(|| {
			let pool_id = pool_with_three_stakes(1_000);

			assert_noop!(
				NftSoftStaking::batch_claim(RuntimeOrigin::signed(ALICE), pool_id, vec![1, 2]),
				Error::<Test>::NoReward
			);
		});
	}
}

mod batch_deregister {
	use super::*;

	#[test]
	fn pays_and_cleans_up() {
		ExtBuilder::default().build_and_execute(|| {
			let pool_id = pool_with_three_stakes(1_000);
			advance_time(DAY);

			assert_ok!(NftSoftStaking::batch_deregister(
				RuntimeOrigin::signed(ALICE),
				pool_id,
				vec![1, 2, 3]
			));

			assert_eq!(reward_balance(ALICE), INITIAL_REWARD_BALANCE + 300);
			assert!(stakes_in(pool_id).is_empty());
			assert!(NftSoftStaking::staked_tokens(&ALICE, pool_id).is_empty());
			for token in 1..=3 {
				assert_eq!(NftSoftStaking::registration_of(COLLECTION, token), (false, 0));
			}
		});
	}

	#[test]
	fn later_item_exhausting_the_pool_fails_the_batch() {
		ExtBuilder::default().build_and_execute(|| {
			let pool_id = pool_with_three_stakes(250);
			advance_time(DAY);

			assert_noop!(
				NftSoftStaking::batch_deregister(RuntimeOrigin::signed(ALICE), pool_id, vec![1, 2, 3]),
				Error::<Test>::InsufficientPoolBalance
			);

			assert_ok!(NftSoftStaking::batch_deregister_without_rewards(
				RuntimeOrigin::signed(ALICE),
				pool_id,
				vec![1, 2, 3]
			));
			assert_eq!(reward_balance(ALICE), INITIAL_REWARD_BALANCE);
			assert_eq!(pool(pool_id).balance, 250);
			assert!(stakes_in(pool_id).is_empty());
		});
	}
}
