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

//! Linear reward accrual.

use super::*;
use sp_arithmetic::{helpers_128bit::multiply_by_rational_with_rounding, Rounding};
use sp_runtime::traits::{Bounded, SaturatedConversion};

/// Length of the accrual period the daily rate refers to.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Reward earned at `daily_rate` over `elapsed` seconds, rounded down.
///
/// Saturates at the maximum balance instead of overflowing.
pub fn accrued_reward<Balance: AtLeast32BitUnsigned + Copy>(
	daily_rate: Balance,
	elapsed: u64,
) -> Balance {
	if daily_rate.is_zero() || elapsed == 0 {
		return Zero::zero()
	}
	let rate: u128 = daily_rate.saturated_into();
	multiply_by_rational_with_rounding(rate, elapsed as u128, SECONDS_PER_DAY as u128, Rounding::Down)
		.map(|reward| reward.saturated_into())
		.unwrap_or_else(Bounded::max_value)
}

impl<T: Config> Pallet<T> {
	/// The daily rate `token_id` earns in `pool_id`: its override if one is set, the pool rate
	/// otherwise.
	pub fn effective_rate(
		pool: &PoolInfoFor<T>,
		pool_id: PoolId,
		token_id: T::TokenId,
	) -> BalanceOf<T> {
		SpecialRates::<T>::get(pool_id, token_id).unwrap_or(pool.daily_reward_rate)
	}

	/// Reward accrued by a registration since its last settlement.
	///
	/// A flagged registration never accrues.
	pub(crate) fn accrued(
		pool: &PoolInfoFor<T>,
		pool_id: PoolId,
		token_id: T::TokenId,
		record: &StakeRecordFor<T>,
		now: u64,
	) -> BalanceOf<T> {
		if record.ownership_changed {
			return Zero::zero()
		}
		accrued_reward(
			Self::effective_rate(pool, pool_id, token_id),
			now.saturating_sub(record.last_claimed_at),
		)
	}
}
