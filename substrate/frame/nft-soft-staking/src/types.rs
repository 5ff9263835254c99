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

//! Types stored and emitted by the soft staking pallet.

use super::*;

/// Identifier of a reward pool. The first pool created gets id `1`; `0` is never a pool.
pub type PoolId = u32;

/// Lifecycle of a pool.
///
/// There is no transition out of [`PoolState::Deactivated`].
#[derive(
	Encode, Decode, DecodeWithMemTracking, MaxEncodedLen, TypeInfo, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum PoolState {
	/// Accepts new registrations, subject to `staking_paused`.
	Active,
	/// Permanently closed for new registrations. Existing stakes may still claim and leave.
	Deactivated,
}

/// A reward program for one collection, funded in one reward asset.
#[derive(Encode, Decode, MaxEncodedLen, TypeInfo, Clone, PartialEq, Eq, Debug)]
pub struct PoolInfo<AccountId, CollectionId, AssetId, Balance> {
	/// The collection whose items can be registered.
	pub collection: CollectionId,
	/// The asset rewards are paid in.
	pub reward_asset: AssetId,
	/// The account allowed to manage the pool.
	pub owner: AccountId,
	/// Reward paid per registered item per day, in the smallest unit of `reward_asset`.
	pub daily_reward_rate: Balance,
	/// Lock duration in seconds. Informational, nothing is ever held in custody.
	pub lock_duration: u64,
	/// Rewards available for payout.
	pub balance: Balance,
	/// Cumulative rewards paid out.
	pub total_claimed: Balance,
	/// Cumulative rewards pulled in by [`Pallet::fund_pool`].
	pub total_funded: Balance,
	/// Cumulative amount removed by [`Pallet::emergency_withdraw`].
	pub total_withdrawn: Balance,
	/// Whether the pool can still take registrations.
	pub state: PoolState,
	/// Owner-controlled switch blocking new registrations.
	pub staking_paused: bool,
	/// Unix timestamp (seconds) of creation.
	pub created_at: u64,
	/// Unix timestamp (seconds) of the last configuration or ownership change.
	pub updated_at: u64,
}

impl<AccountId, CollectionId, AssetId, Balance> PoolInfo<AccountId, CollectionId, AssetId, Balance>
where
	Balance: AtLeast32BitUnsigned + Copy,
{
	/// Whether new registrations may enter the pool.
	pub fn accepts_registrations(&self) -> bool {
		self.state == PoolState::Active && !self.staking_paused
	}

	/// Move `amount` from the available balance to the claimed total.
	///
	/// The caller must have checked `amount <= balance`.
	pub(crate) fn record_payout(&mut self, amount: Balance) {
		self.balance = self.balance.saturating_sub(amount);
		self.total_claimed = self.total_claimed.saturating_add(amount);
	}
}

/// Registration of one item in one pool.
#[derive(Encode, Decode, MaxEncodedLen, TypeInfo, Clone, PartialEq, Eq, Debug)]
pub struct StakeRecord<AccountId, Balance> {
	/// The holder of the item at registration time.
	pub owner: AccountId,
	/// Unix timestamp (seconds) of registration.
	pub staked_at: u64,
	/// Unix timestamp (seconds) rewards accrue from.
	pub last_claimed_at: u64,
	/// Rewards already paid for this registration.
	pub total_paid: Balance,
	/// Set once the custody authority reported a holder other than `owner`.
	pub ownership_changed: bool,
}

impl<AccountId, Balance: Zero> StakeRecord<AccountId, Balance> {
	pub(crate) fn new(owner: AccountId, now: u64) -> Self {
		Self {
			owner,
			staked_at: now,
			last_claimed_at: now,
			total_paid: Zero::zero(),
			ownership_changed: false,
		}
	}
}

/// Which deregistration path removed a stake.
#[derive(
	Encode, Decode, DecodeWithMemTracking, MaxEncodedLen, TypeInfo, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum ExitKind {
	/// Pending rewards were paid, if the recorded owner still held the item.
	WithRewards,
	/// Pending rewards were forfeited.
	WithoutRewards,
	/// A new holder released the registration of a previous owner.
	Forced,
}

pub type PoolInfoFor<T> = PoolInfo<
	<T as frame_system::Config>::AccountId,
	CollectionIdOf<T>,
	AssetIdOf<T>,
	BalanceOf<T>,
>;

pub type StakeRecordFor<T> = StakeRecord<<T as frame_system::Config>::AccountId, BalanceOf<T>>;
