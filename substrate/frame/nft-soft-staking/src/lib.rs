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

//! # NFT Soft Staking Pallet
//!
//! Holders of non-fungible items earn periodic rewards from funded pools without ever handing the
//! item over. The pallet only reads custody; it never locks or transfers an item.
//!
//! ## Pallet API
//!
//! See the [`pallet`] module for more information about the interfaces this pallet exposes,
//! including its configuration trait, dispatchables, storage items, events and errors.
//!
//! ## Overview
//!
//! * **Pools** are created by accounts holding at least [`PoolCreationRequirement`] of the
//!   credential asset ([`Config::Credential`]). A pool targets one collection of
//!   [`Config::Nfts`], pays in one asset of [`Config::Assets`] at a daily rate per item, and holds
//!   its rewards in a sub-account of [`Config::PalletId`].
//! * **Stakes** link one item to one pool and to the account that held the item at registration.
//!   An item is registered in at most one pool system-wide ([`ActiveRegistrations`]).
//! * **Rewards** accrue linearly: `floor(rate * elapsed_seconds / 86_400)`, where `rate` is the
//!   per-item override from [`SpecialRates`] if one is set, otherwise the pool's daily rate.
//! * **Ownership changes** are detected by comparing the current holder reported by
//!   [`Config::Nfts`] with the recorded owner. A stake whose item changed hands can no longer
//!   claim; the new holder can release it with no payout ([`Pallet::force_deregister`]).
//!
//! ### Bookkeeping
//!
//! For every pool, at all times:
//!
//! ```text
//! balance + total_claimed == total_funded - total_withdrawn
//! ```
//!
//! Only [`Pallet::emergency_withdraw`] moves funds out other than a claim.
//!
//! The pool account always keeps the reward asset's minimum balance, so payouts can use at most
//! [`Pallet::payable_balance`].
//!
//! ### Batches
//!
//! Batch registration and deregistration apply the single-item operation to every item; any
//! failure reverts the whole call. [`Pallet::batch_claim`] validates all items and sums their
//! rewards first, checks the pool balance once, then settles every item and pays the total in a
//! single transfer.
//!
//! ### Lock duration
//!
//! Pools carry a lock duration for display purposes only. Items are never in custody, so no
//! operation consults it.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{
	traits::{fungible, fungibles, nonfungibles, tokens, Get, UnixTime},
	PalletId,
};
use scale_info::TypeInfo;
use sp_runtime::traits::{AtLeast32BitUnsigned, Saturating, Zero};

pub use pallet::*;
pub use types::*;
pub use weights::WeightInfo;

mod accrual;
mod batch;
mod guard;
mod membership;
mod pools;
mod registry;
mod stakes;
pub mod types;
pub mod weights;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;
#[cfg(test)]
mod mock;
#[cfg(test)]
mod tests;

pub use accrual::{accrued_reward, SECONDS_PER_DAY};
use guard::ReentrancyGuard;

/// Log target for this pallet.
pub(crate) const LOG_TARGET: &str = "runtime::nft-soft-staking";

/// Balance of reward and credential assets.
pub type BalanceOf<T> = <T as Config>::Balance;

/// Identifier of a collection of [`Config::Nfts`].
pub type CollectionIdOf<T> = <T as Config>::CollectionId;

/// Identifier of a reward asset of [`Config::Assets`].
pub type AssetIdOf<T> = <T as Config>::AssetId;

/// Helper trait for benchmarking setup.
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId, CollectionId, TokenId, AssetId, Balance> {
	/// A collection that passes the pool-creation probe. Created if it does not exist.
	fn collection() -> CollectionId;
	/// The `i`-th distinct item of the benchmark collection.
	fn token(i: u32) -> TokenId;
	/// A reward asset that passes the pool-creation probe. Created if it does not exist.
	fn reward_asset() -> AssetId;
	/// Make `owner` the holder of `token` in `collection`, minting it if needed.
	fn set_holder(collection: &CollectionId, token: &TokenId, owner: &AccountId);
	/// Give `who` `amount` of the credential asset.
	fn endow_credential(who: &AccountId, amount: Balance);
	/// Move the clock forward.
	fn advance_time(seconds: u64);
}

#[frame_support::pallet]
pub mod pallet {
	use super::*;
	use frame_support::{pallet_prelude::*, traits::BuildGenesisConfig};
	use frame_system::pallet_prelude::*;
	use sp_runtime::traits::{One, StaticLookup};

	/// The in-code storage version.
	const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

	#[pallet::pallet]
	#[pallet::storage_version(STORAGE_VERSION)]
	pub struct Pallet<T>(_);

	#[pallet::config]
	pub trait Config: frame_system::Config {
		/// Balance of reward and credential assets.
		type Balance: tokens::Balance + MaybeSerializeDeserialize;

		/// Identifier of a reward asset.
		type AssetId: Parameter + Member + MaxEncodedLen;

		/// The assets rewards are funded and paid in.
		type Assets: fungibles::Mutate<Self::AccountId, AssetId = Self::AssetId, Balance = Self::Balance>;

		/// Identifier of a collection of non-fungible items.
		type CollectionId: Parameter + Member + MaxEncodedLen + Copy;

		/// Identifier of an item within a collection.
		type TokenId: Parameter + Member + MaxEncodedLen + Copy + Ord;

		/// Custody authority for the staked items. Only ever read.
		type Nfts: nonfungibles::Inspect<
			Self::AccountId,
			CollectionId = Self::CollectionId,
			ItemId = Self::TokenId,
		>;

		/// Balance of the eligibility credential gating registration and pool creation.
		type Credential: fungible::Inspect<Self::AccountId, Balance = Self::Balance>;

		/// Wall clock; rewards accrue per second.
		type TimeProvider: UnixTime;

		/// Platform operator: pause switch, credential requirements and emergency withdrawals.
		type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

		/// Weight information for the extrinsics of this pallet.
		type WeightInfo: WeightInfo;

		/// Helper type for benchmarking.
		#[cfg(feature = "runtime-benchmarks")]
		type BenchmarkHelper: BenchmarkHelper<
			Self::AccountId,
			Self::CollectionId,
			Self::TokenId,
			Self::AssetId,
			Self::Balance,
		>;

		/// Seed of the pool reward accounts.
		#[pallet::constant]
		type PalletId: Get<PalletId>;

		/// Longest lock duration a pool may advertise, in seconds.
		#[pallet::constant]
		type MaxLockDuration: Get<u64>;

		/// Largest number of items accepted by a batch call.
		#[pallet::constant]
		type MaxBatchSize: Get<u32>;

		/// Largest number of items one account can have registered in one pool.
		#[pallet::constant]
		type MaxStakedPerAccount: Get<u32>;

		/// Largest number of pools one account can manage.
		#[pallet::constant]
		type MaxPoolsPerAccount: Get<u32>;

		/// Largest number of pools targeting one collection.
		#[pallet::constant]
		type MaxPoolsPerCollection: Get<u32>;

		/// Upper bound for both credential requirements.
		#[pallet::constant]
		type MaxRequirement: Get<Self::Balance>;
	}

	/// Id of the most recently created pool. `0` until the first pool exists.
	#[pallet::storage]
	pub type LastPoolId<T: Config> = StorageValue<_, PoolId, ValueQuery>;

	/// Pool configuration and bookkeeping. Pools are never removed.
	#[pallet::storage]
	pub type Pools<T: Config> = StorageMap<_, Twox64Concat, PoolId, PoolInfoFor<T>>;

	/// Live registrations, keyed by pool and item.
	#[pallet::storage]
	pub type Stakes<T: Config> = StorageDoubleMap<
		_,
		Twox64Concat,
		PoolId,
		Blake2_128Concat,
		T::TokenId,
		StakeRecordFor<T>,
	>;

	/// Per-item daily rate overriding the pool rate. Presence means the override is set, `0`
	/// included.
	#[pallet::storage]
	pub type SpecialRates<T: Config> =
		StorageDoubleMap<_, Twox64Concat, PoolId, Blake2_128Concat, T::TokenId, BalanceOf<T>>;

	/// The single pool an item is registered in, across all pools.
	#[pallet::storage]
	pub type ActiveRegistrations<T: Config> = StorageDoubleMap<
		_,
		Blake2_128Concat,
		T::CollectionId,
		Blake2_128Concat,
		T::TokenId,
		PoolId,
	>;

	/// Items an account has registered in a pool, in insertion order modulo swap-removals.
	#[pallet::storage]
	pub type StakedTokens<T: Config> = StorageDoubleMap<
		_,
		Blake2_128Concat,
		T::AccountId,
		Twox64Concat,
		PoolId,
		BoundedVec<T::TokenId, T::MaxStakedPerAccount>,
		ValueQuery,
	>;

	/// 1-based position of an item in its [`StakedTokens`] entry. `0` means absent.
	#[pallet::storage]
	pub type StakedTokenIndex<T: Config> = StorageNMap<
		_,
		(
			NMapKey<Blake2_128Concat, T::AccountId>,
			NMapKey<Twox64Concat, PoolId>,
			NMapKey<Blake2_128Concat, T::TokenId>,
		),
		u32,
		ValueQuery,
	>;

	/// Pools managed by an account.
	#[pallet::storage]
	pub type OwnerPools<T: Config> = StorageMap<
		_,
		Blake2_128Concat,
		T::AccountId,
		BoundedVec<PoolId, T::MaxPoolsPerAccount>,
		ValueQuery,
	>;

	/// Pools targeting a collection.
	#[pallet::storage]
	pub type CollectionPools<T: Config> = StorageMap<
		_,
		Blake2_128Concat,
		T::CollectionId,
		BoundedVec<PoolId, T::MaxPoolsPerCollection>,
		ValueQuery,
	>;

	/// Credential balance required to register an item.
	#[pallet::storage]
	pub type StakingRequirement<T: Config> = StorageValue<_, BalanceOf<T>, ValueQuery>;

	/// Credential balance required to create or receive a pool.
	#[pallet::storage]
	pub type PoolCreationRequirement<T: Config> = StorageValue<_, BalanceOf<T>, ValueQuery>;

	/// Pallet-wide switch blocking pool creation and registrations.
	#[pallet::storage]
	pub type Paused<T: Config> = StorageValue<_, bool, ValueQuery>;

	/// Held for the duration of every state-mutating call.
	#[pallet::storage]
	pub(crate) type OperationLock<T: Config> = StorageValue<_, bool, ValueQuery>;

	#[pallet::genesis_config]
	pub struct GenesisConfig<T: Config> {
		/// Initial [`StakingRequirement`].
		pub staking_requirement: BalanceOf<T>,
		/// Initial [`PoolCreationRequirement`].
		pub pool_creation_requirement: BalanceOf<T>,
		/// Whether the pallet starts paused.
		pub paused: bool,
	}

	impl<T: Config> Default for GenesisConfig<T> {
		fn default() -> Self {
			Self {
				staking_requirement: One::one(),
				pool_creation_requirement: One::one(),
				paused: false,
			}
		}
	}

	#[pallet::genesis_build]
	impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
		fn build(&self) {
			assert!(
				Pallet::<T>::requirements_valid(
					self.staking_requirement,
					self.pool_creation_requirement
				),
				"requirements must satisfy 0 < staking <= pool creation <= MaxRequirement",
			);
			StakingRequirement::<T>::put(self.staking_requirement);
			PoolCreationRequirement::<T>::put(self.pool_creation_requirement);
			Paused::<T>::put(self.paused);
		}
	}

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// A pool was created.
		PoolCreated {
			pool_id: PoolId,
			owner: T::AccountId,
			collection: T::CollectionId,
			reward_asset: T::AssetId,
			daily_reward_rate: BalanceOf<T>,
			lock_duration: u64,
		},
		/// Rewards were added to a pool.
		PoolFunded { pool_id: PoolId, who: T::AccountId, amount: BalanceOf<T>, balance: BalanceOf<T> },
		/// A pool's rate, lock duration or staking switch changed.
		PoolConfigUpdated {
			pool_id: PoolId,
			daily_reward_rate: BalanceOf<T>,
			lock_duration: u64,
			staking_paused: bool,
		},
		/// A pool changed hands.
		PoolOwnershipTransferred {
			pool_id: PoolId,
			previous_owner: T::AccountId,
			new_owner: T::AccountId,
		},
		/// A pool stopped taking registrations for good.
		PoolDeactivated { pool_id: PoolId },
		/// A per-item rate override was set (`Some`) or cleared (`None`).
		SpecialRateSet { pool_id: PoolId, token_id: T::TokenId, rate: Option<BalanceOf<T>> },
		/// An item was registered.
		Registered { pool_id: PoolId, who: T::AccountId, token_id: T::TokenId, at: u64 },
		/// A registration was removed.
		Deregistered {
			pool_id: PoolId,
			/// The account that removed the registration.
			who: T::AccountId,
			/// The recorded owner of the removed registration.
			owner: T::AccountId,
			token_id: T::TokenId,
			/// Reward paid to `owner` on exit.
			reward: BalanceOf<T>,
			kind: ExitKind,
			at: u64,
		},
		/// Rewards were paid out and the accrual clock restarted.
		Restaked {
			pool_id: PoolId,
			who: T::AccountId,
			token_id: T::TokenId,
			reward: BalanceOf<T>,
			at: u64,
		},
		/// Rewards of one item were paid out.
		RewardClaimed {
			pool_id: PoolId,
			who: T::AccountId,
			token_id: T::TokenId,
			amount: BalanceOf<T>,
			at: u64,
		},
		/// A batch claim paid `amount` in total for `count` items.
		BatchRewardsClaimed {
			pool_id: PoolId,
			who: T::AccountId,
			count: u32,
			amount: BalanceOf<T>,
			at: u64,
		},
		/// Accrued rewards were given up on exit.
		RewardsForfeited {
			pool_id: PoolId,
			owner: T::AccountId,
			token_id: T::TokenId,
			amount: BalanceOf<T>,
			at: u64,
		},
		/// The holder of a registered item is no longer its recorded owner.
		OwnershipChangeDetected {
			pool_id: PoolId,
			token_id: T::TokenId,
			owner: T::AccountId,
			holder: Option<T::AccountId>,
			at: u64,
		},
		/// A new holder released a registration left behind by a previous owner.
		ForcedRelease {
			pool_id: PoolId,
			token_id: T::TokenId,
			previous_owner: T::AccountId,
			new_holder: T::AccountId,
			at: u64,
		},
		/// The operator removed funds from a pool outside the claim path.
		EmergencyWithdrawal { pool_id: PoolId, recipient: T::AccountId, amount: BalanceOf<T> },
		/// Credential requirements changed.
		RequirementsUpdated { staking: BalanceOf<T>, pool_creation: BalanceOf<T> },
		/// The pallet-wide pause switch changed.
		PauseSet { paused: bool },
	}

	#[pallet::error]
	pub enum Error<T> {
		/// A rate, lock duration, requirement or account argument is out of range.
		InvalidParameter,
		/// Amount must be greater than zero.
		InvalidAmount,
		/// The collection does not answer the custody probe.
		InvalidCollection,
		/// The reward asset does not exist.
		InvalidRewardAsset,
		/// The caller has no right to act on this pool or registration.
		Unauthorized,
		/// The caller does not hold the item.
		NotTokenHolder,
		/// The caller's credential balance is below the requirement.
		InsufficientCredential,
		/// No pool with this id.
		PoolNotFound,
		/// The item is not registered in this pool.
		StakeNotFound,
		/// The item is already registered in this pool.
		AlreadyExists,
		/// The item is registered in another pool.
		AlreadyRegisteredElsewhere,
		/// The pool was deactivated.
		PoolInactive,
		/// The pool owner paused new registrations.
		StakingPaused,
		/// The pallet is paused.
		Paused,
		/// The pool cannot cover the reward.
		///
		/// Use [`Pallet::deregister_without_rewards`] to leave without a payout.
		InsufficientPoolBalance,
		/// The recorded owner no longer holds the item.
		OwnershipChanged,
		/// The recorded owner still holds the item.
		OwnershipUnchanged,
		/// Nothing has accrued yet.
		NoReward,
		/// Batches must contain between one and `MaxBatchSize` items.
		BatchSizeViolation,
		/// An item appears twice in one batch.
		DuplicateToken,
		/// The asset transfer was refused.
		TransferFailed,
		/// The account or collection already lists the maximum number of pools.
		TooManyPools,
		/// The account already has `MaxStakedPerAccount` items in this pool.
		TooManyStakes,
		/// A state-mutating call is already in progress.
		Reentrancy,
		/// An amount overflowed.
		Overflow,
	}

	#[pallet::hooks]
	impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
		#[cfg(feature = "try-runtime")]
		fn try_state(_: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
			Self::do_try_state()
		}

		fn integrity_test() {
			assert!(T::MaxBatchSize::get() > 0, "MaxBatchSize must be at least 1");
			assert!(
				T::MaxStakedPerAccount::get() >= T::MaxBatchSize::get(),
				"MaxStakedPerAccount must fit a full batch: {} < {}",
				T::MaxStakedPerAccount::get(),
				T::MaxBatchSize::get(),
			);
		}
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Create a reward pool for `collection`, paying `daily_reward_rate` of `reward_asset`
		/// per registered item per day.
		///
		/// ## Dispatch Origin
		///
		/// Must be `Signed` by an account holding at least [`PoolCreationRequirement`] of the
		/// credential.
		///
		/// ## Errors
		///
		/// - [`Error::Paused`]: the pallet is paused.
		/// - [`Error::InsufficientCredential`]: the caller is below the creation requirement.
		/// - [`Error::InvalidParameter`]: zero rate or lock duration above
		///   [`Config::MaxLockDuration`].
		/// - [`Error::InvalidCollection`], [`Error::InvalidRewardAsset`]: a probe failed.
		/// - [`Error::TooManyPools`]: the caller or the collection has no room for another pool.
		///
		/// ## Events
		///
		/// - [`Event::PoolCreated`]
		#[pallet::call_index(0)]
		#[pallet::weight(T::WeightInfo::create_pool())]
		pub fn create_pool(
			origin: OriginFor<T>,
			collection: T::CollectionId,
			reward_asset: T::AssetId,
			daily_reward_rate: BalanceOf<T>,
			lock_duration: u64,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let _guard = ReentrancyGuard::<T>::acquire()?;
			Self::do_create_pool(who, collection, reward_asset, daily_reward_rate, lock_duration)
				.map(|_| ())
		}

		/// Pull `amount` of the reward asset from the pool owner into the pool.
		///
		/// ## Dispatch Origin
		///
		/// Must be `Signed` by the pool owner.
		///
		/// ## Events
		///
		/// - [`Event::PoolFunded`]
		#[pallet::call_index(1)]
		#[pallet::weight(T::WeightInfo::fund_pool())]
		pub fn fund_pool(
			origin: OriginFor<T>,
			pool_id: PoolId,
			amount: BalanceOf<T>,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let _guard = ReentrancyGuard::<T>::acquire()?;
			Self::do_fund_pool(&who, pool_id, amount)
		}

		/// Change the daily rate, lock duration and owner pause switch of an active pool.
		///
		/// Pausing blocks new registrations only; every exit path stays open.
		#[pallet::call_index(2)]
		#[pallet::weight(T::WeightInfo::update_pool_config())]
		pub fn update_pool_config(
			origin: OriginFor<T>,
			pool_id: PoolId,
			daily_reward_rate: BalanceOf<T>,
			lock_duration: u64,
			staking_paused: bool,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let _guard = ReentrancyGuard::<T>::acquire()?;
			Self::do_update_pool_config(&who, pool_id, daily_reward_rate, lock_duration, staking_paused)
		}

		/// Hand a pool over to `new_owner`, who must meet the pool creation requirement.
		#[pallet::call_index(3)]
		#[pallet::weight(T::WeightInfo::transfer_pool_ownership())]
		pub fn transfer_pool_ownership(
			origin: OriginFor<T>,
			pool_id: PoolId,
			new_owner: AccountIdLookupOf<T>,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let new_owner = T::Lookup::lookup(new_owner)?;
			let _guard = ReentrancyGuard::<T>::acquire()?;
			Self::do_transfer_pool_ownership(&who, pool_id, new_owner)
		}

		/// Permanently close a pool to new registrations.
		///
		/// Existing stakes keep accruing and can claim or leave as usual.
		#[pallet::call_index(4)]
		#[pallet::weight(T::WeightInfo::deactivate_pool())]
		pub fn deactivate_pool(origin: OriginFor<T>, pool_id: PoolId) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let _guard = ReentrancyGuard::<T>::acquire()?;
			Self::do_deactivate_pool(&who, pool_id)
		}

		/// Move up to `amount` out of a pool's balance to `recipient`.
		///
		/// ## Dispatch Origin
		///
		/// Must be [`Config::AdminOrigin`]. This is the only path that reduces a pool's balance
		/// without a matching claim.
		#[pallet::call_index(5)]
		#[pallet::weight(T::WeightInfo::emergency_withdraw())]
		pub fn emergency_withdraw(
			origin: OriginFor<T>,
			pool_id: PoolId,
			amount: BalanceOf<T>,
			recipient: AccountIdLookupOf<T>,
		) -> DispatchResult {
			T::AdminOrigin::ensure_origin(origin)?;
			let recipient = T::Lookup::lookup(recipient)?;
			let _guard = ReentrancyGuard::<T>::acquire()?;
			Self::do_emergency_withdraw(pool_id, amount, recipient)
		}

		/// Set (`Some`) or clear (`None`) the daily rate override of one item in a pool.
		///
		/// `Some(0)` stops the item from accruing anything.
		#[pallet::call_index(6)]
		#[pallet::weight(T::WeightInfo::set_special_rate())]
		pub fn set_special_rate(
			origin: OriginFor<T>,
			pool_id: PoolId,
			token_id: T::TokenId,
			rate: Option<BalanceOf<T>>,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let _guard = ReentrancyGuard::<T>::acquire()?;
			Self::do_set_special_rate(&who, pool_id, token_id, rate)
		}

		/// Register an item the caller holds in a pool.
		///
		/// ## Errors
		///
		/// - [`Error::Paused`], [`Error::PoolInactive`], [`Error::StakingPaused`]
		/// - [`Error::NotTokenHolder`]: the caller does not hold the item.
		/// - [`Error::InsufficientCredential`]: the caller is below [`StakingRequirement`].
		/// - [`Error::InsufficientPoolBalance`]: the pool has no funds.
		/// - [`Error::AlreadyExists`], [`Error::AlreadyRegisteredElsewhere`]
		#[pallet::call_index(7)]
		#[pallet::weight(T::WeightInfo::register())]
		pub fn register(origin: OriginFor<T>, pool_id: PoolId, token_id: T::TokenId) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let _guard = ReentrancyGuard::<T>::acquire()?;
			Self::do_register(&who, pool_id, token_id)
		}

		/// Pay out the rewards accrued by one item and restart its clock.
		///
		/// ## Errors
		///
		/// - [`Error::Unauthorized`]: the caller is not the recorded owner.
		/// - [`Error::OwnershipChanged`]: the recorded owner no longer holds the item.
		/// - [`Error::NoReward`]: nothing accrued.
		/// - [`Error::InsufficientPoolBalance`]: the pool cannot cover the reward.
		#[pallet::call_index(8)]
		#[pallet::weight(T::WeightInfo::claim())]
		pub fn claim(origin: OriginFor<T>, pool_id: PoolId, token_id: T::TokenId) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let _guard = ReentrancyGuard::<T>::acquire()?;
			Self::do_claim(&who, pool_id, token_id)
		}

		/// Like [`Pallet::claim`], but succeeds with no payout when nothing accrued.
		#[pallet::call_index(9)]
		#[pallet::weight(T::WeightInfo::restake())]
		pub fn restake(origin: OriginFor<T>, pool_id: PoolId, token_id: T::TokenId) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let _guard = ReentrancyGuard::<T>::acquire()?;
			Self::do_restake(&who, pool_id, token_id)
		}

		/// Remove a registration, paying accrued rewards if the caller is the recorded owner and
		/// still holds the item.
		///
		/// ## Dispatch Origin
		///
		/// Must be `Signed` by the recorded owner or by the current holder.
		///
		/// ## Errors
		///
		/// - [`Error::InsufficientPoolBalance`]: the reward cannot be covered. The registration
		///   stays; use [`Pallet::deregister_without_rewards`] instead.
		#[pallet::call_index(10)]
		#[pallet::weight(T::WeightInfo::deregister())]
		pub fn deregister(origin: OriginFor<T>, pool_id: PoolId, token_id: T::TokenId) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let _guard = ReentrancyGuard::<T>::acquire()?;
			Self::do_deregister(&who, pool_id, token_id)
		}

		/// Remove a registration, forfeiting whatever accrued. Never blocked by the pool balance.
		#[pallet::call_index(11)]
		#[pallet::weight(T::WeightInfo::deregister_without_rewards())]
		pub fn deregister_without_rewards(
			origin: OriginFor<T>,
			pool_id: PoolId,
			token_id: T::TokenId,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let _guard = ReentrancyGuard::<T>::acquire()?;
			Self::do_deregister_without_rewards(&who, pool_id, token_id)
		}

		/// Release a registration left behind by a previous owner of an item the caller now
		/// holds. Nothing is paid.
		///
		/// ## Dispatch Origin
		///
		/// Must be `Signed` by the current holder, who must differ from the recorded owner and
		/// meet [`StakingRequirement`].
		#[pallet::call_index(12)]
		#[pallet::weight(T::WeightInfo::force_deregister())]
		pub fn force_deregister(
			origin: OriginFor<T>,
			pool_id: PoolId,
			token_id: T::TokenId,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let _guard = ReentrancyGuard::<T>::acquire()?;
			Self::do_force_deregister(&who, pool_id, token_id)
		}

		/// Record that a registered item left its recorded owner.
		///
		/// Any signed account may call this. The flag is permanent for the registration.
		#[pallet::call_index(13)]
		#[pallet::weight(T::WeightInfo::flag_ownership_change())]
		pub fn flag_ownership_change(
			origin: OriginFor<T>,
			pool_id: PoolId,
			token_id: T::TokenId,
		) -> DispatchResult {
			ensure_signed(origin)?;
			let _guard = ReentrancyGuard::<T>::acquire()?;
			Self::do_flag_ownership_change(pool_id, token_id)
		}

		/// [`Pallet::register`] for every item in `token_ids`, all or nothing.
		#[pallet::call_index(14)]
		#[pallet::weight(T::WeightInfo::batch_register(token_ids.len() as u32))]
		pub fn batch_register(
			origin: OriginFor<T>,
			pool_id: PoolId,
			token_ids: Vec<T::TokenId>,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let _guard = ReentrancyGuard::<T>::acquire()?;
			Self::do_batch_register(&who, pool_id, &token_ids)
		}

		/// Claim for every item in `token_ids` with one balance check and one transfer.
		///
		/// Fails as a whole if any item is invalid or the pool cannot cover the sum.
		#[pallet::call_index(15)]
		#[pallet::weight(T::WeightInfo::batch_claim(token_ids.len() as u32))]
		pub fn batch_claim(
			origin: OriginFor<T>,
			pool_id: PoolId,
			token_ids: Vec<T::TokenId>,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let _guard = ReentrancyGuard::<T>::acquire()?;
			Self::do_batch_claim(&who, pool_id, &token_ids)
		}

		/// [`Pallet::deregister`] for every item in `token_ids`, all or nothing.
		#[pallet::call_index(16)]
		#[pallet::weight(T::WeightInfo::batch_deregister(token_ids.len() as u32))]
		pub fn batch_deregister(
			origin: OriginFor<T>,
			pool_id: PoolId,
			token_ids: Vec<T::TokenId>,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let _guard = ReentrancyGuard::<T>::acquire()?;
			Self::do_batch_deregister(&who, pool_id, &token_ids, ExitKind::WithRewards)
		}

		/// [`Pallet::deregister_without_rewards`] for every item in `token_ids`, all or nothing.
		#[pallet::call_index(17)]
		#[pallet::weight(T::WeightInfo::batch_deregister_without_rewards(token_ids.len() as u32))]
		pub fn batch_deregister_without_rewards(
			origin: OriginFor<T>,
			pool_id: PoolId,
			token_ids: Vec<T::TokenId>,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let _guard = ReentrancyGuard::<T>::acquire()?;
			Self::do_batch_deregister(&who, pool_id, &token_ids, ExitKind::WithoutRewards)
		}

		/// Flip the pallet-wide pause switch.
		///
		/// While paused, pool creation and registration fail with [`Error::Paused`].
		#[pallet::call_index(18)]
		#[pallet::weight(T::WeightInfo::set_paused())]
		pub fn set_paused(origin: OriginFor<T>, paused: bool) -> DispatchResult {
			T::AdminOrigin::ensure_origin(origin)?;
			Paused::<T>::put(paused);
			log::debug!(target: LOG_TARGET, "pause switch set to {paused}");
			Self::deposit_event(Event::PauseSet { paused });
			Ok(())
		}

		/// Set both credential requirements.
		///
		/// Requires `0 < staking <= pool_creation <= MaxRequirement`.
		#[pallet::call_index(19)]
		#[pallet::weight(T::WeightInfo::set_requirements())]
		pub fn set_requirements(
			origin: OriginFor<T>,
			staking: BalanceOf<T>,
			pool_creation: BalanceOf<T>,
		) -> DispatchResult {
			T::AdminOrigin::ensure_origin(origin)?;
			ensure!(Self::requirements_valid(staking, pool_creation), Error::<T>::InvalidParameter);
			StakingRequirement::<T>::put(staking);
			PoolCreationRequirement::<T>::put(pool_creation);
			Self::deposit_event(Event::RequirementsUpdated { staking, pool_creation });
			Ok(())
		}
	}

	/// Account id lookup source.
	pub type AccountIdLookupOf<T> = <<T as frame_system::Config>::Lookup as StaticLookup>::Source;
}

impl<T: Config> Pallet<T> {
	/// Current time in whole seconds.
	pub(crate) fn now() -> u64 {
		T::TimeProvider::now().as_secs()
	}

	pub(crate) fn requirements_valid(staking: BalanceOf<T>, pool_creation: BalanceOf<T>) -> bool {
		!staking.is_zero() && staking <= pool_creation && pool_creation <= T::MaxRequirement::get()
	}

	/// Reward accrued by `token_id` in `pool_id` right now. `None` if it is not registered.
	pub fn pending_rewards(pool_id: PoolId, token_id: T::TokenId) -> Option<BalanceOf<T>> {
		let pool = Pools::<T>::get(pool_id)?;
		let record = Stakes::<T>::get(pool_id, token_id)?;
		Some(Self::accrued(&pool, pool_id, token_id, &record, Self::now()))
	}

	/// Items `who` has registered in `pool_id`.
	pub fn staked_tokens(who: &T::AccountId, pool_id: PoolId) -> Vec<T::TokenId> {
		StakedTokens::<T>::get(who, pool_id).into_inner()
	}

	/// Pools managed by `who`.
	pub fn pools_of(who: &T::AccountId) -> Vec<PoolId> {
		OwnerPools::<T>::get(who).into_inner()
	}

	/// Pools targeting `collection`.
	pub fn pools_of_collection(collection: &T::CollectionId) -> Vec<PoolId> {
		CollectionPools::<T>::get(collection).into_inner()
	}

	/// Registration record of `token_id` in `pool_id`.
	pub fn stake_of(pool_id: PoolId, token_id: T::TokenId) -> Option<StakeRecordFor<T>> {
		Stakes::<T>::get(pool_id, token_id)
	}

	/// Ensure the ledger invariants hold.
	///
	/// Checks pool bookkeeping, agreement between stakes, the global registration map and the
	/// membership index, and that no operation lock is left behind.
	#[cfg(any(test, feature = "try-runtime"))]
	pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
		use frame_support::ensure;
		use fungibles::Inspect;

		ensure!(!OperationLock::<T>::get(), "operation lock left behind");

		for (pool_id, pool) in Pools::<T>::iter() {
			ensure!(pool_id > 0 && pool_id <= LastPoolId::<T>::get(), "pool id out of range");
			ensure!(
				pool.balance.saturating_add(pool.total_claimed) ==
					pool.total_funded.saturating_sub(pool.total_withdrawn),
				"pool balance does not match funded - claimed - withdrawn"
			);
			ensure!(
				T::Assets::balance(pool.reward_asset.clone(), &Self::pool_account(pool_id)) >=
					pool.balance,
				"pool account holds less than the pool balance"
			);
			ensure!(OwnerPools::<T>::get(&pool.owner).contains(&pool_id), "pool missing from owner list");
			ensure!(
				CollectionPools::<T>::get(pool.collection).contains(&pool_id),
				"pool missing from collection list"
			);
		}

		for (pool_id, token_id, record) in Stakes::<T>::iter() {
			let pool = Pools::<T>::get(pool_id).ok_or("stake in unknown pool")?;
			ensure!(
				ActiveRegistrations::<T>::get(pool.collection, token_id) == Some(pool_id),
				"stake without matching global registration"
			);
			let position = StakedTokenIndex::<T>::get((record.owner.clone(), pool_id, token_id));
			ensure!(position > 0, "stake missing from membership index");
			ensure!(record.last_claimed_at >= record.staked_at, "accrual clock before registration");
		}

		for (collection, token_id, pool_id) in ActiveRegistrations::<T>::iter() {
			let pool = Pools::<T>::get(pool_id).ok_or("registration in unknown pool")?;
			ensure!(pool.collection == collection, "registration under the wrong collection");
			ensure!(Stakes::<T>::contains_key(pool_id, token_id), "registration without stake");
		}

		for (who, pool_id, tokens) in StakedTokens::<T>::iter() {
			ensure!(!tokens.is_empty(), "empty membership set kept in storage");
			for (i, token_id) in tokens.iter().enumerate() {
				ensure!(
					StakedTokenIndex::<T>::get((who.clone(), pool_id, *token_id)) == i as u32 + 1,
					"membership index out of sync"
				);
				let record = Stakes::<T>::get(pool_id, token_id).ok_or("member without stake")?;
				ensure!(record.owner == who, "member listed under the wrong account");
			}
		}

		for ((who, pool_id, token_id), position) in StakedTokenIndex::<T>::iter() {
			ensure!(position > 0, "zero position stored");
			let tokens = StakedTokens::<T>::get(&who, pool_id);
			ensure!(
				tokens.get(position as usize - 1) == Some(&token_id),
				"stale membership index entry"
			);
		}

		Ok(())
	}
}
