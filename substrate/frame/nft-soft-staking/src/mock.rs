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

//! Test environment for the soft staking pallet.

use crate::{self as pallet_nft_soft_staking, *};
use core::time::Duration;
use frame_support::{
	assert_ok, construct_runtime, derive_impl, parameter_types,
	traits::{fungible::ItemOf, nonfungibles, AsEnsureOriginWithArg, ConstU128, UnixTime},
	PalletId,
};
use frame_system::{EnsureRoot, EnsureSigned};
use sp_io::TestExternalities as TestState;
use sp_runtime::BuildStorage;
use std::{cell::RefCell, collections::BTreeMap};

pub type AccountId = u64;
pub type Balance = u128;

// Test accounts
pub const ALICE: AccountId = 1;
pub const BOB: AccountId = 2;
pub const CHARLIE: AccountId = 3;
/// Holds no credential at all.
pub const DAVE: AccountId = 4;

pub const REWARD_ASSET: u32 = 1;
pub const CREDENTIAL_ASSET: u32 = 2;
pub const OTHER_REWARD_ASSET: u32 = 3;
/// Reward asset with a minimum balance of [`DUST_LIMIT`].
pub const DUSTY_REWARD_ASSET: u32 = 4;
pub const DUST_LIMIT: Balance = 10;

/// Collection managed by BOB. Used by most pools in the tests.
pub const COLLECTION: u32 = 7;
pub const OTHER_COLLECTION: u32 = 8;

pub const STAKING_REQUIREMENT: Balance = 10;
pub const POOL_CREATION_REQUIREMENT: Balance = 100;

pub const INITIAL_REWARD_BALANCE: Balance = 1_000_000;

/// Monday, 1 December 2025 00:00:00 UTC.
pub const START: u64 = 1_764_547_200;
pub const DAY: u64 = SECONDS_PER_DAY;

thread_local! {
	static MOCK_TIME: RefCell<u64> = const { RefCell::new(START) };
	static COLLECTIONS: RefCell<BTreeMap<u32, AccountId>> = const { RefCell::new(BTreeMap::new()) };
	static ITEMS: RefCell<BTreeMap<(u32, u32), AccountId>> = const { RefCell::new(BTreeMap::new()) };
}

/// Wall clock under test control, in seconds.
pub struct MockTime;

impl UnixTime for MockTime {
	fn now() -> Duration {
		Duration::from_secs(MOCK_TIME.with(|t| *t.borrow()))
	}
}

impl MockTime {
	pub fn set(seconds: u64) {
		MOCK_TIME.with(|t| *t.borrow_mut() = seconds);
	}

	pub fn get() -> u64 {
		MOCK_TIME.with(|t| *t.borrow())
	}
}

/// Move the clock forward by `seconds`.
pub fn advance_time(seconds: u64) {
	MockTime::set(MockTime::get() + seconds);
}

/// Custody authority backed by thread-local maps. Only answers ownership queries.
pub struct MockNfts;

impl MockNfts {
	pub fn create_collection(collection: u32, owner: AccountId) {
		COLLECTIONS.with(|c| c.borrow_mut().insert(collection, owner));
	}

	pub fn set_owner(collection: u32, item: u32, owner: AccountId) {
		ITEMS.with(|i| i.borrow_mut().insert((collection, item), owner));
	}

	pub fn burn(collection: u32, item: u32) {
		ITEMS.with(|i| i.borrow_mut().remove(&(collection, item)));
	}

	fn reset() {
		COLLECTIONS.with(|c| c.borrow_mut().clear());
		ITEMS.with(|i| i.borrow_mut().clear());
	}
}

impl nonfungibles::Inspect<AccountId> for MockNfts {
	type ItemId = u32;
	type CollectionId = u32;

	fn owner(collection: &u32, item: &u32) -> Option<AccountId> {
		ITEMS.with(|i| i.borrow().get(&(*collection, *item)).copied())
	}

	fn collection_owner(collection: &u32) -> Option<AccountId> {
		COLLECTIONS.with(|c| c.borrow().get(collection).copied())
	}
}

/// Give `owner` item `token` of [`COLLECTION`].
pub fn mint_nft(token: u32, owner: AccountId) {
	MockNfts::set_owner(COLLECTION, token, owner);
}

/// Hand item `token` of [`COLLECTION`] to `to` behind the pallet's back.
pub fn transfer_nft(token: u32, to: AccountId) {
	MockNfts::set_owner(COLLECTION, token, to);
}

construct_runtime!(
	pub enum Test {
		System: frame_system,
		Balances: pallet_balances,
		Assets: pallet_assets,
		NftSoftStaking: pallet_nft_soft_staking,
	}
);

type Block = frame_system::mocking::MockBlock<Test>;

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
	type Block = Block;
	type AccountData = pallet_balances::AccountData<Balance>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
	type Balance = Balance;
	type ExistentialDeposit = ConstU128<1>;
	type AccountStore = System;
}

#[derive_impl(pallet_assets::config_preludes::TestDefaultConfig)]
impl pallet_assets::Config for Test {
	type Balance = Balance;
	type AssetId = u32;
	type AssetIdParameter = u32;
	type Currency = Balances;
	type CreateOrigin = AsEnsureOriginWithArg<EnsureSigned<AccountId>>;
	type ForceOrigin = EnsureRoot<AccountId>;
}

parameter_types! {
	pub const CredentialAssetId: u32 = CREDENTIAL_ASSET;
	pub const NftSoftStakingPalletId: PalletId = PalletId(*b"py/nftss");
	pub const MaxLockDuration: u64 = 365 * DAY;
	pub const MaxBatchSize: u32 = 5;
	pub const MaxStakedPerAccount: u32 = 8;
	pub const MaxPoolsPerAccount: u32 = 3;
	pub const MaxPoolsPerCollection: u32 = 4;
	pub const MaxRequirement: Balance = 1_000_000;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct MockBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl BenchmarkHelper<AccountId, u32, u32, u32, Balance> for MockBenchmarkHelper {
	fn collection() -> u32 {
		MockNfts::create_collection(COLLECTION, BOB);
		COLLECTION
	}

	fn token(i: u32) -> u32 {
		i
	}

	fn reward_asset() -> u32 {
		REWARD_ASSET
	}

	fn set_holder(collection: &u32, token: &u32, owner: &AccountId) {
		MockNfts::set_owner(*collection, *token, *owner);
	}

	fn endow_credential(who: &AccountId, amount: Balance) {
		endow_credential(*who, amount);
	}

	fn advance_time(seconds: u64) {
		MockTime::set(MockTime::get() + seconds);
	}
}

impl pallet_nft_soft_staking::Config for Test {
	type Balance = Balance;
	type AssetId = u32;
	type Assets = Assets;
	type CollectionId = u32;
	type TokenId = u32;
	type Nfts = MockNfts;
	type Credential = ItemOf<Assets, CredentialAssetId, AccountId>;
	type TimeProvider = MockTime;
	type AdminOrigin = EnsureRoot<AccountId>;
	type WeightInfo = ();
	#[cfg(feature = "runtime-benchmarks")]
	type BenchmarkHelper = MockBenchmarkHelper;
	type PalletId = NftSoftStakingPalletId;
	type MaxLockDuration = MaxLockDuration;
	type MaxBatchSize = MaxBatchSize;
	type MaxStakedPerAccount = MaxStakedPerAccount;
	type MaxPoolsPerAccount = MaxPoolsPerAccount;
	type MaxPoolsPerCollection = MaxPoolsPerCollection;
	type MaxRequirement = MaxRequirement;
}

pub struct ExtBuilder {
	staking_requirement: Balance,
	pool_creation_requirement: Balance,
	paused: bool,
}

impl Default for ExtBuilder {
	fn default() -> Self {
		Self {
			staking_requirement: STAKING_REQUIREMENT,
			pool_creation_requirement: POOL_CREATION_REQUIREMENT,
			paused: false,
		}
	}
}

impl ExtBuilder {
	pub fn paused(mut self) -> Self {
		self.paused = true;
		self
	}

	pub fn build(self) -> TestState {
		let mut storage = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

		pallet_balances::GenesisConfig::<Test> {
			balances: vec![(ALICE, 1_000), (BOB, 1_000), (CHARLIE, 1_000)],
			..Default::default()
		}
		.assimilate_storage(&mut storage)
		.unwrap();

		pallet_assets::GenesisConfig::<Test> {
			assets: vec![
				// (asset_id, owner, is_sufficient, min_balance)
				(REWARD_ASSET, BOB, true, 1),
				(CREDENTIAL_ASSET, BOB, true, 1),
				(OTHER_REWARD_ASSET, CHARLIE, true, 1),
				(DUSTY_REWARD_ASSET, BOB, true, DUST_LIMIT),
			],
			metadata: vec![],
			accounts: vec![
				(REWARD_ASSET, ALICE, INITIAL_REWARD_BALANCE),
				(REWARD_ASSET, BOB, INITIAL_REWARD_BALANCE),
				(REWARD_ASSET, CHARLIE, INITIAL_REWARD_BALANCE),
				(OTHER_REWARD_ASSET, BOB, INITIAL_REWARD_BALANCE),
				(DUSTY_REWARD_ASSET, BOB, INITIAL_REWARD_BALANCE),
				(CREDENTIAL_ASSET, ALICE, 50),
				(CREDENTIAL_ASSET, BOB, 1_000),
				(CREDENTIAL_ASSET, CHARLIE, 50),
			],
			next_asset_id: None,
			reserves: vec![],
		}
		.assimilate_storage(&mut storage)
		.unwrap();

		pallet_nft_soft_staking::GenesisConfig::<Test> {
			staking_requirement: self.staking_requirement,
			pool_creation_requirement: self.pool_creation_requirement,
			paused: self.paused,
		}
		.assimilate_storage(&mut storage)
		.unwrap();

		let mut ext: TestState = storage.into();
		ext.execute_with(|| {
			System::set_block_number(1);
			MockTime::set(START);
			MockNfts::reset();
			MockNfts::create_collection(COLLECTION, BOB);
			MockNfts::create_collection(OTHER_COLLECTION, CHARLIE);
		});
		ext
	}

	pub fn build_and_execute(self, test: impl FnOnce()) {
		sp_tracing::try_init_simple();
		self.build().execute_with(|| {
			test();
			NftSoftStaking::do_try_state().unwrap();
		})
	}
}

/// Build genesis storage with default configuration.
pub fn new_test_ext() -> TestState {
	ExtBuilder::default().build()
}

/// Create a pool over [`COLLECTION`] paying [`REWARD_ASSET`] and return its id.
pub fn create_pool(owner: AccountId, daily_reward_rate: Balance) -> PoolId {
	assert_ok!(NftSoftStaking::create_pool(
		RuntimeOrigin::signed(owner),
		COLLECTION,
		REWARD_ASSET,
		daily_reward_rate,
		0,
	));
	LastPoolId::<Test>::get()
}

/// Fund `pool_id` from its owner.
pub fn fund_pool(pool_id: PoolId, amount: Balance) {
	let owner = pool(pool_id).owner;
	assert_ok!(NftSoftStaking::fund_pool(RuntimeOrigin::signed(owner), pool_id, amount));
}

/// Mint `token` to `who` and register it in `pool_id`.
pub fn stake(who: AccountId, pool_id: PoolId, token: u32) {
	mint_nft(token, who);
	assert_ok!(NftSoftStaking::register(RuntimeOrigin::signed(who), pool_id, token));
}

/// BOB's pool paying 100 a day, funded with 10_000, with ALICE's token 1 registered.
pub fn setup_pool_with_stake() -> (PoolId, u32) {
	let pool_id = create_pool(BOB, 100);
	fund_pool(pool_id, 10_000);
	stake(ALICE, pool_id, 1);
	(pool_id, 1)
}

pub fn pool(pool_id: PoolId) -> PoolInfoFor<Test> {
	Pools::<Test>::get(pool_id).unwrap()
}

/// Mint `amount` of the credential asset to `who`.
pub fn endow_credential(who: AccountId, amount: Balance) {
	use frame_support::traits::fungibles::Mutate;
	assert_ok!(<Assets as Mutate<AccountId>>::mint_into(CREDENTIAL_ASSET, &who, amount));
}

/// Reward asset balance of `who`.
pub fn reward_balance(who: AccountId) -> Balance {
	use frame_support::traits::fungibles::Inspect;
	<Assets as Inspect<AccountId>>::balance(REWARD_ASSET, &who)
}

/// Events of this pallet deposited since the last call.
pub fn events() -> Vec<Event<Test>> {
	let result = System::events()
		.into_iter()
		.map(|r| r.event)
		.filter_map(|e| if let RuntimeEvent::NftSoftStaking(inner) = e { Some(inner) } else { None })
		.collect();

	System::reset_events();

	result
}
