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

//! Weights for `pallet_nft_soft_staking`.
//!
//! These are hand-estimated placeholders, not benchmark output. Storage access counts follow
//! each call's reads and writes; `ref_time` values are estimates. Runtimes should generate their
//! own weights from the `runtime-benchmarks` feature before relying on them.

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use frame_support::{
	traits::Get,
	weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for `pallet_nft_soft_staking`.
pub trait WeightInfo {
	fn create_pool() -> Weight;
	fn fund_pool() -> Weight;
	fn update_pool_config() -> Weight;
	fn transfer_pool_ownership() -> Weight;
	fn deactivate_pool() -> Weight;
	fn emergency_withdraw() -> Weight;
	fn set_special_rate() -> Weight;
	fn register() -> Weight;
	fn claim() -> Weight;
	fn restake() -> Weight;
	fn deregister() -> Weight;
	fn deregister_without_rewards() -> Weight;
	fn force_deregister() -> Weight;
	fn flag_ownership_change() -> Weight;
	fn batch_register(n: u32) -> Weight;
	fn batch_claim(n: u32) -> Weight;
	fn batch_deregister(n: u32) -> Weight;
	fn batch_deregister_without_rewards(n: u32) -> Weight;
	fn set_paused() -> Weight;
	fn set_requirements() -> Weight;
}

/// Weights for `pallet_nft_soft_staking` using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	fn create_pool() -> Weight {
		Weight::from_parts(48_310_000_u64, 0)
			.saturating_add(T::DbWeight::get().reads(7_u64))
			.saturating_add(T::DbWeight::get().writes(4_u64))
	}
	fn fund_pool() -> Weight {
		Weight::from_parts(61_820_000_u64, 0)
			.saturating_add(T::DbWeight::get().reads(4_u64))
			.saturating_add(T::DbWeight::get().writes(3_u64))
	}
	fn update_pool_config() -> Weight {
		Weight::from_parts(17_240_000_u64, 0)
			.saturating_add(T::DbWeight::get().reads(1_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	fn transfer_pool_ownership() -> Weight {
		Weight::from_parts(29_905_000_u64, 0)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(3_u64))
	}
	fn deactivate_pool() -> Weight {
		Weight::from_parts(15_871_000_u64, 0)
			.saturating_add(T::DbWeight::get().reads(1_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	fn emergency_withdraw() -> Weight {
		Weight::from_parts(58_417_000_u64, 0)
			.saturating_add(T::DbWeight::get().reads(4_u64))
			.saturating_add(T::DbWeight::get().writes(3_u64))
	}
	fn set_special_rate() -> Weight {
		Weight::from_parts(16_033_000_u64, 0)
			.saturating_add(T::DbWeight::get().reads(1_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	fn register() -> Weight {
		Weight::from_parts(44_726_000_u64, 0)
			.saturating_add(T::DbWeight::get().reads(8_u64))
			.saturating_add(T::DbWeight::get().writes(4_u64))
	}
	fn claim() -> Weight {
		Weight::from_parts(66_192_000_u64, 0)
			.saturating_add(T::DbWeight::get().reads(6_u64))
			.saturating_add(T::DbWeight::get().writes(4_u64))
	}
	fn restake() -> Weight {
		Weight::from_parts(67_004_000_u64, 0)
			.saturating_add(T::DbWeight::get().reads(6_u64))
			.saturating_add(T::DbWeight::get().writes(4_u64))
	}
	fn deregister() -> Weight {
		Weight::from_parts(79_388_000_u64, 0)
			.saturating_add(T::DbWeight::get().reads(8_u64))
			.saturating_add(T::DbWeight::get().writes(6_u64))
	}
	fn deregister_without_rewards() -> Weight {
		Weight::from_parts(38_560_000_u64, 0)
			.saturating_add(T::DbWeight::get().reads(6_u64))
			.saturating_add(T::DbWeight::get().writes(4_u64))
	}
	fn force_deregister() -> Weight {
		Weight::from_parts(41_127_000_u64, 0)
			.saturating_add(T::DbWeight::get().reads(7_u64))
			.saturating_add(T::DbWeight::get().writes(4_u64))
	}
	fn flag_ownership_change() -> Weight {
		Weight::from_parts(20_714_000_u64, 0)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	fn batch_register(n: u32) -> Weight {
		Weight::from_parts(9_118_000_u64, 0)
			.saturating_add(Weight::from_parts(38_204_000_u64, 0).saturating_mul(n as u64))
			.saturating_add(T::DbWeight::get().reads(4_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
			.saturating_add(T::DbWeight::get().reads((4_u64).saturating_mul(n as u64)))
			.saturating_add(T::DbWeight::get().writes((4_u64).saturating_mul(n as u64)))
	}
	fn batch_claim(n: u32) -> Weight {
		Weight::from_parts(52_906_000_u64, 0)
			.saturating_add(Weight::from_parts(14_482_000_u64, 0).saturating_mul(n as u64))
			.saturating_add(T::DbWeight::get().reads(5_u64))
			.saturating_add(T::DbWeight::get().writes(4_u64))
			.saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(n as u64)))
			.saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(n as u64)))
	}
	fn batch_deregister(n: u32) -> Weight {
		Weight::from_parts(14_270_000_u64, 0)
			.saturating_add(Weight::from_parts(71_563_000_u64, 0).saturating_mul(n as u64))
			.saturating_add(T::DbWeight::get().reads(4_u64))
			.saturating_add(T::DbWeight::get().writes(3_u64))
			.saturating_add(T::DbWeight::get().reads((4_u64).saturating_mul(n as u64)))
			.saturating_add(T::DbWeight::get().writes((5_u64).saturating_mul(n as u64)))
	}
	fn batch_deregister_without_rewards(n: u32) -> Weight {
		Weight::from_parts(8_915_000_u64, 0)
			.saturating_add(Weight::from_parts(33_041_000_u64, 0).saturating_mul(n as u64))
			.saturating_add(T::DbWeight::get().reads(2_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
			.saturating_add(T::DbWeight::get().reads((4_u64).saturating_mul(n as u64)))
			.saturating_add(T::DbWeight::get().writes((4_u64).saturating_mul(n as u64)))
	}
	fn set_paused() -> Weight {
		Weight::from_parts(8_402_000_u64, 0)
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	fn set_requirements() -> Weight {
		Weight::from_parts(9_117_000_u64, 0)
			.saturating_add(T::DbWeight::get().writes(2_u64))
	}
}

// For backwards compatibility and tests.
impl WeightInfo for () {
	fn create_pool() -> Weight {
		Weight::from_parts(48_310_000_u64, 0)
			.saturating_add(RocksDbWeight::get().reads(7_u64))
			.saturating_add(RocksDbWeight::get().writes(4_u64))
	}
	fn fund_pool() -> Weight {
		Weight::from_parts(61_820_000_u64, 0)
			.saturating_add(RocksDbWeight::get().reads(4_u64))
			.saturating_add(RocksDbWeight::get().writes(3_u64))
	}
	fn update_pool_config() -> Weight {
		Weight::from_parts(17_240_000_u64, 0)
			.saturating_add(RocksDbWeight::get().reads(1_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn transfer_pool_ownership() -> Weight {
		Weight::from_parts(29_905_000_u64, 0)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(3_u64))
	}
	fn deactivate_pool() -> Weight {
		Weight::from_parts(15_871_000_u64, 0)
			.saturating_add(RocksDbWeight::get().reads(1_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn emergency_withdraw() -> Weight {
		Weight::from_parts(58_417_000_u64, 0)
			.saturating_add(RocksDbWeight::get().reads(4_u64))
			.saturating_add(RocksDbWeight::get().writes(3_u64))
	}
	fn set_special_rate() -> Weight {
		Weight::from_parts(16_033_000_u64, 0)
			.saturating_add(RocksDbWeight::get().reads(1_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn register() -> Weight {
		Weight::from_parts(44_726_000_u64, 0)
			.saturating_add(RocksDbWeight::get().reads(8_u64))
			.saturating_add(RocksDbWeight::get().writes(4_u64))
	}
	fn claim() -> Weight {
		Weight::from_parts(66_192_000_u64, 0)
			.saturating_add(RocksDbWeight::get().reads(6_u64))
			.saturating_add(RocksDbWeight::get().writes(4_u64))
	}
	fn restake() -> Weight {
		Weight::from_parts(67_004_000_u64, 0)
			.saturating_add(RocksDbWeight::get().reads(6_u64))
			.saturating_add(RocksDbWeight::get().writes(4_u64))
	}
	fn deregister() -> Weight {
		Weight::from_parts(79_388_000_u64, 0)
			.saturating_add(RocksDbWeight::get().reads(8_u64))
			.saturating_add(RocksDbWeight::get().writes(6_u64))
	}
	fn deregister_without_rewards() -> Weight {
		Weight::from_parts(38_560_000_u64, 0)
			.saturating_add(RocksDbWeight::get().reads(6_u64))
			.saturating_add(RocksDbWeight::get().writes(4_u64))
	}
	fn force_deregister() -> Weight {
		Weight::from_parts(41_127_000_u64, 0)
			.saturating_add(RocksDbWeight::get().reads(7_u64))
			.saturating_add(RocksDbWeight::get().writes(4_u64))
	}
	fn flag_ownership_change() -> Weight {
		Weight::from_parts(20_714_000_u64, 0)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn batch_register(n: u32) -> Weight {
		Weight::from_parts(9_118_000_u64, 0)
			.saturating_add(Weight::from_parts(38_204_000_u64, 0).saturating_mul(n as u64))
			.saturating_add(RocksDbWeight::get().reads(4_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
			.saturating_add(RocksDbWeight::get().reads((4_u64).saturating_mul(n as u64)))
			.saturating_add(RocksDbWeight::get().writes((4_u64).saturating_mul(n as u64)))
	}
	fn batch_claim(n: u32) -> Weight {
		Weight::from_parts(52_906_000_u64, 0)
			.saturating_add(Weight::from_parts(14_482_000_u64, 0).saturating_mul(n as u64))
			.saturating_add(RocksDbWeight::get().reads(5_u64))
			.saturating_add(RocksDbWeight::get().writes(4_u64))
			.saturating_add(RocksDbWeight::get().reads((2_u64).saturating_mul(n as u64)))
			.saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(n as u64)))
	}
	fn batch_deregister(n: u32) -> Weight {
		Weight::from_parts(14_270_000_u64, 0)
			.saturating_add(Weight::from_parts(71_563_000_u64, 0).saturating_mul(n as u64))
			.saturating_add(RocksDbWeight::get().reads(4_u64))
			.saturating_add(RocksDbWeight::get().writes(3_u64))
			.saturating_add(RocksDbWeight::get().reads((4_u64).saturating_mul(n as u64)))
			.saturating_add(RocksDbWeight::get().writes((5_u64).saturating_mul(n as u64)))
	}
	fn batch_deregister_without_rewards(n: u32) -> Weight {
		Weight::from_parts(8_915_000_u64, 0)
			.saturating_add(Weight::from_parts(33_041_000_u64, 0).saturating_mul(n as u64))
			.saturating_add(RocksDbWeight::get().reads(2_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
			.saturating_add(RocksDbWeight::get().reads((4_u64).saturating_mul(n as u64)))
			.saturating_add(RocksDbWeight::get().writes((4_u64).saturating_mul(n as u64)))
	}
	fn set_paused() -> Weight {
		Weight::from_parts(8_402_000_u64, 0)
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn set_requirements() -> Weight {
		Weight::from_parts(9_117_000_u64, 0)
			.saturating_add(RocksDbWeight::get().writes(2_u64))
	}
}
