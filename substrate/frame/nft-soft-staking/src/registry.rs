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

//! System-wide uniqueness of registrations: an item sits in at most one pool at a time.

use super::*;
use frame_support::ensure;
use sp_runtime::DispatchResult;

impl<T: Config> Pallet<T> {
	/// Mark `token_id` of `collection` as registered in `pool_id`.
	///
	/// Claiming again for the same pool is a no-op.
	pub(crate) fn claim_registration(
		collection: T::CollectionId,
		token_id: T::TokenId,
		pool_id: PoolId,
	) -> DispatchResult {
		ActiveRegistrations::<T>::try_mutate(collection, token_id, |maybe_pool| -> DispatchResult {
			if let Some(existing) = maybe_pool {
				if *existing != pool_id {
					log::debug!(
						target: LOG_TARGET,
						"token {token_id:?} of {collection:?} already registered in pool {existing}",
					);
				}
				ensure!(*existing == pool_id, Error::<T>::AlreadyRegisteredElsewhere);
			}
			*maybe_pool = Some(pool_id);
			Ok(())
		})
	}

	/// Forget where `token_id` of `collection` is registered.
	pub(crate) fn release_registration(collection: T::CollectionId, token_id: T::TokenId) {
		ActiveRegistrations::<T>::remove(collection, token_id);
	}

	/// Whether `token_id` of `collection` is registered anywhere, and in which pool.
	///
	/// The pool id is `0` when the item is not registered.
	pub fn registration_of(collection: T::CollectionId, token_id: T::TokenId) -> (bool, PoolId) {
		match ActiveRegistrations::<T>::get(collection, token_id) {
			Some(pool_id) => (true, pool_id),
			None => (false, 0),
		}
	}
}
