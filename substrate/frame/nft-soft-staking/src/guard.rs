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

//! Guard against nested state-mutating calls.

use super::*;
use core::marker::PhantomData;
use sp_runtime::DispatchError;

/// Holds [`OperationLock`] until dropped.
///
/// Acquired once per dispatchable, including batches.
pub(crate) struct ReentrancyGuard<T: Config>(PhantomData<T>);

impl<T: Config> ReentrancyGuard<T> {
	pub(crate) fn acquire() -> Result<Self, DispatchError> {
		if OperationLock::<T>::get() {
			log::debug!(target: LOG_TARGET, "rejected nested call while the operation lock is held");
			return Err(Error::<T>::Reentrancy.into())
		}
		OperationLock::<T>::put(true);
		Ok(Self(PhantomData))
	}
}

impl<T: Config> Drop for ReentrancyGuard<T> {
	fn drop(&mut self) {
		OperationLock::<T>::kill();
	}
}
