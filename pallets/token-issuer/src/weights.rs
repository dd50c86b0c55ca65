//! Weights for pallet-token-issuer.
//!
//! Hand-estimated from the storage footprint of each call until benchmark
//! output replaces them. Regenerate with the `runtime-benchmarks` feature.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};
use sp_std::marker::PhantomData;

pub trait WeightInfo {
    fn update_owner() -> Weight;
    fn accept_owner() -> Weight;
    fn force_update_owner() -> Weight;
    fn update_master_minter() -> Weight;
    fn update_pauser() -> Weight;
    fn update_blacklister() -> Weight;
    fn configure_minter_controller() -> Weight;
    fn remove_minter_controller() -> Weight;
    fn configure_minter() -> Weight;
    fn remove_minter() -> Weight;
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn blacklist() -> Weight;
    fn unblacklist() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
}

/// Weights using the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Reads: Roles. Writes: Roles
    fn update_owner() -> Weight {
        Weight::from_parts(12_000_000, 1_700).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn accept_owner() -> Weight {
        Weight::from_parts(12_000_000, 1_700).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn force_update_owner() -> Weight {
        Weight::from_parts(10_000_000, 1_700).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn update_master_minter() -> Weight {
        Weight::from_parts(12_000_000, 1_700).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn update_pauser() -> Weight {
        Weight::from_parts(12_000_000, 1_700).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn update_blacklister() -> Weight {
        Weight::from_parts(12_000_000, 1_700).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    // Reads: Roles. Writes: MinterControllers
    fn configure_minter_controller() -> Weight {
        Weight::from_parts(13_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    // Reads: Roles, MinterControllers. Writes: MinterControllers
    fn remove_minter_controller() -> Weight {
        Weight::from_parts(14_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    // Reads: MinterControllers. Writes: Minters
    fn configure_minter() -> Weight {
        Weight::from_parts(13_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    // Reads: MinterControllers, Minters. Writes: Minters
    fn remove_minter() -> Weight {
        Weight::from_parts(14_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    // Reads: MintingDenom, Paused, Minters, Blacklisted + ledger. Writes: Minters + ledger
    // The ledger share is one read and one write, priced as a single balance entry. Runtimes
    // whose `Config::Ledger` does more must regenerate these from the `mint`/`burn` benchmarks.
    fn mint() -> Weight {
        Weight::from_parts(30_000_000, 6_000).saturating_add(T::DbWeight::get().reads_writes(5, 2))
    }
    // Reads: MintingDenom, Paused, Minters, Blacklisted + ledger. Writes: ledger
    fn burn() -> Weight {
        Weight::from_parts(28_000_000, 6_000).saturating_add(T::DbWeight::get().reads_writes(5, 1))
    }
    // Reads: Roles. Writes: Blacklisted
    fn blacklist() -> Weight {
        Weight::from_parts(12_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn unblacklist() -> Weight {
        Weight::from_parts(12_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    // Reads: Roles. Writes: Paused
    fn pause() -> Weight {
        Weight::from_parts(10_000_000, 1_700).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(10_000_000, 1_700).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn update_owner() -> Weight {
        Weight::from_parts(12_000_000, 1_700)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn accept_owner() -> Weight {
        Weight::from_parts(12_000_000, 1_700)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn force_update_owner() -> Weight {
        Weight::from_parts(10_000_000, 1_700)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn update_master_minter() -> Weight {
        Weight::from_parts(12_000_000, 1_700)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn update_pauser() -> Weight {
        Weight::from_parts(12_000_000, 1_700)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn update_blacklister() -> Weight {
        Weight::from_parts(12_000_000, 1_700)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn configure_minter_controller() -> Weight {
        Weight::from_parts(13_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn remove_minter_controller() -> Weight {
        Weight::from_parts(14_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn configure_minter() -> Weight {
        Weight::from_parts(13_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn remove_minter() -> Weight {
        Weight::from_parts(14_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn mint() -> Weight {
        Weight::from_parts(30_000_000, 6_000)
            .saturating_add(RocksDbWeight::get().reads_writes(5, 2))
    }
    fn burn() -> Weight {
        Weight::from_parts(28_000_000, 6_000)
            .saturating_add(RocksDbWeight::get().reads_writes(5, 1))
    }
    fn blacklist() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn unblacklist() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn pause() -> Weight {
        Weight::from_parts(10_000_000, 1_700)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(10_000_000, 1_700)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
}
