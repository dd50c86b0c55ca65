//! Storage migrations for pallet-token-issuer.
//!
//! Each migration is keyed by the on-chain [`StorageVersion`] and runs exactly
//! once: it checks the version, transforms storage, then bumps the version.
//! Re-running a migration on an already upgraded chain only costs the version
//! read.
//!
//! # Wiring Migrations in Runtime
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_token_issuer::migrations::v2::RemoveLegacyAdmin<Runtime>,
//! >;
//! ```
//!
//! # Guidelines
//!
//! - **Never skip versions**: migrate sequentially (v1 → v2 → v3)
//! - **Idempotent migrations**: check the version before touching storage
//! - **Accurate weights**: return the weight of the DB operations performed
//! - **Logging**: log progress under the pallet's log target

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Pallet, LOG_TARGET};

/// Version 1 → 2: retire the legacy `Admin` role.
///
/// v1 stored a single `Admin` account that could bypass the role hierarchy.
/// No authorization path reads it anymore; this migration deletes the key
/// without replacement and leaves every other item untouched.
pub mod v2 {
    use super::*;

    /// The v1 storage item being removed.
    #[frame_support::storage_alias]
    pub type Admin<T: Config> =
        StorageValue<Pallet<T>, <T as frame_system::Config>::AccountId, OptionQuery>;

    pub struct RemoveLegacyAdmin<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for RemoveLegacyAdmin<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 2 {
                // Killing an absent key is a no-op, so chains that never set an
                // admin migrate the same way.
                let had_admin = Admin::<T>::exists();
                Admin::<T>::kill();
                StorageVersion::new(2).put::<Pallet<T>>();

                log::info!(
                    target: LOG_TARGET,
                    "Migrated storage v{:?} → v2 (legacy admin present: {})",
                    on_chain_version,
                    had_admin
                );

                // Reads: version, Admin. Writes: Admin, version
                T::DbWeight::get().reads_writes(2, 2)
            } else {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at v{on_chain_version:?}, skipping v2 migration"
                );
                T::DbWeight::get().reads(1)
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            log::info!(
                target: LOG_TARGET,
                "Pre-upgrade: version {:?}, legacy admin present: {}",
                on_chain_version,
                Admin::<T>::exists()
            );
            Ok(on_chain_version.encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let pre_version: StorageVersion = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            frame_support::ensure!(
                !Admin::<T>::exists(),
                sp_runtime::TryRuntimeError::Other("Legacy admin still present")
            );
            if pre_version < 2 {
                frame_support::ensure!(
                    Pallet::<T>::on_chain_storage_version() >= 2,
                    sp_runtime::TryRuntimeError::Other("Migration to v2 did not complete")
                );
            }

            Ok(())
        }
    }
}
