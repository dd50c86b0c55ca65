#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are kept for the read API until callers move to the helpers below
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # Token Issuer Pallet
//!
//! Permissioned issuance controls for a single asset (the *minting denomination*)
//! held in an external ledger:
//!
//! - a role hierarchy (owner, master minter, minter controllers, pauser, blacklister),
//! - per-minter mint allowances,
//! - a blacklist of accounts that may neither send nor receive the asset,
//! - a global pause switch for the asset.
//!
//! The pallet never stores balances. Minting and burning are delegated to
//! [`Config::Ledger`], and the ledger is expected to consult the pallet through
//! [`TransferGate`] before committing any transfer.

use frame_support::{
    dispatch::DispatchResult, ensure, pallet_prelude::*, storage::with_storage_layer,
    traits::EnsureOrigin,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use serde::{Deserialize, Serialize};
use sp_runtime::traits::{MaybeSerializeDeserialize, StaticLookup};
use sp_std::{collections::btree_set::BTreeSet, prelude::*};

pub use pallet::*;
pub use roles::{authorize_controller, AuthorizationError, Operation, Role, RoleRegistry};
pub use traits::{Ledger, TransferGate};
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod migrations;
pub mod roles;
pub mod traits;
pub mod weights;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(2);

pub(crate) const LOG_TARGET: &str = "runtime::token-issuer";

type AccountIdLookupOf<T> = <<T as frame_system::Config>::Lookup as StaticLookup>::Source;

/// Genesis entry for a minter and its remaining allowance.
#[derive(Clone, PartialEq, Eq, RuntimeDebug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MinterAllowance<AccountId> {
    pub minter: AccountId,
    pub allowance: u128,
}

/// Genesis entry pairing a minter controller with the minter it manages.
#[derive(Clone, PartialEq, Eq, RuntimeDebug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MinterControllerPairing<AccountId> {
    pub controller: AccountId,
    pub minter: AccountId,
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Identifier of an asset in the ledger.
        type AssetId: Parameter + Member + MaxEncodedLen + MaybeSerializeDeserialize;

        /// The ledger that holds balances of the minting denomination.
        type Ledger: Ledger<Self::AccountId, Self::AssetId>;

        /// Origin allowed to replace the owner without its consent.
        type GovernanceOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        type WeightInfo: WeightInfo;

        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: traits::BenchmarkHelper<Self::AssetId>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Holders of the singleton roles
    #[pallet::storage]
    #[pallet::getter(fn roles)]
    pub type Roles<T: Config> = StorageValue<_, RoleRegistry<T::AccountId>, ValueQuery>;

    /// Whether movement of the minting denomination is halted
    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// The asset governed by this pallet
    #[pallet::storage]
    #[pallet::getter(fn minting_denom)]
    pub type MintingDenom<T: Config> = StorageValue<_, T::AssetId, OptionQuery>;

    /// Accounts that can neither send nor receive the minting denomination
    #[pallet::storage]
    #[pallet::getter(fn is_blacklisted)]
    pub type Blacklisted<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Minter controller -> the minter it may configure
    #[pallet::storage]
    #[pallet::getter(fn minter_controller)]
    pub type MinterControllers<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, T::AccountId, OptionQuery>;

    /// Minter -> remaining mint allowance. Presence makes an account a minter.
    #[pallet::storage]
    #[pallet::getter(fn minter_allowance)]
    pub type Minters<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Owner nominated a successor, who must accept
        OwnershipTransferStarted { owner: T::AccountId, pending_owner: T::AccountId },
        /// Owner replaced
        OwnerUpdated { previous: Option<T::AccountId>, new: T::AccountId },
        MasterMinterUpdated { previous: Option<T::AccountId>, new: T::AccountId },
        PauserUpdated { previous: Option<T::AccountId>, new: T::AccountId },
        BlacklisterUpdated { previous: Option<T::AccountId>, new: T::AccountId },
        /// Controller paired with (or re-paired to) a minter
        MinterControllerConfigured { controller: T::AccountId, minter: T::AccountId },
        MinterControllerRemoved { controller: T::AccountId, minter: T::AccountId },
        /// Minter allowance set to an absolute value
        MinterConfigured { minter: T::AccountId, allowance: u128 },
        MinterRemoved { minter: T::AccountId },
        /// New units created and credited to `to`
        Minted { minter: T::AccountId, to: T::AccountId, amount: u128 },
        /// Units destroyed from the minter's own balance
        Burned { minter: T::AccountId, amount: u128 },
        Blacklisted { account: T::AccountId },
        Unblacklisted { account: T::AccountId },
        Paused,
        Unpaused,
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller does not hold the role required for the operation
        Unauthorized,
        /// An account argument could not be resolved
        InvalidAddress,
        /// The role required for the operation has never been appointed
        RoleNotConfigured,
        NotAMinter,
        InsufficientAllowance,
        /// Movement of the minting denomination is paused
        ModulePaused,
        /// Sender or receiver of a transfer is blacklisted
        BlacklistedAddress,
        /// Mint recipient is blacklisted
        BlacklistedRecipient,
        MinterControllerNotFound,
        MintingDenomNotSet,
        /// The nominated owner already owns the pallet
        AlreadyOwner,
    }

    impl<T> From<AuthorizationError> for Error<T> {
        fn from(e: AuthorizationError) -> Self {
            match e {
                AuthorizationError::RoleNotConfigured => Error::<T>::RoleNotConfigured,
                AuthorizationError::Unauthorized => Error::<T>::Unauthorized,
            }
        }
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Nominate a new owner. Takes effect once the nominee calls `accept_owner`.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::update_owner())]
        pub fn update_owner(
            origin: OriginFor<T>,
            new_owner: AccountIdLookupOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let new_owner = Self::lookup(new_owner)?;
            let mut roles = Self::ensure_role(&who, Operation::UpdateOwner)?;
            ensure!(roles.owner.as_ref() != Some(&new_owner), Error::<T>::AlreadyOwner);

            roles.assign(Role::PendingOwner, Some(new_owner.clone()));
            Roles::<T>::put(roles);

            Self::deposit_event(Event::OwnershipTransferStarted {
                owner: who,
                pending_owner: new_owner,
            });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::accept_owner())]
        pub fn accept_owner(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let mut roles = Self::ensure_role(&who, Operation::AcceptOwner)?;

            roles.assign(Role::PendingOwner, None);
            let previous = roles.assign(Role::Owner, Some(who.clone()));
            Roles::<T>::put(roles);

            log::info!(target: LOG_TARGET, "Ownership accepted by {:?}", who);
            Self::deposit_event(Event::OwnerUpdated { previous, new: who });
            Ok(())
        }

        /// Replace the owner directly. Any pending nomination is dropped.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::force_update_owner())]
        pub fn force_update_owner(
            origin: OriginFor<T>,
            new_owner: AccountIdLookupOf<T>,
        ) -> DispatchResult {
            T::GovernanceOrigin::ensure_origin(origin)?;
            let new_owner = Self::lookup(new_owner)?;

            let mut roles = Roles::<T>::get();
            roles.assign(Role::PendingOwner, None);
            let previous = roles.assign(Role::Owner, Some(new_owner.clone()));
            Roles::<T>::put(roles);

            log::info!(target: LOG_TARGET, "Owner forcibly set to {:?}", new_owner);
            Self::deposit_event(Event::OwnerUpdated { previous, new: new_owner });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::update_master_minter())]
        pub fn update_master_minter(
            origin: OriginFor<T>,
            new_master_minter: AccountIdLookupOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let new = Self::lookup(new_master_minter)?;
            let previous = Self::update_role(
                &who,
                Operation::UpdateMasterMinter,
                Role::MasterMinter,
                new.clone(),
            )?;

            Self::deposit_event(Event::MasterMinterUpdated { previous, new });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::update_pauser())]
        pub fn update_pauser(
            origin: OriginFor<T>,
            new_pauser: AccountIdLookupOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let new = Self::lookup(new_pauser)?;
            let previous =
                Self::update_role(&who, Operation::UpdatePauser, Role::Pauser, new.clone())?;

            Self::deposit_event(Event::PauserUpdated { previous, new });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::update_blacklister())]
        pub fn update_blacklister(
            origin: OriginFor<T>,
            new_blacklister: AccountIdLookupOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let new = Self::lookup(new_blacklister)?;
            let previous = Self::update_role(
                &who,
                Operation::UpdateBlacklister,
                Role::Blacklister,
                new.clone(),
            )?;

            Self::deposit_event(Event::BlacklisterUpdated { previous, new });
            Ok(())
        }

        /// Pair `controller` with `minter`, replacing any previous pairing of `controller`.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::configure_minter_controller())]
        pub fn configure_minter_controller(
            origin: OriginFor<T>,
            controller: AccountIdLookupOf<T>,
            minter: AccountIdLookupOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let controller = Self::lookup(controller)?;
            let minter = Self::lookup(minter)?;
            Self::ensure_role(&who, Operation::ConfigureMinterController)?;

            MinterControllers::<T>::insert(&controller, &minter);

            Self::deposit_event(Event::MinterControllerConfigured { controller, minter });
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::remove_minter_controller())]
        pub fn remove_minter_controller(
            origin: OriginFor<T>,
            controller: AccountIdLookupOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let controller = Self::lookup(controller)?;
            Self::ensure_role(&who, Operation::RemoveMinterController)?;

            let minter = MinterControllers::<T>::take(&controller)
                .ok_or(Error::<T>::MinterControllerNotFound)?;

            Self::deposit_event(Event::MinterControllerRemoved { controller, minter });
            Ok(())
        }

        /// Set the remaining allowance of `minter`. The value replaces, not adds to,
        /// the previous allowance.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::configure_minter())]
        pub fn configure_minter(
            origin: OriginFor<T>,
            minter: AccountIdLookupOf<T>,
            allowance: u128,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let minter = Self::lookup(minter)?;
            Self::ensure_controls(&who, &minter)?;

            Minters::<T>::insert(&minter, allowance);

            Self::deposit_event(Event::MinterConfigured { minter, allowance });
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::remove_minter())]
        pub fn remove_minter(origin: OriginFor<T>, minter: AccountIdLookupOf<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let minter = Self::lookup(minter)?;
            Self::ensure_controls(&who, &minter)?;
            ensure!(Minters::<T>::contains_key(&minter), Error::<T>::NotAMinter);

            Minters::<T>::remove(&minter);

            Self::deposit_event(Event::MinterRemoved { minter });
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(
            origin: OriginFor<T>,
            to: AccountIdLookupOf<T>,
            amount: u128,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let to = Self::lookup(to)?;
            Self::do_mint(&who, &to, amount)
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_burn(&who, amount)
        }

        /// Blacklisting an already blacklisted account succeeds.
        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::blacklist())]
        pub fn blacklist(origin: OriginFor<T>, account: AccountIdLookupOf<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let account = Self::lookup(account)?;
            Self::ensure_role(&who, Operation::Blacklist)?;

            Blacklisted::<T>::insert(&account, true);

            log::debug!(target: LOG_TARGET, "Blacklisted {:?}", account);
            Self::deposit_event(Event::Blacklisted { account });
            Ok(())
        }

        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::unblacklist())]
        pub fn unblacklist(
            origin: OriginFor<T>,
            account: AccountIdLookupOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let account = Self::lookup(account)?;
            Self::ensure_role(&who, Operation::Unblacklist)?;

            Blacklisted::<T>::remove(&account);

            log::debug!(target: LOG_TARGET, "Unblacklisted {:?}", account);
            Self::deposit_event(Event::Unblacklisted { account });
            Ok(())
        }

        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Operation::Pause)?;

            Paused::<T>::put(true);

            log::info!(target: LOG_TARGET, "Minting denomination paused by {:?}", who);
            Self::deposit_event(Event::Paused);
            Ok(())
        }

        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Operation::Unpause)?;

            Paused::<T>::put(false);

            log::info!(target: LOG_TARGET, "Minting denomination unpaused by {:?}", who);
            Self::deposit_event(Event::Unpaused);
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(
        frame_support::DefaultNoBound,
        frame_support::CloneNoBound,
        frame_support::PartialEqNoBound,
        frame_support::DebugNoBound,
    )]
    pub struct GenesisConfig<T: Config> {
        /// Root of the role hierarchy. Required.
        pub owner: Option<T::AccountId>,
        pub pending_owner: Option<T::AccountId>,
        pub master_minter: Option<T::AccountId>,
        pub pauser: Option<T::AccountId>,
        pub blacklister: Option<T::AccountId>,
        pub paused: bool,
        /// The governed asset. Required.
        pub minting_denom: Option<T::AssetId>,
        pub blacklisted_list: Vec<T::AccountId>,
        pub minters_list: Vec<MinterAllowance<T::AccountId>>,
        pub minter_controller_list: Vec<MinterControllerPairing<T::AccountId>>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            // Nothing is written unless the whole document is valid
            if let Err(e) = self.validate() {
                panic!("Invalid token issuer genesis: {e}");
            }

            Roles::<T>::put(RoleRegistry {
                owner: self.owner.clone(),
                pending_owner: self.pending_owner.clone(),
                master_minter: self.master_minter.clone(),
                pauser: self.pauser.clone(),
                blacklister: self.blacklister.clone(),
            });
            Paused::<T>::put(self.paused);
            if let Some(ref denom) = self.minting_denom {
                MintingDenom::<T>::put(denom);
            }

            for account in &self.blacklisted_list {
                Blacklisted::<T>::insert(account, true);
            }
            for entry in &self.minters_list {
                Minters::<T>::insert(&entry.minter, entry.allowance);
            }
            for pairing in &self.minter_controller_list {
                MinterControllers::<T>::insert(&pairing.controller, &pairing.minter);
            }

            log::info!(
                target: LOG_TARGET,
                "Token issuer genesis: {} minters, {} controllers, {} blacklisted, paused: {}",
                self.minters_list.len(),
                self.minter_controller_list.len(),
                self.blacklisted_list.len(),
                self.paused,
            );
        }
    }
}

impl<T: Config> GenesisConfig<T> {
    /// Reject documents that miss required entries, nominate the owner as its own
    /// successor, or list an account twice.
    pub fn validate(&self) -> Result<(), &'static str> {
        ensure!(self.owner.is_some(), "owner must be set");
        ensure!(self.minting_denom.is_some(), "minting denom must be set");
        ensure!(
            self.pending_owner.is_none() || self.pending_owner != self.owner,
            "pending owner is already the owner"
        );

        let mut seen = BTreeSet::new();
        ensure!(
            self.blacklisted_list.iter().all(|account| seen.insert(account)),
            "duplicate account in blacklisted list"
        );

        let mut seen = BTreeSet::new();
        ensure!(
            self.minters_list.iter().all(|entry| seen.insert(&entry.minter)),
            "duplicate minter in minters list"
        );

        let mut seen = BTreeSet::new();
        ensure!(
            self.minter_controller_list.iter().all(|pairing| seen.insert(&pairing.controller)),
            "duplicate controller in minter controller list"
        );

        Ok(())
    }
}

impl<T: Config> Pallet<T> {
    pub fn owner() -> Option<T::AccountId> {
        Roles::<T>::get().owner
    }

    pub fn pending_owner() -> Option<T::AccountId> {
        Roles::<T>::get().pending_owner
    }

    pub fn master_minter() -> Option<T::AccountId> {
        Roles::<T>::get().master_minter
    }

    pub fn pauser() -> Option<T::AccountId> {
        Roles::<T>::get().pauser
    }

    pub fn blacklister() -> Option<T::AccountId> {
        Roles::<T>::get().blacklister
    }

    /// Mint `amount` to `to` on behalf of `minter`.
    ///
    /// Checks, first failure wins: denom configured, not paused, minter known,
    /// allowance sufficient, recipient not blacklisted. The allowance debit and
    /// the ledger credit are applied together or not at all.
    pub fn do_mint(minter: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        with_storage_layer(|| {
            let denom = Self::denom()?;
            ensure!(!Paused::<T>::get(), Error::<T>::ModulePaused);
            let allowance = Minters::<T>::get(minter).ok_or(Error::<T>::NotAMinter)?;
            let remaining =
                allowance.checked_sub(amount).ok_or(Error::<T>::InsufficientAllowance)?;
            ensure!(!Blacklisted::<T>::get(to), Error::<T>::BlacklistedRecipient);

            Minters::<T>::insert(minter, remaining);
            T::Ledger::credit(to, &denom, amount)?;

            log::debug!(target: LOG_TARGET, "{:?} minted {} to {:?}", minter, amount, to);
            Self::deposit_event(Event::Minted {
                minter: minter.clone(),
                to: to.clone(),
                amount,
            });
            Ok(())
        })
    }

    /// Destroy `amount` of the minter's own balance. The allowance is not restored.
    pub fn do_burn(minter: &T::AccountId, amount: u128) -> DispatchResult {
        with_storage_layer(|| {
            let denom = Self::denom()?;
            ensure!(!Paused::<T>::get(), Error::<T>::ModulePaused);
            ensure!(Minters::<T>::contains_key(minter), Error::<T>::NotAMinter);
            ensure!(!Blacklisted::<T>::get(minter), Error::<T>::BlacklistedAddress);

            T::Ledger::debit(minter, &denom, amount)?;

            log::debug!(target: LOG_TARGET, "{:?} burned {}", minter, amount);
            Self::deposit_event(Event::Burned { minter: minter.clone(), amount });
            Ok(())
        })
    }

    /// Snapshot of the pallet state in genesis form. Lists are sorted by account
    /// so the output only depends on the state, not on storage iteration order.
    pub fn export_genesis() -> GenesisConfig<T> {
        let roles = Roles::<T>::get();

        let mut blacklisted_list: Vec<_> = Blacklisted::<T>::iter()
            .filter_map(|(account, blacklisted)| blacklisted.then_some(account))
            .collect();
        blacklisted_list.sort();

        let mut minters_list: Vec<_> = Minters::<T>::iter()
            .map(|(minter, allowance)| MinterAllowance { minter, allowance })
            .collect();
        minters_list.sort_by(|a, b| a.minter.cmp(&b.minter));

        let mut minter_controller_list: Vec<_> = MinterControllers::<T>::iter()
            .map(|(controller, minter)| MinterControllerPairing { controller, minter })
            .collect();
        minter_controller_list.sort_by(|a, b| a.controller.cmp(&b.controller));

        GenesisConfig {
            owner: roles.owner,
            pending_owner: roles.pending_owner,
            master_minter: roles.master_minter,
            pauser: roles.pauser,
            blacklister: roles.blacklister,
            paused: Paused::<T>::get(),
            minting_denom: MintingDenom::<T>::get(),
            blacklisted_list,
            minters_list,
            minter_controller_list,
        }
    }

    fn denom() -> Result<T::AssetId, DispatchError> {
        MintingDenom::<T>::get().ok_or_else(|| Error::<T>::MintingDenomNotSet.into())
    }

    fn lookup(source: AccountIdLookupOf<T>) -> Result<T::AccountId, DispatchError> {
        T::Lookup::lookup(source).map_err(|_| Error::<T>::InvalidAddress.into())
    }

    fn ensure_role(
        who: &T::AccountId,
        operation: Operation,
    ) -> Result<RoleRegistry<T::AccountId>, DispatchError> {
        let roles = Roles::<T>::get();
        roles.authorize(who, operation).map_err(Error::<T>::from)?;
        Ok(roles)
    }

    fn ensure_controls(controller: &T::AccountId, minter: &T::AccountId) -> DispatchResult {
        let paired = MinterControllers::<T>::get(controller);
        authorize_controller(paired.as_ref(), minter).map_err(Error::<T>::from)?;
        Ok(())
    }

    /// Role-gated replacement of a singleton role. Returns the previous holder.
    fn update_role(
        who: &T::AccountId,
        operation: Operation,
        role: Role,
        new: T::AccountId,
    ) -> Result<Option<T::AccountId>, DispatchError> {
        let mut roles = Self::ensure_role(who, operation)?;
        let previous = roles.assign(role, Some(new.clone()));
        Roles::<T>::put(roles);

        log::info!(target: LOG_TARGET, "{:?} role assigned to {:?}", role, new);
        Ok(previous)
    }

    #[cfg(any(feature = "try-runtime", test))]
    pub(crate) fn do_try_state() -> Result<(), DispatchError> {
        let roles = Roles::<T>::get();
        ensure!(roles.owner.is_some(), "Owner is not configured");
        ensure!(MintingDenom::<T>::exists(), "Minting denom is not configured");
        ensure!(
            roles.pending_owner.is_none() || roles.pending_owner != roles.owner,
            "Pending owner is already the owner"
        );
        Ok(())
    }
}

impl<T: Config> TransferGate<T::AccountId, T::AssetId> for Pallet<T> {
    /// Other assets pass untouched. For the minting denomination the pause is
    /// checked before the blacklist, sender before receiver.
    fn ensure_can_transfer(
        from: &T::AccountId,
        to: &T::AccountId,
        asset: &T::AssetId,
        _amount: u128,
    ) -> DispatchResult {
        if MintingDenom::<T>::get().as_ref() != Some(asset) {
            return Ok(());
        }
        ensure!(!Paused::<T>::get(), Error::<T>::ModulePaused);
        ensure!(!Blacklisted::<T>::get(from), Error::<T>::BlacklistedAddress);
        ensure!(!Blacklisted::<T>::get(to), Error::<T>::BlacklistedAddress);
        Ok(())
    }
}
