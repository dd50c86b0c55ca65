//! Benchmarking setup for pallet-token-issuer

use super::*;

#[allow(unused)]
use crate::Pallet as TokenIssuer;
use crate::traits::BenchmarkHelper;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use sp_runtime::traits::StaticLookup;

fn appoint<T: Config>(role: Role, who: &T::AccountId) {
    Roles::<T>::mutate(|roles| {
        roles.assign(role, Some(who.clone()));
    });
}

/// Make `minter` an unpaused, unscreened minter of the benchmark denomination.
fn setup_minter<T: Config>(minter: &T::AccountId, allowance: u128) -> T::AssetId {
    let denom = T::BenchmarkHelper::minting_denom();
    MintingDenom::<T>::put(&denom);
    Paused::<T>::put(false);
    Minters::<T>::insert(minter, allowance);
    denom
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn update_owner() {
        let caller: T::AccountId = whitelisted_caller();
        let new_owner: T::AccountId = account("new_owner", 0, 0);
        appoint::<T>(Role::Owner, &caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), T::Lookup::unlookup(new_owner.clone()));

        assert_eq!(Pallet::<T>::pending_owner(), Some(new_owner));
    }

    #[benchmark]
    fn accept_owner() {
        let caller: T::AccountId = whitelisted_caller();
        appoint::<T>(Role::PendingOwner, &caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()));

        assert_eq!(Pallet::<T>::owner(), Some(caller));
        assert_eq!(Pallet::<T>::pending_owner(), None);
    }

    #[benchmark]
    fn force_update_owner() {
        let new_owner: T::AccountId = account("new_owner", 0, 0);
        let origin = T::GovernanceOrigin::try_successful_origin().expect("Governance origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, T::Lookup::unlookup(new_owner.clone()));

        assert_eq!(Pallet::<T>::owner(), Some(new_owner));
    }

    #[benchmark]
    fn update_master_minter() {
        let caller: T::AccountId = whitelisted_caller();
        let new: T::AccountId = account("master_minter", 0, 0);
        appoint::<T>(Role::Owner, &caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), T::Lookup::unlookup(new.clone()));

        assert_eq!(Pallet::<T>::master_minter(), Some(new));
    }

    #[benchmark]
    fn update_pauser() {
        let caller: T::AccountId = whitelisted_caller();
        let new: T::AccountId = account("pauser", 0, 0);
        appoint::<T>(Role::Owner, &caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), T::Lookup::unlookup(new.clone()));

        assert_eq!(Pallet::<T>::pauser(), Some(new));
    }

    #[benchmark]
    fn update_blacklister() {
        let caller: T::AccountId = whitelisted_caller();
        let new: T::AccountId = account("blacklister", 0, 0);
        appoint::<T>(Role::Owner, &caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), T::Lookup::unlookup(new.clone()));

        assert_eq!(Pallet::<T>::blacklister(), Some(new));
    }

    #[benchmark]
    fn configure_minter_controller() {
        let caller: T::AccountId = whitelisted_caller();
        let controller: T::AccountId = account("controller", 0, 0);
        let minter: T::AccountId = account("minter", 0, 0);
        appoint::<T>(Role::MasterMinter, &caller);

        #[extrinsic_call]
        _(
            RawOrigin::Signed(caller),
            T::Lookup::unlookup(controller.clone()),
            T::Lookup::unlookup(minter.clone()),
        );

        assert_eq!(MinterControllers::<T>::get(&controller), Some(minter));
    }

    #[benchmark]
    fn remove_minter_controller() {
        let caller: T::AccountId = whitelisted_caller();
        let controller: T::AccountId = account("controller", 0, 0);
        let minter: T::AccountId = account("minter", 0, 0);
        appoint::<T>(Role::MasterMinter, &caller);
        MinterControllers::<T>::insert(&controller, &minter);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), T::Lookup::unlookup(controller.clone()));

        assert_eq!(MinterControllers::<T>::get(&controller), None);
    }

    #[benchmark]
    fn configure_minter() {
        let caller: T::AccountId = whitelisted_caller();
        let minter: T::AccountId = account("minter", 0, 0);
        MinterControllers::<T>::insert(&caller, &minter);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), T::Lookup::unlookup(minter.clone()), 1_000_000);

        assert_eq!(Minters::<T>::get(&minter), Some(1_000_000));
    }

    #[benchmark]
    fn remove_minter() {
        let caller: T::AccountId = whitelisted_caller();
        let minter: T::AccountId = account("minter", 0, 0);
        MinterControllers::<T>::insert(&caller, &minter);
        Minters::<T>::insert(&minter, 1_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), T::Lookup::unlookup(minter.clone()));

        assert_eq!(Minters::<T>::get(&minter), None);
    }

    #[benchmark]
    fn mint() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        setup_minter::<T>(&caller, 1_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), T::Lookup::unlookup(recipient), 1_000);

        assert_eq!(Minters::<T>::get(&caller), Some(999_000));
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        let denom = setup_minter::<T>(&caller, 1_000_000);
        T::Ledger::credit(&caller, &denom, 1_000).expect("Ledger credit");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1_000);

        assert_eq!(Minters::<T>::get(&caller), Some(1_000_000));
    }

    #[benchmark]
    fn blacklist() {
        let caller: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        appoint::<T>(Role::Blacklister, &caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), T::Lookup::unlookup(target.clone()));

        assert_eq!(Blacklisted::<T>::get(&target), true);
    }

    #[benchmark]
    fn unblacklist() {
        let caller: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        appoint::<T>(Role::Blacklister, &caller);
        Blacklisted::<T>::insert(&target, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), T::Lookup::unlookup(target.clone()));

        assert_eq!(Blacklisted::<T>::get(&target), false);
    }

    #[benchmark]
    fn pause() {
        let caller: T::AccountId = whitelisted_caller();
        appoint::<T>(Role::Pauser, &caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(Paused::<T>::get(), true);
    }

    #[benchmark]
    fn unpause() {
        let caller: T::AccountId = whitelisted_caller();
        appoint::<T>(Role::Pauser, &caller);
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(Paused::<T>::get(), false);
    }

    impl_benchmark_test_suite!(TokenIssuer, crate::mock::new_test_ext(), crate::mock::Test);
}
