use crate as pallet_token_issuer;
use crate::{Ledger, MinterAllowance, MinterControllerPairing, TransferGate};
use frame_support::{
    derive_impl,
    dispatch::DispatchResult,
    parameter_types,
    pallet_prelude::ValueQuery,
    storage::with_storage_layer,
    traits::{ConstU32, ConstU64},
    Blake2_128Concat,
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, LookupError, StaticLookup},
    ArithmeticError, BuildStorage, TokenError,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Accounts
pub const OWNER: u64 = 1;
pub const MASTER_MINTER: u64 = 2;
pub const CONTROLLER: u64 = 3;
pub const MINTER: u64 = 4;
pub const PAUSER: u64 = 5;
pub const BLACKLISTER: u64 = 6;
pub const USER: u64 = 10;
pub const USER2: u64 = 11;
pub const ALICE: u64 = 12;
pub const GOVERNANCE: u64 = 100;
/// Rejected by [`CheckedLookup`], standing in for an undecodable address.
pub const MALFORMED: u64 = u64::MAX;

// Assets
pub const USDC: u32 = 1;
pub const OTHER: u32 = 2;

pub const MINTER_ALLOWANCE: u128 = 1_000;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        TokenIssuer: pallet_token_issuer,
    }
);

/// Identity lookup that refuses [`MALFORMED`].
pub struct CheckedLookup;
impl StaticLookup for CheckedLookup {
    type Source = u64;
    type Target = u64;

    fn lookup(s: u64) -> Result<u64, LookupError> {
        if s == MALFORMED {
            Err(LookupError)
        } else {
            Ok(s)
        }
    }

    fn unlookup(t: u64) -> u64 {
        t
    }
}

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = CheckedLookup;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

parameter_types! {
    pub const GovernanceAccount: u64 = GOVERNANCE;
}

pub struct EnsureGovernance;
impl frame_support::traits::EnsureOrigin<RuntimeOrigin> for EnsureGovernance {
    type Success = u64;

    fn try_origin(o: RuntimeOrigin) -> Result<Self::Success, RuntimeOrigin> {
        match o.clone().into() {
            Ok(frame_system::RawOrigin::Signed(account)) if account == GovernanceAccount::get() => {
                Ok(account)
            }
            _ => Err(o),
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<RuntimeOrigin, ()> {
        Ok(RuntimeOrigin::signed(GovernanceAccount::get()))
    }
}

/// Balances of the mock ledger, `(account, asset) -> amount`.
#[frame_support::storage_alias]
pub type LedgerBalances =
    StorageDoubleMap<TestLedger, Blake2_128Concat, u64, Blake2_128Concat, u32, u128, ValueQuery>;

/// Minimal multi-asset ledger. Every transfer is vetted by the token issuer
/// before any balance changes.
pub struct MockLedger;

impl MockLedger {
    pub fn balance(who: u64, asset: u32) -> u128 {
        LedgerBalances::get(who, asset)
    }

    pub fn set_balance(who: u64, asset: u32, amount: u128) {
        LedgerBalances::insert(who, asset, amount);
    }

    /// Gate check, debit and credit apply together or not at all.
    pub fn transfer(from: u64, to: u64, asset: u32, amount: u128) -> DispatchResult {
        with_storage_layer(|| {
            <TokenIssuer as TransferGate<u64, u32>>::ensure_can_transfer(
                &from, &to, &asset, amount,
            )?;
            <Self as Ledger<u64, u32>>::debit(&from, &asset, amount)?;
            <Self as Ledger<u64, u32>>::credit(&to, &asset, amount)
        })
    }
}

impl Ledger<u64, u32> for MockLedger {
    fn credit(who: &u64, asset: &u32, amount: u128) -> DispatchResult {
        LedgerBalances::try_mutate(who, asset, |balance| {
            *balance = balance.checked_add(amount).ok_or(ArithmeticError::Overflow)?;
            Ok(())
        })
    }

    fn debit(who: &u64, asset: &u32, amount: u128) -> DispatchResult {
        LedgerBalances::try_mutate(who, asset, |balance| {
            *balance = balance.checked_sub(amount).ok_or(TokenError::FundsUnavailable)?;
            Ok(())
        })
    }
}

#[cfg(feature = "runtime-benchmarks")]
pub struct BenchmarkHelper;
#[cfg(feature = "runtime-benchmarks")]
impl crate::traits::BenchmarkHelper<u32> for BenchmarkHelper {
    fn minting_denom() -> u32 {
        USDC
    }
}

impl pallet_token_issuer::Config for Test {
    type AssetId = u32;
    type Ledger = MockLedger;
    type GovernanceOrigin = EnsureGovernance;
    type WeightInfo = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = BenchmarkHelper;
}

/// Fully staffed hierarchy: every role appointed and `CONTROLLER` paired with
/// `MINTER`, which holds [`MINTER_ALLOWANCE`].
pub fn default_genesis() -> pallet_token_issuer::GenesisConfig<Test> {
    pallet_token_issuer::GenesisConfig::<Test> {
        owner: Some(OWNER),
        pending_owner: None,
        master_minter: Some(MASTER_MINTER),
        pauser: Some(PAUSER),
        blacklister: Some(BLACKLISTER),
        paused: false,
        minting_denom: Some(USDC),
        blacklisted_list: vec![],
        minters_list: vec![MinterAllowance { minter: MINTER, allowance: MINTER_ALLOWANCE }],
        minter_controller_list: vec![MinterControllerPairing {
            controller: CONTROLLER,
            minter: MINTER,
        }],
    }
}

/// Only the owner and the minting denomination, as on a fresh chain.
pub fn owner_only_genesis() -> pallet_token_issuer::GenesisConfig<Test> {
    pallet_token_issuer::GenesisConfig::<Test> {
        owner: Some(OWNER),
        minting_denom: Some(USDC),
        ..Default::default()
    }
}

// Build genesis storage according to the mock runtime.
pub fn ext_with_genesis(
    genesis: pallet_token_issuer::GenesisConfig<Test>,
) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    genesis.assimilate_storage(&mut t).unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are only recorded from block 1
    ext.execute_with(|| System::set_block_number(1));
    ext
}

pub fn new_test_ext() -> sp_io::TestExternalities {
    ext_with_genesis(default_genesis())
}

pub fn owner_only_ext() -> sp_io::TestExternalities {
    ext_with_genesis(owner_only_genesis())
}
