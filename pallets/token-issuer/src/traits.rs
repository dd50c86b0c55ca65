//! Seams between the pallet and the account ledger it sits on.

use frame_support::dispatch::DispatchResult;

/// The external account ledger that owns balances.
///
/// The pallet only ever asks it to create or destroy units of the minting
/// denomination; transfers stay entirely inside the ledger. The `mint` and
/// `burn` weights include one `credit` or `debit` as measured on the
/// benchmarked runtime, so a costlier ledger needs its weights regenerated.
pub trait Ledger<AccountId, AssetId> {
    /// Add `amount` of `asset` to `who`.
    fn credit(who: &AccountId, asset: &AssetId, amount: u128) -> DispatchResult;

    /// Remove `amount` of `asset` from `who`. Must fail if the balance is short.
    fn debit(who: &AccountId, asset: &AssetId, amount: u128) -> DispatchResult;
}

/// Hook the ledger must call exactly once, synchronously, before committing
/// any transfer of any asset.
///
/// Returning an error vetoes the transfer. Implementations never move funds.
pub trait TransferGate<AccountId, AssetId> {
    fn ensure_can_transfer(
        from: &AccountId,
        to: &AccountId,
        asset: &AssetId,
        amount: u128,
    ) -> DispatchResult;
}

/// Approves everything. For runtimes that have no issuance controls.
impl<AccountId, AssetId> TransferGate<AccountId, AssetId> for () {
    fn ensure_can_transfer(_: &AccountId, _: &AccountId, _: &AssetId, _: u128) -> DispatchResult {
        Ok(())
    }
}

/// Supplies benchmark fixtures the pallet cannot construct generically.
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AssetId> {
    /// The asset id to install as minting denomination.
    fn minting_denom() -> AssetId;
}

#[cfg(feature = "runtime-benchmarks")]
impl<AssetId: From<u32>> BenchmarkHelper<AssetId> for () {
    fn minting_denom() -> AssetId {
        AssetId::from(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_gate_approves_every_transfer() {
        for (from, to, asset) in [(1u64, 2u64, 0u32), (2, 1, 7), (3, 3, u32::MAX)] {
            assert_eq!(
                <() as TransferGate<u64, u32>>::ensure_can_transfer(&from, &to, &asset, 1),
                Ok(())
            );
        }
        assert_eq!(
            <() as TransferGate<u64, u32>>::ensure_can_transfer(&1, &2, &0, u128::MAX),
            Ok(())
        );
    }
}
