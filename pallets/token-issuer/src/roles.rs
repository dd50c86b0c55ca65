//! Role registry and the authorization predicates built on it.
//!
//! Everything here is storage-free: the pallet loads the [`RoleRegistry`] once
//! per call and asks it whether the signer may perform an [`Operation`]. That
//! keeps the hierarchy
//!
//! ```text
//! Owner ─┬─ MasterMinter ── MinterController ── Minter
//!        ├─ Pauser
//!        └─ Blacklister
//! ```
//!
//! testable without a runtime.

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::DefaultNoBound;
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// A privileged singleton role.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum Role {
    Owner,
    /// Account nominated by the owner that has not accepted yet.
    PendingOwner,
    MasterMinter,
    Pauser,
    Blacklister,
}

/// Operations gated by a singleton role.
///
/// Minter configuration is gated by the controller pairing instead, see
/// [`authorize_controller`].
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum Operation {
    UpdateOwner,
    AcceptOwner,
    UpdateMasterMinter,
    UpdatePauser,
    UpdateBlacklister,
    ConfigureMinterController,
    RemoveMinterController,
    Blacklist,
    Unblacklist,
    Pause,
    Unpause,
}

impl Operation {
    /// The role a caller must hold to perform this operation.
    pub fn required_role(self) -> Role {
        match self {
            Operation::UpdateOwner
            | Operation::UpdateMasterMinter
            | Operation::UpdatePauser
            | Operation::UpdateBlacklister => Role::Owner,
            Operation::AcceptOwner => Role::PendingOwner,
            Operation::ConfigureMinterController | Operation::RemoveMinterController => {
                Role::MasterMinter
            }
            Operation::Blacklist | Operation::Unblacklist => Role::Blacklister,
            Operation::Pause | Operation::Unpause => Role::Pauser,
        }
    }
}

/// Why an authorization check failed.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum AuthorizationError {
    /// The required role has never been appointed.
    RoleNotConfigured,
    /// The role is held by someone other than the caller.
    Unauthorized,
}

/// Holders of every singleton role. `None` means "not appointed".
#[derive(
    Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen, DefaultNoBound,
)]
pub struct RoleRegistry<AccountId> {
    pub owner: Option<AccountId>,
    pub pending_owner: Option<AccountId>,
    pub master_minter: Option<AccountId>,
    pub pauser: Option<AccountId>,
    pub blacklister: Option<AccountId>,
}

impl<AccountId: PartialEq> RoleRegistry<AccountId> {
    /// Current holder of `role`, if any.
    pub fn holder(&self, role: Role) -> Option<&AccountId> {
        match role {
            Role::Owner => self.owner.as_ref(),
            Role::PendingOwner => self.pending_owner.as_ref(),
            Role::MasterMinter => self.master_minter.as_ref(),
            Role::Pauser => self.pauser.as_ref(),
            Role::Blacklister => self.blacklister.as_ref(),
        }
    }

    /// Replace the holder of `role`, returning the previous one.
    pub fn assign(&mut self, role: Role, who: Option<AccountId>) -> Option<AccountId> {
        let slot = match role {
            Role::Owner => &mut self.owner,
            Role::PendingOwner => &mut self.pending_owner,
            Role::MasterMinter => &mut self.master_minter,
            Role::Pauser => &mut self.pauser,
            Role::Blacklister => &mut self.blacklister,
        };
        core::mem::replace(slot, who)
    }

    /// Check that `caller` holds the role `operation` requires.
    pub fn authorize(
        &self,
        caller: &AccountId,
        operation: Operation,
    ) -> Result<(), AuthorizationError> {
        match self.holder(operation.required_role()) {
            None => Err(AuthorizationError::RoleNotConfigured),
            Some(holder) if holder == caller => Ok(()),
            Some(_) => Err(AuthorizationError::Unauthorized),
        }
    }

    pub fn is_authorized(&self, caller: &AccountId, operation: Operation) -> bool {
        self.authorize(caller, operation).is_ok()
    }
}

/// Check that a caller whose controller pairing is `paired_minter` may
/// configure `minter`.
///
/// A caller without any pairing has no controller role at all.
pub fn authorize_controller<AccountId: PartialEq>(
    paired_minter: Option<&AccountId>,
    minter: &AccountId,
) -> Result<(), AuthorizationError> {
    match paired_minter {
        None => Err(AuthorizationError::RoleNotConfigured),
        Some(paired) if paired == minter => Ok(()),
        Some(_) => Err(AuthorizationError::Unauthorized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: u64 = 1;
    const MASTER_MINTER: u64 = 2;
    const PAUSER: u64 = 3;
    const BLACKLISTER: u64 = 4;
    const NOMINEE: u64 = 5;
    const STRANGER: u64 = 99;

    const ALL_OPERATIONS: [Operation; 11] = [
        Operation::UpdateOwner,
        Operation::AcceptOwner,
        Operation::UpdateMasterMinter,
        Operation::UpdatePauser,
        Operation::UpdateBlacklister,
        Operation::ConfigureMinterController,
        Operation::RemoveMinterController,
        Operation::Blacklist,
        Operation::Unblacklist,
        Operation::Pause,
        Operation::Unpause,
    ];

    fn full_registry() -> RoleRegistry<u64> {
        RoleRegistry {
            owner: Some(OWNER),
            pending_owner: Some(NOMINEE),
            master_minter: Some(MASTER_MINTER),
            pauser: Some(PAUSER),
            blacklister: Some(BLACKLISTER),
        }
    }

    #[test]
    fn every_operation_is_allowed_only_for_its_role_holder() {
        let registry = full_registry();
        let accounts = [OWNER, MASTER_MINTER, PAUSER, BLACKLISTER, NOMINEE, STRANGER];

        for operation in ALL_OPERATIONS {
            let holder = *registry.holder(operation.required_role()).unwrap();
            for caller in accounts {
                assert_eq!(
                    registry.is_authorized(&caller, operation),
                    caller == holder,
                    "{operation:?} by {caller}"
                );
            }
        }
    }

    #[test]
    fn non_holder_is_unauthorized() {
        let registry = full_registry();
        assert_eq!(
            registry.authorize(&STRANGER, Operation::UpdateMasterMinter),
            Err(AuthorizationError::Unauthorized)
        );
        // Holding a different privileged role does not help.
        assert_eq!(
            registry.authorize(&PAUSER, Operation::Blacklist),
            Err(AuthorizationError::Unauthorized)
        );
    }

    #[test]
    fn unappointed_role_is_not_configured() {
        let registry = RoleRegistry::<u64> { owner: Some(OWNER), ..Default::default() };

        for operation in ALL_OPERATIONS {
            let expected = if operation.required_role() == Role::Owner {
                Ok(())
            } else {
                Err(AuthorizationError::RoleNotConfigured)
            };
            assert_eq!(registry.authorize(&OWNER, operation), expected, "{operation:?}");
        }
    }

    #[test]
    fn assign_returns_previous_holder() {
        let mut registry = full_registry();

        assert_eq!(registry.assign(Role::Pauser, Some(STRANGER)), Some(PAUSER));
        assert_eq!(registry.holder(Role::Pauser), Some(&STRANGER));

        assert_eq!(registry.assign(Role::PendingOwner, None), Some(NOMINEE));
        assert_eq!(registry.holder(Role::PendingOwner), None);

        // Other roles untouched
        assert_eq!(registry.holder(Role::Owner), Some(&OWNER));
        assert_eq!(registry.holder(Role::Blacklister), Some(&BLACKLISTER));
    }

    #[test]
    fn controller_may_only_configure_its_paired_minter() {
        assert_eq!(authorize_controller(Some(&10u64), &10), Ok(()));
        assert_eq!(authorize_controller(Some(&10u64), &11), Err(AuthorizationError::Unauthorized));
        assert_eq!(
            authorize_controller::<u64>(None, &10),
            Err(AuthorizationError::RoleNotConfigured)
        );
    }
}
