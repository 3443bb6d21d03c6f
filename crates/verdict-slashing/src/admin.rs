// crates/verdict-slashing/src/admin.rs
//
// Admin registry.
//
// Admins skip the earned-stake requirement and settle an argument with a
// single flag. The list lives inside `Params` and keeps insertion order.
// While it is empty anyone may add the first admin.

use verdict_core::{Address, KvStore};

use crate::error::SlashError;
use crate::keeper::SlashKeeper;
use crate::keys;

impl<'a, S: KvStore> SlashKeeper<'a, S> {
    /// Grant admin rights to `admin`. Adding an existing admin is a no-op.
    pub fn add_admin(&self, admin: Address, requester: &Address) -> Result<(), SlashError> {
        let mut params = self.params()?;
        if !params.slash_admins.is_empty() && !params.is_admin(requester) {
            return Err(SlashError::Unauthorized(*requester));
        }
        if params.is_admin(&admin) {
            return Ok(());
        }

        params.slash_admins.push(admin);
        self.write_json(keys::PARAMS_KEY, &params)?;
        tracing::info!(%admin, %requester, "Added slash admin");
        Ok(())
    }

    /// Revoke admin rights. Only an existing admin may do this, and removing
    /// the last admin reopens bootstrap.
    pub fn remove_admin(&self, admin: &Address, remover: &Address) -> Result<(), SlashError> {
        let mut params = self.params()?;
        if !params.is_admin(remover) {
            return Err(SlashError::Unauthorized(*remover));
        }

        params.slash_admins.retain(|existing| existing != admin);
        self.write_json(keys::PARAMS_KEY, &params)?;
        tracing::info!(%admin, %remover, "Removed slash admin");
        Ok(())
    }

    pub fn admins(&self) -> Result<Vec<Address>, SlashError> {
        Ok(self.params()?.slash_admins)
    }
}

#[cfg(test)]
mod tests {
    use verdict_store::MemStore;

    use super::*;
    use crate::testing::Unused;

    fn addr(byte: u8) -> Address {
        Address::new([byte; 32])
    }

    #[test]
    fn test_bootstrap_then_restricted() {
        let store = MemStore::new();
        let keeper = SlashKeeper::new(&store, &Unused, &Unused, &Unused, &Unused);

        keeper.add_admin(addr(1), &addr(7)).unwrap();
        assert_eq!(keeper.admins().unwrap(), vec![addr(1)]);

        let err = keeper.add_admin(addr(2), &addr(7)).unwrap_err();
        assert_eq!(err, SlashError::Unauthorized(addr(7)));
        assert_eq!(keeper.admins().unwrap(), vec![addr(1)]);

        keeper.add_admin(addr(2), &addr(1)).unwrap();
        assert_eq!(keeper.admins().unwrap(), vec![addr(1), addr(2)]);
    }

    #[test]
    fn test_add_existing_is_noop() {
        let store = MemStore::new();
        let keeper = SlashKeeper::new(&store, &Unused, &Unused, &Unused, &Unused);

        keeper.add_admin(addr(1), &addr(1)).unwrap();
        keeper.add_admin(addr(1), &addr(1)).unwrap();
        assert_eq!(keeper.admins().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_requires_admin() {
        let store = MemStore::new();
        let keeper = SlashKeeper::new(&store, &Unused, &Unused, &Unused, &Unused);
        keeper.add_admin(addr(1), &addr(1)).unwrap();

        let err = keeper.remove_admin(&addr(1), &addr(9)).unwrap_err();
        assert_eq!(err, SlashError::Unauthorized(addr(9)));
        assert_eq!(keeper.admins().unwrap(), vec![addr(1)]);
    }

    #[test]
    fn test_remove_last_admin_reopens_bootstrap() {
        let store = MemStore::new();
        let keeper = SlashKeeper::new(&store, &Unused, &Unused, &Unused, &Unused);
        keeper.add_admin(addr(1), &addr(1)).unwrap();

        keeper.remove_admin(&addr(1), &addr(1)).unwrap();
        assert!(keeper.admins().unwrap().is_empty());

        keeper.add_admin(addr(5), &addr(8)).unwrap();
        assert_eq!(keeper.admins().unwrap(), vec![addr(5)]);
    }

    #[test]
    fn test_other_params_survive_admin_edits() {
        let store = MemStore::new();
        let keeper = SlashKeeper::new(&store, &Unused, &Unused, &Unused, &Unused);
        let params = crate::params::Params {
            min_slash_count: 2,
            ..Default::default()
        };
        keeper.initialize(&params).unwrap();

        keeper.add_admin(addr(3), &addr(3)).unwrap();
        let stored = keeper.params().unwrap();
        assert_eq!(stored.min_slash_count, 2);
        assert!(stored.is_admin(&addr(3)));
    }
}
