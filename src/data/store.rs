use crate::data::error::StoreError;
use crate::data::models::{Address, AddressChanges, NewAddress};
use crate::data::repo::addresses;
use crate::db::Pool;

/// Storage seam used by the HTTP handlers. Methods block, so callers run
/// them through `web::block`.
pub trait AddressStore: Send + Sync + 'static {
    fn create(&self, new_address: &NewAddress) -> Result<Address, StoreError>;

    fn find(&self, id: i32) -> Result<Address, StoreError>;

    fn update(&self, id: i32, changes: &AddressChanges) -> Result<Address, StoreError>;

    fn delete(&self, id: i32) -> Result<(), StoreError>;
}

/// Postgres-backed store. Every call checks out its own pooled connection,
/// which goes back to the pool when the call returns, error or not.
#[derive(Clone)]
pub struct PgAddressStore {
    pool: Pool,
}

impl PgAddressStore {
    pub fn new(pool: Pool) -> Self {
        PgAddressStore { pool }
    }
}

impl AddressStore for PgAddressStore {
    fn create(&self, new_address: &NewAddress) -> Result<Address, StoreError> {
        let conn = self.pool.get()?;
        addresses::create_address(&conn, new_address)
    }

    fn find(&self, id: i32) -> Result<Address, StoreError> {
        let conn = self.pool.get()?;
        addresses::find_address(&conn, id)
    }

    fn update(&self, id: i32, changes: &AddressChanges) -> Result<Address, StoreError> {
        let conn = self.pool.get()?;
        addresses::update_address(&conn, id, changes)
    }

    fn delete(&self, id: i32) -> Result<(), StoreError> {
        let conn = self.pool.get()?;
        addresses::delete_address(&conn, id)
    }
}
