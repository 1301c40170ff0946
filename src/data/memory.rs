use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::data::error::StoreError;
use crate::data::models::{Address, AddressChanges, NewAddress};
use crate::data::store::AddressStore;

/// In-process store for exercising the HTTP layer without a database.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryTable>,
}

#[derive(Default)]
struct MemoryTable {
    last_id: i32,
    rows: BTreeMap<i32, Address>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

impl AddressStore for MemoryStore {
    fn create(&self, new_address: &NewAddress) -> Result<Address, StoreError> {
        let mut table = self.inner.lock().unwrap();
        table.last_id += 1;
        let address = Address {
            id: table.last_id,
            street_address: new_address.street_address.clone(),
            city: new_address.city.clone(),
            state: new_address.state.clone(),
            postal_code: new_address.postal_code.clone(),
            latitude: new_address.latitude,
            longitude: new_address.longitude,
        };
        table.rows.insert(address.id, address.clone());
        Ok(address)
    }

    fn find(&self, id: i32) -> Result<Address, StoreError> {
        let table = self.inner.lock().unwrap();
        table.rows.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    fn update(&self, id: i32, changes: &AddressChanges) -> Result<Address, StoreError> {
        let mut table = self.inner.lock().unwrap();
        let row = table.rows.get_mut(&id).ok_or(StoreError::NotFound)?;
        let mut address = row.clone();
        changes.apply(&mut address);
        *row = address.clone();
        Ok(address)
    }

    fn delete(&self, id: i32) -> Result<(), StoreError> {
        let mut table = self.inner.lock().unwrap();
        table.rows.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }
}

/// Store whose connection is always broken.
pub struct FailingStore;

impl AddressStore for FailingStore {
    fn create(&self, _new_address: &NewAddress) -> Result<Address, StoreError> {
        Err(StoreError::Query(diesel::result::Error::RollbackTransaction))
    }

    fn find(&self, _id: i32) -> Result<Address, StoreError> {
        Err(StoreError::Query(diesel::result::Error::RollbackTransaction))
    }

    fn update(&self, _id: i32, _changes: &AddressChanges) -> Result<Address, StoreError> {
        Err(StoreError::Query(diesel::result::Error::RollbackTransaction))
    }

    fn delete(&self, _id: i32) -> Result<(), StoreError> {
        Err(StoreError::Query(diesel::result::Error::RollbackTransaction))
    }
}
