use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::data::error::StoreError;
use crate::data::models::{Address, AddressChanges, NewAddress};

pub fn create_address(
    conn: &PgConnection,
    new_address: &NewAddress
) -> Result<Address, StoreError> {
    use crate::data::schema::addresses::dsl::*;

    let address = diesel::insert_into(addresses)
        .values(new_address)
        .get_result(conn)?;
    Ok(address)
}

pub fn find_address(
    conn: &PgConnection,
    address_id: i32
) -> Result<Address, StoreError> {
    use crate::data::schema::addresses::dsl::*;

    addresses
        .find(address_id)
        .first(conn)
        .optional()?
        .ok_or(StoreError::NotFound)
}

/// Merges `changes` onto the stored row and writes the result back, all in
/// one transaction. A missing row aborts before anything is written.
pub fn update_address(
    conn: &PgConnection,
    address_id: i32,
    changes: &AddressChanges
) -> Result<Address, StoreError> {
    use crate::data::schema::addresses::dsl::*;

    conn.transaction::<_, StoreError, _>(|| {
        let mut address = find_address(conn, address_id)?;
        if changes.is_empty() {
            return Ok(address);
        }
        changes.apply(&mut address);

        let updated = diesel::update(addresses.find(address_id))
            .set(&NewAddress::from(address))
            .get_result(conn)?;
        Ok(updated)
    })
}

pub fn delete_address(
    conn: &PgConnection,
    address_id: i32
) -> Result<(), StoreError> {
    use crate::data::schema::addresses::dsl::*;

    let deleted = diesel::delete(addresses.find(address_id)).execute(conn)?;
    if deleted == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}
