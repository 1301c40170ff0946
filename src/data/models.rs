use serde::{Deserialize, Serialize};

use crate::data::schema::addresses;

#[derive(Queryable, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Address {
    pub id: i32,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Create payload. The id is assigned by the database, so any `id`
/// sent by a client is ignored along with other unknown fields.
#[derive(Insertable, AsChangeset, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[table_name = "addresses"]
pub struct NewAddress {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Address> for NewAddress {
    fn from(address: Address) -> Self {
        NewAddress {
            street_address: address.street_address,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
            latitude: address.latitude,
            longitude: address.longitude,
        }
    }
}

/// Partial update payload. Absent fields (and explicit `null`s) leave the
/// stored value untouched.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AddressChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl AddressChanges {
    pub fn is_empty(&self) -> bool {
        self.street_address.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.postal_code.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
    }

    /// Copies every present field onto `address`. The id is never touched.
    pub fn apply(&self, address: &mut Address) {
        if let Some(street_address) = &self.street_address {
            address.street_address = street_address.clone();
        }
        if let Some(city) = &self.city {
            address.city = city.clone();
        }
        if let Some(state) = &self.state {
            address.state = state.clone();
        }
        if let Some(postal_code) = &self.postal_code {
            address.postal_code = postal_code.clone();
        }
        if let Some(latitude) = self.latitude {
            address.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            address.longitude = longitude;
        }
    }
}
