use std::fmt::Formatter;

#[derive(Debug)]
pub enum StoreError {
    /// No address row with the requested id
    NotFound,
    /// Couldn't check out a connection from the pool
    Pool(r2d2::Error),
    Query(diesel::result::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "Address not found"),
            StoreError::Pool(inner) => {
                write!(f, "Store error: connection unavailable: {}", inner)
            },
            StoreError::Query(inner) => {
                write!(f, "Store error: query failed: {}", inner)
            },
        }
    }
}

impl From<diesel::result::Error> for StoreError {
    fn from(error: diesel::result::Error) -> Self {
        match error {
            diesel::result::Error::NotFound => StoreError::NotFound,
            other => StoreError::Query(other),
        }
    }
}

impl From<r2d2::Error> for StoreError {
    fn from(error: r2d2::Error) -> Self {
        StoreError::Pool(error)
    }
}
