table! {
    addresses (id) {
        id -> Int4,
        street_address -> Text,
        city -> Text,
        state -> Text,
        postal_code -> Text,
        latitude -> Float8,
        longitude -> Float8,
    }
}
