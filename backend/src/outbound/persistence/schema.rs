//! Diesel table definitions. Must match `backend/migrations`.

diesel::table! {
    /// Sample user records.
    users (id) {
        id -> Uuid,
        name -> Varchar,
        email -> Varchar,
        age -> Int4,
        /// Insertion time; breaks ties between equal ages.
        created_at -> Timestamptz,
    }
}
