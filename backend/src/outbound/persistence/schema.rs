//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly; Diesel uses
//! them for compile-time query checking.

diesel::table! {
    /// Event categories, e.g. "Music" or "Lecture".
    categories (id) {
        id -> Int4,
        name -> Varchar,
        description -> Varchar,
    }
}

diesel::table! {
    /// Venues with a flat postal address and seating capacity.
    locations (id) {
        id -> Int4,
        name -> Varchar,
        street -> Varchar,
        /// Street number stored as text ("12A", "s/n").
        number -> Varchar,
        neighborhood -> Varchar,
        city -> Varchar,
        state -> Varchar,
        zip_code -> Varchar,
        reference_point -> Varchar,
        capacity -> Int4,
    }
}

diesel::table! {
    /// Resources or conditions an event may require.
    requirements (id) {
        id -> Int4,
        description -> Varchar,
    }
}

diesel::table! {
    /// Registered users. `username` and `email` are unique.
    users (id) {
        id -> Uuid,
        name -> Varchar,
        username -> Varchar,
        email -> Varchar,
        password_hash -> Varchar,
        /// One of `STUDENT`, `PROFESSOR`, `ORGANIZER`, `ADMIN`.
        role -> Varchar,
    }
}

diesel::allow_tables_to_appear_in_same_query!(categories, locations, requirements, users);
