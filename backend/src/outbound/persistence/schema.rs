//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; `diesel
//! print-schema` can regenerate them from a live database.

diesel::table! {
    /// Age categories, keyed by slug.
    categories (slug) {
        /// Primary key: URL identifier derived from the name.
        slug -> Varchar,
        /// Display name.
        name -> Varchar,
        /// Inclusive lower bound of the age bracket.
        min_age -> Int2,
        /// Inclusive upper bound of the age bracket.
        max_age -> Int2,
    }
}

diesel::table! {
    /// Gymnasiums where teams practice and play, keyed by slug.
    gymnasiums (slug) {
        slug -> Varchar,
        name -> Varchar,
        address -> Varchar,
        city -> Varchar,
        zip_code -> Varchar,
        /// Playing surface in square metres, when known.
        surface -> Nullable<Int4>,
    }
}

diesel::table! {
    /// Competitive teams, keyed by slug.
    teams (slug) {
        slug -> Varchar,
        name -> Varchar,
        /// References `categories.slug`.
        category -> Varchar,
        federation -> Varchar,
        level -> Varchar,
        sex -> Varchar,
    }
}

diesel::table! {
    /// Weekly reservations for a team.
    time_slots (id) {
        id -> Uuid,
        /// References `teams.slug`.
        team -> Varchar,
        kind -> Varchar,
        day -> Varchar,
        start_time -> Time,
        end_time -> Time,
    }
}

diesel::table! {
    /// Registered players.
    ///
    /// `(first_name, last_name, owner)` carries a unique index.
    players (id) {
        id -> Uuid,
        first_name -> Varchar,
        last_name -> Varchar,
        owner -> Varchar,
        slug -> Varchar,
    }
}

diesel::table! {
    /// Federation licenses held by players.
    licenses (id) {
        id -> Uuid,
        /// References `players.id`.
        player -> Uuid,
        license_number -> Varchar,
        is_payed -> Bool,
    }
}

diesel::table! {
    /// Medical certificates submitted for players.
    medical_certificates (id) {
        id -> Uuid,
        /// References `players.id`.
        player -> Uuid,
        start_date -> Date,
        validity -> Varchar,
    }
}

diesel::joinable!(teams -> categories (category));
diesel::joinable!(time_slots -> teams (team));
diesel::joinable!(licenses -> players (player));
diesel::joinable!(medical_certificates -> players (player));

diesel::allow_tables_to_appear_in_same_query!(
    categories,
    gymnasiums,
    teams,
    time_slots,
    players,
    licenses,
    medical_certificates,
);
