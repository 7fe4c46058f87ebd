//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and are
//! never exposed to the domain; each repository translates between its row
//! structs and the domain type it stores.

use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{
    categories, gymnasiums, licenses, medical_certificates, players, teams, time_slots,
};

/// Row struct for reading from the categories table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub slug: String,
    pub name: String,
    pub min_age: i16,
    pub max_age: i16,
}

/// Insertable and changeset struct for category records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = categories)]
pub(crate) struct NewCategoryRow<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    pub min_age: i16,
    pub max_age: i16,
}

/// Row struct for reading from the gymnasiums table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = gymnasiums)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct GymnasiumRow {
    pub slug: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub surface: Option<i32>,
}

/// Insertable and changeset struct for gymnasium records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = gymnasiums)]
pub(crate) struct NewGymnasiumRow<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub zip_code: &'a str,
    pub surface: Option<i32>,
}

/// Row struct for reading from the teams table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = teams)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TeamRow {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub federation: String,
    pub level: String,
    pub sex: String,
}

/// Insertable and changeset struct for team records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = teams)]
pub(crate) struct NewTeamRow<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    pub category: &'a str,
    pub federation: &'a str,
    pub level: &'a str,
    pub sex: &'a str,
}

/// Row struct for reading from the time_slots table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = time_slots)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TimeSlotRow {
    pub id: Uuid,
    pub team: String,
    pub kind: String,
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Insertable and changeset struct for time-slot records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = time_slots)]
pub(crate) struct NewTimeSlotRow<'a> {
    pub id: Uuid,
    pub team: &'a str,
    pub kind: &'a str,
    pub day: &'a str,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Row struct for reading from the players table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = players)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PlayerRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub owner: String,
    pub slug: String,
}

/// Insertable and changeset struct for player records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = players)]
pub(crate) struct NewPlayerRow<'a> {
    pub id: Uuid,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub owner: &'a str,
    pub slug: &'a str,
}

/// Row struct for reading from the licenses table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = licenses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct LicenseRow {
    pub id: Uuid,
    pub player: Uuid,
    pub license_number: String,
    pub is_payed: bool,
}

/// Insertable and changeset struct for license records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = licenses)]
pub(crate) struct NewLicenseRow<'a> {
    pub id: Uuid,
    pub player: Uuid,
    pub license_number: &'a str,
    pub is_payed: bool,
}

/// Row struct for reading from the medical_certificates table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = medical_certificates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MedicalCertificateRow {
    pub id: Uuid,
    pub player: Uuid,
    pub start_date: NaiveDate,
    pub validity: String,
}

/// Insertable and changeset struct for medical-certificate records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = medical_certificates)]
pub(crate) struct NewMedicalCertificateRow<'a> {
    pub id: Uuid,
    pub player: Uuid,
    pub start_date: NaiveDate,
    pub validity: &'a str,
}
