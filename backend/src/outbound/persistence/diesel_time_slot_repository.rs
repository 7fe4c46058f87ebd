//! PostgreSQL-backed `TimeSlotRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{RepositoryError, TimeSlotRepository};
use crate::domain::{Day, Slug, TimeSlot, TimeSlotKind};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewTimeSlotRow, TimeSlotRow};
use super::pool::DbPool;
use super::schema::time_slots;

/// Diesel-backed implementation of the `TimeSlotRepository` port.
#[derive(Clone)]
pub struct DieselTimeSlotRepository {
    pool: DbPool,
}

impl DieselTimeSlotRepository {
    /// Create a repository backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn kind_to_str(kind: TimeSlotKind) -> &'static str {
    match kind {
        TimeSlotKind::Practice => "practice",
        TimeSlotKind::Match => "match",
    }
}

fn parse_kind(value: &str) -> Result<TimeSlotKind, RepositoryError> {
    match value {
        "practice" => Ok(TimeSlotKind::Practice),
        "match" => Ok(TimeSlotKind::Match),
        other => Err(RepositoryError::query(format!(
            "unrecognised time slot kind '{other}'"
        ))),
    }
}

fn day_to_str(day: Day) -> &'static str {
    match day {
        Day::Monday => "monday",
        Day::Tuesday => "tuesday",
        Day::Wednesday => "wednesday",
        Day::Thursday => "thursday",
        Day::Friday => "friday",
        Day::Saturday => "saturday",
        Day::Sunday => "sunday",
    }
}

fn parse_day(value: &str) -> Result<Day, RepositoryError> {
    match value {
        "monday" => Ok(Day::Monday),
        "tuesday" => Ok(Day::Tuesday),
        "wednesday" => Ok(Day::Wednesday),
        "thursday" => Ok(Day::Thursday),
        "friday" => Ok(Day::Friday),
        "saturday" => Ok(Day::Saturday),
        "sunday" => Ok(Day::Sunday),
        other => Err(RepositoryError::query(format!(
            "unrecognised day value '{other}'"
        ))),
    }
}

fn row_to_slot(row: TimeSlotRow) -> Result<TimeSlot, RepositoryError> {
    let team = Slug::new(row.team)
        .map_err(|err| RepositoryError::query(format!("stored team slug is invalid: {err}")))?;
    Ok(TimeSlot {
        id: row.id,
        team,
        kind: parse_kind(&row.kind)?,
        day: parse_day(&row.day)?,
        start: row.start_time,
        end: row.end_time,
    })
}

fn slot_to_row(slot: &TimeSlot) -> NewTimeSlotRow<'_> {
    NewTimeSlotRow {
        id: slot.id,
        team: slot.team.as_ref(),
        kind: kind_to_str(slot.kind),
        day: day_to_str(slot.day),
        start_time: slot.start,
        end_time: slot.end,
    }
}

#[async_trait]
impl TimeSlotRepository for DieselTimeSlotRepository {
    async fn list(&self) -> Result<Vec<TimeSlot>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TimeSlotRow> = time_slots::table
            .order(time_slots::id.asc())
            .select(TimeSlotRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_slot).collect()
    }

    async fn create(&self, slot: &TimeSlot) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(time_slots::table)
            .values(slot_to_row(slot))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TimeSlot>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TimeSlotRow> = time_slots::table
            .find(id)
            .select(TimeSlotRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_slot).transpose()
    }

    async fn update(&self, id: Uuid, slot: &TimeSlot) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(time_slots::table.find(id))
            .set(slot_to_row(slot))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(time_slots::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rstest::rstest;

    #[rstest]
    #[case("practice", TimeSlotKind::Practice)]
    #[case("match", TimeSlotKind::Match)]
    fn kind_codes_round_trip(#[case] code: &str, #[case] kind: TimeSlotKind) {
        assert_eq!(parse_kind(code).expect("kind"), kind);
        assert_eq!(kind_to_str(kind), code);
    }

    #[rstest]
    fn rows_round_trip_through_the_domain_type() {
        let row = TimeSlotRow {
            id: Uuid::new_v4(),
            team: "les-aigles".to_owned(),
            kind: "practice".to_owned(),
            day: "tuesday".to_owned(),
            start_time: NaiveTime::from_hms_opt(18, 30, 0).expect("time"),
            end_time: NaiveTime::from_hms_opt(20, 0, 0).expect("time"),
        };

        let slot = row_to_slot(row).expect("slot");
        assert_eq!(slot.day, Day::Tuesday);
        assert_eq!(slot_to_row(&slot).day, "tuesday");
    }
}
