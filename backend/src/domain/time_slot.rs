//! Weekly time slots booked for a team.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::slug::Slug;

/// What a time slot is reserved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlotKind {
    Practice,
    Match,
}

/// Day of the week a slot recurs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        };
        f.write_str(name)
    }
}

/// Validation errors returned by [`TimeSlot::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeSlotValidationError {
    EmptyInterval { start: NaiveTime, end: NaiveTime },
}

impl fmt::Display for TimeSlotValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInterval { start, end } => {
                write!(f, "slot must start before it ends ({start} >= {end})")
            }
        }
    }
}

impl std::error::Error for TimeSlotValidationError {}

/// Recurring weekly reservation for a team.
///
/// ## Invariants
/// - `start < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct TimeSlot {
    /// Stable identifier assigned at creation.
    pub id: Uuid,
    /// Slug of the team the slot belongs to.
    pub team: Slug,
    /// What the slot is reserved for.
    pub kind: TimeSlotKind,
    /// Day of the week the slot recurs on.
    pub day: Day,
    /// Start of the slot.
    #[schema(value_type = String, example = "18:30:00")]
    pub start: NaiveTime,
    /// End of the slot.
    #[schema(value_type = String, example = "20:00:00")]
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Build a time slot with a fresh identifier.
    pub fn new(
        team: Slug,
        kind: TimeSlotKind,
        day: Day,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self, TimeSlotValidationError> {
        if start >= end {
            return Err(TimeSlotValidationError::EmptyInterval { start, end });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            team,
            kind,
            day,
            start,
            end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn team() -> Slug {
        Slug::new("les-aigles").expect("slug")
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
    }

    #[rstest]
    fn ordered_interval_is_accepted() {
        let slot = TimeSlot::new(team(), TimeSlotKind::Practice, Day::Tuesday, at(18, 30), at(20, 0))
            .expect("slot");
        assert_eq!(slot.day, Day::Tuesday);
    }

    #[rstest]
    #[case(at(20, 0), at(18, 30))]
    #[case(at(19, 0), at(19, 0))]
    fn empty_or_inverted_interval_is_rejected(#[case] start: NaiveTime, #[case] end: NaiveTime) {
        let err = TimeSlot::new(team(), TimeSlotKind::Match, Day::Saturday, start, end)
            .expect_err("empty interval");
        assert_eq!(err, TimeSlotValidationError::EmptyInterval { start, end });
    }
}
