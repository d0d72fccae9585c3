//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::error::ValueObjectError;

/// Activity identifier value object.
///
/// Represents the backend's identifier for a bookable experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ActivityId(i64);

impl ActivityId {
    /// Create a new ActivityId.
    ///
    /// # Arguments
    ///
    /// * `id` - The activity identifier issued by the backend
    ///
    /// # Returns
    ///
    /// A Result containing the ActivityId or an error if the id is not positive
    pub fn new(id: i64) -> Result<Self, ValueObjectError> {
        if id <= 0 {
            return Err(ValueObjectError::ActivityIdNotPositive(id));
        }
        Ok(Self(id))
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for ActivityId {
    type Error = ValueObjectError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ActivityId> for i64 {
    fn from(id: ActivityId) -> Self {
        id.0
    }
}

impl FromStr for ActivityId {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<i64>()
            .map_err(|_| ValueObjectError::ActivityIdInvalidFormat(s.to_string()))?;
        Self::new(id)
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Create a new UserId. Ids must be positive.
    pub fn new(id: i64) -> Result<Self, ValueObjectError> {
        if id <= 0 {
            return Err(ValueObjectError::UserIdNotPositive(id));
        }
        Ok(Self(id))
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = ValueObjectError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Activity category.
///
/// Wire values are the backend's Korean labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "문화 · 예술")]
    CultureArt,
    #[serde(rename = "식음료")]
    FoodBeverage,
    #[serde(rename = "스포츠")]
    Sports,
    #[serde(rename = "투어")]
    Tour,
    #[serde(rename = "관광")]
    Sightseeing,
    #[serde(rename = "웰빙")]
    Wellbeing,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::CultureArt,
        Category::FoodBeverage,
        Category::Sports,
        Category::Tour,
        Category::Sightseeing,
        Category::Wellbeing,
    ];

    /// Backend wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::CultureArt => "문화 · 예술",
            Category::FoodBeverage => "식음료",
            Category::Sports => "스포츠",
            Category::Tour => "투어",
            Category::Sightseeing => "관광",
            Category::Wellbeing => "웰빙",
        }
    }
}

impl FromStr for Category {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ValueObjectError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation lifecycle status as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Declined,
    Canceled,
    Completed,
}

impl ReservationStatus {
    /// All statuses in display order.
    pub const ALL: [ReservationStatus; 5] = [
        ReservationStatus::Pending,
        ReservationStatus::Confirmed,
        ReservationStatus::Declined,
        ReservationStatus::Canceled,
        ReservationStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Declined => "declined",
            ReservationStatus::Canceled => "canceled",
            ReservationStatus::Completed => "completed",
        }
    }
}

impl FromStr for ReservationStatus {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReservationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValueObjectError::UnknownReservationStatus(s.to_string()))
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
