use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Sales,
    Admin,
    SuperAdmin,
}

impl UserRole {
    /// Admins and super admins see the whole team; sales staff see their own work.
    pub const fn visibility(self) -> Visibility {
        match self {
            Self::Admin | Self::SuperAdmin => Visibility::Team,
            Self::Sales => Visibility::Own,
        }
    }
}

/// Capability flag derived from a role once, at the boundary, so the
/// reporting functions never inspect identity themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Team,
    Own,
}

impl Visibility {
    pub const fn is_team(self) -> bool {
        matches!(self, Self::Team)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestLevel {
    Low,
    Medium,
    High,
}

impl InterestLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Denormalized pointer to a user as captured on a record (id plus the
/// display name at the time of writing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: UserId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub role: UserRole,
}

impl User {
    pub fn visibility(&self) -> Visibility {
        self.role.visibility()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub customer_name: String,
    pub business_name: Option<String>,
    pub phone_number: String,
    pub address: String,
    /// Free text; in practice usually a map URL for the location.
    pub notes: Option<String>,
    pub email: Option<String>,
    pub registered_by: Option<UserRef>,
    pub registration_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitReport {
    pub id: ReportId,
    pub timestamp: DateTime<Utc>,
    /// Free text joined to [`Customer::customer_name`] case-insensitively.
    pub customer_name: String,
    pub phone_number: Option<String>,
    pub interest_level: InterestLevel,
    pub location: GeoPoint,
    pub notes: String,
    pub sales_person: UserRef,
}

/// Which salesperson an admin narrowed the recap down to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesSelection {
    #[default]
    All,
    Only(UserId),
}

impl SalesSelection {
    /// `None`, blank and `"all"` select everyone; anything else is a user id.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::All,
            Some(value) if value.eq_ignore_ascii_case("all") => Self::All,
            Some(value) => Self::Only(UserId(value.to_string())),
        }
    }
}
