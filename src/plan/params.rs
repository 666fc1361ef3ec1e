//! Parameter set for the business plan and lenient number parsing

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseValueError, PlanError};

/// Editable inputs to the projection
///
/// All amounts are in the base currency (EUR). Fields missing from a
/// deserialized record are zero, matching how the calculator treats them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanParams {
    /// Value earned per trip
    #[serde(default)]
    pub avg_trip_value: f64,

    /// Trips completed per working day
    #[serde(default)]
    pub trips_per_day: f64,

    /// Working days in a month (nominally 0-31, not enforced)
    #[serde(default)]
    pub work_days_per_month: f64,

    /// Fuel cost per kilometre driven
    #[serde(default)]
    pub fuel_cost_per_km: f64,

    /// Average distance of one trip in kilometres
    #[serde(default)]
    pub avg_km_per_trip: f64,

    /// Fixed monthly maintenance
    #[serde(default)]
    pub maintenance_cost: f64,

    /// Fixed monthly insurance
    #[serde(default)]
    pub insurance_cost: f64,

    /// Any other fixed monthly cost (negative for a rebate)
    #[serde(default)]
    pub other_costs: f64,
}

impl PlanParams {
    /// All fields zero
    pub fn zeroed() -> Self {
        Self {
            avg_trip_value: 0.0,
            trips_per_day: 0.0,
            work_days_per_month: 0.0,
            fuel_cost_per_km: 0.0,
            avg_km_per_trip: 0.0,
            maintenance_cost: 0.0,
            insurance_cost: 0.0,
            other_costs: 0.0,
        }
    }

    /// Read a field by identifier
    pub fn get(&self, field: ParamField) -> f64 {
        match field {
            ParamField::AvgTripValue => self.avg_trip_value,
            ParamField::TripsPerDay => self.trips_per_day,
            ParamField::WorkDaysPerMonth => self.work_days_per_month,
            ParamField::FuelCostPerKm => self.fuel_cost_per_km,
            ParamField::AvgKmPerTrip => self.avg_km_per_trip,
            ParamField::MaintenanceCost => self.maintenance_cost,
            ParamField::InsuranceCost => self.insurance_cost,
            ParamField::OtherCosts => self.other_costs,
        }
    }

    /// Overwrite a field by identifier
    pub fn set(&mut self, field: ParamField, value: f64) {
        let slot = match field {
            ParamField::AvgTripValue => &mut self.avg_trip_value,
            ParamField::TripsPerDay => &mut self.trips_per_day,
            ParamField::WorkDaysPerMonth => &mut self.work_days_per_month,
            ParamField::FuelCostPerKm => &mut self.fuel_cost_per_km,
            ParamField::AvgKmPerTrip => &mut self.avg_km_per_trip,
            ParamField::MaintenanceCost => &mut self.maintenance_cost,
            ParamField::InsuranceCost => &mut self.insurance_cost,
            ParamField::OtherCosts => &mut self.other_costs,
        };
        *slot = value;
    }

    /// Copy with one field replaced
    pub fn with(mut self, field: ParamField, value: f64) -> Self {
        self.set(field, value);
        self
    }

    /// True when every field is a finite number
    pub fn is_finite(&self) -> bool {
        ParamField::ALL.iter().all(|&f| self.get(f).is_finite())
    }
}

impl Default for PlanParams {
    /// Starting values shown to a driver on first use
    fn default() -> Self {
        Self {
            avg_trip_value: 15.50,
            trips_per_day: 20.0,
            work_days_per_month: 22.0,
            fuel_cost_per_km: 0.08,
            avg_km_per_trip: 8.0,
            maintenance_cost: 200.0,
            insurance_cost: 100.0,
            other_costs: 150.0,
        }
    }
}

/// Identifier of one editable field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamField {
    AvgTripValue,
    TripsPerDay,
    WorkDaysPerMonth,
    FuelCostPerKm,
    AvgKmPerTrip,
    MaintenanceCost,
    InsuranceCost,
    OtherCosts,
}

impl ParamField {
    pub const ALL: [ParamField; 8] = [
        ParamField::AvgTripValue,
        ParamField::TripsPerDay,
        ParamField::WorkDaysPerMonth,
        ParamField::FuelCostPerKm,
        ParamField::AvgKmPerTrip,
        ParamField::MaintenanceCost,
        ParamField::InsuranceCost,
        ParamField::OtherCosts,
    ];

    /// Name used in the persisted record and by the UI layer
    pub fn name(self) -> &'static str {
        match self {
            ParamField::AvgTripValue => "avgTripValue",
            ParamField::TripsPerDay => "tripsPerDay",
            ParamField::WorkDaysPerMonth => "workDaysPerMonth",
            ParamField::FuelCostPerKm => "fuelCostPerKm",
            ParamField::AvgKmPerTrip => "avgKmPerTrip",
            ParamField::MaintenanceCost => "maintenanceCost",
            ParamField::InsuranceCost => "insuranceCost",
            ParamField::OtherCosts => "otherCosts",
        }
    }

    /// Count fields are displayed as plain numbers rather than money
    pub fn is_count(self) -> bool {
        matches!(self, ParamField::TripsPerDay | ParamField::WorkDaysPerMonth)
    }
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamField {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamField::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| PlanError::UnknownField(s.to_string()))
    }
}

/// Parse a raw field edit as a number
///
/// Leading whitespace is skipped and the longest numeric prefix is used,
/// so `"12abc"` reads as 12 and `"3,5"` as 3. Input without a leading
/// number, or one that overflows to infinity, is an error.
pub fn parse_amount(raw: &str) -> Result<f64, ParseValueError> {
    let trimmed = raw.trim_start();
    if trimmed.trim_end().is_empty() {
        return Err(ParseValueError::Empty);
    }

    let len = numeric_prefix_len(trimmed.as_bytes());
    if len == 0 {
        return Err(ParseValueError::NotANumber(raw.to_string()));
    }

    let value: f64 = trimmed[..len]
        .parse()
        .map_err(|_| ParseValueError::NotANumber(raw.to_string()))?;

    if !value.is_finite() {
        return Err(ParseValueError::NotFinite(raw.to_string()));
    }
    Ok(value)
}

/// Length of the decimal literal at the start of `bytes`, 0 if none
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        // "5." is valid, a lone "." is not
        if digits > 0 {
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}
