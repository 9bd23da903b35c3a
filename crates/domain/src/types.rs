// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Represents a car park number.
///
/// The car park number is the sole identity of a record within a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CarparkNumber {
    /// The number, trimmed and normalized to uppercase.
    value: String,
}

impl CarparkNumber {
    /// Creates a new `CarparkNumber`.
    ///
    /// Numbers are normalized to uppercase so that identity comparison is
    /// case-insensitive.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw car park number
    ///
    /// # Errors
    ///
    /// Returns an error if the number is blank or contains anything other
    /// than ASCII letters and digits.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidCarparkNumber(String::from(
                "Car park number cannot be blank",
            )));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidCarparkNumber(format!(
                "'{trimmed}' must contain only letters and digits"
            )));
        }
        Ok(Self {
            value: trimmed.to_uppercase(),
        })
    }

    /// Returns the car park number.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for CarparkNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CarparkNumber> for String {
    fn from(number: CarparkNumber) -> Self {
        number.value
    }
}

impl std::fmt::Display for CarparkNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents the street address of a car park.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    value: String,
}

impl Address {
    /// Creates a new `Address`.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is blank.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidAddress(String::from(
                "Address cannot be blank",
            )));
        }
        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the address text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Checks whether `word` appears as a whole word in the address,
    /// ignoring case.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        let word: &str = word.trim();
        !word.is_empty()
            && self
                .value
                .split_whitespace()
                .any(|candidate| candidate.eq_ignore_ascii_case(word))
    }
}

impl TryFrom<String> for Address {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.value
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents the kind of car park structure, e.g. `SURFACE CAR PARK`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CarparkType {
    value: String,
}

impl CarparkType {
    /// Creates a new `CarparkType`.
    ///
    /// # Errors
    ///
    /// Returns an error if the type is blank.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidCarparkType(String::from(
                "Car park type cannot be blank",
            )));
        }
        Ok(Self {
            value: trimmed.to_uppercase(),
        })
    }

    /// Returns the car park type.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for CarparkType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CarparkType> for String {
    fn from(carpark_type: CarparkType) -> Self {
        carpark_type.value
    }
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a new `Coordinate` from decimal degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if either component is not finite or is outside the
    /// valid range for its axis.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        let raw = || format!("{latitude}, {longitude}");
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(DomainError::InvalidCoordinate {
                value: raw(),
                reason: "components must be finite numbers",
            });
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::InvalidCoordinate {
                value: raw(),
                reason: "latitude must be between -90 and 90",
            });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinate {
                value: raw(),
                reason: "longitude must be between -180 and 180",
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parses a coordinate written as `"<latitude>, <longitude>"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not two comma-separated numbers or if
    /// the numbers are out of range.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let Some((lat, long)) = value.split_once(',') else {
            return Err(DomainError::InvalidCoordinate {
                value: value.to_string(),
                reason: "expected '<latitude>, <longitude>'",
            });
        };
        let parse_component = |component: &str| {
            component
                .trim()
                .parse::<f64>()
                .map_err(|_| DomainError::InvalidCoordinate {
                    value: value.to_string(),
                    reason: "components must be decimal numbers",
                })
        };
        Self::new(parse_component(lat)?, parse_component(long)?)
    }

    /// Returns the latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl TryFrom<String> for Coordinate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Coordinate> for String {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.to_string()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Whether free parking is offered, and when.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FreeParking {
    /// No free parking.
    No,
    /// Free parking during the described period, e.g. `SUN & PH FR 7AM-10.30PM`.
    Available(String),
}

impl FreeParking {
    /// Parses a free parking description.
    ///
    /// # Errors
    ///
    /// Returns an error if the description is blank.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed: &str = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidFreeParking(String::from(
                "Free parking cannot be blank",
            )));
        }
        if trimmed.eq_ignore_ascii_case("NO") {
            Ok(Self::No)
        } else {
            Ok(Self::Available(trimmed.to_uppercase()))
        }
    }

    /// Returns the feed representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::No => "NO",
            Self::Available(description) => description,
        }
    }
}

impl TryFrom<String> for FreeParking {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FreeParking> for String {
    fn from(free_parking: FreeParking) -> Self {
        free_parking.as_str().to_string()
    }
}

/// A count of parking lots.
///
/// Zero is the feed's "not available" sentinel: the data source reports `0`
/// when it has no figure for a car park.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LotCount(u32);

impl LotCount {
    /// The "not available" sentinel.
    pub const UNAVAILABLE: Self = Self(0);

    /// Creates a new `LotCount`.
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self(count)
    }

    /// Parses a lot count field. A blank field is read as the sentinel.
    ///
    /// # Arguments
    ///
    /// * `field` - The field name, used in the error message
    /// * `value` - The raw value
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a non-negative whole number.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Ok(Self::UNAVAILABLE);
        }
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| DomainError::InvalidLotCount {
                field,
                value: trimmed.to_string(),
            })
    }

    /// Returns the raw count.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns whether the feed reported a figure.
    #[must_use]
    pub const fn is_reported(&self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for LotCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether night parking is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NightParking {
    /// Night parking is available.
    Yes,
    /// Night parking is not available.
    No,
}

impl NightParking {
    /// Parses a night parking flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag is not `YES` or `NO` (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed: &str = s.trim();
        if trimmed.eq_ignore_ascii_case("YES") {
            Ok(Self::Yes)
        } else if trimmed.eq_ignore_ascii_case("NO") {
            Ok(Self::No)
        } else {
            Err(DomainError::InvalidNightParking(trimmed.to_string()))
        }
    }

    /// Returns the feed representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::No => "NO",
        }
    }
}

impl TryFrom<String> for NightParking {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<NightParking> for String {
    fn from(night_parking: NightParking) -> Self {
        night_parking.as_str().to_string()
    }
}

/// Short term parking availability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ShortTerm {
    /// Short term parking is available the whole day.
    WholeDay,
    /// No short term parking.
    No,
    /// Short term parking within a window, e.g. `7AM-10.30PM`.
    Window(String),
}

impl ShortTerm {
    /// Parses a short term parking description.
    ///
    /// # Errors
    ///
    /// Returns an error if the description is blank.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed: &str = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidShortTerm(String::from(
                "Short term parking cannot be blank",
            )));
        }
        if trimmed.eq_ignore_ascii_case("WHOLE DAY") {
            Ok(Self::WholeDay)
        } else if trimmed.eq_ignore_ascii_case("NO") {
            Ok(Self::No)
        } else {
            Ok(Self::Window(trimmed.to_uppercase()))
        }
    }

    /// Returns the feed representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::WholeDay => "WHOLE DAY",
            Self::No => "NO",
            Self::Window(window) => window,
        }
    }
}

impl TryFrom<String> for ShortTerm {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ShortTerm> for String {
    fn from(short_term: ShortTerm) -> Self {
        short_term.as_str().to_string()
    }
}

/// The payment system used at the car park.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeOfParking {
    /// Electronic parking system.
    Electronic,
    /// Coupon parking system.
    Coupon,
}

impl TypeOfParking {
    /// Parses a type of parking system.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a recognized parking system.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed: &str = s.trim();
        if trimmed.eq_ignore_ascii_case("ELECTRONIC PARKING") {
            Ok(Self::Electronic)
        } else if trimmed.eq_ignore_ascii_case("COUPON PARKING") {
            Ok(Self::Coupon)
        } else {
            Err(DomainError::InvalidTypeOfParking(trimmed.to_string()))
        }
    }

    /// Returns the feed representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Electronic => "ELECTRONIC PARKING",
            Self::Coupon => "COUPON PARKING",
        }
    }
}

impl TryFrom<String> for TypeOfParking {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TypeOfParking> for String {
    fn from(type_of_parking: TypeOfParking) -> Self {
        type_of_parking.as_str().to_string()
    }
}

/// A user-assigned label on a car park.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Creates a new `Tag`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or not alphanumeric.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let trimmed: &str = name.trim();
        if trimmed.is_empty() || !trimmed.chars().all(char::is_alphanumeric) {
            return Err(DomainError::InvalidTag(trimmed.to_string()));
        }
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    /// Returns the tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for Tag {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.name
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

/// A single car park.
///
/// Records are replaced rather than mutated once they are in a registry.
/// Equality compares every attribute except `tags`; use
/// [`Record::same_identity`] to match records by car park number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// The street address.
    pub address: Address,
    /// The unique car park number.
    pub carpark_number: CarparkNumber,
    /// The kind of car park structure.
    pub carpark_type: CarparkType,
    /// The car park location.
    pub coordinate: Coordinate,
    /// Free parking availability.
    pub free_parking: FreeParking,
    /// Lots currently available.
    pub lots_available: LotCount,
    /// Night parking availability.
    pub night_parking: NightParking,
    /// Short term parking availability.
    pub short_term: ShortTerm,
    /// Total lots in the car park.
    pub total_lots: LotCount,
    /// The payment system.
    pub type_of_parking: TypeOfParking,
    /// User-assigned labels. Never present in the external feed.
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

// Tags are user annotations, not car park data, so they take no part in
// equality.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.carpark_number == other.carpark_number
            && self.address == other.address
            && self.carpark_type == other.carpark_type
            && self.coordinate == other.coordinate
            && self.free_parking == other.free_parking
            && self.lots_available == other.lots_available
            && self.night_parking == other.night_parking
            && self.short_term == other.short_term
            && self.total_lots == other.total_lots
            && self.type_of_parking == other.type_of_parking
    }
}

impl Record {
    /// Creates a new `Record` with no tags.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        address: Address,
        carpark_number: CarparkNumber,
        carpark_type: CarparkType,
        coordinate: Coordinate,
        free_parking: FreeParking,
        lots_available: LotCount,
        night_parking: NightParking,
        short_term: ShortTerm,
        total_lots: LotCount,
        type_of_parking: TypeOfParking,
    ) -> Self {
        Self {
            address,
            carpark_number,
            carpark_type,
            coordinate,
            free_parking,
            lots_available,
            night_parking,
            short_term,
            total_lots,
            type_of_parking,
            tags: BTreeSet::new(),
        }
    }

    /// Returns this record with its tags replaced.
    #[must_use]
    pub fn with_tags(mut self, tags: BTreeSet<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Checks whether both records describe the same car park.
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        self.carpark_number == other.carpark_number
    }

    /// Checks whether both records are equal including their tags.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        self == other && self.tags == other.tags
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} Type: {} Lots: {}/{} Night parking: {} Short term: {} Free parking: {} System: {}",
            self.carpark_number,
            self.address,
            self.carpark_type.value(),
            self.lots_available,
            self.total_lots,
            self.night_parking.as_str(),
            self.short_term.as_str(),
            self.free_parking.as_str(),
            self.type_of_parking.as_str(),
        )?;
        for tag in &self.tags {
            write!(f, " {tag}")?;
        }
        Ok(())
    }
}
