//! Shared field types and lenient deserializers

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Lenient Enums
// ============================================================================

/// A value that is either a known variant or whatever the API sent
///
/// New enum values appear server side without notice; they must never fail a parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coerced<T> {
    /// Recognized value
    Known(T),
    /// Raw value the crate does not know about yet
    Unknown(serde_json::Value),
}

impl<T> Coerced<T> {
    /// The known variant, if any
    pub fn known(&self) -> Option<&T> {
        match self {
            Coerced::Known(value) => Some(value),
            Coerced::Unknown(_) => None,
        }
    }

    /// Whether the raw value was recognized
    pub fn is_known(&self) -> bool {
        matches!(self, Coerced::Known(_))
    }
}

impl<T> From<T> for Coerced<T> {
    fn from(value: T) -> Self {
        Coerced::Known(value)
    }
}

/// Item rarity letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    B,
    A,
    S,
}

/// ZZZ attribute, sent as a numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ZzzElement {
    Physical,
    Fire,
    Ice,
    Electric,
    Ether,
}

impl TryFrom<i64> for ZzzElement {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            200 => Ok(Self::Physical),
            201 => Ok(Self::Fire),
            202 => Ok(Self::Ice),
            203 => Ok(Self::Electric),
            205 => Ok(Self::Ether),
            other => Err(format!("unknown element {other}")),
        }
    }
}

impl From<ZzzElement> for i64 {
    fn from(element: ZzzElement) -> Self {
        match element {
            ZzzElement::Physical => 200,
            ZzzElement::Fire => 201,
            ZzzElement::Ice => 202,
            ZzzElement::Electric => 203,
            ZzzElement::Ether => 205,
        }
    }
}

/// ZZZ agent specialty, sent as a numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ZzzSpecialty {
    Attack,
    Stun,
    Anomaly,
    Support,
    Defense,
    Rupture,
}

impl TryFrom<i64> for ZzzSpecialty {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Attack),
            2 => Ok(Self::Stun),
            3 => Ok(Self::Anomaly),
            4 => Ok(Self::Support),
            5 => Ok(Self::Defense),
            6 => Ok(Self::Rupture),
            other => Err(format!("unknown specialty {other}")),
        }
    }
}

impl From<ZzzSpecialty> for i64 {
    fn from(specialty: ZzzSpecialty) -> Self {
        match specialty {
            ZzzSpecialty::Attack => 1,
            ZzzSpecialty::Stun => 2,
            ZzzSpecialty::Anomaly => 3,
            ZzzSpecialty::Support => 4,
            ZzzSpecialty::Defense => 5,
            ZzzSpecialty::Rupture => 6,
        }
    }
}

// ============================================================================
// Numbers
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    fn into_i64<E: de::Error>(self) -> Result<i64, E> {
        match self {
            IntOrString::Int(value) => Ok(value),
            IntOrString::Str(text) => text
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("expected an integer, got '{text}'"))),
        }
    }
}

/// Deserialize an integer that may be sent as a string
pub fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    IntOrString::deserialize(deserializer)?.into_i64()
}

/// Deserialize an unsigned id that may be sent as a string
pub fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = lenient_i64(deserializer)?;
    u64::try_from(value).map_err(|_| de::Error::custom(format!("negative id {value}")))
}

// ============================================================================
// Time
// ============================================================================

/// Date split into components, as the chronicle sends it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateDict {
    #[serde(deserialize_with = "lenient_i64")]
    pub year: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub month: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub day: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub hour: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub minute: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub second: i64,
}

impl DateDict {
    /// Wall clock time, `None` if any component is out of range
    pub fn to_naive(self) -> Option<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(
            i32::try_from(self.year).ok()?,
            u32::try_from(self.month).ok()?,
            u32::try_from(self.day).ok()?,
        )?;
        date.and_hms_opt(
            u32::try_from(self.hour).ok()?,
            u32::try_from(self.minute).ok()?,
            u32::try_from(self.second).ok()?,
        )
    }

    /// Interpret the wall clock time at a fixed UTC offset
    pub fn at_offset(self, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
        offset.from_local_datetime(&self.to_naive()?).single()
    }
}

impl fmt::Display for DateDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Deserialize an optional date dict; null, `{}` and missing all mean `None`
pub fn optional_date_dict<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => {
            let dict: DateDict = serde_json::from_value(value).map_err(de::Error::custom)?;
            dict.to_naive()
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid date {dict}")))
        }
    }
}

/// Deserialize a unix timestamp sent as an integer or a string
pub fn unix_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<Utc>, D::Error> {
    let seconds = lenient_i64(deserializer)?;
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| de::Error::custom(format!("timestamp {seconds} out of range")))
}
