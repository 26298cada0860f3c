use std::fmt;
use std::str::FromStr;

use crate::foundation::core::Viewport;
use crate::foundation::error::{MotionError, MotionResult};

/// Unit attached to a [`Length`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Plain number with no unit suffix.
    #[default]
    None,
    /// CSS pixels.
    Px,
    /// Percent of viewport height.
    Vh,
    /// Percent of viewport width.
    Vw,
    /// Percent of the viewport height, written `%`. Never relative to an element's own box.
    Percent,
}

impl Unit {
    /// CSS suffix for this unit.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Px => "px",
            Self::Vh => "vh",
            Self::Vw => "vw",
            Self::Percent => "%",
        }
    }
}

/// A numeric value with a CSS-style unit, such as `50vh` or `-20px`.
///
/// Serialized as its CSS string. Deserialization also accepts a bare number (unitless).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "LengthRepr", into = "String")]
pub struct Length {
    /// Magnitude in `unit`.
    pub value: f64,
    /// Unit of `value`.
    pub unit: Unit,
}

impl Length {
    /// Build a length from parts.
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Length in CSS pixels.
    pub const fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }

    /// Length in viewport-height percent.
    pub const fn vh(value: f64) -> Self {
        Self::new(value, Unit::Vh)
    }

    /// Length in viewport-width percent.
    pub const fn vw(value: f64) -> Self {
        Self::new(value, Unit::Vw)
    }

    /// Resolve to CSS pixels against `viewport`. Unitless values are taken as pixels.
    ///
    /// `%` resolves like `vh` for every property, unlike CSS `translate` where percentages refer
    /// to the element's own size. Hosts that need box-relative offsets should convert to `px`
    /// themselves.
    pub fn resolve_px(self, viewport: Viewport) -> f64 {
        match self.unit {
            Unit::None | Unit::Px => self.value,
            Unit::Vh | Unit::Percent => self.value * viewport.height / 100.0,
            Unit::Vw => self.value * viewport.width / 100.0,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // never print "-0"
        let v = if self.value == 0.0 { 0.0 } else { self.value };
        write!(f, "{v}{}", self.unit.suffix())
    }
}

impl FromStr for Length {
    type Err = MotionError;

    fn from_str(s: &str) -> MotionResult<Self> {
        let s = s.trim();
        let (num, unit) = [
            ("px", Unit::Px),
            ("vh", Unit::Vh),
            ("vw", Unit::Vw),
            ("%", Unit::Percent),
        ]
        .into_iter()
        .find_map(|(suffix, unit)| s.strip_suffix(suffix).map(|n| (n, unit)))
        .unwrap_or((s, Unit::None));

        let value: f64 = num
            .trim()
            .parse()
            .map_err(|_| MotionError::validation(format!("invalid length '{s}'")))?;
        if !value.is_finite() {
            return Err(MotionError::validation(format!(
                "length '{s}' must be finite"
            )));
        }
        Ok(Self { value, unit })
    }
}

impl From<Length> for String {
    fn from(l: Length) -> Self {
        l.to_string()
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum LengthRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<LengthRepr> for Length {
    type Error = MotionError;

    fn try_from(r: LengthRepr) -> MotionResult<Self> {
        match r {
            LengthRepr::Number(value) => Ok(Self::new(value, Unit::None)),
            LengthRepr::Text(s) => s.parse(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/length.rs"]
mod tests;
