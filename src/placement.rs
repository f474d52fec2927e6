//! Placements, sides, and axis equivalence.
//!
//! A placement names the side of the reference the popper sits on, with an
//! optional alignment along that side:
//!
//! ```text
//!     ( "top" | "right" | "bottom" | "left" ) ( "-start" | "" | "-end" )
//!     |--------------- side ----------------| |----- alignment -----|
//!
//!                 top-start   top   top-end
//!                     ┌─────────────────┐
//!        left-start   │                 │   right-start
//!        left         │    reference    │   right
//!        left-end     │                 │   right-end
//!                     └─────────────────┘
//!              bottom-start  bottom  bottom-end
//! ```
//!
//! Only the side matters for overflow decisions. Sides double as overflow
//! directions: `Side::Left` is both "placed to the left" and "overflowing
//! the left edge".

use core::fmt;
use core::str::FromStr;

use crate::overflow::OverflowError;

/// One of the four edges of a rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// The axis a side moves along.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left and right: clamping writes `left`.
    Horizontal,
    /// Top and bottom: clamping writes `top`.
    Vertical,
}

impl Side {
    /// All four sides, clockwise from top.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The geometrically opposite side. `s.opposite().opposite() == s`.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Top | Self::Bottom => Axis::Vertical,
        }
    }

    /// Lowercase keyword, as used in placement strings and priority lists.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = OverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|side| side.as_str().eq_ignore_ascii_case(s))
            .ok_or(OverflowError::UnknownSide)
    }
}

/// Alignment of the popper along the side it is placed on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Alignment {
    Start,
    End,
}

impl Alignment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Where the popper sits relative to its reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub side: Side,
    /// `None` means centered along the side.
    pub alignment: Option<Alignment>,
}

impl Placement {
    pub const TOP: Self = Self::new(Side::Top);
    pub const RIGHT: Self = Self::new(Side::Right);
    pub const BOTTOM: Self = Self::new(Side::Bottom);
    pub const LEFT: Self = Self::new(Side::Left);

    /// Centered placement on `side`.
    pub const fn new(side: Side) -> Self {
        Self {
            side,
            alignment: None,
        }
    }

    /// Set the alignment.
    pub const fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub const fn axis(self) -> Axis {
        self.side.axis()
    }

    /// Same placement on the opposite side. Alignment is kept, so
    /// `top-start` becomes `bottom-start`. Involutive.
    pub const fn opposite(self) -> Self {
        Self {
            side: self.side.opposite(),
            alignment: self.alignment,
        }
    }

    /// Whether the two placements share a side or sit on opposite sides.
    ///
    /// `top-start` and `bottom` are on the same axis; `top-start` and `left`
    /// are not. Alignment is ignored.
    pub fn is_same_axis(self, other: impl Into<Placement>) -> bool {
        let other = other.into();
        self.side == other.side || self.side == other.side.opposite()
    }
}

impl From<Side> for Placement {
    fn from(side: Side) -> Self {
        Self::new(side)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.side.as_str())?;
        if let Some(a) = self.alignment {
            write!(f, "-{}", a.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for Placement {
    type Err = OverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (side, alignment) = match s.split_once('-') {
            Some((side, alignment)) => (side, Some(alignment)),
            None => (s, None),
        };
        let side: Side = side
            .parse()
            .map_err(|_| OverflowError::UnknownPlacement)?;
        let alignment = match alignment {
            None => None,
            Some(a) if a.eq_ignore_ascii_case("start") => Some(Alignment::Start),
            Some(a) if a.eq_ignore_ascii_case("end") => Some(Alignment::End),
            Some(_) => return Err(OverflowError::UnknownPlacement),
        };
        Ok(Self { side, alignment })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Placement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Placement {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <alloc::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Axis equivalence on placement strings.
///
/// ```
/// use popclamp::placement::is_same_axis;
///
/// assert_eq!(is_same_axis("top-start", "bottom"), Ok(true));
/// assert_eq!(is_same_axis("top-start", "left"), Ok(false));
/// ```
pub fn is_same_axis(a: &str, b: &str) -> Result<bool, OverflowError> {
    let a: Placement = a.parse()?;
    let b: Placement = b.parse()?;
    Ok(a.is_same_axis(b))
}

/// Opposite of a placement string, keeping its alignment suffix.
pub fn opposite_placement(placement: &str) -> Result<Placement, OverflowError> {
    placement.parse::<Placement>().map(Placement::opposite)
}
