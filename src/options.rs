//! Modifier configuration: priority order, padding, escape settings.
//!
//! # Example
//!
//! ```
//! use popclamp::{EscapePolicy, PreventOverflow, Priority, Side};
//!
//! let options: PreventOverflow<f64, ()> = PreventOverflow::new()
//!     .priority("left, top".parse::<Priority>().unwrap())
//!     .padding(8.0)
//!     .escape_with_reference(true)
//!     .escape_policy(EscapePolicy::AxisAware);
//!
//! assert_eq!(options.priority.as_slice(), &[Side::Left, Side::Top]);
//! assert!(options.validate().is_ok());
//! ```

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use num_traits::Float;

use crate::overflow::{EscapePolicy, OverflowError};
use crate::placement::Side;

/// Padding applied when none is configured.
pub const DEFAULT_PADDING: f64 = 5.0;

/// Ordered list of sides to check. Never empty; duplicates are allowed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Side>", into = "Vec<Side>")
)]
pub struct Priority(Vec<Side>);

impl Priority {
    /// Build from an explicit order.
    pub fn new(sides: impl IntoIterator<Item = Side>) -> Result<Self, OverflowError> {
        let sides: Vec<Side> = sides.into_iter().collect();
        if sides.is_empty() {
            return Err(OverflowError::EmptyPriority);
        }
        Ok(Self(sides))
    }

    /// Parse tokens such as `"left,right,top,bottom"` or `"top bottom"`.
    ///
    /// Any token that is not a side fails the whole parse.
    pub fn parse(text: &str) -> Result<Self, OverflowError> {
        let sides = text
            .split(|c: char| c == ',' || c.is_ascii_whitespace())
            .filter(|t| !t.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Side>, _>>()?;
        Self::new(sides)
    }

    pub fn as_slice(&self) -> &[Side] {
        &self.0
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Side> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `left, right, top, bottom`.
impl Default for Priority {
    fn default() -> Self {
        Self([Side::Left, Side::Right, Side::Top, Side::Bottom].into())
    }
}

impl FromStr for Priority {
    type Err = OverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<Side>> for Priority {
    type Error = OverflowError;

    fn try_from(sides: Vec<Side>) -> Result<Self, Self::Error> {
        Self::new(sides)
    }
}

impl From<Priority> for Vec<Side> {
    fn from(p: Priority) -> Self {
        p.0
    }
}

impl AsRef<[Side]> for Priority {
    fn as_ref(&self) -> &[Side] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Priority {
    type Item = &'a Side;
    type IntoIter = core::slice::Iter<'a, Side>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, side) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(side.as_str())?;
        }
        Ok(())
    }
}

/// Options for the prevent-overflow modifier.
///
/// `E` is the caller's element handle. `boundaries_element: None` means the
/// popper's offset parent bounds it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        rename_all = "camelCase",
        default,
        bound(
            serialize = "T: serde::Serialize",
            deserialize = "T: Float + serde::Deserialize<'de>"
        )
    )
)]
pub struct PreventOverflow<T = f64, E = ()> {
    pub priority: Priority,
    /// Distance kept from every boundary edge.
    pub padding: T,
    pub escape_with_reference: bool,
    pub escape_policy: EscapePolicy,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub boundaries_element: Option<E>,
}

impl<T: Float, E> Default for PreventOverflow<T, E> {
    fn default() -> Self {
        Self {
            priority: Priority::default(),
            padding: T::from(DEFAULT_PADDING).unwrap_or_else(T::zero),
            escape_with_reference: false,
            escape_policy: EscapePolicy::Always,
            boundaries_element: None,
        }
    }
}

impl<T: Float, E> PreventOverflow<T, E> {
    /// Default options: `left, right, top, bottom`, padding 5, no escape.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn padding(mut self, padding: T) -> Self {
        self.padding = padding;
        self
    }

    pub fn escape_with_reference(mut self, escape: bool) -> Self {
        self.escape_with_reference = escape;
        self
    }

    pub fn escape_policy(mut self, policy: EscapePolicy) -> Self {
        self.escape_policy = policy;
        self
    }

    /// Bound the popper by `element` instead of its offset parent.
    pub fn boundaries_element(mut self, element: E) -> Self {
        self.boundaries_element = Some(element);
        self
    }

    /// Check values the type system can't. `Priority` is non-empty by
    /// construction, so only the padding is checked here.
    pub fn validate(&self) -> Result<(), OverflowError> {
        if !self.padding.is_finite() {
            return Err(OverflowError::InvalidPadding);
        }
        Ok(())
    }
}
