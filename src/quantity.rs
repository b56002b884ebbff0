use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
};

use ordered_float::OrderedFloat;

/// US dollar per instance-hour — the unit of a spot price quote.
#[repr(transparent)]
#[derive(
    Clone,
    Copy,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Div,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
pub struct UsdPerHour(pub f64);

impl UsdPerHour {
    pub const ZERO: Self = Self(0.0);
}

impl Display for UsdPerHour {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{:.4} $/h", self.0)
    }
}

impl Debug for UsdPerHour {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{:.4}$/h", self.0)
    }
}

impl PartialEq for UsdPerHour {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.0).eq(&OrderedFloat(other.0))
    }
}

impl Eq for UsdPerHour {}

impl PartialOrd for UsdPerHour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UsdPerHour {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.0).cmp(&OrderedFloat(other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        assert!(UsdPerHour(0.0041) < UsdPerHour(0.0043));
        assert_eq!(UsdPerHour(0.0042).max(UsdPerHour(0.0041)), UsdPerHour(0.0042));
    }

    #[test]
    fn test_parse() {
        assert_eq!("0.0041".parse::<UsdPerHour>().unwrap(), UsdPerHour(0.0041));
        assert!("not-a-price".parse::<UsdPerHour>().is_err());
    }
}
