//! Fixed-point money type
//!
//! Currency columns are `DECIMAL(10, 2)` in the schema: at most ten digits,
//! two of them after the decimal point. SQLite has no exact decimal type, so
//! values are stored as canonical TEXT with exactly two places and parsed
//! back through [`rust_decimal::Decimal`]. Binding a value that does not fit
//! the column fails instead of being rounded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Total significant digits allowed for currency columns
pub const MONEY_MAX_DIGITS: u32 = 10;

/// Digits after the decimal point allowed for currency columns
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Exact base-10 amount (prices, totals, payments)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Build from an integer mantissa and scale: `Money::new(12550, 2)` is 125.50
    pub fn new(mantissa: i64, scale: u32) -> Self {
        Self(Decimal::new(mantissa, scale))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Check the value fits `DECIMAL(max_digits, decimal_places)`.
    ///
    /// Trailing zeros do not count: `12.500` fits two places.
    pub fn fits_precision(&self, max_digits: u32, decimal_places: u32) -> bool {
        let normalized = self.0.normalize();
        if normalized.scale() > decimal_places {
            return false;
        }
        let whole_digits = max_digits.saturating_sub(decimal_places) as usize;
        let whole = normalized.abs().trunc().normalize();
        whole.is_zero() || whole.to_string().len() <= whole_digits
    }

    /// Check against the schema's currency precision (10 digits, 2 places)
    pub fn fits_column(&self) -> bool {
        self.fits_precision(MONEY_MAX_DIGITS, MONEY_DECIMAL_PLACES)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(feature = "db")]
mod sqlite {
    use super::{MONEY_DECIMAL_PLACES, MONEY_MAX_DIGITS, Money};
    use sqlx::encode::IsNull;
    use sqlx::error::BoxDynError;
    use sqlx::sqlite::SqliteTypeInfo;
    use sqlx::{Database, Decode, Encode, Sqlite, Type};

    impl Type<Sqlite> for Money {
        fn type_info() -> SqliteTypeInfo {
            <String as Type<Sqlite>>::type_info()
        }

        fn compatible(ty: &SqliteTypeInfo) -> bool {
            <String as Type<Sqlite>>::compatible(ty)
        }
    }

    impl<'q> Encode<'q, Sqlite> for Money {
        fn encode_by_ref(
            &self,
            buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
        ) -> Result<IsNull, BoxDynError> {
            if !self.fits_column() {
                return Err(format!(
                    "Amount {} does not fit DECIMAL({MONEY_MAX_DIGITS}, {MONEY_DECIMAL_PLACES})",
                    self.0
                )
                .into());
            }
            <String as Encode<'q, Sqlite>>::encode(self.to_string(), buf)
        }
    }

    impl<'r> Decode<'r, Sqlite> for Money {
        fn decode(value: <Sqlite as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
            let text = <String as Decode<'r, Sqlite>>::decode(value)?;
            Ok(text.parse::<Money>()?)
        }
    }
}
