//! 7-bit I2C device addresses

use core::fmt;
use core::str::FromStr;

/// 7-bit I2C device address (0x00-0x7F)
///
/// Only constructible through [`Address::new`] or parsing, so a value of
/// this type is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Address(u8);

impl Address {
    /// Highest valid 7-bit address
    pub const MAX: u8 = 0x7F;

    /// Create an address, or `None` if it does not fit in 7 bits
    pub const fn new(raw: u8) -> Option<Self> {
        if raw <= Self::MAX {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Get the raw address value
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<Address> for u8 {
    fn from(address: Address) -> u8 {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

/// Address parse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressError {
    /// Not a number
    InvalidNumber,
    /// Number does not fit in 7 bits
    OutOfRange,
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::InvalidNumber => f.write_str("invalid I2C address"),
            AddressError::OutOfRange => f.write_str("I2C address out of 7-bit range"),
        }
    }
}

/// Parse an address written as decimal (`68`), hex (`0x44`), octal
/// (`0o104`) or binary (`0b1000100`)
impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (digits, radix) = match s.get(..2) {
            Some("0x") | Some("0X") => (&s[2..], 16),
            Some("0o") | Some("0O") => (&s[2..], 8),
            Some("0b") | Some("0B") => (&s[2..], 2),
            _ => (s, 10),
        };

        let value = u32::from_str_radix(digits, radix).map_err(|_| AddressError::InvalidNumber)?;
        u8::try_from(value)
            .ok()
            .and_then(Address::new)
            .ok_or(AddressError::OutOfRange)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Address;
    use core::fmt;
    use serde::de::{self, Deserialize, Deserializer, Visitor};

    struct AddressVisitor;

    impl<'de> Visitor<'de> for AddressVisitor {
        type Value = Address;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a 7-bit I2C address as an integer or a string like \"0x44\"")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Address, E> {
            u8::try_from(v)
                .ok()
                .and_then(Address::new)
                .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Address, E> {
            u8::try_from(v)
                .ok()
                .and_then(Address::new)
                .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Address, E> {
            v.parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    impl<'de> Deserialize<'de> for Address {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(AddressVisitor)
        }
    }
}
