use core::fmt;
use core::fmt::{Display, Formatter};

#[cfg(feature = "defmt")]
use defmt::Format;

use crate::{ll, map::Revision};

/// An error that can occur when using the high-level interface
pub enum Error<E> {
    /// Error occured while accessing the registers
    Ll(ll::Error<E>),

    /// No field of that name exists in the register map
    FieldNotFound,

    /// The instance of a replicated field does not exist in this build of
    /// the IP
    InstanceOutOfRange {
        /// Name of the field
        name: &'static str,
        /// The requested instance
        index: u32,
        /// Number of instances available
        limit: u32,
    },

    /// The hardware reports a version this crate has no register map for
    UnsupportedRevision {
        /// Major version reported by the hardware
        major: u8,
        /// Minor version reported by the hardware
        minor: u8,
    },

    /// The hardware revision differs from the register map in use
    RevisionMismatch {
        /// Revision of the register map
        expected: Revision,
        /// Revision reported by the hardware
        found: Revision,
    },
}

impl<E> From<ll::Error<E>> for Error<E> {
    fn from(error: ll::Error<E>) -> Self {
        Error::Ll(error)
    }
}

impl<E> Display for Error<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Ll(error) => write!(f, "{}", error),
            Error::FieldNotFound => write!(f, "register not found"),
            Error::InstanceOutOfRange { name, index, limit } => write!(
                f,
                "instance {} of {} out of range (limit {})",
                index, name, limit
            ),
            Error::UnsupportedRevision { major, minor } => {
                write!(f, "unsupported hardware revision {}.{}", major, minor)
            }
            Error::RevisionMismatch { expected, found } => write!(
                f,
                "hardware revision {} does not match register map {}",
                found, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl<E> std::error::Error for Error<E> where E: fmt::Debug {}

// We can't derive this implementation, as `Debug` is only implemented
// conditionally for `ll::Error`.
impl<E> fmt::Debug for Error<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Ll(error) => write!(f, "Ll({:?})", error),
            Error::FieldNotFound => write!(f, "FieldNotFound"),
            Error::InstanceOutOfRange { name, index, limit } => write!(
                f,
                "InstanceOutOfRange {{ name: {:?}, index: {:?}, limit: {:?} }}",
                name, index, limit
            ),
            Error::UnsupportedRevision { major, minor } => write!(
                f,
                "UnsupportedRevision {{ major: {:?}, minor: {:?} }}",
                major, minor
            ),
            Error::RevisionMismatch { expected, found } => write!(
                f,
                "RevisionMismatch {{ expected: {:?}, found: {:?} }}",
                expected, found
            ),
        }
    }
}

// Written out by hand to keep the bound on `E` alone.
impl<E> PartialEq for Error<E>
where
    E: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Error::Ll(a), Error::Ll(b)) => a == b,
            (Error::FieldNotFound, Error::FieldNotFound) => true,
            (
                Error::InstanceOutOfRange { name, index, limit },
                Error::InstanceOutOfRange {
                    name: other_name,
                    index: other_index,
                    limit: other_limit,
                },
            ) => name == other_name && index == other_index && limit == other_limit,
            (
                Error::UnsupportedRevision { major, minor },
                Error::UnsupportedRevision {
                    major: other_major,
                    minor: other_minor,
                },
            ) => major == other_major && minor == other_minor,
            (
                Error::RevisionMismatch { expected, found },
                Error::RevisionMismatch {
                    expected: other_expected,
                    found: other_found,
                },
            ) => expected == other_expected && found == other_found,
            _ => false,
        }
    }
}

#[cfg(feature = "defmt")]
impl<E> Format for Error<E>
where
    E: defmt::Format,
{
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Ll(error) => defmt::write!(f, "Ll({:?})", error),
            Error::FieldNotFound => defmt::write!(f, "FieldNotFound"),
            Error::InstanceOutOfRange { name, index, limit } => defmt::write!(
                f,
                "InstanceOutOfRange {{ name: {=str}, index: {}, limit: {} }}",
                name,
                index,
                limit
            ),
            Error::UnsupportedRevision { major, minor } => defmt::write!(
                f,
                "UnsupportedRevision {{ major: {}, minor: {} }}",
                major,
                minor
            ),
            Error::RevisionMismatch { expected, found } => defmt::write!(
                f,
                "RevisionMismatch {{ expected: {:?}, found: {:?} }}",
                expected,
                found
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::ll::BadAddress;

    #[test]
    fn converts_low_level_errors() {
        let error: Error<BadAddress> = ll::Error::Unaligned { address: 0x13 }.into();

        assert_eq!(error, Error::Ll(ll::Error::Unaligned { address: 0x13 }));
    }

    #[test]
    fn display() {
        let error = Error::<BadAddress>::InstanceOutOfRange {
            name: "ETH_VLAN_ID",
            index: 4,
            limit: 2,
        };
        assert_eq!(
            error.to_string(),
            "instance 4 of ETH_VLAN_ID out of range (limit 2)"
        );

        let error = Error::<BadAddress>::RevisionMismatch {
            expected: Revision::V2_3,
            found: Revision::V1_0,
        };
        assert_eq!(
            error.to_string(),
            "hardware revision v1.0 does not match register map v2.3"
        );

        let error = Error::Ll(ll::Error::Bus(BadAddress(0x2_0000)));
        assert_eq!(error.to_string(), "bus error: BadAddress(131072)");
    }

    #[cfg(feature = "defmt")]
    #[test]
    fn test_defmt() {
        let error = Error::<BadAddress>::FieldNotFound;

        defmt::info!("error: {:?}", error);
    }
}
