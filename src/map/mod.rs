//! Register maps of the supported hardware revisions
//!
//! Each revision has its own module with one constant per register field,
//! named exactly like the symbol in the hardware register description, plus a
//! `FIELDS` table sorted by name. The tables describe instance 0 of
//! replicated fields; see [`Field::instance_address`] for the others.
//!
//! The two revisions are independent snapshots. Fields that exist in both
//! may still differ in their reset defaults.

use core::fmt;

#[cfg(feature = "defmt")]
use defmt::Format;

use crate::field::{Bank, Field};

/// Generates the field constants of a register map
///
/// Each line has the following syntax:
/// <NAME>, <address>, <mask>, <offset>, <width>, <default>, <access>
///     [, per <dimension> <stride>] [, when "<enable generic>"];
///
/// Lines must be sorted by name; `FIELDS` keeps the given order and `find`
/// relies on it.
macro_rules! impl_fields {
    (@repeat) => { None };
    (@repeat $dimension:ident $stride:expr) => {
        Some($crate::field::Repeat {
            dimension: $crate::field::Dimension::$dimension,
            stride: $stride,
        })
    };
    (@enable) => { None };
    (@enable $enable:literal) => { Some($enable) };

    (
        $(
            $bank:ident {
                $(
                    $name:ident,
                    $address:expr,
                    $mask:expr,
                    $offset:expr,
                    $width:expr,
                    $default:expr,
                    $access:ident
                    $(, per $dimension:ident $stride:expr)?
                    $(, when $enable:literal)?;
                )*
            }
        )*
    ) => {
        $(
            $(
                #[doc = concat!("`", stringify!($name), "` at ", stringify!($address))]
                pub const $name: $crate::field::Field = $crate::field::Field {
                    name: stringify!($name),
                    bank: $crate::field::Bank::$bank,
                    address: $address,
                    mask: $mask,
                    offset: $offset,
                    width: $width,
                    default: $default,
                    access: $crate::field::Access::$access,
                    repeat: impl_fields!(@repeat $($dimension $stride)?),
                    enable: impl_fields!(@enable $($enable)?),
                };
            )*
        )*

        /// All fields of this revision, sorted by name
        pub const FIELDS: &[$crate::field::Field] = &[
            $($($name,)*)*
        ];

        /// Looks up a field by its symbol name
        pub fn find(name: &str) -> Option<&'static $crate::field::Field> {
            $crate::map::search(FIELDS, name)
        }
    };
}

pub mod v1_0;
pub mod v2_3;

/// Binary search over a name-sorted table
fn search(fields: &'static [Field], name: &str) -> Option<&'static Field> {
    fields
        .binary_search_by(|field| field.name.cmp(name))
        .ok()
        .map(|index| &fields[index])
}

/// A hardware revision of the radio interface
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Revision {
    /// Version 1.0
    V1_0,
    /// Version 2.3
    V2_3,
}

impl Revision {
    /// All supported revisions, oldest first
    pub const ALL: [Revision; 2] = [Revision::V1_0, Revision::V2_3];

    /// Major version number, as reported by `CFG_MAJOR_REVISION`
    pub const fn major(self) -> u8 {
        match self {
            Revision::V1_0 => 1,
            Revision::V2_3 => 2,
        }
    }

    /// Minor version number, as reported by `CFG_MINOR_REVISION`
    pub const fn minor(self) -> u8 {
        match self {
            Revision::V1_0 => 0,
            Revision::V2_3 => 3,
        }
    }

    /// Maps a hardware version number to a supported revision
    pub fn from_version(major: u8, minor: u8) -> Option<Revision> {
        Revision::ALL
            .iter()
            .copied()
            .find(|revision| revision.major() == major && revision.minor() == minor)
    }

    /// The field table of this revision
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Revision::V1_0 => v1_0::FIELDS,
            Revision::V2_3 => v2_3::FIELDS,
        }
    }

    /// Looks up a field of this revision by name
    pub fn find(self, name: &str) -> Option<&'static Field> {
        search(self.fields(), name)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "v{}.{}", self.major(), self.minor())
    }
}

/// Static description of one revision's register map
///
/// Implemented by the zero-sized [`V1_0`] and [`V2_3`] types, which are used
/// as type parameter of [`FrontHaul`].
///
/// [`FrontHaul`]: crate::hl::FrontHaul
pub trait RegisterMap {
    /// The revision this map describes
    const REVISION: Revision;

    /// All fields, sorted by name
    const FIELDS: &'static [Field];

    /// Looks up a field by name
    fn find(name: &str) -> Option<&'static Field> {
        search(Self::FIELDS, name)
    }

    /// Looks up the field named `<prefix><suffix>`
    ///
    /// Saves building the name in a buffer for families of fields such as
    /// the `_L`/`_H` halves of 64-bit counters.
    fn find_suffixed(prefix: &str, suffix: &str) -> Option<&'static Field> {
        let fields = Self::FIELDS;

        fields
            .binary_search_by(|field| {
                field
                    .name
                    .bytes()
                    .cmp(prefix.bytes().chain(suffix.bytes()))
            })
            .ok()
            .map(|index| &fields[index])
    }

    /// All fields of a bank, sorted by name
    fn fields_in(bank: Bank) -> &'static [Field] {
        let fields = Self::FIELDS;

        // Names start with the bank prefix, so a bank is one contiguous run.
        let start = fields
            .iter()
            .position(|field| field.bank == bank)
            .unwrap_or(fields.len());
        let len = fields[start..]
            .iter()
            .take_while(|field| field.bank == bank)
            .count();

        &fields[start..start + len]
    }
}

/// Register map of hardware revision 1.0
#[derive(Copy, Clone, Debug, Default)]
pub struct V1_0;

impl RegisterMap for V1_0 {
    const REVISION: Revision = Revision::V1_0;
    const FIELDS: &'static [Field] = v1_0::FIELDS;
}

/// Register map of hardware revision 2.3
#[derive(Copy, Clone, Debug, Default)]
pub struct V2_3;

impl RegisterMap for V2_3 {
    const REVISION: Revision = Revision::V2_3;
    const FIELDS: &'static [Field] = v2_3::FIELDS;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Access, Dimension, Repeat};

    fn check_table(fields: &[Field]) {
        for field in fields {
            assert!(field.is_consistent(), "inconsistent field {}", field);
            assert!(
                field.name.starts_with(field.bank.prefix())
                    && field.name.as_bytes()[field.bank.prefix().len()] == b'_',
                "{} not prefixed with its bank",
                field.name
            );
            assert_eq!(
                Bank::containing(field.address),
                Some(field.bank),
                "{} outside of its bank",
                field
            );
        }

        for pair in fields.windows(2) {
            assert!(
                pair[0].name < pair[1].name,
                "{} and {} out of order",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn v1_0_table_is_consistent() {
        check_table(v1_0::FIELDS);
        assert_eq!(v1_0::FIELDS.len(), 170);
    }

    #[test]
    fn v2_3_table_is_consistent() {
        check_table(v2_3::FIELDS);
        assert_eq!(v2_3::FIELDS.len(), 303);
    }

    #[test]
    fn replicas_stay_inside_their_bank() {
        // Replica counts of a large build
        fn max_instances(dimension: Dimension) -> u32 {
            match dimension {
                Dimension::EthPorts => 4,
                Dimension::ComponentCarriers => 8,
                Dimension::DlSymbols => 16,
            }
        }

        for revision in Revision::ALL {
            for field in revision.fields() {
                if let Some(repeat) = field.repeat {
                    let last = max_instances(repeat.dimension) - 1;
                    let address = field.instance_address(last).unwrap();

                    assert_eq!(Bank::containing(address), Some(field.bank), "{}", field);
                }
            }
        }
    }

    #[test]
    fn every_field_can_be_found() {
        for field in v1_0::FIELDS {
            assert_eq!(v1_0::find(field.name), Some(field));
            assert_eq!(V1_0::find(field.name), Some(field));
        }
        for field in v2_3::FIELDS {
            assert_eq!(v2_3::find(field.name), Some(field));
            assert_eq!(Revision::V2_3.find(field.name), Some(field));
        }
    }

    #[test]
    fn unknown_names_are_not_found() {
        assert_eq!(v2_3::find(""), None);
        assert_eq!(v2_3::find("CFG_MAJOR_REVISIO"), None);
        assert_eq!(v2_3::find("cfg_major_revision"), None);
        assert_eq!(v1_0::find("DEFM_SNAP_SHOT"), None);
    }

    #[test]
    fn find_suffixed() {
        assert_eq!(
            V2_3::find_suffixed("STATS_ORAN_RX_TOTAL", "_L"),
            Some(&v2_3::STATS_ORAN_RX_TOTAL_L)
        );
        assert_eq!(
            V2_3::find_suffixed("STATS_ORAN_RX_TOTAL", "_H"),
            Some(&v2_3::STATS_ORAN_RX_TOTAL_H)
        );
        assert_eq!(
            V1_0::find_suffixed("STATS_ETH_STATS_TOTAL_RX_GOOD_PKT_CNT", ""),
            Some(&v1_0::STATS_ETH_STATS_TOTAL_RX_GOOD_PKT_CNT)
        );
        assert_eq!(V1_0::find_suffixed("STATS_ORAN_RX_TOTAL", "_L"), None);
    }

    #[test]
    fn fields_in_bank() {
        for bank in Bank::ALL {
            let fields = V2_3::fields_in(bank);
            let expected = v2_3::FIELDS.iter().filter(|f| f.bank == bank).count();

            assert!(!fields.is_empty());
            assert_eq!(fields.len(), expected);
            assert!(fields.iter().all(|f| f.bank == bank));
        }

        let total: usize = Bank::ALL.iter().map(|&b| V1_0::fields_in(b).len()).sum();
        assert_eq!(total, v1_0::FIELDS.len());
    }

    #[test]
    fn revision_fields() {
        assert_eq!(v1_0::CFG_MAJOR_REVISION.default, 1);
        assert_eq!(v1_0::CFG_MINOR_REVISION.default, 0);
        assert_eq!(v2_3::CFG_MAJOR_REVISION.default, 2);
        assert_eq!(v2_3::CFG_MINOR_REVISION.default, 3);

        for revision in Revision::ALL {
            let major = revision.find("CFG_MAJOR_REVISION").unwrap();
            let minor = revision.find("CFG_MINOR_REVISION").unwrap();

            assert_eq!(major.default, u32::from(revision.major()));
            assert_eq!(minor.default, u32::from(revision.minor()));
            assert_eq!(
                Revision::from_version(revision.major(), revision.minor()),
                Some(revision)
            );
        }

        assert_eq!(Revision::from_version(3, 0), None);
        assert_eq!(Revision::V2_3.to_string(), "v2.3");
    }

    #[test]
    fn shared_fields_keep_their_address() {
        for old in v1_0::FIELDS {
            if let Some(new) = v2_3::find(old.name) {
                assert_eq!(old.address, new.address, "{}", old.name);

                if !old.name.ends_with("_REVISION") {
                    assert_eq!(old.default, new.default, "{}", old.name);
                }
            }
        }
    }

    #[test]
    fn access_and_replication() {
        assert_eq!(v2_3::CFG_MAJOR_REVISION.access, Access::RoInt);
        assert_eq!(v2_3::DEFM_SNAP_SHOT.access, Access::WPlsH);
        assert_eq!(v1_0::FRAM_DISABLE.access, Access::RwPdef);
        assert_eq!(v1_0::FRAM_DISABLE.default, 1);

        assert_eq!(
            v2_3::ETH_DEST_ADDR_31_0.repeat,
            Some(Repeat {
                dimension: Dimension::EthPorts,
                stride: 0x100
            })
        );
        assert_eq!(
            v2_3::ORAN_CC_SSB_SECTS_X_SYMBOLS.repeat,
            Some(Repeat {
                dimension: Dimension::ComponentCarriers,
                stride: 0x70
            })
        );
        assert_eq!(v2_3::ORAN_CC_SSB_SECTS_X_SYMBOLS.enable, Some("cfg_ena_ssb"));
        assert_eq!(v2_3::ORAN_CC_ENABLE.repeat, None);
        assert!(v1_0::FIELDS.iter().all(|f| f.enable.is_none()));
    }
}
