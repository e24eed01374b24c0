//! Register field descriptors
//!
//! Every control or status value of the radio interface lives in some bits
//! of a 32-bit word. A [`Field`] records where those bits are, what the
//! hardware resets them to, and how software is allowed to access them. The
//! descriptors themselves are plain constants; the generated tables for each
//! hardware revision are in [`crate::map`].

use core::fmt;

#[cfg(feature = "defmt")]
use defmt::Format;

/// Size of the register window of the IP, in bytes
pub const ADDRESS_SPACE: u32 = 0x1_0000;

/// An address bank of the radio interface
///
/// Bank base addresses are the same for every supported revision.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bank {
    /// Configuration, capability and interrupt registers
    Cfg,
    /// Framer (uplink) registers
    Fram,
    /// De-framer (downlink) registers
    Defm,
    /// Ethernet port registers
    Eth,
    /// Statistics counters
    Stats,
    /// Component carrier and O-RAN section registers
    Oran,
}

impl Bank {
    /// All banks, in address order
    pub const ALL: [Bank; 6] = [
        Bank::Cfg,
        Bank::Fram,
        Bank::Defm,
        Bank::Eth,
        Bank::Stats,
        Bank::Oran,
    ];

    /// Byte address of the first register of the bank
    pub const fn base_address(self) -> u32 {
        match self {
            Bank::Cfg => 0x0000,
            Bank::Fram => 0x2000,
            Bank::Defm => 0x6000,
            Bank::Eth => 0xa000,
            Bank::Stats => 0xc000,
            Bank::Oran => 0xe000,
        }
    }

    /// Byte address one past the last register of the bank
    pub const fn end_address(self) -> u32 {
        match self {
            Bank::Cfg => Bank::Fram.base_address(),
            Bank::Fram => Bank::Defm.base_address(),
            Bank::Defm => Bank::Eth.base_address(),
            Bank::Eth => Bank::Stats.base_address(),
            Bank::Stats => Bank::Oran.base_address(),
            Bank::Oran => ADDRESS_SPACE,
        }
    }

    /// Symbol prefix used by the fields of this bank, without the trailing `_`
    pub const fn prefix(self) -> &'static str {
        match self {
            Bank::Cfg => "CFG",
            Bank::Fram => "FRAM",
            Bank::Defm => "DEFM",
            Bank::Eth => "ETH",
            Bank::Stats => "STATS",
            Bank::Oran => "ORAN",
        }
    }

    /// Returns the bank that contains `address`
    ///
    /// Returns `None` for addresses outside of the register window.
    ///
    /// # Example
    ///
    /// ``` rust
    /// use oran_radio_if::Bank;
    ///
    /// assert_eq!(Bank::containing(0x0010), Some(Bank::Cfg));
    /// assert_eq!(Bank::containing(0xa104), Some(Bank::Eth));
    /// assert_eq!(Bank::containing(0x1_0000), None);
    /// ```
    pub fn containing(address: u32) -> Option<Bank> {
        Bank::ALL
            .iter()
            .copied()
            .find(|bank| address >= bank.base_address() && address < bank.end_address())
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// How software may access a field
///
/// The names follow the access types of the hardware register tool.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Access {
    /// Read-only internal value, fixed in the hardware description
    RoInt,
    /// Read-only constant, fixed when the IP is generated
    RoCst,
    /// Read-only signal, reflects live hardware state
    RoSig,
    /// Read/write
    Rw,
    /// Read/write, with a reset default that depends on IP parameters
    RwPdef,
    /// Write pulse: writing 1 triggers an action, the bit clears itself
    WPlsH,
}

impl Access {
    /// Whether reads return meaningful data
    pub const fn is_readable(self) -> bool {
        !matches!(self, Access::WPlsH)
    }

    /// Whether the field accepts writes
    pub const fn is_writable(self) -> bool {
        matches!(self, Access::Rw | Access::RwPdef | Access::WPlsH)
    }

    /// Whether the hardware clears the field after a write
    pub const fn is_self_clearing(self) -> bool {
        matches!(self, Access::WPlsH)
    }
}

/// Hardware array dimension along which a field is replicated
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    /// One copy per Ethernet port (`C_ETH_W`)
    EthPorts,
    /// One copy per component carrier (`C_MAX_COMP_CARR`)
    ComponentCarriers,
    /// One copy per downlink symbol (`C_MAX_DL_SYMS`)
    DlSymbols,
}

impl Dimension {
    /// Name of the capability register that holds the number of instances
    pub const fn limit_register(self) -> &'static str {
        match self {
            Dimension::EthPorts => "CFG_CONFIG_NO_OF_ETH_PORTS",
            Dimension::ComponentCarriers => "CFG_CONFIG_XRAN_MAX_CC",
            Dimension::DlSymbols => "CFG_CONFIG_XRAN_MAX_DL_SYMBOLS",
        }
    }
}

/// Replication of a field at a fixed address stride
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Repeat {
    /// The dimension the field is replicated along
    pub dimension: Dimension,
    /// Distance in bytes between two consecutive instances
    pub stride: u32,
}

/// Describes a single register field
///
/// `mask`, `offset` and `width` are redundant; [`Field::is_consistent`]
/// checks that they agree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Field {
    /// Symbol name, e.g. `CFG_MAJOR_REVISION`
    pub name: &'static str,
    /// Bank the field belongs to
    pub bank: Bank,
    /// Byte address of the word that holds the field
    pub address: u32,
    /// Bits of the word that belong to the field
    pub mask: u32,
    /// Position of the field's least significant bit
    pub offset: u8,
    /// Number of bits in the field
    pub width: u8,
    /// Value of the field after reset
    pub default: u32,
    /// Access type
    pub access: Access,
    /// Replication, if the field is one element of a hardware array
    pub repeat: Option<Repeat>,
    /// IP parameter that must be enabled for the field to exist
    pub enable: Option<&'static str>,
}

impl Field {
    /// Largest value the field can hold
    pub const fn max_value(&self) -> u32 {
        if self.width >= 32 {
            u32::MAX
        } else {
            (1 << self.width) - 1
        }
    }

    /// Position of the field's most significant bit
    ///
    /// A zero-width field reports its offset.
    pub const fn msb(&self) -> u8 {
        self.offset.saturating_add(self.width.saturating_sub(1))
    }

    /// Extracts the field from a register word
    #[inline(always)]
    pub const fn extract(&self, word: u32) -> u32 {
        match (word & self.mask).checked_shr(self.offset as u32) {
            Some(value) => value,
            None => 0,
        }
    }

    /// Replaces the field's bits in `word` with `value`
    ///
    /// Bits of `value` that don't fit into the field are dropped. All other
    /// bits of `word` are left untouched.
    ///
    /// # Example
    ///
    /// ``` rust
    /// use oran_radio_if::map::v2_3::CFG_MINOR_REVISION;
    ///
    /// let word = CFG_MINOR_REVISION.insert(0x0100_0000, 3);
    /// assert_eq!(word, 0x0103_0000);
    /// assert_eq!(CFG_MINOR_REVISION.extract(word), 3);
    /// ```
    #[inline(always)]
    pub const fn insert(&self, word: u32, value: u32) -> u32 {
        let shifted = match value.checked_shl(self.offset as u32) {
            Some(shifted) => shifted,
            None => 0,
        };

        (word & !self.mask) | (shifted & self.mask)
    }

    /// Checks that mask, offset, width and default agree with each other
    pub const fn is_consistent(&self) -> bool {
        self.width >= 1
            && self.offset < 32
            && self.offset as u32 + self.width as u32 <= 32
            && self.mask == self.max_value() << self.offset
            && self.default <= self.max_value()
            && self.address % 4 == 0
    }

    /// Byte address of instance `index` of the field
    ///
    /// A field without replication only has instance 0. Returns `None` for
    /// other indices, or if the address would overflow. The number of
    /// instances that actually exist is a property of the hardware build;
    /// [`FrontHaul::read_instance`] checks it at runtime.
    ///
    /// [`FrontHaul::read_instance`]: crate::hl::FrontHaul::read_instance
    pub fn instance_address(&self, index: u32) -> Option<u32> {
        match self.repeat {
            None if index == 0 => Some(self.address),
            None => None,
            Some(repeat) => repeat
                .stride
                .checked_mul(index)
                .and_then(|delta| self.address.checked_add(delta)),
        }
    }

    /// The register word with every bit except this field cleared and the
    /// field set to its reset default
    pub const fn default_word(&self) -> u32 {
        self.insert(0, self.default)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({:#06x})[{}:{}]",
            self.name,
            self.address,
            self.offset,
            self.msb()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: Field = Field {
        name: "CFG_TEST_STATUS",
        bank: Bank::Cfg,
        address: 0x18,
        mask: 0x0000_0f00,
        offset: 8,
        width: 4,
        default: 0x5,
        access: Access::RoSig,
        repeat: None,
        enable: None,
    };

    const PER_PORT: Field = Field {
        name: "ETH_TEST_PORT",
        bank: Bank::Eth,
        address: 0xa004,
        mask: 0xffff_ffff,
        offset: 0,
        width: 32,
        default: 0,
        access: Access::Rw,
        repeat: Some(Repeat {
            dimension: Dimension::EthPorts,
            stride: 0x100,
        }),
        enable: None,
    };

    #[test]
    fn extract_ignores_other_bits() {
        assert_eq!(STATUS.extract(0xffff_f3ff), 0x3);
        assert_eq!(STATUS.extract(0x0000_00ff), 0x0);
    }

    #[test]
    fn insert_preserves_other_bits() {
        assert_eq!(STATUS.insert(0xffff_ffff, 0), 0xffff_f0ff);
        assert_eq!(STATUS.insert(0x1234_5678, 0xa), 0x1234_5a78);
    }

    #[test]
    fn insert_truncates_wide_values() {
        assert_eq!(STATUS.insert(0, 0x1f), 0x0000_0f00);
    }

    #[test]
    fn full_width_field() {
        assert_eq!(PER_PORT.max_value(), u32::MAX);
        assert_eq!(PER_PORT.msb(), 31);
        assert_eq!(PER_PORT.insert(0x1234_5678, 0xdead_beef), 0xdead_beef);
        assert!(PER_PORT.is_consistent());
    }

    #[test]
    fn consistency_detects_bad_mask() {
        assert!(STATUS.is_consistent());

        let shifted = Field {
            mask: 0x0000_1e00,
            ..STATUS
        };
        assert!(!shifted.is_consistent());

        let too_big = Field {
            default: 0x10,
            ..STATUS
        };
        assert!(!too_big.is_consistent());

        let unaligned = Field {
            address: 0x19,
            ..STATUS
        };
        assert!(!unaligned.is_consistent());
    }

    #[test]
    fn instance_addresses() {
        assert_eq!(STATUS.instance_address(0), Some(0x18));
        assert_eq!(STATUS.instance_address(1), None);

        assert_eq!(PER_PORT.instance_address(0), Some(0xa004));
        assert_eq!(PER_PORT.instance_address(3), Some(0xa304));
        assert_eq!(PER_PORT.instance_address(u32::MAX), None);
    }

    #[test]
    fn default_word() {
        assert_eq!(STATUS.default_word(), 0x0000_0500);
    }

    #[test]
    fn bank_lookup() {
        assert_eq!(Bank::containing(0x0000), Some(Bank::Cfg));
        assert_eq!(Bank::containing(0x1ffc), Some(Bank::Cfg));
        assert_eq!(Bank::containing(0x2000), Some(Bank::Fram));
        assert_eq!(Bank::containing(0x6010), Some(Bank::Defm));
        assert_eq!(Bank::containing(0xc100), Some(Bank::Stats));
        assert_eq!(Bank::containing(0xfffc), Some(Bank::Oran));
        assert_eq!(Bank::containing(0x1_0000), None);
    }

    #[test]
    fn malformed_descriptors_dont_panic() {
        let empty = Field {
            mask: 0,
            width: 0,
            ..STATUS
        };
        assert_eq!(empty.msb(), 8);
        assert_eq!(empty.to_string(), "CFG_TEST_STATUS (0x0018)[8:8]");

        let beyond = Field {
            mask: 0xffff_ffff,
            offset: 40,
            ..STATUS
        };
        assert!(!beyond.is_consistent());
        assert_eq!(beyond.insert(0x1234_5678, 0xf), 0);
        assert_eq!(beyond.extract(0xffff_ffff), 0);
    }

    #[test]
    fn display() {
        assert_eq!(STATUS.to_string(), "CFG_TEST_STATUS (0x0018)[8:11]");
        assert_eq!(Bank::Stats.to_string(), "STATS");
    }
}
