//! Low-level interface to the radio interface
//!
//! This module implements word- and field-level access to the registers of
//! the IP. Users of this library should typically not need to use it
//! directly. Please consider using the [high-level interface] instead, which
//! looks fields up by name and knows about the hardware revision.
//!
//! All access goes through a [`RegisterBus`]. Two buses are provided:
//! [`Mmio`] for a memory-mapped register window and [`FakeBank`], an
//! in-memory stand-in for when there is no hardware.
//!
//! **NOTE**: Field writes silently truncate values that are wider than the
//! field, the same way the hardware does.
//!
//! [high-level interface]: ../hl/index.html

use core::fmt;

#[cfg(feature = "defmt")]
use defmt::Format;

use crate::{
    field::{Field, ADDRESS_SPACE},
    maybe_async_attr,
};

/// Number of 32-bit words in the register window
const WORDS: usize = (ADDRESS_SPACE / 4) as usize;

/// A 32-bit register bus
///
/// Addresses are byte offsets into the register window of the IP. The
/// low-level interface only ever passes word-aligned addresses inside the
/// window, but implementations must not rely on that for memory safety.
#[allow(async_fn_in_trait)]
#[cfg_attr(feature = "async", maybe_async::must_be_async(AFIT))]
#[cfg_attr(not(feature = "async"), maybe_async::must_be_sync)]
pub trait RegisterBus {
    /// Error reported by the bus
    type Error;

    /// Reads the word at `address`
    async fn read32(&mut self, address: u32) -> Result<u32, Self::Error>;

    /// Writes `value` to the word at `address`
    async fn write32(&mut self, address: u32, value: u32) -> Result<(), Self::Error>;
}

/// Entry point to the low-level API
///
/// Please consider using [hl::FrontHaul] instead.
///
/// [hl::FrontHaul]: ../hl/struct.FrontHaul.html
#[derive(Copy, Clone, Debug)]
pub struct Fhi<BUS> {
    bus: BUS,
}

impl<BUS> Fhi<BUS> {
    /// Create a new instance of `Fhi` on top of the given bus
    pub fn new(bus: BUS) -> Self {
        Fhi { bus }
    }

    /// Allow access to the bus
    pub fn bus(&mut self) -> &mut BUS {
        &mut self.bus
    }

    /// Release the bus
    pub fn free(self) -> BUS {
        self.bus
    }

    /// Provides access to a register field
    pub fn field(&mut self, field: &'static Field) -> FieldAccessor<'_, BUS> {
        FieldAccessor {
            fhi: self,
            field,
            offset: 0,
        }
    }
}

impl<BUS> Fhi<BUS>
where
    BUS: RegisterBus,
{
    /// Reads a whole register word
    #[maybe_async_attr]
    pub async fn read_raw(&mut self, address: u32) -> Result<u32, Error<BUS::Error>> {
        check_address::<BUS::Error>(address)?;

        let value = self.bus.read32(address).await.map_err(Error::Bus)?;
        trace!("READ_REG: ({:#x}) => {:#x}", address, value);

        Ok(value)
    }

    /// Writes a whole register word
    #[maybe_async_attr]
    pub async fn write_raw(&mut self, address: u32, value: u32) -> Result<(), Error<BUS::Error>> {
        check_address::<BUS::Error>(address)?;

        self.bus.write32(address, value).await.map_err(Error::Bus)?;
        trace!("WRITE_REG: ({:#x}) <= {:#x}", address, value);

        Ok(())
    }
}

/// Provides access to a register field
///
/// You can get an instance for a given field using [`Fhi::field`].
pub struct FieldAccessor<'s, BUS> {
    fhi: &'s mut Fhi<BUS>,
    field: &'static Field,
    offset: u32,
}

impl<'s, BUS> FieldAccessor<'s, BUS> {
    /// Moves the access `offset` bytes past the field's own address
    ///
    /// Used to reach the other instances of replicated fields.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// The field being accessed
    pub fn descriptor(&self) -> &'static Field {
        self.field
    }

    fn address<E>(&self) -> Result<u32, Error<E>> {
        self.field
            .address
            .checked_add(self.offset)
            .ok_or(Error::OutOfRange {
                address: self.field.address,
            })
    }
}

impl<'s, BUS> FieldAccessor<'s, BUS>
where
    BUS: RegisterBus,
{
    /// Read the field
    #[inline]
    #[maybe_async_attr]
    pub async fn read(&mut self) -> Result<u32, Error<BUS::Error>> {
        let address = self.address::<BUS::Error>()?;
        check_address::<BUS::Error>(address)?;

        let word = self.fhi.bus.read32(address).await.map_err(Error::Bus)?;
        let value = self.field.extract(word);

        trace!(
            "READ_REG: {} ({:#x})[{}:{}] => {:#x}",
            self.field.name,
            address,
            self.field.offset,
            self.field.msb(),
            value
        );

        Ok(value)
    }

    /// Write the field
    ///
    /// The other fields sharing the register word keep their current value.
    #[inline]
    #[maybe_async_attr]
    pub async fn write(&mut self, value: u32) -> Result<(), Error<BUS::Error>> {
        self.modify(|_| value).await
    }

    /// Modify the field
    ///
    /// Reads the word, passes the field's current value to `f` and writes
    /// back what `f` returns.
    #[inline]
    #[maybe_async_attr]
    pub async fn modify<F>(&mut self, f: F) -> Result<(), Error<BUS::Error>>
    where
        F: FnOnce(u32) -> u32,
    {
        if !self.field.access.is_writable() {
            return Err(Error::ReadOnly {
                name: self.field.name,
            });
        }

        let address = self.address::<BUS::Error>()?;
        check_address::<BUS::Error>(address)?;

        let word = self.fhi.bus.read32(address).await.map_err(Error::Bus)?;
        let value = f(self.field.extract(word));
        let word = self.field.insert(word, value);
        self.fhi.bus.write32(address, word).await.map_err(Error::Bus)?;

        trace!(
            "WRITE_REG: {} ({:#x})[{}:{}] <= {:#x}",
            self.field.name,
            address,
            self.field.offset,
            self.field.msb(),
            value
        );

        Ok(())
    }
}

fn check_address<E>(address: u32) -> Result<(), Error<E>> {
    if address % 4 != 0 {
        return Err(Error::Unaligned { address });
    }
    if address >= ADDRESS_SPACE {
        return Err(Error::OutOfRange { address });
    }

    Ok(())
}

/// An error that can occur when accessing registers
#[derive(Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum Error<E> {
    /// The bus reported an error
    Bus(E),

    /// The address is not word aligned
    Unaligned {
        /// The offending address
        address: u32,
    },

    /// The address lies outside of the register window
    OutOfRange {
        /// The offending address
        address: u32,
    },

    /// The field can't be written
    ReadOnly {
        /// Name of the field
        name: &'static str,
    },
}

impl<E> fmt::Display for Error<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Bus(error) => write!(f, "bus error: {:?}", error),
            Error::Unaligned { address } => write!(f, "unaligned address {:#06x}", address),
            Error::OutOfRange { address } => {
                write!(f, "address {:#x} outside of the register window", address)
            }
            Error::ReadOnly { name } => write!(f, "field {} is read-only", name),
        }
    }
}

#[cfg(feature = "std")]
impl<E> std::error::Error for Error<E> where E: fmt::Debug {}

/// The address given to a bus is unaligned or outside of the register window
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub struct BadAddress(pub u32);

fn word_index(address: u32) -> Result<usize, BadAddress> {
    if address % 4 != 0 || address >= ADDRESS_SPACE {
        return Err(BadAddress(address));
    }

    Ok((address / 4) as usize)
}

/// Build configuration loaded by [`FakeBank::simulated`]
const SIMULATED_BUILD: &[(&str, u32)] = &[
    ("CFG_CONFIG_NO_OF_FRAM_ANTS", 8),
    ("CFG_CONFIG_NO_OF_DEFM_ANTS", 16),
    ("CFG_CONFIG_NO_OF_ETH_PORTS", 4),
    ("CFG_CONFIG_XRAN_MAX_CC", 8),
    ("CFG_CONFIG_XRAN_MAX_DL_SYMBOLS", 16),
    ("CFG_CONFIG_XRAN_FRAM_ETH_PKT_MAX", 8000),
    ("CFG_CONFIG_XRAN_DEFM_ETH_PKT_MAX", 8000),
    ("CFG_CONFIG_XRAN_MAX_SCS", 6600),
    ("CFG_CONFIG_XRAN_MAX_CTRL_SYMBOLS", 16),
    ("CFG_CONFIG_XRAN_MAX_UL_CTRL_1KWORDS", 4),
    ("CFG_CONFIG_XRAN_MAX_DL_CTRL_1KWORDS", 4),
    ("CFG_CONFIG_XRAN_MAX_DL_DATA_1KWORDS", 16),
    ("CFG_CONFIG_XRAN_TIMER_CLK_PS", 5000),
    ("CFG_CONFIG_XRAN_UNSOL_PORTS_FRAM", 1),
    ("CFG_CONFIG_XRAN_PRACH_C_PORTS", 1),
    ("CFG_CONFIG_LIMIT_DU_W", 4),
    ("CFG_CONFIG_LIMIT_BS_W", 6),
    ("CFG_CONFIG_LIMIT_CC_W", 3),
    ("CFG_CONFIG_LIMIT_RU_I_W", 8),
    ("CFG_CONFIG_LIMIT_RU_O_W", 5),
    ("CFG_CONFIG_MAP_TABLE_W", 8),
    ("CFG_CONFIG_XRAN_DECOMP_IN_CORE_NOCOMP", 1),
    ("CFG_CONFIG_XRAN_DECOMP_IN_CORE_BFP", 1),
    ("CFG_CONFIG_XRAN_DECOMP_IN_CORE_MODCOMP", 1),
    // 9, 12 and 14 bits
    ("CFG_CONFIG_XRAN_DECOMP_IN_CORE_BFP_WIDTHS", 0x5200),
    // 1 to 5 bits
    ("CFG_CONFIG_XRAN_DECOMP_IN_CORE_MODC_WIDTHS", 0x3e),
    ("CFG_CONFIG_XRAN_COMP_IN_CORE_NOCOMP", 1),
    ("CFG_CONFIG_XRAN_COMP_IN_CORE_BFP", 1),
    ("CFG_CONFIG_XRAN_COMP_IN_CORE_BFP_WIDTHS", 0x5200),
];

/// In-memory register bank
///
/// Stands in for the hardware in tests and simulations. Every word simply
/// holds what was last written to it; there is no hardware behaviour behind
/// it, so status fields only change when written through [`FakeBank::poke`]
/// or the bus.
#[derive(Clone)]
pub struct FakeBank {
    words: [u32; WORDS],
}

impl FakeBank {
    /// Create a bank with every word cleared
    pub fn new() -> Self {
        FakeBank { words: [0; WORDS] }
    }

    /// Create a bank with every field at its reset default
    ///
    /// Only instance 0 of replicated fields is initialised.
    pub fn with_defaults(fields: &[Field]) -> Self {
        let mut bank = FakeBank::new();

        for field in fields {
            if let Ok(index) = word_index(field.address) {
                bank.words[index] = field.insert(bank.words[index], field.default);
            }
        }

        bank
    }

    /// Create a bank that looks like a typical build of the IP
    ///
    /// Starts from [`FakeBank::with_defaults`] and fills in the build
    /// configuration registers: 4 Ethernet ports, 8 component carriers, 16
    /// downlink symbols, block floating point and modulation compression.
    /// Entries that `fields` doesn't know are skipped.
    pub fn simulated(fields: &[Field]) -> Self {
        let mut bank = FakeBank::with_defaults(fields);

        for &(name, value) in SIMULATED_BUILD {
            let Some(field) = fields.iter().find(|field| field.name == name) else {
                continue;
            };
            if let Ok(index) = word_index(field.address) {
                bank.words[index] = field.insert(bank.words[index], value);
            }
        }

        bank
    }

    /// Reads a word without going through the bus
    ///
    /// Returns 0 for addresses outside of the bank.
    pub fn peek(&self, address: u32) -> u32 {
        word_index(address).map_or(0, |index| self.words[index])
    }

    /// Writes a word without going through the bus
    ///
    /// Writes outside of the bank are ignored.
    pub fn poke(&mut self, address: u32, value: u32) {
        if let Ok(index) = word_index(address) {
            self.words[index] = value;
        }
    }
}

impl Default for FakeBank {
    fn default() -> Self {
        FakeBank::new()
    }
}

// Printing 16k words is not useful.
impl fmt::Debug for FakeBank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let used = self.words.iter().filter(|&&word| word != 0).count();
        write!(f, "FakeBank {{ non_zero_words: {} }}", used)
    }
}

#[cfg_attr(feature = "async", maybe_async::must_be_async(AFIT))]
#[cfg_attr(not(feature = "async"), maybe_async::must_be_sync)]
impl RegisterBus for FakeBank {
    type Error = BadAddress;

    async fn read32(&mut self, address: u32) -> Result<u32, Self::Error> {
        word_index(address).map(|index| self.words[index])
    }

    async fn write32(&mut self, address: u32, value: u32) -> Result<(), Self::Error> {
        let index = word_index(address)?;
        self.words[index] = value;

        Ok(())
    }
}

/// Memory-mapped register window
///
/// Accesses are volatile 32-bit loads and stores relative to `base`.
#[derive(Debug)]
pub struct Mmio {
    base: *mut u32,
}

impl Mmio {
    /// Create a bus on top of a mapped register window
    ///
    /// # Safety
    ///
    /// `base` must point to the start of the IP's register window, mapped
    /// with at least [`ADDRESS_SPACE`] bytes, and stay valid for volatile
    /// reads and writes for as long as the returned value is used.
    pub const unsafe fn new(base: *mut u32) -> Self {
        Mmio { base }
    }
}

#[cfg_attr(feature = "async", maybe_async::must_be_async(AFIT))]
#[cfg_attr(not(feature = "async"), maybe_async::must_be_sync)]
impl RegisterBus for Mmio {
    type Error = BadAddress;

    async fn read32(&mut self, address: u32) -> Result<u32, Self::Error> {
        let index = word_index(address)?;

        // SAFETY: `index` is inside the window that `new` was promised.
        Ok(unsafe { self.base.add(index).read_volatile() })
    }

    async fn write32(&mut self, address: u32, value: u32) -> Result<(), Self::Error> {
        let index = word_index(address)?;

        // SAFETY: `index` is inside the window that `new` was promised.
        unsafe { self.base.add(index).write_volatile(value) };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::map::v2_3;

    #[tokio::test]
    async fn raw_access() {
        let mut fhi = Fhi::new(FakeBank::new());

        fhi.write_raw(0x0010, 0xdead_beef).await.unwrap();
        assert_eq!(fhi.read_raw(0x0010).await.unwrap(), 0xdead_beef);
        assert_eq!(fhi.bus().peek(0x0010), 0xdead_beef);
    }

    #[tokio::test]
    async fn raw_access_checks_the_address() {
        let mut fhi = Fhi::new(FakeBank::new());

        assert_eq!(
            fhi.read_raw(0x0012).await,
            Err(Error::Unaligned { address: 0x0012 })
        );
        assert_eq!(
            fhi.write_raw(0x1_0000, 0).await,
            Err(Error::OutOfRange { address: 0x1_0000 })
        );
    }

    #[tokio::test]
    async fn field_read_extracts_bits() {
        let mut bank = FakeBank::new();
        bank.poke(0x0000, 0x0203_0000);
        let mut fhi = Fhi::new(bank);

        let major = fhi.field(&v2_3::CFG_MAJOR_REVISION).read().await.unwrap();
        let minor = fhi.field(&v2_3::CFG_MINOR_REVISION).read().await.unwrap();
        let version = fhi.field(&v2_3::CFG_VERSION_REVISION).read().await.unwrap();

        assert_eq!((major, minor, version), (2, 3, 0));
    }

    #[tokio::test]
    async fn field_write_preserves_neighbours() {
        // CFG_USER_RW_OUT shares its word with CFG_USER_RO_IN
        let mut bank = FakeBank::new();
        bank.poke(0x000c, 0x00ab_0000);
        let mut fhi = Fhi::new(bank);

        fhi.field(&v2_3::CFG_USER_RW_OUT).write(0x5a).await.unwrap();

        assert_eq!(fhi.bus().peek(0x000c), 0x00ab_005a);
    }

    #[tokio::test]
    async fn field_write_truncates() {
        let mut fhi = Fhi::new(FakeBank::new());

        fhi.field(&v2_3::CFG_MASTER_INT_ENABLE).write(0x3).await.unwrap();

        assert_eq!(fhi.bus().peek(0x0010), 0x1);
    }

    #[tokio::test]
    async fn field_modify() {
        let mut fhi = Fhi::new(FakeBank::with_defaults(v2_3::FIELDS));

        fhi.field(&v2_3::CFG_TIMEOUT_VALUE)
            .modify(|timeout| timeout * 2)
            .await
            .unwrap();

        let timeout = fhi.field(&v2_3::CFG_TIMEOUT_VALUE).read().await.unwrap();
        assert_eq!(timeout, v2_3::CFG_TIMEOUT_VALUE.default * 2);
    }

    #[tokio::test]
    async fn read_only_fields_reject_writes() {
        let mut fhi = Fhi::new(FakeBank::with_defaults(v2_3::FIELDS));

        let result = fhi.field(&v2_3::CFG_MAJOR_REVISION).write(7).await;

        assert_eq!(
            result,
            Err(Error::ReadOnly {
                name: "CFG_MAJOR_REVISION"
            })
        );
        assert_eq!(fhi.bus().peek(0x0000) >> 24, 2);
    }

    #[tokio::test]
    async fn replicated_field_offset() {
        let mut fhi = Fhi::new(FakeBank::new());

        fhi.field(&v2_3::ETH_DEST_ADDR_47_32)
            .offset(2 * 0x100)
            .write(0x0102)
            .await
            .unwrap();

        assert_eq!(fhi.bus().peek(0xa204), 0x0102);
        assert_eq!(fhi.bus().peek(0xa004), 0);
    }

    #[test]
    fn defaults_are_loaded() {
        let bank = FakeBank::with_defaults(v2_3::FIELDS);

        for field in v2_3::FIELDS {
            assert_eq!(field.extract(bank.peek(field.address)), field.default);
        }
    }

    #[test]
    fn simulated_build_configuration() {
        let bank = FakeBank::simulated(v2_3::FIELDS);

        assert_eq!(bank.peek(0x0020), 0x0010_0008);
        assert_eq!(bank.peek(0x0024), 4);
        assert_eq!(bank.peek(0x002c), 8);
        assert_eq!(bank.peek(0x0030), 16);
        assert_eq!(bank.peek(0x0084), 0x003e_5200);
        // Reset defaults of other fields survive
        assert_eq!(v2_3::CFG_TIMEOUT_VALUE.extract(bank.peek(0x0008)), 0x80);
        assert_eq!(bank.peek(0x0000) >> 24, 2);

        // Unknown to this revision
        let bank = FakeBank::simulated(crate::map::v1_0::FIELDS);
        assert_eq!(bank.peek(0x0108), 0);
        assert_eq!(bank.peek(0x0024), 4);
    }

    #[test]
    fn fake_bank_ignores_bad_addresses() {
        let mut bank = FakeBank::new();

        bank.poke(0x2_0000, 1);
        bank.poke(0x0001, 1);

        assert_eq!(bank.peek(0x2_0000), 0);
        assert_eq!(bank.peek(0x0000), 0);
    }

    #[tokio::test]
    async fn mmio_bus() {
        let mut window = std::vec![0u32; WORDS];
        let mut bus = unsafe { Mmio::new(window.as_mut_ptr()) };

        bus.write32(0x0024, 4).await.unwrap();
        assert_eq!(bus.read32(0x0024).await, Ok(4));
        assert_eq!(bus.read32(0x1_0000).await, Err(BadAddress(0x1_0000)));
        assert_eq!(bus.write32(0x0002, 0).await, Err(BadAddress(0x0002)));

        drop(bus);
        assert_eq!(window[9], 4);
    }
}
