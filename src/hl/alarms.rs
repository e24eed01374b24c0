use core::{
    fmt,
    ops::{BitAnd, BitOr, BitOrAssign},
};

#[cfg(feature = "defmt")]
use defmt::Format;

use crate::{ll, map::RegisterMap, maybe_async_attr, Error, FrontHaul};

/// Address of the interrupt enable word
const INTR_ENABLE_ADDR: u32 = 0x0014;

/// Address of the interrupt status word
const INTR_STATUS_ADDR: u32 = 0x0018;

/// Set of alarm conditions
///
/// The bits are the ones of the interrupt status and enable words in the
/// CFG bank.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alarms(u32);

impl Alarms {
    /// The framer is held in reset
    pub const FRAMER_RESET_STATUS: Self = Self(0x0000_0001);
    /// The de-framer is held in reset
    pub const DEFRAMER_RESET_STATUS: Self = Self(0x0000_0002);
    /// De-framer input FIFO overflow
    pub const DEFM_IN_FIFO_OF: Self = Self(0x0000_0100);
    /// De-framer input FIFO underflow
    pub const DEFM_IN_FIFO_UF: Self = Self(0x0000_0200);
    /// Ethernet pipe C-plane buffer overflow
    pub const ETH_CIRC_BUFF_OF: Self = Self(0x0000_0400);
    /// Ethernet pipe packet table overflow
    pub const ETH_CIRC_BUFF_PTR_OF: Self = Self(0x0000_0800);
    /// Framer output FIFO overflow
    pub const FRAM_OUT_FIFO_OF: Self = Self(0x0000_1000);
    /// Framer output FIFO underflow
    pub const FRAM_OUT_FIFO_UF: Self = Self(0x0000_2000);
    /// More PRACH sections than the framer can hold
    pub const PRACH_SECTION_OF: Self = Self(0x0000_4000);
    /// No PRACH section found for a symbol
    pub const PRACH_SECTION_NF: Self = Self(0x0000_8000);
    /// AXI-Lite access timed out
    pub const AXI_TIMEOUT: Self = Self(0x8000_0000);

    /// Every condition that raises an interrupt
    ///
    /// The two reset status bits are state, not alarms.
    pub const INTERRUPTS: Self = Self(0x8000_ff00);

    const NAMES: [(Alarms, &'static str); 9] = [
        (Alarms::DEFM_IN_FIFO_OF, "CFG_DEFM_INT_INFIFO_OF"),
        (Alarms::DEFM_IN_FIFO_UF, "CFG_DEFM_INT_INFIFO_UF"),
        (Alarms::ETH_CIRC_BUFF_OF, "CFG_DEFM_INT_ETH_PIPE_C_BUF_OF"),
        (Alarms::ETH_CIRC_BUFF_PTR_OF, "CFG_DEFM_INT_ETH_PIPE_TABLE_OF"),
        (Alarms::FRAM_OUT_FIFO_OF, "CFG_FRAM_INT_OUTFIFO_OF"),
        (Alarms::FRAM_OUT_FIFO_UF, "CFG_FRAM_INT_OUTFIFO_UF"),
        (Alarms::PRACH_SECTION_OF, "CFG_FRAM_INT_PRACH_SECTION_OVERFLOW"),
        (Alarms::PRACH_SECTION_NF, "CFG_FRAM_INT_PRACH_SECTION_NOTFOUND"),
        (Alarms::AXI_TIMEOUT, "CFG_AXI_TIMEOUT_STATUS"),
    ];

    /// The empty set
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Raw bit map
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Builds a set from a raw bit map
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Whether every alarm in `other` is also in `self`
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no alarm is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Status register names of the interrupt alarms in the set
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMES
            .into_iter()
            .filter(move |(alarm, _)| self.contains(*alarm))
            .map(|(_, name)| name)
    }
}

impl BitOr for Alarms {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Alarms {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Alarms {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for Alarms {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Alarms({:#x})", self.0)
    }
}

impl<BUS, MAP> FrontHaul<BUS, MAP>
where
    BUS: ll::RegisterBus,
    MAP: RegisterMap,
{
    /// Enables the interrupts in `alarms` and disables all others
    ///
    /// Also sets the master interrupt enable.
    #[maybe_async_attr]
    pub async fn enable_interrupts(&mut self, alarms: Alarms) -> Result<(), Error<BUS::Error>> {
        debug!("Enabling interrupts {:#x}", alarms.bits());

        self.ll.write_raw(INTR_ENABLE_ADDR, alarms.bits()).await?;
        self.write_reg("CFG_MASTER_INT_ENABLE", 1).await?;

        Ok(())
    }

    /// Reads the raw interrupt status, including the reset status bits
    #[maybe_async_attr]
    pub async fn interrupt_status(&mut self) -> Result<Alarms, Error<BUS::Error>> {
        let status = self.ll.read_raw(INTR_STATUS_ADDR).await?;

        Ok(Alarms::from_bits(status))
    }

    /// Handles a pending interrupt
    ///
    /// Call this from the interrupt handler of the IP. Pending alarms are
    /// added to the latched set returned by [`FrontHaul::alarms`]. Every
    /// alarm is a serious error, so the data pipe is reset and the interrupt
    /// cleared. Returns the alarms that were pending, which is empty if the
    /// interrupt wasn't raised by the IP.
    #[maybe_async_attr]
    pub async fn service_interrupt(&mut self) -> Result<Alarms, Error<BUS::Error>> {
        let status = self.interrupt_status().await? & Alarms::INTERRUPTS;
        if status.is_empty() {
            return Ok(status);
        }

        info!("Interrupt status = {:#x}", status.bits());
        self.alarms |= status;

        for name in status.names() {
            info!("Interrupt: {}", name);
        }

        self.write_reg("FRAM_DISABLE", 1).await?;
        self.write_reg("DEFM_RESTART", 1).await?;
        self.write_reg("FRAM_DISABLE", 0).await?;
        self.write_reg("DEFM_RESTART", 0).await?;

        // Toggling the master enable clears the interrupt
        self.write_reg("CFG_MASTER_INT_ENABLE", 0).await?;
        self.write_reg("CFG_MASTER_INT_ENABLE", 1).await?;

        Ok(status)
    }

    /// Alarms latched since they were last cleared
    pub fn alarms(&self) -> Alarms {
        self.alarms
    }

    /// Clears the latched alarms
    pub fn clear_alarms(&mut self) {
        self.alarms = Alarms::empty();
    }
}
