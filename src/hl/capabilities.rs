use core::{fmt, ops::BitOr};

#[cfg(feature = "defmt")]
use defmt::Format;

use crate::{ll, map::RegisterMap, maybe_async_attr, Error, FrontHaul};

/// Set of IQ (de)compression methods
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IqCompMethods(u8);

impl IqCompMethods {
    /// No compression
    pub const NONE: Self = Self(0x01);
    /// Block floating point
    pub const BLOCK_FP: Self = Self(0x02);
    /// Block scaling
    pub const BLOCK_SCALE: Self = Self(0x04);
    /// μ-law
    pub const U_LAW: Self = Self(0x08);
    /// Modulation compression
    pub const MODULATION: Self = Self(0x10);

    /// The empty set
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Raw bit map
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Builds a set from a raw bit map, dropping unknown bits
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & 0x1f)
    }

    /// Whether every method in `other` is also in `self`
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether the set is empty
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for IqCompMethods {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for IqCompMethods {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IqCompMethods({:#x})", self.0)
    }
}

/// Features and limits of the IP build
///
/// Read from the `CFG_CONFIG_*` registers. Registers that don't exist in a
/// revision read as 0.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capabilities {
    /// Number of component carriers
    pub max_cc: u32,
    /// Number of Ethernet ports
    pub num_eth_ports: u32,
    /// Supported numerologies, bit `n` set for numerology `n`
    pub numerologies: u32,
    /// Whether the extended cyclic prefix is supported
    pub extended_cp: bool,
    /// Decompression methods (downlink)
    pub iq_de_comp_methods: IqCompMethods,
    /// Supported block floating point widths for decompression
    pub iq_de_comp_bfp_widths: u32,
    /// Supported modulation compression widths for decompression
    pub iq_de_comp_mod_widths: u32,
    /// Compression methods (uplink)
    pub iq_comp_methods: IqCompMethods,
    /// Supported block floating point widths for compression
    pub iq_comp_bfp_widths: u32,
    /// Number of framer spatial streams
    pub no_framer_ss: u32,
    /// Number of de-framer spatial streams
    pub no_deframer_ss: u32,
    /// Largest Ethernet payload of the framer
    pub max_framer_ethernet_pkt: u32,
    /// Largest Ethernet payload of the de-framer
    pub max_deframer_ethernet_pkt: u32,
    /// Subcarriers over all component carriers
    pub max_subcarriers: u32,
    /// Downlink U-plane symbols
    pub max_data_symbols: u32,
    /// Control symbols per component carrier
    pub max_ctrl_symbols: u32,
    /// Uplink control memory, in 1k words
    pub max_ul_ctrl_1kwords: u32,
    /// Downlink control memory, in 1k words
    pub max_dl_ctrl_1kwords: u32,
    /// Downlink data memory, in 1k words
    pub max_dl_data_1kwords: u32,
    /// Timer clock period in picoseconds
    pub timer_clk_ps: u32,
    /// Number of unsolicited framer ports
    pub num_unsolicited_ports: u32,
    /// Number of PRACH C-plane ports
    pub num_prach_ports: u32,
    /// Width of the DU id in the eAxC id
    pub du_id_limit: u32,
    /// Width of the band sector id in the eAxC id
    pub bs_id_limit: u32,
    /// Width of the component carrier id in the eAxC id
    pub cc_id_limit: u32,
    /// Width of the RU port id in the eAxC id, input side
    pub ru_id_limit: u32,
    /// Width of the RU port id in the eAxC id, output side
    pub ss_id_limit: u32,
    /// Width of the RU port mapping table
    pub ru_ports_map_width: u32,
}

/// Numerologies 0 to 4
const NUMEROLOGIES: u32 = 0x1f;

impl<BUS, MAP> FrontHaul<BUS, MAP>
where
    BUS: ll::RegisterBus,
    MAP: RegisterMap,
{
    /// Reads the capabilities of the IP build
    #[maybe_async_attr]
    pub async fn capabilities(&mut self) -> Result<Capabilities, Error<BUS::Error>> {
        let mut de_comp = IqCompMethods::empty();
        for (name, method) in [
            ("CFG_CONFIG_XRAN_DECOMP_IN_CORE_NOCOMP", IqCompMethods::NONE),
            ("CFG_CONFIG_XRAN_DECOMP_IN_CORE_BFP", IqCompMethods::BLOCK_FP),
            ("CFG_CONFIG_XRAN_DECOMP_IN_CORE_BSC", IqCompMethods::BLOCK_SCALE),
            ("CFG_CONFIG_XRAN_DECOMP_IN_CORE_MU", IqCompMethods::U_LAW),
            ("CFG_CONFIG_XRAN_DECOMP_IN_CORE_MODCOMP", IqCompMethods::MODULATION),
        ] {
            if self.read_optional(name).await? != 0 {
                de_comp = de_comp | method;
            }
        }

        let mut comp = IqCompMethods::empty();
        for (name, method) in [
            ("CFG_CONFIG_XRAN_COMP_IN_CORE_NOCOMP", IqCompMethods::NONE),
            ("CFG_CONFIG_XRAN_COMP_IN_CORE_BFP", IqCompMethods::BLOCK_FP),
        ] {
            if self.read_optional(name).await? != 0 {
                comp = comp | method;
            }
        }

        let caps = Capabilities {
            max_cc: self.read_optional("CFG_CONFIG_XRAN_MAX_CC").await?,
            num_eth_ports: self.read_optional("CFG_CONFIG_NO_OF_ETH_PORTS").await?,
            numerologies: NUMEROLOGIES,
            extended_cp: false,
            iq_de_comp_methods: de_comp,
            iq_de_comp_bfp_widths: self
                .read_optional("CFG_CONFIG_XRAN_DECOMP_IN_CORE_BFP_WIDTHS")
                .await?,
            iq_de_comp_mod_widths: self
                .read_optional("CFG_CONFIG_XRAN_DECOMP_IN_CORE_MODC_WIDTHS")
                .await?,
            iq_comp_methods: comp,
            iq_comp_bfp_widths: self
                .read_optional("CFG_CONFIG_XRAN_COMP_IN_CORE_BFP_WIDTHS")
                .await?,
            no_framer_ss: self.read_optional("CFG_CONFIG_NO_OF_FRAM_ANTS").await?,
            no_deframer_ss: self.read_optional("CFG_CONFIG_NO_OF_DEFM_ANTS").await?,
            max_framer_ethernet_pkt: self
                .read_optional("CFG_CONFIG_XRAN_FRAM_ETH_PKT_MAX")
                .await?,
            max_deframer_ethernet_pkt: self
                .read_optional("CFG_CONFIG_XRAN_DEFM_ETH_PKT_MAX")
                .await?,
            max_subcarriers: self.read_optional("CFG_CONFIG_XRAN_MAX_SCS").await?,
            max_data_symbols: self.read_optional("CFG_CONFIG_XRAN_MAX_DL_SYMBOLS").await?,
            max_ctrl_symbols: self
                .read_optional("CFG_CONFIG_XRAN_MAX_CTRL_SYMBOLS")
                .await?,
            max_ul_ctrl_1kwords: self
                .read_optional("CFG_CONFIG_XRAN_MAX_UL_CTRL_1KWORDS")
                .await?,
            max_dl_ctrl_1kwords: self
                .read_optional("CFG_CONFIG_XRAN_MAX_DL_CTRL_1KWORDS")
                .await?,
            max_dl_data_1kwords: self
                .read_optional("CFG_CONFIG_XRAN_MAX_DL_DATA_1KWORDS")
                .await?,
            timer_clk_ps: self.read_optional("CFG_CONFIG_XRAN_TIMER_CLK_PS").await?,
            num_unsolicited_ports: self
                .read_optional("CFG_CONFIG_XRAN_UNSOL_PORTS_FRAM")
                .await?,
            num_prach_ports: self.read_optional("CFG_CONFIG_XRAN_PRACH_C_PORTS").await?,
            du_id_limit: self.read_optional("CFG_CONFIG_LIMIT_DU_W").await?,
            bs_id_limit: self.read_optional("CFG_CONFIG_LIMIT_BS_W").await?,
            cc_id_limit: self.read_optional("CFG_CONFIG_LIMIT_CC_W").await?,
            ru_id_limit: self.read_optional("CFG_CONFIG_LIMIT_RU_I_W").await?,
            ss_id_limit: self.read_optional("CFG_CONFIG_LIMIT_RU_O_W").await?,
            ru_ports_map_width: self.read_optional("CFG_CONFIG_MAP_TABLE_W").await?,
        };

        debug!(
            "Capabilities: {} carriers, {} ports",
            caps.max_cc,
            caps.num_eth_ports
        );

        Ok(caps)
    }

    /// Reads a field that may not exist in this revision, 0 if it doesn't
    #[maybe_async_attr]
    async fn read_optional(&mut self, name: &str) -> Result<u32, Error<BUS::Error>> {
        match MAP::find(name) {
            Some(field) => Ok(self.ll.field(field).read().await?),
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::{
        hl::test::{fake, simulated},
        map::{V1_0, V2_3},
    };

    #[tokio::test]
    async fn reset_defaults() {
        let mut fh = fake::<V2_3>();

        let caps = fh.capabilities().await.unwrap();

        assert_eq!(caps.iq_de_comp_methods, IqCompMethods::NONE);
        assert_eq!(caps.iq_comp_methods, IqCompMethods::NONE);
        assert_eq!(caps.numerologies, 0x1f);
        assert!(!caps.extended_cp);
        assert_eq!(caps.max_cc, 0);
    }

    #[tokio::test]
    async fn reads_the_build_configuration() {
        let mut fh = fake::<V2_3>();
        {
            let bank = fh.ll().bus();
            bank.poke(0x0020, 0x0008_0004);
            bank.poke(0x0024, 2);
            bank.poke(0x002c, 8);
            bank.poke(0x0030, 14);
            bank.poke(0x005c, 2543);
            bank.poke(0x0080, 0x0000_0013);
            bank.poke(0x0084, 0x003e_5200);
            bank.poke(0x0088, 0x0003_0000);
            bank.poke(0x008c, 0x5200);
            bank.poke(0x0108, 3);
        }

        let caps = fh.capabilities().await.unwrap();

        assert_eq!(caps.no_framer_ss, 4);
        assert_eq!(caps.no_deframer_ss, 8);
        assert_eq!(caps.num_eth_ports, 2);
        assert_eq!(caps.max_cc, 8);
        assert_eq!(caps.max_data_symbols, 14);
        assert_eq!(caps.timer_clk_ps, 2543);
        assert_eq!(
            caps.iq_de_comp_methods,
            IqCompMethods::NONE | IqCompMethods::BLOCK_FP | IqCompMethods::MODULATION
        );
        assert_eq!(caps.iq_de_comp_bfp_widths, 0x5200);
        assert_eq!(caps.iq_de_comp_mod_widths, 0x3e);
        assert_eq!(
            caps.iq_comp_methods,
            IqCompMethods::NONE | IqCompMethods::BLOCK_FP
        );
        assert_eq!(caps.iq_comp_bfp_widths, 0x5200);
        assert_eq!(caps.cc_id_limit, 3);
    }

    #[tokio::test]
    async fn simulated_build() {
        let mut fh = simulated::<V2_3>();

        let caps = fh.capabilities().await.unwrap();

        assert_eq!(caps.num_eth_ports, 4);
        assert_eq!(caps.max_cc, 8);
        assert_eq!(caps.max_data_symbols, 16);
        assert_eq!(caps.no_framer_ss, 8);
        assert_eq!(caps.no_deframer_ss, 16);
        assert_eq!(caps.max_subcarriers, 6600);
        assert_eq!(caps.timer_clk_ps, 5000);
        assert_eq!(
            caps.iq_de_comp_methods,
            IqCompMethods::NONE | IqCompMethods::BLOCK_FP | IqCompMethods::MODULATION
        );
        assert_eq!(caps.iq_de_comp_mod_widths, 0x3e);
        assert_eq!(caps.iq_comp_methods, IqCompMethods::NONE | IqCompMethods::BLOCK_FP);
        assert_eq!(caps.iq_comp_bfp_widths, 0x5200);
        assert_eq!(
            (caps.du_id_limit, caps.bs_id_limit, caps.cc_id_limit),
            (4, 6, 3)
        );
        assert_eq!((caps.ru_id_limit, caps.ss_id_limit), (8, 5));
        assert_eq!(caps.ru_ports_map_width, 8);
    }

    #[tokio::test]
    async fn simulated_build_on_v1_0() {
        let mut fh = simulated::<V1_0>();

        let caps = fh.capabilities().await.unwrap();

        assert_eq!(caps.num_eth_ports, 4);
        assert_eq!(caps.max_data_symbols, 16);
        assert!(caps.iq_comp_methods.is_empty());
        assert_eq!(caps.cc_id_limit, 0);
    }

    #[tokio::test]
    async fn missing_registers_read_as_zero() {
        let mut fh = fake::<V1_0>();
        fh.ll().bus().poke(0x0080, 0xffff_ffff);
        fh.ll().bus().poke(0x0108, 0xf);

        let caps = fh.capabilities().await.unwrap();

        assert!(caps.iq_de_comp_methods.is_empty());
        assert!(caps.iq_comp_methods.is_empty());
        assert_eq!(caps.cc_id_limit, 0);
    }

    #[test]
    fn method_sets() {
        let methods = IqCompMethods::NONE | IqCompMethods::U_LAW;

        assert_eq!(methods.bits(), 0x09);
        assert!(methods.contains(IqCompMethods::U_LAW));
        assert!(!methods.contains(IqCompMethods::BLOCK_FP | IqCompMethods::U_LAW));
        assert_eq!(IqCompMethods::from_bits_truncate(0xff).bits(), 0x1f);
        assert_eq!(std::format!("{:?}", methods), "IqCompMethods(0x9)");
    }
}
