#[cfg(feature = "defmt")]
use defmt::Format;

use crate::{field::Dimension, ll, map::RegisterMap, maybe_async_attr, Error, FrontHaul};

/// Distance between the register blocks of two Ethernet ports
const PORT_STRIDE: u32 = 0x100;

/// First word of a port's packet filter
const FILTER_BASE: &str = "DEFM_USER_DATA_FILTER_W0_31_0";

/// Distance between two filter words
const FILTER_WORD_STRIDE: u32 = 0x20;

/// Position of the mask after the four parts of a filter word
const FILTER_MASK_OFFSET: u32 = 0x10;

/// Transport protocol of the fronthaul
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transport {
    /// eCPRI
    Ecpri = 0,
    /// IEEE 1914.3
    Ieee1914_3 = 1,
}

/// Network layer the packets are carried in
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IpMode {
    /// Straight on Ethernet
    Raw = 0,
    /// IPv4
    Ipv4 = 1,
    /// IPv6
    Ipv6 = 3,
}

/// Source of the symbol strobe that paces the de-framer
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrobeSource {
    /// Generated inside the IP
    Internal = 0,
    /// Supplied from outside the IP
    External = 1,
}

/// 802.1Q tag of a port's outgoing packets
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VlanTag {
    /// VLAN identifier, 12 bits
    pub id: u16,
    /// Drop eligible indicator
    pub dei: bool,
    /// Priority code point, 3 bits
    pub pcp: u8,
}

/// Packet filter of the de-framer
///
/// Four filter words of 128 bits, each stored as four 32-bit parts, least
/// significant part first. Bit `n` of a mask set means byte `n` of the
/// matching filter word is ignored.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PacketFilter {
    /// Filter words
    pub words: [u32; 16],
    /// Byte masks, one per filter word
    pub masks: [u16; 4],
}

impl PacketFilter {
    /// A filter that lets every packet through
    pub const NONE: Self = PacketFilter {
        words: [0xffff_ffff; 16],
        masks: [0xffff; 4],
    };

    /// The filter that matches the given protocol setup
    ///
    /// Only raw Ethernet has a predefined filter. The EtherType is matched,
    /// behind the VLAN tag if there is one. IP modes get [`PacketFilter::NONE`]
    /// and need a filter of their own.
    pub fn for_protocol(transport: Transport, vlan: bool, ip_mode: IpMode) -> Self {
        let mut filter = PacketFilter::NONE;
        if ip_mode != IpMode::Raw {
            return filter;
        }

        let ether_type = match transport {
            Transport::Ecpri => 0xffff_feae,
            Transport::Ieee1914_3 => 0xffff_3dfc,
        };

        filter.masks[0] = 0xcfff;
        if vlan {
            filter.masks[1] = 0xfffc;
            filter.words[3] = 0xffff_0081;
            filter.words[4] = ether_type;
        } else {
            filter.words[3] = ether_type;
        }

        filter
    }
}

impl Default for PacketFilter {
    fn default() -> Self {
        PacketFilter::NONE
    }
}

/// Which of a port's two MAC addresses to access
#[derive(Copy, Clone)]
enum Mac {
    Dest,
    Src,
}

impl Mac {
    fn registers(self) -> (&'static str, &'static str) {
        match self {
            Mac::Dest => ("ETH_DEST_ADDR_47_32", "ETH_DEST_ADDR_31_0"),
            Mac::Src => ("ETH_SRC_ADDR_47_32", "ETH_SRC_ADDR_31_0"),
        }
    }
}

impl<BUS, MAP> FrontHaul<BUS, MAP>
where
    BUS: ll::RegisterBus,
    MAP: RegisterMap,
{
    /// Sets the destination MAC address of an Ethernet port
    #[maybe_async_attr]
    pub async fn set_dest_mac_addr(
        &mut self,
        port: u32,
        address: [u8; 6],
    ) -> Result<(), Error<BUS::Error>> {
        self.set_mac_addr(Mac::Dest, port, address).await
    }

    /// Sets the source MAC address of an Ethernet port
    #[maybe_async_attr]
    pub async fn set_src_mac_addr(
        &mut self,
        port: u32,
        address: [u8; 6],
    ) -> Result<(), Error<BUS::Error>> {
        self.set_mac_addr(Mac::Src, port, address).await
    }

    /// Returns the destination MAC address of an Ethernet port
    #[maybe_async_attr]
    pub async fn dest_mac_addr(&mut self, port: u32) -> Result<[u8; 6], Error<BUS::Error>> {
        self.mac_addr(Mac::Dest, port).await
    }

    /// Returns the source MAC address of an Ethernet port
    #[maybe_async_attr]
    pub async fn src_mac_addr(&mut self, port: u32) -> Result<[u8; 6], Error<BUS::Error>> {
        self.mac_addr(Mac::Src, port).await
    }

    /// Sets the VLAN tag of an Ethernet port
    #[maybe_async_attr]
    pub async fn set_vlan_tag(&mut self, port: u32, tag: VlanTag) -> Result<(), Error<BUS::Error>> {
        self.check_port(port).await?;

        let offset = port * PORT_STRIDE;
        self.write_reg_offset("ETH_VLAN_ID", offset, tag.id.into())
            .await?;
        self.write_reg_offset("ETH_VLAN_DEI", offset, tag.dei.into())
            .await?;
        self.write_reg_offset("ETH_VLAN_PCP", offset, tag.pcp.into())
            .await?;

        Ok(())
    }

    /// Returns the VLAN tag of an Ethernet port
    #[maybe_async_attr]
    pub async fn vlan_tag(&mut self, port: u32) -> Result<VlanTag, Error<BUS::Error>> {
        self.check_port(port).await?;

        let offset = port * PORT_STRIDE;
        let id = self.read_reg_offset("ETH_VLAN_ID", offset).await?;
        let dei = self.read_reg_offset("ETH_VLAN_DEI", offset).await?;
        let pcp = self.read_reg_offset("ETH_VLAN_PCP", offset).await?;

        // The fields are 12, 1 and 3 bits wide.
        Ok(VlanTag {
            id: id as u16,
            dei: dei != 0,
            pcp: pcp as u8,
        })
    }

    /// Sets the packet filter of an Ethernet port
    #[maybe_async_attr]
    pub async fn set_packet_filter(
        &mut self,
        port: u32,
        filter: &PacketFilter,
    ) -> Result<(), Error<BUS::Error>> {
        self.check_port(port).await?;
        let base = self.find(FILTER_BASE)?.address + port * PORT_STRIDE;

        for (i, (parts, &mask)) in filter.words.chunks(4).zip(&filter.masks).enumerate() {
            let word = base + i as u32 * FILTER_WORD_STRIDE;
            for (j, &part) in parts.iter().enumerate() {
                self.ll.write_raw(word + j as u32 * 4, part).await?;
            }
            self.ll
                .write_raw(word + FILTER_MASK_OFFSET, mask.into())
                .await?;
        }

        Ok(())
    }

    /// Returns the packet filter of an Ethernet port
    #[maybe_async_attr]
    pub async fn packet_filter(&mut self, port: u32) -> Result<PacketFilter, Error<BUS::Error>> {
        self.check_port(port).await?;
        let base = self.find(FILTER_BASE)?.address + port * PORT_STRIDE;

        let mut filter = PacketFilter::NONE;
        for i in 0..4 {
            let word = base + i as u32 * FILTER_WORD_STRIDE;
            for j in 0..4 {
                filter.words[i * 4 + j] = self.ll.read_raw(word + j as u32 * 4).await?;
            }
            // 16-bit mask
            filter.masks[i] = self.ll.read_raw(word + FILTER_MASK_OFFSET).await? as u16;
        }

        Ok(filter)
    }

    /// Selects the transport protocol, VLAN tagging and IP mode
    ///
    /// Also loads the matching [`PacketFilter::for_protocol`] into every
    /// Ethernet port.
    #[maybe_async_attr]
    pub async fn set_protocol(
        &mut self,
        transport: Transport,
        vlan: bool,
        ip_mode: IpMode,
    ) -> Result<(), Error<BUS::Error>> {
        debug!(
            "Protocol {}, VLAN {}, IP mode {}",
            transport as u32,
            vlan,
            ip_mode as u32
        );

        self.write_reg("FRAM_PROTOCOL_DEFINITION", transport as u32)
            .await?;
        self.write_reg("FRAM_GEN_VLAN_TAG", vlan.into()).await?;
        self.write_reg("FRAM_SEL_IPV_ADDRESS_TYPE", ip_mode as u32)
            .await?;

        let filter = PacketFilter::for_protocol(transport, vlan, ip_mode);
        let ports = self.instance_limit(Dimension::EthPorts).await?;
        for port in 0..ports {
            self.set_packet_filter(port, &filter).await?;
        }

        Ok(())
    }

    /// Selects where the de-framer's symbol strobe comes from
    #[maybe_async_attr]
    pub async fn set_symbol_strobe_source(
        &mut self,
        source: StrobeSource,
    ) -> Result<(), Error<BUS::Error>> {
        self.write_reg("DEFM_USE_ONE_SYMBOL_STROBE", source as u32)
            .await
    }

    #[maybe_async_attr]
    async fn set_mac_addr(
        &mut self,
        mac: Mac,
        port: u32,
        address: [u8; 6],
    ) -> Result<(), Error<BUS::Error>> {
        self.check_port(port).await?;

        let [a0, a1, a2, a3, a4, a5] = address;
        let hi = u32::from_be_bytes([0, 0, a0, a1]);
        let lo = u32::from_be_bytes([a2, a3, a4, a5]);

        let (hi_name, lo_name) = mac.registers();
        self.write_reg_offset(hi_name, port * PORT_STRIDE, hi).await?;
        self.write_reg_offset(lo_name, port * PORT_STRIDE, lo).await?;

        Ok(())
    }

    #[maybe_async_attr]
    async fn mac_addr(&mut self, mac: Mac, port: u32) -> Result<[u8; 6], Error<BUS::Error>> {
        self.check_port(port).await?;

        let (hi_name, lo_name) = mac.registers();
        let hi = self.read_reg_offset(hi_name, port * PORT_STRIDE).await?;
        let lo = self.read_reg_offset(lo_name, port * PORT_STRIDE).await?;

        let [_, _, a0, a1] = hi.to_be_bytes();
        let [a2, a3, a4, a5] = lo.to_be_bytes();

        Ok([a0, a1, a2, a3, a4, a5])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::{
        hl::test::{fake, simulated},
        map::{V1_0, V2_3},
    };

    const MAC: [u8; 6] = [0x00, 0x0a, 0x35, 0x01, 0x02, 0x03];

    #[tokio::test]
    async fn dest_address_layout() {
        let mut fh = fake::<V2_3>();
        fh.ll().bus().poke(0x0024, 2);

        fh.set_dest_mac_addr(1, MAC).await.unwrap();

        assert_eq!(fh.ll().bus().peek(0xa104), 0x0000_000a);
        assert_eq!(fh.ll().bus().peek(0xa100), 0x3501_0203);
        assert_eq!(fh.dest_mac_addr(1).await, Ok(MAC));
        assert_eq!(fh.dest_mac_addr(0).await, Ok([0; 6]));
    }

    #[tokio::test]
    async fn src_address_layout() {
        let mut fh = fake::<V1_0>();
        fh.ll().bus().poke(0x0024, 1);

        fh.set_src_mac_addr(0, [0xff; 6]).await.unwrap();

        assert_eq!(fh.ll().bus().peek(0xa00c), 0x0000_ffff);
        assert_eq!(fh.ll().bus().peek(0xa008), 0xffff_ffff);
        assert_eq!(fh.src_mac_addr(0).await, Ok([0xff; 6]));
    }

    #[tokio::test]
    async fn port_must_exist() {
        let mut fh = fake::<V2_3>();
        fh.ll().bus().poke(0x0024, 1);

        assert_eq!(
            fh.set_src_mac_addr(1, MAC).await,
            Err(Error::InstanceOutOfRange {
                name: "CFG_CONFIG_NO_OF_ETH_PORTS",
                index: 1,
                limit: 1,
            })
        );
        assert_eq!(fh.ll().bus().peek(0xa108), 0);
    }

    #[tokio::test]
    async fn mac_on_a_simulated_build() {
        let mut fh = simulated::<V2_3>();

        fh.set_dest_mac_addr(3, MAC).await.unwrap();

        assert_eq!(fh.ll().bus().peek(0xa300), 0x3501_0203);
        assert_eq!(fh.dest_mac_addr(3).await, Ok(MAC));
    }

    #[tokio::test]
    async fn vlan_tag_layout() {
        let mut fh = simulated::<V2_3>();
        let tag = VlanTag {
            id: 100,
            dei: true,
            pcp: 5,
        };

        fh.set_vlan_tag(2, tag).await.unwrap();

        assert_eq!(fh.ll().bus().peek(0xa210), 0x0000_b064);
        assert_eq!(fh.vlan_tag(2).await, Ok(tag));
        assert_eq!(
            fh.vlan_tag(0).await,
            Ok(VlanTag {
                id: 1,
                dei: false,
                pcp: 7
            })
        );
        assert_eq!(
            fh.set_vlan_tag(4, tag).await,
            Err(Error::InstanceOutOfRange {
                name: "CFG_CONFIG_NO_OF_ETH_PORTS",
                index: 4,
                limit: 4,
            })
        );
    }

    #[tokio::test]
    async fn packet_filter_layout() {
        let mut fh = simulated::<V2_3>();
        let mut filter = PacketFilter::NONE;
        for (i, word) in filter.words.iter_mut().enumerate() {
            *word = i as u32;
        }
        filter.masks = [0x0001, 0x0002, 0x0003, 0x0004];

        fh.set_packet_filter(1, &filter).await.unwrap();

        let bank = fh.ll().bus();
        assert_eq!(bank.peek(0x6200), 0);
        assert_eq!(bank.peek(0x620c), 3);
        assert_eq!(bank.peek(0x6210), 0x0001);
        assert_eq!(bank.peek(0x6220), 4);
        assert_eq!(bank.peek(0x6230), 0x0002);
        assert_eq!(bank.peek(0x626c), 15);
        assert_eq!(bank.peek(0x6270), 0x0004);
        // Port 0 keeps its reset filter
        assert_eq!(bank.peek(0x610c), 0xffff_feae);

        assert_eq!(fh.packet_filter(1).await, Ok(filter));
    }

    #[test]
    fn protocol_filters() {
        let ecpri = PacketFilter::for_protocol(Transport::Ecpri, false, IpMode::Raw);
        assert_eq!(ecpri.masks, [0xcfff, 0xffff, 0xffff, 0xffff]);
        assert_eq!(ecpri.words[3], 0xffff_feae);
        assert_eq!(ecpri.words[4], 0xffff_ffff);

        let tagged = PacketFilter::for_protocol(Transport::Ieee1914_3, true, IpMode::Raw);
        assert_eq!(tagged.masks[..2], [0xcfff, 0xfffc]);
        assert_eq!(tagged.words[3], 0xffff_0081);
        assert_eq!(tagged.words[4], 0xffff_3dfc);

        assert_eq!(
            PacketFilter::for_protocol(Transport::Ecpri, true, IpMode::Ipv6),
            PacketFilter::NONE
        );
        assert_eq!(PacketFilter::default(), PacketFilter::NONE);
    }

    #[tokio::test]
    async fn protocol_selection() {
        let mut fh = simulated::<V2_3>();

        fh.set_protocol(Transport::Ecpri, true, IpMode::Raw)
            .await
            .unwrap();

        assert_eq!(fh.read_reg("FRAM_PROTOCOL_DEFINITION").await, Ok(0));
        assert_eq!(fh.read_reg("FRAM_GEN_VLAN_TAG").await, Ok(1));
        assert_eq!(fh.read_reg("FRAM_SEL_IPV_ADDRESS_TYPE").await, Ok(0));

        let expected = PacketFilter::for_protocol(Transport::Ecpri, true, IpMode::Raw);
        for port in 0..4 {
            assert_eq!(fh.packet_filter(port).await, Ok(expected));
        }

        fh.set_protocol(Transport::Ieee1914_3, false, IpMode::Ipv4)
            .await
            .unwrap();
        assert_eq!(fh.read_reg("FRAM_PROTOCOL_DEFINITION").await, Ok(1));
        assert_eq!(fh.read_reg("FRAM_GEN_VLAN_TAG").await, Ok(0));
        assert_eq!(fh.read_reg("FRAM_SEL_IPV_ADDRESS_TYPE").await, Ok(1));
        assert_eq!(fh.packet_filter(3).await, Ok(PacketFilter::NONE));
    }

    #[tokio::test]
    async fn symbol_strobe() {
        let mut fh = fake::<V2_3>();

        fh.set_symbol_strobe_source(StrobeSource::External)
            .await
            .unwrap();
        assert_eq!(fh.read_reg("DEFM_USE_ONE_SYMBOL_STROBE").await, Ok(1));

        fh.set_symbol_strobe_source(StrobeSource::Internal)
            .await
            .unwrap();
        assert_eq!(fh.read_reg("DEFM_USE_ONE_SYMBOL_STROBE").await, Ok(0));

        let mut fh = fake::<V1_0>();
        assert_eq!(
            fh.set_symbol_strobe_source(StrobeSource::External).await,
            Err(Error::FieldNotFound)
        );
    }
}
