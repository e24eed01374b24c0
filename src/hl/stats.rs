#[cfg(feature = "defmt")]
use defmt::Format;

use crate::{field::Dimension, ll, map::RegisterMap, maybe_async_attr, Error, FrontHaul};

/// Name of the statistics snapshot register
pub(crate) const SNAPSHOT: &str = "DEFM_SNAP_SHOT";

/// Distance between the statistics blocks of two Ethernet ports
const PORT_STRIDE: u32 = 0x100;

/// Statistics of one Ethernet port
///
/// Counters that don't exist in a revision read as 0.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EthStats {
    /// Good packets received
    pub total_rx_good_pkt_cnt: u64,
    /// Bad packets received
    pub total_rx_bad_pkt_cnt: u64,
    /// Packets received with a bad FCS
    pub total_rx_bad_fcs_cnt: u64,
    /// Receive bit rate, in bits per second
    pub total_rx_bit_rate: u64,
    /// O-RAN receive bit rate, in bits per second
    pub oran_rx_bit_rate: u64,
    /// O-RAN U-plane packets received
    pub oran_rx_total: u64,
    /// O-RAN U-plane packets received on time
    pub oran_rx_on_time: u64,
    /// O-RAN U-plane packets received early
    pub oran_rx_early: u64,
    /// O-RAN U-plane packets received late
    pub oran_rx_late: u64,
    /// O-RAN C-plane packets received
    pub oran_rx_total_c: u64,
    /// O-RAN C-plane packets received on time
    pub oran_rx_on_time_c: u64,
    /// O-RAN C-plane packets received early
    pub oran_rx_early_c: u64,
    /// O-RAN C-plane packets received late
    pub oran_rx_late_c: u64,
    /// Corrupt O-RAN packets received
    pub oran_rx_corrupt: u64,
    /// O-RAN packets dropped because of errors
    pub oran_rx_error_drop: u64,
    /// O-RAN U-plane packets sent
    pub oran_tx_total: u64,
    /// O-RAN C-plane packets sent
    pub oran_tx_total_c: u64,
    /// Offset of the earliest U-plane packet
    pub offset_earliest_u_pkt: u32,
    /// Offset of the earliest C-plane packet
    pub offset_earliest_c_pkt: u32,
}

impl<BUS, MAP> FrontHaul<BUS, MAP>
where
    BUS: ll::RegisterBus,
    MAP: RegisterMap,
{
    /// Clears all statistics counters
    ///
    /// Takes a snapshot with reset.
    #[maybe_async_attr]
    pub async fn clear_stats(&mut self) -> Result<(), Error<BUS::Error>> {
        let field = self.find(SNAPSHOT)?;

        self.ll.write_raw(field.address, 0xffff_ffff).await?;

        Ok(())
    }

    /// Reads a statistics counter of an Ethernet port
    ///
    /// `prefix` names the counter without the `_L`/`_H` suffix of its halves.
    /// Revisions with 32-bit counters have a single field of that name.
    #[maybe_async_attr]
    pub async fn read_counter(&mut self, prefix: &str, port: u32) -> Result<u64, Error<BUS::Error>> {
        let offset = port.saturating_mul(PORT_STRIDE);

        match (
            MAP::find_suffixed(prefix, "_L"),
            MAP::find_suffixed(prefix, "_H"),
        ) {
            (Some(low), Some(high)) => {
                let low = self.ll.field(low).offset(offset).read().await?;
                let high = self.ll.field(high).offset(offset).read().await?;

                Ok(u64::from(high) << 32 | u64::from(low))
            }
            _ => {
                let field = self.find(prefix)?;
                let value = self.ll.field(field).offset(offset).read().await?;

                Ok(u64::from(value))
            }
        }
    }

    /// Reads the statistics of an Ethernet port
    ///
    /// Takes a snapshot (without reset) first, if the revision supports it.
    #[maybe_async_attr]
    pub async fn eth_stats(&mut self, port: u32) -> Result<EthStats, Error<BUS::Error>> {
        self.check_port(port).await?;

        if MAP::find(SNAPSHOT).is_some() {
            self.write_reg(SNAPSHOT, 1).await?;
        }

        let stats = EthStats {
            total_rx_good_pkt_cnt: self
                .optional_counter("STATS_ETH_STATS_TOTAL_RX_GOOD_PKT_CNT", port)
                .await?,
            total_rx_bad_pkt_cnt: self
                .optional_counter("STATS_ETH_STATS_TOTAL_RX_BAD_PKT_CNT", port)
                .await?,
            total_rx_bad_fcs_cnt: self
                .optional_counter("STATS_ETH_STATS_TOTAL_RX_BAD_FCS_CNT", port)
                .await?,
            total_rx_bit_rate: self
                .optional_counter("STATS_ETH_STATS_TOTAL_RX_BIT_RATE", port)
                .await?
                * 64,
            oran_rx_bit_rate: self
                .optional_counter("STATS_ETH_STATS_ORAN_RX_BIT_RATE", port)
                .await?
                * 64,
            oran_rx_total: self.optional_counter("STATS_ORAN_RX_TOTAL", port).await?,
            oran_rx_on_time: self.optional_counter("STATS_ORAN_RX_ON_TIME", port).await?,
            oran_rx_early: self.optional_counter("STATS_ORAN_RX_EARLY", port).await?,
            oran_rx_late: self.optional_counter("STATS_ORAN_RX_LATE", port).await?,
            oran_rx_total_c: self.optional_counter("STATS_ORAN_RX_TOTAL_C", port).await?,
            oran_rx_on_time_c: self
                .optional_counter("STATS_ORAN_RX_ON_TIME_C", port)
                .await?,
            oran_rx_early_c: self.optional_counter("STATS_ORAN_RX_EARLY_C", port).await?,
            oran_rx_late_c: self.optional_counter("STATS_ORAN_RX_LATE_C", port).await?,
            oran_rx_corrupt: self.optional_counter("STATS_ORAN_RX_CORRUPT", port).await?,
            oran_rx_error_drop: self
                .optional_counter("STATS_ORAN_RX_ERROR_DROP", port)
                .await?,
            oran_tx_total: self.optional_counter("STATS_ORAN_TX_TOTAL", port).await?,
            oran_tx_total_c: self.optional_counter("STATS_ORAN_TX_TOTAL_C", port).await?,
            // 12-bit fields
            offset_earliest_u_pkt: self
                .optional_counter("STATS_OFFSET_EARLIEST_U_PKT", port)
                .await? as u32,
            offset_earliest_c_pkt: self
                .optional_counter("STATS_OFFSET_EARLIEST_C_PKT", port)
                .await? as u32,
        };

        Ok(stats)
    }

    /// Checks that `port` exists in this build of the IP
    #[maybe_async_attr]
    pub(crate) async fn check_port(&mut self, port: u32) -> Result<(), Error<BUS::Error>> {
        let limit = self.instance_limit(Dimension::EthPorts).await?;

        if port >= limit {
            warn!("Invalid Ethernet port {} (ports: {})", port, limit);
            return Err(Error::InstanceOutOfRange {
                name: Dimension::EthPorts.limit_register(),
                index: port,
                limit,
            });
        }

        Ok(())
    }

    #[maybe_async_attr]
    async fn optional_counter(&mut self, prefix: &str, port: u32) -> Result<u64, Error<BUS::Error>> {
        let present = MAP::find(prefix).is_some() || MAP::find_suffixed(prefix, "_L").is_some();
        if !present {
            return Ok(0);
        }

        self.read_counter(prefix, port).await
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::{
        hl::test::{fake, simulated},
        map::{v1_0, v2_3, V1_0, V2_3},
    };

    #[tokio::test]
    async fn clear_writes_the_whole_word() {
        let mut fh = fake::<V2_3>();

        fh.clear_stats().await.unwrap();

        assert_eq!(fh.ll().bus().peek(v2_3::DEFM_SNAP_SHOT.address), 0xffff_ffff);
    }

    #[tokio::test]
    async fn clear_needs_the_snapshot_register() {
        let mut fh = fake::<V1_0>();

        assert_eq!(fh.clear_stats().await, Err(Error::FieldNotFound));
    }

    #[tokio::test]
    async fn wide_counters() {
        let mut fh = fake::<V2_3>();
        fh.ll().bus().poke(0xc120, 0x8765_4321);
        fh.ll().bus().poke(0xc124, 0x0000_0002);

        assert_eq!(
            fh.read_counter("STATS_ORAN_RX_TOTAL", 1).await,
            Ok(0x2_8765_4321)
        );
        assert_eq!(fh.read_counter("STATS_ORAN_RX_TOTAL", 0).await, Ok(0));
        assert_eq!(
            fh.read_counter("STATS_ORAN_RX_NOTHING", 0).await,
            Err(Error::FieldNotFound)
        );
    }

    #[tokio::test]
    async fn narrow_counters() {
        let mut fh = fake::<V1_0>();
        fh.ll().bus().poke(v1_0::STATS_ETH_STATS_TOTAL_RX_GOOD_PKT_CNT.address, 99);

        assert_eq!(
            fh.read_counter("STATS_ETH_STATS_TOTAL_RX_GOOD_PKT_CNT", 0).await,
            Ok(99)
        );
    }

    #[tokio::test]
    async fn port_statistics() {
        let mut fh = fake::<V2_3>();
        {
            let bank = fh.ll().bus();
            bank.poke(0x0024, 2);
            bank.poke(0xc100, 10);
            bank.poke(0xc104, 1);
            bank.poke(0xc118, 1000);
            bank.poke(0xc11c, 500);
            bank.poke(0xc160, 3);
            bank.poke(0xc178, 4);
            bank.poke(0xc180, 0xfff);
        }

        let stats = fh.eth_stats(1).await.unwrap();

        assert_eq!(stats.total_rx_good_pkt_cnt, 1 << 32 | 10);
        assert_eq!(stats.total_rx_bit_rate, 64_000);
        assert_eq!(stats.oran_rx_bit_rate, 32_000);
        assert_eq!(stats.oran_rx_corrupt, 3);
        assert_eq!(stats.oran_tx_total_c, 4);
        assert_eq!(stats.offset_earliest_u_pkt, 0xfff);
        assert_eq!(stats.oran_rx_total, 0);

        // Snapshot without reset
        assert_eq!(fh.ll().bus().peek(0x6010), 1);
    }

    #[tokio::test]
    async fn port_statistics_on_v1_0() {
        let mut fh = fake::<V1_0>();
        fh.ll().bus().poke(0x0024, 1);
        fh.ll().bus().poke(0xc008, 5);

        let stats = fh.eth_stats(0).await.unwrap();

        assert_eq!(stats.total_rx_bad_fcs_cnt, 5);
        assert_eq!(stats.oran_rx_total, 0);
    }

    #[tokio::test]
    async fn simulated_ports() {
        let mut fh = simulated::<V2_3>();
        fh.ll().bus().poke(0xc008, 7);

        let stats = fh.eth_stats(0).await.unwrap();
        assert_eq!(stats.total_rx_bad_pkt_cnt, 7);

        fh.eth_stats(3).await.unwrap();
        assert_eq!(
            fh.eth_stats(4).await,
            Err(Error::InstanceOutOfRange {
                name: "CFG_CONFIG_NO_OF_ETH_PORTS",
                index: 4,
                limit: 4,
            })
        );
    }

    #[tokio::test]
    async fn unknown_port() {
        let mut fh = fake::<V2_3>();
        fh.ll().bus().poke(0x0024, 1);

        assert_eq!(
            fh.eth_stats(1).await,
            Err(Error::InstanceOutOfRange {
                name: "CFG_CONFIG_NO_OF_ETH_PORTS",
                index: 1,
                limit: 1,
            })
        );
    }
}
