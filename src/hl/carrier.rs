use crate::{field::Dimension, ll, map::RegisterMap, maybe_async_attr, Error, FrontHaul};

/// Bit map of the enabled component carriers
pub(crate) const ENABLE: &str = "ORAN_CC_ENABLE";

/// Write pulse that makes a component carrier pick up its configuration
const RELOAD: &str = "ORAN_CC_RELOAD";

impl<BUS, MAP> FrontHaul<BUS, MAP>
where
    BUS: ll::RegisterBus,
    MAP: RegisterMap,
{
    /// Enables component carrier `cc`
    #[maybe_async_attr]
    pub async fn enable_carrier(&mut self, cc: u32) -> Result<(), Error<BUS::Error>> {
        self.check_carrier(cc).await?;

        let field = self.find(ENABLE)?;
        self.ll.field(field).modify(|mask| mask | 1 << cc).await?;

        Ok(())
    }

    /// Disables component carrier `cc`
    #[maybe_async_attr]
    pub async fn disable_carrier(&mut self, cc: u32) -> Result<(), Error<BUS::Error>> {
        self.check_carrier(cc).await?;

        let field = self.find(ENABLE)?;
        self.ll.field(field).modify(|mask| mask & !(1 << cc)).await?;

        Ok(())
    }

    /// Makes component carrier `cc` reload its configuration
    #[maybe_async_attr]
    pub async fn reload_carrier(&mut self, cc: u32) -> Result<(), Error<BUS::Error>> {
        self.check_carrier(cc).await?;

        self.write_reg(RELOAD, 1 << cc).await
    }

    /// Bit map of the enabled component carriers, bit `n` for carrier `n`
    #[maybe_async_attr]
    pub async fn enabled_carriers(&mut self) -> Result<u8, Error<BUS::Error>> {
        // 8-bit field
        Ok(self.read_reg(ENABLE).await? as u8)
    }

    /// Enables exactly the component carriers set in `mask`
    #[maybe_async_attr]
    pub async fn set_enabled_carriers(&mut self, mask: u8) -> Result<(), Error<BUS::Error>> {
        self.write_reg(ENABLE, mask.into()).await
    }

    /// Checks that carrier `cc` exists and has a bit in the enable map
    #[maybe_async_attr]
    async fn check_carrier(&mut self, cc: u32) -> Result<(), Error<BUS::Error>> {
        let width: u32 = self.find(ENABLE)?.width.into();
        let limit = self
            .instance_limit(Dimension::ComponentCarriers)
            .await?
            .min(width);

        if cc >= limit {
            warn!("Invalid component carrier {} (carriers: {})", cc, limit);
            return Err(Error::InstanceOutOfRange {
                name: Dimension::ComponentCarriers.limit_register(),
                index: cc,
                limit,
            });
        }

        Ok(())
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
    async fn enable_and_disable() {
        let mut fh = simulated::<V2_3>();

        fh.enable_carrier(0).await.unwrap();
        fh.enable_carrier(7).await.unwrap();
        assert_eq!(fh.enabled_carriers().await, Ok(0x81));
        assert_eq!(fh.ll().bus().peek(0xe004), 0x81);

        fh.disable_carrier(0).await.unwrap();
        assert_eq!(fh.enabled_carriers().await, Ok(0x80));

        fh.set_enabled_carriers(0x0f).await.unwrap();
        assert_eq!(fh.enabled_carriers().await, Ok(0x0f));
    }

    #[tokio::test]
    async fn reload_pulses_one_bit() {
        let mut fh = simulated::<V1_0>();

        fh.reload_carrier(3).await.unwrap();

        assert_eq!(fh.ll().bus().peek(0xe000), 0x08);
    }

    #[tokio::test]
    async fn carrier_must_exist() {
        let mut fh = simulated::<V2_3>();

        assert_eq!(
            fh.enable_carrier(8).await,
            Err(Error::InstanceOutOfRange {
                name: "CFG_CONFIG_XRAN_MAX_CC",
                index: 8,
                limit: 8,
            })
        );

        let mut fh = fake::<V2_3>();
        fh.ll().bus().poke(0x002c, 2);
        assert_eq!(
            fh.reload_carrier(2).await,
            Err(Error::InstanceOutOfRange {
                name: "CFG_CONFIG_XRAN_MAX_CC",
                index: 2,
                limit: 2,
            })
        );
        assert_eq!(fh.ll().bus().peek(0xe000), 0);
    }

    #[tokio::test]
    async fn enable_map_bounds_large_builds() {
        let mut fh = fake::<V2_3>();
        fh.ll().bus().poke(0x002c, 16);

        assert_eq!(
            fh.disable_carrier(8).await,
            Err(Error::InstanceOutOfRange {
                name: "CFG_CONFIG_XRAN_MAX_CC",
                index: 8,
                limit: 8,
            })
        );
    }
}
