//! High-level interface to the radio interface
//!
//! The entry point to this API is the [FrontHaul] struct. Please refer to
//! the documentation there for more details.
//!
//! This module implements a high-level interface to the IP. This is the
//! recommended way to access the registers using this crate, unless you need
//! the greater flexibility provided by the [register-level interface].
//!
//! [register-level interface]: ../ll/index.html

use core::{fmt, marker::PhantomData};

pub use alarms::*;
pub use capabilities::*;
pub use error::*;
pub use eth::*;
pub use stats::*;
pub use version::*;

use crate::{
    field::{Bank, Dimension, Field},
    ll,
    map::{RegisterMap, Revision},
    maybe_async_attr,
};

mod alarms;
mod capabilities;
mod carrier;
mod error;
mod eth;
mod stats;
mod version;

/// Entry point to the radio interface driver API
///
/// `MAP` selects the register map of the hardware revision, e.g.
/// [`V2_3`](crate::map::V2_3). Use [`FrontHaul::check_revision`] to make
/// sure it matches the hardware.
pub struct FrontHaul<BUS, MAP> {
    ll: ll::Fhi<BUS>,
    alarms: Alarms,
    _map: PhantomData<MAP>,
}

// Can't be derived without putting requirements on `BUS` and `MAP`.
impl<BUS, MAP> fmt::Debug for FrontHaul<BUS, MAP>
where
    MAP: RegisterMap,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "FrontHaul {{ revision: {}, alarms: {:?}, .. }}",
            MAP::REVISION,
            self.alarms
        )
    }
}

impl<BUS, MAP> FrontHaul<BUS, MAP>
where
    MAP: RegisterMap,
{
    /// Create an instance of `FrontHaul` on top of the given bus
    ///
    /// Doesn't touch the hardware.
    pub fn new(bus: BUS) -> Self {
        FrontHaul {
            ll: ll::Fhi::new(bus),
            alarms: Alarms::empty(),
            _map: PhantomData,
        }
    }

    /// Provides direct access to the register-level API
    ///
    /// Be aware that by using the register-level API, you can invalidate
    /// various assumptions that the high-level API makes about the state of
    /// the hardware.
    pub fn ll(&mut self) -> &mut ll::Fhi<BUS> {
        &mut self.ll
    }

    /// Release the bus
    pub fn free(self) -> BUS {
        self.ll.free()
    }

    /// Revision of the register map in use
    pub fn revision(&self) -> Revision {
        MAP::REVISION
    }
}

impl<BUS, MAP> FrontHaul<BUS, MAP>
where
    BUS: ll::RegisterBus,
    MAP: RegisterMap,
{
    /// Looks up a field of the register map by name
    pub fn find(&self, name: &str) -> Result<&'static Field, Error<BUS::Error>> {
        MAP::find(name).ok_or_else(|| {
            warn!("Register '{}' not found", name);
            Error::FieldNotFound
        })
    }

    /// Reads the field called `name`
    #[maybe_async_attr]
    pub async fn read_reg(&mut self, name: &str) -> Result<u32, Error<BUS::Error>> {
        self.read_reg_offset(name, 0).await
    }

    /// Reads the field called `name`, `offset` bytes past its own address
    #[maybe_async_attr]
    pub async fn read_reg_offset(
        &mut self,
        name: &str,
        offset: u32,
    ) -> Result<u32, Error<BUS::Error>> {
        let field = self.find(name)?;

        Ok(self.ll.field(field).offset(offset).read().await?)
    }

    /// Writes `value` to the field called `name`
    #[maybe_async_attr]
    pub async fn write_reg(&mut self, name: &str, value: u32) -> Result<(), Error<BUS::Error>> {
        self.write_reg_offset(name, 0, value).await
    }

    /// Writes `value` to the field called `name`, `offset` bytes past its own
    /// address
    #[maybe_async_attr]
    pub async fn write_reg_offset(
        &mut self,
        name: &str,
        offset: u32,
        value: u32,
    ) -> Result<(), Error<BUS::Error>> {
        let field = self.find(name)?;
        self.ll.field(field).offset(offset).write(value).await?;

        Ok(())
    }

    /// Reads the register word at `address`
    #[maybe_async_attr]
    pub async fn peek(&mut self, address: u32) -> Result<u32, Error<BUS::Error>> {
        Ok(self.ll.read_raw(address).await?)
    }

    /// Writes the register word at `address`
    #[maybe_async_attr]
    pub async fn poke(&mut self, address: u32, value: u32) -> Result<(), Error<BUS::Error>> {
        self.ll.write_raw(address, value).await?;

        Ok(())
    }

    /// Number of instances the hardware provides along `dimension`
    #[maybe_async_attr]
    pub async fn instance_limit(&mut self, dimension: Dimension) -> Result<u32, Error<BUS::Error>> {
        self.read_reg(dimension.limit_register()).await
    }

    /// Reads instance `index` of a replicated field
    #[maybe_async_attr]
    pub async fn read_instance(
        &mut self,
        field: &'static Field,
        index: u32,
    ) -> Result<u32, Error<BUS::Error>> {
        let offset = self.instance_offset(field, index).await?;

        Ok(self.ll.field(field).offset(offset).read().await?)
    }

    /// Writes instance `index` of a replicated field
    #[maybe_async_attr]
    pub async fn write_instance(
        &mut self,
        field: &'static Field,
        index: u32,
        value: u32,
    ) -> Result<(), Error<BUS::Error>> {
        let offset = self.instance_offset(field, index).await?;
        self.ll.field(field).offset(offset).write(value).await?;

        Ok(())
    }

    #[maybe_async_attr]
    async fn instance_offset(
        &mut self,
        field: &'static Field,
        index: u32,
    ) -> Result<u32, Error<BUS::Error>> {
        let limit = match field.repeat {
            Some(repeat) => self.instance_limit(repeat.dimension).await?,
            None => 1,
        };

        let out_of_range = Error::InstanceOutOfRange {
            name: field.name,
            index,
            limit,
        };
        if index >= limit {
            return Err(out_of_range);
        }

        field
            .instance_address(index)
            .map(|address| address - field.address)
            .ok_or(out_of_range)
    }

    /// Reads every readable field of `bank`
    ///
    /// Calls `f` with each field and its value, in name order. Write-pulse
    /// fields are skipped, they always read back as 0.
    #[maybe_async_attr]
    pub async fn dump<F>(&mut self, bank: Bank, mut f: F) -> Result<(), Error<BUS::Error>>
    where
        F: FnMut(&'static Field, u32),
    {
        for field in MAP::fields_in(bank) {
            if !field.access.is_readable() {
                continue;
            }

            let value = self.ll.field(field).read().await?;
            f(field, value);
        }

        Ok(())
    }

    /// Resets the data pipe
    ///
    /// Disables the framer and restarts the de-framer. Unless `hold` is set,
    /// both are enabled again afterwards, all component carriers are disabled
    /// and the latched alarms and the statistics counters are cleared.
    #[maybe_async_attr]
    pub async fn reset(&mut self, hold: bool) -> Result<(), Error<BUS::Error>> {
        debug!("Resetting data pipe (hold: {})", hold);

        self.write_reg("FRAM_DISABLE", 1).await?;
        self.write_reg("DEFM_RESTART", 1).await?;

        if !hold {
            self.write_reg("FRAM_DISABLE", 0).await?;
            self.write_reg("DEFM_RESTART", 0).await?;

            self.write_reg(carrier::ENABLE, 0).await?;

            self.clear_alarms();
            if MAP::find(stats::SNAPSHOT).is_some() {
                self.clear_stats().await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::{
        ll::FakeBank,
        map::{v1_0, v2_3, V1_0, V2_3},
    };

    pub(crate) fn fake<MAP: RegisterMap>() -> FrontHaul<FakeBank, MAP> {
        let _ = env_logger::builder().is_test(true).try_init();

        FrontHaul::new(FakeBank::with_defaults(MAP::FIELDS))
    }

    pub(crate) fn simulated<MAP: RegisterMap>() -> FrontHaul<FakeBank, MAP> {
        let _ = env_logger::builder().is_test(true).try_init();

        FrontHaul::new(FakeBank::simulated(MAP::FIELDS))
    }

    #[tokio::test]
    async fn read_and_write_by_name() {
        let mut fh = fake::<V2_3>();

        assert_eq!(fh.read_reg("CFG_TIMEOUT_VALUE").await, Ok(0x80));

        fh.write_reg("CFG_TIMEOUT_VALUE", 0x123).await.unwrap();
        assert_eq!(fh.read_reg("CFG_TIMEOUT_VALUE").await, Ok(0x123));
        assert_eq!(fh.peek(0x0008).await, Ok(0x123));
    }

    #[tokio::test]
    async fn unknown_names() {
        let mut fh = fake::<V1_0>();

        assert_eq!(
            fh.read_reg("DEFM_SNAP_SHOT").await,
            Err(Error::FieldNotFound)
        );
        assert_eq!(
            fh.write_reg("NOT_A_REGISTER", 1).await,
            Err(Error::FieldNotFound)
        );
    }

    #[tokio::test]
    async fn offset_access() {
        let mut fh = fake::<V2_3>();

        fh.write_reg_offset("ETH_VLAN_ID", 0x100, 42).await.unwrap();

        assert_eq!(fh.read_reg_offset("ETH_VLAN_ID", 0x100).await, Ok(42));
        assert_eq!(fh.read_reg("ETH_VLAN_ID").await, Ok(1));
    }

    #[tokio::test]
    async fn read_only_fields() {
        let mut fh = fake::<V2_3>();

        assert_eq!(
            fh.write_reg("CFG_CONFIG_NO_OF_ETH_PORTS", 4).await,
            Err(Error::Ll(ll::Error::ReadOnly {
                name: "CFG_CONFIG_NO_OF_ETH_PORTS"
            }))
        );
    }

    #[tokio::test]
    async fn bad_raw_address() {
        let mut fh = fake::<V2_3>();

        assert_eq!(
            fh.peek(0x0006).await,
            Err(Error::Ll(ll::Error::Unaligned { address: 0x0006 }))
        );
    }

    #[tokio::test]
    async fn instances_are_bounded_by_the_build() {
        let mut fh = fake::<V2_3>();
        fh.ll().bus().poke(0x0024, 2);

        fh.write_instance(&v2_3::ETH_VLAN_ID, 1, 7).await.unwrap();
        assert_eq!(fh.read_instance(&v2_3::ETH_VLAN_ID, 1).await, Ok(7));
        assert_eq!(fh.ll().bus().peek(0xa110), 0x7);

        assert_eq!(
            fh.read_instance(&v2_3::ETH_VLAN_ID, 2).await,
            Err(Error::InstanceOutOfRange {
                name: "ETH_VLAN_ID",
                index: 2,
                limit: 2,
            })
        );
    }

    #[tokio::test]
    async fn plain_fields_only_have_instance_zero() {
        let mut fh = fake::<V2_3>();

        assert_eq!(fh.read_instance(&v2_3::CFG_TIMEOUT_VALUE, 0).await, Ok(0x80));
        assert_eq!(
            fh.read_instance(&v2_3::CFG_TIMEOUT_VALUE, 1).await,
            Err(Error::InstanceOutOfRange {
                name: "CFG_TIMEOUT_VALUE",
                index: 1,
                limit: 1,
            })
        );
    }

    #[tokio::test]
    async fn carrier_instances() {
        let mut fh = fake::<V1_0>();
        fh.ll().bus().poke(0x002c, 8);

        let field = v1_0::find("ORAN_CC_NUMEROLOGY").unwrap();
        fh.write_instance(field, 7, 3).await.unwrap();

        assert_eq!(fh.read_instance(field, 7).await, Ok(3));
        assert_eq!(fh.read_instance(field, 0).await, Ok(0));
    }

    #[tokio::test]
    async fn symbol_instances() {
        let mut fh = simulated::<V2_3>();
        let field = &v2_3::ORAN_CC_DL_DATA_UNROLL_OFFSET;

        let limit = fh.instance_limit(Dimension::DlSymbols).await.unwrap();
        assert_eq!(limit, 16);

        fh.write_instance(field, limit - 1, 0x1234).await.unwrap();
        assert_eq!(fh.ll().bus().peek(field.address + 4 * (limit - 1)), 0x1234);
        assert_eq!(fh.read_instance(field, limit - 1).await, Ok(0x1234));

        assert_eq!(
            fh.write_instance(field, limit, 1).await,
            Err(Error::InstanceOutOfRange {
                name: "ORAN_CC_DL_DATA_UNROLL_OFFSET",
                index: 16,
                limit: 16,
            })
        );
        assert_eq!(fh.ll().bus().peek(field.address + 4 * limit), 0);
    }

    #[tokio::test]
    async fn dump_skips_write_pulses() {
        let mut fh = fake::<V2_3>();

        let mut names = std::vec::Vec::new();
        fh.dump(Bank::Defm, |field, _| names.push(field.name))
            .await
            .unwrap();

        assert!(names.contains(&"DEFM_RESTART"));
        assert!(!names.contains(&"DEFM_SNAP_SHOT"));
        assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(
            names.len(),
            V2_3::fields_in(Bank::Defm)
                .iter()
                .filter(|f| f.access.is_readable())
                .count()
        );
    }

    #[tokio::test]
    async fn dump_reports_values() {
        let mut fh = fake::<V2_3>();

        let mut major = None;
        fh.dump(Bank::Cfg, |field, value| {
            if field.name == "CFG_MAJOR_REVISION" {
                major = Some(value);
            }
        })
        .await
        .unwrap();

        assert_eq!(major, Some(2));
    }

    #[tokio::test]
    async fn reset_pulses_the_data_pipe() {
        let mut fh = fake::<V2_3>();

        fh.reset(true).await.unwrap();
        assert_eq!(fh.read_reg("FRAM_DISABLE").await, Ok(1));
        assert_eq!(fh.read_reg("DEFM_RESTART").await, Ok(1));

        fh.write_reg("ORAN_CC_ENABLE", 0x3).await.unwrap();
        fh.reset(true).await.unwrap();
        assert_eq!(fh.read_reg("ORAN_CC_ENABLE").await, Ok(0x3));

        fh.reset(false).await.unwrap();
        assert_eq!(fh.read_reg("FRAM_DISABLE").await, Ok(0));
        assert_eq!(fh.read_reg("DEFM_RESTART").await, Ok(0));
        assert_eq!(fh.read_reg("ORAN_CC_ENABLE").await, Ok(0));
        assert_eq!(fh.ll().bus().peek(0x6010), 0xffff_ffff);
    }

    #[tokio::test]
    async fn reset_without_snapshot_register() {
        let mut fh = fake::<V1_0>();

        fh.reset(false).await.unwrap();
        assert_eq!(fh.read_reg("FRAM_DISABLE").await, Ok(0));
    }

    #[test]
    fn debug_output() {
        let fh = fake::<V2_3>();

        assert_eq!(
            std::format!("{:?}", fh),
            "FrontHaul { revision: v2.3, alarms: Alarms(0x0), .. }"
        );
    }

    #[test]
    fn free_returns_the_bus() {
        let fh: FrontHaul<FakeBank, V2_3> = FrontHaul::new(FakeBank::new());
        let bank = fh.free();

        assert_eq!(bank.peek(0x0000), 0);
    }
}
