use core::fmt;

#[cfg(feature = "defmt")]
use defmt::Format;

use crate::{
    ll,
    map::{RegisterMap, Revision},
    maybe_async_attr, Error, FrontHaul,
};

/// Version of the IP, as reported by the `CFG_*_REVISION` registers
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HwVersion {
    /// Major version
    pub major: u8,
    /// Minor version
    pub minor: u8,
    /// Patch level
    pub revision: u8,
}

impl HwVersion {
    /// The version packed into one word: `major << 24 | minor << 16 | revision`
    pub const fn packed(&self) -> u32 {
        (self.major as u32) << 24 | (self.minor as u32) << 16 | self.revision as u32
    }

    /// The register map for this version, if there is one
    pub fn revision(&self) -> Option<Revision> {
        Revision::from_version(self.major, self.minor)
    }
}

impl fmt::Display for HwVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}

impl<BUS, MAP> FrontHaul<BUS, MAP>
where
    BUS: ll::RegisterBus,
    MAP: RegisterMap,
{
    /// Reads the version of the IP
    #[maybe_async_attr]
    pub async fn hw_version(&mut self) -> Result<HwVersion, Error<BUS::Error>> {
        // All three fields are 8 bits wide.
        let major = self.read_reg("CFG_MAJOR_REVISION").await? as u8;
        let minor = self.read_reg("CFG_MINOR_REVISION").await? as u8;
        let revision = self.read_reg("CFG_VERSION_REVISION").await? as u8;

        Ok(HwVersion {
            major,
            minor,
            revision,
        })
    }

    /// Reads the internal build number of the IP
    #[maybe_async_attr]
    pub async fn internal_revision(&mut self) -> Result<u32, Error<BUS::Error>> {
        self.read_reg("CFG_INTERNAL_REVISION").await
    }

    /// Determines which register map the hardware needs
    ///
    /// The version registers sit at the same address in every revision, so
    /// this works whatever `MAP` is.
    #[maybe_async_attr]
    pub async fn detect_revision(&mut self) -> Result<Revision, Error<BUS::Error>> {
        let version = self.hw_version().await?;

        version.revision().ok_or(Error::UnsupportedRevision {
            major: version.major,
            minor: version.minor,
        })
    }

    /// Checks that the hardware matches the register map in use
    #[maybe_async_attr]
    pub async fn check_revision(&mut self) -> Result<Revision, Error<BUS::Error>> {
        let found = self.detect_revision().await?;

        if found != MAP::REVISION {
            warn!(
                "Hardware is {}.{}, register map is for {}.{}",
                found.major(),
                found.minor(),
                MAP::REVISION.major(),
                MAP::REVISION.minor()
            );
            return Err(Error::RevisionMismatch {
                expected: MAP::REVISION,
                found,
            });
        }

        debug!(
            "Hardware revision {}.{} detected",
            found.major(),
            found.minor()
        );

        Ok(found)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::{
        hl::test::fake,
        map::{V1_0, V2_3},
    };

    #[tokio::test]
    async fn reset_values() {
        let mut fh = fake::<V2_3>();

        let version = fh.hw_version().await.unwrap();
        assert_eq!(
            version,
            HwVersion {
                major: 2,
                minor: 3,
                revision: 0
            }
        );
        assert_eq!(version.packed(), 0x0203_0000);
        assert_eq!(fh.internal_revision().await, Ok(0x0151_4196));

        let mut fh = fake::<V1_0>();
        assert_eq!(fh.hw_version().await.unwrap().packed(), 0x0100_0000);
        assert_eq!(fh.internal_revision().await, Ok(0x1234_5678));
    }

    #[tokio::test]
    async fn patch_level() {
        let mut fh = fake::<V2_3>();
        fh.ll().bus().poke(0x0000, 0x0203_0700);

        let version = fh.hw_version().await.unwrap();
        assert_eq!(version.revision, 7);
        assert_eq!(version.packed(), 0x0203_0007);
        assert_eq!(version.to_string(), "2.3.7");
    }

    #[tokio::test]
    async fn detection() {
        let mut fh = fake::<V2_3>();
        assert_eq!(fh.check_revision().await, Ok(Revision::V2_3));

        fh.ll().bus().poke(0x0000, 0x0100_0000);
        assert_eq!(fh.detect_revision().await, Ok(Revision::V1_0));
        assert_eq!(
            fh.check_revision().await,
            Err(Error::RevisionMismatch {
                expected: Revision::V2_3,
                found: Revision::V1_0,
            })
        );

        fh.ll().bus().poke(0x0000, 0x0300_0000);
        assert_eq!(
            fh.detect_revision().await,
            Err(Error::UnsupportedRevision { major: 3, minor: 0 })
        );
    }
}
