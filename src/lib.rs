//! Register map and driver for the O-RAN radio interface FPGA IP
//!
//! The IP is controlled through a 64 KiB window of 32-bit registers, split
//! into six banks (CFG, FRAM, DEFM, ETH, STATS, ORAN). Every register field is
//! described by a [`Field`] descriptor; the descriptors for each supported
//! hardware revision live in the [register maps].
//!
//! The recommended way to talk to the hardware is the [high-level interface],
//! which looks fields up by name, checks the hardware revision and handles
//! alarms. If you need raw word access or want to work with field descriptors
//! directly, use the [register-level interface] instead.
//!
//! Both interfaces are generic over a [`RegisterBus`], so the same code runs
//! against memory-mapped hardware, a remote register server, or the
//! in-memory [`FakeBank`] used in tests.
//!
//! [register maps]: map/index.html
//! [high-level interface]: hl/index.html
//! [register-level interface]: ll/index.html
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "async")]
use maybe_async::must_be_async as maybe_async_attr;
#[cfg(not(feature = "async"))]
use maybe_async::must_be_sync as maybe_async_attr;

#[macro_use]
mod fmt;

pub mod field;
pub mod hl;
pub mod ll;
pub mod map;

pub use crate::{
    field::{Access, Bank, Dimension, Field, Repeat},
    hl::{
        Alarms, Capabilities, Error, EthStats, FrontHaul, HwVersion, IpMode, IqCompMethods,
        PacketFilter, StrobeSource, Transport, VlanTag,
    },
    ll::{FakeBank, Mmio, RegisterBus},
    map::{RegisterMap, Revision, V1_0, V2_3},
};
