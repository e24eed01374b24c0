//! Register map of hardware revision 2.3
//!
//! Generated from the register description of the IP. Do not edit by hand;
//! regenerate the table instead.

impl_fields! {
    // Configuration, capability and interrupt registers
    Cfg {
        CFG_AXI_TIMEOUT_ENABLE,                       0x0014, 0x80000000, 31,  1, 0x1, Rw;
        CFG_AXI_TIMEOUT_STATUS,                       0x0018, 0x80000000, 31,  1, 0x0, RoSig;
        CFG_CONFIG_LIMIT_BS_W,                        0x010c, 0x0000000f,  0,  4, 0x0, RoSig;
        CFG_CONFIG_LIMIT_CC_W,                        0x0108, 0x0000000f,  0,  4, 0x0, RoSig;
        CFG_CONFIG_LIMIT_DU_W,                        0x0110, 0x0000000f,  0,  4, 0x0, RoSig;
        CFG_CONFIG_LIMIT_RU_I_W,                      0x0100, 0x0000000f,  0,  4, 0x0, RoSig;
        CFG_CONFIG_LIMIT_RU_O_W,                      0x0104, 0x0000000f,  0,  4, 0x0, RoSig;
        CFG_CONFIG_MAP_STREAM_W,                      0x0114, 0x00000f00,  8,  4, 0x0, RoSig;
        CFG_CONFIG_MAP_TABLE_W,                       0x0114, 0x0000000f,  0,  4, 0x0, RoSig;
        CFG_CONFIG_MAP_TYPE_W,                        0x0114, 0x000f0000, 16,  4, 0x0, RoSig;
        CFG_CONFIG_NO_OF_DEFM_ANTS,                   0x0020, 0xffff0000, 16, 16, 0x0, RoSig;
        CFG_CONFIG_NO_OF_ETH_PORTS,                   0x0024, 0x000003ff,  0, 10, 0x0, RoSig;
        CFG_CONFIG_NO_OF_FRAM_ANTS,                   0x0020, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_COMP_IN_CORE_BFP,             0x0088, 0x00020000, 17,  1, 0x0, RoSig;
        CFG_CONFIG_XRAN_COMP_IN_CORE_BFP_SELRE,       0x0088, 0x00200000, 21,  1, 0x0, RoSig;
        CFG_CONFIG_XRAN_COMP_IN_CORE_BFP_WIDTHS,      0x008c, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_COMP_IN_CORE_ENABLED,         0x0028, 0x00000020,  5,  1, 0x0, RoSig;
        CFG_CONFIG_XRAN_COMP_IN_CORE_NOCOMP,          0x0088, 0x00010000, 16,  1, 0x1, RoInt;
        CFG_CONFIG_XRAN_DECOMP_IN_CORE_BFP,           0x0080, 0x00000002,  1,  1, 0x0, RoSig;
        CFG_CONFIG_XRAN_DECOMP_IN_CORE_BFP_SELRE,     0x0080, 0x00000020,  5,  1, 0x0, RoSig;
        CFG_CONFIG_XRAN_DECOMP_IN_CORE_BFP_WIDTHS,    0x0084, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_DECOMP_IN_CORE_BSC,           0x0080, 0x00000004,  2,  1, 0x0, RoSig;
        CFG_CONFIG_XRAN_DECOMP_IN_CORE_ENABLED,       0x0028, 0x00000010,  4,  1, 0x0, RoSig;
        CFG_CONFIG_XRAN_DECOMP_IN_CORE_MODCOMP,       0x0080, 0x00000010,  4,  1, 0x0, RoSig;
        CFG_CONFIG_XRAN_DECOMP_IN_CORE_MODCOMP_SELRE, 0x0080, 0x00000040,  6,  1, 0x0, RoSig;
        CFG_CONFIG_XRAN_DECOMP_IN_CORE_MODC_WIDTHS,   0x0084, 0x003f0000, 16,  6, 0x0, RoSig;
        CFG_CONFIG_XRAN_DECOMP_IN_CORE_MU,            0x0080, 0x00000008,  3,  1, 0x0, RoSig;
        CFG_CONFIG_XRAN_DECOMP_IN_CORE_NOCOMP,        0x0080, 0x00000001,  0,  1, 0x1, RoInt;
        CFG_CONFIG_XRAN_DEFM_ETH_PKT_MAX,             0x0044, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_ETH_SS_BUF_PKT_PTRS,          0x0070, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_ETH_SS_BUF_WORD_DEPTH,        0x006c, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_FRAM_AUTO_START,              0x0040, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_FRAM_ETH_PKT_MAX,             0x003c, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_MAX_CC,                       0x002c, 0x0000003f,  0,  6, 0x0, RoSig;
        CFG_CONFIG_XRAN_MAX_CTRL_SYMBOLS,             0x004c, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_MAX_DL_CTRL_1KWORDS,          0x0054, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_MAX_DL_DATA_1KWORDS,          0x0058, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_MAX_DL_SYMBOLS,               0x0030, 0x0000007f,  0,  7, 0x0, RoSig;
        CFG_CONFIG_XRAN_MAX_NUMEROLOGY,               0x0034, 0x00000007,  0,  3, 0x0, RoSig;
        CFG_CONFIG_XRAN_MAX_SCS,                      0x0048, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_MAX_UL_CTRL_1KWORDS,          0x0050, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_MIN_NUMEROLOGY,               0x0038, 0x00000007,  0,  3, 0x0, RoSig;
        CFG_CONFIG_XRAN_PRACH_C_PORTS,                0x0074, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_PRECODING_EXT3_PORT,          0x0028, 0x00000040,  6,  1, 0x0, RoSig;
        CFG_CONFIG_XRAN_SUPPORT_MODE,                 0x0028, 0x0000000f,  0,  4, 0x5, RoSig;
        CFG_CONFIG_XRAN_TIMER_CLK_PS,                 0x005c, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_UNSOL_PORTS_FRAM,             0x0068, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_DEFM_INT_ENA_ETH_PIPE_C_BUF_OF,           0x0014, 0x00000400, 10,  1, 0x0, Rw;
        CFG_DEFM_INT_ENA_ETH_PIPE_TABLE_OF,           0x0014, 0x00000800, 11,  1, 0x0, Rw;
        CFG_DEFM_INT_ENA_INFIFO_OF,                   0x0014, 0x00000100,  8,  1, 0x0, Rw;
        CFG_DEFM_INT_ENA_INFIFO_UF,                   0x0014, 0x00000200,  9,  1, 0x0, Rw;
        CFG_DEFM_INT_ETH_PIPE_C_BUF_OF,               0x0018, 0x00000400, 10,  1, 0x0, RoSig;
        CFG_DEFM_INT_ETH_PIPE_TABLE_OF,               0x0018, 0x00000800, 11,  1, 0x0, RoSig;
        CFG_DEFM_INT_INFIFO_OF,                       0x0018, 0x00000100,  8,  1, 0x0, RoSig;
        CFG_DEFM_INT_INFIFO_UF,                       0x0018, 0x00000200,  9,  1, 0x0, RoSig;
        CFG_DEFM_RESET_STATUS,                        0x0018, 0x00000002,  1,  1, 0x0, RoSig;
        CFG_FRAM_INT_ENA_OUTFIFO_OF,                  0x0014, 0x00001000, 12,  1, 0x0, Rw;
        CFG_FRAM_INT_ENA_OUTFIFO_UF,                  0x0014, 0x00002000, 13,  1, 0x0, Rw;
        CFG_FRAM_INT_ENA_PRACH_SECTION_NOTFOUND,      0x0014, 0x00008000, 15,  1, 0x0, Rw;
        CFG_FRAM_INT_ENA_PRACH_SECTION_OVERFLOW,      0x0014, 0x00004000, 14,  1, 0x0, Rw;
        CFG_FRAM_INT_OUTFIFO_OF,                      0x0018, 0x00001000, 12,  1, 0x0, RoSig;
        CFG_FRAM_INT_OUTFIFO_UF,                      0x0018, 0x00002000, 13,  1, 0x0, RoSig;
        CFG_FRAM_INT_PRACH_SECTION_NOTFOUND,          0x0018, 0x00008000, 15,  1, 0x0, RoSig;
        CFG_FRAM_INT_PRACH_SECTION_OVERFLOW,          0x0018, 0x00004000, 14,  1, 0x0, RoSig;
        CFG_FRAM_RESET_STATUS,                        0x0018, 0x00000001,  0,  1, 0x0, RoSig;
        CFG_INTERNAL_REVISION,                        0x0004, 0xffffffff,  0, 32, 0x1514196, RoInt;
        CFG_INTERRUPT_STATUS_SAMPLE,                  0x001c, 0x00000001,  0,  1, 0x1, Rw;
        CFG_MAJOR_REVISION,                           0x0000, 0xff000000, 24,  8, 0x2, RoInt;
        CFG_MASTER_INT_ENABLE,                        0x0010, 0x00000001,  0,  1, 0x0, Rw;
        CFG_MINOR_REVISION,                           0x0000, 0x00ff0000, 16,  8, 0x3, RoInt;
        CFG_MONITOR_CLEAR,                            0x0810, 0x00000001,  0,  1, 0x0, WPlsH;
        CFG_MONITOR_READ_31__0,                       0x0820, 0xffffffff,  0, 32, 0x0, RoSig;
        CFG_MONITOR_READ_63_32,                       0x0824, 0xffffffff,  0, 32, 0x0, RoSig;
        CFG_MONITOR_SAMPLE,                           0x080c, 0x00000001,  0,  1, 0x0, WPlsH;
        CFG_MONITOR_SELECT_CNT,                       0x0800, 0x0000003f,  0,  6, 0x0, Rw;
        CFG_MONITOR_SELECT_READ,                      0x0804, 0x0000003f,  0,  6, 0x0, Rw;
        CFG_MONITOR_SNAPSHOT,                         0x0808, 0x00000001,  0,  1, 0x0, WPlsH;
        CFG_TIMEOUT_VALUE,                            0x0008, 0x00000fff,  0, 12, 0x80, Rw;
        CFG_USER_RO_IN,                               0x000c, 0x00ff0000, 16,  8, 0x0, RoSig;
        CFG_USER_RW_OUT,                              0x000c, 0x000000ff,  0,  8, 0x0, Rw;
        CFG_VERSION_REVISION,                         0x0000, 0x0000ff00,  8,  8, 0x0, RoInt;
    }

    // De-framer (downlink) registers
    Defm {
        DEFM_CID_BS_MASK,                             0x602c, 0x0000003f,  0,  6, 0x1, Rw;
        DEFM_CID_BS_SHIFT,                            0x6028, 0x0000000f,  0,  4, 0xb, Rw;
        DEFM_CID_CC_MASK,                             0x6024, 0x0000003f,  0,  6, 0x7, Rw;
        DEFM_CID_CC_SHIFT,                            0x6020, 0x0000000f,  0,  4, 0x8, Rw;
        DEFM_CID_DU_MASK,                             0x6034, 0x0000003f,  0,  6, 0xf, Rw;
        DEFM_CID_DU_SHIFT,                            0x6030, 0x0000000f,  0,  4, 0xc, Rw;
        DEFM_CID_LTE_MASK,                            0x6054, 0x000000ff,  0,  8, 0xc0, Rw;
        DEFM_CID_LTE_VALUE,                           0x6058, 0x000000ff,  0,  8, 0xc0, Rw;
        DEFM_CID_MAP_MODE,                            0x6900, 0x00000003,  0,  2, 0x1, Rw;
        DEFM_CID_MAP_RD_STREAM_PORTID,                0x6908, 0x007c0000, 18,  5, 0x0, RoSig;
        DEFM_CID_MAP_RD_STREAM_TYPE,                  0x6908, 0x00007000, 12,  3, 0x0, RoSig;
        DEFM_CID_MAP_RD_STROBE,                       0x6908, 0x80000000, 31,  1, 0x0, WPlsH;
        DEFM_CID_MAP_RD_TABLE_ADDR,                   0x6908, 0x000007ff,  0, 11, 0x0, Rw;
        DEFM_CID_MAP_WR_STREAM_PORTID,                0x6904, 0x007c0000, 18,  5, 0x0, Rw;
        DEFM_CID_MAP_WR_STREAM_TYPE,                  0x6904, 0x00007000, 12,  3, 0x0, Rw;
        DEFM_CID_MAP_WR_STROBE,                       0x6904, 0x80000000, 31,  1, 0x0, WPlsH;
        DEFM_CID_MAP_WR_TABLE_ADDR,                   0x6904, 0x000007ff,  0, 11, 0x0, Rw;
        DEFM_CID_PRACH_MASK,                          0x6044, 0x000000ff,  0,  8, 0xc0, Rw;
        DEFM_CID_PRACH_VALUE,                         0x6048, 0x000000ff,  0,  8, 0x80, Rw;
        DEFM_CID_SSB_MASK,                            0x604c, 0x000000ff,  0,  8, 0xc0, Rw;
        DEFM_CID_SSB_VALUE,                           0x6050, 0x000000ff,  0,  8, 0x40, Rw;
        DEFM_CID_SS_MASK,                             0x6038, 0x000000ff,  0,  8, 0x1f, Rw;
        DEFM_CID_U_MASK,                              0x603c, 0x000000ff,  0,  8, 0xc0, Rw;
        DEFM_CID_U_VALUE,                             0x6040, 0x000000ff,  0,  8, 0x0, Rw;
        DEFM_CTRL_SS_RESET_E0_E,                      0x6010, 0x00000010,  4,  1, 0x0, WPlsH;
        DEFM_CTRL_SS_RESET_E0_RCOR,                   0x6010, 0x00000040,  6,  1, 0x0, WPlsH;
        DEFM_CTRL_SS_RESET_E0_RWIN,                   0x6010, 0x00000020,  5,  1, 0x0, WPlsH;
        DEFM_CTRL_SS_RESET_E0_T,                      0x6010, 0x00000080,  7,  1, 0x0, WPlsH;
        DEFM_CTRL_SS_RESET_E1_E,                      0x6010, 0x00000100,  8,  1, 0x0, WPlsH;
        DEFM_CTRL_SS_RESET_E1_RCOR,                   0x6010, 0x00000400, 10,  1, 0x0, WPlsH;
        DEFM_CTRL_SS_RESET_E1_RWIN,                   0x6010, 0x00000200,  9,  1, 0x0, WPlsH;
        DEFM_CTRL_SS_RESET_E1_T,                      0x6010, 0x00000800, 11,  1, 0x0, WPlsH;
        DEFM_CTRL_SS_RESET_E2_E,                      0x6010, 0x00001000, 12,  1, 0x0, WPlsH;
        DEFM_CTRL_SS_RESET_E2_RCOR,                   0x6010, 0x00004000, 14,  1, 0x0, WPlsH;
        DEFM_CTRL_SS_RESET_E2_RWIN,                   0x6010, 0x00002000, 13,  1, 0x0, WPlsH;
        DEFM_CTRL_SS_RESET_E2_T,                      0x6010, 0x00008000, 15,  1, 0x0, WPlsH;
        DEFM_CTRL_SS_RESET_E3_E,                      0x6010, 0x00010000, 16,  1, 0x0, WPlsH;
        DEFM_CTRL_SS_RESET_E3_RCOR,                   0x6010, 0x00040000, 18,  1, 0x0, WPlsH;
        DEFM_CTRL_SS_RESET_E3_RWIN,                   0x6010, 0x00020000, 17,  1, 0x0, WPlsH;
        DEFM_CTRL_SS_RESET_E3_T,                      0x6010, 0x00080000, 19,  1, 0x0, WPlsH;
        DEFM_DEBUG,                                   0x600c, 0x0000000f,  0,  4, 0x1, Rw;
        DEFM_DECOMP_SS_ADDRESS,                       0x6910, 0x000000ff,  0,  8, 0x0, Rw;
        DEFM_DECOMP_SS_MODE_ENABLE,                   0x6910, 0x00010000, 16,  1, 0x0, Rw;
        DEFM_DECOMP_SS_UDCOMP_TYPE,                   0x6910, 0x0000f000, 12,  4, 0x0, Rw;
        DEFM_DECOMP_SS_UDCOMP_WIDTH,                  0x6910, 0x00000f00,  8,  4, 0x0, Rw;
        DEFM_DECOMP_SS_WR,                            0x6910, 0x80000000, 31,  1, 0x0, WPlsH;
        DEFM_ERR_PACKET_FILTER,                       0x6004, 0x00000003,  0,  2, 0x0, Rw;
        DEFM_READY,                                   0x6000, 0x00000002,  1,  1, 0x0, RoSig;
        DEFM_RESTART,                                 0x6000, 0x00000001,  0,  1, 0x0, Rw;
        DEFM_SNAP_SHOT,                               0x6010, 0x00000001,  0,  1, 0x0, WPlsH;
        DEFM_USER_DATA_FILTER_W0_127_96,              0x610c, 0xffffffff,  0, 32, 0xfffffeae, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W0_31_0,                0x6100, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W0_63_32,               0x6104, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W0_95_64,               0x6108, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W0_MASK,                0x6110, 0x0000ffff,  0, 16, 0xcfff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W1_127_96,              0x612c, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100, when "cfg_wide_filt";
        DEFM_USER_DATA_FILTER_W1_31_0,                0x6120, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W1_63_32,               0x6124, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100, when "cfg_wide_filt";
        DEFM_USER_DATA_FILTER_W1_95_64,               0x6128, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100, when "cfg_wide_filt";
        DEFM_USER_DATA_FILTER_W1_MASK,                0x6130, 0x0000ffff,  0, 16, 0xffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W2_127_96,              0x614c, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100, when "cfg_wide_filt";
        DEFM_USER_DATA_FILTER_W2_31_0,                0x6140, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100, when "cfg_wide_filt";
        DEFM_USER_DATA_FILTER_W2_63_32,               0x6144, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100, when "cfg_wide_filt";
        DEFM_USER_DATA_FILTER_W2_95_64,               0x6148, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100, when "cfg_wide_filt";
        DEFM_USER_DATA_FILTER_W2_MASK,                0x6150, 0x0000ffff,  0, 16, 0xffff, RwPdef, per EthPorts 0x100, when "cfg_wide_filt";
        DEFM_USER_DATA_FILTER_W3_127_96,              0x616c, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100, when "cfg_wide_filt";
        DEFM_USER_DATA_FILTER_W3_31_0,                0x6160, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100, when "cfg_wide_filt";
        DEFM_USER_DATA_FILTER_W3_63_32,               0x6164, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100, when "cfg_wide_filt";
        DEFM_USER_DATA_FILTER_W3_95_64,               0x6168, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100, when "cfg_wide_filt";
        DEFM_USER_DATA_FILTER_W3_MASK,                0x6170, 0x0000ffff,  0, 16, 0xffff, RwPdef, per EthPorts 0x100, when "cfg_wide_filt";
        DEFM_USE_ONE_SYMBOL_STROBE,                   0x6008, 0x00000001,  0,  1, 0x0, Rw;
    }

    // Ethernet port registers
    Eth {
        ETH_DEST_ADDR_31_0,                           0xa000, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100;
        ETH_DEST_ADDR_47_32,                          0xa004, 0x0000ffff,  0, 16, 0x0, RwPdef, per EthPorts 0x100;
        ETH_DU_TABLE_RD_DEST_ADDR_31_0,               0xa0f0, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        ETH_DU_TABLE_RD_DEST_ADDR_47_32,              0xa0f4, 0x0000ffff,  0, 16, 0x0, RoSig, per EthPorts 0x100;
        ETH_DU_TABLE_RD_STROBE,                       0xa0fc, 0x80000000, 31,  1, 0x0, WPlsH, per EthPorts 0x100;
        ETH_DU_TABLE_RD_TABLE_ADDR,                   0xa0fc, 0x0000000f,  0,  4, 0x0, Rw, per EthPorts 0x100;
        ETH_DU_TABLE_RD_VLAN_DEI,                     0xa0f8, 0x00001000, 12,  1, 0x0, RoSig, per EthPorts 0x100;
        ETH_DU_TABLE_RD_VLAN_ID,                      0xa0f8, 0x00000fff,  0, 12, 0x1, RoSig, per EthPorts 0x100;
        ETH_DU_TABLE_RD_VLAN_PCP,                     0xa0f8, 0x0000e000, 13,  3, 0x7, RoSig, per EthPorts 0x100;
        ETH_DU_TABLE_WR_DEST_ADDR_31_0,               0xa0e0, 0xffffffff,  0, 32, 0x0, Rw, per EthPorts 0x100;
        ETH_DU_TABLE_WR_DEST_ADDR_47_32,              0xa0e4, 0x0000ffff,  0, 16, 0x0, Rw, per EthPorts 0x100;
        ETH_DU_TABLE_WR_STROBE,                       0xa0ec, 0x80000000, 31,  1, 0x0, WPlsH, per EthPorts 0x100;
        ETH_DU_TABLE_WR_TABLE_ADDR,                   0xa0ec, 0x0000000f,  0,  4, 0x0, Rw, per EthPorts 0x100;
        ETH_DU_TABLE_WR_VLAN_DEI,                     0xa0e8, 0x00001000, 12,  1, 0x0, Rw, per EthPorts 0x100;
        ETH_DU_TABLE_WR_VLAN_ID,                      0xa0e8, 0x00000fff,  0, 12, 0x1, Rw, per EthPorts 0x100;
        ETH_DU_TABLE_WR_VLAN_PCP,                     0xa0e8, 0x0000e000, 13,  3, 0x7, Rw, per EthPorts 0x100;
        ETH_IPV4_DESTINATION_ADD,                     0xa04c, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100, when "cfg_ena_ipv4";
        ETH_IPV4_DSCP,                                0xa034, 0x0000003f,  0,  6, 0x2e, Rw, per EthPorts 0x100, when "cfg_ena_ipv4";
        ETH_IPV4_ECN,                                 0xa034, 0x000000c0,  6,  2, 0x0, Rw, per EthPorts 0x100, when "cfg_ena_ipv4";
        ETH_IPV4_FLAGS,                               0xa03c, 0x00000007,  0,  3, 0x2, Rw, per EthPorts 0x100, when "cfg_ena_ipv4";
        ETH_IPV4_FRAGMENT_OFFSET,                     0xa03c, 0x0000fff8,  3, 13, 0x0, Rw, per EthPorts 0x100, when "cfg_ena_ipv4";
        ETH_IPV4_ID,                                  0xa038, 0x0000ffff,  0, 16, 0x0, Rw, per EthPorts 0x100, when "cfg_ena_ipv4";
        ETH_IPV4_IHL,                                 0xa030, 0x000000f0,  4,  4, 0x5, Rw, per EthPorts 0x100, when "cfg_ena_ipv4";
        ETH_IPV4_PROTOCOL,                            0xa044, 0x000000ff,  0,  8, 0x11, Rw, per EthPorts 0x100, when "cfg_ena_ipv4";
        ETH_IPV4_SOURCE_ADD,                          0xa048, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100, when "cfg_ena_ipv4";
        ETH_IPV4_TIME_TO_LIVE,                        0xa040, 0x000000ff,  0,  8, 0x40, Rw, per EthPorts 0x100, when "cfg_ena_ipv4";
        ETH_IPV4_VERSION,                             0xa030, 0x0000000f,  0,  4, 0x4, Rw, per EthPorts 0x100, when "cfg_ena_ipv4";
        ETH_IPV6_DESTINATION_ADD_127_96,              0xa0b0, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100, when "cfg_ena_ipv6";
        ETH_IPV6_DESTINATION_ADD_31_0,                0xa0a4, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100, when "cfg_ena_ipv6";
        ETH_IPV6_DESTINATION_ADD_63_32,               0xa0a8, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100, when "cfg_ena_ipv6";
        ETH_IPV6_DESTINATION_ADD_95_64,               0xa0ac, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100, when "cfg_ena_ipv6";
        ETH_IPV6_FLOW_LABEL,                          0xa088, 0x000fffff,  0, 20, 0x0, Rw, per EthPorts 0x100, when "cfg_ena_ipv6";
        ETH_IPV6_HOP_LIMIT,                           0xa090, 0x000000ff,  0,  8, 0x40, Rw, per EthPorts 0x100, when "cfg_ena_ipv6";
        ETH_IPV6_NEXT_HEADER,                         0xa08c, 0x000000ff,  0,  8, 0x11, Rw, per EthPorts 0x100, when "cfg_ena_ipv6";
        ETH_IPV6_SOURCE_ADD_127_96,                   0xa0a0, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100, when "cfg_ena_ipv6";
        ETH_IPV6_SOURCE_ADD_31_0,                     0xa094, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100, when "cfg_ena_ipv6";
        ETH_IPV6_SOURCE_ADD_63_32,                    0xa098, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100, when "cfg_ena_ipv6";
        ETH_IPV6_SOURCE_ADD_95_64,                    0xa09c, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100, when "cfg_ena_ipv6";
        ETH_IPV6_TRAFFIC_CLASS,                       0xa084, 0x000000ff,  0,  8, 0x0, Rw, per EthPorts 0x100, when "cfg_ena_ipv6";
        ETH_IPV6_V,                                   0xa080, 0x0000000f,  0,  4, 0x6, Rw, per EthPorts 0x100, when "cfg_ena_ipv6";
        ETH_MULTI_ODU_SUPPORT,                        0xa0d0, 0x00000001,  0,  1, 0x0, Rw, per EthPorts 0x100;
        ETH_SRC_ADDR_31_0,                            0xa008, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100;
        ETH_SRC_ADDR_47_32,                           0xa00c, 0x0000ffff,  0, 16, 0x0, RwPdef, per EthPorts 0x100;
        ETH_UDP_DESTINATION_PORT,                     0xa050, 0xffff0000, 16, 16, 0xc000, Rw, per EthPorts 0x100, when "cfg_ena_ipv4";
        ETH_UDP_SOURCE_PORT,                          0xa050, 0x0000ffff,  0, 16, 0x8000, Rw, per EthPorts 0x100, when "cfg_ena_ipv4";
        ETH_VLAN_DEI,                                 0xa010, 0x00001000, 12,  1, 0x0, RwPdef, per EthPorts 0x100;
        ETH_VLAN_ID,                                  0xa010, 0x00000fff,  0, 12, 0x1, RwPdef, per EthPorts 0x100;
        ETH_VLAN_PCP,                                 0xa010, 0x0000e000, 13,  3, 0x7, RwPdef, per EthPorts 0x100;
    }

    // Framer (uplink) registers
    Fram {
        FRAM_DISABLE,                                 0x2000, 0x00000001,  0,  1, 0x1, RwPdef;
        FRAM_ENABLE_PER_SYM_RESET,                    0x2004, 0x00000001,  0,  1, 0x1, RwPdef;
        FRAM_GEN_VLAN_TAG,                            0x2200, 0x00000010,  4,  1, 0x0, Rw;
        FRAM_MTU_SIZE,                                0x2008, 0x00003fff,  0, 14, 0x0, RwPdef;
        FRAM_PROTOCOL_DEFINITION,                     0x2200, 0x0000000f,  0,  4, 0x0, Rw;
        FRAM_READY,                                   0x2000, 0x00000002,  1,  1, 0x0, RoSig;
        FRAM_SEL_IPV_ADDRESS_TYPE,                    0x2200, 0x00000060,  5,  2, 0x0, Rw;
        FRAM_XRAN_BANDSECTOR_FIELD_WIDTH,             0x2080, 0x00000f00,  8,  4, 0x4, Rw;
        FRAM_XRAN_CC_ID_FIELD_WIDTH,                  0x2080, 0x000000f0,  4,  4, 0x4, Rw;
        FRAM_XRAN_RU_PORT_ID_FIELD_WIDTH,             0x2080, 0x0000000f,  0,  4, 0x4, Rw;
    }

    // Component carrier and O-RAN section registers
    Oran {
        ORAN_CC_DL_CTRL_OFFSETS,                      0xe104, 0x0000ffff,  0, 16, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_DL_CTRL_SYM_NUM_INDEX,                0xe114, 0x003f0000, 16,  6, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_DL_CTRL_UNROLLED_OFFSETS,             0xe108, 0x0000ffff,  0, 16, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_DL_DATA_SYM_NUM_INDEX,                0xe114, 0x00003f00,  8,  6, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_DL_DATA_SYM_START_INDEX,              0xe114, 0x0000003f,  0,  6, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_DL_DATA_UNROLL_OFFSET,                0xe500, 0x0000ffff,  0, 16, 0x0, Rw, per DlSymbols 0x4;
        ORAN_CC_DL_MPLANE_UDCOMP_HDR_SEL,             0xe11c, 0x00000100,  8,  1, 0x1, Rw, per ComponentCarriers 0x70;
        ORAN_CC_DL_SETUP_C_ABS_SYMBOL,                0xe130, 0x00000fff,  0, 12, 0x0, RwPdef, per ComponentCarriers 0x70;
        ORAN_CC_DL_SETUP_C_CYCLES,                    0xe134, 0x0001ffff,  0, 17, 0x0, RwPdef, per ComponentCarriers 0x70;
        ORAN_CC_DL_SETUP_D_CYCLES,                    0xe138, 0x0001ffff,  0, 17, 0x0, RwPdef, per ComponentCarriers 0x70;
        ORAN_CC_DL_UD_COMP_METH,                      0xe11c, 0x000000f0,  4,  4, 0x1, Rw, per ComponentCarriers 0x70;
        ORAN_CC_DL_UD_IQ_WIDTH,                       0xe11c, 0x0000000f,  0,  4, 0x9, Rw, per ComponentCarriers 0x70;
        ORAN_CC_ENABLE,                               0xe004, 0x000000ff,  0,  8, 0x0, Rw;
        ORAN_CC_MAX_SYMBOLS,                          0xe158, 0x00000fff,  0, 12, 0x8c, Rw, per ComponentCarriers 0x70;
        ORAN_CC_MODVALS_DL,                           0xe168, 0x0000ffff,  0, 16, 0x40, Rw, per ComponentCarriers 0x70;
        ORAN_CC_MODVALS_UL,                           0xe16c, 0x0000ffff,  0, 16, 0x40, Rw, per ComponentCarriers 0x70;
        ORAN_CC_NUMEROLOGY,                           0xe100, 0x00070000, 16,  3, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_NUMRBS,                               0xe100, 0x000001ff,  0,  9, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_NUMSSBCTRLSECT_X_SYM_X_CC,            0xe960, 0x0000ffff,  0, 16, 0x10, Rw, per ComponentCarriers 0x70, when "cfg_ena_ssb";
        ORAN_CC_NUM_CTRL_PER_SYMBOL_DL,               0xe160, 0x0000ffff,  0, 16, 0x10, Rw, per ComponentCarriers 0x70;
        ORAN_CC_NUM_CTRL_PER_SYMBOL_UL,               0xe164, 0x0000ffff,  0, 16, 0x10, Rw, per ComponentCarriers 0x70;
        ORAN_CC_PRACH_MPLANE_UDCOMP_HDR_SEL,          0xe920, 0x00000100,  8,  1, 0x0, Rw, when "cfg_ena_ssb";
        ORAN_CC_PRACH_UD_COMP_METH,                   0xe920, 0x000000f0,  4,  4, 0x1, Rw, when "cfg_ena_ssb";
        ORAN_CC_PRACH_UD_IQ_WIDTH,                    0xe920, 0x0000000f,  0,  4, 0x9, Rw, when "cfg_ena_ssb";
        ORAN_CC_RELOAD,                               0xe000, 0x000000ff,  0,  8, 0x0, WPlsH;
        ORAN_CC_SSB_CTRL_OFFSETS,                     0xe904, 0x0000ffff,  0, 16, 0x0, Rw, per ComponentCarriers 0x70, when "cfg_ena_ssb";
        ORAN_CC_SSB_DATA_SYM_START_INDEX,             0xe914, 0x0000003f,  0,  6, 0x0, Rw, per ComponentCarriers 0x70, when "cfg_ena_ssb";
        ORAN_CC_SSB_DATA_UNROLL_OFFSET,               0xed00, 0x0000ffff,  0, 16, 0x0, Rw, per DlSymbols 0x4, when "cfg_ena_ssb";
        ORAN_CC_SSB_MPLANE_UDCOMP_HDR_SEL,            0xe91c, 0x00000100,  8,  1, 0x1, Rw, per ComponentCarriers 0x70, when "cfg_ena_ssb";
        ORAN_CC_SSB_NUMEROLOGY,                       0xe900, 0x00070000, 16,  3, 0x0, Rw, per ComponentCarriers 0x70, when "cfg_ena_ssb";
        ORAN_CC_SSB_NUMRBS,                           0xe900, 0x000001ff,  0,  9, 0x10, Rw, per ComponentCarriers 0x70, when "cfg_ena_ssb";
        ORAN_CC_SSB_NUM_DATA_SYM_PER_CC,              0xe914, 0x00003f00,  8,  6, 0x0, Rw, per ComponentCarriers 0x70, when "cfg_ena_ssb";
        ORAN_CC_SSB_NUM_SYM_PER_CC,                   0xe914, 0x003f0000, 16,  6, 0x0, Rw, per ComponentCarriers 0x70, when "cfg_ena_ssb";
        ORAN_CC_SSB_SECTS_X_SYMBOLS,                  0xe968, 0x0000ffff,  0, 16, 0x40, Rw, per ComponentCarriers 0x70, when "cfg_ena_ssb";
        ORAN_CC_SSB_SETUP_C_ABS_SYMBOL,               0xe930, 0x00000fff,  0, 12, 0x0, RwPdef, per ComponentCarriers 0x70, when "cfg_ena_ssb";
        ORAN_CC_SSB_SETUP_C_CYCLES,                   0xe934, 0x0001ffff,  0, 17, 0x0, RwPdef, per ComponentCarriers 0x70, when "cfg_ena_ssb";
        ORAN_CC_SSB_SETUP_D_CYCLES,                   0xe938, 0x0001ffff,  0, 17, 0x0, RwPdef, per ComponentCarriers 0x70, when "cfg_ena_ssb";
        ORAN_CC_SSB_SYMPERSLOT,                       0xe900, 0x01000000, 24,  1, 0x0, Rw, per ComponentCarriers 0x70, when "cfg_ena_ssb";
        ORAN_CC_SSB_UD_COMP_METH,                     0xe91c, 0x000000f0,  4,  4, 0x1, Rw, per ComponentCarriers 0x70, when "cfg_ena_ssb";
        ORAN_CC_SSB_UD_IQ_WIDTH,                      0xe91c, 0x0000000f,  0,  4, 0x9, Rw, per ComponentCarriers 0x70, when "cfg_ena_ssb";
        ORAN_CC_SYMPERSLOT,                           0xe100, 0x01000000, 24,  1, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_UL_BASE_OFFSET,                       0xe140, 0x0000ffff,  0, 16, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_UL_BIDF_C_ABS_SYMBOL,                 0xe144, 0x00000fff,  0, 12, 0x0, RwPdef, per ComponentCarriers 0x70;
        ORAN_CC_UL_BIDF_C_CYCLES,                     0xe148, 0x0001ffff,  0, 17, 0x0, RwPdef, per ComponentCarriers 0x70;
        ORAN_CC_UL_CTRL_OFFSETS,                      0xe10c, 0x0000ffff,  0, 16, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_UL_CTRL_SYM_NUM_INDEX,                0xe114, 0x3f000000, 24,  6, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_UL_CTRL_UNROLLED_OFFSETS,             0xe110, 0x0000ffff,  0, 16, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_UL_MPLANE_UDCOMP_HDR_SEL,             0xe118, 0x00000100,  8,  1, 0x1, Rw, per ComponentCarriers 0x70;
        ORAN_CC_UL_SETUP_C_ABS_SYMBOL,                0xe120, 0x00000fff,  0, 12, 0x0, RwPdef, per ComponentCarriers 0x70;
        ORAN_CC_UL_SETUP_C_CYCLES,                    0xe124, 0x0001ffff,  0, 17, 0x0, RwPdef, per ComponentCarriers 0x70;
        ORAN_CC_UL_SETUP_D_CYCLES,                    0xe128, 0x0001ffff,  0, 17, 0x0, RwPdef, per ComponentCarriers 0x70;
        ORAN_CC_UL_UD_COMP_METH,                      0xe118, 0x000000f0,  4,  4, 0x1, Rw, per ComponentCarriers 0x70;
        ORAN_CC_UL_UD_IQ_WIDTH,                       0xe118, 0x0000000f,  0,  4, 0x9, Rw, per ComponentCarriers 0x70;
        ORAN_SETUP_CNT,                               0xe600, 0xffffffff,  0, 32, 0x0, Rw;
        ORAN_SETUP_SF,                                0xe608, 0x0000000f,  0,  4, 0x9, Rw;
        ORAN_SETUP_SL,                                0xe60c, 0x0000000f,  0,  4, 0x0, Rw;
        ORAN_SETUP_SY,                                0xe610, 0x0000000f,  0,  4, 0x7, Rw;
        ORAN_SETUP_SY_COUNTER,                        0xe604, 0x00000002,  1,  1, 0x0, WPlsH;
        ORAN_STRIP_FCS,                               0xe604, 0x00000001,  0,  1, 0x0, Rw;
    }

    // Per-port statistics counters
    Stats {
        STATS_ETH_STATS_ORAN_RX_BIT_RATE,             0xc01c, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_TOTAL_RX_BAD_FCS_CNT_H,       0xc014, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_TOTAL_RX_BAD_FCS_CNT_L,       0xc010, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_TOTAL_RX_BAD_PKT_CNT_H,       0xc00c, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_TOTAL_RX_BAD_PKT_CNT_L,       0xc008, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_TOTAL_RX_BIT_RATE,            0xc018, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_TOTAL_RX_GOOD_PKT_CNT_H,      0xc004, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_TOTAL_RX_GOOD_PKT_CNT_L,      0xc000, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_OFFSET_EARLIEST_C_PKT,                  0xc084, 0x00000fff,  0, 12, 0x0, RoSig, per EthPorts 0x100;
        STATS_OFFSET_EARLIEST_U_PKT,                  0xc080, 0x00000fff,  0, 12, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_CORRUPT_H,                      0xc064, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_CORRUPT_L,                      0xc060, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_EARLY_C_H,                      0xc054, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_EARLY_C_L,                      0xc050, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_EARLY_H,                        0xc034, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_EARLY_L,                        0xc030, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_ERROR_DROP_H,                   0xc06c, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_ERROR_DROP_L,                   0xc068, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_LATE_C_H,                       0xc05c, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_LATE_C_L,                       0xc058, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_LATE_H,                         0xc03c, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_LATE_L,                         0xc038, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_ON_TIME_C_H,                    0xc04c, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_ON_TIME_C_L,                    0xc048, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_ON_TIME_H,                      0xc02c, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_ON_TIME_L,                      0xc028, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_TOTAL_C_H,                      0xc044, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_TOTAL_C_L,                      0xc040, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_TOTAL_H,                        0xc024, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_RX_TOTAL_L,                        0xc020, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_TX_TOTAL_C_H,                      0xc07c, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_TX_TOTAL_C_L,                      0xc078, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_TX_TOTAL_H,                        0xc074, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ORAN_TX_TOTAL_L,                        0xc070, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
    }
}
