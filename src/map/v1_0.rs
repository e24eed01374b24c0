//! Register map of hardware revision 1.0
//!
//! Generated from the register description of the IP. Do not edit by hand;
//! regenerate the table instead.

impl_fields! {
    // Configuration, capability and interrupt registers
    Cfg {
        CFG_AXI_TIMEOUT_ENABLE,                    0x0014, 0x80000000, 31,  1, 0x1, Rw;
        CFG_AXI_TIMEOUT_STATUS,                    0x0018, 0x80000000, 31,  1, 0x0, RoSig;
        CFG_CONFIG_NO_OF_DEFM_ANTS,                0x0020, 0xffff0000, 16, 16, 0x0, RoSig;
        CFG_CONFIG_NO_OF_ETH_PORTS,                0x0024, 0x000003ff,  0, 10, 0x0, RoSig;
        CFG_CONFIG_NO_OF_FRAM_ANTS,                0x0020, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_DEFM_ETH_PKT_MAX,          0x0044, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_ETH_SS_BUF_PKT_PTRS,       0x0070, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_ETH_SS_BUF_WORD_DEPTH,     0x006c, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_FRAM_AUTO_START,           0x0040, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_FRAM_ETH_PKT_MAX,          0x003c, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_MAX_CC,                    0x002c, 0x0000001f,  0,  5, 0x0, RoSig;
        CFG_CONFIG_XRAN_MAX_CTRL_SYMBOLS,          0x004c, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_MAX_DL_CTRL_1KWORDS,       0x0054, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_MAX_DL_DATA_1KWORDS,       0x0058, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_MAX_DL_SECT_PER_SYMBOL,    0x0060, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_MAX_DL_SYMBOLS,            0x0030, 0x0000001f,  0,  5, 0x0, RoSig;
        CFG_CONFIG_XRAN_MAX_NUMEROLOGY,            0x0034, 0x00000007,  0,  3, 0x0, RoSig;
        CFG_CONFIG_XRAN_MAX_SCS,                   0x0048, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_MAX_UL_CTRL_1KWORDS,       0x0050, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_MAX_UL_SECT_PER_SYMBOL,    0x0064, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_MIN_NUMEROLOGY,            0x0038, 0x00000007,  0,  3, 0x0, RoSig;
        CFG_CONFIG_XRAN_PRACH_C_PORTS,             0x0074, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_SUPPORT_MODE,              0x0028, 0x0000000f,  0,  4, 0x5, RoSig;
        CFG_CONFIG_XRAN_TIMER_CLK_PS,              0x005c, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_CONFIG_XRAN_UNSOL_PORTS_FRAM,          0x0068, 0x0000ffff,  0, 16, 0x0, RoSig;
        CFG_DEFM_INT_ENA_ETH_PIPE_C_BUF_OF,        0x0014, 0x00000400, 10,  1, 0x0, Rw;
        CFG_DEFM_INT_ENA_ETH_PIPE_TABLE_OF,        0x0014, 0x00000800, 11,  1, 0x0, Rw;
        CFG_DEFM_INT_ENA_INFIFO_OF,                0x0014, 0x00000100,  8,  1, 0x0, Rw;
        CFG_DEFM_INT_ENA_INFIFO_UF,                0x0014, 0x00000200,  9,  1, 0x0, Rw;
        CFG_DEFM_INT_ETH_PIPE_C_BUF_OF,            0x0018, 0x00000400, 10,  1, 0x0, RoSig;
        CFG_DEFM_INT_ETH_PIPE_TABLE_OF,            0x0018, 0x00000800, 11,  1, 0x0, RoSig;
        CFG_DEFM_INT_INFIFO_OF,                    0x0018, 0x00000100,  8,  1, 0x0, RoSig;
        CFG_DEFM_INT_INFIFO_UF,                    0x0018, 0x00000200,  9,  1, 0x0, RoSig;
        CFG_DEFM_RESET_STATUS,                     0x0018, 0x00000002,  1,  1, 0x0, RoSig;
        CFG_FRAM_INT_ENA_OUTFIFO_OF,               0x0014, 0x00001000, 12,  1, 0x0, Rw;
        CFG_FRAM_INT_ENA_OUTFIFO_UF,               0x0014, 0x00002000, 13,  1, 0x0, Rw;
        CFG_FRAM_INT_ENA_PRACH_SECTION_NOTFOUND,   0x0014, 0x00008000, 15,  1, 0x0, Rw;
        CFG_FRAM_INT_ENA_PRACH_SECTION_OVERFLOW,   0x0014, 0x00004000, 14,  1, 0x0, Rw;
        CFG_FRAM_INT_OUTFIFO_OF,                   0x0018, 0x00001000, 12,  1, 0x0, RoSig;
        CFG_FRAM_INT_OUTFIFO_UF,                   0x0018, 0x00002000, 13,  1, 0x0, RoSig;
        CFG_FRAM_INT_PRACH_SECTION_NOTFOUND,       0x0018, 0x00008000, 15,  1, 0x0, RoSig;
        CFG_FRAM_INT_PRACH_SECTION_OVERFLOW,       0x0018, 0x00004000, 14,  1, 0x0, RoSig;
        CFG_FRAM_RESET_STATUS,                     0x0018, 0x00000001,  0,  1, 0x0, RoSig;
        CFG_INTERNAL_REVISION,                     0x0004, 0xffffffff,  0, 32, 0x12345678, RoInt;
        CFG_INTERRUPT_STATUS_SAMPLE,               0x001c, 0x00000001,  0,  1, 0x1, Rw;
        CFG_MAJOR_REVISION,                        0x0000, 0xff000000, 24,  8, 0x1, RoInt;
        CFG_MASTER_INT_ENABLE,                     0x0010, 0x00000001,  0,  1, 0x0, Rw;
        CFG_MINOR_REVISION,                        0x0000, 0x00ff0000, 16,  8, 0x0, RoInt;
        CFG_TIMEOUT_VALUE,                         0x0008, 0x00000fff,  0, 12, 0x80, Rw;
        CFG_USER_RO_IN,                            0x000c, 0x00ff0000, 16,  8, 0x0, RoSig;
        CFG_USER_RW_OUT,                           0x000c, 0x000000ff,  0,  8, 0x0, Rw;
        CFG_VERSION_REVISION,                      0x0000, 0x0000ff00,  8,  8, 0x0, RoInt;
    }

    // De-framer (downlink) registers
    Defm {
        DEFM_ERR_PACKET_FILTER,                    0x6004, 0x00000003,  0,  2, 0x0, Rw;
        DEFM_READY,                                0x6000, 0x00000002,  1,  1, 0x0, RoSig;
        DEFM_RESTART,                              0x6000, 0x00000001,  0,  1, 0x0, Rw;
        DEFM_USER_DATA_FILTER_W0_127_96,           0x610c, 0xffffffff,  0, 32, 0xfffffeae, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W0_31_0,             0x6100, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W0_63_32,            0x6104, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W0_95_64,            0x6108, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W0_MASK,             0x6110, 0x0000ffff,  0, 16, 0xcfff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W1_127_96,           0x612c, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W1_31_0,             0x6120, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W1_63_32,            0x6124, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W1_95_64,            0x6128, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W1_MASK,             0x6130, 0x0000ffff,  0, 16, 0xffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W2_127_96,           0x614c, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W2_31_0,             0x6140, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W2_63_32,            0x6144, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W2_95_64,            0x6148, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W2_MASK,             0x6150, 0x0000ffff,  0, 16, 0xffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W3_127_96,           0x616c, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W3_31_0,             0x6160, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W3_63_32,            0x6164, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W3_95_64,            0x6168, 0xffffffff,  0, 32, 0xffffffff, RwPdef, per EthPorts 0x100;
        DEFM_USER_DATA_FILTER_W3_MASK,             0x6170, 0x0000ffff,  0, 16, 0xffff, RwPdef, per EthPorts 0x100;
        DEFM_XRAN_BANDSECTOR_FIELD_WIDTH,          0x6080, 0x00000f00,  8,  4, 0x4, RoCst;
        DEFM_XRAN_CC_ID_FIELD_WIDTH,               0x6080, 0x000000f0,  4,  4, 0x4, RoCst;
        DEFM_XRAN_RU_PORT_ID_FIELD_WIDTH,          0x6080, 0x0000000f,  0,  4, 0x4, RoCst;
    }

    // Ethernet port registers
    Eth {
        ETH_DEST_ADDR_31_0,                        0xa000, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100;
        ETH_DEST_ADDR_47_32,                       0xa004, 0x0000ffff,  0, 16, 0x0, RwPdef, per EthPorts 0x100;
        ETH_IPV4_DESTINATION_ADD,                  0xa04c, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100;
        ETH_IPV4_DSCP,                             0xa034, 0x0000003f,  0,  6, 0x2e, Rw, per EthPorts 0x100;
        ETH_IPV4_ECN,                              0xa034, 0x000000c0,  6,  2, 0x0, Rw, per EthPorts 0x100;
        ETH_IPV4_FLAGS,                            0xa03c, 0x00000007,  0,  3, 0x2, Rw, per EthPorts 0x100;
        ETH_IPV4_FRAGMENT_OFFSET,                  0xa03c, 0x0000fff8,  3, 13, 0x0, Rw, per EthPorts 0x100;
        ETH_IPV4_ID,                               0xa038, 0x0000ffff,  0, 16, 0x0, Rw, per EthPorts 0x100;
        ETH_IPV4_IHL,                              0xa030, 0x000000f0,  4,  4, 0x5, Rw, per EthPorts 0x100;
        ETH_IPV4_PROTOCOL,                         0xa044, 0x000000ff,  0,  8, 0x11, Rw, per EthPorts 0x100;
        ETH_IPV4_SOURCE_ADD,                       0xa048, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100;
        ETH_IPV4_TIME_TO_LIVE,                     0xa040, 0x000000ff,  0,  8, 0x40, Rw, per EthPorts 0x100;
        ETH_IPV4_VERSION,                          0xa030, 0x0000000f,  0,  4, 0x4, Rw, per EthPorts 0x100;
        ETH_IPV6_DESTINATION_ADD_127_96,           0xa0b0, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100;
        ETH_IPV6_DESTINATION_ADD_31_0,             0xa0a4, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100;
        ETH_IPV6_DESTINATION_ADD_63_32,            0xa0a8, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100;
        ETH_IPV6_DESTINATION_ADD_95_64,            0xa0ac, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100;
        ETH_IPV6_FLOW_LABEL,                       0xa088, 0x000fffff,  0, 20, 0x0, Rw, per EthPorts 0x100;
        ETH_IPV6_HOP_LIMIT,                        0xa090, 0x000000ff,  0,  8, 0x40, Rw, per EthPorts 0x100;
        ETH_IPV6_NEXT_HEADER,                      0xa08c, 0x000000ff,  0,  8, 0x11, Rw, per EthPorts 0x100;
        ETH_IPV6_SOURCE_ADD_127_96,                0xa0a0, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100;
        ETH_IPV6_SOURCE_ADD_31_0,                  0xa094, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100;
        ETH_IPV6_SOURCE_ADD_63_32,                 0xa098, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100;
        ETH_IPV6_SOURCE_ADD_95_64,                 0xa09c, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100;
        ETH_IPV6_TRAFFIC_CLASS,                    0xa084, 0x000000ff,  0,  8, 0x0, Rw, per EthPorts 0x100;
        ETH_IPV6_V,                                0xa080, 0x0000000f,  0,  4, 0x6, Rw, per EthPorts 0x100;
        ETH_SRC_ADDR_31_0,                         0xa008, 0xffffffff,  0, 32, 0x0, RwPdef, per EthPorts 0x100;
        ETH_SRC_ADDR_47_32,                        0xa00c, 0x0000ffff,  0, 16, 0x0, RwPdef, per EthPorts 0x100;
        ETH_UDP_DESTINATION_PORT,                  0xa050, 0xffff0000, 16, 16, 0xc000, Rw, per EthPorts 0x100;
        ETH_UDP_SOURCE_PORT,                       0xa050, 0x0000ffff,  0, 16, 0x8000, Rw, per EthPorts 0x100;
        ETH_VLAN_DEI,                              0xa010, 0x00001000, 12,  1, 0x0, RwPdef, per EthPorts 0x100;
        ETH_VLAN_ID,                               0xa010, 0x00000fff,  0, 12, 0x1, RwPdef, per EthPorts 0x100;
        ETH_VLAN_PCP,                              0xa010, 0x0000e000, 13,  3, 0x7, RwPdef, per EthPorts 0x100;
    }

    // Framer (uplink) registers
    Fram {
        FRAM_DISABLE,                              0x2000, 0x00000001,  0,  1, 0x1, RwPdef;
        FRAM_FIFO_FULL_INDICATOR,                  0x2004, 0xffffffff,  0, 32, 0x0, RoSig;
        FRAM_GEN_VLAN_TAG,                         0x2200, 0x00000010,  4,  1, 0x0, Rw;
        FRAM_PROTOCOL_DEFINITION,                  0x2200, 0x0000000f,  0,  4, 0x0, Rw;
        FRAM_READY,                                0x2000, 0x00000002,  1,  1, 0x0, RoSig;
        FRAM_SEL_IPV_ADDRESS_TYPE,                 0x2200, 0x00000060,  5,  2, 0x0, Rw;
        FRAM_XRAN_BANDSECTOR_FIELD_WIDTH,          0x2080, 0x00000f00,  8,  4, 0x4, Rw;
        FRAM_XRAN_CC_ID_FIELD_WIDTH,               0x2080, 0x000000f0,  4,  4, 0x4, Rw;
        FRAM_XRAN_RU_PORT_ID_FIELD_WIDTH,          0x2080, 0x0000000f,  0,  4, 0x4, Rw;
    }

    // Component carrier and O-RAN section registers
    Oran {
        ORAN_CC_DL_CTRL_OFFSETS,                   0xe104, 0x0000ffff,  0, 16, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_DL_CTRL_SYM_NUM_INDEX,             0xe114, 0x003f0000, 16,  6, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_DL_CTRL_UNROLLED_OFFSETS,          0xe108, 0x0000ffff,  0, 16, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_DL_DATA_SYM_NUM_INDEX,             0xe114, 0x00003f00,  8,  6, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_DL_DATA_SYM_START_INDEX,           0xe114, 0x0000003f,  0,  6, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_DL_DATA_UNROLL_OFFSET,             0xe500, 0x0000ffff,  0, 16, 0x0, Rw, per DlSymbols 0x4;
        ORAN_CC_DL_MPLANE_UDCOMP_PARAM,            0xe11c, 0x00000100,  8,  1, 0x1, Rw, per ComponentCarriers 0x70;
        ORAN_CC_DL_SETUP_C_ABS_SYMBOL,             0xe130, 0x00000fff,  0, 12, 0x0, RwPdef, per ComponentCarriers 0x70;
        ORAN_CC_DL_SETUP_C_CYCLES,                 0xe134, 0x0001ffff,  0, 17, 0x0, RwPdef, per ComponentCarriers 0x70;
        ORAN_CC_DL_SETUP_D_CYCLES,                 0xe138, 0x0001ffff,  0, 17, 0x0, RwPdef, per ComponentCarriers 0x70;
        ORAN_CC_DL_UD_COMP_METH,                   0xe11c, 0x000000f0,  4,  4, 0x1, Rw, per ComponentCarriers 0x70;
        ORAN_CC_DL_UD_IQ_WIDTH,                    0xe11c, 0x0000000f,  0,  4, 0x9, Rw, per ComponentCarriers 0x70;
        ORAN_CC_ENABLE,                            0xe004, 0x000000ff,  0,  8, 0x0, Rw;
        ORAN_CC_MAX_SYMBOLS,                       0xe158, 0x00000fff,  0, 12, 0x8c, Rw, per ComponentCarriers 0x70;
        ORAN_CC_MODVALS_DL,                        0xe168, 0x0000ffff,  0, 16, 0x40, Rw, per ComponentCarriers 0x70;
        ORAN_CC_MODVALS_UL,                        0xe16c, 0x0000ffff,  0, 16, 0x40, Rw, per ComponentCarriers 0x70;
        ORAN_CC_NUMEROLOGY,                        0xe100, 0x00070000, 16,  3, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_NUMRBS,                            0xe100, 0x000001ff,  0,  9, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_NUM_CTRL_PER_SYMBOL_DL,            0xe160, 0x0000ffff,  0, 16, 0x10, Rw, per ComponentCarriers 0x70;
        ORAN_CC_NUM_CTRL_PER_SYMBOL_UL,            0xe164, 0x0000ffff,  0, 16, 0x10, Rw, per ComponentCarriers 0x70;
        ORAN_CC_RELOAD,                            0xe000, 0x000000ff,  0,  8, 0x0, WPlsH;
        ORAN_CC_SYMPERSLOT,                        0xe100, 0x01000000, 24,  1, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_UL_BASE_OFFSET,                    0xe140, 0x0000ffff,  0, 16, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_UL_CTRL_OFFSETS,                   0xe10c, 0x0000ffff,  0, 16, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_UL_CTRL_SYM_NUM_INDEX,             0xe114, 0x3f000000, 24,  6, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_UL_CTRL_UNROLLED_OFFSETS,          0xe110, 0x0000ffff,  0, 16, 0x0, Rw, per ComponentCarriers 0x70;
        ORAN_CC_UL_MPLANE_UDCOMP_PARAM,            0xe118, 0x00000100,  8,  1, 0x1, Rw, per ComponentCarriers 0x70;
        ORAN_CC_UL_SETUP_C_ABS_SYMBOL,             0xe120, 0x00000fff,  0, 12, 0x0, RwPdef, per ComponentCarriers 0x70;
        ORAN_CC_UL_SETUP_C_CYCLES,                 0xe124, 0x0001ffff,  0, 17, 0x0, RwPdef, per ComponentCarriers 0x70;
        ORAN_CC_UL_SETUP_D_CYCLES,                 0xe128, 0x0001ffff,  0, 17, 0x0, RwPdef, per ComponentCarriers 0x70;
        ORAN_CC_UL_UD_COMP_METH,                   0xe118, 0x000000f0,  4,  4, 0x1, Rw, per ComponentCarriers 0x70;
        ORAN_CC_UL_UD_IQ_WIDTH,                    0xe118, 0x0000000f,  0,  4, 0x9, Rw, per ComponentCarriers 0x70;
        ORAN_SETUP_CNT,                            0xe600, 0xffffffff,  0, 32, 0x0, Rw;
        ORAN_SETUP_SF,                             0xe608, 0x0000000f,  0,  4, 0x9, Rw;
        ORAN_SETUP_SL,                             0xe60c, 0x0000000f,  0,  4, 0x0, Rw;
        ORAN_SETUP_SY,                             0xe610, 0x0000000f,  0,  4, 0x7, Rw;
        ORAN_STRIP_FCS,                            0xe604, 0x00000001,  0,  1, 0x0, Rw;
    }

    // Per-port statistics counters
    Stats {
        STATS_ETH_STATS_TOTAL_RX_BAD_FCS_CNT,      0xc008, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_TOTAL_RX_BAD_PKT_CNT,      0xc004, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_TOTAL_RX_GOOD_PKT_CNT,     0xc000, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_USER_CTRL_RX_BAD_FCS_CNT,  0xc028, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_USER_CTRL_RX_BAD_PKT_CNT,  0xc024, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_USER_CTRL_RX_GOOD_PKT_CNT, 0xc020, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_USER_CTRL_RX_PACKETS_CNT,  0xc01c, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_USER_CTRL_RX_PKTS_RATE,    0xc030, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_USER_DATA_RX_BAD_FCS_CNT,  0xc018, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_USER_DATA_RX_BAD_PKT_CNT,  0xc014, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_USER_DATA_RX_GOOD_PKT_CNT, 0xc010, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_USER_DATA_RX_PACKETS_CNT,  0xc00c, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
        STATS_ETH_STATS_USER_DATA_RX_PKTS_RATE,    0xc02c, 0xffffffff,  0, 32, 0x0, RoSig, per EthPorts 0x100;
    }
}
