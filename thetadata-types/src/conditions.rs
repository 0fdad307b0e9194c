//! Quote- and trade-condition code tables.
//!
//! Codes follow the ThetaData values documentation. Quote conditions are
//! open-ended on the wire, so unknown codes are preserved rather than
//! rejected; trade conditions are a closed table and unknown codes are a
//! schema error.

use bitflags::bitflags;
use serde::Serialize;

/// Wire value meaning "no condition" in the extended trade-condition columns.
pub const CONDITION_ABSENT: u16 = 255;

/// Condition attached to one side of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)] // names mirror the service's condition table
pub enum QuoteCondition {
    Regular,
    BidAskAutoExec,
    Rotation,
    SpecialistAsk,
    SpecialistBid,
    Locked,
    FastMarket,
    SpecialistBidAsk,
    OneSide,
    OpeningQuote,
    ClosingQuote,
    MarketMakerClosed,
    DepthOnAsk,
    DepthOnBid,
    DepthOnBidAsk,
    Tier3,
    Crossed,
    Halted,
    OperationalHalt,
    News,
    NewsPending,
    NonFirm,
    DueToRelated,
    Resume,
    NoMarketMakers,
    OrderImbalance,
    OrderInflux,
    Indicated,
    PreOpen,
    InViewOfCommon,
    RelatedNewsPending,
    RelatedNewsOut,
    AdditionalInfo,
    RelatedAddlInfo,
    NoOpenResume,
    Deleted,
    RegulatoryHalt,
    SecSuspension,
    NonCompliance,
    FilingsNotCurrent,
    CatsHalted,
    Cats,
    ExDivOrSplit,
    Unassigned,
    InsideOpen,
    InsideClosed,
    OfferWanted,
    BidWanted,
    Cash,
    Inactive,
    NationalBbo,
    Nominal,
    Cabinet,
    NominalCabinet,
    BlankPrice,
    SlowBidAsk,
    SlowList,
    SlowBid,
    SlowAsk,
    BidOfferWanted,
    SubPenny,
    NonBbo,
    SpecialOpen,
    Benchmark,
    Implied,
    ExchangeBest,
    MktWideHalt1,
    MktWideHalt2,
    MktWideHalt3,
    OnDemandAuction,
    NonFirmBid,
    NonFirmAsk,
    RetailBid,
    RetailAsk,
    RetailQte,
    /// A code outside the published table, preserved as-is.
    Unknown(u16),
}

impl QuoteCondition {
    /// Resolve a wire code. Codes outside the table come back as
    /// [`QuoteCondition::Unknown`], never an error.
    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        match code {
            0 => Self::Regular,
            1 => Self::BidAskAutoExec,
            2 => Self::Rotation,
            3 => Self::SpecialistAsk,
            4 => Self::SpecialistBid,
            5 => Self::Locked,
            6 => Self::FastMarket,
            7 => Self::SpecialistBidAsk,
            8 => Self::OneSide,
            9 => Self::OpeningQuote,
            10 => Self::ClosingQuote,
            11 => Self::MarketMakerClosed,
            12 => Self::DepthOnAsk,
            13 => Self::DepthOnBid,
            14 => Self::DepthOnBidAsk,
            15 => Self::Tier3,
            16 => Self::Crossed,
            17 => Self::Halted,
            18 => Self::OperationalHalt,
            19 => Self::News,
            20 => Self::NewsPending,
            21 => Self::NonFirm,
            22 => Self::DueToRelated,
            23 => Self::Resume,
            24 => Self::NoMarketMakers,
            25 => Self::OrderImbalance,
            26 => Self::OrderInflux,
            27 => Self::Indicated,
            28 => Self::PreOpen,
            29 => Self::InViewOfCommon,
            30 => Self::RelatedNewsPending,
            31 => Self::RelatedNewsOut,
            32 => Self::AdditionalInfo,
            33 => Self::RelatedAddlInfo,
            34 => Self::NoOpenResume,
            35 => Self::Deleted,
            36 => Self::RegulatoryHalt,
            37 => Self::SecSuspension,
            38 => Self::NonCompliance,
            39 => Self::FilingsNotCurrent,
            40 => Self::CatsHalted,
            41 => Self::Cats,
            42 => Self::ExDivOrSplit,
            43 => Self::Unassigned,
            44 => Self::InsideOpen,
            45 => Self::InsideClosed,
            46 => Self::OfferWanted,
            47 => Self::BidWanted,
            48 => Self::Cash,
            49 => Self::Inactive,
            50 => Self::NationalBbo,
            51 => Self::Nominal,
            52 => Self::Cabinet,
            53 => Self::NominalCabinet,
            54 => Self::BlankPrice,
            55 => Self::SlowBidAsk,
            56 => Self::SlowList,
            57 => Self::SlowBid,
            58 => Self::SlowAsk,
            59 => Self::BidOfferWanted,
            60 => Self::SubPenny,
            61 => Self::NonBbo,
            62 => Self::SpecialOpen,
            63 => Self::Benchmark,
            64 => Self::Implied,
            65 => Self::ExchangeBest,
            66 => Self::MktWideHalt1,
            67 => Self::MktWideHalt2,
            68 => Self::MktWideHalt3,
            69 => Self::OnDemandAuction,
            70 => Self::NonFirmBid,
            71 => Self::NonFirmAsk,
            72 => Self::RetailBid,
            73 => Self::RetailAsk,
            74 => Self::RetailQte,
            other => Self::Unknown(other),
        }
    }

    /// The numeric wire code.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Regular => 0,
            Self::BidAskAutoExec => 1,
            Self::Rotation => 2,
            Self::SpecialistAsk => 3,
            Self::SpecialistBid => 4,
            Self::Locked => 5,
            Self::FastMarket => 6,
            Self::SpecialistBidAsk => 7,
            Self::OneSide => 8,
            Self::OpeningQuote => 9,
            Self::ClosingQuote => 10,
            Self::MarketMakerClosed => 11,
            Self::DepthOnAsk => 12,
            Self::DepthOnBid => 13,
            Self::DepthOnBidAsk => 14,
            Self::Tier3 => 15,
            Self::Crossed => 16,
            Self::Halted => 17,
            Self::OperationalHalt => 18,
            Self::News => 19,
            Self::NewsPending => 20,
            Self::NonFirm => 21,
            Self::DueToRelated => 22,
            Self::Resume => 23,
            Self::NoMarketMakers => 24,
            Self::OrderImbalance => 25,
            Self::OrderInflux => 26,
            Self::Indicated => 27,
            Self::PreOpen => 28,
            Self::InViewOfCommon => 29,
            Self::RelatedNewsPending => 30,
            Self::RelatedNewsOut => 31,
            Self::AdditionalInfo => 32,
            Self::RelatedAddlInfo => 33,
            Self::NoOpenResume => 34,
            Self::Deleted => 35,
            Self::RegulatoryHalt => 36,
            Self::SecSuspension => 37,
            Self::NonCompliance => 38,
            Self::FilingsNotCurrent => 39,
            Self::CatsHalted => 40,
            Self::Cats => 41,
            Self::ExDivOrSplit => 42,
            Self::Unassigned => 43,
            Self::InsideOpen => 44,
            Self::InsideClosed => 45,
            Self::OfferWanted => 46,
            Self::BidWanted => 47,
            Self::Cash => 48,
            Self::Inactive => 49,
            Self::NationalBbo => 50,
            Self::Nominal => 51,
            Self::Cabinet => 52,
            Self::NominalCabinet => 53,
            Self::BlankPrice => 54,
            Self::SlowBidAsk => 55,
            Self::SlowList => 56,
            Self::SlowBid => 57,
            Self::SlowAsk => 58,
            Self::BidOfferWanted => 59,
            Self::SubPenny => 60,
            Self::NonBbo => 61,
            Self::SpecialOpen => 62,
            Self::Benchmark => 63,
            Self::Implied => 64,
            Self::ExchangeBest => 65,
            Self::MktWideHalt1 => 66,
            Self::MktWideHalt2 => 67,
            Self::MktWideHalt3 => 68,
            Self::OnDemandAuction => 69,
            Self::NonFirmBid => 70,
            Self::NonFirmAsk => 71,
            Self::RetailBid => 72,
            Self::RetailAsk => 73,
            Self::RetailQte => 74,
            Self::Unknown(other) => other,
        }
    }
}

bitflags! {
    /// How a trade report affects the consolidated tape.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TradeConditionFlags: u8 {
        /// The report cancels a previous print.
        const CANCEL = 1;
        /// The print was reported late or out of sequence.
        const LATE_REPORT = 1 << 1;
        /// The trade was executed automatically/electronically.
        const AUTO_EXECUTED = 1 << 2;
        /// The print contributes to session volume.
        const UPDATES_VOLUME = 1 << 3;
        /// The print can set the session high.
        const UPDATES_HIGH = 1 << 4;
        /// The print can set the session low.
        const UPDATES_LOW = 1 << 5;
        /// The print can update the last-sale price.
        const UPDATES_LAST = 1 << 6;
    }
}

/// Condition attached to a trade report.
///
/// The table has holes (3, 23, 24, 57) which the service never emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)] // names mirror the service's condition table
#[repr(u16)]
pub enum TradeCondition {
    Regular = 0,
    FormT = 1,
    OutOfSeq = 2,
    AvgPrcNasdaq = 4,
    OpenReportLate = 5,
    OpenReportOutOfSeq = 6,
    OpenReportInSeq = 7,
    PriorReferencePrice = 8,
    NextDaySale = 9,
    Bunched = 10,
    CashSale = 11,
    Seller = 12,
    SoldLast = 13,
    Rule127 = 14,
    BunchedSold = 15,
    NonBoardLot = 16,
    Posit = 17,
    AutoExecution = 18,
    Halt = 19,
    Delayed = 20,
    Reopen = 21,
    Acquisition = 22,
    BurstBasket = 25,
    OpenDetail = 26,
    IntraDetail = 27,
    BasketOnClose = 28,
    Rule155 = 29,
    Distribution = 30,
    Split = 31,
    RegularSettle = 32,
    CustomBasketCross = 33,
    AdjTerms = 34,
    Spread = 35,
    Straddle = 36,
    BuyWrite = 37,
    Combo = 38,
    Stpd = 39,
    Canc = 40,
    CancLast = 41,
    CancOpen = 42,
    CancOnly = 43,
    CancStpd = 44,
    MatchCross = 45,
    FastMarket = 46,
    Nominal = 47,
    Cabinet = 48,
    BlankPrice = 49,
    NotSpecified = 50,
    McOfficialClose = 51,
    SpecialTerms = 52,
    ContingentOrder = 53,
    InternalCross = 54,
    StoppedRegular = 55,
    StoppedSoldLast = 56,
    Basis = 58,
    Vwap = 59,
    SpecialSession = 60,
    NanexAdmin = 61,
    OpenReport = 62,
    MarketOnClose = 63,
    SettlePrice = 64,
    OutOfSeqPreMkt = 65,
    McOfficialOpen = 66,
    FuturesSpread = 67,
    OpenRange = 68,
    CloseRange = 69,
    NominalCabinet = 70,
    ChangingTrans = 71,
    ChangingTransCab = 72,
    NominalUpdate = 73,
    PitSettlement = 74,
    BlockTrade = 75,
    ExgForPhysical = 76,
    VolumeAdjustment = 77,
    VolatilityTrade = 78,
    YellowFlag = 79,
    FloorPrice = 80,
    OfficialPrice = 81,
    UnofficialPrice = 82,
    MidBidAskPrice = 83,
    EndSessionHigh = 84,
    EndSessionLow = 85,
    Backwardation = 86,
    Contango = 87,
    Holiday = 88,
    PreOpening = 89,
    PostFull = 90,
    PostRestricted = 91,
    ClosingAuction = 92,
    Batch = 93,
    Trading = 94,
    IntermarketSweep = 95,
    Derivative = 96,
    Reopening = 97,
    Closing = 98,
    CapElection = 99,
    SpotSettlement = 100,
    BasisHigh = 101,
    BasisLow = 102,
    Yield = 103,
    PriceVariation = 104,
    ContingentTrade = 105,
    StoppedIm = 106,
    Benchmark = 107,
    TradeThruExempt = 108,
    Implied = 109,
    Otc = 110,
    MktSupervision = 111,
    Reserved77 = 112,
    Reserved91 = 113,
    ContingentUtp = 114,
    OddLot = 115,
    Reserved89 = 116,
    CorrectedCsLast = 117,
    OpraExtHours = 118,
    Reserved78 = 119,
    Reserved81 = 120,
    Reserved84 = 121,
    Reserved878 = 122,
    Reserved90 = 123,
    QualifiedContingentTrade = 124,
    SingleLegAuctionNonIso = 125,
    SingleLegAuctionIso = 126,
    SingleLegCrossNonIso = 127,
    SingleLegCrossIso = 128,
    SingleLegFloorTrade = 129,
    MultiLegAutoElecTrade = 130,
    MultiLegAuction = 131,
    MultiLegCross = 132,
    MultiLegFloorTrade = 133,
    MlAutoElecTradeAgsl = 134,
    StockOptionsAuction = 135,
    MlAuctionAgsl = 136,
    MlFloorTradeAgsl = 137,
    StkOptAutoElecTrade = 138,
    StockOptionsCross = 139,
    StockOptionsFloorTrade = 140,
    StkOptAeTrdAgsl = 141,
    StkOptAuctionAgsl = 142,
    StkOptFloorTradeAgsl = 143,
    MlFloorTradeOfPp = 144,
    BidAggressor = 145,
    AskAggressor = 146,
    MultilatCompTrPdp = 147,
    ExtendedHoursTrade = 148,
}

impl TradeCondition {
    /// Resolve a wire code. Returns `None` for codes outside the table,
    /// including the `255` absent sentinel.
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        Some(match code {
            0 => Self::Regular,
            1 => Self::FormT,
            2 => Self::OutOfSeq,
            4 => Self::AvgPrcNasdaq,
            5 => Self::OpenReportLate,
            6 => Self::OpenReportOutOfSeq,
            7 => Self::OpenReportInSeq,
            8 => Self::PriorReferencePrice,
            9 => Self::NextDaySale,
            10 => Self::Bunched,
            11 => Self::CashSale,
            12 => Self::Seller,
            13 => Self::SoldLast,
            14 => Self::Rule127,
            15 => Self::BunchedSold,
            16 => Self::NonBoardLot,
            17 => Self::Posit,
            18 => Self::AutoExecution,
            19 => Self::Halt,
            20 => Self::Delayed,
            21 => Self::Reopen,
            22 => Self::Acquisition,
            25 => Self::BurstBasket,
            26 => Self::OpenDetail,
            27 => Self::IntraDetail,
            28 => Self::BasketOnClose,
            29 => Self::Rule155,
            30 => Self::Distribution,
            31 => Self::Split,
            32 => Self::RegularSettle,
            33 => Self::CustomBasketCross,
            34 => Self::AdjTerms,
            35 => Self::Spread,
            36 => Self::Straddle,
            37 => Self::BuyWrite,
            38 => Self::Combo,
            39 => Self::Stpd,
            40 => Self::Canc,
            41 => Self::CancLast,
            42 => Self::CancOpen,
            43 => Self::CancOnly,
            44 => Self::CancStpd,
            45 => Self::MatchCross,
            46 => Self::FastMarket,
            47 => Self::Nominal,
            48 => Self::Cabinet,
            49 => Self::BlankPrice,
            50 => Self::NotSpecified,
            51 => Self::McOfficialClose,
            52 => Self::SpecialTerms,
            53 => Self::ContingentOrder,
            54 => Self::InternalCross,
            55 => Self::StoppedRegular,
            56 => Self::StoppedSoldLast,
            58 => Self::Basis,
            59 => Self::Vwap,
            60 => Self::SpecialSession,
            61 => Self::NanexAdmin,
            62 => Self::OpenReport,
            63 => Self::MarketOnClose,
            64 => Self::SettlePrice,
            65 => Self::OutOfSeqPreMkt,
            66 => Self::McOfficialOpen,
            67 => Self::FuturesSpread,
            68 => Self::OpenRange,
            69 => Self::CloseRange,
            70 => Self::NominalCabinet,
            71 => Self::ChangingTrans,
            72 => Self::ChangingTransCab,
            73 => Self::NominalUpdate,
            74 => Self::PitSettlement,
            75 => Self::BlockTrade,
            76 => Self::ExgForPhysical,
            77 => Self::VolumeAdjustment,
            78 => Self::VolatilityTrade,
            79 => Self::YellowFlag,
            80 => Self::FloorPrice,
            81 => Self::OfficialPrice,
            82 => Self::UnofficialPrice,
            83 => Self::MidBidAskPrice,
            84 => Self::EndSessionHigh,
            85 => Self::EndSessionLow,
            86 => Self::Backwardation,
            87 => Self::Contango,
            88 => Self::Holiday,
            89 => Self::PreOpening,
            90 => Self::PostFull,
            91 => Self::PostRestricted,
            92 => Self::ClosingAuction,
            93 => Self::Batch,
            94 => Self::Trading,
            95 => Self::IntermarketSweep,
            96 => Self::Derivative,
            97 => Self::Reopening,
            98 => Self::Closing,
            99 => Self::CapElection,
            100 => Self::SpotSettlement,
            101 => Self::BasisHigh,
            102 => Self::BasisLow,
            103 => Self::Yield,
            104 => Self::PriceVariation,
            105 => Self::ContingentTrade,
            106 => Self::StoppedIm,
            107 => Self::Benchmark,
            108 => Self::TradeThruExempt,
            109 => Self::Implied,
            110 => Self::Otc,
            111 => Self::MktSupervision,
            112 => Self::Reserved77,
            113 => Self::Reserved91,
            114 => Self::ContingentUtp,
            115 => Self::OddLot,
            116 => Self::Reserved89,
            117 => Self::CorrectedCsLast,
            118 => Self::OpraExtHours,
            119 => Self::Reserved78,
            120 => Self::Reserved81,
            121 => Self::Reserved84,
            122 => Self::Reserved878,
            123 => Self::Reserved90,
            124 => Self::QualifiedContingentTrade,
            125 => Self::SingleLegAuctionNonIso,
            126 => Self::SingleLegAuctionIso,
            127 => Self::SingleLegCrossNonIso,
            128 => Self::SingleLegCrossIso,
            129 => Self::SingleLegFloorTrade,
            130 => Self::MultiLegAutoElecTrade,
            131 => Self::MultiLegAuction,
            132 => Self::MultiLegCross,
            133 => Self::MultiLegFloorTrade,
            134 => Self::MlAutoElecTradeAgsl,
            135 => Self::StockOptionsAuction,
            136 => Self::MlAuctionAgsl,
            137 => Self::MlFloorTradeAgsl,
            138 => Self::StkOptAutoElecTrade,
            139 => Self::StockOptionsCross,
            140 => Self::StockOptionsFloorTrade,
            141 => Self::StkOptAeTrdAgsl,
            142 => Self::StkOptAuctionAgsl,
            143 => Self::StkOptFloorTradeAgsl,
            144 => Self::MlFloorTradeOfPp,
            145 => Self::BidAggressor,
            146 => Self::AskAggressor,
            147 => Self::MultilatCompTrPdp,
            148 => Self::ExtendedHoursTrade,
            _ => return None,
        })
    }

    /// The numeric wire code.
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Tape-handling semantics of this condition.
    #[must_use]
    pub const fn flags(self) -> TradeConditionFlags {
        use TradeConditionFlags as F;
        match self {
            // Cancellations remove a prior report.
            Self::Canc | Self::CancLast | Self::CancOpen | Self::CancOnly | Self::CancStpd => {
                F::CANCEL
            }
            // Late or out-of-sequence reports add volume without moving
            // last/high/low.
            Self::FormT
            | Self::OutOfSeq
            | Self::OpenReportLate
            | Self::OpenReportOutOfSeq
            | Self::PriorReferencePrice
            | Self::NextDaySale
            | Self::Seller
            | Self::SoldLast
            | Self::Delayed
            | Self::OutOfSeqPreMkt
            | Self::OpraExtHours
            | Self::ExtendedHoursTrade => F::LATE_REPORT.union(F::UPDATES_VOLUME),
            // Electronic auto-executions are full tape updates.
            Self::AutoExecution
            | Self::IntermarketSweep
            | Self::MultiLegAutoElecTrade
            | Self::MlAutoElecTradeAgsl
            | Self::StkOptAutoElecTrade
            | Self::StkOptAeTrdAgsl => F::AUTO_EXECUTED
                .union(F::UPDATES_VOLUME)
                .union(F::UPDATES_HIGH)
                .union(F::UPDATES_LOW)
                .union(F::UPDATES_LAST),
            // Administrative and indicative messages carry no tradeable print.
            Self::Halt
            | Self::NanexAdmin
            | Self::YellowFlag
            | Self::Holiday
            | Self::PreOpening
            | Self::SettlePrice
            | Self::PitSettlement
            | Self::SpotSettlement
            | Self::Nominal
            | Self::NominalCabinet
            | Self::NominalUpdate
            | Self::BlankPrice
            | Self::MktSupervision
            | Self::Reserved77
            | Self::Reserved78
            | Self::Reserved81
            | Self::Reserved84
            | Self::Reserved878
            | Self::Reserved89
            | Self::Reserved90
            | Self::Reserved91 => F::empty(),
            // Session-aggregate corrections.
            Self::EndSessionHigh => F::UPDATES_HIGH,
            Self::EndSessionLow => F::UPDATES_LOW,
            Self::McOfficialClose | Self::McOfficialOpen | Self::OfficialPrice => F::UPDATES_LAST,
            _ => F::UPDATES_VOLUME
                .union(F::UPDATES_HIGH)
                .union(F::UPDATES_LOW)
                .union(F::UPDATES_LAST),
        }
    }

    /// The report cancels a previous print.
    #[must_use]
    pub const fn is_cancel(self) -> bool {
        self.flags().contains(TradeConditionFlags::CANCEL)
    }

    /// The print was reported late or out of sequence.
    #[must_use]
    pub const fn is_late_report(self) -> bool {
        self.flags().contains(TradeConditionFlags::LATE_REPORT)
    }

    /// The trade was executed automatically.
    #[must_use]
    pub const fn is_auto_executed(self) -> bool {
        self.flags().contains(TradeConditionFlags::AUTO_EXECUTED)
    }

    /// The print contributes to session volume.
    #[must_use]
    pub const fn updates_volume(self) -> bool {
        self.flags().contains(TradeConditionFlags::UPDATES_VOLUME)
    }

    /// The print can set the session high.
    #[must_use]
    pub const fn updates_high(self) -> bool {
        self.flags().contains(TradeConditionFlags::UPDATES_HIGH)
    }

    /// The print can set the session low.
    #[must_use]
    pub const fn updates_low(self) -> bool {
        self.flags().contains(TradeConditionFlags::UPDATES_LOW)
    }

    /// The print can update the last-sale price.
    #[must_use]
    pub const fn updates_last(self) -> bool {
        self.flags().contains(TradeConditionFlags::UPDATES_LAST)
    }
}
