//! Exchange identifiers as reported in quote and trade rows.

use serde::Serialize;

/// A reporting exchange, keyed by the numeric code the service uses in
/// `*_exchange` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)] // variant names are the exchange short codes
#[repr(u16)]
pub enum Exchange {
    Nqex = 1,
    Nqad = 2,
    Nyse = 3,
    Amex = 4,
    Cboe = 5,
    Isex = 6,
    Pacf = 7,
    Cinc = 8,
    Phil = 9,
    Opra = 10,
    Bost = 11,
    Nqnm = 12,
    Nqsc = 13,
    Nqbb = 14,
    Nqpk = 15,
    Nqix = 16,
    Chic = 17,
    Tse = 18,
    Cdnx = 19,
    Cme = 20,
    Nybt = 21,
    Mrcy = 22,
    Comx = 23,
    Cbot = 24,
    Nymx = 25,
    Kcbt = 26,
    Mgex = 27,
    Nybo = 28,
    Nqbs = 29,
    Dowj = 30,
    Gemi = 31,
    Simx = 32,
    Ftse = 33,
    Eurx = 34,
    Impl = 35,
    Dtn = 36,
    Lmt = 37,
    Lme = 38,
    Ipex = 39,
    Nqmf = 40,
    Fcec = 41,
    C2 = 42,
    Miax = 43,
    Clrp = 44,
    Bark = 45,
    Emld = 46,
    Nqbx = 47,
    Hots = 48,
    Euus = 49,
    Eueu = 50,
    Encm = 51,
    Enid = 52,
    Enir = 53,
    Cfe = 54,
    Pbot = 55,
    CmeFloor = 56,
    Nqnx = 57,
    Btrf = 58,
    Ntrf = 59,
    Bats = 60,
    Fcbt = 61,
    Pink = 62,
    Baty = 63,
    Edge = 64,
    Edgx = 65,
    Rusl = 66,
    Cmex = 67,
    Iex = 68,
    Perl = 69,
    Lse = 70,
    Gif = 71,
    Tsix = 72,
    Memx = 73,
    Reserved74 = 74,
    Ltse = 75,
    Reserved76 = 76,
    Reserved77 = 77,
}

impl Exchange {
    /// Resolve a wire code. Returns `None` for codes outside the table.
    #[must_use]
    pub const fn try_from_code(code: u16) -> Option<Self> {
        Some(match code {
            1 => Self::Nqex,
            2 => Self::Nqad,
            3 => Self::Nyse,
            4 => Self::Amex,
            5 => Self::Cboe,
            6 => Self::Isex,
            7 => Self::Pacf,
            8 => Self::Cinc,
            9 => Self::Phil,
            10 => Self::Opra,
            11 => Self::Bost,
            12 => Self::Nqnm,
            13 => Self::Nqsc,
            14 => Self::Nqbb,
            15 => Self::Nqpk,
            16 => Self::Nqix,
            17 => Self::Chic,
            18 => Self::Tse,
            19 => Self::Cdnx,
            20 => Self::Cme,
            21 => Self::Nybt,
            22 => Self::Mrcy,
            23 => Self::Comx,
            24 => Self::Cbot,
            25 => Self::Nymx,
            26 => Self::Kcbt,
            27 => Self::Mgex,
            28 => Self::Nybo,
            29 => Self::Nqbs,
            30 => Self::Dowj,
            31 => Self::Gemi,
            32 => Self::Simx,
            33 => Self::Ftse,
            34 => Self::Eurx,
            35 => Self::Impl,
            36 => Self::Dtn,
            37 => Self::Lmt,
            38 => Self::Lme,
            39 => Self::Ipex,
            40 => Self::Nqmf,
            41 => Self::Fcec,
            42 => Self::C2,
            43 => Self::Miax,
            44 => Self::Clrp,
            45 => Self::Bark,
            46 => Self::Emld,
            47 => Self::Nqbx,
            48 => Self::Hots,
            49 => Self::Euus,
            50 => Self::Eueu,
            51 => Self::Encm,
            52 => Self::Enid,
            53 => Self::Enir,
            54 => Self::Cfe,
            55 => Self::Pbot,
            56 => Self::CmeFloor,
            57 => Self::Nqnx,
            58 => Self::Btrf,
            59 => Self::Ntrf,
            60 => Self::Bats,
            61 => Self::Fcbt,
            62 => Self::Pink,
            63 => Self::Baty,
            64 => Self::Edge,
            65 => Self::Edgx,
            66 => Self::Rusl,
            67 => Self::Cmex,
            68 => Self::Iex,
            69 => Self::Perl,
            70 => Self::Lse,
            71 => Self::Gif,
            72 => Self::Tsix,
            73 => Self::Memx,
            74 => Self::Reserved74,
            75 => Self::Ltse,
            76 => Self::Reserved76,
            77 => Self::Reserved77,
            _ => return None,
        })
    }

    /// The numeric wire code.
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Full name of the exchange.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Nqex => "Nasdaq Exchange",
            Self::Nqad => "Nasdaq Alternative Display Facility",
            Self::Nyse => "New York Stock Exchange",
            Self::Amex => "American Stock Exchange",
            Self::Cboe => "Chicago Board Options Exchange",
            Self::Isex => "International Securities Exchange",
            Self::Pacf => "NYSE ARCA (Pacific)",
            Self::Cinc => "National Stock Exchange (Cincinnati)",
            Self::Phil => "Philadelphia Stock Exchange",
            Self::Opra => "Options Pricing Reporting Authority",
            Self::Bost => "Boston Stock/Options Exchange",
            Self::Nqnm => "Nasdaq Global+Select Market (NMS)",
            Self::Nqsc => "Nasdaq Capital Market (SmallCap)",
            Self::Nqbb => "Nasdaq Bulletin Board",
            Self::Nqpk => "Nasdaq OTC",
            Self::Nqix => "Nasdaq Indexes (GIDS)",
            Self::Chic => "Chicago Stock Exchange",
            Self::Tse => "Toronto Stock Exchange",
            Self::Cdnx => "Canadian Venture Exchange",
            Self::Cme => "Chicago Mercantile Exchange",
            Self::Nybt => "New York Board of Trade",
            Self::Mrcy => "ISE Mercury",
            Self::Comx => "COMEX (division of NYMEX)",
            Self::Cbot => "Chicago Board of Trade",
            Self::Nymx => "New York Mercantile Exchange",
            Self::Kcbt => "Kansas City Board of Trade",
            Self::Mgex => "Minneapolis Grain Exchange",
            Self::Nybo => "NYSE/ARCA Bonds",
            Self::Nqbs => "Nasdaq Basic",
            Self::Dowj => "Dow Jones Indices",
            Self::Gemi => "ISE Gemini",
            Self::Simx => "Singapore International Monetary Exchange",
            Self::Ftse => "London Stock Exchange",
            Self::Eurx => "Eurex",
            Self::Impl => "Implied Price",
            Self::Dtn => "Data Transmission Network",
            Self::Lmt => "London Metals Exchange Matched Trades",
            Self::Lme => "London Metals Exchange",
            Self::Ipex => "Intercontinental Exchange (IPE)",
            Self::Nqmf => "Nasdaq Mutual Funds (MFDS)",
            Self::Fcec => "COMEX Clearport",
            Self::C2 => "CBOE C2 Option Exchange",
            Self::Miax => "Miami Exchange",
            Self::Clrp => "NYMEX Clearport",
            Self::Bark => "Barclays",
            Self::Emld => "Miami Emerald Options Exchange",
            Self::Nqbx => "NASDAQ Boston",
            Self::Hots => "HotSpot Eurex US",
            Self::Euus => "Eurex US",
            Self::Eueu => "Eurex EU",
            Self::Encm => "Euronext Commodities",
            Self::Enid => "Euronext Index Derivatives",
            Self::Enir => "Euronext Interest Rates",
            Self::Cfe => "CBOE Futures Exchange",
            Self::Pbot => "Philadelphia Board of Trade",
            Self::CmeFloor => "CME Floor",
            Self::Nqnx => "FINRA/NASDAQ Trade Reporting Facility",
            Self::Btrf => "BSE Trade Reporting Facility",
            Self::Ntrf => "NYSE Trade Reporting Facility",
            Self::Bats => "BATS Trading",
            Self::Fcbt => "CBOT Floor",
            Self::Pink => "Pink Sheets",
            Self::Baty => "BATS Y Exchange",
            Self::Edge => "Direct Edge A",
            Self::Edgx => "Direct Edge X",
            Self::Rusl => "Russell Indexes",
            Self::Cmex => "CME Indexes",
            Self::Iex => "Investors Exchange",
            Self::Perl => "Miami Pearl Options Exchange",
            Self::Lse => "London Stock Exchange",
            Self::Gif => "NYSE Global Index Feed",
            Self::Tsix => "TSX Indexes",
            Self::Memx => "Members Exchange",
            Self::Reserved74 | Self::Reserved76 | Self::Reserved77 => "Reserved",
            Self::Ltse => "Long-Term Stock Exchange",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for code in 0..=200u16 {
            match Exchange::try_from_code(code) {
                Some(ex) => assert_eq!(ex.code(), code),
                None => assert!(!(1..=77).contains(&code)),
            }
        }
    }

    #[test]
    fn known_descriptions() {
        assert_eq!(
            Exchange::Cboe.description(),
            "Chicago Board Options Exchange"
        );
        assert_eq!(Exchange::try_from_code(3), Some(Exchange::Nyse));
        assert_eq!(Exchange::try_from_code(78), None);
        assert_eq!(Exchange::try_from_code(0), None);
    }
}
