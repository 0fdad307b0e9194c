#![allow(dead_code)]

use chrono::NaiveDate;
use httpmock::MockServer;

use thetadata::types::{OptionContract, OptionRight};
use thetadata::{Config, ThetaClient};

/// Column order the at-time quote endpoints reply with.
pub const QUOTE_HEADER: &str =
    "ms_of_day,bid_size,bid_exchange,bid,bid_condition,ask_size,ask_exchange,ask,ask_condition,date";

pub fn client_for(server: &MockServer) -> ThetaClient {
    ThetaClient::new(Config::default().with_base_url(server.base_url())).expect("client builds")
}

pub fn spxw_put() -> OptionContract {
    OptionContract::new(
        "SPXW",
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        "6000".parse().unwrap(),
        OptionRight::Put,
    )
    .unwrap()
}

pub fn csv(header: &str, rows: &[&str]) -> String {
    let mut body = String::from(header);
    body.push('\n');
    for row in rows {
        body.push_str(row);
        body.push('\n');
    }
    body
}
