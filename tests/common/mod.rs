#![allow(dead_code)]

use std::path::Path;

use assert_fs::{prelude::*, TempDir};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use sales_report::{
    config::Config,
    core::ReportSession,
    domain::{Client, Ledger, OrderRecord, Product, TargetSeries},
};

pub const CLIENT_CSV: &str = "\
Client ID,Store Name,Owner,Phone,Email,Province
C1,Green Store,An Nguyen,0901,an@example.com,Ninh Thuan
C2,Farm Depot,Binh Tran,0902,binh@example.com,Khanh Hoa
C3,Hill Supply,Chi Le,0903,chi@example.com,Lam Dong
";

pub const PRODUCT_CSV: &str = "\
Product ID,Category,Name,Specification,Unit,Price
P1,NPK,NPK 16-16-8,50kg,bag,25
P2,foliar fertilizer,Leaf Boost,1L,bottle,12.5
P3,Organic,Compost,25kg,bag,8
";

pub const ORDER_CSV: &str = "\
Order ID,Client ID,Product ID,Date,Quantity,Total
1,C1,P1,2024-01-05,4,100
2,C1,P3,2024-03-12,6,50
3,C2,P1,2024-01-20,8,200
4,C2,P2,2024-02-02,3,37.5
";

/// Twelve targets of 100 each.
pub fn target_csv() -> String {
    let mut data = String::from("Month,Target\n");
    for month in 1..=12 {
        data.push_str(&format!("{month},100\n"));
    }
    data
}

/// A data directory holding the four input files under their default names.
pub fn data_dir() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    dir.child("client_data.csv")
        .write_str(CLIENT_CSV)
        .expect("write clients");
    dir.child("product_data.csv")
        .write_str(PRODUCT_CSV)
        .expect("write products");
    dir.child("order_data.csv")
        .write_str(ORDER_CSV)
        .expect("write orders");
    dir.child("monthly_target.csv")
        .write_str(&target_csv())
        .expect("write targets");
    dir
}

pub fn config_for(dir: &Path) -> Config {
    Config {
        data_dir: Some(dir.to_path_buf()),
        ..Config::default()
    }
}

fn date(month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, 1).expect("valid date")
}

/// Two clients in the predeclared provinces and three orders:
/// C1 pays 100 in January and 50 in March, C2 pays 200 in January.
pub static SCENARIO: Lazy<ReportSession> = Lazy::new(|| {
    let ledger = Ledger::new(vec![
        OrderRecord::new("C1", "P1", date(1), 2, 100.0),
        OrderRecord::new("C1", "P2", date(3), 1, 50.0),
        OrderRecord::new("C2", "P1", date(1), 5, 200.0),
    ]);
    let clients = vec![
        Client::new("C1", "Green Store", "0901", "Ninh Thuan"),
        Client::new("C2", "Farm Depot", "0902", "Khanh Hoa"),
    ];
    let products = vec![
        Product::new("P1", "NPK", "NPK 16-16-8", "50kg", "bag", 25.0),
        Product::new("P2", "Organic", "Compost", "25kg", "bag", 8.0),
    ];
    let targets = TargetSeries::from_values(&[120.0; 12]).expect("twelve targets");
    ReportSession::new(ledger, clients, products, targets)
});
