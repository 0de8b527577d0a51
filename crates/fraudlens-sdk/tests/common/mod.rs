//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use fraudlens_sdk::{PipelineOutput, RiskBucket};
use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str = "userid,amount,location,multi_login_attempts,time,ip_address,device,change_in_personal_info,payment_type,beneficiary,fraudulent";

pub const HEADER_WITHOUT_LABELS: &str = "userid,amount,location,multi_login_attempts,time,ip_address,device,change_in_personal_info,payment_type,beneficiary";

/// Ten hand-written transactions, four of them fraudulent
pub const TEN_RECORDS: &str = "\
U001,1500,Mumbai,0,2024-01-05 10:15:00,192.168.1.10,mobile,False,card,B0,0
U002,25000,Delhi,4,2024-01-05 02:40:00,10.0.0.7,desktop,True,netbanking,B3,1
U003,800,Pune,1,2024-01-06 14:05:00,172.16.4.2,mobile,False,upi,B0,0
U004,12500,Kolkata,3,2024-01-06 23:55:00,10.10.10.10,tablet,True,card,B2,1
U005,300,Mumbai,0,2024-01-07 09:30:00,192.168.0.5,mobile,False,upi,B1,0
U006,7200,Delhi,2,2024-01-07 01:10:00,8.8.8.8,desktop,False,card,B4,1
U007,450,Pune,0,2024-01-08 12:00:00,172.16.0.9,mobile,False,netbanking,B0,0
U008,2100,Chennai,2,2024-01-08 18:20:00,10.1.2.3,tablet,False,upi,B0,0
U009,41000,Kolkata,5,2024-01-09 03:45:00,45.33.12.9,desktop,True,netbanking,B3,1
U010,990,Mumbai,1,2024-01-09 11:11:00,192.168.1.77,mobile,False,card,B1,0
";

/// Write CSV text to a temporary file that lives as long as the handle
pub fn csv_file(header: &str, rows: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "{}", header).expect("Failed to write header");
    write!(file, "{}", rows).expect("Failed to write rows");
    file
}

/// Deterministic labeled corpus of `n` rows: fraud when row % 3 == 0
pub fn generated_rows(n: usize) -> String {
    let locations = ["Mumbai", "Delhi", "Pune", "Kolkata"];
    let mut rows = String::new();
    for i in 0..n {
        let fraud = i % 3 == 0;
        let amount = if fraud { 11000 + i * 37 } else { 200 + i * 13 };
        let logins = if fraud { 3 + i % 3 } else { i % 2 };
        rows.push_str(&format!(
            "U{:04},{},{},{},2024-02-{:02} {:02}:30:00,10.{}.{}.1,mobile,{},card,B{},{}\n",
            i,
            amount,
            locations[i % locations.len()],
            logins,
            1 + i % 28,
            i % 24,
            i % 200,
            i % 50,
            if fraud { "True" } else { "False" },
            i % 5,
            if fraud { 1 } else { 0 },
        ));
    }
    rows
}

/// Assertion helpers for pipeline output
pub trait OutputAssertions {
    fn assert_input_order(&self, ids: &[&str]);
    fn assert_valid_scores(&self);
}

impl OutputAssertions for PipelineOutput {
    fn assert_input_order(&self, ids: &[&str]) {
        let actual: Vec<&str> = self.results.iter().map(|r| r.record_id.as_str()).collect();
        assert_eq!(actual, ids, "Results are not in input order");
        for (i, result) in self.results.iter().enumerate() {
            assert_eq!(result.row, i);
        }
    }

    fn assert_valid_scores(&self) {
        for result in &self.results {
            assert!(
                (0.0..=1.0).contains(&result.probability),
                "Probability {} out of range for {}",
                result.probability,
                result.record_id
            );
            assert!(RiskBucket::ALL.contains(&result.risk_bucket));
            assert_eq!(result.predicted_label.is_fraud(), result.probability > 0.5);
        }
    }
}
