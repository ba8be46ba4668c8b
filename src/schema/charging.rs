//! Charging-record form schema
//!
//! The wire field names come from the data-entry form: `chargingStation`
//! and `kWValue` (note the casing; internally the reading is `kw_value`).
//! The reading is kept as a lenient string, no numeric range check.

use crate::domain::FieldErrors;

use super::{FieldBag, SchemaReport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargingRecordInput {
    pub charging_station: String,
    pub kw_value: String,
}

pub fn parse_charging_record(bag: &FieldBag) -> Result<ChargingRecordInput, FieldErrors> {
    let mut report = SchemaReport::new();

    let charging_station = match bag.get_non_empty("chargingStation") {
        Some(v) => v.to_string(),
        None => {
            report.push("chargingStation", "Please select a charging station.");
            String::new()
        }
    };

    let kw_value = match bag.get_non_empty("kWValue") {
        Some(v) => v.to_string(),
        None => {
            report.push("kWValue", "Please enter a kW value.");
            String::new()
        }
    };

    report.into_result(ChargingRecordInput {
        charging_station,
        kw_value,
    })
}
