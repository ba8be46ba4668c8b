use chrono::NaiveDate;

/// One meter reading submitted from the charging data-entry form.
///
/// `kw_value` stays a string: the form accepts whatever the operator types
/// and the reading is interpreted downstream. `date` is always the
/// submission day stamped by the server, never a client value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargingRecord {
    pub id: String,
    pub charging_station: String,
    pub kw_value: String,
    pub date: NaiveDate,
}

/// Fields of a new charging record; `id` and `date` are server-generated.
#[derive(Debug, Clone)]
pub struct NewChargingRecord {
    pub charging_station: String,
    pub kw_value: String,
    pub date: NaiveDate,
}
