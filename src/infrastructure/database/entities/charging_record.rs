//! Charging record entity for database

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One submitted meter reading. `date` is the submission day stamped by
/// the server.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "charging_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub charging_station: String,
    pub kw_value: String,
    pub date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
