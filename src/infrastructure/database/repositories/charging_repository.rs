use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{ChargingRecord, ChargingRecordRepository, DomainResult, NewChargingRecord};
use crate::infrastructure::database::entities::charging_record;

pub struct SeaOrmChargingRecordRepository {
    db: DatabaseConnection,
}

impl SeaOrmChargingRecordRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn record_model_to_domain(model: charging_record::Model) -> ChargingRecord {
    ChargingRecord {
        id: model.id,
        charging_station: model.charging_station,
        kw_value: model.kw_value,
        date: model.date,
    }
}

#[async_trait]
impl ChargingRecordRepository for SeaOrmChargingRecordRepository {
    async fn insert(&self, new: NewChargingRecord) -> DomainResult<()> {
        let model = charging_record::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            charging_station: Set(new.charging_station),
            kw_value: Set(new.kw_value),
            date: Set(new.date),
        };
        model.insert(&self.db).await?;
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<ChargingRecord>> {
        let rows = charging_record::Entity::find()
            .order_by_desc(charging_record::Column::Date)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(record_model_to_domain).collect())
    }
}
