use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set};

use crate::domain::{
    DomainError, DomainResult, Invoice, InvoiceChanges, InvoiceRepository, InvoiceStatus,
    NewInvoice,
};
use crate::infrastructure::database::entities::invoice;

pub struct SeaOrmInvoiceRepository {
    db: DatabaseConnection,
}

impl SeaOrmInvoiceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_status_to_domain(status: invoice::InvoiceStatus) -> InvoiceStatus {
    match status {
        invoice::InvoiceStatus::Pending => InvoiceStatus::Pending,
        invoice::InvoiceStatus::Paid => InvoiceStatus::Paid,
    }
}

fn domain_status_to_entity(status: InvoiceStatus) -> invoice::InvoiceStatus {
    match status {
        InvoiceStatus::Pending => invoice::InvoiceStatus::Pending,
        InvoiceStatus::Paid => invoice::InvoiceStatus::Paid,
    }
}

fn invoice_model_to_domain(model: invoice::Model) -> Invoice {
    Invoice {
        id: model.id,
        customer_id: model.customer_id,
        amount: model.amount,
        status: entity_status_to_domain(model.status),
        date: model.date,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl InvoiceRepository for SeaOrmInvoiceRepository {
    async fn insert(&self, new: NewInvoice) -> DomainResult<()> {
        let model = invoice::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            customer_id: Set(new.customer_id),
            amount: Set(new.amount),
            status: Set(domain_status_to_entity(new.status)),
            date: Set(new.date),
        };
        model.insert(&self.db).await?;
        Ok(())
    }

    async fn update(&self, id: &str, changes: InvoiceChanges) -> DomainResult<()> {
        // Single UPDATE; id and date never appear in the SET clause.
        invoice::Entity::update_many()
            .col_expr(
                invoice::Column::CustomerId,
                Expr::value(changes.customer_id),
            )
            .col_expr(invoice::Column::Amount, Expr::value(changes.amount))
            .col_expr(
                invoice::Column::Status,
                Expr::value(domain_status_to_entity(changes.status)),
            )
            .filter(invoice::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let result = invoice::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "invoice",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<Invoice>> {
        let rows = invoice::Entity::find()
            .order_by_desc(invoice::Column::Date)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(invoice_model_to_domain).collect())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Invoice>> {
        let row = invoice::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(invoice_model_to_domain))
    }
}
