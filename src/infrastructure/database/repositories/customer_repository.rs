use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{Customer, CustomerRepository, DomainResult};
use crate::infrastructure::database::entities::customer;

pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn customer_model_to_domain(model: customer::Model) -> Customer {
    Customer {
        id: model.id,
        name: model.name,
        email: model.email,
    }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn insert(&self, new: Customer) -> DomainResult<()> {
        let model = customer::ActiveModel {
            id: Set(new.id),
            name: Set(new.name),
            email: Set(new.email),
        };
        model.insert(&self.db).await?;
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<Customer>> {
        let rows = customer::Entity::find()
            .order_by_asc(customer::Column::Name)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(customer_model_to_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_support::connect_test_db;

    #[tokio::test]
    async fn lists_customers_sorted_by_name() {
        let db = connect_test_db().await;
        let repo = SeaOrmCustomerRepository::new(db);

        for (id, name) in [("c2", "Zeta"), ("c1", "Acme")] {
            repo.insert(Customer {
                id: id.into(),
                name: name.into(),
                email: format!("{id}@example.com"),
            })
            .await
            .unwrap();
        }

        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Acme", "Zeta"]);
    }
}
