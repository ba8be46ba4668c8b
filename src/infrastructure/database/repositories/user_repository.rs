use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use crate::domain::{DomainResult, NewUser, User, UserRepository};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn insert(&self, new: NewUser) -> DomainResult<()> {
        let model = user::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(new.name),
            email: Set(new.email),
            password_hash: Set(new.password_hash),
        };
        model.insert(&self.db).await?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let row = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(row.map(user_model_to_domain))
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(user::Entity::find().count(&self.db).await?)
    }
}
