use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set};

use crate::entities::user::{self, Role};
use crate::storage::new_id;

pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: &str) -> Result<Option<user::Model>, DbErr> {
    user::Entity::find_by_id(id).one(conn).await
}

pub async fn find_by_username<C: ConnectionTrait>(
    conn: &C,
    username: &str,
) -> Result<Option<user::Model>, DbErr> {
    user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .one(conn)
        .await
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    username: String,
    password_hash: String,
    role: Role,
) -> Result<user::Model, DbErr> {
    let model = user::ActiveModel {
        id: Set(new_id()),
        username: Set(username),
        password: Set(password_hash),
        role: Set(role),
    };
    model.insert(conn).await
}
