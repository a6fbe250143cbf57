use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, Set,
};

use crate::entities::product_like;
use crate::storage::new_id;

pub async fn count<C: ConnectionTrait>(conn: &C, product_id: &str) -> Result<u64, DbErr> {
    product_like::Entity::find()
        .filter(product_like::Column::ProductId.eq(product_id))
        .count(conn)
        .await
}

pub async fn find<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
    product_id: &str,
) -> Result<Option<product_like::Model>, DbErr> {
    product_like::Entity::find()
        .filter(product_like::Column::UserId.eq(user_id))
        .filter(product_like::Column::ProductId.eq(product_id))
        .one(conn)
        .await
}

/// Idempotent: a second like from the same user returns the existing row.
pub async fn create<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
    product_id: &str,
) -> Result<(product_like::Model, bool), DbErr> {
    if let Some(existing) = find(conn, user_id, product_id).await? {
        return Ok((existing, false));
    }

    let model = product_like::ActiveModel {
        id: Set(new_id()),
        user_id: Set(user_id.to_owned()),
        product_id: Set(product_id.to_owned()),
        created_at: Set(Utc::now()),
    };
    Ok((model.insert(conn).await?, true))
}

pub async fn delete<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
    product_id: &str,
) -> Result<bool, DbErr> {
    match find(conn, user_id, product_id).await? {
        Some(like) => {
            like.delete(conn).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}
