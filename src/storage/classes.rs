use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{art_class, class_registration};
use crate::storage::new_id;

pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<art_class::Model>, DbErr> {
    art_class::Entity::find().all(conn).await
}

pub async fn get<C: ConnectionTrait>(conn: &C, id: &str) -> Result<Option<art_class::Model>, DbErr> {
    art_class::Entity::find_by_id(id).one(conn).await
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    mut model: art_class::ActiveModel,
) -> Result<art_class::Model, DbErr> {
    model.id = Set(new_id());
    model.insert(conn).await
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    model: art_class::ActiveModel,
) -> Result<art_class::Model, DbErr> {
    model.update(conn).await
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: &str) -> Result<u64, DbErr> {
    let result = art_class::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}

pub async fn list_registrations<C: ConnectionTrait>(
    conn: &C,
    class_id: Option<&str>,
) -> Result<Vec<class_registration::Model>, DbErr> {
    let mut finder = class_registration::Entity::find()
        .order_by_desc(class_registration::Column::RegisteredAt);

    if let Some(class_id) = class_id {
        finder = finder.filter(class_registration::Column::ClassId.eq(class_id));
    }

    finder.all(conn).await
}

/// Inserts the registration row, then bumps the parent's enrolled counter.
/// A missing parent class is tolerated: the registration is still created and
/// the counter update is skipped. There is no capacity guard, so concurrent
/// registrations can push `enrolled_count` past `max_students`.
pub async fn create_registration<C: ConnectionTrait>(
    conn: &C,
    mut model: class_registration::ActiveModel,
) -> Result<class_registration::Model, DbErr> {
    model.id = Set(new_id());
    model.registered_at = Set(Utc::now());
    let created = model.insert(conn).await?;

    if let Some(class) = art_class::Entity::find_by_id(&created.class_id).one(conn).await? {
        let enrolled = class.enrolled_count + 1;
        let mut class: art_class::ActiveModel = class.into();
        class.enrolled_count = Set(enrolled);
        class.update(conn).await?;
    }

    Ok(created)
}
