use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{workshop, workshop_booking};
use crate::storage::new_id;

pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<workshop::Model>, DbErr> {
    workshop::Entity::find()
        .order_by_desc(workshop::Column::Date)
        .all(conn)
        .await
}

pub async fn get<C: ConnectionTrait>(conn: &C, id: &str) -> Result<Option<workshop::Model>, DbErr> {
    workshop::Entity::find_by_id(id).one(conn).await
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    mut model: workshop::ActiveModel,
) -> Result<workshop::Model, DbErr> {
    model.id = Set(new_id());
    model.insert(conn).await
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    model: workshop::ActiveModel,
) -> Result<workshop::Model, DbErr> {
    model.update(conn).await
}

pub async fn delete<C: ConnectionTrait>(conn: &C, id: &str) -> Result<u64, DbErr> {
    let result = workshop::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}

/// Bulk clear of the workshop list. Booking rows are left in place; they
/// carry their own copy of the contact details and survive their parent.
pub async fn delete_all<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
    let result = workshop::Entity::delete_many().exec(conn).await?;
    Ok(result.rows_affected)
}

pub async fn list_bookings<C: ConnectionTrait>(
    conn: &C,
    workshop_id: Option<&str>,
) -> Result<Vec<workshop_booking::Model>, DbErr> {
    let mut finder =
        workshop_booking::Entity::find().order_by_desc(workshop_booking::Column::BookedAt);

    if let Some(workshop_id) = workshop_id {
        finder = finder.filter(workshop_booking::Column::WorkshopId.eq(workshop_id));
    }

    finder.all(conn).await
}

/// Inserts the booking row, then bumps the parent's seat counter by the
/// requested seat count. Mirrors `classes::create_registration`: missing
/// parent is a counter no-op, and capacity is not re-checked server side.
pub async fn create_booking<C: ConnectionTrait>(
    conn: &C,
    mut model: workshop_booking::ActiveModel,
) -> Result<workshop_booking::Model, DbErr> {
    model.id = Set(new_id());
    model.booked_at = Set(Utc::now());
    let created = model.insert(conn).await?;

    if let Some(parent) = workshop::Entity::find_by_id(&created.workshop_id).one(conn).await? {
        let booked = parent.booked_seats + created.number_of_seats;
        let mut parent: workshop::ActiveModel = parent.into();
        parent.booked_seats = Set(booked);
        parent.update(conn).await?;
    }

    Ok(created)
}
