//! Badge data repository.
//!
//! The badge catalog is seeded by migration; this repository only reads it. Per-user
//! unlock and claim state lives in `user_badge`, one row per unlocked badge.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::badge::Badge;

pub struct BadgeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BadgeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the catalog ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Badge>, DbErr> {
        let entities = entity::prelude::Badge::find()
            .order_by_asc(entity::badge::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Badge::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Badge>, DbErr> {
        let entity = entity::prelude::Badge::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Badge::from_entity))
    }

    pub async fn get_user_badges(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::user_badge::Model>, DbErr> {
        entity::prelude::UserBadge::find()
            .filter(entity::user_badge::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    pub async fn find_user_badge(
        &self,
        user_id: i32,
        badge_id: i32,
    ) -> Result<Option<entity::user_badge::Model>, DbErr> {
        entity::prelude::UserBadge::find_by_id((user_id, badge_id))
            .one(self.db)
            .await
    }

    /// Records an unlock unless the user already holds the badge.
    ///
    /// A concurrent evaluation may record the same unlock first; the conflict on the
    /// (user, badge) key is ignored and the stored row is returned instead.
    ///
    /// # Returns
    /// - `Ok((user_badge, true))` - Row inserted by this call
    /// - `Ok((user_badge, false))` - Row already existed
    /// - `Err(DbErr)` - Database error during insert or lookup
    pub async fn unlock(
        &self,
        user_id: i32,
        badge_id: i32,
        unlocked_at: DateTime<Utc>,
    ) -> Result<(entity::user_badge::Model, bool), DbErr> {
        let inserted = entity::prelude::UserBadge::insert(entity::user_badge::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            badge_id: ActiveValue::Set(badge_id),
            unlocked_at: ActiveValue::Set(unlocked_at),
            claimed_at: ActiveValue::Set(None),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_badge::Column::UserId,
                entity::user_badge::Column::BadgeId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        let user_badge = self
            .find_user_badge(user_id, badge_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User badge not found".to_string()))?;

        Ok((user_badge, inserted > 0))
    }

    pub async fn claim(
        &self,
        user_id: i32,
        badge_id: i32,
        claimed_at: DateTime<Utc>,
    ) -> Result<entity::user_badge::Model, DbErr> {
        entity::user_badge::ActiveModel {
            user_id: ActiveValue::Unchanged(user_id),
            badge_id: ActiveValue::Unchanged(badge_id),
            claimed_at: ActiveValue::Set(Some(claimed_at)),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Gets every claimed badge row across all users.
    pub async fn get_all_claimed(&self) -> Result<Vec<entity::user_badge::Model>, DbErr> {
        entity::prelude::UserBadge::find()
            .filter(entity::user_badge::Column::ClaimedAt.is_not_null())
            .all(self.db)
            .await
    }
}
