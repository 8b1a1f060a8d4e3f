//! Badge catalog factory.
//!
//! Inserts the same catalog the production migration seeds, so badge progress can be
//! tested against an in-memory schema built from entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Badge catalog: (code, name, target progress, points).
pub const CATALOG: &[(&str, &str, i32, i32)] = &[
    ("first_steps", "First Steps", 1, 10),
    ("scholar", "Scholar", 5, 50),
    ("quiz_enthusiast", "Quiz Enthusiast", 10, 20),
    ("perfectionist", "Perfectionist", 5, 40),
    ("daily_learner", "Daily Learner", 7, 30),
    ("commentator", "Commentator", 10, 15),
    ("helper", "Helper", 10, 15),
    ("top_ten", "Top Ten", 1, 50),
    ("explorer", "Explorer", 3, 25),
    ("speed_runner", "Speed Runner", 1, 20),
];

/// Inserts every badge in the catalog.
///
/// # Returns
/// - `Ok(Vec<badge::Model>)` - Inserted badges in catalog order
/// - `Err(DbErr)` - Database error during insertion
pub async fn seed_badges(db: &DatabaseConnection) -> Result<Vec<entity::badge::Model>, DbErr> {
    let mut badges = Vec::with_capacity(CATALOG.len());

    for (code, name, target, points) in CATALOG {
        let badge = entity::badge::ActiveModel {
            code: ActiveValue::Set((*code).to_string()),
            name: ActiveValue::Set((*name).to_string()),
            description: ActiveValue::Set(format!("{} badge", name)),
            target_progress: ActiveValue::Set(*target),
            points: ActiveValue::Set(*points),
            ..Default::default()
        }
        .insert(db)
        .await?;
        badges.push(badge);
    }

    Ok(badges)
}

/// Finds a seeded badge by code.
pub fn find<'b>(badges: &'b [entity::badge::Model], code: &str) -> Option<&'b entity::badge::Model> {
    badges.iter().find(|b| b.code == code)
}
