use sea_orm_migration::prelude::*;

use super::m20251006_000020_create_badge_tables::Badge;

/// Badge catalog: (code, name, description, target progress, points).
const BADGES: &[(&str, &str, &str, i32, i32)] = &[
    ("first_steps", "First Steps", "Complete your first course", 1, 10),
    ("scholar", "Scholar", "Complete five courses", 5, 50),
    ("quiz_enthusiast", "Quiz Enthusiast", "Complete ten quizzes", 10, 20),
    (
        "perfectionist",
        "Perfectionist",
        "Score full marks on five quizzes in a row",
        5,
        40,
    ),
    (
        "daily_learner",
        "Daily Learner",
        "Learn something seven days in a row",
        7,
        30,
    ),
    ("commentator", "Commentator", "Post ten forum comments", 10, 15),
    ("helper", "Helper", "Reply to ten forum comments", 10, 15),
    ("top_ten", "Top Ten", "Reach the top ten of the leaderboard", 1, 50),
    (
        "explorer",
        "Explorer",
        "Complete courses in three different categories",
        3,
        25,
    ),
    (
        "speed_runner",
        "Speed Runner",
        "Complete a course within seven days of enrolling",
        1,
        20,
    ),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Badge::Table).columns([
            Badge::Code,
            Badge::Name,
            Badge::Description,
            Badge::TargetProgress,
            Badge::Points,
        ]);

        for (code, name, description, target, points) in BADGES {
            insert
                .values([
                    (*code).into(),
                    (*name).into(),
                    (*description).into(),
                    (*target).into(),
                    (*points).into(),
                ])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Badge::Table)
            .and_where(Expr::col(Badge::Code).is_in(BADGES.iter().map(|b| b.0)))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
