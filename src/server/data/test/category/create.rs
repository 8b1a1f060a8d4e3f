use super::*;

/// Tests creating a category with a description.
///
/// Expected: Ok(Category) with trimmed values stored
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseCategory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CategoryParams {
            name: "Backend".to_string(),
            description: "Servers and databases".to_string(),
        })
        .await?;

    assert_eq!(category.name, "Backend");
    assert_eq!(category.description, "Servers and databases");

    let stored = entity::prelude::CourseCategory::find_by_id(category.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.description.as_deref(), Some("Servers and databases"));

    Ok(())
}

/// Tests that a blank description is stored as NULL.
///
/// Expected: Ok(Category) with empty description, NULL column
#[tokio::test]
async fn stores_blank_description_as_null() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseCategory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CategoryParams {
            name: "Frontend".to_string(),
            description: String::new(),
        })
        .await?;

    let stored = entity::prelude::CourseCategory::find_by_id(category.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.description.is_none());
    assert_eq!(category.description, "");

    Ok(())
}

/// Tests that category names are unique.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseCategory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_category_named(db, "Data").await?;

    let repo = CategoryRepository::new(db);
    let result = repo
        .create(CategoryParams {
            name: "Data".to_string(),
            description: String::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
