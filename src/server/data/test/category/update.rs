use super::*;

/// Tests renaming an existing category.
///
/// Expected: Ok(Some(Category)) with the new name
#[tokio::test]
async fn updates_existing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseCategory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(
            category.id,
            CategoryParams {
                name: "Renamed".to_string(),
                description: "New text".to_string(),
            },
        )
        .await?;

    let updated = updated.unwrap();
    assert_eq!(updated.id, category.id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, "New text");

    Ok(())
}

/// Tests updating a category that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseCategory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let result = repo
        .update(
            42,
            CategoryParams {
                name: "Ghost".to_string(),
                description: String::new(),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests clearing a category description on update.
///
/// Expected: Ok(Some(Category)) with the column set back to NULL
#[tokio::test]
async fn clears_blank_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseCategory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let repo = CategoryRepository::new(db);
    repo.update(
        category.id,
        CategoryParams {
            name: category.name.clone(),
            description: "Temporary".to_string(),
        },
    )
    .await?;

    let updated = repo
        .update(
            category.id,
            CategoryParams {
                name: category.name.clone(),
                description: String::new(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.description, "");
    let stored = entity::prelude::CourseCategory::find_by_id(category.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.description.is_none());

    Ok(())
}
