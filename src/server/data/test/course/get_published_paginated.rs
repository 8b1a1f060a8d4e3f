use super::*;

fn filter(page: u64, per_page: u64) -> CourseFilter {
    CourseFilter {
        page,
        per_page,
        ..Default::default()
    }
}

/// Tests that drafts are excluded from the public catalog.
///
/// Expected: Ok with only the published course and a total of 1
#[tokio::test]
async fn excludes_drafts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    factory::create_course(db, instructor.id).await?;
    let published = factory::course::CourseFactory::new(db, instructor.id)
        .published()
        .build()
        .await?;

    let repo = CourseRepository::new(db);
    let (courses, total) = repo.get_published_paginated(&filter(0, 10)).await?;

    assert_eq!(total, 1);
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].course.id, published.id);

    Ok(())
}

/// Tests paging through published courses.
///
/// Expected: Ok with 2 courses on the first page, 1 on the second, total 3
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    for _ in 0..3 {
        factory::course::CourseFactory::new(db, instructor.id)
            .published()
            .build()
            .await?;
    }

    let repo = CourseRepository::new(db);
    let (first, total) = repo.get_published_paginated(&filter(0, 2)).await?;
    let (second, _) = repo.get_published_paginated(&filter(1, 2)).await?;

    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);

    Ok(())
}

/// Tests filtering by category and title search.
///
/// Verifies the search is case-insensitive and combines with the category filter.
///
/// Expected: Ok with only the matching course
#[tokio::test]
async fn filters_by_category_and_search() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let backend = factory::category::create_category(db).await?;
    let frontend = factory::category::create_category(db).await?;

    let matching = factory::course::CourseFactory::new(db, instructor.id)
        .title("Async Rust in practice")
        .category_id(Some(backend.id))
        .published()
        .build()
        .await?;
    factory::course::CourseFactory::new(db, instructor.id)
        .title("Rust for the browser")
        .category_id(Some(frontend.id))
        .published()
        .build()
        .await?;
    factory::course::CourseFactory::new(db, instructor.id)
        .title("Databases")
        .category_id(Some(backend.id))
        .published()
        .build()
        .await?;

    let repo = CourseRepository::new(db);
    let (courses, total) = repo
        .get_published_paginated(&CourseFilter {
            category_id: Some(backend.id),
            search: Some("rust".to_string()),
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(courses[0].course.id, matching.id);

    Ok(())
}

/// Tests requesting the largest possible page number.
///
/// Expected: Ok with no courses and the full total
#[tokio::test]
async fn huge_page_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    factory::course::CourseFactory::new(db, instructor.id)
        .published()
        .build()
        .await?;

    let (courses, total) = CourseRepository::new(db)
        .get_published_paginated(&filter(u64::MAX, 100))
        .await?;

    assert_eq!(total, 1);
    assert!(courses.is_empty());

    Ok(())
}
