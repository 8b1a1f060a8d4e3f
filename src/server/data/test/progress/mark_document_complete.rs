use super::*;

/// Tests marking a document complete for the first time.
///
/// Expected: Ok(true) and the document listed as completed
#[tokio::test]
async fn marks_new_completion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, documents) = factory::helpers::create_course_with_documents(db, 2).await?;
    let user = factory::create_user(db).await?;

    let repo = ProgressRepository::new(db);
    let newly = repo.mark_document_complete(user.id, documents[0].id).await?;

    assert!(newly);
    let completed = repo
        .get_completed_documents(user.id, documents.iter().map(|d| d.id).collect())
        .await?;
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].document_id, documents[0].id);

    Ok(())
}

/// Tests that marking the same document twice is idempotent.
///
/// Expected: Ok(false) on the second call, completion time unchanged
#[tokio::test]
async fn repeated_completion_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, documents) = factory::helpers::create_course_with_documents(db, 1).await?;
    let user = factory::create_user(db).await?;

    let repo = ProgressRepository::new(db);
    repo.mark_document_complete(user.id, documents[0].id).await?;
    let first = repo.get_all_document_progress(user.id).await?;

    let again = repo.mark_document_complete(user.id, documents[0].id).await?;
    let second = repo.get_all_document_progress(user.id).await?;

    assert!(!again);
    assert_eq!(second.len(), 1);
    assert_eq!(first[0].completed_at, second[0].completed_at);

    Ok(())
}

/// Tests that progress is tracked per user.
///
/// Expected: another learner sees no completed documents
#[tokio::test]
async fn progress_is_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, documents) = factory::helpers::create_course_with_documents(db, 1).await?;
    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    let repo = ProgressRepository::new(db);
    repo.mark_document_complete(alice.id, documents[0].id).await?;

    let bob_progress = repo
        .get_completed_documents(bob.id, vec![documents[0].id])
        .await?;
    assert!(bob_progress.is_empty());

    Ok(())
}
