use super::*;

/// Tests adding a question without a correct option.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_question_without_answer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let course = factory::create_course(db, instructor.id).await?;
    let bank = factory::quiz::create_quiz_bank(db, course.id).await?;

    let result = QuizService::new(db)
        .add_question(
            &as_user(&instructor),
            CreateQuestionParams {
                quiz_bank_id: bank.id,
                text: "Pick one".to_string(),
                explanation: None,
                options: vec![
                    NewOption { text: "a".to_string(), is_correct: false },
                    NewOption { text: "b".to_string(), is_correct: false },
                ],
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests adding a valid question.
///
/// Expected: question listed in the bank with both options
#[tokio::test]
async fn adds_question() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let course = factory::create_course(db, instructor.id).await?;
    let bank = factory::quiz::create_quiz_bank(db, course.id).await?;
    let user = as_user(&instructor);

    let service = QuizService::new(db);
    service
        .add_question(
            &user,
            CreateQuestionParams {
                quiz_bank_id: bank.id,
                text: "Which keyword moves ownership into a closure?".to_string(),
                explanation: Some("`move` captures by value".to_string()),
                options: vec![
                    NewOption { text: "move".to_string(), is_correct: true },
                    NewOption { text: "ref".to_string(), is_correct: false },
                ],
            },
        )
        .await?;

    let questions = service.list_questions(&user, bank.id).await?;
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].options.len(), 2);

    Ok(())
}
