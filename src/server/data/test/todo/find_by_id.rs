use super::*;

/// Tests fetching an existing todo by id.
///
/// Expected: Ok(Model)
#[tokio::test]
async fn finds_existing_todo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_todo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let todo = factory::todo::TodoFactory::new(db)
        .title("Water plants")
        .priority("low")
        .build()
        .await?;

    let repo = SqlTodoRepository::new(db.clone());
    let found = repo.find_by_id(todo.id).await?;

    assert_eq!(found, todo);

    Ok(())
}

/// Tests fetching an id that was never assigned.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn returns_record_not_found_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_todo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SqlTodoRepository::new(db.clone());
    let result = repo.find_by_id(99999).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests fetching a soft-deleted todo.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn returns_record_not_found_for_soft_deleted_todo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_todo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = factory::todo::TodoFactory::new(db).deleted().build().await?;

    let repo = SqlTodoRepository::new(db.clone());
    let result = repo.find_by_id(deleted.id).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
