use super::*;

/// Tests soft-deleting a live todo.
///
/// Verifies that the row remains in the table with a deletion marker.
///
/// Expected: Ok(()) and deleted_at is set
#[tokio::test]
async fn marks_todo_as_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_todo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let todo = factory::create_todo(db).await?;

    let repo = SqlTodoRepository::new(db.clone());
    repo.delete(todo.id).await?;

    let stored = entity::prelude::Todo::find_by_id(todo.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.deleted_at.is_some());

    assert!(matches!(
        repo.find_by_id(todo.id).await,
        Err(DbErr::RecordNotFound(_))
    ));

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn returns_record_not_found_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_todo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SqlTodoRepository::new(db.clone());
    let result = repo.delete(99999).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests that deleting twice reports not found on the second call.
///
/// Expected: Ok(()) then Err(DbErr::RecordNotFound)
#[tokio::test]
async fn second_delete_returns_record_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_todo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let todo = factory::create_todo(db).await?;

    let repo = SqlTodoRepository::new(db.clone());
    repo.delete(todo.id).await?;
    let second = repo.delete(todo.id).await;

    assert!(matches!(second, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests that deletion only affects the targeted row.
#[tokio::test]
async fn leaves_other_todos_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_todo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_todo(db).await?;
    let other = factory::create_todo(db).await?;

    let repo = SqlTodoRepository::new(db.clone());
    repo.delete(target.id).await?;

    let remaining = repo.find_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, other.id);

    Ok(())
}
