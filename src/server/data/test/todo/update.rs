use super::*;

/// Tests that update overwrites every mutable column.
///
/// Expected: Ok(Model) and the stored row reflects all changes
#[tokio::test]
async fn overwrites_all_mutable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_todo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let todo = factory::todo::TodoFactory::new(db)
        .title("Old")
        .description("old description")
        .build()
        .await?;

    let repo = SqlTodoRepository::new(db.clone());
    let updated = repo
        .update(entity::todo::Model {
            title: "New".to_string(),
            description: String::new(),
            completed: true,
            priority: "high".to_string(),
            ..todo.clone()
        })
        .await?;

    assert!(updated.updated_at >= todo.updated_at);

    let stored = repo.find_by_id(todo.id).await?;
    assert_eq!(stored.title, "New");
    assert_eq!(stored.description, "");
    assert!(stored.completed);
    assert_eq!(stored.priority, "high");
    assert_eq!(stored.created_at, todo.created_at);

    Ok(())
}

/// Tests that the returned model is the row as stored.
///
/// Expected: Ok(Model) equal to a fresh read of the same id
#[tokio::test]
async fn returns_stored_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_todo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let todo = factory::create_todo(db).await?;

    let repo = SqlTodoRepository::new(db.clone());
    let updated = repo
        .update(entity::todo::Model {
            completed: true,
            ..todo
        })
        .await?;

    let stored = repo.find_by_id(updated.id).await?;
    assert_eq!(updated, stored);

    Ok(())
}

/// Tests updating a todo that does not exist.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_missing_todo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_todo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let todo = factory::create_todo(db).await?;

    let repo = SqlTodoRepository::new(db.clone());
    let result = repo
        .update(entity::todo::Model {
            id: todo.id + 1000,
            ..todo
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}

/// Tests that a soft-deleted row is never written to.
///
/// Expected: Err(DbErr::RecordNotUpdated) and the row keeps its original title
#[tokio::test]
async fn does_not_touch_soft_deleted_todo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_todo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = factory::todo::TodoFactory::new(db)
        .title("Gone")
        .deleted()
        .build()
        .await?;

    let repo = SqlTodoRepository::new(db.clone());
    let result = repo
        .update(entity::todo::Model {
            title: "Resurrected".to_string(),
            ..deleted.clone()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    let stored = entity::prelude::Todo::find_by_id(deleted.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.title, "Gone");

    Ok(())
}
