use super::*;

use chrono::{TimeZone, Utc};

fn params(title: &str) -> CreateTodoParams {
    CreateTodoParams {
        title: title.to_string(),
        description: String::new(),
        priority: "medium".to_string(),
        due_date: None,
    }
}

/// Tests creating a todo with only required values.
///
/// Verifies that the repository assigns an id and timestamps and that `completed`
/// falls back to the column default.
///
/// Expected: Ok(Model) with completed = false
#[tokio::test]
async fn creates_todo_with_column_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_todo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SqlTodoRepository::new(db.clone());
    let created = repo.create(params("Buy milk")).await?;

    assert!(created.id > 0);
    assert_eq!(created.title, "Buy milk");
    assert!(!created.completed);
    assert!(created.deleted_at.is_none());
    assert_eq!(created.created_at, created.updated_at);

    Ok(())
}

/// Tests that every supplied field is persisted verbatim.
///
/// Expected: stored row matches the parameters
#[tokio::test]
async fn persists_all_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_todo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let due = Utc.with_ymd_and_hms(2030, 1, 15, 9, 30, 0).unwrap();
    let repo = SqlTodoRepository::new(db.clone());
    let created = repo
        .create(CreateTodoParams {
            title: "File taxes".to_string(),
            description: "Before the deadline".to_string(),
            priority: "urgent".to_string(),
            due_date: Some(due),
        })
        .await?;

    let stored = entity::prelude::Todo::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();

    assert_eq!(stored.description, "Before the deadline");
    assert_eq!(stored.priority, "urgent");
    assert_eq!(stored.due_date, Some(due));

    Ok(())
}

/// Tests that consecutive creates receive distinct ids.
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_todo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SqlTodoRepository::new(db.clone());
    let first = repo.create(params("First")).await?;
    let second = repo.create(params("Second")).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
