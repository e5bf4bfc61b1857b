mod common;

use common::create_test_db;
use trivia_api::db::Db;

async fn seed_question(db: &Db, question: &str, category: i64) -> i64 {
    db.insert_question(question, "an answer", category, 1)
        .await
        .expect("seed insert should succeed")
}

#[tokio::test]
async fn test_db_connection() {
    let db = create_test_db().await;
    assert!(db.migration_applied("V1").await.unwrap());
    assert!(db.migration_applied("V2").await.unwrap());
}

#[tokio::test]
async fn test_categories_seeded_in_id_order() {
    let db = create_test_db().await;

    let names = db.category_names().await.unwrap();
    assert_eq!(
        names,
        ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
    );

    // Stable across repeated calls with no intervening writes
    assert_eq!(db.category_names().await.unwrap(), names);
}

#[tokio::test]
async fn test_question_insert_and_count() {
    let db = create_test_db().await;

    assert_eq!(db.questions_count().await.unwrap(), 0);

    let id = db
        .insert_question("What is 1+1?", "2", 1, 2)
        .await
        .unwrap();
    assert!(id > 0);
    assert_eq!(db.questions_count().await.unwrap(), 1);

    let questions = db.all_questions().await.unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].id, id);
    assert_eq!(questions[0].question, "What is 1+1?");
    assert_eq!(questions[0].answer, "2");
    assert_eq!(questions[0].category, 1);
    assert_eq!(questions[0].difficulty, 2);
}

#[tokio::test]
async fn test_all_questions_ordered_by_id() {
    let db = create_test_db().await;

    for i in 0..5 {
        seed_question(&db, &format!("Question {}", i + 1), 1).await;
    }

    let ids: Vec<i64> = db
        .all_questions()
        .await
        .unwrap()
        .iter()
        .map(|q| q.id)
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert_eq!(ids.len(), 5);
}

#[tokio::test]
async fn test_delete_question() {
    let db = create_test_db().await;

    let id = seed_question(&db, "Q1", 1).await;
    seed_question(&db, "Q2", 1).await;

    assert!(db.delete_question(id).await.unwrap());
    assert_eq!(db.questions_count().await.unwrap(), 1);

    // Second delete of the same id observes not-found
    assert!(!db.delete_question(id).await.unwrap());
    assert_eq!(db.questions_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let db = create_test_db().await;

    seed_question(&db, "What is the Title?", 1).await;
    seed_question(&db, "Capital of France", 3).await;

    let matches = db.search_questions("title").await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].question, "What is the Title?");

    let matches = db.search_questions("TITLE").await.unwrap();
    assert_eq!(matches.len(), 1);
}

#[tokio::test]
async fn test_search_matches_substring_anywhere() {
    let db = create_test_db().await;

    seed_question(&db, "Capital of France", 3).await;

    assert_eq!(db.search_questions("apit").await.unwrap().len(), 1);
    assert_eq!(db.search_questions("France").await.unwrap().len(), 1);
    assert!(db.search_questions("Germany").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_questions_by_category_filters() {
    let db = create_test_db().await;

    seed_question(&db, "Science Q", 1).await;
    seed_question(&db, "Art Q", 2).await;
    seed_question(&db, "Another Science Q", 1).await;

    let science = db.questions_by_category(1).await.unwrap();
    assert_eq!(science.len(), 2);
    assert!(science.iter().all(|q| q.category == 1));

    assert!(db.questions_by_category(4).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_category_id_accepted() {
    // Question.category references Category.id by value only; a dangling
    // reference is not rejected at this layer.
    let db = create_test_db().await;

    let id = seed_question(&db, "Orphaned question", 99).await;
    assert!(id > 0);

    let questions = db.questions_by_category(99).await.unwrap();
    assert_eq!(questions.len(), 1);
}
