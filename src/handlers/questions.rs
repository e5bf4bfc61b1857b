use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    db::models::Question,
    models::{CurrentCategory, QuestionPayload},
    names,
    rejections::{AppError, ResultExt},
    utils, AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            names::QUESTIONS_URL,
            get(list_questions).post(create_or_search),
        )
        .route("/questions/{question_id}", delete(delete_question))
        .route(
            "/categories/{category_id}/questions",
            get(questions_by_category),
        )
}

#[derive(Deserialize, Default)]
struct PageQuery {
    #[serde(default, deserialize_with = "lenient_page")]
    page: Option<usize>,
}

impl PageQuery {
    /// 1-based page number; absent or unparseable values mean page 1.
    fn page(&self) -> usize {
        self.page.unwrap_or(1)
    }
}

fn lenient_page<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(raw.parse().ok())
}

#[derive(Serialize)]
struct QuestionListResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    current_category: CurrentCategory,
    categories: Vec<String>,
}

#[derive(Serialize)]
struct SearchResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
}

#[derive(Serialize)]
struct CreateResponse {
    success: bool,
    created: String,
    questions: Vec<Question>,
    total_questions: i64,
}

#[derive(Serialize)]
struct DeleteResponse {
    success: bool,
    deleted: i64,
    questions: Vec<Question>,
    total_questions: i64,
}

async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionListResponse>, AppError> {
    let questions = state
        .db
        .all_questions()
        .await
        .reject("failed to list questions")?;
    let categories = state
        .db
        .category_names()
        .await
        .reject("failed to list categories")?;

    let total_questions = questions.len() as i64;
    let page = utils::paginate(&questions, query.page(), state.questions_per_page).to_vec();

    Ok(Json(QuestionListResponse {
        success: true,
        questions: page,
        total_questions,
        current_category: CurrentCategory::All,
        categories,
    }))
}

async fn create_or_search(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    body: Result<Json<QuestionPayload>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = body.map_err(|_| AppError::Unprocessable("invalid request body"))?;

    if let Some(term) = payload.search_term {
        return search_questions(&state, &term, query.page()).await;
    }

    create_question(&state, payload, query.page()).await
}

async fn search_questions(state: &AppState, term: &str, page: usize) -> Result<Response, AppError> {
    let matches = state
        .db
        .search_questions(term)
        .await
        .reject("failed to search questions")?;

    let total_questions = matches.len() as i64;
    let questions = utils::paginate(&matches, page, state.questions_per_page).to_vec();

    Ok(Json(SearchResponse {
        success: true,
        questions,
        total_questions,
    })
    .into_response())
}

async fn create_question(
    state: &AppState,
    payload: QuestionPayload,
    page: usize,
) -> Result<Response, AppError> {
    let question = payload
        .question
        .ok_or(AppError::Unprocessable("missing question field"))?;
    let answer = payload
        .answer
        .ok_or(AppError::Unprocessable("missing answer field"))?;
    let category = payload
        .category
        .ok_or(AppError::Unprocessable("missing category field"))?;
    let difficulty = payload
        .difficulty
        .ok_or(AppError::Unprocessable("missing difficulty field"))?;

    state
        .db
        .insert_question(&question, &answer, category, difficulty)
        .await
        .reject("failed to insert question")?;

    let questions = state
        .db
        .all_questions()
        .await
        .reject("failed to list questions")?;
    let total_questions = state
        .db
        .questions_count()
        .await
        .reject("failed to count questions")?;
    let current = utils::paginate(&questions, page, state.questions_per_page).to_vec();

    Ok(Json(CreateResponse {
        success: true,
        created: question,
        questions: current,
        total_questions,
    })
    .into_response())
}

async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state
        .db
        .delete_question(question_id)
        .await
        .reject("failed to delete question")?;

    if !deleted {
        return Err(AppError::NotFound("question not found"));
    }

    let questions = state
        .db
        .all_questions()
        .await
        .reject("failed to list questions")?;
    let total_questions = state
        .db
        .questions_count()
        .await
        .reject("failed to count questions")?;
    let page = utils::paginate(&questions, query.page(), state.questions_per_page).to_vec();

    Ok(Json(DeleteResponse {
        success: true,
        deleted: question_id,
        questions: page,
        total_questions,
    }))
}

async fn questions_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionListResponse>, AppError> {
    // Category id 0 is the "no filter" sentinel
    let (questions, current_category) = if category_id == names::ALL_CATEGORIES_ID {
        let all = state
            .db
            .all_questions()
            .await
            .reject("failed to list questions")?;
        (all, CurrentCategory::All)
    } else {
        let filtered = state
            .db
            .questions_by_category(category_id)
            .await
            .reject("failed to list questions")?;
        (filtered, CurrentCategory::Id(category_id))
    };

    let categories = state
        .db
        .category_names()
        .await
        .reject("failed to list categories")?;

    let total_questions = questions.len() as i64;
    let page = utils::paginate(&questions, query.page(), state.questions_per_page).to_vec();

    Ok(Json(QuestionListResponse {
        success: true,
        questions: page,
        total_questions,
        current_category,
        categories,
    }))
}
