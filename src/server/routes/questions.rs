use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_all_categories, questions},
        Question,
    },
    server::{
        app::AppState,
        deserializers::{default_page, deserialize_lenient_page},
        error::ApiError,
        pagination::paginate,
    },
};

use super::{categories::category_map, ApiResponse};

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default = "default_page", deserialize_with = "deserialize_lenient_page")]
    page: u32,
}

// one struct for both faces of POST /questions; a non-empty searchTerm
// switches the endpoint into search mode
#[derive(Deserialize)]
struct QuestionBody {
    question: Option<String>,
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    difficulty: Option<i64>,
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionListBody {
    success: bool,
    questions: Vec<Question>,
    categories: BTreeMap<i64, String>,
    total_questions: i64,
}

#[derive(Serialize)]
struct DeletedBody {
    success: bool,
    deleted: i64,
    questions: Vec<Question>,
    total_questions: i64,
}

#[derive(Serialize)]
struct CreatedBody {
    success: bool,
    created: i64,
    questions: Vec<Question>,
    question_created: String,
    total_questions: i64,
}

#[derive(Serialize)]
struct SearchBody {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
}

async fn retrieve_questions(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResponse<QuestionListBody> {
    let selection = questions::get_all_questions(&pool).await?;
    let current = paginate(&selection, page).to_vec();
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = get_all_categories(&pool).await?;
    let total_questions = questions::count_questions(&pool).await?;
    Ok(Json(QuestionListBody {
        success: true,
        questions: current,
        categories: category_map(categories),
        total_questions,
    }))
}

async fn remove_question(
    State(pool): State<SqlitePool>,
    Path(question_id): Path<String>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResponse<DeletedBody> {
    let question_id: i64 = question_id.parse().map_err(|_| ApiError::NotFound)?;

    // a missing id answers 422 here, not 404
    questions::get_question_by_id(&pool, question_id)
        .await
        .map_err(|_| ApiError::Unprocessable)?;
    questions::delete_question(&pool, question_id)
        .await
        .map_err(|_| ApiError::Unprocessable)?;

    let selection = questions::get_all_questions(&pool)
        .await
        .map_err(|_| ApiError::Unprocessable)?;
    let current = paginate(&selection, page).to_vec();
    let total_questions = questions::count_questions(&pool)
        .await
        .map_err(|_| ApiError::Unprocessable)?;
    Ok(Json(DeletedBody {
        success: true,
        deleted: question_id,
        questions: current,
        total_questions,
    }))
}

async fn create_or_search_question(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
    body: Result<Json<QuestionBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::BadRequest)?;

    if let Some(term) = body.search_term.filter(|term| !term.is_empty()) {
        let matches = questions::search_questions(&pool, &term)
            .await
            .map_err(|_| ApiError::Unprocessable)?;
        let total_questions = matches.len() as i64;
        return Ok(Json(SearchBody {
            success: true,
            questions: matches,
            total_questions,
        })
        .into_response());
    }

    let (Some(question), Some(answer), Some(category), Some(difficulty)) =
        (body.question, body.answer, body.category, body.difficulty)
    else {
        return Err(ApiError::Unprocessable);
    };

    let created = questions::create_question(
        &pool,
        &question,
        &answer,
        &category.to_string(),
        difficulty,
    )
    .await
    .map_err(|_| ApiError::Unprocessable)?;

    let selection = questions::get_all_questions(&pool)
        .await
        .map_err(|_| ApiError::Unprocessable)?;
    let current = paginate(&selection, page).to_vec();
    let total_questions = questions::count_questions(&pool)
        .await
        .map_err(|_| ApiError::Unprocessable)?;
    Ok(Json(CreatedBody {
        success: true,
        created,
        questions: current,
        question_created: question,
        total_questions,
    })
    .into_response())
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/questions",
            get(retrieve_questions).post(create_or_search_question),
        )
        .route("/questions/{question_id}", delete(remove_question))
        .with_state(state)
}
