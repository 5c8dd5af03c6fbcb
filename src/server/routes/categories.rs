use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::{get_all_categories, get_category_ids},
            questions::get_questions_for_category,
        },
        Category, Question,
    },
    server::{app::AppState, error::ApiError},
};

use super::ApiResponse;

#[derive(Serialize)]
struct CategoriesBody {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionsBody {
    success: bool,
    questions: Vec<Question>,
    // the singular key is what the frontend reads on this endpoint
    total_question: i64,
    current_category: i64,
}

// the frontend expects an id -> label object, not a list; BTreeMap keeps
// the keys ordered and serializes them as strings
pub(super) fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

async fn retrieve_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesBody> {
    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoriesBody {
        success: true,
        categories: category_map(categories),
    }))
}

async fn retrieve_questions_by_category(
    State(pool): State<SqlitePool>,
    Path(category_id): Path<String>,
) -> ApiResponse<CategoryQuestionsBody> {
    // every failure on this endpoint answers 404
    let category_id: i64 = category_id.parse().map_err(|_| ApiError::NotFound)?;
    let ids = get_category_ids(&pool)
        .await
        .map_err(|_| ApiError::NotFound)?;
    if !ids.contains(&category_id) {
        return Err(ApiError::NotFound);
    }

    let questions = get_questions_for_category(&pool, &category_id.to_string())
        .await
        .map_err(|_| ApiError::NotFound)?;
    let total_question = questions.len() as i64;
    Ok(Json(CategoryQuestionsBody {
        success: true,
        questions,
        total_question,
        current_category: category_id,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(retrieve_categories))
        .route(
            "/categories/{category_id}/questions",
            get(retrieve_questions_by_category),
        )
        .with_state(state)
}
