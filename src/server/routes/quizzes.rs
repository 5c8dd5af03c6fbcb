use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::questions::{get_all_questions, get_questions_for_category},
        Question,
    },
    server::{app::AppState, error::ApiError},
    telemetry::QUIZ_QUESTION_CNTR,
};

use super::ApiResponse;

#[derive(Deserialize)]
struct QuizBody {
    previous_questions: Option<Vec<i64>>,
    quiz_category: Option<QuizCategory>,
}

#[derive(Deserialize)]
struct QuizCategory {
    // the frontend sends the id as a number or a numeric string
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Serialize)]
struct QuizDrawBody {
    success: bool,
    // null once every question in the considered set has been asked
    question: Option<Question>,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> ApiResponse<QuizDrawBody> {
    let Json(body) = body.map_err(|_| ApiError::BadRequest)?;
    let Some(quiz_category) = body.quiz_category else {
        return Err(ApiError::BadRequest);
    };

    // category id 0 means no filter
    let considered = if quiz_category.id == 0 {
        get_all_questions(&pool).await?
    } else {
        get_questions_for_category(&pool, &quiz_category.id.to_string()).await?
    };

    // deterministic draw: first question, by ascending id, not asked yet
    let question = match body.previous_questions {
        Some(previous) => considered
            .into_iter()
            .find(|question| !previous.contains(&question.id)),
        None => considered.into_iter().next(),
    };

    if let Some(question) = &question {
        QUIZ_QUESTION_CNTR
            .with_label_values(&[question.category.as_str()])
            .inc();
    }
    Ok(Json(QuizDrawBody {
        success: true,
        question,
    }))
}

pub fn quiz_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
