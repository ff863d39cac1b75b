use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{GenerateQuestionsRequest, ListQuestionsParams},
};

/// Generates and persists multiple-choice questions from document text. The
/// text is expected to be the already-extracted plain content of a document;
/// PDF extraction happens before this endpoint is called.
#[post("/api/questions/generate")]
async fn generate_questions(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .question_service
        .generate_questions(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/questions")]
async fn list_questions(
    state: web::Data<AppState>,
    params: web::Query<ListQuestionsParams>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .question_service
        .list_questions(params.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/questions/mine/{user_id}")]
async fn list_my_questions(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    params: web::Query<ListQuestionsParams>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .question_service
        .list_questions_by_user(&user_id, params.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/api/questions/{id}")]
async fn delete_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.question_service.delete_question(&id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "success" })))
}

#[get("/api/health")]
async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.db.health_check().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })))
}
