use actix_web::{middleware::Logger, web, App, HttpServer};

use quizcraft_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    if config.is_production() {
        config.validate_for_production();
    }
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .expect("failed to initialize application state");

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .service(handlers::generate_questions)
            .service(handlers::list_questions)
            .service(handlers::list_my_questions)
            .service(handlers::delete_question)
            .service(handlers::health_check)
    })
    .bind((host, port))?
    .run()
    .await
}
