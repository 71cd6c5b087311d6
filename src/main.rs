use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};
use pet_records::{
    api::state::AppState,
    infrastructure::database::mongo_context::MongoContext,
    routes::{api_routes, json_config},
    utils::config::AppConfig,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::global();

    let mongo_context = match MongoContext::init(&config.database_url, &config.database_name).await
    {
        Ok(context) => {
            println!("✅ Connected to MongoDB database: {}", config.database_name);
            context
        }
        Err(e) => {
            log::error!("Failed to connect to MongoDB: {}", e);
            std::process::exit(1);
        }
    };

    println!("🚀 Server running at http://localhost:{}", config.port);

    let mongo_data = web::Data::new(mongo_context);
    let app_state = AppState { db: mongo_data };

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(json_config())
            .wrap(middleware::Logger::default())
            .configure(api_routes)
            .service(Files::new("/", "./public").index_file("index.html"))
    })
    .bind(("127.0.0.1", config.port))?
    .run()
    .await
}
