use friends_json_be::config::ServerConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    friends_json_be::start_server(ServerConfig::from_env()).await;
}
