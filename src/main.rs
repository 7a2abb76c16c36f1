use actix_web::{web, App, HttpServer};
use clap::Parser;
use std::sync::Arc;

mod routes;
mod store;

use routes::*;
use store::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 5000)]
    port: u16,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let store: Arc<dyn ScoreStore> = Arc::new(InMemoryStore::new());
    let store = web::Data::from(store);

    let http_server = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .service(get_score)
            .service(post_win)
            .default_service(web::route().to(fallback))
    });

    println!("Listening on port {}", args.port);
    http_server.bind(("127.0.0.1", args.port))?.run().await
}
