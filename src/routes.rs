use crate::store::ScoreStore;
use actix_web::{get, post, web, HttpResponse, Responder};

#[get("/players/{name:.*}")]
pub async fn get_score(
    path: web::Path<String>,
    store: web::Data<dyn ScoreStore>,
) -> impl Responder {
    let name = path.into_inner();
    println!("GET {}", name);
    let score = store.player_score(&name);
    if score == 0 {
        HttpResponse::NotFound().body(score.to_string())
    } else {
        HttpResponse::Ok().body(score.to_string())
    }
}

#[post("/players/{name:.*}")]
pub async fn post_win(
    path: web::Path<String>,
    store: web::Data<dyn ScoreStore>,
) -> impl Responder {
    let name = path.into_inner();
    println!("POST {}", name);
    store.record_win(&name);
    HttpResponse::Accepted().finish()
}

// Requests outside the two player routes answer 200 with an empty body.
pub async fn fallback() -> impl Responder {
    HttpResponse::Ok().finish()
}
