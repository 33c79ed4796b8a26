//! Jikan v4 response bodies, trimmed to the fields the client reads

use serde_json::{json, Value};

pub fn anime_json(mal_id: u64, title: &str, year: Option<i64>) -> Value {
    json!({
        "mal_id": mal_id,
        "title": title,
        "year": year,
        "episodes": 12,
        "status": "Finished Airing",
        "score": 8.75,
        "scored_by": 1_000,
        "synopsis": format!("Synopsis of {title}."),
        "images": {
            "jpg": {
                "image_url": format!("https://cdn.myanimelist.net/images/anime/{mal_id}.jpg"),
                "large_image_url": format!("https://cdn.myanimelist.net/images/anime/{mal_id}l.jpg")
            }
        }
    })
}

pub fn page(data: Vec<Value>) -> Value {
    json!({
        "pagination": { "last_visible_page": 1, "has_next_page": false },
        "data": data
    })
}
