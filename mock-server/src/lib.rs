//! In-memory heroes backend.
//!
//! Serves the heroes collection under `/api/heroes` the way the in-memory web
//! API of the original app did: ids are assigned as `max + 1` (starting at
//! 11), search is a case-insensitive substring match on `name`, and PUT and
//! DELETE answer `204 No Content`.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

/// First id handed out by an empty collection.
pub const FIRST_ID: u32 = 11;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    pub name: String,
}

/// POST body. Any `id` the client sends is ignored.
#[derive(Deserialize)]
pub struct NewHero {
    pub name: String,
}

#[derive(Deserialize)]
pub struct HeroFilter {
    pub name: Option<String>,
}

pub type Db = Arc<RwLock<BTreeMap<u32, Hero>>>;

/// The ten heroes the tutorial starts with.
pub fn seed_heroes() -> Vec<Hero> {
    [
        "Dr Nice",
        "Narco",
        "Bombasto",
        "Celeritas",
        "Magneta",
        "RubberMan",
        "Dynama",
        "Dr IQ",
        "Magma",
        "Tornado",
    ]
    .into_iter()
    .zip(FIRST_ID..)
    .map(|(name, id)| Hero {
        id,
        name: name.to_string(),
    })
    .collect()
}

/// Router over an empty collection.
pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router over the given heroes.
pub fn app_with(heroes: Vec<Hero>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        heroes.into_iter().map(|hero| (hero.id, hero)).collect(),
    ));
    Router::new()
        .route(
            "/api/heroes",
            get(list_heroes).post(add_hero).put(update_hero),
        )
        .route("/api/heroes/", get(list_heroes))
        .route("/api/heroes/{id}", get(get_hero).delete(delete_hero))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener, heroes: Vec<Hero>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(heroes)).await
}

async fn list_heroes(State(db): State<Db>, Query(filter): Query<HeroFilter>) -> Json<Vec<Hero>> {
    let heroes = db.read().await;
    let needle = filter.name.map(|name| name.to_lowercase());
    let matches = heroes
        .values()
        .filter(|hero| match &needle {
            Some(needle) => hero.name.to_lowercase().contains(needle),
            None => true,
        })
        .cloned()
        .collect();
    Json(matches)
}

async fn add_hero(
    State(db): State<Db>,
    Json(input): Json<NewHero>,
) -> Result<(StatusCode, Json<Hero>), StatusCode> {
    let mut heroes = db.write().await;
    let id = match heroes.keys().next_back() {
        Some(max) => max.checked_add(1).ok_or_else(|| {
            tracing::warn!(max, "hero id space exhausted");
            StatusCode::INSUFFICIENT_STORAGE
        })?,
        None => FIRST_ID,
    };
    let hero = Hero {
        id,
        name: input.name,
    };
    heroes.insert(id, hero.clone());
    tracing::debug!(id, "hero added");
    Ok((StatusCode::CREATED, Json(hero)))
}

async fn get_hero(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Hero>, StatusCode> {
    let heroes = db.read().await;
    heroes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_hero(State(db): State<Db>, Json(input): Json<Hero>) -> StatusCode {
    let mut heroes = db.write().await;
    match heroes.get_mut(&input.id) {
        Some(hero) => {
            hero.name = input.name;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_hero(State(db): State<Db>, Path(id): Path<u32>) -> StatusCode {
    let mut heroes = db.write().await;
    match heroes.remove(&id) {
        Some(_) => {
            tracing::debug!(id, "hero deleted");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}
