//! Stateless HTTP request builder and response parser for the heroes API.
//!
//! # Design
//! `HeroClient` holds only the heroes collection URL and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `HeroService` wires the two halves to a `Transport`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Ack, Hero, NewHero};

/// Synchronous, stateless request builder for the heroes API.
#[derive(Debug, Clone)]
pub struct HeroClient {
    heroes_url: String,
}

impl HeroClient {
    /// `base_url` is the API root, e.g. `http://localhost:3000/api`.
    pub fn new(base_url: &str) -> Self {
        Self {
            heroes_url: format!("{}/heroes", base_url.trim_end_matches('/')),
        }
    }

    pub fn heroes_url(&self) -> &str {
        &self.heroes_url
    }

    pub fn build_list_heroes(&self) -> HttpRequest {
        get(self.heroes_url.clone())
    }

    pub fn build_get_hero(&self, id: u32) -> HttpRequest {
        get(format!("{}/{id}", self.heroes_url))
    }

    pub fn build_update_hero(&self, hero: &Hero) -> Result<HttpRequest, ApiError> {
        with_json_body(HttpMethod::Put, self.heroes_url.clone(), hero)
    }

    pub fn build_add_hero(&self, hero: &NewHero) -> Result<HttpRequest, ApiError> {
        with_json_body(HttpMethod::Post, self.heroes_url.clone(), hero)
    }

    pub fn build_delete_hero(&self, id: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{id}", self.heroes_url),
            headers: json_headers(),
            body: None,
        }
    }

    /// The term is appended as-is; escaping reserved characters is left to
    /// the caller.
    pub fn build_search_heroes(&self, term: &str) -> HttpRequest {
        get(format!("{}/?name={term}", self.heroes_url))
    }

    pub fn parse_list_heroes(&self, request: &HttpRequest, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        parse_json(request, response)
    }

    pub fn parse_get_hero(&self, request: &HttpRequest, response: HttpResponse) -> Result<Hero, ApiError> {
        parse_json(request, response)
    }

    pub fn parse_update_hero(&self, request: &HttpRequest, response: HttpResponse) -> Result<Ack, ApiError> {
        parse_ack(request, response)
    }

    pub fn parse_add_hero(&self, request: &HttpRequest, response: HttpResponse) -> Result<Hero, ApiError> {
        parse_json(request, response)
    }

    pub fn parse_delete_hero(&self, request: &HttpRequest, response: HttpResponse) -> Result<Ack, ApiError> {
        parse_ack(request, response)
    }

    pub fn parse_search_heroes(&self, request: &HttpRequest, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        parse_json(request, response)
    }
}

fn get(path: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        path,
        headers: Vec::new(),
        body: None,
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn with_json_body<T: Serialize>(method: HttpMethod, path: String, payload: &T) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: json_headers(),
        body: Some(body),
    })
}

/// Map a non-2xx status to `ApiError::HttpStatus`.
fn check_status(request: &HttpRequest, response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::http_status(&request.path, response.status))
}

fn parse_json<T: DeserializeOwned>(request: &HttpRequest, response: HttpResponse) -> Result<T, ApiError> {
    check_status(request, &response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization {
        url: request.path.clone(),
        message: e.to_string(),
    })
}

fn parse_ack(request: &HttpRequest, response: HttpResponse) -> Result<Ack, ApiError> {
    check_status(request, &response)?;
    if response.body.trim().is_empty() {
        return Ok(Ack::Null);
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization {
        url: request.path.clone(),
        message: e.to_string(),
    })
}
