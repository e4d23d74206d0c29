//! `HeroService`: the request/log/fallback pipeline over `HeroClient`.
//!
//! Every operation builds a request, hands it to the `Transport`, parses the
//! response and appends one `HeroService: ...` line to the message log.
//! Failures of any kind are logged and replaced by a fallback value, so no
//! operation returns an error to its caller.

use std::sync::Arc;

use crate::client::HeroClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::message::MessageLog;
use crate::types::{Ack, Hero, NewHero};

type Parser<T> = fn(&HeroClient, &HttpRequest, HttpResponse) -> Result<T, ApiError>;

/// Heroes data-access service.
#[derive(Clone)]
pub struct HeroService {
    client: HeroClient,
    transport: Arc<dyn Transport>,
    messages: Arc<dyn MessageLog>,
}

impl HeroService {
    pub fn new(config: &ClientConfig, transport: Arc<dyn Transport>, messages: Arc<dyn MessageLog>) -> Self {
        Self {
            client: HeroClient::new(&config.base_url),
            transport,
            messages,
        }
    }

    /// Service over a fresh `UreqTransport`.
    pub fn with_ureq(config: &ClientConfig, messages: Arc<dyn MessageLog>) -> Self {
        Self::new(config, Arc::new(UreqTransport::new()), messages)
    }

    pub async fn list_heroes(&self) -> Vec<Hero> {
        let request = self.client.build_list_heroes();
        match self.send(request, HeroClient::parse_list_heroes).await {
            Ok(heroes) => {
                self.log("fetched heroes");
                heroes
            }
            Err(err) => self.handle_error("getHeroes", err, Vec::new()),
        }
    }

    pub async fn get_hero(&self, id: u32) -> Option<Hero> {
        let request = self.client.build_get_hero(id);
        match self.send(request, HeroClient::parse_get_hero).await {
            Ok(hero) => {
                self.log(&format!("fetched hero id={id}"));
                Some(hero)
            }
            Err(err) => self.handle_error(&format!("getHero id={id}"), err, None),
        }
    }

    pub async fn update_hero(&self, hero: &Hero) -> Option<Ack> {
        let result = match self.client.build_update_hero(hero) {
            Ok(request) => self.send(request, HeroClient::parse_update_hero).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(ack) => {
                self.log(&format!("updated hero id={}", hero.id));
                Some(ack)
            }
            Err(err) => self.handle_error("updateHero", err, None),
        }
    }

    pub async fn add_hero(&self, hero: &NewHero) -> Option<Hero> {
        let result = match self.client.build_add_hero(hero) {
            Ok(request) => self.send(request, HeroClient::parse_add_hero).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(created) => {
                self.log(&format!("added hero w/ id={} {}", created.id, created.name));
                Some(created)
            }
            Err(err) => self.handle_error("addHero", err, None),
        }
    }

    pub async fn delete_hero(&self, id: u32) -> Option<Ack> {
        let request = self.client.build_delete_hero(id);
        match self.send(request, HeroClient::parse_delete_hero).await {
            Ok(ack) => {
                self.log(&format!("deleted hero id={id}"));
                Some(ack)
            }
            Err(err) => self.handle_error("deleteHero", err, None),
        }
    }

    /// A blank term resolves to no heroes without touching the transport.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        if term.trim().is_empty() {
            return Vec::new();
        }
        let request = self.client.build_search_heroes(term);
        match self.send(request, HeroClient::parse_search_heroes).await {
            Ok(matches) => {
                if matches.is_empty() {
                    self.log(&format!("no heroes matching {term}"));
                } else {
                    self.log(&format!("found heroes matching {term}"));
                }
                matches
            }
            Err(err) => self.handle_error("searchHeroes", err, Vec::new()),
        }
    }

    async fn send<T>(&self, request: HttpRequest, parse: Parser<T>) -> Result<T, ApiError> {
        tracing::debug!(method = request.method.as_str(), path = %request.path, "sending hero request");
        let response = self.transport.execute(request.clone()).await?;
        parse(&self.client, &request, response)
    }

    fn handle_error<T>(&self, operation: &str, err: ApiError, fallback: T) -> T {
        tracing::error!(operation, error = ?err, "hero request failed");
        self.log(&format!("{operation} failed: {err}"));
        fallback
    }

    fn log(&self, message: &str) {
        self.messages.add(format!("HeroService: {message}"));
    }
}
