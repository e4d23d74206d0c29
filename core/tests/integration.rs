//! Full hero lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every `HeroService`
//! operation over real HTTP through `UreqTransport`, checking both the
//! returned values and the message log.

use std::io::{Read, Write};
use std::sync::Arc;

use hero_core::{Ack, ClientConfig, Hero, HeroService, MessageService, NewHero};

fn start_mock_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, mock_server::seed_heroes()).await
        })
        .unwrap();
    });

    format!("http://{addr}/api")
}

#[tokio::test(flavor = "multi_thread")]
async fn hero_lifecycle() {
    let base_url = start_mock_server();
    let log = MessageService::new();
    let heroes = HeroService::with_ureq(&ClientConfig::new(base_url.clone()), Arc::new(log.clone()));

    // Step 1: list the seeded heroes.
    let all = heroes.list_heroes().await;
    assert_eq!(all.len(), 10);
    assert_eq!(all[0].name, "Dr Nice");

    // Step 2: add a hero; the backend assigns the next id.
    let created = heroes.add_hero(&NewHero::new("Bob")).await.unwrap();
    assert_eq!(
        created,
        Hero {
            id: 21,
            name: "Bob".to_string()
        }
    );

    // Step 3: get it back.
    assert_eq!(heroes.get_hero(21).await, Some(created.clone()));

    // Step 4: rename it.
    let renamed = Hero {
        id: 21,
        name: "Robert".to_string(),
    };
    assert_eq!(heroes.update_hero(&renamed).await, Some(Ack::Null));
    assert_eq!(heroes.get_hero(21).await, Some(renamed));

    // Step 5: search.
    let found = heroes.search_heroes("rob").await;
    assert_eq!(found.len(), 1);
    assert!(heroes.search_heroes("zzz").await.is_empty());
    assert!(heroes.search_heroes("  ").await.is_empty());

    // Step 6: delete, then the hero is gone.
    assert_eq!(heroes.delete_hero(21).await, Some(Ack::Null));
    assert_eq!(heroes.get_hero(21).await, None);

    // Step 7: deleting again and updating a missing hero both fall back.
    assert_eq!(heroes.delete_hero(21).await, None);
    assert_eq!(heroes.update_hero(&created).await, None);

    let not_found = |op: &str, path: &str| {
        format!("HeroService: {op} failed: Http failure response for {base_url}/heroes{path}: 404 Not Found")
    };
    assert_eq!(
        log.messages(),
        vec![
            "HeroService: fetched heroes".to_string(),
            "HeroService: added hero w/ id=21 Bob".to_string(),
            "HeroService: fetched hero id=21".to_string(),
            "HeroService: updated hero id=21".to_string(),
            "HeroService: fetched hero id=21".to_string(),
            "HeroService: found heroes matching rob".to_string(),
            "HeroService: no heroes matching zzz".to_string(),
            "HeroService: deleted hero id=21".to_string(),
            not_found("getHero id=21", "/21"),
            not_found("deleteHero", "/21"),
            not_found("updateHero", ""),
        ]
    );
}

#[tokio::test]
async fn unreachable_backend_falls_back_everywhere() {
    // Nothing listens on the discard port.
    let log = MessageService::new();
    let heroes = HeroService::with_ureq(&ClientConfig::new("http://127.0.0.1:9/api"), Arc::new(log.clone()));

    assert!(heroes.list_heroes().await.is_empty());
    assert_eq!(heroes.get_hero(1).await, None);
    assert_eq!(heroes.add_hero(&NewHero::new("Bob")).await, None);

    let messages = log.messages();
    assert_eq!(messages.len(), 3);
    assert!(messages[0].starts_with("HeroService: getHeroes failed: "));
    assert!(messages[1].starts_with("HeroService: getHero id=1 failed: "));
    assert!(messages[2].starts_with("HeroService: addHero failed: "));
}

/// Serve one request with a 200 whose body is not valid UTF-8.
fn start_garbled_body_server() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        // Drain headers plus Content-Length bytes of body before answering.
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&request);
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if request.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        stream
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n\xff\xfe")
            .unwrap();
    });

    format!("http://{addr}/api")
}

#[tokio::test(flavor = "multi_thread")]
async fn unreadable_success_body_takes_failure_path() {
    let base_url = start_garbled_body_server();
    let log = MessageService::new();
    let heroes = HeroService::with_ureq(&ClientConfig::new(base_url), Arc::new(log.clone()));

    let hero = Hero {
        id: 1,
        name: "One".to_string(),
    };
    assert_eq!(heroes.update_hero(&hero).await, None);

    let messages = log.messages();
    assert_eq!(messages.len(), 1);
    assert!(
        messages[0].starts_with("HeroService: updateHero failed: "),
        "{messages:?}"
    );
}
