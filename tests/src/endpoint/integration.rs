#![cfg(test)]
use std::sync::Arc;

use axum::http::StatusCode;
use cafe_common::models::cafe::{Cafe, CityKey};
use cafe_common::repository::CafeRepository;
use cafe_core::catalog::InMemoryCatalog;
use cafe_core::http;
use cafe_core::resolver::QueryResolver;

use crate::util::{builtin_router, encode, entries, get};

#[tokio::test]
async fn cafe_negative() {
    let router = builtin_router();

    let requests = [
        ("/cafe", "unknown city"),
        ("/cafe?city=omsk", "unknown city"),
        ("/cafe?city=", "unknown city"),
        ("/cafe?count=2", "unknown city"),
        ("/cafe?city=tula&count=na", "incorrect count"),
        ("/cafe?city=tula&count=-1", "incorrect count"),
        ("/cafe?city=omsk&count=na", "unknown city"),
    ];

    for (uri, message) in requests {
        let (status, body) = get(&router, uri).await.unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body.trim(), message, "{uri}");
    }
}

#[tokio::test]
async fn cafe_when_ok() {
    let router = builtin_router();

    let requests = [
        "/cafe?count=2&city=moscow".to_string(),
        "/cafe?city=tula".to_string(),
        "/cafe?city=TULA".to_string(),
        format!("/cafe?city=moscow&search={}", encode("ложка")),
    ];

    for uri in requests {
        let (status, _) = get(&router, &uri).await.unwrap();
        assert_eq!(status, StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn cafe_count() {
    let router = builtin_router();
    let catalog = InMemoryCatalog::builtin().unwrap();

    for city in ["moscow", "tula"] {
        let total = catalog.cafes(&CityKey::new(city).unwrap()).unwrap().len();

        for count in [0, 1, 2, 100] {
            let uri = format!("/cafe?city={city}&count={count}");
            let (status, body) = get(&router, &uri).await.unwrap();

            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(entries(&body).len(), count.min(total), "{uri}: {body}");
        }
    }
}

#[tokio::test]
async fn cafe_count_zero_is_empty() {
    let router = builtin_router();
    let (status, body) = get(&router, "/cafe?city=moscow&count=0").await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "");
}

#[tokio::test]
async fn cafe_search() {
    let router = builtin_router();

    let requests = [("фасоль", 0), ("кофе", 2), ("КОФЕ", 2), ("вилка", 1)];

    for (search, want) in requests {
        let uri = format!("/cafe?city=moscow&search={}", encode(search));
        let (status, body) = get(&router, &uri).await.unwrap();
        assert_eq!(status, StatusCode::OK);

        let found = entries(&body);
        assert_eq!(found.len(), want, "search = {search}: {body}");

        let needle = search.to_lowercase();
        for entry in found {
            let name = entry.split(" (").next().unwrap_or_default();
            assert!(name.to_lowercase().contains(&needle), "{entry} lacks {search}");
        }
    }
}

#[tokio::test]
async fn cafe_is_idempotent() {
    let router = builtin_router();
    let uri = format!("/cafe?city=moscow&count=3&search={}", encode("о"));

    let first = get(&router, &uri).await.unwrap();
    let second = get(&router, &uri).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn cafe_from_json_dataset() {
    let json = r#"{ "Omsk": [
        { "name": "Сибирский кофе", "address": "Ленина 1" },
        { "name": "Пельменная", "address": "Маркса 2" }
    ] }"#;
    let catalog = InMemoryCatalog::from_json_str(json).unwrap();
    let router = http::router(QueryResolver::new(Arc::new(catalog)));

    let (status, body) = get(&router, "/cafe?city=omsk").await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Сибирский кофе (Ленина 1), Пельменная (Маркса 2)");

    let (status, body) = get(&router, "/cafe?city=moscow").await.unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "unknown city");

    let expected = Cafe::new("Пельменная", "Маркса 2").to_string();
    let (_, body) = get(&router, &format!("/cafe?city=omsk&search={}", encode("пельм")))
        .await
        .unwrap();
    assert_eq!(body, expected);
}

#[tokio::test]
async fn cafe_entries_split_on_commas() {
    let router = builtin_router();

    let uri = format!("/cafe?city=moscow&search={}", encode("кофе"));
    let (_, body) = get(&router, &uri).await.unwrap();
    assert_eq!(body.split(',').count(), 2, "{body}");

    let (_, body) = get(&router, "/cafe?city=tula&count=1").await.unwrap();
    assert_eq!(body.split(',').count(), 1, "{body}");
}

#[test]
fn dataset_with_comma_in_address_is_rejected() {
    let json = r#"{ "omsk": [ { "name": "Сибирь", "address": "Ленина ул., 1" } ] }"#;
    let err = InMemoryCatalog::from_json_str(json).unwrap_err();
    assert!(err.to_string().contains("Ленина ул., 1"), "{err}");
}
