use std::time::Duration;

use pokedex_engine::{
    CachedCatalog, CatalogSource, DetailRef, FailureKind, FetchSettings, PokeApiClient,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn bulbasaur_json() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "types": [
            {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
            {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}}
        ],
        "stats": [
            {"base_stat": 45, "effort": 0, "stat": {"name": "hp", "url": "u"}},
            {"base_stat": 49, "effort": 0, "stat": {"name": "attack", "url": "u"}}
        ],
        "abilities": [
            {"ability": {"name": "overgrow", "url": "u"}, "is_hidden": false, "slot": 1}
        ],
        "sprites": {"front_default": "https://img.test/1.png"}
    })
}

fn client_for(server: &MockServer) -> PokeApiClient {
    PokeApiClient::new(FetchSettings {
        base_url: format!("{}/api/v2/", server.uri()),
        ..FetchSettings::default()
    })
    .expect("client")
}

#[tokio::test]
async fn fetches_page_with_limit_and_offset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=40&limit=20",
            "previous": "https://pokeapi.co/api/v2/pokemon?offset=0&limit=20",
            "results": [
                {"name": "spearow", "url": "https://pokeapi.co/api/v2/pokemon/21/"},
                {"name": "fearow", "url": "https://pokeapi.co/api/v2/pokemon/22/"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server).fetch_page(2).await.expect("page ok");
    assert_eq!(page.count, 1302);
    let names: Vec<&str> = page.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["spearow", "fearow"]);
}

#[tokio::test]
async fn fetches_detail_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bulbasaur_json()))
        .mount(&server)
        .await;

    let entity = client_for(&server)
        .fetch_detail(&DetailRef::Id(1))
        .await
        .expect("detail ok");
    assert_eq!(entity.name, "bulbasaur");
    assert_eq!(entity.types, vec!["grass", "poison"]);
    assert_eq!(entity.stats.len(), 2);
    assert_eq!(entity.abilities, vec!["overgrow"]);
    assert_eq!(entity.image.as_deref(), Some("https://img.test/1.png"));
    assert_eq!(entity.number_label(), "#001");
}

#[tokio::test]
async fn cached_client_does_not_refetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bulbasaur_json()))
        .expect(1)
        .mount(&server)
        .await;

    let cache = CachedCatalog::new(client_for(&server));
    let reference = DetailRef::Url(format!("{}/api/v2/pokemon/1/", server.uri()));
    let first = cache.fetch_detail(&reference).await.unwrap();
    let second = cache.fetch_detail(&reference).await.unwrap();
    assert_eq!(first, second);
    // Same record by id resolves from the cache as well.
    let by_id = cache.fetch_detail(&DetailRef::Id(1)).await.unwrap();
    assert_eq!(by_id, first);
}

#[tokio::test]
async fn fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/99999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_detail(&DetailRef::Id(99999))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_detail(&DetailRef::Id(1))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(bulbasaur_json()),
        )
        .mount(&server)
        .await;

    let client = PokeApiClient::new(FetchSettings {
        base_url: format!("{}/api/v2/", server.uri()),
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    })
    .unwrap();
    let err = client.fetch_detail(&DetailRef::Id(1)).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bulbasaur_json()))
        .mount(&server)
        .await;

    let client = PokeApiClient::new(FetchSettings {
        base_url: format!("{}/api/v2/", server.uri()),
        max_bytes: 10,
        ..FetchSettings::default()
    })
    .unwrap();
    let err = client.fetch_detail(&DetailRef::Id(1)).await.unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 10, .. }
    ));
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = PokeApiClient::new(FetchSettings {
        base_url: "not a url".into(),
        ..FetchSettings::default()
    })
    .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
