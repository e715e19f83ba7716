use travel_recommendation::{
    search_dataset_at, Category, RecommendationSearch, RenderPayload, SearchError,
};

const DATASET_JSON: &str = r#"
{
    "countries": [
        {
            "id": 1,
            "name": "Australia",
            "cities": [
                {
                    "id": 101,
                    "name": "Sydney, Australia",
                    "imageUrl": "sydney.jpg",
                    "description": "A vibrant city known for its iconic landmarks."
                },
                {
                    "id": 102,
                    "name": "Melbourne, Australia",
                    "imageUrl": "melbourne.jpg",
                    "description": "A cultural hub famous for its art and coffee."
                }
            ]
        },
        {
            "id": 2,
            "name": "Japan",
            "cities": [
                {
                    "id": 201,
                    "name": "Tokyo, Japan",
                    "imageUrl": "tokyo.jpg",
                    "description": "A bustling metropolis blending tradition and modernity."
                },
                {
                    "id": 202,
                    "name": "Kyoto, Japan",
                    "imageUrl": "kyoto.jpg",
                    "description": "Known for its historic temples and gardens."
                }
            ]
        },
        {
            "id": 3,
            "name": "Brazil",
            "cities": [
                {
                    "id": 301,
                    "name": "Rio de Janeiro, Brazil",
                    "imageUrl": "rio.jpg",
                    "description": "A lively city known for its beaches and festivals."
                }
            ]
        }
    ],
    "temples": [
        {
            "id": 1,
            "name": "Angkor Wat, Cambodia",
            "imageUrl": "angkor.jpg",
            "description": "A UNESCO World Heritage site."
        }
    ],
    "beaches": []
}
"#;

async fn serve_dataset(server: &mut mockito::ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/data/travel_recommendation_api.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(DATASET_JSON)
        .create_async()
        .await
}

#[tokio::test]
async fn test_builder_japan() {
    let mut server = mockito::Server::new_async().await;
    let mock = serve_dataset(&mut server).await;

    let result = RecommendationSearch::builder()
        .term(" japan ")
        .dataset_url(format!("{}/data/travel_recommendation_api.json", server.url()))
        .build()
        .await
        .unwrap();

    assert_eq!(result.term, "japan");
    assert_eq!(result.category, Category::JapanCities);
    assert_eq!(result.payload.cards().len(), 2);
    assert_eq!(result.payload.cards()[0].name, "Tokyo, Japan");
    assert_eq!(result.payload.cards()[0].image_url, "tokyo.jpg");

    let time = result.payload.time().unwrap();
    assert_eq!(time.location, "Tokyo, Japan");
    assert!(time.time.ends_with(" AM") || time.time.ends_with(" PM"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_convenience_search_dataset_at() {
    let mut server = mockito::Server::new_async().await;
    let _m = serve_dataset(&mut server).await;
    let url = format!("{}/data/travel_recommendation_api.json", server.url());

    let result = search_dataset_at(&url, "Temples of Asia").await.unwrap();
    assert_eq!(result.category, Category::Temples);
    assert_eq!(result.payload.cards()[0].visit.id, 1);
    assert!(result.payload.time().is_none());
}

#[tokio::test]
async fn test_builder_empty_category() {
    let mut server = mockito::Server::new_async().await;
    let _m = serve_dataset(&mut server).await;
    let url = format!("{}/data/travel_recommendation_api.json", server.url());

    let result = search_dataset_at(&url, "Beach").await.unwrap();
    assert_eq!(
        result.payload,
        RenderPayload::Empty {
            message: "No recommendations found for \"Beach\".".to_string()
        }
    );
}

#[tokio::test]
async fn test_builder_surfaces_fetch_errors() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/data/travel_recommendation_api.json")
        .with_status(200)
        .with_body(r#"{"beaches": "not a list"}"#)
        .create_async()
        .await;
    let url = format!("{}/data/travel_recommendation_api.json", server.url());

    let result = search_dataset_at(&url, "beach").await;
    assert!(matches!(result, Err(SearchError::Decode(_))));
}

#[tokio::test]
async fn test_builder_without_term() {
    let result = RecommendationSearch::builder().term("   ").build().await;
    assert!(matches!(result, Err(SearchError::Builder(_))));

    let result = RecommendationSearch::builder().build().await;
    assert!(matches!(result, Err(SearchError::Builder(_))));
}

/// This test is ignored by default since it requires network access
#[tokio::test]
#[ignore]
async fn test_search_live_dataset() {
    let result = travel_recommendation::search("australia").await.unwrap();
    assert_eq!(result.category, Category::AustraliaCities);
    assert!(!result.payload.cards().is_empty());
}
