//! Facade contract tests against a recording store

mod common;

use common::{RecordingStore, flag};
use pennant_server::*;
use pennant_storage::*;
use std::sync::Arc;

fn server_with(store: &RecordingStore) -> Server {
    Server::new(Arc::new(store.clone()))
}

#[tokio::test]
async fn test_get_flag() {
    let store = RecordingStore::new().with_flags(vec![Flag {
        key: "foo".to_string(),
        enabled: true,
        ..Default::default()
    }]);
    let server = server_with(&store);

    let got = server
        .get_flag(&GetFlagRequest {
            key: "foo".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(got.key, "foo");
    assert!(got.enabled);
    assert_eq!(store.calls(), vec!["get_flag"]);
}

#[tokio::test]
async fn test_list_flags() {
    let store = RecordingStore::new()
        .with_flags(vec![flag("foo")])
        .with_count(1);
    let server = server_with(&store);

    let got = server.list_flags(&ListFlagRequest::default()).await.unwrap();

    assert!(!got.flags.is_empty());
    assert_eq!(got.total_count, 1);
    assert_eq!(store.calls(), vec!["count_flags", "list_flags"]);
}

#[tokio::test]
async fn test_list_counts_without_pagination() {
    let store = RecordingStore::new().with_count(3);
    let server = server_with(&store);

    server
        .list_flags(&ListFlagRequest {
            offset: 10,
            limit: 5,
        })
        .await
        .unwrap();
    server
        .list_variants(&ListVariantRequest {
            flag_key: "flagKey".to_string(),
            offset: 10,
            limit: 5,
        })
        .await
        .unwrap();

    assert_eq!(
        store.count_params(),
        vec![QueryParams::default(), QueryParams::default()]
    );
    assert_eq!(
        store.list_params(),
        vec![
            QueryParams { offset: 10, limit: 5 },
            QueryParams { offset: 10, limit: 5 }
        ]
    );
}

#[tokio::test]
async fn test_list_flags_pagination() {
    let cases = [
        ("default/no pagination", 0, 0, QueryParams { offset: 0, limit: 20 }),
        ("negative offset", -1, 0, QueryParams { offset: 0, limit: 20 }),
        ("negative limit", 0, -1, QueryParams { offset: 0, limit: 20 }),
        ("zero limit", 0, 0, QueryParams { offset: 0, limit: 20 }),
        ("max limit", 0, 100, QueryParams { offset: 0, limit: 50 }),
        ("in range", 10, 25, QueryParams { offset: 10, limit: 25 }),
        ("extremes", i32::MIN, i32::MAX, QueryParams { offset: 0, limit: 50 }),
    ];

    for (name, offset, limit, expected) in cases {
        let store = RecordingStore::new()
            .with_flags(vec![flag("foo"), flag("bar"), flag("baz")])
            .with_count(3);
        let server = server_with(&store);

        let got = server
            .list_flags(&ListFlagRequest { offset, limit })
            .await
            .unwrap();

        assert_eq!(got.flags.len(), 3, "{}", name);
        assert_eq!(got.total_count, 3, "{}", name);
        assert_eq!(store.list_params(), vec![expected], "{}", name);
    }
}

#[tokio::test]
async fn test_create_flag() {
    let store = RecordingStore::new();
    let server = server_with(&store);

    let req = CreateFlagRequest {
        key: "key".to_string(),
        name: "name".to_string(),
        description: "desc".to_string(),
        enabled: true,
    };
    let got = server.create_flag(&req).await.unwrap();

    assert_eq!(got.key, req.key);
    assert_eq!(got.name, req.name);
    assert_eq!(got.description, req.description);
    assert_eq!(got.enabled, req.enabled);
}

#[tokio::test]
async fn test_update_flag() {
    let store = RecordingStore::new();
    let server = server_with(&store);

    let req = UpdateFlagRequest {
        key: "key".to_string(),
        name: "name".to_string(),
        description: "desc".to_string(),
        enabled: true,
    };
    let got = server.update_flag(&req).await.unwrap();

    assert_eq!(got.key, "key");
    assert!(store.was_called("update_flag"));
}

#[tokio::test]
async fn test_delete_flag() {
    let store = RecordingStore::new();
    let server = server_with(&store);

    let got = server
        .delete_flag(&DeleteFlagRequest {
            key: "key".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(got, Empty {});
    assert_eq!(store.calls(), vec!["delete_flag"]);
}

#[tokio::test]
async fn test_get_variant() {
    let variant = Variant {
        id: "1".to_string(),
        flag_key: "flagKey".to_string(),
        key: "key".to_string(),
        ..Default::default()
    };
    let store = RecordingStore::new().with_variants(vec![variant.clone()]);
    let server = server_with(&store);

    let got = server
        .get_variant(&GetVariantRequest {
            id: "1".to_string(),
            flag_key: "flagKey".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(got, variant);
}

#[tokio::test]
async fn test_list_variants_pagination() {
    let store = RecordingStore::new()
        .with_variants(vec![Variant {
            id: "1".to_string(),
            flag_key: "flagKey".to_string(),
            ..Default::default()
        }])
        .with_count(7);
    let server = server_with(&store);

    let got = server
        .list_variants(&ListVariantRequest {
            flag_key: "flagKey".to_string(),
            offset: -3,
            limit: 500,
        })
        .await
        .unwrap();

    assert_eq!(got.variants.len(), 1);
    assert_eq!(got.total_count, 7);
    assert_eq!(
        store.list_params(),
        vec![QueryParams { offset: 0, limit: 50 }]
    );
    assert_eq!(store.calls(), vec!["count_variants", "list_variants"]);
}

#[tokio::test]
async fn test_create_variant() {
    let store = RecordingStore::new();
    let server = server_with(&store);

    let req = CreateVariantRequest {
        flag_key: "flagKey".to_string(),
        key: "key".to_string(),
        name: "name".to_string(),
        description: "desc".to_string(),
        attachment: String::new(),
    };
    let got = server.create_variant(&req).await.unwrap();

    assert_eq!(got.id, "1");
    assert_eq!(got.flag_key, req.flag_key);
    assert_eq!(got.key, req.key);
    assert_eq!(got.name, req.name);
    assert_eq!(got.description, req.description);
}

#[tokio::test]
async fn test_update_variant() {
    let store = RecordingStore::new();
    let server = server_with(&store);

    let req = UpdateVariantRequest {
        id: "1".to_string(),
        flag_key: "flagKey".to_string(),
        key: "key".to_string(),
        name: "name".to_string(),
        description: "desc".to_string(),
        attachment: String::new(),
    };
    let got = server.update_variant(&req).await.unwrap();

    assert_eq!(got.id, "1");
    assert_eq!(got.key, "key");
}

#[tokio::test]
async fn test_delete_variant() {
    let store = RecordingStore::new();
    let server = server_with(&store);

    let got = server
        .delete_variant(&DeleteVariantRequest {
            id: "1".to_string(),
            flag_key: "flagKey".to_string(),
        })
        .await;

    assert_eq!(got.unwrap(), Empty {});
}

#[tokio::test]
async fn test_store_errors_pass_through() {
    let store = RecordingStore::new().failing(|| StoreError::Internal("disk on fire".to_string()));
    let server = server_with(&store);

    let err = server
        .get_flag(&GetFlagRequest {
            key: "foo".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Internal store error: disk on fire");

    let err = server
        .create_variant(&CreateVariantRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Internal(_)));
}

#[tokio::test]
async fn test_count_failure_skips_list() {
    let store = RecordingStore::new().failing(|| StoreError::Internal("down".to_string()));
    let server = server_with(&store);

    let err = server
        .list_flags(&ListFlagRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Internal(_)));
    assert_eq!(store.calls(), vec!["count_flags"]);
}

#[tokio::test]
async fn test_not_found_passes_through() {
    let store = RecordingStore::new();
    let server = server_with(&store);

    let err = server
        .get_flag(&GetFlagRequest {
            key: "missing".to_string(),
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_concurrent_requests_share_server() {
    let store = RecordingStore::new().with_flags(vec![flag("foo")]);
    let server = server_with(&store);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let server = server.clone();
            tokio::spawn(async move {
                server
                    .get_flag(&GetFlagRequest {
                        key: "foo".to_string(),
                    })
                    .await
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().key, "foo");
    }
    assert_eq!(store.calls().len(), 8);
}
