mod common;

use anyhow::Result;
use axum::http::StatusCode;

use common::CountingOracle;

#[tokio::test]
async fn excluded_paths_never_consult_the_oracle() -> Result<()> {
    let oracle = CountingOracle::new(false);

    for path in ["/api/x", "/_next/static/y", "/_next/image", "/favicon.ico"] {
        let res = common::get(common::app_with_oracle(oracle.clone()), path, None).await?;
        assert!(common::location(&res).is_none(), "path {} was redirected", path);
    }

    assert_eq!(oracle.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn gated_paths_consult_the_oracle_once() -> Result<()> {
    let oracle = CountingOracle::new(true);

    let res = common::get(common::app_with_oracle(oracle.clone()), "/reports", None).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(oracle.calls(), 1);

    let res = common::get(common::app_with_oracle(oracle.clone()), "/", None).await?;
    assert_eq!(common::location(&res), Some("/dashboard"));
    assert_eq!(oracle.calls(), 2);
    Ok(())
}

#[tokio::test]
async fn health_is_reachable_without_session() -> Result<()> {
    let res = common::get(common::app(), "/api/health", None).await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = common::body_json(res).await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn unknown_api_route_is_not_redirected() -> Result<()> {
    let res = common::get(common::app(), "/api/missing", None).await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(common::location(&res).is_none());
    Ok(())
}

#[tokio::test]
async fn data_routes_outside_next_static_stay_gated() -> Result<()> {
    let res = common::get(common::app(), "/_next/data/build/page.json", None).await?;
    assert_eq!(common::location(&res), Some("/login"));
    Ok(())
}
