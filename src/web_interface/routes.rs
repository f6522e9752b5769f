use std::sync::Arc;

use log::error;
use rust_embed::RustEmbed;
use uuid::Uuid;
use warp::{http::StatusCode, reply, Filter, Rejection, Reply};

use crate::photo_store::store::PhotoStore;
use crate::upload::validator::{validate_data_url, validate_month};
use crate::web_interface::types::{ApiError, ListQuery, UploadRequest};

/// Request body cap for uploads: the 5MB image cap plus base64 expansion
/// and JSON framing.
const MAX_BODY_BYTES: u64 = 8 * 1024 * 1024;

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/static"]
struct Assets;

/// GET / -> the gallery page
pub fn gallery_page_route() -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path::end().and(warp::get()).and_then(|| async move {
        match Assets::get("index.html") {
            Some(file) => {
                let res = reply::with_header(
                    file.data.into_owned(),
                    "Content-Type",
                    "text/html; charset=utf-8",
                )
                .into_response();
                Ok::<_, Rejection>(res)
            }
            None => Ok::<_, Rejection>(
                reply::with_status(
                    reply::json(&ApiError::new("Gallery page missing from build")),
                    StatusCode::NOT_FOUND,
                )
                .into_response(),
            ),
        }
    })
}

/// GET /static/* -> embedded assets
pub fn asset_route() -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path("static")
        .and(warp::path::tail())
        .and(warp::get())
        .and_then(|tail: warp::path::Tail| async move {
            match Assets::get(tail.as_str()) {
                Some(file) => {
                    let mime = mime_guess::from_path(tail.as_str()).first_or_octet_stream();
                    let res = reply::with_header(
                        file.data.into_owned(),
                        "Content-Type",
                        mime.to_string(),
                    )
                    .into_response();
                    Ok::<_, Rejection>(res)
                }
                None => Ok::<_, Rejection>(
                    reply::with_status(
                        reply::json(&ApiError::new("Asset not found")),
                        StatusCode::NOT_FOUND,
                    )
                    .into_response(),
                ),
            }
        })
}

/// GET /api/photos[?month=&year=] -> list photos
pub fn list_photos_route(
    store: Arc<PhotoStore>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("api" / "photos")
        .and(warp::get())
        .and(warp::query::<ListQuery>())
        .and_then(move |query: ListQuery| {
            let store = store.clone();
            async move {
                let result = match (query.month, query.year) {
                    (Some(month), Some(year)) => {
                        let month = match validate_month(month) {
                            Ok(m) => m,
                            Err(e) => {
                                let res = reply::with_status(
                                    reply::json(&ApiError::new(e.to_string())),
                                    StatusCode::BAD_REQUEST,
                                )
                                .into_response();
                                return Ok::<_, Rejection>(res);
                            }
                        };
                        store.photos_for_month(month, year)
                    }
                    _ => store.list(),
                };
                match result {
                    Ok(photos) => Ok::<_, Rejection>(
                        reply::with_status(reply::json(&photos), StatusCode::OK).into_response(),
                    ),
                    Err(e) => {
                        error!("Failed to load photos: {}", e);
                        Ok::<_, Rejection>(
                            reply::with_status(
                                reply::json(&ApiError::new("Failed to load photos")),
                                StatusCode::INTERNAL_SERVER_ERROR,
                            )
                            .into_response(),
                        )
                    }
                }
            }
        })
}

/// POST /api/photos -> validate and save an upload
pub fn upload_photo_route(
    store: Arc<PhotoStore>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("api" / "photos")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and_then(move |req: UploadRequest| {
            let store = store.clone();
            async move {
                let month = match validate_month(req.month) {
                    Ok(m) => m,
                    Err(e) => {
                        let res = reply::with_status(
                            reply::json(&ApiError::new(e.to_string())),
                            StatusCode::BAD_REQUEST,
                        )
                        .into_response();
                        return Ok::<_, Rejection>(res);
                    }
                };
                if let Err(e) = validate_data_url(&req.data_url) {
                    let res = reply::with_status(
                        reply::json(&ApiError::new(e.to_string())),
                        StatusCode::BAD_REQUEST,
                    )
                    .into_response();
                    return Ok::<_, Rejection>(res);
                }
                match store.save(&req.data_url, month, req.year) {
                    Ok(photo) => Ok::<_, Rejection>(
                        reply::with_status(reply::json(&photo), StatusCode::CREATED)
                            .into_response(),
                    ),
                    Err(e) => {
                        error!("Failed to save photo: {}", e);
                        Ok::<_, Rejection>(
                            reply::with_status(
                                reply::json(&ApiError::new("Upload failed")),
                                StatusCode::INTERNAL_SERVER_ERROR,
                            )
                            .into_response(),
                        )
                    }
                }
            }
        })
}

/// DELETE /api/photos/:id -> remove a photo
pub fn delete_photo_route(
    store: Arc<PhotoStore>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("api" / "photos" / String)
        .and(warp::delete())
        .and_then(move |id_str: String| {
            let store = store.clone();
            async move {
                let id = match Uuid::parse_str(&id_str) {
                    Ok(u) => u,
                    Err(_) => {
                        let res = reply::with_status(
                            reply::json(&ApiError::new("Invalid photo id")),
                            StatusCode::BAD_REQUEST,
                        )
                        .into_response();
                        return Ok::<_, Rejection>(res);
                    }
                };
                match store.delete(id) {
                    Ok(()) => Ok::<_, Rejection>(
                        reply::with_status(reply::reply(), StatusCode::NO_CONTENT)
                            .into_response(),
                    ),
                    Err(e) => {
                        error!("Failed to delete photo {}: {}", id, e);
                        Ok::<_, Rejection>(
                            reply::with_status(
                                reply::json(&ApiError::new("Delete failed")),
                                StatusCode::INTERNAL_SERVER_ERROR,
                            )
                            .into_response(),
                        )
                    }
                }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo_store::types::Photo;
    use crate::storage::memory_storage::MemoryStorage;
    use serde_json::json;

    fn test_store() -> Arc<PhotoStore> {
        Arc::new(PhotoStore::new(Arc::new(MemoryStorage::new())))
    }

    #[test]
    fn test_list_starts_empty() {
        tokio_test::block_on(async {
            let filter = list_photos_route(test_store());
            let res = warp::test::request()
                .method("GET")
                .path("/api/photos")
                .reply(&filter)
                .await;
            assert_eq!(res.status(), StatusCode::OK);
            assert_eq!(res.body().as_ref(), b"[]");
        });
    }

    #[tokio::test]
    async fn test_upload_then_list() {
        let store = test_store();
        let upload = upload_photo_route(store.clone());
        let res = warp::test::request()
            .method("POST")
            .path("/api/photos")
            .json(&json!({
                "dataUrl": "data:image/png;base64,QUJD",
                "month": 5,
                "year": 2024
            }))
            .reply(&upload)
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let created: Photo = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(created.month, 5);
        assert_eq!(created.year, Some(2024));

        let list = list_photos_route(store);
        let res = warp::test::request()
            .method("GET")
            .path("/api/photos")
            .reply(&list)
            .await;
        let photos: Vec<Photo> = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].id, created.id);
    }

    #[tokio::test]
    async fn test_upload_rejects_unsupported_format() {
        let filter = upload_photo_route(test_store());
        let res = warp::test::request()
            .method("POST")
            .path("/api/photos")
            .json(&json!({
                "dataUrl": "data:image/gif;base64,QUJD",
                "month": 0,
                "year": 2024
            }))
            .reply(&filter)
            .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let err: ApiError = serde_json::from_slice(res.body()).unwrap();
        assert!(err.message.contains("image/gif"));
    }

    #[tokio::test]
    async fn test_upload_rejects_month_out_of_range() {
        let filter = upload_photo_route(test_store());
        let res = warp::test::request()
            .method("POST")
            .path("/api/photos")
            .json(&json!({
                "dataUrl": "data:image/png;base64,QUJD",
                "month": 12,
                "year": 2024
            }))
            .reply(&filter)
            .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_filters_by_month_and_year() {
        let store = test_store();
        store.save("data:image/png;base64,QUJD", 5, 2024).unwrap();
        store.save("data:image/png;base64,QUJD", 6, 2024).unwrap();
        let filter = list_photos_route(store);
        let res = warp::test::request()
            .method("GET")
            .path("/api/photos?month=5&year=2024")
            .reply(&filter)
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        let photos: Vec<Photo> = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].month, 5);
    }

    #[tokio::test]
    async fn test_delete_removes_photo_and_repeats_quietly() {
        let store = test_store();
        let saved = store.save("data:image/png;base64,QUJD", 3, 2025).unwrap();
        let filter = delete_photo_route(store.clone());
        let path = format!("/api/photos/{}", saved.id);

        let res = warp::test::request()
            .method("DELETE")
            .path(&path)
            .reply(&filter)
            .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert!(store.list().unwrap().is_empty());

        // Deleting the same id again is still a 204.
        let res = warp::test::request()
            .method("DELETE")
            .path(&path)
            .reply(&filter)
            .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_delete_rejects_malformed_id() {
        let filter = delete_photo_route(test_store());
        let res = warp::test::request()
            .method("DELETE")
            .path("/api/photos/not-a-uuid")
            .reply(&filter)
            .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_gallery_page_is_served() {
        let filter = gallery_page_route();
        let res = warp::test::request().method("GET").path("/").reply(&filter).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = String::from_utf8_lossy(res.body());
        assert!(body.contains("Galeri Sahabat"));
    }
}
