//! Muscle and exercise endpoints
//!
//! Both collections expose the same four operations, so the handlers are
//! generic over a [`Resource`] marker that fixes the entity kind.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::db::repos::{Entity, EntityDetail};
use crate::http::body::JsonBody;
use crate::http::error::ApiError;
use crate::http::extractors::parse_id;
use crate::http::server::AppState;
use crate::models::{validate_creation_payload, EntityKind};

/// Marker for a collection served under `/v1/<plural>`
pub trait Resource: Send + Sync + 'static {
    const KIND: EntityKind;
}

/// `/v1/muscles`
pub struct Muscles;

impl Resource for Muscles {
    const KIND: EntityKind = EntityKind::Muscle;
}

/// `/v1/exercises`
pub struct Exercises;

impl Resource for Exercises {
    const KIND: EntityKind = EntityKind::Exercise;
}

/// Entity response
#[derive(Debug, Serialize)]
pub struct EntityResponse {
    pub id: i32,
    pub name: String,
}

impl From<Entity> for EntityResponse {
    fn from(e: Entity) -> Self {
        Self {
            id: e.id,
            name: e.name,
        }
    }
}

/// Entity with related entities, keyed by the related kind's plural
/// (`{"id", "name", "exercises": [...]}` for a muscle).
#[derive(Debug)]
pub struct EntityDetailResponse {
    pub id: i32,
    pub name: String,
    pub related_key: &'static str,
    pub related: Vec<EntityResponse>,
}

impl From<EntityDetail> for EntityDetailResponse {
    fn from(d: EntityDetail) -> Self {
        Self {
            id: d.id,
            name: d.name,
            related_key: d.related_kind.plural(),
            related: d.related.into_iter().map(EntityResponse::from).collect(),
        }
    }
}

impl Serialize for EntityDetailResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry(self.related_key, &self.related)?;
        map.end()
    }
}

/// GET /v1/{plural} - list all entities
async fn list<R: Resource>(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EntityResponse>>, ApiError> {
    let items = state.db.entities(R::KIND).list().await?;
    Ok(Json(items.into_iter().map(EntityResponse::from).collect()))
}

/// POST /v1/{plural} - create a new entity
async fn create<R: Resource>(
    State(state): State<Arc<AppState>>,
    JsonBody(data): JsonBody,
) -> Result<(StatusCode, Json<EntityResponse>), ApiError> {
    let name = validate_creation_payload(&data)?;
    let entity = state.db.entities(R::KIND).create(name).await?;

    Ok((StatusCode::CREATED, Json(EntityResponse::from(entity))))
}

/// GET /v1/{plural}/{id} - get one entity with its related entities
async fn get_one<R: Resource>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EntityDetailResponse>, ApiError> {
    let id = parse_id(R::KIND, &id)?;
    let detail = state.db.entities(R::KIND).get(id).await?;
    Ok(Json(EntityDetailResponse::from(detail)))
}

/// DELETE /v1/{plural}/{id} - delete an entity and its links
async fn delete<R: Resource>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(R::KIND, &id)?;
    state.db.entities(R::KIND).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Collection and item routes for one resource
pub fn router<R: Resource>() -> Router<Arc<AppState>> {
    let collection = format!("/v1/{}", R::KIND.plural());
    let item = format!("{collection}/{{id}}");

    Router::new()
        .route(&collection, get(list::<R>).post(create::<R>))
        .route(&item, get(get_one::<R>).delete(delete::<R>))
}
