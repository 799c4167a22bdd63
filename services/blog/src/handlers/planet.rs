use axum::{Json, extract::State};
use serde::Serialize;

use crate::domain::types::Planet;
use crate::error::BlogServiceError;
use crate::handlers::{IdPath, row_id};
use crate::state::AppState;
use crate::usecase::planet::{GetPlanetUseCase, GetPlanetsUseCase};

#[derive(Debug, Serialize)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
}

impl From<Planet> for PlanetResponse {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
        }
    }
}

// ── GET /planets ─────────────────────────────────────────────────────────────

pub async fn get_planets(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetResponse>>, BlogServiceError> {
    let usecase = GetPlanetsUseCase {
        repo: state.planet_repo(),
    };
    let planets = usecase.execute().await?;
    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

// ── GET /planets/{id} ────────────────────────────────────────────────────────

pub async fn get_planet(
    IdPath(id): IdPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<PlanetResponse>, BlogServiceError> {
    let id = row_id(id, BlogServiceError::PlanetNotFound)?;
    let usecase = GetPlanetUseCase {
        repo: state.planet_repo(),
    };
    let planet = usecase.execute(id).await?;
    Ok(Json(planet.into()))
}
