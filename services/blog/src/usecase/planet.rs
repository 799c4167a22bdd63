use crate::domain::repository::PlanetRepository;
use crate::domain::types::Planet;
use crate::error::BlogServiceError;

// ── GetPlanets ───────────────────────────────────────────────────────────────

pub struct GetPlanetsUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> GetPlanetsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Planet>, BlogServiceError> {
        self.repo.list().await
    }
}

// ── GetPlanet ────────────────────────────────────────────────────────────────

pub struct GetPlanetUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> GetPlanetUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Planet, BlogServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(BlogServiceError::PlanetNotFound)
    }
}
