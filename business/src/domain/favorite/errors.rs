#[derive(Debug, thiserror::Error)]
pub enum FavoriteError {
    #[error("favorite.serialization_failed")]
    Serialization,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
