//! IntegrationRepository port - abstraction for loading integrations

use crate::domain::entities::IntegrationSet;
use crate::error::HassfestResult;
use std::path::Path;

/// Abstract repository for loading integrations
///
/// Problems with individual integrations (missing or malformed manifest) are
/// returned in `IntegrationSet::errors`; only problems with the source as a
/// whole are `Err`.
pub trait IntegrationRepository {
    /// Load every integration under `components_dir`
    fn load_all(&self, components_dir: &Path) -> HassfestResult<IntegrationSet>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integration_repository_trait_is_object_safe() {
        fn _assert_object_safe(_: &dyn IntegrationRepository) {}
    }
}
