use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient_type::errors::IngredientTypeError;
use crate::domain::ingredient_type::model::{IngredientType, NewIngredientType};
use crate::domain::ingredient_type::repository::IngredientTypeRepository;
use crate::domain::ingredient_type::use_cases::rename::{
    RenameIngredientTypeParams, RenameIngredientTypeUseCase,
};
use crate::domain::logger::Logger;

pub struct RenameIngredientTypeUseCaseImpl {
    pub repository: Arc<dyn IngredientTypeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RenameIngredientTypeUseCase for RenameIngredientTypeUseCaseImpl {
    async fn execute(
        &self,
        params: RenameIngredientTypeParams,
    ) -> Result<IngredientType, IngredientTypeError> {
        let NewIngredientType { name } = NewIngredientType::new(&params.new_name)?;

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(IngredientTypeError::on_lookup)?;

        self.logger.debug(&format!(
            "Updating name of {}, new name: {}",
            existing, name
        ));

        self.repository
            .rename(existing.id, &name)
            .await
            .map_err(IngredientTypeError::on_lookup)?;

        Ok(IngredientType::from_repository(existing.id, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockIngredientTypeRepo, dairy, mock_logger};

    #[tokio::test]
    async fn should_persist_new_name_then_return_it() {
        let mut mock_repo = MockIngredientTypeRepo::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(dairy()));
        mock_repo
            .expect_rename()
            .withf(|id, name| *id == 1 && name == "Milk products")
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = RenameIngredientTypeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let renamed = use_case
            .execute(RenameIngredientTypeParams {
                id: 1,
                new_name: "Milk products".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(renamed.id, 1);
        assert_eq!(renamed.name, "Milk products");
    }

    #[tokio::test]
    async fn should_fail_when_type_missing() {
        let mut mock_repo = MockIngredientTypeRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_rename().never();

        let use_case = RenameIngredientTypeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RenameIngredientTypeParams {
                id: 9,
                new_name: "Spices".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            IngredientTypeError::DoesNotExist
        ));
    }

    #[tokio::test]
    async fn should_fail_when_new_name_taken() {
        let mut mock_repo = MockIngredientTypeRepo::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(dairy()));
        mock_repo
            .expect_rename()
            .returning(|_, _| Err(RepositoryError::Duplicated));

        let use_case = RenameIngredientTypeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RenameIngredientTypeParams {
                id: 1,
                new_name: "Vegetables".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            IngredientTypeError::AlreadyExists
        ));
    }
}
