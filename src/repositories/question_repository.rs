use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Question};

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn insert(&self, question: Question) -> AppResult<Question>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>>;
    async fn list(&self, question_type: &str, language: Option<&str>) -> AppResult<Vec<Question>>;
    async fn list_by_user(
        &self,
        user_id: &str,
        question_type: &str,
        language: Option<&str>,
    ) -> AppResult<Vec<Question>>;
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();
        self.collection.create_index(id_index).await?;

        let type_index = IndexModel::builder()
            .keys(doc! { "question_type": 1, "language": 1 })
            .build();
        self.collection.create_index(type_index).await?;

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .build();
        self.collection.create_index(user_index).await?;

        log::info!("Successfully created indexes for questions collection");
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn insert(&self, question: Question) -> AppResult<Question> {
        self.collection.insert_one(&question).await?;
        Ok(question)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let question = self.collection.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn list(&self, question_type: &str, language: Option<&str>) -> AppResult<Vec<Question>> {
        use futures::TryStreamExt;

        let mut filter = doc! { "question_type": question_type };
        if let Some(language) = language {
            filter.insert("language", language);
        }

        let cursor = self.collection.find(filter).await?;
        let items: Vec<Question> = cursor.try_collect().await?;
        Ok(items)
    }

    async fn list_by_user(
        &self,
        user_id: &str,
        question_type: &str,
        language: Option<&str>,
    ) -> AppResult<Vec<Question>> {
        use futures::TryStreamExt;

        let mut filter = doc! { "question_type": question_type, "user_id": user_id };
        if let Some(language) = language {
            filter.insert("language", language);
        }

        let cursor = self.collection.find(filter).await?;
        let items: Vec<Question> = cursor.try_collect().await?;
        Ok(items)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
