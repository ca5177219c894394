use sea_orm::{
    entity::prelude::*,
    sea_query::{Alias, Func, SimpleExpr},
    ActiveValue, Condition, DbBackend, IntoActiveModel,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub use super::_entities::notes::{self, ActiveModel, Entity, Model};
use crate::{
    model::{ModelError, ModelResult},
    validation::Validatable,
};

/// Fields accepted when creating or editing a note. Missing and empty
/// values are treated alike.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct NoteParams {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Validate, Deserialize)]
pub struct Validator {
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

impl Validatable for ActiveModel {
    fn validator(&self) -> Box<dyn Validate> {
        let content = match &self.content {
            ActiveValue::Set(content) | ActiveValue::Unchanged(content) => content.clone(),
            ActiveValue::NotSet => String::new(),
        };
        Box::new(Validator { content })
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// `column` holds `needle` somewhere. `LIKE` would treat `%` and `_` as
/// wildcards and ignore ASCII case on SQLite, so the position function of
/// the backend is used instead; it yields `NULL` for a `NULL` column.
fn contains(backend: DbBackend, column: notes::Column, needle: &str) -> SimpleExpr {
    let position = match backend {
        DbBackend::Postgres => "strpos",
        DbBackend::Sqlite | DbBackend::MySql => "instr",
    };
    Expr::expr(
        Func::cust(Alias::new(position))
            .arg(Expr::col((Entity, column)))
            .arg(needle),
    )
    .gt(0)
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

impl Model {
    /// Validates and inserts a new note under a fresh UUID.
    ///
    /// # Errors
    ///
    /// [`ModelError::Validation`] when `content` is missing or empty, in which
    /// case nothing is written.
    pub async fn create(db: &DatabaseConnection, params: &NoteParams) -> ModelResult<Self> {
        let note = ActiveModel {
            id: ActiveValue::set(Uuid::new_v4()),
            title: ActiveValue::set(params.title.clone()),
            content: ActiveValue::set(params.content.clone().unwrap_or_default()),
        };
        note.validate()?;

        Ok(note.insert(db).await?)
    }

    /// # Errors
    ///
    /// [`ModelError::EntityNotFound`] when no note has this id.
    pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> ModelResult<Self> {
        let note = Entity::find_by_id(id).one(db).await?;
        note.ok_or_else(|| ModelError::EntityNotFound)
    }

    /// Every note, in storage order.
    ///
    /// # Errors
    ///
    /// When the query fails.
    pub async fn list(db: &DatabaseConnection) -> ModelResult<Vec<Self>> {
        Ok(Entity::find().all(db).await?)
    }

    /// Notes whose title or content contains `query`, compared byte for byte:
    /// case matters and `%` or `_` are ordinary characters. A note without a
    /// title can still match on its content.
    ///
    /// # Errors
    ///
    /// When the query fails.
    pub async fn search(db: &DatabaseConnection, query: &str) -> ModelResult<Vec<Self>> {
        let backend = db.get_database_backend();
        Ok(Entity::find()
            .filter(
                Condition::any()
                    .add(contains(backend, notes::Column::Title, query))
                    .add(contains(backend, notes::Column::Content, query)),
            )
            .all(db)
            .await?)
    }

    /// Overwrites the title and/or content, but only with values that are
    /// present and non-empty.
    ///
    /// # Errors
    ///
    /// [`ModelError::EntityNotFound`] when no note has this id.
    pub async fn edit(db: &DatabaseConnection, id: Uuid, params: &NoteParams) -> ModelResult<Self> {
        let existing = Self::find_by_id(db, id).await?;
        let mut note = existing.clone().into_active_model();

        if let Some(title) = non_empty(params.title.as_ref()) {
            note.title = ActiveValue::set(Some(title.to_string()));
        }
        if let Some(content) = non_empty(params.content.as_ref()) {
            note.content = ActiveValue::set(content.to_string());
        }

        if !note.is_changed() {
            return Ok(existing);
        }

        note.update(db).await.map_err(|err| match err {
            DbErr::RecordNotUpdated => ModelError::EntityNotFound,
            err => err.into(),
        })
    }

    /// Hard deletes the note.
    ///
    /// # Errors
    ///
    /// [`ModelError::EntityNotFound`] when no note has this id.
    pub async fn remove(db: &DatabaseConnection, id: Uuid) -> ModelResult<()> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        if res.rows_affected == 0 {
            return Err(ModelError::EntityNotFound);
        }
        Ok(())
    }
}
