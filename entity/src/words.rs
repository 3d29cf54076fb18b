use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::prelude::*;
use crate::word;

/// Every stored word, trimmed, lower-cased and deduplicated.
pub async fn load_words<C: ConnectionTrait>(db: &C) -> Result<Vec<String>, DbErr> {
    let models = Word::find()
        .order_by_asc(word::Column::Text)
        .all(db)
        .await?;

    Ok(spellingbee::clean(models.into_iter().map(|model| model.text)))
}
