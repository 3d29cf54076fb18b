extern crate entity;
extern crate indicatif;

use clap::Parser;
use entity::{prelude::*, word};
use indicatif::ProgressBar;
use migration::{Migrator, MigratorTrait};
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use spellingbee::Key;

const CHUNK_SIZE: usize = 5000;
const WORDS_URL: &str =
  "https://raw.githubusercontent.com/dwyl/english-words/refs/heads/master/words_alpha.txt";

/// Import a word list into the words database.
#[derive(Parser)]
struct Options {
  /// URL or local path of a newline separated word list
  #[arg(default_value = WORDS_URL)]
  source: String,
}

async fn fetch(source: &str) -> Result<String, Box<dyn std::error::Error>> {
  if source.starts_with("http://") || source.starts_with("https://") {
    Ok(reqwest::get(source).await?.error_for_status()?.text().await?)
  } else {
    Ok(tokio::fs::read_to_string(source).await?)
  }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let options = Options::parse();

  println!("Fetching {}...", options.source);
  let text = fetch(&options.source).await?;

  let words: Vec<String> = spellingbee::clean(text.lines())
    .into_iter()
    .filter(|word| !Key::of(word).is_none())
    .collect();
  println!("{} usable words", words.len());

  let db: DatabaseConnection = entity::get_connection().await?;
  Migrator::up(&db, None).await?;

  println!("Processing...");
  let pb = ProgressBar::new(words.len() as u64);
  let mut inserted = 0;
  for batch in words.chunks(CHUNK_SIZE) {
    let models = batch.iter().map(|text| word::ActiveModel {
      text: Set(text.clone()),
      ..Default::default()
    });
    inserted += Word::insert_many(models)
      .on_conflict(OnConflict::column(word::Column::Text).do_nothing().to_owned())
      .exec_without_returning(&db)
      .await?;
    pb.inc(batch.len() as u64);
  }

  pb.finish_and_clear();

  println!("Done! {} new words", inserted);

  Ok(())
}
