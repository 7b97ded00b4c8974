use std::fs::File;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{DegreesError, Result};
use crate::graph_index::GraphIndex;
use crate::model::{MovieId, PersonId};

pub const PEOPLE_FILE: &str = "people.csv";
pub const MOVIES_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: PersonId,
    name: String,
    #[serde(default)]
    birth: String,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: MovieId,
    title: String,
    #[serde(default)]
    year: String,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: PersonId,
    movie_id: MovieId,
}

/// Loads `people.csv`, `movies.csv` and `stars.csv` from `dir`.
///
/// Star rows that refer to a person or movie missing from the other two
/// files are skipped.
pub fn load_dir(dir: &Path) -> Result<GraphIndex> {
    let mut index = GraphIndex::new();

    for row in read_rows::<PersonRow>(&dir.join(PEOPLE_FILE))? {
        index.add_person(row.id, row.name, row.birth);
    }
    for row in read_rows::<MovieRow>(&dir.join(MOVIES_FILE))? {
        index.add_movie(row.id, row.title, row.year);
    }

    let stars = read_rows::<StarRow>(&dir.join(STARS_FILE))?;
    let total = stars.len();
    let skipped = stars
        .into_iter()
        .filter(|row| !index.add_star(&row.person_id, &row.movie_id))
        .count();
    if skipped > 0 {
        warn!(skipped, total, "star rows reference unknown people or movies");
    }

    info!(
        dir = %dir.display(),
        people = index.len_people(),
        movies = index.len_movies(),
        "data loaded"
    );
    Ok(index)
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|source| DegreesError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_err = |source: csv::Error| DegreesError::Csv {
        path: PathBuf::from(path),
        source,
    };

    csv::Reader::from_reader(file) // first line holds the column titles
        .deserialize()
        .map(|row| row.map_err(csv_err))
        .collect()
}
