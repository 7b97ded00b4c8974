use std::collections::{BTreeSet, HashMap};

use crate::error::{DegreesError, Result};
use crate::model::{Movie, MovieId, Person, PersonId};

/// In-memory people/movies tables plus a lowercase name lookup.
///
/// Built once (by `data_loading::load_dir` or by hand in tests) and only read
/// while searching.
#[derive(Debug, Default, Clone)]
pub struct GraphIndex {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    names: HashMap<String, BTreeSet<PersonId>>,
}

impl GraphIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_person(&mut self, id: PersonId, name: impl Into<String>, birth: impl Into<String>) {
        let name = name.into();
        self.names.entry(name.to_lowercase()).or_default().insert(id.clone());
        self.people.insert(
            id,
            Person {
                name,
                birth: birth.into(),
                movies: BTreeSet::new(),
            },
        );
    }

    pub fn add_movie(&mut self, id: MovieId, title: impl Into<String>, year: impl Into<String>) {
        self.movies.insert(
            id,
            Movie {
                title: title.into(),
                year: year.into(),
                stars: BTreeSet::new(),
            },
        );
    }

    /// Records that `person` starred in `movie`. Returns false, leaving the
    /// index untouched, when either id is unknown.
    pub fn add_star(&mut self, person: &PersonId, movie: &MovieId) -> bool {
        if !self.people.contains_key(person) || !self.movies.contains_key(movie) {
            return false;
        }
        if let Some(p) = self.people.get_mut(person) {
            p.movies.insert(movie.clone());
        }
        if let Some(m) = self.movies.get_mut(movie) {
            m.stars.insert(person.clone());
        }
        true
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    pub fn contains_person(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    /// All person ids whose name matches `name`, ignoring case.
    pub fn person_ids_for_name(&self, name: &str) -> Vec<PersonId> {
        self.names
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len_people(&self) -> usize {
        self.people.len()
    }

    pub fn len_movies(&self) -> usize {
        self.movies.len()
    }

    /// Returns every `(movie, co_star)` pair reachable from `person` through
    /// one of their movies. The person appears among their own neighbors,
    /// one pair per movie they starred in.
    pub fn neighbors_of(&self, person: &PersonId) -> Result<BTreeSet<(MovieId, PersonId)>> {
        let entry = self
            .people
            .get(person)
            .ok_or_else(|| DegreesError::UnknownEntity(person.clone()))?;

        let mut neighbors = BTreeSet::new();
        for movie_id in &entry.movies {
            if let Some(movie) = self.movies.get(movie_id) {
                for star in &movie.stars {
                    neighbors.insert((movie_id.clone(), star.clone()));
                }
            }
        }
        Ok(neighbors)
    }
}
