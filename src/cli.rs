use std::io::{BufRead, Write};

use crate::error::Result;
use crate::graph_index::GraphIndex;
use crate::model::{PathStep, PersonId};

/// Resolves a typed name to a person id.
///
/// When several people share the name, lists them on `output` and reads the
/// intended id from `input`. Returns `None` when nobody matches or the answer
/// is not one of the listed ids.
pub fn resolve_person<R: BufRead, W: Write>(
    index: &GraphIndex,
    name: &str,
    input: &mut R,
    output: &mut W,
) -> Result<Option<PersonId>> {
    let mut candidates = index.person_ids_for_name(name.trim());
    match candidates.len() {
        0 => Ok(None),
        1 => Ok(candidates.pop()),
        _ => {
            writeln!(output, "Which '{}'?", name.trim())?;
            for id in &candidates {
                if let Some(person) = index.person(id) {
                    writeln!(
                        output,
                        "ID: {}, Name: {}, Birth: {}",
                        id, person.name, person.birth
                    )?;
                }
            }
            let answer = prompt(input, output, "Intended Person ID: ")?;
            Ok(candidates.into_iter().find(|id| id.as_str() == answer))
        }
    }
}

/// Writes `label`, flushes, and returns the next input line without its line
/// ending. End of input reads as an empty answer.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prints the degrees of separation and one line per hop, or
/// `Not connected.` for `None`.
pub fn render_path<W: Write>(
    index: &GraphIndex,
    source: &PersonId,
    path: Option<&[PathStep]>,
    output: &mut W,
) -> Result<()> {
    let Some(path) = path else {
        writeln!(output, "Not connected.")?;
        return Ok(());
    };

    writeln!(output, "{} degrees of separation.", path.len())?;
    let mut previous = source;
    for (i, step) in path.iter().enumerate() {
        let from = person_name(index, previous);
        let to = person_name(index, &step.person);
        let title = index
            .movie(&step.movie)
            .map_or(step.movie.as_str(), |movie| movie.title.as_str());
        writeln!(output, "{}: {} and {} starred in {}", i + 1, from, to, title)?;
        previous = &step.person;
    }
    Ok(())
}

fn person_name<'a>(index: &'a GraphIndex, id: &'a PersonId) -> &'a str {
    index.person(id).map_or(id.as_str(), |person| person.name.as_str())
}
