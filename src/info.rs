use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::card::{Card, DECK_SIZE};

/// File under the resource directory listing one asset path per identity.
pub const PATHS_FILE: &str = "paths.txt";
/// File under the resource directory listing one display name per identity.
pub const NAMES_FILE: &str = "names.txt";

/// A card resource failed to load at startup. Both variants name the
/// offending file so the user can fix the installation.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("cannot read card resource {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("card resource {path} is truncated: expected 78 lines, found {found}")]
    Truncated { path: PathBuf, found: usize },
}

/// Identity → (asset path, localized display name) lookup, populated once at
/// startup from two line-oriented resources in canonical order.
#[derive(Debug)]
pub struct CardInfo {
    paths: Vec<String>,
    names: Vec<String>,
}

impl CardInfo {
    /// Load both tables from `res_dir`. Must succeed before any deck or
    /// terminal state is created; a missing or truncated file is fatal.
    pub fn load(res_dir: &Path) -> Result<Self, ResourceError> {
        let paths = read_table(&res_dir.join(PATHS_FILE))?;
        let names = read_table(&res_dir.join(NAMES_FILE))?;
        Ok(CardInfo { paths, names })
    }

    /// Display asset path for `card`.
    pub fn path(&self, card: Card) -> &str {
        &self.paths[card.index()]
    }

    /// Localized display name for `card`.
    pub fn name(&self, card: Card) -> &str {
        &self.names[card.index()]
    }

    #[cfg(test)]
    pub(crate) fn stub() -> Self {
        CardInfo {
            paths: (0..DECK_SIZE).map(|i| format!("res/cards/{i}.png")).collect(),
            names: (0..DECK_SIZE).map(|i| format!("Card {i}")).collect(),
        }
    }
}

/// Read the first 78 lines of `path`. Lines past the 78th are ignored; fewer
/// than 78 is an error.
fn read_table(path: &Path) -> Result<Vec<String>, ResourceError> {
    let text = fs::read_to_string(path).map_err(|source| ResourceError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<String> = text.lines().take(DECK_SIZE).map(str::to_owned).collect();
    if lines.len() < DECK_SIZE {
        return Err(ResourceError::Truncated {
            path: path.to_path_buf(),
            found: lines.len(),
        });
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_lines(dir: &Path, file: &str, count: usize) {
        let mut f = fs::File::create(dir.join(file)).unwrap();
        for i in 0..count {
            writeln!(f, "line {i}").unwrap();
        }
    }

    #[test]
    fn loads_full_tables() {
        let dir = tempfile::tempdir().unwrap();
        write_lines(dir.path(), PATHS_FILE, 78);
        write_lines(dir.path(), NAMES_FILE, 78);

        let info = CardInfo::load(dir.path()).unwrap();
        assert_eq!(info.path(Card::from_index(0).unwrap()), "line 0");
        assert_eq!(info.name(Card::from_index(77).unwrap()), "line 77");
    }

    #[test]
    fn truncated_names_file_is_fatal_and_named() {
        let dir = tempfile::tempdir().unwrap();
        write_lines(dir.path(), PATHS_FILE, 78);
        write_lines(dir.path(), NAMES_FILE, 77);

        let err = CardInfo::load(dir.path()).unwrap_err();
        match &err {
            ResourceError::Truncated { path, found } => {
                assert!(path.ends_with(NAMES_FILE));
                assert_eq!(*found, 77);
            }
            other => panic!("expected Truncated, got {other:?}"),
        }
        assert!(err.to_string().contains(NAMES_FILE));
    }

    #[test]
    fn missing_paths_file_is_fatal_and_named() {
        let dir = tempfile::tempdir().unwrap();
        write_lines(dir.path(), NAMES_FILE, 78);

        let err = CardInfo::load(dir.path()).unwrap_err();
        assert!(matches!(err, ResourceError::Unreadable { .. }));
        assert!(err.to_string().contains(PATHS_FILE));
    }

    #[test]
    fn extra_lines_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_lines(dir.path(), PATHS_FILE, 80);
        write_lines(dir.path(), NAMES_FILE, 78);

        let info = CardInfo::load(dir.path()).unwrap();
        assert_eq!(info.path(Card::from_index(77).unwrap()), "line 77");
    }

    #[test]
    fn full_tables_permit_a_reading() {
        use crate::card::Scope;
        use crate::deck::Deck;
        use crate::divine::draw_spread;

        let dir = tempfile::tempdir().unwrap();
        write_lines(dir.path(), PATHS_FILE, 78);
        write_lines(dir.path(), NAMES_FILE, 78);
        let info = CardInfo::load(dir.path()).unwrap();

        let mut deck = Deck::seeded(Scope::Major, 8);
        let result = draw_spread(&mut deck);
        assert!(!info.name(result.now.card).is_empty());
    }
}
