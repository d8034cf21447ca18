// Name list utilities and the file collaborator.
//
// Everything here is a plain function so the ui layer stays the only owner
// of state. The RNG is always passed in by the caller.

use std::fs;
use std::io::{self, BufRead};

use rand::Rng;

/// Frozen default seed used when the `random` source is chosen.
pub const DEFAULT_SEED: [&str; 28] = [
    "John", "Jane", "Alice", "Bob", "Charlie", "David", "Eve", "Frank", "Grace", "Heidi", "Ivan",
    "Judy", "Kevin", "Laura", "Michael", "Nancy", "Oliver", "Peggy", "Quincy", "Rita", "Steve",
    "Tina", "Ursula", "Victor", "Wendy", "Xavier", "Yvonne", "Zack",
];

/// Errors from resolving a name source. Carried in the model as display
/// data; never crosses the update boundary as a panic.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("empty file path")]
    EmptyPath,
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// In-place Fisher-Yates shuffle. Sequences of length <= 1 are left as-is.
pub fn shuffle<R: Rng + ?Sized>(rng: &mut R, items: &mut [String]) {
    if items.len() <= 1 {
        return;
    }
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Returns the default seed as an owned, shuffled list.
pub fn shuffled_seed<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let mut names: Vec<String> = DEFAULT_SEED.iter().map(|s| s.to_string()).collect();
    shuffle(rng, &mut names);
    names
}

/// Splits `s` on `sep` and trims every resulting token.
pub fn split_and_trim(s: &str, sep: char) -> Vec<String> {
    s.trim().split(sep).map(|t| t.trim().to_string()).collect()
}

/// Reads `path` line by line; each line is trimmed and becomes an entry.
/// Empty lines are kept — an all-empty result is a legitimate empty list.
pub fn read_names_from_file(path: &str) -> Result<Vec<String>, SourceError> {
    if path.is_empty() {
        return Err(SourceError::EmptyPath);
    }
    let file = fs::File::open(path).map_err(|source| SourceError::Read {
        path: path.to_string(),
        source,
    })?;
    let mut names = Vec::new();
    for line in io::BufReader::new(file).lines() {
        let line = line.map_err(|source| SourceError::Read {
            path: path.to_string(),
            source,
        })?;
        names.push(line.trim().to_string());
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::env;
    use std::fs;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut names: Vec<String> = DEFAULT_SEED.iter().map(|s| s.to_string()).collect();
        shuffle(&mut rng, &mut names);
        assert_eq!(names.len(), DEFAULT_SEED.len());
        let mut sorted = names.clone();
        sorted.sort();
        let mut expected: Vec<String> = DEFAULT_SEED.iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn shuffle_leaves_short_sequences_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<String> = vec![];
        shuffle(&mut rng, &mut empty);
        assert!(empty.is_empty());
        let mut one = vec!["solo".to_string()];
        shuffle(&mut rng, &mut one);
        assert_eq!(one, vec!["solo".to_string()]);
    }

    #[test]
    fn shuffle_with_fixed_seed_is_deterministic() {
        let mut a: Vec<String> = DEFAULT_SEED.iter().map(|s| s.to_string()).collect();
        let mut b = a.clone();
        shuffle(&mut StdRng::seed_from_u64(42), &mut a);
        shuffle(&mut StdRng::seed_from_u64(42), &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn split_and_trim_trims_every_token() {
        assert_eq!(split_and_trim("a, b ,c", ','), vec!["a", "b", "c"]);
        assert_eq!(split_and_trim("  Ann, Bob,Cy ", ','), vec!["Ann", "Bob", "Cy"]);
    }

    #[test]
    fn trimming_is_idempotent() {
        let once = split_and_trim("  x ,y  ", ',');
        let twice: Vec<String> = once.iter().map(|s| s.trim().to_string()).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn read_names_from_file_trims_lines() {
        let path = env::temp_dir().join("namepicker_read_test.txt");
        fs::write(&path, "  Ann \nBob\n Cy\n").unwrap();
        let names = read_names_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(names, vec!["Ann", "Bob", "Cy"]);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn read_names_from_file_reports_missing_file() {
        let err = read_names_from_file("/nonexistent/namepicker.txt").unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/namepicker.txt"));
    }

    #[test]
    fn read_names_from_file_rejects_empty_path() {
        assert!(matches!(read_names_from_file(""), Err(SourceError::EmptyPath)));
    }
}
