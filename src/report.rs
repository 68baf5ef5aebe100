//! Report rendering and saving.
//!
//! The report format is fixed: a `File:` header naming the source, a blank
//! line, then one `word: count` line per tag in ascending alphabetical
//! order. The same bytes go to the screen and to a saved file.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::freq::FrequencyMap;

/// Render `tags` as report text for the given source file.
pub fn render(source: &Path, tags: &FrequencyMap) -> String {
    let mut out = format!("File: {}\n\n", source.display());
    for (word, count) in tags.iter() {
        out.push_str(&format!("{word}: {count}\n"));
    }
    out
}

/// Write the report for `tags` to `target`.
///
/// Leaves `tags` untouched; a failed write surfaces as
/// [`Error::OutputWrite`] and nothing else changes.
pub fn save(target: &Path, source: &Path, tags: &FrequencyMap) -> Result<()> {
    fs::write(target, render(source, tags)).map_err(|err| Error::OutputWrite {
        path: target.to_path_buf(),
        source: err,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::stopwords::StopWordSet;

    fn sample_map() -> FrequencyMap {
        let stop = StopWordSet::from_list(&["the"]);
        FrequencyMap::extract("The Quick fox; the LAZY fox!", &stop)
    }

    #[test]
    fn test_render_format() {
        let text = render(Path::new("notes.txt"), &sample_map());
        assert_eq!(text, "File: notes.txt\n\nfox: 2\nlazy: 1\nquick: 1\n");
    }

    #[test]
    fn test_render_empty_map_is_header_and_blank_line_only() {
        let text = render(Path::new("empty.txt"), &FrequencyMap::default());
        assert_eq!(text, "File: empty.txt\n\n");
    }

    #[test]
    fn test_save_writes_rendered_bytes() {
        let dir = tempfile::tempdir().expect("temp dir");
        let target = dir.path().join("tags.txt");
        let map = sample_map();

        save(&target, Path::new("notes.txt"), &map).expect("save");

        let written = fs::read_to_string(&target).expect("read back");
        assert_eq!(written, render(Path::new("notes.txt"), &map));
    }

    #[test]
    fn test_save_failure_is_output_write_error() {
        let map = sample_map();
        let target = PathBuf::from("no/such/dir/tags.txt");

        let err = save(&target, Path::new("notes.txt"), &map).unwrap_err();
        assert!(matches!(err, Error::OutputWrite { .. }));
    }
}
