use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::types::DATA_FILE;

/// Persistence seam for a table's on-disk mirror file. The mirror is a
/// derived copy of the in-memory row list, never read back after startup.
pub trait MirrorStore: Send + Sync {
    /// Create the table directory and an empty mirror file (header only)
    /// when none exists yet.
    fn ensure_table_file(&self, table: &str, columns: &[String]) -> io::Result<()>;

    /// Read every row line of the mirror file, skipping the header.
    fn load_rows(&self, table: &str) -> io::Result<Vec<String>>;

    /// Append one row line. Used by INSERT.
    fn append_row(&self, table: &str, row: &str) -> io::Result<()>;

    /// Rewrite the whole file: header line, then one line per row. Used by
    /// DELETE.
    fn rewrite(&self, table: &str, columns: &[String], rows: &[String]) -> io::Result<()>;
}

pub struct FileMirrorStore {
    database_dir: PathBuf,
}

impl FileMirrorStore {

    pub fn new(database_dir: impl AsRef<Path>) -> Self {
        Self { database_dir: database_dir.as_ref().to_path_buf() }
    }

    fn data_file(&self, table: &str) -> PathBuf {
        self.database_dir.join(table).join(DATA_FILE)
    }
}

impl MirrorStore for FileMirrorStore {

    fn ensure_table_file(&self, table: &str, columns: &[String]) -> io::Result<()> {
        let path = self.data_file(table);
        fs::create_dir_all(self.database_dir.join(table))?;

        if !path.exists() {
            let mut file = File::create(&path)?;
            writeln!(file, "{}", columns.join(","))?;
        }
        Ok(())
    }

    fn load_rows(&self, table: &str) -> io::Result<Vec<String>> {
        let file = File::open(self.data_file(table))?;
        let mut rows = Vec::new();

        for (i, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if i == 0 {
                continue; // header
            }
            rows.push(line);
        }
        Ok(rows)
    }

    fn append_row(&self, table: &str, row: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(self.data_file(table))?;
        writeln!(file, "{row}")?;
        file.flush()
    }

    fn rewrite(&self, table: &str, columns: &[String], rows: &[String]) -> io::Result<()> {
        let mut file = File::create(self.data_file(table))?;
        writeln!(file, "{}", columns.join(","))?;
        for row in rows {
            writeln!(file, "{row}")?;
        }
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn columns() -> Vec<String> {
        vec!["id".to_string(), "amount".to_string()]
    }

    #[test]
    fn test_ensure_creates_header_only_file() {
        let tmp = TempDir::new().unwrap();
        let store = FileMirrorStore::new(tmp.path());

        store.ensure_table_file("orders", &columns()).unwrap();

        let text = fs::read_to_string(tmp.path().join("orders").join(DATA_FILE)).unwrap();
        assert_eq!(text, "id,amount\n");
        assert!(store.load_rows("orders").unwrap().is_empty());
    }

    #[test]
    fn test_ensure_keeps_existing_file() {
        let tmp = TempDir::new().unwrap();
        let store = FileMirrorStore::new(tmp.path());

        store.ensure_table_file("orders", &columns()).unwrap();
        store.append_row("orders", "1,100").unwrap();

        // a second ensure must not truncate existing data
        store.ensure_table_file("orders", &columns()).unwrap();
        assert_eq!(store.load_rows("orders").unwrap(), vec!["1,100".to_string()]);
    }

    #[test]
    fn test_append_preserves_order() {
        let tmp = TempDir::new().unwrap();
        let store = FileMirrorStore::new(tmp.path());
        store.ensure_table_file("orders", &columns()).unwrap();

        store.append_row("orders", "1,100").unwrap();
        store.append_row("orders", "2,200").unwrap();
        store.append_row("orders", "3,300").unwrap();

        assert_eq!(
            store.load_rows("orders").unwrap(),
            vec!["1,100".to_string(), "2,200".to_string(), "3,300".to_string()]
        );
    }

    #[test]
    fn test_rewrite_replaces_contents() {
        let tmp = TempDir::new().unwrap();
        let store = FileMirrorStore::new(tmp.path());
        store.ensure_table_file("orders", &columns()).unwrap();
        store.append_row("orders", "1,100").unwrap();
        store.append_row("orders", "2,200").unwrap();

        store.rewrite("orders", &columns(), &["2,200".to_string()]).unwrap();

        let text = fs::read_to_string(tmp.path().join("orders").join(DATA_FILE)).unwrap();
        assert_eq!(text, "id,amount\n2,200\n");
    }
}
