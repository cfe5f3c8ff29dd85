//! Size-based rolling log file.
//!
//! `<name>.log` is the live file; on rotation it becomes `<name>.log.1`,
//! older backups shift up, and anything past `max_backups` is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct RollingFileWriter {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: File,
    written: u64,
}

impl RollingFileWriter {
    pub fn open(dir: &Path, name: &str, max_bytes: u64, max_backups: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path,
            max_bytes: max_bytes.max(1),
            max_backups,
            file,
            written,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{}", index));
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_backups == 0 {
            fs::remove_file(&self.path)?;
        } else {
            let oldest = self.backup_path(self.max_backups);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for index in (1..self.max_backups).rev() {
                let from = self.backup_path(index);
                if from.exists() {
                    fs::rename(&from, self.backup_path(index + 1))?;
                }
            }
            fs::rename(&self.path, self.backup_path(1))?;
        }

        self.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotates_past_limit() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingFileWriter::open(dir.path(), "App", 10, 2).unwrap();

        writer.write_all(b"first-line\n").unwrap();
        writer.write_all(b"second\n").unwrap();
        writer.write_all(b"third\n").unwrap();
        writer.flush().unwrap();

        let live = fs::read_to_string(dir.path().join("App.log")).unwrap();
        let backup1 = fs::read_to_string(dir.path().join("App.log.1")).unwrap();
        let backup2 = fs::read_to_string(dir.path().join("App.log.2")).unwrap();
        assert_eq!(live, "third\n");
        assert_eq!(backup1, "second\n");
        assert_eq!(backup2, "first-line\n");
    }

    #[test]
    fn test_drops_backups_beyond_limit() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingFileWriter::open(dir.path(), "App", 4, 1).unwrap();
        for chunk in ["aaaa", "bbbb", "cccc"] {
            writer.write_all(chunk.as_bytes()).unwrap();
        }
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("App.log")).unwrap(), "cccc");
        assert_eq!(fs::read_to_string(dir.path().join("App.log.1")).unwrap(), "bbbb");
        assert!(!dir.path().join("App.log.2").exists());
    }

    #[test]
    fn test_reopen_appends_and_counts_existing_size() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut writer = RollingFileWriter::open(dir.path(), "App", 8, 1).unwrap();
            writer.write_all(b"12345").unwrap();
        }
        let mut writer = RollingFileWriter::open(dir.path(), "App", 8, 1).unwrap();
        writer.write_all(b"6789").unwrap();
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "6789");
        assert_eq!(fs::read_to_string(dir.path().join("App.log.1")).unwrap(), "12345");
    }
}
