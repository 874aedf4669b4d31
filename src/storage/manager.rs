use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::credentials::{self, Credentials};
use super::error::StorageError;
use crate::model::{Absence, Collection, Course, Grade, RecordStore, Student, Teacher};

/// File name of the record data inside the data directory.
pub const DATA_FILE: &str = "data.json";

/// File name of the credentials inside the data directory.
pub const CREDENTIALS_FILE: &str = "utilisateurs.json";

/// On-disk layout of the data file, borrowed for writing.
#[derive(Serialize)]
struct DataFileRef<'a> {
    etudiants: &'a [Student],
    enseignants: &'a [Teacher],
    cours: &'a [Course],
    notes: &'a [Grade],
    absences: &'a [Absence],
}

/// On-disk layout of the data file, owned for reading.
///
/// Every collection is optional; a missing key loads as empty.
#[derive(Deserialize)]
struct DataFile {
    #[serde(default)]
    etudiants: Collection<Student>,
    #[serde(default)]
    enseignants: Collection<Teacher>,
    #[serde(default)]
    cours: Collection<Course>,
    #[serde(default)]
    notes: Collection<Grade>,
    #[serde(default)]
    absences: Collection<Absence>,
}

impl<'a> DataFileRef<'a> {
    fn from_store(store: &'a RecordStore) -> Self {
        Self {
            etudiants: store.students.as_slice(),
            enseignants: store.teachers.as_slice(),
            cours: store.courses.as_slice(),
            notes: store.grades.as_slice(),
            absences: store.absences.as_slice(),
        }
    }
}

impl DataFile {
    fn into_store(self) -> RecordStore {
        RecordStore {
            students: self.etudiants,
            teachers: self.enseignants,
            courses: self.cours,
            grades: self.notes,
            absences: self.absences,
        }
    }
}

/// Loads a record store from a JSON data file.
///
/// A missing file is not an error: it yields an empty store.
pub fn load(path: &Path) -> Result<RecordStore, StorageError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "data file not found, starting empty");
            return Ok(RecordStore::new());
        }
        Err(e) => return Err(e.into()),
    };
    let data: DataFile = serde_json::from_str(&content)?;
    let store = data.into_store();
    info!(path = %path.display(), stats = ?store.stats(), "loaded records");
    Ok(store)
}

/// Writes the whole record store to a JSON data file, replacing it atomically.
pub fn save(path: &Path, store: &RecordStore) -> Result<(), StorageError> {
    let content = serde_json::to_vec(&DataFileRef::from_store(store))?;
    write_atomic(path, &content)?;
    info!(path = %path.display(), stats = ?store.stats(), "saved records");
    Ok(())
}

/// Writes `content` to a sibling temporary file, then renames it over `path`.
///
/// Readers see either the old file or the new one, never a partial write.
pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut tmp_name = path.file_name().map(OsString::from).unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let mut file = File::create(&tmp_path)?;
    file.write_all(content)?;
    file.sync_all()?;
    drop(file);

    fs::rename(&tmp_path, path).inspect_err(|_| {
        let _ = fs::remove_file(&tmp_path);
    })
}

/// Manages the data and credentials files in one directory.
pub struct DataManager {
    base_path: PathBuf,
}

impl DataManager {
    /// Creates a manager rooted at the given directory, creating it if needed.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_path = path.into();
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Returns the directory holding the data files.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the path of the record data file.
    pub fn data_path(&self) -> PathBuf {
        self.base_path.join(DATA_FILE)
    }

    /// Returns the path of the credentials file.
    pub fn credentials_path(&self) -> PathBuf {
        self.base_path.join(CREDENTIALS_FILE)
    }

    /// Loads the record store; empty if nothing was saved yet.
    pub fn load(&self) -> Result<RecordStore, StorageError> {
        load(&self.data_path())
    }

    /// Saves the record store, replacing the previous data file.
    pub fn save(&self, store: &RecordStore) -> Result<(), StorageError> {
        save(&self.data_path(), store)
    }

    /// Loads the credentials map; empty if no user registered yet.
    pub fn load_credentials(&self) -> Result<Credentials, StorageError> {
        credentials::load_credentials(&self.credentials_path())
    }

    /// Saves the credentials map.
    pub fn save_credentials(&self, credentials: &Credentials) -> Result<(), StorageError> {
        credentials::save_credentials(&self.credentials_path(), credentials)
    }

    /// Registers a new user and persists the credentials file.
    ///
    /// Returns [`StorageError::UserExists`] without touching the file if the
    /// username is taken.
    pub fn register_user(&self, username: &str, password: &str) -> Result<(), StorageError> {
        let mut credentials = self.load_credentials()?;
        credentials.register(username, password)?;
        self.save_credentials(&credentials)
    }

    /// Returns `true` if `username` is registered with exactly `password`.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<bool, StorageError> {
        Ok(self.load_credentials()?.authenticate(username, password))
    }
}
