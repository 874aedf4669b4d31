use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::export::MarkdownRenderer;
use crate::model::{
    Absence, Collection, CollectionKind, Course, Grade, Record, RecordError, RecordStore, SortKey,
    SortOrder, Student, Teacher,
};
use crate::query;
use crate::storage::{
    DataManager, ExportKind, StorageError, default_export_path, export_csv, export_document,
    export_plain_text,
};

use super::console::{Console, Tone};
use super::error::AppError;
use super::menu::{MainChoice, ManageChoice, SearchChoice, Wording, pick, wording};

const CHOOSE: &str = "Choisissez une option : ";
const INVALID_OPTION: &str = "Option invalide. Veuillez choisir une option valide.";

/// Top-level interactive session state.
pub struct App<C: Console> {
    console: C,
    manager: DataManager,
    export_dir: PathBuf,
    renderer: MarkdownRenderer,
    store: RecordStore,
    should_quit: bool,
}

impl<C: Console> App<C> {
    /// Creates an app with an empty store. Data is loaded when [`run`](Self::run) starts.
    pub fn new(manager: DataManager, export_dir: impl Into<PathBuf>, console: C) -> Self {
        Self {
            console,
            manager,
            export_dir: export_dir.into(),
            renderer: MarkdownRenderer,
            store: RecordStore::new(),
            should_quit: false,
        }
    }

    /// Loads saved data, optionally runs the login step, then loops on the
    /// main menu until the user quits or input ends.
    pub fn run(&mut self, login: bool) -> Result<(), AppError> {
        match self.session(login) {
            Err(AppError::InputClosed) => {
                debug!("input closed, leaving");
                self.quit()
            }
            other => other,
        }
    }

    fn session(&mut self, login: bool) -> Result<(), AppError> {
        self.load_data()?;
        if login {
            self.login()?;
        }
        while !self.should_quit {
            self.show_main_menu()?;
            let input = self.console.ask(CHOOSE)?;
            self.handle_main(&input)?;
        }
        Ok(())
    }

    /// Dispatches one main menu answer.
    pub fn handle_main(&mut self, input: &str) -> Result<(), AppError> {
        let Some(choice) = pick(MainChoice::all(), input) else {
            return self.say(Tone::Failure, INVALID_OPTION);
        };
        debug!(?choice, "main menu");
        match choice {
            MainChoice::Manage(kind) => self.manage(kind),
            MainChoice::ListStudents => list_records(
                &mut self.console,
                &self.store.students,
                wording(CollectionKind::Students),
                "Aucun étudiant n'est enregistré.",
            ),
            MainChoice::ListTeachers => list_records(
                &mut self.console,
                &self.store.teachers,
                wording(CollectionKind::Teachers),
                "Aucun enseignant n'est enregistré.",
            ),
            MainChoice::ListAbsences => list_records(
                &mut self.console,
                &self.store.absences,
                wording(CollectionKind::Absences),
                "Aucune absence n'est enregistrée.",
            ),
            MainChoice::Search => self.search(),
            MainChoice::Statistics => self.show_statistics(),
            MainChoice::Export => self.export_all(),
            MainChoice::Save => self.save_data(),
            MainChoice::Load => self.load_data(),
            MainChoice::Quit => self.quit(),
        }
    }

    /// Returns the records of the current session.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Returns the console the app talks to.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Returns `true` once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn say(&mut self, tone: Tone, text: &str) -> Result<(), AppError> {
        self.console.say(tone, text)
    }

    // Reports a failed storage operation; the session carries on.
    fn report(&mut self, error: &StorageError) -> Result<(), AppError> {
        warn!(%error, "storage operation failed");
        self.say(Tone::Failure, &format!("Erreur : {error}"))
    }

    fn quit(&mut self) -> Result<(), AppError> {
        self.should_quit = true;
        self.say(Tone::Meta, "Au revoir!")
    }

    fn show_main_menu(&mut self) -> Result<(), AppError> {
        self.say(Tone::Title, "Menu:")?;
        for (i, choice) in MainChoice::all().iter().enumerate() {
            let line = format!("{}. {}", i + 1, choice.label());
            self.say(choice.tone(), &line)?;
        }
        Ok(())
    }

    // --- login ---

    fn login(&mut self) -> Result<(), AppError> {
        loop {
            let choice = self
                .console
                .ask("Voulez-vous (1) vous authentifier ou (2) enregistrer un utilisateur? ")?;
            match choice.as_str() {
                "1" => return self.authenticate(),
                "2" => return self.register(),
                _ => self.say(
                    Tone::Plain,
                    "Choix invalide. Veuillez choisir une option valide.",
                )?,
            }
        }
    }

    fn authenticate(&mut self) -> Result<(), AppError> {
        let username = self.console.ask("Entrez votre nom d'utilisateur : ")?;
        let password = self.console.ask_secret("Entrez votre mot de passe : ")?;
        match self.manager.authenticate(&username, &password) {
            Ok(true) => {
                info!(%username, "authenticated");
                self.say(Tone::Success, "Authentification réussie!")
            }
            Ok(false) => self.say(
                Tone::Failure,
                "Nom d'utilisateur ou mot de passe incorrect.",
            ),
            Err(e) => self.report(&e),
        }
    }

    fn register(&mut self) -> Result<(), AppError> {
        let mut credentials = match self.manager.load_credentials() {
            Ok(credentials) => credentials,
            Err(e) => return self.report(&e),
        };
        let username = self.console.ask("Entrez votre nom d'utilisateur : ")?;
        if credentials.contains(&username) {
            return self.say(Tone::Warning, "Cet utilisateur existe déjà.");
        }
        let password = self.console.ask_secret("Entrez votre mot de passe : ")?;
        let saved = credentials
            .register(&username, &password)
            .and_then(|()| self.manager.save_credentials(&credentials));
        match saved {
            Ok(()) => {
                info!(%username, "registered user");
                self.say(Tone::Success, "Utilisateur enregistré avec succès!")
            }
            Err(e) => self.report(&e),
        }
    }

    // --- management submenus ---

    fn manage(&mut self, kind: CollectionKind) -> Result<(), AppError> {
        let w = wording(kind);
        let choices = ManageChoice::available(kind);
        self.say(Tone::Title, w.title)?;
        for (i, choice) in choices.iter().enumerate() {
            let line = format!("{}. {}", i + 1, choice.label(kind));
            self.say(choice.tone(), &line)?;
        }
        let input = self.console.ask(CHOOSE)?;
        match pick(choices, &input) {
            None => self.say(Tone::Failure, INVALID_OPTION),
            Some(ManageChoice::Back) => Ok(()),
            Some(ManageChoice::Add) => self.add(kind),
            Some(ManageChoice::Edit) => self.edit(kind),
            Some(ManageChoice::Delete) => self.delete(kind),
            Some(ManageChoice::SortStudents) => self.sort_students(),
            Some(ManageChoice::ExportCsv) => self.export_students_csv(),
            Some(ManageChoice::ExportDocument) => self.export_students_document(),
        }
    }

    fn add(&mut self, kind: CollectionKind) -> Result<(), AppError> {
        let w = wording(kind);
        match kind {
            CollectionKind::Students => {
                let name = self.console.ask("Entrez le nom de l'étudiant : ")?;
                let added = self
                    .store
                    .add_student(name)
                    .map(|s| format!("{} a été ajouté avec succès.", s.name));
                match added {
                    Ok(message) => self.say(Tone::Success, &message),
                    Err(RecordError::DuplicateKey(_)) => {
                        self.say(Tone::Warning, "Cet étudiant existe déjà.")
                    }
                    Err(e) => self.say(Tone::Failure, &e.to_string()),
                }
            }
            CollectionKind::Teachers => {
                let name = self.console.ask("Entrez le nom de l'enseignant : ")?;
                self.store.teachers.add(Teacher::new(name));
                self.say(Tone::Success, &w.done("ajouté"))
            }
            CollectionKind::Courses => {
                let name = self.console.ask("Entrez le nom du cours : ")?;
                self.store.courses.add(Course::new(name));
                self.say(Tone::Success, &w.done("ajouté"))
            }
            CollectionKind::Grades => {
                let student = self.console.ask("Entrez le nom de l'étudiant : ")?;
                let value = self.console.ask("Entrez la note : ")?;
                self.store.grades.add(Grade::new(student, value));
                self.say(Tone::Success, &w.done("ajouté"))
            }
            CollectionKind::Absences => {
                let student = self.console.ask("Entrez le nom de l'étudiant : ")?;
                let date = self
                    .console
                    .ask("Entrez la date de l'absence (format YYYY-MM-DD) : ")?;
                self.store.absences.add(Absence::new(student, date));
                self.say(Tone::Success, &w.done("ajouté"))
            }
        }
    }

    fn edit(&mut self, kind: CollectionKind) -> Result<(), AppError> {
        let w = wording(kind);
        let console = &mut self.console;
        match kind {
            CollectionKind::Students => edit_record(console, &mut self.store.students, w),
            CollectionKind::Teachers => edit_record(console, &mut self.store.teachers, w),
            CollectionKind::Courses => edit_record(console, &mut self.store.courses, w),
            CollectionKind::Grades => edit_record(console, &mut self.store.grades, w),
            CollectionKind::Absences => edit_record(console, &mut self.store.absences, w),
        }
    }

    fn delete(&mut self, kind: CollectionKind) -> Result<(), AppError> {
        let w = wording(kind);
        let console = &mut self.console;
        match kind {
            CollectionKind::Students => delete_record(console, &mut self.store.students, w),
            CollectionKind::Teachers => delete_record(console, &mut self.store.teachers, w),
            CollectionKind::Courses => delete_record(console, &mut self.store.courses, w),
            CollectionKind::Grades => delete_record(console, &mut self.store.grades, w),
            CollectionKind::Absences => delete_record(console, &mut self.store.absences, w),
        }
    }

    fn sort_students(&mut self) -> Result<(), AppError> {
        let key = match self
            .console
            .ask("Trier par (1) nom (2) date d'ajout : ")?
            .as_str()
        {
            "1" => SortKey::Name,
            "2" => SortKey::DateAdded,
            _ => return self.say(Tone::Warning, "Critère invalide."),
        };
        let order = match self
            .console
            .ask("Ordre (1) croissant (2) décroissant : ")?
            .as_str()
        {
            "" | "1" => SortOrder::Ascending,
            "2" => SortOrder::Descending,
            _ => return self.say(Tone::Warning, "Critère invalide."),
        };
        self.store.students.sort(key, order);
        let message = match key {
            SortKey::Name => "Les étudiants ont été triés par nom.",
            SortKey::DateAdded => "Les étudiants ont été triés par date d'ajout.",
        };
        self.say(Tone::Success, message)
    }

    fn export_students_csv(&mut self) -> Result<(), AppError> {
        let path = default_export_path(&self.export_dir, ExportKind::Csv, &self.renderer);
        match export_csv(self.store.students.as_slice(), &path) {
            Ok(()) => self.say(Tone::Success, &students_exported(&path)),
            Err(e) => self.report(&e),
        }
    }

    fn export_students_document(&mut self) -> Result<(), AppError> {
        let path = default_export_path(&self.export_dir, ExportKind::Document, &self.renderer);
        match export_document(self.store.students.as_slice(), &self.renderer, &path) {
            Ok(()) => self.say(Tone::Success, &students_exported(&path)),
            Err(e) => self.report(&e),
        }
    }

    // --- search ---

    fn search(&mut self) -> Result<(), AppError> {
        self.say(Tone::Tool, "Rechercher:")?;
        for (i, choice) in SearchChoice::all().iter().enumerate() {
            let line = format!("{}. {}", i + 1, choice.label());
            self.say(choice.tone(), &line)?;
        }
        let input = self.console.ask(CHOOSE)?;
        let Some(choice) = pick(SearchChoice::all(), &input) else {
            return self.say(Tone::Failure, INVALID_OPTION);
        };
        debug!(?choice, "search menu");

        let store = &self.store;
        let console = &mut self.console;
        match choice {
            SearchChoice::Back => Ok(()),
            SearchChoice::StudentsByDate => {
                let date = console.ask("Entrez la date (format YYYY-MM-DD) à rechercher : ")?;
                match query::search_by_added_date(&store.students, &date) {
                    Ok(hits) => show_results(
                        console,
                        "Étudiants trouvés :",
                        hits.into_iter().map(describe_student).collect(),
                        "Aucun étudiant trouvé pour cette date.",
                    ),
                    Err(e) => {
                        debug!(%e, "rejected search date");
                        console.say(
                            Tone::Failure,
                            "Format de date invalide. Assurez-vous d'utiliser le format YYYY-MM-DD.",
                        )
                    }
                }
            }
            SearchChoice::StudentsByName => {
                let name = console.ask("Entrez le nom de l'étudiant à rechercher : ")?;
                let hits = query::search_by_name(&store.students, &name);
                show_results(
                    console,
                    "Étudiants trouvés :",
                    hits.into_iter().map(describe_student).collect(),
                    "Aucun étudiant trouvé pour ce nom.",
                )
            }
            SearchChoice::TeachersByName => {
                let name = console.ask("Entrez le nom de l'enseignant à rechercher : ")?;
                let hits = query::search_by_name(&store.teachers, &name);
                show_results(
                    console,
                    "Enseignants trouvés :",
                    hits.iter().map(ToString::to_string).collect(),
                    "Aucun enseignant trouvé pour ce nom.",
                )
            }
            SearchChoice::CoursesByName => {
                let name = console.ask("Entrez le nom du cours à rechercher : ")?;
                let hits = query::search_by_name(&store.courses, &name);
                show_results(
                    console,
                    "Cours trouvés :",
                    hits.iter().map(ToString::to_string).collect(),
                    "Aucun cours trouvé pour ce nom.",
                )
            }
            SearchChoice::GradesByStudent => {
                let name = console.ask("Entrez le nom de l'étudiant : ")?;
                let hits = query::search_grades_by_student(&store.grades, &name);
                show_results(
                    console,
                    "Notes trouvées :",
                    hits.iter().map(ToString::to_string).collect(),
                    "Aucune note trouvée pour cet étudiant.",
                )
            }
            SearchChoice::AbsencesByStudent => {
                let name = console.ask("Entrez le nom de l'étudiant : ")?;
                let hits = query::search_absences_by_student(&store.absences, &name);
                show_results(
                    console,
                    "Absences trouvées :",
                    hits.iter().map(ToString::to_string).collect(),
                    "Aucune absence trouvée pour cet étudiant.",
                )
            }
        }
    }

    // --- statistics, export, persistence ---

    fn show_statistics(&mut self) -> Result<(), AppError> {
        let stats = self.store.stats();
        self.say(Tone::Tool, "Statistiques:")?;
        self.say(Tone::Entry, &format!("Nombre d'étudiants : {}", stats.students))?;
        self.say(Tone::Entry, &format!("Nombre d'enseignants : {}", stats.teachers))?;
        self.say(Tone::Entry, &format!("Nombre de cours : {}", stats.courses))?;
        self.say(Tone::Entry, &format!("Nombre de notes : {}", stats.grades))?;
        self.say(Tone::Entry, &format!("Nombre d'absences : {}", stats.absences))
    }

    fn export_all(&mut self) -> Result<(), AppError> {
        let path = default_export_path(&self.export_dir, ExportKind::PlainText, &self.renderer);
        match export_plain_text(&self.store, &path) {
            Ok(()) => {
                let message = format!("Données exportées dans '{}' avec succès!", path.display());
                self.say(Tone::Success, &message)
            }
            Err(e) => self.report(&e),
        }
    }

    fn save_data(&mut self) -> Result<(), AppError> {
        match self.manager.save(&self.store) {
            Ok(()) => self.say(Tone::Success, "Données sauvegardées avec succès!"),
            Err(e) => self.report(&e),
        }
    }

    // Replaces the session with the saved data; keeps it on failure.
    fn load_data(&mut self) -> Result<(), AppError> {
        match self.manager.load() {
            Ok(store) => {
                self.store = store;
                self.say(Tone::Success, "Données chargées avec succès!")
            }
            Err(e) => self.report(&e),
        }
    }
}

/// Writes the plain-text export of the saved data without starting a session.
///
/// Returns the path written.
pub fn export_once(manager: &DataManager, export_dir: &Path) -> Result<PathBuf, StorageError> {
    let store = manager.load()?;
    let path = default_export_path(export_dir, ExportKind::PlainText, &MarkdownRenderer);
    export_plain_text(&store, &path)?;
    Ok(path)
}

fn students_exported(path: &Path) -> String {
    format!(
        "Les étudiants ont été exportés dans le fichier '{}'.",
        path.display()
    )
}

fn describe_student(student: &Student) -> String {
    if student.date_added.is_empty() {
        format!("{} - Date non disponible", student.name)
    } else {
        student.to_string()
    }
}

fn list_records<T: Record, C: Console>(
    console: &mut C,
    records: &Collection<T>,
    w: &Wording,
    empty: &str,
) -> Result<(), AppError> {
    console.say(Tone::Tool, &format!("Liste des {}:", w.plural))?;
    if records.is_empty() {
        return console.say(Tone::Warning, empty);
    }
    for (i, record) in records.iter().enumerate() {
        console.say(Tone::Plain, &format!("{}. {record}", i + 1))?;
    }
    Ok(())
}

fn show_results<C: Console>(
    console: &mut C,
    header: &str,
    lines: Vec<String>,
    empty: &str,
) -> Result<(), AppError> {
    if lines.is_empty() {
        return console.say(Tone::Warning, empty);
    }
    console.say(Tone::Results, header)?;
    for (i, line) in lines.iter().enumerate() {
        console.say(Tone::Plain, &format!("{}. {line}", i + 1))?;
    }
    console.say(Tone::Plain, "")
}

// Asks for the record to change, then for its new value. The new value is
// only asked for once the record is known to exist.
fn edit_record<T: Record, C: Console>(
    console: &mut C,
    records: &mut Collection<T>,
    w: &Wording,
) -> Result<(), AppError> {
    let target = console.ask(w.edit_target_prompt)?;
    if let Err(e) = records.find_by_exact_field(w.match_field, &target) {
        debug!(%e, "edit target missing");
        return console.say(Tone::Failure, &w.not_found());
    }
    let new_value = console.ask(w.new_value_prompt)?;
    match records.update_field(w.match_field, &target, w.edit_field, new_value) {
        Ok(()) => console.say(Tone::Success, &w.done("modifié")),
        Err(e) => console.say(Tone::Failure, &e.to_string()),
    }
}

fn delete_record<T: Record, C: Console>(
    console: &mut C,
    records: &mut Collection<T>,
    w: &Wording,
) -> Result<(), AppError> {
    let target = console.ask(w.delete_target_prompt)?;
    match records.remove(w.match_field, &target) {
        Ok(_) => console.say(Tone::Success, &w.done("supprimé")),
        Err(e) => {
            debug!(%e, "delete target missing");
            console.say(Tone::Failure, &w.not_found())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use tempfile::{TempDir, tempdir};

    use super::*;
    use crate::cli::console::ScriptedConsole;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 1, day)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap()
    }

    fn make_store() -> RecordStore {
        let mut store = RecordStore::new();
        store.add_student_at("Bob", at(2, 9)).unwrap();
        store.add_student_at("Alice", at(1, 8)).unwrap();
        store.teachers.add(Teacher::new("Dupont"));
        store.courses.add(Course::new("Maths"));
        store.grades.add(Grade::new("Alice", "12"));
        store.grades.add(Grade::new("Alice", "18"));
        store.absences.add(Absence::new("Bob", "2023-02-01"));
        store
    }

    // Runs a session without login against a data dir seeded with `saved`.
    fn run_with(saved: Option<&RecordStore>, inputs: &[&str]) -> (TempDir, App<ScriptedConsole>) {
        let dir = tempdir().unwrap();
        let manager = DataManager::new(dir.path().join("data")).unwrap();
        if let Some(store) = saved {
            manager.save(store).unwrap();
        }
        let mut app = App::new(manager, dir.path(), ScriptedConsole::new(inputs));
        app.run(false).unwrap();
        (dir, app)
    }

    fn names(app: &App<ScriptedConsole>) -> Vec<&str> {
        app.store().students.iter().map(|s| s.name.as_str()).collect()
    }

    // --- main loop ---

    #[test]
    fn quit_says_goodbye() {
        let (_dir, app) = run_with(None, &["14"]);
        assert!(app.should_quit());
        assert!(app.console().printed(Tone::Meta, "Au revoir!"));
        assert!(app.console().printed(Tone::Title, "Menu:"));
        assert!(app.console().printed(Tone::Meta, "14. Quitter"));
    }

    #[test]
    fn end_of_input_quits() {
        let (_dir, app) = run_with(None, &[]);
        assert!(app.should_quit());
        assert!(app.console().printed(Tone::Meta, "Au revoir!"));
    }

    #[test]
    fn invalid_main_option_reprompts() {
        let (_dir, app) = run_with(None, &["42", "abc", " 14", "14"]);
        let invalid = app
            .console()
            .output
            .iter()
            .filter(|(tone, text)| *tone == Tone::Failure && text == INVALID_OPTION)
            .count();
        assert_eq!(invalid, 3);
        assert!(app.should_quit());
    }

    #[test]
    fn startup_loads_saved_data() {
        let store = make_store();
        let (_dir, app) = run_with(Some(&store), &["14"]);
        assert_eq!(app.store(), &store);
        assert!(app.console().printed(Tone::Success, "Données chargées avec succès!"));
    }

    #[test]
    fn corrupt_data_file_starts_empty() {
        let dir = tempdir().unwrap();
        let manager = DataManager::new(dir.path()).unwrap();
        std::fs::write(manager.data_path(), "{not json").unwrap();
        let mut app = App::new(manager, dir.path(), ScriptedConsole::new(&["14"]));
        app.run(false).unwrap();
        assert!(app.store().is_empty());
        assert!(
            app.console()
                .output
                .iter()
                .any(|(tone, text)| *tone == Tone::Failure && text.starts_with("Erreur : "))
        );
        assert!(app.should_quit());
    }

    // --- students ---

    #[test]
    fn add_student_rejects_duplicate_ignoring_case() {
        let (_dir, app) = run_with(None, &["1", "1", "Alice", "1", "1", "alice", "14"]);
        assert_eq!(names(&app), ["Alice"]);
        assert!(app.console().printed(Tone::Success, "Alice a été ajouté avec succès."));
        assert!(app.console().printed(Tone::Warning, "Cet étudiant existe déjà."));
    }

    #[test]
    fn edit_student_renames() {
        let (_dir, app) = run_with(Some(&make_store()), &["1", "2", "Alice", "Alicia", "14"]);
        assert_eq!(names(&app), ["Bob", "Alicia"]);
        assert!(app.console().printed(Tone::Success, "Étudiant modifié avec succès!"));
    }

    #[test]
    fn edit_missing_student_skips_new_name_prompt() {
        let (_dir, app) = run_with(Some(&make_store()), &["1", "2", "alice", "14"]);
        assert_eq!(names(&app), ["Bob", "Alice"]);
        assert!(app.console().printed(Tone::Failure, "Étudiant non trouvé."));
        assert!(
            !app.console()
                .transcript()
                .contains("Entrez le nouveau nom de l'étudiant")
        );
        assert!(app.should_quit());
    }

    #[test]
    fn delete_student() {
        let (_dir, app) = run_with(Some(&make_store()), &["1", "3", "Bob", "14"]);
        assert_eq!(names(&app), ["Alice"]);
        assert!(app.console().printed(Tone::Success, "Étudiant supprimé avec succès!"));
    }

    #[test]
    fn sort_students_by_name_descending() {
        let (_dir, app) = run_with(Some(&make_store()), &["1", "5", "1", "2", "14"]);
        assert_eq!(names(&app), ["Bob", "Alice"]);
        assert!(app.console().printed(Tone::Success, "Les étudiants ont été triés par nom."));
    }

    #[test]
    fn sort_students_by_date_defaults_to_ascending() {
        let (_dir, app) = run_with(Some(&make_store()), &["1", "5", "2", "", "14"]);
        assert_eq!(names(&app), ["Alice", "Bob"]);
        assert!(
            app.console()
                .printed(Tone::Success, "Les étudiants ont été triés par date d'ajout.")
        );
    }

    #[test]
    fn sort_rejects_unknown_criterion() {
        let (_dir, app) = run_with(Some(&make_store()), &["1", "5", "3", "14"]);
        assert_eq!(names(&app), ["Bob", "Alice"]);
        assert!(app.console().printed(Tone::Warning, "Critère invalide."));
    }

    #[test]
    fn students_submenu_back_and_invalid() {
        let (_dir, app) = run_with(None, &["1", "4", "1", "9", "14"]);
        assert!(app.console().printed(Tone::Title, "Gestion des étudiants:"));
        assert!(app.console().printed(Tone::Failure, INVALID_OPTION));
        assert!(app.should_quit());
    }

    #[test]
    fn export_students_csv() {
        let (dir, app) = run_with(Some(&make_store()), &["1", "6", "14"]);
        let path = dir.path().join("etudiants.csv");
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Nom,Date d'ajout\r\nBob,2023-01-02 09:30:00\r\nAlice,2023-01-01 08:30:00\r\n"
        );
        assert!(app.console().transcript().contains(&format!(
            "Les étudiants ont été exportés dans le fichier '{}'.",
            path.display()
        )));
    }

    #[test]
    fn export_students_document() {
        let (dir, _app) = run_with(None, &["1", "7", "14"]);
        let content = std::fs::read_to_string(dir.path().join("etudiants.md")).unwrap();
        assert!(content.starts_with("# Liste des Étudiants\n"));
        assert!(content.contains("Aucun étudiant n'est enregistré."));
    }

    // --- other collections ---

    #[test]
    fn add_other_records() {
        let inputs = [
            "2", "1", "Dupont", //
            "3", "1", "Maths", //
            "4", "1", "Alice", "15", //
            "5", "1", "Bob", "2024-01-03", //
            "14",
        ];
        let (_dir, app) = run_with(None, &inputs);
        let stats = app.store().stats();
        assert_eq!((stats.teachers, stats.courses, stats.grades, stats.absences), (1, 1, 1, 1));
        assert_eq!(app.store().grades.as_slice(), [Grade::new("Alice", "15")]);
        assert!(app.console().printed(Tone::Success, "Enseignant ajouté avec succès!"));
        assert!(app.console().printed(Tone::Success, "Cours ajouté avec succès!"));
        assert!(app.console().printed(Tone::Success, "Note ajoutée avec succès!"));
        assert!(app.console().printed(Tone::Success, "Absence ajoutée avec succès!"));
    }

    #[test]
    fn grade_submenu_has_no_student_extras() {
        let (_dir, app) = run_with(None, &["4", "5", "14"]);
        assert!(app.console().printed(Tone::Failure, INVALID_OPTION));
        assert!(!app.console().transcript().contains("Trier les étudiants"));
    }

    #[test]
    fn edit_grade_changes_first_match_only() {
        let (_dir, app) = run_with(Some(&make_store()), &["4", "2", "Alice", "20", "14"]);
        assert_eq!(
            app.store().grades.as_slice(),
            [Grade::new("Alice", "20"), Grade::new("Alice", "18")]
        );
        assert!(app.console().printed(Tone::Success, "Note modifiée avec succès!"));
    }

    #[test]
    fn delete_grade_removes_first_match() {
        let (_dir, app) = run_with(Some(&make_store()), &["4", "3", "Alice", "14"]);
        assert_eq!(app.store().grades.as_slice(), [Grade::new("Alice", "18")]);
        assert!(app.console().printed(Tone::Success, "Note supprimée avec succès!"));
    }

    #[test]
    fn edit_absence_date() {
        let (_dir, app) = run_with(Some(&make_store()), &["5", "2", "Bob", "2023-03-01", "14"]);
        assert_eq!(
            app.store().absences.as_slice(),
            [Absence::new("Bob", "2023-03-01")]
        );
    }

    #[test]
    fn delete_missing_teacher() {
        let (_dir, app) = run_with(Some(&make_store()), &["2", "3", "dupont", "14"]);
        assert_eq!(app.store().teachers.len(), 1);
        assert!(app.console().printed(Tone::Failure, "Enseignant non trouvé."));
    }

    #[test]
    fn rename_course() {
        let (_dir, app) = run_with(Some(&make_store()), &["3", "2", "Maths", "Physique", "14"]);
        assert_eq!(app.store().courses.as_slice(), [Course::new("Physique")]);
        assert!(app.console().printed(Tone::Success, "Cours modifié avec succès!"));
    }

    // --- listings ---

    #[test]
    fn list_students_numbered() {
        let (_dir, app) = run_with(Some(&make_store()), &["6", "14"]);
        assert!(app.console().printed(Tone::Tool, "Liste des étudiants:"));
        assert!(app.console().printed(Tone::Plain, "1. Bob - 2023-01-02 09:30:00"));
        assert!(app.console().printed(Tone::Plain, "2. Alice - 2023-01-01 08:30:00"));
    }

    #[test]
    fn empty_listings_warn() {
        let (_dir, app) = run_with(None, &["6", "7", "8", "14"]);
        assert!(app.console().printed(Tone::Warning, "Aucun étudiant n'est enregistré."));
        assert!(app.console().printed(Tone::Warning, "Aucun enseignant n'est enregistré."));
        assert!(app.console().printed(Tone::Warning, "Aucune absence n'est enregistrée."));
    }

    #[test]
    fn list_absences() {
        let (_dir, app) = run_with(Some(&make_store()), &["8", "14"]);
        assert!(app.console().printed(Tone::Plain, "1. Bob - 2023-02-01"));
    }

    // --- search ---

    #[test]
    fn search_students_by_date() {
        let (_dir, app) = run_with(Some(&make_store()), &["9", "1", "2023-01-01", "14"]);
        assert!(app.console().printed(Tone::Results, "Étudiants trouvés :"));
        assert!(app.console().printed(Tone::Plain, "1. Alice - 2023-01-01 08:30:00"));
        assert!(!app.console().transcript().contains("Bob - "));
    }

    #[test]
    fn search_by_date_rejects_bad_format() {
        let (_dir, app) = run_with(Some(&make_store()), &["9", "1", "01/01/2023", "14"]);
        assert!(app.console().printed(
            Tone::Failure,
            "Format de date invalide. Assurez-vous d'utiliser le format YYYY-MM-DD."
        ));
    }

    #[test]
    fn search_by_date_without_hits() {
        let (_dir, app) = run_with(Some(&make_store()), &["9", "1", "2030-01-01", "14"]);
        assert!(
            app.console()
                .printed(Tone::Warning, "Aucun étudiant trouvé pour cette date.")
        );
    }

    #[test]
    fn search_students_by_name_ignores_case() {
        let mut store = make_store();
        store.students.add(Student {
            name: "Carol".to_string(),
            date_added: String::new(),
        });
        let (_dir, app) = run_with(Some(&store), &["9", "2", "CAROL", "9", "2", "Zed", "14"]);
        assert!(app.console().printed(Tone::Plain, "1. Carol - Date non disponible"));
        assert!(app.console().printed(Tone::Warning, "Aucun étudiant trouvé pour ce nom."));
    }

    #[test]
    fn search_other_collections() {
        let inputs = [
            "9", "4", "dupont", //
            "9", "5", "maths", //
            "9", "6", "alice", //
            "9", "7", "Nobody", //
            "14",
        ];
        let (_dir, app) = run_with(Some(&make_store()), &inputs);
        let console = app.console();
        assert!(console.printed(Tone::Results, "Enseignants trouvés :"));
        assert!(console.printed(Tone::Plain, "1. Dupont"));
        assert!(console.printed(Tone::Results, "Cours trouvés :"));
        assert!(console.printed(Tone::Plain, "1. Maths"));
        assert!(console.printed(Tone::Results, "Notes trouvées :"));
        assert!(console.printed(Tone::Plain, "2. Alice - 18"));
        assert!(console.printed(Tone::Warning, "Aucune absence trouvée pour cet étudiant."));
    }

    #[test]
    fn search_back_returns_to_main_menu() {
        let (_dir, app) = run_with(None, &["9", "3", "14"]);
        assert!(app.console().printed(Tone::Tool, "Rechercher:"));
        assert_eq!(app.console().remaining_inputs(), 0);
        assert!(app.should_quit());
    }

    // --- statistics, export, persistence ---

    #[test]
    fn statistics_count_every_collection() {
        let (_dir, app) = run_with(Some(&make_store()), &["10", "14"]);
        let console = app.console();
        assert!(console.printed(Tone::Tool, "Statistiques:"));
        assert!(console.printed(Tone::Entry, "Nombre d'étudiants : 2"));
        assert!(console.printed(Tone::Entry, "Nombre d'enseignants : 1"));
        assert!(console.printed(Tone::Entry, "Nombre de cours : 1"));
        assert!(console.printed(Tone::Entry, "Nombre de notes : 2"));
        assert!(console.printed(Tone::Entry, "Nombre d'absences : 1"));
    }

    #[test]
    fn export_writes_plain_text() {
        let (dir, app) = run_with(Some(&make_store()), &["11", "14"]);
        let path = dir.path().join("export.txt");
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Étudiants:\n"));
        assert!(content.contains("Absences:\n"));
        assert!(app.console().printed(
            Tone::Success,
            &format!("Données exportées dans '{}' avec succès!", path.display())
        ));
    }

    #[test]
    fn save_persists_session() {
        let (dir, app) = run_with(None, &["3", "1", "Maths", "12", "14"]);
        assert!(app.console().printed(Tone::Success, "Données sauvegardées avec succès!"));
        let reloaded = DataManager::new(dir.path().join("data")).unwrap().load().unwrap();
        assert_eq!(reloaded.courses.as_slice(), [Course::new("Maths")]);
    }

    #[test]
    fn quitting_without_saving_keeps_disk_unchanged() {
        let store = make_store();
        let (dir, _app) = run_with(Some(&store), &["2", "1", "Martin", "14"]);
        let reloaded = DataManager::new(dir.path().join("data")).unwrap().load().unwrap();
        assert_eq!(reloaded, store);
    }

    #[test]
    fn load_discards_unsaved_changes() {
        let store = make_store();
        let (_dir, app) = run_with(Some(&store), &["2", "1", "Martin", "13", "14"]);
        assert_eq!(app.store(), &store);
    }

    #[test]
    fn export_once_uses_saved_data() {
        let dir = tempdir().unwrap();
        let manager = DataManager::new(dir.path().join("data")).unwrap();
        manager.save(&make_store()).unwrap();
        let path = export_once(&manager, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("export.txt"));
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("\"nom\":\"Dupont\""));
    }

    // --- login ---

    fn login_app(dir: &TempDir, inputs: &[&str]) -> App<ScriptedConsole> {
        let manager = DataManager::new(dir.path()).unwrap();
        let mut app = App::new(manager, dir.path(), ScriptedConsole::new(inputs));
        app.run(true).unwrap();
        app
    }

    #[test]
    fn register_then_authenticate() {
        let dir = tempdir().unwrap();
        let app = login_app(&dir, &["2", "admin", "secret", "14"]);
        assert!(app.console().printed(Tone::Success, "Utilisateur enregistré avec succès!"));

        let app = login_app(&dir, &["1", "admin", "secret", "14"]);
        assert!(app.console().printed(Tone::Success, "Authentification réussie!"));

        let app = login_app(&dir, &["1", "admin", "wrong", "14"]);
        assert!(app.console().printed(
            Tone::Failure,
            "Nom d'utilisateur ou mot de passe incorrect."
        ));
        assert!(app.should_quit());
    }

    #[test]
    fn register_existing_user_is_refused_before_password() {
        let dir = tempdir().unwrap();
        DataManager::new(dir.path())
            .unwrap()
            .register_user("admin", "secret")
            .unwrap();
        let app = login_app(&dir, &["2", "admin", "14"]);
        assert!(app.console().printed(Tone::Warning, "Cet utilisateur existe déjà."));
        assert!(app.should_quit());
    }

    #[test]
    fn invalid_login_choice_loops() {
        let dir = tempdir().unwrap();
        let app = login_app(&dir, &["x", "3", "1", "nobody", "pw", "14"]);
        let invalid = app
            .console()
            .output
            .iter()
            .filter(|(_, text)| text == "Choix invalide. Veuillez choisir une option valide.")
            .count();
        assert_eq!(invalid, 2);
        assert!(app.console().printed(
            Tone::Failure,
            "Nom d'utilisateur ou mot de passe incorrect."
        ));
    }

    #[test]
    fn end_of_input_during_login_quits() {
        let dir = tempdir().unwrap();
        let app = login_app(&dir, &["1", "admin"]);
        assert!(app.should_quit());
        assert!(app.console().printed(Tone::Meta, "Au revoir!"));
    }
}
