//! Menu entries, their numbering, and the wording used for each collection.

use crate::model::{CollectionKind, Field};

use super::console::Tone;

/// An entry of the main menu. Entries are numbered from 1 in [`MainChoice::all`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Manage(CollectionKind),
    ListStudents,
    ListTeachers,
    ListAbsences,
    Search,
    Statistics,
    Export,
    Save,
    Load,
    Quit,
}

static MAIN_CHOICES: &[MainChoice] = &[
    MainChoice::Manage(CollectionKind::Students),
    MainChoice::Manage(CollectionKind::Teachers),
    MainChoice::Manage(CollectionKind::Courses),
    MainChoice::Manage(CollectionKind::Grades),
    MainChoice::Manage(CollectionKind::Absences),
    MainChoice::ListStudents,
    MainChoice::ListTeachers,
    MainChoice::ListAbsences,
    MainChoice::Search,
    MainChoice::Statistics,
    MainChoice::Export,
    MainChoice::Save,
    MainChoice::Load,
    MainChoice::Quit,
];

impl MainChoice {
    pub fn all() -> &'static [MainChoice] {
        MAIN_CHOICES
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Manage(kind) => wording(kind).menu_label,
            Self::ListStudents => "Lister les étudiants",
            Self::ListTeachers => "Lister les enseignants",
            Self::ListAbsences => "Lister les absences",
            Self::Search => "Rechercher",
            Self::Statistics => "Statistiques",
            Self::Export => "Exporter les données",
            Self::Save => "Sauvegarder",
            Self::Load => "Charger",
            Self::Quit => "Quitter",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Manage(_) | Self::ListStudents | Self::ListTeachers | Self::ListAbsences => {
                Tone::Entry
            }
            Self::Search | Self::Statistics | Self::Export => Tone::Tool,
            Self::Save | Self::Load | Self::Quit => Tone::Meta,
        }
    }
}

/// An entry of a collection's management submenu.
///
/// Students get extra entries after "back", so that the first four entries
/// are numbered the same in every submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManageChoice {
    Add,
    Edit,
    Delete,
    Back,
    SortStudents,
    ExportCsv,
    ExportDocument,
}

static BASIC_MANAGE: &[ManageChoice] = &[
    ManageChoice::Add,
    ManageChoice::Edit,
    ManageChoice::Delete,
    ManageChoice::Back,
];

static STUDENT_MANAGE: &[ManageChoice] = &[
    ManageChoice::Add,
    ManageChoice::Edit,
    ManageChoice::Delete,
    ManageChoice::Back,
    ManageChoice::SortStudents,
    ManageChoice::ExportCsv,
    ManageChoice::ExportDocument,
];

impl ManageChoice {
    /// Returns the entries offered for `kind`, in menu order.
    pub fn available(kind: CollectionKind) -> &'static [ManageChoice] {
        match kind {
            CollectionKind::Students => STUDENT_MANAGE,
            _ => BASIC_MANAGE,
        }
    }

    pub fn label(self, kind: CollectionKind) -> String {
        let noun = wording(kind).noun;
        match self {
            Self::Add => format!("Ajouter {noun}"),
            Self::Edit => format!("Modifier {noun}"),
            Self::Delete => format!("Supprimer {noun}"),
            Self::Back => "Retour".to_string(),
            Self::SortStudents => "Trier les étudiants".to_string(),
            Self::ExportCsv => "Exporter les étudiants en CSV".to_string(),
            Self::ExportDocument => "Exporter les étudiants en document".to_string(),
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Back => Tone::Meta,
            Self::SortStudents | Self::ExportCsv | Self::ExportDocument => Tone::Tool,
            Self::Add | Self::Edit | Self::Delete => Tone::Entry,
        }
    }
}

/// An entry of the search submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchChoice {
    StudentsByDate,
    StudentsByName,
    Back,
    TeachersByName,
    CoursesByName,
    GradesByStudent,
    AbsencesByStudent,
}

static SEARCH_CHOICES: &[SearchChoice] = &[
    SearchChoice::StudentsByDate,
    SearchChoice::StudentsByName,
    SearchChoice::Back,
    SearchChoice::TeachersByName,
    SearchChoice::CoursesByName,
    SearchChoice::GradesByStudent,
    SearchChoice::AbsencesByStudent,
];

impl SearchChoice {
    pub fn all() -> &'static [SearchChoice] {
        SEARCH_CHOICES
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::StudentsByDate => "Rechercher un étudiant par date d'ajout",
            Self::StudentsByName => "Rechercher un étudiant par nom",
            Self::Back => "Retour",
            Self::TeachersByName => "Rechercher un enseignant par nom",
            Self::CoursesByName => "Rechercher un cours par nom",
            Self::GradesByStudent => "Rechercher les notes d'un étudiant",
            Self::AbsencesByStudent => "Rechercher les absences d'un étudiant",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Back => Tone::Meta,
            _ => Tone::Entry,
        }
    }
}

/// Picks the entry numbered `input` (1-based) from `choices`.
///
/// The answer must be the entry's number exactly as shown: no padding,
/// sign, or leading zero.
pub fn pick<T: Copy>(choices: &[T], input: &str) -> Option<T> {
    choices
        .iter()
        .zip(1usize..)
        .find(|(_, number)| number.to_string() == input)
        .map(|(choice, _)| *choice)
}

/// Prompts and messages for one collection.
#[derive(Debug)]
pub struct Wording {
    /// Main menu entry.
    pub menu_label: &'static str,
    /// Submenu title.
    pub title: &'static str,
    /// Indefinite noun for submenu entries, e.g. "un étudiant".
    pub noun: &'static str,
    /// Capitalized subject for status messages, e.g. "Étudiant".
    pub subject: &'static str,
    /// Plural used in listings, e.g. "étudiants".
    pub plural: &'static str,
    /// Whether adjectives agree in the feminine.
    pub feminine: bool,
    /// Field used to find the record to edit or delete.
    pub match_field: Field,
    /// Field changed by an edit.
    pub edit_field: Field,
    /// Prompt for the value of `match_field` before an edit.
    pub edit_target_prompt: &'static str,
    /// Prompt for the value of `match_field` before a delete.
    pub delete_target_prompt: &'static str,
    /// Prompt for the new value of `edit_field`.
    pub new_value_prompt: &'static str,
}

impl Wording {
    /// e.g. "Note modifiée avec succès!"
    pub fn done(&self, participle: &str) -> String {
        let agreement = if self.feminine { "e" } else { "" };
        format!("{} {participle}{agreement} avec succès!", self.subject)
    }

    /// e.g. "Étudiant non trouvé."
    pub fn not_found(&self) -> String {
        let agreement = if self.feminine { "e" } else { "" };
        format!("{} non trouvé{agreement}.", self.subject)
    }
}

static STUDENTS: Wording = Wording {
    menu_label: "Gestion des étudiants",
    title: "Gestion des étudiants:",
    noun: "un étudiant",
    subject: "Étudiant",
    plural: "étudiants",
    feminine: false,
    match_field: Field::Name,
    edit_field: Field::Name,
    edit_target_prompt: "Entrez le nom de l'étudiant à modifier : ",
    delete_target_prompt: "Entrez le nom de l'étudiant à supprimer : ",
    new_value_prompt: "Entrez le nouveau nom de l'étudiant : ",
};

static TEACHERS: Wording = Wording {
    menu_label: "Gestion des enseignants",
    title: "Gestion des enseignants:",
    noun: "un enseignant",
    subject: "Enseignant",
    plural: "enseignants",
    feminine: false,
    match_field: Field::Name,
    edit_field: Field::Name,
    edit_target_prompt: "Entrez le nom de l'enseignant à modifier : ",
    delete_target_prompt: "Entrez le nom de l'enseignant à supprimer : ",
    new_value_prompt: "Entrez le nouveau nom de l'enseignant : ",
};

static COURSES: Wording = Wording {
    menu_label: "Gestion des cours",
    title: "Gestion des cours:",
    noun: "un cours",
    subject: "Cours",
    plural: "cours",
    feminine: false,
    match_field: Field::Name,
    edit_field: Field::Name,
    edit_target_prompt: "Entrez le nom du cours à modifier : ",
    delete_target_prompt: "Entrez le nom du cours à supprimer : ",
    new_value_prompt: "Entrez le nouveau nom du cours : ",
};

static GRADES: Wording = Wording {
    menu_label: "Gestion des notes",
    title: "Gestion des notes:",
    noun: "une note",
    subject: "Note",
    plural: "notes",
    feminine: true,
    match_field: Field::Student,
    edit_field: Field::Value,
    edit_target_prompt: "Entrez le nom de l'étudiant : ",
    delete_target_prompt: "Entrez le nom de l'étudiant : ",
    new_value_prompt: "Entrez la nouvelle note : ",
};

static ABSENCES: Wording = Wording {
    menu_label: "Gestion des absences",
    title: "Gestion des absences:",
    noun: "une absence",
    subject: "Absence",
    plural: "absences",
    feminine: true,
    match_field: Field::Student,
    edit_field: Field::Date,
    edit_target_prompt: "Entrez le nom de l'étudiant : ",
    delete_target_prompt: "Entrez le nom de l'étudiant : ",
    new_value_prompt: "Entrez la nouvelle date de l'absence (format YYYY-MM-DD) : ",
};

/// Returns the wording for a collection.
pub fn wording(kind: CollectionKind) -> &'static Wording {
    match kind {
        CollectionKind::Students => &STUDENTS,
        CollectionKind::Teachers => &TEACHERS,
        CollectionKind::Courses => &COURSES,
        CollectionKind::Grades => &GRADES,
        CollectionKind::Absences => &ABSENCES,
    }
}
