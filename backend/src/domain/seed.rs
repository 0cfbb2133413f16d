//! Bundled bootstrap dataset for a fresh installation.
//!
//! Each collection is used only while its storage key has never been written.

use shared::{Consultation, Exam, Patient, Reminder, User};

/// The fallback content handed to each repository on load
#[derive(Debug, Clone, PartialEq)]
pub struct SeedData {
    pub patients: Vec<Patient>,
    pub consultations: Vec<Consultation>,
    pub exams: Vec<Exam>,
    pub reminders: Vec<Reminder>,
}

impl SeedData {
    /// The demo roster shipped with the app
    pub fn bundled() -> Self {
        Self {
            patients: seed_patients(),
            consultations: seed_consultations(),
            exams: Vec::new(),
            reminders: seed_reminders(),
        }
    }

    /// No bootstrap records at all
    pub fn empty() -> Self {
        Self {
            patients: Vec::new(),
            consultations: Vec::new(),
            exams: Vec::new(),
            reminders: Vec::new(),
        }
    }

    /// The bundled data when `seeded`, otherwise empty collections
    pub fn first_run(seeded: bool) -> Self {
        if seeded {
            Self::bundled()
        } else {
            Self::empty()
        }
    }
}

pub fn seed_user() -> User {
    User {
        id: "user1".to_string(),
        name: "Alberto Cardozo".to_string(),
        email: "murilojava@gmail.com".to_string(),
        initials: "AC".to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn patient(
    id: &str,
    name: &str,
    dob: &str,
    phone: &str,
    email: &str,
    chronic_diseases: &[&str],
    continuous_medication: &[&str],
) -> Patient {
    Patient {
        id: id.to_string(),
        name: name.to_string(),
        dob: dob.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        chronic_diseases: strings(chronic_diseases),
        continuous_medication: strings(continuous_medication),
    }
}

pub fn seed_patients() -> Vec<Patient> {
    vec![
        patient(
            "1",
            "Altair Marcos de Melo Neves da Fonseca",
            "1980-12-08",
            "(75) 99324-0948",
            "altairmn@gmail.com",
            &["DM2", "HAS", "Hiperlipidemia Mista", "Alzheimer", "Câncer", "Diabetes"],
            &["Astorvastatina", "Insulina", "Losartana", "Rosuvastatina Cálcica"],
        ),
        patient(
            "2",
            "Demósthenes Cunha Ferreira dos Santos",
            "1975-05-20",
            "(11) 98765-4321",
            "demosthenes@email.com",
            &["HAS"],
            &["Losartana"],
        ),
        patient(
            "3",
            "Maria José Borges do Nascimento",
            "1960-02-15",
            "(21) 99999-8888",
            "maria.jose@email.com",
            &["Diabetes"],
            &["Metformina"],
        ),
        patient(
            "4",
            "Zoreide Zoraia Zaruia",
            "1992-11-30",
            "(31) 91234-5678",
            "zoreide.z@email.com",
            &[],
            &[],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn consultation(
    id: &str,
    location: &str,
    date_time: &str,
    subjective: &str,
    objective: &str,
    assessment: &str,
    plan: &str,
    observations: &str,
) -> Consultation {
    Consultation {
        id: id.to_string(),
        patient_id: "1".to_string(),
        location: location.to_string(),
        date_time: date_time.to_string(),
        subjective: subjective.to_string(),
        objective: objective.to_string(),
        assessment: assessment.to_string(),
        plan: plan.to_string(),
        observations: Some(observations.to_string()),
        exam_requests: None,
        exam_results: None,
    }
}

pub fn seed_consultations() -> Vec<Consultation> {
    vec![
        consultation(
            "c1",
            "Clínica",
            "2026-10-15T15:05:00",
            "Paciente reclamou que está sentindo dores no cotovelo da perna.",
            "Sinais vitais: ...\nResultado do exame anterior: ...\nExame físico: ....\nNão identifiquei onde fica o cotovelo da perna.",
            "Paciente não possui cotovelo na perna. Encaminhar para psiquiatria.",
            "Diazepan 100mg uso contínuo + Invermectina 20mg 12/12 por 10 dias.",
            "",
        ),
        consultation(
            "c2",
            "PSF",
            "2025-10-15T15:30:00",
            "Check-up de rotina.",
            "Pressão arterial 130/80 mmHg. Glicemia de jejum 98 mg/dL.",
            "Controle adequado de HAS e DM2.",
            "Manter medicação atual e retornar em 6 meses.",
            "Paciente relata boa adesão ao tratamento.",
        ),
        consultation(
            "c3",
            "Clínica",
            "2025-05-01T12:22:00",
            "Queixa de tosse seca há 2 semanas.",
            "Ausculta pulmonar limpa. Sem febre.",
            "Provável tosse alérgica.",
            "Prescrito anti-histamínico.",
            "",
        ),
        consultation(
            "c4",
            "PSF",
            "2024-12-12T11:31:00",
            "Renovação de receita.",
            "Paciente estável.",
            "Paciente estável.",
            "Receitas renovadas.",
            "",
        ),
    ]
}

fn reminder(id: &str, patient_id: &str, date_time: &str, note: &str) -> Reminder {
    Reminder {
        id: id.to_string(),
        patient_id: patient_id.to_string(),
        date_time: date_time.to_string(),
        note: note.to_string(),
    }
}

pub fn seed_reminders() -> Vec<Reminder> {
    vec![
        reminder("r1", "1", "2025-10-25T12:30:00", "Solicitar novamente tal e tal"),
        reminder("r2", "2", "2025-10-29T15:00:00", "Verificar resultados de exames de sangue."),
        reminder("r3", "3", "2025-10-31T08:00:00", "Ligar para agendar retorno com cardiologista."),
        reminder("r4", "4", "2025-11-05T10:30:00", "Discutir opções de check-up anual."),
    ]
}
