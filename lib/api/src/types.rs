//! Wire types shared by the gateways and the UI.
//!
//! Shapes mirror the upstream API's JSON. Records carry the server-issued
//! ID; drafts are the client-built payloads for create/update calls.

use campus_access::Role;
use campus_core::{ClassSessionId, CourseId, EnrollmentId, ExerciseId, GradeId, QuestionId, SubmissionId, UserId};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A course in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    /// Contact hours over the semester.
    pub hours: f64,
    /// Lecture, lab, seminar...
    pub kind: String,
    pub semester: String,
    pub year: String,
    /// Account ID of the teacher responsible for the course.
    pub teacher: UserId,
}

/// Payload for creating or updating a course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub hours: f64,
    pub kind: String,
    pub semester: String,
    pub year: String,
    pub teacher: UserId,
}

/// A student account as the API serves it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Degree track the student is enrolled in.
    #[serde(default)]
    pub track: Option<String>,
    #[serde(default)]
    pub study_year: Option<String>,
}

/// Payload for creating or updating a student account.
///
/// The role field is always `student`; the API refuses drafts that claim
/// anything else on this endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub track: Option<String>,
    pub study_year: Option<String>,
    role: Role,
}

impl StudentDraft {
    /// Creates a draft with the role pinned to student.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            phone: None,
            track: None,
            study_year: None,
            role: Role::Student,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Sets the degree track.
    #[must_use]
    pub fn with_track(mut self, track: Option<String>) -> Self {
        self.track = track;
        self
    }

    /// Sets the study year.
    #[must_use]
    pub fn with_study_year(mut self, study_year: Option<String>) -> Self {
        self.study_year = study_year;
        self
    }
}

/// A teacher account as the API serves it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeacherRecord {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Position held (lecturer, professor...).
    #[serde(default)]
    pub position: Option<String>,
}

/// Payload for creating a teacher account; role pinned to teacher.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeacherDraft {
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    role: Role,
}

impl TeacherDraft {
    /// Creates a draft with the role pinned to teacher.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            phone: None,
            position: None,
            role: Role::Teacher,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Sets the position.
    #[must_use]
    pub fn with_position(mut self, position: Option<String>) -> Self {
        self.position = position;
        self
    }
}

/// An enrollment linking a student to a course.
///
/// The API nests the full student record so rosters render without a
/// second round of lookups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub student: StudentRecord,
    pub course: CourseId,
}

/// Payload for enrolling a student in a course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentDraft {
    pub student: UserId,
    pub course: CourseId,
}

/// A grade record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: GradeId,
    pub student: UserId,
    pub course: CourseId,
    /// Exam, coursework, lab...
    pub exam_kind: String,
    pub value: f64,
    /// Teacher's comment on the grade.
    pub comment: String,
}

/// Payload for recording a grade.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradeDraft {
    pub student: UserId,
    pub course: CourseId,
    pub exam_kind: String,
    pub value: f64,
    pub comment: String,
}

/// A scheduled class session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: ClassSessionId,
    pub course: CourseId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_minutes: i64,
    pub room: String,
}

/// Payload for scheduling a class session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassSessionDraft {
    pub course: CourseId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_minutes: i64,
    pub room: String,
}

/// An exercise attached to a course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub course: CourseId,
    pub title: String,
    pub description: String,
    /// Homework, project, quiz...
    pub kind: String,
    pub due_at: DateTime<Utc>,
}

/// Payload for publishing an exercise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDraft {
    pub course: CourseId,
    pub title: String,
    pub description: String,
    pub kind: String,
    pub due_at: DateTime<Utc>,
}

/// A student's submission for an exercise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub student: UserId,
    pub exercise: ExerciseId,
    /// Where the uploaded file is served from.
    pub file_url: String,
    pub submitted_at: DateTime<Utc>,
}

/// Payload for handing in an exercise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub student: UserId,
    pub exercise: ExerciseId,
    pub file_url: String,
}

/// A question posted against a class session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub student: UserId,
    pub class_session: ClassSessionId,
    pub content: String,
}

/// Payload for posting a question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub student: UserId,
    pub class_session: ClassSessionId,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_draft_pins_the_role() {
        let draft = StudentDraft::new("s@example.edu").with_name(Some("Sam".to_string()));
        let json = serde_json::to_value(&draft).expect("serialize");
        assert_eq!(json["role"], "student");
        assert_eq!(json["email"], "s@example.edu");
    }

    #[test]
    fn teacher_draft_pins_the_role() {
        let draft = TeacherDraft::new("t@example.edu").with_position(Some("Lecturer".to_string()));
        let json = serde_json::to_value(&draft).expect("serialize");
        assert_eq!(json["role"], "teacher");
        assert_eq!(json["position"], "Lecturer");
    }

    #[test]
    fn enrollment_nests_the_student_record() {
        let json = r#"{
            "id": 4,
            "student": {"id": 11, "email": "s@example.edu", "name": "Sam"},
            "course": 7
        }"#;

        let enrollment: Enrollment = serde_json::from_str(json).expect("deserialize");
        assert_eq!(enrollment.id, EnrollmentId::new(4));
        assert_eq!(enrollment.student.id, UserId::new(11));
        assert_eq!(enrollment.course, CourseId::new(7));
        assert!(enrollment.student.track.is_none());
    }

    #[test]
    fn course_parses_with_numeric_fields() {
        let json = r#"{
            "id": 1,
            "title": "Algorithms",
            "description": "Sorting and graphs",
            "hours": 42.5,
            "kind": "lecture",
            "semester": "S1",
            "year": "L3",
            "teacher": 8
        }"#;

        let course: Course = serde_json::from_str(json).expect("deserialize");
        assert_eq!(course.teacher, UserId::new(8));
        assert!((course.hours - 42.5).abs() < f64::EPSILON);
    }
}
