//! Secretary dashboard: catalog and account administration.

use campus_api::types::{
    Course, CourseDraft, EnrollmentDraft, StudentDraft, StudentRecord, TeacherDraft, TeacherRecord,
};
use campus_api::{CoursesGateway, EnrollmentsGateway, StudentsGateway, TeachersGateway};
use campus_core::UserId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::session::use_session;
use crate::toast::use_toasts;

fn parse_user_id(value: &str) -> Option<UserId> {
    value.parse::<UserId>().ok()
}

/// Secretary dashboard subtree.
#[component]
pub fn SecretaryDashboard() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    let courses = RwSignal::new(Vec::<Course>::new());
    let students = RwSignal::new(Vec::<StudentRecord>::new());
    let teachers = RwSignal::new(Vec::<TeacherRecord>::new());

    // Course form.
    let (course_title, set_course_title) = signal(String::new());
    let (course_kind, set_course_kind) = signal(String::new());
    let (course_semester, set_course_semester) = signal(String::new());
    let (course_year, set_course_year) = signal(String::new());
    let (course_hours, set_course_hours) = signal(String::new());
    let (course_teacher, set_course_teacher) = signal(String::new());

    // Account forms.
    let (student_email, set_student_email) = signal(String::new());
    let (student_name, set_student_name) = signal(String::new());
    let (teacher_email, set_teacher_email) = signal(String::new());
    let (teacher_name, set_teacher_name) = signal(String::new());

    // Enrollment form.
    let (enroll_student, set_enroll_student) = signal(String::new());
    let (enroll_course, set_enroll_course) = signal(String::new());

    let reload_courses = move || {
        let gateway = CoursesGateway::new(session.client());
        spawn_local(async move {
            match gateway.list().await {
                Ok(items) => courses.set(items),
                Err(err) => toasts.error(err.message()),
            }
        });
    };
    let reload_students = move || {
        let gateway = StudentsGateway::new(session.client());
        spawn_local(async move {
            match gateway.list().await {
                Ok(items) => students.set(items),
                Err(err) => toasts.error(err.message()),
            }
        });
    };
    let reload_teachers = move || {
        let gateway = TeachersGateway::new(session.client());
        spawn_local(async move {
            match gateway.list().await {
                Ok(items) => teachers.set(items),
                Err(err) => toasts.error(err.message()),
            }
        });
    };

    Effect::new(move || {
        reload_courses();
        reload_students();
        reload_teachers();
    });

    let add_course = move |_| {
        let Some(teacher) = parse_user_id(&course_teacher.get_untracked()) else {
            toasts.error("Pick a teacher for the course");
            return;
        };
        let draft = CourseDraft {
            title: course_title.get_untracked(),
            description: String::new(),
            hours: course_hours.get_untracked().parse().unwrap_or(0.0),
            kind: course_kind.get_untracked(),
            semester: course_semester.get_untracked(),
            year: course_year.get_untracked(),
            teacher,
        };
        let gateway = CoursesGateway::new(session.client());
        spawn_local(async move {
            match gateway.create(&draft).await {
                Ok(_) => {
                    toasts.success("Course added");
                    reload_courses();
                }
                Err(err) => toasts.error(err.message()),
            }
        });
    };

    let add_student = move |_| {
        let draft = StudentDraft::new(student_email.get_untracked())
            .with_name(Some(student_name.get_untracked()));
        let gateway = StudentsGateway::new(session.client());
        spawn_local(async move {
            match gateway.create(&draft).await {
                Ok(_) => {
                    toasts.success("Student added");
                    reload_students();
                }
                Err(err) => toasts.error(err.message()),
            }
        });
    };

    let add_teacher = move |_| {
        let draft = TeacherDraft::new(teacher_email.get_untracked())
            .with_name(Some(teacher_name.get_untracked()));
        let gateway = TeachersGateway::new(session.client());
        spawn_local(async move {
            match gateway.create(&draft).await {
                Ok(_) => {
                    toasts.success("Teacher added");
                    reload_teachers();
                }
                Err(err) => toasts.error(err.message()),
            }
        });
    };

    let enroll = move |_| {
        let (Some(student), Some(course)) = (
            parse_user_id(&enroll_student.get_untracked()),
            enroll_course.get_untracked().parse().ok(),
        ) else {
            toasts.error("Pick a student and a course");
            return;
        };
        let draft = EnrollmentDraft { student, course };
        let gateway = EnrollmentsGateway::new(session.client());
        spawn_local(async move {
            match gateway.create(&draft).await {
                Ok(_) => toasts.success("Student enrolled"),
                Err(err) => toasts.error(err.message()),
            }
        });
    };

    view! {
        <div class="secretary-dashboard">
            <h1>"Administration"</h1>

            <section class="admin-section">
                <h2>"Courses"</h2>
                <div class="course-form">
                    <label for="course-title">"Title"</label>
                    <input
                        id="course-title"
                        type="text"
                        prop:value=course_title
                        on:input=move |ev| set_course_title.set(event_target_value(&ev))
                    />
                    <label for="course-kind">"Kind"</label>
                    <input
                        id="course-kind"
                        type="text"
                        prop:value=course_kind
                        on:input=move |ev| set_course_kind.set(event_target_value(&ev))
                    />
                    <label for="course-semester">"Semester"</label>
                    <input
                        id="course-semester"
                        type="text"
                        prop:value=course_semester
                        on:input=move |ev| set_course_semester.set(event_target_value(&ev))
                    />
                    <label for="course-year">"Year"</label>
                    <input
                        id="course-year"
                        type="text"
                        prop:value=course_year
                        on:input=move |ev| set_course_year.set(event_target_value(&ev))
                    />
                    <label for="course-hours">"Hours"</label>
                    <input
                        id="course-hours"
                        type="number"
                        prop:value=course_hours
                        on:input=move |ev| set_course_hours.set(event_target_value(&ev))
                    />
                    <label for="course-teacher">"Teacher"</label>
                    <select
                        id="course-teacher"
                        on:change=move |ev| set_course_teacher.set(event_target_value(&ev))
                    >
                        <option value="">"Pick a teacher"</option>
                        {move || {
                            teachers
                                .get()
                                .into_iter()
                                .map(|teacher| {
                                    let label = teacher
                                        .name
                                        .clone()
                                        .unwrap_or_else(|| teacher.email.clone());
                                    view! {
                                        <option value=teacher.id.to_string()>{label}</option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                    <button on:click=add_course>"Add course"</button>
                </div>
                <ul class="course-list">
                    {move || {
                        courses
                            .get()
                            .into_iter()
                            .map(|course| {
                                let id = course.id;
                                let remove = move |_| {
                                    let gateway = CoursesGateway::new(session.client());
                                    spawn_local(async move {
                                        match gateway.delete(id).await {
                                            Ok(()) => {
                                                toasts.success("Course removed");
                                                reload_courses();
                                            }
                                            Err(err) => toasts.error(err.message()),
                                        }
                                    });
                                };
                                view! {
                                    <li class="course-item">
                                        <span>{course.title.clone()}</span>
                                        <span class="course-meta">
                                            {format!("{} - {}", course.semester, course.kind)}
                                        </span>
                                        <button on:click=remove>"Remove"</button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </section>

            <section class="admin-section">
                <h2>"Students"</h2>
                <div class="account-form">
                    <label for="student-email">"Email"</label>
                    <input
                        id="student-email"
                        type="email"
                        prop:value=student_email
                        on:input=move |ev| set_student_email.set(event_target_value(&ev))
                    />
                    <label for="student-name">"Name"</label>
                    <input
                        id="student-name"
                        type="text"
                        prop:value=student_name
                        on:input=move |ev| set_student_name.set(event_target_value(&ev))
                    />
                    <button on:click=add_student>"Add student"</button>
                </div>
                <ul class="account-list">
                    {move || {
                        students
                            .get()
                            .into_iter()
                            .map(|student| {
                                let id = student.id;
                                let remove = move |_| {
                                    let gateway = StudentsGateway::new(session.client());
                                    spawn_local(async move {
                                        match gateway.delete(id).await {
                                            Ok(()) => {
                                                toasts.success("Student removed");
                                                reload_students();
                                            }
                                            Err(err) => toasts.error(err.message()),
                                        }
                                    });
                                };
                                let who = student.name.clone().unwrap_or_else(|| student.email.clone());
                                view! {
                                    <li class="account-item">
                                        <span>{who}</span>
                                        <button on:click=remove>"Remove"</button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </section>

            <section class="admin-section">
                <h2>"Teachers"</h2>
                <div class="account-form">
                    <label for="teacher-email">"Email"</label>
                    <input
                        id="teacher-email"
                        type="email"
                        prop:value=teacher_email
                        on:input=move |ev| set_teacher_email.set(event_target_value(&ev))
                    />
                    <label for="teacher-name">"Name"</label>
                    <input
                        id="teacher-name"
                        type="text"
                        prop:value=teacher_name
                        on:input=move |ev| set_teacher_name.set(event_target_value(&ev))
                    />
                    <button on:click=add_teacher>"Add teacher"</button>
                </div>
                <ul class="account-list">
                    {move || {
                        teachers
                            .get()
                            .into_iter()
                            .map(|teacher| {
                                let id = teacher.id;
                                let remove = move |_| {
                                    let gateway = TeachersGateway::new(session.client());
                                    spawn_local(async move {
                                        match gateway.delete(id).await {
                                            Ok(()) => {
                                                toasts.success("Teacher removed");
                                                reload_teachers();
                                            }
                                            Err(err) => toasts.error(err.message()),
                                        }
                                    });
                                };
                                let who = teacher.name.clone().unwrap_or_else(|| teacher.email.clone());
                                view! {
                                    <li class="account-item">
                                        <span>{who}</span>
                                        <button on:click=remove>"Remove"</button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </section>

            <section class="admin-section">
                <h2>"Enrollments"</h2>
                <div class="enroll-form">
                    <label for="enroll-student">"Student"</label>
                    <select
                        id="enroll-student"
                        on:change=move |ev| set_enroll_student.set(event_target_value(&ev))
                    >
                        <option value="">"Pick a student"</option>
                        {move || {
                            students
                                .get()
                                .into_iter()
                                .map(|student| {
                                    let label = student
                                        .name
                                        .clone()
                                        .unwrap_or_else(|| student.email.clone());
                                    view! {
                                        <option value=student.id.to_string()>{label}</option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                    <label for="enroll-course">"Course"</label>
                    <select
                        id="enroll-course"
                        on:change=move |ev| set_enroll_course.set(event_target_value(&ev))
                    >
                        <option value="">"Pick a course"</option>
                        {move || {
                            courses
                                .get()
                                .into_iter()
                                .map(|course| {
                                    view! {
                                        <option value=course.id.to_string()>{course.title.clone()}</option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                    <button on:click=enroll>"Enroll"</button>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_parses_from_select_values() {
        assert_eq!(parse_user_id("12"), Some(UserId::new(12)));
        assert!(parse_user_id("").is_none());
        assert!(parse_user_id("abc").is_none());
    }
}
