//! Student dashboard: enrolled courses, grades, exercises, questions.

use std::collections::HashSet;

use campus_api::types::{
    ClassSession, Course, Enrollment, Exercise, Grade, QuestionDraft, SubmissionDraft,
};
use campus_api::{
    ClassSessionsGateway, CoursesGateway, EnrollmentsGateway, ExercisesGateway, GradesGateway,
    QuestionsGateway,
};
use campus_core::CourseId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::session::use_session;
use crate::toast::use_toasts;

/// Student dashboard subtree.
#[component]
pub fn StudentDashboard() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    let Some(current) = session.current_untracked() else {
        return view! { <p>"No active session."</p> }.into_any();
    };
    let student_id = current.claims().id;
    let greeting = current
        .claims()
        .name
        .clone()
        .map(|name| format!("Welcome, {name}!"))
        .unwrap_or_else(|| "Welcome!".to_string());

    let catalog = RwSignal::new(Vec::<Course>::new());
    let enrollments = RwSignal::new(Vec::<Enrollment>::new());
    let grades = RwSignal::new(Vec::<Grade>::new());
    let selected = RwSignal::new(Option::<CourseId>::None);
    let exercises = RwSignal::new(Vec::<Exercise>::new());
    let class_sessions = RwSignal::new(Vec::<ClassSession>::new());
    let (file_url, set_file_url) = signal(String::new());
    let (question, set_question) = signal(String::new());

    // Initial load: catalog, enrollments, and grades in parallel.
    Effect::new(move || {
        let api = session.client();

        let courses = CoursesGateway::new(api.clone());
        spawn_local(async move {
            match courses.list().await {
                Ok(items) => catalog.set(items),
                Err(err) => toasts.error(err.message()),
            }
        });

        let enrolled = EnrollmentsGateway::new(api.clone());
        spawn_local(async move {
            match enrolled.list_by_student(student_id).await {
                Ok(items) => enrollments.set(items),
                Err(err) => toasts.error(err.message()),
            }
        });

        let graded = GradesGateway::new(api);
        spawn_local(async move {
            match graded.list_by_student(student_id).await {
                Ok(items) => grades.set(items),
                Err(err) => toasts.error(err.message()),
            }
        });
    });

    // Selecting a course loads its exercises and sessions.
    Effect::new(move || {
        let Some(course) = selected.get() else {
            return;
        };
        let api = session.client();

        let published = ExercisesGateway::new(api.clone());
        spawn_local(async move {
            match published.list_by_course(course).await {
                Ok(items) => exercises.set(items),
                Err(err) => toasts.error(err.message()),
            }
        });

        let scheduled = ClassSessionsGateway::new(api);
        spawn_local(async move {
            match scheduled.list_by_course(course).await {
                Ok(items) => class_sessions.set(items),
                Err(err) => toasts.error(err.message()),
            }
        });
    });

    let enrolled_courses = move || {
        let enrolled: HashSet<CourseId> = enrollments.get().iter().map(|e| e.course).collect();
        catalog
            .get()
            .into_iter()
            .filter(|course| enrolled.contains(&course.id))
            .collect::<Vec<_>>()
    };

    let course_title = move |id: CourseId| {
        catalog
            .get()
            .iter()
            .find(|course| course.id == id)
            .map(|course| course.title.clone())
            .unwrap_or_else(|| format!("course {id}"))
    };

    view! {
        <div class="student-dashboard">
            <h1>{greeting}</h1>

            <section class="courses-section">
                <h2>"My courses"</h2>
                {move || {
                    let courses = enrolled_courses();
                    if courses.is_empty() {
                        view! { <p class="empty-state">"No enrollments yet."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="course-list">
                                {courses
                                    .into_iter()
                                    .map(|course| {
                                        let id = course.id;
                                        view! {
                                            <li class="course-item">
                                                <button
                                                    class="course-link"
                                                    on:click=move |_| selected.set(Some(id))
                                                >
                                                    {course.title.clone()}
                                                </button>
                                                <span class="course-meta">
                                                    {format!("{} - {}", course.semester, course.kind)}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                }}
            </section>

            <section class="grades-section">
                <h2>"My grades"</h2>
                {move || {
                    let items = grades.get();
                    if items.is_empty() {
                        view! { <p class="empty-state">"No grades recorded yet."</p> }.into_any()
                    } else {
                        view! {
                            <table class="grades-table">
                                <thead>
                                    <tr>
                                        <th>"Course"</th>
                                        <th>"Kind"</th>
                                        <th>"Grade"</th>
                                        <th>"Comment"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {items
                                        .into_iter()
                                        .map(|grade| {
                                            view! {
                                                <tr>
                                                    <td>{course_title(grade.course)}</td>
                                                    <td>{grade.exam_kind}</td>
                                                    <td>{format!("{:.2}", grade.value)}</td>
                                                    <td>{grade.comment}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }
                }}
            </section>

            {move || {
                selected
                    .get()
                    .map(|course| {
                        view! {
                            <section class="course-detail">
                                <h2>{course_title(course)}</h2>

                                <h3>"Exercises"</h3>
                                <label for="file-url">"Submission link"</label>
                                <input
                                    id="file-url"
                                    type="url"
                                    prop:value=file_url
                                    on:input=move |ev| set_file_url.set(event_target_value(&ev))
                                />
                                <ul class="exercise-list">
                                    {exercises
                                        .get()
                                        .into_iter()
                                        .map(|exercise| {
                                            let exercise_id = exercise.id;
                                            let hand_in = move |_| {
                                                let draft = SubmissionDraft {
                                                    student: student_id,
                                                    exercise: exercise_id,
                                                    file_url: file_url.get_untracked(),
                                                };
                                                let gateway = ExercisesGateway::new(session.client());
                                                spawn_local(async move {
                                                    match gateway.submit(&draft).await {
                                                        Ok(_) => toasts.success("Submission handed in"),
                                                        Err(err) => toasts.error(err.message()),
                                                    }
                                                });
                                            };
                                            view! {
                                                <li class="exercise-item">
                                                    <span class="exercise-title">{exercise.title.clone()}</span>
                                                    <span class="exercise-due">
                                                        {format!("due {}", exercise.due_at.format("%Y-%m-%d"))}
                                                    </span>
                                                    <button on:click=hand_in>"Hand in"</button>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>

                                <h3>"Sessions"</h3>
                                <label for="question">"Question"</label>
                                <textarea
                                    id="question"
                                    prop:value=question
                                    on:input=move |ev| set_question.set(event_target_value(&ev))
                                ></textarea>
                                <ul class="session-list">
                                    {class_sessions
                                        .get()
                                        .into_iter()
                                        .map(|class_session| {
                                            let class_session_id = class_session.id;
                                            let ask = move |_| {
                                                let draft = QuestionDraft {
                                                    student: student_id,
                                                    class_session: class_session_id,
                                                    content: question.get_untracked(),
                                                };
                                                let gateway = QuestionsGateway::new(session.client());
                                                spawn_local(async move {
                                                    match gateway.post(&draft).await {
                                                        Ok(_) => toasts.success("Question posted"),
                                                        Err(err) => toasts.error(err.message()),
                                                    }
                                                });
                                            };
                                            view! {
                                                <li class="session-item">
                                                    <span>
                                                        {format!(
                                                            "{} {} ({} min, room {})",
                                                            class_session.date,
                                                            class_session.start_time,
                                                            class_session.duration_minutes,
                                                            class_session.room,
                                                        )}
                                                    </span>
                                                    <button on:click=ask>"Ask"</button>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </section>
                        }
                    })
            }}
        </div>
    }
    .into_any()
}
