//! Teacher dashboard: own courses, rosters, grade entry, class sessions.

use campus_api::types::{
    ClassSession, ClassSessionDraft, Course, Enrollment, GradeDraft, Question,
};
use campus_api::{
    ClassSessionsGateway, CoursesGateway, EnrollmentsGateway, GradesGateway, QuestionsGateway,
};
use campus_core::CourseId;
use chrono::{NaiveDate, NaiveTime};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::session::use_session;
use crate::toast::use_toasts;

/// Teacher dashboard subtree.
#[component]
pub fn TeacherDashboard() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    let Some(current) = session.current_untracked() else {
        return view! { <p>"No active session."</p> }.into_any();
    };
    let teacher_id = current.claims().id;

    let courses = RwSignal::new(Vec::<Course>::new());
    let selected = RwSignal::new(Option::<CourseId>::None);
    let roster = RwSignal::new(Vec::<Enrollment>::new());
    let class_sessions = RwSignal::new(Vec::<ClassSession>::new());
    let questions = RwSignal::new(Vec::<Question>::new());

    // Shared grade form inputs, applied per roster row.
    let (exam_kind, set_exam_kind) = signal(String::new());
    let (grade_value, set_grade_value) = signal(String::new());
    let (grade_comment, set_grade_comment) = signal(String::new());

    // Session scheduling form.
    let (session_date, set_session_date) = signal(String::new());
    let (session_time, set_session_time) = signal(String::new());
    let (session_duration, set_session_duration) = signal(String::new());
    let (session_room, set_session_room) = signal(String::new());

    Effect::new(move || {
        let gateway = CoursesGateway::new(session.client());
        spawn_local(async move {
            match gateway.list_by_teacher(teacher_id).await {
                Ok(items) => courses.set(items),
                Err(err) => toasts.error(err.message()),
            }
        });
    });

    let reload_sessions = move |course: CourseId| {
        let gateway = ClassSessionsGateway::new(session.client());
        spawn_local(async move {
            match gateway.list_by_course(course).await {
                Ok(items) => class_sessions.set(items),
                Err(err) => toasts.error(err.message()),
            }
        });
    };

    Effect::new(move || {
        let Some(course) = selected.get() else {
            return;
        };
        let gateway = EnrollmentsGateway::new(session.client());
        spawn_local(async move {
            match gateway.list_by_course(course).await {
                Ok(items) => roster.set(items),
                Err(err) => toasts.error(err.message()),
            }
        });
        reload_sessions(course);
    });

    let schedule_session = move |_| {
        let Some(course) = selected.get_untracked() else {
            return;
        };
        let date = NaiveDate::parse_from_str(&session_date.get_untracked(), "%Y-%m-%d");
        let start_time = NaiveTime::parse_from_str(&session_time.get_untracked(), "%H:%M");
        let (Ok(date), Ok(start_time)) = (date, start_time) else {
            toasts.error("Enter the session date as YYYY-MM-DD and the time as HH:MM");
            return;
        };

        let draft = ClassSessionDraft {
            course,
            date,
            start_time,
            duration_minutes: session_duration.get_untracked().parse().unwrap_or(60),
            room: session_room.get_untracked(),
        };
        let gateway = ClassSessionsGateway::new(session.client());
        spawn_local(async move {
            match gateway.create(&draft).await {
                Ok(_) => {
                    toasts.success("Session scheduled");
                    reload_sessions(course);
                }
                Err(err) => toasts.error(err.message()),
            }
        });
    };

    view! {
        <div class="teacher-dashboard">
            <h1>"My teaching"</h1>

            <section class="courses-section">
                <h2>"My courses"</h2>
                {move || {
                    let items = courses.get();
                    if items.is_empty() {
                        view! { <p class="empty-state">"No courses assigned."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="course-list">
                                {items
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

            {move || {
                selected
                    .get()
                    .map(|course| {
                        view! {
                            <section class="roster-section">
                                <h2>"Roster"</h2>
                                <div class="grade-form">
                                    <label for="exam-kind">"Kind"</label>
                                    <input
                                        id="exam-kind"
                                        type="text"
                                        prop:value=exam_kind
                                        on:input=move |ev| set_exam_kind.set(event_target_value(&ev))
                                    />
                                    <label for="grade-value">"Grade"</label>
                                    <input
                                        id="grade-value"
                                        type="text"
                                        prop:value=grade_value
                                        on:input=move |ev| set_grade_value.set(event_target_value(&ev))
                                    />
                                    <label for="grade-comment">"Comment"</label>
                                    <input
                                        id="grade-comment"
                                        type="text"
                                        prop:value=grade_comment
                                        on:input=move |ev| set_grade_comment.set(event_target_value(&ev))
                                    />
                                </div>
                                <ul class="roster-list">
                                    {roster
                                        .get()
                                        .into_iter()
                                        .map(|enrollment| {
                                            let student = enrollment.student.id;
                                            let who = enrollment
                                                .student
                                                .name
                                                .clone()
                                                .unwrap_or_else(|| enrollment.student.email.clone());
                                            let record = move |_| {
                                                let Ok(value) = grade_value.get_untracked().parse::<f64>()
                                                else {
                                                    toasts.error("Enter the grade as a number");
                                                    return;
                                                };
                                                let draft = GradeDraft {
                                                    student,
                                                    course,
                                                    exam_kind: exam_kind.get_untracked(),
                                                    value,
                                                    comment: grade_comment.get_untracked(),
                                                };
                                                let gateway = GradesGateway::new(session.client());
                                                spawn_local(async move {
                                                    match gateway.create(&draft).await {
                                                        Ok(_) => toasts.success("Grade recorded"),
                                                        Err(err) => toasts.error(err.message()),
                                                    }
                                                });
                                            };
                                            view! {
                                                <li class="roster-item">
                                                    <span>{who}</span>
                                                    <button on:click=record>"Record grade"</button>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </section>

                            <section class="sessions-section">
                                <h2>"Sessions"</h2>
                                <div class="session-form">
                                    <label for="session-date">"Date"</label>
                                    <input
                                        id="session-date"
                                        type="date"
                                        prop:value=session_date
                                        on:input=move |ev| set_session_date.set(event_target_value(&ev))
                                    />
                                    <label for="session-time">"Start"</label>
                                    <input
                                        id="session-time"
                                        type="time"
                                        prop:value=session_time
                                        on:input=move |ev| set_session_time.set(event_target_value(&ev))
                                    />
                                    <label for="session-duration">"Minutes"</label>
                                    <input
                                        id="session-duration"
                                        type="number"
                                        prop:value=session_duration
                                        on:input=move |ev| set_session_duration.set(event_target_value(&ev))
                                    />
                                    <label for="session-room">"Room"</label>
                                    <input
                                        id="session-room"
                                        type="text"
                                        prop:value=session_room
                                        on:input=move |ev| set_session_room.set(event_target_value(&ev))
                                    />
                                    <button on:click=schedule_session>"Schedule"</button>
                                </div>
                                <ul class="session-list">
                                    {class_sessions
                                        .get()
                                        .into_iter()
                                        .map(|class_session| {
                                            let class_session_id = class_session.id;
                                            let load_questions = move |_| {
                                                let gateway = QuestionsGateway::new(session.client());
                                                spawn_local(async move {
                                                    match gateway
                                                        .list_by_class_session(class_session_id)
                                                        .await
                                                    {
                                                        Ok(items) => questions.set(items),
                                                        Err(err) => toasts.error(err.message()),
                                                    }
                                                });
                                            };
                                            view! {
                                                <li class="session-item">
                                                    <span>
                                                        {format!(
                                                            "{} {} (room {})",
                                                            class_session.date,
                                                            class_session.start_time,
                                                            class_session.room,
                                                        )}
                                                    </span>
                                                    <button on:click=load_questions>"Questions"</button>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                                <ul class="question-list">
                                    {move || {
                                        questions
                                            .get()
                                            .into_iter()
                                            .map(|q| view! { <li class="question-item">{q.content}</li> })
                                            .collect_view()
                                    }}
                                </ul>
                            </section>
                        }
                    })
            }}
        </div>
    }
    .into_any()
}
