//! The role router: mounts exactly one dashboard subtree per session role.

use campus_access::AccessState;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::session::use_session;

pub mod secretary;
pub mod student;
pub mod teacher;

pub use secretary::SecretaryDashboard;
pub use student::StudentDashboard;
pub use teacher::TeacherDashboard;

/// Mounts the dashboard subtree matching the session's role claim.
///
/// Without a session there is nothing to mount: the only transition out of
/// anonymous is a fresh login, so the router sends the visitor there.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    view! {
        {move || match session.state() {
            AccessState::Anonymous => view! { <Redirect path="/login"/> }.into_any(),
            AccessState::Student => view! { <StudentDashboard/> }.into_any(),
            AccessState::Teacher => view! { <TeacherDashboard/> }.into_any(),
            AccessState::Secretary => view! { <SecretaryDashboard/> }.into_any(),
        }}
    }
}
