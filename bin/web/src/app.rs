//! Main Leptos application component and routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    hooks::use_navigate,
    path,
};

use crate::pages::{DashboardPage, LoginPage, RegisterPage};
use crate::session::{provide_session, use_session};
use crate::toast::{ToastHost, provide_toasts, use_toasts};

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toasts();
    provide_session();

    view! {
        <Title text="campus"/>
        <Router>
            <Header/>
            <ToastHost/>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomeRedirect/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// The root path only redirects: to the dashboard when a session exists,
/// to login otherwise.
#[component]
fn HomeRedirect() -> impl IntoView {
    let session = use_session();

    view! {
        {move || {
            if session.state().is_authenticated() {
                view! { <Redirect path="/dashboard"/> }.into_any()
            } else {
                view! { <Redirect path="/login"/> }.into_any()
            }
        }}
    }
}

/// Header with the app name and the session controls.
#[component]
fn Header() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        session.logout();
        toasts.success("Signed out");
        navigate("/login", Default::default());
    };

    view! {
        <header class="header">
            <div class="header-left">
                <a href="/" class="logo">"campus"</a>
            </div>
            <div class="header-right">
                {move || {
                    match session.current() {
                        Some(current) => {
                            let who = current
                                .claims()
                                .name
                                .clone()
                                .or_else(|| current.claims().email.clone())
                                .unwrap_or_else(|| current.role().to_string());
                            view! {
                                <div class="user-menu">
                                    <span class="user-name">{who}</span>
                                    <button class="logout-button" on:click=on_logout.clone()>
                                        "Log out"
                                    </button>
                                </div>
                            }
                                .into_any()
                        }
                        None => view! {
                            <a href="/login" class="login-button">"Log in"</a>
                        }
                            .into_any(),
                    }
                }}
            </div>
        </header>
    }
}
