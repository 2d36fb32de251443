//! Login page component.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::session::use_session;
use crate::toast::use_toasts;

/// Login page: credentials form posting to the token endpoint.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        let email = email.get_untracked();
        let password = password.get_untracked();

        spawn_local(async move {
            match session.login(&email, &password).await {
                Ok(role) => {
                    toasts.success("Signed in");
                    navigate(role.entry_path(), Default::default());
                }
                Err(err) => toasts.error(err.message()),
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-box">
                <h1>"Log in to campus"</h1>
                <form on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button type="submit" class="login-button">"Log in"</button>
                </form>
                <p>
                    "No account yet? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
