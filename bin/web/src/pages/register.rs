//! Registration page component.

use campus_access::Role;
use campus_api::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::session::use_session;
use crate::toast::use_toasts;

fn role_from_choice(choice: &str) -> Role {
    match choice {
        "teacher" => Role::Teacher,
        "secretary" => Role::Secretary,
        _ => Role::Student,
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

/// Registration page: account form posting to the register endpoint.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (password_confirm, set_password_confirm) = signal(String::new());
    let (role_choice, set_role_choice) = signal("student".to_string());
    let (study_year, set_study_year) = signal(String::new());
    let (position, set_position) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();

        let role = role_from_choice(&role_choice.get_untracked());
        let mut request = RegisterRequest::new(
            email.get_untracked(),
            password.get_untracked(),
            password_confirm.get_untracked(),
            role,
        )
        .with_name(non_empty(name.get_untracked()));

        request = match role {
            Role::Student => request.with_study_year(non_empty(study_year.get_untracked())),
            Role::Teacher => request.with_position(non_empty(position.get_untracked())),
            Role::Secretary => request,
        };

        spawn_local(async move {
            match session.register(&request).await {
                Ok(()) => {
                    toasts.success("Registration complete, you can now log in");
                    navigate("/login", Default::default());
                }
                Err(err) => toasts.error(err.message()),
            }
        });
    };

    view! {
        <div class="register-page">
            <div class="register-box">
                <h1>"Create a campus account"</h1>
                <form on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <label for="name">"Full name"</label>
                    <input
                        id="name"
                        type="text"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <label for="password-confirm">"Confirm password"</label>
                    <input
                        id="password-confirm"
                        type="password"
                        prop:value=password_confirm
                        on:input=move |ev| set_password_confirm.set(event_target_value(&ev))
                    />
                    <label for="role">"Role"</label>
                    <select
                        id="role"
                        on:change=move |ev| set_role_choice.set(event_target_value(&ev))
                    >
                        <option value="student" selected=true>"Student"</option>
                        <option value="teacher">"Teacher"</option>
                        <option value="secretary">"Secretary"</option>
                    </select>
                    {move || match role_from_choice(&role_choice.get()) {
                        Role::Student => view! {
                            <div class="role-fields">
                                <label for="study-year">"Study year"</label>
                                <input
                                    id="study-year"
                                    type="text"
                                    prop:value=study_year
                                    on:input=move |ev| set_study_year.set(event_target_value(&ev))
                                />
                            </div>
                        }
                            .into_any(),
                        Role::Teacher => view! {
                            <div class="role-fields">
                                <label for="position">"Position"</label>
                                <input
                                    id="position"
                                    type="text"
                                    prop:value=position
                                    on:input=move |ev| set_position.set(event_target_value(&ev))
                                />
                            </div>
                        }
                            .into_any(),
                        Role::Secretary => view! { <div class="role-fields"></div> }.into_any(),
                    }}
                    <button type="submit" class="register-button">"Register"</button>
                </form>
                <p>
                    "Already registered? "
                    <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_choice_parses_known_values() {
        assert_eq!(role_from_choice("teacher"), Role::Teacher);
        assert_eq!(role_from_choice("secretary"), Role::Secretary);
        assert_eq!(role_from_choice("student"), Role::Student);
    }

    #[test]
    fn role_choice_defaults_to_student() {
        assert_eq!(role_from_choice("anything-else"), Role::Student);
    }

    #[test]
    fn blank_optional_fields_become_none() {
        assert!(non_empty("   ".to_string()).is_none());
        assert_eq!(non_empty("L2".to_string()).as_deref(), Some("L2"));
    }
}
