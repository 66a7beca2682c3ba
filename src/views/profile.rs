use crate::Route;
use crate::api::ApiClient;
use crate::error::{ProfileError, ValidationErrors, describe};
use crate::model::{AccountType, Currency};
use crate::profile::{FormField, ProfileForm, ProfileGate, submit_profile};
use crate::session::Session;
use crate::toast::Toaster;
use dioxus::prelude::*;

fn field_id(field: FormField) -> &'static str {
    match field {
        FormField::Name => "name",
        FormField::Phone => "phone",
        FormField::Address => "address",
        FormField::DateOfBirth => "dateOfBirth",
        FormField::AccountType => "accountType",
        FormField::InitialBalance => "initialBalance",
        FormField::Currency => "currency",
    }
}

// collects profile and first account, then creates both and opens the dashboard
#[component]
pub fn CompleteProfile() -> Element {
    let session = use_context::<Session>();
    let api = use_context::<ApiClient>();
    let toaster = use_context::<Toaster>();
    let nav = navigator();

    let gate = use_hook({
        let session = session.clone();
        move || ProfileGate::check(&session)
    });
    let values = use_signal(ProfileForm::default);
    let mut errors = use_signal(ValidationErrors::default);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        if gate == ProfileGate::RedirectToLogin {
            log::warn!("No auth token, sending user to login");
            toaster.error(
                "Authentication required",
                "Please log in to complete your profile.",
            );
            nav.replace(Route::Login {});
        }
    });

    if !gate.shows_form() {
        return rsx! {};
    }

    let handle_submit = move |event: FormEvent| {
        event.prevent_default();
        let session = session.clone();
        let api = api.clone();
        async move {
            if submitting() {
                return;
            }
            submitting.set(true);
            let draft = values.read().clone();
            let outcome = submit_profile(&draft, &session, &*api).await;
            submitting.set(false);

            match outcome {
                Ok(_) => {
                    errors.set(ValidationErrors::default());
                    toaster.success(
                        "Profile and account created",
                        "Your profile and account have been created successfully.",
                    );
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    log::error!("Profile completion failed: {}", e);
                    let title = match &e {
                        ProfileError::Validation(invalid) => {
                            errors.set(invalid.clone());
                            "Validation error"
                        }
                        ProfileError::MissingAuth => {
                            errors.set(ValidationErrors::default());
                            "Authentication required"
                        }
                        ProfileError::Request { .. } => {
                            errors.set(ValidationErrors::default());
                            "Profile or account creation failed"
                        }
                    };
                    toaster.error(title, &describe(&e));
                }
            }
        }
    };

    let invalid = errors.read().clone();
    let account_types: Vec<(&'static str, &'static str)> = AccountType::ALL
        .iter()
        .map(|t| (t.code(), t.label()))
        .collect();
    let currencies: Vec<(&'static str, &'static str)> =
        Currency::ALL.iter().map(|c| (c.code(), c.code())).collect();

    rsx! {
        div { id: "profile-page", class: "centered-page",
            div { class: "card profile-card",
                div { class: "card-header",
                    Link { to: Route::Dashboard {}, class: "brand brand-large",
                        span { class: "brand-icon", "🛡" }
                        span { "VaultX" }
                    }
                    h1 { "Complete Your Profile" }
                    p { class: "muted",
                        "Please provide additional information to complete your profile and create an account."
                    }
                }
                form { novalidate: true, onsubmit: handle_submit,
                    div { class: "form-grid",
                        TextField {
                            field: FormField::Name,
                            input_type: "text",
                            placeholder: "John Doe",
                            form: values,
                            error: invalid.for_field(FormField::Name),
                        }
                        TextField {
                            field: FormField::Phone,
                            input_type: "tel",
                            placeholder: "+12345678901",
                            form: values,
                            error: invalid.for_field(FormField::Phone),
                        }
                        TextField {
                            field: FormField::Address,
                            input_type: "text",
                            placeholder: "123 Main St, City, Country",
                            form: values,
                            error: invalid.for_field(FormField::Address),
                            wide: true,
                        }
                        TextField {
                            field: FormField::DateOfBirth,
                            input_type: "date",
                            placeholder: "",
                            form: values,
                            error: invalid.for_field(FormField::DateOfBirth),
                        }
                        SelectField {
                            field: FormField::AccountType,
                            options: account_types,
                            form: values,
                            error: invalid.for_field(FormField::AccountType),
                        }
                        TextField {
                            field: FormField::InitialBalance,
                            input_type: "number",
                            placeholder: "1000.00",
                            form: values,
                            error: invalid.for_field(FormField::InitialBalance),
                        }
                        SelectField {
                            field: FormField::Currency,
                            options: currencies,
                            form: values,
                            error: invalid.for_field(FormField::Currency),
                        }
                    }
                    div { class: "card-footer column",
                        button {
                            class: "button button-primary button-wide",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() {
                                span { class: "spinner spinner-small" }
                                "Creating profile..."
                            } else {
                                "Complete profile →"
                            }
                        }
                        p { class: "muted small",
                            "You can update this information later from your account settings."
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TextField(
    field: FormField,
    input_type: &'static str,
    placeholder: &'static str,
    form: Signal<ProfileForm>,
    #[props(!optional)] error: Option<String>,
    #[props(default)] wide: bool,
) -> Element {
    let mut form = form;
    let id = field_id(field);
    let label = field.label();
    let value = form.read().value(field).to_string();
    let class = if wide { "field field-wide" } else { "field" };
    let input_class = if error.is_some() { "input input-invalid" } else { "input" };

    rsx! {
        div { class,
            label { r#for: id, "{label}" }
            input {
                id,
                name: id,
                r#type: input_type,
                placeholder,
                value,
                class: input_class,
                oninput: move |event| form.write().set(field, event.value()),
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}

#[component]
fn SelectField(
    field: FormField,
    options: Vec<(&'static str, &'static str)>,
    form: Signal<ProfileForm>,
    #[props(!optional)] error: Option<String>,
) -> Element {
    let mut form = form;
    let id = field_id(field);
    let label = field.label();
    let current = form.read().value(field).to_string();

    rsx! {
        div { class: "field",
            label { r#for: id, "{label}" }
            select {
                id,
                name: id,
                class: "input",
                onchange: move |event| form.write().set(field, event.value()),
                for (code , text) in options {
                    option { key: "{code}", value: code, selected: current == code, "{text}" }
                }
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}
