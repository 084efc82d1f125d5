use super::view_model::RegistrationViewModel;
use crate::shared::icons::icon;
use contracts::domain::a002_organization::Field;
use leptos::prelude::*;

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-gray-300 p-2";
const ERROR_CLASS: &str = "error-message text-red-500 text-sm mt-1";

fn caption(field: Field) -> &'static str {
    match field {
        Field::CompanyName => "Company name",
        Field::CommercialRegNumber => "Commercial registration number",
        Field::PhoneNumber => "Phone number",
        Field::Email => "Email",
        Field::Password => "Password",
        Field::ConfirmPassword => "Confirm password",
        Field::City => "City",
        Field::Region => "Region",
        Field::ZipCode => "Zip code",
        Field::BusinessType => "Business type",
        Field::Terms => "I accept the terms and conditions",
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        Field::Password | Field::ConfirmPassword => "password",
        Field::PhoneNumber => "tel",
        _ => "text",
    }
}

fn text_field(vm: RegistrationViewModel, field: Field) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field.id()>{caption(field)}</label>
            <input
                type=input_type(field)
                id=field.id()
                name=field.id()
                class=move || {
                    if vm.error_for(field).is_some() {
                        format!("{} border-red-500", INPUT_CLASS)
                    } else {
                        INPUT_CLASS.to_string()
                    }
                }
                prop:value=move || vm.form.with(|f| f.value(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| f.set(field, value));
                }
            />
            {move || vm.error_for(field).map(|e| view! { <div class=ERROR_CLASS>{e}</div> })}
        </div>
    }
}

#[component]
pub fn RegistrationForm() -> impl IntoView {
    let vm = RegistrationViewModel::new();

    view! {
        <div class="details-container registration-form">
            <div class="details-header">
                <h2>{"Register your organization"}</h2>
            </div>

            <form
                id="registrationForm"
                class="details-form"
                novalidate=true
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.submit_command();
                }
            >
                {Field::REQUIRED.into_iter().map(|field| text_field(vm, field)).collect_view()}

                <div class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        id=Field::Terms.id()
                        name=Field::Terms.id()
                        class=move || {
                            if vm.error_for(Field::Terms).is_some() { "border-red-500" } else { "" }
                        }
                        prop:checked=move || vm.form.with(|f| f.terms)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            vm.form.update(|f| f.terms = checked);
                        }
                    />
                    <label for=Field::Terms.id()>{caption(Field::Terms)}</label>
                    {move || vm.error_for(Field::Terms).map(|e| view! { <div class=ERROR_CLASS>{e}</div> })}
                </div>

                <div class="details-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || vm.is_busy()>
                        {icon("save")}
                        {move || if vm.is_busy() { "Submitting..." } else { "Register" }}
                    </button>
                </div>

                {move || {
                    vm.banners
                        .get()
                        .into_iter()
                        .map(|banner| {
                            let class = banner.css_class();
                            view! { <div class=class>{banner.message}</div> }
                        })
                        .collect_view()
                }}
            </form>
        </div>
    }
}
