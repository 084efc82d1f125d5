use crate::domain::a002_organization::ui::list::OrganizationList;
use crate::domain::a002_organization::ui::registration::RegistrationForm;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <main class="registration-page">
                <RegistrationForm />
                <OrganizationList />
            </main>
        </ConfigProvider>
    }
}
