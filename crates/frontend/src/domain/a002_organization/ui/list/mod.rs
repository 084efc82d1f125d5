mod fetcher;

pub use fetcher::{ListingFetcher, ListingRenderer, MSG_LISTING_FAILED};

use crate::domain::a002_organization::api::HttpOrganizationApi;
use crate::shared::icons::icon;
use contracts::domain::a002_organization::OrganizationRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

/// Signals backing the `apifetch` container
#[derive(Clone, Copy)]
pub struct OrganizationListViewModel {
    pub items: RwSignal<Vec<OrganizationRecord>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
}

impl OrganizationListViewModel {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    pub fn fetch_command(&self) {
        let fetcher = ListingFetcher::new(HttpOrganizationApi::from_config(), *self);
        spawn_local(async move {
            // Failures are rendered and logged by the fetcher.
            let _ = fetcher.fetch().await;
        });
    }
}

impl Default for OrganizationListViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingRenderer for OrganizationListViewModel {
    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn show_organizations(&self, organizations: &[OrganizationRecord]) {
        self.error.set(None);
        self.items.set(organizations.to_vec());
    }

    fn show_listing_error(&self, message: &str) {
        self.items.set(Vec::new());
        self.error.set(Some(message.to_string()));
    }
}

#[component]
pub fn OrganizationList() -> impl IntoView {
    let vm = OrganizationListViewModel::new();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h2 class="header__title">{icon("users")}{"Registered organizations"}</h2>
                </div>
                <div class="header__actions">
                    <button
                        id="apiFetchBtn"
                        class="button button--secondary"
                        on:click=move |_| vm.fetch_command()
                        disabled=move || vm.loading.get()
                    >
                        {icon("refresh")}
                        {move || if vm.loading.get() { "Loading..." } else { "Show organizations" }}
                    </button>
                </div>
            </div>

            <Show when=move || vm.loading.get()>
                <Spinner />
            </Show>

            <div id="apifetch" class="flex flex-wrap">
                {move || match vm.error.get() {
                    Some(e) => view! {
                        <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mt-4">
                            {e}
                        </div>
                    }
                    .into_any(),
                    None => vm
                        .items
                        .get()
                        .into_iter()
                        .map(|org| view! {
                            <div class="company-details p-4 border rounded-md m-2 w-full text-center shadow-lg">
                                {org.display_line()}
                            </div>
                        })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn acme() -> OrganizationRecord {
        OrganizationRecord {
            name: "Acme".into(),
            email: "a@b.com".into(),
            ..OrganizationRecord::default()
        }
    }

    #[test]
    fn test_error_replaces_container_content() {
        Owner::new().with(|| {
            let vm = OrganizationListViewModel::new();
            vm.show_organizations(&[acme()]);
            assert_eq!(vm.items.get_untracked(), vec![acme()]);
            assert_eq!(vm.error.get_untracked(), None);

            vm.show_listing_error(MSG_LISTING_FAILED);

            assert!(vm.items.get_untracked().is_empty());
            assert_eq!(vm.error.get_untracked().as_deref(), Some(MSG_LISTING_FAILED));
        });
    }

    #[test]
    fn test_successful_reload_clears_previous_error() {
        Owner::new().with(|| {
            let vm = OrganizationListViewModel::new();
            vm.show_listing_error(MSG_LISTING_FAILED);
            vm.set_loading(true);

            vm.show_organizations(&[acme(), acme()]);
            vm.set_loading(false);

            assert_eq!(vm.error.get_untracked(), None);
            assert_eq!(vm.items.get_untracked().len(), 2);
            assert!(!vm.loading.get_untracked());
        });
    }
}
