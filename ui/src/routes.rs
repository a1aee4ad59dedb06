use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::pages::portfolio::PortfolioPage;

/// Sections are reached by anchor; `/` is the only page.
#[component]
pub fn PageRoutes() -> impl IntoView {
    view! {
      <Routes fallback=|| view! {
        <p class="min-h-screen pt-24 text-center text-gray-700">"404 – not found"</p>
      }>
        <Route path=path!("") view=PortfolioPage/>
      </Routes>
    }
}
