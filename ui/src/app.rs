use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};
use leptos_meta::provide_meta_context;
use leptos_router::components::Router;

use crate::components::footer::Footer;
use crate::nav::Header;
use crate::routes::PageRoutes;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
      <Router>
        <div class="relative flex flex-col min-h-screen bg-gray-100">
          <Header/>
          <PageRoutes/>
          <Footer/>
        </div>
      </Router>
    }
}
