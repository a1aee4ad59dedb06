use chrono::{Datelike, Local};
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};

use crate::content::SITE_TITLE;

pub fn copyright(year: i32) -> String {
    format!("© {year} {SITE_TITLE}. All Rights Reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white text-black text-center p-5">
            <p>{copyright(Local::now().year())}</p>
        </footer>
    }
}
