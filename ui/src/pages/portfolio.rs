use leptos::logging::log;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::content::{
    CONTACT, LINKEDIN_URL, PROFILE_IMAGE, PROJECTS, Project, SECTIONS, SERVICES, SITE_TITLE,
    SKILLS, SKILLS_IMAGE, SOCIALS, Section, Service, Skill,
};
use crate::reveal::{Motion, Reveal};

const SECTION: &str = "flex flex-col items-center justify-center min-h-screen w-full px-6 py-16 bg-gray-50";
const HEADING: &str = "text-5xl font-extrabold text-gray-800 mb-12 text-center";

#[component]
fn About(id: &'static str) -> impl IntoView {
    view! {
        <section id=id class="flex flex-col md:flex-row items-center justify-center min-h-screen w-full px-6 py-16">
            <div class="md:w-1/2 flex justify-center">
                <img
                    src=PROFILE_IMAGE
                    alt="Profile Picture"
                    width="320"
                    height="320"
                    class="w-60 h-60 md:w-80 md:h-80 rounded-full shadow-lg object-cover border-4 border-yellow-400 transition-transform duration-300 hover:scale-110"
                />
            </div>
            <div class="md:w-1/2 text-center md:text-left mt-6 md:mt-0">
                <h1 class="text-5xl font-bold text-blue-800 mb-4">"About Me"</h1>
                <p class="text-lg text-gray-600 leading-relaxed">
                    "Hi, I'm a passionate "
                    <span class="font-semibold text-yellow-500">"UI/UX Designer & Frontend Developer"</span>
                    " with a strong background in crafting visually appealing and user-friendly designs."
                </p>
                <p class="text-lg text-gray-600 leading-relaxed mt-3">
                    "I specialize in "
                    <span class="font-semibold text-yellow-500">"responsive web design, design systems, and user experience optimization"</span>
                    ". With expertise in tools like "
                    <span class="font-semibold text-blue-500">"Figma, Adobe XD, and React.js"</span>
                    ", I turn ideas into seamless digital experiences."
                </p>
                <p class="text-lg text-gray-600 leading-relaxed mt-3">
                    "Throughout my career, I've collaborated with startups and enterprises to build intuitive interfaces that enhance engagement and usability. "
                    "My goal is to bridge the gap between aesthetics and functionality, ensuring that every product I design is both beautiful and practical."
                </p>
                <div class="mt-6 flex flex-col md:flex-row gap-4">
                    <a
                        href=format!("#{}", Section::Contact.anchor())
                        class="bg-yellow-500 text-white px-6 py-3 rounded-lg text-lg font-semibold shadow-lg hover:bg-yellow-600 transition duration-300"
                    >"Let's Connect"</a>
                    <a
                        href=LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-blue-600 text-white px-6 py-3 rounded-lg text-lg font-semibold shadow-lg hover:bg-blue-700 transition duration-300 flex items-center"
                    >
                        <i class="devicon-linkedin-plain text-xl mr-2"></i>
                        "LinkedIn"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    view! {
        <div class="group relative flex flex-col items-center justify-center p-4 bg-white rounded-xl shadow-lg border border-gray-200 hover:shadow-2xl hover:scale-110 transition-all duration-300">
            <img src=skill.image alt=skill.name class="w-16 h-16 mb-2 object-contain"/>
            <span class="text-lg font-semibold text-gray-800">{skill.name}</span>
            <div class="absolute bottom-0 left-0 right-0 bg-black/80 text-white text-sm p-2 rounded-b-xl opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                {skill.blurb}
            </div>
        </div>
    }
}

#[component]
fn Skills(id: &'static str) -> impl IntoView {
    view! {
        <Reveal id=id class="flex flex-col md:flex-row items-center justify-center min-h-screen w-full px-6 py-16 bg-gray-50">
            <div class="md:w-1/2 flex justify-center">
                <img
                    src=SKILLS_IMAGE
                    alt="Skills"
                    class="w-60 h-60 md:w-80 md:h-80 rounded-xl shadow-xl object-cover border-4 border-transparent bg-gradient-to-r from-green-400 to-blue-500 p-1 transition-transform duration-300 hover:scale-110 hover:rotate-2"
                />
            </div>
            <div class="md:w-1/2 text-center md:text-left mt-6 md:mt-0">
                <Reveal motion=Motion::Drop>
                    <h2 class="text-5xl font-extrabold text-gray-800 mb-6">"Skills"</h2>
                </Reveal>
                <div class="grid grid-cols-2 gap-4">
                    {SKILLS.into_iter().map(|skill| view! { <SkillCard skill/> }).collect_view()}
                </div>
            </div>
        </Reveal>
    }
}

#[component]
fn ProjectRow(project: Project) -> impl IntoView {
    let row = if project.reversed { "md:flex-row-reverse" } else { "md:flex-row" };
    let tilt = if project.tilt < 0 { "hover:-rotate-2" } else { "hover:rotate-2" };

    view! {
        <div class=format!("flex flex-col {row} items-center gap-8")>
            <div class="md:w-1/2 text-center md:text-left">
                <h3 class=format!("text-3xl font-bold {}", project.accent.heading())>{project.title}</h3>
                <p class="text-lg text-gray-600 leading-relaxed mt-2">{project.summary}</p>
                <a
                    href=project.href
                    class=format!(
                        "inline-block mt-4 px-6 py-3 text-lg font-semibold text-white rounded-lg shadow-md \
                         transition-all duration-300 hover:shadow-lg {}",
                        project.accent.button()
                    )
                >"View Project"</a>
            </div>
            <img
                src=project.image
                alt=project.title
                class=format!(
                    "md:w-1/2 w-80 h-56 rounded-xl shadow-xl object-cover border-4 border-transparent \
                     bg-gradient-to-r {} p-1 transition-transform duration-300 hover:scale-110 {tilt}",
                    project.accent.frame()
                )
            />
        </div>
    }
}

#[component]
fn Showcase(id: &'static str) -> impl IntoView {
    view! {
        <Reveal id=id class=SECTION>
            <h2 class=HEADING>"My Portfolio"</h2>
            <div class="space-y-16">
                {PROJECTS.into_iter().map(|project| view! { <ProjectRow project/> }).collect_view()}
            </div>
        </Reveal>
    }
}

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <div class=format!(
            "bg-white p-6 rounded-lg shadow-lg flex flex-col items-center text-center border-b-4 {} \
             transition-transform duration-300 hover:scale-105",
            service.accent.border()
        )>
            <img src=service.image alt=service.title class="w-16 h-16 mb-4"/>
            <h3 class=format!("text-2xl font-semibold {}", service.accent.heading())>{service.title}</h3>
            <p class="text-gray-600 mt-2">{service.summary}</p>
        </div>
    }
}

#[component]
fn Services(id: &'static str) -> impl IntoView {
    view! {
        <Reveal id=id class=SECTION>
            <h2 class=HEADING>"My Services"</h2>
            <div class="grid md:grid-cols-2 gap-8">
                {SERVICES.into_iter().map(|service| view! { <ServiceCard service/> }).collect_view()}
            </div>
        </Reveal>
    }
}

const FIELD: &str = "w-full p-3 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
fn ContactForm() -> impl IntoView {
    // There is no endpoint behind the form; keep the page from reloading.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log!("contact form submitted, nothing to send it to");
    };

    view! {
        <Reveal motion=Motion::Grow once=true class="w-full max-w-lg">
            <form class="bg-white p-8 rounded-lg shadow-lg w-full" on:submit=on_submit>
                <div class="mb-6">
                    <label for="contact-name" class="block text-gray-700 font-semibold mb-2">"Name"</label>
                    <input id="contact-name" type="text" placeholder="Enter your name" class=FIELD/>
                </div>
                <div class="mb-6">
                    <label for="contact-email" class="block text-gray-700 font-semibold mb-2">"Email"</label>
                    <input id="contact-email" type="email" placeholder="Enter your email" class=FIELD/>
                </div>
                <div class="mb-6">
                    <label for="contact-message" class="block text-gray-700 font-semibold mb-2">"Message"</label>
                    <textarea id="contact-message" rows="4" placeholder="Write your message..." class=FIELD></textarea>
                </div>
                <button
                    type="submit"
                    class="w-full bg-blue-600 text-white py-3 rounded-md font-semibold hover:bg-blue-700 hover:scale-105 active:scale-95 transition-all duration-300"
                >"Send Message"</button>
            </form>
        </Reveal>
    }
}

#[component]
fn Contact(id: &'static str) -> impl IntoView {
    view! {
        <Reveal id=id class=SECTION>
            <h2 class="text-5xl font-extrabold text-gray-800 mb-6 text-center">"Get in Touch"</h2>
            <p class="text-lg text-gray-600 mb-10 text-center">
                "Let's collaborate! Fill out the form below or reach me via email & social media."
            </p>

            <ContactForm/>

            <div class="mt-8 text-center">
                <p class="text-gray-700">"📧 Email: " {CONTACT.email}</p>
                <p class="text-gray-700">"📍 Location: " {CONTACT.location}</p>
                <div class="mt-4 flex justify-center gap-6">
                    {SOCIALS
                        .into_iter()
                        .map(|s| view! {
                            <a
                                href=s.href
                                aria-label=s.label
                                class=format!("{} hover:scale-110 transition-transform", s.color)
                            >
                                <i class=format!("devicon-{} text-3xl", s.icon)></i>
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>
        </Reveal>
    }
}

fn section(section: Section) -> AnyView {
    let id = section.anchor();
    match section {
        Section::About => view! { <About id/> }.into_any(),
        Section::Skills => view! { <Skills id/> }.into_any(),
        Section::Portfolio => view! { <Showcase id/> }.into_any(),
        Section::Services => view! { <Services id/> }.into_any(),
        Section::Contact => view! { <Contact id/> }.into_any(),
    }
}

/// The whole single-page site below the header.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <Title text=SITE_TITLE/>
        <Meta name="description" content="Portfolio of a UI/UX designer and frontend developer."/>

        <main class="flex-grow bg-gray-200">
            {SECTIONS.into_iter().map(section).collect_view()}
        </main>
    }
}
