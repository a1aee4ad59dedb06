use serde::Serialize;

/// Page sections, each rendered with its anchor as element id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Section {
    About,
    Skills,
    Portfolio,
    Services,
    Contact,
}

impl Section {
    pub const fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Portfolio => "portfolio",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Portfolio => "Portfolio",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }

    pub const fn nav_item(self) -> NavItem {
        NavItem {
            label: self.label(),
            anchor: self.anchor(),
        }
    }
}

/// Top to bottom, as [`crate::pages::portfolio::PortfolioPage`] renders them.
pub const SECTIONS: [Section; 5] = [
    Section::About,
    Section::Skills,
    Section::Portfolio,
    Section::Services,
    Section::Contact,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    /// Id of the section element the link scrolls to.
    pub anchor: &'static str,
}

/// Header links, one per section in page order.
pub const NAV_ITEMS: [NavItem; SECTIONS.len()] = nav_items();

const fn nav_items() -> [NavItem; SECTIONS.len()] {
    let mut out = [Section::About.nav_item(); SECTIONS.len()];
    let mut i = 0;
    while i < SECTIONS.len() {
        out[i] = SECTIONS[i].nav_item();
        i += 1;
    }
    out
}

/// URL prefix the static host serves images from.
pub const ASSET_PREFIX: &str = "/assets/";

pub const SITE_TITLE: &str = "My Portfolio";

pub const PROFILE_IMAGE: &str = "/assets/aziz.jpeg";
pub const SKILLS_IMAGE: &str = "/assets/skills.jpeg";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/your-linkedin-profile";

#[derive(Clone, Debug, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub image: &'static str,
    /// Shown over the card on hover.
    pub blurb: &'static str,
}

pub const SKILLS: [Skill; 4] = [
    Skill {
        name: "Python",
        image: "/assets/phyton.jpeg",
        blurb: "Bahasa pemrograman untuk AI & Data Science.",
    },
    Skill {
        name: "SQL",
        image: "/assets/sql.jpeg",
        blurb: "Bahasa untuk mengelola dan mengolah database.",
    },
    Skill {
        name: "React.js",
        image: "/assets/react.jpeg",
        blurb: "Library JavaScript untuk membangun UI modern.",
    },
    Skill {
        name: "Data Science",
        image: "/assets/datascience.jpeg",
        blurb: "Analisis data menggunakan Machine Learning.",
    },
];

/// Tailwind colour family used for a card's accents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Red,
}

impl Accent {
    pub fn heading(self) -> &'static str {
        match self {
            Accent::Blue => "text-blue-700",
            Accent::Green => "text-green-700",
            Accent::Purple => "text-purple-700",
            Accent::Red => "text-red-700",
        }
    }

    pub fn button(self) -> &'static str {
        match self {
            Accent::Blue => "bg-blue-600 hover:bg-blue-700",
            Accent::Green => "bg-green-600 hover:bg-green-700",
            Accent::Purple => "bg-purple-600 hover:bg-purple-700",
            Accent::Red => "bg-red-600 hover:bg-red-700",
        }
    }

    pub fn border(self) -> &'static str {
        match self {
            Accent::Blue => "border-blue-500",
            Accent::Green => "border-green-500",
            Accent::Purple => "border-purple-500",
            Accent::Red => "border-red-500",
        }
    }

    pub fn frame(self) -> &'static str {
        match self {
            Accent::Blue => "from-blue-400 to-purple-500",
            Accent::Green => "from-green-400 to-teal-500",
            Accent::Purple => "from-purple-400 to-pink-500",
            Accent::Red => "from-red-400 to-orange-500",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub href: &'static str,
    pub image: &'static str,
    pub accent: Accent,
    /// Image on the left on wide screens.
    pub reversed: bool,
    /// Hover rotation in degrees.
    pub tilt: i8,
}

pub const PROJECTS: [Project; 2] = [
    Project {
        title: "E-Commerce Website",
        summary: "Built an interactive and scalable e-commerce platform using React.js, Tailwind CSS, and Firebase.",
        href: "/ecommerce-project",
        image: "/assets/ecommerce.jpeg",
        accent: Accent::Blue,
        reversed: false,
        tilt: 2,
    },
    Project {
        title: "Data Science Dashboard",
        summary: "Developed a Data Science Dashboard using Python, Pandas, and Streamlit for real-time data visualization.",
        href: "/data-dashboard",
        image: "/assets/dashboard.jpeg",
        accent: Accent::Green,
        reversed: true,
        tilt: -2,
    },
];

#[derive(Clone, Debug, Serialize)]
pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub accent: Accent,
}

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Web Development",
        summary: "Building responsive and scalable websites with React.js, Next.js, and Tailwind CSS.",
        image: "/assets/web.jpeg",
        accent: Accent::Purple,
    },
    Service {
        title: "Data Visualization",
        summary: "Transforming data into insightful visuals using Python, Power BI, and Tableau.",
        image: "/assets/visual.jpeg",
        accent: Accent::Blue,
    },
    Service {
        title: "UI/UX Design",
        summary: "Creating intuitive and user-friendly designs with Figma & Adobe XD.",
        image: "/assets/ui.jpeg",
        accent: Accent::Green,
    },
    Service {
        title: "AI Development",
        summary: "Developing AI models using Python, TensorFlow, and OpenAI.",
        image: "/assets/ai.jpeg",
        accent: Accent::Red,
    },
];

#[derive(Clone, Debug, Serialize)]
pub struct ContactInfo {
    pub email: &'static str,
    pub location: &'static str,
}

pub const CONTACT: ContactInfo = ContactInfo {
    email: "yourname@email.com",
    location: "Your City, Your Country",
};

#[derive(Clone, Debug, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    /// devicon class suffix
    pub icon: &'static str,
    pub color: &'static str,
}

pub const SOCIALS: [SocialLink; 3] = [
    SocialLink {
        label: "LinkedIn",
        href: "#",
        icon: "linkedin-plain",
        color: "text-blue-600",
    },
    SocialLink {
        label: "GitHub",
        href: "#",
        icon: "github-original",
        color: "text-gray-800",
    },
    SocialLink {
        label: "Twitter",
        href: "#",
        icon: "twitter-original",
        color: "text-blue-500",
    },
];
